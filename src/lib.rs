//! A one-to-one map between two sets of values, readable in both directions
//! and safe to share between threads.
//!
//! ```
//! use sync_bimap::{CollisionError, SyncBiMap};
//!
//! let map = SyncBiMap::new();
//!
//! map.set_front("alice", 7).unwrap();
//!
//! assert_eq!(map.get_back(&7), Some("alice"));
//! assert_eq!(map.set_front("bob", 7), Err(CollisionError::Value));
//! ```

mod collection;

pub use collection::BiMap;

mod error;

pub use error::CollisionError;

mod sync_map;

pub use sync_map::SyncBiMap;
