use std::{
    collections::HashMap,
    fmt::{self, Debug, Display},
    hash::Hash,
};

use parking_lot::RwLock;

use crate::{collection::BiMap, error::CollisionError};

/// A one-to-one map between `F` and `B` that can be shared across threads.
///
/// One reader-writer lock guards both directions, so readers never see a
/// pair on one side without its inverse on the other. Reads take the lock
/// shared, writes take it exclusive. Wrap it in an `Arc` to share it.
pub struct SyncBiMap<F, B> {
    inner: RwLock<BiMap<F, B>>,
}

impl<F, B> SyncBiMap<F, B> {
    pub fn new() -> Self {
        SyncBiMap {
            inner: RwLock::new(BiMap::new()),
        }
    }

    /// Number of pairs. Both directions always hold the same count.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Calls `visitor` once per pair while holding the shared lock.
    ///
    /// The order is unspecified. `visitor` must not call back into this map:
    /// a write would deadlock against the lock held here, and a nested read
    /// can deadlock once a writer is queued.
    pub fn for_each<V>(&self, mut visitor: V)
    where
        V: FnMut(&F, &B),
    {
        let inner = self.inner.read();

        for (f, b) in inner.iter() {
            visitor(f, b);
        }
    }
}

impl<F, B> Default for SyncBiMap<F, B> {
    fn default() -> Self {
        SyncBiMap::new()
    }
}

impl<F, B> SyncBiMap<F, B>
where
    F: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
{
    /// Builds a map holding every pair of `initial`.
    ///
    /// No collision checks run here. If two keys share a value, the later
    /// one wins the reverse entry and the two sides disagree.
    pub fn with_initial(initial: HashMap<F, B>) -> Self {
        let inner = BiMap::with_initial(initial);

        log::trace!("seeded bimap with {} pairs", inner.len());

        SyncBiMap {
            inner: RwLock::new(inner),
        }
    }

    pub fn get_front(&self, key: &F) -> Option<B> {
        self.inner.read().get_by_front(key).cloned()
    }

    pub fn get_back(&self, key: &B) -> Option<F> {
        self.inner.read().get_by_back(key).cloned()
    }

    /// Pairs `key -> value` unless `key` is already a front key or `value`
    /// is already a back key. Re-setting an identical pair is a collision.
    pub fn set_front(&self, key: F, value: B) -> Result<(), CollisionError> {
        let mut inner = self.inner.write();

        match inner.insert_front(key, value) {
            Ok(()) => {
                log::trace!("front insert accepted, {} pairs", inner.len());

                Ok(())
            }
            Err(e) => {
                log::debug!("front insert rejected: {}", e);

                Err(e)
            }
        }
    }

    /// Mirror of [`set_front`](Self::set_front) keyed by the back side.
    pub fn set_back(&self, key: B, value: F) -> Result<(), CollisionError> {
        let mut inner = self.inner.write();

        match inner.insert_back(key, value) {
            Ok(()) => {
                log::trace!("back insert accepted, {} pairs", inner.len());

                Ok(())
            }
            Err(e) => {
                log::debug!("back insert rejected: {}", e);

                Err(e)
            }
        }
    }

    /// Copy of the front direction. Later writes do not show up in it.
    pub fn front(&self) -> HashMap<F, B> {
        self.inner.read().front()
    }

    /// Copy of the back direction.
    pub fn back(&self) -> HashMap<B, F> {
        self.inner.read().back()
    }
}

impl<F, B> SyncBiMap<F, B>
where
    F: Eq + Hash,
    B: Eq + Hash,
{
    /// Removes `key` and its partner. Returns the partner, or `None` when
    /// `key` was absent and nothing changed.
    pub fn delete_front(&self, key: &F) -> Option<B> {
        let removed = self.inner.write().remove_by_front(key);

        if removed.is_some() {
            log::trace!("front delete removed a pair");
        }

        removed
    }

    pub fn delete_back(&self, key: &B) -> Option<F> {
        let removed = self.inner.write().remove_by_back(key);

        if removed.is_some() {
            log::trace!("back delete removed a pair");
        }

        removed
    }

    pub fn contains_front(&self, key: &F) -> bool {
        self.inner.read().contains_front(key)
    }

    pub fn contains_back(&self, key: &B) -> bool {
        self.inner.read().contains_back(key)
    }
}

impl<F, B> Clone for SyncBiMap<F, B>
where
    F: Clone,
    B: Clone,
{
    fn clone(&self) -> Self {
        SyncBiMap {
            inner: RwLock::new(self.inner.read().clone()),
        }
    }
}

impl<F, B> From<HashMap<F, B>> for SyncBiMap<F, B>
where
    F: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
{
    fn from(initial: HashMap<F, B>) -> Self {
        SyncBiMap::with_initial(initial)
    }
}

impl<F, B> FromIterator<(F, B)> for SyncBiMap<F, B>
where
    F: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (F, B)>>(iter: I) -> Self {
        let mut inner = BiMap::new();

        inner.seed(iter);

        SyncBiMap {
            inner: RwLock::new(inner),
        }
    }
}

impl<F, B> Display for SyncBiMap<F, B>
where
    F: Display,
    B: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let inner = self.inner.read();

        let pairs = inner
            .iter()
            .map(|(k, v)| format!("{}:{}", k, v))
            .collect::<Vec<String>>();

        write!(f, "map[{}]", pairs.join(" "))
    }
}

impl<F, B> Debug for SyncBiMap<F, B>
where
    F: Debug,
    B: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let inner = self.inner.read();

        f.debug_map().entries(inner.iter()).finish()
    }
}
