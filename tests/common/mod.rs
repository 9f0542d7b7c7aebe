#![allow(dead_code)]

pub mod env;

use std::{collections::HashMap, hash::Hash, sync::Once};

use log::LevelFilter;
use simple_logger::SimpleLogger;

static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(|| {
        env::init();

        let level = env::get_or(env::STRESS_LOG_LEVEL, LevelFilter::Warn);

        SimpleLogger::new().with_level(level).init().ok();
    });
}

/// Panics unless `front` and `back` are exact inverses of each other.
pub fn assert_inverse<F, B>(front: &HashMap<F, B>, back: &HashMap<B, F>)
where
    F: Eq + Hash + std::fmt::Debug,
    B: Eq + Hash + std::fmt::Debug,
{
    assert_eq!(front.len(), back.len(), "sides hold different pair counts");

    for (f, b) in front.iter() {
        assert_eq!(back.get(b), Some(f), "{:?} -> {:?} has no inverse", f, b);
    }
}
