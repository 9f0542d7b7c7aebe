use std::{collections::HashMap, hash::Hash};

use crate::error::CollisionError;

/// Two hash maps kept as exact inverses of each other.
///
/// `front` maps `F -> B` and `back` maps `B -> F`. Every write touches both
/// maps, so a pair is either present on both sides or on neither. This type
/// does no locking; see [`SyncBiMap`](crate::SyncBiMap) for the shared form.
#[derive(Clone)]
pub struct BiMap<F, B> {
    front: HashMap<F, B>,
    back: HashMap<B, F>,
}

impl<F, B> BiMap<F, B> {
    pub fn new() -> Self {
        BiMap {
            front: HashMap::new(),
            back: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.front.len()
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_empty()
    }

    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, F, B> {
        self.front.iter()
    }
}

impl<F, B> Default for BiMap<F, B> {
    fn default() -> Self {
        BiMap::new()
    }
}

impl<F, B> BiMap<F, B>
where
    F: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
{
    /// Copies every pair of `initial` into both sides without collision checks.
    ///
    /// A value repeated in `initial` overwrites the earlier reverse entry.
    pub fn with_initial(initial: HashMap<F, B>) -> Self {
        let mut map = BiMap::new();

        map.seed(initial);

        map
    }

    pub(crate) fn seed<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (F, B)>,
    {
        for (f, b) in pairs {
            self.back.insert(b.clone(), f.clone());

            self.front.insert(f, b);
        }
    }

    pub fn insert_front(&mut self, key: F, value: B) -> Result<(), CollisionError> {
        if self.front.contains_key(&key) {
            return Err(CollisionError::Key);
        }

        if self.back.contains_key(&value) {
            return Err(CollisionError::Value);
        }

        self.back.insert(value.clone(), key.clone());

        self.front.insert(key, value);

        Ok(())
    }

    pub fn insert_back(&mut self, key: B, value: F) -> Result<(), CollisionError> {
        if self.back.contains_key(&key) {
            return Err(CollisionError::Key);
        }

        if self.front.contains_key(&value) {
            return Err(CollisionError::Value);
        }

        self.front.insert(value.clone(), key.clone());

        self.back.insert(key, value);

        Ok(())
    }

    pub fn front(&self) -> HashMap<F, B> {
        self.front.clone()
    }

    pub fn back(&self) -> HashMap<B, F> {
        self.back.clone()
    }
}

impl<F, B> BiMap<F, B>
where
    F: Eq + Hash,
    B: Eq + Hash,
{
    pub fn remove_by_front(&mut self, key: &F) -> Option<B> {
        let value = self.front.remove(key)?;

        self.back.remove(&value);

        Some(value)
    }

    pub fn remove_by_back(&mut self, key: &B) -> Option<F> {
        let value = self.back.remove(key)?;

        self.front.remove(&value);

        Some(value)
    }

    pub fn contains_front(&self, key: &F) -> bool {
        self.front.contains_key(key)
    }

    pub fn contains_back(&self, key: &B) -> bool {
        self.back.contains_key(key)
    }
}

impl<F, B> BiMap<F, B>
where
    F: Eq + Hash,
{
    pub fn get_by_front(&self, key: &F) -> Option<&B> {
        self.front.get(key)
    }
}

impl<F, B> BiMap<F, B>
where
    B: Eq + Hash,
{
    pub fn get_by_back(&self, key: &B) -> Option<&F> {
        self.back.get(key)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::BiMap;
    use crate::error::CollisionError;

    #[test]
    fn insert_front_fills_both_sides() {
        let mut map = BiMap::new();

        map.insert_front("a", 1).unwrap();

        assert_eq!(map.get_by_front(&"a"), Some(&1));
        assert_eq!(map.get_by_back(&1), Some(&"a"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn insert_back_fills_both_sides() {
        let mut map = BiMap::new();

        map.insert_back(1, "a").unwrap();

        assert_eq!(map.get_by_front(&"a"), Some(&1));
        assert_eq!(map.get_by_back(&1), Some(&"a"));
    }

    #[test]
    fn key_collision_is_reported_before_value_collision() {
        let mut map = BiMap::new();

        map.insert_front("a", 1).unwrap();
        map.insert_front("b", 2).unwrap();

        assert_eq!(map.insert_front("a", 2), Err(CollisionError::Key));
        assert_eq!(map.insert_front("c", 1), Err(CollisionError::Value));
        assert_eq!(map.insert_back(1, "c"), Err(CollisionError::Key));
        assert_eq!(map.insert_back(3, "a"), Err(CollisionError::Value));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn remove_drops_the_partner() {
        let mut map = BiMap::new();

        map.insert_front("a", 1).unwrap();
        map.insert_front("b", 2).unwrap();

        assert_eq!(map.remove_by_front(&"a"), Some(1));
        assert!(!map.contains_back(&1));

        assert_eq!(map.remove_by_back(&2), Some("b"));
        assert!(!map.contains_front(&"b"));

        assert!(map.is_empty());
        assert_eq!(map.remove_by_front(&"a"), None);
    }

    #[test]
    fn seeding_trusts_the_input() {
        let initial = HashMap::from([("a", 1), ("b", 1)]);

        let map = BiMap::with_initial(initial);

        assert_eq!(map.front().len(), 2);
        assert_eq!(map.back().len(), 1);
    }
}
