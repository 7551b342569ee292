use dashmap::DashMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// Extension helpers for `DashMap` that hand back owned values.
///
/// `DashMap::get()` and `DashMap::iter()` return guards that hold a shard
/// lock. These helpers clone what they need so the guard drops before the
/// caller does anything else with the connection.
pub trait DashMapExt<K, V> {
    /// Clone the value for `key`.
    fn get_cloned<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone;

    /// Clone every value.
    fn values_cloned(&self) -> Vec<V>
    where
        V: Clone;
}

impl<K, V> DashMapExt<K, V> for DashMap<K, V>
where
    K: Eq + Hash,
{
    fn get_cloned<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.get(key).map(|r| r.value().clone())
    }

    fn values_cloned(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|e| e.value().clone()).collect()
    }
}
