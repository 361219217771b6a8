//! Get-or-create access for hash maps.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Returns the value stored under `key`, inserting `V::default()` first if
/// the key is absent.
///
/// The returned reference is the stored entry, so mutations through it are
/// seen by later lookups of the same key.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use utilkit::get_or_create;
///
/// let mut visits: HashMap<&str, u32> = HashMap::new();
/// *get_or_create(&mut visits, "home") += 1;
/// *get_or_create(&mut visits, "home") += 1;
/// assert_eq!(visits["home"], 2);
/// ```
pub fn get_or_create<K, V, S>(map: &mut HashMap<K, V, S>, key: K) -> &mut V
where
    K: Eq + Hash,
    V: Default,
    S: BuildHasher,
{
    get_or_create_with(map, key, V::default)
}

/// Like [`get_or_create`], but builds missing values with `create`.
pub fn get_or_create_with<K, V, S, F>(map: &mut HashMap<K, V, S>, key: K, create: F) -> &mut V
where
    K: Eq + Hash,
    S: BuildHasher,
    F: FnOnce() -> V,
{
    match map.entry(key) {
        Entry::Occupied(entry) => entry.into_mut(),
        Entry::Vacant(entry) => {
            tracing::trace!("Inserting new map entry");
            entry.insert(create())
        }
    }
}
