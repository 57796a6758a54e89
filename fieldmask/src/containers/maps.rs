//! Traversal for map containers (values only).

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use crate::{engine::Masker, record::Maskable};

impl<K, V, S> Maskable for HashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Maskable,
    S: BuildHasher + Clone,
{
    fn mask_with(&self, masker: &Masker) -> Self {
        // NOTE: keys are cloned, not masked, so the masked map keeps the same
        // entries.
        let mut result = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        result.extend(
            self.iter()
                .map(|(key, value)| (key.clone(), value.mask_with(masker))),
        );
        result
    }
}

impl<K, V> Maskable for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Maskable,
{
    fn mask_with(&self, masker: &Masker) -> Self {
        self.iter()
            .map(|(key, value)| (key.clone(), value.mask_with(masker)))
            .collect()
    }
}
