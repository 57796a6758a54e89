//! Traversal for set containers.

use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

use crate::{engine::Masker, record::Maskable};

impl<T, S> Maskable for HashSet<T, S>
where
    T: Maskable + Hash + Eq,
    S: BuildHasher + Clone,
{
    fn mask_with(&self, masker: &Masker) -> Self {
        // NOTE: masking can make distinct elements equal, shrinking the set.
        let mut result = HashSet::with_capacity_and_hasher(self.len(), self.hasher().clone());
        result.extend(self.iter().map(|value| value.mask_with(masker)));
        result
    }
}

impl<T> Maskable for BTreeSet<T>
where
    T: Maskable + Ord,
{
    fn mask_with(&self, masker: &Masker) -> Self {
        self.iter().map(|value| value.mask_with(masker)).collect()
    }
}
