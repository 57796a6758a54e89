//! Traversal for wrapper and sequence containers.
//!
//! Pointer-like wrappers (`Option`, `Box`, `Arc`, `Rc`) forward `IS_RECORD`
//! so a wrapped record is still a valid root. Shared pointers are never
//! aliased: the masked copy gets a fresh allocation.

use std::{collections::VecDeque, rc::Rc, sync::Arc};

use crate::{engine::Masker, record::Maskable};

impl<T> Maskable for Option<T>
where
    T: Maskable,
{
    const IS_RECORD: bool = T::IS_RECORD;

    fn mask_with(&self, masker: &Masker) -> Self {
        self.as_ref().map(|value| value.mask_with(masker))
    }
}

impl<T> Maskable for Box<T>
where
    T: Maskable,
{
    const IS_RECORD: bool = T::IS_RECORD;

    fn mask_with(&self, masker: &Masker) -> Self {
        Box::new((**self).mask_with(masker))
    }
}

impl<T> Maskable for Arc<T>
where
    T: Maskable,
{
    const IS_RECORD: bool = T::IS_RECORD;

    fn mask_with(&self, masker: &Masker) -> Self {
        Arc::new((**self).mask_with(masker))
    }
}

impl<T> Maskable for Rc<T>
where
    T: Maskable,
{
    const IS_RECORD: bool = T::IS_RECORD;

    fn mask_with(&self, masker: &Masker) -> Self {
        Rc::new((**self).mask_with(masker))
    }
}

impl<T, E> Maskable for Result<T, E>
where
    T: Maskable,
    E: Maskable,
{
    fn mask_with(&self, masker: &Masker) -> Self {
        match self {
            Ok(value) => Ok(value.mask_with(masker)),
            Err(err) => Err(err.mask_with(masker)),
        }
    }
}

impl<T> Maskable for Vec<T>
where
    T: Maskable,
{
    fn mask_with(&self, masker: &Masker) -> Self {
        self.iter().map(|value| value.mask_with(masker)).collect()
    }
}

impl<T> Maskable for VecDeque<T>
where
    T: Maskable,
{
    fn mask_with(&self, masker: &Masker) -> Self {
        self.iter().map(|value| value.mask_with(masker)).collect()
    }
}

impl<T, const N: usize> Maskable for [T; N]
where
    T: Maskable,
{
    fn mask_with(&self, masker: &Masker) -> Self {
        self.each_ref().map(|value| value.mask_with(masker))
    }
}
