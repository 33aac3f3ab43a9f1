use std::num::NonZeroUsize;

use crate::catalog::Catalog;

/// Position inside a catalog. Always in `0..len` for the length it is
/// rotated against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotationState {
    index: usize,
}

impl RotationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance one step, wrapping from the last item to the first.
    pub fn next(&mut self, len: NonZeroUsize) -> usize {
        self.index = (self.index + 1) % len.get();
        self.index
    }

    /// Step back one item, wrapping from the first item to the last. The
    /// length is added before reducing so the unsigned result never underflows.
    pub fn previous(&mut self, len: NonZeroUsize) -> usize {
        let len = len.get();
        self.index = (self.index + len - 1) % len;
        self.index
    }
}

/// A catalog paired with the rotation that browses it. Keeping both together
/// means the index is only ever reduced by the length of the list it indexes.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    catalog: Catalog<T>,
    rotation: RotationState,
}

impl<T> Carousel<T> {
    pub fn new(catalog: Catalog<T>) -> Self {
        Self {
            catalog,
            rotation: RotationState::new(),
        }
    }

    pub fn next(&mut self) -> &T {
        let index = self.rotation.next(self.catalog.len());
        &self.catalog[index]
    }

    pub fn previous(&mut self) -> &T {
        let index = self.rotation.previous(self.catalog.len());
        &self.catalog[index]
    }

    pub fn current(&self) -> &T {
        &self.catalog[self.rotation.index()]
    }

    pub fn index(&self) -> usize {
        self.rotation.index()
    }

    pub fn len(&self) -> usize {
        self.catalog.len().get()
    }

    pub fn catalog(&self) -> &Catalog<T> {
        &self.catalog
    }
}
