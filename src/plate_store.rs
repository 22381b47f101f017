use std::fmt::Display;

use tracing::debug;

use crate::{loader_error::LoaderError, plate::Plate};

/// Points at one rendered plate. Only valid for the generation it was rendered at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RemoveHandle {
    index: usize,
    generation: u64,
}

impl RemoveHandle {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Display for RemoveHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}@{}", self.index, self.generation)
    }
}

/// Plates on one sleeve, heaviest (innermost) first.
#[derive(Clone, Debug, Default)]
pub struct PlateStore {
    plates: Vec<Plate>,
    generation: u64,
}

impl PlateStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, plate: Plate) {
        self.plates.push(plate);
        self.plates.sort_unstable_by(|a, b| b.cmp(a));
        self.bump();
        debug!(%plate, len = self.plates.len(), "plate added");
    }

    /// Removes the lightest, outermost plate. Empty stores are left alone.
    pub fn remove_last(&mut self) -> Option<Plate> {
        let plate = self.plates.pop()?;
        self.bump();
        debug!(%plate, len = self.plates.len(), "outermost plate removed");
        Some(plate)
    }

    ///
    /// # Errors
    /// If `index` is not a position in the current sleeve.
    ///
    pub fn remove_at(&mut self, index: usize) -> Result<Plate, LoaderError> {
        if index >= self.plates.len() {
            return Err(LoaderError::IndexOutOfRange {
                index,
                len: self.plates.len(),
            });
        }
        let plate = self.plates.remove(index);
        self.bump();
        debug!(%plate, index, len = self.plates.len(), "plate removed");
        Ok(plate)
    }

    ///
    /// # Errors
    /// If the handle was issued before the latest mutation.
    ///
    pub fn remove(&mut self, handle: RemoveHandle) -> Result<Plate, LoaderError> {
        if handle.generation != self.generation {
            return Err(LoaderError::StaleHandle {
                handle,
                generation: self.generation,
            });
        }
        self.remove_at(handle.index)
    }

    pub fn reset(&mut self) {
        self.plates.clear();
        self.bump();
        debug!("sleeve cleared");
    }

    #[must_use]
    pub fn handle(&self, index: usize) -> Option<RemoveHandle> {
        (index < self.plates.len()).then_some(RemoveHandle {
            index,
            generation: self.generation,
        })
    }

    #[must_use]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Weight of one sleeve in grams.
    #[must_use]
    pub fn sum_grams(&self) -> u64 {
        self.plates.iter().map(|p| u64::from(p.weight())).sum()
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}
