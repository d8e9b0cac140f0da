use itertools::Itertools;

use crate::weight::Weight;

/// What the user has typed and what is loaded on each side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    target_weight_text: String,
    loaded_plates: Vec<Weight>,
}

impl Session {
    #[must_use]
    pub fn target_weight_text(&self) -> &str {
        &self.target_weight_text
    }

    /// The typed target, if it reads as a number.
    #[must_use]
    pub fn target_weight(&self) -> Option<Weight> {
        self.target_weight_text.parse().ok()
    }

    #[must_use]
    pub fn loaded_plates(&self) -> &[Weight] {
        &self.loaded_plates
    }

    pub(crate) fn set_target_weight_text(&mut self, text: impl Into<String>) {
        self.target_weight_text = text.into();
    }

    pub(crate) fn load(&mut self, plates: Vec<Weight>) {
        self.loaded_plates = plates.into_iter().sorted_by(|a, b| b.cmp(a)).collect();
    }

    pub(crate) fn push(&mut self, plate: Weight) {
        let at = self.loaded_plates.partition_point(|loaded| *loaded >= plate);
        self.loaded_plates.insert(at, plate);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<Weight> {
        (index < self.loaded_plates.len()).then(|| self.loaded_plates.remove(index))
    }

    pub(crate) fn clear(&mut self) {
        self.target_weight_text.clear();
        self.loaded_plates.clear();
    }
}
