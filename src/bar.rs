use std::fmt::Display;

use crate::{loader_error::LoaderError, unit::Unit, weight::Weight};

/// A bar from the fixed set its unit offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bar {
    weight: Weight,
    unit: Unit,
}

impl Bar {
    /// # Errors
    /// If `unit` offers no bar of this weight.
    pub fn new(weight: Weight, unit: Unit) -> Result<Self, LoaderError> {
        if unit.bar_weights().contains(&weight) {
            Ok(Bar { weight, unit })
        } else {
            Err(LoaderError::UnsupportedBar(weight, unit))
        }
    }

    #[must_use]
    pub fn standard(unit: Unit) -> Self {
        Bar {
            weight: unit.default_bar_weight(),
            unit,
        }
    }

    #[must_use]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// The bar in the same slot of `unit`'s selector.
    #[must_use]
    pub fn in_unit(&self, unit: Unit) -> Self {
        let slot = self
            .unit
            .bar_weights()
            .iter()
            .position(|weight| *weight == self.weight);

        match slot.and_then(|slot| unit.bar_weights().get(slot)) {
            Some(weight) => Bar {
                weight: *weight,
                unit,
            },
            None => Bar::standard(unit),
        }
    }
}

impl Default for Bar {
    fn default() -> Self {
        Bar::standard(Unit::default())
    }
}

impl Display for Bar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{} bar", self.weight, self.unit)
    }
}
