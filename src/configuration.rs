use crate::{bar::Bar, unit::Unit, weight::Weight};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Configuration {
    pub bar: Bar,
    pub use_collars: bool,
}

impl Configuration {
    #[must_use]
    pub fn new(bar: Bar, use_collars: bool) -> Self {
        Configuration { bar, use_collars }
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.bar.unit()
    }

    #[must_use]
    pub fn collar_weight(&self) -> Weight {
        if self.use_collars {
            self.unit().collar_weight()
        } else {
            Weight::ZERO
        }
    }

    /// Everything on the bar that is not a plate.
    #[must_use]
    pub fn base_weight(&self) -> Weight {
        self.bar.weight() + self.collar_weight()
    }

    /// Total lifted with `plates` loaded on each side.
    #[must_use]
    pub fn total_weight(&self, plates: &[Weight]) -> Weight {
        self.base_weight() + plates.iter().sum::<Weight>() * 2
    }
}
