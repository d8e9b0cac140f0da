use tracing::warn;

use crate::{controller::Controller, unit::Unit, weight::Weight};

/// The controller as seen from Swift. Weights cross as `f64`; failures come
/// back as `false` with the state untouched.
#[derive(Default)]
pub struct PlateCalculator {
    controller: Controller,
}

impl PlateCalculator {
    #[must_use]
    pub fn new(use_pounds: bool) -> Self {
        let mut calculator = PlateCalculator::default();
        calculator.set_use_pounds(use_pounds);
        calculator
    }

    pub fn set_target_weight(&mut self, text: String) {
        self.controller.set_target_weight(text);
    }

    pub fn set_bar_weight(&mut self, weight: f64) -> bool {
        Weight::from_f64(weight).is_some_and(|weight| {
            self.controller
                .set_bar_weight(weight)
                .inspect_err(|err| warn!(%err, "bar rejected"))
                .is_ok()
        })
    }

    pub fn set_use_collars(&mut self, use_collars: bool) {
        self.controller.set_use_collars(use_collars);
    }

    pub fn set_use_pounds(&mut self, use_pounds: bool) {
        self.controller
            .set_unit(if use_pounds { Unit::Lb } else { Unit::Kg });
    }

    pub fn add_plate(&mut self, weight: f64) -> bool {
        Weight::from_f64(weight).is_some_and(|weight| {
            self.controller
                .add_plate(weight)
                .inspect_err(|err| warn!(%err, "plate rejected"))
                .is_ok()
        })
    }

    pub fn remove_plate(&mut self, index: usize) -> bool {
        self.controller
            .remove_plate(index)
            .inspect_err(|err| warn!(%err, "removal rejected"))
            .is_ok()
    }

    pub fn clear(&mut self) {
        self.controller.clear();
    }

    #[must_use]
    pub fn target_weight_text(&self) -> String {
        self.controller.target_weight_text().to_string()
    }

    #[must_use]
    pub fn loaded_plates(&self) -> Vec<f64> {
        self.controller.loaded_plates().iter().map(Weight::as_f64).collect()
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.controller.total_weight().as_f64()
    }

    #[must_use]
    pub fn catalog(&self) -> Vec<f64> {
        self.controller
            .unit()
            .catalog()
            .iter()
            .map(|plate| plate.weight().as_f64())
            .collect()
    }

    #[must_use]
    pub fn bar_weights(&self) -> Vec<f64> {
        self.controller
            .unit()
            .bar_weights()
            .iter()
            .map(Weight::as_f64)
            .collect()
    }
}

#[swift_bridge::bridge]
mod ffi {
    extern "Rust" {
        type PlateCalculator;

        #[swift_bridge(init)]
        fn new(use_pounds: bool) -> PlateCalculator;

        fn set_target_weight(self: &mut PlateCalculator, text: String);
        fn set_bar_weight(self: &mut PlateCalculator, weight: f64) -> bool;
        fn set_use_collars(self: &mut PlateCalculator, use_collars: bool);
        fn set_use_pounds(self: &mut PlateCalculator, use_pounds: bool);
        fn add_plate(self: &mut PlateCalculator, weight: f64) -> bool;
        fn remove_plate(self: &mut PlateCalculator, index: usize) -> bool;
        fn clear(self: &mut PlateCalculator);

        fn target_weight_text(self: &PlateCalculator) -> String;
        fn loaded_plates(self: &PlateCalculator) -> Vec<f64>;
        fn total_weight(self: &PlateCalculator) -> f64;
        fn catalog(self: &PlateCalculator) -> Vec<f64>;
        fn bar_weights(self: &PlateCalculator) -> Vec<f64>;
    }
}
