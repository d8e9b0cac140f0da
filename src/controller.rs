use tracing::debug;

use crate::{
    allocation::allocate,
    bar::Bar,
    configuration::Configuration,
    loader_error::LoaderError,
    session::Session,
    unit::Unit,
    weight::Weight,
};

/// Keeps the loaded plates, the typed target and the bar setup in step with
/// each other. Every method leaves the state consistent before it returns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Controller {
    configuration: Configuration,
    session: Session,
}

impl Controller {
    #[must_use]
    pub fn new(configuration: Configuration) -> Self {
        Controller {
            configuration,
            session: Session::default(),
        }
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.configuration.unit()
    }

    #[must_use]
    pub fn target_weight_text(&self) -> &str {
        self.session.target_weight_text()
    }

    #[must_use]
    pub fn target_weight(&self) -> Option<Weight> {
        self.session.target_weight()
    }

    #[must_use]
    pub fn loaded_plates(&self) -> &[Weight] {
        self.session.loaded_plates()
    }

    #[must_use]
    pub fn total_weight(&self) -> Weight {
        self.configuration.total_weight(self.session.loaded_plates())
    }

    /// Text that does not read as a number is kept but leaves the plates alone.
    pub fn set_target_weight(&mut self, text: impl Into<String>) {
        self.session.set_target_weight_text(text);

        match self.session.target_weight() {
            Some(target) => {
                self.session.load(allocate(target, &self.configuration));
                debug!(%target, plates = ?self.loaded_plates(), "target set");
            }
            None => debug!(text = self.target_weight_text(), "target not a number"),
        }
    }

    ///
    /// # Errors
    /// If the current unit offers no bar of this weight.
    ///
    pub fn set_bar_weight(&mut self, weight: Weight) -> Result<(), LoaderError> {
        let bar = Bar::new(weight, self.unit())?;
        self.configuration.bar = bar;
        debug!(%bar, "bar selected");
        self.reallocate();
        Ok(())
    }

    pub fn set_use_collars(&mut self, use_collars: bool) {
        self.configuration.use_collars = use_collars;
        debug!(use_collars, "collars set");
        self.reallocate();
    }

    pub fn toggle_collars(&mut self) {
        self.set_use_collars(!self.configuration.use_collars);
    }

    /// Plates from the old catalog never survive a unit change: they are
    /// reallocated from the target, or dropped when there is none.
    pub fn set_unit(&mut self, unit: Unit) {
        if unit == self.unit() {
            return;
        }

        self.configuration.bar = self.configuration.bar.in_unit(unit);
        debug!(%unit, bar = %self.configuration.bar, "unit changed");

        if !self.reallocate() {
            self.session.load(Vec::new());
        }
    }

    pub fn toggle_unit(&mut self) {
        self.set_unit(self.unit().other());
    }

    ///
    /// # Errors
    /// If the current catalog has no plate of this weight.
    ///
    pub fn add_plate(&mut self, weight: Weight) -> Result<(), LoaderError> {
        let plate = self
            .unit()
            .plate(weight)
            .ok_or(LoaderError::UnknownPlate(weight, self.unit()))?;

        self.session.push(plate.weight());
        let total = self.total_weight();
        self.session.set_target_weight_text(total.to_string());
        debug!(plate = %plate, %total, "plate added");
        Ok(())
    }

    ///
    /// # Errors
    /// If no plate is loaded at `index`.
    ///
    pub fn remove_plate(&mut self, index: usize) -> Result<Weight, LoaderError> {
        let plate = self
            .session
            .remove(index)
            .ok_or(LoaderError::PlateIndexOutOfRange(index))?;

        if self.session.loaded_plates().is_empty() {
            self.session.set_target_weight_text(String::new());
        } else {
            self.session
                .set_target_weight_text(self.total_weight().to_string());
        }
        debug!(%plate, index, target = self.target_weight_text(), "plate removed");
        Ok(plate)
    }

    pub fn clear(&mut self) {
        self.session.clear();
        debug!("cleared");
    }

    /// Rebuilds the plates from the typed target, if there is one. Manual
    /// loads without a target are left as they are.
    fn reallocate(&mut self) -> bool {
        let Some(target) = self.session.target_weight() else {
            return false;
        };

        self.session.load(allocate(target, &self.configuration));
        debug!(%target, plates = ?self.loaded_plates(), "plates reallocated");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(milli: &[i64]) -> Vec<Weight> {
        milli.iter().copied().map(Weight::from_milli).collect()
    }

    #[test]
    fn starts_empty() {
        let controller = Controller::default();

        assert_eq!(controller.target_weight_text(), "");
        assert!(controller.loaded_plates().is_empty());
        assert_eq!(controller.total_weight(), Weight::from_units(20));
    }

    #[test]
    fn typed_target_loads_plates() {
        let mut controller = Controller::default();
        controller.set_target_weight("102.5");

        assert_eq!(controller.loaded_plates(), weights(&[25_000, 15_000, 1_250]));
        assert_eq!(controller.total_weight(), Weight::from_milli(102_500));
    }

    #[test]
    fn unparsable_target_keeps_stale_plates() {
        let mut controller = Controller::default();
        controller.set_target_weight("60");
        controller.set_target_weight("60x");

        assert_eq!(controller.target_weight_text(), "60x");
        assert_eq!(controller.loaded_plates(), weights(&[20_000]));

        controller.set_target_weight("");
        assert_eq!(controller.target_weight_text(), "");
        assert_eq!(controller.loaded_plates(), weights(&[20_000]));
    }

    #[test]
    fn bar_change_rederives_from_target() {
        let mut controller = Controller::default();
        controller.set_target_weight("60");
        controller.set_bar_weight(Weight::from_units(15)).unwrap();

        assert_eq!(controller.loaded_plates(), weights(&[20_000, 2_500]));
        assert_eq!(controller.target_weight_text(), "60");
    }

    #[test]
    fn collars_rederive_from_target() {
        let mut controller = Controller::default();
        controller.set_target_weight("60");
        controller.toggle_collars();

        assert!(controller.configuration().use_collars);
        assert_eq!(controller.loaded_plates(), weights(&[15_000, 2_500]));
    }

    #[test]
    fn unsupported_bar_changes_nothing() {
        let mut controller = Controller::default();
        controller.set_target_weight("60");
        let before = controller.clone();

        assert_eq!(
            controller.set_bar_weight(Weight::from_units(45)),
            Err(LoaderError::UnsupportedBar(Weight::from_units(45), Unit::Kg))
        );
        assert_eq!(controller, before);
    }

    #[test]
    fn adding_a_plate_rewrites_the_target() {
        let mut controller = Controller::default();
        controller.add_plate(Weight::from_units(10)).unwrap();
        controller.add_plate(Weight::from_units(25)).unwrap();
        controller.add_plate(Weight::from_milli(1250)).unwrap();

        assert_eq!(controller.loaded_plates(), weights(&[25_000, 10_000, 1_250]));
        assert_eq!(controller.target_weight_text(), "92.5");
    }

    #[test]
    fn unknown_plate_is_rejected() {
        let mut controller = Controller::default();

        assert_eq!(
            controller.add_plate(Weight::from_units(45)),
            Err(LoaderError::UnknownPlate(Weight::from_units(45), Unit::Kg))
        );
        assert!(controller.loaded_plates().is_empty());
        assert_eq!(controller.target_weight_text(), "");
    }

    #[test]
    fn removing_the_last_plate_clears_the_target() {
        let mut controller = Controller::default();
        controller.set_target_weight("70");
        assert_eq!(controller.loaded_plates(), weights(&[25_000]));

        assert_eq!(controller.remove_plate(0), Ok(Weight::from_units(25)));
        assert_eq!(controller.target_weight_text(), "");
        assert!(controller.loaded_plates().is_empty());
    }

    #[test]
    fn removing_a_plate_rewrites_the_target() {
        let mut controller = Controller::default();
        controller.set_target_weight("100");
        controller.remove_plate(1).unwrap();

        assert_eq!(controller.loaded_plates(), weights(&[25_000]));
        assert_eq!(controller.target_weight_text(), "70");
        assert_eq!(
            controller.remove_plate(4),
            Err(LoaderError::PlateIndexOutOfRange(4))
        );
    }

    #[test]
    fn manual_plates_survive_config_changes_without_target() {
        let mut controller = Controller::default();
        controller.add_plate(Weight::from_units(20)).unwrap();
        controller.remove_plate(0).unwrap();
        controller.add_plate(Weight::from_units(5)).unwrap();
        controller.add_plate(Weight::from_units(5)).unwrap();
        controller.set_target_weight("abc");
        controller.set_bar_weight(Weight::from_units(15)).unwrap();

        assert_eq!(controller.loaded_plates(), weights(&[5_000, 5_000]));
        assert_eq!(controller.total_weight(), Weight::from_units(35));
    }

    #[test]
    fn unit_change_reallocates_or_drops_plates() {
        let mut controller = Controller::default();
        controller.set_target_weight("225");
        controller.toggle_unit();

        assert_eq!(controller.unit(), Unit::Lb);
        assert_eq!(controller.configuration().bar.weight(), Weight::from_units(45));
        assert_eq!(controller.loaded_plates(), weights(&[45_000, 45_000]));

        controller.set_target_weight("heavy");
        controller.set_unit(Unit::Kg);
        assert!(controller.loaded_plates().is_empty());
        assert_eq!(controller.configuration().bar.weight(), Weight::from_units(20));
    }

    #[test]
    fn clear_resets_session_only() {
        let mut controller = Controller::default();
        controller.set_use_collars(true);
        controller.set_target_weight("140");
        controller.clear();

        assert_eq!(controller.target_weight_text(), "");
        assert!(controller.loaded_plates().is_empty());
        assert!(controller.configuration().use_collars);
    }
}
