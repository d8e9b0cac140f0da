use std::{fmt::Display, str::FromStr};

use crate::{
    loader_error::LoaderError,
    plate::{KG_PLATES, LB_PLATES, Plate},
    weight::Weight,
};

const KG_BARS: [Weight; 2] = [Weight::from_units(15), Weight::from_units(20)];
const LB_BARS: [Weight; 2] = [Weight::from_units(35), Weight::from_units(45)];

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub enum Unit {
    #[default]
    Kg,
    Lb,
}

impl Unit {
    /// Plate catalog for this unit, heaviest first.
    #[must_use]
    pub fn catalog(&self) -> &'static [Plate] {
        match self {
            Unit::Kg => &KG_PLATES,
            Unit::Lb => &LB_PLATES,
        }
    }

    #[must_use]
    pub fn bar_weights(&self) -> &'static [Weight] {
        match self {
            Unit::Kg => &KG_BARS,
            Unit::Lb => &LB_BARS,
        }
    }

    #[must_use]
    pub fn default_bar_weight(&self) -> Weight {
        match self {
            Unit::Kg => Weight::from_units(20),
            Unit::Lb => Weight::from_units(45),
        }
    }

    /// Combined weight of both collars.
    #[must_use]
    pub fn collar_weight(&self) -> Weight {
        match self {
            Unit::Kg => Weight::from_units(5),
            Unit::Lb => Weight::from_units(11),
        }
    }

    #[must_use]
    pub fn plate(&self, weight: Weight) -> Option<&'static Plate> {
        self.catalog().iter().find(|plate| plate.weight() == weight)
    }

    #[must_use]
    pub fn other(&self) -> Unit {
        match self {
            Unit::Kg => Unit::Lb,
            Unit::Lb => Unit::Kg,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Kg => write!(f, "kg"),
            Unit::Lb => write!(f, "lb"),
        }
    }
}

impl FromStr for Unit {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" => Ok(Unit::Kg),
            "lb" | "lbs" => Ok(Unit::Lb),
            _ => Err(LoaderError::InvalidUnit(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_are_heaviest_first() {
        for unit in [Unit::Kg, Unit::Lb] {
            let weights = unit.catalog().iter().map(Plate::weight).collect::<Vec<_>>();
            assert!(weights.windows(2).all(|pair| pair[0] > pair[1]), "{unit}");
        }
    }

    #[test]
    fn default_bar_is_offered() {
        for unit in [Unit::Kg, Unit::Lb] {
            assert!(unit.bar_weights().contains(&unit.default_bar_weight()));
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("KG".parse::<Unit>().unwrap(), Unit::Kg);
        assert_eq!("lbs".parse::<Unit>().unwrap(), Unit::Lb);
        assert_eq!(
            "stone".parse::<Unit>(),
            Err(LoaderError::InvalidUnit("stone".to_string()))
        );
    }

    #[test]
    fn finds_catalog_plates_only() {
        assert!(Unit::Kg.plate(Weight::from_milli(1250)).is_some());
        assert!(Unit::Lb.plate(Weight::from_milli(1250)).is_none());
        assert!(Unit::Lb.plate(Weight::from_units(45)).is_some());
    }
}
