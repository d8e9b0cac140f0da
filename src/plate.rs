use std::fmt::Display;

use crate::weight::Weight;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub enum PlateColor {
    Red,
    Blue,
    Yellow,
    Green,
    White,
    Black,
    Silver,
}

impl Display for PlateColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlateColor::Red => "red",
            PlateColor::Blue => "blue",
            PlateColor::Yellow => "yellow",
            PlateColor::Green => "green",
            PlateColor::White => "white",
            PlateColor::Black => "black",
            PlateColor::Silver => "silver",
        };
        write!(f, "{name}")
    }
}

/// A catalog plate. `height` is the drawn height in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Plate {
    weight: Weight,
    color: PlateColor,
    height: u32,
}

impl Plate {
    #[must_use]
    pub const fn new(weight: Weight, color: PlateColor, height: u32) -> Self {
        Plate {
            weight,
            color,
            height,
        }
    }

    #[must_use]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    #[must_use]
    pub fn color(&self) -> PlateColor {
        self.color
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.weight, self.color)
    }
}

pub(crate) const KG_PLATES: [Plate; 9] = [
    Plate::new(Weight::from_units(25), PlateColor::Red, 140),
    Plate::new(Weight::from_units(20), PlateColor::Blue, 130),
    Plate::new(Weight::from_units(15), PlateColor::Yellow, 120),
    Plate::new(Weight::from_units(10), PlateColor::Green, 110),
    Plate::new(Weight::from_units(5), PlateColor::White, 100),
    Plate::new(Weight::from_milli(2500), PlateColor::Black, 90),
    Plate::new(Weight::from_milli(1250), PlateColor::Silver, 80),
    Plate::new(Weight::from_milli(500), PlateColor::Silver, 75),
    Plate::new(Weight::from_milli(250), PlateColor::Silver, 70),
];

pub(crate) const LB_PLATES: [Plate; 6] = [
    Plate::new(Weight::from_units(45), PlateColor::Red, 140),
    Plate::new(Weight::from_units(35), PlateColor::Blue, 130),
    Plate::new(Weight::from_units(25), PlateColor::Yellow, 120),
    Plate::new(Weight::from_units(10), PlateColor::Green, 110),
    Plate::new(Weight::from_units(5), PlateColor::White, 100),
    Plate::new(Weight::from_milli(2500), PlateColor::Black, 90),
];
