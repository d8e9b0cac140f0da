use thiserror::Error;

use crate::{unit::Unit, weight::Weight};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    #[error("No {0}{1} plate in the catalog.")]
    UnknownPlate(Weight, Unit),
    #[error("No {0}{1} bar is offered.")]
    UnsupportedBar(Weight, Unit),
    #[error("No loaded plate at position {0}.")]
    PlateIndexOutOfRange(usize),
    #[error("Invalid weight {0:?}.")]
    InvalidWeight(String),
    #[error("Invalid unit {0:?}, expected kg or lb.")]
    InvalidUnit(String),
    #[error("Invalid theme {0:?}, expected light or dark.")]
    InvalidTheme(String),
    #[error("Invalid command {0:?}, try help.")]
    InvalidCommand(String),
}
