#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::ptr_as_ptr)]

pub mod allocation;
pub mod bar;
pub mod bridge;
pub mod command;
pub mod configuration;
pub mod controller;
pub mod loader_error;
pub mod plate;
pub mod render;
pub mod session;
pub mod theme;
pub mod unit;
pub mod weight;
pub mod widget;
