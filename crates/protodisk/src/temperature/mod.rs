//! Gas temperature models.

mod hamburger;

#[cfg(test)]
mod hamburger_test;

pub use hamburger::{HamburgerTemperature, TemperatureField};
