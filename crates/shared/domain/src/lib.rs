//! # Domain Models
//!
//! Pure domain types for the feature and settings subsystems: descriptors,
//! the settings record and its enumerations, preset lookup tables, and the
//! sanitizing validator. No I/O and no logging here, just data and total
//! functions over it.

pub mod constants;
pub mod feature;
pub mod presets;
pub mod settings;
pub mod validate;
