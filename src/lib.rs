//! fittrack: workout summaries from raw fitness-tracker readings.
//!
//! A tracker sends packages: a workout code (`SWM`, `RUN`, `WLK`) and a list
//! of positional sensor values. [`package::read_package`] turns a package into
//! a typed [`model::Workout`], whose [`model::Training`] calorie model computes
//! distance, mean speed, and calories into a [`model::Summary`].

pub mod batch;
pub mod cli;
pub mod config;
pub mod logging;
pub mod model;
pub mod package;
