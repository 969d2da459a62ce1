//! Twelve Week - goal tracker for the 12-week year methodology
//!
//! Work is planned in 12-week cycles: main goals for the cycle, sub goals
//! beneath them, weekly priorities, and XP with levels for finishing work.
//! The whole state is persisted as one JSON document.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
