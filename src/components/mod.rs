//! Reusable UI components for the Meridian GUI

pub mod charts;
pub mod tables;
