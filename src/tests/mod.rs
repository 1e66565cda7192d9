//! Test modules for the Meridian GUI
//!
//! Pure-logic tests only: client construction, request serialization,
//! response parsing, and the view-state policies (fail-together pair,
//! fail-silent financials, selection-driven refetch inputs). Nothing
//! here touches the network or a GPUI runtime.

#[cfg(test)]
pub mod api_test;

#[cfg(test)]
pub mod app_test;

#[cfg(test)]
pub mod news_test;

#[cfg(test)]
pub mod macro_test;

#[cfg(test)]
pub mod stock_test;
