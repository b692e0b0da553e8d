//! Subnet calculation logic.
//!
//! This module contains the address arithmetic:
//! - [`calculator`] - derivations for one address/prefix pair
//! - [`batch`] - evaluation of many CIDR inputs

mod batch;
mod calculator;

// Re-export public types and functions
pub use batch::{summarise, summarise_all, Evaluation};
pub use calculator::{identify_class, AddressCalculator};
