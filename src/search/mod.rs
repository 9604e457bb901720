//! Data handed to move-search strategies.
//!
//! The strategies themselves live outside the crate; this module only
//! defines what they are given.

pub mod hints;

pub use hints::{AiOrderState, AiWeightState};
