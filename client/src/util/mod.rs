//! Interaction math and browser helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `tilt` and `parallax` are pure and unit-tested; `scroll` owns the only
//! window-level subscription. Components stay thin view glue over these.

pub mod css;
pub mod parallax;
pub mod scroll;
pub mod tilt;
