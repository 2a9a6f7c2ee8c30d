//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold pure text/number conversions so page logic stays
//! testable without a browser.

pub mod number;
