//! Top-level views mounted by `App`.
//!
//! ARCHITECTURE
//! ============
//! The calculator page binds form inputs to signals and renders the two
//! display regions; submission logic lives in `state`.

pub mod calculator;
