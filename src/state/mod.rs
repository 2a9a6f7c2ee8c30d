//! Client-side state for the calculator form.
//!
//! DESIGN
//! ======
//! `form` validates raw field text and `display` owns what the user
//! currently sees. `submission` sequences in-flight requests so only the
//! newest one may render.

pub mod display;
pub mod form;
pub mod submission;
