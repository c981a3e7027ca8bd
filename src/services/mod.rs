//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `form.rs` — form entry store + the numeric input filter.
//! - `predict.rs` — prediction client: payload POST, response mapping,
//!   worker-thread submission.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized; the network call lives
//!   in exactly one function.
//! - Keep the screen layer thin; delegate to services.

pub mod form;
pub mod predict;
