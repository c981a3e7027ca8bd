//! Terminal front end.
//!
//! ## Files
//! - `app.rs` — owned screen state, key handling, submission triggering,
//!   and the event loop.
//! - `view.rs` — pure rendering of that state plus the banner color rule.

pub mod app;
pub mod view;

pub use app::{run, App};
