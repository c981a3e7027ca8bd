//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep the field set, wire payload, and outcome types in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//!
//! ## Files
//! - `models.rs` — field set, request payload, classification outcome.
//! - `constants.rs` — stable constants (endpoint, fixed user messages).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no terminal/network side effects.
//!
//! ## Compatibility note
//! `Measurements` field names are the prediction service's request schema.
//! Keep changes synchronized with the service.

pub mod constants;
pub mod models;
