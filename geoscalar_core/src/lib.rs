//! Materialized JSON value tree shared by the geoscalar crates.
//!
//! Validation never sees raw text: callers turn their wire format into a [`json::JsonValue`]
//! first, either through [`json::JsonValue::parse_str`] or by building the tree directly.

pub mod json;
