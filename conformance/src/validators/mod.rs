//! Conformance validators.

pub mod data;
pub mod site;
