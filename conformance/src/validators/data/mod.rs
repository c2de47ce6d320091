//! Validators over the compiled-in roster and occurrence tables.

pub mod inventory;
