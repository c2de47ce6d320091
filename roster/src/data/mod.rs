//! Literal tables loaded once at startup and never mutated.

pub mod cases;
pub mod justices;

pub use cases::CASES;
pub use justices::{JUSTICES, ROSTER_SIZE};
