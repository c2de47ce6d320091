//! Generated website validators (HTML structure, coverage).

pub mod coverage;
pub mod html;
