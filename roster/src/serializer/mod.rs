//! Serializers for the roster and its combination universe.
//!
//! - **JSON** ([`json`]) — roster, occurrence table and every generated
//!   combination with its occurred flag, output to `public/data/roster.json`

pub mod json;
