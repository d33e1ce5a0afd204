//! Showroom: inventory, inquiries and hero media for a luxury car dealership
//!
//! Every collection lives as one JSON array in a key-value store under
//! `.showroom/store/`. The [`core::Repository`] is the only way in or out.

pub mod cli;
pub mod core;
pub mod entities;
pub mod json;
pub mod schema;
