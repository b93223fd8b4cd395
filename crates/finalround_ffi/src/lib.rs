//! Flutter bridge crate for the final-round core.

pub mod api;
