//! Client traits.

pub mod data_source;
