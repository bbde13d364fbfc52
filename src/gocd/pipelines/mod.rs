//! Pipeline config module

mod api;
mod models;

pub use models::{Material, MaterialAttributes, MaterialFilter, Parameter, Pipeline};
