mod views;
mod utils;
mod routes;
pub mod configs;
pub mod error;
pub mod model;

#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::error::FetchError;
