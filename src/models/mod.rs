//! Core data models for geocoding requests and results.

pub mod address;
pub mod position;

pub use address::{AddressMatch, GeocodeResult};
pub use position::Position;
