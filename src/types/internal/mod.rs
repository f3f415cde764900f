// Internal types shared between the API boundary, stores and the client
pub mod bounds;

pub use bounds::{Attribute, AttributeBounds, BoundParseError};
