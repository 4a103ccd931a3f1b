mod types;

pub use types::{BoundingBox, Point};
