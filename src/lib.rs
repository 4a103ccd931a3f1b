//! ## marknode - SVG shape geometry for design-tool nodes
//!
//! `marknode` is the geometry engine of a markup-to-design-node converter:
//! it turns SVG shape attributes (path `d` strings, polygon `points`
//! lists, circle/ellipse/line/rect parameters) into axis-aligned
//! bounding boxes that a node builder copies into a design-tool node's
//! position and size fields.
//!
//! The engine is a layout aid feeding a best-effort visual approximation,
//! so it is permissive end to end: malformed input never produces an
//! error, only a degraded (possibly zero) bounding box. Curve and arc
//! bounds are conservative convex-hull approximations rather than exact
//! extrema; consumers depend on that looseness staying stable.
//!
//! ## Example
//!
//! ```
//! use marknode::{path_bounds, BoundingBox};
//!
//! let bb = path_bounds("M0 0 L100 0 L100 50 L0 50 Z");
//! assert_eq!(bb, BoundingBox::new(0., 0., 100., 50.));
//!
//! // malformed input degrades, it doesn't fail
//! assert_eq!(path_bounds("not a path"), BoundingBox::ZERO);
//! ```

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod errors;
mod geometry;
mod path;
mod shapes;

pub use errors::{Error, Result};
pub use geometry::{BoundingBox, Point};
pub use path::{command_bounds, parse_path, path_bounds, PathCommand};
pub use shapes::{
    circle_bounds, ellipse_bounds, line_bounds, parse_points, points_bounds, rect_bounds,
    shape_bounds, AttrValue,
};

// Allow users of this as a library to easily retrieve the version being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse a string to an f32
pub(crate) fn strp(s: &str) -> Result<f32> {
    s.parse::<f32>().map_err(|e| e.into())
}

/// Returns iterator over whitespace-or-comma separated values
pub(crate) fn attr_split(input: &str) -> impl Iterator<Item = String> + '_ {
    input
        .split_whitespace()
        .flat_map(|v| v.split(','))
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

/// Flat `[x, y, width, height]` form of a path's bounding box; the entry
/// point exported to the wasm plugin runtime.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn path_bounds_values(d: &str) -> Vec<f32> {
    let bb = path_bounds(d);
    vec![bb.x, bb.y, bb.width, bb.height]
}

/// JSON form of a path's bounding box for plugin interchange.
#[cfg(feature = "json")]
pub fn path_bounds_json(d: &str) -> String {
    serde_json::to_string(&path_bounds(d)).unwrap_or_default()
}
