//! Bounds calculators for SVG primitive shapes.
//!
//! These are pure functions independent of the path engine, sharing its
//! `BoundingBox` output type. Attribute inputs arrive as whatever the
//! upstream markup parser extracted, either already-numeric values or
//! raw strings like `"100px"`, so every numeric parameter is an
//! [`AttrValue`] resolved leniently with a caller-supplied default.

use crate::geometry::{BoundingBox, Point};
use crate::path::PathScanner;
use crate::{attr_split, path_bounds, strp};

/// A numeric attribute input: either a number or a raw attribute string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrValue<'a> {
    Number(f32),
    Text(&'a str),
}

impl From<f32> for AttrValue<'_> {
    fn from(value: f32) -> Self {
        AttrValue::Number(value)
    }
}

impl<'a> From<&'a str> for AttrValue<'a> {
    fn from(value: &'a str) -> Self {
        AttrValue::Text(value)
    }
}

impl AttrValue<'_> {
    /// Resolve to a number, parsing a leading numeric prefix from text
    /// values (`"100px"` resolves to `100`) and falling back to `default`
    /// when nothing numeric can be read.
    pub fn to_f32(&self, default: f32) -> f32 {
        match self {
            AttrValue::Number(n) => *n,
            AttrValue::Text(s) => {
                let mut scanner = PathScanner::new(s);
                scanner.skip_whitespace();
                scanner.read_number().unwrap_or(default)
            }
        }
    }
}

pub fn circle_bounds<'a>(
    cx: impl Into<AttrValue<'a>>,
    cy: impl Into<AttrValue<'a>>,
    r: impl Into<AttrValue<'a>>,
) -> BoundingBox {
    let cx = cx.into().to_f32(0.);
    let cy = cy.into().to_f32(0.);
    let r = r.into().to_f32(0.).abs();
    BoundingBox::new(cx - r, cy - r, 2. * r, 2. * r)
}

pub fn ellipse_bounds<'a>(
    cx: impl Into<AttrValue<'a>>,
    cy: impl Into<AttrValue<'a>>,
    rx: impl Into<AttrValue<'a>>,
    ry: impl Into<AttrValue<'a>>,
) -> BoundingBox {
    let cx = cx.into().to_f32(0.);
    let cy = cy.into().to_f32(0.);
    let rx = rx.into().to_f32(0.).abs();
    let ry = ry.into().to_f32(0.).abs();
    BoundingBox::new(cx - rx, cy - ry, 2. * rx, 2. * ry)
}

pub fn line_bounds<'a>(
    x1: impl Into<AttrValue<'a>>,
    y1: impl Into<AttrValue<'a>>,
    x2: impl Into<AttrValue<'a>>,
    y2: impl Into<AttrValue<'a>>,
) -> BoundingBox {
    BoundingBox::from_corners(
        x1.into().to_f32(0.),
        y1.into().to_f32(0.),
        x2.into().to_f32(0.),
        y2.into().to_f32(0.),
    )
}

pub fn rect_bounds<'a>(
    x: impl Into<AttrValue<'a>>,
    y: impl Into<AttrValue<'a>>,
    width: impl Into<AttrValue<'a>>,
    height: impl Into<AttrValue<'a>>,
) -> BoundingBox {
    BoundingBox::new(
        x.into().to_f32(0.),
        y.into().to_f32(0.),
        width.into().to_f32(0.),
        height.into().to_f32(0.),
    )
}

/// Parse a `points` attribute (polygon/polyline) into coordinate pairs.
/// Unparseable tokens are skipped; an unpaired final number is dropped.
pub fn parse_points(points: &str) -> Vec<Point> {
    let floats: Vec<f32> = attr_split(points).filter_map(|t| strp(&t).ok()).collect();
    // chunks_exact to ignore any unpaired final number
    floats
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect()
}

/// Bounding box of a polygon/polyline `points` attribute;
/// [`BoundingBox::ZERO`] for fewer than one complete pair.
pub fn points_bounds(points: &str) -> BoundingBox {
    BoundingBox::from_points(&parse_points(points))
}

/// Bounding box for a named SVG shape element over its raw attributes.
///
/// Missing positional attributes take the SVG default of `0`; size
/// attributes (`r`, `rx`/`ry`, `width`/`height`) must be present for a
/// shape to have any extent, matching the SVG shape definitions. Unknown
/// element names yield [`BoundingBox::ZERO`].
pub fn shape_bounds(name: &str, attrs: &[(&str, &str)]) -> BoundingBox {
    let get = |key: &str| attrs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);
    let num = |key: &str| AttrValue::Text(get(key).unwrap_or("0")).to_f32(0.);
    match name {
        "path" => path_bounds(get("d").unwrap_or("")),
        "polygon" | "polyline" => points_bounds(get("points").unwrap_or("")),
        "line" => line_bounds(num("x1"), num("y1"), num("x2"), num("y2")),
        "circle" => match get("r") {
            Some(r) => circle_bounds(num("cx"), num("cy"), r),
            None => BoundingBox::ZERO,
        },
        "ellipse" => match (get("rx"), get("ry")) {
            (Some(rx), Some(ry)) => ellipse_bounds(num("cx"), num("cy"), rx, ry),
            _ => BoundingBox::ZERO,
        },
        "rect" => match (get("width"), get("height")) {
            (Some(w), Some(h)) => rect_bounds(num("x"), num("y"), w, h),
            _ => BoundingBox::ZERO,
        },
        _ => BoundingBox::ZERO,
    }
}
