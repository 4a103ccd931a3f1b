//! Shared geometry value types.
//!
//! Everything downstream of the parsers reduces to these two types: parsed
//! shapes become `Point` sets, and point sets become a `BoundingBox` which
//! the node-config layer copies into a node's position and size fields.

/// A plain coordinate pair in user units. No identity, no units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "json",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangular region in user coordinates.
///
/// `width` and `height` are always non-negative. The canonical "empty"
/// value is [`BoundingBox::ZERO`], returned whenever a shape produced no
/// points at all; consumers get a usable (if degenerate) box rather than
/// an error.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::ZERO
    }
}

impl BoundingBox {
    pub const ZERO: Self = Self {
        x: 0.,
        y: 0.,
        width: 0.,
        height: 0.,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from two opposite corners, in either order.
    pub fn from_corners(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: x1.min(x2),
            y: y1.min(y2),
            width: (x2 - x1).abs(),
            height: (y2 - y1).abs(),
        }
    }

    /// Reduce a point set to its bounding box; `ZERO` for an empty set.
    pub fn from_points(points: &[Point]) -> Self {
        let mut points = points.iter();
        let Some(first) = points.next() else {
            return Self::ZERO;
        };
        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2., self.y + self.height / 2.)
    }

    /// Smallest box covering both `self` and `other`.
    pub fn combine(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self {
            x,
            y,
            width: self.max_x().max(other.max_x()) - x,
            height: self.max_y().max(other.max_y()) - y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let points = [
            Point::new(10., 0.),
            Point::new(30., 15.),
            Point::new(25., 30.),
        ];
        assert_eq!(
            BoundingBox::from_points(&points),
            BoundingBox::new(10., 0., 20., 30.)
        );

        // single point: degenerate but positioned box
        assert_eq!(
            BoundingBox::from_points(&[Point::new(5., -5.)]),
            BoundingBox::new(5., -5., 0., 0.)
        );

        assert_eq!(BoundingBox::from_points(&[]), BoundingBox::ZERO);
    }

    #[test]
    fn test_from_corners() {
        assert_eq!(
            BoundingBox::from_corners(50., 70., 10., 10.),
            BoundingBox::new(10., 10., 40., 60.)
        );
    }

    #[test]
    fn test_combine() {
        let bb = BoundingBox::new(10., 0., 0., 10.);
        let bb = bb.combine(&BoundingBox::new(20., 10., 10., 5.));
        let bb = bb.combine(&BoundingBox::new(25., 20., 0., 10.));
        assert_eq!(bb, BoundingBox::new(10., 0., 20., 30.));
    }

    #[test]
    fn test_center() {
        let bb = BoundingBox::new(10., 10., 20., 20.);
        assert_eq!(bb.center(), (20., 20.));
        assert_eq!(bb.max_x(), 30.);
        assert_eq!(bb.max_y(), 30.);
    }
}
