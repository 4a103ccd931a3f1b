//! Bounding-box accumulation over a path command sequence.
//!
//! A single left-to-right fold carries the absolute pen position and a
//! conservative point set; the box is the min/max reduction of that set.
//! Curve commands contribute their control points rather than evaluated
//! curve extrema: a Bezier curve always lies inside the convex hull of
//! its control and end points, so the resulting box is safe but possibly
//! loose. Downstream consumers rely on exactly this approximation; do
//! not tighten it.

use super::command::{parse_path, PathCommand};
use crate::geometry::{BoundingBox, Point};

struct BoundsWalk {
    // absolute pen position, updated per SVG semantics
    current: Point,
    points: Vec<Point>,
}

impl BoundsWalk {
    fn new() -> Self {
        Self {
            current: Point::new(0., 0.),
            points: Vec::new(),
        }
    }

    fn resolve(&self, relative: bool, x: f32, y: f32) -> Point {
        if relative {
            Point::new(self.current.x + x, self.current.y + y)
        } else {
            Point::new(x, y)
        }
    }

    fn apply(&mut self, cmd: &PathCommand) {
        match *cmd {
            PathCommand::MoveTo { relative, x, y } | PathCommand::LineTo { relative, x, y } => {
                let target = self.resolve(relative, x, y);
                self.points.push(target);
                self.current = target;
            }
            PathCommand::HorizontalLineTo { relative, x } => {
                let new_x = if relative { self.current.x + x } else { x };
                let target = Point::new(new_x, self.current.y);
                self.points.push(target);
                self.current = target;
            }
            PathCommand::VerticalLineTo { relative, y } => {
                let new_y = if relative { self.current.y + y } else { y };
                let target = Point::new(self.current.x, new_y);
                self.points.push(target);
                self.current = target;
            }
            PathCommand::CubicBezier {
                relative,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let cp1 = self.resolve(relative, x1, y1);
                let cp2 = self.resolve(relative, x2, y2);
                let end = self.resolve(relative, x, y);
                self.points.extend([cp1, cp2, end]);
                self.current = end;
            }
            PathCommand::SmoothCubicBezier {
                relative,
                x2,
                y2,
                x,
                y,
            } => {
                // the implicit first control point (reflection of the
                // previous curve's) is not tracked; bounds can under-report
                // for reflected curves
                let cp2 = self.resolve(relative, x2, y2);
                let end = self.resolve(relative, x, y);
                self.points.extend([cp2, end]);
                self.current = end;
            }
            PathCommand::QuadraticBezier {
                relative,
                x1,
                y1,
                x,
                y,
            } => {
                let cp = self.resolve(relative, x1, y1);
                let end = self.resolve(relative, x, y);
                self.points.extend([cp, end]);
                self.current = end;
            }
            PathCommand::SmoothQuadraticBezier { relative, x, y } => {
                let end = self.resolve(relative, x, y);
                self.points.push(end);
                self.current = end;
            }
            PathCommand::Arc {
                relative,
                rx,
                ry,
                x,
                y,
                ..
            } => {
                // rotation and sweep ignored: the corners of the
                // axis-aligned rect around the start point plus the
                // endpoint cover any arc the command can draw
                let Point { x: cx, y: cy } = self.current;
                self.points.extend([
                    Point::new(cx - rx, cy - ry),
                    Point::new(cx + rx, cy - ry),
                    Point::new(cx - rx, cy + ry),
                    Point::new(cx + rx, cy + ry),
                ]);
                let end = self.resolve(relative, x, y);
                self.points.push(end);
                self.current = end;
            }
            // returns the pen to the subpath start conceptually, but adds
            // no extremal points and (matching the walk-state contract)
            // leaves the tracked position unchanged
            PathCommand::ClosePath { .. } => {}
        }
    }
}

/// Bounding box over an already-parsed command sequence.
pub fn command_bounds(commands: &[PathCommand]) -> BoundingBox {
    let mut walk = BoundsWalk::new();
    for cmd in commands {
        walk.apply(cmd);
    }
    BoundingBox::from_points(&walk.points)
}

/// Conservative bounding box of an SVG path `d` string.
///
/// Never fails: malformed input degrades to whatever geometry could be
/// read, and an empty or fully invalid path yields [`BoundingBox::ZERO`].
pub fn path_bounds(data: &str) -> BoundingBox {
    command_bounds(&parse_path(data))
}
