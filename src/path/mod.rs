//! SVG path (`d` attribute) parsing and bounds computation.

mod bounds;
mod command;
mod syntax;

pub use bounds::{command_bounds, path_bounds};
pub use command::{parse_path, PathCommand};
pub(crate) use syntax::PathScanner;
