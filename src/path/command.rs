//! Typed path command model and the arity-driven command builder.

use super::syntax::{scan_numbers, segments};

/// One parsed SVG path command.
///
/// Variants mirror the SVG command set one-to-one; each carries the
/// command's declared parameters plus `relative` (lowercase command
/// letter). Commands are immutable values; relative coordinates are
/// resolved against the pen position during the bounds walk, never by
/// rewriting the command.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
pub enum PathCommand {
    MoveTo {
        relative: bool,
        x: f32,
        y: f32,
    },
    LineTo {
        relative: bool,
        x: f32,
        y: f32,
    },
    HorizontalLineTo {
        relative: bool,
        x: f32,
    },
    VerticalLineTo {
        relative: bool,
        y: f32,
    },
    CubicBezier {
        relative: bool,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x: f32,
        y: f32,
    },
    SmoothCubicBezier {
        relative: bool,
        x2: f32,
        y2: f32,
        x: f32,
        y: f32,
    },
    QuadraticBezier {
        relative: bool,
        x1: f32,
        y1: f32,
        x: f32,
        y: f32,
    },
    SmoothQuadraticBezier {
        relative: bool,
        x: f32,
        y: f32,
    },
    Arc {
        relative: bool,
        rx: f32,
        ry: f32,
        x_axis_rotation: f32,
        large_arc: bool,
        sweep: bool,
        x: f32,
        y: f32,
    },
    ClosePath {
        relative: bool,
    },
}

/// Number of arguments consumed per command instance.
fn arity(letter: char) -> usize {
    match letter.to_ascii_uppercase() {
        'M' | 'L' | 'T' => 2,
        'H' | 'V' => 1,
        'C' => 6,
        'S' | 'Q' => 4,
        'A' => 7,
        _ => 0, // 'Z'
    }
}

/// Parse raw path data into a command list.
///
/// Permissive by contract: numbers are grouped by each command's arity
/// with any short trailing group dropped, and each complete group emits
/// one command. Extra coordinate pairs after an `M`/`m` pair become
/// implicit `LineTo` commands per the SVG grammar.
pub fn parse_path(data: &str) -> Vec<PathCommand> {
    let mut commands = Vec::new();
    for (letter, args) in segments(data) {
        let relative = letter.is_ascii_lowercase();
        if letter.to_ascii_uppercase() == 'Z' {
            // no arguments; anything in the substring is noise
            commands.push(PathCommand::ClosePath { relative });
            continue;
        }
        let numbers = scan_numbers(&args);
        for (i, group) in numbers.chunks_exact(arity(letter)).enumerate() {
            commands.push(build_command(letter, relative, i, group));
        }
    }
    commands
}

fn build_command(letter: char, relative: bool, index: usize, args: &[f32]) -> PathCommand {
    match letter.to_ascii_uppercase() {
        'M' if index == 0 => PathCommand::MoveTo {
            relative,
            x: args[0],
            y: args[1],
        },
        // "If a moveto is followed by multiple pairs of coordinates,
        // the subsequent pairs are treated as implicit lineto commands."
        'M' | 'L' => PathCommand::LineTo {
            relative,
            x: args[0],
            y: args[1],
        },
        'H' => PathCommand::HorizontalLineTo {
            relative,
            x: args[0],
        },
        'V' => PathCommand::VerticalLineTo {
            relative,
            y: args[0],
        },
        'C' => PathCommand::CubicBezier {
            relative,
            x1: args[0],
            y1: args[1],
            x2: args[2],
            y2: args[3],
            x: args[4],
            y: args[5],
        },
        'S' => PathCommand::SmoothCubicBezier {
            relative,
            x2: args[0],
            y2: args[1],
            x: args[2],
            y: args[3],
        },
        'Q' => PathCommand::QuadraticBezier {
            relative,
            x1: args[0],
            y1: args[1],
            x: args[2],
            y: args[3],
        },
        'T' => PathCommand::SmoothQuadraticBezier {
            relative,
            x: args[0],
            y: args[1],
        },
        // flags are "nonzero = true"
        'A' => PathCommand::Arc {
            relative,
            rx: args[0],
            ry: args[1],
            x_axis_rotation: args[2],
            large_arc: args[3] != 0.,
            sweep: args[4] != 0.,
            x: args[5],
            y: args[6],
        },
        _ => PathCommand::ClosePath { relative },
    }
}
