use assertables::assert_in_delta;
use itertools::Itertools;

use marknode::{command_bounds, parse_path, path_bounds, BoundingBox, PathCommand};

#[test]
fn test_lineto_min_max_property() {
    // for absolute M/L-only paths the box is exactly the min/max of the
    // listed coordinates
    let coords: Vec<(f32, f32)> = vec![(10., 10.), (50., 70.), (-5., 30.), (20., -40.)];
    let d = format!(
        "M{}",
        coords.iter().map(|(x, y)| format!("{x} {y}")).join(" L")
    );
    let (min_x, max_x) = coords
        .iter()
        .map(|c| c.0)
        .minmax_by(|a, b| a.partial_cmp(b).unwrap())
        .into_option()
        .unwrap();
    let (min_y, max_y) = coords
        .iter()
        .map(|c| c.1)
        .minmax_by(|a, b| a.partial_cmp(b).unwrap())
        .into_option()
        .unwrap();

    assert_eq!(
        path_bounds(&d),
        BoundingBox::new(min_x, min_y, max_x - min_x, max_y - min_y)
    );
}

#[test]
fn test_relative_absolute_equivalence() {
    for (rel, abs) in [
        ("M10 10 l40 60", "M10 10 L50 70"),
        ("M10 10 h40 v30", "M10 10 H50 V40"),
        ("m10 10 c10 20 30 20 40 0", "M10 10 C20 30 40 30 50 10"),
        ("M5 5 a10 10 0 0 1 20 0", "M5 5 A10 10 0 0 1 25 5"),
    ] {
        assert_eq!(path_bounds(rel), path_bounds(abs), "for path: {rel}");
    }
}

#[test]
fn test_known_paths() {
    for (d, exp) in [
        ("M0 0 L100 0 L100 50 L0 50 Z", [0., 0., 100., 50.]),
        ("M10 10 H50 V40", [10., 10., 40., 30.]),
        ("M10 20 100 200", [10., 20., 90., 180.]),
        ("M10 20", [10., 20., 0., 0.]),
        ("", [0., 0., 0., 0.]),
    ] {
        assert_eq!(
            path_bounds(d),
            BoundingBox::new(exp[0], exp[1], exp[2], exp[3]),
            "for path: {d}"
        );
    }
}

#[test]
fn test_curve_bounds_are_convex_hull() {
    // control points are included verbatim, so curve boxes are loose
    // but always contain the true curve
    for (d, exp) in [
        ("M0 0 C10 20 30 20 40 0", [0., 0., 40., 20.]),
        ("M0 0 Q20 40 40 0", [0., 0., 40., 40.]),
        ("M0 0 C10 0 20 20 30 20 s20 0 30 0", [0., 0., 60., 20.]),
        ("M0 0 Q10 20 20 0 t20 0", [0., 0., 40., 20.]),
    ] {
        assert_eq!(
            path_bounds(d),
            BoundingBox::new(exp[0], exp[1], exp[2], exp[3]),
            "for path: {d}"
        );
    }
}

#[test]
fn test_arc_bounds_are_conservative() {
    // corners of (start ± rx, start ± ry) plus the endpoint; rotation
    // and sweep flags never change the result
    assert_eq!(
        path_bounds("M0 0 A10 10 0 0 1 20 0"),
        BoundingBox::new(-10., -10., 30., 20.)
    );
    assert_eq!(
        path_bounds("M0 0 A10 10 45 1 0 20 0"),
        path_bounds("M0 0 A10 10 0 0 1 20 0")
    );
}

#[test]
fn test_fractional_coordinates() {
    let bb = path_bounds("M0.1 0.2 L0.4 0.8");
    assert_in_delta!(bb.x, 0.1, 1e-6);
    assert_in_delta!(bb.y, 0.2, 1e-6);
    assert_in_delta!(bb.width, 0.3, 1e-6);
    assert_in_delta!(bb.height, 0.6, 1e-6);

    // exponent notation scans like any other number
    let bb = path_bounds("M1e1 1e1 L5e1 7e1");
    assert_eq!(bb, BoundingBox::new(10., 10., 40., 60.));
}

#[test]
fn test_idempotence() {
    let d = "M10 10 C20 30 40 30 50 10 a5 5 0 0 1 5 5 Z m100 -3 t4 5";
    let first = path_bounds(d);
    let second = path_bounds(d);
    assert_eq!(first, second);
    assert_eq!(first, command_bounds(&parse_path(d)));
}

#[test]
fn test_permissive_parsing() {
    // trailing short groups and argument noise degrade silently
    assert_eq!(
        path_bounds("M0 0 L10 10 5"),
        BoundingBox::new(0., 0., 10., 10.)
    );
    assert_eq!(
        path_bounds("M0 0 # L10 @ 10"),
        BoundingBox::new(0., 0., 10., 10.)
    );
    assert_eq!(path_bounds("Z"), BoundingBox::ZERO);
}

#[test]
fn test_parsed_command_shape() {
    let commands = parse_path("M1 2 l3 4z");
    assert_eq!(
        commands,
        vec![
            PathCommand::MoveTo {
                relative: false,
                x: 1.,
                y: 2.
            },
            PathCommand::LineTo {
                relative: true,
                x: 3.,
                y: 4.
            },
            PathCommand::ClosePath { relative: true },
        ]
    );
}
