//! End-to-end parsing of ASCII STL text.

#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use stlparse::math::Vector3;
use stlparse::{parse, parse_with, ParseConfig, ParseError, StlError};

fn tetrahedron(name_open: &str, name_close: &str) -> String {
    let facets = [
        ([0.0, 0.0, -1.0], [[0, 0, 0], [1, 0, 0], [0, 1, 0]]),
        ([0.0, -1.0, 0.0], [[0, 0, 0], [0, 0, 1], [1, 0, 0]]),
        ([-1.0, 0.0, 0.0], [[0, 0, 0], [0, 1, 0], [0, 0, 1]]),
        ([0.5773, 0.5773, 0.5773], [[1, 0, 0], [0, 0, 1], [0, 1, 0]]),
    ];

    let mut text = format!("solid {name_open}\n");
    for (normal, vertices) in facets {
        text.push_str(&format!(
            "  facet normal {} {} {}\n    outer loop\n",
            normal[0], normal[1], normal[2]
        ));
        for [x, y, z] in vertices {
            text.push_str(&format!("      vertex {x} {y} {z}\n"));
        }
        text.push_str("    endloop\n  endfacet\n");
    }
    text.push_str(&format!("endsolid {name_close}\n"));
    text
}

#[test]
fn tetrahedron_metrics() {
    let solid = parse(tetrahedron("tetra", "tetra").as_bytes()).unwrap();

    assert_eq!(solid.name, "tetra");
    assert_eq!(solid.facet_count(), 4);
    assert_eq!(solid.facets[1].vertices[1], Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(solid.facets[3].normal, Vector3::new(0.5773, 0.5773, 0.5773));

    // Three right triangles of area 1/2 plus an equilateral face of side sqrt(2).
    let expected = 1.5 + 3.0_f64.sqrt() / 2.0;
    assert_relative_eq!(solid.surface_area(), expected, epsilon = 1e-12);

    let aabb = solid.bounding_box().unwrap();
    assert_eq!(aabb.min, Vector3::zeros());
    assert_eq!(aabb.max, Vector3::new(1.0, 1.0, 1.0));

    assert!(!solid.check_duplicates());
}

#[test]
fn negative_normals_need_signed_numbers() {
    let text = tetrahedron("tetra", "tetra");
    assert!(parse(text.as_bytes()).is_ok());

    let err = parse_with(text.as_bytes(), ParseConfig::lenient()).unwrap_err();
    let err = match err {
        StlError::Parse(err) => err,
        other => panic!("expected a parse error, got {other:?}"),
    };
    assert!(matches!(err.root_cause(), ParseError::Unexpected { found, .. } if found == "-"));
}

#[test]
fn closing_name_must_match() {
    let err = parse(tetrahedron("foo", "bar").as_bytes()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("[foo]"), "{message}");
    assert!(message.contains("[bar]"), "{message}");
}

#[test]
fn repeated_facet_is_detected() {
    let text = tetrahedron("tetra", "tetra");
    let first_facet_end = text.find("  endfacet\n").unwrap() + "  endfacet\n".len();
    let first_facet = &text["solid tetra\n".len()..first_facet_end];
    let doubled = text.replacen(first_facet, &format!("{first_facet}{first_facet}"), 1);

    let solid = parse(doubled.as_bytes()).unwrap();
    assert_eq!(solid.facet_count(), 5);
    assert!(solid.check_duplicates());
}
