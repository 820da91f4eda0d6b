use super::*;

fn config_with_cell(cell_size: f64) -> MeshConfig {
    MeshConfig {
        cell_size,
        ..MeshConfig::default()
    }
}

#[test]
fn dimensions_follow_canvas_and_cell_size() {
    let mesh = Mesh::build(
        Canvas {
            width: 400,
            height: 200,
        },
        config_with_cell(80.0),
        1,
    )
    .unwrap();
    // ceil(400 / 80) + 5 by ceil(200 / 80) + 5.
    assert_eq!(mesh.cols(), 10);
    assert_eq!(mesh.rows(), 8);
}

#[test]
fn every_node_starts_at_rest() {
    let mesh = Mesh::build(
        Canvas {
            width: 300,
            height: 150,
        },
        config_with_cell(60.0),
        7,
    )
    .unwrap();
    for col in 0..mesh.cols() {
        for row in 0..mesh.rows() {
            let node = mesh.node(col, row);
            assert_eq!(node.current_position, node.rest_position);
        }
    }
}

#[test]
fn rest_positions_stay_near_nominal_grid() {
    let config = config_with_cell(50.0);
    let mesh = Mesh::build(
        Canvas {
            width: 200,
            height: 100,
        },
        config,
        3,
    )
    .unwrap();
    for col in 0..mesh.cols() {
        for row in 0..mesh.rows() {
            let rest = mesh.node(col, row).rest_position;
            let nominal = Point::new(col as f64 * 50.0, row as f64 * 50.0) + ORIGIN_SHIFT;
            assert!((rest.x - nominal.x).abs() <= config.position_jitter);
            assert!((rest.y - nominal.y).abs() <= config.position_jitter);
        }
    }
}

#[test]
fn zero_jitter_pins_rest_to_nominal() {
    let config = MeshConfig {
        position_jitter: 0.0,
        ..config_with_cell(50.0)
    };
    let mesh = Mesh::build(
        Canvas {
            width: 100,
            height: 100,
        },
        config,
        9,
    )
    .unwrap();
    assert_eq!(mesh.node(0, 0).rest_position, Point::new(-40.0, -40.0));
    assert_eq!(mesh.node(2, 1).rest_position, Point::new(60.0, 10.0));
}

#[test]
fn build_is_deterministic_for_equal_seeds() {
    let canvas = Canvas {
        width: 320,
        height: 160,
    };
    let a = Mesh::build(canvas, config_with_cell(40.0), 99).unwrap();
    let b = Mesh::build(canvas, config_with_cell(40.0), 99).unwrap();
    for col in 0..a.cols() {
        for row in 0..a.rows() {
            assert_eq!(a.node(col, row), b.node(col, row));
        }
    }
}

#[test]
fn seeds_change_the_mesh() {
    let canvas = Canvas {
        width: 320,
        height: 160,
    };
    let a = Mesh::build(canvas, config_with_cell(40.0), 1).unwrap();
    let b = Mesh::build(canvas, config_with_cell(40.0), 2).unwrap();
    let differs = (0..a.cols())
        .any(|col| (0..a.rows()).any(|row| a.node(col, row) != b.node(col, row)));
    assert!(differs);
}

#[test]
fn origin_color_stays_within_start_walk() {
    // All three channels of the first node fall back to the start color and
    // walk by at most start_color_randomness percent of the channel range.
    let config = config_with_cell(50.0);
    let mesh = Mesh::build(
        Canvas {
            width: 200,
            height: 100,
        },
        config,
        5,
    )
    .unwrap();
    let max_walk = (config.start_color_randomness / 100.0 * 255.0).round() as i16;
    let origin = mesh.node(0, 0).basis_color;
    for (channel, start) in [
        (origin.r, config.start_color.r),
        (origin.g, config.start_color.g),
        (origin.b, config.start_color.b),
    ] {
        assert!((i16::from(channel) - i16::from(start)).abs() <= max_walk);
    }
}

#[test]
fn display_color_clones_basis_at_build() {
    let mesh = Mesh::build(
        Canvas {
            width: 200,
            height: 100,
        },
        config_with_cell(50.0),
        5,
    )
    .unwrap();
    for col in 0..mesh.cols() {
        for row in 0..mesh.rows() {
            let node = mesh.node(col, row);
            assert_eq!(node.display_color, node.basis_color);
        }
    }
}

#[test]
fn empty_canvas_is_rejected() {
    let err = Mesh::build(
        Canvas {
            width: 0,
            height: 100,
        },
        MeshConfig::default(),
        1,
    )
    .unwrap_err();
    assert!(matches!(err, QuadmeshError::Validation(_)));
}

#[test]
fn invalid_config_is_rejected_at_build() {
    let err = Mesh::build(
        Canvas {
            width: 100,
            height: 100,
        },
        config_with_cell(0.0),
        1,
    )
    .unwrap_err();
    assert!(matches!(err, QuadmeshError::Validation(_)));
}
