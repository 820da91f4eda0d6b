use super::*;
use crate::foundation::core::Canvas;
use crate::mesh::config::MeshConfig;
use crate::render::backend::{BackendKind, create_backend};

fn test_mesh() -> Mesh {
    let config = MeshConfig {
        cell_size: 40.0,
        ..MeshConfig::default()
    };
    Mesh::build(
        Canvas {
            width: 160,
            height: 80,
        },
        config,
        21,
    )
    .unwrap()
}

#[test]
fn frame_has_canvas_dimensions() {
    let mesh = test_mesh();
    let mut backend = CpuBackend::new(RenderSettings::default());
    let mut rng = Rng64::new(0);
    let frame = backend.render_mesh(&mesh, &mut rng).unwrap();
    assert_eq!(frame.width, 160);
    assert_eq!(frame.height, 80);
    assert_eq!(frame.data.len(), 160 * 80 * 4);
    assert!(frame.premultiplied);
}

#[test]
fn opaque_clear_yields_fully_opaque_frame() {
    let mesh = test_mesh();
    let mut backend = CpuBackend::new(RenderSettings {
        clear_rgba: Some([18, 20, 28, 255]),
    });
    let mut rng = Rng64::new(0);
    let frame = backend.render_mesh(&mesh, &mut rng).unwrap();
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn overscan_covers_the_whole_canvas() {
    // Even without a clear color, the jittered mesh extends past every edge,
    // so the corners are painted.
    let mesh = test_mesh();
    let mut backend = CpuBackend::new(RenderSettings::default());
    let mut rng = Rng64::new(0);
    let frame = backend.render_mesh(&mesh, &mut rng).unwrap();
    let w = frame.width as usize;
    let h = frame.height as usize;
    let alpha_at = |x: usize, y: usize| frame.data[(y * w + x) * 4 + 3];
    for (x0, y0) in [(0, 0), (w - 4, 0), (0, h - 4), (w - 4, h - 4)] {
        let painted = (0..4)
            .any(|dy| (0..4).any(|dx| alpha_at(x0 + dx, y0 + dy) > 0));
        assert!(painted, "corner block at ({x0}, {y0}) was not painted");
    }
    assert!(alpha_at(w / 2, h / 2) > 0);
}

#[test]
fn mesh_pixels_differ_from_clear_color() {
    let mesh = test_mesh();
    let clear = [0u8, 0, 0, 255];
    let mut backend = CpuBackend::new(RenderSettings {
        clear_rgba: Some(clear),
    });
    let mut rng = Rng64::new(0);
    let frame = backend.render_mesh(&mesh, &mut rng).unwrap();
    let painted = frame
        .data
        .chunks_exact(4)
        .filter(|px| px[..3] != clear[..3])
        .count();
    assert!(painted > 0);
}

#[test]
fn rendering_is_deterministic() {
    let mesh = test_mesh();
    let settings = RenderSettings {
        clear_rgba: Some([18, 20, 28, 255]),
    };
    let mut a = CpuBackend::new(settings.clone());
    let mut b = CpuBackend::new(settings);
    let mut rng_a = Rng64::new(5);
    let mut rng_b = Rng64::new(5);
    let frame_a = a.render_mesh(&mesh, &mut rng_a).unwrap();
    let frame_b = b.render_mesh(&mesh, &mut rng_b).unwrap();
    assert_eq!(frame_a.data, frame_b.data);
}

#[test]
fn borderless_config_renders() {
    let config = MeshConfig {
        cell_size: 40.0,
        border_color: None,
        ..MeshConfig::default()
    };
    let mesh = Mesh::build(
        Canvas {
            width: 120,
            height: 60,
        },
        config,
        4,
    )
    .unwrap();
    let mut backend = CpuBackend::new(RenderSettings::default());
    let mut rng = Rng64::new(0);
    let frame = backend.render_mesh(&mesh, &mut rng).unwrap();
    assert_eq!(frame.data.len(), 120 * 60 * 4);
}

#[test]
fn create_backend_produces_working_cpu_renderer() {
    let mesh = test_mesh();
    let mut backend = create_backend(BackendKind::Cpu, &RenderSettings::default()).unwrap();
    let mut rng = Rng64::new(0);
    let frame = backend.render_mesh(&mesh, &mut rng).unwrap();
    assert_eq!(frame.width, mesh.canvas().width);
}

#[test]
fn oversized_canvas_is_rejected() {
    let config = MeshConfig {
        cell_size: 20_000.0,
        ..MeshConfig::default()
    };
    let mesh = Mesh::build(
        Canvas {
            width: 70_000,
            height: 60,
        },
        config,
        4,
    )
    .unwrap();
    let mut backend = CpuBackend::new(RenderSettings::default());
    let mut rng = Rng64::new(0);
    let err = backend.render_mesh(&mesh, &mut rng).unwrap_err();
    assert!(matches!(err, QuadmeshError::Render(_)));
}
