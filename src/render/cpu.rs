use crate::foundation::core::{Color, Point};
use crate::foundation::error::{QuadmeshError, QuadmeshResult};
use crate::foundation::math::Rng64;
use crate::mesh::model::Mesh;
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};

/// CPU raster backend powered by `vello_cpu`.
pub struct CpuBackend {
    settings: RenderSettings,
}

impl CpuBackend {
    /// Create a CPU backend with the given settings.
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(skip(self, mesh, rng))]
    fn render_mesh(&mut self, mesh: &Mesh, rng: &mut Rng64) -> QuadmeshResult<FrameRGBA> {
        let canvas = mesh.canvas();
        let width_u16: u16 = canvas
            .width
            .try_into()
            .map_err(|_| QuadmeshError::render("canvas width exceeds u16"))?;
        let height_u16: u16 = canvas
            .height
            .try_into()
            .map_err(|_| QuadmeshError::render("canvas height exceeds u16"))?;

        let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(canvas.width),
                f64::from(canvas.height),
            ));
        }

        let config = *mesh.config();
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(1.0));

        // Cells only; the last column/row of nodes are sentinel corners.
        for col in 0..mesh.cols() - 1 {
            for row in 0..mesh.rows() - 1 {
                let path = quad_path(
                    mesh.node(col, row).current_position,
                    mesh.node(col + 1, row).current_position,
                    mesh.node(col + 1, row + 1).current_position,
                    mesh.node(col, row + 1).current_position,
                );

                let fill = mesh
                    .node(col, row)
                    .display_color
                    .varied(rng, 0.0)
                    .tinted(config.base_tint, config.base_tint_opacity);
                ctx.set_paint(paint_for(fill));
                ctx.fill_path(&path);

                if let Some(border) = config.border_color {
                    ctx.set_paint(paint_for(border));
                    ctx.stroke_path(&path);
                }
            }
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn paint_for(color: Color) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, 255)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn quad_path(p0: Point, p1: Point, p2: Point, p3: Point) -> vello_cpu::kurbo::BezPath {
    let mut path = vello_cpu::kurbo::BezPath::new();
    path.move_to(point_to_cpu(p0));
    path.line_to(point_to_cpu(p1));
    path.line_to(point_to_cpu(p2));
    path.line_to(point_to_cpu(p3));
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
