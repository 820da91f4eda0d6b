use crate::foundation::error::QuadmeshResult;
use crate::foundation::math::Rng64;
use crate::mesh::model::Mesh;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the flag makes this explicit at API
/// boundaries. Every color this effect paints is opaque, so premultiplied
/// and straight bytes coincide in practice.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// A renderer that rasterizes a [`Mesh`] into a [`FrameRGBA`].
///
/// `rng` feeds the per-frame re-derivation of cell display colors; backends
/// must draw from it identically so frames stay reproducible across
/// implementations.
pub trait RenderBackend {
    /// Rasterize the mesh's current state into a frame.
    fn render_mesh(&mut self, mesh: &Mesh, rng: &mut Rng64) -> QuadmeshResult<FrameRGBA>;
}

/// Available backend kinds.
///
/// - `Cpu` is always available.
#[derive(Clone, Copy, Debug)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    Cpu,
}

/// Backend-agnostic settings.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// If set, backends clear the target to this RGBA8 color before drawing.
    pub clear_rgba: Option<[u8; 4]>,
}

/// Create a rendering backend implementation.
pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> QuadmeshResult<Box<dyn RenderBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new(
            settings.clone(),
        ))),
    }
}
