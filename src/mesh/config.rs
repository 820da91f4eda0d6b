use crate::foundation::core::Color;
use crate::foundation::error::{QuadmeshError, QuadmeshResult};

/// Tuning values for the mesh effect.
///
/// Every value that shapes the motion or the palette lives here rather than
/// as a literal in the engine.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Cell edge length in pixels.
    pub cell_size: f64,
    /// Maximum positional jitter applied to each rest position, per axis.
    pub position_jitter: f64,
    /// Color seeding the top-left of the gradient.
    pub start_color: Color,
    /// Channel walk (percent) applied when a channel falls back to
    /// [`MeshConfig::start_color`].
    pub start_color_randomness: f64,
    /// Channel walk (percent) applied when a channel is borrowed from an
    /// already-built neighbor.
    pub drift_color_randomness: f64,
    /// Tint blended into every cell fill at render time.
    pub base_tint: Color,
    /// Weight of [`MeshConfig::base_tint`] in the render-time blend.
    pub base_tint_opacity: f64,
    /// Stroke color of cell outlines, if any.
    pub border_color: Option<Color>,
    /// Pointer distance beyond which nodes are unaffected.
    pub influence_radius: f64,
    /// Maximum distance a node is pulled toward the pointer.
    pub displacement: f64,
    /// Settling weight: each tick moves a node to
    /// `(rest + current * settle_factor) / (settle_factor + 1)`.
    pub settle_factor: f64,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self::for_width(1280.0)
    }
}

impl MeshConfig {
    /// Config for a viewport of the given width, deriving the cell size so
    /// roughly twenty cells span it.
    pub fn for_width(width: f64) -> Self {
        Self {
            cell_size: width / 20.0,
            position_jitter: 26.0,
            start_color: Color::from_rgb8(80, 90, 250),
            start_color_randomness: 10.0,
            drift_color_randomness: 5.0,
            base_tint: Color::from_rgb8(25, 80, 250),
            base_tint_opacity: 0.4,
            border_color: Some(Color::from_rgb8(18, 31, 45)),
            influence_radius: 420.0,
            displacement: 30.0,
            settle_factor: 50.0,
        }
    }

    /// Validate invariants the engine relies on.
    pub fn validate(&self) -> QuadmeshResult<()> {
        if !(self.cell_size > 0.0) {
            return Err(QuadmeshError::validation("cell_size must be > 0"));
        }
        if !(self.influence_radius > 0.0) {
            return Err(QuadmeshError::validation("influence_radius must be > 0"));
        }
        if !(self.position_jitter >= 0.0) {
            return Err(QuadmeshError::validation("position_jitter must be >= 0"));
        }
        if !(self.start_color_randomness >= 0.0) || !(self.drift_color_randomness >= 0.0) {
            return Err(QuadmeshError::validation(
                "color randomness percentages must be >= 0",
            ));
        }
        if !(self.base_tint_opacity >= 0.0) {
            return Err(QuadmeshError::validation("base_tint_opacity must be >= 0"));
        }
        if !(self.displacement >= 0.0) {
            return Err(QuadmeshError::validation("displacement must be >= 0"));
        }
        if !(self.settle_factor >= 0.0) {
            return Err(QuadmeshError::validation("settle_factor must be >= 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mesh/config.rs"]
mod tests;
