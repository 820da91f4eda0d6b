use crate::foundation::core::{Canvas, Color, Point, Vec2};
use crate::foundation::error::{QuadmeshError, QuadmeshResult};
use crate::foundation::math::Rng64;
use crate::mesh::config::MeshConfig;

/// Extra sentinel cells past each canvas edge so jittered quads never expose
/// a gap at the border.
pub(crate) const OVERSCAN_CELLS: usize = 5;

/// Fixed shift of the grid origin past the top-left corner.
pub(crate) const ORIGIN_SHIFT: Vec2 = Vec2::new(-40.0, -40.0);

/// One cell of the animation grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshNode {
    /// Reference color fixed at construction.
    pub basis_color: Color,
    /// Color actually painted for this node's cell.
    pub display_color: Color,
    /// Fixed anchor coordinate; never mutated after construction.
    pub rest_position: Point,
    /// Animated, display-time coordinate.
    pub current_position: Point,
}

/// A 2D grid of [`MeshNode`]s built once for a canvas.
///
/// The grid is `cols x rows` where `cols = ceil(width / cell_size) +
/// OVERSCAN` and `rows = ceil(height / cell_size) + OVERSCAN`. Nodes in the
/// last column and row are sentinels: they complete the final quads but are
/// never animated or painted as cell origins. The grid never resizes; build
/// a new mesh for a new canvas.
#[derive(Clone, Debug)]
pub struct Mesh {
    canvas: Canvas,
    config: MeshConfig,
    cols: usize,
    rows: usize,
    nodes: Vec<MeshNode>,
}

impl Mesh {
    /// Build a fully-populated mesh for `canvas`.
    ///
    /// Construction is deterministic: the same `(canvas, config, seed)`
    /// always produces the same mesh. Colors bleed diagonally: each node
    /// borrows its red channel from the node above, green from the
    /// upper-left diagonal, and blue from the node to the left, falling back
    /// to `config.start_color` at the top and left edges; borrowed channels
    /// drift by `drift_color_randomness`, fallback channels by
    /// `start_color_randomness`.
    #[tracing::instrument(skip(config))]
    pub fn build(canvas: Canvas, config: MeshConfig, seed: u64) -> QuadmeshResult<Self> {
        config.validate()?;
        if canvas.width == 0 || canvas.height == 0 {
            return Err(QuadmeshError::validation("canvas must be non-empty"));
        }

        let cols = (f64::from(canvas.width) / config.cell_size).ceil() as usize + OVERSCAN_CELLS;
        let rows = (f64::from(canvas.height) / config.cell_size).ceil() as usize + OVERSCAN_CELLS;

        let mut rng = Rng64::new(seed);
        let mut nodes: Vec<MeshNode> = Vec::with_capacity(cols * rows);

        for col in 0..cols {
            for row in 0..rows {
                let nominal = Point::new(
                    col as f64 * config.cell_size,
                    row as f64 * config.cell_size,
                ) + ORIGIN_SHIFT;
                let jitter = Vec2::new(
                    rng.next_symmetric(config.position_jitter),
                    rng.next_symmetric(config.position_jitter),
                );
                let rest = nominal + jitter;

                // Neighbors already built this pass: above is the previous
                // row of this column, left/diagonal are the previous column.
                let above = row
                    .checked_sub(1)
                    .map(|r| nodes[col * rows + r].basis_color);
                let diagonal = match (col.checked_sub(1), row.checked_sub(1)) {
                    (Some(c), Some(r)) => Some(nodes[c * rows + r].basis_color),
                    _ => None,
                };
                let left = col
                    .checked_sub(1)
                    .map(|c| nodes[c * rows + row].basis_color);

                let basis_color = Color::new(
                    walk_channel(&mut rng, &config, above.map(|c| c.r), config.start_color.r),
                    walk_channel(&mut rng, &config, diagonal.map(|c| c.g), config.start_color.g),
                    walk_channel(&mut rng, &config, left.map(|c| c.b), config.start_color.b),
                );
                let display_color = basis_color.varied(&mut rng, 0.0);

                nodes.push(MeshNode {
                    basis_color,
                    display_color,
                    rest_position: rest,
                    current_position: rest,
                });
            }
        }

        Ok(Self {
            canvas,
            config,
            cols,
            rows,
            nodes,
        })
    }

    /// Canvas this mesh was built for.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Config this mesh was built with.
    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    /// Number of columns, sentinels included.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows, sentinels included.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Node at `(col, row)`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= cols()` or `row >= rows()`.
    pub fn node(&self, col: usize, row: usize) -> &MeshNode {
        assert!(col < self.cols && row < self.rows, "node index out of range");
        &self.nodes[col * self.rows + row]
    }

    pub(crate) fn node_mut(&mut self, col: usize, row: usize) -> &mut MeshNode {
        &mut self.nodes[col * self.rows + row]
    }
}

/// Resolve one basis channel: borrow from a neighbor when present (drifting
/// slightly), otherwise fall back to the start color (with the wider
/// start-color walk), and round to integer channel space.
fn walk_channel(rng: &mut Rng64, config: &MeshConfig, borrowed: Option<u8>, fallback: u8) -> i64 {
    let (source, percent) = match borrowed {
        Some(c) => (c, config.drift_color_randomness),
        None => (fallback, config.start_color_randomness),
    };
    let walked = f64::from(source) + rng.next_symmetric(percent / 100.0 * 255.0);
    walked.round() as i64
}

#[cfg(test)]
#[path = "../../tests/unit/mesh/model.rs"]
mod tests;
