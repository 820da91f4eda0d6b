use crate::foundation::core::Point;
use crate::mesh::model::Mesh;

impl Mesh {
    /// Advance the animation by one tick.
    ///
    /// With a pointer, every non-sentinel node inside the influence radius is
    /// pulled from its rest position toward the pointer: for distance `d`,
    /// the pull weight is `k = 1 - (d / influence_radius)^2`, zero at the
    /// radius and ignored beyond it, and the node is placed at
    /// `rest + normalize(pointer - rest) * displacement * k`. A pointer
    /// exactly on a rest position leaves the node unmoved.
    ///
    /// Every tick also applies first-order settling per axis:
    /// `current = (rest + current * settle_factor) / (settle_factor + 1)`,
    /// so displaced nodes glide back toward rest whether or not the pointer
    /// is still near.
    #[tracing::instrument(skip(self))]
    pub fn animate(&mut self, pointer: Option<Point>) {
        let config = *self.config();
        let divisor = config.settle_factor + 1.0;

        for col in 0..self.cols() - 1 {
            for row in 0..self.rows() - 1 {
                let node = self.node_mut(col, row);
                let rest = node.rest_position;

                if let Some(pointer) = pointer {
                    let to_pointer = pointer - rest;
                    let d = to_pointer.hypot();
                    let k = 1.0 - (d / config.influence_radius).powi(2);
                    if k > 0.0 && d > 0.0 {
                        node.current_position =
                            rest + to_pointer.normalize() * (config.displacement * k);
                    }
                }

                let current = node.current_position;
                node.current_position = Point::new(
                    (rest.x + current.x * config.settle_factor) / divisor,
                    (rest.y + current.y * config.settle_factor) / divisor,
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mesh/animate.rs"]
mod tests;
