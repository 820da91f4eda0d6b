use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::error::{QuadmeshError, QuadmeshResult};

/// Maps pointer positions from viewport coordinates into canvas space.
///
/// A host embeds the animation surface somewhere on screen, possibly scaled:
/// the surface occupies `rect` in viewport coordinates while its backing
/// store is `backing` pixels. Pointer events arrive in viewport coordinates;
/// the mesh animates in backing-store coordinates.
#[derive(Clone, Copy, Debug)]
pub struct PointerMap {
    rect: Rect,
    backing: Canvas,
}

impl PointerMap {
    /// Create a map for a surface displayed at `rect` with a `backing`
    /// resolution.
    pub fn new(rect: Rect, backing: Canvas) -> QuadmeshResult<Self> {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return Err(QuadmeshError::validation(
                "displayed rect must have positive size",
            ));
        }
        if backing.width == 0 || backing.height == 0 {
            return Err(QuadmeshError::validation("backing canvas must be non-empty"));
        }
        Ok(Self { rect, backing })
    }

    /// Convert a viewport-space position to canvas space.
    ///
    /// Positions outside the displayed rect map outside `[0, backing)`;
    /// callers decide whether off-surface pointers should still influence
    /// the mesh.
    pub fn to_canvas(&self, client: Point) -> Point {
        let scale_x = f64::from(self.backing.width) / self.rect.width();
        let scale_y = f64::from(self.backing.height) / self.rect.height();
        Point::new(
            (client.x - self.rect.x0) * scale_x,
            (client.y - self.rect.y0) * scale_y,
        )
    }
}

#[cfg(test)]
#[path = "../tests/unit/pointer.rs"]
mod tests;
