use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::QuadmeshResult;
use crate::foundation::math::Rng64;
use crate::mesh::config::MeshConfig;
use crate::mesh::model::Mesh;
use crate::render::backend::{FrameRGBA, RenderBackend};

// Separates the render-time RNG stream from the construction stream.
const RENDER_STREAM: u64 = 0xD6E8_FEB8_6659_FD93;

/// Owns one animated mesh and its pointer state.
///
/// One animator per surface; all state that the original effect kept in
/// module-level globals (grid, pointer, timestamps) lives here, so multiple
/// independent instances can coexist and tests can drive one without a
/// display.
pub struct Animator {
    mesh: Mesh,
    pointer: Option<Point>,
    rng: Rng64,
}

impl Animator {
    /// Build the mesh and an idle animator for it.
    pub fn new(canvas: Canvas, config: MeshConfig, seed: u64) -> QuadmeshResult<Self> {
        let mesh = Mesh::build(canvas, config, seed)?;
        Ok(Self {
            mesh,
            pointer: None,
            rng: Rng64::new(seed ^ RENDER_STREAM),
        })
    }

    /// The animated mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Latest pointer position, if any has been reported.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Record the latest pointer position in canvas space.
    pub fn set_pointer(&mut self, pointer: Point) {
        self.pointer = Some(pointer);
    }

    /// Forget the pointer; subsequent ticks only settle toward rest.
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Advance the animation by one tick.
    pub fn advance(&mut self) {
        self.mesh.animate(self.pointer);
    }

    /// Rasterize the current state.
    pub fn render(&mut self, backend: &mut dyn RenderBackend) -> QuadmeshResult<FrameRGBA> {
        backend.render_mesh(&self.mesh, &mut self.rng)
    }

    /// Advance, then rasterize.
    pub fn tick(&mut self, backend: &mut dyn RenderBackend) -> QuadmeshResult<FrameRGBA> {
        self.advance();
        self.render(backend)
    }
}

/// Cancellation flag shared between a running loop and its controller.
///
/// Clones observe the same flag, so a handle can be moved to another thread
/// or a signal handler to stop an [`IntervalTicker`]-driven loop.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    /// Create a fresh, uncancelled handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the loop to stop after the current tick.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Source of animation ticks, abstracting the host's display-refresh
/// scheduling.
pub trait TickSource {
    /// Block until the next tick is due.
    ///
    /// Returns `false` when the source is exhausted or cancelled; the
    /// driving loop then ends instead of leaking a callback chain.
    fn next_tick(&mut self) -> bool;
}

/// A tick source that fires exactly `n` times, immediately.
///
/// Used by tests and the CLI, where frames are produced as fast as they can
/// be rendered.
#[derive(Clone, Copy, Debug)]
pub struct FixedTicks {
    remaining: u64,
}

impl FixedTicks {
    /// A source yielding `n` ticks.
    pub fn new(n: u64) -> Self {
        Self { remaining: n }
    }
}

impl TickSource for FixedTicks {
    fn next_tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// A wall-clock paced, cancellable tick source.
#[derive(Clone, Debug)]
pub struct IntervalTicker {
    interval: Duration,
    cancel: CancelHandle,
}

impl IntervalTicker {
    /// Tick every `interval` until `cancel` fires.
    pub fn new(interval: Duration, cancel: CancelHandle) -> Self {
        Self { interval, cancel }
    }
}

impl TickSource for IntervalTicker {
    fn next_tick(&mut self) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        std::thread::sleep(self.interval);
        !self.cancel.is_cancelled()
    }
}

/// Progress counters reported by [`run_loop`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Ticks consumed from the tick source.
    pub ticks: u64,
    /// Frames rendered and delivered to the sink.
    pub frames_rendered: u64,
}

/// Drive an animator from a tick source until it ends.
///
/// Every tick animates and renders; each frame is handed to `on_frame`
/// before the next tick is awaited. Errors from rendering or the sink abort
/// the loop.
#[tracing::instrument(skip_all)]
pub fn run_loop(
    animator: &mut Animator,
    backend: &mut dyn RenderBackend,
    ticks: &mut dyn TickSource,
    mut on_frame: impl FnMut(&FrameRGBA) -> QuadmeshResult<()>,
) -> QuadmeshResult<RunStats> {
    let mut stats = RunStats::default();
    while ticks.next_tick() {
        stats.ticks += 1;
        let frame = animator.tick(backend)?;
        on_frame(&frame)?;
        stats.frames_rendered += 1;
    }
    Ok(stats)
}

#[cfg(test)]
#[path = "../tests/unit/animator.rs"]
mod tests;
