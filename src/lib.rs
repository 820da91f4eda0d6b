//! Quadmesh is a pointer-reactive animated background renderer.
//!
//! The effect is a 2D grid of colored nodes with jittered rest positions and
//! smoothly bleeding colors. Each tick, nodes near the pointer are pulled
//! toward it with a quadratic falloff and every node settles elastically back
//! toward its rest position; the grid is then rasterized as a mesh of filled
//! quadrilaterals into an RGBA8 frame.
//!
//! # Pipeline overview
//!
//! 1. **Build**: `Canvas + MeshConfig + seed -> Mesh` (rest positions, colors)
//! 2. **Animate**: `Mesh + Option<Point> -> Mesh` (pointer pull + settling)
//! 3. **Render**: `Mesh -> FrameRGBA` (CPU backend via `vello_cpu`)
//! 4. **Drive**: [`run_loop`] repeats animate/render from a cancellable
//!    [`TickSource`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: construction and every frame are pure
//!   functions of `(canvas, config, seed)` and the pointer history; the only
//!   randomness source is a seeded [`Rng64`].
//! - **Host-independent**: no display surface, event loop, or wall clock is
//!   required; those concerns live behind [`TickSource`] and [`PointerMap`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animator;
mod foundation;
mod mesh;
mod pointer;
mod render;

pub use animator::{
    Animator, CancelHandle, FixedTicks, IntervalTicker, RunStats, TickSource, run_loop,
};
pub use foundation::core::{Canvas, Color, Point, Rect, Vec2};
pub use foundation::error::{QuadmeshError, QuadmeshResult};
pub use foundation::math::Rng64;
pub use mesh::config::MeshConfig;
pub use mesh::model::{Mesh, MeshNode};
pub use pointer::PointerMap;
pub use render::backend::{BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend};
pub use render::cpu::CpuBackend;
