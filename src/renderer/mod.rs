//! Rendering module
//!
//! `projection` and `scene` are pure and platform independent; `canvas`
//! draws the resulting display list with the browser's Canvas 2D API.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod projection;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use projection::{Projected, project};
pub use scene::{DrawCmd, Layer, Paint, SceneItem, build_scene};
