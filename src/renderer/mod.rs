//! Render projection
//!
//! `frame` maps simulation state to a drawable snapshot; `dom` presents
//! that snapshot as absolutely-positioned emoji sprites plus HUD text.
//! Logic correctness lives entirely in `sim` - nothing here feeds back
//! into the simulation.

pub mod frame;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use frame::{RenderFrame, project};

#[cfg(target_arch = "wasm32")]
pub use dom::DomRenderer;
