//! Renderer-agnostic layer: the free-fly camera and the per-frame plan.
//!
//! # Invariants
//! - Camera basis vectors are always derived from yaw and pitch.
//! - A frame plan is a pure function of camera, aspect ratio and scene layout.
//! - Backends execute a plan; they never reorder or skip draws.

mod camera;
mod frame;
mod renderer;

pub use camera::{
    Camera, DEFAULT_PITCH, DEFAULT_SENSITIVITY, DEFAULT_SPEED, DEFAULT_YAW, MAX_ZOOM, MIN_ZOOM,
    PITCH_LIMIT,
};
pub use frame::{
    DrawCall, FAR_PLANE, Frame, FrameState, MeshId, NEAR_PLANE, ProgramKind, SceneLayout,
    TextureSlot, plan_frame,
};
pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "roomview-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
