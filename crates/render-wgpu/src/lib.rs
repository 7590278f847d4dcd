//! wgpu render backend for the room viewer.
//!
//! Builds the lamp and textured programs from WGSL, uploads the static
//! meshes, the sphere and the four textures, then executes planned frames.
//!
//! # Invariants
//! - The renderer never mutates camera or scene state.
//! - Draws are submitted in the order the frame lists them.
//! - Startup fails on the first mesh, shader or texture error.

mod gpu;
mod mesh;
mod program;
mod scene;
pub mod shaders;
mod texture;

pub use gpu::WgpuRenderer;
pub use mesh::{GpuMesh, GpuSphere};
pub use program::{CompiledStage, ShaderError, ShaderProgram, build_program};
pub use scene::{StartupError, load_scene_images};
pub use texture::{GpuTexture, texture_bind_group_layout};
