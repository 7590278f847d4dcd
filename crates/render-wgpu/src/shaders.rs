//! WGSL sources for the two scene programs.
//!
//! Vertex inputs use the fixed attribute locations of the mesh layouts:
//! 0 position, 1 normal, 2 texture coordinate. Every vertex stage reads its
//! matrices from the `Transforms` uniform at group 0, binding 0.

/// Textured program, vertex stage.
pub const TEXTURED_VERTEX: &str = r#"
struct Transforms {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> transforms: Transforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(2) tex_coord: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) tex_coord: vec2<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = transforms.projection * transforms.view * transforms.model
        * vec4<f32>(vertex.position, 1.0);
    out.tex_coord = vertex.tex_coord;
    return out;
}
"#;

/// Textured program, fragment stage. Samples `u_texture` on group 1.
pub const TEXTURED_FRAGMENT: &str = r#"
@group(1) @binding(0)
var u_texture: texture_2d<f32>;
@group(1) @binding(1)
var u_sampler: sampler;

struct FragmentInput {
    @location(0) tex_coord: vec2<f32>,
};

@fragment
fn fs_main(in: FragmentInput) -> @location(0) vec4<f32> {
    return textureSample(u_texture, u_sampler, in.tex_coord);
}
"#;

/// Lamp program, vertex stage.
pub const LAMP_VERTEX: &str = r#"
struct Transforms {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> transforms: Transforms;

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return transforms.projection * transforms.view * transforms.model * vec4<f32>(position, 1.0);
}
"#;

/// Lamp program, fragment stage. Solid white.
pub const LAMP_FRAGMENT: &str = r#"
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0);
}
"#;
