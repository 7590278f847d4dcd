use crate::camera::Camera;
use glam::{Mat4, Vec3};
use roomview_assets::BuiltinMesh;
use roomview_common::{TextureFiles, Transform, ViewerConfig};

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// The two shader programs the scene needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProgramKind {
    /// Textured geometry sampled from a single texture.
    Textured,
    /// Solid white geometry.
    Lamp,
}

impl ProgramKind {
    pub fn name(self) -> &'static str {
        match self {
            ProgramKind::Textured => "textured",
            ProgramKind::Lamp => "lamp",
        }
    }
}

/// Geometry a draw call refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeshId {
    Builtin(BuiltinMesh),
    Sphere,
}

impl MeshId {
    pub fn name(self) -> &'static str {
        match self {
            MeshId::Builtin(mesh) => mesh.name(),
            MeshId::Sphere => "sphere",
        }
    }
}

/// The four textures of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextureSlot {
    Walls,
    Stars,
    Floor,
    Planet,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 4] = [
        TextureSlot::Walls,
        TextureSlot::Stars,
        TextureSlot::Floor,
        TextureSlot::Planet,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TextureSlot::Walls => "walls",
            TextureSlot::Stars => "stars",
            TextureSlot::Floor => "floor",
            TextureSlot::Planet => "planet",
        }
    }

    pub fn file(self, files: &TextureFiles) -> &str {
        match self {
            TextureSlot::Walls => &files.walls,
            TextureSlot::Stars => &files.stars,
            TextureSlot::Floor => &files.floor,
            TextureSlot::Planet => &files.planet,
        }
    }
}

/// One draw: which program, geometry, texture and model matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub program: ProgramKind,
    pub mesh: MeshId,
    pub texture: Option<TextureSlot>,
    pub model: Mat4,
}

/// Per-frame values, recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    pub delta_time: f32,
    pub eye: Vec3,
    pub fov_degrees: f32,
    pub view: Mat4,
    pub projection: Mat4,
}

/// Everything a backend needs to draw one frame, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub clear_color: [f64; 4],
    pub state: FrameState,
    pub draws: Vec<DrawCall>,
}

/// Static placement of the scene objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    pub scene_model: Mat4,
    pub sphere_model: Mat4,
    pub light_model: Mat4,
    pub clear_color: [f64; 4],
}

impl SceneLayout {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            scene_model: config.scene_transform.to_matrix(),
            sphere_model: config.sphere_transform.to_matrix(),
            light_model: Transform::from_translation_scale(config.light_position, config.light_scale)
                .to_matrix(),
            clear_color: config.clear_color,
        }
    }
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self::from_config(&ViewerConfig::default())
    }
}

/// Build the frame: room, plane and floor with the textured program, the
/// lamp with the lamp program, then the sphere with the planet texture.
///
/// Programs and textures are bound per draw; there is no state sorting.
pub fn plan_frame(camera: &Camera, aspect: f32, delta_time: f32, scene: &SceneLayout) -> Frame {
    let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
    let state = FrameState {
        delta_time,
        eye: camera.position,
        fov_degrees: camera.zoom(),
        view: camera.view_matrix(),
        projection: camera.projection_matrix(aspect, NEAR_PLANE, FAR_PLANE),
    };

    let textured = |mesh: MeshId, texture: TextureSlot, model: Mat4| DrawCall {
        program: ProgramKind::Textured,
        mesh,
        texture: Some(texture),
        model,
    };

    let draws = vec![
        textured(MeshId::Builtin(BuiltinMesh::Room), TextureSlot::Walls, scene.scene_model),
        textured(MeshId::Builtin(BuiltinMesh::Plane), TextureSlot::Stars, scene.scene_model),
        textured(MeshId::Builtin(BuiltinMesh::Floor), TextureSlot::Floor, scene.scene_model),
        DrawCall {
            program: ProgramKind::Lamp,
            mesh: MeshId::Builtin(BuiltinMesh::Lamp),
            texture: None,
            model: scene.light_model,
        },
        textured(MeshId::Sphere, TextureSlot::Planet, scene.sphere_model),
    ];

    Frame {
        clear_color: scene.clear_color,
        state,
        draws,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_frame() -> Frame {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        plan_frame(&camera, 800.0 / 600.0, 0.016, &SceneLayout::default())
    }

    #[test]
    fn draw_order_is_fixed() {
        let frame = default_frame();
        let order: Vec<(ProgramKind, &str, Option<TextureSlot>)> = frame
            .draws
            .iter()
            .map(|d| (d.program, d.mesh.name(), d.texture))
            .collect();
        assert_eq!(
            order,
            vec![
                (ProgramKind::Textured, "room", Some(TextureSlot::Walls)),
                (ProgramKind::Textured, "plane", Some(TextureSlot::Stars)),
                (ProgramKind::Textured, "floor", Some(TextureSlot::Floor)),
                (ProgramKind::Lamp, "lamp", None),
                (ProgramKind::Textured, "sphere", Some(TextureSlot::Planet)),
            ]
        );
    }

    #[test]
    fn lamp_model_is_translate_times_scale() {
        let frame = default_frame();
        let lamp = &frame.draws[3];
        let expected = Mat4::from_translation(Vec3::new(0.5, -1.1, 1.0)) * Mat4::from_scale(Vec3::splat(0.3));
        assert!(lamp.model.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn static_meshes_share_scene_model() {
        let frame = default_frame();
        let scene = Mat4::from_scale(Vec3::splat(2.0));
        for draw in &frame.draws[..3] {
            assert!(draw.model.abs_diff_eq(scene, 1e-6));
        }
        assert_eq!(frame.draws[4].model, Mat4::IDENTITY);
    }

    #[test]
    fn view_and_projection_come_from_camera() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0));
        let frame = plan_frame(&camera, 2.0, 0.0, &SceneLayout::default());
        assert_eq!(frame.state.view, camera.view_matrix());
        assert_eq!(
            frame.state.projection,
            Mat4::perspective_rh(45.0_f32.to_radians(), 2.0, NEAR_PLANE, FAR_PLANE)
        );
        assert_eq!(frame.state.eye, camera.position);
    }

    #[test]
    fn degenerate_aspect_falls_back_to_square() {
        let camera = Camera::default();
        let frame = plan_frame(&camera, f32::NAN, 0.0, &SceneLayout::default());
        assert!(frame.state.projection.is_finite());
    }

    #[test]
    fn clear_color_is_black_by_default() {
        assert_eq!(default_frame().clear_color, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn texture_slots_resolve_configured_files() {
        let files = TextureFiles::default();
        let names: Vec<&str> = TextureSlot::ALL.iter().map(|s| s.file(&files)).collect();
        assert_eq!(names, files.in_load_order());
    }
}
