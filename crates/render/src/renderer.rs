use crate::frame::Frame;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer consumes a planned [`Frame`] and produces output. It never
/// mutates camera or scene state.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one planned frame.
    fn render(&self, frame: &Frame) -> Self::Output;
}

/// Text renderer for frame plans.
///
/// Produces one line per draw call in submission order. Used by the CLI and
/// for checking the render loop without a graphics context.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &Frame) -> String {
        let state = &frame.state;
        let [r, g, b, a] = frame.clear_color;
        let mut out = String::new();
        out.push_str(&format!("=== Frame (dt={:.4}s) ===\n", state.delta_time));
        out.push_str(&format!(
            "Camera: eye=({:.2}, {:.2}, {:.2}) fov={:.1}\n",
            state.eye.x, state.eye.y, state.eye.z, state.fov_degrees
        ));
        out.push_str(&format!("Clear: ({r:.2}, {g:.2}, {b:.2}, {a:.2})\n"));
        out.push_str(&format!("Draws: {}\n", frame.draws.len()));

        for (i, draw) in frame.draws.iter().enumerate() {
            let (scale, _, translation) = draw.model.to_scale_rotation_translation();
            let texture = draw.texture.map_or("-", |t| t.name());
            out.push_str(&format!(
                "  [{i}] program={} mesh={} texture={} pos=({:.2}, {:.2}, {:.2}) scale=({:.2}, {:.2}, {:.2})\n",
                draw.program.name(),
                draw.mesh.name(),
                texture,
                translation.x,
                translation.y,
                translation.z,
                scale.x,
                scale.y,
                scale.z
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::frame::{SceneLayout, plan_frame};
    use glam::Vec3;

    #[test]
    fn lists_every_draw_in_order() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        let frame = plan_frame(&camera, 4.0 / 3.0, 0.02, &SceneLayout::default());
        let output = DebugTextRenderer::new().render(&frame);

        assert!(output.contains("Draws: 5"));
        assert!(output.contains("eye=(0.00, 0.00, 3.00) fov=45.0"));
        let room = output.find("mesh=room").unwrap();
        let lamp = output.find("mesh=lamp").unwrap();
        let sphere = output.find("mesh=sphere").unwrap();
        assert!(room < lamp && lamp < sphere);
    }

    #[test]
    fn every_section_ends_with_a_newline() {
        let frame = plan_frame(&Camera::default(), 1.0, 0.5, &SceneLayout::default());
        let output = DebugTextRenderer::new().render(&frame);
        assert!(output.starts_with("=== Frame (dt=0.5000s) ===\n"));
        assert_eq!(output.lines().count(), 4 + frame.draws.len());
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn lamp_line_shows_light_placement() {
        let frame = plan_frame(&Camera::default(), 1.0, 0.0, &SceneLayout::default());
        let output = DebugTextRenderer::new().render(&frame);
        let lamp_line = output.lines().find(|l| l.contains("mesh=lamp")).unwrap();
        assert!(lamp_line.contains("program=lamp"));
        assert!(lamp_line.contains("texture=-"));
        assert!(lamp_line.contains("pos=(0.50, -1.10, 1.00)"));
        assert!(lamp_line.contains("scale=(0.30, 0.30, 0.30)"));
    }
}
