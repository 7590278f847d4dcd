use glam::{Mat4, Vec3};
use roomview_common::Direction;

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;
pub const PITCH_LIMIT: f32 = 89.0;

/// Free-fly camera. Angles and zoom are in degrees.
///
/// `front`, `right` and `up` are never set directly; they are re-derived
/// from yaw and pitch after every orientation change, so they always form an
/// orthonormal basis.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    world_up: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    /// Camera at `position` looking down -Z.
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, DEFAULT_YAW, DEFAULT_PITCH)
    }

    pub fn with_orientation(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            world_up: Vec3::Y,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            zoom: MAX_ZOOM,
        };
        camera.update_vectors();
        camera
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, near, far)
    }

    /// Move along the camera basis, scaled by elapsed time.
    pub fn process_keyboard(&mut self, direction: Direction, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            Direction::Forward => self.position += self.front * velocity,
            Direction::Backward => self.position -= self.front * velocity,
            Direction::Left => self.position -= self.right * velocity,
            Direction::Right => self.position += self.right * velocity,
            Direction::Up => self.position += self.up * velocity,
            Direction::Down => self.position -= self.up * velocity,
        }
    }

    pub fn process_mouse_movement(&mut self, xoffset: f32, yoffset: f32) {
        self.yaw += xoffset * self.mouse_sensitivity;
        self.pitch = (self.pitch + yoffset * self.mouse_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Narrow or widen the field of view. Non-finite offsets are ignored.
    pub fn process_mouse_scroll(&mut self, yoffset: f32) {
        if !yoffset.is_finite() {
            return;
        }
        self.zoom = (self.zoom - yoffset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_orthonormal(camera: &Camera) {
        let (f, r, u) = (camera.front(), camera.right(), camera.up());
        for v in [f, r, u] {
            assert!((v.length() - 1.0).abs() < EPS, "not unit: {v:?}");
        }
        assert!(f.dot(r).abs() < EPS);
        assert!(f.dot(u).abs() < EPS);
        assert!(r.dot(u).abs() < EPS);
    }

    #[test]
    fn initial_camera_looks_down_negative_z() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        camera.process_mouse_movement(0.0, 0.0);
        assert!(camera.front().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(camera.right().abs_diff_eq(Vec3::X, EPS));
        assert!(camera.up().abs_diff_eq(Vec3::Y, EPS));
    }

    #[test]
    fn basis_stays_orthonormal_over_angle_grid() {
        let mut yaw = -360.0;
        while yaw <= 360.0 {
            let mut pitch = -88.5;
            while pitch < 89.0 {
                let camera = Camera::with_orientation(Vec3::ZERO, yaw, pitch);
                assert_orthonormal(&camera);
                pitch += 7.25;
            }
            yaw += 15.5;
        }
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 10_000.0);
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        assert_orthonormal(&camera);
        camera.process_mouse_movement(0.0, -50_000.0);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
        assert_orthonormal(&camera);
    }

    #[test]
    fn mouse_offsets_scale_by_sensitivity() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(100.0, 50.0);
        assert!((camera.yaw() - (DEFAULT_YAW + 10.0)).abs() < EPS);
        assert!((camera.pitch() - 5.0).abs() < EPS);
    }

    #[test]
    fn scroll_clamps_exactly_at_bounds() {
        let mut camera = Camera::default();
        assert_eq!(camera.zoom(), MAX_ZOOM);

        for _ in 0..100 {
            camera.process_mouse_scroll(1.5);
        }
        assert_eq!(camera.zoom(), MIN_ZOOM);

        for _ in 0..100 {
            camera.process_mouse_scroll(-3.0);
        }
        assert_eq!(camera.zoom(), MAX_ZOOM);

        camera.process_mouse_scroll(10.0);
        assert_eq!(camera.zoom(), 35.0);
    }

    #[test]
    fn non_finite_scroll_leaves_zoom_unchanged() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(5.0);
        for offset in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            camera.process_mouse_scroll(offset);
            assert_eq!(camera.zoom(), 40.0);
        }
        assert!(camera.projection_matrix(4.0 / 3.0, 0.1, 100.0).is_finite());
    }

    #[test]
    fn keyboard_movement_is_time_scaled() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_keyboard(Direction::Forward, 0.5);
        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, -1.25), EPS));

        // Two half steps equal one full step.
        let mut a = Camera::new(Vec3::ZERO);
        let mut b = Camera::new(Vec3::ZERO);
        a.process_keyboard(Direction::Right, 1.0);
        b.process_keyboard(Direction::Right, 0.5);
        b.process_keyboard(Direction::Right, 0.5);
        assert!(a.position.abs_diff_eq(b.position, EPS));
    }

    #[test]
    fn opposite_directions_cancel() {
        let mut camera = Camera::with_orientation(Vec3::new(1.0, 2.0, 3.0), 30.0, 20.0);
        let start = camera.position;
        for (there, back) in [
            (Direction::Forward, Direction::Backward),
            (Direction::Left, Direction::Right),
            (Direction::Up, Direction::Down),
        ] {
            camera.process_keyboard(there, 0.3);
            camera.process_keyboard(back, 0.3);
        }
        assert!(camera.position.abs_diff_eq(start, EPS));
    }

    #[test]
    fn vertical_moves_follow_camera_up() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_keyboard(Direction::Up, 1.0);
        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, DEFAULT_SPEED, 0.0), EPS));
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        let eye = camera.view_matrix().transform_point3(camera.position);
        assert!(eye.abs_diff_eq(Vec3::ZERO, EPS));
        let ahead = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!(ahead.abs_diff_eq(Vec3::new(0.0, 0.0, -3.0), EPS));
    }

    #[test]
    fn projection_is_finite_at_zoom_bounds() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(100.0);
        let proj = camera.projection_matrix(800.0 / 600.0, 0.1, 100.0);
        assert!(proj.is_finite());
    }
}
