use glam::Vec2;
use winit::event::MouseScrollDelta;

/// Pixel-precise scroll deltas are divided by this to get wheel lines.
const PIXELS_PER_LINE: f64 = 20.0;

/// Turns absolute cursor positions into look offsets.
///
/// The cursor position before the first event is unknown, so the first
/// position only becomes the baseline.
#[derive(Debug, Clone, Default)]
pub struct MouseTracker {
    last: Option<Vec2>,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset since the previous position. Y is reversed because window
    /// coordinates grow downwards while pitch grows upwards.
    pub fn offset(&mut self, x: f64, y: f64) -> Vec2 {
        let pos = Vec2::new(x as f32, y as f32);
        let last = self.last.replace(pos).unwrap_or(pos);
        Vec2::new(pos.x - last.x, last.y - pos.y)
    }

    /// Forget the baseline; the next position yields a zero offset again.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn has_baseline(&self) -> bool {
        self.last.is_some()
    }
}

/// Vertical scroll amount in wheel lines.
pub fn scroll_lines(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_LINE) as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn first_position_gives_zero_offset() {
        let mut tracker = MouseTracker::new();
        assert_eq!(tracker.offset(1234.0, -77.5), Vec2::ZERO);
        assert!(tracker.has_baseline());
    }

    #[test]
    fn later_positions_give_deltas_with_y_reversed() {
        let mut tracker = MouseTracker::new();
        tracker.offset(400.0, 300.0);
        assert_eq!(tracker.offset(410.0, 290.0), Vec2::new(10.0, 10.0));
        assert_eq!(tracker.offset(405.0, 295.0), Vec2::new(-5.0, -5.0));
    }

    #[test]
    fn reset_restores_first_mouse_rule() {
        let mut tracker = MouseTracker::new();
        tracker.offset(0.0, 0.0);
        tracker.offset(50.0, 50.0);
        tracker.reset();
        assert!(!tracker.has_baseline());
        assert_eq!(tracker.offset(900.0, 10.0), Vec2::ZERO);
    }

    #[test]
    fn scroll_lines_uses_vertical_axis() {
        assert_eq!(scroll_lines(MouseScrollDelta::LineDelta(3.0, -2.0)), -2.0);
        let pixels = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 40.0));
        assert_eq!(scroll_lines(pixels), 2.0);
    }
}
