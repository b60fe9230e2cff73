use macroquad::prelude::*;

/// Letterbox fit of the active ruleset's canvas into the OS window. The
/// three rulesets use different canvas sizes, so the mapping is recomputed
/// every frame from the current screen dimensions.
pub struct Viewport {
    pub scale: f32,
    /// Screen-space top-left corner of the canvas.
    pub offset: Vec2,
    pub canvas_size: Vec2,
    screen_size: Vec2,
}

impl Viewport {
    pub fn fit(screen_w: f32, screen_h: f32, canvas_w: f32, canvas_h: f32) -> Self {
        let scale = (screen_w / canvas_w).min(screen_h / canvas_h);
        let offset = vec2(
            (screen_w - canvas_w * scale) * 0.5,
            (screen_h - canvas_h * scale) * 0.5,
        );
        Self {
            scale,
            offset,
            canvas_size: vec2(canvas_w, canvas_h),
            screen_size: vec2(screen_w, screen_h),
        }
    }

    /// Camera that draws canvas coordinates centered at the fitted scale,
    /// y-down to match screen space.
    pub fn to_macroquad_camera(&self) -> Camera2D {
        Camera2D {
            target: self.canvas_size * 0.5,
            zoom: vec2(
                2.0 * self.scale / self.screen_size.x,
                -2.0 * self.scale / self.screen_size.y,
            ),
            ..Default::default()
        }
    }

    /// Convert a mouse position to canvas coordinates. May land outside the
    /// canvas when the click hits the letterbox.
    pub fn screen_to_canvas(&self, screen_pos: Vec2) -> Vec2 {
        (screen_pos - self.offset) / self.scale
    }
}
