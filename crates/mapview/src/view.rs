use bevy::prelude::*;

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;
pub const ZOOM_STEP: f32 = 1.2;

/// Pan/zoom state of the map canvas.
///
/// Purely presentational: logical lot coordinates are de-transformed at
/// drop time, so the stored coordinate never depends on the current view.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MapView {
    /// Scale factor, clamped to [MIN_ZOOM, MAX_ZOOM].
    pub zoom: f32,
    /// Canvas translation in screen pixels.
    pub pan: Vec2,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }
}

impl MapView {
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Project a logical lot coordinate to screen space.
    pub fn map_to_screen(&self, logical: Vec2, origin: Vec2) -> Vec2 {
        origin + self.pan + logical * self.zoom
    }

    /// Invert the canvas transform: screen position back to logical
    /// coordinates.
    pub fn screen_to_map(&self, screen: Vec2, origin: Vec2) -> Vec2 {
        (screen - origin - self.pan) / self.zoom
    }
}

/// All drawing goes through egui; the camera only clears the frame.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
