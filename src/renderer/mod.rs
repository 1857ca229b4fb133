//! Scene rendering
//!
//! Draws the game through a minimal 2D `Surface` so the same pass runs on a
//! browser canvas or on a recording surface in tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use shapes::{EYE_OFFSETS, MOUTH_WEDGES, Wedge, eye_center, mouth_wedge};

use glam::Vec2;

use crate::config::GameConfig;
use crate::sim::{Direction, GameState};

/// Colours for one chomper (avatar or enemy)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChomperColors {
    pub body: &'static str,
    pub eye: &'static str,
}

pub const AVATAR_COLORS: ChomperColors = ChomperColors {
    body: "#FFFF00",
    eye: "#000000",
};

pub const ENEMY_COLORS: ChomperColors = ChomperColors {
    body: "#FF0000",
    eye: "#FFFFFF",
};

pub const TARGET_COLOR: &str = "#00FF00";

/// Letters are drawn slightly larger than their nominal size
pub const TARGET_FONT_EXTRA_PX: f32 = 2.0;

/// An addressable 2D drawing surface
pub trait Surface {
    type Error;

    /// Clear a rectangle starting at the origin
    fn clear(&mut self, size: Vec2) -> Result<(), Self::Error>;

    /// Filled pie slice from `start` to `end` (radians, clockwise), closed
    /// through the centre
    fn fill_wedge(
        &mut self,
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        color: &str,
    ) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), Self::Error>;

    /// Text centred on `at` (horizontally and vertically)
    fn fill_text(
        &mut self,
        text: &str,
        at: Vec2,
        font_px: f32,
        color: &str,
    ) -> Result<(), Self::Error>;
}

/// Draw one chomper with its mouth open by `mouth` radians
pub fn draw_chomper<S: Surface>(
    surface: &mut S,
    center: Vec2,
    radius: f32,
    facing: Direction,
    mouth: f32,
    colors: ChomperColors,
) -> Result<(), S::Error> {
    let wedge = mouth_wedge(facing, mouth);
    surface.fill_wedge(center, radius, wedge.start, wedge.end, colors.body)?;
    surface.fill_circle(eye_center(center, radius, facing), radius / 8.0, colors.eye)
}

/// Clear the surface and redraw the whole scene from `state`
pub fn draw_scene<S: Surface>(
    surface: &mut S,
    state: &GameState,
    config: &GameConfig,
) -> Result<(), S::Error> {
    surface.clear(state.bounds)?;

    let avatar = &state.avatar;
    draw_chomper(
        surface,
        avatar.pos,
        avatar.radius,
        avatar.facing,
        state.mouth.angle,
        AVATAR_COLORS,
    )?;

    if let Some(target) = &state.target {
        let mut buf = [0u8; 4];
        surface.fill_text(
            target.symbol.encode_utf8(&mut buf),
            target.pos,
            config.target_size + TARGET_FONT_EXTRA_PX,
            TARGET_COLOR,
        )?;
    }

    for enemy in &state.enemies {
        draw_chomper(
            surface,
            enemy.pos,
            enemy.radius,
            enemy.facing,
            state.mouth.angle,
            ENEMY_COLORS,
        )?;
    }

    Ok(())
}
