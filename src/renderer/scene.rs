//! Presentation boundary
//!
//! The frame loop hands a borrowed `FrameView` to a `Presenter` once per
//! tick. `DrawListPresenter` turns it into colored triangles plus text
//! labels; rasterizing glyphs is left to whatever backend consumes the list,
//! which also owns any font it needs.

use glam::Vec2;

use super::shapes::{self, CIRCLE_SEGMENTS};
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{CursorIcon, Explosion, GameState, InterceptorShot, Projectile, Structure};

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub projectiles: &'a [Projectile],
    pub shots: &'a [InterceptorShot],
    pub explosions: &'a [Explosion],
    /// All structures; only standing ones are drawn
    pub structures: &'a [Structure],
    pub turret_pos: Vec2,
    pub turret_rotation: f32,
    pub reload_bar: f32,
    pub score: u64,
    pub lost: bool,
    pub cursor: CursorIcon,
}

impl<'a> FrameView<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self {
            projectiles: &state.projectiles,
            shots: &state.shots,
            explosions: &state.explosions,
            structures: &state.structures,
            turret_pos: state.turret.pos,
            turret_rotation: state.turret.rotation,
            reload_bar: state.turret.reload_bar,
            score: state.score,
            lost: state.lost,
            cursor: state.turret.cursor,
        }
    }

    /// Structures that are still standing
    pub fn standing(&self) -> impl Iterator<Item = &'a Structure> {
        self.structures.iter().filter(|s| !s.destroyed)
    }
}

/// Something that draws frames
pub trait Presenter {
    fn present(&mut self, frame: &FrameView<'_>);
}

/// Horizontal anchor for a text label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// `pos` is the top-right corner of the text
    TopRight,
    /// `pos` is the centre of the text
    Center,
}

/// Text to be drawn on top of the shapes
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
    pub size: u32,
    pub anchor: Anchor,
    pub color: [f32; 4],
}

pub const SCORE_TEXT_SIZE: u32 = 40;
pub const GAME_OVER_TEXT_SIZE: u32 = 150;
pub const GAME_OVER_TEXT: &str = "GAME OVER";
/// Gap between the score and the right edge of the window
const SCORE_MARGIN: f32 = 6.0;

/// Triangles and labels for one frame, in draw order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
    pub cursor: CursorIcon,
}

impl DrawList {
    /// Build the draw list for a frame
    pub fn build(frame: &FrameView<'_>, trails: bool) -> Self {
        let mut vertices = Vec::new();

        vertices.extend(shapes::rect(
            Vec2::new(0.0, NO_FIRE_ZONE_TOP as f32),
            Vec2::new(WINDOW_WIDTH as f32, NO_FIRE_ZONE_HEIGHT as f32),
            Vec2::ZERO,
            0.0,
            colors::NO_FIRE_ZONE,
        ));

        for shot in frame.shots {
            vertices.extend(shapes::circle(shot.pos, SHOT_RADIUS, colors::SHOT, CIRCLE_SEGMENTS));
        }

        for projectile in frame.projectiles {
            vertices.extend(shapes::circle(
                projectile.pos,
                PROJECTILE_RADIUS,
                colors::PROJECTILE,
                CIRCLE_SEGMENTS,
            ));
            if trails {
                let [from, to] = projectile.trail;
                vertices.extend(shapes::line(from, to, 1.0, colors::TRAIL));
            }
        }

        for structure in frame.standing() {
            vertices.extend(shapes::outlined_rect(
                structure.pos,
                structure.size,
                Vec2::new(structure.size.x / 2.0, 0.0),
                0.0,
                -3.0,
                colors::STRUCTURE,
                colors::STRUCTURE_OUTLINE,
            ));
        }

        for explosion in frame.explosions {
            vertices.extend(shapes::circle(
                explosion.pos,
                explosion.radius,
                colors::explosion(explosion.color()),
                CIRCLE_SEGMENTS,
            ));
        }

        vertices.extend(shapes::outlined_rect(
            frame.turret_pos,
            TURRET_SIZE,
            TURRET_PIVOT,
            frame.turret_rotation,
            2.0,
            colors::TURRET,
            colors::TURRET_OUTLINE,
        ));
        vertices.extend(shapes::rect(
            frame.turret_pos,
            Vec2::new(frame.reload_bar, TURRET_SIZE.y),
            TURRET_PIVOT,
            frame.turret_rotation,
            colors::RELOADING,
        ));

        let mut labels = vec![TextLabel {
            text: frame.score.to_string(),
            pos: Vec2::new(WINDOW_WIDTH as f32 - SCORE_MARGIN, 0.0),
            size: SCORE_TEXT_SIZE,
            anchor: Anchor::TopRight,
            color: colors::TEXT,
        }];
        if frame.lost {
            labels.push(TextLabel {
                text: GAME_OVER_TEXT.to_string(),
                pos: Vec2::new(WINDOW_WIDTH as f32 / 2.0, WINDOW_HEIGHT as f32 / 2.0),
                size: GAME_OVER_TEXT_SIZE,
                anchor: Anchor::Center,
                color: colors::TEXT,
            });
        }

        Self {
            clear_color: colors::BACKGROUND,
            vertices,
            labels,
            cursor: frame.cursor,
        }
    }

    /// Vertex data ready for a GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Presenter that keeps the most recent draw list, for backends that pull
/// frames (and for headless runs)
#[derive(Debug, Default)]
pub struct DrawListPresenter {
    pub trails: bool,
    pub frames_presented: u64,
    last: DrawList,
}

impl DrawListPresenter {
    pub fn new(trails: bool) -> Self {
        Self {
            trails,
            ..Default::default()
        }
    }

    pub fn last(&self) -> &DrawList {
        &self.last
    }
}

impl Presenter for DrawListPresenter {
    fn present(&mut self, frame: &FrameView<'_>) {
        self.last = DrawList::build(frame, self.trails);
        self.frames_presented += 1;
    }
}
