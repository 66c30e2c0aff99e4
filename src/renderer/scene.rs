//! Scene display list
//!
//! Turns the current game state into an ordered list of 2D draw commands,
//! back to front. Pure: the same state and time always produce the same list,
//! so the list can be built any number of times between ticks.

use glam::Vec2;

use super::projection::{PIXELS_PER_UNIT, project};
use crate::sim::GameState;

/// Height of the floor band at the bottom of the canvas (pixels)
pub const FLOOR_BAND: f32 = 100.0;
/// Number of fading lines drawn across the floor band
pub const FLOOR_LINES: usize = 10;

pub const GOAL_GLYPH: &str = "🐟";
pub const CAT_GLYPH: &str = "🐈\u{200d}⬛";

/// Goal table half-extents at scale 1 (pixels)
const TABLE_RADII: Vec2 = Vec2::new(120.0, 80.0);
/// Cat collision ring radius at scale 1 (pixels)
const CAT_RING_RADIUS: f32 = 25.0;

/// Fill source for shapes
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(String),
    Linear {
        from: Vec2,
        to: Vec2,
        stops: Vec<(f32, String)>,
    },
    Radial {
        inner: Vec2,
        inner_radius: f32,
        outer: Vec2,
        outer_radius: f32,
        stops: Vec<(f32, String)>,
    },
}

/// Glow or drop shadow behind a shape
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub color: String,
    pub blur: f32,
    pub offset: Vec2,
}

impl Shadow {
    fn glow(color: &str, blur: f32) -> Self {
        Self {
            color: color.to_string(),
            blur,
            offset: Vec2::ZERO,
        }
    }
}

/// A single 2D drawing operation in canvas pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect {
        origin: Vec2,
        size: Vec2,
        paint: Paint,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: String,
        width: f32,
    },
    Ellipse {
        center: Vec2,
        radii: Vec2,
        paint: Paint,
        shadow: Option<Shadow>,
    },
    /// Centered text (emoji sprites)
    Glyph {
        text: &'static str,
        pos: Vec2,
        size: f32,
        shadow: Option<Shadow>,
    },
    Ring {
        center: Vec2,
        radius: f32,
        color: &'static str,
        width: f32,
        dashed: bool,
    },
}

/// What a command belongs to, for ordering and inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Background,
    Floor,
    Table,
    Goal,
    /// Enemy by index into `GameState::enemies`
    Enemy(usize),
    Cat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub layer: Layer,
    pub cmd: DrawCmd,
}

/// Build the display list for `state` on a viewport of `viewport` pixels.
/// `time_ms` drives the goal's idle bobbing.
pub fn build_scene(state: &GameState, viewport: Vec2, time_ms: f64) -> Vec<SceneItem> {
    let level = state.level();
    let options = &state.tuning.render;
    let shadow = |s: Shadow| options.shadows.then_some(s);

    let mut items = Vec::with_capacity(8 + FLOOR_LINES + state.enemies.len() * 2);
    let mut push = |layer: Layer, cmd: DrawCmd| items.push(SceneItem { layer, cmd });

    // Backdrop: level sky fading into the floor color
    push(
        Layer::Background,
        DrawCmd::FillRect {
            origin: Vec2::ZERO,
            size: viewport,
            paint: Paint::Linear {
                from: Vec2::ZERO,
                to: Vec2::new(0.0, viewport.y),
                stops: vec![
                    (0.0, level.bg_color.to_string()),
                    (1.0, level.floor_color.to_string()),
                ],
            },
        },
    );

    let floor_top = viewport.y - FLOOR_BAND;
    push(
        Layer::Floor,
        DrawCmd::FillRect {
            origin: Vec2::new(0.0, floor_top),
            size: Vec2::new(viewport.x, FLOOR_BAND),
            paint: Paint::Linear {
                from: Vec2::new(0.0, floor_top),
                to: Vec2::new(0.0, viewport.y),
                stops: vec![
                    (0.0, level.floor_color.to_string()),
                    (1.0, "#000000".to_string()),
                ],
            },
        },
    );
    for i in 0..FLOOR_LINES {
        let y = floor_top + i as f32 * 10.0;
        let alpha = 0.1 - i as f32 * 0.01;
        push(
            Layer::Floor,
            DrawCmd::Line {
                from: Vec2::new(0.0, y),
                to: Vec2::new(viewport.x, y),
                color: format!("rgba(255,255,255,{:.2})", alpha),
                width: 2.0,
            },
        );
    }

    // The table sits under the goal
    let table = project(state.goal, viewport);
    if table.is_visible() {
        let radii = TABLE_RADII * table.scale;
        push(
            Layer::Table,
            DrawCmd::Ellipse {
                center: table.screen,
                radii,
                paint: Paint::Solid(level.table_color.to_string()),
                shadow: shadow(Shadow {
                    color: "rgba(0,0,0,0.3)".to_string(),
                    blur: 15.0,
                    offset: Vec2::new(5.0, 5.0),
                }),
            },
        );
        push(
            Layer::Table,
            DrawCmd::Ellipse {
                center: table.screen,
                radii,
                paint: Paint::Radial {
                    inner: table.screen - Vec2::new(30.0, 20.0),
                    inner_radius: 10.0,
                    outer: table.screen,
                    outer_radius: radii.x,
                    stops: vec![
                        (0.0, "rgba(255,255,255,0.4)".to_string()),
                        (1.0, "rgba(0,0,0,0.1)".to_string()),
                    ],
                },
                shadow: None,
            },
        );

        let bob = if options.reduced_motion {
            0.0
        } else {
            ((time_ms / 500.0).sin() * 5.0) as f32
        };
        push(
            Layer::Goal,
            DrawCmd::Glyph {
                text: GOAL_GLYPH,
                pos: table.screen + Vec2::new(0.0, bob),
                size: 48.0 * table.scale,
                shadow: shadow(Shadow::glow("rgba(249,115,22,0.5)", 20.0)),
            },
        );
    }

    for (i, enemy) in state.enemies.iter().enumerate() {
        let p = project(enemy.pos, viewport);
        if !p.is_visible() {
            continue;
        }
        push(
            Layer::Enemy(i),
            DrawCmd::Glyph {
                text: enemy.kind.glyph(),
                pos: p.screen,
                size: 40.0 * p.scale,
                shadow: shadow(Shadow::glow("rgba(239,68,68,0.4)", 15.0)),
            },
        );
        if options.collision_rings {
            push(
                Layer::Enemy(i),
                DrawCmd::Ring {
                    center: p.screen,
                    radius: enemy.radius * PIXELS_PER_UNIT * p.scale,
                    color: "#ef4444",
                    width: 3.0,
                    dashed: true,
                },
            );
        }
    }

    let cat = project(state.cat, viewport);
    if cat.is_visible() {
        push(
            Layer::Cat,
            DrawCmd::Glyph {
                text: CAT_GLYPH,
                pos: cat.screen,
                size: 40.0 * cat.scale,
                shadow: shadow(Shadow::glow("rgba(139,92,246,0.6)", 25.0)),
            },
        );
        if options.collision_rings {
            push(
                Layer::Cat,
                DrawCmd::Ring {
                    center: cat.screen,
                    radius: CAT_RING_RADIUS * cat.scale,
                    color: "#8B5CF6",
                    width: 3.0,
                    dashed: false,
                },
            );
        }
    }

    items
}
