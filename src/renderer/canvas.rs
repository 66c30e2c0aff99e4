//! Canvas 2D backend
//!
//! Executes a scene display list on an HTML canvas. A canvas without a 2D
//! context simply is not drawn.

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::{DrawCmd, Paint, SceneItem, Shadow, build_scene};
use crate::sim::GameState;

const DASH_PATTERN: [f64; 2] = [5.0, 5.0];

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }

    fn context(&self) -> Option<CanvasRenderingContext2d> {
        self.canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()
    }

    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    /// Draw the current state. Skipped when no 2D context is available.
    pub fn render(&self, state: &GameState, time_ms: f64) {
        let Some(ctx) = self.context() else {
            return;
        };

        for item in build_scene(state, self.viewport(), time_ms) {
            if let Err(e) = draw(&ctx, &item) {
                log::warn!("Draw {:?} failed: {:?}", item.layer, e);
            }
        }
    }
}

fn draw(ctx: &CanvasRenderingContext2d, item: &SceneItem) -> Result<(), JsValue> {
    match &item.cmd {
        DrawCmd::FillRect {
            origin,
            size,
            paint,
        } => {
            apply_fill(ctx, paint)?;
            ctx.fill_rect(
                origin.x as f64,
                origin.y as f64,
                size.x as f64,
                size.y as f64,
            );
        }
        DrawCmd::Line {
            from,
            to,
            color,
            width,
        } => {
            ctx.set_stroke_style_str(color);
            ctx.set_line_width(*width as f64);
            ctx.begin_path();
            ctx.move_to(from.x as f64, from.y as f64);
            ctx.line_to(to.x as f64, to.y as f64);
            ctx.stroke();
        }
        DrawCmd::Ellipse {
            center,
            radii,
            paint,
            shadow,
        } => {
            apply_shadow(ctx, shadow.as_ref());
            apply_fill(ctx, paint)?;
            ctx.begin_path();
            ctx.ellipse(
                center.x as f64,
                center.y as f64,
                radii.x as f64,
                radii.y as f64,
                0.0,
                0.0,
                std::f64::consts::TAU,
            )?;
            ctx.fill();
            apply_shadow(ctx, None);
        }
        DrawCmd::Glyph {
            text,
            pos,
            size,
            shadow,
        } => {
            apply_shadow(ctx, shadow.as_ref());
            ctx.set_font(&format!("{}px Arial", size));
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            apply_shadow(ctx, None);
        }
        DrawCmd::Ring {
            center,
            radius,
            color,
            width,
            dashed,
        } => {
            ctx.set_stroke_style_str(color);
            ctx.set_line_width(*width as f64);
            if *dashed {
                ctx.set_line_dash(&dash_array(&DASH_PATTERN))?;
            }
            ctx.begin_path();
            ctx.arc(
                center.x as f64,
                center.y as f64,
                *radius as f64,
                0.0,
                std::f64::consts::TAU,
            )?;
            ctx.stroke();
            if *dashed {
                ctx.set_line_dash(&dash_array(&[]))?;
            }
        }
    }
    Ok(())
}

fn dash_array(pattern: &[f64]) -> JsValue {
    pattern
        .iter()
        .map(|&v| JsValue::from_f64(v))
        .collect::<js_sys::Array>()
        .into()
}

fn apply_fill(ctx: &CanvasRenderingContext2d, paint: &Paint) -> Result<(), JsValue> {
    match paint {
        Paint::Solid(color) => ctx.set_fill_style_str(color),
        Paint::Linear { from, to, stops } => {
            let gradient =
                ctx.create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64);
            add_stops(&gradient, stops)?;
            ctx.set_fill_style_canvas_gradient(&gradient);
        }
        Paint::Radial {
            inner,
            inner_radius,
            outer,
            outer_radius,
            stops,
        } => {
            let gradient = ctx.create_radial_gradient(
                inner.x as f64,
                inner.y as f64,
                *inner_radius as f64,
                outer.x as f64,
                outer.y as f64,
                *outer_radius as f64,
            )?;
            add_stops(&gradient, stops)?;
            ctx.set_fill_style_canvas_gradient(&gradient);
        }
    }
    Ok(())
}

fn add_stops(gradient: &CanvasGradient, stops: &[(f32, String)]) -> Result<(), JsValue> {
    for (offset, color) in stops {
        gradient.add_color_stop(*offset, color)?;
    }
    Ok(())
}

fn apply_shadow(ctx: &CanvasRenderingContext2d, shadow: Option<&Shadow>) {
    match shadow {
        Some(s) => {
            ctx.set_shadow_color(&s.color);
            ctx.set_shadow_blur(s.blur as f64);
            ctx.set_shadow_offset_x(s.offset.x as f64);
            ctx.set_shadow_offset_y(s.offset.y as f64);
        }
        None => {
            ctx.set_shadow_color("transparent");
            ctx.set_shadow_blur(0.0);
            ctx.set_shadow_offset_x(0.0);
            ctx.set_shadow_offset_y(0.0);
        }
    }
}
