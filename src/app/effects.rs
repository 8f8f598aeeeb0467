use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_interval_fn, use_window};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::rain::{RainField, FONT_SIZE, GLYPH_FILL, TICK_MS, TRAIL_FILL};

/// Full-viewport falling-glyph backdrop. The canvas sits behind everything
/// and ignores pointer events; all column state lives in [`RainField`], this
/// component just owns the timer and the 2d context.
#[component]
pub fn MatrixRain() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let field = StoredValue::new(RainField::new(0, FONT_SIZE));

    let fit_canvas = move || {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        canvas.set_width(viewport_size(window().inner_width()));
        canvas.set_height(viewport_size(window().inner_height()));
        let _ = field.try_update_value(|field| field.resize(canvas.width()));
    };

    // Size once the canvas exists in the browser; effects never run during
    // server rendering.
    Effect::new(move |_| fit_canvas());

    let _ = use_event_listener(use_window(), ev::resize, move |_| fit_canvas());

    let _ = use_interval_fn(
        move || {
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            let Some(ctx) = context_2d(&canvas) else {
                return;
            };

            let width = f64::from(canvas.width());
            let height = canvas.height();

            ctx.set_fill_style_str(TRAIL_FILL);
            ctx.fill_rect(0.0, 0.0, width, f64::from(height));

            ctx.set_fill_style_str(GLYPH_FILL);
            ctx.set_font(&format!("{FONT_SIZE}px monospace"));

            let glyphs = field
                .try_update_value(|field| field.advance(height, || js_sys::Math::random()))
                .unwrap_or_default();
            for glyph in glyphs {
                if let Err(err) = ctx.fill_text(&glyph.ch.to_string(), glyph.x, glyph.y) {
                    log::warn!("rain frame aborted: {err:?}");
                    break;
                }
            }
        },
        TICK_MS,
    );

    view! { <canvas node_ref=canvas_ref class="fixed inset-0 pointer-events-none z-0 opacity-20"></canvas> }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn viewport_size(dimension: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> u32 {
    dimension
        .ok()
        .and_then(|value| value.as_f64())
        .map(|pixels| pixels as u32)
        .unwrap_or(0)
}
