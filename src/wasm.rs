//! WASM bindings for the tiragem-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! Every export takes and returns JSON strings.

use wasm_bindgen::prelude::*;
use serde_json::to_string;

use crate::layout::{calculate_container_dimensions, generate_grid_layout, get_card_scale, LayoutConfig};
use crate::output::{layout_spread_json, slug_hint, SpreadLayoutOutput};
use crate::spread::{builtin_spreads, find_builtin};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    pub fn console_warn(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

/// Returned when the layout output itself cannot be serialized.
const SERIALIZE_FAILED: &str = r#"{"error":{"kind":"json","message":"layout output could not be serialized"}}"#;

fn layout_with(spread_json: &str, config_json: Option<&str>) -> String {
    let output = match layout_spread_json(spread_json, config_json) {
        Ok(output) => output,
        Err(e) => {
            console_error(&format!("Error laying out spread: {}", e));
            SpreadLayoutOutput::from_error(&slug_hint(spread_json), &e)
        }
    };
    if output.error.is_none() && !output.converged {
        console_warn(&format!(
            "Spread '{}' still has {} overlapping card pairs after optimization",
            output.slug, output.residual_collisions
        ));
    }
    to_string(&output).unwrap_or_else(|e| {
        console_error(&format!("Error serializing layout: {}", e));
        SERIALIZE_FAILED.to_string()
    })
}

/// Lay out a spread (or custom spread) with the default configuration.
#[wasm_bindgen]
pub fn layout_spread(spread_json: &str) -> String {
    layout_with(spread_json, None)
}

/// Lay out a spread with a partial `LayoutConfig` override, e.g. `{"card_width": 10}`.
#[wasm_bindgen]
pub fn layout_spread_with_config(spread_json: &str, config_json: &str) -> String {
    layout_with(spread_json, Some(config_json))
}

/// Generated positions for `card_count` cards. Returns a JSON array of `{x, y, rotation}`.
#[wasm_bindgen]
pub fn grid_layout(card_count: usize) -> String {
    let positions = generate_grid_layout(card_count, &LayoutConfig::default());
    to_string(&positions).unwrap_or_else(|_| "[]".to_string())
}

/// CSS scale class for a spread of `card_count` cards.
#[wasm_bindgen]
pub fn card_scale(card_count: usize) -> String {
    get_card_scale(card_count).as_class().to_string()
}

#[wasm_bindgen]
pub fn container_dimensions(card_count: usize) -> String {
    to_string(&calculate_container_dimensions(card_count)).unwrap_or_else(|_| "{}".to_string())
}

/// A built-in spread definition by slug, or `null` if unknown.
#[wasm_bindgen]
pub fn builtin_spread(slug: &str) -> String {
    match find_builtin(slug) {
        Some(spread) => to_string(spread).unwrap_or_else(|_| "null".to_string()),
        None => {
            console_log(&format!("No built-in spread '{}'", slug));
            "null".to_string()
        }
    }
}

/// Every built-in spread definition as a JSON array.
#[wasm_bindgen]
pub fn list_builtin_spreads() -> String {
    to_string(builtin_spreads()).unwrap_or_else(|_| "[]".to_string())
}
