//! Output types for React frontend consumption.
//!
//! These structs are serialized to JSON and sent to the React frontend,
//! which renders each position as an absolutely positioned card
//! (`left: x%; top: y%`).

use serde::Serialize;

use crate::layout::{
    calculate_container_dimensions, connection_lines, get_card_scale, recalculate_positions, CardScale,
    ConnectionLine, ContainerDimensions, LayoutConfig, LayoutError, LayoutResult,
};
use crate::spread::{CustomSpread, Emphasis, TarotSpread};

/// A card slot ready for React to display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionOutput {
    pub id: String,
    pub order: usize,
    pub label: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

/// Error information for the frontend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorInfo {
    /// Machine-readable error kind ("empty_spread", "invalid_spread", ...)
    pub kind: &'static str,
    pub message: String,
}

impl From<&LayoutError> for ErrorInfo {
    fn from(e: &LayoutError) -> Self {
        let kind = match e {
            LayoutError::EmptySpread { .. } => "empty_spread",
            LayoutError::TemplateCardCount { .. } => "template_card_count",
            LayoutError::InvalidSpread(_) => "invalid_spread",
            LayoutError::InvalidConfig(_) => "invalid_config",
            LayoutError::Json(_) => "json",
        };
        ErrorInfo { kind, message: e.to_string() }
    }
}

/// The combined output sent to React
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpreadLayoutOutput {
    pub slug: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub positions: Vec<PositionOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<ConnectionLine>,
    pub card_scale: CardScale,
    pub container: ContainerDimensions,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub strategy: &'static str,
    pub converged: bool,
    pub residual_collisions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl SpreadLayoutOutput {
    /// Join a spread's semantic fields with its computed layout.
    pub fn from_layout(spread: &TarotSpread, layout: &LayoutResult) -> Self {
        let ordered = spread.positions_in_order();
        let positions = layout
            .positions
            .iter()
            .enumerate()
            .map(|(i, calc)| match ordered.get(i) {
                Some(p) => PositionOutput {
                    id: p.id.clone(),
                    order: p.order,
                    label: p.label.clone(),
                    description: p.description.clone(),
                    emphasis: p.emphasis,
                    x: calc.x,
                    y: calc.y,
                    rotation: calc.rotation,
                },
                // Generated layouts have no authored slot to borrow from
                None => PositionOutput {
                    id: format!("pos-{}", i + 1),
                    order: i + 1,
                    label: String::new(),
                    description: String::new(),
                    emphasis: None,
                    x: calc.x,
                    y: calc.y,
                    rotation: calc.rotation,
                },
            })
            .collect();

        let card_count = layout.positions.len();
        SpreadLayoutOutput {
            slug: spread.slug.clone(),
            positions,
            connections: connection_lines(spread, &layout.positions),
            card_scale: get_card_scale(card_count),
            container: calculate_container_dimensions(card_count),
            strategy: layout.strategy,
            converged: layout.converged(),
            residual_collisions: layout.residual_collisions,
            error: None,
        }
    }

    pub fn from_error(slug: &str, e: &LayoutError) -> Self {
        SpreadLayoutOutput {
            slug: slug.to_string(),
            positions: vec![],
            connections: vec![],
            card_scale: get_card_scale(0),
            container: calculate_container_dimensions(0),
            strategy: "",
            converged: false,
            residual_collisions: 0,
            error: Some(ErrorInfo::from(e)),
        }
    }
}

/// Parse a spread (plain or custom) and an optional config, validate, lay out.
///
/// Spreads without authored positions skip the position checks so that a
/// bare `{ slug, name, cardCount }` gets a generated layout.
pub fn layout_spread_json(spread_json: &str, config_json: Option<&str>) -> Result<SpreadLayoutOutput, LayoutError> {
    let spread = parse_spread(spread_json)?;
    let cfg = match config_json {
        Some(json) if !json.trim().is_empty() => serde_json::from_str::<LayoutConfig>(json)?,
        _ => LayoutConfig::default(),
    };
    cfg.validate()?;

    if !spread.positions.is_empty() {
        spread.validate()?;
    }
    let layout = recalculate_positions(&spread, &cfg)?;
    Ok(SpreadLayoutOutput::from_layout(&spread, &layout))
}

/// Accepts both a `TarotSpread` and a `CustomSpread` document.
pub fn parse_spread(json: &str) -> Result<TarotSpread, LayoutError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.get("ownerId").is_some() {
        let custom: CustomSpread = serde_json::from_value(value)?;
        return Ok(custom.spread);
    }
    Ok(serde_json::from_value(value)?)
}

/// Best-effort slug extraction for error payloads.
pub fn slug_hint(json: &str) -> String {
    serde_json::from_str::<serde_json::Value>(json)
        .ok()
        .and_then(|v| v.get("slug").and_then(|s| s.as_str()).map(str::to_string))
        .unwrap_or_default()
}
