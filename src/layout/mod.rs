// Spread layout engine.
//
// Turns spread definitions into card coordinates in a percentage space
// (0..100 on both axes, origin top-left) that the renderer uses directly as
// `left: x%; top: y%`.
//
// Goals:
// - Deterministic: no randomness, no hidden state between calls
// - Named spreads get their hand-tuned template
// - Authored positions are kept but nudged apart when cards would overlap
// - Spreads without positions get a generated layout for their card count
//
// Submodules:
// - templates: slug-keyed coordinate tables
// - grid: generated layouts for any card count
// - collision: pairwise relaxation of overlapping positions
// - scale: card scale and container size breakpoints
// - connections: energy lines between computed positions

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::spread::{SpreadError, TarotSpread};

mod collision;
mod connections;
mod grid;
mod scale;
mod templates;

pub use collision::{count_collisions, optimize_existing_positions, CollisionOptimizer, OptimizeOutcome};
pub use connections::{connection_lines, ConnectionLine};
pub use grid::{generate_grid_layout, GridLayout};
pub use scale::{calculate_container_dimensions, get_card_scale, CardScale, ContainerDimensions};
pub use templates::{celtic_cross_layout, universe_advice_layout, NamedTemplate};

/// A computed card position. Carries no semantic fields.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedPosition {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl CalculatedPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, rotation: Some(0.0) }
    }

    pub fn rotated(x: f64, y: f64, degrees: f64) -> Self {
        Self { x, y, rotation: Some(degrees) }
    }

    pub fn distance_to(&self, other: &CalculatedPosition) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Allowed range for card centres, in percent.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self { min_x: 8.0, max_x: 92.0, min_y: 12.0, max_y: 88.0 }
    }
}

impl Bounds {
    /// Pull a position inside the bounds. Reversed bounds resolve to the
    /// max edge instead of panicking; `LayoutConfig::validate` rejects them.
    pub fn clamp(&self, p: &mut CalculatedPosition) {
        p.x = p.x.max(self.min_x).min(self.max_x);
        p.y = p.y.max(self.min_y).min(self.max_y);
    }

    pub fn contains(&self, p: &CalculatedPosition) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Card width as percent of the container width.
    pub card_width: f64,
    /// Card height as percent of the container height.
    pub card_height: f64,
    /// Minimum horizontal gap between cards.
    pub min_spacing_x: f64,
    /// Minimum vertical gap between cards.
    pub min_spacing_y: f64,
    /// Card centres are kept inside these bounds by the optimizer.
    pub bounds: Bounds,
    /// Full passes the optimizer may run before giving up.
    pub max_iterations: usize,
    /// Outer padding of generated grids (8+ cards).
    pub grid_padding_x: f64,
    pub grid_padding_y: f64,
    /// Radius of circular layouts (pentagram, hexagram).
    pub circle_radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 12.0,
            card_height: 20.0,
            min_spacing_x: 8.0,
            min_spacing_y: 12.0,
            bounds: Bounds::default(),
            max_iterations: 5,
            grid_padding_x: 12.0,
            grid_padding_y: 15.0,
            circle_radius: 35.0,
        }
    }
}

/// Upper limit for `LayoutConfig::max_iterations`.
pub const MAX_ITERATIONS_LIMIT: usize = 100;

impl LayoutConfig {
    /// Centre-to-centre distance below which two cards overlap.
    pub fn collision_threshold(&self) -> f64 {
        (self.card_width + self.min_spacing_x).max(self.card_height + self.min_spacing_y)
    }

    /// Reject configs the engine cannot lay out with: non-finite or negative
    /// sizes, reversed bounds, or a pass budget above `MAX_ITERATIONS_LIMIT`.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let sizes = [
            ("card_width", self.card_width),
            ("card_height", self.card_height),
            ("min_spacing_x", self.min_spacing_x),
            ("min_spacing_y", self.min_spacing_y),
            ("grid_padding_x", self.grid_padding_x),
            ("grid_padding_y", self.grid_padding_y),
            ("circle_radius", self.circle_radius),
        ];
        if let Some((name, value)) = sizes.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "{} must be a finite non-negative number, got {}",
                name, value
            )));
        }

        let b = &self.bounds;
        let edges = [b.min_x, b.max_x, b.min_y, b.max_y];
        if edges.iter().any(|v| !v.is_finite()) {
            return Err(LayoutError::InvalidConfig("bounds must be finite".to_string()));
        }
        if b.min_x > b.max_x || b.min_y > b.max_y {
            return Err(LayoutError::InvalidConfig(format!(
                "bounds are reversed: x in [{}, {}], y in [{}, {}]",
                b.min_x, b.max_x, b.min_y, b.max_y
            )));
        }

        if self.max_iterations > MAX_ITERATIONS_LIMIT {
            return Err(LayoutError::InvalidConfig(format!(
                "max_iterations is {}, at most {} allowed",
                self.max_iterations, MAX_ITERATIONS_LIMIT
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    /// One entry per card, in reading order.
    pub positions: Vec<CalculatedPosition>,
    /// Name of the strategy that produced the positions.
    pub strategy: &'static str,
    /// Optimizer passes run (0 for templates and grids).
    pub passes: usize,
    /// Pairs still closer than the collision threshold.
    pub residual_collisions: usize,
}

impl LayoutResult {
    pub fn fixed(strategy: &'static str, positions: Vec<CalculatedPosition>) -> Self {
        Self { positions, strategy, passes: 0, residual_collisions: 0 }
    }

    pub fn converged(&self) -> bool {
        self.residual_collisions == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Nothing to lay out: no positions and cardCount is zero.
    EmptySpread { slug: String },
    /// A named template was selected but the spread has a different card count.
    TemplateCardCount { slug: String, expected: usize, actual: usize },
    InvalidSpread(SpreadError),
    /// The layout config cannot be used (see `LayoutConfig::validate`).
    InvalidConfig(String),
    /// Input or config JSON could not be read.
    Json(String),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::EmptySpread { slug } => write!(f, "spread '{}' has no cards to lay out", slug),
            LayoutError::TemplateCardCount { slug, expected, actual } => write!(
                f,
                "layout template '{}' places {} cards but the spread has {}",
                slug, expected, actual
            ),
            LayoutError::InvalidSpread(e) => write!(f, "invalid spread: {}", e),
            LayoutError::InvalidConfig(msg) => write!(f, "invalid layout config: {}", msg),
            LayoutError::Json(msg) => write!(f, "invalid JSON: {}", msg),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::InvalidSpread(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpreadError> for LayoutError {
    fn from(e: SpreadError) -> Self {
        LayoutError::InvalidSpread(e)
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(e: serde_json::Error) -> Self {
        LayoutError::Json(e.to_string())
    }
}

/// A way of producing positions for a spread.
pub trait LayoutStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn layout(&self, spread: &TarotSpread, cfg: &LayoutConfig) -> Result<LayoutResult, LayoutError>;
}

/// Slug-keyed named layouts, with the generic strategies as fallback.
pub struct LayoutRegistry {
    named: HashMap<String, Box<dyn LayoutStrategy>>,
}

static BUILTIN_REGISTRY: OnceLock<LayoutRegistry> = OnceLock::new();

impl LayoutRegistry {
    /// A registry with no named layouts; every spread takes the generic path.
    pub fn empty() -> Self {
        Self { named: HashMap::new() }
    }

    /// Registry with the built-in templates.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register("cruz-celta", Box::new(NamedTemplate::celtic_cross()));
        registry.register("conselho-universo", Box::new(NamedTemplate::universe_advice()));
        registry
    }

    /// Shared read-only instance of [`LayoutRegistry::builtin`].
    pub fn shared() -> &'static LayoutRegistry {
        BUILTIN_REGISTRY.get_or_init(Self::builtin)
    }

    /// Register a named layout. Replaces any layout already bound to `slug`.
    pub fn register(&mut self, slug: &str, strategy: Box<dyn LayoutStrategy>) {
        self.named.insert(slug.to_string(), strategy);
    }

    pub fn has_named(&self, slug: &str) -> bool {
        self.named.contains_key(slug)
    }

    /// Pick the strategy for a spread:
    /// named template by slug, else the optimizer over authored positions,
    /// else a generated grid for the card count.
    pub fn strategy_for(&self, spread: &TarotSpread) -> &dyn LayoutStrategy {
        if let Some(named) = self.named.get(&spread.slug) {
            return named.as_ref();
        }
        if !spread.positions.is_empty() {
            return &CollisionOptimizer;
        }
        &GridLayout
    }

    pub fn recalculate(&self, spread: &TarotSpread, cfg: &LayoutConfig) -> Result<LayoutResult, LayoutError> {
        cfg.validate()?;
        let strategy = self.strategy_for(spread);
        #[cfg(feature = "tracing")]
        tracing::debug!(slug = %spread.slug, strategy = strategy.name(), "recalculating spread positions");
        strategy.layout(spread, cfg)
    }
}

/// Lay out a spread with the built-in named templates.
pub fn recalculate_positions(spread: &TarotSpread, cfg: &LayoutConfig) -> Result<LayoutResult, LayoutError> {
    LayoutRegistry::shared().recalculate(spread, cfg)
}
