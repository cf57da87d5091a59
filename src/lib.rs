//! Tiragem core: card layout for tarot spreads.
//!
//! Positions are percentages of the spread container (origin top-left),
//! ready for `left: x%; top: y%` in the frontend.

pub mod layout;
pub mod output;
pub mod spread;
mod wasm;

pub use layout::{
    calculate_container_dimensions, count_collisions, generate_grid_layout, get_card_scale,
    optimize_existing_positions, recalculate_positions, Bounds, CalculatedPosition, CardScale,
    ContainerDimensions, LayoutConfig, LayoutError, LayoutRegistry, LayoutResult, LayoutStrategy,
    MAX_ITERATIONS_LIMIT,
};
pub use output::{layout_spread_json, SpreadLayoutOutput};
pub use spread::{CustomSpread, Emphasis, SpreadError, SpreadPosition, TarotSpread};
pub use wasm::*;
