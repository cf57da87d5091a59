//! Generated layouts for any card count.
//!
//! Small counts get familiar hand-picked shapes (row, square, pentagram,
//! hexagram). From eight cards on, cards fill a near-square grid row by row.

use crate::spread::TarotSpread;
use super::templates::circle_positions;
use super::{CalculatedPosition, LayoutConfig, LayoutError, LayoutResult, LayoutStrategy};

/// Grid layout for spreads that define no positions of their own.
pub struct GridLayout;

impl LayoutStrategy for GridLayout {
    fn name(&self) -> &'static str {
        "grid"
    }

    fn layout(&self, spread: &TarotSpread, cfg: &LayoutConfig) -> Result<LayoutResult, LayoutError> {
        if spread.card_count == 0 {
            return Err(LayoutError::EmptySpread { slug: spread.slug.clone() });
        }
        Ok(LayoutResult::fixed(self.name(), generate_grid_layout(spread.card_count, cfg)))
    }
}

/// Positions for `card_count` cards. Always returns exactly `card_count` entries.
pub fn generate_grid_layout(card_count: usize, cfg: &LayoutConfig) -> Vec<CalculatedPosition> {
    let p = CalculatedPosition::new;
    match card_count {
        0 => Vec::new(),
        1 => vec![p(50.0, 50.0)],
        2 => vec![p(35.0, 50.0), p(65.0, 50.0)],
        3 => vec![p(20.0, 50.0), p(50.0, 50.0), p(80.0, 50.0)],
        4 => vec![p(35.0, 35.0), p(65.0, 35.0), p(35.0, 65.0), p(65.0, 65.0)],
        5 => circle_positions(5, cfg.circle_radius),
        6 => vec![
            p(25.0, 35.0), p(50.0, 35.0), p(75.0, 35.0),
            p(25.0, 65.0), p(50.0, 65.0), p(75.0, 65.0),
        ],
        7 => {
            let mut out = circle_positions(6, cfg.circle_radius);
            out.push(p(50.0, 50.0));
            out
        }
        n => uniform_grid(n, cfg),
    }
}

fn uniform_grid(n: usize, cfg: &LayoutConfig) -> Vec<CalculatedPosition> {
    let cols = (n as f64).sqrt().ceil() as usize;
    let rows = n.div_ceil(cols);

    let spacing_x = (100.0 - 2.0 * cfg.grid_padding_x) / (cols.saturating_sub(1).max(1)) as f64;
    let spacing_y = (100.0 - 2.0 * cfg.grid_padding_y) / (rows.saturating_sub(1).max(1)) as f64;

    (0..n)
        .map(|i| {
            let col = i % cols;
            let row = i / cols;
            CalculatedPosition::new(
                cfg.grid_padding_x + col as f64 * spacing_x,
                cfg.grid_padding_y + row as f64 * spacing_y,
            )
        })
        .collect()
}
