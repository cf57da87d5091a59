// Collision resolution for authored positions.
//
// Pairwise relaxation:
// - Every unordered pair closer than the collision threshold is pushed apart
//   along the line joining the two centres, each card moving half the deficit
// - Each moved card is clamped back into the bounds straight away
// - Passes repeat until one finds no collision or the pass budget runs out
//
// This is a heuristic. Dense inputs can exhaust the budget with collisions
// left over; those are counted and reported, not treated as errors.

use crate::spread::TarotSpread;
use super::{CalculatedPosition, LayoutConfig, LayoutError, LayoutResult, LayoutStrategy, MAX_ITERATIONS_LIMIT};

/// Pairs this much inside the threshold still count as separated.
const COLLISION_EPSILON: f64 = 1e-6;

/// Keeps authored positions, nudging overlapping cards apart.
pub struct CollisionOptimizer;

impl LayoutStrategy for CollisionOptimizer {
    fn name(&self) -> &'static str {
        "optimizer"
    }

    fn layout(&self, spread: &TarotSpread, cfg: &LayoutConfig) -> Result<LayoutResult, LayoutError> {
        if spread.positions.is_empty() {
            return Err(LayoutError::EmptySpread { slug: spread.slug.clone() });
        }
        let working = spread
            .positions_in_order()
            .into_iter()
            .map(|p| p.calculated())
            .collect();

        let outcome = optimize_existing_positions(working, cfg);
        Ok(LayoutResult {
            positions: outcome.positions,
            strategy: self.name(),
            passes: outcome.passes,
            residual_collisions: outcome.residual_collisions,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeOutcome {
    pub positions: Vec<CalculatedPosition>,
    /// Passes actually run, including the final collision-free one.
    pub passes: usize,
    /// Pairs still colliding when the optimizer stopped.
    pub residual_collisions: usize,
}

impl OptimizeOutcome {
    pub fn converged(&self) -> bool {
        self.residual_collisions == 0
    }
}

fn collides(a: &CalculatedPosition, b: &CalculatedPosition, threshold: f64) -> bool {
    a.distance_to(b) < threshold - COLLISION_EPSILON
}

/// Number of unordered pairs closer than the collision threshold.
pub fn count_collisions(positions: &[CalculatedPosition], cfg: &LayoutConfig) -> usize {
    let threshold = cfg.collision_threshold();
    let mut count = 0;
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            if collides(&positions[i], &positions[j], threshold) {
                count += 1;
            }
        }
    }
    count
}

/// Push overlapping positions apart. Takes ownership of the working buffer
/// and hands it back adjusted; the caller's spread is never touched.
pub fn optimize_existing_positions(mut positions: Vec<CalculatedPosition>, cfg: &LayoutConfig) -> OptimizeOutcome {
    let threshold = cfg.collision_threshold();
    let bounds = cfg.bounds;
    let budget = cfg.max_iterations.min(MAX_ITERATIONS_LIMIT);
    let mut passes = 0;

    while passes < budget {
        passes += 1;
        let mut collisions = 0;

        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let (a, b) = (positions[i], positions[j]);
                let distance = a.distance_to(&b);
                if distance >= threshold - COLLISION_EPSILON {
                    continue;
                }
                collisions += 1;

                // Coincident centres give atan2(0, 0) = 0: a horizontal push.
                let angle = (b.y - a.y).atan2(b.x - a.x);
                let offset = (threshold - distance) / 2.0;
                let (dx, dy) = (angle.cos() * offset, angle.sin() * offset);

                let pa = &mut positions[i];
                pa.x -= dx;
                pa.y -= dy;
                bounds.clamp(pa);

                let pb = &mut positions[j];
                pb.x += dx;
                pb.y += dy;
                bounds.clamp(pb);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(pass = passes, collisions, "collision pass");

        if collisions == 0 {
            break;
        }
    }

    for p in &mut positions {
        bounds.clamp(p);
    }

    let residual_collisions = count_collisions(&positions, cfg);
    #[cfg(feature = "tracing")]
    if residual_collisions > 0 {
        tracing::warn!(
            passes,
            residual_collisions,
            cards = positions.len(),
            "collision budget exhausted, returning best-effort layout"
        );
    }

    OptimizeOutcome { positions, passes, residual_collisions }
}
