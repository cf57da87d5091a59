//! Property-based invariant tests for the spread layout engine.
//!
//! 1. Generated layouts have exactly one position per card.
//! 2. Generated layouts and templates are deterministic.
//! 3. The optimizer keeps every position inside the bounds.
//! 4. Already separated, in-bounds input comes back unchanged.
//! 5. Two colliding cards end at least the threshold apart, displaced
//!    equally and in opposite directions.
//! 6. Residual collisions reported by the optimizer match a recount.

use proptest::prelude::*;
use tiragem_core::{
    count_collisions, generate_grid_layout, optimize_existing_positions, recalculate_positions,
    spread::builtin_spreads, CalculatedPosition, LayoutConfig,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn position_strategy() -> impl Strategy<Value = CalculatedPosition> {
    (-20.0f64..120.0, -20.0f64..120.0).prop_map(|(x, y)| CalculatedPosition { x, y, rotation: None })
}

fn in_bounds_strategy() -> impl Strategy<Value = CalculatedPosition> {
    (8.0f64..=92.0, 12.0f64..=88.0).prop_map(|(x, y)| CalculatedPosition { x, y, rotation: None })
}

/// Cards on a 3x3 lattice 34% apart, jittered by less than a percent.
/// Any subset is pairwise separated under the default threshold (32).
fn separated_strategy() -> impl Strategy<Value = Vec<CalculatedPosition>> {
    let lattice: Vec<(f64, f64)> = [16.0f64, 50.0, 84.0]
        .into_iter()
        .flat_map(|y| [16.0f64, 50.0, 84.0].into_iter().map(move |x| (x, y)))
        .collect();
    (
        prop::sample::subsequence(lattice, 0..=9),
        prop::collection::vec((-0.5f64..0.5, -0.5f64..0.5), 9),
    )
        .prop_map(|(cells, jitter)| {
            cells
                .into_iter()
                .zip(jitter)
                .map(|((x, y), (jx, jy))| CalculatedPosition { x: x + jx, y: y + jy, rotation: None })
                .collect()
        })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Count invariant
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn grid_has_one_position_per_card(n in 1usize..=64) {
        prop_assert_eq!(generate_grid_layout(n, &LayoutConfig::default()).len(), n);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn grid_is_deterministic(n in 0usize..=64) {
        let cfg = LayoutConfig::default();
        prop_assert_eq!(generate_grid_layout(n, &cfg), generate_grid_layout(n, &cfg));
    }
}

#[test]
fn named_templates_are_deterministic() {
    let cfg = LayoutConfig::default();
    for spread in builtin_spreads() {
        let a = recalculate_positions(spread, &cfg).unwrap();
        let b = recalculate_positions(spread, &cfg).unwrap();
        assert_eq!(a, b, "spread {}", spread.slug);
        assert_eq!(a.positions.len(), spread.card_count);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Bounds invariant
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn optimizer_respects_bounds(positions in prop::collection::vec(position_strategy(), 0..16)) {
        let cfg = LayoutConfig::default();
        let n = positions.len();
        let outcome = optimize_existing_positions(positions, &cfg);
        prop_assert_eq!(outcome.positions.len(), n);
        for p in &outcome.positions {
            prop_assert!(cfg.bounds.contains(p), "{:?} escaped the bounds", p);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Idempotence on separated input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn separated_input_is_untouched(positions in separated_strategy()) {
        let cfg = LayoutConfig::default();
        let outcome = optimize_existing_positions(positions.clone(), &cfg);
        prop_assert_eq!(&outcome.positions, &positions);
        prop_assert!(outcome.converged());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Symmetric repulsion of a single colliding pair
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn colliding_pair_separates_symmetrically(
        cx in 35.0f64..65.0,
        cy in 35.0f64..65.0,
        dx in -10.0f64..10.0,
        dy in -10.0f64..10.0,
    ) {
        // Centred far enough from the edges that clamping never kicks in
        let cfg = LayoutConfig::default();
        let a = CalculatedPosition { x: cx - dx / 2.0, y: cy - dy / 2.0, rotation: None };
        let b = CalculatedPosition { x: cx + dx / 2.0, y: cy + dy / 2.0, rotation: None };

        let outcome = optimize_existing_positions(vec![a, b], &cfg);
        let (a2, b2) = (outcome.positions[0], outcome.positions[1]);

        prop_assert!(a2.distance_to(&b2) >= cfg.collision_threshold() - 1e-6);
        prop_assert!(((a2.x - a.x) + (b2.x - b.x)).abs() < 1e-9);
        prop_assert!(((a2.y - a.y) + (b2.y - b.y)).abs() < 1e-9);
        prop_assert!(outcome.converged());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Residual collision report
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn residual_count_matches_recount(positions in prop::collection::vec(in_bounds_strategy(), 0..16)) {
        let cfg = LayoutConfig::default();
        let outcome = optimize_existing_positions(positions, &cfg);
        prop_assert_eq!(outcome.residual_collisions, count_collisions(&outcome.positions, &cfg));
        prop_assert!(outcome.passes <= cfg.max_iterations);
    }
}
