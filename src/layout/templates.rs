//! Named layout templates.
//!
//! Hand-tuned coordinates for well-known spreads. A template only emits
//! coordinates and rotation; stacking order (the Celtic Cross challenge
//! card lying over the present card) is left to the renderer.

use crate::spread::TarotSpread;
use super::{CalculatedPosition, LayoutConfig, LayoutError, LayoutResult, LayoutStrategy};

/// A slug-bound template producing a fixed number of positions.
pub struct NamedTemplate {
    slug: &'static str,
    card_count: usize,
    build: fn(&LayoutConfig) -> Vec<CalculatedPosition>,
}

impl NamedTemplate {
    pub const fn new(
        slug: &'static str,
        card_count: usize,
        build: fn(&LayoutConfig) -> Vec<CalculatedPosition>,
    ) -> Self {
        Self { slug, card_count, build }
    }

    pub const fn celtic_cross() -> Self {
        Self::new("cruz-celta", 10, celtic_cross_layout)
    }

    pub const fn universe_advice() -> Self {
        Self::new("conselho-universo", 6, universe_advice_layout)
    }
}

impl LayoutStrategy for NamedTemplate {
    fn name(&self) -> &'static str {
        self.slug
    }

    fn layout(&self, spread: &TarotSpread, cfg: &LayoutConfig) -> Result<LayoutResult, LayoutError> {
        if spread.card_count != self.card_count {
            return Err(LayoutError::TemplateCardCount {
                slug: self.slug.to_string(),
                expected: self.card_count,
                actual: spread.card_count,
            });
        }
        Ok(LayoutResult::fixed(self.slug, (self.build)(cfg)))
    }
}

/// Celtic Cross: a "+" of six cards (2 crossing 1) and a staff of four
/// cards on the right, read bottom to top.
pub fn celtic_cross_layout(_cfg: &LayoutConfig) -> Vec<CalculatedPosition> {
    vec![
        // The cross
        CalculatedPosition::rotated(38.0, 50.0, 0.0),
        CalculatedPosition::rotated(38.0, 50.0, 90.0),
        CalculatedPosition::rotated(38.0, 78.0, 0.0),
        CalculatedPosition::rotated(16.0, 50.0, 0.0),
        CalculatedPosition::rotated(38.0, 22.0, 0.0),
        CalculatedPosition::rotated(60.0, 50.0, 0.0),
        // The staff
        CalculatedPosition::rotated(82.0, 84.0, 0.0),
        CalculatedPosition::rotated(82.0, 62.0, 0.0),
        CalculatedPosition::rotated(82.0, 40.0, 0.0),
        CalculatedPosition::rotated(82.0, 18.0, 0.0),
    ]
}

/// Universe Advice: the querent in the centre, five elements on a pentagram.
pub fn universe_advice_layout(cfg: &LayoutConfig) -> Vec<CalculatedPosition> {
    let mut out = vec![CalculatedPosition::new(50.0, 50.0)];
    out.extend(circle_positions(5, cfg.circle_radius));
    out
}

/// `count` points evenly spaced on a circle around (50, 50),
/// starting at the top and going clockwise on screen.
pub(crate) fn circle_positions(count: usize, radius: f64) -> Vec<CalculatedPosition> {
    let step = 360.0 / count.max(1) as f64;
    (0..count)
        .map(|i| {
            let angle = (i as f64 * step - 90.0).to_radians();
            CalculatedPosition::new(50.0 + radius * angle.cos(), 50.0 + radius * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_celtic_cross_shape() {
        let positions = celtic_cross_layout(&LayoutConfig::default());
        assert_eq!(positions.len(), 10);
        assert_eq!(positions[0].x, positions[1].x);
        assert_eq!(positions[0].y, positions[1].y);
        assert_eq!(positions[1].rotation, Some(90.0));
        // Staff is a single column
        assert!(positions[6..].iter().all(|p| p.x == 82.0));
        assert!(positions[6..].windows(2).all(|w| w[0].y > w[1].y));
    }

    #[test]
    fn test_universe_advice_pentagram() {
        let cfg = LayoutConfig::default();
        let positions = universe_advice_layout(&cfg);
        assert_eq!(positions.len(), 6);
        assert_eq!(positions[0], CalculatedPosition::new(50.0, 50.0));

        // First point is straight up
        assert!(approx(positions[1].x, 50.0));
        assert!(approx(positions[1].y, 15.0));

        for p in &positions[1..] {
            assert!(approx(p.distance_to(&positions[0]), cfg.circle_radius));
        }
        // 72 degrees apart, so neighbouring points are equally spaced
        let side = positions[1].distance_to(&positions[2]);
        for i in 1..5 {
            assert!(approx(positions[i].distance_to(&positions[i + 1]), side));
        }
    }

    #[test]
    fn test_universe_advice_follows_radius() {
        let cfg = LayoutConfig { circle_radius: 20.0, ..LayoutConfig::default() };
        let positions = universe_advice_layout(&cfg);
        assert!(approx(positions[1].y, 30.0));
    }

    #[test]
    fn test_templates_deterministic() {
        let cfg = LayoutConfig::default();
        assert_eq!(celtic_cross_layout(&cfg), celtic_cross_layout(&cfg));
        assert_eq!(universe_advice_layout(&cfg), universe_advice_layout(&cfg));
    }
}
