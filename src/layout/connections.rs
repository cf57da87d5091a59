//! Energy lines between connected positions.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::spread::TarotSpread;
use super::CalculatedPosition;

/// A line from one card centre to another, in the same percent space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionLine {
    pub from: String,
    pub to: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Map the spread's `connectedTo` edges onto computed positions.
///
/// `positions` must be in reading order, as returned by the layout engine.
/// An edge listed on both of its ends is emitted once; edges naming an
/// unknown position, or positions without a computed slot, are skipped.
pub fn connection_lines(spread: &TarotSpread, positions: &[CalculatedPosition]) -> Vec<ConnectionLine> {
    let ordered = spread.positions_in_order();
    let slot: HashMap<&str, &CalculatedPosition> = ordered
        .iter()
        .zip(positions)
        .map(|(p, calc)| (p.id.as_str(), calc))
        .collect();

    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut lines = Vec::new();

    for p in &ordered {
        let Some(a) = slot.get(p.id.as_str()) else { continue };
        for to in &p.connected_to {
            let Some(b) = slot.get(to.as_str()) else { continue };
            let key = if p.id.as_str() < to.as_str() {
                (p.id.as_str(), to.as_str())
            } else {
                (to.as_str(), p.id.as_str())
            };
            if !seen.insert(key) {
                continue;
            }
            lines.push(ConnectionLine {
                from: p.id.clone(),
                to: to.clone(),
                x1: a.x,
                y1: a.y,
                x2: b.x,
                y2: b.y,
            });
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{recalculate_positions, LayoutConfig};
    use crate::spread::find_builtin;

    fn spread_json(json: &str) -> TarotSpread {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_lines_follow_reading_order() {
        let spread = spread_json(
            r#"{ "slug": "s", "name": "S", "cardCount": 2, "positions": [
                { "id": "b", "order": 2, "label": "B", "x": 0, "y": 0 },
                { "id": "a", "order": 1, "label": "A", "x": 0, "y": 0, "connectedTo": ["b"] }
            ] }"#,
        );
        let positions = vec![CalculatedPosition::new(20.0, 30.0), CalculatedPosition::new(70.0, 60.0)];
        let lines = connection_lines(&spread, &positions);
        assert_eq!(
            lines,
            vec![ConnectionLine { from: "a".into(), to: "b".into(), x1: 20.0, y1: 30.0, x2: 70.0, y2: 60.0 }]
        );
    }

    #[test]
    fn test_mutual_edge_emitted_once_and_unknown_skipped() {
        let spread = spread_json(
            r#"{ "slug": "s", "name": "S", "cardCount": 2, "positions": [
                { "id": "a", "order": 1, "label": "A", "x": 0, "y": 0, "connectedTo": ["b", "z"] },
                { "id": "b", "order": 2, "label": "B", "x": 0, "y": 0, "connectedTo": ["a"] }
            ] }"#,
        );
        let positions = vec![CalculatedPosition::new(20.0, 50.0), CalculatedPosition::new(80.0, 50.0)];
        assert_eq!(connection_lines(&spread, &positions).len(), 1);
    }

    #[test]
    fn test_celtic_cross_lines() {
        let spread = find_builtin("cruz-celta").unwrap();
        let layout = recalculate_positions(spread, &LayoutConfig::default()).unwrap();
        let lines = connection_lines(spread, &layout.positions);
        // Four arms of the cross plus three links up the staff
        assert_eq!(lines.len(), 7);
        assert!(lines.iter().all(|l| l.x1 != l.x2 || l.y1 != l.y2));
    }
}
