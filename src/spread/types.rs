use serde::{Deserialize, Serialize};

use crate::layout::CalculatedPosition;

/// Rendering hint for a position. The renderer decides what each one looks like.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Center,
    Top,
    Bottom,
    Left,
    Right,
    Highlight,
}

/// One card slot within a spread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadPosition {
    pub id: String,
    /// 1-based reading sequence
    pub order: usize,
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Percent of container width, origin left
    pub x: f64,
    /// Percent of container height, origin top
    pub y: f64,
    /// Degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
    /// Ids of positions this one draws an energy line to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connected_to: Vec<String>,
}

impl SpreadPosition {
    pub fn calculated(&self) -> CalculatedPosition {
        CalculatedPosition { x: self.x, y: self.y, rotation: self.rotation }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// Layout-type tag carried by a spread definition.
/// Descriptive only; dispatch is by slug and authored positions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpreadLayoutKind {
    Linear,
    Cross,
    Circle,
    Grid,
    #[default]
    #[serde(other)]
    Custom,
}

/// A named collection of positions plus metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TarotSpread {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub card_count: usize,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub layout: SpreadLayoutKind,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub positions: Vec<SpreadPosition>,
}

impl TarotSpread {
    /// Positions sorted by reading order. Ties keep their authored order.
    pub fn positions_in_order(&self) -> Vec<&SpreadPosition> {
        let mut out: Vec<&SpreadPosition> = self.positions.iter().collect();
        out.sort_by_key(|p| p.order);
        out
    }
}

/// A user-owned spread. Layout treats it exactly like the spread it wraps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSpread {
    #[serde(flatten)]
    pub spread: TarotSpread,
    pub owner_id: String,
    /// ISO-8601, passed through untouched
    pub created_at: String,
    pub updated_at: String,
}

impl AsRef<TarotSpread> for CustomSpread {
    fn as_ref(&self) -> &TarotSpread {
        &self.spread
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_spread() {
        let json = r#"{
            "slug": "duas-cartas",
            "name": "Duas Cartas",
            "cardCount": 2,
            "layout": "linear",
            "difficulty": "beginner",
            "positions": [
                { "id": "a", "order": 1, "label": "Você", "x": 35, "y": 50, "connectedTo": ["b"] },
                { "id": "b", "order": 2, "label": "O outro", "x": 65, "y": 50, "emphasis": "highlight" }
            ]
        }"#;
        let spread: TarotSpread = serde_json::from_str(json).unwrap();
        assert_eq!(spread.card_count, 2);
        assert_eq!(spread.layout, SpreadLayoutKind::Linear);
        assert_eq!(spread.positions[0].connected_to, vec!["b".to_string()]);
        assert_eq!(spread.positions[1].emphasis, Some(Emphasis::Highlight));
        assert_eq!(spread.positions[1].rotation, None);
    }

    #[test]
    fn test_unknown_layout_kind_is_custom() {
        let json = r#"{ "slug": "s", "name": "S", "cardCount": 0, "layout": "spiral" }"#;
        let spread: TarotSpread = serde_json::from_str(json).unwrap();
        assert_eq!(spread.layout, SpreadLayoutKind::Custom);
        assert!(spread.positions.is_empty());
    }

    #[test]
    fn test_custom_spread_flattens() {
        let json = r#"{
            "slug": "minha", "name": "Minha", "cardCount": 0,
            "ownerId": "u1", "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-02T00:00:00Z"
        }"#;
        let custom: CustomSpread = serde_json::from_str(json).unwrap();
        assert_eq!(custom.as_ref().slug, "minha");
        assert_eq!(custom.owner_id, "u1");
    }

    #[test]
    fn test_positions_in_order() {
        let json = r#"{ "slug": "s", "name": "S", "cardCount": 2, "positions": [
            { "id": "b", "order": 2, "label": "B", "x": 0, "y": 0 },
            { "id": "a", "order": 1, "label": "A", "x": 0, "y": 0 }
        ] }"#;
        let spread: TarotSpread = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = spread.positions_in_order().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
