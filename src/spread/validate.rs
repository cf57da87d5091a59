// Structural checks for spread definitions.
//
// Spreads authored by hand or by users can drift out of shape (a position
// deleted but cardCount not updated, two cards sharing an order). Layout
// itself never needs these checks, but callers that accept external data
// should run them before trusting a spread.

use std::collections::HashSet;
use std::fmt;

use super::TarotSpread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpreadError {
    /// cardCount is zero and there are no positions
    Empty,
    CardCountMismatch { card_count: usize, positions: usize },
    OrderOutOfRange { id: String, order: usize, card_count: usize },
    DuplicateOrder { order: usize },
    DuplicatePositionId { id: String },
    UnknownConnection { from: String, to: String },
}

impl fmt::Display for SpreadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpreadError::Empty => write!(f, "spread has no cards"),
            SpreadError::CardCountMismatch { card_count, positions } => write!(
                f,
                "cardCount is {} but spread defines {} positions",
                card_count, positions
            ),
            SpreadError::OrderOutOfRange { id, order, card_count } => write!(
                f,
                "position '{}' has order {} outside 1..={}",
                id, order, card_count
            ),
            SpreadError::DuplicateOrder { order } => {
                write!(f, "order {} is used by more than one position", order)
            }
            SpreadError::DuplicatePositionId { id } => {
                write!(f, "position id '{}' is not unique", id)
            }
            SpreadError::UnknownConnection { from, to } => {
                write!(f, "position '{}' connects to unknown position '{}'", from, to)
            }
        }
    }
}

impl std::error::Error for SpreadError {}

impl TarotSpread {
    /// Check the spread's structural invariants, reporting the first violation.
    pub fn validate(&self) -> Result<(), SpreadError> {
        if self.card_count == 0 && self.positions.is_empty() {
            return Err(SpreadError::Empty);
        }
        if self.positions.len() != self.card_count {
            return Err(SpreadError::CardCountMismatch {
                card_count: self.card_count,
                positions: self.positions.len(),
            });
        }

        let mut ids: HashSet<&str> = HashSet::new();
        let mut orders: HashSet<usize> = HashSet::new();
        for p in &self.positions {
            if !ids.insert(p.id.as_str()) {
                return Err(SpreadError::DuplicatePositionId { id: p.id.clone() });
            }
            if p.order == 0 || p.order > self.card_count {
                return Err(SpreadError::OrderOutOfRange {
                    id: p.id.clone(),
                    order: p.order,
                    card_count: self.card_count,
                });
            }
            if !orders.insert(p.order) {
                return Err(SpreadError::DuplicateOrder { order: p.order });
            }
        }

        for p in &self.positions {
            if let Some(to) = p.connected_to.iter().find(|to| !ids.contains(to.as_str())) {
                return Err(SpreadError::UnknownConnection {
                    from: p.id.clone(),
                    to: to.clone(),
                });
            }
        }

        Ok(())
    }
}
