//! Card scale and container size breakpoints.
//!
//! More cards on the table means smaller cards and a larger container.
//! Breakpoints are at 3, 6 and 10 cards.

use serde::Serialize;

/// CSS scale class applied to every card of a spread.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum CardScale {
    #[serde(rename = "scale-100")]
    Full,
    #[serde(rename = "scale-90")]
    Ninety,
    #[serde(rename = "scale-80")]
    Eighty,
    #[serde(rename = "scale-75")]
    SeventyFive,
}

impl CardScale {
    pub fn as_class(&self) -> &'static str {
        match self {
            CardScale::Full => "scale-100",
            CardScale::Ninety => "scale-90",
            CardScale::Eighty => "scale-80",
            CardScale::SeventyFive => "scale-75",
        }
    }
}

pub fn get_card_scale(card_count: usize) -> CardScale {
    match card_count {
        0..=3 => CardScale::Full,
        4..=6 => CardScale::Ninety,
        7..=10 => CardScale::Eighty,
        _ => CardScale::SeventyFive,
    }
}

/// Container size in CSS pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerDimensions {
    pub max_width: u32,
    pub min_height: u32,
}

pub fn calculate_container_dimensions(card_count: usize) -> ContainerDimensions {
    let (max_width, min_height) = match card_count {
        0..=3 => (640, 400),
        4..=6 => (800, 520),
        7..=10 => (960, 640),
        _ => (1120, 760),
    };
    ContainerDimensions { max_width, min_height }
}
