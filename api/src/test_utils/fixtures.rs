//! Test fixtures
//!
//! Factory functions for creating cards from their codes.

use crate::domain::entities::Card;

/// Parse a single card code, panicking on bad test input
pub fn card(code: &str) -> Card {
    Card::from_code(code).unwrap_or_else(|e| panic!("bad fixture card {}: {}", code, e))
}

/// Parse a list of card codes in order
pub fn cards(codes: &[&str]) -> Vec<Card> {
    codes.iter().map(|code| card(code)).collect()
}
