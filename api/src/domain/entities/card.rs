//! Card domain entity
//!
//! A card of the French deck and its two-character code (rank code followed
//! by suit code, e.g. `AS`, `10H`, `QD`).

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Number of ranks in each suit
pub const RANKS_PER_SUIT: usize = 13;

/// Card suit, in canonical deck order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn code(&self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suit::Clubs => write!(f, "CLUBS"),
            Suit::Diamonds => write!(f, "DIAMONDS"),
            Suit::Hearts => write!(f, "HEARTS"),
            Suit::Spades => write!(f, "SPADES"),
        }
    }
}

impl std::str::FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CLUBS" => Ok(Suit::Clubs),
            "DIAMONDS" => Ok(Suit::Diamonds),
            "HEARTS" => Ok(Suit::Hearts),
            "SPADES" => Ok(Suit::Spades),
            _ => Err(DomainError::MalformedCode(format!("unknown suit: {}", s))),
        }
    }
}

/// Card rank, ordered ace low
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; RANKS_PER_SUIT] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Face value, 1 (ace) through 13 (king)
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    pub fn code(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Rank::ALL.into_iter().find(|r| r.code() == code)
    }
}

/// Ranks display as their wire value: `ACE`, `2`..`10`, `JACK`, `QUEEN`, `KING`
impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Ace => write!(f, "ACE"),
            Rank::Jack => write!(f, "JACK"),
            Rank::Queen => write!(f, "QUEEN"),
            Rank::King => write!(f, "KING"),
            numeric => write!(f, "{}", numeric.number()),
        }
    }
}

impl std::str::FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|r| r.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::MalformedCode(format!("unknown value: {}", s)))
    }
}

/// A playing card
///
/// Serialized as `{"value": "ACE", "suit": "SPADES", "code": "AS"}`. On
/// deserialization the code is authoritative and must agree with the value
/// and suit fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "CardRepr", try_from = "CardRepr")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn code(&self) -> String {
        self.to_string()
    }

    /// Parse a card from its code
    ///
    /// Everything before the last character is the rank code, the last
    /// character is the suit code. Unknown rank or suit codes are rejected.
    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        let malformed = || DomainError::MalformedCode(code.to_string());

        let mut chars = code.chars();
        let suit_char = chars.next_back().ok_or_else(malformed)?;
        let rank_part = chars.as_str();

        let suit = Suit::from_code(suit_char).ok_or_else(malformed)?;
        let rank = Rank::from_code(rank_part).ok_or_else(malformed)?;

        Ok(Self { rank, suit })
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.code(), self.suit.code())
    }
}

/// Wire shape of a card
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CardRepr {
    value: String,
    suit: String,
    code: String,
}

impl From<Card> for CardRepr {
    fn from(card: Card) -> Self {
        Self {
            value: card.rank.to_string(),
            suit: card.suit.to_string(),
            code: card.code(),
        }
    }
}

impl TryFrom<CardRepr> for Card {
    type Error = DomainError;

    fn try_from(repr: CardRepr) -> Result<Self, Self::Error> {
        let card = Card::from_code(&repr.code)?;
        let rank: Rank = repr.value.parse()?;
        let suit: Suit = repr.suit.parse()?;

        if card.rank != rank || card.suit != suit {
            return Err(DomainError::MalformedCode(format!(
                "{} does not match {} of {}",
                repr.code, repr.value, repr.suit
            )));
        }

        Ok(card)
    }
}

/// The complete 52-card set in canonical order
///
/// Grouped by suit (clubs, diamonds, hearts, spades), ace to king within each
/// suit, so index `13 * suit_index` is always that suit's ace.
pub fn complete_deck() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_deck_has_52_cards() {
        let cards = complete_deck();
        assert_eq!(cards.len(), 52);
    }

    #[test]
    fn complete_deck_aces_start_each_suit_group() {
        let cards = complete_deck();

        assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(cards[13], Card::new(Rank::Ace, Suit::Diamonds));
        assert_eq!(cards[26], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(cards[39], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(cards[51], Card::new(Rank::King, Suit::Spades));
    }

    #[test]
    fn complete_deck_has_no_duplicates() {
        let cards = complete_deck();
        let unique: std::collections::HashSet<_> = cards.iter().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn every_card_code_parses_back() {
        for card in complete_deck() {
            assert_eq!(Card::from_code(&card.code()).unwrap(), card);
        }
    }

    #[test]
    fn from_code_number_card() {
        let card = Card::from_code("4D").unwrap();
        assert_eq!(card.rank.to_string(), "4");
        assert_eq!(card.suit.to_string(), "DIAMONDS");
    }

    #[test]
    fn from_code_ace() {
        let card = Card::from_code("AS").unwrap();
        assert_eq!(card.rank.to_string(), "ACE");
        assert_eq!(card.suit.to_string(), "SPADES");
    }

    #[test]
    fn from_code_ten_uses_two_rank_characters() {
        let card = Card::from_code("10H").unwrap();
        assert_eq!(card, Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!(card.code(), "10H");
    }

    #[test]
    fn from_code_rejects_unknown_suit() {
        let result = Card::from_code("4X");
        assert!(matches!(result, Err(DomainError::MalformedCode(c)) if c == "4X"));
    }

    #[test]
    fn from_code_rejects_unknown_rank() {
        assert!(Card::from_code("1H").is_err());
        assert!(Card::from_code("11H").is_err());
        assert!(Card::from_code("ZH").is_err());
    }

    #[test]
    fn from_code_rejects_short_and_empty() {
        assert!(Card::from_code("").is_err());
        assert!(Card::from_code("H").is_err());
    }

    #[test]
    fn rank_display() {
        assert_eq!(Rank::Ace.to_string(), "ACE");
        assert_eq!(Rank::Seven.to_string(), "7");
        assert_eq!(Rank::Ten.to_string(), "10");
        assert_eq!(Rank::King.to_string(), "KING");
    }

    #[test]
    fn rank_parse() {
        assert_eq!("queen".parse::<Rank>().unwrap(), Rank::Queen);
        assert_eq!("10".parse::<Rank>().unwrap(), Rank::Ten);
        assert!("11".parse::<Rank>().is_err());
    }

    #[test]
    fn serialize_card() {
        let json = serde_json::to_value(Card::new(Rank::Queen, Suit::Hearts)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"value": "QUEEN", "suit": "HEARTS", "code": "QH"})
        );
    }

    #[test]
    fn deserialize_card() {
        let json = r#"{"value": "10", "suit": "CLUBS", "code": "10C"}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card, Card::new(Rank::Ten, Suit::Clubs));
    }

    #[test]
    fn deserialize_card_with_mismatched_code_fails() {
        let json = r#"{"value": "KING", "suit": "CLUBS", "code": "QC"}"#;
        let result: Result<Card, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
