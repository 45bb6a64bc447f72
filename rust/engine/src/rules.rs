use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Winner of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Punto,
    Banco,
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outcome::Punto => "Punto",
            Outcome::Banco => "Banco",
            Outcome::Tie => "Tie",
        };
        f.write_str(name)
    }
}

/// Sum of point values modulo 10. Always in `0..=9`.
pub fn hand_value(cards: &[Card]) -> u8 {
    let total: u32 = cards.iter().map(|c| u32::from(c.point_value())).sum();
    (total % 10) as u8
}

/// Two-card hand worth 8 or 9.
pub fn is_natural(value: u8, card_count: usize) -> bool {
    card_count == 2 && (8..=9).contains(&value)
}

/// Punto draws a third card on 0 to 5 and stands on 6 or 7.
/// Naturals never reach this check.
pub fn punto_draws(value: u8, card_count: usize) -> bool {
    card_count == 2 && value <= 5
}

/// Decides whether Banco draws a third card.
///
/// When Punto stood (`punto_third` is `None`) Banco follows the same rule as
/// Punto: draw on 0 to 5. Otherwise the decision depends on Banco's total and
/// the point value of Punto's third card:
///
/// | Banco total | Draws when Punto's third card is |
/// |-------------|----------------------------------|
/// | 0–2         | anything                         |
/// | 3           | anything but 8                   |
/// | 4           | 2–7                              |
/// | 5           | 4–7                              |
/// | 6           | 6–7                              |
/// | 7           | never                            |
///
/// A Banco hand that already holds three cards never draws.
///
/// # Examples
///
/// ```
/// use puntobanco_engine::cards::{Card, Rank, Suit};
/// use puntobanco_engine::rules::banco_draws;
///
/// let eight = Card::new(Rank::Eight, Suit::Clubs);
/// let nine = Card::new(Rank::Nine, Suit::Clubs);
///
/// // Banco on 3 stands only against a Punto third card of 8
/// assert!(!banco_draws(3, 2, Some(&eight)));
/// assert!(banco_draws(3, 2, Some(&nine)));
///
/// // Punto stood: Banco draws on 5, stands on 6
/// assert!(banco_draws(5, 2, None));
/// assert!(!banco_draws(6, 2, None));
/// ```
pub fn banco_draws(value: u8, card_count: usize, punto_third: Option<&Card>) -> bool {
    if card_count != 2 {
        return false;
    }
    let Some(third) = punto_third else {
        return value <= 5;
    };
    let p = third.point_value();
    match value {
        0..=2 => true,
        3 => p != 8,
        4 => (2..=7).contains(&p),
        5 => (4..=7).contains(&p),
        6 => (6..=7).contains(&p),
        _ => false,
    }
}

/// Higher total wins; equal totals tie.
///
/// ```
/// use puntobanco_engine::rules::{compare, Outcome};
///
/// assert_eq!(compare(9, 7), Outcome::Punto);
/// assert_eq!(compare(0, 1), Outcome::Banco);
/// assert_eq!(compare(6, 6), Outcome::Tie);
/// ```
pub fn compare(punto_value: u8, banco_value: u8) -> Outcome {
    match punto_value.cmp(&banco_value) {
        std::cmp::Ordering::Greater => Outcome::Punto,
        std::cmp::Ordering::Less => Outcome::Banco,
        std::cmp::Ordering::Equal => Outcome::Tie,
    }
}
