use std::collections::HashSet;

use puntobanco_engine::cards::{all_ranks, full_deck, Card, Rank, Suit};
use puntobanco_engine::errors::ConstructionError;

#[test]
fn point_values_follow_baccarat_counting() {
    let expected = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 0, 0, 0];
    for (rank, want) in all_ranks().iter().zip(expected) {
        assert_eq!(rank.point_value(), want, "{:?}", rank);
    }
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).point_value(), 1);
    assert_eq!(Card::new(Rank::King, Suit::Hearts).point_value(), 0);
}

#[test]
fn full_deck_has_52_unique_cards() {
    let deck = full_deck();
    assert_eq!(deck.len(), 52);
    let set: HashSet<Card> = deck.into_iter().collect();
    assert_eq!(set.len(), 52);
}

#[test]
fn parses_short_codes() {
    assert_eq!("AH".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Hearts)));
    assert_eq!("10s".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Spades)));
    assert_eq!("Td".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
    assert_eq!("7c".parse::<Card>(), Ok(Card::new(Rank::Seven, Suit::Clubs)));
    assert_eq!("QH".parse::<Card>(), Ok(Card::new(Rank::Queen, Suit::Hearts)));
}

#[test]
fn rejects_invalid_rank_and_suit() {
    assert!(matches!(
        "1H".parse::<Card>(),
        Err(ConstructionError::InvalidRank(_))
    ));
    assert!(matches!(
        "11H".parse::<Card>(),
        Err(ConstructionError::InvalidRank(_))
    ));
    assert!(matches!(
        "AX".parse::<Card>(),
        Err(ConstructionError::InvalidSuit(s)) if s == "X"
    ));
    assert!("".parse::<Card>().is_err());
    assert_eq!(
        Rank::try_from(14),
        Err(ConstructionError::InvalidRank("14".to_string()))
    );
    assert!(Rank::try_from(0).is_err());
    assert_eq!(Rank::try_from(13), Ok(Rank::King));
    assert_eq!(Suit::try_from('d'), Ok(Suit::Diamonds));
}

#[test]
fn display_reads_rank_of_suit() {
    assert_eq!(Card::new(Rank::King, Suit::Hearts).to_string(), "King of Hearts");
    assert_eq!(Card::new(Rank::Seven, Suit::Clubs).to_string(), "7 of Clubs");
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "Ace of Spades");
}

#[test]
fn card_serializes_with_lowercase_suit() {
    let c = Card::new(Rank::Nine, Suit::Diamonds);
    let s = serde_json::to_string(&c).unwrap();
    assert_eq!(s, r#"{"rank":"Nine","suit":"diamonds"}"#);
    let back: Card = serde_json::from_str(&s).unwrap();
    assert_eq!(back, c);
}
