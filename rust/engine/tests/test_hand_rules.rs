use puntobanco_engine::cards::{all_ranks, Card, Rank, Suit};
use puntobanco_engine::errors::ConstructionError;
use puntobanco_engine::hand::{Hand, HandId};
use puntobanco_engine::rules::{banco_draws, compare, hand_value, punto_draws, Outcome};

fn c(code: &str) -> Card {
    code.parse().expect("valid card code")
}

/// A Card whose point value is `v` (0 maps to a King).
fn pv(v: u8) -> Card {
    let rank = if v == 0 {
        Rank::King
    } else {
        Rank::try_from(v).unwrap()
    };
    Card::new(rank, Suit::Spades)
}

#[test]
fn hand_needs_exactly_two_cards() {
    assert_eq!(
        Hand::new(HandId::Punto, vec![c("AH")]).unwrap_err(),
        ConstructionError::InvalidHandSize(1)
    );
    assert_eq!(
        Hand::new(HandId::Banco, vec![c("AH"), c("2H"), c("3H")]).unwrap_err(),
        ConstructionError::InvalidHandSize(3)
    );
    assert!(Hand::new(HandId::Banco, vec![]).is_err());
    let h = Hand::new(HandId::Banco, vec![c("AH"), c("2H")]).unwrap();
    assert_eq!(h.len(), 2);
    assert_eq!(h.id(), HandId::Banco);
}

#[test]
fn hand_never_exceeds_three_cards() {
    let mut h = Hand::new(HandId::Punto, vec![c("AH"), c("2H")]).unwrap();
    assert_eq!(
        h.add_cards([c("3H"), c("4H")]).unwrap_err(),
        ConstructionError::InvalidHandSize(4)
    );
    assert_eq!(h.len(), 2, "rejected batch must not be partially applied");
    h.add_cards([c("3H")]).unwrap();
    assert_eq!(h.third_card(), Some(&c("3H")));
    assert!(h.add_cards([c("4H")]).is_err());
}

#[test]
fn value_is_modulo_ten_for_every_composition() {
    let ranks = all_ranks();
    for &a in &ranks {
        for &b in &ranks {
            let two = [Card::new(a, Suit::Hearts), Card::new(b, Suit::Clubs)];
            let v2 = hand_value(&two);
            assert!(v2 <= 9);
            assert_eq!(v2, (a.point_value() + b.point_value()) % 10);
            for &t in &ranks {
                let three = [two[0], two[1], Card::new(t, Suit::Spades)];
                let v3 = hand_value(&three);
                assert!(v3 <= 9);
                assert_eq!(v3, (v2 + t.point_value()) % 10);
            }
        }
    }
}

#[test]
fn naturals_are_two_card_eights_and_nines() {
    let nine = Hand::new(HandId::Punto, vec![c("7H"), c("2C")]).unwrap();
    assert_eq!(nine.value(), 9);
    assert!(nine.is_natural());

    let eight = Hand::new(HandId::Banco, vec![c("KH"), c("8C")]).unwrap();
    assert!(eight.is_natural());

    let seven = Hand::new(HandId::Banco, vec![c("3H"), c("4C")]).unwrap();
    assert!(!seven.is_natural());

    // 3 + 3 + 2 = 8, but three cards are never a natural
    let mut three = Hand::new(HandId::Punto, vec![c("3H"), c("3C")]).unwrap();
    three.add_cards([c("2D")]).unwrap();
    assert_eq!(three.value(), 8);
    assert!(!three.is_natural());
}

#[test]
fn punto_draws_on_zero_to_five_only() {
    for v in 0..=9u8 {
        assert_eq!(punto_draws(v, 2), v <= 5, "punto total {}", v);
        assert!(!punto_draws(v, 3));
    }
    let five = Hand::new(HandId::Punto, vec![c("2H"), c("3C")]).unwrap();
    assert!(five.draw_third(None));
    let six = Hand::new(HandId::Punto, vec![c("QH"), c("6C")]).unwrap();
    assert!(!six.draw_third(Some(&c("9H"))));
}

#[test]
fn banco_table_with_punto_third_card() {
    // rows: banco total 0..=7, columns: punto third point value 0..=9
    const D: bool = true;
    const S: bool = false;
    let table: [[bool; 10]; 8] = [
        [D, D, D, D, D, D, D, D, D, D],
        [D, D, D, D, D, D, D, D, D, D],
        [D, D, D, D, D, D, D, D, D, D],
        [D, D, D, D, D, D, D, D, S, D],
        [S, S, D, D, D, D, D, D, S, S],
        [S, S, S, S, D, D, D, D, S, S],
        [S, S, S, S, S, S, D, D, S, S],
        [S, S, S, S, S, S, S, S, S, S],
    ];
    for (banco, row) in table.iter().enumerate() {
        for (third, &want) in row.iter().enumerate() {
            let card = pv(third as u8);
            assert_eq!(
                banco_draws(banco as u8, 2, Some(&card)),
                want,
                "banco {} vs punto third {}",
                banco,
                third
            );
        }
    }
}

#[test]
fn banco_on_three_stands_only_against_an_eight() {
    let banco = Hand::new(HandId::Banco, vec![c("AH"), c("2C")]).unwrap();
    assert_eq!(banco.value(), 3);
    for v in 0..=9u8 {
        assert_eq!(banco.draw_third(Some(&pv(v))), v != 8);
    }
}

#[test]
fn banco_without_punto_third_follows_punto_rule() {
    for v in 0..=7u8 {
        assert_eq!(banco_draws(v, 2, None), v <= 5, "banco total {}", v);
    }
}

#[test]
fn banco_with_three_cards_never_draws() {
    let mut banco = Hand::new(HandId::Banco, vec![c("AH"), c("KC")]).unwrap();
    banco.add_cards([c("KD")]).unwrap();
    assert_eq!(banco.value(), 1);
    assert!(!banco.draw_third(None));
    assert!(!banco.draw_third(Some(&c("5H"))));
}

#[test]
fn compare_picks_higher_total() {
    assert_eq!(compare(9, 7), Outcome::Punto);
    assert_eq!(compare(1, 5), Outcome::Banco);
    assert_eq!(compare(0, 0), Outcome::Tie);
}

#[test]
fn hand_display_lists_cards() {
    let h = Hand::new(HandId::Punto, vec![c("7H"), c("KC")]).unwrap();
    assert_eq!(h.to_string(), "7 of Hearts, King of Clubs");
}
