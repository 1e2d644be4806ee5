//! Card model, deal, and rendering integration tests.

use std::collections::HashSet;

use pontoon::{
    Card, CardError, DECK_SIZE, FACE_DOWN, IdentityShuffle, Qualifier, RandomShuffle, Rank, Suit,
    card_glyph, deal, fresh_deck, hand_value, parse_cards, render, render_card, render_dealer_hand,
    render_player_hand,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn value_of(codes: &[&str]) -> (u8, Qualifier) {
    let hand = parse_cards(codes.iter().copied()).unwrap();
    let value = hand_value(&hand);
    (value.total, value.qualifier)
}

#[test]
fn parse_round_trips_every_deck_card() {
    for card in fresh_deck() {
        let code = card.to_string();
        assert_eq!(code.parse::<Card>().unwrap(), card, "code {code}");
    }
}

#[test]
fn parse_accepts_lowercase_codes() {
    assert_eq!("ah".parse::<Card>().unwrap(), card(Rank::Ace, Suit::Hearts));
    assert_eq!(
        "10d".parse::<Card>().unwrap(),
        card(Rank::Ten, Suit::Diamonds)
    );
}

#[test]
fn parse_rejects_invalid_codes() {
    assert_eq!("1H".parse::<Card>().unwrap_err(), CardError::InvalidRank);
    assert_eq!("11H".parse::<Card>().unwrap_err(), CardError::InvalidRank);
    assert_eq!("AX".parse::<Card>().unwrap_err(), CardError::InvalidSuit);
    assert_eq!("A".parse::<Card>().unwrap_err(), CardError::Malformed);
    assert_eq!("".parse::<Card>().unwrap_err(), CardError::Malformed);

    assert_eq!("T".parse::<Rank>().unwrap_err(), CardError::InvalidRank);
    assert_eq!("HH".parse::<Suit>().unwrap_err(), CardError::InvalidSuit);
}

#[test]
fn parse_cards_preserves_order_and_fails_fast() {
    let hand = parse_cards(["KC", "AS", "5D"]).unwrap();
    assert_eq!(
        hand,
        [
            card(Rank::King, Suit::Clubs),
            card(Rank::Ace, Suit::Spades),
            card(Rank::Five, Suit::Diamonds),
        ]
    );

    assert_eq!(
        parse_cards(["KC", "1X", "5D"]).unwrap_err(),
        CardError::InvalidRank
    );
}

#[test]
fn fresh_deck_is_52_unique_cards_in_suit_major_order() {
    let deck = fresh_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    // Suits outer (H, C, D, S), ranks inner (2..10, J, Q, K, A).
    assert_eq!(deck[0], card(Rank::Two, Suit::Hearts));
    assert_eq!(deck[12], card(Rank::Ace, Suit::Hearts));
    assert_eq!(deck[13], card(Rank::Two, Suit::Clubs));
    assert_eq!(deck[26], card(Rank::Two, Suit::Diamonds));
    assert_eq!(deck[51], card(Rank::Ace, Suit::Spades));

    assert_eq!(deck, fresh_deck());
}

#[test]
fn number_hand_sums_with_no_qualifier() {
    assert_eq!(value_of(&["2H", "3C", "4D"]), (9, Qualifier::None));
}

#[test]
fn three_card_21_is_not_blackjack() {
    assert_eq!(value_of(&["KH", "5C", "6D"]), (21, Qualifier::None));
}

#[test]
fn two_card_21_is_blackjack() {
    assert_eq!(value_of(&["KH", "AS"]), (21, Qualifier::Blackjack));
    assert_eq!(value_of(&["AH", "10D"]), (21, Qualifier::Blackjack));
}

#[test]
fn over_21_without_ace_is_bust() {
    assert_eq!(value_of(&["KH", "QD", "3S"]), (23, Qualifier::Bust));
}

#[test]
fn ace_counted_high_is_soft() {
    assert_eq!(value_of(&["AH", "5C"]), (16, Qualifier::Soft));
}

#[test]
fn ace_21_with_three_cards_is_soft_not_blackjack() {
    assert_eq!(value_of(&["AH", "5C", "5D"]), (21, Qualifier::Soft));
}

#[test]
fn busting_ace_steps_down_to_hard() {
    // 11 + 5 + 7 = 23, then one ace re-counted as 1.
    assert_eq!(value_of(&["AH", "5C", "7D"]), (13, Qualifier::Hard));
}

#[test]
fn pair_of_aces_is_hard_12() {
    assert_eq!(value_of(&["AH", "AS"]), (12, Qualifier::Hard));
}

#[test]
fn step_down_is_applied_at_most_once() {
    // 33 corrects to 23 and stays bust; no second ace is re-counted.
    assert_eq!(value_of(&["AH", "AS", "AD"]), (23, Qualifier::Bust));
}

#[test]
fn hand_value_is_pure() {
    let hand = parse_cards(["AH", "5C"]).unwrap();
    assert_eq!(hand_value(&hand), hand_value(&hand));
    assert_eq!(hand, parse_cards(["AH", "5C"]).unwrap());
}

#[test]
fn identity_deal_interleaves_player_and_dealer() {
    let deck = fresh_deck();
    let state = deal(&mut IdentityShuffle);

    assert_eq!(state.player, [deck[0], deck[2]]);
    assert_eq!(state.dealer, [deck[1], deck[3]]);
    assert_eq!(state.deck, deck[4..]);
}

#[test]
fn seeded_deal_is_deterministic_and_conserves_cards() {
    let first = deal(&mut RandomShuffle::seeded(42));
    let second = deal(&mut RandomShuffle::seeded(42));
    assert_eq!(first, second);

    assert_eq!(first.player.len(), 2);
    assert_eq!(first.dealer.len(), 2);
    assert_eq!(first.deck.len(), DECK_SIZE - 4);

    let all: HashSet<Card> = first
        .deck
        .iter()
        .chain(&first.player)
        .chain(&first.dealer)
        .copied()
        .collect();
    assert_eq!(all.len(), DECK_SIZE);
}

#[test]
fn glyphs_follow_the_playing_cards_block() {
    assert_eq!(card_glyph(card(Rank::Ace, Suit::Spades)), '\u{1F0A1}');
    assert_eq!(card_glyph(card(Rank::Ace, Suit::Hearts)), '\u{1F0B1}');
    assert_eq!(card_glyph(card(Rank::Ten, Suit::Diamonds)), '\u{1F0CA}');
    assert_eq!(card_glyph(card(Rank::Jack, Suit::Clubs)), '\u{1F0DB}');
    // The knight code point is skipped between jack and queen.
    assert_eq!(card_glyph(card(Rank::Queen, Suit::Spades)), '\u{1F0AD}');
    assert_eq!(card_glyph(card(Rank::King, Suit::Spades)), '\u{1F0AE}');
}

#[test]
fn render_card_handles_face_up_and_face_down() {
    assert_eq!(
        render_card(Some(card(Rank::Seven, Suit::Spades))),
        "\u{1F0A7} "
    );
    assert_eq!(render_card(None), "\u{1F0A0} ");
}

#[test]
fn dealer_hand_hides_the_first_card() {
    let dealer = parse_cards(["7S", "JC"]).unwrap();
    let text = render_dealer_hand(&dealer);

    assert_eq!(text, "\u{1F0A0} \u{1F0DB} ");
    assert_eq!(text.chars().next(), Some(FACE_DOWN));
}

#[test]
fn player_hand_annotations() {
    let blackjack = parse_cards(["AH", "10D"]).unwrap();
    assert_eq!(
        render_player_hand(&blackjack),
        "\u{1F0B1} \u{1F0CA} Blackjack!"
    );

    let soft = parse_cards(["AH", "5C"]).unwrap();
    assert!(render_player_hand(&soft).ends_with("soft 16"));

    let hard = parse_cards(["AH", "5C", "7D"]).unwrap();
    assert!(render_player_hand(&hard).ends_with("hard 13"));

    let bust = parse_cards(["KH", "QD", "3S"]).unwrap();
    assert!(render_player_hand(&bust).ends_with("bust 23"));

    let plain = parse_cards(["KH", "5C"]).unwrap();
    assert!(render_player_hand(&plain).ends_with("\u{1F0D5} 15"));
}

#[test]
fn render_lays_out_dealer_then_player() {
    let state = deal(&mut IdentityShuffle);
    let text = render(&state);

    let (dealer_line, player_line) = text.split_once('\n').unwrap();
    assert_eq!(
        dealer_line,
        format!("Dealer: {}", render_dealer_hand(&state.dealer))
    );
    assert_eq!(
        player_line,
        format!("Player: {}", render_player_hand(&state.player))
    );
    // The face-down card never leaks the dealer's hole card glyph.
    assert!(dealer_line.contains(FACE_DOWN));
    assert!(!dealer_line.contains(card_glyph(state.dealer[0])));
}
