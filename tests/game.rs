//! Rules engine integration tests.

#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use bjsolo::{
    ActionError, BetError, Card, DECK_SIZE, DealError, Deck, DoubleOption, GameOptions, Hand,
    HandOutcome, PlayerTurn, RoundError, RoundingMode, Suit, TurnOutcome, TurnState, deal_initial,
    dealer_should_draw, hand_value, parse_bet, play_dealer, settle, validate_bet,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn hand(ranks: &[u8]) -> Hand {
    let cards: Vec<Card> = ranks.iter().map(|&rank| card(Suit::Clubs, rank)).collect();
    Hand::from_cards(&cards)
}

#[test]
fn two_aces_count_as_twelve() {
    let aces = hand(&[1, 1]);
    assert_eq!(aces.value(), 12);
    assert!(aces.is_soft());
    assert!(!aces.is_bust());
}

#[test]
fn hands_without_aces_are_plain_sums() {
    assert_eq!(hand_value(hand(&[2, 3, 4]).cards()), 9);
    assert_eq!(hand(&[10, 11, 12]).value(), 30);
    assert_eq!(hand(&[13, 7]).value(), 17);
    assert!(!hand(&[13, 7]).is_soft());
}

#[test]
fn aces_are_recounted_one_at_a_time() {
    assert_eq!(hand(&[1, 9, 1]).value(), 21);
    assert_eq!(hand(&[1, 1, 1, 1]).value(), 14);
    assert_eq!(hand(&[1, 6, 10]).value(), 17);
    assert!(!hand(&[1, 6, 10]).is_soft());
    assert_eq!(hand(&[1, 10, 10, 5]).value(), 26);
    assert!(hand(&[1, 10, 10, 5]).is_bust());
}

#[test]
fn natural_needs_exactly_two_cards() {
    assert!(hand(&[1, 13]).is_natural());
    assert!(!hand(&[7, 7, 7]).is_natural());
    assert_eq!(hand(&[7, 7, 7]).value(), 21);
}

#[test]
fn card_display_uses_rank_label_and_suit_symbol() {
    assert_eq!(card(Suit::Spades, 1).to_string(), "A♠");
    assert_eq!(card(Suit::Hearts, 10).to_string(), "10♥");
    assert_eq!(card(Suit::Diamonds, 12).to_string(), "Q♦");
    assert!(Suit::Hearts.is_red());
    assert!(!Suit::Clubs.is_red());
}

#[test]
fn shuffled_deck_deals_every_card_once() {
    for seed in 0..32 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.remaining(), DECK_SIZE);

        let mut seen = HashSet::new();
        while let Some(card) = deck.draw() {
            assert!(seen.insert(card), "seed {seed} dealt {card} twice");
        }

        assert_eq!(seen.len(), DECK_SIZE);
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }
}

#[test]
fn seeds_change_the_order() {
    let first = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(1));
    let again = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(1));
    let other = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(2));
    assert_eq!(first, again);
    assert_ne!(first, other);
}

#[test]
fn initial_deal_alternates_player_and_dealer() {
    let mut deck = Deck::from_draws(&[
        card(Suit::Hearts, 8),   // player
        card(Suit::Clubs, 6),    // dealer up
        card(Suit::Diamonds, 7), // player
        card(Suit::Spades, 10),  // dealer hole
    ]);

    let (player, dealer) = deal_initial(&mut deck).unwrap();
    assert_eq!(player.cards(), &[card(Suit::Hearts, 8), card(Suit::Diamonds, 7)]);
    assert_eq!(dealer.up_card(), Some(&card(Suit::Clubs, 6)));
    assert_eq!(dealer.value(), 16);
    assert!(deck.is_empty());
}

#[test]
fn initial_deal_rejects_short_deck() {
    let mut deck = Deck::from_draws(&[card(Suit::Hearts, 8), card(Suit::Clubs, 6)]);
    assert_eq!(deal_initial(&mut deck).unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(deck.remaining(), 2);
}

#[test]
fn bet_parsing_reports_format_then_range() {
    assert_eq!(parse_bet("abc", 100), Err(BetError::NotANumber));
    assert_eq!(
        parse_bet("-5", 100),
        Err(BetError::OutOfRange { balance: 100 })
    );
    assert_eq!(parse_bet(" 50 ", 100), Ok(50));
    assert_eq!(parse_bet("0", 100), Err(BetError::OutOfRange { balance: 100 }));
    assert_eq!(parse_bet("101", 100), Err(BetError::OutOfRange { balance: 100 }));
    assert_eq!(parse_bet("100", 100), Ok(100));
    assert_eq!(parse_bet("12.5", 100), Err(BetError::NotANumber));
    assert_eq!(parse_bet("", 100), Err(BetError::NotANumber));
}

#[test]
fn bet_error_messages() {
    assert_eq!(BetError::NotANumber.to_string(), "Please enter a valid number.");
    assert_eq!(
        BetError::OutOfRange { balance: 10 }.to_string(),
        "Bet must be within your available balance."
    );
    assert_eq!(validate_bet(10, 10), Ok(10));
}

#[test]
fn hitting_past_21_busts_immediately() {
    let options = GameOptions::default();
    let mut deck = Deck::from_draws(&[card(Suit::Hearts, 4), card(Suit::Hearts, 5)]);
    let mut turn = PlayerTurn::new(hand(&[10, 10]), 25, &options);
    assert_eq!(turn.state(), TurnState::Start);

    let drawn = turn.hit(&mut deck).unwrap();
    assert_eq!(drawn.rank, 4);
    assert_eq!(turn.hand().value(), 24);
    assert_eq!(turn.outcome(), Some(TurnOutcome::Bust));

    assert_eq!(turn.hit(&mut deck).unwrap_err(), ActionError::TurnOver);
    assert_eq!(turn.stand().unwrap_err(), ActionError::TurnOver);
    assert_eq!(deck.remaining(), 1);
}

#[test]
fn hit_then_stand() {
    let options = GameOptions::default();
    let mut deck = Deck::from_draws(&[card(Suit::Hearts, 2), card(Suit::Spades, 3)]);
    let mut turn = PlayerTurn::new(hand(&[9, 5]), 10, &options);

    turn.hit(&mut deck).unwrap();
    assert_eq!(turn.state(), TurnState::Deciding);
    turn.hit(&mut deck).unwrap();
    assert_eq!(turn.hand().value(), 19);

    turn.stand().unwrap();
    assert_eq!(turn.outcome(), Some(TurnOutcome::Stand));
    assert_eq!(turn.into_hand().len(), 4);
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let options = GameOptions::default();
    let mut deck = Deck::from_draws(&[]);
    let mut turn = PlayerTurn::new(hand(&[5, 6]), 10, &options);
    assert_eq!(turn.hit(&mut deck).unwrap_err(), ActionError::NoCards);
    assert_eq!(turn.state(), TurnState::Start);
}

#[test]
fn natural_finishes_turn_at_once() {
    let turn = PlayerTurn::new(hand(&[1, 12]), 10, &GameOptions::default());
    assert_eq!(turn.outcome(), Some(TurnOutcome::Natural));
    assert!(!turn.can_double(1000));
}

#[test]
fn double_down_debits_extra_stake_and_draws_one_card() {
    let options = GameOptions::default();
    let mut deck = Deck::from_draws(&[card(Suit::Hearts, 9), card(Suit::Spades, 5)]);
    let mut turn = PlayerTurn::new(hand(&[6, 5]), 50, &options);
    let mut balance = 500;

    assert!(turn.can_double(balance));
    let drawn = turn.double_down(&mut deck, &mut balance).unwrap();

    assert_eq!(drawn.rank, 9);
    assert_eq!(balance, 450);
    assert_eq!(turn.bet(), 100);
    assert_eq!(turn.hand().len(), 3);
    assert_eq!(turn.outcome(), Some(TurnOutcome::DoubledDown));
    assert_eq!(deck.remaining(), 1);
    assert_eq!(turn.hit(&mut deck).unwrap_err(), ActionError::TurnOver);
}

#[test]
fn double_down_only_on_ten_or_eleven_by_default() {
    let options = GameOptions::default();
    let mut deck = Deck::from_draws(&[card(Suit::Hearts, 9)]);
    let mut turn = PlayerTurn::new(hand(&[6, 6]), 50, &options);
    let mut balance = 500;

    assert!(!turn.can_double(balance));
    assert_eq!(
        turn.double_down(&mut deck, &mut balance).unwrap_err(),
        ActionError::CannotDouble
    );
    assert_eq!(balance, 500);
    assert_eq!(deck.remaining(), 1);

    assert!(PlayerTurn::new(hand(&[4, 6]), 50, &options).can_double(balance));
    assert!(!PlayerTurn::new(hand(&[4, 5]), 50, &options).can_double(balance));
}

#[test]
fn double_down_rejected_after_hit() {
    let options = GameOptions::default().with_double(DoubleOption::Any);
    let mut deck = Deck::from_draws(&[card(Suit::Hearts, 2), card(Suit::Hearts, 3)]);
    let mut turn = PlayerTurn::new(hand(&[4, 3]), 50, &options);
    let mut balance = 500;

    turn.hit(&mut deck).unwrap();
    assert!(!turn.can_double(balance));
    assert_eq!(
        turn.double_down(&mut deck, &mut balance).unwrap_err(),
        ActionError::CannotDouble
    );
}

#[test]
fn double_down_needs_matching_funds() {
    let options = GameOptions::default();
    let mut deck = Deck::from_draws(&[card(Suit::Hearts, 9)]);
    let mut turn = PlayerTurn::new(hand(&[6, 5]), 50, &options);
    let mut balance = 49;

    assert!(!turn.can_double(balance));
    assert_eq!(
        turn.double_down(&mut deck, &mut balance).unwrap_err(),
        ActionError::InsufficientFunds
    );
    assert_eq!(balance, 49);
    assert_eq!(turn.bet(), 50);
}

#[test]
fn dealer_stands_on_17_and_draws_below() {
    let options = GameOptions::default();
    assert!(dealer_should_draw(&hand(&[10, 6]), &options));
    assert!(!dealer_should_draw(&hand(&[10, 7]), &options));
    assert!(!dealer_should_draw(&hand(&[1, 6]), &options));
    assert!(!dealer_should_draw(&hand(&[10, 10, 5]), &options));

    let hits_soft = options.with_stand_on_soft_17(false);
    assert!(dealer_should_draw(&hand(&[1, 6]), &hits_soft));
    assert!(!dealer_should_draw(&hand(&[10, 7]), &hits_soft));
}

#[test]
fn dealer_draws_until_17() {
    let options = GameOptions::default();
    let mut deck = Deck::from_draws(&[
        card(Suit::Hearts, 2),
        card(Suit::Clubs, 3),
        card(Suit::Spades, 9),
    ]);
    let mut dealer = hand(&[10, 2]);

    let drawn = play_dealer(&mut dealer, &mut deck, &options).unwrap();
    assert_eq!(drawn, vec![card(Suit::Hearts, 2), card(Suit::Clubs, 3)]);
    assert_eq!(dealer.value(), 17);
    assert_eq!(deck.remaining(), 1);
}

#[test]
fn dealer_stops_on_bust() {
    let options = GameOptions::default();
    let mut deck = Deck::from_draws(&[card(Suit::Hearts, 10), card(Suit::Clubs, 3)]);
    let mut dealer = hand(&[10, 6]);

    let drawn = play_dealer(&mut dealer, &mut deck, &options).unwrap();
    assert_eq!(drawn.len(), 1);
    assert!(dealer.is_bust());
}

#[test]
fn dealer_with_empty_deck_returns_error() {
    let mut dealer = hand(&[10, 2]);
    assert_eq!(
        play_dealer(&mut dealer, &mut Deck::from_draws(&[]), &GameOptions::default()).unwrap_err(),
        RoundError::DealerNoCards
    );
}

#[test]
fn natural_pays_two_and_a_half_times_even_against_dealer_natural() {
    let options = GameOptions::default();

    let result = settle(&hand(&[1, 13]), &hand(&[10, 7]), 100, &options);
    assert_eq!(result.outcome, HandOutcome::Blackjack);
    assert_eq!(result.payout, 250);
    assert_eq!(result.net, 150);

    let result = settle(&hand(&[1, 13]), &hand(&[1, 12]), 100, &options);
    assert_eq!(result.outcome, HandOutcome::Blackjack);
    assert_eq!(result.payout, 250);
}

#[test]
fn natural_payout_rounding() {
    let options = GameOptions::default();
    assert_eq!(settle(&hand(&[1, 13]), &hand(&[10, 7]), 5, &options).payout, 12);

    let up = options.with_rounding_blackjack(RoundingMode::Up);
    assert_eq!(settle(&hand(&[1, 13]), &hand(&[10, 7]), 5, &up).payout, 13);
}

#[test]
fn bust_loses_whatever_the_dealer_holds() {
    let result = settle(&hand(&[10, 10, 4]), &hand(&[10, 6]), 40, &GameOptions::default());
    assert_eq!(result.outcome, HandOutcome::Bust);
    assert_eq!(result.payout, 0);
    assert_eq!(result.net, -40);
    assert_eq!(result.player_value, 24);
}

#[test]
fn settlement_table() {
    let options = GameOptions::default();

    let lose = settle(&hand(&[10, 9]), &hand(&[10, 10]), 30, &options);
    assert_eq!(lose.outcome, HandOutcome::Lose);
    assert_eq!(lose.net, -30);

    let push = settle(&hand(&[10, 8]), &hand(&[9, 9]), 30, &options);
    assert_eq!(push.outcome, HandOutcome::Push);
    assert_eq!(push.payout, 30);
    assert_eq!(push.net, 0);

    let win = settle(&hand(&[10, 9]), &hand(&[10, 7]), 30, &options);
    assert_eq!(win.outcome, HandOutcome::Win);
    assert_eq!(win.payout, 60);
    assert_eq!(win.net, 30);

    let dealer_bust = settle(&hand(&[10, 2]), &hand(&[10, 6, 8]), 30, &options);
    assert_eq!(dealer_bust.outcome, HandOutcome::Win);
    assert_eq!(dealer_bust.dealer_value, 24);

    let three_card_21 = settle(&hand(&[7, 7, 7]), &hand(&[10, 10]), 30, &options);
    assert_eq!(three_card_21.outcome, HandOutcome::Win);
    assert_eq!(three_card_21.payout, 60);
}

#[test]
fn huge_bets_saturate_instead_of_overflowing() {
    let options = GameOptions::default();

    let win = settle(&hand(&[10, 9]), &hand(&[10, 7]), usize::MAX, &options);
    assert_eq!(win.payout, usize::MAX);
    assert_eq!(win.net, 0);

    let natural = settle(&hand(&[1, 13]), &hand(&[10, 7]), usize::MAX, &options);
    assert_eq!(natural.payout, usize::MAX);

    let lose = settle(&hand(&[10, 9]), &hand(&[10, 10]), usize::MAX, &options);
    assert_eq!(lose.payout, 0);
    assert_eq!(lose.net, -isize::MAX);
}

#[test]
fn doubled_bet_settles_without_second_debit() {
    let options = GameOptions::default();
    let mut deck = Deck::from_draws(&[card(Suit::Hearts, 9)]);
    let mut turn = PlayerTurn::new(hand(&[6, 5]), 50, &options);
    let mut balance = 500;
    turn.double_down(&mut deck, &mut balance).unwrap();

    let win = settle(turn.hand(), &hand(&[10, 7]), turn.bet(), &options);
    assert_eq!(win.bet, 100);
    assert_eq!(balance + win.payout, 650);

    let lose = settle(turn.hand(), &hand(&[10, 10, 1]), turn.bet(), &options);
    assert_eq!(lose.net, -100);
    assert_eq!(balance + lose.payout, 450);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_starting_balance(250)
        .with_blackjack_pays(1.2)
        .with_rounding_blackjack(RoundingMode::Nearest)
        .with_stand_on_soft_17(false)
        .with_double(DoubleOption::NineThrough11);

    assert_eq!(options.starting_balance, 250);
    assert_eq!(options.blackjack_pays, 1.2);
    assert_eq!(options.rounding_blackjack, RoundingMode::Nearest);
    assert!(!options.stand_on_soft_17);
    assert_eq!(options.double, DoubleOption::NineThrough11);
    assert!(options.double.allows(9));
    assert!(!DoubleOption::None.allows(10));
    assert!(DoubleOption::Any.allows(15));
}

#[test]
fn default_options_match_the_house_rules() {
    let options = GameOptions::default();
    assert_eq!(options.starting_balance, 1000);
    assert_eq!(options.blackjack_pays, 1.5);
    assert!(options.stand_on_soft_17);
    assert_eq!(options.double, DoubleOption::TenOrEleven);
}
