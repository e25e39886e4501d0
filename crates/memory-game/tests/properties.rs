//! Property tests for the matching engine.

use memory_game::{CardId, GameOptions, ManualClock, MemoryGame};
use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

type Game = MemoryGame<usize, ManualClock>;

fn deal(pairs: usize, seed: u64) -> (Game, ManualClock) {
    let clock = ManualClock::new();
    let game = MemoryGame::with_options(
        &GameOptions::with_pairs(pairs).with_seed(seed),
        clock.clone(),
        |i| i,
    );
    (game, clock)
}

fn state(game: &Game) -> Vec<(usize, CardId, bool, bool)> {
    let mut cards: Vec<_> = game
        .cards()
        .iter()
        .map(|c| (*c.content(), c.id(), c.is_face_up(), c.is_matched()))
        .collect();
    cards.sort_unstable();
    cards
}

proptest! {
    #[test]
    fn pairs_are_intact(pairs in 0usize..40, seed in any::<u64>()) {
        let (game, _) = deal(pairs, seed);
        let expected = pairs.max(2);
        prop_assert_eq!(game.cards().len(), expected * 2);

        let mut counts: HashMap<usize, usize> = HashMap::new();
        for card in game.cards() {
            *counts.entry(*card.content()).or_default() += 1;
            prop_assert!(card.id() < expected * 2);
            prop_assert_eq!(*card.content(), card.id() / 2);
        }
        prop_assert!(counts.values().all(|&n| n == 2));

        let mut ids: Vec<_> = game.cards().iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), expected * 2);
    }

    #[test]
    fn at_most_one_pending_between_turns(
        pairs in 2usize..8,
        seed in any::<u64>(),
        picks in prop::collection::vec(0usize..20, 0..60),
    ) {
        let (mut game, _) = deal(pairs, seed);
        for id in picks {
            game.choose(id);
            let up: Vec<_> = game.cards().iter().filter(|c| c.is_pending()).collect();
            prop_assert!(up.len() <= 2);
            if up.len() == 2 {
                prop_assert_ne!(up[0].content(), up[1].content());
            }
            let matched = game.cards().iter().filter(|c| c.is_matched()).count();
            prop_assert_eq!(matched % 2, 0);
        }
    }

    #[test]
    fn matched_and_face_up_choices_are_no_ops(
        pairs in 2usize..6,
        seed in any::<u64>(),
        picks in prop::collection::vec(0usize..12, 0..40),
    ) {
        let (mut game, _) = deal(pairs, seed);
        for id in picks {
            let in_play = game
                .card(id)
                .map(|c| c.is_face_up() || c.is_matched())
                .unwrap_or(true);
            let before = state(&game);
            game.choose(id);
            if in_play {
                prop_assert_eq!(before, state(&game));
            }
        }
    }

    #[test]
    fn face_up_time_never_decreases(
        seed in any::<u64>(),
        steps in prop::collection::vec((0usize..6, 0u64..3000), 1..40),
    ) {
        let (mut game, clock) = deal(3, seed);
        let mut last: HashMap<CardId, Duration> = HashMap::new();
        for (id, millis) in steps {
            game.choose(id);
            clock.advance(Duration::from_millis(millis));
            let now = game.now();
            for card in game.cards() {
                let t = card.face_up_time(now);
                let previous = last.insert(card.id(), t).unwrap_or(Duration::ZERO);
                prop_assert!(t >= previous);
                if card.is_matched() || !card.is_face_up() {
                    prop_assert_eq!(card.face_up_time(now + Duration::from_secs(60)), t);
                }
                let fraction = card.bonus_remaining(now);
                prop_assert!((0.0..=1.0).contains(&fraction));
            }
        }
    }

    #[test]
    fn shuffle_preserves_cards(
        seed in any::<u64>(),
        picks in prop::collection::vec(0usize..10, 0..20),
    ) {
        let (mut game, _) = deal(5, seed);
        for id in picks {
            game.choose(id);
        }
        let before = state(&game);
        game.shuffle();
        prop_assert_eq!(before, state(&game));
    }
}

#[test]
fn snapshot_serializes_for_presentation() {
    let (mut game, _) = deal(2, 1);
    game.choose(0);
    let json = serde_json::to_value(game.snapshot()).expect("serialize snapshot");
    let cards = json.as_array().expect("array");
    assert_eq!(cards.len(), 4);
    let first = cards
        .iter()
        .find(|c| c["id"] == 0)
        .expect("card 0 present");
    assert_eq!(first["is_face_up"], true);
    assert_eq!(first["content"], 0);
}
