use proptest::prelude::*;
use set_engine::cards::CardId;
use set_engine::deck::DECK_SIZE;
use set_engine::game::{CardState, Game, SelectOutcome};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy)]
enum Op {
    Deal(usize),
    Select(u8),
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => (0usize..=15).prop_map(Op::Deal),
        // Ids above 80 exercise the unknown-card path.
        6 => (0u8..=100).prop_map(Op::Select),
    ]
}

fn check_state(g: &Game) -> Result<(), TestCaseError> {
    let cards = g.cards();
    prop_assert_eq!(cards.len(), DECK_SIZE);
    let ids: HashSet<CardId> = cards.iter().map(|(c, _)| c.id()).collect();
    prop_assert_eq!(ids.len(), DECK_SIZE);

    let hidden = cards.iter().filter(|(_, s)| *s == CardState::Hidden).count();
    prop_assert_eq!(g.cards_left_to_deal(), hidden);

    let selected = cards.iter().filter(|(_, s)| s.is_selected()).count();
    prop_assert_eq!(selected, g.selected().len());
    prop_assert!(selected < 3);
    for id in g.selected() {
        prop_assert_eq!(g.state(*id), Some(CardState::Selected));
    }

    for (_, s) in &cards {
        if s.is_matched() {
            prop_assert!(!s.is_in_play());
            prop_assert!(!s.is_selected());
        }
    }
    prop_assert_eq!(g.matched_count() % 3, 0);
    prop_assert_eq!(g.cards_in_play().len() + g.matched_count() + hidden, DECK_SIZE);
    Ok(())
}

proptest! {
    #[test]
    fn random_deals_and_selections_keep_state_consistent(
        seed in any::<u64>(),
        ops in prop::collection::vec(any_op(), 0..300),
    ) {
        let mut g = Game::with_seed(seed);
        check_state(&g)?;
        for op in ops {
            match op {
                Op::Deal(k) => {
                    let before = g.cards_left_to_deal();
                    let dealt = g.deal(k);
                    prop_assert_eq!(dealt, k.min(before));
                    prop_assert_eq!(g.cards_left_to_deal(), before - dealt);
                }
                Op::Select(x) => {
                    let id = CardId(x);
                    let was = g.state(id);
                    let matched_before = g.matched_count();
                    match g.select(id) {
                        SelectOutcome::Ignored => {
                            prop_assert!(!was.map_or(false, CardState::is_in_play));
                        }
                        SelectOutcome::Match(trio) => {
                            prop_assert_eq!(g.matched_count(), matched_before + 3);
                            for t in trio {
                                prop_assert_eq!(g.state(t), Some(CardState::Matched));
                            }
                        }
                        SelectOutcome::NoMatch(trio) => {
                            prop_assert_eq!(g.matched_count(), matched_before);
                            for t in trio {
                                prop_assert_eq!(g.state(t), Some(CardState::InPlay));
                            }
                        }
                        SelectOutcome::Selected(s) => {
                            prop_assert_eq!(s, id);
                            prop_assert_eq!(g.state(id), Some(CardState::Selected));
                        }
                        SelectOutcome::Deselected(s) => {
                            prop_assert_eq!(s, id);
                            prop_assert_eq!(g.state(id), Some(CardState::InPlay));
                        }
                        other => prop_assert!(false, "unexpected outcome {:?}", other),
                    }
                }
            }
            check_state(&g)?;
        }
    }
}
