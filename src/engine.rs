// Engine API boundary. Presentation layers and bots drive a session through
// this trait instead of reaching into `Game`. It is implemented for `Game`.

use crate::cards::{Card, CardId};
use crate::game::{CardState, Game, SelectOutcome, TRIO};

pub trait SetEngine {
    // Mutations
    fn select(&mut self, id: CardId) -> SelectOutcome;
    fn deal(&mut self, n: usize) -> usize;
    fn deal_more(&mut self) -> usize;

    // Queries
    fn cards_in_play(&self) -> Vec<Card>;
    fn cards_left_to_deal(&self) -> usize;
    fn selected(&self) -> &[CardId];
    fn state(&self, id: CardId) -> Option<CardState>;
    fn matched_count(&self) -> usize;
    fn hint(&self) -> Option<[CardId; TRIO]>;
    fn is_finished(&self) -> bool;
}

impl SetEngine for Game {
    fn select(&mut self, id: CardId) -> SelectOutcome {
        self.select(id)
    }
    fn deal(&mut self, n: usize) -> usize {
        self.deal(n)
    }
    fn deal_more(&mut self) -> usize {
        self.deal_more()
    }

    fn cards_in_play(&self) -> Vec<Card> {
        self.cards_in_play()
    }
    fn cards_left_to_deal(&self) -> usize {
        self.cards_left_to_deal()
    }
    fn selected(&self) -> &[CardId] {
        self.selected()
    }
    fn state(&self, id: CardId) -> Option<CardState> {
        self.state(id)
    }
    fn matched_count(&self) -> usize {
        self.matched_count()
    }
    fn hint(&self) -> Option<[CardId; TRIO]> {
        self.hint()
    }
    fn is_finished(&self) -> bool {
        self.is_finished()
    }
}

/// Play a session to the end: take any trio on the table, otherwise deal more.
///
/// Clears a pending selection first. Returns the number of trios matched.
///
/// ```
/// use set_engine::engine::{play_out, SetEngine};
/// use set_engine::game::Game;
///
/// let mut game = Game::with_seed(5);
/// let trios = play_out(&mut game);
/// assert!(game.is_finished());
/// assert_eq!(game.matched_count(), trios * 3);
/// ```
pub fn play_out<E: SetEngine + ?Sized>(engine: &mut E) -> usize {
    let pending = engine.selected().to_vec();
    for id in pending {
        engine.select(id);
    }

    let mut trios = 0;
    while !engine.is_finished() {
        if let Some(trio) = engine.hint() {
            let mut outcome = SelectOutcome::Ignored;
            for id in trio {
                outcome = engine.select(id);
            }
            if !matches!(outcome, SelectOutcome::Match(_)) {
                break;
            }
            trios += 1;
        } else if engine.deal_more() == 0 {
            break;
        }
    }
    trios
}
