use crate::cards::{Card, CardId};
use crate::config::GameConfig;
use crate::deck::{Deck, DECK_SIZE};
use crate::rules::{find_match, is_valid_match};
use rand::Rng;

/// Cards in a trio.
pub const TRIO: usize = 3;

/// Where a card stands in the session.
///
/// `Matched` cards are out of play for good; only cards on the table can be
/// `Selected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CardState {
    Hidden,
    InPlay,
    Selected,
    Matched,
}

impl CardState {
    /// On the table, selected or not.
    pub const fn is_in_play(self) -> bool {
        matches!(self, CardState::InPlay | CardState::Selected)
    }

    pub const fn is_selected(self) -> bool {
        matches!(self, CardState::Selected)
    }

    pub const fn is_matched(self) -> bool {
        matches!(self, CardState::Matched)
    }
}

/// Result of a call to [`Game::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectOutcome {
    /// Unknown id, or a card that is not on the table.
    Ignored,
    Selected(CardId),
    Deselected(CardId),
    /// The third selection completed a valid trio; the cards left play.
    Match([CardId; TRIO]),
    /// The third selection completed an invalid trio; the cards stay on the table.
    NoMatch([CardId; TRIO]),
}

impl SelectOutcome {
    /// The evaluated trio, if this selection triggered an evaluation.
    pub fn trio(self) -> Option<[CardId; TRIO]> {
        match self {
            SelectOutcome::Match(t) | SelectOutcome::NoMatch(t) => Some(t),
            _ => None,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectError {
    #[error("no card with id {0}")]
    UnknownCard(CardId),
    #[error("card {0} is not in play")]
    NotInPlay(CardId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HistoryVerb {
    Deal,
    Select,
    Deselect,
    Match,
    NoMatch,
}

impl HistoryVerb {
    pub fn label(self) -> &'static str {
        match self {
            HistoryVerb::Deal => "Deal",
            HistoryVerb::Select => "Select",
            HistoryVerb::Deselect => "Deselect",
            HistoryVerb::Match => "Match",
            HistoryVerb::NoMatch => "No match",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct HistoryEntry {
    pub verb: HistoryVerb,
    pub cards: Vec<CardId>,
}

/// A single Set session: the shuffled deck plus the play state of every card.
///
/// Cards and their states live in arenas indexed by [`CardId`]; `order`
/// keeps the shuffled sequence that dealing walks through.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Game {
    config: GameConfig,
    order: Vec<CardId>,
    cards: Vec<Card>,
    states: Vec<CardState>,
    selected: Vec<CardId>,
    cards_left_to_deal: usize,
    history: Vec<HistoryEntry>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Generate, shuffle and deal the opening twelve cards.
    ///
    /// ```
    /// use set_engine::game::Game;
    ///
    /// let game = Game::new();
    /// assert_eq!(game.cards_in_play().len(), 12);
    /// assert_eq!(game.cards_left_to_deal(), 69);
    /// ```
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Same as [`Game::new`] with a reproducible shuffle.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(GameConfig::default().with_seed(seed))
    }

    pub fn with_config(config: GameConfig) -> Self {
        let mut deck = Deck::standard();
        match config.seed {
            Some(seed) => deck.shuffle_seeded(seed),
            None => deck.shuffle_with(&mut rand::rng()),
        }
        Self::from_deck(deck, config)
    }

    /// Shuffle with the caller's RNG; `config.seed` is ignored.
    pub fn with_rng<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let mut deck = Deck::standard();
        deck.shuffle_with(rng);
        Self::from_deck(deck, config)
    }

    /// Build a session over an already ordered deck and make the opening deal.
    pub(crate) fn from_deck(deck: Deck, config: GameConfig) -> Self {
        let order = deck.iter().map(|c| c.id()).collect();
        let mut cards = deck.into_cards();
        cards.sort_by_key(|c| c.id());
        let mut game = Self {
            config,
            order,
            cards,
            states: vec![CardState::Hidden; DECK_SIZE],
            selected: Vec::with_capacity(TRIO),
            cards_left_to_deal: DECK_SIZE,
            history: Vec::new(),
        };
        game.deal(config.initial_deal);
        game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    pub fn state(&self, id: CardId) -> Option<CardState> {
        self.states.get(id.index()).copied()
    }

    /// Ids in deck order.
    pub fn order(&self) -> &[CardId] {
        &self.order
    }

    /// Every card with its state, in deck order.
    pub fn cards(&self) -> Vec<(Card, CardState)> {
        self.order.iter().map(|id| (self.cards[id.index()], self.states[id.index()])).collect()
    }

    /// Cards on the table (selected ones included), in deck order.
    pub fn cards_in_play(&self) -> Vec<Card> {
        self.order
            .iter()
            .filter(|id| self.states[id.index()].is_in_play())
            .map(|id| self.cards[id.index()])
            .collect()
    }

    pub fn cards_left_to_deal(&self) -> usize {
        self.cards_left_to_deal
    }

    /// Currently selected ids, in selection order.
    pub fn selected(&self) -> &[CardId] {
        &self.selected
    }

    pub fn matched_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_matched()).count()
    }

    /// A valid trio among the cards in play, if there is one.
    pub fn hint(&self) -> Option<[CardId; TRIO]> {
        find_match(&self.cards_in_play())
    }

    /// Nothing left to deal and no trio on the table.
    pub fn is_finished(&self) -> bool {
        self.cards_left_to_deal == 0 && self.hint().is_none()
    }

    /// Reveal the next `n` hidden cards in deck order.
    ///
    /// Deals fewer when fewer remain; returns how many were dealt.
    pub fn deal(&mut self, n: usize) -> usize {
        let dealt: Vec<CardId> = self
            .order
            .iter()
            .copied()
            .filter(|id| self.states[id.index()] == CardState::Hidden)
            .take(n)
            .collect();
        if dealt.is_empty() {
            return 0;
        }
        for id in &dealt {
            self.states[id.index()] = CardState::InPlay;
        }
        self.cards_left_to_deal = self.cards_left_to_deal.saturating_sub(dealt.len());
        let count = dealt.len();
        self.record_history(HistoryVerb::Deal, dealt);
        count
    }

    /// Deal the configured replenish count.
    pub fn deal_more(&mut self) -> usize {
        self.deal(self.config.replenish)
    }

    /// Toggle a card's selection; the third selection is evaluated at once.
    ///
    /// Unknown ids and cards off the table are ignored.
    pub fn select(&mut self, id: CardId) -> SelectOutcome {
        self.try_select(id).unwrap_or(SelectOutcome::Ignored)
    }

    pub fn try_select(&mut self, id: CardId) -> Result<SelectOutcome, SelectError> {
        let state = self.state(id).ok_or(SelectError::UnknownCard(id))?;
        if !state.is_in_play() {
            return Err(SelectError::NotInPlay(id));
        }

        let mut outcome = SelectOutcome::Ignored;
        if self.selected.len() < TRIO {
            outcome = if state.is_selected() {
                self.states[id.index()] = CardState::InPlay;
                self.selected.retain(|&s| s != id);
                self.record_history(HistoryVerb::Deselect, vec![id]);
                SelectOutcome::Deselected(id)
            } else {
                self.states[id.index()] = CardState::Selected;
                self.selected.push(id);
                self.record_history(HistoryVerb::Select, vec![id]);
                SelectOutcome::Selected(id)
            };
        }
        if self.selected.len() == TRIO {
            outcome = self.resolve_trio();
        }
        Ok(outcome)
    }

    fn resolve_trio(&mut self) -> SelectOutcome {
        let trio = [self.selected[0], self.selected[1], self.selected[2]];
        self.selected.clear();
        let [a, b, c] = trio.map(|id| self.cards[id.index()]);
        let valid = is_valid_match(&a, &b, &c);
        let next = if valid { CardState::Matched } else { CardState::InPlay };
        for id in trio {
            self.states[id.index()] = next;
        }
        if valid {
            self.record_history(HistoryVerb::Match, trio.to_vec());
            SelectOutcome::Match(trio)
        } else {
            self.record_history(HistoryVerb::NoMatch, trio.to_vec());
            SelectOutcome::NoMatch(trio)
        }
    }

    /// The last `n` entries, oldest first.
    pub fn history_recent(&self, n: usize) -> Vec<HistoryEntry> {
        self.history_recent_offset(n, 0)
    }

    /// A window of `n` entries ending `offset` entries before the newest.
    ///
    /// The offset is clamped so the window stays full while history allows.
    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<HistoryEntry> {
        let offset = offset.min(self.history.len().saturating_sub(n));
        let mut window: Vec<HistoryEntry> =
            self.history.iter().rev().skip(offset).take(n).cloned().collect();
        window.reverse();
        window
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn record_history(&mut self, verb: HistoryVerb, cards: Vec<CardId>) {
        self.history.push(HistoryEntry { verb, cards });
    }
}
