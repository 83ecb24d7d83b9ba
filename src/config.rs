//! Session configuration.

/// Cards revealed when a session starts.
pub const DEFAULT_INITIAL_DEAL: usize = 12;
/// Cards revealed by a normal replenish.
pub const DEFAULT_REPLENISH: usize = 3;

/// How a [`Game`](crate::game::Game) is set up.
///
/// ```
/// use set_engine::config::GameConfig;
///
/// let cfg = GameConfig::default().with_seed(7).with_initial_deal(15);
/// assert_eq!(cfg.initial_deal, 15);
/// assert_eq!(cfg.replenish, 3);
/// assert_eq!(cfg.seed, Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameConfig {
    /// Cards dealt right after the shuffle.
    pub initial_deal: usize,
    /// Cards dealt by `deal_more`.
    pub replenish: usize,
    /// Fixed shuffle seed; `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { initial_deal: DEFAULT_INITIAL_DEAL, replenish: DEFAULT_REPLENISH, seed: None }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_initial_deal(mut self, n: usize) -> Self {
        self.initial_deal = n;
        self
    }

    #[must_use]
    pub fn with_replenish(mut self, n: usize) -> Self {
        self.replenish = n;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
