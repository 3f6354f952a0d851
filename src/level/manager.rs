//! Level manager: the host-facing entry point.
//!
//! The manager owns the goal generator and the single active [`Session`].
//! Loading a level picks the tier, generates a goal, and resets the session
//! with it. Everything else the host needs (input, replay, flags) is
//! forwarded to the session, and reads go through [`LevelManager::session`].
//!
//! ## Example
//!
//! ```
//! use glyph_weaver::core::{Action, PuzzleConfig};
//! use glyph_weaver::level::{DifficultyTier, LevelManager, RandomGoalGenerator};
//!
//! let mut game = LevelManager::new(PuzzleConfig::default(), RandomGoalGenerator::from_seed(42));
//! assert_eq!(game.tier(), DifficultyTier::Easy);
//!
//! game.apply_and_record(Action::UP).unwrap();
//! assert_eq!(game.session().cursor(), (3, 4));
//!
//! game.next_level();
//! assert_eq!(game.tier(), DifficultyTier::Mild);
//! assert_eq!(game.session().cursor(), (4, 4));
//! ```

use crate::core::{Action, PuzzleConfig, RecordedAction};
use crate::error::Result;
use crate::replay::ActionLog;
use crate::session::Session;

use super::generator::{GoalGenerator, RandomGoalGenerator};
use super::tier::DifficultyTier;

/// Cycles through levels and owns the active session.
#[derive(Clone, Debug)]
pub struct LevelManager<G = RandomGoalGenerator> {
    generator: G,
    session: Session,
    level: usize,
}

impl<G: GoalGenerator> LevelManager<G> {
    /// Create a manager and load level 0.
    #[must_use]
    pub fn new(config: PuzzleConfig, mut generator: G) -> Self {
        let tier = DifficultyTier::from_level(0);
        let goal = generator.generate(tier, config.grid_size, &config.palette);
        let session = Session::new(config, goal);
        log_loaded(0, tier, &session);

        Self {
            generator,
            session,
            level: 0,
        }
    }

    /// Load level `index`: generate a goal for its tier and reset the
    /// session (player grid, cursor, paint, counters, log, replay).
    pub fn load_level(&mut self, index: usize) {
        let tier = DifficultyTier::from_level(index);
        let config = self.session.config();
        let goal = self
            .generator
            .generate(tier, config.grid_size, &config.palette);

        self.session.reset(goal);
        self.level = index;
        log_loaded(index, tier, &self.session);
    }

    /// Load the level after the current one.
    pub fn next_level(&mut self) {
        self.load_level(self.level + 1);
    }

    /// Reload the current level with a freshly generated goal.
    pub fn reload_level(&mut self) {
        self.load_level(self.level);
    }

    /// Index of the loaded level.
    #[must_use]
    pub fn level_index(&self) -> usize {
        self.level
    }

    /// Tier of the loaded level.
    #[must_use]
    pub fn tier(&self) -> DifficultyTier {
        DifficultyTier::from_level(self.level)
    }

    /// Read access to the active session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    // === Forwarded session operations ===

    /// See [`Session::apply_and_record`].
    pub fn apply_and_record(&mut self, action: Action) -> Result<RecordedAction> {
        self.session.apply_and_record(action)
    }

    pub fn check_match(&mut self) -> bool {
        self.session.check_match()
    }

    pub fn set_mirror_mode(&mut self, enabled: bool) {
        self.session.set_mirror_mode(enabled);
    }

    pub fn toggle_show_goal(&mut self) -> bool {
        self.session.toggle_show_goal()
    }

    pub fn toggle_mistake_highlight(&mut self) -> bool {
        self.session.toggle_mistake_highlight()
    }

    pub fn start_replay(&mut self) -> Result<()> {
        self.session.start_replay()
    }

    pub fn replay_log(&mut self, saved: ActionLog) -> Result<()> {
        self.session.replay_log(saved)
    }

    /// One replay tick. See [`Session::replay_step`].
    pub fn replay_step(&mut self) -> Option<RecordedAction> {
        self.session.replay_step()
    }
}

fn log_loaded(index: usize, tier: DifficultyTier, session: &Session) {
    log::info!(
        "Loaded level {} ({}) with {} goal cube(s)",
        index + 1,
        tier,
        session.goal_grid().painted_count()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Angle, Cell, ColorId, Grid, Palette};
    use crate::session::MatchStatus;

    /// Generator that records the tiers it was asked for and returns an
    /// empty goal with one cube at the tier's index along the diagonal.
    #[derive(Default)]
    struct Scripted {
        requested: Vec<DifficultyTier>,
    }

    impl GoalGenerator for Scripted {
        fn generate(&mut self, tier: DifficultyTier, size: usize, _palette: &Palette) -> Grid {
            self.requested.push(tier);
            let mut goal = Grid::new(size);
            goal.set(tier.index(), tier.index(), Cell::new(ColorId::new(1), Angle::Deg0));
            goal
        }
    }

    #[test]
    fn test_new_loads_level_zero() {
        let manager = LevelManager::new(PuzzleConfig::default(), Scripted::default());

        assert_eq!(manager.level_index(), 0);
        assert_eq!(manager.tier(), DifficultyTier::Easy);
        assert_eq!(manager.generator().requested, vec![DifficultyTier::Easy]);
        assert_eq!(manager.session().goal_grid().get(0, 0).color, ColorId::new(1));
    }

    #[test]
    fn test_load_level_cycles_tiers() {
        let mut manager = LevelManager::new(PuzzleConfig::default(), Scripted::default());

        manager.load_level(4);
        assert_eq!(manager.tier(), DifficultyTier::Mild);

        manager.next_level();
        assert_eq!(manager.level_index(), 5);
        assert_eq!(manager.tier(), DifficultyTier::Hard);

        manager.next_level();
        assert_eq!(manager.tier(), DifficultyTier::Easy);

        assert_eq!(
            manager.generator().requested,
            vec![
                DifficultyTier::Easy,
                DifficultyTier::Mild,
                DifficultyTier::Hard,
                DifficultyTier::Easy,
            ]
        );
    }

    #[test]
    fn test_load_resets_session() {
        let mut manager = LevelManager::new(PuzzleConfig::default(), Scripted::default());
        manager.apply_and_record(Action::UP).unwrap();
        manager.apply_and_record(Action::Paint).unwrap();
        manager.start_replay().unwrap();

        manager.load_level(1);

        let session = manager.session();
        assert_eq!(session.cursor(), (4, 4));
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.match_status(), MatchStatus::Unknown);
        assert!(session.action_log().is_empty());
        assert!(!session.is_replaying());
        assert_eq!(session.player_grid().painted_count(), 0);
        assert_eq!(session.goal_grid().get(1, 1).color, ColorId::new(1));
    }

    #[test]
    fn test_reload_keeps_tier() {
        let mut manager = LevelManager::new(PuzzleConfig::default(), Scripted::default());
        manager.load_level(2);

        manager.reload_level();

        assert_eq!(manager.level_index(), 2);
        assert_eq!(manager.generator().requested.last(), Some(&DifficultyTier::Hard));
    }

    #[test]
    fn test_forwarded_flags() {
        let mut manager = LevelManager::new(PuzzleConfig::default(), Scripted::default());

        manager.set_mirror_mode(true);
        assert!(manager.toggle_show_goal());
        assert!(manager.toggle_mistake_highlight());

        let session = manager.session();
        assert!(session.is_mirror_mode());
        assert!(session.is_showing_goal());
        assert!(session.is_highlighting_mistakes());
    }

    #[test]
    fn test_random_generator_manager() {
        let mut manager = LevelManager::new(PuzzleConfig::default(), RandomGoalGenerator::from_seed(1));

        for level in 0..6 {
            manager.load_level(level);
            let cubes = manager.session().goal_grid().painted_count();
            assert!(cubes <= manager.tier().max_cubes());
            assert!(cubes >= 1);
        }
    }
}
