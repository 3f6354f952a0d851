//! The puzzle session: cursor, paint state, player grid and history.
//!
//! ## Applying input
//!
//! Input goes through [`Session::apply_and_record`], which resolves a raw
//! [`Action`] into its canonical [`RecordedAction`], appends it to the log,
//! and then applies it. Resolution and application are separate steps: the
//! log only ever sees resolved actions, and replay feeds those back through
//! the same private apply path.
//!
//! ## Replay
//!
//! [`Session::start_replay`] resets the player state (keeping the goal and
//! the log) and enters replay mode. While replaying, input is rejected with
//! [`PuzzleError::ReplayActive`]. The host drives the replay by calling
//! [`Session::replay_step`] once per tick until it returns `None`.

use crate::core::{Action, Angle, Cell, ColorId, Coord, Grid, PuzzleConfig, RecordedAction};
use crate::error::{PuzzleError, Result};
use crate::replay::{ActionLog, Replayer};

use super::matching::{evaluate, MatchReport, MatchStatus};

/// Currently selected color and rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PaintState {
    pub color: ColorId,
    pub rotation: Angle,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            color: ColorId::FIRST,
            rotation: Angle::Deg0,
        }
    }
}

/// One level's worth of puzzle state.
#[derive(Clone, Debug)]
pub struct Session {
    config: PuzzleConfig,
    goal: Grid,
    player: Grid,
    cursor: Coord,
    paint: PaintState,
    move_count: u32,
    score: usize,
    status: MatchStatus,
    last_report: Option<MatchReport>,

    // Display flags, kept across resets.
    mirror_mode: bool,
    show_goal: bool,
    mistake_highlight: bool,

    log: ActionLog,
    replayer: Replayer,
}

impl Session {
    /// Create a session for `goal`.
    ///
    /// The goal must be `config.grid_size` on each side.
    #[must_use]
    pub fn new(config: PuzzleConfig, goal: Grid) -> Self {
        assert_eq!(
            goal.size(),
            config.grid_size,
            "Goal grid size must match the configured grid size"
        );

        Self {
            player: Grid::new(config.grid_size),
            cursor: config.center(),
            config,
            goal,
            paint: PaintState::default(),
            move_count: 0,
            score: 0,
            status: MatchStatus::Unknown,
            last_report: None,
            mirror_mode: false,
            show_goal: false,
            mistake_highlight: false,
            log: ActionLog::new(),
            replayer: Replayer::new(),
        }
    }

    /// Start over with a new goal: fresh player grid, centered cursor,
    /// default paint, zeroed counters, empty log, replay off.
    ///
    /// Mirror mode and the display toggles are left as they are.
    pub fn reset(&mut self, goal: Grid) {
        assert_eq!(
            goal.size(),
            self.config.grid_size,
            "Goal grid size must match the configured grid size"
        );

        self.goal = goal;
        self.reset_player();
        self.log.clear();
        self.replayer.stop();
    }

    fn reset_player(&mut self) {
        self.player = Grid::new(self.config.grid_size);
        self.cursor = self.config.center();
        self.paint = PaintState::default();
        self.move_count = 0;
        self.score = 0;
        self.status = MatchStatus::Unknown;
        self.last_report = None;
    }

    // === Input ===

    /// Record and apply one input action.
    ///
    /// Returns the recorded form. Fails without touching any state when a
    /// replay is running or the action carries an out-of-range value.
    pub fn apply_and_record(&mut self, action: Action) -> Result<RecordedAction> {
        if self.replayer.is_active() {
            log::warn!("Ignoring {:?} during replay", action);
            return Err(PuzzleError::ReplayActive);
        }

        let recorded = self.resolve(action)?;
        log::debug!("Recording action #{}: {}", self.log.len(), recorded);
        self.log.push(recorded);
        self.apply(recorded);
        Ok(recorded)
    }

    /// Turn a raw action into its canonical recorded form.
    fn resolve(&self, action: Action) -> Result<RecordedAction> {
        let recorded = match action {
            Action::Move(d_row, d_col) => RecordedAction::Move(d_row, d_col),
            Action::SetColor(color) => RecordedAction::SetColor(color),
            Action::Rotate(delta) => RecordedAction::Rotate(delta),
            Action::Paint => RecordedAction::Paint {
                color: self.paint.color,
                rotation: self.paint.rotation,
                mirrored: self.mirror_mode,
            },
        };
        self.validate(recorded)?;
        Ok(recorded)
    }

    /// Check that a recorded action only carries values this session's
    /// configuration allows.
    fn validate(&self, action: RecordedAction) -> Result<()> {
        match action {
            RecordedAction::SetColor(color) | RecordedAction::Paint { color, .. } => {
                if !self.config.palette.contains(color) {
                    return Err(PuzzleError::InvalidColor {
                        color: color.raw(),
                        palette_size: self.config.palette.len(),
                    });
                }
            }
            RecordedAction::Rotate(delta) => {
                if delta % 90 != 0 {
                    return Err(PuzzleError::InvalidRotation(delta));
                }
            }
            RecordedAction::Move(..) => {}
        }
        Ok(())
    }

    fn apply(&mut self, action: RecordedAction) {
        match action {
            RecordedAction::Move(d_row, d_col) => {
                let last = self.config.grid_size - 1;
                let (row, col) = self.cursor;
                self.cursor = (clamp_axis(row, d_row, last), clamp_axis(col, d_col, last));
            }
            RecordedAction::SetColor(color) => {
                self.paint.color = color;
            }
            RecordedAction::Rotate(delta) => {
                self.paint.rotation = self.paint.rotation.rotated(delta / 90);
            }
            RecordedAction::Paint {
                color,
                rotation,
                mirrored,
            } => {
                let cell = Cell::new(color, rotation);
                let (row, col) = self.cursor;

                if self.player[(row, col)] != cell {
                    self.move_count += 1;
                }
                self.player[(row, col)] = cell;

                let mirror_col = self.config.grid_size - 1 - col;
                if mirrored && mirror_col != col {
                    self.player[(row, mirror_col)] = cell;
                }

                self.check_match();
            }
        }
    }

    // === Match evaluation ===

    /// Compare the player grid against the goal, caching score and status.
    pub fn check_match(&mut self) -> bool {
        let report = evaluate(&self.player, &self.goal);
        log::debug!(
            "Match check: matched={} score={}/{} painted={}",
            report.matched,
            report.score,
            report.required,
            report.painted
        );

        self.score = report.score;
        self.status = report.status();
        let matched = report.matched;
        self.last_report = Some(report);
        matched
    }

    // === Replay ===

    /// Reset the player state and begin replaying the log from the start.
    pub fn start_replay(&mut self) -> Result<()> {
        if self.replayer.is_active() {
            return Err(PuzzleError::ReplayActive);
        }

        self.reset_player();
        self.replayer.start();
        log::info!("Replaying {} recorded actions", self.log.len());
        Ok(())
    }

    /// Replace the log with a saved one and start replaying it.
    ///
    /// Every entry is checked against the palette and the rotation step
    /// first. On failure the session is left exactly as it was.
    pub fn replay_log(&mut self, saved: ActionLog) -> Result<()> {
        if self.replayer.is_active() {
            return Err(PuzzleError::ReplayActive);
        }
        for (index, &action) in saved.iter().enumerate() {
            if let Err(err) = self.validate(action) {
                log::warn!("Rejecting saved log: entry #{} {} is invalid: {}", index, action, err);
                return Err(err);
            }
        }

        self.log = saved;
        self.start_replay()
    }

    /// Apply the next recorded action, returning it.
    ///
    /// Returns `None` once the log is exhausted, at which point replay mode
    /// has been cleared. Also `None` when no replay is running.
    pub fn replay_step(&mut self) -> Option<RecordedAction> {
        let was_active = self.replayer.is_active();

        match self.replayer.advance(&self.log) {
            Some(action) => {
                self.apply(action);
                Some(action)
            }
            None => {
                if was_active {
                    log::info!("Replay finished after {} actions", self.log.len());
                }
                None
            }
        }
    }

    /// Start a replay and run it to completion. Returns the number of
    /// actions applied.
    pub fn replay_all(&mut self) -> Result<usize> {
        self.start_replay()?;

        let mut applied = 0;
        while self.replay_step().is_some() {
            applied += 1;
        }
        Ok(applied)
    }

    #[must_use]
    pub fn is_replaying(&self) -> bool {
        self.replayer.is_active()
    }

    /// `(applied, total)` for the running replay.
    #[must_use]
    pub fn replay_progress(&self) -> (usize, usize) {
        (self.replayer.position(), self.log.len())
    }

    // === Flags ===

    pub fn set_mirror_mode(&mut self, enabled: bool) {
        self.mirror_mode = enabled;
    }

    /// Flip the "show goal" overlay flag and return the new value.
    pub fn toggle_show_goal(&mut self) -> bool {
        self.show_goal = !self.show_goal;
        self.show_goal
    }

    /// Flip the mistake highlight flag and return the new value.
    pub fn toggle_mistake_highlight(&mut self) -> bool {
        self.mistake_highlight = !self.mistake_highlight;
        self.mistake_highlight
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    #[must_use]
    pub fn player_grid(&self) -> &Grid {
        &self.player
    }

    #[must_use]
    pub fn goal_grid(&self) -> &Grid {
        &self.goal
    }

    #[must_use]
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    #[must_use]
    pub fn paint(&self) -> PaintState {
        self.paint
    }

    #[must_use]
    pub fn color(&self) -> ColorId {
        self.paint.color
    }

    #[must_use]
    pub fn rotation(&self) -> Angle {
        self.paint.rotation
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn match_status(&self) -> MatchStatus {
        self.status
    }

    /// Report from the last match evaluation, if any since the last reset.
    #[must_use]
    pub fn last_report(&self) -> Option<&MatchReport> {
        self.last_report.as_ref()
    }

    /// Cells that disagreed with the goal at the last evaluation.
    #[must_use]
    pub fn mistakes(&self) -> &[Coord] {
        match &self.last_report {
            Some(report) => report.mistakes.as_slice(),
            None => &[],
        }
    }

    #[must_use]
    pub fn is_mirror_mode(&self) -> bool {
        self.mirror_mode
    }

    #[must_use]
    pub fn is_showing_goal(&self) -> bool {
        self.show_goal
    }

    #[must_use]
    pub fn is_highlighting_mistakes(&self) -> bool {
        self.mistake_highlight
    }

    #[must_use]
    pub fn action_log(&self) -> &ActionLog {
        &self.log
    }
}

/// `pos + delta`, clamped to `[0, last]`.
fn clamp_axis(pos: usize, delta: i32, last: usize) -> usize {
    let moved = pos as i64 + i64::from(delta);
    moved.clamp(0, last as i64) as usize
}
