//! Game session module - the step-driven orchestration layer
//!
//! Owns the playfield, the current/next pieces, the score, and all timing
//! state. The surrounding application calls [`GameSession::step`] once per
//! tick with the elapsed wall-clock delta and the input snapshot; every
//! mutation (movement, locking, row clears, scoring) happens atomically
//! inside that call. The session has no internal clocks or threads.

use crate::config::{ConfigError, SessionConfig};
use crate::core::board::Playfield;
use crate::core::piece::Piece;
use crate::core::rng::PieceSupply;
use crate::core::snapshot::{PieceSnapshot, SessionSnapshot, TimersSnapshot};
use crate::types::Command;

#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    field: Playfield,
    current: Piece,
    next: Piece,
    supply: PieceSupply,
    score: u32,
    fall_timer_ms: u32,
    lock_timer_ms: u32,
    landed: bool,
    game_over: bool,
}

impl GameSession {
    /// Validate the configuration and start a session with a uniform random
    /// piece supply seeded from `config.seed`.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let supply = PieceSupply::uniform(config.seed);
        Self::with_supply(config, supply)
    }

    /// Start a session drawing pieces from an explicit supply.
    pub fn with_supply(config: SessionConfig, mut supply: PieceSupply) -> Result<Self, ConfigError> {
        config.validate()?;
        let current = Piece::spawn(supply.draw(), config.columns);
        let next = Piece::spawn(supply.draw(), config.columns);
        Ok(Self {
            config,
            field: Playfield::new(config.columns, config.rows),
            current,
            next,
            supply,
            score: 0,
            fall_timer_ms: 0,
            lock_timer_ms: 0,
            landed: false,
            game_over: false,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn field(&self) -> &Playfield {
        &self.field
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Lock-delay countdown is running.
    pub fn is_landed(&self) -> bool {
        self.landed
    }

    /// Advance the simulation by one tick.
    ///
    /// Commands are applied in slice order to the current piece, then the
    /// gravity timer and (when landed) the lock-delay timer advance by
    /// `delta_ms`. After GAME_OVER the call is a no-op that keeps returning
    /// the final snapshot.
    pub fn step(&mut self, delta_ms: u32, commands: &[Command], fast_drop: bool) -> SessionSnapshot {
        if !self.game_over {
            self.fall_timer_ms = self.fall_timer_ms.saturating_add(delta_ms);
            for &command in commands {
                if self.game_over {
                    break;
                }
                self.apply_command(command);
            }
            if !self.game_over {
                self.apply_gravity(fast_drop);
            }
            if !self.game_over {
                self.apply_lock_delay(delta_ms);
            }
        }
        self.snapshot()
    }

    fn apply_command(&mut self, command: Command) {
        match command {
            Command::MoveLeft => {
                self.try_move(-1, 0);
            }
            Command::MoveRight => {
                self.try_move(1, 0);
            }
            Command::RotateCcw => {
                self.try_rotate_ccw();
            }
            Command::HardDrop => {
                while self.try_move(0, 1) {}
                self.commit_lock();
            }
        }
    }

    /// Move the current piece if the target placement is valid.
    fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        let trial = self.current.translated(dx, dy);
        if trial.is_valid(&self.field) {
            self.current = trial;
            return true;
        }
        false
    }

    /// Rotate counter-clockwise. Single candidate orientation, no wall-kick
    /// search; an invalid result is rejected outright.
    fn try_rotate_ccw(&mut self) -> bool {
        let trial = self.current.rotated_ccw();
        if trial.is_valid(&self.field) {
            self.current = trial;
            return true;
        }
        false
    }

    /// Gravity: once the fall timer reaches the effective interval, reset it
    /// and attempt one row down. A blocked fall arms the lock-delay
    /// countdown; a successful fall disarms it.
    fn apply_gravity(&mut self, fast_drop: bool) {
        let interval = if fast_drop {
            self.config.fast_drop_interval_ms
        } else {
            self.config.base_fall_interval_ms
        };
        if self.fall_timer_ms >= interval {
            self.fall_timer_ms = 0;
            if self.try_move(0, 1) {
                self.landed = false;
                self.lock_timer_ms = 0;
            } else {
                self.landed = true;
            }
        }
    }

    /// Lock delay: while landed, the piece stays adjustable until the timer
    /// reaches the threshold, then it settles for good.
    fn apply_lock_delay(&mut self, delta_ms: u32) {
        if !self.landed {
            return;
        }
        self.lock_timer_ms = self.lock_timer_ms.saturating_add(delta_ms);
        if self.lock_timer_ms >= self.config.lock_delay_ms {
            self.commit_lock();
        }
    }

    /// Settle the current piece: write its cells into the locked record,
    /// clear full rows, score them, promote the next piece, and run the
    /// game-over checks.
    fn commit_lock(&mut self) {
        self.field.lock_piece(&self.current);
        let cleared = self.field.clear_full_rows();
        self.score = self
            .score
            .saturating_add(self.config.score_per_row * cleared.len() as u32);

        self.current = self.next;
        self.next = Piece::spawn(self.supply.draw(), self.config.columns);
        self.lock_timer_ms = 0;
        self.landed = false;

        if self.field.reaches_top() || !self.current.is_valid(&self.field) {
            self.game_over = true;
        }
    }

    /// Lowest origin row the current piece can occupy, found by probing
    /// validity straight down. Rendering aid for ghost-piece projection.
    pub fn ghost_y(&self) -> i16 {
        let mut trial = self.current;
        while trial.translated(0, 1).is_valid(&self.field) {
            trial = trial.translated(0, 1);
        }
        trial.y
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut out = SessionSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    /// Write the session read-model into `out`, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.columns = self.config.columns;
        out.rows = self.config.rows;
        self.field.project_into(&mut out.board);
        out.current = PieceSnapshot::from(self.current);
        out.next = self.next.kind;
        out.ghost_y = self.ghost_y();
        out.landed = self.landed;
        out.score = self.score;
        out.game_over = self.game_over;
        out.timers = TimersSnapshot {
            fall_ms: self.fall_timer_ms,
            lock_ms: self.lock_timer_ms,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn o_session() -> GameSession {
        GameSession::with_supply(
            SessionConfig::default(),
            PieceSupply::cycle(vec![PieceKind::O]),
        )
        .unwrap()
    }

    #[test]
    fn test_new_session_state() {
        let session = GameSession::new(SessionConfig::default()).unwrap();
        assert_eq!(session.score(), 0);
        assert!(!session.game_over());
        assert!(!session.is_landed());
        assert_eq!(session.field().occupied_count(), 0);
        assert_eq!(session.current().y, 0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = SessionConfig {
            columns: 0,
            ..Default::default()
        };
        assert!(GameSession::new(config).is_err());
    }

    #[test]
    fn test_fall_timer_accumulates_across_steps() {
        let mut session = o_session();
        let snapshot = session.step(499, &[], false);
        assert_eq!(snapshot.timers.fall_ms, 499);
        assert_eq!(snapshot.current.y, 0);

        let snapshot = session.step(1, &[], false);
        assert_eq!(snapshot.timers.fall_ms, 0);
        assert_eq!(snapshot.current.y, 1);
    }

    #[test]
    fn test_fast_drop_uses_short_interval() {
        let mut session = o_session();
        let snapshot = session.step(50, &[], true);
        assert_eq!(snapshot.current.y, 1);

        // The same delta without fast drop does not reach the base interval.
        let mut session = o_session();
        let snapshot = session.step(50, &[], false);
        assert_eq!(snapshot.current.y, 0);
    }

    #[test]
    fn test_rotation_blocked_by_floor_is_reverted() {
        let mut session = GameSession::with_supply(
            SessionConfig::default(),
            PieceSupply::cycle(vec![PieceKind::I]),
        )
        .unwrap();
        // Ride the horizontal I piece down to the floor row.
        for _ in 0..19 {
            session.step(50, &[], true);
        }
        assert_eq!(session.current().y, 19);

        // The vertical orientation would extend below the floor, so the
        // single-candidate rotation is rejected and the index stays put.
        session.step(0, &[Command::RotateCcw], false);
        assert_eq!(session.current().rotation, 0);
        assert_eq!(session.current().y, 19);
    }

    #[test]
    fn test_hard_drop_promotes_next_piece() {
        let mut session = GameSession::with_supply(
            SessionConfig::default(),
            PieceSupply::cycle(vec![PieceKind::O, PieceKind::T, PieceKind::I]),
        )
        .unwrap();
        assert_eq!(session.current().kind, PieceKind::O);
        assert_eq!(session.next().kind, PieceKind::T);

        let snapshot = session.step(0, &[Command::HardDrop], false);
        assert_eq!(snapshot.current.kind, PieceKind::T);
        assert_eq!(snapshot.next, PieceKind::I);
        assert_eq!(snapshot.occupied_count(), 4);
    }

    #[test]
    fn test_ghost_y_matches_hard_drop_row() {
        let mut session = o_session();
        let ghost = session.ghost_y();
        assert_eq!(ghost, 18);

        let snapshot = session.step(0, &[Command::HardDrop], false);
        assert_eq!(snapshot.cell(3, 18), Some(PieceKind::O));
        assert_eq!(snapshot.cell(3, 19), Some(PieceKind::O));
    }
}
