//! Session module - one play session from first tick through restarts
//!
//! The session owns the player, the obstacles, the scoreboard and the input
//! latch, and advances them together in a fixed order once per tick. It never
//! schedules itself: a host calls [`Session::tick`] at the fixed rate and
//! stops calling it once [`TickOutcome::GameOver`] comes back.

use crate::config::{ConfigError, SessionConfig};
use crate::latch::InputLatch;
use crate::obstacle::{Collision, ObstacleManager};
use crate::player::Player;
use crate::scoring::{scores_on, updated_high_score, Scoreboard};
use crate::snapshot::{GameSnapshot, PlayerSnapshot};
use crate::types::Key;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    GameOver,
}

/// What a key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Stored for the next tick
    Latched,
    /// A finished game was reset
    Restarted,
    /// Non-jump key while the game is over
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    player: Player,
    obstacles: ObstacleManager,
    latch: InputLatch,
    scoreboard: Scoreboard,
    /// Live best, follows every score increment.
    high_score: u32,
    ticks: u32,
    game_over: bool,
    /// Number of restarts since the process started.
    restarts: u32,
    last_collision: Option<Collision>,
}

impl Session {
    /// Create a session with the default intervals
    pub fn new() -> Self {
        Self::build(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SessionConfig) -> Self {
        tracing::info!(
            spawn_interval = config.spawn_interval,
            score_interval = config.score_interval,
            "session started"
        );
        Self {
            config,
            player: Player::new(),
            obstacles: ObstacleManager::new(),
            latch: InputLatch::new(),
            scoreboard: Scoreboard::default(),
            high_score: 0,
            ticks: 0,
            game_over: false,
            restarts: 0,
            last_collision: None,
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &ObstacleManager {
        &self.obstacles
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    pub fn latched(&self) -> Option<Key> {
        self.latch.peek()
    }

    pub fn last_collision(&self) -> Option<Collision> {
        self.last_collision
    }

    #[cfg(test)]
    pub(crate) fn obstacles_mut(&mut self) -> &mut ObstacleManager {
        &mut self.obstacles
    }

    /// Deliver a key press.
    ///
    /// The key is latched for the next tick. Once the game is over only a jump
    /// key gets through: it restarts immediately and stays latched, so the new
    /// game opens with a jump.
    pub fn press(&mut self, key: Key) -> PressOutcome {
        let outcome = if !self.game_over {
            PressOutcome::Latched
        } else if key.is_jump() {
            self.restart();
            PressOutcome::Restarted
        } else {
            return PressOutcome::Ignored;
        };

        self.latch.set(key);
        outcome
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::GameOver;
        }

        let prev_ticks = self.ticks;
        self.ticks += 1;
        debug_assert!(self.ticks > prev_ticks);

        // Score
        if scores_on(self.ticks, self.config.score_interval) {
            self.scoreboard.score += 1;
            self.high_score = updated_high_score(self.high_score, self.scoreboard.score);
        }

        // Player controls; the key is spent whether or not it jumps.
        if let Some(key) = self.latch.take() {
            if key.is_jump() && self.player.jump() {
                tracing::debug!(tick = self.ticks, key = key.name(), "jump");
            }
        }
        self.player.update();

        // Obstacles
        self.obstacles.maybe_spawn(self.ticks, self.config.spawn_interval);
        if let Some(hit) = self.obstacles.advance_and_check(self.player.region()) {
            self.end(hit);
        }

        if self.game_over {
            TickOutcome::GameOver
        } else {
            TickOutcome::Running
        }
    }

    fn end(&mut self, hit: Collision) {
        self.game_over = true;
        self.scoreboard.high_score = self.high_score;
        self.last_collision = Some(hit);
        tracing::info!(
            tick = self.ticks,
            score = self.scoreboard.score,
            high_score = self.high_score,
            obstacle_x = hit.obstacle.origin.x,
            player_y = hit.player.origin.y,
            "game over"
        );
    }

    /// Tear down the scene and start a new game, keeping the high score.
    pub fn restart(&mut self) {
        self.obstacles.reset();
        self.player = Player::new();
        self.scoreboard = Scoreboard::new(self.high_score);
        self.latch.clear();
        self.ticks = 0;
        self.game_over = false;
        self.last_collision = None;
        self.restarts = self.restarts.wrapping_add(1);
        tracing::info!(
            restarts = self.restarts,
            high_score = self.high_score,
            "session restarted"
        );
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.ticks = self.ticks;
        out.score = self.scoreboard.score;
        out.high_score = self.high_score;
        out.shown_high_score = self.scoreboard.high_score;
        out.game_over = self.game_over;
        out.restarts = self.restarts;
        out.player = PlayerSnapshot::from(&self.player);
        out.obstacles.clear();
        out.obstacles.extend(self.obstacles.iter().map(|o| o.position()));
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacle::Obstacle;
    use crate::player::PlayerState;
    use crate::types::{Position, GROUND_Y};
    use pretty_assertions::assert_eq;

    /// Session whose only obstacle sits right in front of the player.
    fn session_about_to_collide() -> Session {
        let mut s = Session::new();
        s.obstacles_mut().clear();
        s.obstacles_mut().push(Obstacle::at(Position::new(9, 10)));
        s
    }

    #[test]
    fn test_new_session() {
        let s = Session::new();
        assert_eq!(s.ticks(), 0);
        assert_eq!(s.score(), 0);
        assert_eq!(s.high_score(), 0);
        assert!(!s.game_over());
        assert_eq!(s.obstacles().len(), 1);
        assert_eq!(s.player().state(), PlayerState::Running);
        assert!(s.latched().is_none());
    }

    #[test]
    fn test_with_config_rejects_zero_interval() {
        let cfg = SessionConfig::default().with_spawn_interval(0);
        assert_eq!(
            Session::with_config(cfg).unwrap_err(),
            ConfigError::ZeroSpawnInterval
        );
    }

    #[test]
    fn test_score_every_third_tick() {
        let mut s = Session::new();
        for t in 1..=30u32 {
            assert_eq!(s.tick(), TickOutcome::Running);
            assert_eq!(s.score(), t / 3);
            assert_eq!(s.high_score(), t / 3);
        }
    }

    #[test]
    fn test_latched_jump_is_consumed_on_next_tick() {
        let mut s = Session::new();
        assert_eq!(s.press(Key::Up), PressOutcome::Latched);
        assert_eq!(s.latched(), Some(Key::Up));
        s.tick();
        assert!(s.latched().is_none());
        assert_eq!(s.player().state(), PlayerState::Jumping);
        assert_eq!(s.player().position().y, GROUND_Y - 1);
    }

    #[test]
    fn test_non_jump_key_is_cleared_without_effect() {
        let mut s = Session::new();
        s.press(Key::Other('x'));
        s.tick();
        assert!(s.latched().is_none());
        assert_eq!(s.player().state(), PlayerState::Running);
    }

    #[test]
    fn test_collision_ends_game_and_snapshots_high_score() {
        let mut s = session_about_to_collide();
        assert_eq!(s.tick(), TickOutcome::GameOver);
        assert!(s.game_over());
        assert_eq!(s.ticks(), 1);
        assert_eq!(s.scoreboard().high_score, s.high_score());
        assert!(s.last_collision().is_some());
        // Obstacle did not advance on the colliding tick.
        assert_eq!(
            s.obstacles().iter().next().unwrap().position(),
            Position::new(9, 10)
        );
    }

    #[test]
    fn test_tick_while_game_over_is_noop() {
        let mut s = session_about_to_collide();
        s.tick();
        let before = s.snapshot();
        for _ in 0..10 {
            assert_eq!(s.tick(), TickOutcome::GameOver);
        }
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn test_press_while_game_over() {
        let mut s = session_about_to_collide();
        s.tick();
        assert_eq!(s.press(Key::Other('a')), PressOutcome::Ignored);
        assert!(s.game_over());
        assert_eq!(s.press(Key::Space), PressOutcome::Restarted);
        assert!(!s.game_over());
        assert_eq!(s.latched(), Some(Key::Space));
        assert_eq!(s.restarts(), 1);

        // The restarting key is the new game's first jump.
        s.tick();
        assert!(s.latched().is_none());
        assert_eq!(s.player().state(), PlayerState::Jumping);
        assert_eq!(s.player().position().y, GROUND_Y - 1);
    }

    #[test]
    fn test_ignored_key_is_not_latched() {
        let mut s = session_about_to_collide();
        s.tick();
        assert_eq!(s.press(Key::Other('a')), PressOutcome::Ignored);
        assert!(s.latched().is_none());
    }

    #[test]
    fn test_direct_restart_starts_without_latched_key() {
        let mut s = Session::new();
        s.press(Key::Up);
        s.restart();
        assert!(s.latched().is_none());
        s.tick();
        assert_eq!(s.player().state(), PlayerState::Running);
    }

    #[test]
    fn test_restart_keeps_high_score() {
        let mut s = Session::new();
        for _ in 0..30 {
            s.tick();
        }
        assert_eq!(s.high_score(), 10);
        s.obstacles_mut().push(Obstacle::at(Position::new(5, 10)));
        assert_eq!(s.tick(), TickOutcome::GameOver);
        let high = s.high_score();

        s.restart();
        assert_eq!(s.ticks(), 0);
        assert_eq!(s.score(), 0);
        assert_eq!(s.high_score(), high);
        assert_eq!(s.scoreboard().high_score, high);
        assert_eq!(s.obstacles().len(), 1);
        assert_eq!(
            s.obstacles().iter().next().unwrap().position(),
            Position::new(80, 10)
        );
        assert_eq!(s.player(), &Player::new());
    }

    #[test]
    fn test_snapshot_reuses_buffer() {
        let mut s = Session::new();
        let mut snap = GameSnapshot::default();
        for _ in 0..60 {
            s.tick();
        }
        s.snapshot_into(&mut snap);
        assert_eq!(snap.ticks, 60);
        assert_eq!(snap.score, 20);
        assert_eq!(snap.obstacles.len(), 2);
        assert_eq!(snap.obstacles[1], Position::new(79, 10));

        s.restart();
        s.snapshot_into(&mut snap);
        assert_eq!(snap.obstacles, vec![Position::new(80, 10)]);
        assert_eq!(snap.restarts, 1);
    }
}
