//! Obstacle module - spawning, scrolling and recycling cacti
//!
//! Obstacles are kept in spawn order. Each active tick the whole collection is
//! walked once: an obstacle is first tested against the player using its
//! current (pre-advance) region, then moved one column left and dropped once it
//! has left the field.

use crate::types::{Position, Region, OBSTACLE_SIZE, OBSTACLE_SPAWN_X, OBSTACLE_Y};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Obstacle {
    position: Position,
}

impl Obstacle {
    /// New obstacle at the spawn column
    pub fn new() -> Self {
        Self::at(Position::new(OBSTACLE_SPAWN_X, OBSTACLE_Y))
    }

    pub(crate) fn at(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn region(&self) -> Region {
        Region::new(self.position, OBSTACLE_SIZE)
    }

    /// Fully past the left edge
    pub fn is_off_screen(&self) -> bool {
        self.position.x < 0
    }

    fn advance(&mut self) {
        self.position = self.position.offset(-1, 0);
    }
}

impl Default for Obstacle {
    fn default() -> Self {
        Self::new()
    }
}

/// First overlap found during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    /// Index of the obstacle in spawn order
    pub index: usize,
    pub obstacle: Region,
    pub player: Region,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObstacleManager {
    obstacles: Vec<Obstacle>,
}

impl ObstacleManager {
    /// Manager holding the single obstacle every session starts with
    pub fn new() -> Self {
        Self {
            obstacles: vec![Obstacle::new()],
        }
    }

    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            obstacles: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    #[cfg(test)]
    pub(crate) fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Back to a single obstacle at the spawn column, keeping the allocation.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.obstacles.push(Obstacle::new());
    }

    /// Spawn one obstacle when `tick` lands on the interval.
    ///
    /// The live count is not consulted.
    pub fn maybe_spawn(&mut self, tick: u32, interval: u32) -> bool {
        debug_assert!(interval > 0, "spawn interval must be positive");
        if interval == 0 || tick % interval != 0 {
            return false;
        }
        self.obstacles.push(Obstacle::new());
        tracing::debug!(tick, live = self.obstacles.len(), "obstacle spawned");
        true
    }

    /// Test each obstacle against `player`, advancing the ones that miss.
    ///
    /// Stops at the first hit: the colliding obstacle and everything after it
    /// keep their positions for this tick.
    pub fn advance_and_check(&mut self, player: Region) -> Option<Collision> {
        let mut hit = None;
        for (index, obstacle) in self.obstacles.iter_mut().enumerate() {
            let region = obstacle.region();
            if region.overlaps(&player) {
                hit = Some(Collision {
                    index,
                    obstacle: region,
                    player,
                });
                break;
            }
            obstacle.advance();
        }

        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_off_screen());
        let removed = before - self.obstacles.len();
        if removed > 0 {
            tracing::trace!(removed, live = self.obstacles.len(), "obstacles left the field");
        }

        hit
    }
}
