//! Direction queueing with reversal protection
//!
//! Input callbacks run between ticks; the tick commits the queued value.
//! The reversal check always compares against the direction the snake is
//! actually travelling (the applied one), never the queued one, so a
//! queued-but-unapplied turn can still be overwritten before the next
//! tick consumes it.

use super::grid::Direction;

/// Applied/queued direction pair shared between input callbacks and the
/// tick. The split is the only synchronization the single-threaded loop
/// needs: the applied side changes exclusively inside `commit`.
#[derive(Debug, Clone, Copy)]
pub struct DirectionQueue {
    applied: Direction,
    queued: Direction,
}

impl DirectionQueue {
    pub fn new(initial: Direction) -> Self {
        Self {
            applied: initial,
            queued: initial,
        }
    }

    /// Queue a direction for the next tick. A reversal of the applied
    /// direction is dropped silently; among accepted proposals the
    /// latest one wins.
    pub fn propose(&mut self, direction: Direction) {
        if !direction.is_opposite(self.applied) {
            self.queued = direction;
        }
    }

    /// Publish the queued direction at the top of a tick and return it
    pub fn commit(&mut self) -> Direction {
        self.applied = self.queued;
        self.applied
    }

    /// Direction the snake is currently travelling
    pub fn applied(&self) -> Direction {
        self.applied
    }

    /// Direction waiting to be applied on the next tick
    pub fn queued(&self) -> Direction {
        self.queued
    }
}
