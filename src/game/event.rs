//! Event System
//!
//! Gameplay code doesn't play sounds or write logs itself. It sends
//! events; the frame loop drains them once per frame and hands them to
//! the audio and logging systems.

use super::runtime::GamePhase;

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Something noteworthy that happened during a simulation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Player left the ground
    Jumped,
    /// A coin was picked up
    CoinCollected { score: u32, remaining: usize },
    /// Player lost a life
    PlayerDied { lives_left: u32 },
    /// A level was built and play started
    LevelStarted { index: usize },
    /// The game moved between menu / playing / game over / win
    PhaseChanged { from: GamePhase, to: GamePhase },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert_eq!(queue.iter().count(), 3);
        assert_eq!(queue.iter().sum::<i32>(), 6);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert_eq!(queue.iter().count(), 0);
    }
}
