use std::iter::{Cycle, Peekable};

use smallvec::{IntoIter, SmallVec};

/// Rotation of players taking turns.
/// The element at the front is the active one, advancing moves it to the back.
#[derive(Debug)]
pub struct TurnOrder<T: Clone> {
    players: SmallVec<[T; 2]>,
    queue: Peekable<Cycle<IntoIter<[T; 2]>>>,
}

impl<T: Clone> TurnOrder<T> {
    pub fn new(players: Vec<T>) -> Self {
        let players = SmallVec::from_vec(players);
        Self {
            players: players.clone(),
            queue: players.into_iter().cycle().peekable(),
        }
    }

    /// Players in their initial order.
    pub fn as_slice(&self) -> &[T] {
        self.players.as_slice()
    }

    /// Get the active element without advancing the rotation.
    /// &mut self is needed because Peekable can call next() on the underlying iterator
    pub fn current(&mut self) -> Option<&T> {
        self.queue.peek()
    }

    /// Move the active element to the back and return the new active one.
    pub fn advance(&mut self) -> Option<&T> {
        self.queue.next()?;
        self.queue.peek()
    }
}
