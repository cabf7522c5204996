//! Random shuffling backed by `rand`

use rand::seq::SliceRandom;

use crate::domain::entities::Card;
use crate::domain::ports::Shuffler;

/// Fisher-Yates shuffle using the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngShuffler;

impl Shuffler for ThreadRngShuffler {
    fn shuffle(&self, cards: &mut [Card]) {
        cards.shuffle(&mut rand::thread_rng());
    }
}
