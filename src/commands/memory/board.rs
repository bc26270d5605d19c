use super::deck::{DeckError, Shuffler, build_deck};
use super::scheduler::Scheduler;
use super::tile::{Tile, TileState};
use std::time::Duration;
use tracing::{debug, info};

/// How long both faces of a completed pair stay visible before resolving.
pub const REVEAL_DELAY: Duration = Duration::from_millis(1000);

/// Why a flip request left the board untouched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IgnoreReason {
    OutOfRange,
    AlreadyRevealed,
    AlreadyMatched,
    ComparisonPending,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FlipOutcome {
    Ignored(IgnoreReason),
    /// First tile of a pair is face up.
    Revealed,
    /// Second tile is face up and resolution has been scheduled.
    Compared {
        pair: [usize; 2],
        matched: bool,
        tries: u32,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Resolution {
    pub pair: [usize; 2],
    pub matched: bool,
    /// Set only on the resolution that matched the last pair.
    pub finished: bool,
}

/// Read-only view handed to the renderer after each change.
#[derive(Clone, Copy, Debug)]
pub struct BoardSnapshot<'a> {
    pub tiles: &'a [Tile],
    pub tries: u32,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub pending: bool,
}

struct PendingComparison<T> {
    pair: [usize; 2],
    target: TileState,
    timer: T,
}

/// Owns the tiles of one game and drives the two-flip protocol.
///
/// A completed pair is not resolved in place: the outcome is parked with a
/// timer from the scheduler and only applied by [`Board::settle`], so both
/// faces stay visible for the configured delay.
pub struct Board<S: Scheduler> {
    tiles: Vec<Tile>,
    tries: u32,
    scheduler: S,
    delay: Duration,
    pending: Option<PendingComparison<S::Timer>>,
    finished: bool,
}

impl<S: Scheduler> Board<S> {
    pub fn new(tiles: Vec<Tile>, scheduler: S, delay: Duration) -> Self {
        Self {
            tiles,
            tries: 0,
            scheduler,
            delay,
            pending: None,
            finished: false,
        }
    }

    pub fn deal<R>(
        tile_count: usize,
        symbol_pool: &[&'static str],
        shuffler: &mut R,
        scheduler: S,
        delay: Duration,
    ) -> Result<Self, DeckError>
    where
        R: Shuffler + ?Sized,
    {
        let tiles = build_deck(tile_count, symbol_pool, shuffler)?;
        debug!(tile_count, "dealt memory board");
        Ok(Self::new(tiles, scheduler, delay))
    }

    pub fn request_flip(&mut self, index: usize) -> FlipOutcome {
        let Some(tile) = self.tiles.get(index) else {
            return self.ignore(index, IgnoreReason::OutOfRange);
        };

        match tile.state {
            TileState::Hidden => {}
            TileState::Revealed => return self.ignore(index, IgnoreReason::AlreadyRevealed),
            TileState::Matched => return self.ignore(index, IgnoreReason::AlreadyMatched),
        }

        let mut revealed = self.revealed_indices();
        if revealed.len() >= 2 || self.pending.is_some() {
            return self.ignore(index, IgnoreReason::ComparisonPending);
        }

        self.tiles[index].state = TileState::Revealed;

        let Some(first) = revealed.pop() else {
            debug!(index, "revealed first tile of a pair");
            return FlipOutcome::Revealed;
        };

        self.tries += 1;
        let pair = [first, index];
        let matched = self.tiles[first].symbol == self.tiles[index].symbol;
        let target = if matched {
            TileState::Matched
        } else {
            TileState::Hidden
        };

        self.pending = Some(PendingComparison {
            pair,
            target,
            timer: self.scheduler.schedule(self.delay),
        });
        debug!(?pair, matched, tries = self.tries, "comparison scheduled");

        FlipOutcome::Compared {
            pair,
            matched,
            tries: self.tries,
        }
    }

    /// Waits for the pending comparison's timer and applies its outcome.
    ///
    /// Never completes while no comparison is pending. Dropping the returned
    /// future keeps the timer running, so it can be raced in `select!`.
    pub async fn settle(&mut self) -> Resolution {
        let Some(pending) = self.pending.as_mut() else {
            return std::future::pending().await;
        };

        (&mut pending.timer).await;
        let pair = pending.pair;
        let target = pending.target;
        self.pending = None;

        self.resolve(pair, target)
    }

    fn resolve(&mut self, pair: [usize; 2], target: TileState) -> Resolution {
        for index in pair {
            let tile = &mut self.tiles[index];
            if tile.is_revealed() {
                tile.state = target;
            }
        }

        let finished = !self.finished && self.tiles.iter().all(Tile::is_matched);
        if finished {
            self.finished = true;
            info!(tries = self.tries, tiles = self.tiles.len(), "memory board cleared");
        }

        Resolution {
            pair,
            matched: target == TileState::Matched,
            finished,
        }
    }

    fn ignore(&self, index: usize, reason: IgnoreReason) -> FlipOutcome {
        debug!(index, ?reason, "flip ignored");
        FlipOutcome::Ignored(reason)
    }

    fn revealed_indices(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_revealed())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn snapshot(&self) -> BoardSnapshot<'_> {
        BoardSnapshot {
            tiles: &self.tiles,
            tries: self.tries,
            matched_pairs: self.matched_pairs(),
            total_pairs: self.total_pairs(),
            pending: self.is_pending(),
        }
    }

    pub fn tries(&self) -> u32 {
        self.tries
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn matched_pairs(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_matched()).count() / 2
    }

    pub fn total_pairs(&self) -> usize {
        self.tiles.len() / 2
    }
}
