//! Game session: score, win/stuck status, and undo on top of a `Board`.

use im::Vector;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Grid, MoveTrace};
use crate::core::{BoardConfig, BoardError, Direction, GameRng, Score, Tile, TileSource};

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    Playing,
    /// The win tile was reached and the player has not chosen to continue.
    Won,
    /// No direction changes the board.
    Stuck,
}

impl GameStatus {
    /// True for `Won` and `Stuck`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Result of `GameSession::play`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// What the board did.
    pub trace: MoveTrace,
    /// Status after the move.
    pub status: GameStatus,
    /// Total score after the move.
    pub score: Score,
}

/// State needed to resume a session. Serialization format is up to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub grid: Grid,
    pub score: Score,
    pub moves_made: u32,
    pub won: bool,
    pub keep_playing: bool,
}

#[derive(Clone, Debug)]
struct HistoryEntry {
    grid: Grid,
    score: Score,
    moves_made: u32,
    won: bool,
    keep_playing: bool,
}

/// A playable game: a board plus the bookkeeping around it.
///
/// ```
/// use tile_merge::core::{BoardConfig, Direction};
/// use tile_merge::session::{GameSession, GameStatus};
///
/// let mut game = GameSession::seeded(BoardConfig::default(), 7).unwrap();
/// assert_eq!(game.board().empty_count(), 14);
///
/// for dir in Direction::ALL.into_iter().cycle().take(20) {
///     if game.status() != GameStatus::Playing {
///         break;
///     }
///     game.play(dir);
/// }
/// assert!(game.board().tile_sum() >= 4);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession<S = GameRng> {
    config: BoardConfig,
    board: Board<S>,
    score: Score,
    moves_made: u32,
    history: Vector<HistoryEntry>,
    won: bool,
    keep_playing: bool,
}

impl GameSession<GameRng> {
    /// Start a game with an entropy-seeded RNG.
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        Self::with_source(config, GameRng::from_entropy())
    }

    /// Start a reproducible game.
    pub fn seeded(config: BoardConfig, seed: u64) -> Result<Self, BoardError> {
        Self::with_source(config, GameRng::new(seed))
    }
}

impl<S: TileSource> GameSession<S> {
    /// Start a game whose spawns draw from `source`.
    pub fn with_source(config: BoardConfig, source: S) -> Result<Self, BoardError> {
        config.validate()?;
        let board = Board::with_source(config.rows, config.cols, source)?;
        let mut session = Self {
            config,
            board,
            score: 0,
            moves_made: 0,
            history: Vector::new(),
            won: false,
            keep_playing: false,
        };
        session.spawn_starting_tiles();
        session.check_win();
        Ok(session)
    }

    fn spawn_starting_tiles(&mut self) {
        for _ in 0..self.config.starting_tiles {
            self.board.spawn_random_tile();
        }
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.won && !self.keep_playing {
            GameStatus::Won
        } else if !self.board.can_move() {
            GameStatus::Stuck
        } else {
            GameStatus::Playing
        }
    }

    /// Apply a move.
    ///
    /// While the status is terminal the board is left alone and the returned
    /// trace is empty.
    pub fn play(&mut self, direction: Direction) -> MoveOutcome {
        let status = self.status();
        if status.is_terminal() {
            debug!("ignoring {direction}: game is {status:?}");
            return self.outcome(MoveTrace::unmoved());
        }

        let before = HistoryEntry {
            grid: self.board.grid().clone(),
            score: self.score,
            moves_made: self.moves_made,
            won: self.won,
            keep_playing: self.keep_playing,
        };

        let trace = self.board.apply_move(direction);
        if !trace.moved {
            return self.outcome(trace);
        }

        self.remember(before);
        self.score += trace.score_delta;
        self.moves_made += 1;

        self.check_win();

        let outcome = self.outcome(trace);
        if outcome.status == GameStatus::Stuck {
            info!(
                "no moves left after {} moves (score {}, best tile {})",
                self.moves_made,
                self.score,
                self.best_tile()
            );
        }
        outcome
    }

    fn check_win(&mut self) {
        if !self.won && self.board.highest_tile() >= self.config.win_tile {
            self.won = true;
            info!(
                "reached {} after {} moves (score {})",
                self.config.win_tile, self.moves_made, self.score
            );
        }
    }

    fn outcome(&self, trace: MoveTrace) -> MoveOutcome {
        MoveOutcome {
            trace,
            status: self.status(),
            score: self.score,
        }
    }

    fn remember(&mut self, entry: HistoryEntry) {
        if self.config.undo_depth == 0 {
            return;
        }
        self.history.push_back(entry);
        while self.history.len() > self.config.undo_depth {
            self.history.pop_front();
        }
    }

    /// Continue after a win. Later wins are not reported again.
    pub fn keep_playing(&mut self) {
        self.keep_playing = true;
    }

    /// Step back one move. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool, BoardError> {
        let Some(entry) = self.history.pop_back() else {
            return Ok(false);
        };
        self.board.load_grid(entry.grid)?;
        self.score = entry.score;
        self.moves_made = entry.moves_made;
        self.won = entry.won;
        self.keep_playing = entry.keep_playing;
        debug!("undo: back to move {} (score {})", self.moves_made, self.score);
        Ok(true)
    }

    /// Clear everything and start over with fresh starting tiles.
    pub fn restart(&mut self) {
        info!("restarting after {} moves (score {})", self.moves_made, self.score);
        self.board.reset();
        self.score = 0;
        self.moves_made = 0;
        self.history.clear();
        self.won = false;
        self.keep_playing = false;
        self.spawn_starting_tiles();
        self.check_win();
    }

    /// Capture the resumable state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            grid: self.board.grid().clone(),
            score: self.score,
            moves_made: self.moves_made,
            won: self.won,
            keep_playing: self.keep_playing,
        }
    }

    /// Resume from a snapshot. Clears the undo history.
    ///
    /// The grid is revalidated, so snapshots from an untrusted store are
    /// rejected rather than corrupting the board.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) -> Result<(), BoardError> {
        self.board.load_from(&snapshot.grid.to_rows())?;
        self.score = snapshot.score;
        self.moves_made = snapshot.moves_made;
        self.won = snapshot.won;
        self.keep_playing = snapshot.keep_playing;
        self.history.clear();
        Ok(())
    }

    #[must_use]
    pub fn board(&self) -> &Board<S> {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn best_tile(&self) -> Tile {
        self.board.highest_tile()
    }

    #[must_use]
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// Moves that can currently be undone.
    #[must_use]
    pub fn undo_available(&self) -> usize {
        self.history.len()
    }
}
