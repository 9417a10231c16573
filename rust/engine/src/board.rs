use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::trace;

use crate::errors::BoardError;
use crate::position::{Direction, Position};
use crate::rules::{validate_layout, BoardConfig};
use crate::shuffle::scramble;

/// The puzzle board: an N×N grid of tile identifiers, one of which is the blank.
///
/// Tile `k` belongs at `(k mod N, k div N)`; identifier `N²-1` is the blank. The layout is a
/// bijection between positions and identifiers at all times, and the blank position is
/// tracked alongside it.
///
/// # Examples
///
/// ```
/// use slidepuzzle_engine::board::Board;
/// use slidepuzzle_engine::position::Position;
/// use slidepuzzle_engine::rules::BoardConfig;
///
/// let cfg = BoardConfig::new(3, 20).unwrap();
/// let mut board = Board::new_with_seed(cfg, 42);
///
/// // A fresh board always has the blank resting in the bottom-right corner
/// assert_eq!(board.blank_position(), Position::new(2, 2));
/// assert!(board.move_history().len() >= 20);
///
/// // Clicking a cell that is not next to the blank does nothing
/// let before = board.clone();
/// assert!(!board.submit_move(Position::new(0, 0)));
/// assert_eq!(board, before);
///
/// // Clicking a neighbor slides that tile into the blank
/// assert!(board.submit_move(Position::new(1, 2)));
/// assert_eq!(board.blank_position(), Position::new(1, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Grid side length N
    size: usize,
    /// Tile identifiers in row-major order (`index = row * N + col`)
    tiles: Vec<usize>,
    /// Current location of the blank
    blank: Position,
    /// Positions the blank visited while scrambling
    history: Vec<Position>,
    /// Gameplay moves accepted through [`Board::submit_move`]
    moves_made: u32,
}

impl Board {
    /// Builds a solved board and scrambles it with a random walk drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Self {
        let mut board = Self::solved(config.size());
        board.history = scramble(&mut board, config.shuffle_min(), rng);
        board
    }

    /// Same as [`Board::new`] with a ChaCha20 generator seeded from `seed`, so a seed fully
    /// determines the starting layout.
    pub fn new_with_seed(config: BoardConfig, seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::new(config, &mut rng)
    }

    /// Builds a board from an explicit row-major layout without scrambling it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] for unsupported sizes and
    /// [`BoardError::InvalidLayout`] when `tiles` is not a permutation of `0..size²`.
    ///
    /// ```
    /// use slidepuzzle_engine::board::Board;
    ///
    /// let solved = Board::from_tiles(2, vec![0, 1, 2, 3]).unwrap();
    /// assert!(solved.is_solved());
    ///
    /// assert!(Board::from_tiles(2, vec![0, 0, 2, 3]).is_err());
    /// ```
    pub fn from_tiles(size: usize, tiles: Vec<usize>) -> Result<Self, BoardError> {
        validate_layout(size, &tiles)?;
        let blank_id = size * size - 1;
        let index = tiles
            .iter()
            .position(|&id| id == blank_id)
            .ok_or_else(|| BoardError::InvalidLayout {
                reason: "blank tile missing".to_string(),
            })?;
        Ok(Self {
            size,
            tiles,
            blank: Position::new(index % size, index / size),
            history: Vec::new(),
            moves_made: 0,
        })
    }

    fn solved(size: usize) -> Self {
        Self {
            size,
            tiles: (0..size * size).collect(),
            blank: Position::corner(size),
            history: Vec::new(),
            moves_made: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Identifier reserved for the blank, `N²-1`.
    pub fn blank_id(&self) -> usize {
        self.size * self.size - 1
    }

    pub fn blank_position(&self) -> Position {
        self.blank
    }

    /// Tile identifiers in row-major order.
    pub fn tiles(&self) -> &[usize] {
        &self.tiles
    }

    /// Rows of the layout from top to bottom, each ordered by column.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.tiles.chunks(self.size)
    }

    /// Tile at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` lies outside the board.
    pub fn tile_at(&self, p: Position) -> usize {
        self.tiles[self.index(p)]
    }

    pub fn get(&self, p: Position) -> Option<usize> {
        p.in_bounds(self.size)
            .then(|| self.tiles[p.row * self.size + p.col])
    }

    pub fn move_history(&self) -> &[Position] {
        &self.history
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// Positions orthogonally adjacent to the blank that lie on the board, scanned left,
    /// right, up, down.
    pub fn valid_moves(&self) -> Vec<Position> {
        Direction::SCAN_ORDER
            .iter()
            .filter_map(|&d| self.blank.step(d, self.size))
            .collect()
    }

    /// Swaps the tile at `p` with the blank and moves the blank to `p`.
    ///
    /// Adjacency to the blank is the caller's responsibility; use [`Board::submit_move`] for
    /// untrusted input.
    ///
    /// # Panics
    ///
    /// Panics if `p` lies outside the board.
    pub fn move_tile(&mut self, p: Position) {
        debug_assert!(
            p.is_adjacent(self.blank),
            "{} is not adjacent to the blank at {}",
            p,
            self.blank
        );
        let from = self.index(p);
        let to = self.index(self.blank);
        self.tiles.swap(from, to);
        self.blank = p;
    }

    /// Applies `p` if it is a legal move and reports whether it was applied. Anything else,
    /// including positions off the board, leaves the board untouched.
    pub fn submit_move(&mut self, p: Position) -> bool {
        if !self.valid_moves().contains(&p) {
            trace!(col = p.col, row = p.row, "move ignored");
            return false;
        }
        self.move_tile(p);
        self.moves_made += 1;
        trace!(col = p.col, row = p.row, moves = self.moves_made, "move applied");
        true
    }

    /// Slides the tile next to the blank in `direction` into the blank, if there is one.
    pub fn slide(&mut self, direction: Direction) -> bool {
        match self.blank.step(-direction, self.size) {
            Some(p) => self.submit_move(p),
            None => false,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.tiles.iter().enumerate().all(|(index, &id)| index == id)
    }

    fn index(&self, p: Position) -> usize {
        assert!(
            p.in_bounds(self.size),
            "position {} is outside the {}x{} board",
            p,
            self.size,
            self.size
        );
        p.row * self.size + p.col
    }
}
