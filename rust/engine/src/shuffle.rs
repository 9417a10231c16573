//! Scramble generator.
//!
//! Boards are scrambled by walking the blank through legal moves instead of drawing a random
//! permutation, so every scrambled layout stays reachable from the solved one. The walk never
//! steps straight back to where it just came from and only stops once it has made at least
//! `shuffle_min` moves *and* the blank is back in the bottom-right corner. The second condition
//! means the actual depth is usually somewhat larger than `shuffle_min`.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, trace, warn};

use crate::board::Board;
use crate::position::Position;

/// Walks the blank of `board` until both stop conditions hold and returns the visited
/// positions in order.
///
/// Candidates are the blank's legal moves minus the position it occupied before the previous
/// step; one is chosen uniformly with `rng`. With `shuffle_min == 0` and the blank already in
/// the corner, no move is made.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use slidepuzzle_engine::board::Board;
/// use slidepuzzle_engine::position::Position;
/// use slidepuzzle_engine::shuffle::scramble;
///
/// let mut board = Board::from_tiles(3, (0..9).collect()).unwrap();
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// let walk = scramble(&mut board, 12, &mut rng);
///
/// assert!(walk.len() >= 12);
/// assert_eq!(walk.last(), Some(&Position::new(2, 2)));
/// assert_eq!(board.blank_position(), Position::new(2, 2));
/// ```
pub fn scramble<R: Rng + ?Sized>(
    board: &mut Board,
    shuffle_min: u32,
    rng: &mut R,
) -> Vec<Position> {
    let corner = Position::corner(board.size());
    let mut walk = Vec::new();
    let mut previous = board.blank_position();
    let mut steps: u32 = 0;

    while steps < shuffle_min || board.blank_position() != corner {
        let mut candidates = board.valid_moves();
        candidates.retain(|&p| p != previous);
        previous = board.blank_position();

        // Only reachable on boards smaller than 2x2, which BoardConfig rejects.
        let Some(&next) = candidates.choose(rng) else {
            warn!(size = board.size(), steps, "scramble walk has no candidate move");
            break;
        };

        board.move_tile(next);
        walk.push(next);
        steps = steps.saturating_add(1);
        trace!(step = steps, col = next.col, row = next.row, "scramble step");
    }

    debug!(size = board.size(), shuffle_min, steps, "board scrambled");
    walk
}
