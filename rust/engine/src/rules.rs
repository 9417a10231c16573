use crate::errors::BoardError;

/// Smallest supported grid side; below this the blank has no room to walk.
pub const MIN_SIZE: usize = 2;
/// Largest supported grid side.
pub const MAX_SIZE: usize = 255;
/// Default grid side (the classic 15-puzzle).
pub const DEFAULT_SIZE: usize = 4;
/// Default minimum number of scramble steps.
pub const DEFAULT_SHUFFLE_MIN: u32 = 40;
/// Largest accepted minimum scramble depth.
pub const MAX_SHUFFLE_MIN: u32 = 1_000_000;

/// Validated board parameters: grid side length and minimum scramble depth.
///
/// Construct it with [`BoardConfig::new`] so that every [`crate::board::Board`] is built from a
/// supported size.
///
/// # Examples
///
/// ```
/// use slidepuzzle_engine::rules::BoardConfig;
/// use slidepuzzle_engine::errors::BoardError;
///
/// let cfg = BoardConfig::new(3, 10).unwrap();
/// assert_eq!(cfg.size(), 3);
/// assert_eq!(cfg.shuffle_min(), 10);
///
/// assert!(matches!(
///     BoardConfig::new(1, 10),
///     Err(BoardError::InvalidSize { size: 1, .. })
/// ));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BoardConfig {
    /// Grid side length N
    size: usize,
    /// Minimum number of scramble steps before the walk may stop
    shuffle_min: u32,
}

impl BoardConfig {
    pub fn new(size: usize, shuffle_min: u32) -> Result<Self, BoardError> {
        validate_size(size)?;
        validate_shuffle_min(shuffle_min)?;
        Ok(Self { size, shuffle_min })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn shuffle_min(&self) -> u32 {
        self.shuffle_min
    }

    /// Number of cells, `N²`.
    pub fn cells(&self) -> usize {
        self.size * self.size
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            shuffle_min: DEFAULT_SHUFFLE_MIN,
        }
    }
}

pub fn validate_size(size: usize) -> Result<(), BoardError> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(BoardError::InvalidSize {
            size,
            min: MIN_SIZE,
            max: MAX_SIZE,
        })
    }
}

pub fn validate_shuffle_min(shuffle_min: u32) -> Result<(), BoardError> {
    if shuffle_min <= MAX_SHUFFLE_MIN {
        Ok(())
    } else {
        Err(BoardError::InvalidShuffleMin {
            shuffle_min,
            max: MAX_SHUFFLE_MIN,
        })
    }
}

/// Checks that `tiles` is a row-major layout of a `size`×`size` board: exactly `size²`
/// entries forming a permutation of `0..size²`.
pub fn validate_layout(size: usize, tiles: &[usize]) -> Result<(), BoardError> {
    validate_size(size)?;
    let cells = size * size;
    if tiles.len() != cells {
        return Err(BoardError::InvalidLayout {
            reason: format!("expected {} tiles, got {}", cells, tiles.len()),
        });
    }
    let mut seen = vec![false; cells];
    for (index, &id) in tiles.iter().enumerate() {
        if id >= cells {
            return Err(BoardError::InvalidLayout {
                reason: format!("tile {} at index {} is out of range 0..{}", id, index, cells),
            });
        }
        if seen[id] {
            return Err(BoardError::InvalidLayout {
                reason: format!("tile {} appears more than once", id),
            });
        }
        seen[id] = true;
    }
    Ok(())
}
