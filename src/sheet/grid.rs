/// Default tile edge length in pixels
pub const DEFAULT_TILE_EDGE: u32 = 32;

/// Dimensions of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize {
    pub width: u32,
    pub height: u32,
}

impl TileSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both dimensions are at least one pixel
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_EDGE, DEFAULT_TILE_EDGE)
    }
}

/// A region of the sheet covered by one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl TileRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Regular grid laid over a sprite sheet.
///
/// Only whole tiles count. Pixels past the last full column or row belong to
/// no tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    sheet_width: u32,
    sheet_height: u32,
    tile: TileSize,
}

impl TileGrid {
    /// Caller guarantees `tile.is_valid()`
    pub fn new(sheet_width: u32, sheet_height: u32, tile: TileSize) -> Self {
        Self {
            sheet_width,
            sheet_height,
            tile,
        }
    }

    pub fn rows(&self) -> u32 {
        self.sheet_height / self.tile.height
    }

    pub fn cols(&self) -> u32 {
        self.sheet_width / self.tile.width
    }

    /// Total number of tiles in the grid
    pub fn len(&self) -> usize {
        usize::try_from(u64::from(self.rows()) * u64::from(self.cols())).unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Columns of pixels on the right edge that fall outside every tile
    pub fn dropped_width(&self) -> u32 {
        self.sheet_width % self.tile.width
    }

    /// Rows of pixels on the bottom edge that fall outside every tile
    pub fn dropped_height(&self) -> u32 {
        self.sheet_height % self.tile.height
    }

    /// Sheet region covered by the tile at (row, col)
    pub fn rect(&self, row: u32, col: u32) -> TileRect {
        TileRect::new(
            col * self.tile.width,
            row * self.tile.height,
            self.tile.width,
            self.tile.height,
        )
    }

    /// All (row, col) pairs in row-major order
    pub fn coords(&self) -> impl Iterator<Item = (u32, u32)> + use<> {
        let cols = self.cols();
        (0..self.rows()).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

}
