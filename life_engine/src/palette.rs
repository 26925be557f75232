// palette.rs - Cell colors, GitHub contribution greens from light to dark

use crate::grid::Cell;

pub type Rgb = [u8; 3];

pub const N_COLORS: usize = 4;

pub const CELL_COLORS: [Rgb; N_COLORS] = [
    [0x9b, 0xe9, 0xa8],
    [0x40, 0xc4, 0x63],
    [0x30, 0xa1, 0x4e],
    [0x21, 0x6e, 0x39],
];

pub const BACKGROUND: Rgb = [0x0d, 0x11, 0x17];

/// Palette slot for a live cell; values past the palette share the darkest color.
pub fn palette_index(value: Cell) -> usize {
    (value.saturating_sub(1) as usize).min(N_COLORS - 1)
}

pub fn cell_color(value: Cell) -> Rgb {
    CELL_COLORS[palette_index(value)]
}
