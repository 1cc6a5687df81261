//! Physical colours of the one-bit RGB output.
//!
//! The ULA drives digital R, G and B lines, giving eight colours. The
//! monitor displays each channel at full intensity.

/// ARGB32 colours indexed by physical colour number (`B << 2 | G << 1 | R`).
///
/// Colours: black, red, green, yellow, blue, magenta, cyan, white.
pub const PHYSICAL_COLOURS: [u32; 8] = [
    0xFF00_0000, // 0: Black
    0xFFFF_0000, // 1: Red
    0xFF00_FF00, // 2: Green
    0xFFFF_FF00, // 3: Yellow
    0xFF00_00FF, // 4: Blue
    0xFFFF_00FF, // 5: Magenta
    0xFF00_FFFF, // 6: Cyan
    0xFFFF_FFFF, // 7: White
];
