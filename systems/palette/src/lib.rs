#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure palette system that maps bot identities to display colors.

use gridclaim_core::{BotId, ColorMap, DomainError, Rgb};

/// Background color used for unclaimed cells.
pub const NEUTRAL: Rgb = Rgb::from_rgb(255, 255, 255);

/// Visually distinct colors handed out to bots, reused cyclically.
///
/// Black and white are excluded so bots never blend into the background or
/// the marker outlines.
pub const PALETTE: [Rgb; 20] = [
    Rgb::from_rgb(230, 25, 75),
    Rgb::from_rgb(60, 180, 75),
    Rgb::from_rgb(255, 225, 25),
    Rgb::from_rgb(0, 130, 200),
    Rgb::from_rgb(245, 130, 48),
    Rgb::from_rgb(145, 30, 180),
    Rgb::from_rgb(70, 240, 240),
    Rgb::from_rgb(240, 50, 230),
    Rgb::from_rgb(210, 245, 60),
    Rgb::from_rgb(250, 190, 212),
    Rgb::from_rgb(0, 128, 128),
    Rgb::from_rgb(220, 190, 255),
    Rgb::from_rgb(170, 110, 40),
    Rgb::from_rgb(255, 250, 200),
    Rgb::from_rgb(128, 0, 0),
    Rgb::from_rgb(170, 255, 195),
    Rgb::from_rgb(128, 128, 0),
    Rgb::from_rgb(255, 215, 180),
    Rgb::from_rgb(0, 0, 128),
    Rgb::from_rgb(128, 128, 128),
];

/// Resolves the display color of a cell owner or bot.
///
/// The neutral id always maps to [`NEUTRAL`]. Any other id must have a
/// palette index in `color_map`; indices wrap around the palette length.
pub fn color_of(id: BotId, color_map: &ColorMap) -> Result<Rgb, DomainError> {
    if id.is_neutral() {
        return Ok(NEUTRAL);
    }

    let index = color_map
        .palette_index(id)
        .ok_or(DomainError::MissingColorAssignment { bot: id })?;
    Ok(PALETTE[index % PALETTE.len()])
}
