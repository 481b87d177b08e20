//! Ad placement descriptors.
//!
//! Ad rendering is an external widget collaborator with a narrow contract:
//! the service hands out a zone descriptor (or a static creative path) and
//! the front-end mounts the provider's widget into that region. No provider
//! script ever passes through this service.

use serde::Serialize;

/// A provider ad zone: the widget fills a region of the given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdZone {
    pub zone: u32,
    pub width: u32,
    pub height: u32,
}

/// A static creative shown in the home-page grid.
#[derive(Debug, Clone, Serialize)]
pub struct AdCreative {
    /// Path under the public asset root, e.g. `/ads/3.jpg`.
    pub src: String,
}

/// Sidebar banner zones on the watch page, top to bottom.
pub const BANNER_ZONES: &[AdZone] = &[
    AdZone { zone: 1_047_744, width: 300, height: 262 },
    AdZone { zone: 1_047_746, width: 300, height: 262 },
];

/// Number of creatives in the home-page ad grid.
const HOME_GRID_COUNT: u32 = 16;

/// The home-page ad grid: 16 numbered creatives under `/ads/`.
///
/// Slots 9, 11, and 12 are PNG assets; the rest are JPEG.
pub fn home_grid_creatives() -> Vec<AdCreative> {
    (1..=HOME_GRID_COUNT)
        .map(|index| {
            let ext = if matches!(index, 9 | 11 | 12) { "png" } else { "jpg" };
            AdCreative {
                src: format!("/ads/{index}.{ext}"),
            }
        })
        .collect()
}
