//! Static fixture data: the palette, the default sphere geometry, and the
//! pre-positioned deviation markers.
//!
//! Everything here is a process-wide constant, initialized at compile time
//! and immutable for the life of the process. Consumers should treat every
//! record as a value type and never hold mutated copies where another
//! consumer expects the shipped data.

use crate::marker::{ColorTag, MarkerError, MarkerRecord, PaletteEntry, Position, Rgb, SphereShape};
use glam::Vec3;

/// Palette: one entry per tag, stable iteration order.
pub const COLORS: [PaletteEntry; 3] = [
    PaletteEntry {
        color: Rgb([0xff, 0x00, 0x00]),
        tag: ColorTag::Red,
    },
    PaletteEntry {
        color: Rgb([0x00, 0xff, 0x00]),
        tag: ColorTag::Green,
    },
    PaletteEntry {
        color: Rgb([0x00, 0x00, 0xff]),
        tag: ColorTag::Blue,
    },
];

/// Default sphere geometry shared by every marker.
pub const SHAPE: SphereShape = SphereShape {
    radius: 0.5,
    width_segments: 32,
    height_segments: 32,
};

const fn deviation(x: f64, y: f64, z: f64, tag: ColorTag) -> MarkerRecord {
    MarkerRecord {
        position: Position::new(x, y, z),
        color: tag.rgb(),
        tag,
        radius: SHAPE.radius,
        width_segments: SHAPE.width_segments,
        height_segments: SHAPE.height_segments,
    }
}

/// Pre-positioned markers; each color mirrors the palette entry for its tag.
pub const DEVIATIONS: [MarkerRecord; 5] = [
    deviation(-1.0, 0.0, 0.0, ColorTag::Red),
    deviation(1.0, 0.5, 0.0, ColorTag::Red),
    deviation(0.0, 1.0, -1.0, ColorTag::Green),
    deviation(-0.5, -1.0, 1.0, ColorTag::Green),
    deviation(0.5, 0.0, -2.0, ColorTag::Blue),
];

/// Palette color for a tag, looked up from [`COLORS`] rather than the
/// canonical mapping so the constant itself stays the source of truth.
pub fn palette_color(tag: ColorTag) -> Option<Rgb> {
    COLORS.iter().find(|e| e.tag == tag).map(|e| e.color)
}

/// World-space positions of all deviations, in fixture order.
pub fn deviation_positions() -> [Vec3; DEVIATIONS.len()] {
    let mut out = [Vec3::ZERO; DEVIATIONS.len()];
    for (i, m) in DEVIATIONS.iter().enumerate() {
        out[i] = m.position.to_vec3();
    }
    out
}

/// Cross-checks the shipped fixtures: geometry bounds and the tag/color
/// pairing between [`DEVIATIONS`] and [`COLORS`]. Mismatches are rejected,
/// not auto-corrected; bootstrap calls this before building any view.
pub fn validate_fixtures() -> Result<(), MarkerError> {
    SHAPE.validate()?;
    for marker in &DEVIATIONS {
        marker.validate()?;
        if let Some(expected) = palette_color(marker.tag) {
            if marker.color != expected {
                return Err(MarkerError::PaletteMismatch {
                    tag: marker.tag,
                    actual: marker.color,
                    expected,
                });
            }
        }
    }
    log::debug!(
        "fixtures validated: {} palette entries, {} deviations",
        COLORS.len(),
        DEVIATIONS.len()
    );
    Ok(())
}
