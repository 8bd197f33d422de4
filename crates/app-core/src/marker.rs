//! Marker schema types shared between the fixtures and the web frontend.
//!
//! These types intentionally avoid referencing platform-specific APIs and are
//! suitable for use on both native and web targets. Serialized field names
//! follow the fixture schema exactly (`widthSegments`, `heightSegments`,
//! `position.{x,y,z}`, colors as lowercase `#rrggbb` strings).

use glam::Vec3;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minimum longitude/latitude subdivisions for a closed sphere mesh.
pub const MIN_SEGMENTS: u32 = 3;

#[derive(Debug, Error)]
pub enum MarkerError {
    #[error("invalid color {0:?}: expected lowercase #rrggbb")]
    ColorFormat(String),
    #[error("unknown tag {0:?}")]
    UnknownTag(String),
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("{axis} segment count {count} is below the closed-mesh minimum of {MIN_SEGMENTS}")]
    TooFewSegments { axis: &'static str, count: u32 },
    #[error("marker tagged {tag} has color {actual}, palette says {expected}")]
    PaletteMismatch {
        tag: ColorTag,
        actual: Rgb,
        expected: Rgb,
    },
}

/// An RGB color that renders and parses as a lowercase `#rrggbb` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb([r, g, b])
    }

    /// Components scaled to \[0, 1\], the form renderers consume.
    pub fn as_floats(self) -> [f32; 3] {
        let Rgb([r, g, b]) = self;
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb([r, g, b]) = self;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Rgb {
    type Err = MarkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || MarkerError::ColorFormat(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(&bad)?;
        // Uppercase digits are rejected so parse/format round-trips exactly.
        if hex.len() != 6
            || !hex
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        {
            return Err(bad());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Closed set of marker categories, one per palette entry.
///
/// The original data kept `tag` as an open string, which allowed silent
/// mismatches against the palette; modeling it as a variant makes the
/// tag/color pairing checkable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Red,
    Green,
    Blue,
}

impl ColorTag {
    pub const ALL: [ColorTag; 3] = [ColorTag::Red, ColorTag::Green, ColorTag::Blue];

    /// Canonical palette color for this tag.
    pub const fn rgb(self) -> Rgb {
        match self {
            ColorTag::Red => Rgb([0xff, 0x00, 0x00]),
            ColorTag::Green => Rgb([0x00, 0xff, 0x00]),
            ColorTag::Blue => Rgb([0x00, 0x00, 0xff]),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ColorTag::Red => "red",
            ColorTag::Green => "green",
            ColorTag::Blue => "blue",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorTag {
    type Err = MarkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(ColorTag::Red),
            "green" => Ok(ColorTag::Green),
            "blue" => Ok(ColorTag::Blue),
            other => Err(MarkerError::UnknownTag(other.to_string())),
        }
    }
}

/// World-space coordinates of a marker.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Position { x, y, z }
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

/// Sphere geometry parameters: radius plus tessellation resolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SphereShape {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl SphereShape {
    pub fn validate(&self) -> Result<(), MarkerError> {
        if !(self.radius > 0.0) {
            return Err(MarkerError::NonPositiveRadius(self.radius));
        }
        if self.width_segments < MIN_SEGMENTS {
            return Err(MarkerError::TooFewSegments {
                axis: "width",
                count: self.width_segments,
            });
        }
        if self.height_segments < MIN_SEGMENTS {
            return Err(MarkerError::TooFewSegments {
                axis: "height",
                count: self.height_segments,
            });
        }
        Ok(())
    }
}

/// One palette entry: the color rendered for a tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub color: Rgb,
    pub tag: ColorTag,
}

/// A positioned, renderable marker instance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerRecord {
    pub position: Position,
    pub color: Rgb,
    pub tag: ColorTag,
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl MarkerRecord {
    /// The geometry fields viewed as a standalone shape.
    pub fn shape(&self) -> SphereShape {
        SphereShape {
            radius: self.radius,
            width_segments: self.width_segments,
            height_segments: self.height_segments,
        }
    }

    /// Checks geometry bounds and that `color` matches the palette entry
    /// for `tag`.
    pub fn validate(&self) -> Result<(), MarkerError> {
        self.shape().validate()?;
        let expected = self.tag.rgb();
        if self.color != expected {
            return Err(MarkerError::PaletteMismatch {
                tag: self.tag,
                actual: self.color,
                expected,
            });
        }
        Ok(())
    }
}
