//! Pure, host-testable core for the deviation viewer front-end: the marker
//! schema, the shipped fixture data, and the application event bus.

pub mod events;
pub mod fixtures;
pub mod marker;

pub use events::{AppEvent, EventBus, HandlerId};
pub use fixtures::{validate_fixtures, COLORS, DEVIATIONS, SHAPE};
pub use marker::{
    ColorTag, MarkerError, MarkerRecord, PaletteEntry, Position, Rgb, SphereShape, MIN_SEGMENTS,
};
