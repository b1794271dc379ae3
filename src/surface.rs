use geo_types::Rect;
use uuid::Uuid;

use crate::entities::Coordinate;
use crate::error::Error;

/// Viewport padding, in pixels on every side, when fitting to a set
/// of candidate markers.
pub const RESULT_FIT_PADDING: u32 = 50;

/// Viewport padding when fitting to a computed route. Routes need more
/// surrounding context than a single search.
pub const ROUTE_FIT_PADDING: u32 = 100;

/// Opaque id for a marker or path overlay created on the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle(Uuid);

impl Handle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Handle {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Numbered search-result marker, ordinal in result order.
    Candidate { ordinal: usize },
    Start,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PathStyle {
    pub stroke_color: String,
    pub stroke_weight: u32,
    pub stroke_opacity: f64,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            stroke_color: "#2DB400".into(),
            stroke_weight: 5,
            stroke_opacity: 0.8,
        }
    }
}

/// The capability set the workflow drives. Implementations bind a real
/// map SDK; tests substitute a recording fake.
pub trait MapSurface {
    /// Whether the surface is initialized and accepting commands.
    fn is_ready(&self) -> bool;

    fn create_marker(&mut self, coordinate: Coordinate, style: MarkerStyle)
        -> Result<Handle, Error>;

    fn remove_marker(&mut self, handle: Handle);

    fn create_path(&mut self, path: &[Coordinate], style: PathStyle) -> Result<Handle, Error>;

    fn remove_path(&mut self, handle: Handle);

    fn fit_bounds(&mut self, bounds: Rect<f64>, padding: u32);

    fn open_info(&mut self, marker: Handle, content: String);

    fn close_info(&mut self);
}
