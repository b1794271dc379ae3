use serde::{Deserialize, Serialize};

use crate::entities::Coordinate;

/// Fastest-driving-route option of the directions provider.
pub const DRIVING_OPTION: &str = "trafast";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteQuery {
    pub start: Coordinate,
    pub end: Coordinate,
    pub option: String,
}

impl RouteQuery {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self {
            start,
            end,
            option: DRIVING_OPTION.into(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoutePath {
    pub path: Vec<Coordinate>,
    pub distance_meters: f64,
    pub duration_millis: u64,
}
