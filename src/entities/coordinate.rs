use geo_types::{coord, Rect};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

// Directions wire format: longitude first.
impl From<Coordinate> for String {
    fn from(coordinate: Coordinate) -> Self {
        format!("{},{}", coordinate.lng, coordinate.lat)
    }
}

/// Smallest axis-aligned region covering all given points, in
/// lng/lat axes. `None` when the iterator is empty.
pub fn bounding_rect<I>(points: I) -> Option<Rect<f64>>
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut iter = points.into_iter();
    let first = iter.next()?;

    let mut min_lng = first.lng;
    let mut max_lng = first.lng;
    let mut min_lat = first.lat;
    let mut max_lat = first.lat;

    for point in iter {
        min_lng = min_lng.min(point.lng);
        max_lng = max_lng.max(point.lng);
        min_lat = min_lat.min(point.lat);
        max_lat = max_lat.max(point.lat);
    }

    Some(Rect::new(
        coord! { x: min_lng, y: min_lat },
        coord! { x: max_lng, y: max_lat },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_is_lng_lat() {
        let formatted: String = Coordinate::new(37.5666805, 126.9784147).into();
        assert_eq!(formatted, "126.9784147,37.5666805");
    }

    #[test]
    fn bounding_rect_covers_all_points() {
        let rect = bounding_rect([
            Coordinate::new(37.0, 127.0),
            Coordinate::new(37.5, 126.5),
            Coordinate::new(36.8, 127.2),
        ])
        .unwrap();

        assert_eq!(rect.min().x, 126.5);
        assert_eq!(rect.min().y, 36.8);
        assert_eq!(rect.max().x, 127.2);
        assert_eq!(rect.max().y, 37.5);
    }

    #[test]
    fn bounding_rect_of_nothing_is_none() {
        assert!(bounding_rect([]).is_none());
    }
}
