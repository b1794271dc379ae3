use serde::{Deserialize, Serialize};

use crate::entities::Coordinate;
use crate::error::{malformed_response_error, Error};

/// Which endpoint slot a search or selection is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointRole {
    Start,
    End,
}

impl EndpointRole {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// One place as it crosses the proxy boundary: name already
/// HTML-stripped, `x`/`y` still the provider's string-typed
/// longitude/latitude.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: String,
    pub address: String,
    pub x: String,
    pub y: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinate: Coordinate,
}

impl Place {
    /// Ids are unique within a single result set only.
    pub fn from_record(index: usize, record: &PlaceRecord) -> Result<Self, Error> {
        let lng: f64 = record.x.parse().map_err(malformed_response_error)?;
        let lat: f64 = record.y.parse().map_err(malformed_response_error)?;

        Ok(Self {
            id: format!("{}-{}", index, record.name),
            name: record.name.clone(),
            address: record.address.clone(),
            coordinate: Coordinate::new(lat, lng),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PlaceRecord {
        PlaceRecord {
            name: "Seoul City Hall".into(),
            address: "110 Sejong-daero, Jung-gu, Seoul".into(),
            x: "126.9784147".into(),
            y: "37.5666805".into(),
        }
    }

    #[test]
    fn record_maps_to_place() {
        let place = Place::from_record(0, &record()).unwrap();

        assert_eq!(place.id, "0-Seoul City Hall");
        assert_eq!(place.coordinate, Coordinate::new(37.5666805, 126.9784147));
    }

    #[test]
    fn unparseable_coordinate_is_rejected() {
        let mut bad = record();
        bad.y = "not-a-number".into();

        assert!(Place::from_record(0, &bad).is_err());
    }
}
