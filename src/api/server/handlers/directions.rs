use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::{
    api::interface::DynAPI,
    entities::{Coordinate, RouteQuery, DRIVING_OPTION},
    error::{invalid_input_error, Error},
    external::naver_maps::DriveResponse,
};

#[derive(Serialize, Deserialize)]
pub struct DirectionsParams {
    pub start: String,
    pub goal: String,
    pub option: Option<String>,
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<DirectionsParams>,
) -> Result<Json<DriveResponse>, Error> {
    let query = RouteQuery {
        start: parse_coordinate(&params.start)?,
        end: parse_coordinate(&params.goal)?,
        option: params.option.unwrap_or_else(|| DRIVING_OPTION.into()),
    };

    let data = api.find_directions(query).await?;

    Ok(data.into())
}

// Wire format is "lng,lat".
fn parse_coordinate(raw: &str) -> Result<Coordinate, Error> {
    let (lng, lat) = raw.split_once(',').ok_or_else(invalid_input_error)?;

    let lng: f64 = lng.trim().parse().map_err(|_| invalid_input_error())?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid_input_error())?;

    Ok(Coordinate::new(lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lng_lat_pairs() {
        let coordinate = parse_coordinate("126.9784147,37.5666805").unwrap();

        assert_eq!(coordinate, Coordinate::new(37.5666805, 126.9784147));
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(parse_coordinate("126.9784147").is_err());
        assert!(parse_coordinate("a,b").is_err());
    }
}
