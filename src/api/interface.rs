use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{PlaceRecord, RouteQuery};
use crate::error::Error;
use crate::external::naver_maps::DriveResponse;

#[async_trait]
pub trait PlaceSearchAPI {
    async fn search_places(&self, keyword: String) -> Result<Vec<PlaceRecord>, Error>;
}

#[async_trait]
pub trait DirectionsAPI {
    async fn find_directions(&self, query: RouteQuery) -> Result<DriveResponse, Error>;
}

#[async_trait]
pub trait GeocodeAPI {
    async fn geocode(&self, query: String) -> Result<serde_json::Value, Error>;
}

pub trait API: PlaceSearchAPI + DirectionsAPI + GeocodeAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
