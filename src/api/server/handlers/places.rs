use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::{
    api::interface::DynAPI,
    entities::PlaceRecord,
    error::{invalid_input_error, Error},
};

#[derive(Serialize, Deserialize)]
pub struct SearchPlacesParams {
    pub keyword: String,
}

#[derive(Serialize, Deserialize)]
pub struct SearchPlacesResponse {
    pub places: Vec<PlaceRecord>,
}

pub async fn search(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<SearchPlacesParams>,
) -> Result<Json<SearchPlacesResponse>, Error> {
    if params.keyword.trim().is_empty() {
        return Err(invalid_input_error());
    }

    let places = api.search_places(params.keyword).await?;

    Ok(SearchPlacesResponse { places }.into())
}
