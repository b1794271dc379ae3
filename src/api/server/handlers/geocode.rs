use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use crate::{
    api::interface::DynAPI,
    error::{invalid_input_error, Error},
};

#[derive(Serialize, Deserialize)]
pub struct GeocodeParams {
    pub query: String,
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<GeocodeParams>,
) -> Result<Json<serde_json::Value>, Error> {
    if params.query.trim().is_empty() {
        return Err(invalid_input_error());
    }

    let data = api.geocode(params.query).await?;

    Ok(data.into())
}
