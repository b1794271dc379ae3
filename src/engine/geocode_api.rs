use async_trait::async_trait;

use super::Engine;
use crate::{api::GeocodeAPI, error::Error, external::naver_maps};

#[async_trait]
impl GeocodeAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn geocode(&self, query: String) -> Result<serde_json::Value, Error> {
        naver_maps::geocode(query).await
    }
}
