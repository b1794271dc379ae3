use async_trait::async_trait;

use super::Engine;
use crate::{api::PlaceSearchAPI, entities::PlaceRecord, error::Error, external::naver_maps};

#[async_trait]
impl PlaceSearchAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn search_places(&self, keyword: String) -> Result<Vec<PlaceRecord>, Error> {
        naver_maps::search_local(keyword).await
    }
}
