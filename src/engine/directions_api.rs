use async_trait::async_trait;

use super::Engine;
use crate::{
    api::DirectionsAPI,
    entities::RouteQuery,
    error::Error,
    external::naver_maps::{self, DriveResponse},
};

#[async_trait]
impl DirectionsAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_directions(&self, query: RouteQuery) -> Result<DriveResponse, Error> {
        let start: String = query.start.into();
        let goal: String = query.end.into();

        naver_maps::drive_route(start, goal, Some(query.option)).await
    }
}
