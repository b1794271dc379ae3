mod directions_api;
mod geocode_api;
mod place_search_api;

use std::env;

use crate::{api::API, error::Error};

#[derive(Debug)]
pub struct Engine;

impl Engine {
    #[tracing::instrument(name = "Engine::new")]
    pub fn new() -> Result<Self, Error> {
        // credentials are required by every proxied call
        env::var("NAVER_SEARCH_CLIENT_ID")?;
        env::var("NAVER_SEARCH_CLIENT_SECRET")?;
        env::var("NAVER_CLIENT_ID")?;
        env::var("NAVER_CLIENT_SECRET")?;

        Ok(Self)
    }
}

impl API for Engine {}
