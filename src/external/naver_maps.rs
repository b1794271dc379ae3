use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::{
    entities::{Coordinate, PlaceRecord, RoutePath},
    error::{invalid_input_error, upstream_error, Error},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_SEARCH_API_BASE: &str = "openapi.naver.com";
const DEFAULT_MAPS_API_BASE: &str = "naveropenapi.apigw.ntruss.com";

#[derive(Debug, Deserialize)]
struct LocalSearchResponse {
    items: Vec<LocalItem>,
}

#[derive(Debug, Deserialize)]
struct LocalItem {
    title: String,
    #[serde(default)]
    address: String,
    #[serde(rename = "roadAddress", default)]
    road_address: String,
    mapx: String,
    mapy: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DriveResponse {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub route: Option<RouteTree>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteTree {
    pub trafast: Option<Vec<DriveLeg>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DriveLeg {
    pub summary: DriveSummary,
    pub path: Vec<[f64; 2]>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DriveSummary {
    pub distance: f64,
    pub duration: u64,
}

impl DriveResponse {
    /// The first fastest-route leg, if the provider found one.
    /// `None` is the "no route available" condition, not a failure.
    pub fn into_path(self) -> Option<RoutePath> {
        let leg = self.route?.trafast?.into_iter().next()?;

        let path: Vec<Coordinate> = leg
            .path
            .iter()
            .map(|[lng, lat]| Coordinate::new(*lat, *lng))
            .collect();

        if path.is_empty() {
            return None;
        }

        Some(RoutePath {
            path,
            distance_meters: leg.summary.distance,
            duration_millis: leg.summary.duration,
        })
    }
}

fn client() -> Result<reqwest::Client, Error> {
    Ok(reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}

fn check_status(status_code: u16) -> Result<(), Error> {
    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    Ok(())
}

#[tracing::instrument]
pub async fn search_local(keyword: String) -> Result<Vec<PlaceRecord>, Error> {
    let api_base =
        env::var("NAVER_SEARCH_API_BASE").unwrap_or_else(|_| DEFAULT_SEARCH_API_BASE.into());
    let url = format!("https://{}/v1/search/local.json", api_base);
    let client_id = env::var("NAVER_SEARCH_CLIENT_ID")?;
    let client_secret = env::var("NAVER_SEARCH_CLIENT_SECRET")?;

    let res = client()?
        .get(url)
        .header("X-Naver-Client-Id", client_id)
        .header("X-Naver-Client-Secret", client_secret)
        .query(&[("query", keyword)])
        .query(&[("display", "10")])
        .query(&[("start", "1")])
        .query(&[("sort", "random")])
        .send()
        .await?;

    check_status(res.status().as_u16())?;

    let data: LocalSearchResponse = res.json().await?;

    Ok(data
        .items
        .iter()
        .map(|item| PlaceRecord {
            name: strip_tags(&item.title),
            address: if item.road_address.is_empty() {
                item.address.clone()
            } else {
                item.road_address.clone()
            },
            x: item.mapx.clone(),
            y: item.mapy.clone(),
        })
        .collect())
}

#[tracing::instrument]
pub async fn drive_route(
    start: String,
    goal: String,
    option: Option<String>,
) -> Result<DriveResponse, Error> {
    let api_base = env::var("NAVER_MAPS_API_BASE").unwrap_or_else(|_| DEFAULT_MAPS_API_BASE.into());
    let url = format!("https://{}/map-direction/v1/driving", api_base);
    let client_id = env::var("NAVER_CLIENT_ID")?;
    let client_secret = env::var("NAVER_CLIENT_SECRET")?;

    let mut req = client()?
        .get(url)
        .header("X-NCP-APIGW-API-KEY-ID", client_id)
        .header("X-NCP-APIGW-API-KEY", client_secret)
        .query(&[("start", start)])
        .query(&[("goal", goal)]);

    if let Some(option) = option {
        req = req.query(&[("option", option)]);
    }

    let res = req.send().await?;

    check_status(res.status().as_u16())?;

    Ok(res.json().await?)
}

#[tracing::instrument]
pub async fn geocode(query: String) -> Result<serde_json::Value, Error> {
    let api_base = env::var("NAVER_MAPS_API_BASE").unwrap_or_else(|_| DEFAULT_MAPS_API_BASE.into());
    let url = format!("https://{}/map-geocode/v2/geocode", api_base);
    let client_id = env::var("NAVER_CLIENT_ID")?;
    let client_secret = env::var("NAVER_CLIENT_SECRET")?;

    let res = client()?
        .get(url)
        .header("X-NCP-APIGW-API-KEY-ID", client_id)
        .header("X-NCP-APIGW-API-KEY", client_secret)
        .query(&[("query", query)])
        .send()
        .await?;

    check_status(res.status().as_u16())?;

    Ok(res.json().await?)
}

// Provider titles embed emphasis markup, e.g. "<b>Seoul</b> City Hall".
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;

    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_markup_from_titles() {
        assert_eq!(strip_tags("<b>Seoul</b> City Hall"), "Seoul City Hall");
        assert_eq!(strip_tags("no markup"), "no markup");
    }

    #[test]
    fn drive_response_yields_first_leg() {
        let data: DriveResponse = serde_json::from_value(json!({
            "code": 0,
            "message": "ok",
            "route": {
                "trafast": [{
                    "summary": { "distance": 11253.0, "duration": 1226000 },
                    "path": [[126.9784, 37.5666], [127.0276, 37.4979]]
                }]
            }
        }))
        .unwrap();

        let path = data.into_path().unwrap();

        assert_eq!(path.distance_meters, 11253.0);
        assert_eq!(path.duration_millis, 1226000);
        assert_eq!(path.path[0], Coordinate::new(37.5666, 126.9784));
    }

    #[test]
    fn empty_route_tree_means_no_route() {
        let data: DriveResponse =
            serde_json::from_value(json!({ "code": 1, "route": {} })).unwrap();

        assert!(data.into_path().is_none());
    }

    #[test]
    fn local_items_prefer_road_address() {
        let data: LocalSearchResponse = serde_json::from_value(json!({
            "items": [
                {
                    "title": "<b>Gangnam</b> Station",
                    "address": "858 Yeoksam-dong",
                    "roadAddress": "396 Gangnam-daero",
                    "mapx": "127.0276368",
                    "mapy": "37.4979502"
                },
                {
                    "title": "Somewhere",
                    "address": "old address",
                    "roadAddress": "",
                    "mapx": "127.0",
                    "mapy": "37.0"
                }
            ]
        }))
        .unwrap();

        assert_eq!(data.items[0].road_address, "396 Gangnam-daero");
        assert_eq!(data.items[1].road_address, "");
    }
}
