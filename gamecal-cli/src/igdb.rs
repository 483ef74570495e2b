//! IGDB API client.
//!
//! Every query is an Apicalypse text body POSTed to a v4 endpoint, with the
//! client id and bearer token sent as headers. A non-success response is
//! fatal for the run; the error carries the status code and response body.

use std::collections::HashSet;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use gamecal_core::record::NameMap;
use gamecal_core::{GamecalError, ReleaseRecord};

use crate::config::Credentials;
use crate::window::FetchWindow;

/// One page is all we fetch; IGDB caps page size at 500.
const PAGE_LIMIT: u32 = 500;

pub struct IgdbClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

// Wire types matching the IGDB response shapes

#[derive(Deserialize)]
struct ReleaseDateRow {
    #[serde(default)]
    date: Option<i64>,
    #[serde(default)]
    platform: Option<u64>,
    #[serde(default)]
    status: Option<u64>,
    #[serde(default)]
    game: Option<GameRef>,
}

#[derive(Deserialize)]
struct GameRef {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    slug: Option<String>,
}

#[derive(Deserialize)]
struct NamedRow {
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    name: Option<String>,
}

impl IgdbClient {
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        IgdbClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Fetch release rows inside the window, one page, sorted by date.
    pub async fn fetch_release_dates(
        &self,
        window: FetchWindow,
        min_hypes: u32,
    ) -> Result<Vec<ReleaseRecord>> {
        let query = format!(
            "fields game.name, game.slug, date, platform, status;\n\
             where date >= {} & date <= {} & game.hypes >= {};\n\
             sort date asc;\n\
             limit {};",
            window.start, window.end, min_hypes, PAGE_LIMIT
        );

        let rows: Vec<ReleaseDateRow> = self.query("release_dates", &query).await?;

        Ok(rows
            .into_iter()
            .map(|row| ReleaseRecord {
                title: row.game.as_ref().and_then(|g| g.name.clone()),
                slug: row.game.and_then(|g| g.slug),
                timestamp: row.date,
                platforms: row.platform.into_iter().collect(),
                status: row.status,
            })
            .collect())
    }

    /// Resolve platform ids to names. An empty id set skips the request.
    pub async fn fetch_platform_names(&self, ids: &HashSet<u64>) -> Result<NameMap> {
        self.fetch_names("platforms", ids).await
    }

    /// Resolve release status ids to names. An empty id set skips the request.
    pub async fn fetch_status_names(&self, ids: &HashSet<u64>) -> Result<NameMap> {
        self.fetch_names("release_date_statuses", ids).await
    }

    async fn fetch_names(&self, endpoint: &str, ids: &HashSet<u64>) -> Result<NameMap> {
        if ids.is_empty() {
            return Ok(NameMap::new());
        }

        let mut id_list: Vec<u64> = ids.iter().copied().collect();
        id_list.sort_unstable();
        let id_list = id_list
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let query = format!(
            "fields id, name;\nwhere id = ({});\nlimit {};",
            id_list, PAGE_LIMIT
        );

        let rows: Vec<NamedRow> = self.query(endpoint, &query).await?;

        // Rows missing an id or name are skipped rather than failing the run
        Ok(rows
            .into_iter()
            .filter_map(|row| Some((row.id?, row.name?)))
            .collect())
    }

    async fn query<T: DeserializeOwned>(&self, endpoint: &str, body: &str) -> Result<T> {
        let resp = self
            .http
            .post(format!("{}/{}", self.base_url, endpoint))
            .header("Client-ID", &self.credentials.client_id)
            .header(
                "Authorization",
                format!("Bearer {}", self.credentials.access_token),
            )
            .body(body.to_string())
            .send()
            .await
            .with_context(|| format!("Failed to reach the IGDB {} endpoint", endpoint))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GamecalError::Api {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        resp.json()
            .await
            .with_context(|| format!("Invalid JSON from the IGDB {} endpoint", endpoint))
    }
}
