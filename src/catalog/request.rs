use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::{CatalogEntry, DetailResponse, ListResponse};
use crate::error::CatalogError;

const POKEMON_PATH: &str = "pokemon";

/// Where the controller gets its pokemon from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_list(&self) -> Result<Vec<CatalogEntry>, CatalogError>;

    async fn fetch_detail(&self, id: &str) -> Result<CatalogEntry, CatalogError>;
}

/// Catalog reached over HTTP.
#[derive(Clone, Debug)]
pub struct HttpCatalog {
    req_client: reqwest::Client,
    base_url: Url,
}

impl HttpCatalog {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, CatalogError> {
        let req_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(HttpCatalog {
            req_client,
            base_url,
        })
    }

    pub fn list_url(&self) -> Url {
        self.endpoint(&[POKEMON_PATH])
    }

    pub fn detail_url(&self, id: &str) -> Url {
        self.endpoint(&[POKEMON_PATH, id])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_list(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        let list: ListResponse = fetch_json(&self.req_client, self.list_url(), "the pokemon list").await?;
        debug!("Received {} pokemon from catalog", list.results.len());
        Ok(list.results)
    }

    async fn fetch_detail(&self, id: &str) -> Result<CatalogEntry, CatalogError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(CatalogError::NotFound("an empty id".to_owned()));
        }

        let what = format!("id {id}");
        let detail: DetailResponse = fetch_json(&self.req_client, self.detail_url(id), &what).await?;
        detail.result.ok_or(CatalogError::NotFound(what))
    }
}

/// A 404 becomes `NotFound(what)`; `what` ends up in the failure notice.
async fn fetch_json<T: DeserializeOwned>(
    req_client: &reqwest::Client,
    url: Url,
    what: &str,
) -> Result<T, CatalogError> {
    debug!("Attempting to fetch from catalog url: {}", url);

    let response: reqwest::Response = req_client.get(url.clone()).send().await?;

    if response.status() == StatusCode::NOT_FOUND {
        return Err(CatalogError::NotFound(what.to_owned()));
    }

    let body = response.error_for_status()?.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

#[cfg(test)]
mod test {
    use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    use super::*;

    async fn serve_catalog(app: Router) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Url::parse(&format!("http://{addr}/api/v2/")).unwrap()
    }

    fn catalog(base_url: Url) -> HttpCatalog {
        HttpCatalog::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoints() {
        let c = catalog(Url::parse("http://localhost/api/v2/").unwrap());
        assert_eq!(c.list_url().as_str(), "http://localhost/api/v2/pokemon");
        assert_eq!(c.detail_url("25").as_str(), "http://localhost/api/v2/pokemon/25");

        let c = catalog(Url::parse("http://localhost/api").unwrap());
        assert_eq!(c.list_url().as_str(), "http://localhost/api/pokemon");
        assert_eq!(c.detail_url("a/b").as_str(), "http://localhost/api/pokemon/a%2Fb");
    }

    #[tokio::test]
    async fn test_fetch_list() {
        let app = Router::new().route(
            "/api/v2/pokemon",
            get(|| async {
                Json(json!({"results": [
                    {"name": "pikachu", "abilities": ["static"], "sprites": []},
                    {"name": "bulbasaur", "abilities": ["overgrow"], "sprites": []}
                ]}))
            }),
        );
        let c = catalog(serve_catalog(app).await);

        let entries = c.fetch_list().await.unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["pikachu", "bulbasaur"]);
    }

    #[tokio::test]
    async fn test_fetch_detail() {
        let app = Router::new().route(
            "/api/v2/pokemon/:id",
            get(|Path(id): Path<String>| async move {
                match id.as_str() {
                    "25" => Json(json!({"result": {"name": "pikachu", "images": [
                        {"title": "front", "url": "a.png"},
                        {"title": "back", "url": null}
                    ]}})),
                    _ => Json(json!({"result": null})),
                }
            }),
        );
        let c = catalog(serve_catalog(app).await);

        let entry = c.fetch_detail("25").await.unwrap();
        assert_eq!(entry.name, "pikachu");
        assert_eq!(entry.sprites.len(), 2);

        assert!(matches!(
            c.fetch_detail("9999").await,
            Err(CatalogError::NotFound(_))
        ));
        assert!(matches!(
            c.fetch_detail("  ").await,
            Err(CatalogError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_status_errors() {
        let app = Router::new()
            .route("/api/v2/pokemon", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
        let c = catalog(serve_catalog(app).await);

        assert!(matches!(c.fetch_list().await, Err(CatalogError::Network(_))));
        assert!(matches!(
            c.fetch_detail("25").await,
            Err(CatalogError::NotFound(ref what)) if what == "id 25"
        ));
    }

    #[tokio::test]
    async fn test_fetch_not_found_names_the_request() {
        let c = catalog(serve_catalog(Router::new()).await);

        let error = c.fetch_list().await.unwrap_err();
        assert!(matches!(error, CatalogError::NotFound(ref what) if what == "the pokemon list"));
        assert!(!error.to_string().contains("http://"));

        let error = c.fetch_detail("25").await.unwrap_err();
        assert!(matches!(error, CatalogError::NotFound(ref what) if what == "id 25"));
        assert!(!error.to_string().contains("/api/v2/"));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let app = Router::new().route(
            "/api/v2/pokemon",
            get(|| async { Json::<Value>(json!({"pokemon": "pikachu"})) }),
        );
        let c = catalog(serve_catalog(app).await);

        assert!(matches!(c.fetch_list().await, Err(CatalogError::Schema(_))));
    }

    #[tokio::test]
    async fn test_fetch_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let c = catalog(Url::parse(&format!("http://{addr}/")).unwrap());
        assert!(matches!(c.fetch_list().await, Err(CatalogError::Network(_))));
    }
}
