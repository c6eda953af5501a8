use thiserror::Error;

/// Everything that can go wrong between triggering a load and showing it.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("catalog response has an unexpected shape: {0}")]
    Schema(#[from] serde_json::Error),
    #[error("no pokemon found for {0}")]
    NotFound(String),
    #[error("could not render template: {0}")]
    Render(#[from] askama::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid url: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{var} cannot be used as a base url: {value}")]
    NotABaseUrl { var: &'static str, value: String },
    #[error("{var} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}
