pub mod env_handler;

use serde::{de, Deserialize, Deserializer};
use std::{fmt, str::FromStr};
use tracing::Level;
use tracing_subscriber::{
    fmt::writer::MakeWriterExt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Configure tracing with tracing_subscriber.
pub fn configure_tracing(log_level: &str) {
    let level: Level = Level::from_str(log_level).unwrap_or(Level::INFO);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout.with_max_level(level)))
        .init();
}

/// Serde helper treating empty query parameters as missing.
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt: Option<String> = Option::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => FromStr::from_str(s).map_err(de::Error::custom).map(Some),
    }
}
