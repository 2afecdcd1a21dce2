use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// Defaults for occurrence previews and descriptions
#[derive(Deserialize, Debug)]
pub struct PreviewConfig {
    /// Number of occurrences shown when --count is omitted
    pub count: usize,
    /// Use detailed descriptions by default
    pub detailed: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            count: 10,
            detailed: false,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("subtrack.toml"))
            .merge(Env::prefixed("SUBTRACK_"))
            .extract()
    }
}
