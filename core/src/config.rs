use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct MapConfig {
    pub edges_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RoutingConfig {
    pub default_origin: String,
    pub default_destination: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub map: MapConfig,
    pub routing: RoutingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    pub fn load_from(dir: &str) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .add_source(File::with_name(&format!("{}/default", dir)))
            .add_source(File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            .add_source(Environment::with_prefix("ROTAPLAN"));

        builder.build()?.try_deserialize()
    }
}
