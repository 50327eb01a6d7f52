use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "eventmap.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";

const DEFAULT_GEOCODING_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub struct Config {
    pub db: Db,
    pub geocoding: Geocoding,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::try_default()?
                }
                _ => return Err(err.into()),
            },
        };
        if let Ok(api_key) = env::var(ENV_NAME_GOOGLE_MAPS_API_KEY) {
            raw_config = raw_config.with_google_maps_api_key(api_key);
        }
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

#[derive(Debug)]
pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

#[derive(Debug)]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub enum GeocodingGateway {
    GoogleMaps {
        api_key: String,
        api_base_url: Option<String>,
    },
    /// For local testing purposes
    JsonFile { path: PathBuf },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            geocoding,
            gateway,
        } = from;

        // Sections that are missing in the file are taken from the defaults.
        let defaults = raw::Config::try_default()?;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db
            .or(defaults.db)
            .ok_or_else(|| anyhow!("Missing database configuration"))?;
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::Geocoding {
            gateway: gw_name,
            timeout,
        } = geocoding.unwrap_or_default();
        let timeout = timeout
            .or_else(|| defaults.geocoding.and_then(|g| g.timeout))
            .unwrap_or(DEFAULT_GEOCODING_TIMEOUT);

        let geo_gateway = match gw_name {
            Some(gw_name) => {
                let toml_name = gw_name.toml_name();
                let gateway = gateway.ok_or_else(|| anyhow!("Missing gateway configuration"))?;
                let gw = match gw_name {
                    raw::GeocodingGateway::GoogleMaps => {
                        let raw::GoogleMaps {
                            api_key,
                            api_base_url,
                        } = gateway.google_maps.ok_or_else(|| {
                            anyhow!("Missing '{toml_name}' gateway configuration")
                        })?;
                        let api_key = api_key.ok_or_else(|| {
                            anyhow!("Missing API key for the '{toml_name}' gateway")
                        })?;
                        GeocodingGateway::GoogleMaps {
                            api_key,
                            api_base_url,
                        }
                    }
                    raw::GeocodingGateway::JsonFile => {
                        let raw::JsonFile { path } = gateway.json_file.ok_or_else(|| {
                            anyhow!("Missing '{toml_name}' gateway configuration")
                        })?;
                        GeocodingGateway::JsonFile { path }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
            timeout,
        };

        Ok(Self { db, geocoding })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Config> {
        let raw: raw::Config = toml::from_str(toml)?;
        Config::try_from(raw)
    }

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn missing_sections_are_taken_from_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!("eventmap.sqlite", cfg.db.conn_sqlite);
        assert_eq!(10, cfg.db.conn_pool_size);
        assert!(cfg.geocoding.gateway.is_none());
        assert_eq!(DEFAULT_GEOCODING_TIMEOUT, cfg.geocoding.timeout);
    }

    #[test]
    fn google_maps_gateway() {
        let cfg = parse(
            r#"
            [geocoding]
            gateway = "google-maps"
            timeout = "3s"

            [gateway.google-maps]
            api-key = "secret"
            "#,
        )
        .unwrap();
        assert_eq!(Duration::from_secs(3), cfg.geocoding.timeout);
        assert!(matches!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::GoogleMaps { api_key, api_base_url: None }) if api_key == "secret"
        ));
    }

    #[test]
    fn google_maps_api_key_from_env() {
        let raw = raw::Config::try_default()
            .unwrap()
            .with_google_maps_api_key("secret".into());
        let cfg = Config::try_from(raw).unwrap();
        assert!(matches!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::GoogleMaps { .. })
        ));
    }

    #[test]
    fn json_file_gateway() {
        let cfg = parse(
            r#"
            [db]
            connection-sqlite = ":memory:"
            connection-pool-size = 1

            [geocoding]
            gateway = "json-file"

            [gateway.json-file]
            path = "geocodes.json"
            "#,
        )
        .unwrap();
        assert_eq!(":memory:", cfg.db.conn_sqlite);
        assert!(matches!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::JsonFile { path }) if path == Path::new("geocodes.json")
        ));
    }

    #[test]
    fn reject_incomplete_gateway_configurations() {
        assert!(parse(
            r#"
            [geocoding]
            gateway = "google-maps"
            "#
        )
        .is_err());
        assert!(parse(
            r#"
            [geocoding]
            gateway = "google-maps"

            [gateway.google-maps]
            api-base-url = "http://localhost:8080"
            "#
        )
        .is_err());
        assert!(parse(
            r#"
            [geocoding]
            gateway = "json-file"

            [gateway.google-maps]
            api-key = "secret"
            "#
        )
        .is_err());
    }

    #[test]
    fn reject_empty_connection_pool() {
        assert!(parse(
            r#"
            [db]
            connection-sqlite = "eventmap.sqlite"
            connection-pool-size = 0
            "#
        )
        .is_err());
    }
}
