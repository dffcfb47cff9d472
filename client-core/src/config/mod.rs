use crate::error::ClientError;
use config::{Config as Cfg, File};
use serde::de::DeserializeOwned;

/// Load a settings struct from an optional `configuration.*` file with
/// `APP`-prefixed environment overrides (`APP_API__BASE_URL` and so on).
pub fn load<T: DeserializeOwned>() -> Result<T, ClientError> {
    dotenvy::dotenv().ok();

    let config = Cfg::builder()
        .add_source(File::with_name("configuration").required(false))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?;

    Ok(config.try_deserialize()?)
}
