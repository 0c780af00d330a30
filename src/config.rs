use eyre::{Error, WrapErr};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Default)]
pub struct Config {
    conf: toml::Table,
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config, Error> {
        let content = std::fs::read_to_string(file_name).wrap_err_with(|| {
            format!("cannot load configuration file {}", file_name.display())
        })?;
        Self::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", file_name.display()))
    }

    pub fn parse(content: &str) -> Result<Config, Error> {
        Ok(Config {
            conf: toml::from_str(content)?,
        })
    }
}

pub fn get_config(config: &Config, section: &str, key: &str) -> Option<String> {
    config
        .conf
        .get(section)
        .and_then(|s| s.get(key))
        .map(|v| match v {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
}

/// Parse `section.key`, falling back to `default` when it is absent.
pub fn get_config_or<T>(config: &Config, section: &str, key: &str, default: T) -> Result<T, Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match get_config(config, section, key) {
        Some(value) => value
            .parse()
            .wrap_err_with(|| format!("cannot parse {section}.{key} configuration parameter")),
        None => Ok(default),
    }
}
