use std::path::Path;

use color_eyre::eyre::WrapErr;
use log::debug;
use serde::Deserialize;

/// Read when no `--config` is given, if present.
pub(crate) const DEFAULT_CONFIG_PATH: &str = "./dynv6.yml";

/// Endpoints and names used for a single update run.
///
/// Every field is optional in the YAML file; missing ones keep their default.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    pub protocol: String,
    pub server: String,
    pub domain: String,
    pub lookup_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            protocol: "https".to_string(),
            server: "dynv6.com".to_string(),
            domain: "weier-home.dynv6.net".to_string(),
            lookup_url: "https://api.ipify.org".to_string(),
        }
    }
}

/// Loads settings from `path`, or from [`DEFAULT_CONFIG_PATH`] when that file exists.
///
/// An explicitly named file must be readable; the implicit one is optional.
pub(crate) fn load_settings(path: Option<&Path>) -> color_eyre::Result<Settings> {
    let path = match path {
        Some(path) => path,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if !default_path.is_file() {
                debug!("No {} found, using built-in settings", DEFAULT_CONFIG_PATH);
                return Ok(Settings::default());
            }
            default_path
        }
    };

    debug!("Reading settings from {}", path.display());
    let file = std::fs::File::open(path)
        .wrap_err_with(|| format!("Failed to open {}", path.display()))?;
    parse_settings(file).wrap_err_with(|| format!("Failed to read settings from {}", path.display()))
}

fn parse_settings<R: std::io::Read>(reader: R) -> color_eyre::Result<Settings> {
    Ok(serde_yaml::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let settings = parse_settings("domain: other.dynv6.net\n".as_bytes()).unwrap();

        assert_eq!(settings.domain, "other.dynv6.net");
        assert_eq!(settings.server, "dynv6.com");
        assert_eq!(settings.protocol, "https");
        assert_eq!(settings.lookup_url, "https://api.ipify.org");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_settings("hostname: typo.dynv6.net\n".as_bytes()).is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = load_settings(Some(Path::new("/nonexistent/dynv6.yml")));

        assert!(result.is_err());
    }
}
