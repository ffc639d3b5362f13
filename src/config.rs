use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file looked up in the working directory.
const CONFIG_FILE: &str = "plantendrill.json";

// ---------------------------------------------------------------------------
// Application configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Workbook read at startup.
    pub workbook: PathBuf,
    pub plant_sheet: String,
    pub family_sheet: String,
    /// Prefix for the photo filenames of the plant sheet.
    pub photo_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workbook: PathBuf::from("PlantenDrill.xlsx"),
            plant_sheet: "Planten".to_string(),
            family_sheet: "Families".to_string(),
            photo_base_url: "http://www.symbiosa.be/Plantendrill/".to_string(),
        }
    }
}

impl AppConfig {
    /// Resolve the configuration from the process environment.
    ///
    /// Order, later wins: defaults, JSON file (`PLANTENDRILL_CONFIG` or
    /// `plantendrill.json`), `PLANTENDRILL_WORKBOOK` / `PLANTENDRILL_PHOTO_URL`,
    /// then the first command-line argument as workbook path. A config file
    /// that cannot be read or parsed is returned as the error next to the
    /// resolved configuration.
    pub fn load() -> (Self, Option<anyhow::Error>) {
        Self::resolve(
            read_config_file(),
            |key| std::env::var(key).ok(),
            std::env::args().nth(1),
        )
    }

    /// Like [`AppConfig::from_sources`], but a broken config file only drops
    /// the file; the environment and argument overrides still apply.
    pub fn resolve(
        file: Result<Option<String>>,
        env: impl Fn(&str) -> Option<String>,
        workbook_arg: Option<String>,
    ) -> (Self, Option<anyhow::Error>) {
        let merged =
            file.and_then(|text| Self::from_sources(text.as_deref(), &env, workbook_arg.clone()));
        match merged {
            Ok(config) => (config, None),
            Err(e) => {
                log::warn!("Ignoring config file: {e:#}");
                (AppConfig::default().with_overrides(&env, workbook_arg), Some(e))
            }
        }
    }

    /// Merge the configuration sources; see [`AppConfig::load`].
    pub fn from_sources(
        file: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
        workbook_arg: Option<String>,
    ) -> Result<Self> {
        let config: AppConfig = match file {
            Some(text) => serde_json::from_str(text).context("parsing config file")?,
            None => AppConfig::default(),
        };
        Ok(config.with_overrides(env, workbook_arg))
    }

    fn with_overrides(
        mut self,
        env: impl Fn(&str) -> Option<String>,
        workbook_arg: Option<String>,
    ) -> Self {
        if let Some(path) = env("PLANTENDRILL_WORKBOOK") {
            self.workbook = PathBuf::from(path);
        }
        if let Some(url) = env("PLANTENDRILL_PHOTO_URL") {
            self.photo_base_url = url;
        }
        if let Some(path) = workbook_arg {
            self.workbook = PathBuf::from(path);
        }
        self
    }

    /// Full URL of a photo, `None` for blank filenames.
    pub fn photo_url(&self, filename: &str) -> Option<String> {
        let filename = filename.trim();
        if filename.is_empty() {
            None
        } else {
            Some(format!("{}{filename}", self.photo_base_url))
        }
    }
}

fn read_config_file() -> Result<Option<String>> {
    match std::env::var_os("PLANTENDRILL_CONFIG").map(PathBuf::from) {
        Some(path) => read_config(&path).map(Some),
        None if Path::new(CONFIG_FILE).exists() => read_config(Path::new(CONFIG_FILE)).map(Some),
        None => Ok(None),
    }
}

fn read_config(path: &Path) -> Result<String> {
    log::info!("Reading configuration from {}", path.display());
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_sources() {
        let config = AppConfig::from_sources(None, no_env, None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            config.photo_url(" eik.jpg "),
            Some("http://www.symbiosa.be/Plantendrill/eik.jpg".to_string())
        );
        assert_eq!(config.photo_url("  "), None);
    }

    #[test]
    fn file_then_env_then_argument() {
        let file = r#"{ "workbook": "a.xlsx", "plant_sheet": "Plants" }"#;
        let config = AppConfig::from_sources(Some(file), no_env, None).unwrap();
        assert_eq!(config.workbook, PathBuf::from("a.xlsx"));
        assert_eq!(config.plant_sheet, "Plants");
        assert_eq!(config.family_sheet, "Families");

        let env = |key: &str| match key {
            "PLANTENDRILL_WORKBOOK" => Some("b.xlsx".to_string()),
            "PLANTENDRILL_PHOTO_URL" => Some("https://example.org/".to_string()),
            _ => None,
        };
        let config = AppConfig::from_sources(Some(file), env, None).unwrap();
        assert_eq!(config.workbook, PathBuf::from("b.xlsx"));
        assert_eq!(config.photo_base_url, "https://example.org/");

        let config = AppConfig::from_sources(Some(file), env, Some("c.ods".into())).unwrap();
        assert_eq!(config.workbook, PathBuf::from("c.ods"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AppConfig::from_sources(Some(r#"{ "werkboek": "x" }"#), no_env, None);
        assert!(err.is_err());
    }

    #[test]
    fn broken_file_keeps_env_and_argument() {
        let (config, err) = AppConfig::resolve(
            Ok(Some(r#"{ "werkboek": "x" }"#.to_string())),
            no_env,
            Some("mijn.xlsx".into()),
        );
        assert!(err.is_some());
        assert_eq!(config.workbook, PathBuf::from("mijn.xlsx"));
        assert_eq!(config.plant_sheet, "Planten");

        let env = |key: &str| match key {
            "PLANTENDRILL_PHOTO_URL" => Some("https://example.org/".to_string()),
            _ => None,
        };
        let (config, err) =
            AppConfig::resolve(Err(anyhow::anyhow!("reading weg.json")), env, None);
        assert!(format!("{:#}", err.unwrap()).contains("weg.json"));
        assert_eq!(config.photo_base_url, "https://example.org/");
        assert_eq!(config.workbook, PathBuf::from("PlantenDrill.xlsx"));
    }

    #[test]
    fn valid_file_resolves_without_error() {
        let file = r#"{ "family_sheet": "Fam" }"#.to_string();
        let (config, err) = AppConfig::resolve(Ok(Some(file)), no_env, None);
        assert!(err.is_none());
        assert_eq!(config.family_sheet, "Fam");
    }
}
