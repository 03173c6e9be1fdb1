use std::{fs, path::Path, time::Duration};

use anyhow::{anyhow, Context};
use serde::Deserialize;
use tracing::warn;
use url::Url;

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://tarotapi.dev/api/v1";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://sacred-texts.com/tarot/pkt/img";
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(1200);
pub const SETTINGS_FILE: &str = "tarot.toml";

/// Environment variables that may override the catalog base URL, in
/// ascending priority.
const CATALOG_URL_ENV_KEYS: [&str; 2] = ["TAROT_CATALOG_URL", "APP__CATALOG_URL"];

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub catalog_base_url: String,
    pub image_base_url: String,
    pub reveal_interval: Duration,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub load_on_start: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            catalog_base_url: DEFAULT_CATALOG_BASE_URL.into(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.into(),
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
            seed: None,
            load_on_start: true,
        }
    }
}

impl SessionSettings {
    pub fn with_catalog_base_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_base_url = url.into();
        self
    }

    pub fn with_image_base_url(mut self, url: impl Into<String>) -> Self {
        self.image_base_url = url.into();
        self
    }

    pub fn with_reveal_interval(mut self, interval: Duration) -> Self {
        self.reveal_interval = interval;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn without_initial_load(mut self) -> Self {
        self.load_on_start = false;
        self
    }

    /// Full URL of the card listing under the catalog base URL.
    pub fn cards_endpoint(&self) -> anyhow::Result<Url> {
        cards_endpoint(&self.catalog_base_url)
    }

    /// Checks that both base URLs parse.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.cards_endpoint()?;
        parse_base_url("image", &self.image_base_url)?;
        Ok(())
    }

    fn apply_file(&mut self, file_cfg: FileSettings) {
        if let Some(v) = file_cfg.catalog_base_url {
            match cards_endpoint(&v) {
                Ok(_) => self.catalog_base_url = v,
                Err(err) => warn!(error = %err, "ignoring catalog_base_url from settings file"),
            }
        }
        if let Some(v) = file_cfg.image_base_url {
            match parse_base_url("image", &v) {
                Ok(_) => self.image_base_url = v,
                Err(err) => warn!(error = %err, "ignoring image_base_url from settings file"),
            }
        }
        if let Some(ms) = file_cfg.reveal_interval_ms {
            self.reveal_interval = Duration::from_millis(ms);
        }
        if let Some(seed) = file_cfg.seed {
            self.seed = Some(seed);
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    catalog_base_url: Option<String>,
    image_base_url: Option<String>,
    reveal_interval_ms: Option<u64>,
    seed: Option<u64>,
}

/// Defaults, then `tarot.toml` in the working directory, then the catalog URL
/// from the environment.
pub fn load_settings() -> SessionSettings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> SessionSettings {
    let mut settings = SessionSettings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => settings.apply_file(file_cfg),
            Err(err) => warn!(
                path = %path.display(),
                error = %err,
                "ignoring unparsable settings file"
            ),
        }
    }

    for key in CATALOG_URL_ENV_KEYS {
        if let Some(v) = env(key).filter(|v| !v.trim().is_empty()) {
            settings.catalog_base_url = v;
        }
    }

    settings
}

fn parse_base_url(kind: &str, base_url: &str) -> anyhow::Result<Url> {
    let url = Url::parse(base_url.trim())
        .with_context(|| format!("invalid {kind} base url '{base_url}'"))?;
    if url.cannot_be_a_base() {
        return Err(anyhow!("{kind} base url '{base_url}' cannot carry a path"));
    }
    Ok(url)
}

pub fn cards_endpoint(base_url: &str) -> anyhow::Result<Url> {
    let mut url = parse_base_url("catalog", base_url)?;
    url.path_segments_mut()
        .map_err(|()| anyhow!("catalog base url '{base_url}' cannot carry a path"))?
        .pop_if_empty()
        .push("cards");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use std::{
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_point_at_public_catalog() {
        let settings = load_settings_from(Path::new("does-not-exist.toml"), no_env);
        assert_eq!(settings.catalog_base_url, DEFAULT_CATALOG_BASE_URL);
        assert_eq!(settings.reveal_interval, Duration::from_millis(1200));
        assert!(settings.load_on_start);
        assert_eq!(
            settings.cards_endpoint().expect("endpoint").as_str(),
            "https://tarotapi.dev/api/v1/cards"
        );
    }

    #[test]
    fn cards_endpoint_tolerates_trailing_slash() {
        assert_eq!(
            cards_endpoint("http://127.0.0.1:9000/api/").unwrap().as_str(),
            "http://127.0.0.1:9000/api/cards"
        );
        assert!(cards_endpoint("not a url").is_err());
    }

    #[test]
    fn file_then_env_override_defaults() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("tarot_settings_test_{suffix}.toml"));
        fs::write(
            &path,
            "catalog_base_url = \"http://file.example/api\"\nreveal_interval_ms = 10\nseed = 7\n",
        )
        .expect("write settings");

        let from_file = load_settings_from(&path, no_env);
        assert_eq!(from_file.catalog_base_url, "http://file.example/api");
        assert_eq!(from_file.reveal_interval, Duration::from_millis(10));
        assert_eq!(from_file.seed, Some(7));

        let from_env = load_settings_from(&path, |key| {
            (key == "APP__CATALOG_URL").then(|| "http://env.example/v1".to_string())
        });
        assert_eq!(from_env.catalog_base_url, "http://env.example/v1");
        assert_eq!(from_env.image_base_url, DEFAULT_IMAGE_BASE_URL);

        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn both_base_urls_are_validated() {
        assert!(SessionSettings::default().validate().is_ok());

        let bad_images = SessionSettings::default().with_image_base_url("images/tarot");
        let err = bad_images.validate().expect_err("relative image url");
        assert!(err.to_string().contains("image base url"));

        let bad_catalog = SessionSettings::default().with_catalog_base_url("mailto:tarot");
        assert!(bad_catalog.validate().is_err());
    }

    #[test]
    fn invalid_urls_in_file_are_ignored() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("tarot_settings_urls_{suffix}.toml"));
        fs::write(
            &path,
            "catalog_base_url = \"not a url\"\nimage_base_url = \"img\"\nreveal_interval_ms = 5\n",
        )
        .expect("write settings");

        let settings = load_settings_from(&path, no_env);
        assert_eq!(settings.catalog_base_url, DEFAULT_CATALOG_BASE_URL);
        assert_eq!(settings.image_base_url, DEFAULT_IMAGE_BASE_URL);
        assert_eq!(settings.reveal_interval, Duration::from_millis(5));
        assert!(settings.validate().is_ok());

        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn unparsable_file_keeps_defaults() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("tarot_settings_bad_{suffix}.toml"));
        fs::write(&path, "reveal_interval_ms = \"soon\"").expect("write settings");

        let settings = load_settings_from(&path, no_env);
        assert_eq!(settings.reveal_interval, DEFAULT_REVEAL_INTERVAL);

        fs::remove_file(path).expect("cleanup");
    }
}
