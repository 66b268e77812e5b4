use crate::error::{PasteError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:5173";
const DEFAULT_LOG_FILTER: &str = "pastebook=warn";
const EDIT_QUERY_PARAM: &str = "pasteId";

/// Configuration for pastebook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin used to build share and edit links
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    /// Tracing filter used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            share_base_url: default_share_base_url(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PasteError::Io)?;
        let config: AppConfig =
            serde_json::from_str(&content).map_err(PasteError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PasteError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PasteError::Serialization)?;
        fs::write(config_path, content).map_err(PasteError::Io)?;
        Ok(())
    }

    /// Set the share origin (trailing slashes are dropped)
    pub fn set_share_base_url(&mut self, url: &str) {
        self.share_base_url = url.trim_end_matches('/').to_string();
    }

    fn base(&self) -> &str {
        self.share_base_url.trim_end_matches('/')
    }

    /// Public link to a paste: `<base>/pastes/<id>`
    pub fn share_url(&self, id: &str) -> String {
        format!("{}/pastes/{}", self.base(), id)
    }

    /// Link that opens a paste in the editor: `<base>/?pasteId=<id>`
    pub fn edit_url(&self, id: &str) -> String {
        format!("{}/?{}={}", self.base(), EDIT_QUERY_PARAM, id)
    }
}

/// Extracts a paste id from an edit link, a share link, or a bare id.
///
/// Returns None when the input is a link that carries no id.
pub fn parse_paste_id(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if !input.contains("://") && !input.contains('?') && !input.contains('/') {
        return Some(input.to_string());
    }

    if let Some((_, query)) = input.split_once('?') {
        let query = query.split('#').next().unwrap_or_default();
        let found = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == EDIT_QUERY_PARAM)
            .map(|(_, value)| value.to_string())
            .filter(|value| !value.is_empty());
        if found.is_some() {
            return found;
        }
    }

    let path = input.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
    let (_, id) = path.trim_end_matches('/').rsplit_once("/pastes/")?;
    (!id.is_empty() && !id.contains('/')).then(|| id.to_string())
}
