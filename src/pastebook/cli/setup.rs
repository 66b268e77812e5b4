use directories::ProjectDirs;
use pastebook::api::PasteApi;
use pastebook::config::AppConfig;
use pastebook::error::{PasteError, Result};
use pastebook::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "PASTEBOOK_HOME";
const VERBOSE_FILTER: &str = "pastebook=debug";

pub(super) struct AppContext {
    pub api: PasteApi<FsBackend>,
    pub config: AppConfig,
    pub data_dir: PathBuf,
}

pub(super) fn init_context(verbose: bool) -> Result<AppContext> {
    let data_dir = resolve_data_dir()?;
    let loaded = AppConfig::load(&data_dir);
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => AppConfig::default(),
    };
    init_tracing(&config, verbose);
    if let Err(e) = loaded {
        tracing::warn!(error = %e, "could not read config.json, using defaults");
    }

    let backend = FsBackend::new(data_dir.clone());
    tracing::debug!(data_dir = %backend.root().display(), "opening paste store");
    let api = PasteApi::open(backend)?;

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

fn resolve_data_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        if !home.trim().is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    ProjectDirs::from("com", "pastebook", "pastebook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PasteError::Api("Could not determine data directory".to_string()))
}

fn init_tracing(config: &AppConfig, verbose: bool) {
    let fallback = if verbose {
        VERBOSE_FILTER
    } else {
        config.log_filter.as_str()
    };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("pastebook=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
