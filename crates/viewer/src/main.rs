mod content;

use std::path::{Path, PathBuf};

use gallery_engine::{generate, run_app, AppError, LoopConfig, SimConfig};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use content::ContentError;

const MANIFEST_ENV_VAR: &str = "GALLERY_MANIFEST";
const SIM_CONFIG_ENV_VAR: &str = "GALLERY_CONFIG";
const DEFAULT_MANIFEST_PATH: &str = "gallery.json";

#[derive(Debug, Error)]
enum ViewerError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    App(#[from] AppError),
}

fn main() {
    init_tracing();
    info!("=== Gallery Viewer Startup ===");

    if let Err(err) = run() {
        error!(error = %err, "startup_failed");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ViewerError> {
    let manifest_path = resolve_manifest_path();
    info!(manifest = %manifest_path.display(), "loading_manifest");
    let manifest = content::load_manifest(&manifest_path)?;

    let base_dir = manifest_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let verified = content::verify_artwork_images(&base_dir, &manifest.artworks);
    let placeholders = verified.iter().filter(|artwork| artwork.placeholder).count();
    info!(
        room = %manifest.room.name,
        curator = manifest.room.curator.as_deref().unwrap_or("unknown"),
        artworks = verified.len(),
        placeholders,
        "gallery_loaded"
    );

    let sim_config = match resolve_sim_config_path() {
        Some(path) => {
            info!(config = %path.display(), "loading_sim_config");
            content::load_json::<SimConfig>(&path)?
        }
        None => SimConfig::default(),
    };

    let geometry = generate(verified.len(), sim_config.player_radius);
    let loop_config = LoopConfig {
        window_title: format!("{} - Gallery Walkthrough", manifest.room.name),
        ..LoopConfig::default()
    };
    run_app(loop_config, geometry, sim_config)?;
    Ok(())
}

fn resolve_manifest_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(MANIFEST_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_PATH))
}

fn resolve_sim_config_path() -> Option<PathBuf> {
    std::env::args()
        .nth(2)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(SIM_CONFIG_ENV_VAR).map(PathBuf::from))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
