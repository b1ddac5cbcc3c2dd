//! Loading the optional academy template bank from TOML.
//!
//! See `GameConfig` for the expected schema.

use serde::Deserialize;
use tracing::{error, info};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct GameConfig {
  #[serde(default)]
  pub templates: Vec<TemplateCfg>,
}

/// Academy template entry accepted in TOML configuration. `id` is optional;
/// rows without one get a generated id when the store is seeded.
#[derive(Clone, Debug, Deserialize)]
pub struct TemplateCfg {
  #[serde(default)] pub id: Option<String>,
  pub level: String,
  pub sender: String,
  pub subject: String,
  pub snippet: String,
  pub is_phish: bool,
}

/// Attempt to load `GameConfig` from GAME_CONFIG_PATH. On any parsing/IO
/// error, returns None and the built-in seed templates are used instead.
pub fn load_game_config_from_env() -> Option<GameConfig> {
  let path = std::env::var("GAME_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<GameConfig>(&s) {
      Ok(cfg) => {
        info!(target: "phishline_backend", %path, "Loaded game config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "phishline_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "phishline_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
