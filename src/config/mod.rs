use crate::core::MAX_STEPS;
use crate::errors::{AppError, AppResult};
use crate::models::WrapPolicy;
use crate::models::shift_report::ShiftMeta;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Keys written by `minesim init`; used by `config --check`.
pub const CONFIG_KEYS: [&str; 10] = [
    "mine_name",
    "shift_id",
    "shift_incharge",
    "grade",
    "shovel_id",
    "recent_rows",
    "default_steps",
    "log_retention",
    "wrap_policy",
    "output_dir",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_mine_name")]
    pub mine_name: String,
    #[serde(default = "default_shift_id")]
    pub shift_id: String,
    #[serde(default = "default_shift_incharge")]
    pub shift_incharge: String,
    #[serde(default = "default_grade")]
    pub grade: String,
    #[serde(default = "default_shovel_id")]
    pub shovel_id: String,
    /// Rows shown in the live table after each refresh
    #[serde(default = "default_recent_rows")]
    pub recent_rows: usize,
    /// Refreshes performed by `run` when --steps is omitted
    #[serde(default = "default_steps")]
    pub default_steps: u32,
    /// Keep only the newest N log records (None = unbounded)
    #[serde(default)]
    pub log_retention: Option<usize>,
    #[serde(default)]
    pub wrap_policy: WrapPolicy,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_mine_name() -> String {
    "Mine A".to_string()
}
fn default_shift_id() -> String {
    "WS1".to_string()
}
fn default_shift_incharge() -> String {
    "Incharge A".to_string()
}
fn default_grade() -> String {
    "W-IV".to_string()
}
fn default_shovel_id() -> String {
    "SH-1".to_string()
}
fn default_recent_rows() -> usize {
    14
}
fn default_steps() -> u32 {
    1
}
fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mine_name: default_mine_name(),
            shift_id: default_shift_id(),
            shift_incharge: default_shift_incharge(),
            grade: default_grade(),
            shovel_id: default_shovel_id(),
            recent_rows: default_recent_rows(),
            default_steps: default_steps(),
            log_retention: None,
            wrap_policy: WrapPolicy::default(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (~/.minesim)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".minesim")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("minesim.conf")
    }

    /// Config path to use: the --config override if given, the default otherwise
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        let cfg = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                log::error!("cannot read {}: {e}", path.display());
                AppError::ConfigLoad
            })?;
            serde_yaml::from_str(&content)?
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Config::default()
        };

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_shift_id(&self.shift_id)?;

        if self.log_retention == Some(0) {
            return Err(AppError::Config(
                "log_retention must be at least 1 (omit it for an unbounded log)".into(),
            ));
        }
        if self.recent_rows == 0 {
            return Err(AppError::Config("recent_rows must be at least 1".into()));
        }
        if self.default_steps > MAX_STEPS {
            return Err(AppError::Config(format!(
                "default_steps must be at most {MAX_STEPS}"
            )));
        }
        Ok(())
    }

    pub fn shift_meta(&self) -> ShiftMeta {
        ShiftMeta {
            mine_name: self.mine_name.clone(),
            shift_incharge: self.shift_incharge.clone(),
            grade: self.grade.clone(),
        }
    }

    /// Write a default configuration file at `path`.
    pub fn init(path: &Path, force: bool) -> AppResult<Self> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let cfg = Config::default();
        fs::write(path, serde_yaml::to_string(&cfg)?)?;
        Ok(cfg)
    }
}

pub fn validate_shift_id(shift_id: &str) -> AppResult<()> {
    if shift_id.trim().is_empty() || shift_id.chars().any(char::is_whitespace) {
        return Err(AppError::InvalidShiftId(shift_id.to_string()));
    }
    Ok(())
}

/// Keys of `CONFIG_KEYS` absent from the YAML file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let Some(map) = yaml.as_mapping() else {
        return Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        )));
    };

    Ok(CONFIG_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect())
}
