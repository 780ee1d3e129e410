use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_SAVE_FILE: &str = "wildfield_save.json";

/// Tunables for a game. `Default` gives the standard rules; `from_env` lets each be overridden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub starting_hit_points: i32,
    /// Hit points lost each time a fight goes badly.
    pub damage_per_loss: u32,
    pub target_score: u32,
    /// Pause after each line of narration.
    pub pace: Duration,
    pub seed: Option<u64>,
    pub save_path: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_hit_points: 100,
            damage_per_loss: 20,
            target_score: 10,
            pace: Duration::ZERO,
            seed: None,
            save_path: Some(PathBuf::from(DEFAULT_SAVE_FILE)),
            catalog_path: None,
        }
    }
}

impl GameConfig {
    /// Read `WILDFIELD_*` variables; anything unset or unparseable keeps its default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            starting_hit_points: parse_var_where("WILDFIELD_START_HP", |hp: &i32| *hp > 0)
                .unwrap_or(defaults.starting_hit_points),
            damage_per_loss: parse_var("WILDFIELD_DAMAGE").unwrap_or(defaults.damage_per_loss),
            target_score: parse_var_where("WILDFIELD_TARGET_SCORE", |t: &u32| *t > 0)
                .unwrap_or(defaults.target_score),
            pace: parse_var::<u64>("WILDFIELD_PACE_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.pace),
            seed: parse_var("WILDFIELD_SEED"),
            save_path: env::var_os("WILDFIELD_SAVE_FILE")
                .map(PathBuf::from)
                .or(defaults.save_path),
            catalog_path: env::var_os("WILDFIELD_CATALOG").map(PathBuf::from),
        }
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}

/// Like `parse_var`, but values failing `valid` are ignored too.
fn parse_var_where<T: FromStr>(key: &str, valid: impl Fn(&T) -> bool) -> Option<T> {
    let value = parse_var(key)?;
    if valid(&value) {
        Some(value)
    } else {
        tracing::warn!("Ignoring {}: value out of range", key);
        None
    }
}
