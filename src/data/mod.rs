//! Data layer: loads tuning configuration at startup.
//!
//! This plugin runs in OnEnter(GameState::Loading), reads the RON file at
//! `CONFIG_PATH` into `FishingConfig` and `TrackLayout`, then transitions the
//! game into GameState::Playing.
//!
//! A missing file means defaults. A file that fails to parse or validate is
//! reported with `warn!` and also falls back to defaults, so a bad edit never
//! stops the game from booting.

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_all_data);
    }
}

/// Everything the config file may set. Omitted sections and fields keep
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub fishing: FishingConfig,
    pub track: TrackLayout,
}

fn load_all_data(mut commands: Commands, mut next_state: ResMut<NextState<GameState>>) {
    info!("[Data] Loading configuration from {}", CONFIG_PATH);

    let config = match load_config(Path::new(CONFIG_PATH)) {
        Ok(Some(config)) => config,
        Ok(None) => {
            info!("[Data] No config file found, using defaults");
            GameConfig::default()
        }
        Err(e) => {
            warn!("[Data] {}; using defaults", e);
            GameConfig::default()
        }
    };

    info!(
        "[Data] Fishing: {}s (+{}s cooked), {} hits, spawn {}-{}ms, hide {}-{}ms",
        config.fishing.base_seconds,
        config.fishing.cooked_bonus_seconds,
        config.fishing.hits_to_catch,
        config.fishing.spawn_delay_ms.min_ms,
        config.fishing.spawn_delay_ms.max_ms,
        config.fishing.hide_delay_ms.min_ms,
        config.fishing.hide_delay_ms.max_ms,
    );

    commands.insert_resource(config.fishing);
    commands.insert_resource(config.track);
    next_state.set(GameState::Playing);
}

/// Read and validate the config file. `Ok(None)` when the file does not exist.
pub fn load_config(path: &Path) -> Result<Option<GameConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
    parse_config(&text)
        .map(Some)
        .map_err(|e| format!("{}: {}", path.display(), e))
}

pub fn parse_config(text: &str) -> Result<GameConfig, String> {
    let config: GameConfig =
        ron::from_str(text).map_err(|e| format!("Parse failed: {}", e))?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &GameConfig) -> Result<(), String> {
    let fishing = &config.fishing;
    for (name, range) in [
        ("spawn_delay_ms", fishing.spawn_delay_ms),
        ("hide_delay_ms", fishing.hide_delay_ms),
    ] {
        if range.min_ms > range.max_ms {
            return Err(format!(
                "{}: min_ms {} is greater than max_ms {}",
                name, range.min_ms, range.max_ms
            ));
        }
        if range.max_ms == 0 {
            return Err(format!("{}: max_ms must be positive", name));
        }
    }
    if fishing.hits_to_catch == 0 {
        return Err("hits_to_catch must be at least 1".to_string());
    }
    if fishing.base_seconds == 0 {
        return Err("base_seconds must be at least 1".to_string());
    }

    let track = &config.track;
    if !(track.walk_speed > 0.0) {
        return Err(format!("walk_speed must be positive, got {}", track.walk_speed));
    }
    if track.player_half_width < 0.0
        || track.fishing_spot.half_width < 0.0
        || track.cooking_station.half_width < 0.0
    {
        return Err("half widths must not be negative".to_string());
    }
    Ok(())
}
