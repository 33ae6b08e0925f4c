use std::path::Path;

use anyhow::{bail, Context, Result};
use flight::{CameraFeelSpec, CraftVariant, FlightSpec};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::args::Args;
use crate::render_settings::RenderSettings;

/// Client configuration. Every section is optional in the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub variant: CraftVariant,
    /// Overrides laid over the variant's flight preset, nested tables included.
    pub flight: Option<toml::Table>,
    /// Overrides laid over the variant's camera-feel preset.
    pub camera_feel: Option<toml::Table>,
    pub start: StartSpec,
    pub cockpit: CockpitModelSpec,
    pub render: RenderSettings,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct StartSpec {
    pub position: [f32; 3],
    /// Rotation about +Y, in degrees. 180 faces the craft toward the sun.
    pub heading_deg: f32,
}

impl Default for StartSpec {
    fn default() -> Self {
        Self {
            position: [0.0, 150.0, -3000.0],
            heading_deg: 180.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CockpitModelSpec {
    pub model_path: String,
    /// Uniform scale of the cockpit model. Camera-feel offsets are in
    /// cockpit units and scale with it.
    pub model_scale: f32,
}

impl Default for CockpitModelSpec {
    fn default() -> Self {
        Self {
            model_path: "models/cockpit2.glb".to_string(),
            model_scale: 20.0,
        }
    }
}

impl Config {
    pub fn flight_spec(&self) -> Result<FlightSpec> {
        overlay(self.variant.flight_spec(), self.flight.as_ref(), "flight")
    }

    pub fn camera_feel_spec(&self) -> Result<CameraFeelSpec> {
        overlay(self.variant.camera_feel_spec(), self.camera_feel.as_ref(), "camera_feel")
    }

    /// Command-line flags win over the file.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(v) = args.variant {
            self.variant = v.into();
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
    }
}

/// Lay `overrides` over `preset` key by key and read the result back.
fn overlay<T: Serialize + DeserializeOwned>(preset: T, overrides: Option<&toml::Table>, section: &str) -> Result<T> {
    let Some(overrides) = overrides else {
        return Ok(preset);
    };
    let toml::Value::Table(mut table) = toml::Value::try_from(preset)
        .with_context(|| format!("serializing [{section}] preset"))?
    else {
        bail!("[{section}] preset is not a table");
    };
    merge_tables(&mut table, overrides);
    toml::Value::Table(table)
        .try_into()
        .with_context(|| format!("invalid [{section}] table"))
}

fn merge_tables(base: &mut toml::Table, overrides: &toml::Table) {
    for (key, value) in overrides {
        match (base.get_mut(key), value) {
            (Some(toml::Value::Table(inner)), toml::Value::Table(over)) => merge_tables(inner, over),
            _ => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Parse and check that the override tables fit the selected preset.
pub fn parse_config(text: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(text).context("invalid client config")?;
    cfg.flight_spec()?;
    cfg.camera_feel_spec()?;
    Ok(cfg)
}

/// Load the config file at `path`, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parsing config {}", path.display()))
}
