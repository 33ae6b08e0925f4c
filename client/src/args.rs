use std::path::PathBuf;

use bevy::prelude::Resource;
use clap::{Parser, ValueEnum};
use flight::CraftVariant;

#[derive(Parser, Debug, Resource, Clone, Default)]
#[command(name = "cockpit-client")]
#[command(about = "First-person cockpit flight through a toy solar system", long_about = None)]
pub struct Args {
    /// Optional TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Flight preset; overrides the config file
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,
    /// Run the simulation without window/rendering
    #[arg(long, default_value_t = false)]
    pub headless: bool,
    /// Frames to run before exiting in headless mode
    #[arg(long, default_value_t = 600)]
    pub frames: u32,
    /// Seed for camera shake and scene scatter; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantArg {
    Cockpit,
    Spaceship,
}

impl From<VariantArg> for CraftVariant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Cockpit => CraftVariant::Cockpit,
            VariantArg::Spaceship => CraftVariant::Spaceship,
        }
    }
}
