use std::time::Duration;

use anyhow::Result;
use bevy::app::ScheduleRunnerPlugin;
use bevy::asset::AssetPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::render::settings::{Backends, PowerPreference, RenderCreation, WgpuSettings};
use bevy::render::RenderPlugin;
use flight::{FlightSim, FlightState};
use tracing::info;

pub mod args;
pub mod config;
pub mod debug_vis;
#[cfg(feature = "windowing")]
pub mod hud_controls;
pub mod hud_instruments;
pub mod input;
pub mod labels;
pub mod render_settings;
pub mod scene;

pub use args::Args;
pub use config::{load_config, parse_config, Config};
use debug_vis::DebugVisPlugin;
#[cfg(feature = "windowing")]
use hud_controls::HudControlsPlugin;
use hud_instruments::HudInstrumentsPlugin;
pub use input::FlightControls;
use input::FlightInputPlugin;
use labels::LabelPlugin;
use render_settings::RenderSettingsPlugin;
use scene::cockpit::{CockpitRig, FlightPlugin, FlightSimRes, ShakeRng};
use scene::solar_system::SceneRng;
use scene::{ScenePlugin, SimSet};

#[cfg(feature = "windowing")]
use bevy_egui::EguiPlugin;

#[derive(Clone, Copy)]
struct ClientAppConfig {
    include_rendering: bool,
    include_ui: bool,
    include_debug: bool,
    /// Open the cockpit gate without a model and exit after `Args::frames`.
    headless_run: bool,
}

impl ClientAppConfig {
    fn full(args: &Args) -> Self {
        Self {
            include_rendering: !args.headless,
            include_ui: !args.headless,
            include_debug: !args.headless,
            headless_run: args.headless,
        }
    }

    const MINIMAL: Self = Self {
        include_rendering: false,
        include_ui: false,
        include_debug: false,
        headless_run: false,
    };
}

pub fn build_client_app(args: Args, cfg: Config) -> Result<App> {
    let config = ClientAppConfig::full(&args);
    build_client_app_with_config(args, cfg, config)
}

/// Simulation only: no window, no assets, cockpit gate left pending.
pub fn build_minimal_client_app(cfg: Config) -> Result<App> {
    build_client_app_with_config(Args::default(), cfg, ClientAppConfig::MINIMAL)
}

/// The sim as configured, at the configured start pose.
pub fn flight_sim_from_config(cfg: &Config) -> Result<FlightSim> {
    let start = FlightState::at(
        Vec3::from_array(cfg.start.position),
        Quat::from_rotation_y(cfg.start.heading_deg.to_radians()),
    );
    Ok(FlightSim::new(cfg.flight_spec()?, cfg.camera_feel_spec()?, start))
}

fn build_client_app_with_config(args: Args, cfg: Config, config: ClientAppConfig) -> Result<App> {
    let sim = flight_sim_from_config(&cfg)?;

    let mut app = App::new();

    if config.include_rendering {
        app.add_plugins((DefaultPlugins
            .set(AssetPlugin {
                file_path: "assets".into(),
                ..Default::default()
            })
            .set(RenderPlugin {
                render_creation: RenderCreation::Automatic(WgpuSettings {
                    device_label: Some("cockpit-client".into()),
                    backends: Some(Backends::from_env().unwrap_or(Backends::all())),
                    power_preference: PowerPreference::HighPerformance,
                    ..Default::default()
                }),
                ..Default::default()
            })
            // main() installs the tracing subscriber
            .disable::<LogPlugin>(),));
        #[cfg(feature = "windowing")]
        if config.include_ui {
            app.add_plugins(EguiPlugin::default());
            app.add_plugins(HudControlsPlugin);
        }
    } else if config.headless_run {
        // Pace headless frames at the tick rate so the sim sees real frame time.
        app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / 60.0,
        ))));
    } else {
        app.add_plugins(MinimalPlugins);
    }

    app.insert_resource(FlightSimRes(sim))
        .insert_resource(ShakeRng::new(cfg.seed))
        .insert_resource(SceneRng::new(cfg.seed))
        .insert_resource(CockpitRig(cfg.cockpit.clone()))
        .insert_resource(cfg.render.clone())
        .insert_resource(args.clone());

    app.configure_sets(Update, SimSet)
        .add_plugins(FlightPlugin);

    if config.include_rendering {
        app.add_plugins(FlightInputPlugin)
            .add_plugins(RenderSettingsPlugin)
            .add_plugins(ScenePlugin);
    }

    if config.include_ui {
        app.add_plugins(HudInstrumentsPlugin);
    }

    if config.include_debug {
        app.add_plugins(DebugVisPlugin);
        app.add_plugins(LabelPlugin);
    }

    if config.headless_run {
        app.add_systems(Startup, open_gate_headless)
            .add_systems(Update, exit_after_frames.after(SimSet));
    }

    Ok(app)
}

fn open_gate_headless(mut sim: ResMut<FlightSimRes>) {
    sim.cockpit.resolve(Ok(()));
    info!("Headless run: cockpit gate opened without a model");
}

fn exit_after_frames(
    args: Res<Args>,
    mut frames: Local<u32>,
    sim: Res<FlightSimRes>,
    mut exit: EventWriter<AppExit>,
) {
    *frames += 1;
    if *frames < args.frames {
        return;
    }
    let pose = sim.state.pose;
    info!(
        ticks = sim.ticks(),
        position = ?pose.position,
        speed = sim.state.throttle.speed,
        "Headless run finished"
    );
    exit.write(AppExit::Success);
}
