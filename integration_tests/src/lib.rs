#[cfg(test)]
mod integration {
    use std::time::Duration;

    use anyhow::Result;
    use bevy_app::{App, Startup, Update};
    use bevy_ecs::prelude::*;
    use bevy_time::TimeUpdateStrategy;
    use bevy_transform::components::{GlobalTransform, Transform};
    use client::scene::camera::{
        handle_focus_requests, CamMode, FocusMessage, FocusRequest, ReturnToCockpit,
    };
    use client::scene::cockpit::{Cockpit, FlightSimRes};
    use client::scene::solar_system::{Planet, SolarSystemLayout};
    use client::{build_minimal_client_app, parse_config, Config, FlightControls};
    use flight::solar::Orbit;
    use flight::{craftspecs, ControlAction, CraftVariant, SpeedModel, Vec3f};

    const FRAME_DT: f32 = 1.0 / 60.0;

    fn headless_app(cfg: Config) -> Result<App> {
        let mut app = build_minimal_client_app(cfg)?;
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
            FRAME_DT,
        )));
        app.add_systems(Startup, spawn_test_cockpit);
        Ok(app)
    }

    fn spawn_test_cockpit(mut commands: Commands) {
        commands.spawn((Cockpit, Transform::default(), GlobalTransform::default()));
    }

    fn run_frames(app: &mut App, frames: usize) {
        for _ in 0..frames {
            app.update();
        }
    }

    fn sim(app: &App) -> &flight::FlightSim {
        &app.world().resource::<FlightSimRes>().0
    }

    fn hold(app: &mut App, action: ControlAction) {
        app.world_mut()
            .resource_mut::<FlightControls>()
            .set(action, true);
    }

    fn open_gate(app: &mut App) {
        app.world_mut()
            .resource_mut::<FlightSimRes>()
            .cockpit
            .resolve(Ok(()));
    }

    fn cockpit_translation(app: &mut App) -> Vec3f {
        let mut q = app.world_mut().query_filtered::<&Transform, With<Cockpit>>();
        q.single(app.world()).map(|t| t.translation).unwrap_or(Vec3f::NAN)
    }

    #[test]
    fn pending_cockpit_keeps_craft_parked() -> Result<()> {
        let mut app = headless_app(Config::default())?;
        hold(&mut app, ControlAction::ThrottleUp);
        hold(&mut app, ControlAction::PitchUp);
        let start = sim(&app).state;

        run_frames(&mut app, 120);

        assert_eq!(sim(&app).ticks(), 0);
        assert_eq!(sim(&app).state, start);
        Ok(())
    }

    #[test]
    fn ready_cockpit_flies_forward_and_moves_the_model() -> Result<()> {
        let mut app = headless_app(Config::default())?;
        run_frames(&mut app, 2);
        let start = sim(&app).state.pose.position;

        open_gate(&mut app);
        hold(&mut app, ControlAction::ThrottleUp);
        run_frames(&mut app, 180);

        let s = sim(&app);
        assert!(s.ticks() > 100, "ticks = {}", s.ticks());
        assert!(s.state.throttle.throttle > 30.0);
        assert!(s.state.throttle.speed > 0.0);
        let moved = s.state.pose.position - start;
        assert!(moved.length() > 0.0);
        // Default heading of 180 degrees points body forward along +Z.
        assert!(moved.z > 0.0, "moved = {moved:?}");

        let model = cockpit_translation(&mut app);
        assert!((model - sim(&app).state.pose.position).length() < 1e-3);
        Ok(())
    }

    #[test]
    fn stopped_sim_ignores_further_frames() -> Result<()> {
        let mut app = headless_app(Config::default())?;
        open_gate(&mut app);
        hold(&mut app, ControlAction::ThrottleUp);
        run_frames(&mut app, 30);

        app.world_mut().resource_mut::<FlightSimRes>().stop();
        let ticks = sim(&app).ticks();
        let state = sim(&app).state;
        run_frames(&mut app, 60);

        assert_eq!(sim(&app).ticks(), ticks);
        assert_eq!(sim(&app).state, state);
        Ok(())
    }

    #[test]
    fn wheel_notches_are_consumed_once() -> Result<()> {
        let mut app = headless_app(Config::default())?;
        open_gate(&mut app);
        app.world_mut()
            .resource_mut::<FlightControls>()
            .add_wheel(2.0);
        run_frames(&mut app, 10);

        let s = sim(&app);
        assert!((s.state.throttle.throttle - 2.0 * s.spec.throttle.wheel_step).abs() < 1e-4);
        assert_eq!(app.world().resource::<FlightControls>().wheel_notches, 0.0);
        Ok(())
    }

    #[test]
    fn config_selects_variant_and_start() -> Result<()> {
        let cfg = parse_config(
            r#"
            variant = "cockpit"
            seed = 7

            [start]
            position = [1.0, 2.0, 3.0]
            heading_deg = 0.0
            "#,
        )?;
        assert_eq!(cfg.variant, CraftVariant::Cockpit);
        assert_eq!(cfg.flight_spec()?.throttle.speed_model, SpeedModel::Direct);
        assert!(cfg.flight_spec()?.attitude.yaw.is_none());

        let app = headless_app(cfg)?;
        assert_eq!(sim(&app).state.pose.position, Vec3f::new(1.0, 2.0, 3.0));
        Ok(())
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(parse_config("variant = 3").is_err());
        assert!(parse_config("[start]\nposition = \"nowhere\"").is_err());
    }

    #[test]
    fn partial_tables_merge_onto_the_variant_preset() -> Result<()> {
        let cfg = parse_config(
            r#"
            variant = "cockpit"

            [flight]
            velocity_damping = 0.95

            [flight.attitude.pitch]
            max_velocity = 0.05

            [camera_feel]
            shake_limit = 0.02
            "#,
        )?;
        let flight = cfg.flight_spec()?;
        let preset = craftspecs::cockpit_spec();
        assert_eq!(flight.velocity_damping, 0.95);
        assert_eq!(flight.attitude.pitch.max_velocity, 0.05);
        assert_eq!(flight.attitude.pitch.damping, preset.attitude.pitch.damping);
        assert_eq!(flight.throttle, preset.throttle);
        assert!(flight.attitude.yaw.is_none());

        let feel = cfg.camera_feel_spec()?;
        assert_eq!(feel.shake_limit, 0.02);
        // Cockpit keeps its leans off when only the shake is tuned.
        assert_eq!(feel.inertia_intensity, 0.0);
        assert_eq!(feel.pitch_lean_gain, 0.0);
        assert_eq!(feel.yaw_lean_gain, 0.0);
        Ok(())
    }

    #[test]
    fn out_of_range_tuning_is_clamped_in_the_app() -> Result<()> {
        let cfg = parse_config("[flight]\nvelocity_damping = 1.5\ntick_dt = 0.0")?;
        let app = headless_app(cfg)?;
        let spec = sim(&app).spec;
        assert!(spec.velocity_damping < 1.0);
        assert!(spec.tick_dt > 0.0);
        Ok(())
    }

    fn focus_app() -> App {
        let mut app = App::new();
        app.add_plugins(bevy_time::TimePlugin)
            .init_resource::<SolarSystemLayout>()
            .init_resource::<CamMode>()
            .init_resource::<FocusMessage>()
            .add_event::<FocusRequest>()
            .add_event::<ReturnToCockpit>()
            .add_systems(Update, handle_focus_requests);
        app
    }

    #[test]
    fn unknown_planet_shows_a_message_and_keeps_the_cockpit_view() {
        let mut app = focus_app();
        app.world_mut().send_event(FocusRequest("Pluto".to_string()));
        app.update();

        assert_eq!(*app.world().resource::<CamMode>(), CamMode::Cockpit);
        assert_eq!(
            app.world().resource::<FocusMessage>().0.as_deref(),
            Some("Planet not found: Pluto")
        );
    }

    #[test]
    fn known_planet_switches_to_focus_and_back() {
        let mut app = focus_app();
        let (index, orbit, radius) = {
            let layout = app.world().resource::<SolarSystemLayout>();
            let (index, earth) = layout.find("earth").unwrap();
            (index, Orbit::new(earth, 0.0), earth.render_radius())
        };
        let entity = app
            .world_mut()
            .spawn((Planet { index, orbit, radius }, Transform::from_translation(orbit.position())))
            .id();

        app.world_mut().send_event(FocusRequest(" EARTH ".to_string()));
        app.update();
        assert!(matches!(
            *app.world().resource::<CamMode>(),
            CamMode::PlanetFocus { planet, .. } if planet == entity
        ));
        let message = app.world().resource::<FocusMessage>().0.clone().unwrap_or_default();
        assert!(message.starts_with("Orbiting Earth"), "{message}");

        app.world_mut().send_event(ReturnToCockpit);
        app.update();
        assert_eq!(*app.world().resource::<CamMode>(), CamMode::Cockpit);
    }
}
