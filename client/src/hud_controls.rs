use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;
use bevy_inspector_egui::bevy_egui::EguiContexts;
use flight::solar::FocusMode;

use crate::scene::camera::{CamMode, FocusRequest, FocusSettings, ReturnToCockpit};
use crate::scene::solar_system::SolarSystemLayout;

pub struct HudControlsPlugin;

impl Plugin for HudControlsPlugin {
    fn build(&self, app: &mut App) {
        // The egui UI runs between BeginPass (PreUpdate) and EndPass (PostUpdate)
        app.add_systems(EguiPrimaryContextPass, ui_planet_panel);
    }
}

fn ui_planet_panel(
    mut egui_ctx: EguiContexts,
    layout: Res<SolarSystemLayout>,
    mode: Res<CamMode>,
    mut focus: ResMut<FocusSettings>,
    mut requests: EventWriter<FocusRequest>,
    mut returns: EventWriter<ReturnToCockpit>,
) {
    use bevy_inspector_egui::egui::*;
    let Ok(ctx) = egui_ctx.ctx_mut() else {
        return;
    };

    SidePanel::left("planet_panel")
        .exact_width(110.0)
        .show(ctx, |ui| {
            ui.heading("Planets");
            ui.add_space(8.0);

            for (i, planet) in layout.planets.iter().enumerate() {
                if ui.button(format!("{} {}", i + 1, planet.name)).clicked() {
                    requests.write(FocusRequest(planet.name.clone()));
                }
            }
            ui.add_space(8.0);

            let mut orbit = focus.0 == FocusMode::Orbit;
            if ui.checkbox(&mut orbit, "Orbit (O)").changed() {
                focus.0 = if orbit { FocusMode::Orbit } else { FocusMode::Follow };
            }

            let in_cockpit = *mode == CamMode::Cockpit;
            if ui.add_enabled(!in_cockpit, Button::new("Cockpit (C)")).clicked() {
                returns.write(ReturnToCockpit);
            }
        });
}
