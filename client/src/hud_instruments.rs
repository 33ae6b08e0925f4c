use bevy::prelude::*;
use flight::SpeedModel;

use crate::scene::camera::FocusMessage;
use crate::scene::cockpit::FlightSimRes;

#[derive(Component)]
struct ThrottleReadout;

#[derive(Component)]
struct FocusBanner;

pub struct HudInstrumentsPlugin;

impl Plugin for HudInstrumentsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(Update, (update_throttle_readout, update_focus_banner));
    }
}

/// `Throttle: N%` with the throttle rounded to the nearest percent.
pub fn throttle_text(throttle: f32) -> String {
    format!("Throttle: {}%", throttle.round() as i32)
}

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..Default::default()
        },
        Text::new(throttle_text(0.0)),
        TextFont { font_size: 24.0, ..Default::default() },
        TextColor(Color::WHITE),
        ThrottleReadout,
        Name::new("Throttle Readout"),
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(24.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..Default::default()
        },
        Text::new(String::new()),
        TextFont { font_size: 20.0, ..Default::default() },
        TextColor(Color::srgb(1.0, 0.85, 0.4)),
        TextLayout::new_with_justify(JustifyText::Center),
        Visibility::Hidden,
        FocusBanner,
        Name::new("Focus Banner"),
    ));
}

fn update_throttle_readout(sim: Res<FlightSimRes>, mut q: Query<&mut Text, With<ThrottleReadout>>) {
    if !sim.is_changed() {
        return;
    }
    let Ok(mut text) = q.single_mut() else {
        return;
    };
    let throttle = sim.state.throttle;
    text.0 = match sim.spec.throttle.speed_model {
        SpeedModel::Direct => throttle_text(throttle.throttle),
        SpeedModel::Accumulated => format!("{}\nSpeed: {:.0}", throttle_text(throttle.throttle), throttle.speed),
    };
}

fn update_focus_banner(message: Res<FocusMessage>, mut q: Query<(&mut Text, &mut Visibility), With<FocusBanner>>) {
    if !message.is_changed() {
        return;
    }
    let Ok((mut text, mut vis)) = q.single_mut() else {
        return;
    };
    match &message.0 {
        Some(m) => {
            text.0 = m.clone();
            *vis = Visibility::Visible;
        }
        None => *vis = Visibility::Hidden,
    }
}
