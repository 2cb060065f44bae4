mod notifications;
mod overlays;
mod status_bar;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            (
                // Panels first so overlays fit between them
                toolbar::toolbar_ui,
                status_bar::status_bar_ui,
            )
                .chain(),
        )
        .add_systems(
            EguiPrimaryContextPass,
            (
                overlays::placement_banner_ui,
                overlays::corner_labels_ui,
                notifications::config_reset_notification_ui,
            )
                .after(status_bar::status_bar_ui),
        );
    }
}
