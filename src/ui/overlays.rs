//! Overlays drawn on top of the 3D view: the corner collection banner and
//! the corner number labels.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::constants::{CORNER_COUNT, CORNER_LABEL_LIFT};
use crate::scene::{CornerMarker, ViewerCamera};
use crate::theme;
use crate::tiling::{PlacementMode, PlacementSession};

fn corner_progress(count: usize) -> String {
    format!("Corners: {}/{}", count, CORNER_COUNT)
}

/// Banner shown while corners are being collected
pub fn placement_banner_ui(
    mut contexts: EguiContexts,
    session: Res<PlacementSession>,
) -> Result {
    if session.mode() != PlacementMode::CollectingCorners {
        return Ok(());
    }

    egui::Area::new(egui::Id::new("placement_banner"))
        .anchor(egui::Align2::CENTER_TOP, [0.0, 56.0])
        .show(contexts.ctx_mut()?, |ui| {
            egui::Frame::new()
                .fill(theme::PLACEMENT_BANNER_FILL)
                .corner_radius(6)
                .inner_margin(egui::Margin::symmetric(12, 6))
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(corner_progress(session.corners().len()))
                                .color(egui::Color32::WHITE)
                                .size(16.0)
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new("Esc to cancel")
                                .color(egui::Color32::LIGHT_GRAY)
                                .size(11.0),
                        );
                    });
                });
        });
    Ok(())
}

/// Draw each visible corner's number just above its marker
pub fn corner_labels_ui(
    mut contexts: EguiContexts,
    camera_query: Query<(&Camera, &GlobalTransform), With<ViewerCamera>>,
    markers: Query<(&CornerMarker, &GlobalTransform, &Visibility)>,
) -> Result {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return Ok(());
    };

    let painter = contexts.ctx_mut()?.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("corner_labels"),
    ));

    for (marker, transform, visibility) in markers.iter() {
        if *visibility == Visibility::Hidden {
            continue;
        }

        let anchor = transform.translation() + Vec3::Y * CORNER_LABEL_LIFT;
        let Ok(screen) = camera.world_to_viewport(camera_transform, anchor) else {
            continue;
        };

        painter.text(
            egui::pos2(screen.x, screen.y),
            egui::Align2::CENTER_BOTTOM,
            marker.label.to_string(),
            egui::FontId::proportional(18.0),
            theme::CORNER_LABEL,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_progress_text() {
        assert_eq!(corner_progress(0), "Corners: 0/4");
        assert_eq!(corner_progress(3), "Corners: 3/4");
    }
}
