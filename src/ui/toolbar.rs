use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::tiling::{PlacementMode, PlacementSession, SessionCommand};

/// Buttons on the main toolbar, one per user-facing command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToolbarButton {
    FillArea,
    Orientation,
    Grid,
    Clear,
}

impl ToolbarButton {
    fn all() -> &'static [ToolbarButton] {
        &[
            ToolbarButton::FillArea,
            ToolbarButton::Orientation,
            ToolbarButton::Grid,
            ToolbarButton::Clear,
        ]
    }

    /// Button label (with keyboard shortcut) for the current session state
    fn label(&self, session: &PlacementSession) -> String {
        match self {
            ToolbarButton::FillArea if is_collecting(session) => "Cancel [Esc]".to_string(),
            ToolbarButton::FillArea => "Fill Area [A]".to_string(),
            ToolbarButton::Orientation => {
                format!("{} [O]", session.orientation().display_name())
            }
            ToolbarButton::Grid => "Grid [G]".to_string(),
            ToolbarButton::Clear => "Clear [Del]".to_string(),
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            ToolbarButton::FillArea => "Mark 4 wall corners and fill the area with tiles",
            ToolbarButton::Orientation => "Switch between vertical and horizontal tiles",
            ToolbarButton::Grid => "Show or hide the corner markers",
            ToolbarButton::Clear => "Remove all tiles and markers",
        }
    }

    fn is_selected(&self, session: &PlacementSession) -> bool {
        match self {
            ToolbarButton::FillArea => is_collecting(session),
            ToolbarButton::Grid => session.markers_visible(),
            ToolbarButton::Orientation | ToolbarButton::Clear => false,
        }
    }

    fn command(&self, session: &PlacementSession) -> SessionCommand {
        match self {
            ToolbarButton::FillArea if is_collecting(session) => SessionCommand::Cancel,
            ToolbarButton::FillArea => SessionCommand::StartAreaPlacement,
            ToolbarButton::Orientation => SessionCommand::ToggleOrientation,
            ToolbarButton::Grid => SessionCommand::ToggleMarkers,
            ToolbarButton::Clear => SessionCommand::ClearAll,
        }
    }
}

fn is_collecting(session: &PlacementSession) -> bool {
    session.mode() == PlacementMode::CollectingCorners
}

/// Main toolbar with the placement commands
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    session: Res<PlacementSession>,
    mut commands: MessageWriter<SessionCommand>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                for button in ToolbarButton::all() {
                    let widget = egui::Button::new(
                        egui::RichText::new(button.label(&session)).size(14.0).strong(),
                    )
                    .min_size(egui::vec2(0.0, 28.0))
                    .selected(button.is_selected(&session));

                    let response = ui.add(widget);
                    if response.clicked() {
                        commands.write(button.command(&session));
                    }
                    response.on_hover_text(button.hint());
                }

                // Right-aligned mode indicator
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode = match session.mode() {
                        PlacementMode::SingleShot => "Tap to place a tile",
                        PlacementMode::CollectingCorners => "Tap to mark a corner",
                    };
                    ui.label(egui::RichText::new(mode).color(egui::Color32::LIGHT_GRAY));
                });
            });
        });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiling::{StatusLine, TileOrientation};

    #[test]
    fn test_labels_contain_shortcuts() {
        let session = PlacementSession::default();
        for button in ToolbarButton::all() {
            let label = button.label(&session);
            assert!(label.contains('['), "Label should contain shortcut: {}", label);
            assert!(label.contains(']'), "Label should contain shortcut: {}", label);
        }
    }

    #[test]
    fn test_fill_area_becomes_cancel_while_collecting() {
        let mut session = PlacementSession::default();
        assert_eq!(
            ToolbarButton::FillArea.command(&session),
            SessionCommand::StartAreaPlacement
        );
        assert!(!ToolbarButton::FillArea.is_selected(&session));

        session.start_area_placement(&mut StatusLine::default());
        assert_eq!(ToolbarButton::FillArea.command(&session), SessionCommand::Cancel);
        assert_eq!(ToolbarButton::FillArea.label(&session), "Cancel [Esc]");
        assert!(ToolbarButton::FillArea.is_selected(&session));
    }

    #[test]
    fn test_orientation_label_follows_session() {
        let mut session = PlacementSession::default();
        assert_eq!(ToolbarButton::Orientation.label(&session), "Vertical [O]");

        session.toggle_orientation(&mut StatusLine::default());
        assert_eq!(session.orientation(), TileOrientation::Horizontal);
        assert_eq!(ToolbarButton::Orientation.label(&session), "Horizontal [O]");
    }

    #[test]
    fn test_grid_selected_when_markers_visible() {
        let session = PlacementSession::default();
        assert!(ToolbarButton::Grid.is_selected(&session));

        let hidden = PlacementSession::default().with_markers_visible(false);
        assert!(!ToolbarButton::Grid.is_selected(&hidden));
    }
}
