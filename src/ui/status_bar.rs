use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::theme;
use crate::tiling::{PlacementSession, StatusLine, StatusMessage};

/// Bottom bar showing the latest status message and fill progress
pub fn status_bar_ui(
    mut contexts: EguiContexts,
    status: Res<StatusLine>,
    session: Res<PlacementSession>,
) -> Result {
    egui::TopBottomPanel::bottom("status_bar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 6)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                match status.current() {
                    Some(message) => {
                        ui.colored_label(status_color(message), message.to_string());
                    }
                    None => {
                        ui.colored_label(
                            theme::HINT_TEXT,
                            "Tap to place a tile, or press A to fill an area",
                        );
                    }
                }

                if let Some(job) = session.job() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add(
                            egui::ProgressBar::new(job.placed() as f32 / job.total.max(1) as f32)
                                .desired_width(160.0)
                                .text(format!(
                                    "{}x{} grid: {}/{}",
                                    job.rows,
                                    job.cols,
                                    job.placed(),
                                    job.total
                                )),
                        );
                    });
                }
            });
        });
    Ok(())
}

fn status_color(message: StatusMessage) -> egui::Color32 {
    match message {
        StatusMessage::PoseUnavailable | StatusMessage::AreaTooLarge { .. } => {
            theme::STATUS_WARNING
        }
        _ => theme::STATUS_NORMAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_are_highlighted() {
        assert_eq!(
            status_color(StatusMessage::PoseUnavailable),
            theme::STATUS_WARNING
        );
        assert_eq!(
            status_color(StatusMessage::AreaTooLarge { tiles: 20_000 }),
            theme::STATUS_WARNING
        );
        assert_eq!(status_color(StatusMessage::TilePlaced), theme::STATUS_NORMAL);
    }
}
