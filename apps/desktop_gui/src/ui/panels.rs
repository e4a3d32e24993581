//! Stateless panels projecting `SearchState` onto the window.

use eframe::egui;
use shared::domain::Movie;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CardResponse {
    pub toggle_details: bool,
    pub selected: bool,
}

pub fn details_button_label(show_details: bool) -> &'static str {
    if show_details {
        "Click to close"
    } else {
        "Click to read more..."
    }
}

pub fn movie_card(
    ui: &mut egui::Ui,
    movie: &Movie,
    show_details: bool,
    is_selected: bool,
) -> CardResponse {
    let mut response = CardResponse::default();
    let mut frame = egui::Frame::group(ui.style());
    if is_selected {
        frame = frame.stroke(ui.visuals().selection.stroke);
    }

    frame.show(ui, |ui| {
        let title = movie.title.as_deref().unwrap_or("Untitled");
        let title_label = egui::Label::new(egui::RichText::new(title).heading())
            .sense(egui::Sense::click());
        if ui.add(title_label).clicked() {
            response.selected = true;
        }

        if let Some(poster) = movie.poster.as_deref().filter(|url| !url.is_empty()) {
            ui.hyperlink_to("Poster", poster);
        }
        if let Some(plot) = movie.plot.as_deref() {
            ui.label(plot);
        }

        if show_details {
            let rows = movie.detail_rows();
            let (left, right) = rows.split_at(rows.len() / 2);
            ui.columns(2, |columns| {
                for (column, rows) in columns.iter_mut().zip([left, right]) {
                    for (label, value) in rows {
                        column.label(format!("{label}: {}", value.unwrap_or("")));
                    }
                }
            });
        }

        if ui.button(details_button_label(show_details)).clicked() {
            response.toggle_details = true;
        }
    });

    response
}

pub fn history_list(ui: &mut egui::Ui, history: &[String]) {
    for entry in history {
        ui.label(format!("• {entry}"));
    }
}

pub fn error_banner(ui: &mut egui::Ui, error: Option<&str>) {
    if let Some(error) = error {
        let color = ui.visuals().error_fg_color;
        ui.colored_label(color, error);
    }
}

#[cfg(test)]
mod tests {
    use super::details_button_label;

    #[test]
    fn details_button_label_follows_flag() {
        assert_eq!(details_button_label(false), "Click to read more...");
        assert_eq!(details_button_label(true), "Click to close");
    }
}
