use client_core::{ClientSettings, SearchState};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::{request_history, request_search};
use crate::controller::reducer::apply_ui_event;
use crate::ui::panels::{error_banner, history_list, movie_card};

#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    pub settings: ClientSettings,
    pub initial_query: Option<String>,
}

pub struct MovieSearchApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    state: SearchState,
    query_input: String,
    status: String,
}

impl MovieSearchApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        let mut state = SearchState::new(startup.settings.failure_policy);
        let query_input = startup.initial_query.unwrap_or_default();
        state.set_query(query_input.clone());
        Self {
            cmd_tx,
            ui_rx,
            state,
            query_input,
            status: "Ready".to_string(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_ui_event(&mut self.state, &mut self.status, event);
        }
    }

    fn show_search_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let input = ui.add(
                egui::TextEdit::singleline(&mut self.query_input)
                    .hint_text("Enter movie title")
                    .desired_width(320.0),
            );
            if input.changed() {
                self.state.set_query(self.query_input.clone());
            }
            let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Search").clicked() || submitted {
                request_search(&mut self.state, &self.cmd_tx, &mut self.status);
            }
        });
    }

    fn show_results(&mut self, ui: &mut egui::Ui) {
        let Some(movie) = self.state.result() else {
            return;
        };
        let is_selected = movie.imdb_id.is_some() && movie.imdb_id.as_ref() == self.state.selected_movie();
        let card = movie_card(ui, movie, self.state.show_details(), is_selected);
        let clicked_id = card.selected.then(|| movie.imdb_id.clone()).flatten();

        if card.toggle_details {
            self.state.toggle_details();
        }
        if let Some(imdb_id) = clicked_id {
            self.state.select_movie(&imdb_id);
        }
    }

    fn show_history(&mut self, ui: &mut egui::Ui) {
        if ui.button("Search History").clicked() {
            request_history(&mut self.state, &self.cmd_tx, &mut self.status);
        }
        history_list(ui, self.state.history());
    }
}

impl eframe::App for MovieSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Search a Movie");
                ui.add_space(8.0);
                self.show_search_bar(ui);
                ui.add_space(12.0);
                self.show_results(ui);
                ui.add_space(12.0);
                self.show_history(ui);
                ui.add_space(8.0);
                error_banner(ui, self.state.error());
            });
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
