use eframe::egui;
use tokio::sync::mpsc;

use crate::common::SessionEvent;

use super::components::log_area;
use super::state::AppState;

pub struct LogApp {
    state: AppState,
    event_receiver: mpsc::Receiver<SessionEvent>,
}

impl LogApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        event_receiver: mpsc::Receiver<SessionEvent>,
    ) -> Self {
        Self {
            state: AppState::new(),
            event_receiver,
        }
    }

    fn handle_session_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.apply(event);
        }
    }
}

impl eframe::App for LogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_session_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Live Feed");
            ui.separator();
            log_area::render(ui, &self.state.messages);
        });

        ctx.request_repaint();
    }
}
