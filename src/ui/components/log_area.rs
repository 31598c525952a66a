use eframe::egui;

/// Log cuộn dọc, luôn bám đáy để tin mới nhất hiển thị.
pub fn render(ui: &mut egui::Ui, messages: &[String]) {
    egui::ScrollArea::vertical()
        .id_salt("messages")
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                ui.label(message);
            }
        });
}
