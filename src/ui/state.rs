use crate::common::SessionEvent;

/// Trạng thái cục bộ của UI: log tin nhắn append-only, theo thứ tự đến.
pub struct AppState {
    pub messages: Vec<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Handler duy nhất cho cả bốn sự kiện vòng đời của phiên.
    /// Chỉ `Message` thay đổi state; ba sự kiện còn lại chỉ log chẩn đoán.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Opened => log::info!("WebSocket connected"),
            SessionEvent::Message(text) => self.messages.push(text),
            SessionEvent::Closed => log::info!("WebSocket disconnected"),
            SessionEvent::Errored(detail) => log::error!("WebSocket error: {detail}"),
        }
    }
}
