/// Sự kiện vòng đời của phiên WebSocket, gửi từ tầng mạng lên UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Opened,
    /// Payload văn bản thô của một frame, không parse.
    Message(String),
    Closed,
    Errored(String),
}
