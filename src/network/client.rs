use std::error::Error;

use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite;

use crate::common::SessionEvent;

/// Phiên WebSocket nhận feed. Sở hữu endpoint và kênh sự kiện lên UI.
pub struct FeedClient {
    endpoint: String,
    event_sender: mpsc::Sender<SessionEvent>,
}

impl FeedClient {
    pub fn new(endpoint: String, event_sender: mpsc::Sender<SessionEvent>) -> Self {
        Self {
            endpoint,
            event_sender,
        }
    }

    /// Mở đúng một kết nối rồi bơm sự kiện cho đến khi transport đóng.
    /// Không retry, không reconnect.
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        log::info!("Connecting to {}", self.endpoint);

        let (mut ws_stream, _) = match tokio_tungstenite::connect_async(&self.endpoint).await {
            Ok(pair) => pair,
            Err(err) => {
                // Trình duyệt bắn `error` rồi `close`; giữ đúng thứ tự đó.
                self.event_sender
                    .send(SessionEvent::Errored(err.to_string()))
                    .await?;
                self.event_sender.send(SessionEvent::Closed).await?;
                return Ok(());
            }
        };

        self.event_sender.send(SessionEvent::Opened).await?;

        while let Some(frame) = ws_stream.next().await {
            match frame {
                Ok(tungstenite::Message::Text(text)) => {
                    self.event_sender
                        .send(SessionEvent::Message(text.to_string()))
                        .await?;
                }
                Ok(tungstenite::Message::Close(_)) => break,
                // Chỉ nhận frame text; binary/ping/pong bỏ qua
                Ok(_) => {}
                Err(err) => {
                    self.event_sender
                        .send(SessionEvent::Errored(err.to_string()))
                        .await?;
                }
            }
        }

        self.event_sender.send(SessionEvent::Closed).await?;
        Ok(())
    }
}
