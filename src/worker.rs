use std::error::Error;

/// Đăng ký worker script với feed server, bản desktop của bước
/// đăng ký service worker: fetch script qua HTTP counterpart của endpoint.
pub struct HttpWorkerHost {
    base_url: Option<String>,
}

impl HttpWorkerHost {
    pub fn from_endpoint(endpoint: &str) -> Self {
        Self {
            base_url: http_base(endpoint),
        }
    }

    /// Môi trường có hỗ trợ đăng ký worker không (endpoint có HTTP counterpart).
    pub fn available(&self) -> bool {
        self.base_url.is_some()
    }

    pub async fn register(&self, script: &str) -> Result<(), Box<dyn Error>> {
        let base = self
            .base_url
            .as_deref()
            .ok_or("endpoint has no http counterpart")?;
        let url = format!("{base}{script}");
        let response = reqwest::get(&url).await?;
        if !response.status().is_success() {
            return Err(format!("worker script {url} returned {}", response.status()).into());
        }
        Ok(())
    }
}

fn http_base(endpoint: &str) -> Option<String> {
    if let Some(rest) = endpoint.strip_prefix("ws://") {
        Some(format!("http://{rest}"))
    } else if let Some(rest) = endpoint.strip_prefix("wss://") {
        Some(format!("https://{rest}"))
    } else {
        None
    }
}

/// Đăng ký nếu có hỗ trợ; trả về true nếu có thử đăng ký.
/// Thất bại chỉ log warn, không retry, không ảnh hưởng phần còn lại của app.
pub async fn register_worker(host: &HttpWorkerHost, script: &str) -> bool {
    if !host.available() {
        log::debug!("Service worker capability unavailable; skipping registration");
        return false;
    }

    match host.register(script).await {
        Ok(()) => log::info!("Service worker registered"),
        Err(err) => log::warn!("Service worker registration failed: {err}"),
    }
    true
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    #[test]
    fn http_base_maps_schemes() {
        assert_eq!(
            http_base("ws://127.0.0.1:9000"),
            Some("http://127.0.0.1:9000".to_string())
        );
        assert_eq!(
            http_base("wss://feed.local:9000"),
            Some("https://feed.local:9000".to_string())
        );
        assert_eq!(http_base("udp://127.0.0.1:9000"), None);
    }

    #[tokio::test]
    async fn no_capability_skips_registration() {
        let host = HttpWorkerHost::from_endpoint("udp://127.0.0.1:9000");
        assert!(!register_worker(&host, "/service-worker.js").await);
    }

    #[tokio::test]
    async fn registers_worker_script_over_http() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let n = stream.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            stream
                .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
                .await
                .unwrap();
            request
        });

        let host = HttpWorkerHost::from_endpoint(&format!("ws://{addr}"));
        assert!(register_worker(&host, "/service-worker.js").await);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /service-worker.js "));
    }

    #[tokio::test]
    async fn missing_script_is_an_observed_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await.unwrap();
            stream
                .write_all(b"HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
                .await
                .unwrap();
        });

        let host = HttpWorkerHost::from_endpoint(&format!("ws://{addr}"));
        assert!(host.register("/service-worker.js").await.is_err());
        // register_worker nuốt lỗi: chỉ log, không panic, không retry
        assert!(register_worker(&host, "/service-worker.js").await);
    }
}
