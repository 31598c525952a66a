mod common;
mod config;
mod network;
mod ui;
mod worker;

use clap::Parser;
use dotenvy::dotenv;
use network::FeedClient;
use tokio::sync::mpsc;
use ui::LogApp;
use worker::HttpWorkerHost;

#[derive(Parser)]
#[command(
    name = "livelog",
    version,
    about = "Desktop viewer for a live WebSocket text feed"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);

    // 1. Đăng ký worker script: fire-and-forget, kết quả quan sát qua log
    let host = HttpWorkerHost::from_endpoint(&app_config.endpoint);
    let worker_script = app_config.worker_script.clone();
    tokio::spawn(async move {
        worker::register_worker(&host, &worker_script).await;
    });

    // 2. Kênh sự kiện Network -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    // 3. Khởi chạy phiên WebSocket (chạy ngầm, đúng một kết nối)
    let endpoint = app_config.endpoint.clone();
    tokio::spawn(async move {
        let client = FeedClient::new(endpoint, event_tx);
        if let Err(err) = client.run().await {
            log::error!("Feed client terminated: {err}");
        }
    });

    // 4. Khởi chạy UI (chạy trên Main Thread)
    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        "Live Log",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("LogApp should only be initialized once");

            log::info!("Viewer started, endpoint {}", app_config.endpoint);

            Ok(Box::new(LogApp::new(cc, event_receiver)))
        }),
    )
}
