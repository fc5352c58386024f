use tracing_subscriber::EnvFilter;

use lrt_board::directory::StationDirectory;
use lrt_board::schedule::{ScheduleClient, ScheduleConfig};
use lrt_board::ui::App;

/// Log file next to the binary; the terminal itself belongs to the TUI.
const LOG_FILE: &str = "lrt-board.log";

#[tokio::main]
async fn main() {
    let log_file = std::fs::File::create(LOG_FILE).expect("failed to create log file");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    let directory = StationDirectory::new();
    let initial = directory
        .all()
        .first()
        .map(|s| s.id)
        .expect("station table is not empty");

    let client =
        ScheduleClient::new(ScheduleConfig::default()).expect("failed to create schedule client");

    let app = App::new(directory, client, initial);

    if let Err(e) = app.run().await {
        eprintln!("lrt-board: {e}");
        std::process::exit(1);
    }
}
