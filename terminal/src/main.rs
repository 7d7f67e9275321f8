use ledger_terminal::app::App;
use ledger_terminal::config::AppConfig;
use ledger_terminal::debug;
use ledger_terminal::ui::LedgerWindow;
use std::process::ExitCode;

const WINDOW_TITLE: &str = "Ledger Terminal";

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    debug::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("ledger-worker")
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    let app = App::new(config, runtime.handle().clone());
    app.start();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    // The window owns the session; closing it stops polling.
    let result = eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(LedgerWindow::new(cc, app)))),
    );

    runtime.shutdown_timeout(std::time::Duration::from_secs(1));

    match result {
        Ok(()) => {
            tracing::info!("Window closed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Window failed");
            ExitCode::FAILURE
        }
    }
}
