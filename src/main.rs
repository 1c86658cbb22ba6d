use bhartee_interview::config::AppConfig;
use bhartee_interview::session::{SessionManager, spawn_sweep_task};
use bhartee_interview::web::{AppState, app_routes};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize tracing; the guard keeps the file writer flushing until exit
    let _log_guard = init_tracing(&config);

    eprintln!("🎙️  Bhartee AI interview intake v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Intake:     http://{}/", config.listen_addr());
    eprintln!("   Skills API: http://{}/api/skills", config.listen_addr());
    eprintln!("   Skills WS:  ws://{}/ws/skills", config.listen_addr());
    eprintln!(
        "   Sessions:   idle timeout {}s, cookie {:?}\n",
        config.session_idle_timeout.as_secs(),
        config.session_cookie
    );

    let sessions = SessionManager::new(config.session_idle_timeout);
    let _sweep_handle = spawn_sweep_task(sessions.clone(), config.sweep_interval);

    let app = app_routes(AppState::new(sessions, config.session_cookie.as_str()));

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!(addr = %config.listen_addr(), "HTTP server started");
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let stderr = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "bhartee-interview.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(filter).with(stderr).init();
            None
        }
    }
}
