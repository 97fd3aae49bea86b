//! qemailer - Test-report email notification service.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use qemailer::cli::{Cli, LogFormat};
use qemailer::config::Config;
use qemailer::{
    AppState, Mailer, ReportMailer, TemplateEngine, register_metric_descriptions, router,
};

/// Initialize the tracing subscriber with the specified log format.
///
/// - `LogFormat::Text`: Human-readable format for journalctl
/// - `LogFormat::Json`: Structured JSON format for log aggregation
fn init_logging(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    match format {
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .with_env_filter(filter)
                .init();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_format);

    info!(config_path = %cli.config.display(), "Loading configuration");

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, path = %cli.config.display(), "Failed to load configuration");
            std::process::exit(1);
        }
    };

    // Fail fast: report every validation error before exiting.
    info!("Validating configuration");
    if let Err(errors) = config.validate() {
        for e in &errors {
            error!(error = %e, "Configuration validation error");
        }
        error!(
            error_count = errors.len(),
            "Configuration validation failed"
        );
        std::process::exit(1);
    }

    // Validate mode: display success and exit
    if cli.validate {
        println!("Configuration is valid: {}", cli.config.display());
        println!(
            "  Listen address: {}:{}",
            config.server.bind, config.server.port
        );
        println!("  SMTP host: {}:{}", config.smtp.host, config.smtp.port);
        println!("  Sender: {} <{}>", config.email.from_name, config.email.from);
        return Ok(());
    }

    info!(config_path = %cli.config.display(), "qemailer starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(config))
}

/// Main async entry point.
async fn run(config: Config) -> Result<()> {
    let metrics_handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics recorder: {}", e))?;
    register_metric_descriptions();

    let engine = TemplateEngine::new()?;
    let mailer = Mailer::from_config(&config.smtp)?;
    let report_mailer = ReportMailer::new(
        engine,
        mailer,
        config.email.from.clone(),
        config.email.from_name.clone(),
    );

    let state = AppState {
        mailer: Arc::new(report_mailer),
        metrics: metrics_handle,
    };
    let app = router(state);

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for ctrl-c signal");
            return;
        }
        info!("Received shutdown signal, initiating graceful shutdown");
        cancel_clone.cancel();
    });

    let listener =
        tokio::net::TcpListener::bind((config.server.bind.as_str(), config.server.port)).await?;
    info!(
        bind = %config.server.bind,
        port = config.server.port,
        "Listening for report requests"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await?;

    info!("qemailer shutdown complete");
    Ok(())
}
