//! `run` command implementation.

use anyhow::{Context, Result};
use config_loader::{parse_route_uri, ConfigLoader};
use contracts::AdapterBlueprint;
use tracing::{info, warn};

use crate::cli::RunArgs;
use crate::error::CliError;
use crate::pipeline::{InputSource, Pipeline, PipelineConfig};

/// Execute the `run` command
pub async fn run_pipeline(args: &RunArgs) -> Result<()> {
    let blueprint = resolve_blueprint(args)?;

    info!(
        routes = blueprint.routes.len(),
        buffer_size = blueprint.pipeline.buffer_size,
        "Configuration loaded"
    );

    if args.dry_run {
        info!("Dry run mode - configuration is valid, exiting");
        print_config_summary(&blueprint);
        return Ok(());
    }

    if args.metrics_port != 0 {
        observability::init_metrics_only(args.metrics_port)?;
    }

    let pipeline = Pipeline::new(PipelineConfig {
        blueprint,
        input: InputSource::from_arg(&args.input),
    });

    let stats = pipeline
        .run(shutdown_signal())
        .await
        .context("Pipeline execution failed")?;
    stats.print_summary();

    info!("rancher-logstash finished");
    Ok(())
}

/// Merge the config file, `--route` URIs and overrides into a validated blueprint
fn resolve_blueprint(args: &RunArgs) -> Result<AdapterBlueprint, CliError> {
    let mut blueprint = match &args.config {
        Some(path) => {
            info!(config = %path.display(), "Loading configuration");
            if !path.exists() {
                return Err(CliError::config_not_found(path.display().to_string()));
            }
            ConfigLoader::parse_from_path(path)?
        }
        None => AdapterBlueprint::default(),
    };

    let offset = blueprint.routes.len();
    for (idx, uri) in args.routes.iter().enumerate() {
        let route = parse_route_uri(format!("route{}", offset + idx + 1), uri)?;
        info!(route = %route.name, uri = %uri, "Adding route from command line");
        blueprint.routes.push(route);
    }

    if let Some(buffer_size) = args.buffer_size {
        blueprint.pipeline.buffer_size = buffer_size;
    }

    ConfigLoader::validate(&blueprint)?;
    Ok(blueprint)
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    warn!("Received shutdown signal, draining routes");
}

/// Print configuration summary for dry-run mode
fn print_config_summary(blueprint: &AdapterBlueprint) {
    println!("\n=== Configuration Summary ===\n");
    println!("Pipeline:");
    println!("  Buffer size: {}", blueprint.pipeline.buffer_size);
    println!("\nRoutes ({}):", blueprint.routes.len());
    for route in &blueprint.routes {
        println!(
            "  - {} ({}) queue={}",
            route.name,
            route.uri(),
            route.queue_capacity
        );
    }
    println!();
}
