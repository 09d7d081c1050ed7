use anyhow::Context;
use clap::Parser;
use portfolio_render::core::ConfigProvider;
use portfolio_render::utils::error::ErrorSeverity;
use portfolio_render::utils::{logger, validation::Validate};
use portfolio_render::{
    source_from_config, CliConfig, ExportEngine, ExportStatus, LocalStorage, SiteConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting portfolio-render");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let exit_code = match &cli.config {
        Some(path) => {
            let config = SiteConfig::from_file(path)
                .with_context(|| format!("failed to load configuration from {}", path))?;
            run(&config).await
        }
        None => run(&cli).await,
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

async fn run<C: ConfigProvider + Validate>(config: &C) -> i32 {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        return 1;
    }

    let source = match source_from_config(config) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            return 1;
        }
    };

    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = ExportEngine::from_config(storage, source, config);

    match engine.run().await {
        Ok(report) => match report.status {
            ExportStatus::Rendered {
                skills,
                projects,
                certificates,
            } => {
                println!(
                    "✅ Rendered {} skills, {} projects, {} certificates",
                    skills, projects, certificates
                );
                println!("📁 Output saved to: {}", report.output_path);
                0
            }
            ExportStatus::Failed { cause, message } => {
                tracing::error!(
                    cause = cause.label(),
                    "❌ Portfolio data failed to load: {}",
                    message
                );
                eprintln!(
                    "❌ Unable to load content; wrote the retry page to {}",
                    report.output_path
                );
                2
            }
        },
        Err(e) => {
            tracing::error!(
                "❌ Export failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            }
        }
    }
}
