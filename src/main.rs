use clap::Parser;
use starwars_graph::core::ConfigProvider;
use starwars_graph::utils::error::{ErrorSeverity, GraphError};
use starwars_graph::utils::{logger, validation::Validate};
use starwars_graph::{build_from_config, serve, CliConfig, TomlConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting starwars-graph");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match cli.config.as_deref() {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => {
                tracing::info!("Using configuration file {}", path);
                run(&config).await
            }
            Err(e) => Err(e),
        },
        None => run(&cli).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Server failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);

        std::process::exit(exit_code(e.severity()));
    }
}

/// 啟動失敗一律以非零退出碼結束，依嚴重程度區分
fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    }
}

async fn run<C: ConfigProvider + Validate>(config: &C) -> Result<(), GraphError> {
    config.validate()?;

    let schema = build_from_config(config)?;
    serve(config, schema).await
}
