use clap::Parser;
use elevator_sql::core::ConfigProvider;
use elevator_sql::utils::error::{EtlError, ErrorSeverity};
use elevator_sql::utils::{logger, validation::Validate};
use elevator_sql::{CliConfig, ElevatorPipeline, EtlEngine, LocalStorage};

fn exit_with(e: &EtlError) -> ! {
    tracing::error!(
        "❌ ETL process failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 依錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting elevator-sql");
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }
    tracing::debug!("Resolved settings: {:?}", settings);

    let region_name = settings.region_name().to_string();

    let storage = LocalStorage::new(".".to_string());
    let pipeline = ElevatorPipeline::new(storage, settings);
    let engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            tracing::info!("✅ ETL process completed successfully!");
            for line in summary.console_lines(&region_name) {
                println!("{}", line);
            }
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}
