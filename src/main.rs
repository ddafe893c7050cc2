use clap::Parser;
use postfix_forwards::core::render::render_domains;
use postfix_forwards::utils::error::ErrorSeverity;
use postfix_forwards::utils::{logger, validation::Validate};
use postfix_forwards::{app, CliConfig, Command, ForwardManager, HttpBackend, Result, Settings};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ Command failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(config: CliConfig) -> Result<()> {
    // 驗證配置
    let settings = Settings::from_cli(&config)?;
    settings.validate()?;
    tracing::debug!("Using backend at {}", settings.endpoint);

    let manager = ForwardManager::new(HttpBackend::new(&settings)?);
    let command = config.command.unwrap_or(Command::List);

    app::execute(&manager, command).await?;

    print!("{}", render_domains(&manager.domains().await));
    Ok(())
}
