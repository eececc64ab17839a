use clap::Parser;
use vowel_count::core::ConfigProvider;
use vowel_count::utils::{logger, validation::Validate};
use vowel_count::{CliConfig, CountEngine, LineReader, Settings, VowelError};

fn fail(stage: &str, e: VowelError) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        fail("Configuration validation failed", e);
    }

    let settings = match Settings::resolve(&config) {
        Ok(settings) => settings,
        Err(e) => fail("Failed to load settings", e),
    };
    tracing::debug!("Effective settings: {:?}", settings);

    let mut engine = CountEngine::new(LineReader::stdin(), settings);

    let report = match engine.run().await {
        Ok(report) => report,
        Err(e) => fail("Vowel count failed", e),
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = report.write_to(&mut stdout, engine.config().format()) {
        fail("Failed to write report", e);
    }
}
