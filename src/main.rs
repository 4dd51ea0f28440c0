use clap::Parser;
use org_report::adapters::render::{render, OutputFormat};
use org_report::utils::{logger, validation::Validate};
use org_report::{CliConfig, HttpDataSource, ReportEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting org-report CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let format = OutputFormat::parse("format", &config.format)?;

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 建立資料來源與報表引擎
    let source = HttpDataSource::from_config(&config);
    let engine = ReportEngine::new_with_monitoring(source, config.monitor);

    match engine.run().await {
        Ok(rows) => {
            let rendered = render(&rows, format, config.include_manager_id)?;

            match &config.output {
                Some(path) => {
                    std::fs::write(path, &rendered)?;
                    tracing::info!("✅ Report generated successfully!");
                    tracing::info!("📁 Output saved to: {}", path);
                    println!("✅ Report generated successfully!");
                    println!("📁 Output saved to: {}", path);
                }
                None => {
                    print!("{}", rendered);
                }
            }
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Report run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                org_report::utils::error::ErrorSeverity::Low => 0,
                org_report::utils::error::ErrorSeverity::Medium => 2,
                org_report::utils::error::ErrorSeverity::High => 1,
                org_report::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
