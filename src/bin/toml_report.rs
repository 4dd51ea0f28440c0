use clap::Parser;
use org_report::adapters::render::{render, OutputFormat};
use org_report::config::toml_config::TomlConfig;
use org_report::domain::ports::ConfigProvider;
use org_report::utils::{logger, validation::Validate};
use org_report::{HttpDataSource, ReportEngine};

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "Manager report tool with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "report-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be fetched without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based report tool");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    // 顯示配置摘要
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No requests will be made");
        perform_dry_run(&config);
        return Ok(());
    }

    // 決定監控設定
    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let format = OutputFormat::parse("output.format", config.output_format())?;

    // 建立資料來源與報表引擎
    let source = HttpDataSource::from_config(&config).with_headers(config.headers());
    let engine = ReportEngine::new_with_monitoring(source, monitor_enabled);

    match engine.run().await {
        Ok(rows) => {
            let rendered = render(&rows, format, config.include_manager_id())?;

            match config.output_path() {
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

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Report: {} v{}",
        config.report.name, config.report.version
    );
    println!("  Source: {}", config.source.endpoint);
    println!("  Format: {}", config.output_format());
    println!(
        "  Output: {}",
        config.output_path().unwrap_or("stdout")
    );
    println!("  Timeout: {}s", config.timeout_seconds());

    if config.retry_attempts() > 0 {
        println!(
            "  Retries: {} (delay {}s)",
            config.retry_attempts(),
            config.retry_delay_seconds()
        );
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("📡 Data Source Analysis:");
    println!("  Endpoint: {}", config.source.endpoint);
    println!("  Requests: GET /employees, GET /departments, GET /projects");
    println!("  Timeout: {}s per request", config.timeout_seconds());

    if let Some(headers) = &config.source.headers {
        println!("  Headers: {} custom headers", headers.len());
    }

    println!();
    println!("⚙️ Aggregation:");
    println!("  Keep departments with more than 1 project and a known manager");
    println!("  Sort by project count (desc), then manager name (asc)");

    println!();
    println!("💾 Output Configuration:");
    println!("  Format: {}", config.output_format());
    println!("  Path: {}", config.output_path().unwrap_or("stdout"));
    println!("  Manager id column: {}", config.include_manager_id());

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
