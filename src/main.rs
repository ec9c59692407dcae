use clap::Parser;
use staff_qr::core::input::load_records;
use staff_qr::core::ConfigProvider;
use staff_qr::utils::error::{ErrorSeverity, StaffQrError};
use staff_qr::utils::{logger, validation::Validate};
use staff_qr::{BadgePipeline, BatchEngine, CliConfig, EmployeeDirectory, LocalStorage, TomlConfig};

fn exit_with(e: &StaffQrError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_server_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting staff-qr");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 載入外觀設定
    if let Some(path) = &config.config {
        tracing::info!("📁 Loading render settings from: {}", path);
        match TomlConfig::from_file(path).and_then(|toml| toml.to_settings()) {
            Ok(settings) => config.settings = settings,
            Err(e) => exit_with(&e),
        }
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    if config.monitor {
        tracing::info!("🔍 Process monitoring enabled");
    }

    let storage = LocalStorage::new(".");
    let serve = config.serve;
    let bind = config.bind.clone();
    let input_path = config.input_path().to_string();

    let engine = BatchEngine::new_with_monitoring(
        BadgePipeline::new(storage.clone(), config.clone()),
        config.monitor,
    );

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ QR generation completed successfully!");
            println!("✅ QR generation completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => exit_with(&e),
    }

    if serve {
        // 查詢表只在啟動時載入一次
        let records = match load_records(&storage, &input_path).await {
            Ok(records) => records,
            Err(e) => exit_with(&e),
        };
        let directory = EmployeeDirectory::from_records(records);
        tracing::info!("Loaded {} employees for lookup", directory.len());

        let addr = bind.parse()?;
        staff_qr::server::start_server(directory, addr).await?;
    }

    Ok(())
}
