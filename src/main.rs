use advocate_directory::app::render;
use advocate_directory::config::{CliConfig, DirectoryConfig, OutputFormat};
use advocate_directory::utils::error::{DirectoryError, ErrorResponse, ErrorSeverity};
use advocate_directory::utils::{logger, validation::Validate};
use advocate_directory::{DirectoryService, InMemoryRepository, NanpPhoneFormatter};
use clap::Parser;
use std::io::Write;
use std::path::Path;

// 相對於目前工作目錄
const DEFAULT_DATASET: &str = "data/advocates.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置 (可選)
    let config = match &cli.config {
        Some(path) => match DirectoryConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => DirectoryConfig::default(),
    };

    // 初始化日誌
    if cli.json_logs || config.logging.json {
        logger::init_json_logger(config.logging.level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting advocate-search");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }
    if let Some(name) = &config.directory.name {
        tracing::info!("📁 Directory: {}", name);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let source = match config.resolve_source(cli.data.as_deref(), Path::new(DEFAULT_DATASET)) {
        Ok(source) => source,
        Err(e) => exit_with(&e),
    };

    let repository = match InMemoryRepository::load(source.as_ref()).await {
        Ok(repository) => repository,
        Err(e) => exit_with(&e),
    };

    let service = DirectoryService::with_settings(repository, config.query_settings());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.cities {
        let cities = service.cities();
        match cli.format {
            OutputFormat::Json => render::write_cities_json(&mut out, &cities)?,
            OutputFormat::Csv => render::write_cities_csv(&mut out, &cities)?,
        }
        writeln!(out)?;
        return Ok(());
    }

    let params = cli.query_params();
    match service.search(&params) {
        Ok(page) => {
            tracing::info!(
                "✅ Returned {} of {} matching advocates (next={:?}, prev={:?})",
                page.data.len(),
                page.total,
                page.next_cursor,
                page.prev_cursor
            );
            match cli.format {
                OutputFormat::Json => render::write_page_json(&mut out, &page)?,
                OutputFormat::Csv => render::write_page_csv(&mut out, &page, &NanpPhoneFormatter)?,
            }
            writeln!(out)?;
        }
        Err(e) => {
            // 被拒絕的請求以 JSON 回應輸出，方便呼叫端解析
            serde_json::to_writer_pretty(&mut out, &ErrorResponse::from(&e))?;
            writeln!(out)?;
            out.flush()?;
            exit_with(&e);
        }
    }

    Ok(())
}

fn exit_with(e: &DirectoryError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 2,
        ErrorSeverity::Medium => 3,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 4,
    };
    std::process::exit(exit_code);
}
