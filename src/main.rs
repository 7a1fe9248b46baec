use bike_catalog::config::{Cli, Command, ListArgs, ShowArgs};
use bike_catalog::core::display::{render_details, render_listing};
use bike_catalog::core::export::{export_items, ExportFormat};
use bike_catalog::utils::error::{ErrorSeverity, Result};
use bike_catalog::utils::logger::{init_logger, LogFormat};
use bike_catalog::utils::validation::Validate;
use bike_catalog::{
    CatalogConfig, CatalogService, CatalogSource, JsonFileCatalog, LocalStorage, Storage,
    SupabaseCatalog,
};
use clap::Parser;
use std::io::Write;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // 初始化日誌
    let log_format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    init_logger(log_format, cli.verbose);

    tracing::info!("Starting bike-catalog CLI");
    if cli.verbose {
        tracing::debug!("CLI arguments: {:?}", cli.command);
    }

    if let Err(e) = run(cli).await {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 4,      // 查無資料
            ErrorSeverity::Medium => 2,   // 網路或服務錯誤，可重試
            ErrorSeverity::High => 1,     // 配置或檔案錯誤
            ErrorSeverity::Critical => 3, // 資料格式錯誤
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = CatalogConfig::load(cli.config.as_deref())?;
    config.apply_overrides(cli.supabase_url.clone(), cli.api_key.clone());

    let storage = LocalStorage::default();

    match &cli.from_file {
        Some(path) => {
            config.validate_offline(path)?;
            tracing::info!("📂 Browsing snapshot: {}", path);
            let source = JsonFileCatalog::new(
                storage.clone(),
                path.clone(),
                config.source.available_status.clone(),
            );
            execute(source, &cli.command, &config, &storage).await
        }
        None => {
            config.validate()?;
            tracing::info!("📡 Browsing data service: {}", config.source.url);
            let source = SupabaseCatalog::new(&config.source)?;
            execute(source, &cli.command, &config, &storage).await
        }
    }
}

async fn execute<S: CatalogSource, T: Storage>(
    source: S,
    command: &Command,
    config: &CatalogConfig,
    storage: &T,
) -> Result<()> {
    let service =
        CatalogService::with_fallback_max_price(source, config.listing.fallback_max_price);

    match command {
        Command::List(args) => list(&service, args, storage).await,
        Command::Show(args) => show(&service, args).await,
    }
}

async fn list<S: CatalogSource, T: Storage>(
    service: &CatalogService<S>,
    args: &ListArgs,
    storage: &T,
) -> Result<()> {
    args.validate()?;

    let query = args.query();
    let page = service.browse(&query).await?;

    let output = match args.format.export_format() {
        Some(format) => export_items(&page.items, format)?,
        None => render_listing(&page, &query).into_bytes(),
    };

    match &args.output {
        Some(path) => {
            storage.write_file(path, &output).await?;
            tracing::info!("📁 Listing saved to: {}", path);
            println!("📁 Output saved to: {}", path);
            Ok(())
        }
        None => print_output(&output),
    }
}

async fn show<S: CatalogSource>(service: &CatalogService<S>, args: &ShowArgs) -> Result<()> {
    let item = service.details(&args.id).await?;

    let output = match args.format.export_format() {
        Some(ExportFormat::Json) => serde_json::to_vec_pretty(&item)?,
        Some(format) => export_items(std::slice::from_ref(&item), format)?,
        None => render_details(&item).into_bytes(),
    };
    print_output(&output)
}

fn print_output(output: &[u8]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output)?;
    if !output.ends_with(b"\n") {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
