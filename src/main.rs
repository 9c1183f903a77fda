use clap::Parser;
use program_catalogue::core::export::{render, write_to};
use program_catalogue::utils::validation::{validate_catalogue, Validate};
use program_catalogue::utils::logger;
use program_catalogue::{programs, CatalogueError, CatalogueExporter, CliConfig, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_json);

    tracing::info!("Starting program-catalogue CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate().and_then(|_| validate_catalogue(programs())) {
        exit_with(e);
    }

    if config.stdout {
        let written = render(programs(), config.format)
            .and_then(|data| write_to(std::io::stdout().lock(), &data));
        if let Err(e) = written {
            exit_with(e);
        }
        return Ok(());
    }

    let exporter = CatalogueExporter::new(LocalStorage::new(config.output_path.clone()));
    match exporter.export(config.format).await {
        Ok(path) => {
            println!("Catalogue exported to: {}", path);
            Ok(())
        }
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: CatalogueError) -> ! {
    tracing::error!("Export failed: {}", e);
    eprintln!("Error: {}", e);
    std::process::exit(e.exit_code());
}
