use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use biblio::core::catalog;
use biblio::core::config;
use biblio::core::state::App;
use biblio::core::theme::ThemePreference;
use biblio::tui;

#[derive(Parser)]
#[command(name = "biblio", about = "Terminal book catalog browser")]
struct Args {
    /// Catalog JSON file (defaults to the built-in catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Theme override
    #[arg(short, long, value_enum)]
    theme: Option<ThemePreference>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to biblio.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("biblio.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Biblio starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        config::BiblioConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        args.theme,
        args.catalog.as_deref().and_then(|p| p.to_str()),
    );

    let catalog = match &resolved.catalog_path {
        Some(path) => match catalog::load_catalog(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Cannot load catalog {}: {}", path.display(), e);
                eprintln!("biblio: cannot load catalog {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => catalog::builtin_catalog(),
    };

    let theme = resolved.theme.resolve();
    log::info!(
        "Resolved config: page_size={}, theme={:?}",
        resolved.page_size,
        theme
    );

    let app = App::new(catalog, resolved.page_size, theme);
    tui::run(app)
}
