use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use swatch::{ExportFormat, Gradient, GradientKind, GradientStop, PaletteGenerator};
use toolkit::api;
use toolkit::error::ToolError;
use toolkit::models::{AppConfig, SavedPalette, StoredColor, DEFAULT_CONFIG_FILE};
use toolkit::server;
use toolkit::services::{ExtractionService, FileStore, PaletteStore};

#[derive(Parser)]
#[command(name = "toolkit")]
#[command(about = "ToolKit Palette - extract, generate and export color palettes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Extract a palette from an image file
    Extract {
        /// Image file (PNG, JPEG, GIF, WebP or BMP)
        image: PathBuf,

        /// Palette size (1-8)
        #[arg(short, long)]
        count: Option<usize>,

        /// Sample every Nth pixel
        #[arg(short, long)]
        quality: Option<usize>,

        /// Output format: hex, css or design-token (alias tailwind)
        #[arg(short, long, default_value = "hex")]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate a harmonic palette
    Generate {
        /// Seed for a reproducible palette
        #[arg(short, long)]
        seed: Option<u64>,

        /// Fixed base hue in degrees
        #[arg(long)]
        base_hue: Option<u16>,

        /// Output format: hex, css or design-token (alias tailwind)
        #[arg(short, long, default_value = "hex")]
        format: ExportFormat,

        /// Save the palette under this name
        #[arg(long)]
        save: Option<String>,
    },
    /// Manage saved palettes
    Palettes {
        #[command(subcommand)]
        action: PalettesCommand,
    },
    /// Build CSS for a gradient
    Gradient {
        /// Color stop as COLOR:POSITION (e.g. '#ff0000:0'), 2 to 5 times
        #[arg(long = "stop", value_parser = parse_stop)]
        stops: Vec<GradientStop>,

        /// Radial instead of linear
        #[arg(long)]
        radial: bool,

        /// Angle in degrees for linear gradients
        #[arg(long, default_value_t = 90)]
        angle: u16,

        /// Print the Tailwind class instead of the CSS declaration
        #[arg(long)]
        tailwind: bool,

        /// Replace stop colors with random ones (seeded if given)
        #[arg(long)]
        randomize: Option<Option<u64>>,
    },
}

#[derive(Subcommand)]
enum PalettesCommand {
    /// List saved palettes
    List,
    /// Print one saved palette
    Show {
        id: String,

        /// Output format: hex, css or design-token (alias tailwind)
        #[arg(short, long, default_value = "hex")]
        format: ExportFormat,
    },
    /// Delete a saved palette
    Delete { id: String },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ToolKit Palette API",
        description = "Color extraction, palette generation and export",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_extract,
        api::handle_session_extraction,
        api::handle_generate,
        api::handle_export,
        api::handle_list_palettes,
        api::handle_create_palette,
        api::handle_get_palette,
        api::handle_delete_palette,
        api::handle_gradient,
    ),
    components(schemas(
        api::ColorJson,
        api::ExtractResponse,
        api::GenerateRequest,
        api::GenerateResponse,
        api::ExportRequest,
        api::CreatePaletteRequest,
        api::GradientKindJson,
        api::StopJson,
        api::GradientRequest,
        api::GradientResponse,
        SavedPalette,
        StoredColor,
    )),
    tags(
        (name = "Extraction", description = "Palettes from uploaded images"),
        (name = "Generation", description = "Harmonic palette generation"),
        (name = "Export", description = "Palette text formats"),
        (name = "Palettes", description = "Saved palettes"),
        (name = "Gradient", description = "CSS gradient building")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Serve) => return run_server().await,
        Some(Commands::Extract {
            image,
            count,
            quality,
            format,
            output,
        }) => run_extract_command(&image, count, quality, format, output.as_deref()),
        Some(Commands::Generate {
            seed,
            base_hue,
            format,
            save,
        }) => run_generate_command(seed, base_hue, format, save.as_deref()).await,
        Some(Commands::Palettes { action }) => run_palettes_command(action).await,
        Some(Commands::Gradient {
            stops,
            radial,
            angle,
            tailwind,
            randomize,
        }) => run_gradient_command(stops, radial, angle, tailwind, randomize),
        None => {
            run_status_command().await;
            Ok(())
        }
    };

    if let Err(e) = result {
        match e.downcast_ref::<ToolError>() {
            Some(tool_error) => eprintln!("Error: {}", tool_error.user_message()),
            None => eprintln!("Error: {e:#}"),
        }
        tracing::debug!(error = ?e, "Command failed");
        std::process::exit(1);
    }
    Ok(())
}

/// Minimal logging for one-shot commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toolkit=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

fn palette_store(config: &AppConfig) -> PaletteStore {
    let backend = Arc::new(FileStore::new(config.storage.path.clone()));
    PaletteStore::with_key(backend, config.storage.key.clone())
}

/// Write `text` to `output`, or stdout when no path is given
fn deliver(text: &str, output: Option<&Path>) -> Result<(), ToolError> {
    match output {
        Some(path) => std::fs::write(path, format!("{text}\n")).map_err(ToolError::Export),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}").map_err(ToolError::Export)
        }
    }
}

/// Extract a palette from an image file (no server needed)
fn run_extract_command(
    image: &Path,
    count: Option<usize>,
    quality: Option<usize>,
    format: ExportFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    init_cli_tracing();
    let config = AppConfig::from_env();

    let extractor = ExtractionService::new(config.extraction.clone());
    let options = extractor.options(count, quality);
    let extraction = extractor.extract_file(image, &options)?;

    deliver(&format.format(&extraction.palette), output)?;
    if let Some(path) = output {
        println!(
            "Wrote {} ({} colors, dominant {})",
            path.display(),
            extraction.palette.len(),
            extraction.dominant
        );
    }
    Ok(())
}

/// Generate a palette and optionally save it
async fn run_generate_command(
    seed: Option<u64>,
    base_hue: Option<u16>,
    format: ExportFormat,
    save: Option<&str>,
) -> anyhow::Result<()> {
    init_cli_tracing();
    let config = AppConfig::from_env();

    let generator = PaletteGenerator::new(config.generation.generator_options()).map_err(ToolError::from)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let generated = match base_hue {
        Some(hue) => generator.generate_with_base_hue(hue, &mut rng),
        None => generator.generate(&mut rng),
    }
    .map_err(ToolError::from)?;

    deliver(&format.format(generated.palette()), None)?;

    if let Some(name) = save {
        let colors = generated.colors.iter().map(StoredColor::from_generated).collect();
        let saved = palette_store(&config).save(name, colors).await?;
        println!("Saved palette {} as {:?}", saved.id, saved.name);
    }
    Ok(())
}

async fn run_palettes_command(action: PalettesCommand) -> anyhow::Result<()> {
    init_cli_tracing();
    let config = AppConfig::from_env();
    let store = palette_store(&config);

    match action {
        PalettesCommand::List => {
            let palettes = store.list().await?;
            if palettes.is_empty() {
                println!("No saved palettes.");
            }
            for palette in palettes {
                let hexes: Vec<&str> = palette.colors.iter().map(|c| c.hex.as_str()).collect();
                println!(
                    "{}  {}  {}  {}",
                    palette.id,
                    palette.created_at.format("%Y-%m-%d %H:%M"),
                    palette.name,
                    hexes.join(" ")
                );
            }
        }
        PalettesCommand::Show { id, format } => {
            let palette = store
                .get(&id)
                .await?
                .ok_or_else(|| anyhow::anyhow!("No saved palette with id {id}"))?;
            let colors = palette.palette().map_err(ToolError::from)?;
            deliver(&format.format(&colors), None)?;
        }
        PalettesCommand::Delete { id } => {
            if store.delete(&id).await? {
                println!("Deleted palette {id}");
            } else {
                anyhow::bail!("No saved palette with id {id}");
            }
        }
    }
    Ok(())
}

/// Parse a COLOR:POSITION gradient stop
fn parse_stop(s: &str) -> Result<GradientStop, String> {
    let (color, position) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected COLOR:POSITION, got {s:?}"))?;
    let color = color.parse().map_err(|e| format!("{color:?}: {e}"))?;
    let position = position
        .trim()
        .trim_end_matches('%')
        .parse()
        .map_err(|e| format!("{position:?}: {e}"))?;
    Ok(GradientStop::new(color, position))
}

fn run_gradient_command(
    stops: Vec<GradientStop>,
    radial: bool,
    angle: u16,
    tailwind: bool,
    randomize: Option<Option<u64>>,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let kind = if radial {
        GradientKind::Radial
    } else {
        GradientKind::Linear { angle }
    };
    let mut gradient = if stops.is_empty() {
        let mut gradient = Gradient::default();
        gradient.set_kind(kind).map_err(ToolError::from)?;
        gradient
    } else {
        Gradient::new(kind, stops).map_err(ToolError::from)?
    };

    if let Some(seed) = randomize {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        gradient.randomize(&mut rng);
    }

    let text = if tailwind {
        gradient.tailwind_class()
    } else {
        gradient.declaration()
    };
    deliver(&text, None)?;
    Ok(())
}

/// Display status and configuration information
async fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let palette_store_env = std::env::var("PALETTE_STORE").ok();

    println!("ToolKit Palette v{VERSION}");
    println!("Color extraction, palette generation and export\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR     = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE   = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  PALETTE_STORE = {}",
        palette_store_env.as_deref().unwrap_or("(not set)")
    );

    let config_path = PathBuf::from(config_file.as_deref().unwrap_or(DEFAULT_CONFIG_FILE));
    let config_source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        format!("defaults ({} not found)", config_path.display())
    };
    let config = AppConfig::from_env();

    println!("\nConfiguration:");
    println!("  Source:     {config_source}");
    println!(
        "  Extraction: {} colors, every {} px, max upload {} bytes",
        config.extraction.max_colors, config.extraction.quality, config.extraction.max_upload_bytes
    );
    println!(
        "  Generation: {} colors, {}° apart, S {}-{}%, L {}-{}%",
        config.generation.count,
        config.generation.hue_step,
        config.generation.saturation_min,
        config.generation.saturation_max,
        config.generation.lightness_min,
        config.generation.lightness_max
    );

    let saved = match palette_store(&config).list().await {
        Ok(palettes) => format!("{} saved", palettes.len()),
        Err(e) => format!("unreadable ({e})"),
    };
    println!("  Store:      {} ({saved})", config.storage.path.display());

    println!("\nCommands:");
    println!("  toolkit serve      Start the HTTP server");
    println!("  toolkit extract    Extract a palette from an image");
    println!("  toolkit generate   Generate a harmonic palette");
    println!("  toolkit palettes   List, show or delete saved palettes");
    println!("  toolkit gradient   Build CSS for a gradient");
    println!("\nRun 'toolkit --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toolkit=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = AppConfig::from_env();

    tracing::info!(
        store = %config.storage.path.display(),
        key = %config.storage.key,
        max_upload_bytes = config.extraction.max_upload_bytes,
        "Palette store configured"
    );

    let backend = Arc::new(FileStore::new(config.storage.path.clone()));
    let state = server::create_app_state(config, backend)?;

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "ToolKit server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
