use clap::{Parser, Subcommand, ValueEnum};
use hue_engine::{DeltaEMetric, PaletteAnalyzer, SortKey};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use huepick::api;
use huepick::models::AppConfig;
use huepick::server;
use huepick::services::export::{
    css_variables, tailwind_config, text_table, token_map_json, ColorRecord, MatchRecord,
    PaletteReport,
};
use huepick::services::{load_image, load_reference_palette};

#[derive(Parser)]
#[command(name = "huepick")]
#[command(about = "Extract dominant colors from images and map them to Tailwind tokens")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "HUEPICK_CONFIG")]
    config: Option<PathBuf>,

    /// Do not download the Tailwind palette; use the built-in subset
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Listen address (overrides server.bind)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Extract a palette from an image file
    Extract {
        /// Image file (PNG, JPEG, WebP, GIF or BMP)
        image: PathBuf,

        /// Number of colors
        #[arg(short, long)]
        k: Option<usize>,

        /// Matching metric: "de2000" or "de76"
        #[arg(long)]
        metric: Option<String>,

        /// Ordering: "weight", "hue" or "luminance"
        #[arg(long)]
        sort: Option<String>,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Skip Tailwind matching
        #[arg(long)]
        no_matches: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExtractFormat::Json)]
        format: ExtractFormat,
    },
    /// Show the reference palette and where it came from
    Palette {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = PaletteFormat::Text)]
        format: PaletteFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExtractFormat {
    Json,
    Css,
    Tokens,
    Tailwind,
    Text,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PaletteFormat {
    Text,
    Json,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "huepick API",
        description = "Dominant color extraction with Tailwind matching and WCAG contrast",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_extract, api::handle_palette),
    components(schemas(
        api::ExtractResponse,
        api::PaletteResponse,
        api::ReferenceEntry,
        ColorRecord,
        MatchRecord,
        PaletteReport,
    )),
    tags(
        (name = "Palette", description = "Palette extraction and the reference palette")
    )
)]
struct ApiDoc;

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&Path>, offline: bool) -> AppConfig {
    let mut config = AppConfig::load(path);
    if offline {
        config.palette.offline = true;
    }
    config
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind } => {
            init_tracing("huepick=info,hue_engine=info,tower_http=info");
            let config = load_config(cli.config.as_deref(), cli.offline);
            run_server(config, bind).await
        }
        Commands::Extract {
            image,
            k,
            metric,
            sort,
            seed,
            no_matches,
            format,
        } => {
            init_tracing("huepick=warn,hue_engine=warn");
            let config = load_config(cli.config.as_deref(), cli.offline);
            let request = ExtractRequest {
                k,
                metric,
                sort,
                seed,
                matches: !no_matches,
            };
            run_extract_command(config, &image, request, format).await
        }
        Commands::Palette { format } => {
            init_tracing("huepick=warn");
            let config = load_config(cli.config.as_deref(), cli.offline);
            run_palette_command(config, format).await
        }
    }
}

struct ExtractRequest {
    k: Option<usize>,
    metric: Option<String>,
    sort: Option<String>,
    seed: Option<u64>,
    matches: bool,
}

/// Analyze one image and print the result (no server needed)
async fn run_extract_command(
    config: AppConfig,
    image_path: &Path,
    request: ExtractRequest,
    format: ExtractFormat,
) -> anyhow::Result<()> {
    let metric: DeltaEMetric = match request.metric {
        Some(m) => m.parse()?,
        None => config.extraction.metric()?,
    };
    let sort: SortKey = match request.sort {
        Some(s) => s.parse()?,
        None => config.extraction.sort()?,
    };
    let mut options = config.extraction.options();
    if let Some(k) = request.k {
        options = options.k(k);
    }
    if let Some(seed) = request.seed {
        options = options.seed(seed);
    }
    options.validate()?;

    let image = load_image(image_path)?;
    let (palette, origin) = load_reference_palette(&config.palette).await?;
    tracing::debug!(%origin, entries = palette.len(), "Using reference palette");

    let analysis = PaletteAnalyzer::new(palette)
        .options(options)
        .metric(metric)
        .sort_by(sort)
        .with_matches(request.matches)
        .analyze(&image)?;

    if analysis.degenerate {
        tracing::warn!(
            image = %image_path.display(),
            colors = analysis.colors.len(),
            "Image has fewer distinct colors than requested"
        );
    }

    let report = PaletteReport::from(&analysis);
    let output = match format {
        ExtractFormat::Json => serde_json::to_string_pretty(&report)?,
        ExtractFormat::Css => css_variables(&report.palette),
        ExtractFormat::Tokens => token_map_json(&report.palette),
        ExtractFormat::Tailwind => tailwind_config(&report.palette),
        ExtractFormat::Text => text_table(&report.palette),
    };
    println!("{}", output.trim_end());

    Ok(())
}

/// Print the reference palette
async fn run_palette_command(config: AppConfig, format: PaletteFormat) -> anyhow::Result<()> {
    let (palette, origin) = load_reference_palette(&config.palette).await?;

    match format {
        PaletteFormat::Json => {
            let response = api::PaletteResponse::new(&palette, &origin);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        PaletteFormat::Text => {
            println!("Reference palette: {} ({} entries)", origin, palette.len());
            println!();
            let mut current_family: Option<&str> = None;
            let mut line = String::new();
            for entry in palette.entries() {
                if current_family != Some(entry.family.as_str()) {
                    if !line.is_empty() {
                        println!("{line}");
                    }
                    line = format!("  {:<12}", entry.family);
                    current_family = Some(entry.family.as_str());
                }
                line.push_str(&format!(" {}:{}", entry.shade, entry.hex()));
            }
            if !line.is_empty() {
                println!("{line}");
            }
        }
    }

    Ok(())
}

async fn run_server(config: AppConfig, bind: Option<String>) -> anyhow::Result<()> {
    let bind_addr = bind.unwrap_or_else(|| config.server.bind.clone());

    let state = server::create_app_state(config).await?;
    tracing::info!(
        origin = %state.origin,
        entries = state.palette.len(),
        k = state.config.extraction.k,
        metric = %state.config.extraction.metric,
        "Application state ready"
    );

    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "huepick server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
