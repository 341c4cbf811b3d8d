use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use rfrender::{RenderConfig, RenderRequest, Renderer, Viewport};

const SUPPORTED_FORMATS: [&str; 4] = ["png", "jpg", "jpeg", "pdf"];

const INSTALL_HINT: &str = "Make sure Chrome/Chromium and ImageMagick are installed and accessible.
  Chrome: On macOS: Install from https://www.google.com/chrome/
  Chrome: On Linux: sudo apt install chromium-browser (Ubuntu/Debian) or equivalent
  Chrome: On Windows: Install from https://www.google.com/chrome/
  ImageMagick: On macOS: brew install imagemagick
  ImageMagick: On Linux: sudo apt install imagemagick
  ImageMagick: On Windows: Install from https://imagemagick.org/";

#[derive(Parser)]
#[command(name = "rfrender", version)]
#[command(about = "Render HTML/SVG content to an image with headless Chrome")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a file to an image using headless Chrome and ImageMagick
    Render(RenderArgs),

    /// Convert GitHub flavored markdown to html
    Md2html(Md2htmlArgs),
}

#[derive(clap::Args)]
struct Md2htmlArgs {
    /// Markdown file (stdin if not given)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Html output file (stdout if not given)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Input file (html, svg, ...)
    #[arg(short, long)]
    input: PathBuf,

    /// Output image file
    #[arg(short, long)]
    output: PathBuf,

    /// Output format: png, jpg, jpeg, pdf
    #[arg(short, long, default_value = "png")]
    format: String,

    /// Window width for rendering [default: 1000]
    #[arg(short, long)]
    width: Option<u32>,

    /// Window height for rendering [default: 2000]
    #[arg(long)]
    height: Option<u32>,

    /// Mime type or shortcut of the input (guessed from the extension if not given)
    #[arg(short, long)]
    mime: Option<String>,

    /// Base dir for relative asset urls in html input
    #[arg(short, long)]
    base: Option<PathBuf>,

    /// Browser executable (overrides RFRENDER_BROWSER)
    #[arg(long)]
    browser: Option<PathBuf>,

    /// Image conversion executable (overrides RFRENDER_CONVERTER)
    #[arg(long)]
    converter: Option<PathBuf>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_verbose(verbosity: u8) {
    let filter_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(filter_level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

/// Mime type implied by the input file's extension.
fn guess_mime(input: &Path) -> &'static str {
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());
    match ext.as_deref() {
        Some("html") | Some("htm") => "text/html",
        Some("svg") => "image/svg+xml",
        Some("xml") => "application/xml",
        _ => "text/html",
    }
}

fn normalize_format(format: &str) -> Result<String> {
    let format = format.to_lowercase();
    if !SUPPORTED_FORMATS.contains(&format.as_str()) {
        anyhow::bail!(
            "Unsupported output format: {}. Supported: {}",
            format,
            SUPPORTED_FORMATS.join(", ")
        );
    }
    Ok(format)
}

fn load_config(args: &RenderArgs) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => RenderConfig::default(),
    }
    .with_env_overrides();

    if let Some(browser) = &args.browser {
        config.browser = Some(browser.clone());
    }
    if let Some(converter) = &args.converter {
        config.converter = converter.clone();
    }
    Ok(config)
}

fn render_command(args: RenderArgs) -> Result<()> {
    let format = normalize_format(&args.format)?;
    let config = load_config(&args)?;

    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }
    let content = fs::read(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;

    let mime = args
        .mime
        .clone()
        .unwrap_or_else(|| guess_mime(&args.input).to_string());

    let viewport = Viewport {
        width: args.width.unwrap_or(config.viewport.width),
        height: args.height.unwrap_or(config.viewport.height),
    };

    log::info!(
        "Rendering {} to {} ({}x{}, format: {})",
        args.input.display(),
        args.output.display(),
        viewport.width,
        viewport.height,
        format
    );

    let mut request = RenderRequest::new(&mime, content, &format).viewport(viewport);
    if let Some(base) = &args.base {
        request = request.asset_base(base);
    }

    let image = Renderer::new(config)
        .render(&request)
        .with_context(|| format!("Failed to render content. {}", INSTALL_HINT))?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(&args.output, &image)
        .with_context(|| format!("Failed to write output file: {}", args.output.display()))?;

    log::info!("Rendered {} bytes to {}", image.len(), args.output.display());
    Ok(())
}

fn md2html_command(args: Md2htmlArgs) -> Result<()> {
    let md = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        None => {
            let mut md = String::new();
            io::stdin().read_to_string(&mut md).context("Failed to read stdin")?;
            md
        }
    };

    let html = rfrender::md::to_html(&md)?;

    match &args.output {
        Some(path) => fs::write(path, html.as_bytes())
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => println!("{}", html),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_verbose(cli.verbose);

    let res = match cli.command {
        Commands::Render(args) => render_command(args),
        Commands::Md2html(args) => md2html_command(args),
    };

    if let Err(e) = res {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
