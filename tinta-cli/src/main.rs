//! tinta CLI - render an HTML fragment to a PNG
//!
//! Usage:
//!   tinta                      Render the built-in sample page
//!   tinta page.html            Render a file
//!   tinta --html '<p>Hi</p>'   Render an inline fragment
//!   tinta page.html --tags     Print extracted tags as JSON
//!   tinta page.html --layout   Print the display list as JSON (no fonts needed)

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use tinta_layout::{ApproximateFontMetrics, FontFace, Painter};
use tinta_markup::extract_tags;
use tinta_render::{DEFAULT_MARKUP, DEFAULT_OUTPUT, FontConfig, RenderConfig, render_to_file};

/// tinta — render a small HTML fragment as stacked blocks into a PNG
#[derive(Parser, Debug)]
#[command(name = "tinta")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Render the built-in sample page to enhanced_rendered_website.png
    tinta

    # Render a file to a chosen path
    tinta page.html -o page.png

    # Parse inline HTML
    tinta --html "<header style='text-align: center;'>Hi</header>"

    # Use specific font files
    tinta page.html --bold-font ./fonts/Arial-Bold.ttf
"#)]
struct Cli {
    /// Path to an HTML file (defaults to the built-in sample page)
    #[arg(value_name = "FILE", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Render this HTML string instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Output PNG path
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value = "800")]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value = "600")]
    height: u32,

    /// Font file for regular text
    #[arg(long, value_name = "TTF")]
    font: Option<PathBuf>,

    /// Font file for bold text and headers
    #[arg(long, value_name = "TTF")]
    bold_font: Option<PathBuf>,

    /// Font file for italic text
    #[arg(long, value_name = "TTF")]
    italic_font: Option<PathBuf>,

    /// Print extracted tags as JSON and exit
    #[arg(long)]
    tags: bool,

    /// Print the display list (approximate metrics) as JSON and exit
    #[arg(long)]
    layout: bool,

    /// Log font resolution and layout decisions
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn markup(&self) -> Result<String> {
        if let Some(ref html) = self.html {
            Ok(html.clone())
        } else if let Some(ref path) = self.path {
            fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
        } else {
            Ok(DEFAULT_MARKUP.to_string())
        }
    }

    fn render_config(&self) -> RenderConfig {
        let mut fonts = FontConfig::default();
        for (face, path) in [
            (FontFace::Regular, &self.font),
            (FontFace::Bold, &self.bold_font),
            (FontFace::Italic, &self.italic_font),
        ] {
            if let Some(path) = path {
                fonts = fonts.with_font(face, path);
            }
        }
        RenderConfig {
            width: self.width,
            height: self.height,
            fonts,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let markup = cli.markup()?;
    let config = cli.render_config();

    if cli.tags {
        println!("{}", serde_json::to_string_pretty(&extract_tags(&markup))?);
        return Ok(());
    }

    if cli.layout {
        let painter = Painter::new(&ApproximateFontMetrics, config.layout());
        let document = painter.paint_document(&extract_tags(&markup));
        println!("{}", serde_json::to_string_pretty(&document.display_list)?);
        return Ok(());
    }

    let page = render_to_file(&markup, &config, &cli.output)?;
    println!(
        "{} {} ({} elements)",
        "Rendered".green(),
        cli.output.display(),
        page.document.elements.len()
    );
    Ok(())
}
