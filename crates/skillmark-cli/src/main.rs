use anyhow::{Context, Result, bail};
use clap::Parser;
use skillmark_config::Config;
use skillmark_engine::{document_title, io, render, standalone_page, theme::STYLESHEET};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

const FALLBACK_TITLE: &str = "Lesson";

/// Render lesson Markdown into an HTML fragment or a standalone page.
#[derive(Debug, Clone, Parser)]
#[command(name = "skillmark", version, about, long_about = None)]
struct Args {
    /// Markdown file to render (`-` or absent reads stdin)
    input: Option<PathBuf>,

    /// Output file (defaults to stdout, or `<output_dir>/<stem>.html` when configured)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap the fragment in a complete HTML document
    #[arg(long)]
    standalone: bool,

    /// Page title for standalone output
    #[arg(long)]
    title: Option<String>,

    /// Config file to use instead of ~/.config/skillmark/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }

    fn output_path(&self, config: &Config) -> Option<PathBuf> {
        if let Some(output) = &self.output {
            return Some(output.clone());
        }
        let stem = self.input_path()?.file_stem()?;
        let dir = config.output_dir.as_ref()?;
        Some(dir.join(stem).with_extension("html"))
    }

    fn page_title(&self, markdown: &str) -> String {
        self.title
            .clone()
            .or_else(|| document_title(markdown))
            .or_else(|| Some(self.input_path()?.file_stem()?.to_str()?.to_string()))
            .unwrap_or_else(|| FALLBACK_TITLE.to_string())
    }

    fn load_config(&self) -> Result<Config> {
        let loaded = match &self.config {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file does not exist: {}", path.display());
                }
                Config::load_from_path(path)?
            }
            None => Config::load()?,
        };
        Ok(loaded.unwrap_or_default())
    }
}

fn stylesheet(config: &Config) -> Result<String> {
    match &config.stylesheet {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stylesheet {}", path.display())),
        None => Ok(STYLESHEET.to_string()),
    }
}

fn build_html(args: &Args, config: &Config, markdown: &str) -> Result<String> {
    let fragment = render(markdown);
    if !(args.standalone || config.standalone) {
        return Ok(fragment);
    }
    let title = args.page_title(markdown);
    log::debug!("Standalone page titled {title:?}");
    Ok(standalone_page(&title, &fragment, &stylesheet(config)?))
}

fn read_input(args: &Args) -> Result<String> {
    match args.input_path() {
        Some(path) => io::read_markdown(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut markdown = String::new();
            std::io::stdin()
                .read_to_string(&mut markdown)
                .context("Failed to read stdin")?;
            Ok(markdown)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.load_config()?;
    let markdown = read_input(&args)?;
    let html = build_html(&args, &config, &markdown)?;

    match args.output_path(&config) {
        Some(path) => {
            io::write_html(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Rendered {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
