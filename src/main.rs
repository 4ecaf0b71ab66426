//! txt2epub - plain-text chapters to vertical EPUB3

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use txt2epub::{Book, CoverImage, EpubConfig, Metadata, Result, Work, find_work_dir};

#[derive(Parser)]
#[command(name = "txt2epub")]
#[command(version, about = "Convert Japanese plain-text chapters to EPUB3", long_about = None)]
#[command(after_help = "EXAMPLES:
    txt2epub                        Convert the first work folder under ./text
    txt2epub novels -o out          Read from ./novels, write out/<title>.epub
    txt2epub --work text/作品 --cover cover.png")]
struct Cli {
    /// Folder containing one sub-folder per work
    #[arg(value_name = "TEXT_ROOT", default_value = "text")]
    text_root: PathBuf,

    /// Use this work folder instead of the first one under TEXT_ROOT
    #[arg(long, value_name = "DIR")]
    work: Option<PathBuf>,

    /// Output directory for <title>.epub
    #[arg(short, long, value_name = "DIR", default_value = "epub-output")]
    output_dir: PathBuf,

    /// Cover image (.jpg, .jpeg or .png)
    #[arg(long, value_name = "FILE")]
    cover: Option<PathBuf>,

    /// Stylesheet to pack as stylesheet.css
    #[arg(long, value_name = "FILE")]
    stylesheet: Option<PathBuf>,

    /// Metadata JSON (title, authors, publisher, description, identifier, modified)
    #[arg(long, value_name = "FILE")]
    metadata: Option<PathBuf>,

    /// Language code written to the package and documents
    #[arg(long, default_value = "ja")]
    language: String,

    /// Left-to-right page progression
    #[arg(long)]
    ltr: bool,

    /// Show debug output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(&cli);

    match run(&cli) {
        Ok(path) => {
            if !cli.quiet {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<PathBuf> {
    let work_dir = match &cli.work {
        Some(dir) => dir.clone(),
        None => find_work_dir(&cli.text_root)?,
    };
    let work = Work::load(&work_dir)?;
    log::info!("Work: {}", work.name);

    let metadata = match &cli.metadata {
        Some(path) => {
            let mut metadata = Metadata::from_json_file(path)?;
            if metadata.title.is_empty() {
                metadata.title = work.name.clone();
            }
            metadata
        }
        None => work.metadata()?,
    };

    let config = EpubConfig::default()
        .with_language(&cli.language)
        .with_right_to_left(!cli.ltr);

    let cover = match cli.cover.clone().or_else(|| work.find_cover()) {
        Some(path) => CoverImage::load(path)?,
        None => None,
    };

    let output = cli.output_dir.join(format!("{}.epub", file_name_safe(&metadata.title)));
    let stylesheet = load_stylesheet(cli)?;

    let mut book = Book::new(metadata, config, &work.chapters).with_cover(cover);
    if let Some(css) = stylesheet {
        book = book.with_stylesheet(css);
    }
    book.write_epub(&output)?;
    Ok(output)
}

/// `--stylesheet`, else `css-template/base.css` beside the text root.
fn load_stylesheet(cli: &Cli) -> Result<Option<Vec<u8>>> {
    if let Some(path) = &cli.stylesheet {
        return Ok(Some(std::fs::read(path)?));
    }
    let template = cli
        .text_root
        .parent()
        .unwrap_or(Path::new(""))
        .join("css-template")
        .join("base.css");
    if template.is_file() {
        log::info!("Using stylesheet {}", template.display());
        return Ok(Some(std::fs::read(template)?));
    }
    log::debug!("No stylesheet template found; using the bundled one");
    Ok(None)
}

fn file_name_safe(title: &str) -> String {
    title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect()
}
