use clap::{Parser, Subcommand};
use gallerize::feed::FeedFormat;
use gallerize::{config, feed, output, render};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gallerize")]
#[command(about = "Static gallery page generator for image feeds")]
#[command(long_about = "\
Static gallery page generator for image feeds

Reads a CSV or XML feed of (reference, image URL) entries and writes a
single self-contained HTML page presenting the images as a paginated
gallery. Pagination runs client-side, so the page works from any file
server or straight from disk.

Feed layout:

  feed.csv                  # columns: id, image_link
  feed.xml                  # <item> elements with <reference> and <image>
  gallerize.toml            # optional: rename columns/tags, page settings

Rows or items missing either value are skipped; a feed missing a whole
column or tag is an error naming every missing field.

Run 'gallerize gen-config' to generate a documented gallerize.toml.")]
#[command(version)]
struct Cli {
    /// Feed file (defaults to feed.csv or feed.xml per chosen format)
    #[arg(long, global = true)]
    feed: Option<PathBuf>,

    /// Output HTML file
    #[arg(long, default_value = "image_gallery.html", global = true)]
    output: PathBuf,

    /// Config file
    #[arg(long, default_value = "gallerize.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read the feed and write the gallery page
    Build {
        /// Feed format
        #[arg(value_enum)]
        format: FeedFormat,
    },
    /// Validate the feed without writing output
    Check {
        /// Feed format
        #[arg(value_enum)]
        format: FeedFormat,
    },
    /// Print a stock gallerize.toml with all options documented
    GenConfig,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { format } => {
            let config = config::load_config(&cli.config)?;
            let feed_path = resolve_feed_path(cli.feed.as_deref(), format);
            let records = feed::read(&feed_path, format, &config)?;
            output::print_feed_output(&records);
            render::write(&records, &config.gallery, &cli.output)?;
            let pages = render::page_count(records.len(), config.gallery.page_size);
            output::print_gallery_output(records.len(), pages, &cli.output);
        }
        Command::Check { format } => {
            let config = config::load_config(&cli.config)?;
            let feed_path = resolve_feed_path(cli.feed.as_deref(), format);
            let records = feed::read(&feed_path, format, &config)?;
            output::print_feed_output(&records);
            println!("==> Feed is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Resolve the feed path: explicit `--feed` wins, otherwise the conventional
/// filename for the chosen format.
fn resolve_feed_path(explicit: Option<&Path>, format: FeedFormat) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(format.default_feed_name()),
    }
}
