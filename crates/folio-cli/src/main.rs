//! folio CLI — content hydration for a static portfolio page
//!
//! Commands: parse, hydrate, watch, completions

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};

use folio_content::{ContentLoader, ContentWatcher, FsSource};
use folio_core::config::{SiteConfig, CONFIG_FILE};
use folio_core::frontmatter;
use folio_render::{format_patches, OutputFormat};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Front-matter driven content hydration for a static portfolio page")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SiteArgs {
    /// Site config file
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Content directory (overrides `content_root` from the config)
    #[arg(long)]
    content: Option<PathBuf>,

    /// Output format: json, table or html
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the front matter of one file as JSON
    Parse {
        /// Content file to parse
        file: PathBuf,
    },
    /// Load all content and print the page patches
    #[command(alias = "h")]
    Hydrate(SiteArgs),
    /// Hydrate, then hydrate again whenever content changes
    #[command(alias = "w")]
    Watch(SiteArgs),
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Parse { file } => parse_file(&file),
        Commands::Hydrate(args) => {
            let loader = build_loader(&args)?;
            let runtime = tokio::runtime::Runtime::new()?;
            println!("{}", runtime.block_on(hydrate_once(&loader, args.format)));
            Ok(())
        }
        Commands::Watch(args) => watch(&args),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "folio", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else if quiet {
        tracing::Level::ERROR
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_file(file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let record = frontmatter::parse(&text);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn build_loader(args: &SiteArgs) -> Result<ContentLoader<FsSource>> {
    let mut config = SiteConfig::load(&args.config)?;
    if let Some(content) = &args.content {
        config.content_root = content.clone();
    }
    let source = FsSource::new(config.content_root.clone());
    Ok(ContentLoader::new(source, config))
}

async fn hydrate_once(loader: &ContentLoader<FsSource>, format: OutputFormat) -> String {
    let site = loader.load_site().await;
    let patches = folio_render::hydrate(&site, &loader.config().links);
    format_patches(&patches, format)
}

fn watch(args: &SiteArgs) -> Result<()> {
    let loader = build_loader(args)?;
    let root = loader.config().content_root.clone();
    let runtime = tokio::runtime::Runtime::new()?;
    let watcher = ContentWatcher::start(&root)
        .with_context(|| format!("cannot watch {}", root.display()))?;

    println!("{}", runtime.block_on(hydrate_once(&loader, args.format)));
    loop {
        let Some(event) = watcher.recv_timeout(Duration::from_secs(1)) else {
            continue;
        };
        // Let the editor finish writing, then fold the burst into one run.
        std::thread::sleep(Duration::from_millis(100));
        let dropped = watcher.drain();
        tracing::info!(path = %event.path().display(), coalesced = dropped, "content changed");
        println!("{}", runtime.block_on(hydrate_once(&loader, args.format)));
    }
}
