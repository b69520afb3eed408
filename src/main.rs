use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use commons_picker::{
    ConfigArgs, HostChannel, HostStatus, InteractivePicker, PhotoSource, PickerConfig,
    PickerOutcome, StdioChannel, formatters, logging,
};
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "commons-picker",
    version,
    about = "Search the Flickr Commons and hand a photo back to the program that asked for one",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start the picker with this search already running
    #[arg(short, long, default_value = "")]
    query: String,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single search and print the results
    Search {
        query: String,

        /// Page to fetch (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u64,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    JsonL,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = PickerConfig::from_args(&cli.config).context("Invalid configuration")?;

    if let Some(path) = config.log_file.clone().or_else(logging::default_log_path) {
        logging::init_tracing(&path)?;
    }

    let client = config.client().context("Failed to create HTTP client")?;
    let source: Arc<dyn PhotoSource> = Arc::new(client);

    match cli.command {
        Some(Commands::Search {
            query,
            page,
            format,
            no_color,
        }) => run_search(source.as_ref(), &query, page, format, no_color),
        None => run_picker(source, &config, &cli.query),
    }
}

fn run_picker(source: Arc<dyn PhotoSource>, config: &PickerConfig, query: &str) -> Result<()> {
    let mut channel = StdioChannel::stdout(config.request.clone());
    let request = channel.detect_request();
    let host_status = HostStatus::from_request(request.as_ref());
    info!("Starting picker: {host_status}");

    let mut picker = InteractivePicker::new(Arc::clone(&source), host_status);
    let outcome = picker.run(query);

    let result = match outcome {
        Ok(PickerOutcome::Confirmed(payload)) => {
            info!("Handing off {}", payload.download_url);
            channel
                .open_response(payload.into_offerings(source))
                .context("Failed to hand the image to the host")
        }
        Ok(PickerOutcome::Cancelled) => {
            info!("Picker cancelled");
            Ok(())
        }
        Err(err) => Err(err.context("Picker terminated unexpectedly")),
    };

    channel.close();
    result
}

fn run_search(
    source: &dyn PhotoSource,
    query: &str,
    page: u64,
    format: OutputFormat,
    no_color: bool,
) -> Result<()> {
    let results = source
        .search(query.trim(), page.max(1))
        .with_context(|| format!("Search for {query:?} failed"))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            let use_color = !no_color && io::stdout().is_terminal();
            writeln!(
                handle,
                "{}",
                formatters::format_page_text(query, &results, use_color)
            )?;
        }
        OutputFormat::Json => formatters::write_json(&mut handle, query, &results)?,
        OutputFormat::JsonL => formatters::write_jsonl(&mut handle, query, &results)?,
    }

    Ok(())
}
