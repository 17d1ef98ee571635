//! doctab CLI - document table extraction tool

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use doctab::{
    create_or_get_processor, ClientConfig, ExportOptions, OutputFormat, ProcessorClient,
    ProvisionOutcome, SubstringRule, DEFAULT_PROCESSOR_TYPE,
};

#[derive(Parser)]
#[command(name = "doctab")]
#[command(version)]
#[command(about = "Extract document tables to CSV and XLSX via Google Document AI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process files and export their tables to spreadsheets
    Extract(ExtractArgs),

    /// Create a processor, or look up the existing one by display name
    Provision(ProvisionArgs),

    /// Show version information
    Version,
}

#[derive(Args)]
struct ExtractArgs {
    /// Input files (PDF or image)
    #[arg(value_name = "FILE", required = true)]
    inputs: Vec<PathBuf>,

    #[command(flatten)]
    connection: ConnectionArgs,

    /// Full processor resource name
    /// (projects/{p}/locations/{l}/processors/{id})
    #[arg(long, value_name = "NAME", conflicts_with = "display_name")]
    processor: Option<String>,

    /// Processor display name; provisioned first if it does not exist
    #[arg(long, value_name = "NAME")]
    display_name: Option<String>,

    /// Processor type used when provisioning
    #[arg(long, value_name = "TYPE", default_value = DEFAULT_PROCESSOR_TYPE)]
    processor_type: String,

    /// Output format
    #[arg(long, value_enum, default_value = "csv")]
    format: Format,

    /// Output directory (next to each input if not specified)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// MIME type override (detected from the extension otherwise)
    #[arg(long, value_name = "MIME")]
    mime_type: Option<String>,

    /// CSV field delimiter
    #[arg(long, value_name = "CHAR", default_value = ",")]
    delimiter: char,

    /// Omit header rows from CSV output
    #[arg(long)]
    no_header: bool,

    /// Highlight XLSX body cells containing this substring
    #[arg(long, value_name = "SUBSTRING")]
    highlight: Option<String>,
}

#[derive(Args)]
struct ProvisionArgs {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Processor display name
    #[arg(long, value_name = "NAME")]
    display_name: String,

    /// Processor type
    #[arg(long, value_name = "TYPE", default_value = DEFAULT_PROCESSOR_TYPE)]
    processor_type: String,
}

/// Connection settings, resolved once at startup and passed down explicitly.
#[derive(Args)]
struct ConnectionArgs {
    /// Cloud project identifier
    #[arg(long, value_name = "ID", env = "DOCTAB_PROJECT")]
    project: String,

    /// Region code ("us" or "eu")
    #[arg(long, value_name = "LOC", env = "DOCTAB_LOCATION", default_value = "us")]
    location: String,

    /// OAuth2 access token (e.g. from `gcloud auth print-access-token`)
    #[arg(long, value_name = "TOKEN", env = "DOCTAB_ACCESS_TOKEN", hide_env_values = true)]
    token: String,
}

impl ConnectionArgs {
    fn client(&self) -> Result<ProcessorClient, doctab::Error> {
        let config = ClientConfig::new(&self.project, &self.location, &self.token);
        ProcessorClient::new(config)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Comma-separated values
    Csv,
    /// Excel workbook with optional highlighting
    Xlsx,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => OutputFormat::Csv,
            Format::Xlsx => OutputFormat::Xlsx,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract(args) => cmd_extract(args),
        Commands::Provision(args) => cmd_provision(&args),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_extract(args: ExtractArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.delimiter.is_ascii() {
        return Err(format!("delimiter must be an ASCII character: {:?}", args.delimiter).into());
    }

    let client = args.connection.client()?;

    let processor_name = match (&args.processor, &args.display_name) {
        (Some(name), _) => name.clone(),
        (None, Some(display_name)) => {
            let provisioned =
                create_or_get_processor(&client, display_name, &args.processor_type)?;
            report_outcome(&provisioned.processor.name, provisioned.outcome);
            provisioned.processor.name
        }
        (None, None) => {
            return Err("either --processor or --display-name is required".into());
        }
    };

    let mut options = ExportOptions::new(args.format.into())
        .with_delimiter(args.delimiter as u8)
        .with_header(!args.no_header);
    if let Some(dir) = &args.output {
        std::fs::create_dir_all(dir)?;
        options = options.with_output_dir(dir);
    }
    if let Some(needle) = args.highlight {
        options = options.with_highlight_rule(SubstringRule::new(needle));
    }

    let pb = ProgressBar::new(args.inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut total_tables = 0;
    for input in &args.inputs {
        pb.set_message(input.display().to_string());

        let document =
            doctab::process_file(&client, &processor_name, input, args.mime_type.as_deref())?;
        let written = doctab::export_document(&document, input, &options)?;

        if written.is_empty() {
            pb.println(format!(
                "{} {} (no tables detected)",
                "skip".yellow(),
                input.display()
            ));
        }
        for path in &written {
            pb.println(format!("{} {}", "wrote".green(), path.display()));
        }
        total_tables += written.len();
        pb.inc(1);
    }
    pb.finish_with_message(format!("{total_tables} table(s) exported"));

    Ok(())
}

fn cmd_provision(args: &ProvisionArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = args.connection.client()?;
    let provisioned = create_or_get_processor(&client, &args.display_name, &args.processor_type)?;
    report_outcome(&provisioned.processor.name, provisioned.outcome);
    Ok(())
}

fn report_outcome(name: &str, outcome: ProvisionOutcome) {
    match outcome {
        ProvisionOutcome::Created => {
            println!("{} processor {}", "created".green().bold(), name);
        }
        ProvisionOutcome::Reused => {
            println!("{} processor {}", "reusing".cyan().bold(), name);
        }
    }
}

fn cmd_version() {
    println!("doctab {}", env!("CARGO_PKG_VERSION"));
}
