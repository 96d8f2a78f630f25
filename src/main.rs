use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use uplink::commands::common::CatalogArgs;
use uplink::commands::encode::EncodeOptions;
use uplink::commands::{catalog, encode, render};

#[derive(Parser)]
#[command(name = "uplink")]
#[command(about = "Encode staged spacecraft commands into uplink wire strings")]
#[command(long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (default: $UPLINK_CONFIG, then ./uplink.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Command catalog file (.json, .yaml or .toml); overrides the config
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Id prefix marking argument-block commands (default: CMD000)
    #[arg(long, global = true)]
    prefix: Option<String>,

    /// Enable debug logging (UPLINK_LOG / RUST_LOG take precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog commands grouped by family
    List {
        /// Only show this family (case-insensitive)
        #[arg(short, long)]
        family: Option<String>,
    },

    /// Show one command's parameters, options and example
    Show {
        /// Command ID
        id: String,
    },

    /// Validate the catalog file
    Check,

    /// Render a single command line
    Render {
        /// Command ID
        id: String,

        /// Parameter values in schema order (dropdowns take the option value)
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Encode a staged batch into wire strings
    ///
    /// The batch is either YAML (a list of `id` + `values` records) or a text
    /// file with one rendered command line per line.
    Encode {
        /// Staged batch file
        batch: PathBuf,

        /// Write wire strings to this file (default: config `output`, else stdout)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Always write to stdout, ignoring the configured output
        #[arg(long)]
        stdout: bool,

        /// Fail without writing anything if any line raised a warning
        #[arg(long)]
        strict: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    uplink::logging::init(cli.verbose);

    let args = CatalogArgs {
        config: cli.config,
        catalog: cli.catalog,
        prefix: cli.prefix,
    };

    match cli.command {
        Commands::List { family } => catalog::list(&args, family),
        Commands::Show { id } => catalog::show(&args, &id),
        Commands::Check => catalog::check(&args),
        Commands::Render { id, values } => render::execute(&args, &id, &values),
        Commands::Encode {
            batch,
            output,
            stdout,
            strict,
        } => encode::execute(
            &args,
            EncodeOptions {
                batch,
                output,
                stdout,
                strict,
            },
        ),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "uplink", &mut std::io::stdout());
            Ok(())
        }
    }
}
