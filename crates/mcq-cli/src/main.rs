mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mcq",
    version,
    about = "Extract multiple-choice questions from exam PDFs"
)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a PDF (or pre-extracted .txt) into question records
    Parse {
        /// Path to PDF or text file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the question records to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Inspect and validate cleaning profiles
    Profiles {
        #[command(subcommand)]
        action: ProfilesAction,
    },
    /// Run the HTTP upload server
    Serve {
        /// Address to bind
        #[arg(long, env = "MCQ_BIND", default_value = "0.0.0.0:3100")]
        bind: SocketAddr,

        /// Maximum upload size in megabytes
        #[arg(long, env = "MCQ_MAX_UPLOAD_MB", default_value_t = 50)]
        max_upload_mb: usize,

        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[derive(clap::Args)]
pub struct ProfileArgs {
    /// Predefined cleaning profile: actualtests (default), plain
    #[arg(short, long = "profile", value_name = "NAME")]
    pub preset: Option<String>,

    /// Custom JSON cleaning profile (takes precedence over --profile)
    #[arg(long = "profile-file", value_name = "FILE")]
    pub profile_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum ProfilesAction {
    /// List predefined profiles
    List,
    /// Show a predefined profile's footer patterns
    Show {
        /// Preset name (e.g., "actualtests")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom profile file
    Validate {
        /// Path to JSON profile file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
            profile,
        } => commands::parse::run(input_file, &output, out, &profile),
        Commands::Profiles { action } => match action {
            ProfilesAction::List => commands::profiles::list(),
            ProfilesAction::Show { preset } => commands::profiles::show(&preset),
            ProfilesAction::Schema => commands::profiles::schema(),
            ProfilesAction::Validate { file } => commands::profiles::validate(&file),
        },
        Commands::Serve {
            bind,
            max_upload_mb,
            profile,
        } => commands::serve::run(bind, max_upload_mb, &profile),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
