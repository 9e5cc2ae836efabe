use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use warroom::{MessageFormat, WarRoomError};
use warroom::cli::commands;
use warroom::cli::{Output, parse_incident_link};

/// Parse message format from string
fn parse_message_format(s: &str) -> Result<MessageFormat, String> {
    s.parse()
}

#[derive(Parser)]
#[command(name = "warroom")]
#[command(
    version,
    about = "Turn a pasted monitoring alert into a war-room announcement"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the war-room message and post it to the webhook
    Post {
        #[arg(long, short = 'l', value_parser = parse_incident_link, help = "Link to the originating alert (prompted if omitted)")]
        incident_link: Option<String>,
        #[arg(long, short, help = "File holding the alert dump, '-' for stdin (opens an editor if omitted)")]
        dump: Option<PathBuf>,
        #[arg(long, help = "Webhook URL (overrides config)")]
        webhook: Option<String>,
        #[arg(long = "dry-run", help = "Print the payload instead of posting it")]
        dry_run: bool,
    },

    /// Print the message for an alert dump without posting
    Render {
        #[arg(long, short = 'l', value_parser = parse_incident_link, help = "Link to the originating alert (prompted if omitted)")]
        incident_link: Option<String>,
        #[arg(long, short, help = "File holding the alert dump, '-' for stdin (opens an editor if omitted)")]
        dump: Option<PathBuf>,
        #[arg(
            short = 'f',
            long,
            default_value = "slack",
            value_parser = parse_message_format,
            help = "Output format: slack, plain"
        )]
        format: MessageFormat,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Edit the global configuration file with $EDITOR
    Edit,
    /// Initialize the global configuration file
    Init {
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mwarroom encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let output = Output::new();
            output.error(&format!("Error: {}", e));
            if e
                .downcast_ref::<WarRoomError>()
                .is_some_and(WarRoomError::is_operator_error)
            {
                eprintln!("  Check the input or run 'warroom config show' to inspect settings.");
            }
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Post {
            incident_link,
            dump,
            webhook,
            dry_run,
        } => {
            commands::post::run(commands::post::PostOptions {
                incident_link,
                dump,
                webhook,
                dry_run,
            })?;
        }
        Commands::Render {
            incident_link,
            dump,
            format,
        } => {
            commands::render::run(incident_link, dump, format)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => commands::config::show(&format)?,
            ConfigAction::Path => commands::config::path()?,
            ConfigAction::Edit => commands::config::edit()?,
            ConfigAction::Init { force } => commands::config::init(force)?,
        },
    }

    Ok(())
}
