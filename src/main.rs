use clap::{Parser, Subcommand, ValueEnum};
use env_resolver::config::resolve_document_path;
use env_resolver::{ResolveResult, VariableResolver};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Resolve configuration variables from a saved JSON document or the environment.",
    long_about = "Looks up variables in a JSON configuration document first and falls back to the process environment. Values can be saved to the document one at a time or imported from the whole environment."
)]
struct Args {
    /// Path of the configuration document. Defaults to $ENV_RESOLVER_DOCUMENT, then config/environment.json.
    #[arg(short, long, global = true)]
    document: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a variable: saved value first, then the environment.
    Get {
        name: String,
        #[arg(short, long, value_enum, default_value_t = Kind::String)]
        kind: Kind,
        /// Print nothing instead of failing when the variable is not set.
        #[arg(long)]
        optional: bool,
    },
    /// Read a variable from the environment only; fails if it is not set.
    Require {
        name: String,
        #[arg(short, long, value_enum, default_value_t = Kind::String)]
        kind: Kind,
    },
    /// Print the saved value of a variable, ignoring the environment.
    Saved { name: String },
    /// Save a variable to the document.
    Set { name: String, value: String },
    /// Save every environment variable to the document.
    Import,
    /// Print the document path.
    Path,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    String,
    Int,
    Bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let path = resolve_document_path(args.document.as_deref());
    let resolver = VariableResolver::open(path);

    match run(&resolver, args.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(resolver: &VariableResolver, command: Command) -> ResolveResult<ExitCode> {
    match command {
        Command::Get {
            name,
            kind,
            optional,
        } => {
            let required = !optional;
            let value = match kind {
                Kind::String => resolver.get_string(&name, required)?,
                Kind::Int => resolver.get_int(&name, required)?.map(|v| v.to_string()),
                Kind::Bool => resolver.get_bool(&name, required)?.map(|v| v.to_string()),
            };
            if let Some(value) = value {
                println!("{value}");
            }
        }
        Command::Require { name, kind } => {
            let value = match kind {
                Kind::String => resolver.required_string(&name)?,
                Kind::Int => resolver.required_int(&name)?.to_string(),
                Kind::Bool => resolver.required_bool(&name)?.to_string(),
            };
            println!("{value}");
        }
        Command::Saved { name } => match resolver.saved_value(&name) {
            Some(value) => println!("{value}"),
            None => return Ok(ExitCode::FAILURE),
        },
        Command::Set { name, value } => resolver.save_variable(&name, &value)?,
        Command::Import => {
            let count = resolver.load_from_environment()?;
            println!("{count}");
        }
        Command::Path => println!("{}", resolver.path().display()),
    }
    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
