//! XMPP element factory CLI
//!
//! Usage:
//!   xmpp-factory [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list      Print every registered qualified name and its element type
//!   resolve   Show which element type a qualified name resolves to
//!
//! Options:
//!   -c, --config <FILE>  Factory configuration (TOML format)
//!   --no-builtins        Do not register the built-in protocol elements
//!   -h, --help           Print help

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use xmpp_element_factory::{ConfigError, ElementFactory, FactoryConfig};

#[derive(Parser)]
#[command(name = "xmpp-factory")]
#[command(about = "Inspect the qualified-name to element-type registry")]
struct Cli {
    /// Factory configuration file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Do not register the built-in protocol elements
    #[arg(long, global = true)]
    no_builtins: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every registered qualified name and its element type
    List,

    /// Show which element type a qualified name resolves to
    Resolve {
        /// Local (unprefixed) element name
        local_name: String,

        /// Element namespace; empty when omitted
        #[arg(short, long, default_value = "")]
        namespace: String,

        /// Prefix as seen on the wire; does not affect resolution
        #[arg(short, long, default_value = "")]
        prefix: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(message) => {
                eprintln!("Error loading config '{}': {}", path.display(), message);
                std::process::exit(1);
            }
        },
        None => FactoryConfig::default(),
    };
    let config = if cli.no_builtins {
        config.with_builtins(false)
    } else {
        config
    };

    let factory = match config.build() {
        Ok(factory) => factory,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Command::List => list(&factory),
        Command::Resolve {
            local_name,
            namespace,
            prefix,
        } => resolve(&factory, &prefix, &local_name, &namespace),
    }
}

/// Read and parse a config file, rendering parse errors with source context
fn load_config(path: &Path) -> Result<FactoryConfig, String> {
    let source = fs::read_to_string(path).map_err(|e| ConfigError::from(e).to_string())?;
    FactoryConfig::from_toml(&source)
        .map_err(|e| e.format(&source, &path.display().to_string()))
}

fn list(factory: &ElementFactory) {
    let table = factory.registry().render_table();
    if table.is_empty() {
        eprintln!("No element types registered");
    } else {
        println!("{}", table);
    }
}

fn resolve(factory: &ElementFactory, prefix: &str, local_name: &str, namespace: &str) {
    let type_name = match factory.get_element_resolved(prefix, local_name, namespace) {
        Ok((type_name, _)) => type_name.unwrap_or("XmlElement (fallback)"),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    println!("{{{}}}{} -> {}", namespace, local_name, type_name);
}
