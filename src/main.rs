use clap::{Parser, Subcommand};
use proptype::index::TypeCatalog;
use proptype::path::PropertyPath;
use proptype::{AllowedValues, TypeDescriptor, TypeResolver};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "proptype")]
#[command(about = "Configuration property type inspection and value checking", long_about = None)]
struct Cli {
    /// Type catalog (TOML) layered over the built-in platform types
    #[arg(short, long, global = true)]
    catalog: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print everything known about a type as JSON
    Describe {
        /// Type text (e.g., "java.util.Map<com.acme.Color,java.lang.Integer>")
        #[arg(value_name = "TYPE")]
        type_name: String,
    },

    /// List the values a type accepts
    Allowed {
        #[arg(value_name = "TYPE")]
        type_name: String,
    },

    /// Validate a raw property value against a type
    Check {
        #[arg(value_name = "TYPE")]
        type_name: String,

        /// Raw value as written in the configuration file
        value: String,
    },

    /// List the child properties implied by a map type
    Expand {
        #[arg(value_name = "TYPE")]
        type_name: String,
    },

    /// Print the display name of a type
    Format {
        #[arg(value_name = "TYPE")]
        type_name: String,
    },

    /// Resolve the type reached by a property path (e.g., "RED.ports[0]")
    Navigate {
        #[arg(value_name = "TYPE")]
        type_name: String,

        path: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_resolver(
    catalog: Option<&str>,
) -> Result<TypeResolver<TypeCatalog>, Box<dyn std::error::Error>> {
    let mut index = TypeCatalog::platform();
    if let Some(path) = catalog {
        index.merge(TypeCatalog::load_from_file(path)?);
    }
    Ok(TypeResolver::new(index))
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let resolver = load_resolver(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Describe { type_name } => {
            let t = TypeDescriptor::parse(&type_name)?;
            let report = resolver.report(&t);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Allowed { type_name } => {
            let t = TypeDescriptor::parse(&type_name)?;
            match resolver.get_allowed_values(&t) {
                AllowedValues::Known(values) if values.is_empty() => {
                    println!("{} accepts no values", resolver.format(&t));
                }
                AllowedValues::Known(values) => {
                    for value in values {
                        println!("{}", value);
                    }
                }
                AllowedValues::Unknown => {
                    println!("{} has no fixed set of values", resolver.format(&t));
                }
            }
        }
        Commands::Check { type_name, value } => {
            let t = TypeDescriptor::parse(&type_name)?;
            match resolver.get_parser(&t) {
                Some(parser) => {
                    let parsed = parser.parse(&value)?;
                    println!("ok: {}", serde_json::to_string(&parsed)?);
                }
                None => {
                    println!("ok: {} is not validated", resolver.format(&t));
                }
            }
        }
        Commands::Expand { type_name } => {
            let t = TypeDescriptor::parse(&type_name)?;
            let properties = resolver.expand(&t);
            if properties.is_empty() {
                println!("No properties can be derived from {}", resolver.format(&t));
            }
            for property in &properties {
                println!("{}: {}", property.name(), resolver.format(property.type_()));
            }
        }
        Commands::Format { type_name } => {
            let t = TypeDescriptor::parse(&type_name)?;
            println!("{}", resolver.format(&t));
        }
        Commands::Navigate { type_name, path } => {
            let t = TypeDescriptor::parse(&type_name)?;
            let path = PropertyPath::parse(&path)?;
            match resolver.navigate(&t, &path)? {
                Some(target) => println!("{}: {}", path, target),
                None => println!("{}: type cannot be determined", path),
            }
        }
    }

    Ok(())
}
