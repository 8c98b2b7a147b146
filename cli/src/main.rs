use clap::{Parser, Subcommand};
use radit::{Converter, RegistrationBase};
use tracing_subscriber::EnvFilter;

mod convert;
mod error;
mod output;
mod schema;
mod utils;

use error::Result;

use crate::schema::SchemaCommands;

#[derive(Parser)]
#[command(name = "oiddir")]
#[command(about = "OID directory RA DIT converters and schema toolkit", long_about = None)]
struct Cli {
    /// DN beneath which registration entries live
    #[arg(
        long,
        global = true,
        env = "OIDDIR_REGISTRATION_BASE",
        default_value = radit::REGISTRATION_BASE
    )]
    base: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert dot notation to registration DNs
    Oid2dn {
        #[command(flatten)]
        config: convert::oid2dn::Config,
    },
    /// Convert registration DNs to dot notation
    Dn2oid {
        #[command(flatten)]
        config: convert::dn2oid::Config,
    },
    /// Convert 1.3.6.1.4.1.56521 to its DN and back
    Demo,
    /// Schema operations
    Schema {
        #[command(subcommand)]
        command: SchemaCommands,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let converter = Converter::new(RegistrationBase::new(cli.base)?);

    match cli.command {
        Commands::Oid2dn { config } => {
            convert::oid2dn::execute(config, &converter)?;
        }
        Commands::Dn2oid { config } => {
            convert::dn2oid::execute(config, converter)?;
        }
        Commands::Demo => {
            convert::demo::execute(&converter)?;
        }
        Commands::Schema { command } => match command {
            SchemaCommands::Extract { config } => {
                schema::extract::execute(config)?;
            }
        },
    }

    Ok(())
}
