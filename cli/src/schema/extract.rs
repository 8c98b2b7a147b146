use clap::Args;
use ::schema::{Error as SchemaError, Format, Options};

use crate::error::Result;
use crate::utils::read_input;

#[derive(Clone, Copy, clap::ValueEnum)]
enum FormatType {
    /// OpenLDAP
    Openldap,
    /// 389 Directory Server (>=1.4.3)
    #[value(name = "389ds")]
    Ds389,
    /// OpenDJ
    Opendj,
}

impl From<FormatType> for Format {
    fn from(format_type: FormatType) -> Self {
        match format_type {
            FormatType::Openldap => Format::OpenLdap,
            FormatType::Ds389 => Format::Ds389,
            FormatType::Opendj => Format::OpenDj,
        }
    }
}

#[derive(Args)]
pub(crate) struct Config {
    /// Output format type
    #[arg(short = 't', long = "type", value_enum)]
    format_type: FormatType,

    /// Path to the draft-coretta-oiddir-schema revision. If not specified, reads from stdin
    #[arg(short, long)]
    file: Option<String>,

    /// No newlines in definitions
    #[arg(short, long)]
    no_newlines: bool,

    /// Use custom syntaxes (OpenDJ only)
    #[arg(short = 's', long)]
    use_custom_syntaxes: bool,

    /// Do not include eXtensions
    #[arg(short = 'x', long)]
    no_extensions: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let text = read_input(config.file.as_deref())?;

    let options = Options {
        no_newlines: config.no_newlines,
        custom_syntaxes: config.use_custom_syntaxes,
        no_extensions: config.no_extensions,
        ..Options::new(
            config.format_type.into(),
            config.file.as_deref().unwrap_or("-"),
        )
    };

    let extraction = match ::schema::extract(&text, &options) {
        Ok(extraction) => extraction,
        Err(SchemaError::NoDefinitions) => {
            println!("# No definitions parsed");
            return Err(SchemaError::NoDefinitions.into());
        }
        Err(err) => return Err(err.into()),
    };

    print!("{extraction}");
    extraction.check()?;

    Ok(())
}
