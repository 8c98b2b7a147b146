pub(crate) mod demo;
pub(crate) mod dn2oid;
pub(crate) mod oid2dn;

use serde::Serialize;

use crate::error::Result;
use crate::output::OutputFormat;

/// A single converted value, keyed by what it was converted from
#[derive(Serialize)]
pub(crate) struct Conversion {
    input: String,
    output: String,
}

impl Conversion {
    pub(crate) fn new(input: String, output: String) -> Self {
        Self { input, output }
    }
}

pub(crate) fn print_conversions(conversions: &[Conversion], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for conversion in conversions {
                println!("{}", conversion.output);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(conversions)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(conversions)?);
        }
    }
    Ok(())
}
