use clap::Args;
use radit::Converter;

use crate::convert::{Conversion, print_conversions};
use crate::error::Result;
use crate::output::OutputFormat;
use crate::utils::values_or_stdin;

#[derive(Args)]
pub(crate) struct Config {
    /// OIDs in dot notation. If none are given, reads one per line from stdin
    dot: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

pub(crate) fn execute(config: Config, converter: &Converter) -> Result<()> {
    let conversions = values_or_stdin(config.dot)?
        .into_iter()
        .map(|dot| {
            let dn = converter.oid2dn(&dot);
            Conversion::new(dot, dn)
        })
        .collect::<Vec<_>>();

    print_conversions(&conversions, config.output)
}
