use clap::Args;
use radit::{Converter, RdnPolicy, ValueCase};
use tracing::warn;

use crate::convert::{Conversion, print_conversions};
use crate::error::Result;
use crate::output::OutputFormat;
use crate::utils::values_or_stdin;

#[derive(Args)]
pub(crate) struct Config {
    /// Registration DNs. If none are given, reads one per line from stdin
    dn: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Fail a DN with a component that is not attribute=value instead of dropping the component
    #[arg(long)]
    strict: bool,

    /// Keep the case of arc values instead of lowercasing them
    #[arg(long)]
    preserve_case: bool,
}

pub(crate) fn execute(config: Config, converter: Converter) -> Result<()> {
    let mut converter = converter;
    if config.strict {
        converter = converter.with_rdn_policy(RdnPolicy::Reject);
    }
    if config.preserve_case {
        converter = converter.with_value_case(ValueCase::Preserve);
    }

    let conversions = values_or_stdin(config.dn)?
        .into_iter()
        .map(|dn| {
            let dot = match converter.to_dot(&dn) {
                Ok(dot) => dot.to_string(),
                Err(err) => {
                    warn!(dn = %dn, "{err}");
                    String::new()
                }
            };
            Conversion::new(dn, dot)
        })
        .collect::<Vec<_>>();

    print_conversions(&conversions, config.output)
}
