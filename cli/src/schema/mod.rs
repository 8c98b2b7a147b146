pub(crate) mod extract;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum SchemaCommands {
    /// Extract LDAP schema definitions from a draft-coretta-oiddir-schema revision
    Extract {
        #[command(flatten)]
        config: extract::Config,
    },
}
