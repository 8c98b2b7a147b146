#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// One converted value per line
    Text,
    /// JSON array of input/output pairs
    Json,
    /// YAML sequence of input/output pairs
    Yaml,
}
