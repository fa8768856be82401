//! Common CLI types shared across commands

/// Output format options for listing commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per app (default)
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}

impl OutputFormat {
    /// Whether progress lines and markers belong on stdout.
    ///
    /// JSON output must stay parseable, so it carries nothing but the document.
    pub fn is_interactive(self) -> bool {
        matches!(self, OutputFormat::Table)
    }
}
