use std::path::PathBuf;

/// Inline GraphQL fragments and split documents into per-file groups
#[derive(Debug, clap::Parser)]
#[command(name = "gqlsplit", version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub(crate) command: SubCommand,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum SubCommand {
    /// Expand every fragment spread and print the self-contained document
    Inline(InlineCommand),
    /// Split a document into per-file groups for code generation
    Split(SplitCommand),
}

#[derive(Debug, clap::Args)]
pub(crate) struct InlineCommand {
    /// The document to inline
    pub(crate) path: PathBuf,
}

#[derive(Debug, clap::Args)]
pub(crate) struct SplitCommand {
    /// The document to split
    pub(crate) path: PathBuf,
    /// Directory receiving the grouped files
    #[arg(long)]
    pub(crate) out_dir: PathBuf,
}
