use std::io;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("reading input: {0}")]
    ReadInput(#[source] io::Error),
    #[error("writing output: {0}")]
    WriteOutput(#[source] io::Error),
    #[error("{0}")]
    Inline(#[from] operation_inliner::Error),
    #[error("{0}")]
    Split(#[from] document_splitter::SplitError),
}
