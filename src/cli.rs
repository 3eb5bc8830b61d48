mod args;
mod parser;
mod tracing;

pub(crate) use args::normalize as normalize_args;
pub(crate) use parser::Cli;
pub(crate) use tracing::init as init_tracing;
