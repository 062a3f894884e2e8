/// Data Transfer Objects for application layer
///
/// DTOs carry requests and outcomes between the use cases and the
/// adapters, keeping the domain layer isolated.
mod commit_outcome;
mod output_format;
mod selection_request;

pub use commit_outcome::CommitOutcome;
pub use output_format::OutputFormat;
pub use selection_request::SelectionRequest;
