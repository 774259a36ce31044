use thiserror::Error;

/// Errors surfaced when loading a flow document through the strict path.
///
/// The live-editing derivation pipeline never produces these: malformed
/// input there degrades to an empty graph instead. Only callers that report
/// to a human (the CLI, batch tooling) see this type.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to read flow document: {0}")]
    Io(String),

    #[error("Failed to parse flow document YAML: {0}")]
    Yaml(String),
}
