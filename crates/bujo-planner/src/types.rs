use crate::links::LinkIntent;
use crate::page_map::LogicalUnit;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Missing asset: {}", .0.display())]
    MissingAsset(PathBuf),
    #[error("Font error: {0}")]
    Font(String),
    #[error("Unknown logical unit: {0}")]
    UnknownUnit(LogicalUnit),
    #[error("Page {page} is outside the document (0..{total})")]
    OutOfRange { page: usize, total: usize },
    #[error("{}", describe_unresolved(.0))]
    UnresolvedLinks(Vec<LinkIntent>),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    /// Renaming the finished temporary file into place failed
    #[error("Failed to finalize output: {0}")]
    Persist(std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;

fn describe_unresolved(intents: &[LinkIntent]) -> String {
    let mut message = format!("{} unresolved link(s):", intents.len());
    for intent in intents {
        message.push_str(&format!(
            "\n  page {} -> {}",
            intent.source_page, intent.target
        ));
    }
    message
}
