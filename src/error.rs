use thiserror::Error;

/// Top-level error for one document export.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Layout error: {0}")]
    Layout(#[from] kneeboard_layout::LayoutError),

    #[error("PDF rendering error: {0}")]
    Render(#[from] kneeboard_render_pdf::RenderError),

    #[error("Failed to parse record: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown document type '{0}'")]
    UnknownDocument(String),
}
