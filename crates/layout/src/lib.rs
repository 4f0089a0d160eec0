use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Block height {0:.2} exceeds the usable column height of {1:.2}.")]
    ElementTooLarge(f32, f32),
}

pub mod blocks;
pub mod chrome;
pub mod flow;
pub mod metrics;
pub mod surface;
pub mod text;

pub use self::flow::{Cursor, FlowController};
pub use self::metrics::FontMetrics;
pub use self::surface::{PaintElement, Stroke, Surface};

// Style and geometry types appear throughout the block signatures.
pub use kneeboard_style::{PageGeometry, TextStyle};
pub use kneeboard_types::{Color, Rect, Size};

#[cfg(test)]
mod text_test;
