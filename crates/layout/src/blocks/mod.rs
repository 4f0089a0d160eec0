//! Flowable content blocks.
//!
//! A block is anything the flow controller can place in a column: it reports
//! its height for a given width, then paints itself at a cursor. Measure and
//! render must agree, so both run the same line computation.

pub mod checklist;
pub mod dot_row;
pub mod field;
pub mod header;
pub mod paragraph;
pub mod table;

use crate::flow::Cursor;
use crate::metrics::FontMetrics;
use crate::surface::Surface;
use kneeboard_style::page::PageGeometry;

pub use checklist::{ChecklistGroup, ChecklistItem, ChecklistScript, GroupBlock, ItemBlock, Step};
pub use dot_row::{DotRow, DotRowStyle};
pub use field::FieldBox;
pub use header::{BandHeader, RuledHeader, SectionHeader};
pub use paragraph::{BriefingSection, RichText};
pub use table::{Table, TotalsBand};

pub trait Block {
    /// Height in mm this block occupies when laid out at `width`.
    fn measure(&self, geo: &PageGeometry, width: f32, metrics: &FontMetrics) -> f32;

    /// Paints the block with its top-left at the cursor and returns the
    /// height consumed. Must equal `measure` for the same inputs.
    fn render(
        &self,
        surface: &mut Surface,
        cursor: Cursor,
        geo: &PageGeometry,
        width: f32,
        metrics: &FontMetrics,
    ) -> f32;

    /// Smaller self-contained pieces to fall back to when the whole block
    /// does not fit a fresh column. Empty means the block is indivisible.
    fn sub_units(&self) -> Vec<&dyn Block> {
        Vec::new()
    }
}
