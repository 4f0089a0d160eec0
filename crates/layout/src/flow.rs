//! Column and page flow.
//!
//! One `FlowController` owns the write position for a document pass. Blocks
//! never move the cursor themselves; they report heights and the controller
//! decides where the next one lands. Position only ever advances: down a
//! column, to the next column, to the next page.

use crate::LayoutError;
use crate::blocks::Block;
use crate::metrics::FontMetrics;
use crate::surface::Surface;
use kneeboard_style::page::PageGeometry;

/// Fit tolerance in mm. Accumulated float error must not force a break for
/// content that fills a column exactly.
const EPSILON: f32 = 0.01;

/// A write position: page index, column index and the x/y of the next
/// block's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub page: usize,
    pub column: usize,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug)]
pub struct FlowController {
    geo: PageGeometry,
    page: usize,
    column: usize,
    /// Current y per column of the current page.
    column_y: Vec<f32>,
    /// Where content resumes after a page break. Documents with a repeated
    /// masthead set this below the plain content top.
    page_top: f32,
}

impl FlowController {
    pub fn new(geo: PageGeometry) -> Self {
        Self::starting_at(geo, 0)
    }

    /// Starts flowing on an existing page, for multi-panel sheets that
    /// revisit pages already painted by a previous pass.
    pub fn starting_at(geo: PageGeometry, page: usize) -> Self {
        Self {
            geo,
            page,
            column: 0,
            column_y: vec![geo.content_top(); geo.column_count.max(1)],
            page_top: geo.content_top(),
        }
    }

    /// Sets the y where columns restart after a page break. The first page
    /// is unaffected.
    pub fn set_page_top(&mut self, y: f32) {
        self.page_top = y;
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geo
    }

    pub fn cursor(&self) -> Cursor {
        Cursor {
            page: self.page,
            column: self.column,
            x: self.geo.column_x(self.column),
            y: self.column_y[self.column],
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Pages touched so far, relative to the starting page.
    pub fn page_count(&self) -> usize {
        self.page + 1
    }

    /// Room left below the cursor in the current column.
    pub fn available(&self) -> f32 {
        self.geo.content_bottom() - self.column_y[self.column]
    }

    fn usable_height(&self) -> f32 {
        self.geo.content_bottom() - self.geo.content_top()
    }

    /// Moves to the next column, or the first column of a fresh page when
    /// the current page's columns are exhausted.
    pub fn break_column(&mut self, surface: &mut Surface) {
        if self.column + 1 < self.geo.column_count.max(1) {
            self.column += 1;
        } else {
            self.break_page(surface);
            self.column = 0;
        }
    }

    /// Starts a fresh page outright, resetting every column. Keeps the
    /// current column selection.
    pub fn break_page(&mut self, surface: &mut Surface) {
        let column = self.column;
        self.page += 1;
        self.column = column;
        self.column_y = vec![self.page_top; self.geo.column_count.max(1)];
        surface.ensure_page(self.page);
    }

    /// Advances the current column's y by `dy`.
    pub fn advance(&mut self, dy: f32) {
        self.column_y[self.column] += dy;
    }

    /// Jumps the current column to an absolute y. Never moves upward.
    pub fn set_y(&mut self, y: f32) {
        if y > self.column_y[self.column] {
            self.column_y[self.column] = y;
        }
    }

    /// Switches the write position to column `index` on the current page.
    pub fn select_column(&mut self, index: usize) {
        self.column = index.min(self.geo.column_count.max(1) - 1);
    }

    /// Levels every column of the current page to the deepest one, plus
    /// `extra` spacing. Full-width content after a columnar run starts here.
    pub fn sync_columns(&mut self, extra: f32) {
        let deepest = self
            .column_y
            .iter()
            .copied()
            .fold(self.geo.content_top(), f32::max);
        for y in &mut self.column_y {
            *y = deepest + extra;
        }
    }

    /// Places a block, breaking to a new column or page when it does not
    /// fit. Falls back to the block's sub-units when even a fresh column is
    /// too short; an indivisible block then overflows a fresh column rather
    /// than being dropped.
    pub fn place(&mut self, surface: &mut Surface, block: &dyn Block, metrics: &FontMetrics) {
        let width = self.geo.column_width();
        let height = block.measure(&self.geo, width, metrics);

        if height <= self.available() + EPSILON {
            self.render_here(surface, block, width, metrics);
            return;
        }
        if height <= self.usable_height() + EPSILON {
            self.break_column(surface);
            self.render_here(surface, block, width, metrics);
            return;
        }

        let subs = block.sub_units();
        if subs.is_empty() {
            log::warn!(
                "block of height {height:.1}mm exceeds the {:.1}mm column, overflowing",
                self.usable_height()
            );
            self.break_column(surface);
            self.render_here(surface, block, width, metrics);
        } else {
            for sub in subs {
                self.place(surface, sub, metrics);
            }
        }
    }

    /// Places a block that must not be split across a break. Errors instead
    /// of overflowing when the block cannot fit any column.
    pub fn place_atomic(
        &mut self,
        surface: &mut Surface,
        block: &dyn Block,
        metrics: &FontMetrics,
    ) -> Result<(), LayoutError> {
        let width = self.geo.column_width();
        let height = block.measure(&self.geo, width, metrics);
        if height > self.usable_height() + EPSILON {
            return Err(LayoutError::ElementTooLarge(height, self.usable_height()));
        }
        if height > self.available() + EPSILON {
            self.break_column(surface);
        }
        self.render_here(surface, block, width, metrics);
        Ok(())
    }

    fn render_here(
        &mut self,
        surface: &mut Surface,
        block: &dyn Block,
        width: f32,
        metrics: &FontMetrics,
    ) {
        surface.ensure_page(self.page);
        let consumed = block.render(surface, self.cursor(), &self.geo, width, metrics);
        self.advance(consumed);
    }
}
