//! Ruled data tables for the form sheets: shaded header band, alternating
//! row fill, vertical column rules and a heavy outer frame.

use crate::blocks::Block;
use crate::flow::Cursor;
use crate::metrics::FontMetrics;
use crate::surface::{Stroke, Surface};
use kneeboard_style::page::PageGeometry;
use kneeboard_style::text::{TextAlign, TextStyle};
use kneeboard_types::{Color, Rect};

const HEADER_FILL: Color = Color::new(240, 242, 246);
const ROW_FILL: Color = Color::new(249, 250, 251);
const FRAME_COLOR: Color = Color::new(60, 60, 60);
const RULE_COLOR: Color = Color::new(120, 120, 120);
const FRAME_WIDTH: f32 = 0.8;
const RULE_WIDTH: f32 = 0.3;
const CELL_PAD: f32 = 2.0;

#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub column_widths: Vec<f32>,
    /// Per-column alignment; columns past the end align left.
    pub aligns: Vec<TextAlign>,
    pub header_height: f32,
    pub row_height: f32,
    pub header_size: f32,
    pub row_size: f32,
}

impl Table {
    /// The denser variant used by the flight-plan legs grid.
    pub fn compact(headers: Vec<String>, rows: Vec<Vec<String>>, column_widths: Vec<f32>) -> Self {
        Self {
            headers,
            rows,
            column_widths,
            aligns: Vec::new(),
            header_height: 7.0,
            row_height: 5.0,
            header_size: 8.0,
            row_size: 7.0,
        }
    }

    /// The wider variant used by the weight-and-balance table.
    pub fn standard(headers: Vec<String>, rows: Vec<Vec<String>>, column_widths: Vec<f32>) -> Self {
        Self {
            headers,
            rows,
            column_widths,
            aligns: Vec::new(),
            header_height: 8.0,
            row_height: 6.0,
            header_size: 9.0,
            row_size: 8.0,
        }
    }

    pub fn with_aligns(mut self, aligns: Vec<TextAlign>) -> Self {
        self.aligns = aligns;
        self
    }

    fn align(&self, column: usize) -> TextAlign {
        self.aligns.get(column).copied().unwrap_or(TextAlign::Left)
    }

    fn column_rules(&self, surface: &mut Surface, page: usize, x: f32, y: f32, height: f32) {
        let stroke = Stroke::solid(FRAME_COLOR, RULE_WIDTH);
        let mut col_x = x;
        for width in &self.column_widths[..self.column_widths.len().saturating_sub(1)] {
            col_x += width;
            surface.line(page, (col_x, y), (col_x, y + height), stroke);
        }
    }

    fn paint_cells(
        &self,
        surface: &mut Surface,
        page: usize,
        x: f32,
        baseline: f32,
        cells: &[String],
        style: TextStyle,
        metrics: &FontMetrics,
    ) {
        let mut cell_x = x;
        for (i, cell) in cells.iter().enumerate() {
            let col_width = self.column_widths.get(i).copied().unwrap_or(0.0);
            let text_x = match self.align(i) {
                TextAlign::Left => cell_x + CELL_PAD,
                TextAlign::Right => cell_x + col_width - CELL_PAD - metrics.text_width(cell, &style),
                TextAlign::Center => cell_x + (col_width - metrics.text_width(cell, &style)) / 2.0,
            };
            surface.text(page, text_x, baseline, cell.clone(), style);
            cell_x += col_width;
        }
    }
}

impl Block for Table {
    fn measure(&self, _geo: &PageGeometry, _width: f32, _metrics: &FontMetrics) -> f32 {
        self.header_height + self.rows.len() as f32 * self.row_height
    }

    fn render(
        &self,
        surface: &mut Surface,
        cursor: Cursor,
        _geo: &PageGeometry,
        width: f32,
        metrics: &FontMetrics,
    ) -> f32 {
        // The frame spans the placed width; column widths partition their
        // own span and may come up short of it.
        let page = cursor.page;
        let mut y = cursor.y;

        surface.fill_rect(page, Rect::new(cursor.x, y, width, self.header_height), HEADER_FILL);
        self.column_rules(surface, page, cursor.x, y, self.header_height);
        self.paint_cells(
            surface,
            page,
            cursor.x,
            y + self.header_height - 2.5,
            &self.headers,
            TextStyle::bold(self.header_size).with_color(Color::new(30, 30, 30)),
            metrics,
        );
        y += self.header_height;
        surface.line(
            page,
            (cursor.x, y),
            (cursor.x + width, y),
            Stroke::solid(FRAME_COLOR, FRAME_WIDTH),
        );

        let row_style = TextStyle::new(self.row_size).with_color(Color::gray(40));
        for (index, row) in self.rows.iter().enumerate() {
            if index % 2 == 1 {
                surface.fill_rect(page, Rect::new(cursor.x, y, width, self.row_height), ROW_FILL);
            }
            if index > 0 {
                surface.line(
                    page,
                    (cursor.x, y),
                    (cursor.x + width, y),
                    Stroke::solid(RULE_COLOR, RULE_WIDTH),
                );
            }
            self.column_rules(surface, page, cursor.x, y, self.row_height);
            self.paint_cells(
                surface,
                page,
                cursor.x,
                y + self.row_height - 1.5,
                row,
                row_style,
                metrics,
            );
            y += self.row_height;
        }

        surface.stroke_rect(
            page,
            Rect::new(cursor.x, cursor.y, width, y - cursor.y),
            Stroke::solid(FRAME_COLOR, FRAME_WIDTH),
        );
        y - cursor.y
    }
}

/// The emphasized single-row band below a table, e.g. weight totals.
#[derive(Debug, Clone)]
pub struct TotalsBand {
    pub cells: Vec<String>,
    pub column_widths: Vec<f32>,
}

const TOTALS_HEIGHT: f32 = 8.0;

impl Block for TotalsBand {
    fn measure(&self, _geo: &PageGeometry, _width: f32, _metrics: &FontMetrics) -> f32 {
        TOTALS_HEIGHT
    }

    fn render(
        &self,
        surface: &mut Surface,
        cursor: Cursor,
        _geo: &PageGeometry,
        width: f32,
        _metrics: &FontMetrics,
    ) -> f32 {
        let page = cursor.page;

        surface.rect(
            page,
            Rect::new(cursor.x, cursor.y, width, TOTALS_HEIGHT),
            Some(HEADER_FILL),
            Some(Stroke::solid(FRAME_COLOR, FRAME_WIDTH)),
        );

        let stroke = Stroke::solid(FRAME_COLOR, RULE_WIDTH);
        let mut col_x = cursor.x;
        for col_width in &self.column_widths[..self.column_widths.len().saturating_sub(1)] {
            col_x += col_width;
            surface.line(page, (col_x, cursor.y), (col_x, cursor.y + TOTALS_HEIGHT), stroke);
        }

        let style = TextStyle::bold(9.0).with_color(Color::new(30, 30, 30));
        let mut cell_x = cursor.x;
        for (i, cell) in self.cells.iter().enumerate() {
            surface.text(page, cell_x + CELL_PAD, cursor.y + 5.0, cell.clone(), style);
            cell_x += self.column_widths.get(i).copied().unwrap_or(0.0);
        }
        TOTALS_HEIGHT
    }
}
