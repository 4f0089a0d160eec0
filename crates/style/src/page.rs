use kneeboard_types::Size;

/// US Letter in millimeters, portrait.
pub const LETTER: Size = Size {
    width: 215.9,
    height: 279.4,
};

/// Half letter (5.5" x 8.5"), the checklist / form sheet size.
pub const HALF_LETTER: Size = Size {
    width: 139.7,
    height: 215.9,
};

/// The narrow speeds-card strip (also one third of a landscape letter, near
/// enough that the combo layout reuses the same content width).
pub const SPEED_STRIP: Size = Size {
    width: 72.0,
    height: 280.0,
};

/// A 2" x 4" endorsement label, landscape.
pub const LABEL_2X4: Size = Size {
    width: 101.6,
    height: 50.8,
};

/// Immutable page shape for one document: physical size, uniform margin and
/// the column grid content flows through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub column_count: usize,
    pub column_gutter: f32,
    /// Space reserved above the bottom margin for a running footer.
    pub footer_height: f32,
    /// Horizontal shift of this panel on the physical sheet. Multi-panel
    /// sheets (combo strips, label grids) lay the same geometry out at
    /// several offsets.
    pub x_offset: f32,
}

impl PageGeometry {
    pub fn single_column(size: Size, margin: f32) -> Self {
        Self {
            width: size.width,
            height: size.height,
            margin,
            column_count: 1,
            column_gutter: 0.0,
            footer_height: 0.0,
            x_offset: 0.0,
        }
    }

    pub fn columns(size: Size, margin: f32, column_count: usize, column_gutter: f32) -> Self {
        Self {
            width: size.width,
            height: size.height,
            margin,
            column_count,
            column_gutter,
            footer_height: 0.0,
            x_offset: 0.0,
        }
    }

    pub fn with_footer(mut self, footer_height: f32) -> Self {
        self.footer_height = footer_height;
        self
    }

    pub fn at_offset(mut self, x_offset: f32) -> Self {
        self.x_offset = x_offset;
        self
    }

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    pub fn column_width(&self) -> f32 {
        let gutters = self.column_gutter * (self.column_count.max(1) - 1) as f32;
        (self.content_width() - gutters) / self.column_count.max(1) as f32
    }

    /// Left edge of the given column, x from the physical sheet's left edge.
    pub fn column_x(&self, column: usize) -> f32 {
        self.x_offset + self.margin + column as f32 * (self.column_width() + self.column_gutter)
    }

    /// Left content edge of the panel.
    pub fn content_left(&self) -> f32 {
        self.x_offset + self.margin
    }

    /// Right content edge of the panel.
    pub fn content_right(&self) -> f32 {
        self.x_offset + self.width - self.margin
    }

    /// Lowest y content may occupy before a break is required.
    pub fn content_bottom(&self) -> f32 {
        self.height - self.margin - self.footer_height
    }

    pub fn content_top(&self) -> f32 {
        self.margin
    }
}
