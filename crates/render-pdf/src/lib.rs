//! PDF backend: serializes a laid-out `Surface` into a finished document.
//!
//! Text uses the four non-embedded base-14 Helvetica faces with WinAnsi
//! encoding, registered as /F1../F4 in a shared resources dictionary.

pub mod painter;
pub mod writer;

use kneeboard_layout::surface::Surface;
use kneeboard_style::font::FontFace;
use lopdf::{Dictionary, Object, dictionary};
use std::io::{Cursor, Seek, Write};
use thiserror::Error;

use crate::painter::{MM_TO_PT, PagePainter};
use crate::writer::PdfWriter;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error during PDF generation: {0}")]
    Io(#[from] std::io::Error),
}

fn base_font_dict() -> Dictionary {
    let mut fonts = Dictionary::new();
    for face in FontFace::all() {
        let font = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.postscript_name(),
            "Encoding" => "WinAnsiEncoding",
        };
        fonts.set(face.resource_name().as_bytes(), Object::Dictionary(font));
    }
    fonts
}

/// Writes the surface as a PDF into `writer` and returns it.
pub fn render_to<W: Write + Seek>(surface: &Surface, writer: W) -> Result<W, RenderError> {
    let mut pdf = PdfWriter::new(writer, base_font_dict())?;

    let width_pt = surface.page_size.width * MM_TO_PT;
    let height_pt = surface.page_size.height * MM_TO_PT;

    log::debug!(
        "rendering {} page(s) at {:.1}x{:.1}pt",
        surface.pages.len(),
        width_pt,
        height_pt
    );

    for elements in &surface.pages {
        let mut painter = PagePainter::new(surface.page_size.height);
        for element in elements {
            painter.draw(element);
        }
        let content_id = pdf.buffer_content_stream(&painter.finish());
        pdf.add_page(width_pt, height_pt, content_id);
    }

    Ok(pdf.finish()?)
}

/// Renders the surface to an in-memory PDF.
pub fn render(surface: &Surface) -> Result<Vec<u8>, RenderError> {
    let cursor = render_to(surface, Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kneeboard_layout::surface::Surface;
    use kneeboard_style::text::TextStyle;
    use kneeboard_types::Size;

    #[test]
    fn produces_a_parseable_header_and_trailer() {
        let mut surface = Surface::new(Size::new(72.0, 280.0));
        surface.text(0, 6.0, 10.0, "AIRSPEEDS", TextStyle::bold(11.0));
        let bytes = render(&surface).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.ends_with(b"%%EOF"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/MediaBox"));
        assert!(text.contains("AIRSPEEDS"));
    }

    #[test]
    fn one_page_object_per_surface_page() {
        let mut surface = Surface::new(Size::new(139.7, 215.9));
        surface.ensure_page(2);
        let bytes = render(&surface).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 3"));
    }

    #[test]
    fn empty_surface_renders_zero_pages() {
        let surface = Surface::new(Size::new(101.6, 50.8));
        let bytes = render(&surface).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 0"));
    }

    #[test]
    fn registers_all_four_helvetica_faces() {
        let surface = Surface::new(Size::new(72.0, 280.0));
        let bytes = render(&surface).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        for name in ["/F1", "/F2", "/F3", "/F4"] {
            assert!(text.contains(name), "missing {name}");
        }
        assert!(text.contains("/Helvetica-BoldOblique"));
    }
}
