#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// One of the four non-embedded Type1 Helvetica faces every document uses.
///
/// The render crate maps each face to a fixed PDF resource name (F1..F4) and
/// the metrics tables key off the same enum, so a face resolved at layout
/// time is exactly the face active at paint time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
}

impl FontFace {
    pub fn resolve(weight: FontWeight, style: FontStyle) -> Self {
        match (weight, style) {
            (FontWeight::Regular, FontStyle::Normal) => FontFace::Helvetica,
            (FontWeight::Bold, FontStyle::Normal) => FontFace::HelveticaBold,
            (FontWeight::Regular, FontStyle::Italic) => FontFace::HelveticaOblique,
            (FontWeight::Bold, FontStyle::Italic) => FontFace::HelveticaBoldOblique,
        }
    }

    /// PostScript base font name for the PDF font dictionary.
    pub fn postscript_name(self) -> &'static str {
        match self {
            FontFace::Helvetica => "Helvetica",
            FontFace::HelveticaBold => "Helvetica-Bold",
            FontFace::HelveticaOblique => "Helvetica-Oblique",
            FontFace::HelveticaBoldOblique => "Helvetica-BoldOblique",
        }
    }

    /// Internal resource name used in page content streams.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::Helvetica => "F1",
            FontFace::HelveticaBold => "F2",
            FontFace::HelveticaOblique => "F3",
            FontFace::HelveticaBoldOblique => "F4",
        }
    }

    pub fn all() -> [FontFace; 4] {
        [
            FontFace::Helvetica,
            FontFace::HelveticaBold,
            FontFace::HelveticaOblique,
            FontFace::HelveticaBoldOblique,
        ]
    }
}
