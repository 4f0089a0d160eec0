pub mod font;
pub mod page;
pub mod text;

pub use font::{FontFace, FontStyle, FontWeight};
pub use page::PageGeometry;
pub use text::{TextAlign, TextStyle};
