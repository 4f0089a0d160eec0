pub mod tokens;
pub mod wrapper;

pub use tokens::{StyledToken, Token, TokenKind, resolved_style, split_subscript, tokenize};
pub use wrapper::{Line, wrap};
