//! Greedy line breaking over a pre-measured token stream.
//!
//! Style-agnostic: tokens carry their widths, so the wrapper only sums and
//! compares against the box width. Line heights are the caller's concern.

use super::tokens::{StyledToken, Token, TokenKind};

/// One laid-out line. `width` is the sum of the kept tokens' widths,
/// including interior whitespace.
#[derive(Debug, Clone, Default)]
pub struct Line {
    pub tokens: Vec<StyledToken>,
    pub width: f32,
}

impl Line {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Breaks the token stream into lines no wider than `max_width`.
///
/// A `HardBreak` always closes the current line, even an empty one, so blank
/// source lines survive as blank output lines. Whitespace tokens never force
/// a break and are dropped at line starts. A subscript token stays glued to
/// the base token before it; the pair breaks as one unit. A single token (or
/// glued pair) wider than `max_width` gets a line of its own and overflows.
pub fn wrap(tokens: &[Token], max_width: f32) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current = Line::default();
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i] {
            Token::HardBreak => {
                lines.push(std::mem::take(&mut current));
                i += 1;
            }
            Token::Styled(styled) => {
                if styled.is_whitespace() {
                    if !current.is_empty() {
                        current.width += styled.width;
                        current.tokens.push(styled.clone());
                    }
                    i += 1;
                    continue;
                }
                // A subscript never starts a line; the overflow test sees
                // base plus subscript as one width.
                let mut end = i + 1;
                let mut group_width = styled.width;
                if let Some(Token::Styled(next)) = tokens.get(end) {
                    if next.kind == TokenKind::Subscript {
                        group_width += next.width;
                        end += 1;
                    }
                }
                if !current.is_empty() && current.width + group_width > max_width {
                    trim_trailing_whitespace(&mut current);
                    lines.push(std::mem::take(&mut current));
                }
                for token in &tokens[i..end] {
                    if let Token::Styled(styled) = token {
                        current.width += styled.width;
                        current.tokens.push(styled.clone());
                    }
                }
                i = end;
            }
        }
    }
    if !current.is_empty() {
        trim_trailing_whitespace(&mut current);
        lines.push(current);
    }
    lines
}

fn trim_trailing_whitespace(line: &mut Line) {
    while line.tokens.last().is_some_and(StyledToken::is_whitespace) {
        if let Some(ws) = line.tokens.pop() {
            line.width -= ws.width;
        }
    }
}
