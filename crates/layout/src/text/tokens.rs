//! Rich-text tokenization: styled spans, hard breaks, whitespace-preserving
//! word split and `base_sub` subscript pairs.
//!
//! The tokenizer runs once per layout pass and attributes style per token so
//! downstream code (the wrapper, the renderers) never re-parses delimiter
//! state. A dangling `**` or `*` is kept as literal text rather than raised
//! as an error; the export pipeline has no user-facing error channel.

use crate::metrics::FontMetrics;
use kneeboard_style::font::{FontStyle, FontWeight};
use kneeboard_style::text::TextStyle;

/// Subscript glyphs render at this fraction of the base font size...
pub const SUBSCRIPT_SCALE: f32 = 0.75;
/// ...and this far below the base baseline, in millimeters.
pub const SUBSCRIPT_DROP: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Normal,
    Bold,
    Italic,
    Subscript,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyledToken {
    pub text: String,
    pub kind: TokenKind,
    /// Measured width in mm at the style the token will be painted with.
    pub width: f32,
}

impl StyledToken {
    pub fn is_whitespace(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

/// A flat token stream item: styled text or a forced line break.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Styled(StyledToken),
    HardBreak,
}

/// Maps a token kind onto the concrete font state used to measure and paint
/// it. `Normal` keeps the base style untouched so callers can tokenize
/// already-bold content (titles) without markup.
pub fn resolved_style(base: &TextStyle, kind: TokenKind) -> TextStyle {
    match kind {
        TokenKind::Normal => *base,
        TokenKind::Bold => TextStyle {
            weight: FontWeight::Bold,
            ..*base
        },
        TokenKind::Italic => TextStyle {
            style: FontStyle::Italic,
            ..*base
        },
        TokenKind::Subscript => TextStyle {
            size: base.size * SUBSCRIPT_SCALE,
            weight: FontWeight::Bold,
            ..*base
        },
    }
}

/// Splits a `base_sub` word into its base and subscript parts.
///
/// Only whole tokens of the shape `alnum_alnum` qualify; anything else
/// (multiple underscores, leading/trailing underscore, punctuation) stays a
/// single unmodified token.
pub fn split_subscript(token: &str) -> Option<(&str, &str)> {
    let mut parts = token.splitn(2, '_');
    let base = parts.next()?;
    let sub = parts.next()?;
    let alnum = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric());
    if alnum(base) && alnum(sub) && !sub.contains('_') {
        Some((base, sub))
    } else {
        None
    }
}

/// Tokenizes `content` into a flat stream of styled word/whitespace tokens
/// and hard-break markers, measuring each token at its resolved style.
pub fn tokenize(content: &str, base: &TextStyle, metrics: &FontMetrics) -> Vec<Token> {
    let mut out = Vec::new();
    let normalized = content.replace("\r\n", "\n");

    for (line_idx, line) in normalized.split('\n').enumerate() {
        if line_idx > 0 {
            out.push(Token::HardBreak);
        }
        for (segment, kind) in scan_spans(line) {
            push_words(&mut out, segment, kind, base, metrics);
        }
    }
    out
}

/// Splits one line into `(text, kind)` spans by `**bold**` / `*italic*`
/// delimiters. Unclosed delimiters are emitted as literal text.
fn scan_spans(line: &str) -> Vec<(&str, TokenKind)> {
    let mut spans = Vec::new();
    let bytes = line.as_bytes();
    let mut plain_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'*' {
            i += 1;
            continue;
        }
        let double = bytes.get(i + 1) == Some(&b'*');
        let (delim_len, kind) = if double {
            (2, TokenKind::Bold)
        } else {
            (1, TokenKind::Italic)
        };
        let delim = if double { "**" } else { "*" };
        match line[i + delim_len..].find(delim) {
            Some(rel) => {
                if plain_start < i {
                    spans.push((&line[plain_start..i], TokenKind::Normal));
                }
                let inner_start = i + delim_len;
                spans.push((&line[inner_start..inner_start + rel], kind));
                i = inner_start + rel + delim_len;
                plain_start = i;
            }
            None => {
                // Dangling delimiter: leave it in the plain run.
                i += delim_len;
            }
        }
    }
    if plain_start < line.len() {
        spans.push((&line[plain_start..], TokenKind::Normal));
    }
    spans
}

fn push_words(
    out: &mut Vec<Token>,
    segment: &str,
    kind: TokenKind,
    base: &TextStyle,
    metrics: &FontMetrics,
) {
    let style = resolved_style(base, kind);
    for piece in split_whitespace_preserving(segment) {
        if piece.chars().all(char::is_whitespace) {
            out.push(Token::Styled(StyledToken {
                text: piece.to_string(),
                kind,
                width: metrics.text_width(piece, &style),
            }));
        } else if let Some((word_base, sub)) = split_subscript(piece) {
            let sub_style = resolved_style(base, TokenKind::Subscript);
            out.push(Token::Styled(StyledToken {
                text: word_base.to_string(),
                kind,
                width: metrics.text_width(word_base, &style),
            }));
            out.push(Token::Styled(StyledToken {
                text: sub.to_string(),
                kind: TokenKind::Subscript,
                width: metrics.text_width(sub, &sub_style),
            }));
        } else {
            out.push(Token::Styled(StyledToken {
                text: piece.to_string(),
                kind,
                width: metrics.text_width(piece, &style),
            }));
        }
    }
}

/// Splits into alternating non-whitespace / whitespace runs, keeping both.
fn split_whitespace_preserving(s: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut run_start = 0;
    let mut run_is_ws: Option<bool> = None;

    for (idx, c) in s.char_indices() {
        let is_ws = c.is_whitespace();
        match run_is_ws {
            Some(prev) if prev == is_ws => {}
            Some(_) => {
                pieces.push(&s[run_start..idx]);
                run_start = idx;
                run_is_ws = Some(is_ws);
            }
            None => run_is_ws = Some(is_ws),
        }
    }
    if run_start < s.len() {
        pieces.push(&s[run_start..]);
    }
    pieces
}
