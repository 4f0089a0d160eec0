use crate::metrics::FontMetrics;
use crate::text::tokens::{Token, TokenKind, resolved_style, split_subscript, tokenize};
use crate::text::wrapper::{Line, wrap};
use kneeboard_style::text::TextStyle;

fn styled(tokens: &[Token]) -> Vec<(String, TokenKind)> {
    tokens
        .iter()
        .filter_map(|t| match t {
            Token::Styled(s) => Some((s.text.clone(), s.kind)),
            Token::HardBreak => None,
        })
        .collect()
}

fn line_texts(lines: &[Line]) -> Vec<String> {
    lines
        .iter()
        .map(|l| l.tokens.iter().map(|t| t.text.as_str()).collect())
        .collect()
}

#[test]
fn attributes_bold_and_italic_spans() {
    let metrics = FontMetrics::new();
    let base = TextStyle::new(7.5);
    let tokens = tokenize(
        "I certify **this pilot** meets *all* requirements",
        &base,
        &metrics,
    );
    let kinds = styled(&tokens);
    assert!(kinds.contains(&("certify".into(), TokenKind::Normal)));
    assert!(kinds.contains(&("this".into(), TokenKind::Bold)));
    assert!(kinds.contains(&("pilot".into(), TokenKind::Bold)));
    assert!(kinds.contains(&("all".into(), TokenKind::Italic)));
    assert!(kinds.contains(&("requirements".into(), TokenKind::Normal)));
}

#[test]
fn dangling_delimiter_stays_literal() {
    let metrics = FontMetrics::new();
    let base = TextStyle::new(7.5);
    let tokens = tokenize("rotate **now or never", &base, &metrics);
    let kinds = styled(&tokens);
    assert!(kinds.iter().all(|(_, k)| *k == TokenKind::Normal));
    assert!(kinds.iter().any(|(t, _)| t.contains("**now")));
}

#[test]
fn newlines_become_hard_breaks() {
    let metrics = FontMetrics::new();
    let base = TextStyle::new(7.5);
    let tokens = tokenize("line one\nline two\r\nline three", &base, &metrics);
    let breaks = tokens
        .iter()
        .filter(|t| matches!(t, Token::HardBreak))
        .count();
    assert_eq!(breaks, 2);
}

#[test]
fn splits_vspeed_subscripts() {
    assert_eq!(split_subscript("V_NO"), Some(("V", "NO")));
    assert_eq!(split_subscript("V_x"), Some(("V", "x")));
    assert_eq!(split_subscript("NORMAL"), None);
    assert_eq!(split_subscript("_NO"), None);
    assert_eq!(split_subscript("V_"), None);
    assert_eq!(split_subscript("a_b_c"), None);
}

#[test]
fn subscript_token_is_smaller_and_follows_its_base() {
    let metrics = FontMetrics::new();
    let base = TextStyle::new(8.5);
    let tokens = tokenize("V_NO", &base, &metrics);
    let kinds = styled(&tokens);
    assert_eq!(
        kinds,
        vec![
            ("V".to_string(), TokenKind::Normal),
            ("NO".to_string(), TokenKind::Subscript)
        ]
    );
    let sub_style = resolved_style(&base, TokenKind::Subscript);
    assert!(sub_style.size < base.size);
}

#[test]
fn subscript_never_starts_a_line() {
    let metrics = FontMetrics::new();
    let base = TextStyle::new(8.5);
    let tokens = tokenize("Max Speed in Rough Air V_NO", &base, &metrics);
    // Wide enough for everything through the base "V" but not the subscript.
    let width = metrics.text_width("Max Speed in Rough Air V", &base) + 0.05;
    let lines = wrap(&tokens, width);
    assert!(lines.len() > 1);
    for line in &lines {
        assert_ne!(
            line.tokens.first().map(|t| t.kind),
            Some(TokenKind::Subscript),
            "subscript detached from its base: {:?}",
            line.tokens
        );
    }
    let last: Vec<&str> = lines
        .last()
        .map(|l| l.tokens.iter().map(|t| t.text.as_str()).collect())
        .unwrap_or_default();
    assert_eq!(last, vec!["V", "NO"]);
}

#[test]
fn empty_input_yields_no_tokens() {
    let metrics = FontMetrics::new();
    assert!(tokenize("", &TextStyle::new(8.0), &metrics).is_empty());
}

#[test]
fn single_line_when_everything_fits() {
    let metrics = FontMetrics::new();
    let base = TextStyle::new(8.0);
    let tokens = tokenize("short line", &base, &metrics);
    assert_eq!(line_texts(&wrap(&tokens, 200.0)), vec!["short line"]);
}

#[test]
fn breaks_at_word_boundaries() {
    let metrics = FontMetrics::new();
    let base = TextStyle::new(8.0);
    let tokens = tokenize("alpha bravo charlie", &base, &metrics);
    let first_fits = metrics.text_width("alpha bravo", &base) + 0.1;
    let lines = wrap(&tokens, first_fits);
    assert_eq!(line_texts(&lines), vec!["alpha bravo", "charlie"]);
}

#[test]
fn wrapped_lines_fit_and_lose_nothing() {
    let metrics = FontMetrics::new();
    let base = TextStyle::new(7.5);
    let text = "I certify that this **flight review** was conducted in accordance \
                with the applicable regulations and that the pilot has \
                *satisfactorily* completed the review required by 61.56";
    let tokens = tokenize(text, &base, &metrics);
    let lines = wrap(&tokens, 60.0);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(line.width <= 60.0 + 0.001, "line too wide: {}", line.width);
    }
    let rejoined: Vec<String> = line_texts(&lines)
        .iter()
        .flat_map(|l| l.split_whitespace().map(String::from))
        .collect();
    let source_words: Vec<String> = text
        .split_whitespace()
        .map(|w| w.trim_matches('*').to_string())
        .collect();
    assert_eq!(rejoined, source_words);
}

#[test]
fn bold_runs_survive_line_breaks() {
    let metrics = FontMetrics::new();
    let base = TextStyle::new(7.5);
    let tokens = tokenize("plain **bold words that will surely wrap** plain", &base, &metrics);
    let lines = wrap(&tokens, metrics.text_width("plain bold words", &base));
    assert!(lines.len() > 1);
    for line in &lines {
        for token in &line.tokens {
            let expected = if ["plain"].contains(&token.text.as_str()) {
                TokenKind::Normal
            } else if token.is_whitespace() {
                continue;
            } else {
                TokenKind::Bold
            };
            assert_eq!(token.kind, expected, "token {:?}", token.text);
        }
    }
}

#[test]
fn hard_break_closes_even_an_empty_line() {
    let metrics = FontMetrics::new();
    let base = TextStyle::new(8.0);
    let tokens = tokenize("first\n\nthird", &base, &metrics);
    assert_eq!(line_texts(&wrap(&tokens, 200.0)), vec!["first", "", "third"]);
}

#[test]
fn oversized_token_gets_its_own_line() {
    let metrics = FontMetrics::new();
    let base = TextStyle::new(8.0);
    let tokens = tokenize("a incomprehensibilities b", &base, &metrics);
    let lines = wrap(&tokens, metrics.text_width("a m", &base));
    assert_eq!(line_texts(&lines), vec!["a", "incomprehensibilities", "b"]);
}

#[test]
fn wrapping_is_idempotent() {
    let metrics = FontMetrics::new();
    let base = TextStyle::new(7.5);
    let tokens = tokenize("the same input must always break the same way", &base, &metrics);
    let first = line_texts(&wrap(&tokens, 25.0));
    let second = line_texts(&wrap(&tokens, 25.0));
    assert_eq!(first, second);
}
