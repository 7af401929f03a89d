//! Whitespace and newline aware tokenization of resolved style runs.

use crate::element::FontWeight;
use crate::layout::style_run::StyleRun;
use crate::metrics::FontMetrics;

/// Token class, decided per character during the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of non-whitespace characters sharing one style.
    Word,
    /// A single whitespace character (never a newline).
    Space,
    /// An explicit `\n`, carried as a zero-width token.
    Newline,
}

/// A measured token: word, single whitespace character or newline marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub width: f32,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub color: String,
    pub underline: bool,
}

impl Token {
    pub fn is_space(&self) -> bool {
        self.kind == TokenKind::Space
    }
}

/// Split run slices into tokens, measuring each with the run's style.
///
/// Runs tile the text, so a single pass over `text.chars()` walks them in
/// lockstep. Word buffers never cross a run boundary: a word that spans two
/// runs becomes two adjacent word tokens with their own styles.
pub fn tokenize(
    text: &str,
    runs: &[StyleRun],
    font_family: &str,
    metrics: &dyn FontMetrics,
) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text.chars();

    for run in runs {
        let mut buf = String::new();
        let flush = |buf: &mut String, tokens: &mut Vec<Token>| {
            if buf.is_empty() {
                return;
            }
            let width = metrics.measure_width(buf, run.font_size, font_family, run.font_weight);
            tokens.push(Token {
                kind: TokenKind::Word,
                text: std::mem::take(buf),
                width,
                font_size: run.font_size,
                font_weight: run.font_weight,
                color: run.color.clone(),
                underline: run.underline,
            });
        };

        for _ in run.start..run.end {
            let Some(ch) = chars.next() else { break };
            if ch == '\n' {
                flush(&mut buf, &mut tokens);
                tokens.push(Token {
                    kind: TokenKind::Newline,
                    text: "\n".to_string(),
                    width: 0.0,
                    font_size: run.font_size,
                    font_weight: run.font_weight,
                    color: run.color.clone(),
                    underline: run.underline,
                });
            } else if ch.is_whitespace() {
                flush(&mut buf, &mut tokens);
                let text = ch.to_string();
                let width = metrics.measure_width(&text, run.font_size, font_family, run.font_weight);
                tokens.push(Token {
                    kind: TokenKind::Space,
                    text,
                    width,
                    font_size: run.font_size,
                    font_weight: run.font_weight,
                    color: run.color.clone(),
                    underline: run.underline,
                });
            } else {
                buf.push(ch);
            }
        }
        flush(&mut buf, &mut tokens);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{StyleRange, TextElement};
    use crate::layout::style_run::resolve_style_runs;
    use crate::metrics::HeuristicMetrics;

    fn tokens_for(element: &TextElement) -> Vec<Token> {
        let runs = resolve_style_runs(element);
        tokenize(&element.text, &runs, &element.font_family, &HeuristicMetrics)
    }

    #[test]
    fn test_words_and_spaces() {
        let tokens = tokens_for(&TextElement::new("Hello world"));
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Hello", " ", "world"]);
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[0].width, 48.0);
        assert_eq!(tokens[1].kind, TokenKind::Space);
        assert_eq!(tokens[1].width, 10.0);
    }

    #[test]
    fn test_newline_is_zero_width() {
        let tokens = tokens_for(&TextElement::new("a\n\nb"));
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Word, TokenKind::Newline, TokenKind::Newline, TokenKind::Word]
        );
        assert_eq!(tokens[1].width, 0.0);
    }

    #[test]
    fn test_consecutive_spaces_stay_separate() {
        let tokens = tokens_for(&TextElement::new("a  b"));
        assert_eq!(tokens.len(), 4);
        assert!(tokens[1].is_space());
        assert!(tokens[2].is_space());
    }

    #[test]
    fn test_word_split_at_run_boundary() {
        // A style boundary inside "Hello" produces two word tokens with
        // their own styles.
        let element = TextElement::new("Hello").with_style_ranges(vec![
            StyleRange::new(0, 3).with_font_weight(FontWeight::Bold),
        ]);
        let tokens = tokens_for(&element);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Hel");
        assert_eq!(tokens[0].font_weight, FontWeight::Bold);
        assert_eq!(tokens[1].text, "lo");
        assert_eq!(tokens[1].font_weight, FontWeight::Normal);
        // Concatenation reproduces the source text.
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, "Hello");
    }

    #[test]
    fn test_empty_text() {
        assert!(tokens_for(&TextElement::new("")).is_empty());
    }

    #[test]
    fn test_styled_width_uses_run_font_size() {
        let element = TextElement::new("abcd").with_style_ranges(vec![
            StyleRange::new(0, 2).with_font_size(40.0),
        ]);
        let tokens = tokens_for(&element);
        // ceil(2 * 40 * 0.48) = 39 vs ceil(2 * 20 * 0.48) = 20.
        assert_eq!(tokens[0].width, 39.0);
        assert_eq!(tokens[1].width, 20.0);
    }
}
