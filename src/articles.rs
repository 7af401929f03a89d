//! Predefined permit articles and their conversion into positioned text
//! elements.
//!
//! Articles are Arabic legal clauses shipped as JSON packs; each selected
//! article becomes one right-aligned RTL text element whose title is bold and
//! underlined. Vertical placement uses a cheap height estimate so the caller
//! can paginate before running the real layout.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use permis_layout::{Direction, FontWeight, StyleRange, TextAlign, TextElement, WrapMode};

/// One predefined article from a pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleItem {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl Default for ArticleItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            content: String::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ArticlePack {
    #[serde(default)]
    articles: Vec<ArticleItem>,
}

/// Parse an article pack from its JSON text (`{ "articles": [...] }`).
pub fn parse_article_pack(json: &str) -> anyhow::Result<Vec<ArticleItem>> {
    let pack: ArticlePack =
        serde_json::from_str(json).context("failed to parse article pack JSON")?;
    Ok(pack.articles)
}

/// Combined article text plus the character length of its title prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedArticle {
    pub text: String,
    /// Characters of `text` covered by the bold/underlined title, 0 when the
    /// article has no title.
    pub title_len: usize,
}

/// Join an article title and content into one inline string.
///
/// The title gets a trailing ` :` unless it already ends with a colon
/// (ASCII or fullwidth), and spaces between an Arabic word and a following
/// Latin/digit token are replaced with NBSP so the title underline renders
/// as one continuous rule.
pub fn combine_title_content(title: &str, content: &str) -> CombinedArticle {
    let title = nbsp_before_latin(title.trim());
    let content = content.trim();

    if title.is_empty() && content.is_empty() {
        return CombinedArticle {
            text: String::new(),
            title_len: 0,
        };
    }
    if title.is_empty() {
        return CombinedArticle {
            text: content.to_string(),
            title_len: 0,
        };
    }
    if content.is_empty() {
        let title_len = title.chars().count();
        return CombinedArticle {
            text: title,
            title_len,
        };
    }

    let has_colon = title.ends_with(':') || title.ends_with('\u{FF1A}');
    let prefix = if has_colon {
        title
    } else {
        format!("{title} :")
    };
    let title_len = prefix.chars().count();
    CombinedArticle {
        text: format!("{prefix} {content}"),
        title_len,
    }
}

fn is_arabic(ch: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&ch)
}

/// Replace whitespace runs between an Arabic word and a Latin/digit token
/// with a single NBSP.
fn nbsp_before_latin(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_ws = String::new();
    let mut prev_non_ws: Option<char> = None;

    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_ws.push(ch);
            continue;
        }
        if !pending_ws.is_empty() {
            let joins = prev_non_ws.is_some_and(is_arabic) && ch.is_ascii_alphanumeric();
            if joins {
                out.push('\u{00A0}');
            } else {
                out.push_str(&pending_ws);
            }
            pending_ws.clear();
        }
        out.push(ch);
        prev_non_ws = Some(ch);
    }
    out.push_str(&pending_ws);
    out
}

/// Estimate the rendered height of a text block before laying it out.
///
/// Uses an average character width of `0.52 * font_size`, deliberately wider
/// than the layout heuristic so Arabic text is not over-paginated.
pub fn estimate_text_height(text: &str, width: f32, font_size: f32, line_height: f32) -> f32 {
    let avg_char_width = font_size * 0.52;
    let chars_per_line = ((width / avg_char_width).floor() as usize).max(1);
    let lines = text.chars().count().div_ceil(chars_per_line);
    (lines as f32 * font_size * line_height).ceil()
}

/// Placement options for [`article_elements`].
#[derive(Debug, Clone)]
pub struct ArticlePlacement {
    pub x: f32,
    pub y_start: f32,
    pub width: f32,
    pub font_family: String,
    pub font_size: f32,
    pub line_height: f32,
    /// Vertical gap between consecutive articles, floored at 2px.
    pub spacing: f32,
}

/// A text element with its absolute position on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub x: f32,
    pub y: f32,
    pub element: TextElement,
}

/// Build one positioned text element per selected article id, stacked
/// vertically from `y_start`.
///
/// Unknown ids are skipped; articles that combine to empty text still occupy
/// a slot so the caller's numbering stays stable.
pub fn article_elements(
    article_ids: &[String],
    articles: &[ArticleItem],
    placement: &ArticlePlacement,
) -> Vec<PlacedText> {
    let mut elements = Vec::new();
    let mut current_y = placement.y_start;

    for id in article_ids {
        let Some(article) = articles.iter().find(|a| &a.id == id) else {
            continue;
        };

        let combined = combine_title_content(&article.title, &article.content);
        let block_height = estimate_text_height(
            &combined.text,
            placement.width,
            placement.font_size,
            placement.line_height,
        );

        let style_ranges = if combined.title_len > 0 {
            vec![
                StyleRange::new(0, combined.title_len)
                    .with_font_weight(FontWeight::Bold)
                    .with_underline(true),
            ]
        } else {
            Vec::new()
        };

        let element = TextElement::new(combined.text)
            .with_width(placement.width)
            .with_font_size(placement.font_size)
            .with_font_family(placement.font_family.clone())
            .with_direction(Direction::Rtl)
            .with_text_align(TextAlign::Right)
            .with_line_height(placement.line_height)
            .with_wrap(WrapMode::Word)
            .with_style_ranges(style_ranges);

        elements.push(PlacedText {
            x: placement.x,
            y: current_y,
            element,
        });
        current_y += block_height + placement.spacing.max(2.0);
    }

    elements
}
