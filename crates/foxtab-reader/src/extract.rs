use scraper::{ElementRef, Html, Selector};

/// Parse an HTML document and pull out a title plus readable body text.
pub fn extract_article(html: &str) -> (Option<String>, String) {
    let doc = Html::parse_document(html);
    (extract_title(&doc), extract_body(&doc))
}

fn extract_title(doc: &Html) -> Option<String> {
    for selector in ["meta[property='og:title']", "meta[name='twitter:title']"] {
        let Ok(sel) = Selector::parse(selector) else {
            continue;
        };
        for el in doc.select(&sel) {
            if let Some(content) = el.value().attr("content") {
                let cleaned = normalize_whitespace(content);
                if !cleaned.is_empty() {
                    return Some(cleaned);
                }
            }
        }
    }

    for selector in ["title", "h1"] {
        let Ok(sel) = Selector::parse(selector) else {
            continue;
        };
        for el in doc.select(&sel) {
            let text = el.text().collect::<Vec<_>>().join(" ");
            let cleaned = normalize_whitespace(&text);
            if !cleaned.is_empty() {
                return Some(cleaned);
            }
        }
    }

    None
}

/// Pick the content root with the most text, preferring semantic
/// containers over the whole body.
fn extract_body(doc: &Html) -> String {
    let candidates = [
        ("article", 400usize),
        ("main, [role='main']", 400usize),
        ("body", 0usize),
    ];

    for (selector, min_len) in candidates {
        let Ok(sel) = Selector::parse(selector) else {
            continue;
        };

        let mut best_len = 0usize;
        let mut best_text = String::new();

        for el in doc.select(&sel) {
            let len = text_len(&el);
            if len <= best_len {
                continue;
            }
            let rendered = render_text(&el);
            if rendered.trim().is_empty() {
                continue;
            }
            best_len = len;
            best_text = rendered;
        }

        if best_len >= min_len && !best_text.trim().is_empty() {
            return best_text;
        }
    }

    String::new()
}

fn text_len(el: &ElementRef<'_>) -> usize {
    el.text()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.len())
        .sum()
}

/// Render block-level elements under `root` as plain-text paragraphs.
/// Links are kept as their text, images and emphasis vanish with the
/// markup.
fn render_text(root: &ElementRef<'_>) -> String {
    let Ok(blocks) = Selector::parse("h2, h3, p, blockquote, pre, li") else {
        return String::new();
    };

    let mut out = String::new();
    let mut count = 0usize;

    for el in root.select(&blocks) {
        if count >= 320 {
            break;
        }

        let tag = el.value().name();
        let raw = if tag == "pre" {
            el.text().collect::<Vec<_>>().join("")
        } else {
            el.text().collect::<Vec<_>>().join(" ")
        };
        let text = if tag == "pre" {
            raw.trim_end().to_string()
        } else {
            normalize_whitespace(&raw)
        };
        if text.is_empty() {
            continue;
        }

        match tag {
            "h2" | "h3" => {
                out.push_str("## ");
                out.push_str(&text);
            }
            "blockquote" => {
                out.push_str("> ");
                out.push_str(&text);
            }
            "li" => {
                out.push_str("- ");
                out.push_str(&text);
            }
            "pre" => out.push_str(&text),
            _ => {
                // Short stray paragraphs are usually nav or footer noise.
                if text.len() < 20 {
                    continue;
                }
                out.push_str(&text);
            }
        }
        out.push_str("\n\n");
        count += 1;
    }

    out
}

fn normalize_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else {
            out.push(ch);
            last_space = false;
        }
    }
    out.trim().to_string()
}
