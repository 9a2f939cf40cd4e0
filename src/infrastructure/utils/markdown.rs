use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// ───── Rules ─────────────────────────────────────────────────────────
// Applied top to bottom; each rule sees the output of the previous one.

static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"```(\w+)?\n([\s\S]*?)```").expect("fenced block pattern"));
static HEADING_1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.*)$").expect("h1 pattern"));
static HEADING_2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.*)$").expect("h2 pattern"));
static HEADING_3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.*)$").expect("h3 pattern"));
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").expect("inline code pattern"));
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^- (.*)$").expect("list item pattern"));
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new("\u{1}(\\d+)\u{1}").expect("placeholder pattern"));

const BLOCK_PREFIXES: [&str; 5] = ["<h1>", "<h2>", "<h3>", "<ul>", "<pre>"];

/// Renders the small Markdown dialect used by post bodies into HTML.
///
/// Supported: `#`/`##`/`###` headings, `**bold**`, `` `code` ``, fenced code
/// blocks, `- item` lists and blank-line separated paragraphs. Input is
/// trusted fixture content and is not HTML-escaped.
pub fn render_markdown_lite(source: &str) -> String {
    // Line rules anchor on `\n`; a trailing `\r` would land inside the tags.
    let source = source.replace("\r\n", "\n");

    // Fenced blocks are lifted out first so no later rule rewrites code.
    let mut code_blocks = Vec::new();
    let text = FENCED_BLOCK.replace_all(&source, |caps: &Captures| {
        code_blocks.push(format!("<pre><code>{}</code></pre>", &caps[2]));
        format!("\n\u{1}{}\u{1}\n", code_blocks.len() - 1)
    });

    let text = HEADING_3.replace_all(&text, "<h3>$1</h3>");
    let text = HEADING_2.replace_all(&text, "<h2>$1</h2>");
    let text = HEADING_1.replace_all(&text, "<h1>$1</h1>");
    let text = BOLD.replace_all(&text, "<strong>$1</strong>");
    let text = INLINE_CODE.replace_all(&text, "<code>$1</code>");
    let text = LIST_ITEM.replace_all(&text, "<li>$1</li>");

    let html = assemble_blocks(&text);

    PLACEHOLDER
        .replace_all(&html, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| code_blocks.get(i).cloned())
                .unwrap_or_default()
        })
        .into_owned()
}

/// Groups `<li>` runs into one `<ul>` and wraps loose text in `<p>`.
fn assemble_blocks(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut items: Vec<&str> = Vec::new();

    fn flush_paragraph(out: &mut Vec<String>, paragraph: &mut Vec<&str>) {
        if !paragraph.is_empty() {
            out.push(format!("<p>{}</p>", paragraph.join("\n")));
            paragraph.clear();
        }
    }

    fn flush_list(out: &mut Vec<String>, items: &mut Vec<&str>) {
        if !items.is_empty() {
            out.push(format!("<ul>{}</ul>", items.concat()));
            items.clear();
        }
    }

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() {
            flush_paragraph(&mut out, &mut paragraph);
            flush_list(&mut out, &mut items);
        } else if line.starts_with("<li>") {
            flush_paragraph(&mut out, &mut paragraph);
            items.push(line);
        } else if line.starts_with('\u{1}') || BLOCK_PREFIXES.iter().any(|p| line.starts_with(p)) {
            flush_paragraph(&mut out, &mut paragraph);
            flush_list(&mut out, &mut items);
            out.push(line.to_string());
        } else {
            flush_list(&mut out, &mut items);
            paragraph.push(line);
        }
    }

    flush_paragraph(&mut out, &mut paragraph);
    flush_list(&mut out, &mut items);

    out.join("\n")
}
