//! Editor content as paragraphs of styled text runs and images.
//!
//! An editor front-end extracts its widget state into a [`RichText`] and
//! converts it to Markdown before handing it to the renderers. Images own
//! their file path, so nothing has to be looked up by segment identity.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::value::FieldValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextStyle {
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.underline)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    Text {
        text: String,
        #[serde(default)]
        style: TextStyle,
    },
    Image {
        path: String,
    },
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self::Text {
            text: text.into(),
            style,
        }
    }

    pub fn image(path: impl Into<String>) -> Self {
        Self::Image { path: path.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Zero for body text, otherwise the bullet nesting level.
    #[serde(default)]
    pub indent: usize,
    pub segments: Vec<Segment>,
}

impl Paragraph {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            indent: 0,
            segments,
        }
    }

    pub fn bullet(indent: usize, segments: Vec<Segment>) -> Self {
        Self { indent, segments }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RichText {
    pub paragraphs: Vec<Paragraph>,
}

impl RichText {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    pub fn to_markdown(&self) -> String {
        self.to_markdown_with("\n")
    }

    /// Paragraphs are separated by a blank line, except that a bullet
    /// directly follows the paragraph before it so lists stay together.
    pub fn to_markdown_with(&self, line_break: &str) -> String {
        let mut out = String::new();
        for (i, paragraph) in self.paragraphs.iter().enumerate() {
            if i > 0 {
                out.push_str(line_break);
                if paragraph.indent == 0 {
                    out.push_str(line_break);
                }
            }
            out.push_str(&render_paragraph(paragraph));
        }
        out
    }
}

impl From<&RichText> for FieldValue {
    fn from(text: &RichText) -> Self {
        FieldValue::Text(text.to_markdown())
    }
}

fn render_paragraph(paragraph: &Paragraph) -> String {
    let mut out = String::new();
    if paragraph.indent > 0 {
        out.push_str(&"  ".repeat(paragraph.indent - 1));
        out.push_str("- ");
    }
    for segment in &paragraph.segments {
        match segment {
            Segment::Text { text, style } => render_run(&mut out, text, *style),
            Segment::Image { path } => render_image(&mut out, path),
        }
    }
    out
}

fn render_run(out: &mut String, text: &str, style: TextStyle) {
    let core = text.trim();
    if style.is_plain() || core.is_empty() {
        out.push_str(text);
        return;
    }

    // Emphasis markers must hug non-whitespace.
    let lead = &text[..text.len() - text.trim_start().len()];
    let trail = &text[text.trim_end().len()..];

    let mut styled = core.to_string();
    if style.underline {
        styled = format!("<u>{styled}</u>");
    }
    if style.italic {
        styled = format!("*{styled}*");
    }
    if style.bold {
        styled = format!("**{styled}**");
    }

    out.push_str(lead);
    out.push_str(&styled);
    out.push_str(trail);
}

fn render_image(out: &mut String, path: &str) {
    let path = path.replace('\\', "/");
    let alt = Path::new(&path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("");
    out.push_str(&format!("![{alt}]({path})"));
}
