// File: crates/chart-core/src/svg.rs
// Summary: SVG drawing backend; serializes the command stream to an SVG document.

use crate::backend::{Baseline, Circle, DrawingBackend, Line, Rect, Text, TextAnchor};

/// Accumulates SVG markup, one element per line, indented by group depth.
#[derive(Debug)]
pub struct SvgBackend {
    /// Whether to include the XML declaration.
    include_declaration: bool,
    lines: Vec<String>,
    depth: usize,
}

impl SvgBackend {
    pub fn new() -> Self {
        Self { include_declaration: true, lines: Vec::new(), depth: 0 }
    }

    /// Set whether to include the XML declaration.
    pub fn include_declaration(mut self, include: bool) -> Self {
        self.include_declaration = include;
        self
    }

    /// The serialized document.
    pub fn into_string(self) -> String {
        let mut svg = self.lines.join("\n");
        svg.push('\n');
        svg
    }

    fn push(&mut self, element: String) {
        let indent = "  ".repeat(self.depth);
        self.lines.push(format!("{indent}{element}"));
    }
}

impl Default for SvgBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingBackend for SvgBackend {
    fn begin_document(&mut self, width: u32, height: u32) {
        if self.include_declaration {
            self.lines.push("<?xml version=\"1.0\" encoding=\"UTF-8\"?>".to_string());
        }
        self.lines.push(format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        ));
        self.depth = 1;
    }

    fn end_document(&mut self) {
        self.depth = 0;
        self.lines.push("</svg>".to_string());
    }

    fn line(&mut self, line: &Line) {
        self.push(format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            fmt_num(line.x1),
            fmt_num(line.y1),
            fmt_num(line.x2),
            fmt_num(line.y2),
            escape_xml(&line.stroke),
            fmt_num(line.stroke_width),
        ));
    }

    fn rect(&mut self, rect: &Rect) {
        self.push(format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\"/>",
            fmt_num(rect.x),
            fmt_num(rect.y),
            fmt_num(rect.width),
            fmt_num(rect.height),
            escape_xml(&rect.fill),
            escape_xml(&rect.stroke),
        ));
    }

    fn text(&mut self, text: &Text) {
        let transform = if text.rotation != 0.0 {
            format!(
                " transform=\"rotate({} {} {})\"",
                fmt_num(text.rotation),
                fmt_num(text.x),
                fmt_num(text.y)
            )
        } else {
            String::new()
        };
        self.push(format!(
            "<text x=\"{}\" y=\"{}\" fill=\"{}\" font-family=\"{}\" font-size=\"{}px\" text-anchor=\"{}\" dominant-baseline=\"{}\"{}>{}</text>",
            fmt_num(text.x),
            fmt_num(text.y),
            escape_xml(&text.fill),
            escape_xml(&text.font_family),
            fmt_num(text.font_size),
            anchor_name(text.anchor),
            baseline_name(text.baseline),
            transform,
            escape_xml(&text.content),
        ));
    }

    fn circle(&mut self, circle: &Circle) {
        self.push(format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            fmt_num(circle.cx),
            fmt_num(circle.cy),
            fmt_num(circle.r),
            escape_xml(&circle.fill),
            escape_xml(&circle.stroke),
            fmt_num(circle.stroke_width),
        ));
    }

    fn begin_group(&mut self, dx: f64, dy: f64) {
        self.push(format!("<g transform=\"translate({} {})\">", fmt_num(dx), fmt_num(dy)));
        self.depth += 1;
    }

    fn end_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.push("</g>".to_string());
    }
}

fn anchor_name(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn baseline_name(baseline: Baseline) -> &'static str {
    match baseline {
        Baseline::Alphabetic => "alphabetic",
        Baseline::Middle => "middle",
        Baseline::Hanging => "hanging",
    }
}

/// At most two decimals, trailing zeros trimmed, no negative zero.
fn fmt_num(v: f64) -> String {
    let mut s = format!("{v:.2}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Escape XML special characters in text content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
