// File: crates/chart-render-skia/src/text.rs
// Summary: Text shaping with Skia textlayout; anchors paragraphs the way SVG text anchors glyphs.

use chart_core::{Baseline, TextAnchor};
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

/// Tried after the requested families when none of them resolve.
const FALLBACK_FAMILIES: [&str; 6] = ["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    /// Lay out `text` on a single line using a CSS `font-family` list.
    pub fn layout(&self, text: &str, font_family: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut families: Vec<String> = font_family
            .split(',')
            .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
            .filter(|f| !f.is_empty())
            .collect();
        families.extend(FALLBACK_FAMILIES.iter().map(|f| f.to_string()));

        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(families.as_slice());

        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` so that `(x, y)` is its anchor point, rotated clockwise by
    /// `rotation` degrees around that point.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        font_family: &str,
        size: f32,
        color: skia::Color,
        (x, y): (f32, f32),
        anchor: TextAnchor,
        baseline: Baseline,
        rotation: f32,
    ) {
        let mut p = self.layout(text, font_family, size, color);
        let dx = match anchor {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => -p.longest_line() / 2.0,
            TextAnchor::End => -p.longest_line(),
        };
        // Paragraphs paint from their top-left corner.
        let dy = match baseline {
            Baseline::Alphabetic => -p.alphabetic_baseline(),
            Baseline::Middle => -p.height() / 2.0,
            Baseline::Hanging => 0.0,
        };
        canvas.save();
        canvas.translate((x, y));
        if rotation != 0.0 {
            canvas.rotate(rotation, None);
        }
        p.paint(canvas, (dx, dy));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
