// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia drawing backend; replays chart-core frames onto CPU raster surfaces and encodes PNG.

pub mod color;
pub mod text;

use anyhow::{Context, Result};
use chart_core::{replay, Chart, Circle, DrawingBackend, Line, Rect, Text};
use skia_safe as skia;

pub use color::parse_css_color;
pub use text::TextShaper;

/// Draws onto a borrowed Skia canvas. Groups map to save/translate/restore.
pub struct SkiaBackend<'a> {
    canvas: &'a skia::Canvas,
    text: TextShaper,
}

impl<'a> SkiaBackend<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self { canvas, text: TextShaper::new() }
    }
}

fn stroke_paint(color: skia::Color, width: f64) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width as f32);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

impl DrawingBackend for SkiaBackend<'_> {
    fn begin_document(&mut self, _width: u32, _height: u32) {
        self.canvas.clear(skia::Color::TRANSPARENT);
    }

    fn end_document(&mut self) {}

    fn line(&mut self, line: &Line) {
        if let Some(color) = parse_css_color(&line.stroke) {
            let paint = stroke_paint(color, line.stroke_width);
            self.canvas.draw_line((line.x1 as f32, line.y1 as f32), (line.x2 as f32, line.y2 as f32), &paint);
        }
    }

    fn rect(&mut self, rect: &Rect) {
        let r = skia::Rect::from_xywh(rect.x as f32, rect.y as f32, rect.width as f32, rect.height as f32);
        if let Some(color) = parse_css_color(&rect.fill) {
            self.canvas.draw_rect(r, &fill_paint(color));
        }
        if let Some(color) = parse_css_color(&rect.stroke) {
            self.canvas.draw_rect(r, &stroke_paint(color, 1.0));
        }
    }

    fn text(&mut self, text: &Text) {
        let Some(color) = parse_css_color(&text.fill) else { return };
        self.text.draw_anchored(
            self.canvas,
            &text.content,
            &text.font_family,
            text.font_size as f32,
            color,
            (text.x as f32, text.y as f32),
            text.anchor,
            text.baseline,
            text.rotation as f32,
        );
    }

    fn circle(&mut self, circle: &Circle) {
        let center = (circle.cx as f32, circle.cy as f32);
        let r = circle.r as f32;
        if let Some(color) = parse_css_color(&circle.fill) {
            self.canvas.draw_circle(center, r, &fill_paint(color));
        }
        if let Some(color) = parse_css_color(&circle.stroke) {
            self.canvas.draw_circle(center, r, &stroke_paint(color, circle.stroke_width));
        }
    }

    fn begin_group(&mut self, dx: f64, dy: f64) {
        self.canvas.save();
        self.canvas.translate((dx as f32, dy as f32));
    }

    fn end_group(&mut self) {
        self.canvas.restore();
    }
}

/// Snapshot `surface` and encode it as PNG bytes.
pub fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render `chart` on a CPU raster surface sized to its layout and return PNG bytes.
pub fn render_png(chart: &Chart) -> Result<Vec<u8>> {
    let frame = chart.frame()?;
    let width = i32::try_from(frame.layout.screen_width).context("screen width exceeds raster limits")?;
    let height = i32::try_from(frame.layout.screen_height).context("screen height exceeds raster limits")?;

    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface ({width}x{height})"))?;
    {
        let mut backend = SkiaBackend::new(surface.canvas());
        replay(&frame.commands, &mut backend);
    }
    encode_png(&mut surface)
}

/// Render `chart` to a PNG file at `output_png_path`, creating parent directories.
pub fn render_to_png(chart: &Chart, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let bytes = render_png(chart)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
