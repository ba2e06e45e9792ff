// File: crates/chart-core/src/backend.rs
// Summary: Drawing backend trait and the recorded command stream the renderer produces.
// Notes:
// - The renderer never talks markup; it emits `DrawCmd`s and a backend
//   (SVG, Skia raster, ...) decides how each one is serialized.
// - Coordinates are pixels relative to the innermost open group.

/// Horizontal placement of text relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Vertical placement of text relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    /// The anchor sits on the text baseline (text extends upward).
    Alphabetic,
    /// The anchor sits at the vertical center of the glyphs.
    Middle,
    /// The anchor sits at the top of the glyphs (text extends downward).
    Hanging,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub stroke: String,
    pub stroke_width: f64,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub fill: String,
    pub stroke: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub fill: String,
    pub font_family: String,
    pub font_size: f64,
    pub anchor: TextAnchor,
    pub baseline: Baseline,
    /// Clockwise rotation in degrees around `(x, y)`.
    pub rotation: f64,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// One recorded call on a [`DrawingBackend`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    BeginDocument { width: u32, height: u32 },
    EndDocument,
    Line(Line),
    Rect(Rect),
    Text(Text),
    Circle(Circle),
    /// Open a group whose contents are translated by `(dx, dy)`.
    BeginGroup { dx: f64, dy: f64 },
    EndGroup,
}

impl DrawCmd {
    /// Forward this command to `backend`.
    pub fn apply(&self, backend: &mut dyn DrawingBackend) {
        match self {
            DrawCmd::BeginDocument { width, height } => backend.begin_document(*width, *height),
            DrawCmd::EndDocument => backend.end_document(),
            DrawCmd::Line(line) => backend.line(line),
            DrawCmd::Rect(rect) => backend.rect(rect),
            DrawCmd::Text(text) => backend.text(text),
            DrawCmd::Circle(circle) => backend.circle(circle),
            DrawCmd::BeginGroup { dx, dy } => backend.begin_group(*dx, *dy),
            DrawCmd::EndGroup => backend.end_group(),
        }
    }
}

/// A sink for abstract drawing operations.
///
/// Calls arrive well nested: one document, groups closed in reverse order of
/// opening, `end_document` last.
pub trait DrawingBackend {
    fn begin_document(&mut self, width: u32, height: u32);
    fn end_document(&mut self);
    fn line(&mut self, line: &Line);
    fn rect(&mut self, rect: &Rect);
    fn text(&mut self, text: &Text);
    fn circle(&mut self, circle: &Circle);
    fn begin_group(&mut self, dx: f64, dy: f64);
    fn end_group(&mut self);
}

/// Feed a recorded command stream to `backend` in order.
pub fn replay(cmds: &[DrawCmd], backend: &mut dyn DrawingBackend) {
    for cmd in cmds {
        cmd.apply(backend);
    }
}
