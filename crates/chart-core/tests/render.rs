// File: crates/chart-core/tests/render.rs
// Purpose: Frame renderer emission order, margin groups, ticks and labels.

use chart_core::chart::format_tick;
use chart_core::{
    AxisSpec, Baseline, Chart, ChartConfig, ChartError, Circle, DataPoint, DrawCmd, DrawingBackend, GridSpec,
    Line, MarginSpec, Margins, Rect, ScreenSpec, Text, TextAnchor,
};

fn config() -> ChartConfig {
    ChartConfig {
        screen: ScreenSpec { width: 700, height: 0 },
        x_axis: AxisSpec::new("X", 0.0, 1000.0),
        y_axis: AxisSpec::new("Y", 0.0, 500.0),
        grid: GridSpec { enabled: true, unit: 100.0, color: "#cccccc".into() },
        margins: Margins::new(
            MarginSpec::new(60).with_axis().with_label("Left"),
            MarginSpec::new(40).with_axis().with_label("Right"),
            MarginSpec::new(30).with_axis().with_label("Top"),
            MarginSpec::new(50).with_axis().with_label("Bottom"),
        ),
        ..ChartConfig::default()
    }
}

/// Top-level groups as `(dx, dy, contents)`, in emission order.
fn groups(cmds: &[DrawCmd]) -> Vec<(f64, f64, Vec<DrawCmd>)> {
    let mut out = Vec::new();
    let mut current: Option<(f64, f64, Vec<DrawCmd>)> = None;
    for cmd in cmds {
        match cmd {
            DrawCmd::BeginGroup { dx, dy } => {
                assert!(current.is_none(), "groups are not nested");
                current = Some((*dx, *dy, Vec::new()));
            }
            DrawCmd::EndGroup => out.push(current.take().expect("EndGroup closes an open group")),
            other => {
                if let Some((_, _, body)) = current.as_mut() {
                    body.push(other.clone());
                }
            }
        }
    }
    assert!(current.is_none(), "every group is closed");
    out
}

fn lines(cmds: &[DrawCmd]) -> Vec<&Line> {
    cmds.iter().filter_map(|c| if let DrawCmd::Line(l) = c { Some(l) } else { None }).collect()
}

fn texts(cmds: &[DrawCmd]) -> Vec<&Text> {
    cmds.iter().filter_map(|c| if let DrawCmd::Text(t) = c { Some(t) } else { None }).collect()
}

#[test]
fn document_is_framed_by_begin_and_end() {
    let frame = Chart::new(config()).frame().expect("frame");
    let cmds = &frame.commands;
    assert_eq!(cmds.first(), Some(&DrawCmd::BeginDocument { width: 700, height: 380 }));
    assert_eq!(cmds.last(), Some(&DrawCmd::EndDocument));
    match &cmds[1] {
        DrawCmd::Rect(r) => {
            assert_eq!(r.fill, "#ffffff");
            assert_eq!((r.width, r.height), (700.0, 380.0));
        }
        other => panic!("expected background rect, got {other:?}"),
    }
}

#[test]
fn no_background_rect_for_transparent_theme() {
    let mut cfg = config();
    cfg.theme.background = "none".into();
    let frame = Chart::new(cfg).frame().expect("frame");
    assert!(matches!(frame.commands[1], DrawCmd::BeginGroup { .. }));
}

#[test]
fn grid_then_margins_in_stacking_order() {
    let frame = Chart::new(config()).frame().expect("frame");
    let origins: Vec<(f64, f64)> = groups(&frame.commands).iter().map(|(dx, dy, _)| (*dx, *dy)).collect();
    assert_eq!(
        origins,
        vec![
            (60.0, 30.0),  // grid
            (60.0, 0.0),   // top
            (60.0, 330.0), // bottom
            (0.0, 30.0),   // left
            (660.0, 30.0), // right
        ]
    );
}

#[test]
fn disabled_grid_emits_no_grid_group() {
    let mut cfg = config();
    cfg.grid.enabled = false;
    let frame = Chart::new(cfg).frame().expect("frame");
    let g = groups(&frame.commands);
    assert_eq!(g.len(), 4);
    assert_eq!((g[0].0, g[0].1), (60.0, 0.0));
}

#[test]
fn grid_lines_cover_plot_inclusive() {
    let frame = Chart::new(config()).frame().expect("frame");
    let (_, _, grid) = &groups(&frame.commands)[0];
    let grid_lines = lines(grid);
    assert_eq!(grid_lines.len(), 11 + 6);

    let verticals = &grid_lines[..11];
    assert!(verticals.iter().all(|l| l.x1 == l.x2 && l.y1 == 0.0 && l.y2 == 300.0));
    assert_eq!(verticals[0].x1, 0.0);
    assert_eq!(verticals[10].x1, 600.0);

    let horizontals = &grid_lines[11..];
    let ys: Vec<f64> = horizontals.iter().map(|l| l.y1).collect();
    assert_eq!(ys, vec![0.0, 60.0, 120.0, 180.0, 240.0, 300.0]);
    assert!(horizontals.iter().all(|l| l.x1 == 0.0 && l.x2 == 600.0));
    assert!(grid_lines.iter().all(|l| l.stroke == "#cccccc"));
}

#[test]
fn bottom_margin_ticks_and_labels() {
    let frame = Chart::new(config()).frame().expect("frame");
    let (_, _, bottom) = &groups(&frame.commands)[2];

    let bottom_lines = lines(bottom);
    // axis line, then one tick per boundary
    assert_eq!(bottom_lines.len(), 1 + 11);
    let axis = bottom_lines[0];
    assert_eq!((axis.x1, axis.y1, axis.x2, axis.y2), (0.0, 0.0, 600.0, 0.0));
    assert!(bottom_lines[1..].iter().all(|t| t.y1 == 0.0 && t.y2 == 5.0));

    let labels: Vec<&str> = texts(bottom).iter().map(|t| t.content.as_str()).collect();
    assert_eq!(
        labels,
        vec!["0", "100", "200", "300", "400", "500", "600", "700", "800", "900", "1000", "Bottom"]
    );
    let at_300 = texts(bottom).into_iter().find(|t| t.x == 300.0 && t.content != "Bottom").expect("tick at 300px");
    assert_eq!(at_300.content, "500");
    assert_eq!(at_300.anchor, TextAnchor::Middle);
    assert_eq!(at_300.baseline, Baseline::Hanging);
    assert_eq!(at_300.y, 8.0);
}

#[test]
fn left_margin_labels_run_top_to_bottom() {
    let frame = Chart::new(config()).frame().expect("frame");
    let (_, _, left) = &groups(&frame.commands)[3];

    let ticks: Vec<&Text> = texts(left).into_iter().filter(|t| t.content != "Left").collect();
    let labels: Vec<&str> = ticks.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(labels, vec!["500", "400", "300", "200", "100", "0"]);
    assert!(ticks.iter().all(|t| t.anchor == TextAnchor::End && t.baseline == Baseline::Middle));
    assert!(ticks.iter().all(|t| t.x == 52.0));

    let axis = lines(left)[0];
    assert_eq!((axis.x1, axis.y1, axis.x2, axis.y2), (60.0, 0.0, 60.0, 300.0));
}

#[test]
fn reversed_y_axis_still_increases_upward() {
    let mut cfg = config();
    cfg.y_axis = AxisSpec::new("Y", 500.0, 0.0);
    let frame = Chart::new(cfg).frame().expect("frame");
    let (_, _, left) = &groups(&frame.commands)[3];
    let labels: Vec<String> = texts(left).iter().filter(|t| t.content != "Left").map(|t| t.content.clone()).collect();
    assert_eq!(labels, vec!["500", "400", "300", "200", "100", "0"]);
}

#[test]
fn margin_tick_unit_controls_tick_spacing() {
    let mut cfg = config();
    cfg.margins.bottom.tick_unit = 250.0;
    let frame = Chart::new(cfg).frame().expect("frame");
    let (_, _, bottom) = &groups(&frame.commands)[2];
    let xs: Vec<f64> = lines(bottom)[1..].iter().map(|l| l.x1).collect();
    assert_eq!(xs, vec![0.0, 150.0, 300.0, 450.0, 600.0]);
    let labels: Vec<String> = texts(bottom).iter().map(|t| t.content.clone()).collect();
    assert_eq!(labels, vec!["0", "250", "500", "750", "1000", "Bottom"]);
}

#[test]
fn axis_labels_are_centered_and_rotated_per_side() {
    let frame = Chart::new(config()).frame().expect("frame");
    let g = groups(&frame.commands);
    let label = |idx: usize, content: &str| -> Text {
        texts(&g[idx].2).into_iter().find(|t| t.content == content).cloned().expect("axis label")
    };

    let top = label(1, "Top");
    assert_eq!((top.x, top.y, top.rotation), (300.0, 15.0, 0.0));
    let bottom = label(2, "Bottom");
    assert_eq!((bottom.x, bottom.y, bottom.rotation), (300.0, 25.0, 0.0));
    let left = label(3, "Left");
    assert_eq!((left.x, left.y, left.rotation), (30.0, 150.0, -90.0));
    let right = label(4, "Right");
    assert_eq!((right.x, right.y, right.rotation), (20.0, 150.0, 90.0));
    assert_eq!(left.font_size, 14.0);
}

#[test]
fn empty_margin_label_falls_back_to_axis_label() {
    let mut cfg = config();
    cfg.margins.bottom.label.clear();
    cfg.x_axis.label = "Distance".into();
    let frame = Chart::new(cfg).frame().expect("frame");
    let (_, _, bottom) = &groups(&frame.commands)[2];
    assert!(texts(bottom).iter().any(|t| t.content == "Distance"));
}

#[test]
fn band_without_axis_line_draws_only_its_label() {
    let mut cfg = config();
    cfg.margins.top.axis_line = false;
    let frame = Chart::new(cfg).frame().expect("frame");
    let (_, _, top) = &groups(&frame.commands)[1];
    assert!(lines(top).is_empty());
    assert_eq!(texts(top).len(), 1);
}

#[test]
fn debug_outline_rect_matches_band_footprint() {
    let mut cfg = config();
    cfg.debug_outline = true;
    let frame = Chart::new(cfg).frame().expect("frame");
    let g = groups(&frame.commands);
    let outline = |idx: usize| -> Rect {
        match &g[idx].2[0] {
            DrawCmd::Rect(r) => r.clone(),
            other => panic!("expected outline rect, got {other:?}"),
        }
    };
    assert_eq!((outline(1).width, outline(1).height), (600.0, 30.0));
    assert_eq!((outline(2).width, outline(2).height), (600.0, 50.0));
    assert_eq!((outline(3).width, outline(3).height), (60.0, 300.0));
    assert_eq!((outline(4).width, outline(4).height), (40.0, 300.0));
    assert_eq!(outline(1).stroke, "#ff0000");
}

#[test]
fn points_follow_the_frame() {
    let chart = Chart::new(config()).with_points(vec![DataPoint::new(500.0, 250.0, 4.0), DataPoint::new(0.0, 0.0, 2.0)]);
    let frame = chart.frame().expect("frame");
    let n = frame.commands.len();
    let circles: Vec<&Circle> = frame.commands[n - 3..n - 1]
        .iter()
        .map(|c| if let DrawCmd::Circle(c) = c { c } else { panic!("expected circle, got {c:?}") })
        .collect();
    assert!((circles[0].cx - 360.0).abs() < 1e-9);
    assert!((circles[0].cy - 180.0).abs() < 1e-9);
    assert_eq!(circles[0].r, 4.0);
    assert!((circles[1].cx - 60.0).abs() < 1e-9);
    assert!((circles[1].cy - 330.0).abs() < 1e-9);
}

/// Counts every call it receives.
#[derive(Default)]
struct Recorder {
    calls: usize,
}

impl DrawingBackend for Recorder {
    fn begin_document(&mut self, _: u32, _: u32) { self.calls += 1; }
    fn end_document(&mut self) { self.calls += 1; }
    fn line(&mut self, _: &Line) { self.calls += 1; }
    fn rect(&mut self, _: &Rect) { self.calls += 1; }
    fn text(&mut self, _: &Text) { self.calls += 1; }
    fn circle(&mut self, _: &Circle) { self.calls += 1; }
    fn begin_group(&mut self, _: f64, _: f64) { self.calls += 1; }
    fn end_group(&mut self) { self.calls += 1; }
}

#[test]
fn invalid_config_draws_nothing() {
    let mut cfg = config();
    cfg.x_axis = AxisSpec::new("X", 5.0, 5.0);
    let chart = Chart::new(cfg);
    let mut rec = Recorder::default();
    assert!(matches!(chart.render(&mut rec), Err(ChartError::InvalidRange { .. })));
    assert_eq!(rec.calls, 0);
    assert!(chart.render_svg().is_err());
}

#[test]
fn unusable_points_fail_before_drawing() {
    let bad = [
        DataPoint::new(f64::NAN, 10.0, 4.0),
        DataPoint::new(10.0, 10.0, -3.0),
        DataPoint::new(f64::INFINITY, 1.0, 2.0),
        DataPoint::new(10.0, 10.0, f64::NAN),
    ];
    for point in bad {
        let chart = Chart::new(config()).with_points(vec![DataPoint::new(100.0, 100.0, 3.0), point]);
        let mut rec = Recorder::default();
        assert!(
            matches!(chart.render(&mut rec), Err(ChartError::MalformedConfig(_))),
            "{point:?} should be rejected"
        );
        assert_eq!(rec.calls, 0);
        assert!(chart.render_svg().is_err());
    }
}

#[test]
fn point_overflowing_the_screen_is_rejected() {
    let mut cfg = config();
    // 6px per unit: f64::MAX maps past the largest finite pixel
    cfg.x_axis = AxisSpec::new("X", 0.0, 100.0);
    cfg.y_axis = AxisSpec::new("Y", 0.0, 50.0);
    cfg.grid.unit = 10.0;
    let chart = Chart::new(cfg).with_points(vec![DataPoint::new(f64::MAX, 10.0, 1.0)]);
    assert!(matches!(chart.frame(), Err(ChartError::MalformedConfig(_))));
}

#[test]
fn zero_radius_point_is_drawn() {
    let chart = Chart::new(config()).with_points(vec![DataPoint::new(100.0, 100.0, 0.0)]);
    let svg = chart.render_svg().expect("zero radius is allowed");
    assert!(svg.contains("r=\"0\""));
}

#[test]
fn render_replays_the_whole_frame() {
    let chart = Chart::new(config());
    let mut rec = Recorder::default();
    let layout = chart.render(&mut rec).expect("render");
    assert_eq!(layout.screen_height, 380);
    assert_eq!(rec.calls, chart.frame().expect("frame").commands.len());
}

#[test]
fn rendering_is_repeatable() {
    let chart = Chart::new(config()).with_points(vec![DataPoint::new(123.0, 45.0, 3.0)]);
    assert_eq!(chart.frame().expect("first"), chart.frame().expect("second"));
}

#[test]
fn tick_values_format_compactly() {
    assert_eq!(format_tick(500.00000000000006), "500");
    assert_eq!(format_tick(-0.0), "0");
    assert_eq!(format_tick(1.0 / 3.0), "0.333333");
    assert_eq!(format_tick(-250.0), "-250");
}
