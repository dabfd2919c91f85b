use chrono::{DateTime, TimeZone, Utc};
use profile_charts::api::{
    ChartStyle, DashboardConfig, NO_XP_DATA_MESSAGE, build_xp_growth_scene, render_xp_growth,
};
use profile_charts::core::{Viewport, XpEvent};
use profile_charts::render::{
    DrawingSurface, LineStrokeStyle, Primitive, PrimitiveKind, SceneSurface, TextHAlign,
};

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid date")
}

fn texts(primitives: &[Primitive]) -> Vec<&str> {
    primitives
        .iter()
        .filter_map(|primitive| match primitive {
            Primitive::Text(text) => Some(text.text.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn empty_events_render_only_placeholder() {
    let mut surface = SceneSurface::new("xp-growth-surface", Viewport::new(640, 320));
    render_xp_growth(&mut surface, &[], &DashboardConfig::default()).expect("render");

    let primitives = surface.primitives();
    assert_eq!(primitives.len(), 1);
    let Primitive::Text(text) = &primitives[0] else {
        panic!("placeholder must be text");
    };
    assert_eq!(text.text, NO_XP_DATA_MESSAGE);
    assert_eq!((text.x, text.y), (320.0, 160.0));
    assert_eq!(text.h_align, TextHAlign::Center);
    assert_eq!(text.color, ChartStyle::default().muted_text_color);
}

#[test]
fn placeholder_on_unsized_surface_uses_fallback() {
    let scene = build_xp_growth_scene(&[], Viewport::new(0, 0), &DashboardConfig::default());
    assert_eq!(scene.viewport, Viewport::new(300, 200));
    let text = scene.texts().next().expect("placeholder text");
    assert_eq!((text.x, text.y), (150.0, 100.0));
}

#[test]
fn single_event_sits_at_left_edge_without_failing() {
    let events = [XpEvent::new("/gritlab/school-curriculum/go-reloaded", 500, at(2024, 3, 14))];
    let scene = build_xp_growth_scene(&events, Viewport::new(600, 300), &DashboardConfig::default());

    assert_eq!(scene.count(PrimitiveKind::Circle), 1);
    let circle = scene
        .primitives
        .iter()
        .find_map(|primitive| match primitive {
            Primitive::Circle(circle) => Some(*circle),
            _ => None,
        })
        .expect("marker");
    // max XP = 1000, so 500 lands halfway up the 220px plot.
    assert_eq!(circle.cx, 70.0);
    assert_eq!(circle.cy, 150.0);
    assert!(scene.validate().is_ok());

    let labels: Vec<_> = scene.texts().map(|text| text.text.as_str()).collect();
    assert!(labels.contains(&"XP Growth Over Time: 500 XP"));
    assert!(labels.contains(&"1,000 XP"));
    assert_eq!(
        labels.iter().filter(|label| **label == "3/14/2024").count(),
        2
    );
}

#[test]
fn grid_has_five_dashed_lines_and_solid_baseline() {
    let events = [
        XpEvent::new("/a", 1500, at(2024, 1, 1)),
        XpEvent::new("/b", 2000, at(2024, 2, 1)),
    ];
    let scene = build_xp_growth_scene(&events, Viewport::new(600, 300), &DashboardConfig::default());

    let lines: Vec<_> = scene
        .primitives
        .iter()
        .filter_map(|primitive| match primitive {
            Primitive::Line(line) => Some(*line),
            _ => None,
        })
        .collect();
    assert_eq!(lines.len(), 8);
    let dashed = lines
        .iter()
        .filter(|line| line.stroke_style == LineStrokeStyle::Dashed)
        .count();
    assert_eq!(dashed, 5);

    let baseline = lines
        .iter()
        .find(|line| line.stroke_style == LineStrokeStyle::Solid && line.y1 == 260.0 && line.stroke_width == 1.0)
        .expect("solid baseline at value 0");
    assert_eq!((baseline.x1, baseline.x2), (70.0, 560.0));

    let labels: Vec<_> = scene
        .texts()
        .filter(|text| text.h_align == TextHAlign::Right && text.x == 60.0)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(
        labels,
        ["4,000 XP", "3,200 XP", "2,400 XP", "1,600 XP", "800 XP", "0 XP"]
    );
}

#[test]
fn unsorted_input_is_read_in_time_order_and_left_untouched() {
    let events = vec![
        XpEvent::new("/late", 300, at(2024, 5, 1)),
        XpEvent::new("/early", 100, at(2024, 1, 1)),
        XpEvent::new("/middle", 200, at(2024, 3, 1)),
    ];
    let before = events.clone();
    let scene = build_xp_growth_scene(&events, Viewport::new(600, 300), &DashboardConfig::default());
    assert_eq!(events, before);

    let path = scene
        .primitives
        .iter()
        .find_map(|primitive| match primitive {
            Primitive::Path(path) => Some(path.clone()),
            _ => None,
        })
        .expect("growth path");
    assert_eq!(path.points.len(), 3);
    assert!(path.points.windows(2).all(|pair| pair[0].0 < pair[1].0));
    assert!(path.points.windows(2).all(|pair| pair[0].1 > pair[1].1));
    assert_eq!(path.points[0].0, 70.0);
    assert_eq!(path.points[2].0, 560.0);

    let labels: Vec<_> = scene.texts().map(|text| text.text.as_str()).collect();
    assert!(labels.contains(&"1/1/2024"));
    assert!(labels.contains(&"5/1/2024"));
    assert!(labels.contains(&"XP Growth Over Time: 600 XP"));
}

#[test]
fn unsized_surface_is_drawn_at_fallback_without_resizing() {
    let events = [XpEvent::new("/a", 1200, at(2024, 1, 1))];
    let mut surface = SceneSurface::new("xp-growth-surface", Viewport::new(0, 0));
    render_xp_growth(&mut surface, &events, &DashboardConfig::default()).expect("render");

    assert_eq!(surface.displayed_size(), Viewport::new(0, 0));
    assert_eq!(surface.clear_count(), 1);
    let labels = texts(surface.primitives());
    assert!(labels.contains(&"XP Growth Over Time: 1,200 XP"));
    assert!(labels.contains(&"2,000 XP"));
}

#[test]
fn rerender_replaces_previous_content() {
    let mut surface = SceneSurface::new("xp-growth-surface", Viewport::new(600, 300));
    let config = DashboardConfig::default();
    let events = [XpEvent::new("/a", 700, at(2024, 1, 1))];

    render_xp_growth(&mut surface, &events, &config).expect("first render");
    let first = surface.primitives().len();
    render_xp_growth(&mut surface, &events, &config).expect("second render");

    assert_eq!(surface.primitives().len(), first);
    assert_eq!(surface.clear_count(), 2);
}
