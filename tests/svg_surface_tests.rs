use chrono::{TimeZone, Utc};
use profile_charts::api::{DashboardConfig, render_xp_growth};
use profile_charts::core::{Viewport, XpEvent};
use profile_charts::render::{
    Color, DrawingSurface, LinePrimitive, LineStrokeStyle, RectPrimitive, Scene, SvgSurface,
    TextHAlign, TextPrimitive, TextVAlign,
};

#[test]
fn document_reflects_primitive_attributes() {
    let scene = Scene::new(Viewport::new(200, 100))
        .with(
            LinePrimitive::new(10.0, 20.0, 190.0, 20.0, 1.0, Color::rgb8(0x55, 0x55, 0x55))
                .with_stroke_style(LineStrokeStyle::Dashed),
        )
        .with(RectPrimitive::new(10.0, 30.0, 12.5, 40.0, Color::rgb8(0x4c, 0xaf, 0x50)))
        .with(
            TextPrimitive::new("Up & <Down>", 5.0, 50.0, 12.0, Color::rgb(1.0, 1.0, 1.0), TextHAlign::Right)
                .with_v_align(TextVAlign::Middle)
                .bold(),
        );

    let mut surface = SvgSurface::new("audit-ratio-surface", Viewport::new(200, 100));
    surface.present(&scene).expect("present");
    let svg = surface.to_svg_document();

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" id=\"audit-ratio-surface\""));
    assert!(svg.contains(
        r##"<line x1="10" y1="20" x2="190" y2="20" stroke="#555555" stroke-width="1" stroke-dasharray="5,5"/>"##
    ));
    assert!(svg.contains(r##"<rect x="10" y="30" width="12.5" height="40" fill="#4caf50"/>"##));
    assert!(svg.contains(r#"text-anchor="end" dominant-baseline="middle" font-weight="bold">Up &amp; &lt;Down&gt;</text>"#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn rejected_scene_keeps_previous_content() {
    let mut surface = SvgSurface::new("xp-growth-surface", Viewport::new(100, 100));
    let good = Scene::new(Viewport::new(100, 100)).with(RectPrimitive::new(
        0.0,
        0.0,
        10.0,
        10.0,
        Color::rgb(1.0, 0.0, 0.0),
    ));
    surface.present(&good).expect("valid scene");
    let before = surface.to_svg_document();

    let bad = Scene::new(Viewport::new(100, 100)).with(RectPrimitive::new(
        0.0,
        0.0,
        -5.0,
        10.0,
        Color::rgb(1.0, 0.0, 0.0),
    ));
    assert!(surface.present(&bad).is_err());
    assert_eq!(surface.to_svg_document(), before);
}

#[test]
fn growth_chart_serializes_path_and_markers() {
    let at = |day| {
        Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0)
            .single()
            .expect("valid date")
    };
    let events = [
        XpEvent::new("/a", 400, at(1)),
        XpEvent::new("/b", 600, at(11)),
    ];
    let mut surface = SvgSurface::new("xp-growth-surface", Viewport::new(600, 300));
    render_xp_growth(&mut surface, &events, &DashboardConfig::default()).expect("render");
    let svg = surface.to_svg_document();

    assert_eq!(svg.matches("<circle").count(), 2);
    assert!(svg.contains(r##"<path d="M 70 172 L 560 40" fill="none" stroke="#b77ac7" stroke-width="3"/>"##));
    assert!(svg.contains("XP Growth Over Time: 1,000 XP"));
    assert_eq!(svg.matches(r#"stroke-dasharray="5,5""#).count(), 5);
}

#[test]
fn only_explicit_resize_changes_document_size() {
    let scene = Scene::new(Viewport::new(300, 200)).with(RectPrimitive::new(
        0.0,
        0.0,
        10.0,
        10.0,
        Color::rgb(1.0, 0.0, 0.0),
    ));
    let mut surface = SvgSurface::new("audit-ratio-surface", Viewport::new(640, 0));

    surface.present(&scene).expect("present");
    assert_eq!(surface.displayed_size(), Viewport::new(640, 0));
    assert!(surface.to_svg_document().contains(r#"width="640" height="0""#));

    surface.present_resized(&scene).expect("present resized");
    assert_eq!(surface.displayed_size(), Viewport::new(300, 200));
    assert!(surface.to_svg_document().contains(r#"width="300" height="200""#));
}
