use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{
    DrawingSurface, LineStrokeStyle, Primitive, TextHAlign, TextPrimitive, TextVAlign,
};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Drawing surface that serializes its content as a standalone SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgSurface {
    key: String,
    size: Viewport,
    primitives: Vec<Primitive>,
}

impl SvgSurface {
    #[must_use]
    pub fn new(key: impl Into<String>, size: Viewport) -> Self {
        Self {
            key: key.into(),
            size,
            primitives: Vec::new(),
        }
    }

    /// Renders the current content, in paint order.
    #[must_use]
    pub fn to_svg_document(&self) -> String {
        let mut out = format!(
            r#"<svg xmlns="{SVG_NAMESPACE}" id="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            escape_xml(&self.key),
            self.size.width,
            self.size.height,
            self.size.width,
            self.size.height,
        );
        out.push('\n');
        for primitive in &self.primitives {
            out.push_str("  ");
            out.push_str(&primitive_element(primitive));
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

impl DrawingSurface for SvgSurface {
    fn key(&self) -> &str {
        &self.key
    }

    fn displayed_size(&self) -> Viewport {
        self.size
    }

    fn clear(&mut self) -> ChartResult<()> {
        self.primitives.clear();
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.size = viewport;
        Ok(())
    }

    fn append(&mut self, primitive: Primitive) -> ChartResult<()> {
        self.primitives.push(primitive);
        Ok(())
    }
}

fn primitive_element(primitive: &Primitive) -> String {
    match primitive {
        Primitive::Line(line) => {
            let dash = match line.stroke_style {
                LineStrokeStyle::Solid => "",
                LineStrokeStyle::Dashed => r#" stroke-dasharray="5,5""#,
            };
            format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{dash}/>"#,
                num(line.x1),
                num(line.y1),
                num(line.x2),
                num(line.y2),
                line.color.to_hex(),
                num(line.stroke_width),
            )
        }
        Primitive::Rect(rect) => format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height),
            rect.fill_color.to_hex(),
        ),
        Primitive::Circle(circle) => {
            let stroke = circle
                .stroke
                .map(|(color, width)| {
                    format!(
                        r#" stroke="{}" stroke-width="{}""#,
                        color.to_hex(),
                        num(width)
                    )
                })
                .unwrap_or_default();
            format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"{stroke}/>"#,
                num(circle.cx),
                num(circle.cy),
                num(circle.radius),
                circle.fill_color.to_hex(),
            )
        }
        Primitive::Path(path) => {
            let data = path
                .points
                .iter()
                .enumerate()
                .map(|(index, (x, y))| {
                    let command = if index == 0 { 'M' } else { 'L' };
                    format!("{command} {} {}", num(*x), num(*y))
                })
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                r#"<path d="{data}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                path.color.to_hex(),
                num(path.stroke_width),
            )
        }
        Primitive::Text(text) => text_element(text),
    }
}

fn text_element(text: &TextPrimitive) -> String {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let baseline = match text.v_align {
        TextVAlign::Baseline => "",
        TextVAlign::Middle => r#" dominant-baseline="middle""#,
    };
    let weight = if text.bold {
        r#" font-weight="bold""#
    } else {
        ""
    };
    format!(
        r#"<text x="{}" y="{}" fill="{}" font-size="{}" text-anchor="{anchor}"{baseline}{weight}>{}</text>"#,
        num(text.x),
        num(text.y),
        text.color.to_hex(),
        num(text.font_size_px),
        escape_xml(&text.text),
    )
}

/// Formats a coordinate with at most two decimals and no trailing zeros.
fn num(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
