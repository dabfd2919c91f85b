use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DrawingSurface, LineStrokeStyle, Primitive, TextHAlign, TextPrimitive, TextVAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub circles_drawn: usize,
    pub paths_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango raster surface.
///
/// Primitives are painted as soon as they are appended, so the image always
/// reflects the current surface content.
#[derive(Debug)]
pub struct CairoSurface {
    key: String,
    size: Viewport,
    surface: ImageSurface,
    clear_color: Color,
    stats: CairoRenderStats,
}

impl CairoSurface {
    pub fn new(key: impl Into<String>, size: Viewport) -> ChartResult<Self> {
        let surface = create_image_surface(size)?;
        Ok(Self {
            key: key.into(),
            size,
            surface,
            clear_color: Color::rgb8(0x1e, 0x1e, 0x1e),
            stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    /// Counts of primitives painted since the last clear.
    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }

    pub fn write_png<W: std::io::Write>(&self, writer: &mut W) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::Backend(format!("failed to encode png: {err}")))
    }

    fn context(&self) -> ChartResult<Context> {
        Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))
    }
}

impl DrawingSurface for CairoSurface {
    fn key(&self) -> &str {
        &self.key
    }

    fn displayed_size(&self) -> Viewport {
        self.size
    }

    fn clear(&mut self) -> ChartResult<()> {
        let context = self.context()?;
        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.stats = CairoRenderStats::default();
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.surface = create_image_surface(viewport)?;
        self.size = viewport;
        self.clear()
    }

    fn append(&mut self, primitive: Primitive) -> ChartResult<()> {
        primitive.validate()?;
        let context = self.context()?;
        match &primitive {
            Primitive::Line(line) => {
                apply_color(&context, line.color);
                context.set_line_width(line.stroke_width);
                if line.stroke_style == LineStrokeStyle::Dashed {
                    context.set_dash(&[5.0, 5.0], 0.0);
                }
                context.move_to(line.x1, line.y1);
                context.line_to(line.x2, line.y2);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke line", err))?;
                self.stats.lines_drawn += 1;
            }
            Primitive::Rect(rect) => {
                apply_color(&context, rect.fill_color);
                context.rectangle(rect.x, rect.y, rect.width, rect.height);
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                self.stats.rects_drawn += 1;
            }
            Primitive::Circle(circle) => {
                context.new_path();
                context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
                apply_color(&context, circle.fill_color);
                if let Some((stroke_color, stroke_width)) = circle.stroke {
                    context
                        .fill_preserve()
                        .map_err(|err| map_backend_error("failed to fill circle", err))?;
                    apply_color(&context, stroke_color);
                    context.set_line_width(stroke_width);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke circle", err))?;
                } else {
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill circle", err))?;
                }
                self.stats.circles_drawn += 1;
            }
            Primitive::Path(path) => {
                apply_color(&context, path.color);
                context.set_line_width(path.stroke_width);
                for (index, (x, y)) in path.points.iter().enumerate() {
                    if index == 0 {
                        context.move_to(*x, *y);
                    } else {
                        context.line_to(*x, *y);
                    }
                }
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke path", err))?;
                self.stats.paths_drawn += 1;
            }
            Primitive::Text(text) => {
                draw_text(&context, text);
                self.stats.texts_drawn += 1;
            }
        }
        Ok(())
    }
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let mut font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    if text.bold {
        font_description.set_weight(pango::Weight::Bold);
    }
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };
    let y = match text.v_align {
        TextVAlign::Baseline => text.y - f64::from(layout.baseline() / pango::SCALE),
        TextVAlign::Middle => text.y - f64::from(text_height) / 2.0,
    };

    apply_color(context, text.color);
    context.move_to(x, y);
    pangocairo::functions::show_layout(context, &layout);
}

fn create_image_surface(size: Viewport) -> ChartResult<ImageSurface> {
    if !size.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: size.width,
            height: size.height,
        });
    }
    let width = i32::try_from(size.width)
        .map_err(|_| ChartError::Backend("surface width overflows i32".to_owned()))?;
    let height = i32::try_from(size.height)
        .map_err(|_| ChartError::Backend("surface height overflows i32".to_owned()))?;
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
