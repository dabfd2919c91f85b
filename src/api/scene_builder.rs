use smallvec::SmallVec;

use crate::core::{ChartLayout, Viewport};
use crate::render::{
    LinePrimitive, LineStrokeStyle, Primitive, Scene, TextHAlign, TextPrimitive, TextVAlign,
};

use super::{ChartStyle, LabelLocale, format_grouped_number};

/// One horizontal value level of a chart grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLevel {
    /// Absolute canvas y.
    pub y: f64,
    pub value: f64,
    /// The zero line is drawn solid; every other level is dashed.
    pub is_baseline: bool,
}

/// Evenly spaced levels from `max_value` at the plot top down to 0 at the
/// plot bottom: `count` grid levels plus the baseline.
#[must_use]
pub fn grid_levels(layout: &ChartLayout, max_value: f64, count: usize) -> SmallVec<[GridLevel; 8]> {
    if count == 0 {
        return SmallVec::new();
    }
    let steps = count as f64;
    let row_height = layout.plot_height() / steps;
    (0..=count)
        .map(|index| {
            let i = index as f64;
            GridLevel {
                y: layout.plot_top() + row_height * i,
                value: max_value - (max_value / steps) * i,
                is_baseline: index == count,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ValueGridContext<'a> {
    pub max_value: f64,
    pub line_count: usize,
    pub unit_suffix: &'a str,
    pub locale: LabelLocale,
}

/// Pure, ordered accumulator of chart primitives.
///
/// Chart variants push primitives back to front and hand the finished
/// `Scene` to a surface; nothing here touches a surface.
#[derive(Debug)]
pub(crate) struct SceneBuilder {
    scene: Scene,
    style: ChartStyle,
}

impl SceneBuilder {
    pub fn new(viewport: Viewport, style: ChartStyle) -> Self {
        Self {
            scene: Scene::new(viewport),
            style,
        }
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    pub fn push(&mut self, primitive: impl Into<Primitive>) -> &mut Self {
        self.scene.push(primitive);
        self
    }

    /// X axis along the plot bottom, then Y axis along the plot left.
    pub fn axes(&mut self, layout: &ChartLayout) -> &mut Self {
        let color = self.style.text_color;
        let width = self.style.axis_line_width;
        self.push(LinePrimitive::new(
            layout.plot_left(),
            layout.plot_bottom(),
            layout.plot_right(),
            layout.plot_bottom(),
            width,
            color,
        ));
        self.push(LinePrimitive::new(
            layout.plot_left(),
            layout.plot_top(),
            layout.plot_left(),
            layout.plot_bottom(),
            width,
            color,
        ))
    }

    /// Dashed grid lines, a solid zero baseline and a right-aligned value
    /// label left of the plot for every level.
    pub fn value_grid(&mut self, layout: &ChartLayout, ctx: ValueGridContext<'_>) -> &mut Self {
        let label_x = layout.plot_left() - 10.0;
        for level in grid_levels(layout, ctx.max_value, ctx.line_count) {
            let stroke_style = if level.is_baseline {
                LineStrokeStyle::Solid
            } else {
                LineStrokeStyle::Dashed
            };
            self.push(
                LinePrimitive::new(
                    layout.plot_left(),
                    level.y,
                    layout.plot_right(),
                    level.y,
                    self.style.grid_line_width,
                    self.style.grid_line_color,
                )
                .with_stroke_style(stroke_style),
            );

            let label = format!(
                "{} {}",
                format_grouped_number(level.value.round(), ctx.locale),
                ctx.unit_suffix
            );
            self.text(label, label_x, level.y, TextHAlign::Right, TextVAlign::Middle);
        }
        self
    }

    /// Regular-size label in the default text color.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        x: f64,
        y: f64,
        h_align: TextHAlign,
        v_align: TextVAlign,
    ) -> &mut Self {
        let primitive = TextPrimitive::new(
            text,
            x,
            y,
            self.style.font_size_px,
            self.style.text_color,
            h_align,
        )
        .with_v_align(v_align);
        self.push(primitive)
    }

    /// Bold, centered title in the default text color.
    pub fn title(&mut self, text: impl Into<String>, x: f64, y: f64) -> &mut Self {
        let primitive = TextPrimitive::new(
            text,
            x,
            y,
            self.style.title_font_size_px,
            self.style.text_color,
            TextHAlign::Center,
        )
        .bold();
        self.push(primitive)
    }

    pub fn finish(self) -> Scene {
        self.scene
    }
}

/// Scene holding only a muted, centered message.
#[must_use]
pub fn build_no_data_scene(viewport: Viewport, message: &str, style: &ChartStyle) -> Scene {
    let x = f64::from(viewport.width) / 2.0;
    let y = f64::from(viewport.height) / 2.0;
    Scene::new(viewport).with(
        TextPrimitive::new(
            message,
            x,
            y,
            style.font_size_px,
            style.muted_text_color,
            TextHAlign::Center,
        )
        .with_v_align(TextVAlign::Middle),
    )
}
