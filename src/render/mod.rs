mod primitives;
mod scene;
mod surface;
mod svg;

pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, PathPrimitive, Primitive,
    PrimitiveKind, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};
pub use scene::Scene;
pub use surface::{DrawingSurface, SceneSurface};
pub use svg::SvgSurface;

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoSurface};
