use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{Primitive, PrimitiveKind, TextPrimitive};

/// Backend-agnostic, ordered list of primitives for one chart draw pass.
///
/// Later primitives paint over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    #[must_use]
    pub fn with(mut self, primitive: impl Into<Primitive>) -> Self {
        self.push(primitive);
        self
    }

    #[must_use]
    pub fn count(&self, kind: PrimitiveKind) -> usize {
        self.primitives
            .iter()
            .filter(|primitive| primitive.kind() == kind)
            .count()
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for primitive in &self.primitives {
            primitive.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
