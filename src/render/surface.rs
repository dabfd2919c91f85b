use tracing::trace;

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{Primitive, Scene};

/// Named drawing area a chart renders into.
///
/// Charts never create or destroy surfaces; they only read the displayed size
/// and replace the content.
pub trait DrawingSurface {
    /// Stable identifier, e.g. `xp-growth-surface`.
    fn key(&self) -> &str;

    /// Currently displayed size. Zero dimensions mean "not laid out yet".
    fn displayed_size(&self) -> Viewport;

    fn clear(&mut self) -> ChartResult<()>;

    fn resize(&mut self, viewport: Viewport) -> ChartResult<()>;

    fn append(&mut self, primitive: Primitive) -> ChartResult<()>;

    /// Replaces the surface content with `scene`.
    ///
    /// The scene is validated before anything is cleared, so a rejected scene
    /// leaves the previous content in place. The displayed size is left
    /// alone; the scene may draw past it.
    fn present(&mut self, scene: &Scene) -> ChartResult<()> {
        scene.validate()?;
        replace_content(self, scene)
    }

    /// Like [`present`](Self::present), but first resizes the surface to the
    /// scene viewport. For charts whose content decides the surface size.
    fn present_resized(&mut self, scene: &Scene) -> ChartResult<()> {
        scene.validate()?;
        if self.displayed_size() != scene.viewport {
            trace!(
                surface = self.key(),
                width = scene.viewport.width,
                height = scene.viewport.height,
                "resize surface to scene"
            );
            self.resize(scene.viewport)?;
        }
        replace_content(self, scene)
    }
}

fn replace_content<S: DrawingSurface + ?Sized>(surface: &mut S, scene: &Scene) -> ChartResult<()> {
    surface.clear()?;
    for primitive in &scene.primitives {
        surface.append(primitive.clone())?;
    }
    trace!(
        surface = surface.key(),
        primitive_count = scene.primitives.len(),
        "presented scene"
    );
    Ok(())
}

/// In-memory surface used by tests and headless hosts.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSurface {
    key: String,
    size: Viewport,
    primitives: Vec<Primitive>,
    clear_count: usize,
}

impl SceneSurface {
    #[must_use]
    pub fn new(key: impl Into<String>, size: Viewport) -> Self {
        Self {
            key: key.into(),
            size,
            primitives: Vec::new(),
            clear_count: 0,
        }
    }

    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of times the surface has been cleared.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    /// Snapshot of the current content.
    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene {
            viewport: self.size,
            primitives: self.primitives.clone(),
        }
    }
}

impl DrawingSurface for SceneSurface {
    fn key(&self) -> &str {
        &self.key
    }

    fn displayed_size(&self) -> Viewport {
        self.size
    }

    fn clear(&mut self) -> ChartResult<()> {
        self.primitives.clear();
        self.clear_count += 1;
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
