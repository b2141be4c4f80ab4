use crate::render::Surface;
use crate::scene::Document;

/// One history entry: the composited pixels and the document behind them.
///
/// Bitmaps are shared with the live document through `Arc`, so a snapshot
/// costs one surface copy plus the object list.
#[derive(Debug, Clone)]
pub struct Snapshot {
    surface: Surface,
    document: Document,
}

impl Snapshot {
    pub fn capture(document: &Document, surface: &Surface) -> Self {
        Self { surface: surface.clone(), document: document.clone() }
    }

    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    #[inline]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Writes this snapshot back into the live document and surface.
    pub fn restore_into(&self, document: &mut Document, surface: &mut Surface) {
        document.restore_from(&self.document);
        surface.copy_from(&self.surface);
    }
}
