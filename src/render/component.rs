//! Rendered output types.

use crate::render::svg;

/// An SVG fragment plus the pixel box it occupies. Fragments are positioned
/// by their parent (a card frame or the container composer), so coordinates
/// inside `content` are relative to the fragment's own origin.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedComponent {
    pub content: String,
    pub width: f64,
    pub height: f64,
}

impl RenderedComponent {
    #[must_use]
    pub fn new(content: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            content: content.into(),
            width,
            height,
        }
    }

    /// Promotes the fragment to a standalone SVG document.
    #[must_use]
    pub fn into_document(self) -> Document {
        Document {
            svg: svg::document(self.width, self.height, &self.content),
            width: self.width,
            height: self.height,
        }
    }
}

/// A complete standalone SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub svg: String,
    pub width: f64,
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_document_wraps_with_viewbox() {
        let doc = RenderedComponent::new("<rect/>", 300.0, 200.0).into_document();
        assert!(doc.svg.starts_with("<svg xmlns="));
        assert!(doc.svg.contains("viewBox=\"0 0 300 200\""));
        assert!(doc.svg.contains("<rect/>"));
    }
}
