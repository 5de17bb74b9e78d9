//! Image Renderer Adapters.
//!
//! - `SvgCardRenderer` - self-contained SVG document, the shipped backend

mod svg_renderer;

pub use svg_renderer::SvgCardRenderer;
