//! SVG result card renderer.
//!
//! Produces a standalone 800×800 SVG document from a [`CardLayout`]. The
//! output depends only on the layout, so identical inputs give identical
//! bytes. All user text is XML-escaped.

use std::fmt::Write;

use crate::domain::result::{CardField, CardLayout, FieldKind, FontWeight};
use crate::ports::{ImageRenderer, RenderError, RenderedImage};

pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";

const FONT_FAMILY: &str = "Arial, sans-serif";

const REQUIRED_FIELDS: [FieldKind; 6] = [
    FieldKind::Title,
    FieldKind::Glyph,
    FieldKind::Meaning,
    FieldKind::Question,
    FieldKind::Description,
    FieldKind::Date,
];

/// Renders result cards as SVG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgCardRenderer;

impl SvgCardRenderer {
    pub fn new() -> Self {
        Self
    }

    fn write_document(&self, layout: &CardLayout) -> Result<String, std::fmt::Error> {
        let mut svg = String::with_capacity(2048);
        let (w, h) = (layout.width, layout.height);

        writeln!(
            svg,
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#
        )?;
        svg.push_str(concat!(
            "  <defs>\n",
            "    <linearGradient id=\"bg\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">\n",
            "      <stop offset=\"0%\" style=\"stop-color:#ffeef8;stop-opacity:1\"/>\n",
            "      <stop offset=\"100%\" style=\"stop-color:#f0f9ff;stop-opacity:1\"/>\n",
            "    </linearGradient>\n",
            "    <linearGradient id=\"card-bg\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">\n",
            "      <stop offset=\"0%\" style=\"stop-color:#ffffff;stop-opacity:0.95\"/>\n",
            "      <stop offset=\"100%\" style=\"stop-color:#fce4ec;stop-opacity:0.95\"/>\n",
            "    </linearGradient>\n",
            "  </defs>\n",
        ));
        writeln!(svg, r#"  <rect width="{w}" height="{h}" fill="url(#bg)"/>"#)?;
        writeln!(
            svg,
            r##"  <rect x="50" y="100" width="{}" height="{}" rx="30" fill="url(#card-bg)" stroke="#e91e63" stroke-width="4"/>"##,
            w.saturating_sub(100),
            h.saturating_sub(200)
        )?;

        for field in &layout.fields {
            if field.style.wrap {
                write_block(&mut svg, field)?;
            } else {
                write_line(&mut svg, field)?;
            }
        }

        svg.push_str("</svg>\n");
        Ok(svg)
    }
}

impl ImageRenderer for SvgCardRenderer {
    fn render(&self, layout: &CardLayout) -> Result<RenderedImage, RenderError> {
        for kind in REQUIRED_FIELDS {
            if layout.field(kind).is_none() {
                return Err(RenderError::missing_field(format!("{:?}", kind)));
            }
        }

        let svg = self
            .write_document(layout)
            .map_err(|e| RenderError::backend(e.to_string()))?;
        Ok(RenderedImage::new(SVG_MEDIA_TYPE, svg.into_bytes()))
    }

    fn media_type(&self) -> &'static str {
        SVG_MEDIA_TYPE
    }
}

/// Single centred line of text.
fn write_line(svg: &mut String, field: &CardField) -> std::fmt::Result {
    let style = &field.style;
    write!(
        svg,
        r#"  <text x="{}" y="{}" text-anchor="middle""#,
        field.frame.center_x(),
        field.frame.baseline()
    )?;
    if let Some(color) = style.color {
        write!(svg, r#" fill="{}" font-family="{}""#, color, FONT_FAMILY)?;
    }
    write!(svg, r#" font-size="{}""#, style.font_size)?;
    if style.weight == FontWeight::Bold {
        svg.push_str(r#" font-weight="bold""#);
    }
    if style.italic {
        svg.push_str(r#" font-style="italic""#);
    }
    writeln!(svg, ">{}</text>", escape_xml(&field.text))
}

/// Wrapping block, drawn through an XHTML foreignObject.
fn write_block(svg: &mut String, field: &CardField) -> std::fmt::Result {
    let frame = &field.frame;
    writeln!(
        svg,
        r#"  <foreignObject x="{}" y="{}" width="{}" height="{}">"#,
        frame.x, frame.y, frame.width, frame.height
    )?;
    writeln!(
        svg,
        r#"    <div xmlns="http://www.w3.org/1999/xhtml" style="font-family: {}; font-size: {}px; color: {}; text-align: center; line-height: 1.4; padding: 20px;">"#,
        FONT_FAMILY,
        field.style.font_size,
        field.style.color.unwrap_or("#333")
    )?;
    let label = match field.kind {
        FieldKind::Question => "<strong>Question:</strong><br/>",
        _ => "",
    };
    writeln!(svg, "      {}{}", label, escape_xml(&field.text))?;
    svg.push_str("    </div>\n  </foreignObject>\n");
    Ok(())
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
