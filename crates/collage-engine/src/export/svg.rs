use std::fmt::{self, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::coords::CanvasSize;
use crate::error::{EditError, EditResult};
use crate::scene::{Document, Geometry, ObjectKind, SceneObject, ShapeKind};

/// Serializes the document as an SVG string.
///
/// Layout: explicit canvas width/height, a full-canvas white background rect,
/// then one element per visible object in paint order. Each element carries
/// `rotate(deg cx cy)` about its box center. Bitmaps are embedded as PNG data
/// URIs and stretched with `preserveAspectRatio="none"`.
pub fn to_svg(document: &Document) -> EditResult<String> {
    let elements = document
        .objects()
        .iter()
        .filter(|o| o.visible)
        .map(|o| -> EditResult<(&SceneObject, Option<String>)> {
            match &o.kind {
                ObjectKind::Bitmap(bitmap) => Ok((o, Some(STANDARD.encode(bitmap.encode_png()?)))),
                ObjectKind::Shape { .. } => Ok((o, None)),
            }
        })
        .collect::<EditResult<Vec<_>>>()?;

    let mut svg = String::new();
    write_svg(&mut svg, document.canvas(), &elements).map_err(|e| EditError::EncodeFailed(e.to_string()))?;
    Ok(svg)
}

/// `elements` pairs each visible object with its base64 PNG payload (bitmaps
/// only).
fn write_svg(out: &mut impl Write, canvas: CanvasSize, elements: &[(&SceneObject, Option<String>)]) -> fmt::Result {
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}" height="{}">"#,
        canvas.width(),
        canvas.height()
    )?;
    writeln!(out, r#"    <rect width="100%" height="100%" fill="white"/>"#)?;

    for (object, data) in elements {
        let g = &object.geometry;
        let transform = rotate_attr(g);

        match &object.kind {
            ObjectKind::Bitmap(_) => {
                let data = data.as_deref().unwrap_or_default();
                writeln!(
                    out,
                    r#"    <image x="{}" y="{}" width="{}" height="{}" transform="{transform}" xlink:href="data:image/png;base64,{data}" preserveAspectRatio="none"/>"#,
                    g.x, g.y, g.width, g.height
                )?;
            }
            ObjectKind::Shape { shape: ShapeKind::Rectangle, fill } => {
                writeln!(
                    out,
                    r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="{}"{} transform="{transform}"/>"#,
                    g.x, g.y, g.width, g.height, fill.to_hex(), opacity_attr(fill.a)
                )?;
            }
            ObjectKind::Shape { shape: ShapeKind::Circle, fill } => {
                let center = g.bounds().center();
                writeln!(
                    out,
                    r#"    <circle cx="{}" cy="{}" r="{}" fill="{}"{} transform="{transform}"/>"#,
                    center.x,
                    center.y,
                    g.width.min(g.height) / 2.0,
                    fill.to_hex(),
                    opacity_attr(fill.a)
                )?;
            }
        }
    }

    out.write_str("</svg>")
}

fn rotate_attr(g: &Geometry) -> String {
    let center = g.bounds().center();
    format!("rotate({} {} {})", g.rotation_degrees, center.x, center.y)
}

fn opacity_attr(alpha: u8) -> String {
    if alpha == 255 {
        String::new()
    } else {
        format!(r#" fill-opacity="{}""#, alpha as f32 / 255.0)
    }
}
