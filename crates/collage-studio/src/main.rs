//! Headless driver for the collage engine.
//!
//! Usage: `collage-studio [--out DIR] [IMAGE...]`
//!
//! Imports the given images (or a generated gradient), runs a short editing
//! session against the engine and writes one export per format into `DIR`
//! (default `collage-out`).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};

use collage_engine::coords::Viewport;
use collage_engine::filter::Effect;
use collage_engine::input::{PointerEvent, PointerMapper, PropertyEdit};
use collage_engine::logging::{init_logging, LoggingConfig};
use collage_engine::paint::Color;
use collage_engine::scene::{Bitmap, ShapeKind};
use collage_engine::{Editor, EditorConfig, ExportFormat};

struct Args {
    out_dir: PathBuf,
    images: Vec<PathBuf>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut out_dir = PathBuf::from("collage-out");
        let mut images = Vec::new();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--out" | "-o" => {
                    out_dir = args.next().map(PathBuf::from).context("--out needs a directory")?;
                }
                _ => images.push(PathBuf::from(arg)),
            }
        }
        Ok(Self { out_dir, images })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let args = Args::parse(std::env::args().skip(1))?;

    let mut editor = Editor::new(EditorConfig::default()).context("creating editor")?;

    // ── import ────────────────────────────────────────────────────────────
    if args.images.is_empty() {
        editor.add_bitmap(demo_gradient()?).context("adding demo bitmap")?;
    }
    for path in &args.images {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        editor
            .add_encoded_bitmap(&bytes)
            .with_context(|| format!("importing {}", path.display()))?;
    }

    // The last import is selected.
    editor.apply_tonal(10, 20).context("brightness/contrast")?;
    editor.apply_effect(Effect::Sepia).context("sepia")?;

    // ── shapes ────────────────────────────────────────────────────────────
    editor.set_fill_color(Color::rgb(0xf0, 0x93, 0x2b));
    editor.add_shape(ShapeKind::Rectangle)?;
    editor.edit_property(PropertyEdit::Rotation(15))?;

    // Drag the rectangle as if the canvas were shown at half size.
    let mapper = PointerMapper::new(Viewport::new(540.0, 540.0), editor.document().canvas());
    for event in [
        PointerEvent::pressed(60.0, 60.0),
        PointerEvent::moved(200.0, 220.0),
        PointerEvent::moved(320.0, 380.0),
        PointerEvent::released(320.0, 380.0),
    ] {
        let outcome = editor.pointer(event, &mapper);
        log::debug!("{:?} -> {outcome:?}", event.phase);
    }

    editor.set_fill_color(Color::rgba(0x2b, 0xb6, 0xf0, 0xcc));
    editor.add_shape(ShapeKind::Circle)?;
    editor.edit_property(PropertyEdit::Size { width: 320, height: 320 })?;
    editor.send_to_back()?;

    // Throw away the last step and bring it back.
    editor.undo()?;
    editor.redo()?;

    for row in editor.document().object_summaries() {
        log::info!(
            "{} {:<9} z={:<3} {}x{}{}",
            row.id,
            row.name,
            row.z.0,
            row.width,
            row.height,
            if row.visible { "" } else { " (hidden)" }
        );
    }

    // ── export ────────────────────────────────────────────────────────────
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    for format in [ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::Webp, ExportFormat::Svg] {
        let export = editor.export(format).with_context(|| format!("exporting {format}"))?;
        let path = args.out_dir.join(&export.filename);
        fs::write(&path, &export.bytes).with_context(|| format!("writing {}", path.display()))?;
        println!("{} ({}, {} bytes)", path.display(), export.mime(), export.bytes.len());
    }

    Ok(())
}

fn demo_gradient() -> Result<Bitmap> {
    let image = RgbaImage::from_fn(480, 320, |x, y| {
        Rgba([(x * 255 / 479) as u8, (y * 255 / 319) as u8, 160, 255])
    });
    Ok(Bitmap::new(image)?)
}
