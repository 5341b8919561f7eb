//! Output driver: renders every configured size and writes the assets.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::GeneratorConfig;
use crate::error::IconError;
use crate::export::{encode_ico, encode_png};
use crate::render::IconRenderer;

/// Paths written by one [`generate`] run, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn len(&self) -> usize {
        self.written.len()
    }

    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }
}

/// Writes the full asset set described by `config`.
///
/// Output directories are created first. The first failing render or write
/// aborts the run; files written before it are left in place.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport, IconError> {
    let renderer = IconRenderer::new();
    let mut report = GenerationReport::default();

    for dir in [config.icons_dir(), config.public_dir()] {
        fs::create_dir_all(&dir).map_err(|e| IconError::io(&dir, e))?;
    }

    for &size in &config.sizes {
        let png = encode_png(&renderer.render(size)?)?;
        write_asset(&config.sized_png_path(size), &png, &mut report)?;
    }

    let main = encode_png(&renderer.render(config.main_icon_size)?)?;
    write_asset(&config.icon_png_path(), &main, &mut report)?;

    let set = renderer.render_set(&config.ico_sizes)?;
    if set.is_empty() {
        warn!("no ICO sizes configured, skipping icon.ico");
    } else {
        info!(frames = ?set.sizes(), "assembling icon.ico");
        write_asset(&config.icon_ico_path(), &encode_ico(&set)?, &mut report)?;
    }

    write_asset(&config.logo_path(), &main, &mut report)?;

    info!(count = report.len(), "all icons generated");
    Ok(report)
}

fn write_asset(path: &Path, bytes: &[u8], report: &mut GenerationReport) -> Result<(), IconError> {
    fs::write(path, bytes).map_err(|e| IconError::io(path, e))?;
    info!(path = %path.display(), bytes = bytes.len(), "created");
    report.written.push(path.to_path_buf());
    Ok(())
}

/// Source PNG and `.iconset` entry name for each `iconutil` slot.
const ICONSET_ENTRIES: [(u32, &str); 10] = [
    (16, "icon_16x16.png"),
    (32, "icon_16x16@2x.png"),
    (32, "icon_32x32.png"),
    (64, "icon_32x32@2x.png"),
    (128, "icon_128x128.png"),
    (256, "icon_128x128@2x.png"),
    (256, "icon_256x256.png"),
    (512, "icon_256x256@2x.png"),
    (512, "icon_512x512.png"),
    (1024, "icon_512x512@2x.png"),
];

/// Shell steps for building `icon.icns` from the generated PNGs on macOS.
///
/// This is printed for the user; nothing here is executed.
pub fn iconset_instructions(build_dir: &Path) -> String {
    let mut out = String::from("For macOS .icns file, run on a Mac:\n");
    let _ = writeln!(out, "  cd {}", build_dir.display());
    out.push_str("  mkdir icon.iconset\n");
    for (size, name) in ICONSET_ENTRIES {
        let _ = writeln!(out, "  cp icons/{size}x{size}.png icon.iconset/{name}");
    }
    out.push_str("  iconutil -c icns icon.iconset\n");
    out
}
