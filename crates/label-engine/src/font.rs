//! Label font acquisition.
//!
//! Resolution order: the preferred font path (if configured), then a
//! per-OS list of well-known system fonts, then whatever sans-serif face
//! the system font database can offer. Each miss falls through silently;
//! only a host with no usable font at all is an error.

use std::path::Path;

use ab_glyph::FontVec;
use tracing::{debug, info};

use crate::{LabelError, Result};

/// Resolve the font used for label text.
pub fn resolve_font(preferred: Option<&Path>) -> Result<FontVec> {
    if let Some(path) = preferred {
        match load_font_file(path) {
            Ok(font) => {
                info!(path = %path.display(), "using configured label font");
                return Ok(font);
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "configured font unavailable, falling back");
            }
        }
    }

    for candidate in system_font_candidates() {
        let path = Path::new(candidate);
        if let Ok(font) = load_font_file(path) {
            debug!(path = candidate, "using system label font");
            return Ok(font);
        }
    }

    if let Some(font) = query_font_database() {
        debug!("using sans-serif face from system font database");
        return Ok(font);
    }

    Err(LabelError::NoUsableFont)
}

fn load_font_file(path: &Path) -> Result<FontVec> {
    let data = std::fs::read(path)?;
    // index 0 also covers .ttc collections
    Ok(FontVec::try_from_vec_and_index(data, 0)?)
}

fn query_font_database() -> Option<FontVec> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        ..fontdb::Query::default()
    };
    let id = db.query(&query)?;
    let (source, index) = db.face_source(id)?;

    let data = match &source {
        fontdb::Source::File(path) => std::fs::read(path).ok()?,
        fontdb::Source::Binary(data) => data.as_ref().as_ref().to_vec(),
        fontdb::Source::SharedFile(path, _) => std::fs::read(path).ok()?,
    };

    FontVec::try_from_vec_and_index(data, index).ok()
}

fn system_font_candidates() -> &'static [&'static str] {
    #[cfg(target_os = "macos")]
    {
        &[
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
            "/System/Library/Fonts/Supplemental/Helvetica.ttf",
            "/System/Library/Fonts/Helvetica.ttc",
        ]
    }
    #[cfg(target_os = "windows")]
    {
        &[
            "C:\\Windows\\Fonts\\arial.ttf",
            "C:\\Windows\\Fonts\\calibri.ttf",
            "C:\\Windows\\Fonts\\segoeui.ttf",
        ]
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        &[
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        ]
    }
}
