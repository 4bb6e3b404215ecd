//! Bold/regular face resolution.
//!
//! Faces are resolved once per run, in order:
//!
//! 1. the primary pair from [`Typography`] (Noto Sans by default),
//! 2. the alternate pair (DejaVu Sans by default),
//! 3. the best sans-serif faces in the system font database,
//! 4. nothing: text is skipped and measures as zero width.
//!
//! A pair is only used when both files exist and both parse. Every step past the first records a
//! warning on the returned [`FontResolution`].

use std::path::Path;

use crate::{
    config::{FacePair, Typography},
    foundation::error::{CarouselError, CarouselResult},
    text::{
        face::LoadedFace,
        wrap::{FaceKind, TextMeasure},
    },
};

/// Where the faces in a [`FontResolution`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontSource {
    Primary,
    Alternate,
    System,
    /// No usable face; text is not drawn.
    Unavailable,
}

impl FontSource {
    pub fn is_fallback(self) -> bool {
        self != Self::Primary
    }
}

/// A resolved bold/regular pair.
#[derive(Debug)]
pub struct FontSet {
    pub bold: LoadedFace,
    pub regular: LoadedFace,
}

impl FontSet {
    pub fn face_mut(&mut self, kind: FaceKind) -> &mut LoadedFace {
        match kind {
            FaceKind::Bold => &mut self.bold,
            FaceKind::Regular => &mut self.regular,
        }
    }
}

/// Outcome of font loading: the faces (if any), where they came from, and what went wrong on the
/// way there.
#[derive(Debug)]
pub struct FontResolution {
    pub source: FontSource,
    pub fonts: Option<FontSet>,
    /// One entry per failed step, in the order they were tried.
    pub warnings: Vec<String>,
}

impl FontResolution {
    /// A resolution with no faces. Useful for headless rendering and tests.
    pub fn unavailable() -> Self {
        Self {
            source: FontSource::Unavailable,
            fonts: None,
            warnings: Vec::new(),
        }
    }

    pub fn face_mut(&mut self, kind: FaceKind) -> Option<&mut LoadedFace> {
        self.fonts.as_mut().map(|f| f.face_mut(kind))
    }
}

impl TextMeasure for FontResolution {
    fn advance(&mut self, face: FaceKind, size_px: f32, text: &str) -> f32 {
        match self.face_mut(face) {
            Some(f) => f.advance(text, size_px),
            None => 0.0,
        }
    }
}

/// Resolve the face pair described by `typography`. Never fails; see the module docs.
pub fn resolve_fonts(typography: &Typography) -> FontResolution {
    let mut warnings = Vec::new();

    match load_pair(&typography.primary) {
        Ok(fonts) => {
            return finish(FontSource::Primary, Some(fonts), warnings);
        }
        Err(err) => warnings.push(format!("primary fonts unavailable: {err}")),
    }

    match load_pair(&typography.alternate) {
        Ok(fonts) => {
            return finish(FontSource::Alternate, Some(fonts), warnings);
        }
        Err(err) => warnings.push(format!("alternate fonts unavailable: {err}")),
    }

    if typography.system_fallback {
        match load_system_pair() {
            Ok(fonts) => {
                return finish(FontSource::System, Some(fonts), warnings);
            }
            Err(err) => warnings.push(format!("system fonts unavailable: {err}")),
        }
    }

    warnings.push("no usable font found, text will not be drawn".to_owned());
    finish(FontSource::Unavailable, None, warnings)
}

fn finish(source: FontSource, fonts: Option<FontSet>, warnings: Vec<String>) -> FontResolution {
    for w in &warnings {
        tracing::warn!("{w}");
    }
    if let Some(f) = &fonts {
        tracing::debug!(
            ?source,
            bold = f.bold.origin(),
            regular = f.regular.origin(),
            family = f.regular.family(),
            "resolved fonts"
        );
    }
    FontResolution {
        source,
        fonts,
        warnings,
    }
}

fn load_pair(pair: &FacePair) -> CarouselResult<FontSet> {
    for path in [&pair.bold, &pair.regular] {
        if !path.is_file() {
            return Err(CarouselError::font(format!(
                "'{}' does not exist",
                path.display()
            )));
        }
    }
    Ok(FontSet {
        bold: load_file(&pair.bold)?,
        regular: load_file(&pair.regular)?,
    })
}

fn load_file(path: &Path) -> CarouselResult<LoadedFace> {
    let bytes = std::fs::read(path)
        .map_err(|e| CarouselError::font(format!("read '{}': {e}", path.display())))?;
    LoadedFace::from_bytes(bytes, 0, None, path.display().to_string())
}

fn load_system_pair() -> CarouselResult<FontSet> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    if db.is_empty() {
        return Err(CarouselError::font("system font database is empty"));
    }

    Ok(FontSet {
        bold: load_system_face(&db, usvg::fontdb::Weight::BOLD)?,
        regular: load_system_face(&db, usvg::fontdb::Weight::NORMAL)?,
    })
}

fn load_system_face(
    db: &usvg::fontdb::Database,
    weight: usvg::fontdb::Weight,
) -> CarouselResult<LoadedFace> {
    let families = [usvg::fontdb::Family::SansSerif];
    let query = usvg::fontdb::Query {
        families: &families,
        weight,
        ..usvg::fontdb::Query::default()
    };

    let id = db
        .query(&query)
        .or_else(|| db.faces().next().map(|f| f.id))
        .ok_or_else(|| CarouselError::font("no system face matched"))?;
    let family = db
        .face(id)
        .and_then(|f| f.families.first().map(|(name, _)| name.clone()));
    let (bytes, index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or_else(|| CarouselError::font("system face data is not readable"))?;

    let origin = format!("system:{}", family.as_deref().unwrap_or("unknown"));
    LoadedFace::from_bytes(bytes, index, family.as_deref(), origin)
}
