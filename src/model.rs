use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{CarouselError, CarouselResult};

/// Number of slides in every carousel.
pub const SLIDE_COUNT: usize = 8;

/// Footer text used when the request does not carry one.
pub const DEFAULT_BRANDING: &str = "@ahmed.businessbooster";

/// Output directory for file mode when none is given on the command line.
pub const DEFAULT_FILE_OUTPUT_DIR: &str = "./output";

/// Output directory for stdin mode when the payload omits `output_dir`.
pub const DEFAULT_STDIN_OUTPUT_DIR: &str = "/tmp/carousel_output";

/// One carousel render request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarouselRequest {
    /// Exactly [`SLIDE_COUNT`] slides, checked by [`CarouselRequest::validate`].
    #[serde(default)]
    pub slides: Vec<SlideSpec>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default = "default_branding")]
    pub branding: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_path: Option<PathBuf>,
    /// Only consulted when the request arrives on stdin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

fn default_branding() -> String {
    DEFAULT_BRANDING.to_owned()
}

/// Texts for a single slide.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

impl SlideSpec {
    /// Subtitle text when present and non-empty.
    pub fn subtitle_text(&self) -> Option<&str> {
        self.subtitle.as_deref().filter(|s| !s.is_empty())
    }
}

impl CarouselRequest {
    pub fn from_json_str(raw: &str) -> CarouselResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn validate(&self) -> CarouselResult<()> {
        if self.slides.len() != SLIDE_COUNT {
            return Err(CarouselError::validation(format!(
                "carousel must contain exactly {SLIDE_COUNT} slides (got {})",
                self.slides.len()
            )));
        }
        Ok(())
    }
}

/// Machine-readable result printed on stdout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselOutput {
    pub success: bool,
    /// Written PNG paths, in slide order.
    pub files: Vec<String>,
    /// `data:image/png;base64,...` URIs, one per file, when embedding was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}
