//! Fluid image references delivered by the CMS image pipeline

use serde::{Deserialize, Serialize};

use crate::helpers::css_number;

/// A responsive image with pre-computed variants.
///
/// The variants are produced upstream; nothing here resizes or checks them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidImage {
    pub aspect_ratio: f64,
    pub src: String,
    pub src_set: String,
    pub sizes: String,
    #[serde(default)]
    pub src_webp: Option<String>,
    #[serde(default)]
    pub src_set_webp: Option<String>,
    #[serde(default, rename = "tracedSVG")]
    pub traced_svg: Option<String>,
}

impl FluidImage {
    /// Build a single-variant image, mostly useful for tests and scaffolding
    pub fn new(src: impl Into<String>, aspect_ratio: f64) -> Self {
        let src = src.into();
        Self {
            aspect_ratio,
            src_set: format!("{} 1000w", src),
            src,
            sizes: "(max-width: 1000px) 100vw, 1000px".to_string(),
            src_webp: None,
            src_set_webp: None,
            traced_svg: None,
        }
    }

    /// Template-facing view with the ratio box pre-computed
    pub fn view(&self) -> ImageView<'_> {
        ImageView {
            src: &self.src,
            src_set: &self.src_set,
            sizes: &self.sizes,
            src_webp: self.src_webp.as_deref(),
            src_set_webp: self.src_set_webp.as_deref(),
            traced_svg: self.traced_svg.as_deref(),
            padding_bottom: css_number(100.0 / self.aspect_ratio),
        }
    }
}

/// What `macros/image.html` renders
#[derive(Debug, Serialize)]
pub struct ImageView<'a> {
    pub src: &'a str,
    pub src_set: &'a str,
    pub sizes: &'a str,
    pub src_webp: Option<&'a str>,
    pub src_set_webp: Option<&'a str>,
    pub traced_svg: Option<&'a str>,
    pub padding_bottom: String,
}
