//! Typesetting configuration and bootstrap options
//!
//! `TypesetConfig` mirrors the object MathJax 2.x reads from `window.MathJax`
//! during its own startup. Field names on the wire are fixed by MathJax.

use serde::{Deserialize, Serialize};

/// MathJax 2.7.7 from cdnjs, TeX input with CommonHTML output
pub const DEFAULT_LIBRARY_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/mathjax/2.7.7/MathJax.js?config=TeX-AMS_CHTML";

pub const DEFAULT_BUTTON_LABEL: &str = "Render LaTeX";

pub const DEFAULT_CORNER_OFFSET_PX: u32 = 20;

/// A pair of opening/closing delimiters, serialized as a two-element array
pub type Delimiter = (String, String);

fn delimiter(open: &str, close: &str) -> Delimiter {
    (open.to_string(), close.to_string())
}

/// Options for the tex2jax preprocessor
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Tex2Jax {
    pub inline_math: Vec<Delimiter>,
    pub display_math: Vec<Delimiter>,
    pub process_escapes: bool,
}

impl Default for Tex2Jax {
    fn default() -> Self {
        Self {
            inline_math: vec![delimiter("$", "$"), delimiter("\\(", "\\)")],
            display_math: vec![delimiter("$$", "$$"), delimiter("\\[", "\\]")],
            process_escapes: true,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct Linebreaks {
    pub automatic: bool,
}

impl Default for Linebreaks {
    fn default() -> Self {
        Self { automatic: true }
    }
}

/// Per-output-renderer settings
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(default)]
pub struct OutputOptions {
    pub linebreaks: Linebreaks,
}

/// The value published at `window.MathJax` before the library loads
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TypesetConfig {
    pub tex2jax: Tex2Jax,

    #[serde(rename = "CommonHTML")]
    pub common_html: OutputOptions,

    #[serde(rename = "HTML-CSS")]
    pub html_css: OutputOptions,

    #[serde(rename = "SVG")]
    pub svg: OutputOptions,

    /// `"none"` hides MathJax's own loading/processing messages
    #[serde(rename = "messageStyle")]
    pub message_style: String,
}

impl Default for TypesetConfig {
    fn default() -> Self {
        Self {
            tex2jax: Tex2Jax::default(),
            common_html: OutputOptions::default(),
            html_css: OutputOptions::default(),
            svg: OutputOptions::default(),
            message_style: "none".to_string(),
        }
    }
}

/// Everything the initializer needs; every field may be omitted from JS
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BootstrapOptions {
    pub library_url: String,
    pub button_label: String,
    /// Distance of the button from the bottom-right viewport corner
    pub corner_offset_px: u32,
    pub typeset: TypesetConfig,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            library_url: DEFAULT_LIBRARY_URL.to_string(),
            button_label: DEFAULT_BUTTON_LABEL.to_string(),
            corner_offset_px: DEFAULT_CORNER_OFFSET_PX,
            typeset: TypesetConfig::default(),
        }
    }
}
