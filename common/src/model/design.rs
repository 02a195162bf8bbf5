//! Certificate designs and the selector that holds the current choice.
//!
//! Five designs are fixed palettes; the sixth, [`DesignChoice::Custom`], paints a
//! user supplied image behind the text. The selector keeps the custom image
//! around when another design is picked, so switching back to `custom` shows it
//! again.

use crate::error::CertificateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of visual themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignChoice {
    #[default]
    Classic,
    Modern,
    Elegant,
    Corporate,
    Tech,
    Custom,
}

/// A two-stop diagonal gradient, top-left to bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

/// The style tuple of a themed design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: Gradient,
    pub border: &'static str,
    pub title: &'static str,
    pub name_underline: &'static str,
    pub course: &'static str,
    pub seal: &'static str,
}

pub const CLASSIC: Palette = Palette {
    background: Gradient { from: "#eff6ff", to: "#e0e7ff" },
    border: "#1e3a8a",
    title: "#1e3a8a",
    name_underline: "#93c5fd",
    course: "#1e40af",
    seal: "#1e3a8a",
};

pub const MODERN: Palette = Palette {
    background: Gradient { from: "#f0fdf4", to: "#d1fae5" },
    border: "#14532d",
    title: "#14532d",
    name_underline: "#86efac",
    course: "#166534",
    seal: "#14532d",
};

pub const ELEGANT: Palette = Palette {
    background: Gradient { from: "#faf5ff", to: "#ede9fe" },
    border: "#581c87",
    title: "#581c87",
    name_underline: "#d8b4fe",
    course: "#6b21a8",
    seal: "#581c87",
};

pub const CORPORATE: Palette = Palette {
    background: Gradient { from: "#f9fafb", to: "#f1f5f9" },
    border: "#111827",
    title: "#111827",
    name_underline: "#9ca3af",
    course: "#1f2937",
    seal: "#111827",
};

pub const TECH: Palette = Palette {
    background: Gradient { from: "#ecfeff", to: "#e0f2fe" },
    border: "#164e63",
    title: "#164e63",
    name_underline: "#67e8f9",
    course: "#155e75",
    seal: "#164e63",
};

impl DesignChoice {
    pub const ALL: [DesignChoice; 6] = [
        DesignChoice::Classic,
        DesignChoice::Modern,
        DesignChoice::Elegant,
        DesignChoice::Corporate,
        DesignChoice::Tech,
        DesignChoice::Custom,
    ];

    pub fn id(self) -> &'static str {
        match self {
            DesignChoice::Classic => "classic",
            DesignChoice::Modern => "modern",
            DesignChoice::Elegant => "elegant",
            DesignChoice::Corporate => "corporate",
            DesignChoice::Tech => "tech",
            DesignChoice::Custom => "custom",
        }
    }

    /// Parses a design id, falling back to `classic` for anything unknown.
    pub fn from_id_lossy(id: &str) -> Self {
        id.parse().unwrap_or_default()
    }

    /// The fixed palette of a themed design, `None` for `custom`.
    pub fn palette(self) -> Option<&'static Palette> {
        match self {
            DesignChoice::Classic => Some(&CLASSIC),
            DesignChoice::Modern => Some(&MODERN),
            DesignChoice::Elegant => Some(&ELEGANT),
            DesignChoice::Corporate => Some(&CORPORATE),
            DesignChoice::Tech => Some(&TECH),
            DesignChoice::Custom => None,
        }
    }

    /// Catalog entry shown by the design picker.
    pub fn info(self) -> DesignInfo {
        let (name, description) = match self {
            DesignChoice::Classic => ("Classic Blue", "Traditional blue design with golden accents"),
            DesignChoice::Modern => ("Modern Green", "Clean modern design with green theme"),
            DesignChoice::Elegant => ("Elegant Purple", "Sophisticated purple design"),
            DesignChoice::Corporate => ("Corporate Gray", "Professional gray design for business"),
            DesignChoice::Tech => ("Tech Cyan", "Crisp cyan design for technical achievements"),
            DesignChoice::Custom => (
                "Custom Background",
                "Upload your own image as the certificate background",
            ),
        };
        DesignInfo {
            id: self,
            name,
            description,
            palette: self.palette().copied(),
        }
    }
}

impl fmt::Display for DesignChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a design id is not one of the six known ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDesign(pub String);

impl FromStr for DesignChoice {
    type Err = UnknownDesign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DesignChoice::ALL
            .into_iter()
            .find(|choice| choice.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDesign(s.to_string()))
    }
}

/// One entry of the design catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DesignInfo {
    pub id: DesignChoice,
    pub name: &'static str,
    pub description: &'static str,
    pub palette: Option<Palette>,
}

/// Every design, in picker order.
pub fn catalog() -> Vec<DesignInfo> {
    DesignChoice::ALL.into_iter().map(DesignChoice::info).collect()
}

/// A user supplied background image.
///
/// `url` is a session scoped handle (an object URL in the browser); whoever
/// created it is responsible for releasing it once the selector hands it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundImage {
    pub url: String,
    pub file_name: String,
    pub mime: String,
}

/// `true` when `mime` names an image type (`image/png`, `image/svg+xml`, ...).
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

/// The resolved look of the current design, as consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignStyle<'a> {
    Themed(&'static Palette),
    Custom(Option<&'a BackgroundImage>),
}

/// Holds the current design choice and the custom background, if one was attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSelector {
    choice: DesignChoice,
    background: Option<BackgroundImage>,
}

impl DesignSelector {
    pub fn choice(&self) -> DesignChoice {
        self.choice
    }

    pub fn background(&self) -> Option<&BackgroundImage> {
        self.background.as_ref()
    }

    pub fn select(&mut self, choice: DesignChoice) {
        self.choice = choice;
    }

    /// Attaches a custom background and switches to the `custom` design.
    ///
    /// Non-image MIME types are rejected and leave the selector unchanged. On
    /// success the previously attached image, if any, is returned so its handle
    /// can be released.
    pub fn attach_background(
        &mut self,
        image: BackgroundImage,
    ) -> Result<Option<BackgroundImage>, CertificateError> {
        if !is_image_mime(&image.mime) {
            return Err(CertificateError::UnsupportedImage(image.mime));
        }
        self.choice = DesignChoice::Custom;
        Ok(self.background.replace(image))
    }

    pub fn style(&self) -> DesignStyle<'_> {
        match self.choice.palette() {
            Some(palette) => DesignStyle::Themed(palette),
            None => DesignStyle::Custom(self.background.as_ref()),
        }
    }
}
