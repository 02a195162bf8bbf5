//! The certificate template renderer.
//!
//! [`render`] is a pure function from a record and a resolved design to a
//! [`CertificateView`]: every text already substituted (placeholders included)
//! and every color already picked. The frontend turns the view into markup; an
//! exporter may turn it into bytes.

pub mod date;
pub mod export;

use crate::model::{CertificateRecord, DesignStyle};
use serde::{Deserialize, Serialize};

pub use date::format_completion_date;

pub const HEADING: &str = "Certificate of Completion";
pub const CERTIFY_LINE: &str = "This is to certify that";
pub const COMPLETED_LINE: &str = "has successfully completed";
pub const SEAL_LABEL: &str = "SEAL";

pub const RECIPIENT_PLACEHOLDER: &str = "Recipient Name";
pub const COURSE_PLACEHOLDER: &str = "Course/Achievement Name";
pub const DATE_PLACEHOLDER: &str = "Date";
pub const ISSUER_PLACEHOLDER: &str = "Issuer Name";
pub const TITLE_PLACEHOLDER: &str = "Title";

/// Backdrop of a custom design with no image attached.
const NEUTRAL_FROM: &str = "#f3f4f6";
const NEUTRAL_TO: &str = "#d1d5db";
const NEUTRAL_BORDER: &str = "#374151";
const NEUTRAL_TITLE: &str = "#111827";
const NEUTRAL_UNDERLINE: &str = "#9ca3af";
const NEUTRAL_COURSE: &str = "#1f2937";

/// Panel painted behind the text on custom backgrounds.
pub const CUSTOM_OVERLAY: &str = "rgba(255, 255, 255, 0.85)";

/// A line of certificate text; `placeholder` is set when the field was empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedText {
    pub text: String,
    pub placeholder: bool,
}

impl RenderedText {
    fn or_placeholder(value: &str, placeholder: &str) -> Self {
        if value.is_empty() {
            Self {
                text: placeholder.to_string(),
                placeholder: true,
            }
        } else {
            Self {
                text: value.to_string(),
                placeholder: false,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Backdrop {
    Gradient { from: String, to: String },
    Image { url: String },
}

impl Backdrop {
    /// CSS `background` shorthand for this backdrop.
    pub fn css(&self) -> String {
        match self {
            Backdrop::Gradient { from, to } => {
                format!("linear-gradient(to bottom right, {from}, {to})")
            }
            Backdrop::Image { url } => format!("url(\"{url}\") center / cover no-repeat"),
        }
    }
}

/// Colors of a rendered certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewStyle {
    pub backdrop: Backdrop,
    pub border: String,
    pub title: String,
    pub name_underline: String,
    pub course: String,
    pub seal: String,
    /// Semi-opaque panel behind the text; only set for custom backgrounds.
    pub overlay: Option<String>,
}

impl ViewStyle {
    fn resolve(style: DesignStyle<'_>) -> Self {
        match style {
            DesignStyle::Themed(palette) => Self {
                backdrop: Backdrop::Gradient {
                    from: palette.background.from.to_string(),
                    to: palette.background.to.to_string(),
                },
                border: palette.border.to_string(),
                title: palette.title.to_string(),
                name_underline: palette.name_underline.to_string(),
                course: palette.course.to_string(),
                seal: palette.seal.to_string(),
                overlay: None,
            },
            DesignStyle::Custom(background) => Self {
                backdrop: match background {
                    Some(image) => Backdrop::Image {
                        url: image.url.clone(),
                    },
                    None => Backdrop::Gradient {
                        from: NEUTRAL_FROM.to_string(),
                        to: NEUTRAL_TO.to_string(),
                    },
                },
                border: NEUTRAL_BORDER.to_string(),
                title: NEUTRAL_TITLE.to_string(),
                name_underline: NEUTRAL_UNDERLINE.to_string(),
                course: NEUTRAL_COURSE.to_string(),
                seal: NEUTRAL_BORDER.to_string(),
                overlay: Some(CUSTOM_OVERLAY.to_string()),
            },
        }
    }
}

/// Everything needed to draw one certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateView {
    pub recipient: RenderedText,
    pub course: RenderedText,
    pub completion_date: RenderedText,
    pub issuer_name: RenderedText,
    pub issuer_title: RenderedText,
    pub style: ViewStyle,
}

impl CertificateView {
    /// "Completed on March 5, 2024", or "Completed on Date" without a usable date.
    pub fn completion_line(&self) -> String {
        format!("Completed on {}", self.completion_date.text)
    }
}

/// Renders `record` with the given design.
pub fn render(record: &CertificateRecord, style: DesignStyle<'_>) -> CertificateView {
    CertificateView {
        recipient: RenderedText::or_placeholder(&record.recipient_name, RECIPIENT_PLACEHOLDER),
        course: RenderedText::or_placeholder(&record.course_name, COURSE_PLACEHOLDER),
        completion_date: RenderedText::or_placeholder(
            &format_completion_date(&record.completion_date),
            DATE_PLACEHOLDER,
        ),
        issuer_name: RenderedText::or_placeholder(&record.issuer_name, ISSUER_PLACEHOLDER),
        issuer_title: RenderedText::or_placeholder(&record.issuer_title, TITLE_PLACEHOLDER),
        style: ViewStyle::resolve(style),
    }
}

/// The download button is enabled once both recipient and course are filled in.
pub fn download_enabled(record: &CertificateRecord) -> bool {
    record.missing_required().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::design::{BackgroundImage, DesignChoice, MODERN};
    use pretty_assertions::assert_eq;

    fn filled() -> CertificateRecord {
        CertificateRecord {
            recipient_name: "Ada Lovelace".into(),
            course_name: "Analytical Engines".into(),
            completion_date: "2024-03-05".into(),
            issuer_name: "Babbage Institute".into(),
            issuer_title: "Director".into(),
        }
    }

    fn themed(choice: DesignChoice) -> DesignStyle<'static> {
        DesignStyle::Themed(choice.palette().unwrap())
    }

    #[test]
    fn empty_record_renders_placeholders() {
        let view = render(&CertificateRecord::default(), themed(DesignChoice::Classic));

        assert_eq!(view.recipient.text, RECIPIENT_PLACEHOLDER);
        assert_eq!(view.course.text, COURSE_PLACEHOLDER);
        assert_eq!(view.issuer_name.text, ISSUER_PLACEHOLDER);
        assert_eq!(view.issuer_title.text, TITLE_PLACEHOLDER);
        assert_eq!(view.completion_line(), "Completed on Date");
        assert!(view.recipient.placeholder && view.completion_date.placeholder);
    }

    #[test]
    fn filled_record_renders_values_and_long_date() {
        let view = render(&filled(), themed(DesignChoice::Classic));

        assert_eq!(
            view.recipient,
            RenderedText {
                text: "Ada Lovelace".into(),
                placeholder: false
            }
        );
        assert_eq!(view.completion_line(), "Completed on March 5, 2024");
        assert_eq!(view.issuer_title.text, "Director");
    }

    #[test]
    fn unparseable_date_falls_back_to_placeholder() {
        let record = filled().with_field(crate::model::RecordField::CompletionDate, "soon");
        let view = render(&record, themed(DesignChoice::Classic));
        assert_eq!(view.completion_line(), "Completed on Date");
    }

    #[test]
    fn themed_rendering_is_deterministic_and_has_no_overlay() {
        for choice in DesignChoice::ALL.into_iter().filter(|c| *c != DesignChoice::Custom) {
            let first = render(&filled(), themed(choice));
            let second = render(&filled(), themed(choice));
            assert_eq!(first, second);
            assert_eq!(first.style.overlay, None);
        }
    }

    #[test]
    fn modern_uses_the_green_palette() {
        let view = render(&filled(), themed(DesignChoice::Modern));
        assert_eq!(view.style.border, MODERN.border);
        assert_eq!(view.style.name_underline, MODERN.name_underline);
        assert_eq!(
            view.style.backdrop,
            Backdrop::Gradient {
                from: "#f0fdf4".into(),
                to: "#d1fae5".into()
            }
        );
    }

    #[test]
    fn custom_design_paints_the_image_under_an_overlay() {
        let image = BackgroundImage {
            url: "blob:abc".into(),
            file_name: "bg.jpg".into(),
            mime: "image/jpeg".into(),
        };
        let view = render(&filled(), DesignStyle::Custom(Some(&image)));

        assert_eq!(view.style.backdrop, Backdrop::Image { url: "blob:abc".into() });
        assert_eq!(view.style.overlay.as_deref(), Some(CUSTOM_OVERLAY));
        assert_eq!(view.style.backdrop.css(), "url(\"blob:abc\") center / cover no-repeat");
    }

    #[test]
    fn custom_design_without_image_uses_neutral_gray() {
        let view = render(&filled(), DesignStyle::Custom(None));
        assert_eq!(
            view.style.backdrop.css(),
            "linear-gradient(to bottom right, #f3f4f6, #d1d5db)"
        );
        assert!(view.style.overlay.is_some());
    }

    #[test]
    fn download_requires_recipient_and_course() {
        let empty = CertificateRecord::default();
        assert!(!download_enabled(&empty));
        assert!(!download_enabled(&empty.with_field(crate::model::RecordField::RecipientName, "A")));
        assert!(!download_enabled(&empty.with_field(crate::model::RecordField::CourseName, "B")));
        assert!(download_enabled(&filled()));
        assert!(download_enabled(&CertificateRecord {
            recipient_name: "A".into(),
            course_name: "B".into(),
            ..Default::default()
        }));
    }
}
