use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Color slot in the branding palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKind {
    Primary,
    Secondary,
    #[serde(other)]
    Unknown,
}

/// One palette entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingColor {
    #[serde(rename = "type")]
    pub kind: ColorKind,
    /// CSS color value, e.g. `#0d47a1` or `rgba(13,71,161,1)`
    pub rgba: String,
}

/// Text slot shown in the web UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextKind {
    Title,
    Slogan,
    Imprint,
    PrivacyPolicy,
    #[serde(other)]
    Unknown,
}

/// One text entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingText {
    #[serde(rename = "type")]
    pub kind: TextKind,
    pub content: String,
}

/// Image slot in the branding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageKind {
    Logo,
    SquaredLogo,
    Favicon,
    Background,
    #[serde(other)]
    Unknown,
}

impl ImageKind {
    pub(crate) fn as_query_value(self) -> &'static str {
        match self {
            ImageKind::Logo => "logo",
            ImageKind::SquaredLogo => "squaredLogo",
            ImageKind::Favicon => "favicon",
            ImageKind::Background => "background",
            ImageKind::Unknown => "unknown",
        }
    }
}

/// Rendered size of a branding image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Small,
    Medium,
    Large,
}

impl ImageSize {
    pub(crate) fn as_query_value(self) -> &'static str {
        match self {
            ImageSize::Small => "small",
            ImageSize::Medium => "medium",
            ImageSize::Large => "large",
        }
    }
}

/// One size variant of an image slot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFile {
    pub size: ImageSize,
    pub url: String,
}

/// Image slot with its rendered size variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingImageRef {
    #[serde(rename = "type")]
    pub kind: ImageKind,
    pub files: Vec<ImageFile>,
}

/// Full branding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingConfig {
    pub product_name: String,
    pub colors: Vec<BrandingColor>,
    pub texts: Vec<BrandingText>,
    pub images: Vec<BrandingImageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Branding subset served without authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicBranding {
    pub product_name: String,
    pub colors: Vec<BrandingColor>,
    pub images: Vec<BrandingImageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imprint_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_url: Option<String>,
}

/// Reference an uploaded image when updating the branding
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImageRef {
    #[serde(rename = "type")]
    pub kind: ImageKind,
    pub upload_id: String,
}

/// Update branding request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrandingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<BrandingColor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texts: Option<Vec<BrandingText>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<UploadedImageRef>>,
}

/// Handle of an image accepted for a later branding update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUpload {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A downloaded branding image: raw bytes plus the reported content type
#[derive(Debug, Clone)]
pub struct BrandingImage {
    pub bytes: Bytes,
    pub content_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branding_config_parses_wire_fixture() {
        let json = r##"{
            "productName": "FileGate",
            "colors": [{"type": "primary", "rgba": "#0d47a1"}],
            "texts": [{"type": "slogan", "content": "Share safely"}],
            "images": [{"type": "logo", "files": [{"size": "large", "url": "https://cdn/logo-l.png"}]}]
        }"##;
        let branding: BrandingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(branding.product_name, "FileGate");
        assert_eq!(branding.colors[0].kind, ColorKind::Primary);
        assert_eq!(branding.texts[0].kind, TextKind::Slogan);
        assert_eq!(branding.images[0].files[0].size, ImageSize::Large);
    }

    #[test]
    fn unknown_slots_fall_back() {
        let color: BrandingColor =
            serde_json::from_str(r##"{"type": "tertiary", "rgba": "#fff"}"##).unwrap();
        assert_eq!(color.kind, ColorKind::Unknown);
    }
}
