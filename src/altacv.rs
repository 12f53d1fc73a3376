//! AltaCV dialect
//!
//! Two-column layout with a six-slot colour palette. No footer.

use serde::{Deserialize, Serialize};

use crate::dialect::{Dialect, ItemKind};
use crate::error::ModelError;
use crate::personal_info::{InfoField, PersonalInfoSet};
use crate::resume::{PhotoDirection, Resume};

pub type AltaCvResume = Resume<AltaCv>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AltaCv;

impl Dialect for AltaCv {
    const NAME: &'static str = "altacv";
    const SCHEMA_FILE: &'static str = "altacv.schema.json";
    const HAS_FOOTER: bool = false;
    const ITEM_KINDS: &'static [ItemKind] = &[
        ItemKind::Divider,
        ItemKind::NewLine,
        ItemKind::NewPage,
        ItemKind::Tag,
        ItemKind::Quote,
        ItemKind::Generic,
        ItemKind::Achievement,
        ItemKind::Skill,
        ItemKind::Item,
        ItemKind::Event,
        ItemKind::WheelChart,
    ];

    type Config = Config;
    type Header = Header;
    type Footer = NoFooter;

    fn schema_source() -> &'static str {
        include_str!("../schemas/1.0.0/altacv.schema.json")
    }
}

/// Placeholder footer; never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NoFooter;

// ============================================================================
// Config
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Width share of the first column.
    pub column_ratio: ColumnRatio,
    pub photo_shape: PhotoShape,
    pub theme: ColorPalette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            column_ratio: ColumnRatio::default(),
            photo_shape: PhotoShape::Normal,
            theme: ColorPalette::theme1(),
        }
    }
}

/// A first-column share in `(0, 1]`. Serialized as the bare number, with
/// the caller's precision.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ColumnRatio(f64);

impl ColumnRatio {
    pub fn new(ratio: f64) -> Result<Self, ModelError> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(ModelError::OutOfRange { field: "columnRatio", value: ratio, expected: "in (0, 1]" });
        }
        Ok(Self(ratio))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for ColumnRatio {
    fn default() -> Self {
        Self(0.6)
    }
}

impl TryFrom<f64> for ColumnRatio {
    type Error = ModelError;

    fn try_from(ratio: f64) -> Result<Self, Self::Error> {
        Self::new(ratio)
    }
}

impl From<ColumnRatio> for f64 {
    fn from(ratio: ColumnRatio) -> Self {
        ratio.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PhotoShape {
    Circle,
    #[default]
    Normal,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ColorRepr")]
pub struct Color {
    color_name: String,
    color_hex_value: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColorRepr {
    color_name: String,
    color_hex_value: String,
}

impl TryFrom<ColorRepr> for Color {
    type Error = ModelError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        Color::new(repr.color_name, repr.color_hex_value)
    }
}

impl Color {
    /// `hex` is six hex digits with no leading `#`.
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Result<Self, ModelError> {
        let hex = hex.into();
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ModelError::InvalidHexColor(hex));
        }
        Ok(Self { color_name: name.into(), color_hex_value: hex })
    }

    fn known(name: &str, hex: &str) -> Self {
        Self { color_name: name.to_string(), color_hex_value: hex.to_string() }
    }

    pub fn name(&self) -> &str {
        &self.color_name
    }

    pub fn hex_value(&self) -> &str {
        &self.color_hex_value
    }

    pub fn pastel_red() -> Self { Self::known("PastelRed", "8F0D0D") }
    pub fn golden_earth() -> Self { Self::known("GoldenEarth", "E7D192") }
    pub fn dark_pastel_red() -> Self { Self::known("DarkPastelRed", "450808") }
    pub fn slate_grey() -> Self { Self::known("SlateGrey", "2E2E2E") }
    pub fn light_grey() -> Self { Self::known("LightGrey", "666666") }
    pub fn mulberry() -> Self { Self::known("Mulberry", "72243D") }
    pub fn vivid_purple() -> Self { Self::known("VividPurple", "3E0097") }
    pub fn sepia() -> Self { Self::known("Sepia", "581C09") }
}

/// Colour per role. Serialized keys are the LaTeX colour aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub tagline: Color,
    #[serde(rename = "headingrule")]
    pub heading_rule: Color,
    pub heading: Color,
    pub accent: Color,
    pub emphasis: Color,
    pub body: Color,
}

impl ColorPalette {
    pub fn theme1() -> Self {
        Self {
            tagline: Color::pastel_red(),
            heading_rule: Color::golden_earth(),
            heading: Color::dark_pastel_red(),
            accent: Color::pastel_red(),
            emphasis: Color::slate_grey(),
            body: Color::light_grey(),
        }
    }

    pub fn theme2() -> Self {
        Self {
            tagline: Color::vivid_purple(),
            heading_rule: Color::vivid_purple(),
            heading: Color::vivid_purple(),
            accent: Color::vivid_purple(),
            emphasis: Color::slate_grey(),
            body: Color::light_grey(),
        }
    }

    pub fn theme3() -> Self {
        Self {
            tagline: Color::pastel_red(),
            heading_rule: Color::golden_earth(),
            heading: Color::sepia(),
            accent: Color::mulberry(),
            emphasis: Color::slate_grey(),
            body: Color::light_grey(),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::theme1()
    }
}

// ============================================================================
// Header
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Header {
    pub tagline: String,
    pub user_info: Option<UserInfo>,
    pub photo: Option<Photo>,
}

impl Header {
    pub fn new(tagline: impl Into<String>) -> Self {
        Self { tagline: tagline.into(), ..Default::default() }
    }

    pub fn with_user_info(mut self, user_info: UserInfo) -> Self {
        self.user_info = Some(user_info);
        self
    }

    pub fn with_photo(mut self, photo: Photo) -> Self {
        self.photo = Some(photo);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    pub name: String,
    pub personal_info: PersonalInfoSet<Field>,
}

impl UserInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), personal_info: PersonalInfoSet::new() }
    }

    /// Adds a contact field, rejecting a second field of the same kind.
    pub fn with_field(mut self, field: Field) -> Result<Self, ModelError> {
        self.personal_info.insert(field)?;
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PhotoRepr")]
pub struct Photo {
    size: f64,
    pub path: String,
    pub direction: PhotoDirection,
}

#[derive(Deserialize)]
struct PhotoRepr {
    size: f64,
    path: String,
    #[serde(default)]
    direction: PhotoDirection,
}

impl TryFrom<PhotoRepr> for Photo {
    type Error = ModelError;

    fn try_from(repr: PhotoRepr) -> Result<Self, Self::Error> {
        Ok(Photo { direction: repr.direction, ..Photo::new(repr.size, repr.path)? })
    }
}

impl Photo {
    /// `size` is the photo width in cm and must be positive.
    pub fn new(size: f64, path: impl Into<String>) -> Result<Self, ModelError> {
        if !(size > 0.0 && size.is_finite()) {
            return Err(ModelError::OutOfRange { field: "size", value: size, expected: "a positive number" });
        }
        Ok(Self { size, path: path.into(), direction: PhotoDirection::Right })
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn on_left(mut self) -> Self {
        self.direction = PhotoDirection::Left;
        self
    }
}

// ============================================================================
// Personal info
// ============================================================================

/// An ORCID iD, `dddd-dddd-dddd-dddd`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Orcid(String);

impl Orcid {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let groups: Vec<&str> = value.split('-').collect();
        let valid = groups.len() == 4
            && groups.iter().all(|g| g.len() == 4 && g.bytes().all(|b| b.is_ascii_digit()));
        if !valid {
            return Err(ModelError::InvalidOrcid(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A contact field outside the built-in set, carrying its own icon and link
/// prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomField {
    field_name: String,
    symbol: String,
    prefix: String,
    value: String,
}

impl CustomField {
    /// Fails with [`ModelError::UnsupportedVariant`] when `field_name` is one
    /// of the built-in names; use the matching [`Field`] variant instead.
    pub fn new(
        field_name: impl Into<String>,
        symbol: impl Into<String>,
        prefix: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let field_name = field_name.into();
        if BUILTIN_FIELD_NAMES.contains(&field_name.as_str()) {
            return Err(ModelError::UnsupportedVariant { dialect: AltaCv::NAME, kind: field_name });
        }
        Ok(Self {
            field_name,
            symbol: symbol.into(),
            prefix: prefix.into(),
            value: value.into(),
        })
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }
}

const BUILTIN_FIELD_NAMES: &[&str] =
    &["email", "phone", "mailaddress", "location", "homepage", "twitter", "linkedin", "github", "orcid"];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FieldRepr", into = "FieldRepr")]
pub enum Field {
    Email(String),
    Phone(String),
    MailAddress(String),
    Location(String),
    HomePage(String),
    Twitter(String),
    LinkedIn(String),
    Github(String),
    Orcid(Orcid),
    Custom(CustomField),
}

impl Field {
    pub fn orcid(value: impl Into<String>) -> Result<Self, ModelError> {
        Ok(Field::Orcid(Orcid::new(value)?))
    }

    pub fn field_name(&self) -> &str {
        match self {
            Field::Email(_) => "email",
            Field::Phone(_) => "phone",
            Field::MailAddress(_) => "mailaddress",
            Field::Location(_) => "location",
            Field::HomePage(_) => "homepage",
            Field::Twitter(_) => "twitter",
            Field::LinkedIn(_) => "linkedin",
            Field::Github(_) => "github",
            Field::Orcid(_) => "orcid",
            Field::Custom(custom) => &custom.field_name,
        }
    }

    /// LaTeX icon command shown before the value.
    pub fn symbol(&self) -> &str {
        match self {
            Field::Email(_) => "\\faAt",
            Field::Phone(_) => "\\faPhone",
            Field::MailAddress(_) => "\\faEnvelope",
            Field::Location(_) => "\\cvLocationMarker",
            Field::HomePage(_) => "\\faGlobe",
            Field::Twitter(_) => "\\faTwitter",
            Field::LinkedIn(_) => "\\faLinkedin",
            Field::Github(_) => "\\faGithub",
            Field::Orcid(_) => "\\faOrcid",
            Field::Custom(custom) => &custom.symbol,
        }
    }

    /// Link prefix; empty for fields that are not links.
    pub fn prefix(&self) -> &str {
        match self {
            Field::Email(_) => "mailto:",
            Field::Phone(_) => "tel:",
            Field::MailAddress(_) | Field::Location(_) => "",
            Field::HomePage(_) => "https://",
            Field::Twitter(_) => "https://twitter.com/",
            Field::LinkedIn(_) => "https://linkedin.com/in/",
            Field::Github(_) => "https://github.com/",
            Field::Orcid(_) => "https://orcid.org/",
            Field::Custom(custom) => &custom.prefix,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Field::Email(v)
            | Field::Phone(v)
            | Field::MailAddress(v)
            | Field::Location(v)
            | Field::HomePage(v)
            | Field::Twitter(v)
            | Field::LinkedIn(v)
            | Field::Github(v) => v,
            Field::Orcid(orcid) => orcid.as_str(),
            Field::Custom(custom) => &custom.value,
        }
    }
}

impl InfoField for Field {
    fn identity_key(&self) -> &str {
        self.field_name()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldRepr {
    field_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
    value: String,
}

impl From<Field> for FieldRepr {
    fn from(field: Field) -> Self {
        match field {
            Field::Custom(custom) => FieldRepr {
                field_name: custom.field_name,
                symbol: Some(custom.symbol),
                prefix: Some(custom.prefix),
                value: custom.value,
            },
            builtin => FieldRepr {
                field_name: builtin.field_name().to_string(),
                symbol: None,
                prefix: None,
                value: builtin.value().to_string(),
            },
        }
    }
}

impl TryFrom<FieldRepr> for Field {
    type Error = ModelError;

    fn try_from(repr: FieldRepr) -> Result<Self, Self::Error> {
        let value = repr.value;
        let field = match repr.field_name.as_str() {
            "email" => Field::Email(value),
            "phone" => Field::Phone(value),
            "mailaddress" => Field::MailAddress(value),
            "location" => Field::Location(value),
            "homepage" => Field::HomePage(value),
            "twitter" => Field::Twitter(value),
            "linkedin" => Field::LinkedIn(value),
            "github" => Field::Github(value),
            "orcid" => Field::orcid(value)?,
            _ => Field::Custom(CustomField::new(
                repr.field_name,
                repr.symbol.unwrap_or_default(),
                repr.prefix.unwrap_or_default(),
                value,
            )?),
        };
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_defaults() {
        let value = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(value["columnRatio"], json!(0.6));
        assert_eq!(value["photoShape"], "NORMAL");
        assert_eq!(value["theme"]["headingrule"], json!({"colorName": "GoldenEarth", "colorHexValue": "E7D192"}));
        assert_eq!(value["theme"]["body"]["colorHexValue"], "666666");
    }

    #[test]
    fn test_column_ratio_precision() {
        let config = Config { column_ratio: ColumnRatio::new(0.8).unwrap(), ..Default::default() };
        let text = serde_json::to_string(&config).unwrap();
        assert!(text.contains("\"columnRatio\":0.8"));
    }

    #[test]
    fn test_column_ratio_range() {
        assert!(ColumnRatio::new(1.0).is_ok());
        for ratio in [0.0, -0.2, 1.5, f64::NAN, f64::INFINITY] {
            let err = ColumnRatio::new(ratio).unwrap_err();
            assert!(matches!(err, ModelError::OutOfRange { field: "columnRatio", .. }), "{ratio}");
        }

        let parsed = serde_json::from_value::<Config>(json!({"columnRatio": 1.5}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_color_hex_value() {
        let color = Color::new("Teal", "008080").unwrap();
        assert_eq!(color.hex_value(), "008080");
        assert_eq!(color.name(), "Teal");

        for hex in ["red", "#008080", "00808", "0080800", "GG0000"] {
            assert!(matches!(Color::new("Bad", hex), Err(ModelError::InvalidHexColor(_))), "{hex}");
        }

        let parsed = serde_json::from_value::<Color>(json!({"colorName": "Red", "colorHexValue": "red"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_value(json!({"photoShape": "CIRCLE"})).unwrap();
        assert_eq!(config.photo_shape, PhotoShape::Circle);
        assert_eq!(config.column_ratio.get(), 0.6);
        assert_eq!(config.theme, ColorPalette::theme1());
    }

    #[test]
    fn test_header_nulls() {
        let value = serde_json::to_value(Header::default()).unwrap();
        assert_eq!(value, json!({"tagline": "", "userInfo": null, "photo": null}));
    }

    #[test]
    fn test_photo_json() {
        let value = serde_json::to_value(Photo::new(2.8, "photo.jpg").unwrap().on_left()).unwrap();
        assert_eq!(value, json!({"size": 2.8, "path": "photo.jpg", "direction": "LEFT"}));
        assert_eq!(serde_json::from_value::<Photo>(value).unwrap().size(), 2.8);
    }

    #[test]
    fn test_photo_size_must_be_positive() {
        for size in [0.0, -1.0, f64::NAN] {
            assert!(Photo::new(size, "photo.jpg").unwrap_err().is_out_of_range());
        }

        let parsed = serde_json::from_value::<Photo>(json!({"size": 0.0, "path": "photo.jpg"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_builtin_field_json() {
        let value = serde_json::to_value(Field::Email("john@example.com".into())).unwrap();
        assert_eq!(value, json!({"fieldName": "email", "value": "john@example.com"}));

        let field = Field::Github("jdoe".into());
        assert_eq!(field.symbol(), "\\faGithub");
        assert_eq!(field.prefix(), "https://github.com/");
    }

    #[test]
    fn test_custom_field_json() {
        let field = Field::Custom(CustomField::new("gitlab", "\\faGitlab", "https://gitlab.com/", "jdoe").unwrap());
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(
            value,
            json!({"fieldName": "gitlab", "symbol": "\\faGitlab", "prefix": "https://gitlab.com/", "value": "jdoe"})
        );
        assert_eq!(serde_json::from_value::<Field>(value).unwrap(), field);
    }

    #[test]
    fn test_custom_field_cannot_shadow_builtin() {
        let err = CustomField::new("email", "\\faAt", "mailto:", "a@b.c").unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedVariant { dialect: "altacv", ref kind } if kind == "email"));

        // a built-in name with its own symbol parses as the built-in
        let parsed: Field = serde_json::from_value(json!({
            "fieldName": "email", "symbol": "\\faStar", "prefix": "x:", "value": "a@b.c"
        }))
        .unwrap();
        assert_eq!(parsed, Field::Email("a@b.c".into()));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), json!({"fieldName": "email", "value": "a@b.c"}));
    }

    #[test]
    fn test_orcid_format() {
        assert!(Field::orcid("0000-0002-1825-0097").is_ok());
        assert!(matches!(Field::orcid("0000-0002-1825"), Err(ModelError::InvalidOrcid(_))));
        assert!(Field::orcid("0000-0002-1825-009X").is_err());

        let parsed = serde_json::from_value::<Field>(json!({"fieldName": "orcid", "value": "12-34"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_user_info_rejects_duplicate_kind() {
        let err = UserInfo::new("Your Name Here")
            .with_field(Field::Email("a@b.c".into()))
            .unwrap()
            .with_field(Field::Email("d@e.f".into()))
            .unwrap_err();
        assert!(err.is_duplicate_identity());
    }

    #[test]
    fn test_dialect_item_kinds() {
        assert!(AltaCv::supports(ItemKind::WheelChart));
        assert!(!AltaCv::supports(ItemKind::Paragraph));
        assert!(!AltaCv::supports(ItemKind::HonorList));
        assert_eq!(AltaCv::schema_path(), "schemas/1.0.0/altacv.schema.json");
    }
}
