//! AwesomeCV dialect
//!
//! Single-flow layout with a named colour theme, a centred or side-aligned
//! header and a three-slot footer.

use serde::{Deserialize, Serialize};

use crate::dialect::{Dialect, ItemKind};
use crate::error::ModelError;
use crate::personal_info::{InfoField, PersonalInfoSet};
use crate::resume::{PhotoDirection, Resume};

pub type AwesomeCvResume = Resume<AwesomeCv>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AwesomeCv;

impl Dialect for AwesomeCv {
    const NAME: &'static str = "awesomecv";
    const SCHEMA_FILE: &'static str = "awesomecv.schema.json";
    const HAS_FOOTER: bool = true;
    const ITEM_KINDS: &'static [ItemKind] = &[
        ItemKind::Divider,
        ItemKind::NewLine,
        ItemKind::NewPage,
        ItemKind::Generic,
        ItemKind::Paragraph,
        ItemKind::Item,
        ItemKind::EventEntry,
        ItemKind::HonorList,
    ];

    type Config = Config;
    type Header = Header;
    type Footer = Footer;

    fn schema_source() -> &'static str {
        include_str!("../schemas/1.0.0/awesomecv.schema.json")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub color_theme: ColorTheme,
    pub is_section_highlighted: bool,
    /// LaTeX separator between social entries in the header.
    pub header_social_separator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_theme: ColorTheme::Red,
            is_section_highlighted: true,
            header_social_separator: "\\textbar".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColorTheme {
    Emerald,
    Skyblue,
    #[default]
    Red,
    Pink,
    Orange,
    Nephritis,
    Concrete,
    Darknight,
}

impl ColorTheme {
    /// Name of the colour definition in the class file.
    pub fn theme_name(self) -> &'static str {
        match self {
            ColorTheme::Emerald => "awesome-emerald",
            ColorTheme::Skyblue => "awesome-skyblue",
            ColorTheme::Red => "awesome-red",
            ColorTheme::Pink => "awesome-pink",
            ColorTheme::Orange => "awesome-orange",
            ColorTheme::Nephritis => "awesome-nephritis",
            ColorTheme::Concrete => "awesome-concrete",
            ColorTheme::Darknight => "awesome-darknight",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HeaderAlignment {
    #[default]
    Center,
    Left,
    Right,
}

impl HeaderAlignment {
    pub fn shortcut(self) -> &'static str {
        match self {
            HeaderAlignment::Center => "C",
            HeaderAlignment::Left => "L",
            HeaderAlignment::Right => "R",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Header {
    pub alignment: HeaderAlignment,
    pub user_info: Option<UserInfo>,
    pub photo: Option<Photo>,
    pub quote: String,
}

impl Header {
    pub fn with_user_info(mut self, user_info: UserInfo) -> Self {
        self.user_info = Some(user_info);
        self
    }

    pub fn with_photo(mut self, photo: Photo) -> Self {
        self.photo = Some(photo);
        self
    }

    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = quote.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    pub first_name: String,
    pub last_name: String,
    pub personal_info: PersonalInfoSet<Field>,
}

impl UserInfo {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            personal_info: PersonalInfoSet::new(),
        }
    }

    pub fn with_field(mut self, field: Field) -> Result<Self, ModelError> {
        self.personal_info.insert(field)?;
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PhotoShape {
    Circle,
    #[default]
    Rectangle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhotoEdge {
    #[default]
    Edge,
    NoEdge,
}

impl PhotoEdge {
    /// Class option spelling.
    pub fn option(self) -> &'static str {
        match self {
            PhotoEdge::Edge => "edge",
            PhotoEdge::NoEdge => "noedge",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Photo {
    pub shape: PhotoShape,
    pub edge: PhotoEdge,
    pub direction: PhotoDirection,
    pub path: String,
}

impl Photo {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    pub left: String,
    pub center: String,
    pub right: String,
}

impl Footer {
    pub fn new(left: impl Into<String>, center: impl Into<String>, right: impl Into<String>) -> Self {
        Self { left: left.into(), center: center.into(), right: right.into() }
    }
}

// ============================================================================
// Personal info
// ============================================================================

/// Closed set of header contact fields.
///
/// Stack Overflow and Google Scholar are addressed by an id; `name` is the
/// display text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FieldRepr", into = "FieldRepr")]
pub enum Field {
    Position(String),
    Address(String),
    Mobile(String),
    Email(String),
    HomePage(String),
    Github(String),
    LinkedIn(String),
    Gitlab(String),
    Twitter(String),
    Skype(String),
    Reddit(String),
    Medium(String),
    StackOverflow { id: String, name: String },
    GoogleScholar { id: String, name: String },
    ExtraInfo(String),
}

impl Field {
    pub fn field_name(&self) -> &'static str {
        match self {
            Field::Position(_) => "position",
            Field::Address(_) => "address",
            Field::Mobile(_) => "mobile",
            Field::Email(_) => "email",
            Field::HomePage(_) => "homepage",
            Field::Github(_) => "github",
            Field::LinkedIn(_) => "linkedin",
            Field::Gitlab(_) => "gitlab",
            Field::Twitter(_) => "twitter",
            Field::Skype(_) => "skype",
            Field::Reddit(_) => "reddit",
            Field::Medium(_) => "medium",
            Field::StackOverflow { .. } => "stackoverflow",
            Field::GoogleScholar { .. } => "googlescholar",
            Field::ExtraInfo(_) => "extrainfo",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Field::Position(v)
            | Field::Address(v)
            | Field::Mobile(v)
            | Field::Email(v)
            | Field::HomePage(v)
            | Field::Github(v)
            | Field::LinkedIn(v)
            | Field::Gitlab(v)
            | Field::Twitter(v)
            | Field::Skype(v)
            | Field::Reddit(v)
            | Field::Medium(v)
            | Field::ExtraInfo(v) => v,
            Field::StackOverflow { name, .. } | Field::GoogleScholar { name, .. } => name,
        }
    }

    pub fn value_id(&self) -> Option<&str> {
        match self {
            Field::StackOverflow { id, .. } | Field::GoogleScholar { id, .. } => Some(id.as_str()),
            _ => None,
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
    #[serde(default)]
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value_id: Option<String>,
}

impl From<Field> for FieldRepr {
    fn from(field: Field) -> Self {
        FieldRepr {
            field_name: field.field_name().to_string(),
            value: field.value().to_string(),
            value_id: field.value_id().map(str::to_string),
        }
    }
}

impl TryFrom<FieldRepr> for Field {
    type Error = ModelError;

    fn try_from(repr: FieldRepr) -> Result<Self, Self::Error> {
        let v = repr.value;
        let field = match repr.field_name.as_str() {
            "position" => Field::Position(v),
            "address" => Field::Address(v),
            "mobile" => Field::Mobile(v),
            "email" => Field::Email(v),
            "homepage" => Field::HomePage(v),
            "github" => Field::Github(v),
            "linkedin" => Field::LinkedIn(v),
            "gitlab" => Field::Gitlab(v),
            "twitter" => Field::Twitter(v),
            "skype" => Field::Skype(v),
            "reddit" => Field::Reddit(v),
            "medium" => Field::Medium(v),
            "stackoverflow" => Field::StackOverflow { id: repr.value_id.unwrap_or_default(), name: v },
            "googlescholar" => Field::GoogleScholar { id: repr.value_id.unwrap_or_default(), name: v },
            "extrainfo" => Field::ExtraInfo(v),
            _ => {
                return Err(ModelError::UnsupportedVariant {
                    dialect: AwesomeCv::NAME,
                    kind: repr.field_name,
                })
            }
        };
        Ok(field)
    }
}
