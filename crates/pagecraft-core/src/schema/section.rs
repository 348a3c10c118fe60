//! Editor sections
//!
//! Pure categorization of fields into the fixed buckets an editing UI shows.

use crate::schema::model::{Field, FieldType, Schema};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Basics,
    Contact,
    Content,
    Media,
    Social,
    Appearance,
}

impl Section {
    /// Display order
    pub const ALL: [Section; 6] = [
        Section::Basics,
        Section::Contact,
        Section::Content,
        Section::Media,
        Section::Social,
        Section::Appearance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Basics => "basics",
            Section::Contact => "contact",
            Section::Content => "content",
            Section::Media => "media",
            Section::Social => "social",
            Section::Appearance => "appearance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Basics => "Basics",
            Section::Contact => "Contact",
            Section::Content => "Content",
            Section::Media => "Media",
            Section::Social => "Social",
            Section::Appearance => "Appearance",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const SOCIAL_HINTS: [&str; 10] = [
    "social", "twitter", "github", "linkedin", "instagram", "facebook", "youtube", "tiktok",
    "dribbble", "mastodon",
];
const CONTACT_HINTS: [&str; 7] = ["email", "phone", "address", "location", "hours", "contact", "website"];
const BASICS_HINTS: [&str; 8] = [
    "name", "title", "tagline", "headline", "role", "company", "subtitle", "brand",
];
const MEDIA_HINTS: [&str; 5] = ["image", "photo", "avatar", "logo", "video"];
const APPEARANCE_HINTS: [&str; 4] = ["accent", "style", "layout", "theme"];

/// Section a field belongs to
///
/// The field type decides where it is unambiguous (images are media, colors
/// and theme selectors are appearance); otherwise the key's words decide.
pub fn resolve_section_for(key: &str, field: &Field) -> Section {
    let key = key.to_ascii_lowercase();
    let has = |hints: &[&str]| hints.iter().any(|h| key.contains(h));

    match field.kind {
        FieldType::ThemeSelector | FieldType::Color => return Section::Appearance,
        FieldType::Image => return Section::Media,
        _ => {}
    }

    if has(&SOCIAL_HINTS) {
        return Section::Social;
    }
    if matches!(field.kind, FieldType::Email | FieldType::Tel) || has(&CONTACT_HINTS) {
        return Section::Contact;
    }
    if matches!(field.kind, FieldType::Group | FieldType::Repeatable | FieldType::Textarea) {
        return Section::Content;
    }
    if has(&MEDIA_HINTS) {
        return Section::Media;
    }
    if field.kind == FieldType::Select && has(&APPEARANCE_HINTS) {
        return Section::Appearance;
    }
    if has(&BASICS_HINTS) {
        return Section::Basics;
    }
    if field.kind == FieldType::Url {
        return Section::Contact;
    }
    Section::Content
}

/// Fields grouped by section, in display order, empty sections omitted
pub fn sections(schema: &Schema) -> Vec<(Section, Vec<&Field>)> {
    Section::ALL
        .iter()
        .filter_map(|section| {
            let fields: Vec<&Field> = schema
                .iter()
                .filter(|f| resolve_section_for(&f.key, f) == *section)
                .collect();
            (!fields.is_empty()).then_some((*section, fields))
        })
        .collect()
}
