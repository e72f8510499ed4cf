//! View tree produced by the renderer.
//!
//! The tree is layout-engine agnostic: it says which blocks appear, in which
//! page region, in which order, with which labels. Typesetting is the host's job.

use serde::{Deserialize, Serialize};

use crate::models::TemplateId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDocument {
    pub template: TemplateId,
    pub page: PageSize,
    pub regions: Vec<Region>,
}

#[cfg(test)]
impl RenderedDocument {
    pub fn region(&self, slot: Slot) -> Option<&Region> {
        self.regions.iter().find(|r| r.slot == slot)
    }

    /// All section blocks, in reading order across regions.
    pub fn sections(&self) -> impl Iterator<Item = (&SectionKey, &str, &SectionBody)> {
        self.regions
            .iter()
            .flat_map(|r| r.blocks.iter())
            .filter_map(|b| match b {
                Block::Section { key, heading, body } => Some((key, heading.as_str(), body)),
                _ => None,
            })
    }

    pub fn has_section(&self, key: SectionKey) -> bool {
        self.sections().any(|(k, _, _)| *k == key)
    }
}

/// Physical page size in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSize {
    pub width_mm: u32,
    pub height_mm: u32,
}

pub const A4: PageSize = PageSize {
    width_mm: 210,
    height_mm: 297,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Header,
    Sidebar,
    Main,
    Aside,
    Footer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub slot: Slot,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Objective,
    Education,
    Work,
    Skills,
    Languages,
    Hobbies,
    PersonalDetails,
    Declaration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhotoView {
    Image { uri: String },
    Placeholder,
}

/// One line of a contact/identity block. `label` is absent for composed lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStyle {
    Bullet,
    Dash,
    Tag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

/// An education or work entry laid out as a card / timeline row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionBody {
    Paragraph { text: String },
    Table { columns: Vec<String>, rows: Vec<Vec<String>> },
    Items { style: ItemStyle, items: Vec<Item> },
    Fields { fields: Vec<Field> },
    Cards { cards: Vec<Card> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Banner {
        text: String,
    },
    Name {
        text: String,
    },
    Photo {
        photo: PhotoView,
    },
    Caption {
        text: String,
    },
    Lines {
        lines: Vec<Line>,
    },
    Section {
        key: SectionKey,
        heading: String,
        body: SectionBody,
    },
    Signature {
        date: Line,
        #[serde(skip_serializing_if = "Option::is_none")]
        place: Option<Line>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        caption: String,
    },
}
