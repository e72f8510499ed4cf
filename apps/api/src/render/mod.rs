//! Template renderer: maps a `ResumeDocument` onto a template's view tree.
//!
//! # Contract
//! - Presence-driven: a value that is empty after trimming, a missing photo or
//!   an empty collection produces nothing, and a section left with no content
//!   loses its heading too. Regions left with no blocks are dropped.
//! - Stored order is display order for education, work and skills.
//! - Derived formatting (comma splitting, `Category: items` skills) is a
//!   projection; the document is only ever read.
//! - A blank document date is shown as the render date.
//! - Pure and total: same document + template + date always gives the same
//!   tree, and every document renders.

pub mod layout;
pub mod view;

use chrono::NaiveDate;

use crate::editor::{split_delimited, WorkField};
use crate::models::{format_document_date, EducationEntry, ResumeDocument, TemplateId};
use layout::{layout_for, CardSpec, Content, LineSpec, Part, SignatureSpec};
use view::{Block, Card, Field, Item, ItemStyle, Line, PhotoView, Region, SectionBody, A4};

pub use view::RenderedDocument;

/// Renders `doc` under `template`. `today` backs the blank-date default.
pub fn render(doc: &ResumeDocument, template: TemplateId, today: NaiveDate) -> RenderedDocument {
    let regions = layout_for(template)
        .regions
        .iter()
        .filter_map(|(slot, parts)| {
            let blocks: Vec<Block> = parts
                .iter()
                .filter_map(|part| build_part(part, doc, today))
                .collect();
            (!blocks.is_empty()).then_some(Region {
                slot: *slot,
                blocks,
            })
        })
        .collect();

    RenderedDocument {
        template,
        page: A4,
        regions,
    }
}

/// Renders under the template stored in the document's selector.
pub fn render_selected(doc: &ResumeDocument, today: NaiveDate) -> RenderedDocument {
    render(doc, doc.template, today)
}

fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn has_identity(doc: &ResumeDocument) -> bool {
    [
        &doc.identity.name,
        &doc.identity.address,
        &doc.identity.contact,
    ]
    .iter()
    .any(|v| present(v).is_some())
}

/// The footer shows once the signer, the place or a stored date is known.
fn has_signatory(doc: &ResumeDocument) -> bool {
    [
        &doc.identity.name,
        &doc.personal_details.job_location,
        &doc.identity.date,
    ]
    .iter()
    .any(|v| present(v).is_some())
}

fn build_part(part: &Part, doc: &ResumeDocument, today: NaiveDate) -> Option<Block> {
    match part {
        Part::Banner {
            text,
            when_identity,
        } => {
            if *when_identity && !has_identity(doc) {
                return None;
            }
            Some(Block::Banner {
                text: text.to_string(),
            })
        }
        Part::Name => present(&doc.identity.name).map(|name| Block::Name {
            text: name.to_string(),
        }),
        Part::Photo { placeholder } => {
            let photo = match &doc.photo {
                Some(photo) => PhotoView::Image {
                    uri: photo.as_str().to_string(),
                },
                None if *placeholder && present(&doc.identity.name).is_some() => {
                    PhotoView::Placeholder
                }
                None => return None,
            };
            Some(Block::Photo { photo })
        }
        Part::Caption(text) => {
            let shown = doc.photo.is_some() || present(&doc.identity.name).is_some();
            shown.then(|| Block::Caption {
                text: text.to_string(),
            })
        }
        Part::Lines(specs) => {
            let lines: Vec<Line> = specs.iter().filter_map(|s| build_line(s, doc)).collect();
            (!lines.is_empty()).then_some(Block::Lines { lines })
        }
        Part::Section {
            key,
            heading,
            content,
        } => build_body(content, doc).map(|body| Block::Section {
            key: *key,
            heading: heading.to_string(),
            body,
        }),
        Part::Signature(spec) => has_signatory(doc).then(|| build_signature(spec, doc, today)),
    }
}

fn build_line(spec: &LineSpec, doc: &ResumeDocument) -> Option<Line> {
    match spec {
        LineSpec::Labeled(label, source) => present(source.read(doc)).map(|value| Line {
            label: Some(label.to_string()),
            text: value.to_string(),
        }),
        LineSpec::Joined(parts, joiner) => {
            let pieces: Vec<String> = parts
                .iter()
                .filter_map(|(prefix, source)| {
                    present(source.read(doc)).map(|value| format!("{prefix}{value}"))
                })
                .collect();
            (!pieces.is_empty()).then(|| Line {
                label: None,
                text: pieces.join(*joiner),
            })
        }
    }
}

fn build_body(content: &Content, doc: &ResumeDocument) -> Option<SectionBody> {
    match content {
        Content::Paragraph(source) => present(source.read(doc)).map(|text| SectionBody::Paragraph {
            text: text.to_string(),
        }),
        Content::EducationTable(columns) => {
            let rows: Vec<Vec<String>> = doc
                .education
                .iter()
                .filter(|entry| !entry.is_blank())
                .map(|entry| {
                    columns
                        .iter()
                        .map(|(_, field)| field.value(entry).trim().to_string())
                        .collect()
                })
                .collect();
            (!rows.is_empty()).then(|| SectionBody::Table {
                columns: columns.iter().map(|(label, _)| label.to_string()).collect(),
                rows,
            })
        }
        Content::EducationCards(spec) => {
            let cards: Vec<Card> = doc
                .education
                .iter()
                .filter(|entry| !entry.is_blank())
                .map(|entry| education_card(spec, entry))
                .collect();
            (!cards.is_empty()).then_some(SectionBody::Cards { cards })
        }
        Content::WorkCards => {
            let cards: Vec<Card> = doc
                .work_experience
                .iter()
                .filter(|entry| !entry.is_blank())
                .map(|entry| {
                    let part = |field: WorkField| present(field.value(entry)).map(str::to_string);
                    Card {
                        title: WorkField::JobTitle.value(entry).trim().to_string(),
                        meta: part(WorkField::Duration),
                        subtitle: part(WorkField::Company),
                        note: part(WorkField::Responsibilities),
                    }
                })
                .collect();
            (!cards.is_empty()).then_some(SectionBody::Cards { cards })
        }
        Content::Skills {
            style,
            split_category,
        } => {
            let items: Vec<Item> = doc
                .skills
                .iter()
                .filter_map(|skill| present(skill))
                .map(|skill| skill_item(skill, *split_category))
                .collect();
            items_body(*style, items)
        }
        Content::Delimited(source, style) => {
            let items = split_delimited(source.read(doc))
                .into_iter()
                .map(|text| Item { label: None, text })
                .collect();
            items_body(*style, items)
        }
        Content::Fields(specs) => {
            let fields: Vec<Field> = specs
                .iter()
                .filter_map(|(label, source)| {
                    present(source.read(doc)).map(|value| Field {
                        label: label.to_string(),
                        value: value.to_string(),
                    })
                })
                .collect();
            (!fields.is_empty()).then_some(SectionBody::Fields { fields })
        }
    }
}

fn items_body(style: ItemStyle, items: Vec<Item>) -> Option<SectionBody> {
    (!items.is_empty()).then_some(SectionBody::Items { style, items })
}

fn skill_item(skill: &str, split_category: bool) -> Item {
    if split_category {
        if let Some((category, rest)) = skill.split_once(':') {
            if let (Some(category), Some(rest)) = (present(category), present(rest)) {
                return Item {
                    label: Some(category.to_string()),
                    text: rest.to_string(),
                };
            }
        }
    }
    Item {
        label: None,
        text: skill.to_string(),
    }
}

fn education_card(spec: &CardSpec, entry: &EducationEntry) -> Card {
    let subtitle: Vec<&str> = spec
        .subtitle
        .iter()
        .filter_map(|field| present(field.value(entry)))
        .collect();
    Card {
        title: entry.qualification.trim().to_string(),
        meta: spec
            .meta
            .and_then(|field| present(field.value(entry)))
            .map(str::to_string),
        subtitle: (!subtitle.is_empty()).then(|| subtitle.join(" • ")),
        note: spec.note.and_then(|(prefix, field)| {
            present(field.value(entry)).map(|value| format!("{prefix}{value}"))
        }),
    }
}

fn build_signature(spec: &SignatureSpec, doc: &ResumeDocument, today: NaiveDate) -> Block {
    let date = present(&doc.identity.date)
        .map(str::to_string)
        .unwrap_or_else(|| format_document_date(today));
    let place = if spec.show_place {
        present(&doc.personal_details.job_location).map(|place| Line {
            label: spec.place_label.map(str::to_string),
            text: place.to_string(),
        })
    } else {
        None
    };
    let name = if spec.show_name {
        present(&doc.identity.name).map(str::to_string)
    } else {
        None
    };
    Block::Signature {
        date: Line {
            label: spec.date_label.map(str::to_string),
            text: date,
        },
        place,
        name,
        caption: spec.caption.to_string(),
    }
}
