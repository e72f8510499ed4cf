//! Template table. Every layout is data over one shared set of section builders.
//!
//! A template is an ordered list of regions, each an ordered list of parts.
//! Parts only name *what* to show and *how it is labelled*; whether it shows
//! at all is decided by the builders from the document's contents.

use crate::editor::{EducationField, PersonalField, ScalarField};
use crate::models::{ResumeDocument, TemplateId};
use crate::render::view::{ItemStyle, SectionKey, Slot};

/// A readable text field of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Scalar(ScalarField),
    Personal(PersonalField),
}

const CONTACT: Source = Source::Scalar(ScalarField::Contact);
const ADDRESS: Source = Source::Scalar(ScalarField::Address);
const DECLARATION: Source = Source::Scalar(ScalarField::Declaration);
const EMAIL: Source = Source::Personal(PersonalField::Email);
const DOB: Source = Source::Personal(PersonalField::Dob);
const AADHAR: Source = Source::Personal(PersonalField::Aadhar);
const FATHER: Source = Source::Personal(PersonalField::FatherName);
const MARITAL: Source = Source::Personal(PersonalField::MaritalStatus);
const LANGUAGES: Source = Source::Personal(PersonalField::Languages);
const HOBBIES: Source = Source::Personal(PersonalField::Hobbies);
const OBJECTIVE: Source = Source::Personal(PersonalField::CareerObjective);

#[derive(Debug, Clone, Copy)]
pub enum LineSpec {
    /// `label` + value, shown when the value is present.
    Labeled(&'static str, Source),
    /// Present values rendered as `prefix value`, joined by `joiner`.
    Joined(&'static [(&'static str, Source)], &'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct CardSpec {
    pub meta: Option<EducationField>,
    pub subtitle: &'static [EducationField],
    pub note: Option<(&'static str, EducationField)>,
}

#[derive(Debug, Clone, Copy)]
pub enum Content {
    Paragraph(Source),
    EducationTable(&'static [(&'static str, EducationField)]),
    EducationCards(CardSpec),
    WorkCards,
    /// Skills list; `split_category` renders `"Category: items"` as a labelled item.
    Skills {
        style: ItemStyle,
        split_category: bool,
    },
    /// A comma-delimited field shown as a list.
    Delimited(Source, ItemStyle),
    Fields(&'static [(&'static str, Source)]),
}

#[derive(Debug, Clone, Copy)]
pub struct SignatureSpec {
    pub date_label: Option<&'static str>,
    /// Print the job/location preference as the place of signing.
    pub show_place: bool,
    pub place_label: Option<&'static str>,
    pub show_name: bool,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum Part {
    /// `when_identity`: only shown once name, address or contact is filled.
    Banner {
        text: &'static str,
        when_identity: bool,
    },
    Name,
    /// `placeholder`: show an avatar placeholder when a name exists but no photo.
    Photo { placeholder: bool },
    /// Shown alongside a name or photo.
    Caption(&'static str),
    Lines(&'static [LineSpec]),
    Section {
        key: SectionKey,
        heading: &'static str,
        content: Content,
    },
    Signature(SignatureSpec),
}

impl Source {
    pub fn read<'a>(&self, doc: &'a ResumeDocument) -> &'a str {
        match self {
            Source::Scalar(field) => field.value(doc),
            Source::Personal(field) => field.value(&doc.personal_details),
        }
    }
}

pub struct TemplateLayout {
    pub regions: &'static [(Slot, &'static [Part])],
}

/// Work experience renders identically in every template, only the heading differs.
const fn work(heading: &'static str) -> Part {
    Part::Section {
        key: SectionKey::Work,
        heading,
        content: Content::WorkCards,
    }
}

const fn paragraph(key: SectionKey, heading: &'static str, source: Source) -> Part {
    Part::Section {
        key,
        heading,
        content: Content::Paragraph(source),
    }
}

pub fn layout_for(template: TemplateId) -> &'static TemplateLayout {
    match template {
        TemplateId::Elegant => &ELEGANT,
        TemplateId::Classic => &CLASSIC,
        TemplateId::Modern => &MODERN,
        TemplateId::Professional => &PROFESSIONAL,
    }
}

// ── Elegant ─────────────────────────────────────────────────────────────────

static ELEGANT: TemplateLayout = TemplateLayout {
    regions: &[
        (
            Slot::Header,
            &[
                Part::Name,
                Part::Lines(&[
                    LineSpec::Joined(&[("", ADDRESS)], ""),
                    LineSpec::Joined(&[("Phone: ", CONTACT), ("Email: ", EMAIL)], " | "),
                    LineSpec::Labeled("Date of Birth", DOB),
                    LineSpec::Labeled("Aadhar No.", AADHAR),
                ]),
                Part::Photo { placeholder: false },
            ],
        ),
        (
            Slot::Main,
            &[
                paragraph(SectionKey::Objective, "Career Objective", OBJECTIVE),
                Part::Section {
                    key: SectionKey::Education,
                    heading: "Educational Qualifications",
                    content: Content::EducationTable(&[
                        ("Qualification", EducationField::Qualification),
                        ("Year", EducationField::Year),
                        ("Board/University", EducationField::Board),
                        ("Percentage", EducationField::Division),
                    ]),
                },
                work("Work Experience"),
                Part::Section {
                    key: SectionKey::Skills,
                    heading: "Technical Skills",
                    content: Content::Skills {
                        style: ItemStyle::Bullet,
                        split_category: true,
                    },
                },
                Part::Section {
                    key: SectionKey::Languages,
                    heading: "Languages Known",
                    content: Content::Delimited(LANGUAGES, ItemStyle::Dash),
                },
                Part::Section {
                    key: SectionKey::Hobbies,
                    heading: "Hobbies & Interests",
                    content: Content::Delimited(HOBBIES, ItemStyle::Dash),
                },
                Part::Section {
                    key: SectionKey::PersonalDetails,
                    heading: "Personal Details",
                    content: Content::Fields(&[
                        ("Father's Name", FATHER),
                        ("Date of Birth", DOB),
                        ("Marital Status", MARITAL),
                    ]),
                },
                paragraph(SectionKey::Declaration, "Declaration", DECLARATION),
            ],
        ),
        (
            Slot::Footer,
            &[Part::Signature(SignatureSpec {
                date_label: Some("Date"),
                show_place: true,
                place_label: Some("Place"),
                show_name: true,
                caption: "Signature",
            })],
        ),
    ],
};

// ── Classic ─────────────────────────────────────────────────────────────────

static CLASSIC: TemplateLayout = TemplateLayout {
    regions: &[
        (
            Slot::Header,
            &[
                Part::Banner {
                    text: "Resume / Bio-Data",
                    when_identity: true,
                },
                Part::Name,
                Part::Lines(&[
                    LineSpec::Labeled("Address", ADDRESS),
                    LineSpec::Labeled("Contact No", CONTACT),
                    LineSpec::Labeled("Email", EMAIL),
                ]),
                Part::Photo { placeholder: false },
            ],
        ),
        (
            Slot::Main,
            &[
                Part::Section {
                    key: SectionKey::Education,
                    heading: "Academic Qualification",
                    content: Content::EducationTable(&[
                        ("Qual.", EducationField::Qualification),
                        ("Board/Uni", EducationField::Board),
                        ("Year", EducationField::Year),
                        ("Div/%.", EducationField::Division),
                    ]),
                },
                work("Work Experience"),
                Part::Section {
                    key: SectionKey::Skills,
                    heading: "Technical Skills",
                    content: Content::Skills {
                        style: ItemStyle::Bullet,
                        split_category: false,
                    },
                },
                Part::Section {
                    key: SectionKey::PersonalDetails,
                    heading: "Personal Details",
                    content: Content::Fields(&[
                        ("Father's Name", FATHER),
                        ("Date of Birth", DOB),
                        ("Marital Status", MARITAL),
                        ("Aadhar No", AADHAR),
                        ("Languages", LANGUAGES),
                    ]),
                },
                paragraph(SectionKey::Declaration, "Declaration", DECLARATION),
            ],
        ),
        (
            Slot::Footer,
            &[Part::Signature(SignatureSpec {
                date_label: Some("Date"),
                show_place: true,
                place_label: Some("Place"),
                show_name: false,
                caption: "Signature",
            })],
        ),
    ],
};

// ── Modern ──────────────────────────────────────────────────────────────────

static MODERN: TemplateLayout = TemplateLayout {
    regions: &[
        (
            Slot::Sidebar,
            &[
                Part::Photo { placeholder: true },
                Part::Name,
                Part::Caption("Candidate"),
                Part::Lines(&[
                    LineSpec::Joined(&[("", CONTACT)], ""),
                    LineSpec::Joined(&[("", EMAIL)], ""),
                    LineSpec::Joined(&[("", ADDRESS)], ""),
                ]),
                Part::Section {
                    key: SectionKey::PersonalDetails,
                    heading: "Personal Info",
                    content: Content::Fields(&[
                        ("Father's Name", FATHER),
                        ("DOB", DOB),
                        ("Aadhar No", AADHAR),
                        ("Status", MARITAL),
                    ]),
                },
                Part::Section {
                    key: SectionKey::Languages,
                    heading: "Languages",
                    content: Content::Delimited(LANGUAGES, ItemStyle::Tag),
                },
            ],
        ),
        (
            Slot::Main,
            &[
                Part::Banner {
                    text: "BIO-DATA",
                    when_identity: false,
                },
                paragraph(SectionKey::Objective, "Objective", OBJECTIVE),
                Part::Section {
                    key: SectionKey::Education,
                    heading: "Education",
                    content: Content::EducationCards(CardSpec {
                        meta: None,
                        subtitle: &[EducationField::Board, EducationField::Year],
                        note: Some(("Result: ", EducationField::Division)),
                    }),
                },
                work("Experience"),
                Part::Section {
                    key: SectionKey::Skills,
                    heading: "Technical Expertise",
                    content: Content::Skills {
                        style: ItemStyle::Tag,
                        split_category: false,
                    },
                },
                paragraph(SectionKey::Declaration, "Declaration", DECLARATION),
            ],
        ),
        (
            Slot::Footer,
            &[Part::Signature(SignatureSpec {
                date_label: Some("DATED"),
                show_place: false,
                place_label: None,
                show_name: false,
                caption: "Signed",
            })],
        ),
    ],
};

// ── Professional ────────────────────────────────────────────────────────────

static PROFESSIONAL: TemplateLayout = TemplateLayout {
    regions: &[
        (
            Slot::Header,
            &[
                Part::Name,
                Part::Lines(&[
                    LineSpec::Joined(&[("", CONTACT)], ""),
                    LineSpec::Joined(&[("", EMAIL)], ""),
                ]),
                Part::Photo { placeholder: false },
            ],
        ),
        (
            Slot::Main,
            &[
                paragraph(SectionKey::Objective, "Professional Summary", OBJECTIVE),
                Part::Section {
                    key: SectionKey::Education,
                    heading: "Academic Timeline",
                    content: Content::EducationCards(CardSpec {
                        meta: Some(EducationField::Year),
                        subtitle: &[EducationField::Board],
                        note: Some(("Grade: ", EducationField::Division)),
                    }),
                },
                work("Professional Experience"),
                paragraph(
                    SectionKey::Declaration,
                    "Declaration Statement",
                    DECLARATION,
                ),
            ],
        ),
        (
            Slot::Aside,
            &[
                Part::Section {
                    key: SectionKey::Skills,
                    heading: "Core Skills",
                    content: Content::Skills {
                        style: ItemStyle::Bullet,
                        split_category: false,
                    },
                },
                Part::Section {
                    key: SectionKey::PersonalDetails,
                    heading: "Background Info",
                    content: Content::Fields(&[
                        ("Father", FATHER),
                        ("DOB", DOB),
                        ("Aadhar", AADHAR),
                        ("Languages", LANGUAGES),
                    ]),
                },
                paragraph(SectionKey::Hobbies, "Interests", HOBBIES),
            ],
        ),
        (
            Slot::Footer,
            &[Part::Signature(SignatureSpec {
                date_label: None,
                show_place: true,
                place_label: None,
                show_name: false,
                caption: "Authorised Signature",
            })],
        ),
    ],
};
