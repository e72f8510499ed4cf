//! Closed sets of editable field names, one enum per record type.

use serde::{Deserialize, Serialize};

use crate::models::{EducationEntry, PersonalDetails, ResumeDocument, WorkEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarField {
    Name,
    Contact,
    Address,
    Date,
    Declaration,
}

impl ScalarField {
    pub fn value<'a>(&self, doc: &'a ResumeDocument) -> &'a str {
        match self {
            ScalarField::Name => &doc.identity.name,
            ScalarField::Contact => &doc.identity.contact,
            ScalarField::Address => &doc.identity.address,
            ScalarField::Date => &doc.identity.date,
            ScalarField::Declaration => &doc.declaration,
        }
    }

    pub(crate) fn slot<'a>(&self, doc: &'a mut ResumeDocument) -> &'a mut String {
        match self {
            ScalarField::Name => &mut doc.identity.name,
            ScalarField::Contact => &mut doc.identity.contact,
            ScalarField::Address => &mut doc.identity.address,
            ScalarField::Date => &mut doc.identity.date,
            ScalarField::Declaration => &mut doc.declaration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    FatherName,
    MotherName,
    Dob,
    MaritalStatus,
    Nationality,
    Languages,
    JobLocation,
    Aadhar,
    Email,
    Hobbies,
    CareerObjective,
}

impl PersonalField {
    pub fn value<'a>(&self, details: &'a PersonalDetails) -> &'a str {
        match self {
            PersonalField::FatherName => &details.father_name,
            PersonalField::MotherName => &details.mother_name,
            PersonalField::Dob => &details.dob,
            PersonalField::MaritalStatus => &details.marital_status,
            PersonalField::Nationality => &details.nationality,
            PersonalField::Languages => &details.languages,
            PersonalField::JobLocation => &details.job_location,
            PersonalField::Aadhar => &details.aadhar,
            PersonalField::Email => &details.email,
            PersonalField::Hobbies => &details.hobbies,
            PersonalField::CareerObjective => &details.career_objective,
        }
    }

    pub(crate) fn slot<'a>(&self, details: &'a mut PersonalDetails) -> &'a mut String {
        match self {
            PersonalField::FatherName => &mut details.father_name,
            PersonalField::MotherName => &mut details.mother_name,
            PersonalField::Dob => &mut details.dob,
            PersonalField::MaritalStatus => &mut details.marital_status,
            PersonalField::Nationality => &mut details.nationality,
            PersonalField::Languages => &mut details.languages,
            PersonalField::JobLocation => &mut details.job_location,
            PersonalField::Aadhar => &mut details.aadhar,
            PersonalField::Email => &mut details.email,
            PersonalField::Hobbies => &mut details.hobbies,
            PersonalField::CareerObjective => &mut details.career_objective,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Qualification,
    Board,
    Year,
    Division,
}

impl EducationField {
    pub fn value<'a>(&self, entry: &'a EducationEntry) -> &'a str {
        match self {
            EducationField::Qualification => &entry.qualification,
            EducationField::Board => &entry.board,
            EducationField::Year => &entry.year,
            EducationField::Division => &entry.division,
        }
    }

    pub(crate) fn slot<'a>(&self, entry: &'a mut EducationEntry) -> &'a mut String {
        match self {
            EducationField::Qualification => &mut entry.qualification,
            EducationField::Board => &mut entry.board,
            EducationField::Year => &mut entry.year,
            EducationField::Division => &mut entry.division,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkField {
    JobTitle,
    Company,
    Duration,
    Responsibilities,
}

impl WorkField {
    pub fn value<'a>(&self, entry: &'a WorkEntry) -> &'a str {
        match self {
            WorkField::JobTitle => &entry.job_title,
            WorkField::Company => &entry.company,
            WorkField::Duration => &entry.duration,
            WorkField::Responsibilities => &entry.responsibilities,
        }
    }

    pub(crate) fn slot<'a>(&self, entry: &'a mut WorkEntry) -> &'a mut String {
        match self {
            WorkField::JobTitle => &mut entry.job_title,
            WorkField::Company => &mut entry.company,
            WorkField::Duration => &mut entry.duration,
            WorkField::Responsibilities => &mut entry.responsibilities,
        }
    }
}
