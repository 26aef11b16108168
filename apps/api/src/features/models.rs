//! Candidate feature record and its label domains.
//!
//! Every label string emitted here is a key in the downstream encoding tables,
//! so `as_str` / serde names must stay byte-for-byte identical to them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A label string that is not a member of the field's domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {field}")]
pub struct UnknownLabel {
    pub field: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "High School")]
    HighSchool,
    Bachelor,
    Master,
    PhD,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::HighSchool,
        EducationLevel::Bachelor,
        EducationLevel::Master,
        EducationLevel::PhD,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Bachelor => "Bachelor",
            EducationLevel::Master => "Master",
            EducationLevel::PhD => "PhD",
        }
    }
}

/// Coarse job family. Always populated; `Other` when no keyword matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneralTitle {
    Engineer,
    Analyst,
    Scientist,
    Manager,
    Director,
    Advisor,
    Designer,
    #[default]
    Other,
}

impl GeneralTitle {
    pub const ALL: [GeneralTitle; 8] = [
        GeneralTitle::Engineer,
        GeneralTitle::Analyst,
        GeneralTitle::Scientist,
        GeneralTitle::Manager,
        GeneralTitle::Director,
        GeneralTitle::Advisor,
        GeneralTitle::Designer,
        GeneralTitle::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeneralTitle::Engineer => "Engineer",
            GeneralTitle::Analyst => "Analyst",
            GeneralTitle::Scientist => "Scientist",
            GeneralTitle::Manager => "Manager",
            GeneralTitle::Director => "Director",
            GeneralTitle::Advisor => "Advisor",
            GeneralTitle::Designer => "Designer",
            GeneralTitle::Other => "Other",
        }
    }
}

/// Always populated; `Mid` when no seniority signal is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeniorityLevel {
    Junior,
    #[default]
    Mid,
    Senior,
    Lead,
    Executive,
}

impl SeniorityLevel {
    pub const ALL: [SeniorityLevel; 5] = [
        SeniorityLevel::Junior,
        SeniorityLevel::Mid,
        SeniorityLevel::Senior,
        SeniorityLevel::Lead,
        SeniorityLevel::Executive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeniorityLevel::Junior => "Junior",
            SeniorityLevel::Mid => "Mid",
            SeniorityLevel::Senior => "Senior",
            SeniorityLevel::Lead => "Lead",
            SeniorityLevel::Executive => "Executive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Rural,
    Suburban,
    Urban,
}

impl Location {
    pub const ALL: [Location; 3] = [Location::Rural, Location::Suburban, Location::Urban];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Rural => "Rural",
            Location::Suburban => "Suburban",
            Location::Urban => "Urban",
        }
    }
}

fn parse_label<T: Copy>(
    field: &'static str,
    all: &[T],
    as_str: fn(&T) -> &'static str,
    s: &str,
) -> Result<T, UnknownLabel> {
    let wanted = s.trim();
    all.iter()
        .find(|v| as_str(*v).eq_ignore_ascii_case(wanted))
        .copied()
        .ok_or_else(|| UnknownLabel {
            field,
            value: s.to_string(),
        })
}

impl FromStr for Gender {
    type Err = UnknownLabel;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(FeatureField::Gender.as_str(), &Self::ALL, Self::as_str, s)
    }
}

impl FromStr for EducationLevel {
    type Err = UnknownLabel;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(FeatureField::EducationLevel.as_str(), &Self::ALL, Self::as_str, s)
    }
}

impl FromStr for GeneralTitle {
    type Err = UnknownLabel;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(FeatureField::GeneralTitle.as_str(), &Self::ALL, Self::as_str, s)
    }
}

impl FromStr for SeniorityLevel {
    type Err = UnknownLabel;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(FeatureField::SeniorityLevel.as_str(), &Self::ALL, Self::as_str, s)
    }
}

impl FromStr for Location {
    type Err = UnknownLabel;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(FeatureField::Location.as_str(), &Self::ALL, Self::as_str, s)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for GeneralTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names of the seven record fields, as they appear in the serialized record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureField {
    Age,
    Gender,
    #[serde(rename = "Education Level")]
    EducationLevel,
    #[serde(rename = "General Title")]
    GeneralTitle,
    #[serde(rename = "Seniority Level")]
    SeniorityLevel,
    #[serde(rename = "Years of Experience")]
    YearsOfExperience,
    Location,
}

impl FeatureField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureField::Age => "Age",
            FeatureField::Gender => "Gender",
            FeatureField::EducationLevel => "Education Level",
            FeatureField::GeneralTitle => "General Title",
            FeatureField::SeniorityLevel => "Seniority Level",
            FeatureField::YearsOfExperience => "Years of Experience",
            FeatureField::Location => "Location",
        }
    }
}

/// Attributes extracted from one résumé.
///
/// `general_title` and `seniority_level` always carry a value. The `Option`
/// fields are `None` when the text gave no signal; the caller is expected to
/// ask the user for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFeatures {
    #[serde(rename = "Age")]
    pub age: Option<u32>,
    #[serde(rename = "Gender")]
    pub gender: Option<Gender>,
    #[serde(rename = "Education Level")]
    pub education_level: Option<EducationLevel>,
    #[serde(rename = "General Title")]
    pub general_title: GeneralTitle,
    #[serde(rename = "Seniority Level")]
    pub seniority_level: SeniorityLevel,
    #[serde(rename = "Years of Experience")]
    pub years_of_experience: u32,
    #[serde(rename = "Location")]
    pub location: Option<Location>,
}

impl CandidateFeatures {
    /// Optional fields still absent, in record order.
    pub fn missing_fields(&self) -> Vec<FeatureField> {
        let mut missing = Vec::new();
        if self.age.is_none() {
            missing.push(FeatureField::Age);
        }
        if self.gender.is_none() {
            missing.push(FeatureField::Gender);
        }
        if self.education_level.is_none() {
            missing.push(FeatureField::EducationLevel);
        }
        if self.location.is_none() {
            missing.push(FeatureField::Location);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
