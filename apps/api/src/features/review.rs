//! Manual correction of a parsed record before it is handed to the model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::models::{
    CandidateFeatures, EducationLevel, FeatureField, Gender, GeneralTitle, Location,
    SeniorityLevel,
};

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 70;
pub const MAX_YEARS_OF_EXPERIENCE: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        value: u32,
    },
}

/// User-supplied values. A present field replaces the parsed one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureOverrides {
    #[serde(rename = "Age")]
    pub age: Option<u32>,
    #[serde(rename = "Gender")]
    pub gender: Option<Gender>,
    #[serde(rename = "Education Level")]
    pub education_level: Option<EducationLevel>,
    #[serde(rename = "General Title")]
    pub general_title: Option<GeneralTitle>,
    #[serde(rename = "Seniority Level")]
    pub seniority_level: Option<SeniorityLevel>,
    #[serde(rename = "Years of Experience")]
    pub years_of_experience: Option<u32>,
    #[serde(rename = "Location")]
    pub location: Option<Location>,
}

fn check_range(field: FeatureField, value: u32, min: u32, max: u32) -> Result<u32, ReviewError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ReviewError::OutOfRange {
            field: field.as_str(),
            min,
            max,
            value,
        })
    }
}

/// Applies `overrides` on top of `features`.
///
/// Age is always user-supplied (the classifier never sets it), so the final
/// value is bounds-checked whichever side it came from. Parsed experience is
/// taken as-is, so a résumé claiming "60 years" is left alone unless the user
/// corrects it; an experience override is bounds-checked.
pub fn review(
    features: CandidateFeatures,
    overrides: &FeatureOverrides,
) -> Result<CandidateFeatures, ReviewError> {
    let mut reviewed = features;

    if let Some(age) = overrides.age {
        reviewed.age = Some(age);
    }
    if let Some(age) = reviewed.age {
        check_range(FeatureField::Age, age, MIN_AGE, MAX_AGE)?;
    }
    if let Some(years) = overrides.years_of_experience {
        reviewed.years_of_experience = check_range(
            FeatureField::YearsOfExperience,
            years,
            0,
            MAX_YEARS_OF_EXPERIENCE,
        )?;
    }
    if let Some(gender) = overrides.gender {
        reviewed.gender = Some(gender);
    }
    if let Some(level) = overrides.education_level {
        reviewed.education_level = Some(level);
    }
    if let Some(title) = overrides.general_title {
        reviewed.general_title = title;
    }
    if let Some(level) = overrides.seniority_level {
        reviewed.seniority_level = level;
    }
    if let Some(location) = overrides.location {
        reviewed.location = Some(location);
    }

    Ok(reviewed)
}
