//! Rule-based résumé classifier.
//!
//! Each attribute is decided by its own ordered rule table, evaluated against
//! the whole lower-cased text. Within a table the first matching rule wins;
//! tables never consult each other. Keywords are plain substrings with no
//! word-boundary guard, so "engineering" counts as "engineer".
//!
//! The per-attribute functions expect text that is already lower-cased;
//! `classify` does that once for all of them.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::features::models::{
    CandidateFeatures, EducationLevel, Gender, GeneralTitle, SeniorityLevel,
};

/// Title keywords in priority order.
const TITLE_KEYWORDS: &[(&str, GeneralTitle)] = &[
    ("engineer", GeneralTitle::Engineer),
    ("developer", GeneralTitle::Engineer),
    ("analyst", GeneralTitle::Analyst),
    ("scientist", GeneralTitle::Scientist),
    ("manager", GeneralTitle::Manager),
    ("director", GeneralTitle::Director),
    ("consultant", GeneralTitle::Advisor),
    ("designer", GeneralTitle::Designer),
];

/// "senior director" must resolve to Senior, so Senior sits above Executive.
const SENIORITY_RULES: &[(&[&str], SeniorityLevel)] = &[
    (&["intern", "entry level", "junior"], SeniorityLevel::Junior),
    (&["senior"], SeniorityLevel::Senior),
    (&["lead", "principal", "head"], SeniorityLevel::Lead),
    (
        &["director", "vp", "chief", "ceo", "cto"],
        SeniorityLevel::Executive,
    ),
];

const EDUCATION_RULES: &[(&[&str], EducationLevel)] = &[
    (&["master", "m.sc", "m.tech"], EducationLevel::Master),
    (&["high school"], EducationLevel::HighSchool),
    (&["bachelor", "b.sc", "b.tech"], EducationLevel::Bachelor),
    (&["phd", "ph.d"], EducationLevel::PhD),
];

// "female" contains "male", so Female is checked first.
const GENDER_RULES: &[(&[&str], Gender)] = &[
    (&["she/her", "ms.", "female"], Gender::Female),
    (&["he/him", "mr.", "male"], Gender::Male),
];

// `\d` is Unicode-aware: full-width and other script digits count too.
static EXPERIENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\+?\s*(?:years|yrs|year)").unwrap());

static DECIMAL_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d$").unwrap());

/// Maps résumé text to a complete feature record. Never fails.
///
/// Age and location are never inferred; they always come back `None`.
pub fn classify(text: &str) -> CandidateFeatures {
    let text = text.to_lowercase();

    CandidateFeatures {
        age: None,
        gender: infer_gender(&text),
        education_level: classify_education(&text),
        general_title: classify_title(&text),
        seniority_level: classify_seniority(&text),
        years_of_experience: extract_years_of_experience(&text),
        location: None,
    }
}

fn first_rule<T: Copy>(text: &str, rules: &[(&[&str], T)]) -> Option<T> {
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|(_, label)| *label)
}

pub fn classify_title(text: &str) -> GeneralTitle {
    TITLE_KEYWORDS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, title)| *title)
        .unwrap_or_default()
}

pub fn classify_seniority(text: &str) -> SeniorityLevel {
    first_rule(text, SENIORITY_RULES).unwrap_or_default()
}

pub fn classify_education(text: &str) -> Option<EducationLevel> {
    first_rule(text, EDUCATION_RULES)
}

/// A heuristic suggestion only; the candidate can always override it.
pub fn infer_gender(text: &str) -> Option<Gender> {
    first_rule(text, GENDER_RULES)
}

/// Value of the first "<n> years" style mention in document order, or 0.
///
/// Later mentions are ignored even when larger. A count too large for `u32`
/// saturates.
pub fn extract_years_of_experience(text: &str) -> u32 {
    EXPERIENCE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|digits| parse_decimal(digits.as_str()))
        .unwrap_or(0)
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}

/// Unicode keeps every decimal digit set in contiguous, ascending runs of ten,
/// so a digit's value is its distance from the start of its run, mod 10.
fn decimal_digit_value(c: char) -> u32 {
    if let Some(value) = c.to_digit(10) {
        return value;
    }
    let mut run_start = c as u32;
    while let Some(prev) = run_start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        run_start -= 1;
    }
    (c as u32 - run_start) % 10
}

/// Saturates at `u32::MAX`.
fn parse_decimal(digits: &str) -> u32 {
    digits
        .chars()
        .try_fold(0u32, |acc, c| {
            acc.checked_mul(10)?.checked_add(decimal_digit_value(c))
        })
        .unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::models::Location;

    const SAMPLE_RESUME: &str = r#"
        JANE DOE — she/her
        Senior Data Scientist | 8+ years building ML platforms
        Experience: Acme Corp (2017–present), 3 yrs at Beta Labs
        Education: M.Sc. Computer Science, B.Tech Electronics
    "#;

    #[test]
    fn test_empty_text_yields_defaults() {
        let features = classify("");
        assert_eq!(features.general_title, GeneralTitle::Other);
        assert_eq!(features.seniority_level, SeniorityLevel::Mid);
        assert_eq!(features.education_level, None);
        assert_eq!(features.years_of_experience, 0);
        assert_eq!(features.gender, None);
        assert_eq!(features.age, None);
        assert_eq!(features.location, None);
    }

    #[test]
    fn test_senior_director_ordering() {
        let features = classify("senior director with 10 years experience, female, m.tech");
        assert_eq!(features.general_title, GeneralTitle::Director);
        assert_eq!(features.seniority_level, SeniorityLevel::Senior);
        assert_eq!(features.education_level, Some(EducationLevel::Master));
        assert_eq!(features.years_of_experience, 10);
        assert_eq!(features.gender, Some(Gender::Female));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("SENIOR ENGINEER"), classify("senior engineer"));
        assert_eq!(classify("SENIOR ENGINEER").general_title, GeneralTitle::Engineer);
    }

    #[test]
    fn test_classify_is_idempotent() {
        assert_eq!(classify(SAMPLE_RESUME), classify(SAMPLE_RESUME));
    }

    #[test]
    fn test_sample_resume() {
        let features = classify(SAMPLE_RESUME);
        assert_eq!(features.general_title, GeneralTitle::Scientist);
        assert_eq!(features.seniority_level, SeniorityLevel::Senior);
        assert_eq!(features.education_level, Some(EducationLevel::Master));
        assert_eq!(features.years_of_experience, 8);
        assert_eq!(features.gender, Some(Gender::Female));
    }

    #[test]
    fn test_unrelated_text_is_other() {
        assert_eq!(classify("random unrelated text").general_title, GeneralTitle::Other);
    }

    #[test]
    fn test_age_and_location_never_inferred() {
        let features = classify("Age: 34, lives in an urban area, location: Rural");
        assert_eq!(features.age, None);
        assert_eq!(features.location, None::<Location>);
    }

    #[test]
    fn test_title_declaration_order_wins_over_text_order() {
        // "designer" appears first in the text, but "engineer" is checked first.
        assert_eq!(classify_title("designer turned engineer"), GeneralTitle::Engineer);
        assert_eq!(classify_title("analyst and manager"), GeneralTitle::Analyst);
    }

    #[test]
    fn test_title_keyword_table() {
        assert_eq!(classify_title("web developer"), GeneralTitle::Engineer);
        assert_eq!(classify_title("research scientist"), GeneralTitle::Scientist);
        assert_eq!(classify_title("product manager"), GeneralTitle::Manager);
        assert_eq!(classify_title("art director"), GeneralTitle::Director);
        assert_eq!(classify_title("strategy consultant"), GeneralTitle::Advisor);
        assert_eq!(classify_title("ux designer"), GeneralTitle::Designer);
    }

    #[test]
    fn test_title_matches_inside_longer_words() {
        assert_eq!(classify_title("b.tech in mechanical engineering"), GeneralTitle::Engineer);
    }

    #[test]
    fn test_seniority_branches() {
        assert_eq!(classify_seniority("summer intern"), SeniorityLevel::Junior);
        assert_eq!(classify_seniority("entry level analyst"), SeniorityLevel::Junior);
        assert_eq!(classify_seniority("senior analyst"), SeniorityLevel::Senior);
        assert_eq!(classify_seniority("principal engineer"), SeniorityLevel::Lead);
        assert_eq!(classify_seniority("head of data"), SeniorityLevel::Lead);
        assert_eq!(classify_seniority("vp of sales"), SeniorityLevel::Executive);
        assert_eq!(classify_seniority("cto"), SeniorityLevel::Executive);
        assert_eq!(classify_seniority("software engineer"), SeniorityLevel::Mid);
    }

    #[test]
    fn test_junior_precedes_senior() {
        assert_eq!(
            classify_seniority("junior developer mentored by a senior"),
            SeniorityLevel::Junior
        );
    }

    #[test]
    fn test_lead_precedes_executive() {
        assert_eq!(classify_seniority("team lead reporting to the ceo"), SeniorityLevel::Lead);
    }

    #[test]
    fn test_internal_substring_triggers_junior() {
        // "international" contains "intern"
        assert_eq!(classify_seniority("international sales"), SeniorityLevel::Junior);
    }

    #[test]
    fn test_education_order() {
        assert_eq!(classify_education("master of arts"), Some(EducationLevel::Master));
        assert_eq!(classify_education("high school diploma"), Some(EducationLevel::HighSchool));
        assert_eq!(classify_education("b.sc physics"), Some(EducationLevel::Bachelor));
        assert_eq!(classify_education("ph.d candidate"), Some(EducationLevel::PhD));
        assert_eq!(classify_education("self taught"), None);
    }

    #[test]
    fn test_education_master_beats_phd() {
        assert_eq!(
            classify_education("phd in physics, master in maths"),
            Some(EducationLevel::Master)
        );
    }

    #[test]
    fn test_education_high_school_beats_bachelor() {
        assert_eq!(
            classify_education("bachelor of science, high school honors"),
            Some(EducationLevel::HighSchool)
        );
    }

    #[test]
    fn test_experience_first_match_wins() {
        assert_eq!(extract_years_of_experience("5 years exp, later mentions 10 years"), 5);
    }

    #[test]
    fn test_experience_variants() {
        assert_eq!(extract_years_of_experience("12+ years"), 12);
        assert_eq!(extract_years_of_experience("3yrs"), 3);
        assert_eq!(extract_years_of_experience("1 year"), 1);
        assert_eq!(extract_years_of_experience("7+   yrs of rust"), 7);
        assert_eq!(extract_years_of_experience("no numbers here"), 0);
        assert_eq!(extract_years_of_experience("graduated 2015"), 0);
    }

    #[test]
    fn test_experience_requires_lowercase_unit() {
        // classify lower-cases first; the raw helper does not.
        assert_eq!(extract_years_of_experience("4 YEARS"), 0);
        assert_eq!(classify("4 YEARS").years_of_experience, 4);
    }

    #[test]
    fn test_experience_saturates_on_overflow() {
        assert_eq!(extract_years_of_experience("99999999999999 years"), u32::MAX);
    }

    #[test]
    fn test_experience_accepts_non_ascii_digits() {
        // full-width
        assert_eq!(classify("\u{FF15} years experience").years_of_experience, 5);
        assert_eq!(extract_years_of_experience("\u{FF11}\u{FF12}+ yrs"), 12);
        // Arabic-Indic
        assert_eq!(extract_years_of_experience("\u{0665} years"), 5);
        assert_eq!(extract_years_of_experience("\u{0661}\u{0660} years"), 10);
        // Devanagari
        assert_eq!(extract_years_of_experience("\u{096D} year"), 7);
        // mathematical double-struck, which sits directly after the bold run
        assert_eq!(extract_years_of_experience("\u{1D7DD} years"), 5);
    }

    #[test]
    fn test_decimal_digit_value() {
        assert_eq!(decimal_digit_value('0'), 0);
        assert_eq!(decimal_digit_value('9'), 9);
        assert_eq!(decimal_digit_value('\u{FF10}'), 0);
        assert_eq!(decimal_digit_value('\u{FF19}'), 9);
        assert_eq!(decimal_digit_value('\u{0669}'), 9);
        assert_eq!(decimal_digit_value('\u{1D7CE}'), 0);
        assert_eq!(decimal_digit_value('\u{1D7FF}'), 9);
    }

    #[test]
    fn test_gender_markers() {
        assert_eq!(infer_gender("pronouns: he/him"), Some(Gender::Male));
        assert_eq!(infer_gender("mr. smith"), Some(Gender::Male));
        assert_eq!(infer_gender("ms. smith"), Some(Gender::Female));
        assert_eq!(infer_gender("gender: female"), Some(Gender::Female));
        assert_eq!(infer_gender("no marker"), None);
    }

    #[test]
    fn test_female_checked_before_male() {
        assert_eq!(infer_gender("female"), Some(Gender::Female));
        assert_eq!(infer_gender("male"), Some(Gender::Male));
    }

    #[test]
    fn test_classify_total_on_odd_input() {
        for text in ["\u{0}\u{1}", "🚀🚀🚀", "    ", "İSTANBUL ENGİNEER", "+years"] {
            let features = classify(text);
            assert!(GeneralTitle::ALL.contains(&features.general_title));
            assert!(SeniorityLevel::ALL.contains(&features.seniority_level));
        }
    }
}
