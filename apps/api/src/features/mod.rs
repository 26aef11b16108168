// Résumé feature extraction: rule-based classification of résumé text into
// the fixed attribute record consumed by the salary model, plus the manual
// review step that fills in what the text could not answer.

pub mod classifier;
pub mod handlers;
pub mod models;
pub mod review;
