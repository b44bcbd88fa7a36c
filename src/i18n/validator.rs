//! Language tag validation.
//!
//! Filters normalized candidates down to tags whose subtags exist in the
//! reference code sets. Rejections are collected for diagnostics and never
//! abort the run.

use crate::error::TagRejection;
use crate::i18n::registry::ReferenceData;
use crate::i18n::tag::is_pseudo_locale;
use serde::Serialize;
use tracing::debug;

/// Outcome of validating a batch of candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Candidates that passed, in input order
    pub accepted: Vec<String>,

    /// Why each dropped candidate was dropped, in input order
    pub rejected: Vec<TagRejection>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any candidate was dropped
    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }

    /// Summary suitable for structured logging.
    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary {
            candidates: self.accepted.len() + self.rejected.len(),
            accepted: self.accepted.clone(),
            rejected: self.rejected.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Serializable view of a [`ValidationReport`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationSummary {
    pub candidates: usize,
    pub accepted: Vec<String>,
    pub rejected: Vec<String>,
}

/// Validator for candidate language tags.
pub struct TagValidator<'a, R: ReferenceData + ?Sized> {
    data: &'a R,
}

impl<'a, R: ReferenceData + ?Sized> TagValidator<'a, R> {
    /// Create a validator over the given reference data.
    ///
    /// # Arguments
    /// * `data` - Code sets the subtags are checked against
    pub fn new(data: &'a R) -> Self {
        Self { data }
    }

    /// Check a single candidate.
    ///
    /// Only the first three subtags are inspected: `language`, then a script
    /// (if four characters long) or region, then a region. Anything after the
    /// third subtag is accepted as is.
    ///
    /// # Arguments
    /// * `candidate` - A normalized candidate tag (e.g. "fr-FR", "sw320dp")
    ///
    /// # Returns
    /// * `Ok(())` if every inspected subtag is known
    /// * `Err(TagRejection)` naming the first subtag that is not
    pub fn check(&self, candidate: &str) -> Result<(), TagRejection> {
        if candidate.trim().is_empty() {
            return Err(TagRejection::Blank);
        }

        // Pseudo-locales are not ISO languages but must survive.
        if is_pseudo_locale(candidate) {
            return Ok(());
        }

        let mut parts = candidate.split('-');

        if let Some(language) = parts.next() {
            if !self.data.is_known_language(language) {
                return Err(TagRejection::UnknownLanguage {
                    candidate: candidate.to_string(),
                    subtag: language.to_string(),
                });
            }
        }

        if let Some(second) = parts.next() {
            if second.len() == 4 {
                if !self.data.is_known_script(second) {
                    return Err(TagRejection::UnknownScript {
                        candidate: candidate.to_string(),
                        subtag: second.to_string(),
                    });
                }
            } else if !self.data.is_known_region(second) {
                return Err(TagRejection::UnknownRegion {
                    candidate: candidate.to_string(),
                    subtag: second.to_string(),
                });
            }
        }

        if let Some(third) = parts.next() {
            if !self.data.is_known_region(third) {
                return Err(TagRejection::UnknownRegion {
                    candidate: candidate.to_string(),
                    subtag: third.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Validate every candidate, keeping the valid ones in their original order.
    ///
    /// Pseudo-locales (`en-XA`, `ar-XB`) are always accepted.
    ///
    /// # Returns
    /// A [`ValidationReport`] holding the accepted tags and one rejection per
    /// dropped candidate.
    pub fn validate<I, S>(&self, candidates: I) -> ValidationReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = ValidationReport::new();

        for candidate in candidates {
            let candidate = candidate.as_ref();
            match self.check(candidate) {
                Ok(()) => report.accepted.push(candidate.to_string()),
                Err(rejection) => {
                    debug!("Dropping resource qualifier: {}", rejection);
                    report.rejected.push(rejection);
                }
            }
        }

        report
    }
}
