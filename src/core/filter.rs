//! # Filters
//!
//! Company and verdict filtering over the loaded experiences.
//!
//! Each filter is a [`Choice`]: either the wildcard `All` or one concrete
//! value from a fixed option list. The visible list is always recomputed
//! from scratch:
//!
//! ```text
//! visible = [ r in experiences
//!             | (company = All or r.company = company)
//!             and (verdict = All or r.verdict = verdict) ]
//! ```
//!
//! Source order is preserved. Nothing is cached.

use std::fmt;

use crate::core::experience::{InterviewExperience, Verdict};

/// Label shown for the wildcard option in both filter bars.
pub const ALL_LABEL: &str = "All";

/// Companies offered by the Company filter when the config doesn't list any.
pub const DEFAULT_COMPANIES: [&str; 5] = ["Google", "Microsoft", "Amazon", "Meta", "Netflix"];

/// One filter value: the wildcard, or exactly one option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: PartialEq> Choice<T> {
    /// Returns true if a record with this value passes the filter.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str(ALL_LABEL),
            Choice::Only(value) => value.fmt(f),
        }
    }
}

/// The pair of active filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub company: Choice<String>,
    pub verdict: Choice<Verdict>,
}

impl FilterSelection {
    pub fn new(company: Choice<String>, verdict: Choice<Verdict>) -> Self {
        Self { company, verdict }
    }

    pub fn matches(&self, experience: &InterviewExperience) -> bool {
        self.company.admits(&experience.company) && self.verdict.admits(&experience.verdict)
    }

    /// Applies both filters, preserving source order.
    pub fn apply<'a>(&self, experiences: &'a [InterviewExperience]) -> Vec<&'a InterviewExperience> {
        experiences.iter().filter(|exp| self.matches(exp)).collect()
    }
}

/// The fixed option lists presented by the two filter bars.
///
/// Both lists start with `Choice::All`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub companies: Vec<Choice<String>>,
    pub verdicts: Vec<Choice<Verdict>>,
}

impl FilterOptions {
    /// Builds the option lists from a company list. Blank and duplicate
    /// names are dropped; order is kept.
    pub fn new(companies: &[String]) -> Self {
        let mut company_choices = vec![Choice::All];
        for name in companies {
            let name = name.trim();
            if name.is_empty() || name == ALL_LABEL {
                continue;
            }
            let choice = Choice::Only(name.to_string());
            if !company_choices.contains(&choice) {
                company_choices.push(choice);
            }
        }

        let mut verdicts = vec![Choice::All];
        verdicts.extend(Verdict::known().into_iter().map(Choice::Only));

        Self {
            companies: company_choices,
            verdicts,
        }
    }

    pub fn has_company(&self, choice: &Choice<String>) -> bool {
        self.companies.contains(choice)
    }

    pub fn has_verdict(&self, choice: &Choice<Verdict>) -> bool {
        self.verdicts.contains(choice)
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        let companies: Vec<String> = DEFAULT_COMPANIES.iter().map(|c| c.to_string()).collect();
        Self::new(&companies)
    }
}
