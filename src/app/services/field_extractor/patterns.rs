//! Pattern library for collection free-text fields
//!
//! Each rule targets one column and yields zero or more captured values.
//! A non-match is a normal outcome and never an error. The compiled
//! patterns are process-wide statics shared read-only by every row.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Digits in a truncated end year such as the "43" of "1939-43"
pub const SHORT_YEAR_DIGITS: usize = 2;

lazy_static! {
    /// Year or year range after the last space, e.g. "American, 1898–1976".
    /// The greedy lead means only the trailing token group is considered.
    static ref LIFE_DATES_RE: Regex =
        Regex::new(r".* (([0-9]{4})(–([0-9]{4}))?.*)?").expect("life-date pattern is valid");

    /// Leading nationality, optional second nationality and birth place,
    /// e.g. "French and Swiss, born Switzerland 1944".
    static ref NATIONALITY_RE: Regex =
        Regex::new(r"(\w+)(?: and (\w+))?(?:, born ([a-zA-Z]+))?")
            .expect("nationality pattern is valid");

    /// A year optionally followed by a possibly truncated end year: 1935, 1939-43, 1880-1910
    static ref WORK_DATE_RANGE_RE: Regex =
        Regex::new(r"([0-9]{4})(?:-([0-9]+))?").expect("work date pattern is valid");

    /// Metric figures such as "(60.8 x 45.6 cm)" or "(121 x 92.7 x 3.8 cm)"
    static ref METRIC_DIMENSIONS_RE: Regex =
        Regex::new(r"([0-9]+\.?[0-9]*) x ([0-9]+\.?[0-9]*)(?: x ([0-9]+\.?[0-9]*))? cm")
            .expect("metric dimensions pattern is valid");

    /// At least four non-space characters so that fragments like "cm)" are skipped
    static ref DIMENSIONS_NOTE_RE: Regex =
        Regex::new(r"(?:[a-zA-Z.,\-()&@+:;]{4,}\s*)+").expect("dimensions note pattern is valid");
}

/// Identifies one rule of the pattern library
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rule {
    LifeDates,
    Nationality,
    WorkDateRange,
    MetricDimensions,
    DimensionsNote,
}

impl Rule {
    /// Every rule in application order
    pub const ALL: [Rule; 5] = [
        Rule::LifeDates,
        Rule::Nationality,
        Rule::WorkDateRange,
        Rule::MetricDimensions,
        Rule::DimensionsNote,
    ];

    /// Short name used in logs and reports
    pub fn name(&self) -> &'static str {
        match self {
            Rule::LifeDates => "life-dates",
            Rule::Nationality => "nationality",
            Rule::WorkDateRange => "work-date-range",
            Rule::MetricDimensions => "metric-dimensions",
            Rule::DimensionsNote => "dimensions-note",
        }
    }

    /// Collection column the rule reads
    pub fn source_column(&self) -> &'static str {
        match self {
            Rule::LifeDates | Rule::Nationality => "ArtistBio",
            Rule::WorkDateRange => "Date",
            Rule::MetricDimensions | Rule::DimensionsNote => "Dimensions",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Birth and death years captured from a biography
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifeDates {
    pub birth_year: Option<String>,
    pub death_year: Option<String>,
}

/// Nationalities and birth place captured from a biography
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nationality {
    pub citizenship_country1: Option<String>,
    pub citizenship_country2: Option<String>,
    pub birth_country: Option<String>,
}

/// Raw captures of the work date rule, before end-year expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkDateRange {
    pub first_year: String,
    pub end_year: Option<String>,
}

/// Metric figures in the order they appear
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDimensions {
    pub first: Option<f64>,
    pub second: Option<f64>,
    pub third: Option<f64>,
}

fn capture(caps: &regex::Captures<'_>, group: usize) -> Option<String> {
    caps.get(group).map(|m| m.as_str().to_string())
}

/// Figures too large for a finite f64 are treated as unmatched
fn capture_number(caps: &regex::Captures<'_>, group: usize) -> Option<f64> {
    caps.get(group)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|number| number.is_finite())
}

/// Apply the life-date rule to an artist biography
pub fn match_life_dates(artist_bio: &str) -> LifeDates {
    match LIFE_DATES_RE.captures(artist_bio) {
        Some(caps) => LifeDates {
            birth_year: capture(&caps, 2),
            death_year: capture(&caps, 4),
        },
        None => LifeDates::default(),
    }
}

/// Apply the nationality rule to an artist biography
pub fn match_nationality(artist_bio: &str) -> Nationality {
    match NATIONALITY_RE.captures(artist_bio) {
        Some(caps) => Nationality {
            citizenship_country1: capture(&caps, 1),
            citizenship_country2: capture(&caps, 2),
            birth_country: capture(&caps, 3),
        },
        None => Nationality::default(),
    }
}

/// Apply the work-date-range rule to a date field
pub fn match_work_date_range(date: &str) -> Option<WorkDateRange> {
    WORK_DATE_RANGE_RE.captures(date).map(|caps| WorkDateRange {
        first_year: caps[1].to_string(),
        end_year: capture(&caps, 2),
    })
}

/// Apply the metric-dimensions rule to a normalized dimensions field
pub fn match_metric_dimensions(dimensions: &str) -> Option<MetricDimensions> {
    METRIC_DIMENSIONS_RE
        .captures(dimensions)
        .map(|caps| MetricDimensions {
            first: capture_number(&caps, 1),
            second: capture_number(&caps, 2),
            third: capture_number(&caps, 3),
        })
}

/// Apply the dimensions-note rule to a normalized dimensions field
pub fn match_dimensions_note(dimensions: &str) -> Option<String> {
    DIMENSIONS_NOTE_RE
        .find(dimensions)
        .map(|m| m.as_str().trim().to_string())
        .filter(|note| !note.is_empty())
}
