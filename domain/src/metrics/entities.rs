//! Evaluation metric entities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::DomainError;

/// One scored evaluation dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Correctness,
    MathematicalReasoning,
    SolutionCompleteness,
    ExplanationQuality,
    Coherence,
    TimeEfficiency,
    /// Weighted aggregate of the other six
    FinalScore,
}

impl Metric {
    /// All metrics in table order
    pub const ALL: [Metric; 7] = [
        Metric::Correctness,
        Metric::MathematicalReasoning,
        Metric::SolutionCompleteness,
        Metric::ExplanationQuality,
        Metric::Coherence,
        Metric::TimeEfficiency,
        Metric::FinalScore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Correctness => "Correctness",
            Metric::MathematicalReasoning => "Mathematical Reasoning",
            Metric::SolutionCompleteness => "Solution Completeness",
            Metric::ExplanationQuality => "Explanation Quality",
            Metric::Coherence => "Coherence",
            Metric::TimeEfficiency => "Time Efficiency",
            Metric::FinalScore => "Final Score",
        }
    }

    pub fn is_final_score(&self) -> bool {
        matches!(self, Metric::FinalScore)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subject category a table of scores belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subject {
    AbstractAlgebra,
    CollegeMathematics,
    ElementaryMathematics,
    HighSchoolMathematics,
    /// Aggregate across all subjects
    Overall,
}

impl Subject {
    /// The four subject categories, excluding the overall aggregate
    pub const CATEGORIES: [Subject; 4] = [
        Subject::AbstractAlgebra,
        Subject::CollegeMathematics,
        Subject::ElementaryMathematics,
        Subject::HighSchoolMathematics,
    ];

    /// URL-safe identifier
    pub fn slug(&self) -> &'static str {
        match self {
            Subject::AbstractAlgebra => "abstract-algebra",
            Subject::CollegeMathematics => "college-mathematics",
            Subject::ElementaryMathematics => "elementary-mathematics",
            Subject::HighSchoolMathematics => "high-school-mathematics",
            Subject::Overall => "overall",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Subject::AbstractAlgebra => "Abstract Algebra",
            Subject::CollegeMathematics => "College Mathematics",
            Subject::ElementaryMathematics => "Elementary Mathematics",
            Subject::HighSchoolMathematics => "High School Mathematics",
            Subject::Overall => "Overall",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Subject {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::CATEGORIES
            .into_iter()
            .chain(std::iter::once(Subject::Overall))
            .find(|subject| subject.slug() == s)
            .ok_or_else(|| DomainError::UnknownSubject(s.to_string()))
    }
}

/// One row of a comparison table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub metric: Metric,
    pub cloud_score: f64,
    pub local_score: f64,
    /// Always `cloud_score - local_score`
    pub score_difference: f64,
}

impl MetricsRecord {
    /// Build a row; the difference is derived, never supplied.
    pub fn new(metric: Metric, cloud_score: f64, local_score: f64) -> Self {
        Self {
            metric,
            cloud_score,
            local_score,
            score_difference: cloud_score - local_score,
        }
    }

    /// Row rendered for display: three decimals, explicit `+` on gains
    pub fn formatted(&self) -> FormattedRecord {
        let difference = format!("{:.3}", self.score_difference);
        let difference = if self.score_difference > 0.0 && difference != "0.000" {
            format!("+{}", difference)
        } else {
            difference
        };

        FormattedRecord {
            metric: self.metric.as_str().to_string(),
            cloud: format!("{:.3}", self.cloud_score),
            local: format!("{:.3}", self.local_score),
            difference,
        }
    }
}

/// Display strings for a [`MetricsRecord`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedRecord {
    pub metric: String,
    pub cloud: String,
    pub local: String,
    pub difference: String,
}

/// All metric rows for one subject
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectTable {
    pub subject: Subject,
    pub records: Vec<MetricsRecord>,
}

impl SubjectTable {
    pub fn new(subject: Subject, records: Vec<MetricsRecord>) -> Self {
        Self { subject, records }
    }

    pub fn record(&self, metric: Metric) -> Option<&MetricsRecord> {
        self.records.iter().find(|r| r.metric == metric)
    }

    pub fn final_score(&self) -> Option<&MetricsRecord> {
        self.record(Metric::FinalScore)
    }

    /// Rows plotted on the radar chart (every metric but the aggregate)
    pub fn radar_records(&self) -> impl Iterator<Item = &MetricsRecord> {
        self.records.iter().filter(|r| !r.metric.is_final_score())
    }

    pub fn formatted_rows(&self) -> Vec<FormattedRecord> {
        self.records.iter().map(MetricsRecord::formatted).collect()
    }
}

/// Final scores of one subject, used by the cross-subject chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubjectSummary {
    pub subject: Subject,
    pub cloud: f64,
    pub local: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_is_derived() {
        let r = MetricsRecord::new(Metric::Correctness, 0.83, 0.0);
        assert!((r.score_difference - 0.83).abs() < 1e-12);
    }

    #[test]
    fn test_formatted_positive_difference_has_plus() {
        let r = MetricsRecord::new(Metric::Coherence, 0.675, 0.0).formatted();
        assert_eq!(r.metric, "Coherence");
        assert_eq!(r.cloud, "0.675");
        assert_eq!(r.local, "0.000");
        assert_eq!(r.difference, "+0.675");
    }

    #[test]
    fn test_formatted_non_positive_difference() {
        let even = MetricsRecord::new(Metric::Coherence, 0.5, 0.5).formatted();
        assert_eq!(even.difference, "0.000");

        let behind = MetricsRecord::new(Metric::TimeEfficiency, 0.3, 0.7).formatted();
        assert_eq!(behind.difference, "-0.400");
    }

    #[test]
    fn test_subject_slug_roundtrip() {
        for subject in Subject::CATEGORIES.into_iter().chain([Subject::Overall]) {
            assert_eq!(subject.slug().parse::<Subject>().unwrap(), subject);
        }
        assert!("topology".parse::<Subject>().is_err());
    }

    #[test]
    fn test_radar_records_skip_final_score() {
        let table = SubjectTable::new(
            Subject::Overall,
            Metric::ALL
                .into_iter()
                .map(|m| MetricsRecord::new(m, 0.5, 0.25))
                .collect(),
        );
        assert_eq!(table.radar_records().count(), 6);
        assert!(table.radar_records().all(|r| !r.metric.is_final_score()));
        assert_eq!(table.final_score().unwrap().metric, Metric::FinalScore);
    }
}
