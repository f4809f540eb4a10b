//! Precomputed evaluation scores for the hosted and local model.
//!
//! Scores were produced offline by grading both models' answers on MMLU-style
//! mathematics questions. They are read-only; nothing at runtime recomputes them.

use super::entities::{Metric, MetricsRecord, Subject, SubjectSummary, SubjectTable};

/// (cloud, local) score pairs in [`Metric::ALL`] order
type ScoreColumn = [(f64, f64); 7];

const ABSTRACT_ALGEBRA: ScoreColumn = [
    (0.83, 0.00),
    (0.40, 0.10),
    (0.425, 0.00),
    (0.65, 0.10),
    (0.675, 0.00),
    (0.90, 0.30),
    (0.71, 0.05),
];

const COLLEGE_MATHEMATICS: ScoreColumn = [
    (0.85, 0.35),
    (0.70, 0.05),
    (0.45, 0.05),
    (0.50, 0.10),
    (0.45, 0.05),
    (0.85, 0.70),
    (0.74, 0.18),
];

const ELEMENTARY_MATHEMATICS: ScoreColumn = [
    (0.80, 0.30),
    (0.55, 0.05),
    (0.35, 0.02),
    (0.40, 0.05),
    (0.30, 0.02),
    (0.90, 0.65),
    (0.59, 0.19),
];

const HIGH_SCHOOL_MATHEMATICS: ScoreColumn = [
    (0.85, 0.40),
    (0.75, 0.10),
    (0.40, 0.05),
    (0.45, 0.08),
    (0.35, 0.05),
    (0.85, 0.65),
    (0.76, 0.26),
];

const OVERALL: ScoreColumn = [
    (0.833, 0.317),
    (0.628, 0.047),
    (0.388, 0.029),
    (0.449, 0.055),
    (0.363, 0.032),
    (0.880, 0.658),
    (0.684, 0.183),
];

/// Read-only collection of every subject table
#[derive(Debug, Clone)]
pub struct MetricsCatalog {
    tables: Vec<SubjectTable>,
}

impl MetricsCatalog {
    /// The built-in evaluation results
    pub fn builtin() -> Self {
        let tables = Subject::CATEGORIES
            .into_iter()
            .chain(std::iter::once(Subject::Overall))
            .map(|subject| SubjectTable::new(subject, Self::records(Self::column(subject))))
            .collect();

        Self { tables }
    }

    fn column(subject: Subject) -> &'static ScoreColumn {
        match subject {
            Subject::AbstractAlgebra => &ABSTRACT_ALGEBRA,
            Subject::CollegeMathematics => &COLLEGE_MATHEMATICS,
            Subject::ElementaryMathematics => &ELEMENTARY_MATHEMATICS,
            Subject::HighSchoolMathematics => &HIGH_SCHOOL_MATHEMATICS,
            Subject::Overall => &OVERALL,
        }
    }

    fn records(column: &ScoreColumn) -> Vec<MetricsRecord> {
        Metric::ALL
            .into_iter()
            .zip(column.iter())
            .map(|(metric, &(cloud, local))| MetricsRecord::new(metric, cloud, local))
            .collect()
    }

    /// Every table, subjects first and the overall aggregate last
    pub fn tables(&self) -> &[SubjectTable] {
        &self.tables
    }

    pub fn table(&self, subject: Subject) -> Option<&SubjectTable> {
        self.tables.iter().find(|t| t.subject == subject)
    }

    /// Final score of each subject category (the overall table excluded)
    pub fn subject_summary(&self) -> Vec<SubjectSummary> {
        Subject::CATEGORIES
            .into_iter()
            .filter_map(|subject| {
                let final_score = self.table(subject)?.final_score()?;
                Some(SubjectSummary {
                    subject,
                    cloud: final_score.cloud_score,
                    local: final_score.local_score,
                })
            })
            .collect()
    }
}

impl Default for MetricsCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
