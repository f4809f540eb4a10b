//! Prompt templates for the comparison flow

use serde::Serialize;

use crate::core::question::Question;

/// Templates for generating prompts sent to both models
pub struct PromptTemplate;

impl PromptTemplate {
    /// Step-by-step solving prompt for a mathematics question.
    ///
    /// Every line after the first carries a four-space indent; the scores in
    /// the metrics catalog were collected with exactly these bytes.
    ///
    /// Total over strings: an empty question still yields the scaffolding.
    /// Rejecting empty input is the caller's job.
    pub fn math_solution(question: &str) -> String {
        format!(
            "Solve this mathematics question step by step.\n\
             \n    QUESTION:\n    {}\n\
             \n    REQUIREMENTS:\n\
             \x20   1. Analyze the question carefully\n\
             \x20   2. Show ALL mathematical steps clearly\n\
             \x20   3. Calculate values precisely\n\
             \x20   4. Evaluate each step systematically\n\
             \n    Your complete solution:",
            question
        )
    }
}

/// Instruction-augmented prompt derived from exactly one [`Question`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Prompt(String);

impl Prompt {
    /// Build the prompt for a question
    pub fn for_question(question: &Question) -> Self {
        Self(PromptTemplate::math_solution(question.content()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_solution_contains_question() {
        let question = "What is the derivative of x^3?";
        let prompt = PromptTemplate::math_solution(question);
        assert!(prompt.contains(question));
        assert!(prompt.contains("    QUESTION:\n    What is the derivative of x^3?\n"));
    }

    #[test]
    fn test_math_solution_exact_layout() {
        let expected = [
            "Solve this mathematics question step by step.",
            "",
            "    QUESTION:",
            "    What is 2+2?",
            "",
            "    REQUIREMENTS:",
            "    1. Analyze the question carefully",
            "    2. Show ALL mathematical steps clearly",
            "    3. Calculate values precisely",
            "    4. Evaluate each step systematically",
            "",
            "    Your complete solution:",
        ]
        .join("\n");
        assert_eq!(PromptTemplate::math_solution("What is 2+2?"), expected);
    }

    #[test]
    fn test_math_solution_is_deterministic() {
        for q in ["What is 2+2?", "Let G be a group of order 15. Is G cyclic?", "ε < δ"] {
            assert_eq!(PromptTemplate::math_solution(q), PromptTemplate::math_solution(q));
        }
    }

    #[test]
    fn test_math_solution_lists_four_requirements() {
        let prompt = PromptTemplate::math_solution("1+1");
        assert!(prompt.starts_with("Solve this mathematics question step by step."));
        assert!(prompt.contains("1. Analyze the question carefully"));
        assert!(prompt.contains("2. Show ALL mathematical steps clearly"));
        assert!(prompt.contains("3. Calculate values precisely"));
        assert!(prompt.contains("4. Evaluate each step systematically"));
        assert!(prompt.ends_with("Your complete solution:"));
    }

    #[test]
    fn test_empty_question_still_yields_scaffolding() {
        let prompt = PromptTemplate::math_solution("");
        assert!(prompt.contains("QUESTION:\n    \n\n    REQUIREMENTS:"));
        assert!(prompt.contains("REQUIREMENTS:"));
    }

    #[test]
    fn test_question_is_embedded_verbatim() {
        // No trimming or escaping of the user's text
        let q = "  Compute {x | x > 0} ∩ {x | x < 1}\n";
        assert!(PromptTemplate::math_solution(q).contains(q));
    }

    #[test]
    fn test_prompt_for_question_matches_template() {
        let question = Question::try_new("What is 2+2?").unwrap();
        let prompt = Prompt::for_question(&question);
        assert_eq!(prompt.as_str(), PromptTemplate::math_solution("What is 2+2?"));
        assert_eq!(prompt.to_string(), prompt.as_str());
    }
}
