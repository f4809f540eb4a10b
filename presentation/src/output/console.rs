//! Console output formatter for comparison results

use colored::Colorize;
use duel_domain::{ComparisonResult, Model, ModelResponse, ModelSide};

/// Formats comparison results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format both responses, hosted model first
    pub fn format(result: &ComparisonResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Math Model Comparison"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Question:".cyan().bold(), result.question));
        output.push_str(&format!("{} {}\n", "Mode:".cyan().bold(), result.mode));

        for (side, response) in result.responses() {
            output.push_str(&Self::response_section(side, response));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(result: &ComparisonResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    fn response_section(side: ModelSide, response: &ModelResponse) -> String {
        let title = format!("{} Response", Self::display_name(response));
        let origin = match side {
            ModelSide::Cloud => "hosted",
            ModelSide::Local => "local",
        };
        let heading = format!("── {} ({}) ──", title, origin);
        let heading = if response.is_success() {
            heading.yellow().bold()
        } else {
            heading.red().bold()
        };

        let text = if response.is_success() {
            response.text.normal()
        } else {
            response.text.red()
        };

        format!(
            "\n{}\n{}\n{}\n",
            heading,
            text,
            format!("Response time: {} seconds", response.formatted_elapsed())
                .dimmed()
                .italic()
        )
    }

    fn display_name(response: &ModelResponse) -> String {
        let Ok(model) = response.model.parse::<Model>();
        model.display_name().to_string()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
