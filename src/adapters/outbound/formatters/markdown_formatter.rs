use crate::application::read_models::{BuildReadModel, SlotView};
use crate::build_configuration::domain::{ComponentRecord, Slot};
use crate::ports::outbound::BuildReportFormatter;
use crate::shared::Result;
use std::sync::Arc;

/// Markdown table header for the build selection
const BUILD_TABLE_HEADER: &str = "| Slot | Component | Brand | Price | Stock |\n";

/// Markdown table separator line for the build selection
const BUILD_TABLE_SEPARATOR: &str = "|------|-----------|-------|-------|-------|\n";

/// Markdown table header for candidate listings
const CANDIDATE_TABLE_HEADER: &str = "| ID | Name | Brand | Price | Stock |\n";

/// Markdown table separator line for candidate listings
const CANDIDATE_TABLE_SEPARATOR: &str = "|----|------|-------|-------|-------|\n";

/// MarkdownReportFormatter adapter for human readable build reports
pub struct MarkdownReportFormatter;

impl MarkdownReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn stock_cell(stock: u32) -> String {
        if stock == 0 {
            "out of stock".to_string()
        } else {
            stock.to_string()
        }
    }
}

impl Default for MarkdownReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownReportFormatter {
    fn render_selection(&self, output: &mut String, slots: &[SlotView]) {
        output.push_str("## Components\n\n");
        output.push_str(BUILD_TABLE_HEADER);
        output.push_str(BUILD_TABLE_SEPARATOR);

        for view in slots {
            match &view.component {
                Some(component) => output.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    view.label,
                    Self::escape_markdown_table_cell(&component.name),
                    Self::escape_markdown_table_cell(component.brand.as_deref().unwrap_or("")),
                    component.price,
                    Self::stock_cell(component.stock)
                )),
                None => output.push_str(&format!("| {} | _(empty)_ |  |  |  |\n", view.label)),
            }
        }
        output.push('\n');
    }

    fn render_compatibility(&self, output: &mut String, model: &BuildReadModel) {
        output.push_str("## Compatibility\n\n");

        if !model.has_issues() {
            output.push_str("✅ No compatibility issues found.\n\n");
            return;
        }

        for message in model.issue_messages() {
            output.push_str(&format!("- ⚠️ {}\n", message));
        }
        output.push('\n');
    }

    fn render_summary(&self, output: &mut String, model: &BuildReadModel) {
        output.push_str("## Summary\n\n");
        output.push_str(&format!("- **Total:** {}\n", model.total_price));
        output.push_str(&format!(
            "- **Completion:** {}% ({}/{} slots)\n",
            model.completion_percent,
            model.selected_count(),
            model.slots.len()
        ));
        output.push_str(&format!("- **State:** {}\n", model.state));
        if !model.can_commit {
            output.push_str(&format!("\n_Cannot add to cart: {}._\n", model.state.describe()));
        }
    }
}

impl BuildReportFormatter for MarkdownReportFormatter {
    fn format_build(&self, model: &BuildReadModel) -> Result<String> {
        let mut output = String::new();
        output.push_str("# PC Build\n\n");

        self.render_selection(&mut output, &model.slots);
        self.render_compatibility(&mut output, model);
        self.render_summary(&mut output, model);

        Ok(output)
    }

    fn format_candidates(&self, slot: Slot, candidates: &[Arc<ComponentRecord>]) -> Result<String> {
        let mut output = format!("# Candidates: {}\n\n", slot.display_name());

        if candidates.is_empty() {
            output.push_str("_No candidates match the current filters._\n");
            return Ok(output);
        }

        output.push_str(CANDIDATE_TABLE_HEADER);
        output.push_str(CANDIDATE_TABLE_SEPARATOR);
        for record in candidates {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(record.id()),
                Self::escape_markdown_table_cell(record.name()),
                Self::escape_markdown_table_cell(record.brand().unwrap_or("")),
                record.price(),
                Self::stock_cell(record.stock())
            ));
        }
        output.push_str(&format!("\n{} candidate(s)\n", candidates.len()));

        Ok(output)
    }
}
