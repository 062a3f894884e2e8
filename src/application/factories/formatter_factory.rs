use crate::adapters::outbound::formatters::{JsonReportFormatter, MarkdownReportFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::BuildReportFormatter;

/// Factory for creating report formatters
///
/// Picks the formatter adapter for an output format so callers only deal
/// with the `BuildReportFormatter` port.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use pc_builder::application::dto::OutputFormat;
    /// use pc_builder::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn BuildReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonReportFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownReportFormatter::new()),
        }
    }

    /// Returns the progress message shown before rendering
    ///
    /// # Examples
    /// ```
    /// use pc_builder::application::dto::OutputFormat;
    /// use pc_builder::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Markdown);
    /// assert_eq!(message, "📝 Rendering Markdown report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering JSON report...",
            OutputFormat::Markdown => "📝 Rendering Markdown report...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::BuildReadModelBuilder;
    use crate::build_configuration::domain::BuildConfiguration;

    #[test]
    fn test_create_json_formatter_renders_json() {
        let formatter = FormatterFactory::create(OutputFormat::Json);
        let model = BuildReadModelBuilder::build(&BuildConfiguration::new(), vec![]);
        let output = formatter.format_build(&model).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&output).is_ok());
    }

    #[test]
    fn test_create_markdown_formatter_renders_markdown() {
        let formatter = FormatterFactory::create(OutputFormat::Markdown);
        let model = BuildReadModelBuilder::build(&BuildConfiguration::new(), vec![]);
        let output = formatter.format_build(&model).unwrap();
        assert!(output.starts_with("# PC Build"));
    }

    #[test]
    fn test_progress_message_json() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Json),
            "📝 Rendering JSON report..."
        );
    }
}
