use serde::Serialize;

use crate::report::{ProbeResult, ReportSink, RunReport, Summary};

// Re-export OutputFormat for convenience
pub use crate::types::OutputFormat;

/// Serializable view of a finished run for the structured formats.
#[derive(Serialize)]
struct ReportDoc<'a> {
    results: &'a [ProbeResult],
    summary: Summary,
}

/// Output formatting interface
pub trait Formatter {
    fn format(&self, report: &RunReport) -> anyhow::Result<String>;
}

pub struct TextFormatter;
pub struct JsonFormatter;
pub struct YamlFormatter;

impl Formatter for TextFormatter {
    fn format(&self, report: &RunReport) -> anyhow::Result<String> {
        Ok(report.render())
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> anyhow::Result<String> {
        let doc = ReportDoc {
            results: report.results(),
            summary: report.summary(),
        };
        Ok(format!("{}\n", serde_json::to_string_pretty(&doc)?))
    }
}

impl Formatter for YamlFormatter {
    fn format(&self, report: &RunReport) -> anyhow::Result<String> {
        let doc = ReportDoc {
            results: report.results(),
            summary: report.summary(),
        };
        Ok(serde_yaml::to_string(&doc)?)
    }
}

/// Get formatter for the specified output format
pub fn get_formatter(format: &OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}

/// Format the report and hand it to the sink.
pub fn write_output(
    report: &RunReport,
    format: &OutputFormat,
    sink: &mut dyn ReportSink,
) -> anyhow::Result<()> {
    let formatter = get_formatter(format);
    sink.emit(&formatter.format(report)?);
    Ok(())
}
