use crate::app::prompts::Prompts;
use crate::domain::model::{OutputFormat, PackingReport};
use crate::utils::error::{PackerError, Result};
use std::io::{self, Write};

/// Renders the final report; text output starts with the bin count line.
pub fn render_report(
    report: &PackingReport,
    format: OutputFormat,
    show_bins: bool,
    prompts: &Prompts,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let mut lines = vec![prompts.result(report.bin_count)];
            if show_bins {
                lines.extend(
                    report
                        .bin_loads
                        .iter()
                        .enumerate()
                        .map(|(i, load)| prompts.bin_line(i + 1, *load, report.capacity)),
                );
            }
            Ok(lines.join("\n"))
        }
    }
}

/// Writes the failure message and suggestion; the binary passes stderr.
pub fn write_failure<W: Write>(error: &PackerError, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "❌ {}", error.user_friendly_message())?;
    writeln!(out, "💡 Suggestion: {}", error.recovery_suggestion())
}
