//! Console views for analysis results and the analytics report

use crate::llm::parser::AnalysisResult;
use crate::records::analytics::AnalyticsSummary;
use colored::Colorize;

const HISTOGRAM_BAR_WIDTH: usize = 40;

pub struct ConsoleFormatter {
    color: bool,
}

impl ConsoleFormatter {
    pub fn new(color: bool) -> Self {
        if !color {
            colored::control::set_override(false);
        }
        Self { color }
    }

    pub fn render_analysis(&self, result: &AnalysisResult) -> String {
        let mut out = String::new();

        out.push_str(&format!("\n{}\n", "✨ Analysis Complete!".green().bold()));
        out.push_str(&format!(
            "\n{} {}\n",
            "Match Score:".bold(),
            result.match_percentage.cyan().bold()
        ));

        out.push_str(&format!("\n{}\n", "Missing Keywords".bold()));
        if result.missing_keywords.is_empty() {
            out.push_str("No critical missing keywords found!\n");
        } else {
            out.push_str(&format!("{}\n", result.missing_keywords.join(", ")));
        }

        out.push_str(&format!("\n{}\n", "Profile Summary".bold()));
        out.push_str(&format!("{}\n", result.profile_summary));

        out
    }

    pub fn render_report(&self, summary: &AnalyticsSummary) -> String {
        let mut out = String::new();

        out.push_str(&format!("\n{}\n\n", "📊 Analytics Dashboard".bold()));
        out.push_str(&format!(
            "Total Analyses:         {}\n",
            summary.total_analyses
        ));
        match summary.average_match {
            Some(avg) => out.push_str(&format!("Average JD Match:       {:.1}%\n", avg)),
            None => out.push_str("Average JD Match:       n/a (no numeric scores yet)\n"),
        }
        out.push_str(&format!(
            "Total Keywords Tracked: {}\n",
            summary.total_missing_keywords
        ));

        if !summary.histogram.is_empty() {
            out.push_str(&format!("\n{}\n", "JD Match Distribution".bold()));
            let max_count = summary
                .histogram
                .iter()
                .map(|b| b.count)
                .max()
                .unwrap_or(1)
                .max(1);

            for bin in &summary.histogram {
                let bar_len = bin.count * HISTOGRAM_BAR_WIDTH / max_count;
                out.push_str(&format!(
                    "{:5.1}-{:5.1}% | {:<width$} {}\n",
                    bin.lower,
                    bin.upper,
                    "█".repeat(bar_len),
                    bin.count,
                    width = HISTOGRAM_BAR_WIDTH
                ));
            }
        }

        out.push_str(&format!("\n{}\n", "Recent Analyses".bold()));
        for record in &summary.recent {
            out.push_str(&format!(
                "{}  {:<30} {:>6}  {} missing\n",
                record.timestamp,
                record.resume_name,
                record.jd_match,
                record.missing_keywords_count
            ));
        }

        out
    }

    /// Informational empty state for the report view; not an error banner.
    pub fn render_empty_report(&self) -> String {
        format!(
            "\n{}\n\nNo analysis records yet. Analyze a resume to see insights!\n",
            "📊 Analytics Dashboard".bold()
        )
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }
}
