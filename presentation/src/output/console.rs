//! Console output formatter for lookup results

use colored::{ColoredString, Colorize};
use courtwatch_domain::{
    CaseStatusReport, DisplayBoardState, ExtractedField, FirmBriefing, FirmCaseRecord,
    OutputFormat, SourceCitation, StatusTone, SyncOutcome,
};
use serde::Serialize;

/// Formats lookup results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    // ==================== Single case ====================

    pub fn format_report(report: &CaseStatusReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::report_full(report),
            OutputFormat::Summary => Self::report_summary(report),
            OutputFormat::Json => Self::json(report),
        }
    }

    fn report_full(report: &CaseStatusReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Case Status"));
        output.push('\n');
        output.push_str(&format!("{} {}\n\n", "Query:".cyan().bold(), report.query));

        if report.is_error() {
            output.push_str(&Self::error_block(&report.reply.text));
            output.push_str(&Self::footer());
            return output;
        }

        if !report.summary.is_blank() {
            output.push_str(&Self::summary_grid(report));
        }

        if !report.commentary.is_empty() {
            output.push_str(&Self::section_header("Commentary"));
            output.push_str(&format!("{}\n", report.commentary));
        }

        output.push_str(&Self::sources(&report.reply.sources));
        output.push_str(&Self::footer());
        output
    }

    fn report_summary(report: &CaseStatusReport) -> String {
        if report.is_error() {
            return format!("{}\n", report.reply.text.red());
        }
        if report.summary.is_blank() {
            // Template ignored; the raw reply is all there is
            return format!("{}\n", report.reply.text);
        }
        Self::summary_grid(report)
    }

    fn summary_grid(report: &CaseStatusReport) -> String {
        let summary = &report.summary;
        let tone = summary.tone();
        let rows: [(&str, String); 6] = [
            ("Case Number", summary.case_number.to_string()),
            (
                "Status",
                Self::paint_status(&summary.status, tone).to_string(),
            ),
            ("Next Hearing", summary.next_hearing_date.to_string()),
            ("Judge", summary.judge.to_string()),
            ("Court", summary.court.to_string()),
            ("Stage", summary.stage.to_string()),
        ];

        rows.iter()
            .map(|(label, value)| format!("  {:<14} {}\n", format!("{}:", label).bold(), value))
            .collect()
    }

    // ==================== Firm list ====================

    pub fn format_briefing(
        briefing: &FirmBriefing,
        firm_name: &str,
        format: OutputFormat,
    ) -> String {
        match format {
            OutputFormat::Full => Self::briefing_full(briefing, firm_name),
            OutputFormat::Summary => Self::briefing_summary(briefing),
            OutputFormat::Json => Self::json(briefing),
        }
    }

    fn briefing_full(briefing: &FirmBriefing, firm_name: &str) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(firm_name));
        output.push('\n');

        match briefing.outcome {
            SyncOutcome::Failed => {
                output.push_str(&Self::error_block(&briefing.raw_briefing));
                output.push_str(&Self::footer());
                return output;
            }
            SyncOutcome::NoCases => {
                output.push_str(&format!(
                    "{}\n",
                    "No cases found for the firm's advocates today.".yellow()
                ));
                if !briefing.raw_briefing.trim().is_empty() {
                    output.push_str(&Self::section_header("Briefing"));
                    output.push_str(&format!("{}\n", briefing.raw_briefing.trim()));
                }
            }
            SyncOutcome::Synced => {
                output.push_str(&format!(
                    "{} {}\n",
                    "Cases listed:".cyan().bold(),
                    briefing.cases.len()
                ));
                for (index, record) in briefing.cases.iter().enumerate() {
                    output.push_str(&Self::case_card(index + 1, record));
                }
            }
        }

        output.push_str(&Self::sources(&briefing.sources));
        output.push_str(&Self::footer());
        output
    }

    fn briefing_summary(briefing: &FirmBriefing) -> String {
        match briefing.outcome {
            SyncOutcome::Failed => format!("{}\n", briefing.raw_briefing.red()),
            SyncOutcome::NoCases => "No cases found.\n".to_string(),
            SyncOutcome::Synced => briefing
                .cases
                .iter()
                .map(|record| {
                    format!(
                        "{}  {}  {}  {}\n",
                        record.case_number,
                        Self::paint_status(&record.status, record.tone()),
                        record.next_date,
                        record.advocate
                    )
                })
                .collect(),
        }
    }

    fn case_card(number: usize, record: &FirmCaseRecord) -> String {
        let mut card = format!(
            "\n{}\n",
            format!("── {}. {} ──", number, record.case_number).yellow().bold()
        );
        let rows = [
            ("Advocate", record.advocate.to_string()),
            ("Parties", record.parties.to_string()),
            (
                "Status",
                Self::paint_status(&record.status, record.tone()).to_string(),
            ),
            ("Next Date", record.next_date.to_string()),
            ("Location", record.court_location.to_string()),
            ("Today", record.today_update.to_string()),
            ("Link", record.portal_link.to_string()),
        ];
        for (label, value) in rows {
            card.push_str(&format!("  {:<11} {}\n", format!("{}:", label).bold(), value));
        }
        card
    }

    // ==================== Live board ====================

    pub fn format_board(state: &DisplayBoardState, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::json(state),
            OutputFormat::Summary => {
                if state.reply.is_error {
                    format!("{}\n", state.reply.text.red())
                } else {
                    format!("{}\n", state.reply.text)
                }
            }
            OutputFormat::Full => {
                let mut output = String::new();
                output.push_str(&Self::header(&format!(
                    "Live Board: {}",
                    state.court.display_name()
                )));
                output.push('\n');
                output.push_str(&format!(
                    "{} {}\n\n",
                    "Fetched:".dimmed(),
                    state.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
                ));
                if state.reply.is_error {
                    output.push_str(&Self::error_block(&state.reply.text));
                } else {
                    output.push_str(&format!("{}\n", state.reply.text));
                    output.push_str(&Self::sources(&state.reply.sources));
                }
                output.push_str(&Self::footer());
                output
            }
        }
    }

    // ==================== Helpers ====================

    fn paint_status(field: &ExtractedField, tone: StatusTone) -> ColoredString {
        let text = field.or_sentinel();
        match tone {
            StatusTone::Closed => text.green(),
            StatusTone::Pending => text.yellow(),
            StatusTone::Active => text.cyan(),
            StatusTone::Unknown => text.dimmed(),
        }
    }

    fn error_block(message: &str) -> String {
        format!("{} {}\n", "!".red().bold(), message.red())
    }

    fn sources(sources: &[SourceCitation]) -> String {
        if sources.is_empty() {
            return String::new();
        }
        let mut output = Self::section_header("Sources");
        for source in sources {
            output.push_str(&format!("  * {} <{}>\n", source.title, source.uri.dimmed()));
        }
        output
    }

    fn json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtwatch_domain::{CaseQuery, CourtCode, ModelReply, parse_case_summary, parse_firm_cases};

    fn no_color() {
        colored::control::set_override(false);
    }

    fn report(text: &str) -> CaseStatusReport {
        CaseStatusReport {
            query: CaseQuery::parse("WP 99/2024").unwrap(),
            reply: ModelReply::success(
                text,
                vec![SourceCitation {
                    title: "Legal Portal".to_string(),
                    uri: "https://tshc.gov.in/x".to_string(),
                }],
            ),
            summary: parse_case_summary(text),
            commentary: courtwatch_domain::strip_summary_block(text),
        }
    }

    const REPLY: &str = "CASE_SUMMARY_START\nCase Number: WP 99/2024\nCurrent Status: Pending\nNext Hearing Date: [Date or \"Not Fixed\"]\nJudge: X\nCourt: Y\nStage: Z\nCASE_SUMMARY_END\nExtra notes here.";

    #[test]
    fn test_report_full_shows_grid_commentary_sources() {
        no_color();
        let output = ConsoleFormatter::format_report(&report(REPLY), OutputFormat::Full);
        assert!(output.contains("WP 99/2024"));
        assert!(output.contains("Pending"));
        // Echoed placeholder renders as the sentinel
        assert!(output.contains("N/A"));
        assert!(output.contains("Extra notes here."));
        assert!(output.contains("https://tshc.gov.in/x"));
    }

    #[test]
    fn test_report_error_shows_message_only() {
        no_color();
        let report = CaseStatusReport {
            query: CaseQuery::parse("WP 1/2024").unwrap(),
            reply: ModelReply::fallback("Connection to e-Courts is delayed. Try again shortly."),
            summary: Default::default(),
            commentary: String::new(),
        };
        let output = ConsoleFormatter::format_report(&report, OutputFormat::Full);
        assert!(output.contains("Connection to e-Courts is delayed"));
        assert!(!output.contains("Sources"));
    }

    #[test]
    fn test_report_json_contract() {
        let json = ConsoleFormatter::format_report(&report(REPLY), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["isError"], false);
        assert_eq!(value["sources"][0]["uri"], "https://tshc.gov.in/x");
        assert!(value["text"].as_str().unwrap().contains("Extra notes"));
        assert_eq!(value["summary"]["caseNumber"], "WP 99/2024");
        assert!(value["summary"]["nextHearingDate"].is_null());
    }

    #[test]
    fn test_briefing_json_uses_sentinel() {
        let text = "CASE_ITEM_START\nCaseNumber: OS 45/2023\nStatus: Disposed\nCASE_ITEM_END";
        let briefing = FirmBriefing::synced(parse_firm_cases(text), text, Vec::new());
        let json = ConsoleFormatter::format_briefing(&briefing, "Firm", OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["outcome"], "synced");
        assert_eq!(value["cases"][0]["caseNumber"], "OS 45/2023");
        assert_eq!(value["cases"][0]["portalLink"], "N/A");
        assert_eq!(value["rawBriefing"], text);
    }

    #[test]
    fn test_briefing_outcomes_are_distinct() {
        no_color();
        let empty = FirmBriefing::synced(Vec::new(), "Nothing listed.", Vec::new());
        let failed = FirmBriefing::failed("Network error during firm sync.");

        let empty_out = ConsoleFormatter::format_briefing(&empty, "Firm", OutputFormat::Full);
        let failed_out = ConsoleFormatter::format_briefing(&failed, "Firm", OutputFormat::Full);

        assert!(empty_out.contains("No cases found"));
        assert!(failed_out.contains("Network error during firm sync."));
        assert!(!failed_out.contains("No cases found"));
    }

    #[test]
    fn test_board_full() {
        no_color();
        let state = DisplayBoardState {
            court: CourtCode::Ap,
            reply: ModelReply::success("CH 1: item 4", Vec::new()),
            fetched_at: chrono::Utc::now(),
        };
        let output = ConsoleFormatter::format_board(&state, OutputFormat::Full);
        assert!(output.contains(CourtCode::Ap.display_name()));
        assert!(output.contains("CH 1: item 4"));
    }
}
