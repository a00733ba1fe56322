//! Delimited-block layouts shared by the prompt builder and the reply parser.
//!
//! Each layout names its start/end markers and a label table. The prompt
//! renders the table as the template the model must echo; the parser reads
//! the same table back, so the two cannot drift apart.

/// One labelled line of a delimited block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSpec {
    /// Text before the colon, matched case-insensitively
    pub label: &'static str,
    /// Bracketed example shown in the template
    pub placeholder: &'static str,
}

/// Markers plus label table for one use case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    pub start: &'static str,
    pub end: &'static str,
    pub labels: &'static [LabelSpec],
    /// Placeholders seen in earlier template revisions, also treated as not provided
    pub legacy_placeholders: &'static [&'static str],
}

impl BlockLayout {
    /// Render the template block, one `Label: [placeholder]` line per field.
    pub fn template(&self) -> String {
        let mut out = String::new();
        out.push_str(self.start);
        out.push('\n');
        for spec in self.labels {
            out.push_str(&format!("{}: {}\n", spec.label, spec.placeholder));
        }
        out.push_str(self.end);
        out
    }

    /// Whether a trimmed value is one of this layout's placeholder strings
    pub fn is_placeholder(&self, value: &str) -> bool {
        self.labels.iter().any(|spec| spec.placeholder == value)
            || self.legacy_placeholders.contains(&value)
    }
}

pub const CASE_SUMMARY_START: &str = "CASE_SUMMARY_START";
pub const CASE_SUMMARY_END: &str = "CASE_SUMMARY_END";
pub const CASE_ITEM_START: &str = "CASE_ITEM_START";
pub const CASE_ITEM_END: &str = "CASE_ITEM_END";

pub const CASE_NUMBER: &str = "Case Number";
pub const CURRENT_STATUS: &str = "Current Status";
pub const NEXT_HEARING_DATE: &str = "Next Hearing Date";
pub const JUDGE: &str = "Judge";
pub const COURT: &str = "Court";
pub const STAGE: &str = "Stage";

/// Single-case summary block
pub const SINGLE_CASE_LAYOUT: BlockLayout = BlockLayout {
    start: CASE_SUMMARY_START,
    end: CASE_SUMMARY_END,
    labels: &[
        LabelSpec { label: CASE_NUMBER, placeholder: "[Number]" },
        LabelSpec { label: CURRENT_STATUS, placeholder: "[Status]" },
        LabelSpec { label: NEXT_HEARING_DATE, placeholder: "[Date or \"Not Fixed\"]" },
        LabelSpec { label: JUDGE, placeholder: "[Name]" },
        LabelSpec { label: COURT, placeholder: "[Name]" },
        LabelSpec { label: STAGE, placeholder: "[Stage]" },
    ],
    legacy_placeholders: &["[Date]"],
};

pub const ITEM_CASE_NUMBER: &str = "CaseNumber";
pub const ITEM_ADVOCATE: &str = "Advocate";
pub const ITEM_PARTIES: &str = "Parties";
pub const ITEM_STATUS: &str = "Status";
pub const ITEM_NEXT_DATE: &str = "NextDate";
pub const ITEM_LOCATION: &str = "Location";
pub const ITEM_TODAY_UPDATE: &str = "TodayUpdate";
pub const ITEM_LINK: &str = "Link";

/// Firm-list repeating case block
pub const FIRM_LIST_LAYOUT: BlockLayout = BlockLayout {
    start: CASE_ITEM_START,
    end: CASE_ITEM_END,
    labels: &[
        LabelSpec { label: ITEM_CASE_NUMBER, placeholder: "[Case No/Year]" },
        LabelSpec { label: ITEM_ADVOCATE, placeholder: "[Name]" },
        LabelSpec { label: ITEM_PARTIES, placeholder: "[P vs R]" },
        LabelSpec { label: ITEM_STATUS, placeholder: "[Status]" },
        LabelSpec { label: ITEM_NEXT_DATE, placeholder: "[Date]" },
        LabelSpec { label: ITEM_LOCATION, placeholder: "[Guntur/APHC/TSHC]" },
        LabelSpec {
            label: ITEM_TODAY_UPDATE,
            placeholder: "[What is written in the orders/proceedings today?]",
        },
        LabelSpec { label: ITEM_LINK, placeholder: "[Direct Link to file in e-Courts]" },
    ],
    legacy_placeholders: &[],
};
