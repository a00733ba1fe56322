//! Firm-list reply parsing

use super::extract::CompiledLayout;
use super::layout::{
    FIRM_LIST_LAYOUT, ITEM_ADVOCATE, ITEM_CASE_NUMBER, ITEM_LINK, ITEM_LOCATION, ITEM_NEXT_DATE,
    ITEM_PARTIES, ITEM_STATUS, ITEM_TODAY_UPDATE,
};
use crate::lookup::FirmCaseRecord;
use std::sync::LazyLock;

static ITEMS: LazyLock<CompiledLayout> = LazyLock::new(|| CompiledLayout::new(FIRM_LIST_LAYOUT));

/// Parse every `CASE_ITEM_START … CASE_ITEM_END` block, in order of appearance.
///
/// Zero blocks yields an empty list. Labels missing from a block are left
/// [`Missing`](crate::lookup::ExtractedField::Missing) and render as `N/A`.
pub fn parse_firm_cases(text: &str) -> Vec<FirmCaseRecord> {
    ITEMS
        .all_blocks(text)
        .into_iter()
        .map(|block| {
            let mut fields = ITEMS.fields(block);
            FirmCaseRecord {
                case_number: fields.take(ITEM_CASE_NUMBER),
                advocate: fields.take(ITEM_ADVOCATE),
                parties: fields.take(ITEM_PARTIES),
                status: fields.take(ITEM_STATUS),
                next_date: fields.take(ITEM_NEXT_DATE),
                court_location: fields.take(ITEM_LOCATION),
                today_update: fields.take(ITEM_TODAY_UPDATE),
                portal_link: fields.take(ITEM_LINK),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::ExtractedField;

    fn item(case_number: &str, with_link: bool) -> String {
        let mut block = format!(
            "CASE_ITEM_START\nCaseNumber: {case_number}\nAdvocate: N DURGA PRASAD (NDP)\nParties: A vs B\nStatus: Pending\nNextDate: 03-07-2024\nLocation: APHC\nTodayUpdate: Heard in part.\n"
        );
        if with_link {
            block.push_str("Link: https://aphc.gov.in/case\n");
        }
        block.push_str("CASE_ITEM_END\n");
        block
    }

    #[test]
    fn test_three_blocks_three_records_in_order() {
        let text = format!(
            "Briefing for today.\n{}{}{}Done.",
            item("WP 1/2024", true),
            item("WP 2/2024", true),
            item("OS 3/2023", true)
        );
        let cases = parse_firm_cases(&text);
        assert_eq!(cases.len(), 3);
        let numbers: Vec<_> = cases.iter().map(|c| c.case_number.value()).collect();
        assert_eq!(numbers, vec![Some("WP 1/2024"), Some("WP 2/2024"), Some("OS 3/2023")]);
        assert_eq!(cases[0].court_location.value(), Some("APHC"));
        assert_eq!(cases[0].today_update.value(), Some("Heard in part."));
    }

    #[test]
    fn test_zero_blocks_empty_list() {
        assert!(parse_firm_cases("No cases are listed today.").is_empty());
        assert!(parse_firm_cases("").is_empty());
    }

    #[test]
    fn test_missing_link_renders_na() {
        let cases = parse_firm_cases(&item("WP 7/2024", false));
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].portal_link, ExtractedField::Missing);
        assert_eq!(cases[0].portal_link.to_string(), "N/A");
        assert_eq!(cases[0].status.value(), Some("Pending"));
    }

    #[test]
    fn test_echoed_template_is_not_a_case_value() {
        let template = FIRM_LIST_LAYOUT.template();
        let cases = parse_firm_cases(&template);
        assert_eq!(cases.len(), 1);
        assert!(cases[0].case_number.value().is_none());
        assert!(cases[0].portal_link.value().is_none());
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let text = item("WP 9/2024", true);
        assert_eq!(parse_firm_cases(&text), parse_firm_cases(&text));
    }
}
