//! Single-case reply parsing

use super::extract::CompiledLayout;
use super::layout::{
    CASE_NUMBER, COURT, CURRENT_STATUS, JUDGE, NEXT_HEARING_DATE, SINGLE_CASE_LAYOUT, STAGE,
};
use crate::lookup::CaseSummary;
use std::sync::LazyLock;

static SUMMARY: LazyLock<CompiledLayout> =
    LazyLock::new(|| CompiledLayout::new(SINGLE_CASE_LAYOUT));

/// Parse the `CASE_SUMMARY_START … CASE_SUMMARY_END` block of a reply.
///
/// Only the first block is read. A reply without one yields a blank summary;
/// placeholder values echoed from the template count as not provided.
pub fn parse_case_summary(text: &str) -> CaseSummary {
    let Some(block) = SUMMARY.first_block(text) else {
        return CaseSummary::default();
    };

    let mut fields = SUMMARY.fields(block);
    CaseSummary {
        case_number: fields.take(CASE_NUMBER),
        status: fields.take(CURRENT_STATUS),
        next_hearing_date: fields.take(NEXT_HEARING_DATE),
        judge: fields.take(JUDGE),
        court: fields.take(COURT),
        stage: fields.take(STAGE),
    }
}

/// Narrative commentary: the reply minus its first summary block, trimmed.
pub fn strip_summary_block(text: &str) -> String {
    SUMMARY.strip_first_block(text)
}
