//! Reply parsing: turns free-text model replies into typed records.
//!
//! | Function | Use case | Markers |
//! |----------|----------|---------|
//! | [`parse_case_summary`] | single case | `CASE_SUMMARY_START` / `CASE_SUMMARY_END` |
//! | [`parse_firm_cases`] | firm list | `CASE_ITEM_START` / `CASE_ITEM_END` (repeating) |
//!
//! The live board is not parsed; its text is displayed as-is.
//! A reply that ignores the template is not an error: it yields blank or
//! partially filled records.

mod case_summary;
mod extract;
mod firm_list;
pub mod layout;

pub use case_summary::{parse_case_summary, strip_summary_block};
pub use firm_list::parse_firm_cases;
pub use layout::{BlockLayout, FIRM_LIST_LAYOUT, LabelSpec, SINGLE_CASE_LAYOUT};
