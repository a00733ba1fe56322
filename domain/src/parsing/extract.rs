//! Delimiter and label scraping primitives.
//!
//! Pure functions over reply text: no state is kept between calls.

use super::layout::BlockLayout;
use crate::lookup::ExtractedField;
use regex::Regex;
use std::collections::HashMap;

/// Compiled patterns for one [`BlockLayout`]
pub(crate) struct CompiledLayout {
    pub layout: BlockLayout,
    block: Regex,
    fields: Vec<(&'static str, Regex)>,
}

impl CompiledLayout {
    pub fn new(layout: BlockLayout) -> Self {
        // Non-greedy, spans lines; markers are matched case-sensitively
        let block = Regex::new(&format!(
            r"(?s){}(.*?){}",
            regex::escape(layout.start),
            regex::escape(layout.end)
        ))
        .expect("block pattern is built from escaped literals");

        // Only horizontal whitespace after the colon: a bare label must not
        // swallow the following line
        let fields = layout
            .labels
            .iter()
            .map(|spec| {
                let pattern = format!(r"(?im){}:[ \t]*(.*)$", regex::escape(spec.label));
                let re = Regex::new(&pattern).expect("label pattern is built from escaped literals");
                (spec.label, re)
            })
            .collect();

        Self {
            layout,
            block,
            fields,
        }
    }

    /// Inner content of the first delimited block, if any
    pub fn first_block<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.block
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    /// Inner content of every non-overlapping block, in order of appearance
    pub fn all_blocks<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.block
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// Text with the first block (markers included) removed, trimmed
    pub fn strip_first_block(&self, text: &str) -> String {
        self.block.replace(text, "").trim().to_string()
    }

    /// Extract every labelled field from one block's content
    pub fn fields(&self, content: &str) -> LabelledFields {
        let values = self
            .fields
            .iter()
            .map(|(label, re)| {
                let field = match re.captures(content).and_then(|c| c.get(1)) {
                    None => ExtractedField::Missing,
                    Some(m) => self.classify(m.as_str().trim()),
                };
                (*label, field)
            })
            .collect();
        LabelledFields { values }
    }

    fn classify(&self, value: &str) -> ExtractedField {
        if value.is_empty() {
            ExtractedField::Empty
        } else if self.layout.is_placeholder(value) {
            ExtractedField::Placeholder(value.to_string())
        } else {
            ExtractedField::Value(value.to_string())
        }
    }
}

/// Fields of one block keyed by label
#[derive(Debug, Default)]
pub(crate) struct LabelledFields {
    values: HashMap<&'static str, ExtractedField>,
}

impl LabelledFields {
    pub fn take(&mut self, label: &str) -> ExtractedField {
        self.values.remove(label).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::layout::{FIRM_LIST_LAYOUT, SINGLE_CASE_LAYOUT};

    #[test]
    fn test_first_block_is_non_greedy() {
        let compiled = CompiledLayout::new(SINGLE_CASE_LAYOUT);
        let text = "CASE_SUMMARY_START a CASE_SUMMARY_END x CASE_SUMMARY_START b CASE_SUMMARY_END";
        assert_eq!(compiled.first_block(text), Some(" a "));
        assert_eq!(
            compiled.strip_first_block(text),
            "x CASE_SUMMARY_START b CASE_SUMMARY_END"
        );
    }

    #[test]
    fn test_unterminated_block_not_found() {
        let compiled = CompiledLayout::new(SINGLE_CASE_LAYOUT);
        assert_eq!(compiled.first_block("CASE_SUMMARY_START\nCase Number: 1\n"), None);
    }

    #[test]
    fn test_label_match_is_case_insensitive_and_single_line() {
        let compiled = CompiledLayout::new(SINGLE_CASE_LAYOUT);
        let mut fields = compiled.fields("\ncase number:    WP 1/2024  \nJUDGE:\nStage: Final\r\n");
        assert_eq!(fields.take("Case Number"), ExtractedField::Value("WP 1/2024".into()));
        assert_eq!(fields.take("Judge"), ExtractedField::Empty);
        assert_eq!(fields.take("Stage"), ExtractedField::Value("Final".into()));
        assert_eq!(fields.take("Court"), ExtractedField::Missing);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let compiled = CompiledLayout::new(FIRM_LIST_LAYOUT);
        let mut fields = compiled.fields("Status: Pending\nStatus: Disposed\n");
        assert_eq!(fields.take("Status"), ExtractedField::Value("Pending".into()));
    }

    #[test]
    fn test_all_blocks_in_order() {
        let compiled = CompiledLayout::new(FIRM_LIST_LAYOUT);
        let text = "CASE_ITEM_START1CASE_ITEM_END--CASE_ITEM_START2CASE_ITEM_ENDCASE_ITEM_START3";
        assert_eq!(compiled.all_blocks(text), vec!["1", "2"]);
    }
}
