//! Lookup parameters: model tiers and live board refresh interval.

use courtwatch_domain::{Model, UseCase};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default live board refresh interval.
pub const DEFAULT_BOARD_REFRESH: Duration = Duration::from_secs(60);

/// Static parameters shared by the lookup use cases.
///
/// Built once at startup from configuration and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupParams {
    /// Fast model: single-case and live-board lookups
    pub lookup_model: Model,
    /// Higher-capability model: firm-wide deep search
    pub deep_search_model: Model,
    /// Interval between live board refreshes
    pub board_refresh: Duration,
}

impl Default for LookupParams {
    fn default() -> Self {
        Self {
            lookup_model: Model::default_lookup(),
            deep_search_model: Model::default_deep_search(),
            board_refresh: DEFAULT_BOARD_REFRESH,
        }
    }
}

impl LookupParams {
    // ==================== Builder Methods ====================

    pub fn with_lookup_model(mut self, model: Model) -> Self {
        self.lookup_model = model;
        self
    }

    pub fn with_deep_search_model(mut self, model: Model) -> Self {
        self.deep_search_model = model;
        self
    }

    pub fn with_board_refresh(mut self, interval: Duration) -> Self {
        self.board_refresh = interval;
        self
    }

    /// Model used for a given use case
    pub fn model_for(&self, use_case: UseCase) -> &Model {
        if use_case.is_deep_search() {
            &self.deep_search_model
        } else {
            &self.lookup_model
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tiers() {
        let params = LookupParams::default();
        assert_eq!(params.model_for(UseCase::SingleCase), &Model::Gemini3Flash);
        assert_eq!(params.model_for(UseCase::LiveBoard), &Model::Gemini3Flash);
        assert_eq!(params.model_for(UseCase::FirmList), &Model::Gemini3Pro);
        assert_eq!(params.board_refresh, Duration::from_secs(60));
    }

    #[test]
    fn test_builder() {
        let params = LookupParams::default()
            .with_lookup_model(Model::Custom("fast".into()))
            .with_board_refresh(Duration::from_secs(5));
        assert_eq!(params.model_for(UseCase::SingleCase).as_str(), "fast");
        assert_eq!(params.board_refresh, Duration::from_secs(5));
    }
}
