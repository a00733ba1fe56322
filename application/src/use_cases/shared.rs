//! Shared helpers for the lookup use cases.

use crate::ports::llm_gateway::{GatewayError, GroundedResponse, GroundedSearchGateway};
use crate::ports::progress::LookupProgressNotifier;
use courtwatch_domain::core::string::{single_line, truncate};
use courtwatch_domain::{Model, PromptRequest};
use tracing::{debug, info, warn};

/// Single-case reply text when the backend answered with nothing.
pub const CASE_NOT_UPDATED: &str = "Status not yet updated in e-Courts for today.";
/// Single-case fallback when the backend call failed.
pub const CASE_LOOKUP_FAILED: &str = "Connection to e-Courts is delayed. Try again shortly.";
/// Firm-list fallback when the backend call failed.
pub const FIRM_SYNC_FAILED: &str = "Network error during firm sync.";
/// Live-board reply text when the backend answered with nothing.
pub const BOARD_UNAVAILABLE: &str = "Display board stream unavailable.";
/// Live-board fallback when the backend call failed.
pub const BOARD_LOOKUP_FAILED: &str = "Error connecting to Live Board.";

/// Build the prompt for `request`, send it, and report progress.
///
/// Errors are logged here and returned to the caller, which converts them
/// into its use case's fallback value.
pub(crate) async fn ask_grounded(
    gateway: &dyn GroundedSearchGateway,
    model: &Model,
    request: &PromptRequest,
    progress: &dyn LookupProgressNotifier,
) -> Result<GroundedResponse, GatewayError> {
    let use_case = request.use_case();
    let prompt = request.build();
    debug!(
        use_case = %use_case,
        model = %model,
        "prompt: {}",
        truncate(&single_line(&prompt), 160)
    );

    progress.on_lookup_start(use_case);
    let result = gateway.generate(model, &prompt).await;
    progress.on_lookup_complete(use_case, result.is_ok());

    match &result {
        Ok(response) => info!(
            use_case = %use_case,
            chars = response.text.as_deref().map(str::len).unwrap_or(0),
            sources = response.chunks.len(),
            "lookup answered"
        ),
        Err(e) => warn!(use_case = %use_case, error = %e, "lookup failed, using fallback"),
    }
    result
}
