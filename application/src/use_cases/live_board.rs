//! Live display board use case and its refresh poller.
//!
//! [`FetchLiveBoardUseCase`] performs one fetch. [`BoardPoller`] re-issues it
//! on a fixed interval for one jurisdiction at a time: switching court or
//! dropping the poller cancels the running task, so stale refreshes from a
//! previous selection are never delivered.

use super::shared::{BOARD_LOOKUP_FAILED, BOARD_UNAVAILABLE, ask_grounded};
use crate::config::LookupParams;
use crate::ports::llm_gateway::GroundedSearchGateway;
use crate::ports::progress::{LookupProgressNotifier, NoProgress};
use courtwatch_domain::{CourtCode, DisplayBoardState, ModelReply, PromptRequest, SourceCitation};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Buffered board states per watch; a slow view only delays the next refresh.
const UPDATE_BUFFER: usize = 4;

/// Shortest refresh interval a poller accepts.
pub const MIN_BOARD_REFRESH: Duration = Duration::from_secs(1);

/// Use case for one live board fetch. Never fails.
#[derive(Clone)]
pub struct FetchLiveBoardUseCase {
    gateway: Arc<dyn GroundedSearchGateway>,
    params: LookupParams,
}

impl FetchLiveBoardUseCase {
    pub fn new(gateway: Arc<dyn GroundedSearchGateway>, params: LookupParams) -> Self {
        Self { gateway, params }
    }

    pub fn refresh_interval(&self) -> Duration {
        self.params.board_refresh
    }

    pub async fn execute(&self, court: CourtCode) -> DisplayBoardState {
        self.execute_with_progress(court, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        court: CourtCode,
        progress: &dyn LookupProgressNotifier,
    ) -> DisplayBoardState {
        let request = PromptRequest::LiveBoard(court);
        let model = self.params.model_for(request.use_case());

        let reply = match ask_grounded(self.gateway.as_ref(), model, &request, progress).await {
            Ok(response) => ModelReply::success(
                response.non_empty_text().unwrap_or(BOARD_UNAVAILABLE),
                SourceCitation::from_chunks(&response.chunks),
            ),
            Err(_) => ModelReply::fallback(BOARD_LOOKUP_FAILED),
        };

        DisplayBoardState {
            court,
            reply,
            fetched_at: chrono::Utc::now(),
        }
    }
}

struct ActivePoll {
    court: CourtCode,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// Cancellable periodic refresh of one jurisdiction's board.
///
/// At most one polling task is alive per poller.
pub struct BoardPoller {
    use_case: FetchLiveBoardUseCase,
    interval: Duration,
    active: Option<ActivePoll>,
}

impl BoardPoller {
    /// Poll at the use case's configured refresh interval
    pub fn new(use_case: FetchLiveBoardUseCase) -> Self {
        let interval = use_case.refresh_interval();
        Self::with_interval(use_case, interval)
    }

    /// Poll at `interval`, raised to [`MIN_BOARD_REFRESH`] when shorter
    pub fn with_interval(use_case: FetchLiveBoardUseCase, interval: Duration) -> Self {
        if interval < MIN_BOARD_REFRESH {
            warn!(
                requested_ms = interval.as_millis() as u64,
                "board refresh interval too short, using minimum"
            );
        }
        Self {
            use_case,
            interval: interval.max(MIN_BOARD_REFRESH),
            active: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Court currently being polled, if any
    pub fn current_court(&self) -> Option<CourtCode> {
        self.active.as_ref().map(|a| a.court)
    }

    pub fn is_active(&self) -> bool {
        self.active.as_ref().is_some_and(|a| !a.handle.is_finished())
    }

    /// Start polling `court`: one fetch now, then one per interval.
    ///
    /// Any previous poll is cancelled first; its receiver closes.
    pub fn watch(&mut self, court: CourtCode) -> mpsc::Receiver<DisplayBoardState> {
        self.stop();

        let (tx, rx) = mpsc::channel(UPDATE_BUFFER);
        let token = CancellationToken::new();
        let use_case = self.use_case.clone();
        let interval = self.interval;
        let task_token = token.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = task_token.cancelled() => break,
                    _ = ticker.tick() => {}
                }

                let state = tokio::select! {
                    _ = task_token.cancelled() => break,
                    state = use_case.execute(court) => state,
                };

                tokio::select! {
                    _ = task_token.cancelled() => break,
                    sent = tx.send(state) => {
                        if sent.is_err() {
                            debug!(court = %court, "board receiver dropped");
                            break;
                        }
                    }
                }
            }
            debug!(court = %court, "board poll stopped");
        });

        info!(court = %court, interval_secs = interval.as_secs(), "watching live board");
        self.active = Some(ActivePoll {
            court,
            token,
            handle,
        });
        rx
    }

    /// Cancel the running poll, if any
    pub fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            active.token.cancel();
            debug!(court = %active.court, "cancelled board poll");
        }
    }
}

impl Drop for BoardPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::{GatewayError, GroundedResponse};
    use crate::use_cases::test_support::ScriptedGateway;
    use courtwatch_domain::GroundingChunk;

    fn use_case(gateway: Arc<ScriptedGateway>) -> FetchLiveBoardUseCase {
        FetchLiveBoardUseCase::new(gateway, LookupParams::default())
    }

    #[tokio::test]
    async fn test_fetch_targets_selected_portal() {
        let gateway = ScriptedGateway::new(vec![Ok(GroundedResponse::from_text(
            "CH 5: Justice S. Rao, serial 11",
        )
        .with_chunks(vec![GroundingChunk::web("", "https://aphc.gov.in/board")]))]);

        let state = use_case(gateway.clone()).execute(CourtCode::Ap).await;

        assert_eq!(state.court, CourtCode::Ap);
        assert!(!state.reply.is_error);
        assert_eq!(state.reply.text, "CH 5: Justice S. Rao, serial 11");
        assert_eq!(state.reply.sources[0].title, "Legal Portal");
        assert!(gateway.calls()[0].1.contains("aphc.gov.in"));
    }

    #[tokio::test]
    async fn test_fetch_fallbacks() {
        let gateway = ScriptedGateway::new(vec![
            Ok(GroundedResponse::default()),
            Err(GatewayError::Other("boom".to_string())),
        ]);
        let use_case = use_case(gateway);

        let empty = use_case.execute(CourtCode::Tg).await;
        assert!(!empty.reply.is_error);
        assert_eq!(empty.reply.text, BOARD_UNAVAILABLE);

        let failed = use_case.execute(CourtCode::Tg).await;
        assert!(failed.reply.is_error);
        assert_eq!(failed.reply.text, BOARD_LOOKUP_FAILED);
        assert!(failed.reply.sources.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_poller_fetches_now_and_every_interval() {
        let gateway = ScriptedGateway::with_fallback(Vec::new(), "board");
        let mut poller = BoardPoller::new(use_case(gateway.clone()));
        assert_eq!(poller.interval(), Duration::from_secs(60));

        let mut rx = poller.watch(CourtCode::Tg);
        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();

        assert_eq!(first.court, CourtCode::Tg);
        assert_eq!(second.court, CourtCode::Tg);
        assert!(second.fetched_at >= first.fetched_at);
        assert_eq!(gateway.calls().len(), 2);
        assert_eq!(poller.current_court(), Some(CourtCode::Tg));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_interval_is_raised_to_minimum() {
        let gateway = ScriptedGateway::with_fallback(Vec::new(), "board");
        let params = LookupParams::default().with_board_refresh(Duration::ZERO);
        let mut poller = BoardPoller::new(FetchLiveBoardUseCase::new(gateway.clone(), params));
        assert_eq!(poller.interval(), MIN_BOARD_REFRESH);

        let mut rx = poller.watch(CourtCode::Tg);
        assert_eq!(rx.recv().await.unwrap().court, CourtCode::Tg);
        assert_eq!(rx.recv().await.unwrap().court, CourtCode::Tg);
        assert!(poller.is_active());
        assert_eq!(gateway.calls().len(), 2);

        let poller = BoardPoller::with_interval(
            use_case(gateway),
            Duration::from_millis(200),
        );
        assert_eq!(poller.interval(), MIN_BOARD_REFRESH);
    }

    #[tokio::test(start_paused = true)]
    async fn test_switching_court_cancels_previous_poll() {
        let gateway = ScriptedGateway::with_fallback(Vec::new(), "board");
        let mut poller = BoardPoller::new(use_case(gateway.clone()));

        let mut tg = poller.watch(CourtCode::Tg);
        assert_eq!(tg.recv().await.unwrap().court, CourtCode::Tg);

        let mut ap = poller.watch(CourtCode::Ap);
        // The old task exits and drops its sender
        assert!(tg.recv().await.is_none());

        assert_eq!(ap.recv().await.unwrap().court, CourtCode::Ap);
        assert_eq!(ap.recv().await.unwrap().court, CourtCode::Ap);
        assert_eq!(poller.current_court(), Some(CourtCode::Ap));

        let prompts = gateway.calls();
        assert!(prompts[0].1.contains("tshc.gov.in"));
        assert!(prompts[1..].iter().all(|(_, p)| p.contains("aphc.gov.in")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_and_drop_cancel() {
        let gateway = ScriptedGateway::with_fallback(Vec::new(), "board");
        let mut poller = BoardPoller::new(use_case(gateway.clone()));

        let mut rx = poller.watch(CourtCode::Tg);
        rx.recv().await.unwrap();
        poller.stop();
        assert!(rx.recv().await.is_none());
        assert!(!poller.is_active());
        assert_eq!(poller.current_court(), None);

        let mut rx = poller.watch(CourtCode::Ap);
        rx.recv().await.unwrap();
        drop(poller);
        assert!(rx.recv().await.is_none());
    }
}
