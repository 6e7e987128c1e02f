//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::{
    MockAboutQuery, MockCostCommand, MockReportQuery, MockUserSummaryQuery,
};
use crate::inbound::http::state::HttpState;

/// Build handler state from expectation-free mocks, then let the caller
/// replace the ports a test exercises. Any call to an unreplaced port panics.
pub fn state_with(configure: impl FnOnce(&mut HttpState)) -> HttpState {
    let mut state = HttpState::new(
        Arc::new(MockCostCommand::new()),
        Arc::new(MockReportQuery::new()),
        Arc::new(MockUserSummaryQuery::new()),
        Arc::new(MockAboutQuery::new()),
    );
    configure(&mut state);
    state
}
