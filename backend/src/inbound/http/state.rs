//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AboutQuery, CostCommand, ReportQuery, UserSummaryQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Write path for cost records.
    pub costs: Arc<dyn CostCommand>,
    /// Monthly report engine.
    pub reports: Arc<dyn ReportQuery>,
    /// User summaries.
    pub users: Arc<dyn UserSummaryQuery>,
    /// Static team listing.
    pub about: Arc<dyn AboutQuery>,
}

impl HttpState {
    /// Bundle the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use cost_manager::domain::{
    ///     CostIngestionService, ReportService, TeamRoster, UserSummaryService,
    /// };
    /// use cost_manager::inbound::http::state::HttpState;
    /// use cost_manager::outbound::memory::{InMemoryCostRepository, InMemoryUserRepository};
    /// use mockable::DefaultClock;
    ///
    /// let costs = Arc::new(InMemoryCostRepository::new());
    /// let users = Arc::new(InMemoryUserRepository::new());
    /// let reports = Arc::new(ReportService::new(Arc::clone(&costs)));
    /// let state = HttpState::new(
    ///     Arc::new(CostIngestionService::new(
    ///         Arc::clone(&costs),
    ///         Arc::clone(&users),
    ///         Arc::clone(&reports),
    ///         Arc::new(DefaultClock),
    ///     )),
    ///     reports,
    ///     Arc::new(UserSummaryService::new(costs, users)),
    ///     Arc::new(TeamRoster),
    /// );
    /// assert_eq!(state.about.team().len(), 2);
    /// ```
    pub fn new(
        costs: Arc<dyn CostCommand>,
        reports: Arc<dyn ReportQuery>,
        users: Arc<dyn UserSummaryQuery>,
        about: Arc<dyn AboutQuery>,
    ) -> Self {
        Self {
            costs,
            reports,
            users,
            about,
        }
    }
}
