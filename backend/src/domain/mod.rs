//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers, and the use-case services behind the driving ports.
//! Keep types immutable and document invariants and serialisation contracts
//! (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable identifier.
//! - Cost / NewCost / AddCostRequest: cost records and write-path input.
//! - User / UserSummary: user records and the summary read model.
//! - MonthlyReport / ReportPeriod: shaped monthly report and its month.
//! - ReportService / CostIngestionService / UserSummaryService / TeamRoster:
//!   implementations of the driving ports in [`ports`].

pub mod category;
pub mod cost;
mod cost_ingestion;
pub mod error;
pub mod ports;
pub mod report;
pub mod report_cache;
mod report_service;
mod service_error_mapping;
mod team;
pub mod trace_id;
pub mod user;
mod user_summary_service;

pub use self::category::{Category, ParseCategoryError};
pub use self::cost::{AddCostRequest, Cost, CostId, CostValidationError, NewCost};
pub use self::cost_ingestion::CostIngestionService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::report::{
    CategoryBreakdown, MonthlyReport, ReportEntry, ReportPeriod, ReportPeriodError,
};
pub use self::report_cache::{ReportCache, ReportCacheKey};
pub use self::report_service::ReportService;
pub use self::team::{TeamMember, TeamRoster};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserProfile, UserSummary, UserValidationError};
pub use self::user_summary_service::UserSummaryService;
