// Dashboard data models

pub mod card;
pub mod certification;
pub mod cost;
pub mod filter;
pub mod month;
pub mod nomination;
pub mod pending;

// Re-exports for convenience
pub use card::DashboardCard;
pub use certification::{CertificationRecord, NominationCountDocument, NominationCountEntry};
pub use cost::{
    CostChartDocument, CostRow, CostTrendDocument, MonthlyBreakdown, MonthlyCost, YearTrend,
};
pub use filter::{Choice, Dimension, FilterSelection, ALL};
pub use nomination::NominationRow;
pub use pending::{ActionKind, ItemState, PendingAction, PendingEntry};
