// src/services.rs

pub mod budget_service;
pub use budget_service::BudgetService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod ledger_service;
pub use ledger_service::LedgerService;
pub mod payment_service;
pub use payment_service::{PaymentService, UpdatedEntity};
pub mod rollup_service;
pub use rollup_service::RollupService;
pub mod schedule_service;
pub use schedule_service::ScheduleService;
pub mod summary_service;
pub use summary_service::SummaryService;
