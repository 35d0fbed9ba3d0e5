// src/models.rs

pub mod budget;
pub use budget::{BudgetState, NewBudgetPayload, PendingBudget};
pub mod dashboard;
pub use dashboard::{ProjectDashboard, ProjectSummary, RollupOutcome, SegmentRollup, ServiceRollup};
pub mod expense;
pub use expense::{CostSegment, GeneralExpense, PaymentStatus};
pub mod ledger;
pub use ledger::{
    ApplyPaymentRequest, LedgerItem, LedgerKey, LedgerOrigin, LedgerView, RecordIssue,
    RecordWarning, UpdatePriorityRequest,
};
pub mod project;
pub use project::{Project, ProjectSnapshot};
pub mod schedule;
pub use schedule::{
    EvmClassification, EvmResult, MeasurementMode, ScheduleStage, ScheduleStatus,
    ScheduleStatusResult,
};
pub mod service;
pub use service::{Service, ServicePayment};
