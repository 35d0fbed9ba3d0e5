//! Testes do ciclo de vida do orçamento: criação validada, aprovação
//! que materializa despesa geral e decisão única.

use chrono::Duration;
use rust_decimal::Decimal;
use uuid::Uuid;

use obras_core::models::{
    BudgetState, CostSegment, NewBudgetPayload, PaymentStatus, Project, ProjectSnapshot, Service,
};
use obras_core::services::{BudgetService, LedgerService};
use obras_core::{AppError, SessionContext};

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn session() -> SessionContext {
    SessionContext::authenticated(Uuid::new_v4(), "token-de-teste", Duration::hours(1))
}

fn base_snapshot() -> ProjectSnapshot {
    ProjectSnapshot {
        project: Project {
            id: Uuid::new_v4(),
            name: "Casa Térrea".to_string(),
            client: None,
            created_at: None,
        },
        services: vec![Service {
            id: Uuid::new_v4(),
            name: "Hidráulica".to_string(),
            responsible: None,
            budget_labor: money(5_000_00),
            budget_material: money(3_000_00),
            created_at: None,
        }],
        general_expenses: Vec::new(),
        service_payments: Vec::new(),
        pending_budgets: Vec::new(),
    }
}

fn payload(snapshot: &ProjectSnapshot) -> NewBudgetPayload {
    NewBudgetPayload {
        description: "Tubulação PEX completa".to_string(),
        supplier: Some("Hidro Forte".to_string()),
        amount: money(2_200_00),
        segment: CostSegment::Material,
        service_id: Some(snapshot.services[0].id),
        observations: Some("Inclui conexões".to_string()),
        attachments: vec!["cotacao-hidroforte.pdf".to_string()],
    }
}

#[test]
fn test_create_starts_awaiting_approval() {
    let mut snapshot = base_snapshot();
    let engine = BudgetService::new();

    let request = payload(&snapshot);
    let budget = engine.create(&mut snapshot, &session(), request).unwrap();

    assert_eq!(budget.state, BudgetState::AwaitingApproval);
    assert_eq!(snapshot.pending_budgets.len(), 1);
    assert_eq!(snapshot.pending_budgets[0].id, budget.id);
    // Orçamento pendente não entra no razão.
    assert!(LedgerService::new().aggregate(&snapshot).items.is_empty());
}

#[test]
fn test_create_validates_payload() {
    let mut snapshot = base_snapshot();
    let engine = BudgetService::new();

    let mut short_description = payload(&snapshot);
    short_description.description = "ab".to_string();
    let result = engine.create(&mut snapshot, &session(), short_description);
    assert!(matches!(result, Err(AppError::ValidationError(_))));

    let mut non_positive = payload(&snapshot);
    non_positive.amount = Decimal::ZERO;
    let result = engine.create(&mut snapshot, &session(), non_positive);
    assert!(matches!(result, Err(AppError::ValidationError(_))));

    assert!(snapshot.pending_budgets.is_empty());
}

#[test]
fn test_approve_materializes_general_expense() {
    let mut snapshot = base_snapshot();
    let engine = BudgetService::new();

    let request = payload(&snapshot);
    let budget = engine.create(&mut snapshot, &session(), request).unwrap();
    let expense = engine.approve(&mut snapshot, &session(), budget.id).unwrap();

    assert_eq!(expense.description, "Tubulação PEX completa");
    assert_eq!(expense.total_amount, money(2_200_00));
    assert_eq!(expense.amount_paid, Decimal::ZERO);
    assert_eq!(expense.status, PaymentStatus::Pending);
    assert_eq!(expense.segment, CostSegment::Material);
    assert_eq!(expense.service_id, Some(snapshot.services[0].id));
    assert!(expense.date.is_some());

    assert_eq!(snapshot.pending_budgets[0].state, BudgetState::Approved);
    assert_eq!(snapshot.general_expenses.len(), 1);

    // A despesa aprovada passa a existir no razão.
    let view = LedgerService::new().aggregate(&snapshot);
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].key.id, expense.id);
}

#[test]
fn test_budget_decision_is_final() {
    let mut snapshot = base_snapshot();
    let engine = BudgetService::new();

    let request = payload(&snapshot);
    let budget = engine.create(&mut snapshot, &session(), request).unwrap();
    engine.approve(&mut snapshot, &session(), budget.id).unwrap();

    let again = engine.approve(&mut snapshot, &session(), budget.id);
    assert!(matches!(again, Err(AppError::InvalidBudgetTransition(_))));

    let reject_after = engine.reject(&mut snapshot, &session(), budget.id);
    assert!(matches!(reject_after, Err(AppError::InvalidBudgetTransition(_))));

    // Só a despesa da primeira aprovação existe.
    assert_eq!(snapshot.general_expenses.len(), 1);
}

#[test]
fn test_reject_leaves_ledger_untouched() {
    let mut snapshot = base_snapshot();
    let engine = BudgetService::new();

    let request = payload(&snapshot);
    let budget = engine.create(&mut snapshot, &session(), request).unwrap();
    engine.reject(&mut snapshot, &session(), budget.id).unwrap();

    assert_eq!(snapshot.pending_budgets[0].state, BudgetState::Rejected);
    assert!(snapshot.general_expenses.is_empty());
    assert!(LedgerService::new().aggregate(&snapshot).items.is_empty());
}

#[test]
fn test_unknown_budget_id() {
    let mut snapshot = base_snapshot();
    let engine = BudgetService::new();

    let result = engine.approve(&mut snapshot, &session(), Uuid::new_v4());
    assert!(matches!(result, Err(AppError::BudgetNotFound(_))));
}

#[test]
fn test_budget_operations_require_session() {
    let mut snapshot = base_snapshot();
    let engine = BudgetService::new();
    let logged_out = SessionContext::new();

    let request = payload(&snapshot);
    let result = engine.create(&mut snapshot, &logged_out, request);
    assert!(matches!(result, Err(AppError::NotAuthenticated)));
    assert!(snapshot.pending_budgets.is_empty());
}
