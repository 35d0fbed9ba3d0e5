//! Testes da calculadora de resumo: os quatro KPIs do painel e o total
//! por segmento.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use obras_core::models::{
    CostSegment, GeneralExpense, PaymentStatus, Project, ProjectSnapshot, Service, ServicePayment,
};
use obras_core::services::{DashboardService, LedgerService, SummaryService};
use obras_core::PolicyConfig;

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn service(budget_labor_cents: i64, budget_material_cents: i64) -> Service {
    Service {
        id: Uuid::new_v4(),
        name: "Cobertura".to_string(),
        responsible: None,
        budget_labor: money(budget_labor_cents),
        budget_material: money(budget_material_cents),
        created_at: None,
    }
}

fn expense(total_cents: i64, paid_cents: i64, priority: i32) -> GeneralExpense {
    GeneralExpense {
        id: Uuid::new_v4(),
        date: Some(date()),
        description: "Telhas cerâmicas".to_string(),
        supplier: None,
        total_amount: money(total_cents),
        amount_paid: money(paid_cents),
        priority,
        segment: CostSegment::Material,
        status: PaymentStatus::Pending,
        service_id: None,
        created_at: None,
    }
}

fn payment(service_id: Uuid, total_cents: i64, paid_cents: i64) -> ServicePayment {
    ServicePayment {
        id: Uuid::new_v4(),
        service_id,
        date: Some(date()),
        supplier: None,
        total_amount: money(total_cents),
        amount_paid: money(paid_cents),
        segment: CostSegment::Labor,
        priority: 0,
        status: PaymentStatus::Pending,
        created_at: None,
    }
}

fn base_snapshot() -> ProjectSnapshot {
    ProjectSnapshot {
        project: Project {
            id: Uuid::new_v4(),
            name: "Edifício Horizonte".to_string(),
            client: Some("Incorporadora Horizonte".to_string()),
            created_at: None,
        },
        services: Vec::new(),
        general_expenses: Vec::new(),
        service_payments: Vec::new(),
        pending_budgets: Vec::new(),
    }
}

#[test]
fn test_orcamento_total_sums_both_budgets() {
    let mut snapshot = base_snapshot();
    snapshot.services.push(service(10_000_00, 4_000_00));
    snapshot.services.push(service(6_000_00, 2_500_00));

    let view = LedgerService::new().aggregate(&snapshot);
    let summary = SummaryService::new(PolicyConfig::default()).summarize(&snapshot, &view);

    assert_eq!(summary.orcamento_total, money(22_500_00));
}

#[test]
fn test_valores_pagos_covers_both_origins() {
    let mut snapshot = base_snapshot();
    let cobertura = service(10_000_00, 0);
    let id = cobertura.id;
    snapshot.services.push(cobertura);
    snapshot.general_expenses.push(expense(1_000_00, 300_00, 0));
    snapshot.service_payments.push(payment(id, 2_000_00, 1_200_00));

    let view = LedgerService::new().aggregate(&snapshot);
    let summary = SummaryService::new(PolicyConfig::default()).summarize(&snapshot, &view);

    assert_eq!(summary.valores_pagos, money(1_500_00));
}

#[test]
fn test_residual_is_budget_minus_paid() {
    let mut snapshot = base_snapshot();
    let cobertura = service(10_000_00, 5_000_00);
    let id = cobertura.id;
    snapshot.services.push(cobertura);
    snapshot.general_expenses.push(expense(2_000_00, 2_000_00, 1));
    snapshot.service_payments.push(payment(id, 3_000_00, 500_00));

    let view = LedgerService::new().aggregate(&snapshot);
    let summary = SummaryService::new(PolicyConfig::default()).summarize(&snapshot, &view);

    assert_eq!(
        summary.residual,
        summary.orcamento_total - summary.valores_pagos
    );
    assert_eq!(summary.residual, money(12_500_00));
}

#[test]
fn test_liberado_uses_priority_floor_and_released_status() {
    let mut snapshot = base_snapshot();
    // Prioridade 3 (piso default): entra.
    snapshot.general_expenses.push(expense(1_000_00, 0, 3));
    // Prioridade 1: fica de fora.
    snapshot.general_expenses.push(expense(700_00, 0, 1));
    // Prioridade baixa porém liberado explicitamente: entra.
    let mut released = expense(500_00, 100_00, 0);
    released.status = PaymentStatus::Released;
    snapshot.general_expenses.push(released);
    // Quitado não entra, seja qual for a prioridade.
    snapshot.general_expenses.push(expense(900_00, 900_00, 5));

    let view = LedgerService::new().aggregate(&snapshot);
    let summary = SummaryService::new(PolicyConfig::default()).summarize(&snapshot, &view);

    // 1000.00 + (500.00 - 100.00)
    assert_eq!(summary.liberado_pagamento, money(1_400_00));
}

#[test]
fn test_liberado_respects_custom_policy_floor() {
    let mut snapshot = base_snapshot();
    snapshot.general_expenses.push(expense(1_000_00, 0, 3));
    snapshot.general_expenses.push(expense(2_000_00, 0, 5));

    let policy = PolicyConfig {
        release_priority_min: 5,
        ..PolicyConfig::default()
    };
    let view = LedgerService::new().aggregate(&snapshot);
    let summary = SummaryService::new(policy).summarize(&snapshot, &view);

    assert_eq!(summary.liberado_pagamento, money(2_000_00));
}

#[test]
fn test_total_por_segmento_geral() {
    let mut snapshot = base_snapshot();
    let cobertura = service(0, 0);
    let id = cobertura.id;
    snapshot.services.push(cobertura);
    snapshot.general_expenses.push(expense(1_000_00, 0, 0)); // Material
    snapshot.general_expenses.push(expense(2_500_00, 0, 0)); // Material
    snapshot.service_payments.push(payment(id, 4_000_00, 0)); // Labor

    let view = LedgerService::new().aggregate(&snapshot);
    let summary = SummaryService::new(PolicyConfig::default()).summarize(&snapshot, &view);

    assert_eq!(
        summary.total_por_segmento_geral.get(&CostSegment::Material),
        Some(&money(3_500_00))
    );
    assert_eq!(
        summary.total_por_segmento_geral.get(&CostSegment::Labor),
        Some(&money(4_000_00))
    );
    assert_eq!(summary.total_por_segmento_geral.get(&CostSegment::Equipment), None);
}

#[test]
fn test_dashboard_service_derives_consistent_view() {
    let mut snapshot = base_snapshot();
    let cobertura = service(8_000_00, 2_000_00);
    let id = cobertura.id;
    snapshot.services.push(cobertura);
    snapshot.general_expenses.push(expense(1_500_00, 500_00, 4));
    snapshot.service_payments.push(payment(id, 3_000_00, 3_000_00));

    let dashboard = DashboardService::new(PolicyConfig::default()).derive(&snapshot);

    assert_eq!(dashboard.ledger.items.len(), 2);
    assert_eq!(dashboard.rollups.services.len(), 1);
    assert_eq!(
        dashboard.summary.residual,
        dashboard.summary.orcamento_total - dashboard.summary.valores_pagos
    );
    assert_eq!(dashboard.summary.valores_pagos, money(3_500_00));
}
