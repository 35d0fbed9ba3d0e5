// src/services/budget_service.rs

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::common::error::AppError;
use crate::models::budget::{BudgetState, NewBudgetPayload, PendingBudget};
use crate::models::expense::{GeneralExpense, PaymentStatus};
use crate::models::project::ProjectSnapshot;
use crate::session::SessionContext;

/// Ciclo de vida do orçamento: criado aguardando aprovação, depois
/// aprovado (vira despesa geral) ou recusado. Nunca alterado após a
/// decisão.
#[derive(Clone, Default)]
pub struct BudgetService;

impl BudgetService {
    pub fn new() -> Self {
        Self
    }

    /// Cria um orçamento aguardando aprovação.
    pub fn create(
        &self,
        snapshot: &mut ProjectSnapshot,
        session: &SessionContext,
        payload: NewBudgetPayload,
    ) -> Result<PendingBudget, AppError> {
        session.ensure_active(Utc::now())?;
        payload.validate()?;

        let budget = PendingBudget {
            id: Uuid::new_v4(),
            description: payload.description,
            supplier: payload.supplier,
            amount: payload.amount,
            segment: payload.segment,
            service_id: payload.service_id,
            observations: payload.observations,
            attachments: payload.attachments,
            state: BudgetState::AwaitingApproval,
            created_at: Some(Utc::now()),
        };

        snapshot.pending_budgets.push(budget.clone());
        Ok(budget)
    }

    /// Aprova o orçamento e materializa a despesa geral correspondente,
    /// anexada ao snapshot com a data de hoje e saldo todo em aberto.
    pub fn approve(
        &self,
        snapshot: &mut ProjectSnapshot,
        session: &SessionContext,
        budget_id: Uuid,
    ) -> Result<GeneralExpense, AppError> {
        session.ensure_active(Utc::now())?;

        let budget = find_budget(snapshot, budget_id)?;
        if budget.state != BudgetState::AwaitingApproval {
            return Err(AppError::InvalidBudgetTransition(budget_id));
        }
        budget.state = BudgetState::Approved;

        let expense = GeneralExpense {
            id: Uuid::new_v4(),
            date: Some(Utc::now().date_naive()),
            description: budget.description.clone(),
            supplier: budget.supplier.clone(),
            total_amount: budget.amount,
            amount_paid: Decimal::ZERO,
            priority: 0,
            segment: budget.segment,
            status: PaymentStatus::Pending,
            service_id: budget.service_id,
            created_at: Some(Utc::now()),
        };

        snapshot.general_expenses.push(expense.clone());
        tracing::info!(
            "📋 Orçamento {} aprovado; despesa {} criada",
            budget_id,
            expense.id
        );
        Ok(expense)
    }

    /// Recusa o orçamento. Estado final: nenhum efeito no razão.
    pub fn reject(
        &self,
        snapshot: &mut ProjectSnapshot,
        session: &SessionContext,
        budget_id: Uuid,
    ) -> Result<(), AppError> {
        session.ensure_active(Utc::now())?;

        let budget = find_budget(snapshot, budget_id)?;
        if budget.state != BudgetState::AwaitingApproval {
            return Err(AppError::InvalidBudgetTransition(budget_id));
        }
        budget.state = BudgetState::Rejected;

        tracing::info!("📋 Orçamento {} recusado", budget_id);
        Ok(())
    }
}

fn find_budget(
    snapshot: &mut ProjectSnapshot,
    budget_id: Uuid,
) -> Result<&mut PendingBudget, AppError> {
    snapshot
        .pending_budgets
        .iter_mut()
        .find(|budget| budget.id == budget_id)
        .ok_or(AppError::BudgetNotFound(budget_id))
}
