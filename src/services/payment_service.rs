// src/services/payment_service.rs

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use validator::Validate;

use crate::common::error::AppError;
use crate::config::PolicyConfig;
use crate::models::expense::{GeneralExpense, PaymentStatus};
use crate::models::ledger::{ApplyPaymentRequest, LedgerKey, LedgerOrigin, UpdatePriorityRequest};
use crate::models::project::ProjectSnapshot;
use crate::models::service::ServicePayment;
use crate::session::SessionContext;

/// Entidade atualizada por uma mutação, devolvida ao chamador para
/// exibição imediata. A projeção do razão não é remendada aqui: ela é
/// recalculada inteira no próximo carregamento.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "origin", content = "entity", rename_all = "snake_case")]
pub enum UpdatedEntity {
    Expense(GeneralExpense),
    ServicePayment(ServicePayment),
}

/// Motor de pagamento parcial: valida e aplica um pagamento incremental
/// contra o saldo em aberto de um único item do razão.
#[derive(Clone)]
pub struct PaymentService {
    policy: PolicyConfig,
}

impl PaymentService {
    pub fn new(policy: PolicyConfig) -> Self {
        Self { policy }
    }

    /// Aplica um pagamento parcial. Nada é mutado quando a validação
    /// falha; em caso de sucesso, só a entidade de origem muda.
    pub fn apply_payment(
        &self,
        snapshot: &mut ProjectSnapshot,
        session: &SessionContext,
        request: &ApplyPaymentRequest,
    ) -> Result<UpdatedEntity, AppError> {
        session.ensure_active(Utc::now())?;

        if request.amount_to_apply <= Decimal::ZERO {
            return Err(AppError::InvalidAmount);
        }

        let tolerance = self.policy.rounding_tolerance;
        let key = request.key();

        match request.item_origin {
            LedgerOrigin::Expense => {
                let expense = find_expense(snapshot, key)?;
                apply_to_balance(
                    expense.total_amount,
                    &mut expense.amount_paid,
                    &mut expense.status,
                    request.amount_to_apply,
                    tolerance,
                )?;
                tracing::info!(
                    "💰 Pagamento de {} aplicado à despesa {}",
                    request.amount_to_apply,
                    expense.id
                );
                Ok(UpdatedEntity::Expense(expense.clone()))
            }
            LedgerOrigin::ServicePayment => {
                let payment = find_payment(snapshot, key)?;
                apply_to_balance(
                    payment.total_amount,
                    &mut payment.amount_paid,
                    &mut payment.status,
                    request.amount_to_apply,
                    tolerance,
                )?;
                tracing::info!(
                    "💰 Pagamento de {} aplicado ao pagamento de serviço {}",
                    request.amount_to_apply,
                    payment.id
                );
                Ok(UpdatedEntity::ServicePayment(payment.clone()))
            }
        }
    }

    /// Quita o item de uma vez: equivale a aplicar exatamente o saldo
    /// em aberto.
    pub fn settle_remaining(
        &self,
        snapshot: &mut ProjectSnapshot,
        session: &SessionContext,
        key: LedgerKey,
    ) -> Result<UpdatedEntity, AppError> {
        session.ensure_active(Utc::now())?;

        let outstanding = match key.origin {
            LedgerOrigin::Expense => find_expense(snapshot, key)?.outstanding(),
            LedgerOrigin::ServicePayment => find_payment(snapshot, key)?.outstanding(),
        };

        let request = ApplyPaymentRequest {
            item_origin: key.origin,
            item_id: key.id,
            amount_to_apply: outstanding,
        };
        self.apply_payment(snapshot, session, &request)
    }

    /// Altera a prioridade de pagamento de um item (0 a 5).
    pub fn update_priority(
        &self,
        snapshot: &mut ProjectSnapshot,
        session: &SessionContext,
        request: &UpdatePriorityRequest,
    ) -> Result<UpdatedEntity, AppError> {
        session.ensure_active(Utc::now())?;
        request.validate()?;

        let key = LedgerKey {
            origin: request.item_origin,
            id: request.item_id,
        };

        match request.item_origin {
            LedgerOrigin::Expense => {
                let expense = find_expense(snapshot, key)?;
                expense.priority = request.priority;
                Ok(UpdatedEntity::Expense(expense.clone()))
            }
            LedgerOrigin::ServicePayment => {
                let payment = find_payment(snapshot, key)?;
                payment.priority = request.priority;
                Ok(UpdatedEntity::ServicePayment(payment.clone()))
            }
        }
    }
}

fn find_expense(
    snapshot: &mut ProjectSnapshot,
    key: LedgerKey,
) -> Result<&mut GeneralExpense, AppError> {
    snapshot
        .general_expenses
        .iter_mut()
        .find(|expense| expense.id == key.id)
        .ok_or(AppError::UnknownEntityReference { key })
}

fn find_payment(
    snapshot: &mut ProjectSnapshot,
    key: LedgerKey,
) -> Result<&mut ServicePayment, AppError> {
    snapshot
        .service_payments
        .iter_mut()
        .find(|payment| payment.id == key.id)
        .ok_or(AppError::UnknownEntityReference { key })
}

/// Regra central do pagamento parcial. O excedente tolerado fica
/// estritamente abaixo de ε: pagar 500.01 num saldo de 500.00 com
/// ε = 0.01 é recusado.
fn apply_to_balance(
    total: Decimal,
    paid: &mut Decimal,
    status: &mut PaymentStatus,
    amount: Decimal,
    tolerance: Decimal,
) -> Result<(), AppError> {
    let outstanding = total - *paid;
    if amount - outstanding >= tolerance {
        return Err(AppError::OverpaymentRejected {
            amount,
            outstanding,
        });
    }

    *paid += amount;
    *status = if total - *paid < tolerance {
        PaymentStatus::Paid
    } else {
        PaymentStatus::Partial
    };

    Ok(())
}
