// src/models/budget.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::expense::CostSegment;

/// Situação de um orçamento no fluxo de aprovação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetState {
    AwaitingApproval, // Aguardando aprovação
    Approved,         // Virou despesa geral
    Rejected,         // Descartado
}

/// Orçamento (cotação) aguardando decisão. Depois de decidido, nunca é
/// alterado: a aprovação materializa uma despesa geral nova.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingBudget {
    pub id: Uuid,

    pub description: String,
    pub supplier: Option<String>,

    pub amount: Decimal,
    pub segment: CostSegment,

    // Vínculo opcional com um serviço
    pub service_id: Option<Uuid>,

    pub observations: Option<String>,

    // Nomes dos anexos; o transporte de arquivos é da camada de fora
    pub attachments: Vec<String>,

    pub state: BudgetState,

    pub created_at: Option<DateTime<Utc>>,
}

/// Payload de criação de orçamento.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewBudgetPayload {
    #[validate(length(min = 3, message = "A descrição deve ter no mínimo 3 caracteres."))]
    pub description: String,

    pub supplier: Option<String>,

    #[validate(custom(function = validate_positive_amount))]
    pub amount: Decimal,

    pub segment: CostSegment,

    pub service_id: Option<Uuid>,

    pub observations: Option<String>,

    #[serde(default)]
    pub attachments: Vec<String>,
}

fn validate_positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount <= Decimal::ZERO {
        let mut error = ValidationError::new("amount_not_positive");
        error.message = Some("O valor do orçamento deve ser positivo.".into());
        return Err(error);
    }
    Ok(())
}
