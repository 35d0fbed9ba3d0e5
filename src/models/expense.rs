// src/models/expense.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Enums ---

/// Segmento de custo usado para agrupar orçamento e gasto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostSegment {
    Labor,     // Mão de obra
    Material,  // Material
    Equipment, // Equipamento
    Services,  // Serviços gerais
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,  // A Pagar
    Partial,  // Pago Parcialmente
    Released, // Liberado para pagamento
    Paid,     // Quitado
}

// --- Structs ---

/// Despesa geral da obra. Pode ou não estar vinculada a um serviço
/// (vínculo fraco: o serviço não é dono da despesa).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralExpense {
    pub id: Uuid,

    // Pode vir ausente de registros antigos; o agregador trata a
    // ausência como registro malformado.
    pub date: Option<NaiveDate>,

    pub description: String,
    pub supplier: Option<String>,

    // Valores
    pub total_amount: Decimal,
    pub amount_paid: Decimal, // Quanto já foi pago

    // Prioridade de pagamento (0 a 5)
    pub priority: i32,

    pub segment: CostSegment,
    pub status: PaymentStatus,

    // Vínculo fraco com um serviço
    pub service_id: Option<Uuid>,

    pub created_at: Option<DateTime<Utc>>,
}

impl GeneralExpense {
    /// Saldo em aberto.
    pub fn outstanding(&self) -> Decimal {
        self.total_amount - self.amount_paid
    }
}
