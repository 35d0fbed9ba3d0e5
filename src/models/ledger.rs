// src/models/ledger.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::expense::{CostSegment, PaymentStatus};

// --- Enums ---

/// Origem de um item do razão unificado. A tag é imutável e determina
/// para qual entidade uma mutação é roteada, sem prefixo em string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerOrigin {
    Expense,
    ServicePayment,
}

/// Condição que excluiu (ou marcou) um registro durante uma derivação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordIssue {
    MissingDate,
    NegativeTotal,
    NegativePaid,
    UnknownService,
}

// --- Structs ---

/// Chave composta (origem + id) de um item do razão.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerKey {
    pub origin: LedgerOrigin,
    pub id: Uuid,
}

/// Item do razão unificado: projeção somente-leitura sobre despesas
/// gerais e pagamentos de serviço. Nunca é persistido: é rederivado
/// a cada carregamento da obra.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerItem {
    pub key: LedgerKey,
    pub date: NaiveDate,
    pub description: String,
    pub supplier: Option<String>,
    pub segment: CostSegment,
    pub total_amount: Decimal,
    pub amount_paid: Decimal,
    pub priority: i32,
    pub status: PaymentStatus,
    pub service_id: Option<Uuid>,
}

impl LedgerItem {
    pub fn outstanding(&self) -> Decimal {
        self.total_amount - self.amount_paid
    }
}

/// Aviso de consistência associado a um registro específico.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordWarning {
    pub key: LedgerKey,
    pub issue: RecordIssue,
}

/// Resultado da agregação: itens + avisos. Registro malformado é
/// excluído e aparece em `warnings`, nunca descartado em silêncio.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerView {
    pub items: Vec<LedgerItem>,
    pub warnings: Vec<RecordWarning>,
}

impl LedgerView {
    /// Partição "a pagar": saldo em aberto maior ou igual à tolerância.
    pub fn pending(&self, tolerance: Decimal) -> Vec<&LedgerItem> {
        self.items
            .iter()
            .filter(|item| item.outstanding() >= tolerance)
            .collect()
    }

    /// Partição "pago": saldo em aberto abaixo da tolerância.
    /// Junto com `pending`, cobre o razão inteiro sem sobreposição.
    pub fn paid(&self, tolerance: Decimal) -> Vec<&LedgerItem> {
        self.items
            .iter()
            .filter(|item| item.outstanding() < tolerance)
            .collect()
    }
}

// --- Payloads de mutação ---

/// Pedido de pagamento parcial contra um item do razão.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyPaymentRequest {
    pub item_origin: LedgerOrigin,
    pub item_id: Uuid,
    pub amount_to_apply: Decimal,
}

impl ApplyPaymentRequest {
    pub fn key(&self) -> LedgerKey {
        LedgerKey {
            origin: self.item_origin,
            id: self.item_id,
        }
    }
}

/// Pedido de alteração de prioridade de um item do razão.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePriorityRequest {
    pub item_origin: LedgerOrigin,
    pub item_id: Uuid,

    #[validate(range(min = 0, max = 5, message = "A prioridade deve estar entre 0 e 5."))]
    pub priority: i32,
}
