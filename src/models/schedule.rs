// src/models/schedule.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Enums ---

/// Como o avanço físico da etapa é medido.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeasurementMode {
    /// Percentual informado diretamente pelo usuário.
    ManualPercentage,
    /// Percentual derivado de quantidade executada / quantidade total.
    AreaQuantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleStatus {
    NoDate,    // Sem data de início ou fim
    Scheduled, // Ainda não começou
    OnTrack,
    Delayed,
    Completed,
}

/// Classificação informativa da variação de custo (EVM). Não realimenta
/// o status principal da etapa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvmClassification {
    OnTrack,
    Ahead,
    ModerateOverrun,
    CriticalOverrun,
}

// --- Structs ---

/// Etapa do cronograma físico-financeiro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStage {
    pub id: Uuid,
    pub name: String,

    // Ordem de exibição no cronograma
    pub position: i32,

    pub mode: MeasurementMode,

    // Planejado
    pub planned_start: Option<NaiveDate>,
    pub planned_end: Option<NaiveDate>,

    // Executado
    pub actual_start: Option<NaiveDate>,
    pub actual_end: Option<NaiveDate>,

    /// Percentual informado manualmente (modo MANUAL_PERCENTAGE).
    pub completion_pct: Decimal,

    /// Quantidades do modo AREA_QUANTITY.
    pub executed_qty: Option<Decimal>,
    pub total_qty: Option<Decimal>,

    // Valores
    pub budgeted_amount: Decimal,
    pub amount_paid: Decimal,
}

/// Variação de custo por valor agregado.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvmResult {
    pub earned_value: Decimal,
    pub cost_variance: Decimal,
    pub variance_pct: Decimal,
    pub classification: EvmClassification,
}

/// Saúde de cronograma de uma etapa, avaliada contra "hoje".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStatusResult {
    pub stage_id: Uuid,
    pub status: ScheduleStatus,
    pub days_remaining: Option<i64>,
    pub evm: EvmResult,
}
