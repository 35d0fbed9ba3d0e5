// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::expense::CostSegment;
use crate::models::ledger::{LedgerView, RecordWarning};

// 1. Resumo da Obra (Os Cards do Topo)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub orcamento_total: Decimal,     // Orçado (mão de obra + material)
    pub valores_pagos: Decimal,       // Pago, ambas as origens do razão
    pub liberado_pagamento: Decimal,  // Em fila de pagamento
    pub residual: Decimal,            // Orçado - pago
    pub total_por_segmento_geral: HashMap<CostSegment, Decimal>,
}

// 2. Rollup por Serviço
/// Totais de um segmento dentro de um serviço.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRollup {
    pub budgeted: Decimal,
    pub committed: Decimal, // Pago + em aberto (obrigação registrada)
    pub paid: Decimal,
    pub progress_pct: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRollup {
    pub service_id: Uuid,
    pub labor: SegmentRollup,
    pub material: SegmentRollup,
}

/// Rollups de todos os serviços + avisos de consistência (referências
/// a serviços que não existem no snapshot).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollupOutcome {
    pub services: Vec<ServiceRollup>,
    pub warnings: Vec<RecordWarning>,
}

/// Visão derivada completa de uma obra: razão, rollups e resumo,
/// produzidos em um único passe na ordem exigida.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDashboard {
    pub ledger: LedgerView,
    pub rollups: RollupOutcome,
    pub summary: ProjectSummary,
}
