// src/services/summary_service.rs

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::models::dashboard::ProjectSummary;
use crate::models::expense::{CostSegment, PaymentStatus};
use crate::models::ledger::LedgerView;
use crate::models::project::ProjectSnapshot;

/// Calculadora de resumo: os quatro KPIs do topo do painel, recomputados
/// do zero a cada carregamento (centenas de itens por obra, não milhões).
#[derive(Clone)]
pub struct SummaryService {
    policy: PolicyConfig,
}

impl SummaryService {
    pub fn new(policy: PolicyConfig) -> Self {
        Self { policy }
    }

    /// O agregador precisa rodar antes: o resumo consome a visão do razão.
    pub fn summarize(&self, snapshot: &ProjectSnapshot, ledger: &LedgerView) -> ProjectSummary {
        let orcamento_total: Decimal = snapshot
            .services
            .iter()
            .map(|service| service.budget_labor + service.budget_material)
            .sum();

        let valores_pagos: Decimal = ledger.items.iter().map(|item| item.amount_paid).sum();

        // Regra de fila de pagamento: item pendente com prioridade acima
        // do piso configurado, ou explicitamente liberado.
        let tolerance = self.policy.rounding_tolerance;
        let liberado_pagamento: Decimal = ledger
            .items
            .iter()
            .filter(|item| item.outstanding() >= tolerance)
            .filter(|item| {
                item.priority >= self.policy.release_priority_min
                    || item.status == PaymentStatus::Released
            })
            .map(|item| item.outstanding())
            .sum();

        let residual = orcamento_total - valores_pagos;

        let mut total_por_segmento_geral: HashMap<CostSegment, Decimal> = HashMap::new();
        for item in &ledger.items {
            *total_por_segmento_geral
                .entry(item.segment)
                .or_insert(Decimal::ZERO) += item.total_amount;
        }

        ProjectSummary {
            orcamento_total,
            valores_pagos,
            liberado_pagamento,
            residual,
            total_por_segmento_geral,
        }
    }
}
