// src/services/rollup_service.rs

use std::collections::HashSet;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::common::math::round_pct;
use crate::models::dashboard::{RollupOutcome, SegmentRollup, ServiceRollup};
use crate::models::expense::CostSegment;
use crate::models::ledger::{LedgerKey, LedgerOrigin, RecordIssue, RecordWarning};
use crate::models::project::ProjectSnapshot;
use crate::models::service::Service;

/// Motor de rollup por segmento: para cada serviço, totaliza orçado,
/// comprometido e pago em mão de obra e material.
#[derive(Clone, Default)]
pub struct RollupService;

impl RollupService {
    pub fn new() -> Self {
        Self
    }

    /// Recomputação idempotente: o mesmo snapshot produz sempre o mesmo
    /// resultado. Referências a serviços inexistentes são excluídas dos
    /// rollups e devolvidas como aviso, nunca derrubam a derivação.
    pub fn rollup(&self, snapshot: &ProjectSnapshot) -> RollupOutcome {
        let known: HashSet<Uuid> = snapshot.services.iter().map(|s| s.id).collect();
        let mut warnings = Vec::new();

        for payment in &snapshot.service_payments {
            if !known.contains(&payment.service_id) {
                let warning = RecordWarning {
                    key: LedgerKey {
                        origin: LedgerOrigin::ServicePayment,
                        id: payment.id,
                    },
                    issue: RecordIssue::UnknownService,
                };
                tracing::warn!("Pagamento fora dos rollups: {:?}", warning);
                warnings.push(warning);
            }
        }

        for expense in &snapshot.general_expenses {
            if let Some(service_id) = expense.service_id {
                if !known.contains(&service_id) {
                    let warning = RecordWarning {
                        key: LedgerKey {
                            origin: LedgerOrigin::Expense,
                            id: expense.id,
                        },
                        issue: RecordIssue::UnknownService,
                    };
                    tracing::warn!("Despesa vinculada fora dos rollups: {:?}", warning);
                    warnings.push(warning);
                }
            }
        }

        let services = snapshot
            .services
            .iter()
            .map(|service| ServiceRollup {
                service_id: service.id,
                labor: segment_rollup(snapshot, service, CostSegment::Labor, service.budget_labor),
                material: segment_rollup(
                    snapshot,
                    service,
                    CostSegment::Material,
                    service.budget_material,
                ),
            })
            .collect();

        RollupOutcome { services, warnings }
    }
}

/// Totais de um segmento de um serviço:
/// - comprometido soma os pagamentos do serviço e as despesas gerais
///   vinculadas a ele nesse segmento;
/// - pago soma só os pagamentos do próprio serviço (o dinheiro das
///   despesas vinculadas já é acompanhado pelo razão unificado, não
///   entra duas vezes).
fn segment_rollup(
    snapshot: &ProjectSnapshot,
    service: &Service,
    segment: CostSegment,
    budgeted: Decimal,
) -> SegmentRollup {
    let mut committed = Decimal::ZERO;
    let mut paid = Decimal::ZERO;

    for payment in &snapshot.service_payments {
        if payment.service_id == service.id && payment.segment == segment {
            committed += payment.total_amount;
            paid += payment.amount_paid;
        }
    }

    for expense in &snapshot.general_expenses {
        if expense.service_id == Some(service.id) && expense.segment == segment {
            committed += expense.total_amount;
        }
    }

    // A razão bruta pode passar de 100 quando o pago excede o orçado;
    // isso é um sinal para o painel, não um erro. Segmento sem orçamento
    // reporta 0 para não dividir por zero.
    let progress_pct = if budgeted > Decimal::ZERO {
        round_pct(Decimal::ONE_HUNDRED * paid / budgeted)
    } else {
        0
    };

    SegmentRollup {
        budgeted,
        committed,
        paid,
        progress_pct,
    }
}
