// src/services/dashboard_service.rs

use crate::config::PolicyConfig;
use crate::models::dashboard::ProjectDashboard;
use crate::models::project::ProjectSnapshot;
use crate::services::ledger_service::LedgerService;
use crate::services::rollup_service::RollupService;
use crate::services::summary_service::SummaryService;

/// Monta a visão completa do painel em um passe, na ordem exigida:
/// o agregador roda antes do rollup e do resumo, que consomem a sua
/// saída. O cronograma é avaliado à parte (não depende do razão).
#[derive(Clone)]
pub struct DashboardService {
    ledger: LedgerService,
    rollup: RollupService,
    summary: SummaryService,
}

impl DashboardService {
    pub fn new(policy: PolicyConfig) -> Self {
        Self {
            ledger: LedgerService::new(),
            rollup: RollupService::new(),
            summary: SummaryService::new(policy),
        }
    }

    /// Derivação pura sobre o snapshot: pode ser chamada de novo a
    /// qualquer momento (inclusive sobre um snapshot antigo porém
    /// completo) e produz sempre o mesmo resultado.
    pub fn derive(&self, snapshot: &ProjectSnapshot) -> ProjectDashboard {
        let ledger = self.ledger.aggregate(snapshot);
        let rollups = self.rollup.rollup(snapshot);
        let summary = self.summary.summarize(snapshot, &ledger);

        tracing::debug!(
            "📊 Painel derivado: {} itens no razão, {} avisos",
            ledger.items.len(),
            ledger.warnings.len() + rollups.warnings.len()
        );

        ProjectDashboard {
            ledger,
            rollups,
            summary,
        }
    }
}
