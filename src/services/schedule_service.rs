// src/services/schedule_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::common::math::{clamp_pct, round_pct};
use crate::config::PolicyConfig;
use crate::models::schedule::{
    EvmClassification, EvmResult, MeasurementMode, ScheduleStage, ScheduleStatus,
    ScheduleStatusResult,
};

/// Motor de status de cronograma: independente dos motores financeiros,
/// avalia cada etapa contra "hoje".
#[derive(Clone)]
pub struct ScheduleService {
    policy: PolicyConfig,
}

impl ScheduleService {
    pub fn new(policy: PolicyConfig) -> Self {
        Self { policy }
    }

    pub fn evaluate(&self, stage: &ScheduleStage, today: NaiveDate) -> ScheduleStatusResult {
        let completion = self.effective_completion(stage);

        ScheduleStatusResult {
            stage_id: stage.id,
            status: self.classify_status(stage, completion, today),
            days_remaining: stage.planned_end.map(|end| (end - today).num_days()),
            evm: self.evaluate_evm(stage, completion),
        }
    }

    /// Percentual efetivo de conclusão. No modo AREA_QUANTITY o valor é
    /// derivado das quantidades e o percentual manual é ignorado; no
    /// modo MANUAL_PERCENTAGE o valor informado é limitado a [0, 100].
    pub fn effective_completion(&self, stage: &ScheduleStage) -> Decimal {
        match stage.mode {
            MeasurementMode::ManualPercentage => clamp_pct(stage.completion_pct),
            MeasurementMode::AreaQuantity => match (stage.executed_qty, stage.total_qty) {
                (Some(executed), Some(total)) if total > Decimal::ZERO => {
                    let raw = Decimal::ONE_HUNDRED * executed / total;
                    clamp_pct(Decimal::from(round_pct(raw)))
                }
                _ => Decimal::ZERO,
            },
        }
    }

    fn classify_status(
        &self,
        stage: &ScheduleStage,
        completion: Decimal,
        today: NaiveDate,
    ) -> ScheduleStatus {
        // Concluída vence qualquer outra regra.
        if completion >= Decimal::ONE_HUNDRED {
            return ScheduleStatus::Completed;
        }

        let (Some(start), Some(end)) = (stage.planned_start, stage.planned_end) else {
            return ScheduleStatus::NoDate;
        };

        if today < start {
            return ScheduleStatus::Scheduled;
        }

        // Passou do fim sem concluir: atrasada, independente do ritmo.
        if today > end {
            return ScheduleStatus::Delayed;
        }

        let total_days = (end - start).num_days();
        let elapsed = (today - start).num_days();

        // Janela de duração zero conta como totalmente decorrida.
        let expected = if total_days <= 0 {
            Decimal::ONE_HUNDRED
        } else {
            Decimal::from(100 * elapsed) / Decimal::from(total_days)
        };

        if completion < expected - self.policy.schedule_slack_pct {
            ScheduleStatus::Delayed
        } else {
            ScheduleStatus::OnTrack
        }
    }

    /// Variação de custo por valor agregado. Informativa: não realimenta
    /// o status da etapa.
    fn evaluate_evm(&self, stage: &ScheduleStage, completion: Decimal) -> EvmResult {
        let earned_value = stage.budgeted_amount * completion / Decimal::ONE_HUNDRED;
        let cost_variance = earned_value - stage.amount_paid;

        let variance_pct = if stage.budgeted_amount > Decimal::ZERO {
            Decimal::ONE_HUNDRED * cost_variance / stage.budgeted_amount
        } else {
            Decimal::ZERO
        };

        let slack = self.policy.evm_slack_pct;
        let classification = if variance_pct > slack {
            EvmClassification::Ahead
        } else if variance_pct < -slack {
            EvmClassification::CriticalOverrun
        } else if variance_pct < Decimal::ZERO {
            EvmClassification::ModerateOverrun
        } else {
            EvmClassification::OnTrack
        };

        EvmResult {
            earned_value,
            cost_variance,
            variance_pct,
            classification,
        }
    }
}
