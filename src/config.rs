// src/config.rs

use rust_decimal::Decimal;
use std::env;

// Limiares de política do domínio. Os motores nunca leem literais:
// os valores chegam por aqui (env ou defaults) e os testes conseguem
// exercitar os limites com precisão.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    /// Tolerância de arredondamento (ε) para comparações monetárias.
    pub rounding_tolerance: Decimal,

    /// Folga, em pontos percentuais, antes de marcar uma etapa como atrasada.
    pub schedule_slack_pct: Decimal,

    /// Folga, em pontos percentuais, da classificação de variação de custo (EVM).
    pub evm_slack_pct: Decimal,

    /// Prioridade mínima para um item pendente entrar no "liberado para pagamento".
    pub release_priority_min: i32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            rounding_tolerance: Decimal::new(1, 2), // 0.01
            schedule_slack_pct: Decimal::from(10),
            evm_slack_pct: Decimal::from(10),
            release_priority_min: 3,
        }
    }
}

impl PolicyConfig {
    /// Carrega a política do ambiente (arquivo .env ou variáveis OBRAS_*),
    /// caindo nos defaults quando ausentes ou inválidas.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base = Self::default();
        let config = Self {
            rounding_tolerance: env_decimal("OBRAS_ROUNDING_TOLERANCE", base.rounding_tolerance),
            schedule_slack_pct: env_decimal("OBRAS_SCHEDULE_SLACK_PCT", base.schedule_slack_pct),
            evm_slack_pct: env_decimal("OBRAS_EVM_SLACK_PCT", base.evm_slack_pct),
            release_priority_min: env_i32("OBRAS_RELEASE_PRIORITY_MIN", base.release_priority_min),
        };

        tracing::info!("✅ Política de cálculo carregada: {:?}", config);
        config
    }
}

fn env_decimal(key: &str, default: Decimal) -> Decimal {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn env_i32(key: &str, default: i32) -> i32 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Inicializa o logger. Chamado pelo binário hospedeiro (ou por testes
/// que queiram saída no console), nunca pelos motores.
pub fn init_tracing() {
    tracing_subscriber::fmt().with_target(false).compact().init();
}
