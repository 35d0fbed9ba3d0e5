// src/common/error.rs

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::models::ledger::{LedgerKey, RecordIssue, RecordWarning};

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Erros de validação voltam tipados para o chamador (a UI renderiza
// mensagem por campo); falhas de consistência de dados são recuperadas
// localmente (registro excluído + aviso) e nunca derrubam a derivação.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Registro malformado ({key:?}): {issue:?}")]
    MalformedRecord { key: LedgerKey, issue: RecordIssue },

    #[error("O valor do pagamento deve ser positivo")]
    InvalidAmount,

    #[error("Pagamento de {amount} excede o saldo em aberto de {outstanding}")]
    OverpaymentRejected {
        amount: Decimal,
        outstanding: Decimal,
    },

    #[error("Item {key:?} não encontrado no snapshot")]
    UnknownEntityReference { key: LedgerKey },

    #[error("Orçamento {0} não encontrado")]
    BudgetNotFound(Uuid),

    #[error("Orçamento {0} já foi decidido e não pode ser alterado")]
    InvalidBudgetTransition(Uuid),

    #[error("Nenhuma sessão ativa")]
    NotAuthenticated,

    #[error("Sessão expirada")]
    SessionExpired,

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno")]
    Internal(#[from] anyhow::Error),
}

impl From<RecordWarning> for AppError {
    fn from(warning: RecordWarning) -> Self {
        AppError::MalformedRecord {
            key: warning.key,
            issue: warning.issue,
        }
    }
}
