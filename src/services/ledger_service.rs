// src/services/ledger_service.rs

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::expense::GeneralExpense;
use crate::models::ledger::{
    LedgerItem, LedgerKey, LedgerOrigin, LedgerView, RecordIssue, RecordWarning,
};
use crate::models::project::ProjectSnapshot;
use crate::models::service::ServicePayment;

/// Agregador do razão: projeta despesas gerais e pagamentos de serviço
/// em uma sequência única de itens etiquetados por origem.
#[derive(Clone, Default)]
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Projeção pura, sem filtro: a completude do razão é pré-condição
    /// para o rollup e o resumo. A ordem do snapshot é preservada
    /// (despesas primeiro, depois pagamentos de serviço), então filtrar
    /// de volta por origem reproduz os conjuntos originais.
    pub fn aggregate(&self, snapshot: &ProjectSnapshot) -> LedgerView {
        let mut items = Vec::with_capacity(
            snapshot.general_expenses.len() + snapshot.service_payments.len(),
        );
        let mut warnings = Vec::new();

        let service_names: HashMap<Uuid, &str> = snapshot
            .services
            .iter()
            .map(|service| (service.id, service.name.as_str()))
            .collect();

        for expense in &snapshot.general_expenses {
            match project_expense(expense) {
                Ok(item) => items.push(item),
                Err(warning) => {
                    tracing::warn!("Registro excluído do razão: {:?}", warning);
                    warnings.push(warning);
                }
            }
        }

        for payment in &snapshot.service_payments {
            match project_payment(payment, &service_names) {
                Ok((item, warning)) => {
                    // Dono desconhecido não tira o pagamento do razão
                    // (a completude manda); só marca a inconsistência.
                    if let Some(warning) = warning {
                        tracing::warn!("Pagamento com serviço desconhecido: {:?}", warning);
                        warnings.push(warning);
                    }
                    items.push(item);
                }
                Err(warning) => {
                    tracing::warn!("Registro excluído do razão: {:?}", warning);
                    warnings.push(warning);
                }
            }
        }

        LedgerView { items, warnings }
    }
}

fn project_expense(expense: &GeneralExpense) -> Result<LedgerItem, RecordWarning> {
    let key = LedgerKey {
        origin: LedgerOrigin::Expense,
        id: expense.id,
    };

    let date = check_amounts(key, expense.date, expense.total_amount, expense.amount_paid)?;

    Ok(LedgerItem {
        key,
        date,
        description: expense.description.clone(),
        supplier: expense.supplier.clone(),
        segment: expense.segment,
        total_amount: expense.total_amount,
        amount_paid: expense.amount_paid,
        priority: expense.priority,
        status: expense.status,
        service_id: expense.service_id,
    })
}

fn project_payment(
    payment: &ServicePayment,
    service_names: &HashMap<Uuid, &str>,
) -> Result<(LedgerItem, Option<RecordWarning>), RecordWarning> {
    let key = LedgerKey {
        origin: LedgerOrigin::ServicePayment,
        id: payment.id,
    };

    let date = check_amounts(key, payment.date, payment.total_amount, payment.amount_paid)?;

    let (description, warning) = match service_names.get(&payment.service_id) {
        Some(name) => (format!("Pagamento do serviço {}", name), None),
        None => (
            "Pagamento de serviço removido".to_string(),
            Some(RecordWarning {
                key,
                issue: RecordIssue::UnknownService,
            }),
        ),
    };

    let item = LedgerItem {
        key,
        date,
        description,
        supplier: payment.supplier.clone(),
        segment: payment.segment,
        total_amount: payment.total_amount,
        amount_paid: payment.amount_paid,
        priority: payment.priority,
        status: payment.status,
        service_id: Some(payment.service_id),
    };

    Ok((item, warning))
}

/// Valida os campos que tornam um registro projetável: data presente e
/// valores não negativos.
fn check_amounts(
    key: LedgerKey,
    date: Option<NaiveDate>,
    total: Decimal,
    paid: Decimal,
) -> Result<NaiveDate, RecordWarning> {
    let Some(date) = date else {
        return Err(RecordWarning {
            key,
            issue: RecordIssue::MissingDate,
        });
    };
    if total < Decimal::ZERO {
        return Err(RecordWarning {
            key,
            issue: RecordIssue::NegativeTotal,
        });
    }
    if paid < Decimal::ZERO {
        return Err(RecordWarning {
            key,
            issue: RecordIssue::NegativePaid,
        });
    }
    Ok(date)
}
