// src/models/service.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::expense::{CostSegment, PaymentStatus};

/// Serviço contratado da obra, com orçamentos independentes de
/// mão de obra e material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,

    pub name: String,

    // Responsável pela execução (empreiteiro, equipe própria...)
    pub responsible: Option<String>,

    // Orçamentos independentes por segmento
    pub budget_labor: Decimal,
    pub budget_material: Decimal,

    pub created_at: Option<DateTime<Utc>>,
}

/// Pagamento lançado diretamente contra um serviço. A descrição exibida
/// é derivada do serviço dono, não armazenada aqui.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePayment {
    pub id: Uuid,

    // Dono (exatamente um serviço)
    pub service_id: Uuid,

    pub date: Option<NaiveDate>,
    pub supplier: Option<String>,

    pub total_amount: Decimal,
    pub amount_paid: Decimal,

    // Discriminador de segmento (mão de obra | material)
    pub segment: CostSegment,

    pub priority: i32,
    pub status: PaymentStatus,

    pub created_at: Option<DateTime<Utc>>,
}

impl ServicePayment {
    pub fn outstanding(&self) -> Decimal {
        self.total_amount - self.amount_paid
    }
}
