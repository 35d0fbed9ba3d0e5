// src/models/project.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::budget::PendingBudget;
use crate::models::expense::GeneralExpense;
use crate::models::service::{Service, ServicePayment};

/// Obra (projeto) em andamento.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub client: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Snapshot completo de uma obra, buscado no início de cada visualização.
/// Toda derivação é função pura sobre este conjunto; mutações são
/// operações discretas seguidas de novo fetch (last-write-wins). O
/// núcleo nunca remenda agregados já derivados.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    pub project: Project,
    pub services: Vec<Service>,
    pub general_expenses: Vec<GeneralExpense>,
    pub service_payments: Vec<ServicePayment>,
    pub pending_budgets: Vec<PendingBudget>,
}
