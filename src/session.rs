// src/session.rs

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::common::error::AppError;

// Contexto de sessão explícito: o login preenche, o logout limpa.
// Substitui o estado global de token; toda operação que exige
// autorização recebe o contexto como argumento, sem lookup ambiente.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    credentials: Option<Credentials>,
}

#[derive(Debug, Clone)]
struct Credentials {
    user_id: Uuid,
    token: String,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self { credentials: None }
    }

    /// Preenche o contexto após um login bem-sucedido na camada de transporte.
    /// O token é opaco para o núcleo: quem o interpreta é o transporte.
    pub fn login(&mut self, user_id: Uuid, token: impl Into<String>, ttl: Duration) {
        let now = Utc::now();
        self.credentials = Some(Credentials {
            user_id,
            token: token.into(),
            issued_at: now,
            expires_at: now + ttl,
        });
        tracing::info!("🔑 Sessão iniciada para o usuário {}", user_id);
    }

    /// Descarta as credenciais.
    pub fn logout(&mut self) {
        self.credentials = None;
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.credentials.as_ref().map(|c| c.user_id)
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.credentials.as_ref().map(|c| c.issued_at)
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.ensure_active(now).is_ok()
    }

    /// Garante sessão ativa antes de uma mutação.
    pub fn ensure_active(&self, now: DateTime<Utc>) -> Result<(), AppError> {
        match &self.credentials {
            None => Err(AppError::NotAuthenticated),
            Some(c) if now >= c.expires_at => Err(AppError::SessionExpired),
            Some(_) => Ok(()),
        }
    }
}

impl SessionContext {
    /// Atalho para construir um contexto já autenticado, usado quando a
    /// camada de transporte entrega o token pronto.
    pub fn authenticated(user_id: Uuid, token: impl Into<String>, ttl: Duration) -> Self {
        let mut session = Self::new();
        session.login(user_id, token, ttl);
        session
    }
}
