//! Per-user creation quotas

use crate::error::{DomainError, EntityKind};

/// Fail when `count` existing rows already reach `limit`
pub(crate) fn ensure_below(entity: EntityKind, count: u64, limit: u64) -> Result<(), DomainError> {
    if count >= limit {
        tracing::warn!(%entity, count, limit, "Creation rejected by quota");
        return Err(DomainError::QuotaExceeded { entity, limit });
    }
    Ok(())
}
