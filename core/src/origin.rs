//! Origin identifiers.
//!
//! The service identifies callers by an opaque UUID rather than a free-form
//! name. The identifier is name-based (v5), so the same origin payload always
//! maps to the same identifier across processes.

use uuid::Uuid;

use crate::error::ConfigError;

const ORIGIN_NAMESPACE: Uuid = Uuid::from_u128(0x6f2c_1d4e_8a73_4b0f_9e51_c0d7_a2b3_f418);

pub fn derive(payload: &str) -> Result<Uuid, ConfigError> {
    let payload = payload.trim();
    if payload.is_empty() {
        return Err(ConfigError::OriginRequired);
    }
    Ok(Uuid::new_v5(&ORIGIN_NAMESPACE, payload.as_bytes()))
}
