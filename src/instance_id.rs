//! Random display identifiers that survive a screen being recreated.

use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(Uuid);

impl InstanceId {
    /// A fresh random (v4) identifier.
    pub fn generate() -> Self {
        let id = Self(Uuid::new_v4());
        #[cfg(feature = "tracing")]
        tracing::debug!("Generated new instance id: {}", id);
        id
    }

    /// Reuses `saved` when it parses as a UUID, otherwise generates a new
    /// identifier.
    pub fn restore_or_generate(saved: Option<&str>) -> Self {
        match saved.map(Uuid::parse_str) {
            Some(Ok(uuid)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Restored instance id from saved state: {}", uuid);
                Self(uuid)
            }
            Some(Err(e)) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Discarding unparseable saved instance id: {}", e);
                #[cfg(not(feature = "tracing"))]
                let _ = e;
                Self::generate()
            }
            None => Self::generate(),
        }
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}
