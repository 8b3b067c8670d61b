//! Write-once positive parameter slot.

use clustering_core::types::{ClusterError, Result};
use tracing::debug;

/// A strictly positive parameter that may be set once.
///
/// Setting the value already held is a no-op; setting a different one is a
/// state error.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PositiveParam {
    name: &'static str,
    value: Option<f64>,
}

impl PositiveParam {
    pub(crate) const fn unset(name: &'static str) -> Self {
        Self { name, value: None }
    }

    pub(crate) fn get(&self) -> Result<f64> {
        self.value.ok_or_else(|| ClusterError::not_configured(self.name))
    }

    pub(crate) fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub(crate) fn set(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(ClusterError::Validation(format!(
                "{} must be finite, got {value}",
                self.name
            )));
        }
        if value <= 0.0 {
            return Err(ClusterError::non_positive(self.name, value));
        }
        match self.value {
            Some(current) if current == value => Ok(()),
            Some(current) => Err(ClusterError::State(format!(
                "{} is already set to {current}",
                self.name
            ))),
            None => {
                debug!(param = self.name, value, "parameter configured");
                self.value = Some(value);
                Ok(())
            }
        }
    }
}
