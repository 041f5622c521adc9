use serde::{Deserialize, Serialize};

use crate::attachment::MAX_ATTACHMENT_BYTES;
use crate::currency::Currency;
use crate::error::{AdminError, Result};

/// Console settings. Every field has a default so partial JSON works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Stock counts below this are "Low Stock".
    pub low_stock_threshold: u32,
    pub currency: Currency,
    pub max_attachment_bytes: u64,
    /// How long a toast stays up before dismissing itself.
    pub toast_timeout_ms: u32,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: 10,
            currency: Currency::Usd,
            max_attachment_bytes: MAX_ATTACHMENT_BYTES,
            toast_timeout_ms: 4000,
        }
    }
}

impl AdminConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| AdminError::InvalidConfig(e.to_string()))
    }

    /// Apply string overrides, typically baked in at compile time via
    /// `option_env!`. `None` keeps the current value.
    pub fn with_overrides(
        mut self,
        low_stock_threshold: Option<&str>,
        currency: Option<&str>,
        toast_timeout_ms: Option<&str>,
    ) -> Result<Self> {
        if let Some(raw) = low_stock_threshold {
            self.low_stock_threshold = raw.trim().parse().map_err(|_| {
                AdminError::InvalidConfig(format!("low stock threshold {raw:?} is not a number"))
            })?;
        }
        if let Some(raw) = currency {
            self.currency = Currency::from_code(raw)
                .ok_or_else(|| AdminError::InvalidConfig(format!("unknown currency {raw:?}")))?;
        }
        if let Some(raw) = toast_timeout_ms {
            self.toast_timeout_ms = raw.trim().parse().map_err(|_| {
                AdminError::InvalidConfig(format!("toast timeout {raw:?} is not a number"))
            })?;
        }
        Ok(self)
    }
}
