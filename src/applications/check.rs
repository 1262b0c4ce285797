//! Required-field bookkeeping for application submittability.

/// Collects the wire keys of required fields left blank.
#[derive(Debug, Default)]
pub(crate) struct FieldCheck {
    missing: Vec<String>,
}

impl FieldCheck {
    /// Record `key` as missing if `value` is blank.
    pub(crate) fn require(&mut self, key: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.missing.push(key.to_owned());
        }
        self
    }

    /// Like [`Self::require`], but only when `condition` holds.
    pub(crate) fn require_if(&mut self, condition: bool, key: &str, value: &str) -> &mut Self {
        if condition {
            self.require(key, value);
        }
        self
    }

    /// Optional text that becomes required when `condition` holds.
    pub(crate) fn require_some_if(&mut self, condition: bool, key: &str, value: Option<&str>) -> &mut Self {
        self.require_if(condition, key, value.unwrap_or_default())
    }

    pub(crate) fn finish(self) -> Vec<String> {
        self.missing
    }
}
