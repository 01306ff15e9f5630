//! Validation options.

/// Which optional checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Lexlemma agreement and category vocabulary.
    pub validate_type: bool,
    /// Part of speech against category for single-word expressions.
    pub validate_upos_lextag: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            validate_type: true,
            validate_upos_lextag: true,
        }
    }
}

impl ValidationOptions {
    pub fn with_validate_type(mut self, enabled: bool) -> Self {
        self.validate_type = enabled;
        self
    }

    pub fn with_validate_upos_lextag(mut self, enabled: bool) -> Self {
        self.validate_upos_lextag = enabled;
        self
    }
}
