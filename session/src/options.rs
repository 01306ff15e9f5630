//! Conversion options.

use conllulex_format::{JsonOptions, SupersenseMap};
use conllulex_validate::ValidationOptions;

/// Options for converting rows to JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub json: JsonOptions,
    pub validation: ValidationOptions,
    /// Replace a recorded `mwe` metadatum that differs from the rendered
    /// one instead of reporting it.
    pub override_mwe_render: bool,
    /// Write output even when there are errors.
    pub force: bool,
    /// Relabeling applied to supersenses in the output only.
    pub ss_map: SupersenseMap,
}

impl ConvertOptions {
    pub fn with_json(mut self, json: JsonOptions) -> Self {
        self.json = json;
        self
    }

    pub fn with_validation(mut self, validation: ValidationOptions) -> Self {
        self.validation = validation;
        self
    }

    pub fn with_override_mwe_render(mut self, enabled: bool) -> Self {
        self.override_mwe_render = enabled;
        self
    }

    pub fn with_force(mut self, enabled: bool) -> Self {
        self.force = enabled;
        self
    }

    pub fn with_ss_map(mut self, ss_map: SupersenseMap) -> Self {
        self.ss_map = ss_map;
        self
    }
}
