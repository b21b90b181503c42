// Copyright 2026 The Portcullis Project
// SPDX-License-Identifier: Apache-2.0

/// All errors that can occur during numbering-plan loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("failed to read plan source: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid exchange pattern \"{pattern}\": {source}")]
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },
}
