// Copyright 2026 The Portcullis Project
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use super::error::PlanError;

/// Abstraction over where plan YAML comes from.
///
/// `FileSource` reads from disk; `StringSource` provides content directly
/// (used in tests to avoid file I/O, and for the embedded default plan).
pub trait PlanSource {
    fn load(&self) -> Result<String, PlanError>;
}

/// Loads a plan from a file on disk.
pub struct FileSource {
    pub path: PathBuf,
}

impl PlanSource for FileSource {
    fn load(&self) -> Result<String, PlanError> {
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

/// Provides plan content directly as a string.
pub struct StringSource {
    pub content: String,
}

impl PlanSource for StringSource {
    fn load(&self) -> Result<String, PlanError> {
        Ok(self.content.clone())
    }
}
