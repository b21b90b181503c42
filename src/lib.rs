// Copyright 2026 The Portcullis Project
// SPDX-License-Identifier: Apache-2.0

pub mod classify;
pub mod contacts;
pub mod engine;
pub mod plan;
pub mod prefs;
pub mod screen;
