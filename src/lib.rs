// Copyright 2026 dentist-scan contributors
// SPDX-License-Identifier: Apache-2.0

//! dentist-scan library — NHS dentist availability scanner.
//!
//! This library crate exposes the core modules for integration testing.

pub mod browser;
pub mod config;
pub mod error;
pub mod extractor;
pub mod locator;
pub mod progress;
pub mod report;
pub mod scan;
