// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Notification Lifetime Defaults
// ==========================================================================

/// How long a toast stays visible when no duration is given (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 6000;

/// Shortest configurable toast lifetime (in milliseconds).
pub const MIN_DURATION_MS: u64 = 100;

/// Longest configurable toast lifetime (in milliseconds).
pub const MAX_DURATION_MS: u64 = 600_000;

// ==========================================================================
// Showcase Defaults
// ==========================================================================

/// Message shown by every placement button in the showcase.
pub const DEFAULT_SHOWCASE_MESSAGE: &str =
    "Welcome to MediTracker - Your trusted healthcare supply chain platform.";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DURATION_MS > 0);
    assert!(DEFAULT_DURATION_MS >= MIN_DURATION_MS);
    assert!(DEFAULT_DURATION_MS <= MAX_DURATION_MS);
};
