// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Kaivuri Scanner Library
 * Exposes scanner modules for testing
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

pub mod candidates;
pub mod types;
pub mod wordlists;

// Classification modules
pub mod error_page;
pub mod signatures;

// Probe pipeline and dispatch
pub mod engine;
pub mod http_client;
pub mod probe;
pub mod reporter;

// Production error handling and resilience modules
pub mod errors;
pub mod retry;
