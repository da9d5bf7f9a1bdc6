// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // processor backends
pub mod config;     // config + registry
pub mod errors;     // error handling
pub mod observability;
pub mod payload;    // request/response envelopes
pub mod traits;     // unified abstractions
pub mod transform;  // keyed transformation core
