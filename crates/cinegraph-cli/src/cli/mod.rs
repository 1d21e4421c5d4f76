// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Subcommand implementations for the `cinegraph` binary.

pub mod benchmark_cmd;
pub mod build_cmd;
pub mod complete;
pub mod menu;
pub mod output;
pub mod progress;
pub mod recommend_cmd;
pub mod session;
