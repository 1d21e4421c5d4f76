// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Front end for the `cinegraph` binary: TMDB catalog client, settings
//! resolution and the interactive commands.

pub mod cli;
pub mod settings;
pub mod tmdb;
