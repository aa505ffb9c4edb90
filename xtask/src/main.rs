// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Workspace automation for spot-math.
// Run with: cargo xtask <command>

mod commands;
mod helpers;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for spot-math", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Task>,
}

#[derive(Subcommand)]
enum Task {
    /// Build every crate in the workspace.
    Build,
    /// Run unit, integration, property and doc tests, with and without optional features.
    Test,
    /// Type-check every crate, including benches and tests.
    Check,
    /// Format all code.
    Format,
    /// Run clippy with warnings as errors.
    Clippy,
    /// Run the criterion benchmarks.
    Bench {
        /// Only run benchmarks whose name matches this filter.
        filter: Option<String>,
    },
    /// Run build, test, check, format and clippy in sequence.
    All,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(task) = cli.command else {
        helpers::print_custom_help();
        return Ok(());
    };

    let result = match task {
        Task::Build => commands::ci::build(),
        Task::Test => commands::ci::test(),
        Task::Check => commands::ci::check(),
        Task::Format => commands::ci::format(),
        Task::Clippy => commands::ci::clippy(),
        Task::Bench { filter } => commands::ci::bench(filter.as_deref()),
        Task::All => commands::ci::all(),
    };

    if let Err(e) = &result {
        helpers::print_error(&format!("{e:#}"));
    }
    result
}
