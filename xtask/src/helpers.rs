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

use anyhow::Result;
use std::process::Command;
use std::time::Instant;

// ANSI color codes
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const BLUE: &str = "\x1b[34m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

// Visual symbols
pub const CHECK: &str = "✓";
pub const CROSS: &str = "✗";
pub const ROCKET: &str = "🚀";
pub const HAMMER: &str = "🔨";
pub const TEST_TUBE: &str = "🧪";
pub const MAGNIFIER: &str = "🔍";
pub const BRUSH: &str = "🎨";
pub const CLIPPY: &str = "📎";
pub const STOPWATCH: &str = "⏱";

pub const BANNER: &str = concat!(
    "\x1b[1m\x1b[36m",
    "╔═══════════════════════════════════════════════════════════╗\n",
    "║                      📐 SPOT MATH 📐                      ║\n",
    "║                 Workspace Automation Tool                 ║\n",
    "╚═══════════════════════════════════════════════════════════╝",
    "\x1b[0m"
);

/// One line of `cargo xtask` help: symbol, color, name, description.
const COMMANDS: [(&str, &str, &str, &str); 7] = [
    (HAMMER, BLUE, "build", "Build every crate in the workspace."),
    (TEST_TUBE, GREEN, "test", "Run all tests, with and without the `serde` feature."),
    (MAGNIFIER, CYAN, "check", "Type-check all targets."),
    (BRUSH, MAGENTA, "format", "Format all code in the workspace."),
    (CLIPPY, YELLOW, "clippy", "Run clippy on all targets with warnings as errors."),
    (STOPWATCH, BLUE, "bench", "Run the criterion benchmarks (optional name filter)."),
    (ROCKET, RED, "all", "Run build, test, check, format and clippy."),
];

pub fn print_custom_help() {
    println!("{}", BANNER);
    println!("\n{}{}Usage:{} cargo xtask <command>\n", BOLD, YELLOW, RESET);
    println!("{}Available commands:{}", BOLD, RESET);
    for (symbol, color, name, description) in COMMANDS {
        println!("  {} {}{}{:<7}{} - {}", symbol, color, BOLD, name, RESET, description);
    }
}

pub fn print_task_start(task_name: &str, emoji: &str, color: &str) {
    println!(
        "\n{}{}━━━ {} {} {}━━━{}",
        BOLD, color, emoji, task_name, emoji, RESET
    );
}

pub fn print_success(message: &str) {
    println!("{}{} {} {}{}", BOLD, GREEN, CHECK, message, RESET);
}

pub fn print_error(message: &str) {
    println!("{}{} {} {}{}", BOLD, RED, CROSS, message, RESET);
}

/// Runs `cargo` with `args`, streaming its output, and fails if it exits non-zero.
pub fn cargo(args: &[&str], task_name: &str) -> Result<()> {
    let start_time = Instant::now();
    println!("{}{}📋 Command:{} cargo {}", BOLD, CYAN, RESET, args.join(" "));

    let status = Command::new(env!("CARGO")).args(args).status()?;
    let elapsed = start_time.elapsed().as_secs_f64();

    if status.success() {
        print_success(&format!("{} completed in {:.2}s", task_name, elapsed));
        Ok(())
    } else {
        anyhow::bail!("{} failed after {:.2}s ({})", task_name, elapsed, status);
    }
}
