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

use crate::helpers::*;
use anyhow::Result;
use std::time::Instant;

pub fn build() -> Result<()> {
    print_task_start("Building All Crates", HAMMER, BLUE);
    cargo(&["build", "--workspace", "--exclude", "xtask"], "Build")
}

pub fn test() -> Result<()> {
    print_task_start("Running All Tests", TEST_TUBE, GREEN);
    println!(
        "{}💡 Info:{} Default features first, then again with `serde` enabled",
        BOLD, RESET
    );
    cargo(&["test", "--workspace"], "Tests")?;
    cargo(&["test", "-p", "spot-math", "--all-features"], "Tests (all features)")
}

pub fn check() -> Result<()> {
    print_task_start("Checking All Crates", MAGNIFIER, CYAN);
    cargo(&["check", "--workspace", "--all-targets", "--all-features"], "Check")
}

pub fn format() -> Result<()> {
    print_task_start("Formatting Code", BRUSH, MAGENTA);
    // `fmt` takes `--all`, not `--workspace`.
    cargo(&["fmt", "--all"], "Format")
}

pub fn clippy() -> Result<()> {
    print_task_start("Running Clippy", CLIPPY, YELLOW);
    cargo(
        &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--all-features",
            "--",
            "-D",
            "warnings",
        ],
        "Clippy",
    )
}

pub fn bench(filter: Option<&str>) -> Result<()> {
    print_task_start("Running Benchmarks", STOPWATCH, BLUE);
    let mut args = vec!["bench", "-p", "spot-math"];
    if let Some(filter) = filter {
        args.extend(["--", filter]);
    }
    cargo(&args, "Benchmarks")
}

pub fn all() -> Result<()> {
    println!("{}", BANNER);

    let start_time = Instant::now();
    let tasks: [(&str, fn() -> Result<()>); 5] = [
        ("Build", build),
        ("Test", test),
        ("Check", check),
        ("Format", format),
        ("Clippy", clippy),
    ];
    let total_tasks = tasks.len();

    let mut failed = Vec::new();
    for (i, (name, task_fn)) in tasks.iter().enumerate() {
        println!("\n{}{}[{}/{}] {} Phase{}", BOLD, BLUE, i + 1, total_tasks, name, RESET);
        if let Err(e) = task_fn() {
            print_error(&format!("{e:#}"));
            failed.push(*name);
        }
    }

    let total_duration = start_time.elapsed().as_secs_f64();
    if failed.is_empty() {
        println!(
            "\n{}{} {} All {} tasks completed in {:.2}s {}{}",
            BOLD, GREEN, CHECK, total_tasks, total_duration, ROCKET, RESET
        );
        Ok(())
    } else {
        anyhow::bail!(
            "{}/{} tasks failed after {:.2}s: {}",
            failed.len(),
            total_tasks,
            total_duration,
            failed.join(", ")
        )
    }
}
