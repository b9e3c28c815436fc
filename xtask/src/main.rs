// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::path::Path;
use std::process::Command as StdCommand;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "xtask", about = "Developer tasks for the aggregates workspace")]
struct Command {
    #[command(subcommand)]
    sub: SubCommand,
}

impl Command {
    fn run(self) -> Result<(), String> {
        match self.sub {
            SubCommand::Build(cmd) => cmd.run(),
            SubCommand::Lint(cmd) => cmd.run(),
            SubCommand::Test(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum SubCommand {
    #[command(about = "Compile workspace packages.")]
    Build(CommandBuild),
    #[command(about = "Run format and clippy checks.")]
    Lint(CommandLint),
    #[command(about = "Run unit, integration and doc tests.")]
    Test(CommandTest),
}

#[derive(Parser)]
struct CommandBuild {
    #[arg(long, help = "Assert that `Cargo.lock` will remain unchanged.")]
    locked: bool,
}

impl CommandBuild {
    fn run(self) -> Result<(), String> {
        let mut cmd = find_command("cargo")?;
        cmd.args(["build", "--workspace", "--all-features", "--tests"]);
        if self.locked {
            cmd.arg("--locked");
        }
        run_command(cmd)
    }
}

#[derive(Parser)]
struct CommandLint {
    #[arg(long, help = "Automatically apply lint suggestions.")]
    fix: bool,
}

impl CommandLint {
    fn run(self) -> Result<(), String> {
        let mut fmt = find_command("cargo")?;
        fmt.args(["fmt", "--all"]);
        if !self.fix {
            fmt.arg("--check");
        }
        run_command(fmt)?;

        let mut clippy = find_command("cargo")?;
        clippy.args([
            "clippy",
            "--tests",
            "--all-features",
            "--all-targets",
            "--workspace",
        ]);
        if self.fix {
            clippy.args(["--allow-staged", "--allow-dirty", "--fix"]);
        } else {
            clippy.args(["--", "-D", "warnings"]);
        }
        run_command(clippy)
    }
}

#[derive(Parser)]
struct CommandTest {
    #[arg(long, help = "Run tests serially and do not capture output.")]
    no_capture: bool,
}

impl CommandTest {
    fn run(self) -> Result<(), String> {
        let mut cmd = find_command("cargo")?;
        cmd.args(["test", "--workspace", "--all-features"]);
        if self.no_capture {
            cmd.args(["--", "--nocapture", "--test-threads=1"]);
        }
        run_command(cmd)
    }
}

fn workspace_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap_or_else(|| Path::new("."))
}

fn find_command(program: &str) -> Result<StdCommand, String> {
    let exe = which::which(program).map_err(|err| format!("{program} not found: {err}"))?;
    let mut cmd = StdCommand::new(exe);
    cmd.current_dir(workspace_dir());
    Ok(cmd)
}

fn run_command(mut cmd: StdCommand) -> Result<(), String> {
    println!("running: {cmd:?}");
    let status = cmd
        .status()
        .map_err(|err| format!("failed to spawn {cmd:?}: {err}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("{cmd:?} exited with {status}"))
    }
}

fn main() -> ExitCode {
    match Command::parse().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
