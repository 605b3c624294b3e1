// Copyright 2025, The LineageOS Project
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

//! Drives the PowerShare HAL in-process, for bring-up and debugging.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info, LevelFilter};
use powershare::aidl::{IPowerShare, DEFAULT_INSTANCE};
use powershare::{FeatureState, PowerShare, LOG_TAG, WIRELESS_TX_ENABLE_PATH};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Control reverse wireless charging")]
struct Args {
    /// Control node exported by the wireless charging driver.
    #[arg(long, default_value = WIRELESS_TX_ENABLE_PATH)]
    node: PathBuf,

    /// Log at debug level even on user builds.
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print whether PowerShare is enabled.
    Status,
    /// Turn PowerShare on.
    Enable,
    /// Turn PowerShare off.
    Disable,
    /// Print the minimum battery level, setting it first if a value is given.
    MinBattery { value: Option<i32> },
}

/// Debug unless `variant` names a user build.
fn log_level(verbose: bool, variant: Option<&str>) -> LevelFilter {
    let debuggable = variant.map_or(true, |v| v != "user");
    if verbose || debuggable {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn print_status(service: &dyn IPowerShare) -> Result<()> {
    let enabled = service.is_enabled().context("isEnabled")?;
    let min_battery = service.get_min_battery().context("getMinBattery")?;
    println!("{} (min battery {min_battery}%)", FeatureState::from(enabled));
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let service = PowerShare::with_node_path(&args.node);
    info!("Serving {DEFAULT_INSTANCE} in-process on {}", service.node().path().display());

    match args.command {
        Command::Status => print_status(&service),
        Command::Enable => {
            service.set_enabled(true).context("setEnabled(true)")?;
            print_status(&service)
        }
        Command::Disable => {
            service.set_enabled(false).context("setEnabled(false)")?;
            print_status(&service)
        }
        Command::MinBattery { value } => {
            if let Some(value) = value {
                service.set_min_battery(value).context("setMinBattery")?;
            }
            println!("{}", service.get_min_battery().context("getMinBattery")?);
            Ok(())
        }
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    let level = log_level(args.verbose, option_env!("TARGET_BUILD_VARIANT"));
    android_logger::init_once(
        android_logger::Config::default().with_tag(LOG_TAG).with_max_level(level),
    );
    run(args)
}

fn main() {
    if let Err(e) = try_main() {
        error!("{:?}", e);
        eprintln!("{:?}", e);
        std::process::exit(1)
    }
}
