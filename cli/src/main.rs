// SPDX-FileCopyrightText: Copyright (c) 2025 The powervs-rust-sdk Authors
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::ArgAction;
use clap::Parser;
use powervs::PowervsV1;
use powervs_cli::commands::list_operations;
use powervs_cli::commands::process_command;
use powervs_cli::commands::Commands;
use powervs_cli::config::resolve;
use powervs_cli::config::Overrides;
use powervs_cli::Error;
use powervs_core::headers::SDK_NAME;
use powervs_core::headers::VERSION;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

/// Power Virtual Server CLI.
#[derive(Parser, Debug)]
#[command(name = "powervs")]
#[command(about = "IBM Power Virtual Server client", long_about = None)]
struct Cli {
    /// Name used to look up external configuration (`<NAME>_URL`, ...).
    #[arg(long, global = true, default_value = powervs::DEFAULT_SERVICE_NAME)]
    service_name: String,
    /// Service endpoint, e.g. https://us-south.power-iaas.cloud.ibm.com
    #[arg(long, global = true)]
    url: Option<String>,
    /// TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Retry failed requests up to this many times.
    #[arg(long, global = true)]
    retries: Option<u32>,
    /// Maximum delay between retries.
    #[arg(long, global = true, value_name = "SECONDS")]
    retry_interval: Option<u64>,
    /// Increase logging verbosity.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

fn set_tracing_subscriber(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder().with_default_directive(level.into());
    let subscriber = Registry::default()
        .with(filter.from_env_lossy())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
    // Only fails if a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    set_tracing_subscriber(cli.verbose);
    info!("{SDK_NAME} {VERSION}");

    let lines = if let Commands::Operations { filter } = &cli.command {
        list_operations(filter.as_deref())
    } else {
        let overrides = Overrides {
            url: cli.url.clone(),
            max_retries: cli.retries,
            retry_interval: cli.retry_interval.map(Duration::from_secs),
        };
        let properties = resolve(&cli.service_name, cli.config.as_deref(), &overrides)?;
        let service = PowervsV1::from_properties(&properties)?;
        process_command(&service, &cli.command).await?
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
