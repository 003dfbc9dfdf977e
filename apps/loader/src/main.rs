#![allow(clippy::print_stdout)]

use anyhow::Context;
use clap::Parser;
use dfh_domain::metadata::METADATA;
use dfh_loader::Loader;
use dfh_loader::cli::{ApplyArgs, Cli, Command, SettingsArgs};
use dfh_logger::Logger;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Apply(args) => apply(&args),
        Command::Config(args) => print_config(&args),
        Command::Info => {
            println!("{}", serde_json::to_string_pretty(&METADATA)?);
            Ok(())
        },
    }
}

fn apply(args: &ApplyArgs) -> anyhow::Result<()> {
    let cfg = args.load()?;
    let _log = Logger::builder(env!("CARGO_BIN_NAME")).settings(&cfg.logging)?.init()?;

    Loader::builder().config(cfg).dry_run(args.dry_run).build()?.run()?;
    Ok(())
}

fn print_config(args: &SettingsArgs) -> anyhow::Result<()> {
    let cfg = args.load()?;
    let loader = Loader::builder().config(cfg).build()?;

    let json = serde_json::to_string_pretty(loader.headset_config())
        .context("Failed to render headset config")?;
    println!("{json}");
    Ok(())
}
