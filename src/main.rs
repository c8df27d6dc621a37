use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod annual_command;
mod clock_command;
mod console;
mod datetime;
mod entries_command;
mod error;
mod ledger;
mod manual_command;
mod minutes_command;
mod monthly_command;
mod report;
mod storage;
mod time_entry;

use annual_command::{AnnualArgs, AnnualCommand};
use clock_command::{ClockArgs, ClockCommand};
use console::{ConsoleMarkdownList, ConsolePresenter};
use entries_command::{EntriesArgs, EntriesCommand};
use ledger::Ledger;
use manual_command::{ManualArgs, ManualCommand};
use minutes_command::{MinutesArgs, MinutesCommand};
use monthly_command::{MonthlyArgs, MonthlyCommand};
use storage::JsonStorage;

/// 既定の名簿。環境変数`PONTO_ROSTER`(カンマ区切り)で上書きできる。
const DEFAULT_ROSTER: [&str; 4] = ["Márcio", "Samuel", "Caio", "Robson"];
const ROSTER_ENV: &str = "PONTO_ROSTER";
const DATA_FILE_NAME: &str = "horas_estagio.json";

/// 勤務時間を記録・集計するためのCLIアプリケーション。
///
/// # Examples
/// ```
/// $ cargo run -- clock Samuel 08:30 17:45
/// $ cargo run -- monthly -m 3 -y 2023
/// ```
#[derive(Debug, Parser)]
#[clap(version, about)]
struct Args {
    #[clap(
        short = 'f',
        long = "file",
        help = "Path to the ledger JSON file",
        global = true
    )]
    file: Option<PathBuf>,

    #[clap(subcommand)]
    subcommand: SubCommands,
}

/// サブコマンドを表す列挙型。
#[derive(Debug, Subcommand)]
enum SubCommands {
    Clock(ClockArgs),
    Manual(ManualArgs),
    Minutes(MinutesArgs),
    Monthly(MonthlyArgs),
    Annual(AnnualArgs),
    Entries(EntriesArgs),
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logger().context("Failed to set up logger")?;

    let path = match args.file {
        Some(path) => path,
        None => default_data_file()?,
    };
    let storage = JsonStorage::new(path);
    let mut ledger = Ledger::open(roster(), storage).context("Failed to open ledger")?;

    let mut stdout = io::stdout();
    let mut presenter = ConsoleMarkdownList::new(&mut stdout);

    match args.subcommand {
        SubCommands::Clock(clock) => {
            let entry = ClockCommand::new(&mut ledger).run(clock)?;
            presenter.show_entries(&[entry])?;
        }
        SubCommands::Manual(manual) => {
            let entry = ManualCommand::new(&mut ledger).run(manual)?;
            presenter.show_entries(&[entry])?;
        }
        SubCommands::Minutes(minutes) => {
            let entry = MinutesCommand::new(&mut ledger).run(minutes)?;
            presenter.show_entries(&[entry])?;
        }
        SubCommands::Monthly(monthly) => {
            let (ranking, json) = (monthly.ranking, monthly.json);
            let report = MonthlyCommand::new(&ledger).run(monthly)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report)
                        .context("Failed to serialize monthly report")?
                );
            } else if ranking {
                presenter.show_monthly_ranking(&report)?;
            } else {
                presenter.show_monthly_report(&report)?;
            }
        }
        SubCommands::Annual(annual) => {
            let (ranking, json) = (annual.ranking, annual.json);
            let report = AnnualCommand::new(&ledger).run(annual)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report)
                        .context("Failed to serialize annual report")?
                );
            } else if ranking {
                presenter.show_annual_ranking(&report)?;
            } else {
                presenter.show_annual_report(&report)?;
            }
        }
        SubCommands::Entries(entries) => {
            let records = EntriesCommand::new(&ledger).run(entries)?;
            presenter.show_entries(&records)?;
        }
    }

    Ok(())
}

/// 名簿を環境変数から構築する。未設定の場合は既定の名簿を使う。
fn roster() -> Vec<String> {
    match env::var(ROSTER_ENV) {
        Ok(value) => value
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect(),
        Err(_) => DEFAULT_ROSTER.iter().map(|name| name.to_string()).collect(),
    }
}

/// 既定の台帳ファイルパスを返す。
fn default_data_file() -> Result<PathBuf> {
    let dir = dirs::data_dir().context("Failed to resolve the user data directory")?;

    Ok(dir.join("ponto").join(DATA_FILE_NAME))
}

/// ロガーを初期化する。
fn setup_logger() -> Result<()> {
    let colors = fern::colors::ColoredLevelConfig::new();
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(io::stderr())
        .apply()
        .context("Failed to apply logger configuration")?;

    Ok(())
}
