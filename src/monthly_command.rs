use anyhow::{Context, Result};
use log::info;

use crate::ledger::Ledger;
use crate::report::MonthlyReport;
use crate::storage::Storage;

/// `monthly`サブコマンドの引数を表す構造体。
#[derive(Debug, clap::Args)]
pub struct MonthlyArgs {
    #[clap(
        short = 'm',
        long = "month",
        help = "Sets a custom month (1-12)",
        parse(try_from_str = parse_month),
    )]
    month: Option<u32>,

    #[clap(short = 'y', long = "year", help = "Sets a custom year")]
    year: Option<i32>,

    #[clap(long = "ranking", help = "Show users ranked by worked minutes")]
    pub ranking: bool,

    #[clap(long = "json", help = "Print the report as JSON")]
    pub json: bool,
}

pub struct MonthlyCommand<'a, S: Storage> {
    ledger: &'a Ledger<S>,
}

impl<'a, S: Storage> MonthlyCommand<'a, S> {
    /// 新しい`MonthlyCommand`を返す。
    pub fn new(ledger: &'a Ledger<S>) -> Self {
        Self { ledger }
    }

    /// `monthly`サブコマンドの処理を行う。
    ///
    /// 月・年が指定されていない場合は現在の月・年を利用する。
    ///
    /// # Arguments
    ///
    /// * `monthly` - `monthly`サブコマンドの引数
    pub fn run(&self, monthly: MonthlyArgs) -> Result<MonthlyReport> {
        info!(
            "Generating monthly report (month: {:?}, year: {:?}).",
            monthly.month, monthly.year
        );

        let report = self.ledger.monthly_report(monthly.month, monthly.year);

        info!("Monthly report generated successfully.");

        Ok(report)
    }
}

/// 月をパースする。1から12の範囲のみを受け付ける。
fn parse_month(s: &str) -> Result<u32> {
    let month: u32 = s
        .parse()
        .with_context(|| format!("Failed to parse month: {}", s))?;
    if !(1..=12).contains(&month) {
        anyhow::bail!("Month must be between 1 and 12: {}", month);
    }

    Ok(month)
}
