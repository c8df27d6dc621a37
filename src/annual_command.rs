use anyhow::Result;
use log::info;

use crate::ledger::Ledger;
use crate::report::AnnualReport;
use crate::storage::Storage;

/// `annual`サブコマンドの引数を表す構造体。
#[derive(Debug, clap::Args)]
pub struct AnnualArgs {
    #[clap(short = 'y', long = "year", help = "Sets a custom year")]
    year: Option<i32>,

    #[clap(long = "ranking", help = "Show users ranked by worked minutes")]
    pub ranking: bool,

    #[clap(long = "json", help = "Print the report as JSON")]
    pub json: bool,
}

pub struct AnnualCommand<'a, S: Storage> {
    ledger: &'a Ledger<S>,
}

impl<'a, S: Storage> AnnualCommand<'a, S> {
    /// 新しい`AnnualCommand`を返す。
    pub fn new(ledger: &'a Ledger<S>) -> Self {
        Self { ledger }
    }

    /// `annual`サブコマンドの処理を行う。
    ///
    /// 年が指定されていない場合は現在の年を利用する。
    ///
    /// # Arguments
    ///
    /// * `annual` - `annual`サブコマンドの引数
    pub fn run(&self, annual: AnnualArgs) -> Result<AnnualReport> {
        info!("Generating annual report (year: {:?}).", annual.year);

        let report = self.ledger.annual_report(annual.year);

        info!("Annual report generated successfully.");

        Ok(report)
    }
}
