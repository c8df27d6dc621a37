use std::io::Write;

use anyhow::{Context, Result};

use crate::report::{AnnualReport, MonthTotal, MonthlyReport};
use crate::time_entry::TimeEntry;

/// Consoleに記録やレポートを表示するためのtrait。
pub trait ConsolePresenter {
    /// 勤務記録の一覧を表示する。
    ///
    /// # Arguments
    ///
    /// * `entries` - 表示する勤務記録(登録順)
    fn show_entries(&mut self, entries: &[TimeEntry]) -> Result<()>;

    /// 月次レポートを表示する。
    fn show_monthly_report(&mut self, report: &MonthlyReport) -> Result<()>;

    /// 月次ランキングを表示する。
    fn show_monthly_ranking(&mut self, report: &MonthlyReport) -> Result<()>;

    /// 年次レポートを表示する。
    fn show_annual_report(&mut self, report: &AnnualReport) -> Result<()>;

    /// 年次ランキングを表示する。
    fn show_annual_ranking(&mut self, report: &AnnualReport) -> Result<()>;
}

/// 記録やレポートをMarkdownのlist形式で表示する。
pub struct ConsoleMarkdownList<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> ConsoleMarkdownList<'a, W> {
    /// 新しい`ConsoleMarkdownList`を返す。
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }

    // ユーザー1人分の合計行を書き出す。
    fn write_total_line(&mut self, label: &str, minutes: i64, hours: f64) -> Result<()> {
        writeln!(self.writer, "- {}: {} min ({:.2} h)", label, minutes, hours)
            .with_context(|| format!("Failed to write line for {}", label))?;
        Ok(())
    }

    // 12ヶ月分の内訳行を書き出す。
    fn write_month_lines(&mut self, months: &[MonthTotal; 12]) -> Result<()> {
        for (index, total) in months.iter().enumerate() {
            writeln!(
                self.writer,
                "  - {:02}: {} min ({:.2} h)",
                index + 1,
                total.minutes,
                total.hours
            )
            .with_context(|| format!("Failed to write month line {}", index + 1))?;
        }
        Ok(())
    }
}

impl<'a, W: Write> ConsolePresenter for ConsoleMarkdownList<'a, W> {
    // 記録を登録順のまま1行ずつ表示する。
    fn show_entries(&mut self, entries: &[TimeEntry]) -> Result<()> {
        for entry in entries {
            writeln!(
                self.writer,
                "- {}: {} min ({:.2} h): {}",
                entry.date.format("%d/%m/%Y"),
                entry.worked_minutes(),
                entry.hours,
                entry.description
            )
            .with_context(|| format!("Failed to write time entry: {:?}", entry))?;
        }

        Ok(())
    }

    fn show_monthly_report(&mut self, report: &MonthlyReport) -> Result<()> {
        writeln!(self.writer, "## {:02}/{}", report.month, report.year)
            .context("Failed to write report header")?;
        for row in &report.users {
            self.write_total_line(&row.name, row.minutes, row.hours)?;
        }
        self.write_total_line("total", report.total_minutes, report.total_hours)?;

        Ok(())
    }

    fn show_monthly_ranking(&mut self, report: &MonthlyReport) -> Result<()> {
        writeln!(self.writer, "## {:02}/{}", report.month, report.year)
            .context("Failed to write ranking header")?;
        for (position, row) in report.ranking().iter().enumerate() {
            writeln!(
                self.writer,
                "{}. {}: {} min ({:.2} h)",
                position + 1,
                row.name,
                row.minutes,
                row.hours
            )
            .with_context(|| format!("Failed to write ranking line for {}", row.name))?;
        }

        Ok(())
    }

    fn show_annual_report(&mut self, report: &AnnualReport) -> Result<()> {
        writeln!(self.writer, "## {}", report.year).context("Failed to write report header")?;
        for row in &report.users {
            self.write_total_line(&row.name, row.minutes, row.hours)?;
            self.write_month_lines(&row.months)?;
        }
        self.write_total_line("total", report.total_minutes, report.total_hours)?;
        self.write_month_lines(&report.months)?;

        Ok(())
    }

    fn show_annual_ranking(&mut self, report: &AnnualReport) -> Result<()> {
        writeln!(self.writer, "## {}", report.year).context("Failed to write ranking header")?;
        for (position, row) in report.ranking().iter().enumerate() {
            writeln!(
                self.writer,
                "{}. {}: {} min ({:.2} h)",
                position + 1,
                row.name,
                row.minutes,
                row.hours
            )
            .with_context(|| format!("Failed to write ranking line for {}", row.name))?;
        }

        Ok(())
    }
}
