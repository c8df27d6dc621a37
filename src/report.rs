use serde::Serialize;

/// 月あるいは年の集計値。分が元データで、時間は分から導出される。
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MonthTotal {
    pub minutes: i64,
    pub hours: f64,
}

/// 月次レポートの1ユーザー分の行。
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UserMonthly {
    pub name: String,
    pub minutes: i64,
    pub hours: f64,
}

/// 指定した月の全ユーザーの集計スナップショット。
///
/// 名簿の全ユーザーを必ず含む。記録のないユーザーは0行として現れる。
#[derive(Clone, Debug, Serialize)]
pub struct MonthlyReport {
    pub month: u32,
    pub year: i32,
    pub users: Vec<UserMonthly>,
    pub total_minutes: i64,
    pub total_hours: f64,
}

impl MonthlyReport {
    /// 勤務分数の降順に並べたユーザー行を返す。同値は名簿順を保つ。
    pub fn ranking(&self) -> Vec<&UserMonthly> {
        let mut rows: Vec<&UserMonthly> = self.users.iter().collect();
        rows.sort_by_key(|row| std::cmp::Reverse(row.minutes));
        rows
    }
}

/// 年次レポートの1ユーザー分の行。12ヶ月すべての集計を常に持つ。
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UserAnnual {
    pub name: String,
    pub minutes: i64,
    pub hours: f64,
    pub months: [MonthTotal; 12],
}

/// 指定した年の全ユーザー・全月の集計スナップショット。
///
/// ユーザーごとの12ヶ月、全ユーザー合算の12ヶ月、総計の3段階の集計を持ち、
/// いずれも分を合算してから時間を導出する。
#[derive(Clone, Debug, Serialize)]
pub struct AnnualReport {
    pub year: i32,
    pub users: Vec<UserAnnual>,
    pub months: [MonthTotal; 12],
    pub total_minutes: i64,
    pub total_hours: f64,
}

impl AnnualReport {
    /// 年間勤務分数の降順に並べたユーザー行を返す。同値は名簿順を保つ。
    pub fn ranking(&self) -> Vec<&UserAnnual> {
        let mut rows: Vec<&UserAnnual> = self.users.iter().collect();
        rows.sort_by_key(|row| std::cmp::Reverse(row.minutes));
        rows
    }
}
