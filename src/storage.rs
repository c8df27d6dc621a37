use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::time_entry::TimeEntry;

/// 1ユーザー分の記録列。挿入順(=登録順)を保持する。
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecords {
    #[serde(rename = "registros")]
    pub entries: Vec<TimeEntry>,
}

/// 永続化される台帳ドキュメント全体。
///
/// キー名は既存データファイルとの互換のために固定されている。
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerDocument {
    #[serde(rename = "usuarios")]
    pub users: BTreeMap<String, UserRecords>,
    #[serde(rename = "ultima_atualizacao")]
    pub updated_at: Option<NaiveDateTime>,
}

/// 台帳ドキュメントを読み書きするためのtrait。
#[cfg_attr(test, automock)]
pub trait Storage {
    /// 保存済みのドキュメントを読み込む。ファイルが存在しない場合は`None`を返す。
    fn load(&self) -> Result<Option<LedgerDocument>>;

    /// ドキュメント全体を書き込む。常に全体を上書きする。
    fn save(&self, document: &LedgerDocument) -> Result<()>;
}

/// JSONファイルとして台帳を読み書きするストレージ。
///
/// # Examples
///
/// ```ignore
/// let storage = JsonStorage::new("horas_estagio.json");
/// let document = storage.load()?;
/// ```
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// 新しい`JsonStorage`を返す。
    ///
    /// # Arguments
    ///
    /// * `path` - 台帳JSONファイルのパス
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Result<Option<LedgerDocument>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read ledger file: {}", self.path.display()))?;
        let document = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse ledger file: {}", self.path.display()))?;

        Ok(Some(document))
    }

    fn save(&self, document: &LedgerDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
        }

        let content =
            serde_json::to_string_pretty(document).context("Failed to serialize ledger document")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write ledger file: {}", self.path.display()))?;

        Ok(())
    }
}
