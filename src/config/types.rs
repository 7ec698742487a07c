use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub const MAX_RECENT_PATHS: usize = 10;

pub const DEFAULT_BATCH_SIZE: i64 = 3;

/// 預設支援的影片副檔名（各來源版本的聯集）
pub const DEFAULT_VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mkv", "mov", "wmv", "flv"];

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// 由舊到新
    #[default]
    Ascending,
    /// 由新到舊
    Descending,
}

impl SortOrder {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ascending => "由舊到新（建立時間升冪）",
            Self::Descending => "由新到舊（建立時間降冪）",
        }
    }
}

/// 目的資料夾命名方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NamingScheme {
    /// Group_1, Group_2, ...
    #[default]
    SequentialIndex,
    /// Day_1, Day_2, ...
    DayIndex,
    /// 以批次第一個檔案的建立日期命名（YYYY-MM-DD）
    DateFromBatch,
}

impl NamingScheme {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SequentialIndex => "流水號（Group_1, Group_2, ...）",
            Self::DayIndex => "天數編號（Day_1, Day_2, ...）",
            Self::DateFromBatch => "批次日期（YYYY-MM-DD）",
        }
    }
}

/// 影片副檔名集合
///
/// 內部一律存小寫且不含點的副檔名，比對時不分大小寫
#[derive(Debug, Clone)]
pub struct ExtensionSet(HashSet<String>);

impl ExtensionSet {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
        )
    }

    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.0.contains(&ext.to_lowercase()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::new(DEFAULT_VIDEO_EXTENSIONS.iter().copied())
    }
}

/// 使用者設定，儲存於工作目錄的 settings.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub recent_paths: Vec<String>,
    pub batch_size: i64,
    pub sort_order: SortOrder,
    pub naming_scheme: NamingScheme,
    pub video_extensions: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            recent_paths: Vec::new(),
            batch_size: DEFAULT_BATCH_SIZE,
            sort_order: SortOrder::default(),
            naming_scheme: NamingScheme::default(),
            video_extensions: DEFAULT_VIDEO_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl UserSettings {
    /// 取得目前設定的副檔名集合，清單為空時退回預設值
    #[must_use]
    pub fn extension_set(&self) -> ExtensionSet {
        let set = ExtensionSet::new(self.video_extensions.iter());
        if set.is_empty() {
            ExtensionSet::default()
        } else {
            set
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: UserSettings,
}
