//! 整理計畫的建立
//!
//! 把排序後的快照切成固定大小的批次，並為每個批次決定目的資料夾名稱

use crate::config::{NamingScheme, SortOrder};
use crate::error::OrganizeError;
use crate::tools::VideoFile;
use chrono::{DateTime, Local};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// 一個批次：一組連續的檔案加上它的目的資料夾
#[derive(Debug, Clone)]
pub struct Batch {
    /// 1 起算的批次編號
    pub index: usize,
    pub folder_name: String,
    pub files: Vec<VideoFile>,
}

/// 完整的整理計畫
///
/// 從掃描快照一次算出，執行期間不會重新評估目錄內容
#[derive(Debug, Clone)]
pub struct OrganizePlan {
    pub source_dir: PathBuf,
    pub batches: Vec<Batch>,
}

impl OrganizePlan {
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.batches.iter().map(|batch| batch.files.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

/// 依建立時間穩定排序
///
/// 時間相同時保留原本的列舉順序；`Descending` 用反向比較而不是
/// 排序後反轉，確保相同時間的相對順序不變
pub fn sort_by_creation_time(files: &mut [VideoFile], order: SortOrder) {
    match order {
        SortOrder::Ascending => files.sort_by(|a, b| a.created.cmp(&b.created)),
        SortOrder::Descending => files.sort_by(|a, b| b.created.cmp(&a.created)),
    }
}

/// 把排序後的檔案清單切成批次並建立計畫
pub fn build_plan(
    source_dir: &Path,
    files: Vec<VideoFile>,
    batch_size: i64,
    scheme: NamingScheme,
) -> Result<OrganizePlan, OrganizeError> {
    let chunk_size = usize::try_from(batch_size)
        .ok()
        .filter(|size| *size > 0)
        .ok_or(OrganizeError::InvalidBatchSize(batch_size))?;

    let mut used_names: HashSet<String> = HashSet::new();
    let mut batches = Vec::new();

    for (i, chunk) in files.chunks(chunk_size).enumerate() {
        let index = i + 1;
        let base = base_folder_name(scheme, index, chunk.first());
        let folder_name = disambiguate(&base, source_dir, &mut used_names);

        batches.push(Batch {
            index,
            folder_name,
            files: chunk.to_vec(),
        });
    }

    Ok(OrganizePlan {
        source_dir: source_dir.to_path_buf(),
        batches,
    })
}

fn base_folder_name(scheme: NamingScheme, index: usize, first: Option<&VideoFile>) -> String {
    match scheme {
        NamingScheme::SequentialIndex => format!("Group_{index}"),
        NamingScheme::DayIndex => format!("Day_{index}"),
        NamingScheme::DateFromBatch => first.map_or_else(
            || format!("Group_{index}"),
            |file| {
                let created: DateTime<Local> = file.created.into();
                created.format("%Y-%m-%d").to_string()
            },
        ),
    }
}

/// 避免資料夾名稱互相衝突或蓋到來源目錄裡的既有檔案
///
/// 同名會把不同批次合併進同一個資料夾，因此名稱已被先前批次使用、
/// 或來源目錄有同名「檔案」時，附加 _2、_3 等流水號。
/// 既有的同名「目錄」允許重用（重跑時的冪等行為）
fn disambiguate(base: &str, source_dir: &Path, used_names: &mut HashSet<String>) -> String {
    let mut name = base.to_string();
    let mut suffix = 2;

    while used_names.contains(&name) || source_dir.join(&name).is_file() {
        name = format!("{base}_{suffix}");
        suffix += 1;
    }

    used_names.insert(name.clone());
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};

    fn make_file(name: &str, created_secs: u64) -> VideoFile {
        VideoFile {
            path: PathBuf::from(format!("/videos/{name}")),
            name: name.to_string(),
            created: SystemTime::UNIX_EPOCH + Duration::from_secs(created_secs),
        }
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let mut files = vec![
            make_file("b.mp4", 200),
            make_file("a.mp4", 100),
            make_file("c.mp4", 300),
        ];

        sort_by_creation_time(&mut files, SortOrder::Ascending);
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.mp4", "b.mp4", "c.mp4"]);

        sort_by_creation_time(&mut files, SortOrder::Descending);
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["c.mp4", "b.mp4", "a.mp4"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut files = vec![
            make_file("first.mp4", 100),
            make_file("second.mp4", 100),
            make_file("third.mp4", 100),
        ];

        // 時間全部相同，兩個方向都應該保留列舉順序
        sort_by_creation_time(&mut files, SortOrder::Ascending);
        assert_eq!(files[0].name, "first.mp4");
        assert_eq!(files[2].name, "third.mp4");

        sort_by_creation_time(&mut files, SortOrder::Descending);
        assert_eq!(files[0].name, "first.mp4");
        assert_eq!(files[2].name, "third.mp4");
    }

    #[test]
    fn test_build_plan_partitions_all_files() {
        let files: Vec<VideoFile> = (1..=7)
            .map(|i| make_file(&format!("f{i}.mp4"), i * 100))
            .collect();

        let plan = build_plan(
            Path::new("/videos"),
            files,
            3,
            NamingScheme::SequentialIndex,
        )
        .unwrap();

        assert_eq!(plan.batches.len(), 3);
        assert_eq!(plan.total_files(), 7);
        assert_eq!(plan.batches[0].folder_name, "Group_1");
        assert_eq!(plan.batches[1].folder_name, "Group_2");
        assert_eq!(plan.batches[2].folder_name, "Group_3");
        assert_eq!(plan.batches[0].files.len(), 3);
        assert_eq!(plan.batches[1].files.len(), 3);
        assert_eq!(plan.batches[2].files.len(), 1);

        // 批次內容必須是排序結果的連續分割
        let flattened: Vec<&str> = plan
            .batches
            .iter()
            .flat_map(|batch| batch.files.iter().map(|f| f.name.as_str()))
            .collect();
        assert_eq!(
            flattened,
            vec!["f1.mp4", "f2.mp4", "f3.mp4", "f4.mp4", "f5.mp4", "f6.mp4", "f7.mp4"]
        );
    }

    #[test]
    fn test_build_plan_batch_size_one_and_oversized() {
        let files: Vec<VideoFile> = (1..=3)
            .map(|i| make_file(&format!("f{i}.mp4"), i * 100))
            .collect();

        let plan = build_plan(
            Path::new("/videos"),
            files.clone(),
            1,
            NamingScheme::SequentialIndex,
        )
        .unwrap();
        assert_eq!(plan.batches.len(), 3);
        assert!(plan.batches.iter().all(|batch| batch.files.len() == 1));

        let plan = build_plan(Path::new("/videos"), files, 99, NamingScheme::SequentialIndex)
            .unwrap();
        assert_eq!(plan.batches.len(), 1);
        assert_eq!(plan.batches[0].files.len(), 3);
    }

    #[test]
    fn test_build_plan_invalid_batch_size() {
        for size in [0, -1, -100] {
            let err = build_plan(
                Path::new("/videos"),
                vec![make_file("a.mp4", 100)],
                size,
                NamingScheme::SequentialIndex,
            )
            .unwrap_err();
            assert!(matches!(err, OrganizeError::InvalidBatchSize(s) if s == size));
        }
    }

    #[test]
    fn test_build_plan_empty_snapshot() {
        let plan = build_plan(
            Path::new("/videos"),
            Vec::new(),
            3,
            NamingScheme::SequentialIndex,
        )
        .unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.total_files(), 0);
    }

    #[test]
    fn test_day_index_naming() {
        let files: Vec<VideoFile> = (1..=4)
            .map(|i| make_file(&format!("f{i}.mp4"), i * 100))
            .collect();

        let plan = build_plan(Path::new("/videos"), files, 2, NamingScheme::DayIndex).unwrap();

        assert_eq!(plan.batches[0].folder_name, "Day_1");
        assert_eq!(plan.batches[1].folder_name, "Day_2");
    }

    #[test]
    fn test_date_from_batch_disambiguates_same_day() {
        // 四個檔案建立時間相同，batch_size 2 -> 兩個批次同一天
        let files: Vec<VideoFile> = (1..=4)
            .map(|i| make_file(&format!("f{i}.mp4"), 1_000_000))
            .collect();

        let plan = build_plan(Path::new("/videos"), files, 2, NamingScheme::DateFromBatch).unwrap();

        assert_eq!(plan.batches.len(), 2);
        let first = &plan.batches[0].folder_name;
        let second = &plan.batches[1].folder_name;
        assert_ne!(first, second, "同一天的兩個批次不能共用資料夾");
        assert_eq!(*second, format!("{first}_2"));
    }

    #[test]
    fn test_folder_name_avoids_existing_file() {
        use std::fs;
        let temp_dir = tempfile::TempDir::new().unwrap();
        // 來源目錄裡有一個剛好叫 Group_1 的檔案
        fs::write(temp_dir.path().join("Group_1"), "not a folder").unwrap();

        let files = vec![make_file("a.mp4", 100)];
        let plan = build_plan(temp_dir.path(), files, 3, NamingScheme::SequentialIndex).unwrap();

        assert_eq!(plan.batches[0].folder_name, "Group_1_2");
    }
}
