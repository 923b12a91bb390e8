//! XLSX export of the history log.
//!
//! Renders the full log into a spreadsheet with a fixed sheet name, Korean
//! column headers, and stable column widths.

use std::path::{Path, PathBuf};

use chrono::Local;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use viralvibe_core::error::{Result, ViralVibeError};
use viralvibe_core::history::HistoryRecord;

const SHEET_NAME: &str = "History";
const HEADERS: [&str; 5] = ["일시", "키워드", "URL", "추가사항", "선택된 커뮤니티"];
const COLUMN_WIDTHS: [f64; 5] = [22.0, 20.0, 40.0, 30.0, 40.0];

fn xlsx_err(err: XlsxError) -> ViralVibeError {
    ViralVibeError::io(format!("Failed to write spreadsheet: {}", err))
}

/// Writes history logs as date-stamped `.xlsx` files.
pub struct XlsxHistoryExporter;

impl XlsxHistoryExporter {
    /// Exports the full log into `dir` and returns the written file path.
    ///
    /// The file is named `ViralVibe_History_{YYYY-MM-DD}.xlsx` with the
    /// current local date. An empty log is rejected.
    pub fn export(records: &[HistoryRecord], dir: &Path) -> Result<PathBuf> {
        if records.is_empty() {
            return Err(ViralVibeError::validation("저장된 기록이 없습니다."));
        }

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME).map_err(xlsx_err)?;

        let bold = Format::new().set_bold();
        for (col, header) in HEADERS.iter().enumerate() {
            let col = col as u16;
            worksheet
                .write_string_with_format(0, col, *header, &bold)
                .map_err(xlsx_err)?;
            worksheet
                .set_column_width(col, COLUMN_WIDTHS[col as usize])
                .map_err(xlsx_err)?;
        }

        for (i, record) in records.iter().enumerate() {
            let row = (i + 1) as u32;
            let timestamp = record
                .created_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string();
            worksheet.write_string(row, 0, timestamp).map_err(xlsx_err)?;
            worksheet
                .write_string(row, 1, record.topic.as_str())
                .map_err(xlsx_err)?;
            worksheet
                .write_string(row, 2, record.target_url.as_str())
                .map_err(xlsx_err)?;
            worksheet
                .write_string(row, 3, record.extra_context.as_str())
                .map_err(xlsx_err)?;
            worksheet
                .write_string(row, 4, record.selected_ids.join(", "))
                .map_err(xlsx_err)?;
        }

        let filename = format!("ViralVibe_History_{}.xlsx", Local::now().format("%Y-%m-%d"));
        let path = dir.join(filename);
        workbook.save(&path).map_err(xlsx_err)?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn record(topic: &str) -> HistoryRecord {
        HistoryRecord {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            topic: topic.to_string(),
            target_url: "https://blog.naver.com/me/1".to_string(),
            extra_context: "결론은 블로그에".to_string(),
            selected_ids: vec!["dcinside".to_string(), "clien".to_string()],
        }
    }

    #[test]
    fn test_export_writes_dated_file() {
        let temp_dir = TempDir::new().unwrap();
        let path =
            XlsxHistoryExporter::export(&[record("갤럭시 S24 사용기")], temp_dir.path()).unwrap();

        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("ViralVibe_History_"));
        assert!(name.ends_with(".xlsx"));
    }

    #[test]
    fn test_export_rejects_empty_log() {
        let temp_dir = TempDir::new().unwrap();
        let err = XlsxHistoryExporter::export(&[], temp_dir.path()).unwrap_err();
        assert!(err.is_validation());
    }
}
