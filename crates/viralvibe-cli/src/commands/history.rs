//! `viralvibe history` - lists, deletes, clears, and exports the log.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::Local;
use clap::Subcommand;

use viralvibe_application::HistoryService;
use viralvibe_infrastructure::{FileHistoryRepository, XlsxHistoryExporter};

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Show the saved request history, most recent first
    List,
    /// Delete one record by id
    Delete { id: String },
    /// Delete the entire history
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Export the history as an XLSX spreadsheet
    Export {
        /// Directory to write the file into (defaults to the current
        /// directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub async fn run(action: HistoryAction) -> Result<()> {
    let service = HistoryService::new(Arc::new(FileHistoryRepository::new(None)?));

    match action {
        HistoryAction::List => {
            let records = service.list().await?;
            if records.is_empty() {
                println!("저장된 기록이 없습니다.");
                return Ok(());
            }

            for record in records {
                let timestamp = record
                    .created_at
                    .with_timezone(&Local)
                    .format("%m/%d %H:%M");
                println!("{}  [{}] {}", record.id, timestamp, record.topic);
                if !record.target_url.is_empty() {
                    println!("    URL: {}", record.target_url);
                }
                println!("    커뮤니티: {}", record.selected_ids.join(", "));
            }
        }
        HistoryAction::Delete { id } => {
            service.delete(&id).await?;
            println!("삭제했습니다.");
        }
        HistoryAction::Clear { yes } => {
            if !yes && !confirm("모든 기록을 삭제하시겠습니까? [y/N] ")? {
                println!("취소했습니다.");
                return Ok(());
            }
            service.clear().await?;
            println!("모든 기록을 삭제했습니다.");
        }
        HistoryAction::Export { output } => {
            let records = service.list().await?;
            let dir = output.unwrap_or_else(|| PathBuf::from("."));
            let path = XlsxHistoryExporter::export(&records, &dir)?;
            println!("내보냈습니다: {}", path.display());
        }
    }

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y"))
}
