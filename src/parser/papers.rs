//! Accepted Papers CSV Parser
//!
//! 採択論文リストCSV（Type / Title / Authorsカラム）を読み込むモジュール。
//! このCSVは手作業で管理されるため、カラム名は固定です。

use csv::{ReaderBuilder, StringRecord};

use crate::error::CsvToHtmlError;
use crate::types::AcceptedPaper;

/// 採択論文CSVを読み込む
///
/// タイトルが空の行はスキップします。著者はセミコロン区切りで分割されます。
pub(crate) fn load_accepted_papers(text: &str) -> Result<Vec<AcceptedPaper>, CsvToHtmlError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();
    let type_col = require_column(&headers, "Type")?;
    let title_col = require_column(&headers, "Title")?;
    let authors_col = require_column(&headers, "Authors")?;

    let mut papers = Vec::new();
    for result in reader.records() {
        let record = result?;
        let title = record.get(title_col).unwrap_or("").trim();
        if title.is_empty() {
            continue;
        }
        let paper_type = record.get(type_col).unwrap_or("").trim();
        let authors = record
            .get(authors_col)
            .unwrap_or("")
            .split(';')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(String::from)
            .collect();
        papers.push(AcceptedPaper {
            paper_type: paper_type.to_string(),
            title: title.to_string(),
            authors,
        });
    }
    Ok(papers)
}

/// 固定名のカラムを探す（見つからなければ設定エラー）
fn require_column(headers: &StringRecord, name: &str) -> Result<usize, CsvToHtmlError> {
    headers.iter().position(|h| h.trim() == name).ok_or_else(|| {
        CsvToHtmlError::Config(format!("Missing required column: {}", name))
    })
}
