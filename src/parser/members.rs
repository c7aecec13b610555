//! Program Committee CSV Parser
//!
//! プログラム委員CSV（Name / Affiliation / Countryカラム）を読み込むモジュール。

use csv::{ReaderBuilder, StringRecord};

use crate::error::CsvToHtmlError;
use crate::types::PcMember;

/// プログラム委員CSVを読み込む
///
/// 名前が空の行はスキップします。各フィールドは前後の空白を除去します。
pub(crate) fn load_pc_members(text: &str) -> Result<Vec<PcMember>, CsvToHtmlError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();
    let name_col = require_column(&headers, "Name")?;
    let affiliation_col = require_column(&headers, "Affiliation")?;
    let country_col = require_column(&headers, "Country")?;

    let mut members = Vec::new();
    for result in reader.records() {
        let record = result?;
        let name = record.get(name_col).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }
        members.push(PcMember {
            name: name.to_string(),
            affiliation: record.get(affiliation_col).unwrap_or("").trim().to_string(),
            country: record.get(country_col).unwrap_or("").trim().to_string(),
        });
    }
    Ok(members)
}

/// 固定名のカラムを探す（見つからなければ設定エラー）
fn require_column(headers: &StringRecord, name: &str) -> Result<usize, CsvToHtmlError> {
    headers.iter().position(|h| h.trim() == name).ok_or_else(|| {
        CsvToHtmlError::Config(format!("Missing required column: {}", name))
    })
}
