//! Column Detection Module
//!
//! スケジュールCSVのヘッダー自動検出を提供します。カンファレンスの年度ごとに
//! ヘッダー表記が揺れるため（`Time`と`Time (MT)`など）、固定名ではなく
//! 候補リストとの段階的な照合で列を特定します。
//!
//! 照合は役割ごとに独立して行われ、優先順位は次の通りです:
//! 1. 完全一致またはヘッダーが候補で始まる（前方一致）
//! 2. ヘッダーが候補を含む（部分一致）
//!
//! どちらのパスも候補リストの順に試行し、最初に一致したヘッダーを採用します。

use csv::StringRecord;

use crate::error::CsvToHtmlError;

/// 日付列の候補（優先順）
const DATE_KEYS: &[&str] = &["date", "day/date", "when"];
/// 時刻列の候補（優先順）
const TIME_KEYS: &[&str] = &["time", "time (mt)"];
/// セッション種別列の候補（優先順）
const TYPE_KEYS: &[&str] = &["session type", "type"];
/// セッション名列の候補（優先順）
const NAME_KEYS: &[&str] = &["session name", "name", "track"];

/// 検出されたスケジュール列のインデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnMap {
    /// 日付列
    pub date: usize,
    /// 時刻列
    pub time: usize,
    /// セッション種別列
    pub session_type: usize,
    /// セッション名列
    pub session_name: usize,
}

/// 候補リストに対する2段階照合
///
/// `normalized`は小文字化・トリム済みのヘッダー列。最初のパスで
/// 前方一致（完全一致を含む）、次のパスで部分一致を試します。
fn find_column(normalized: &[String], candidates: &[&str]) -> Option<usize> {
    for cand in candidates {
        for (i, header) in normalized.iter().enumerate() {
            if header == cand || header.starts_with(cand) {
                return Some(i);
            }
        }
    }
    for cand in candidates {
        for (i, header) in normalized.iter().enumerate() {
            if header.contains(cand) {
                return Some(i);
            }
        }
    }
    None
}

/// スケジュールCSVのヘッダーから4つの役割列を検出
///
/// ヘッダー行が空の場合は`Config`エラー、いずれかの役割が検出できない
/// 場合は不足役割と実際のヘッダーを列挙した`MissingColumns`エラーを
/// 返します。
pub(crate) fn detect_columns(headers: &StringRecord) -> Result<ColumnMap, CsvToHtmlError> {
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(CsvToHtmlError::Config(
            "CSV file has no header row".to_string(),
        ));
    }

    let normalized: Vec<String> = headers
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let date = find_column(&normalized, DATE_KEYS);
    let time = find_column(&normalized, TIME_KEYS);
    let session_type = find_column(&normalized, TYPE_KEYS);
    let session_name = find_column(&normalized, NAME_KEYS);

    if let (Some(date), Some(time), Some(session_type), Some(session_name)) =
        (date, time, session_type, session_name)
    {
        log::debug!(
            "detected columns: date={}, time={}, type={}, name={}",
            date,
            time,
            session_type,
            session_name
        );
        return Ok(ColumnMap {
            date,
            time,
            session_type,
            session_name,
        });
    }

    let mut missing = Vec::new();
    for (role, found) in [
        ("date", date),
        ("time", time),
        ("type", session_type),
        ("name", session_name),
    ] {
        if found.is_none() {
            missing.push(role.to_string());
        }
    }
    Err(CsvToHtmlError::MissingColumns {
        missing,
        headers: headers.iter().map(|h| h.to_string()).collect(),
    })
}

/// 空白を除去した小文字形でヘッダーを照合（ポスターCSV用）
///
/// ポスターCSVはヘッダー表記の揺れがさらに大きいため、すべての空白を
/// 取り除いた形（`"Paper Title"` → `"papertitle"`）で候補集合と完全一致
/// 照合します。
pub(crate) fn find_squashed_column(headers: &StringRecord, keys: &[&str]) -> Option<usize> {
    for (i, header) in headers.iter().enumerate() {
        let squashed: String = header
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if keys.contains(&squashed.as_str()) {
            return Some(i);
        }
    }
    None
}
