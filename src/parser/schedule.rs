//! Schedule CSV Parser
//!
//! スケジュールCSVを解析し、要約グリッド用の`Session`一覧と
//! 詳細プログラム用の`ScheduleSlot`一覧を構築するモジュール。
//!
//! どちらのローダーも同じカラム自動検出器を使用し、日付カラムの
//! 空セルは直前の値で前方補完します（表計算ソフトの結合セル対策）。

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::columns::detect_columns;
use crate::datetime::{human_day_label, normalize_time_range_display, parse_date, parse_time_range};
use crate::error::CsvToHtmlError;
use crate::types::{PaperTag, ScheduleSlot, Session, SessionKind, SlotPaper};

/// スケジュールCSVから要約グリッド用のセッション一覧を読み込む
///
/// - 日付セルが空の行は直前の日付を引き継ぎます
/// - Session TypeとSession Nameが両方空の行はスキップします
/// - 開始・終了時刻がどちらも解析できない行（TBDなど）はスキップします
pub(crate) fn load_sessions(text: &str) -> Result<Vec<Session>, CsvToHtmlError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();
    let columns = detect_columns(&headers)?;

    let mut sessions = Vec::new();
    let mut current_date: Option<NaiveDate> = None;
    for result in reader.records() {
        let record = result?;
        let date_cell = field(&record, columns.date).trim();
        if !date_cell.is_empty() {
            current_date = parse_date(date_cell);
            if current_date.is_none() {
                log::warn!("unparseable date cell '{}'; forward fill stops here", date_cell);
            }
        }

        let session_type = field(&record, columns.session_type).trim();
        let session_name = field(&record, columns.session_name).trim();
        if session_type.is_empty() && session_name.is_empty() {
            continue;
        }

        let (start, end) = parse_time_range(field(&record, columns.time));
        if start.is_none() && end.is_none() {
            log::debug!("dropping untimed session '{}' from the summary", session_type);
            continue;
        }

        sessions.push(Session {
            date: current_date,
            day_label: human_day_label(current_date),
            start,
            end,
            kind: SessionKind::from_columns(session_type, session_name),
        });
    }
    Ok(sessions)
}

/// スケジュールCSVから詳細プログラム用のタイムスロットを読み込む
///
/// 戻り値は日付セルの生文字列をキーとし、出現順を保持したマップです。
/// 要約グリッドと異なり、時刻が解析できない行（TBDなど）も保持します。
/// `Paper 1`、`Paper 2`…のカラムは番号順に論文セルとして解析されます。
pub(crate) fn load_full_schedule(
    text: &str,
) -> Result<IndexMap<String, Vec<ScheduleSlot>>, CsvToHtmlError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();
    let columns = detect_columns(&headers)?;
    let paper_columns = find_paper_columns(&headers);

    let mut days: IndexMap<String, Vec<ScheduleSlot>> = IndexMap::new();
    let mut current_raw_date = String::new();
    for result in reader.records() {
        let record = result?;
        let date_cell = field(&record, columns.date).trim();
        if !date_cell.is_empty() {
            current_raw_date = date_cell.to_string();
        }

        let session_type = field(&record, columns.session_type).trim();
        if session_type.is_empty() {
            continue;
        }
        let session_name = field(&record, columns.session_name).trim();

        let time_cell = field(&record, columns.time);
        let (start, end) = parse_time_range(time_cell);

        let papers = paper_columns
            .iter()
            .filter_map(|&i| parse_paper_cell(field(&record, i)))
            .collect();

        days.entry(current_raw_date.clone())
            .or_default()
            .push(ScheduleSlot {
                time_text: normalize_time_range_display(time_cell),
                session_type: session_type.to_string(),
                session_name: session_name.to_string(),
                start,
                end,
                papers,
            });
    }
    Ok(days)
}

/// レコードからフィールドを取得（欠けている場合は空文字列）
fn field<'a>(record: &'a StringRecord, index: usize) -> &'a str {
    record.get(index).unwrap_or("")
}

static PAPER_COL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Paper (\d+)$").unwrap());

/// `Paper N`形式のカラムを番号順に検出
fn find_paper_columns(headers: &StringRecord) -> Vec<usize> {
    let mut found: Vec<(u32, usize)> = headers
        .iter()
        .enumerate()
        .filter_map(|(i, h)| {
            let caps = PAPER_COL_RE.captures(h.trim())?;
            let n: u32 = caps.get(1)?.as_str().parse().ok()?;
            Some((n, i))
        })
        .collect();
    found.sort();
    found.into_iter().map(|(_, i)| i).collect()
}

/// 論文セルを解析して`SlotPaper`を構築
///
/// セルは複数行を想定し、1行目をタイトル、残りを著者とみなします。
/// 1行しかない場合は` — `、` -- `、` | `のいずれかでタイトルと著者を
/// 分離します。空セルは`None`。
fn parse_paper_cell(cell: &str) -> Option<SlotPaper> {
    let lines: Vec<&str> = cell.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    let (&title_line, author_lines) = lines.split_first()?;

    let mut title = title_line.to_string();
    let mut authors_blob = author_lines.join(" ");
    if authors_blob.is_empty() {
        for sep in [" \u{2014} ", " -- ", " | "] {
            if let Some((t, a)) = title.split_once(sep) {
                let t = t.trim().to_string();
                authors_blob = a.trim().to_string();
                title = t;
                break;
            }
        }
    }

    let (tag, title) = extract_tag_and_title(&title);
    let authors = authors_blob
        .split(';')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(String::from)
        .collect();

    Some(SlotPaper {
        tag,
        title,
        authors,
    })
}

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(([^)]+)\)\s*(.*)$").unwrap());

/// タイトル先頭の括弧タグを抽出
///
/// 既知のトークン（TACCESS、Shortなど）はバッジになり、未知のトークンでも
/// 括弧部分はタイトルから取り除かれます。
fn extract_tag_and_title(title: &str) -> (Option<PaperTag>, String) {
    match TAG_RE.captures(title) {
        Some(caps) => {
            let token = caps.get(1).map_or("", |m| m.as_str());
            let rest = caps.get(2).map_or("", |m| m.as_str());
            (PaperTag::from_token(token), rest.to_string())
        }
        None => (None, title.to_string()),
    }
}
