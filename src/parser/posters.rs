//! Poster CSV Parser
//!
//! ポスター・デモ等の発表リストCSVを読み込むモジュール。
//! カラム名の揺れが大きいため、空白を除去した小文字比較で候補名と
//! 突き合わせます（例: "Presentation Type" → "presentationtype"）。

use csv::ReaderBuilder;

use crate::columns::find_squashed_column;
use crate::error::CsvToHtmlError;
use crate::types::PosterItem;

/// 発表種別カラムの候補名（空白除去・小文字）
const TYPE_KEYS: [&str; 3] = ["presentationtype", "type", "category"];

/// タイトルカラムの候補名
const TITLE_KEYS: [&str; 4] = ["title", "papertitle", "worktitle", "demotitle"];

/// 著者カラムの候補名
const AUTHOR_KEYS: [&str; 3] = ["authors", "author(s)", "authorlist"];

/// ポスターCSVを読み込む
///
/// - タイトルカラムは必須、種別・著者カラムは任意です
/// - 種別セルが空の行は直前の値を引き継ぎ、種別カラム自体がない場合は
///   全行が"Posters"になります
/// - タイトルが空の行はスキップします
pub(crate) fn load_poster_items(text: &str) -> Result<Vec<PosterItem>, CsvToHtmlError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let title_col = find_squashed_column(&headers, &TITLE_KEYS).ok_or_else(|| {
        CsvToHtmlError::MissingColumns {
            missing: vec!["title".to_string()],
            headers: headers.iter().map(String::from).collect(),
        }
    })?;
    let type_col = find_squashed_column(&headers, &TYPE_KEYS);
    let authors_col = find_squashed_column(&headers, &AUTHOR_KEYS);

    let mut items = Vec::new();
    let mut current_type = String::new();
    for result in reader.records() {
        let record = result?;
        if let Some(i) = type_col {
            let cell = record.get(i).unwrap_or("").trim();
            if !cell.is_empty() {
                current_type = cell.to_string();
            }
        }

        let title = record.get(title_col).unwrap_or("").trim();
        if title.is_empty() {
            continue;
        }

        let authors = authors_col
            .map(|i| split_authors(record.get(i).unwrap_or("")))
            .unwrap_or_default();

        items.push(PosterItem {
            group_label: normalize_type_label(&current_type),
            title: title.to_string(),
            authors,
        });
    }
    Ok(items)
}

/// 著者文字列を個々の著者に分割
///
/// セミコロンがあればセミコロンで、なければ括弧の外側にあるカンマで
/// 分割します（所属に含まれるカンマを著者区切りと誤認しないため）。
fn split_authors(blob: &str) -> Vec<String> {
    let raw: Vec<String> = if blob.contains(';') {
        blob.split(';').map(String::from).collect()
    } else {
        split_top_level_commas(blob)
    };
    raw.iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .map(String::from)
        .collect()
}

/// 括弧の深さ0にあるカンマで分割
fn split_top_level_commas(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    for c in s.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' if depth == 0 => {
                parts.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    parts.push(current);
    parts
}

/// 発表種別ラベルを正規化
///
/// 既知の種別は正準ラベル（"Posters"、"Demos"など）に揃え、
/// 未知の種別はタイトルケースにして返します。空の種別は"Posters"扱い。
fn normalize_type_label(raw: &str) -> String {
    let t = raw.trim().to_lowercase();
    if t.is_empty() || t.starts_with("poster") {
        "Posters".to_string()
    } else if t.starts_with("demo") {
        "Demos".to_string()
    } else if t == "src" || t.contains("student research competition") {
        "Student Research Competition".to_string()
    } else if t == "dc" || t.starts_with("doctoral") {
        "Doctoral Consortium".to_string()
    } else {
        title_case(&t)
    }
}

/// 単語の先頭だけを大文字にする（英字以外の直後の英字を語頭とみなす）
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
