//! Anchor ID Module
//!
//! 要約グリッドと詳細プログラムの両方で使用するアンカーIDの生成を提供します。
//! 両ページが同一の規則でIDを生成することで、ページ間の`#`リンクが一致します。
//!
//! ID形式: `{曜日}-{セッション種別スラグ}-{セッション名スラグ}-{時刻トークン}`
//! （空の要素は省略。例: `monday-paper-session-1a-inclusive-mixed-reality-0900-1045`）

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::datetime::parse_date;
use crate::types::is_paper_session_type;

/// 文字列をASCIIスラグに変換
///
/// NFKD分解で非ASCII文字を可能な限りASCIIへ落とし、小文字化した上で
/// 英数字以外の連続を1つのハイフンにまとめます。先頭末尾のハイフンは
/// 取り除かれます（例: `"Paper Session 1A"` → `"paper-session-1a"`）。
pub(crate) fn slugify(s: &str) -> String {
    let ascii: String = s.nfkd().filter(|c| c.is_ascii()).collect();
    let ascii = ascii.to_lowercase();
    let mut out = String::with_capacity(ascii.len());
    let mut pending_hyphen = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    out
}

/// 日付から曜日アンカーを生成（例: `monday`。日付がなければ空文字列）
pub(crate) fn weekday_anchor(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%A").to_string().to_lowercase(),
        None => String::new(),
    }
}

/// 日付セルの生文字列から日アンカーを生成
///
/// 解析できた場合は曜日名の小文字、できなかった場合は生文字列のスラグ。
pub(crate) fn day_anchor_or_slug(raw_date: &str) -> String {
    match parse_date(raw_date) {
        Some(d) => weekday_anchor(Some(d)),
        None => slugify(raw_date.trim()),
    }
}

/// 解析済み時刻からアンカー用の時刻トークンを生成
///
/// - 両方あり: `HHMM-HHMM`（24時間表記）
/// - 開始のみ: `HHMM`
/// - 開始なし: `tbd`
pub(crate) fn time_range_token(start: Option<NaiveTime>, end: Option<NaiveTime>) -> String {
    match (start, end) {
        (Some(s), Some(e)) => format!("{}-{}", s.format("%H%M"), e.format("%H%M")),
        (Some(s), None) => s.format("%H%M").to_string(),
        _ => "tbd".to_string(),
    }
}

/// 1日分のアンカーIDを管理するレジストリ
///
/// 同一のベースIDが再度要求された場合は`-x2`、`-x3`…の接尾辞を付けて
/// 一意性を保証します。レジストリは日ごとに作り直します。
#[derive(Debug, Default)]
pub(crate) struct AnchorRegistry {
    issued: HashSet<String>,
}

impl AnchorRegistry {
    /// 空のレジストリを生成
    pub fn new() -> Self {
        Self {
            issued: HashSet::new(),
        }
    }

    /// ベースIDから一意なアンカーIDを発行
    pub fn issue(&mut self, base: &str) -> String {
        let mut anchor = base.to_string();
        let mut i = 2;
        while self.issued.contains(&anchor) {
            anchor = format!("{}-x{}", base, i);
            i += 1;
        }
        self.issued.insert(anchor.clone());
        anchor
    }
}

/// タイムスロットのアンカーIDを発行する共有リゾルバ
///
/// 要約グリッドと詳細プログラムの双方がこの関数を通してIDを生成します。
/// セッション名のスラグは論文セッションの場合のみ含まれます。
///
/// # 引数
///
/// * `day_anchor` - 日アンカー（例: `monday`。空文字列可）
/// * `session_type` - セッション種別（論文セッションではコード）
/// * `session_name` - セッション名（論文セッション以外では無視される）
/// * `start` / `end` - 解析済み時刻
/// * `registry` - その日のアンカーレジストリ
pub(crate) fn slot_anchor(
    day_anchor: &str,
    session_type: &str,
    session_name: &str,
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    registry: &mut AnchorRegistry,
) -> String {
    let st_slug = slugify(session_type);
    let sn_slug = if is_paper_session_type(session_type) {
        slugify(session_name)
    } else {
        String::new()
    };
    let ttok = time_range_token(start, end);

    let mut parts: Vec<&str> = Vec::new();
    for p in [day_anchor, st_slug.as_str(), sn_slug.as_str(), ttok.as_str()] {
        if !p.is_empty() {
            parts.push(p);
        }
    }
    let base = if parts.is_empty() {
        "timeslot".to_string()
    } else {
        parts.join("-")
    };
    registry.issue(&base)
}

static POSTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)poster\s*session\s*([A-Za-z0-9]+)").unwrap());

/// ポスターセッションの外部ページへのリンクを返す
///
/// タイトルが`Poster Session A`の形（大文字小文字問わず）に一致する場合、
/// `poster_session_a.html`のような外部ページ名を返します。一致しない場合は
/// `None`（通常のページ内アンカーを使用）。
pub(crate) fn poster_external_href(title: &str) -> Option<String> {
    let caps = POSTER_RE.captures(title)?;
    let key = caps.get(1)?.as_str().to_lowercase();
    Some(format!("poster_session_{}.html", key))
}
