//! Date/Time Module
//!
//! CSVセルに含まれる日付・時刻文字列の解析と、表示用文字列への整形を提供します。
//! 解析は常にベストエフォートで行い、不正な入力に対しては`None`を返します。

use chrono::{Datelike, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// 受理する日付形式
///
/// `%y`は2桁年を先に確定させるため`%Y`より前に置きます。`%B`/`%A`は
/// 解析時に省略形（`Oct`、`Mon`）も受理します。
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%A, %B %d, %Y",
];

/// 受理する時刻形式（12時間表記を先に試す）
const TIME_FORMATS: &[&str] = &["%I:%M %p", "%I %p", "%H:%M", "%H"];

/// 日付文字列を解析
///
/// # 引数
///
/// * `value` - CSVセルの生の文字列
///
/// # 戻り値
///
/// 解析に成功した場合は`Some(NaiveDate)`、失敗した場合は`None`。
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let s = value.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// 単一の時刻文字列を解析
///
/// 空文字列と`TBD`（大文字小文字問わず）は`None`を返します。
/// `3pm`のような表記は`3 PM`に正規化してから解析します。
pub(crate) fn parse_time_piece(piece: &str) -> Option<NaiveTime> {
    let s = piece.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("tbd") {
        return None;
    }
    let s = normalize_meridiem(s);
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&s, fmt).ok())
}

/// 時刻範囲文字列を(開始, 終了)に解析
///
/// en/emダッシュはハイフンに正規化し、最初のハイフンで分割します。
/// 午前/午後マーカーが右側にのみ付いている場合は左側にも引き継ぎます
/// （例: `9:00 - 10:45 AM` → 09:00と10:45）。
///
/// # 戻り値
///
/// - 範囲: `(Some(start), Some(end))`（各側は解析失敗時`None`）
/// - 単一時刻: `(Some(start), None)`
/// - 空文字列・`TBD`: `(None, None)`
pub(crate) fn parse_time_range(value: &str) -> (Option<NaiveTime>, Option<NaiveTime>) {
    let s = value.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("tbd") {
        return (None, None);
    }
    let s = s.replace('–', "-").replace('—', "-");
    match s.split_once('-') {
        None => (parse_time_piece(&s), None),
        Some((left, right)) => {
            let mut left = normalize_meridiem(left);
            let right = normalize_meridiem(right);
            // 右側だけに午前/午後が付く場合は左側に引き継ぐ
            if let Some(mer) = meridiem_suffix(&right) {
                if meridiem_suffix(&left).is_none() {
                    left = format!("{} {}", left, mer);
                }
            }
            (parse_time_piece(&left), parse_time_piece(&right))
        }
    }
}

/// 午前/午後マーカーを大文字化し、直前に空白を1つ確保する
///
/// `3PM` → `3 PM`、`3:30pm` → `3:30 PM`
fn normalize_meridiem(s: &str) -> String {
    let s2 = s.trim();
    let chars: Vec<char> = s2.chars().collect();
    let n = chars.len();
    if n < 2 {
        return s2.to_string();
    }
    let m1 = chars[n - 2].to_ascii_lowercase();
    let m2 = chars[n - 1].to_ascii_lowercase();
    if !((m1 == 'a' || m1 == 'p') && m2 == 'm') {
        return s2.to_string();
    }
    let mer = if m1 == 'a' { "AM" } else { "PM" };
    let rest: String = chars[..n - 2].iter().collect();
    if rest.is_empty() || rest.ends_with(' ') {
        format!("{}{}", rest, mer)
    } else {
        format!("{} {}", rest, mer)
    }
}

/// 文字列末尾の午前/午後マーカーを返す
fn meridiem_suffix(s: &str) -> Option<&'static str> {
    let t = s.trim().to_ascii_lowercase();
    if t.len() < 2 {
        return None;
    }
    if t.ends_with("am") {
        Some("AM")
    } else if t.ends_with("pm") {
        Some("PM")
    } else {
        None
    }
}

/// 時刻を表示用文字列に整形（例: `9:00 AM`）
pub(crate) fn fmt_time(t: Option<NaiveTime>) -> String {
    match t {
        Some(t) => t.format("%-I:%M %p").to_string(),
        None => String::new(),
    }
}

/// 時刻範囲を表示用文字列に整形
///
/// 両方あれば`"9:00 AM - 10:45 AM"`、開始のみなら`"9:00 AM"`、
/// 開始がなければ空文字列。
pub(crate) fn format_time_range(start: Option<NaiveTime>, end: Option<NaiveTime>) -> String {
    match (start, end) {
        (Some(s), Some(e)) => format!("{} - {}", fmt_time(Some(s)), fmt_time(Some(e))),
        (Some(s), None) => fmt_time(Some(s)),
        _ => String::new(),
    }
}

/// 日付から要約グリッド用の日ラベルを生成（例: `Monday, Oct. 27`）
pub(crate) fn human_day_label(d: Option<NaiveDate>) -> String {
    match d {
        Some(d) => d.format("%A, %b. %-d").to_string(),
        None => String::new(),
    }
}

/// 日付セルの生文字列から完全な日ラベルを生成
///
/// 解析できた場合は`Monday, October 27, 2025`形式、できなかった場合は
/// 生の文字列をそのまま返します（詳細プログラムの見出し用）。
pub(crate) fn date_label_long_or_raw(raw: &str) -> String {
    match parse_date(raw) {
        Some(d) => d.format("%A, %B %-d, %Y").to_string(),
        None => raw.trim().to_string(),
    }
}

/// 日付セルの生文字列から短縮日ラベルを生成（例: `Mon Oct 27 ’25`）
pub(crate) fn date_label_short_or_raw(raw: &str) -> String {
    match parse_date(raw) {
        Some(d) => format!("{} \u{2019}{:02}", d.format("%a %b %-d"), d.year() % 100),
        None => raw.trim().to_string(),
    }
}

/// 日付セルの生文字列からISO形式（`YYYY-MM-DD`）を生成
///
/// `<time datetime="...">`属性用。解析できない場合は生の文字列を返します。
pub(crate) fn date_iso_or_raw(raw: &str) -> String {
    match parse_date(raw) {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => raw.trim().to_string(),
    }
}

static MERIDIEM_SPACING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s*([AP]M)").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// 時刻範囲文字列を詳細プログラムの表示用に整形
///
/// 午前/午後マーカーの直前に空白を確保し、ハイフンを` – `（enダッシュ）に
/// 置き換え、連続する空白を1つにまとめます。マーカーの大文字小文字は
/// 入力のまま保持されます。
pub(crate) fn normalize_time_range_display(time_str: &str) -> String {
    let t = time_str.trim();
    if t.is_empty() {
        return String::new();
    }
    if t.eq_ignore_ascii_case("tbd") {
        return "TBD".to_string();
    }
    let t = MERIDIEM_SPACING_RE.replace_all(t, " $1").to_string();
    let t = t.replace('-', " – ");
    WHITESPACE_RE.replace_all(&t, " ").trim().to_string()
}
