//! Full Schedule Renderer
//!
//! 詳細プログラムページのHTMLフラグメントを描画するモジュール。
//! 日ごとの`<section>`に前後の日へのナビゲーションとタイムスロット一覧を
//! 並べ、論文セッションには各論文のタイトル・著者リストを展開します。
//!
//! ポスターページが関連付けられた日のポスターセッションは、スロットの
//! 見出しを外部ページ（`poster_session_a.html`など）へのリンクにします。

use std::collections::HashMap;

use chrono::Weekday;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::anchor::{day_anchor_or_slug, slot_anchor, AnchorRegistry};
use crate::datetime::{date_iso_or_raw, date_label_long_or_raw, date_label_short_or_raw};
use crate::output::escape_html;
use crate::types::{PaperTag, ScheduleSlot};

/// 詳細プログラム全体を描画
///
/// `days`は日付セルの生文字列をキーとした出現順のマップ、`poster_pages`は
/// ポスターページを持つ曜日とそのページ文字の組です。日セクションは
/// 空行で区切られ、末尾に改行は付きません。
pub(crate) fn render_full_schedule(
    days: &IndexMap<String, Vec<ScheduleSlot>>,
    poster_pages: &[(Weekday, char)],
) -> String {
    let letters: HashMap<&'static str, char> = poster_pages
        .iter()
        .map(|&(day, letter)| (weekday_key(day), letter))
        .collect();
    let anchors: Vec<String> = days.keys().map(|raw| day_anchor_or_slug(raw)).collect();

    let sections: Vec<String> = days
        .iter()
        .enumerate()
        .map(|(i, (raw, slots))| {
            let prev = if i > 0 {
                Some(anchors[i - 1].as_str())
            } else {
                None
            };
            let next = anchors.get(i + 1).map(String::as_str);
            day_section(raw, slots, &anchors[i], prev, next, &letters)
        })
        .collect();
    sections.join("\n\n")
}

/// 曜日からポスターページのキーを導出
fn weekday_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// 1日分のセクションを描画
fn day_section(
    raw_date: &str,
    slots: &[ScheduleSlot],
    anchor: &str,
    prev: Option<&str>,
    next: Option<&str>,
    letters: &HashMap<&'static str, char>,
) -> String {
    let label = date_label_long_or_raw(raw_date);
    let short = date_label_short_or_raw(raw_date);
    let iso = date_iso_or_raw(raw_date);
    let poster_letter = letters.get(anchor).copied();

    let mut registry = AnchorRegistry::new();
    let slot_blocks: Vec<String> = slots
        .iter()
        .map(|slot| render_slot(slot, anchor, poster_letter, &mut registry))
        .collect();

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("          <!-- {} -->", label));
    lines.push(format!(
        "          <section class=\"day-schedule\" id=\"{}\">",
        anchor
    ));
    lines.push("            <div class=\"day-header-container\">".to_string());
    lines.push("              <h3 class=\"day-header\">".to_string());
    lines.push(format!(
        "                <time datetime=\"{}\">",
        escape_html(&iso)
    ));
    lines.push(format!(
        "                  <span class=\"date-long\">{}</span>",
        escape_html(&label)
    ));
    lines.push(format!(
        "                  <span class=\"date-short\">{}</span>",
        escape_html(&short)
    ));
    lines.push("                </time>".to_string());
    lines.push("              </h3>".to_string());
    lines.push("              <div class=\"day-navigation\">".to_string());
    lines.push(nav_link(prev, "prev", '\u{2039}', "Previous day"));
    lines.push(nav_link(next, "next", '\u{203A}', "Next day"));
    lines.push("              </div>".to_string());
    lines.push("            </div>".to_string());
    lines.extend(slot_blocks);
    lines.push("          </section>".to_string());
    lines.join("\n")
}

/// 前日・翌日へのナビゲーションリンク
///
/// 先頭・末尾の日では`href="#"`とし、無効化クラスを付けます。
fn nav_link(target: Option<&str>, direction: &str, glyph: char, title: &str) -> String {
    match target {
        Some(anchor) => format!(
            "                <a href=\"#{}\" class=\"day-nav-btn day-nav-{}\" title=\"{}\">{}</a>",
            anchor, direction, title, glyph
        ),
        None => format!(
            "                <a href=\"#\" class=\"day-nav-btn day-nav-{} day-nav-disabled\" title=\"{}\">{}</a>",
            direction, title, glyph
        ),
    }
}

/// 1タイムスロットを描画
fn render_slot(
    slot: &ScheduleSlot,
    day_anchor: &str,
    day_poster_letter: Option<char>,
    registry: &mut AnchorRegistry,
) -> String {
    let id = slot_anchor(
        day_anchor,
        &slot.session_type,
        &slot.session_name,
        slot.start,
        slot.end,
        registry,
    );
    let class = slot.category().css_class();
    let time_text = if slot.time_text.is_empty() {
        "TBD"
    } else {
        &slot.time_text
    };
    let poster_link = if slot.is_poster_session() {
        day_poster_letter
    } else {
        None
    };

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(
        "            <div id=\"{}\" class=\"{}\">",
        id, class
    ));
    lines.push("              <div class=\"time-slot-header\">".to_string());
    lines.push(format!(
        "                <span class=\"time-range\">{}</span>",
        escape_html(time_text)
    ));
    if slot.is_paper_session() {
        lines.push("                <h4 class=\"slot-title\">".to_string());
        lines.push(format!(
            "                  <span class=\"session-number\">{}</span>",
            escape_html(&slot.session_type)
        ));
        lines.push(format!(
            "                  <span class=\"session-topic\">{}</span>",
            escape_html(&slot.session_name)
        ));
        lines.push("                </h4>".to_string());
    } else if let Some(letter) = poster_link {
        lines.push(format!(
            "                <h4 class=\"slot-title\"><a class=\"slot-link\" href=\"poster_session_{}.html\">{}</a></h4>",
            letter.to_ascii_lowercase(),
            escape_html(&slot.session_type)
        ));
    } else {
        lines.push(format!(
            "                <h4 class=\"slot-title\">{}</h4>",
            escape_html(&slot.session_type)
        ));
    }
    lines.push("              </div>".to_string());

    if !slot.papers.is_empty() {
        lines.push("              <div class=\"program-block\">".to_string());
        lines.push("                <div class=\"paper-list\">".to_string());
        for paper in &slot.papers {
            lines.push(paper_item(paper.tag, &paper.title, &paper.authors));
        }
        lines.push("                </div>".to_string());
        lines.push("              </div>".to_string());
    }

    if let Some(letter) = poster_link {
        let lower = letter.to_ascii_lowercase();
        lines.push(format!(
            "              <!-- Poster Session {} externalized to poster_sessions_{}.txt; page: poster_session_{}.html -->",
            letter.to_ascii_uppercase(),
            lower,
            lower
        ));
    }

    lines.push("            </div>".to_string());
    lines.join("\n")
}

/// 1論文の項目を描画
///
/// ポスターページでも同じ項目形式を使うため、フィールドを直接受け取ります。
pub(crate) fn paper_item(tag: Option<PaperTag>, title: &str, authors: &[String]) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("                  <div class=\"paper-item\">".to_string());
    lines.push("                    <h6 class=\"paper-title\">".to_string());
    if let Some(tag) = tag {
        lines.push(format!(
            "                      <span class=\"paper-tag {}\">{}</span>",
            tag.css_class(),
            tag.label()
        ));
    }
    lines.push(format!("                      {}", escape_html(title)));
    lines.push("                    </h6>".to_string());
    if !authors.is_empty() {
        lines.push("                    <!-- prettier-ignore -->".to_string());
        lines.push("                    <ul class=\"author-list\">".to_string());
        for author in authors {
            lines.push(author_li(author));
        }
        lines.push("                    </ul>".to_string());
    }
    lines.push("                  </div>".to_string());
    lines.join("\n")
}

static AFFIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<name>.*?)\s*\((?P<aff>.*)\)\s*$").unwrap());

/// 著者1名の`<li>`を描画
///
/// `名前 (所属)`形式の場合は所属を`affiliation`スパンに分離します。
/// 所属の括弧は最後の閉じ括弧まで貪欲に取るため、所属内の括弧も
/// 所属の一部として扱われます。
fn author_li(author: &str) -> String {
    if let Some(caps) = AFFIL_RE.captures(author) {
        let name = caps.name("name").map_or("", |m| m.as_str());
        let name = name.trim().trim_matches(|c| c == ',' || c == ';').trim();
        let aff = caps.name("aff").map_or("", |m| m.as_str());
        if aff.is_empty() {
            format!("                      <li>{}</li>", escape_html(name))
        } else {
            format!(
                "                      <li>{}<span class=\"affiliation\"> {}</span></li>",
                escape_html(name),
                escape_html(aff)
            )
        }
    } else {
        format!("                      <li>{}</li>", escape_html(author.trim()))
    }
}
