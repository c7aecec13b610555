//! Schedule Grid Module
//!
//! セッション一覧から日別・時間帯別の並行グループ構造を構築し、
//! 要約グリッド（div形式）とテーブル形式の2種類のHTMLフラグメントを
//! 描画するモジュール。
//!
//! グリッドは列優先DOM（1日=1列）で、行は全日共通:
//! ヘッダー行、午前の最大行数、ランチ行（常に1行）、午後の最大行数、
//! 夕方の最大行数（夕方セッションがある場合のみ）。

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use indexmap::IndexMap;

use crate::anchor::{poster_external_href, slot_anchor, weekday_anchor, AnchorRegistry};
use crate::datetime::format_time_range;
use crate::output::{escape_html, indent_block};
use crate::types::{DayPart, Session};

/// 1日分のスケジュール列
#[derive(Debug)]
pub(crate) struct DayColumn {
    /// 表示用ラベル（例: "Monday, Oct. 27"）
    pub label: String,

    /// 代表日付（列の並び順とアンカー生成に使用）
    pub date: Option<NaiveDate>,

    /// 午前の並行セッショングループ
    pub morning: Vec<Vec<Session>>,

    /// ランチセッション（最も早い1件のみ保持）
    pub lunch: Option<Session>,

    /// 午後の並行セッショングループ
    pub afternoon: Vec<Vec<Session>>,

    /// 夕方以降の並行セッショングループ
    pub evening: Vec<Vec<Session>>,
}

/// 要約スケジュールのグリッド構造
pub(crate) struct SummaryGrid {
    /// 日付順に並んだ列
    days: Vec<DayColumn>,

    /// 午前ブロックの全日最大行数
    morning_rows: usize,

    /// 午後ブロックの全日最大行数
    afternoon_rows: usize,

    /// 夕方ブロックの全日最大行数
    evening_rows: usize,
}

/// 時刻のみの並び順キー（欠けた時刻は00:00）
fn time_only_key(s: &Session) -> (NaiveTime, NaiveTime) {
    (
        s.start.unwrap_or(NaiveTime::MIN),
        s.end.unwrap_or(NaiveTime::MIN),
    )
}

/// 同一時間帯のセッションを並行グループにまとめる
///
/// `(HH:MM, HH:MM)`のキーでグループ化し、グループをキー順、
/// グループ内を（コード、名前、タイトル）順に並べます。
fn group_parallel(sessions: Vec<Session>) -> Vec<Vec<Session>> {
    let mut buckets: BTreeMap<(String, String), Vec<Session>> = BTreeMap::new();
    for s in sessions {
        buckets.entry(s.time_key()).or_default().push(s);
    }
    buckets
        .into_values()
        .map(|mut group| {
            group.sort_by(|a, b| {
                (a.code(), a.name(), a.title()).cmp(&(b.code(), b.name(), b.title()))
            });
            group
        })
        .collect()
}

impl SummaryGrid {
    /// セッション一覧からグリッド構造を構築
    ///
    /// 1. 日ラベルごとにバケット化（出現順を保持）
    /// 2. 各日を午前・ランチ・午後・夕方に分割してソート
    /// 3. 時間帯ごとに並行グループ化（ランチは最初の1件のみ）
    /// 4. 列を（代表日付、ラベル）順に整列（日付のない列が先頭）
    pub fn build(sessions: Vec<Session>) -> Self {
        let mut buckets: IndexMap<String, Vec<Session>> = IndexMap::new();
        for s in sessions {
            buckets.entry(s.day_label.clone()).or_default().push(s);
        }

        let mut days: Vec<DayColumn> = Vec::with_capacity(buckets.len());
        for (label, list) in buckets {
            let mut morning: Vec<Session> = Vec::new();
            let mut lunch: Vec<Session> = Vec::new();
            let mut afternoon: Vec<Session> = Vec::new();
            let mut evening: Vec<Session> = Vec::new();
            for s in list {
                match s.day_part() {
                    DayPart::Morning => morning.push(s),
                    DayPart::Lunch => lunch.push(s),
                    DayPart::Afternoon => afternoon.push(s),
                    DayPart::Evening => evening.push(s),
                }
            }
            morning.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
            afternoon.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
            lunch.sort_by(|a, b| time_only_key(a).cmp(&time_only_key(b)));
            evening.sort_by(|a, b| time_only_key(a).cmp(&time_only_key(b)));

            let date = morning
                .first()
                .or_else(|| lunch.first())
                .or_else(|| afternoon.first())
                .or_else(|| evening.first())
                .and_then(|s| s.date);

            days.push(DayColumn {
                label,
                date,
                morning: group_parallel(morning),
                lunch: lunch.into_iter().next(),
                afternoon: group_parallel(afternoon),
                evening: group_parallel(evening),
            });
        }

        days.sort_by(|a, b| {
            (a.date.unwrap_or(NaiveDate::MIN), a.label.as_str())
                .cmp(&(b.date.unwrap_or(NaiveDate::MIN), b.label.as_str()))
        });

        let morning_rows = days.iter().map(|d| d.morning.len()).max().unwrap_or(0);
        let afternoon_rows = days.iter().map(|d| d.afternoon.len()).max().unwrap_or(0);
        let evening_rows = days.iter().map(|d| d.evening.len()).max().unwrap_or(0);

        SummaryGrid {
            days,
            morning_rows,
            afternoon_rows,
            evening_rows,
        }
    }

    /// 列数を取得
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// 要約グリッド（列優先DOMのdivグリッド）を描画
    ///
    /// 各セルは`gc-{列}`/`gr-{行}`クラスで位置を示します。アンカーIDは
    /// 日ごとに新しいレジストリで発行され、詳細プログラム側のIDと一致
    /// します。
    pub fn render_grid(&self) -> String {
        let row_lunch = 2 + self.morning_rows;
        let row_afternoon_start = row_lunch + 1;
        let row_evening_start = row_afternoon_start + self.afternoon_rows;

        let mut cells: Vec<String> = Vec::new();
        for (i, day) in self.days.iter().enumerate() {
            let col = i + 1;
            let mut registry = AnchorRegistry::new();
            let day_anchor = weekday_anchor(day.date);

            cells.push(format!(
                "<div class=\"schedule-grid-th gc-{} gr-1\"><h2 class=\"day-heading\">{}</h2></div>",
                col,
                escape_html(&day.label)
            ));

            for r in 0..self.morning_rows {
                let row = 2 + r;
                match day.morning.get(r) {
                    Some(group) => cells.push(grid_cell_html(
                        group,
                        &day.label,
                        &day_anchor,
                        &mut registry,
                        col,
                        row,
                    )),
                    None => cells.push(empty_grid_cell(col, row, "Empty")),
                }
            }

            match &day.lunch {
                Some(lunch) => cells.push(grid_cell_html(
                    std::slice::from_ref(lunch),
                    &day.label,
                    &day_anchor,
                    &mut registry,
                    col,
                    row_lunch,
                )),
                None => cells.push(empty_grid_cell(col, row_lunch, "No lunch slot")),
            }

            for r in 0..self.afternoon_rows {
                let row = row_afternoon_start + r;
                match day.afternoon.get(r) {
                    Some(group) => cells.push(grid_cell_html(
                        group,
                        &day.label,
                        &day_anchor,
                        &mut registry,
                        col,
                        row,
                    )),
                    None => cells.push(empty_grid_cell(col, row, "Empty")),
                }
            }

            if self.evening_rows > 0 {
                for r in 0..self.evening_rows {
                    let row = row_evening_start + r;
                    match day.evening.get(r) {
                        Some(group) => cells.push(grid_cell_html(
                            group,
                            &day.label,
                            &day_anchor,
                            &mut registry,
                            col,
                            row,
                        )),
                        None => cells.push(empty_grid_cell(col, row, "Empty")),
                    }
                }
            }
        }

        format!(
            "<!-- Start of Schedule Grid (column-major DOM) -->\n\n\
             <div class=\"schedule-grid daycount-{}\" aria-label=\"Summarized schedule\">\n\
             {}\n\
             </div>\n\n\
             <!-- End of Schedule Grid -->",
            self.days.len(),
            indent_block(&cells.join("\n"), 1)
        )
    }

    /// テーブル形式（`<table class="schedule-table">`）を描画
    ///
    /// 行は午前・ランチ・午後・夕方の順。各ブロックの先頭に
    /// モバイル向けの見出し行が入ります（ランチ行を除く）。
    /// こちらの形式はリンクを含みません。
    pub fn render_table(&self) -> String {
        let thead = format!(
            "<thead>\n  <tr>\n{}\n  </tr>\n</thead>",
            self.days
                .iter()
                .map(|d| format!("    <th>{}</th>", escape_html(&d.label)))
                .collect::<Vec<_>>()
                .join("\n")
        );

        let mut body_rows: Vec<String> = Vec::new();

        self.table_block_rows(&mut body_rows, |d| &d.morning, self.morning_rows, "Morning Schedule");

        let lunch_tds: Vec<String> = self
            .days
            .iter()
            .map(|d| match &d.lunch {
                Some(s) => table_cell_html(std::slice::from_ref(s)),
                None => "<td class=\"empty-cell\"></td>".to_string(),
            })
            .collect();
        body_rows.push(format!(
            "  <tr>\n{}\n  </tr>",
            indent_block(&lunch_tds.join("\n"), 1)
        ));

        self.table_block_rows(
            &mut body_rows,
            |d| &d.afternoon,
            self.afternoon_rows,
            "Afternoon Schedule",
        );

        if self.evening_rows > 0 {
            self.table_block_rows(
                &mut body_rows,
                |d| &d.evening,
                self.evening_rows,
                "Evening Schedule",
            );
        }

        let tbody = format!("<tbody>\n{}\n</tbody>", body_rows.join("\n"));

        format!(
            "<!-- Start of Schedule Table -->\n\n\
             <table class=\"schedule-table\">\n\
             {}\n\
             {}\n\
             </table>\n\n\
             <!-- End of Schedule Table -->",
            indent_block(&thead, 1),
            indent_block(&tbody, 1)
        )
    }

    /// 1時間帯ぶんのテーブル行を追加（内部ヘルパー）
    ///
    /// 見出し行は行数が0でも必ず出力します。
    fn table_block_rows<F>(
        &self,
        body_rows: &mut Vec<String>,
        select: F,
        max_rows: usize,
        mobile_header: &str,
    ) where
        F: Fn(&DayColumn) -> &[Vec<Session>],
    {
        body_rows.push(format!(
            "  <tr class=\"mobile-section-header\">\n    <td colspan=\"{}\">\n      <h3>{}</h3>\n    </td>\n  </tr>",
            self.days.len(),
            escape_html(mobile_header)
        ));
        for i in 0..max_rows {
            let tds: Vec<String> = self
                .days
                .iter()
                .map(|d| match select(d).get(i) {
                    Some(group) => table_cell_html(group),
                    None => "<td class=\"empty-cell\"></td>".to_string(),
                })
                .collect();
            body_rows.push(format!(
                "  <tr>\n{}\n  </tr>",
                indent_block(&tds.join("\n"), 1)
            ));
        }
    }
}

/// セルのARIAラベル用にセッションを1行で表す
fn session_aria(s: &Session) -> String {
    if !s.code().is_empty() {
        if !s.name().is_empty() {
            format!("{} \u{2014} {}", s.code(), s.name())
        } else {
            s.code().to_string()
        }
    } else {
        s.title().to_string()
    }
}

/// セッションのリンク先を1回だけ解決する
///
/// ポスターセッションは外部ページへ（レジストリは消費しない）、
/// それ以外はレジストリから発行したページ内アンカーへリンクします。
fn resolve_session_href(s: &Session, day_anchor: &str, registry: &mut AnchorRegistry) -> String {
    if let Some(href) = poster_external_href(s.title()) {
        return href;
    }
    format!(
        "#{}",
        slot_anchor(day_anchor, s.id_type(), s.name(), s.start, s.end, registry)
    )
}

/// グリッドの空セル
fn empty_grid_cell(col: usize, row: usize, aria: &str) -> String {
    format!(
        "<div class=\"schedule-grid-td empty-cell gc-{} gr-{}\" aria-label=\"{}\"></div>",
        col, row, aria
    )
}

/// グリッドの1セル（並行グループ）を描画
fn grid_cell_html(
    group: &[Session],
    day_label: &str,
    day_anchor: &str,
    registry: &mut AnchorRegistry,
    col: usize,
    row: usize,
) -> String {
    let css = group
        .first()
        .map(|s| s.category().css_class())
        .unwrap_or("special-session");
    let time_text = group
        .first()
        .map(|s| format_time_range(s.start, s.end))
        .unwrap_or_default();

    let aria_items: Vec<String> = group
        .iter()
        .map(session_aria)
        .filter(|x| !x.is_empty())
        .collect();
    let aria_label = format!("{}, {}: {}", day_label, time_text, aria_items.join(" | "));

    let time_prefix = if time_text.is_empty() {
        String::new()
    } else {
        format!("{}, ", time_text)
    };

    let mut parts: Vec<String> = Vec::new();
    for (i, s) in group.iter().enumerate() {
        let time_h3 = if i == 0 && !time_text.is_empty() {
            format!(
                "<h3 class=\"time-heading\">{}</h3>",
                escape_html(&time_text)
            )
        } else {
            String::new()
        };

        let href = resolve_session_href(s, day_anchor, registry);

        let item = if css == "paper-sessions" && !s.code().is_empty() {
            let session_h4 = format!(
                "<h4 class=\"session-heading\"><span class=\"session-code\">{}</span><span class=\"session-name\">{}</span></h4>",
                escape_html(s.code()),
                escape_html(s.name())
            );
            let link_label = if s.name().is_empty() {
                s.code().to_string()
            } else {
                format!("{}: {}", s.code(), s.name())
            };
            format!(
                "<div class=\"session-item\">\n{}  <a class=\"session-link\" href=\"{}\"     aria-label=\"{}{}\">\n    {}\n  </a>\n</div>",
                time_h3,
                escape_html(&href),
                escape_html(&time_prefix),
                escape_html(&link_label),
                session_h4
            )
        } else {
            let session_h4 = format!(
                "<h4 class=\"session-heading\"><span class=\"session-type\">{}</span></h4>",
                escape_html(s.title())
            );
            format!(
                "<div class=\"session-item\">\n{}  <a class=\"session-link\" href=\"{}\"     aria-label=\"{}{}\">\n    {}\n  </a>\n</div>",
                time_h3,
                escape_html(&href),
                escape_html(&time_prefix),
                escape_html(s.title()),
                session_h4
            )
        };
        parts.push(item);

        if i < group.len() - 1 {
            parts.push("<div class=\"session-divider\"></div>".to_string());
        }
    }

    format!(
        "<div class=\"schedule-grid-td {} gc-{} gr-{}\" aria-label=\"{}\">\n{}\n</div>",
        css,
        col,
        row,
        escape_html(&aria_label),
        indent_block(&parts.join("\n"), 1)
    )
}

/// テーブルの1セル（並行グループ）を描画
fn table_cell_html(group: &[Session]) -> String {
    let css = group
        .first()
        .map(|s| s.category().css_class())
        .unwrap_or("special-session");

    let mut parts: Vec<String> = Vec::new();
    for (i, s) in group.iter().enumerate() {
        let time_span = if i == 0 {
            format!(
                "  <span class=\"session-time\">{}</span>\n",
                format_time_range(s.start, s.end)
            )
        } else {
            String::new()
        };

        let item = if css == "paper-sessions" && !s.code().is_empty() {
            format!(
                "<div class=\"session-item\">\n{}  <span class=\"session-code\">{}</span>\n  <span class=\"session-name\">{}</span>\n</div>",
                time_span,
                escape_html(s.code()),
                escape_html(s.name())
            )
        } else {
            format!(
                "<div class=\"session-item\">\n{}  <span class=\"session-type\">{}</span>\n</div>",
                time_span,
                escape_html(s.title())
            )
        };
        parts.push(item);

        if i < group.len() - 1 {
            parts.push("<div class=\"session-divider\"></div>".to_string());
        }
    }

    format!(
        "<td class=\"{}\">\n{}\n</td>",
        css,
        indent_block(&parts.join("\n"), 2)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SessionKind;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn paper(
        date: NaiveDate,
        label: &str,
        start: (u32, u32),
        end: (u32, u32),
        code: &str,
        name: &str,
    ) -> Session {
        Session {
            date: Some(date),
            day_label: label.to_string(),
            start: Some(t(start.0, start.1)),
            end: Some(t(end.0, end.1)),
            kind: SessionKind::Paper {
                code: code.to_string(),
                name: name.to_string(),
            },
        }
    }

    fn other(
        date: NaiveDate,
        label: &str,
        start: (u32, u32),
        end: (u32, u32),
        title: &str,
    ) -> Session {
        Session {
            date: Some(date),
            day_label: label.to_string(),
            start: Some(t(start.0, start.1)),
            end: Some(t(end.0, end.1)),
            kind: SessionKind::Other {
                title: title.to_string(),
            },
        }
    }

    fn monday() -> NaiveDate {
        d(2025, 10, 27)
    }

    fn tuesday() -> NaiveDate {
        d(2025, 10, 28)
    }

    // build のテスト
    #[test]
    fn test_build_partitions_by_day_part() {
        let grid = SummaryGrid::build(vec![
            paper(monday(), "Monday, Oct. 27", (9, 0), (10, 45), "Paper Session 1A", "Track A"),
            other(monday(), "Monday, Oct. 27", (12, 0), (13, 0), "Lunch"),
            paper(monday(), "Monday, Oct. 27", (14, 0), (15, 30), "Paper Session 2A", "Track B"),
            other(monday(), "Monday, Oct. 27", (18, 0), (20, 0), "Welcome Reception"),
        ]);
        assert_eq!(grid.day_count(), 1);
        assert_eq!(grid.days[0].morning.len(), 1);
        assert!(grid.days[0].lunch.is_some());
        assert_eq!(grid.days[0].afternoon.len(), 1);
        assert_eq!(grid.days[0].evening.len(), 1);
        assert_eq!(grid.morning_rows, 1);
        assert_eq!(grid.afternoon_rows, 1);
        assert_eq!(grid.evening_rows, 1);
    }

    #[test]
    fn test_build_groups_parallel_sessions() {
        let grid = SummaryGrid::build(vec![
            paper(monday(), "Monday, Oct. 27", (9, 0), (10, 45), "Paper Session 1B", "Hearing"),
            paper(monday(), "Monday, Oct. 27", (9, 0), (10, 45), "Paper Session 1A", "Vision"),
            paper(monday(), "Monday, Oct. 27", (11, 0), (12, 15), "Paper Session 2A", "Motor"),
        ]);
        let day = &grid.days[0];
        assert_eq!(day.morning.len(), 2);
        // 同一時間帯は1グループにまとまり、グループ内はコード順
        assert_eq!(day.morning[0].len(), 2);
        assert_eq!(day.morning[0][0].code(), "Paper Session 1A");
        assert_eq!(day.morning[0][1].code(), "Paper Session 1B");
        assert_eq!(day.morning[1].len(), 1);
    }

    #[test]
    fn test_build_overlapping_but_unequal_ranges_stay_separate() {
        let grid = SummaryGrid::build(vec![
            paper(monday(), "Monday, Oct. 27", (9, 0), (10, 45), "Paper Session 1A", "Vision"),
            paper(monday(), "Monday, Oct. 27", (9, 0), (10, 30), "Paper Session 1B", "Hearing"),
        ]);
        // (start, end) が完全一致しない限り別グループ
        assert_eq!(grid.days[0].morning.len(), 2);
    }

    #[test]
    fn test_build_keeps_first_lunch_only() {
        let grid = SummaryGrid::build(vec![
            other(monday(), "Monday, Oct. 27", (13, 0), (14, 0), "Late Lunch"),
            other(monday(), "Monday, Oct. 27", (12, 0), (13, 0), "Lunch"),
        ]);
        let lunch = grid.days[0].lunch.as_ref().unwrap();
        assert_eq!(lunch.title(), "Lunch");
    }

    #[test]
    fn test_build_orders_days_by_date() {
        let grid = SummaryGrid::build(vec![
            paper(tuesday(), "Tuesday, Oct. 28", (9, 0), (10, 0), "Paper Session 3A", "Track"),
            paper(monday(), "Monday, Oct. 27", (9, 0), (10, 0), "Paper Session 1A", "Track"),
        ]);
        assert_eq!(grid.days[0].label, "Monday, Oct. 27");
        assert_eq!(grid.days[1].label, "Tuesday, Oct. 28");
    }

    #[test]
    fn test_build_missing_date_sorts_first() {
        let mut undated = other(monday(), "", (9, 0), (10, 0), "Workshops");
        undated.date = None;
        let grid = SummaryGrid::build(vec![
            paper(monday(), "Monday, Oct. 27", (9, 0), (10, 0), "Paper Session 1A", "Track"),
            undated,
        ]);
        assert_eq!(grid.days[0].label, "");
        assert_eq!(grid.days[1].label, "Monday, Oct. 27");
    }

    #[test]
    fn test_build_empty_input() {
        let grid = SummaryGrid::build(vec![]);
        assert_eq!(grid.day_count(), 0);
        assert_eq!(grid.morning_rows, 0);
        assert_eq!(grid.evening_rows, 0);
    }

    // render_grid のテスト
    #[test]
    fn test_render_grid_container() {
        let grid = SummaryGrid::build(vec![paper(
            monday(),
            "Monday, Oct. 27",
            (9, 0),
            (10, 45),
            "Paper Session 1A",
            "Inclusive Mixed Reality",
        )]);
        let html = grid.render_grid();
        assert!(html.starts_with("<!-- Start of Schedule Grid (column-major DOM) -->"));
        assert!(html.ends_with("<!-- End of Schedule Grid -->"));
        assert!(html.contains("<div class=\"schedule-grid daycount-1\" aria-label=\"Summarized schedule\">"));
    }

    #[test]
    fn test_render_grid_day_header() {
        let grid = SummaryGrid::build(vec![paper(
            monday(),
            "Monday, Oct. 27",
            (9, 0),
            (10, 45),
            "Paper Session 1A",
            "Vision",
        )]);
        let html = grid.render_grid();
        assert!(html.contains(
            "<div class=\"schedule-grid-th gc-1 gr-1\"><h2 class=\"day-heading\">Monday, Oct. 27</h2></div>"
        ));
    }

    #[test]
    fn test_render_grid_anchor_matches_detailed_page() {
        let grid = SummaryGrid::build(vec![paper(
            monday(),
            "Monday, Oct. 27",
            (9, 0),
            (10, 45),
            "Paper Session 1A",
            "Inclusive Mixed Reality",
        )]);
        let html = grid.render_grid();
        assert!(html.contains(
            "href=\"#monday-paper-session-1a-inclusive-mixed-reality-0900-1045\""
        ));
    }

    #[test]
    fn test_render_grid_paper_cell_markup() {
        let grid = SummaryGrid::build(vec![paper(
            monday(),
            "Monday, Oct. 27",
            (9, 0),
            (10, 45),
            "Paper Session 1A",
            "Vision",
        )]);
        let html = grid.render_grid();
        assert!(html.contains("<h3 class=\"time-heading\">9:00 AM - 10:45 AM</h3>"));
        assert!(html.contains("<span class=\"session-code\">Paper Session 1A</span>"));
        assert!(html.contains("<span class=\"session-name\">Vision</span>"));
        assert!(html.contains("aria-label=\"9:00 AM - 10:45 AM, Paper Session 1A: Vision\""));
    }

    #[test]
    fn test_render_grid_cell_aria_label_joins_sessions() {
        let grid = SummaryGrid::build(vec![
            paper(monday(), "Monday, Oct. 27", (9, 0), (10, 45), "Paper Session 1A", "Vision"),
            paper(monday(), "Monday, Oct. 27", (9, 0), (10, 45), "Paper Session 1B", "Hearing"),
        ]);
        let html = grid.render_grid();
        assert!(html.contains(
            "aria-label=\"Monday, Oct. 27, 9:00 AM - 10:45 AM: Paper Session 1A \u{2014} Vision | Paper Session 1B \u{2014} Hearing\""
        ));
        assert!(html.contains("<div class=\"session-divider\"></div>"));
    }

    #[test]
    fn test_render_grid_poster_session_links_to_external_page() {
        let grid = SummaryGrid::build(vec![other(
            monday(),
            "Monday, Oct. 27",
            (10, 45),
            (11, 15),
            "Coffee Break & Poster Session A",
        )]);
        let html = grid.render_grid();
        assert!(html.contains("href=\"poster_session_a.html\""));
        assert!(!html.contains("href=\"#monday-coffee"));
    }

    #[test]
    fn test_render_grid_duplicate_sessions_get_unique_anchors() {
        let grid = SummaryGrid::build(vec![
            other(monday(), "Monday, Oct. 27", (9, 0), (9, 30), "Registration"),
            other(monday(), "Monday, Oct. 27", (9, 0), (9, 30), "Registration"),
        ]);
        let html = grid.render_grid();
        assert!(html.contains("href=\"#monday-registration-0900-0930\""));
        assert!(html.contains("href=\"#monday-registration-0900-0930-x2\""));
    }

    #[test]
    fn test_render_grid_empty_and_lunch_cells() {
        // 火曜のみ午前2行のため、月曜の2行目は空セルになる
        let grid = SummaryGrid::build(vec![
            paper(monday(), "Monday, Oct. 27", (9, 0), (10, 45), "Paper Session 1A", "Vision"),
            paper(tuesday(), "Tuesday, Oct. 28", (9, 0), (10, 45), "Paper Session 3A", "Motor"),
            paper(tuesday(), "Tuesday, Oct. 28", (11, 0), (12, 15), "Paper Session 4A", "Input"),
            other(tuesday(), "Tuesday, Oct. 28", (12, 15), (13, 30), "Lunch"),
        ]);
        let html = grid.render_grid();
        assert!(html.contains(
            "<div class=\"schedule-grid-td empty-cell gc-1 gr-3\" aria-label=\"Empty\"></div>"
        ));
        // 月曜にはランチがないため専用の空セルが入る
        assert!(html.contains(
            "<div class=\"schedule-grid-td empty-cell gc-1 gr-4\" aria-label=\"No lunch slot\"></div>"
        ));
    }

    #[test]
    fn test_render_grid_no_evening_rows_without_evening_sessions() {
        let grid = SummaryGrid::build(vec![paper(
            monday(),
            "Monday, Oct. 27",
            (9, 0),
            (10, 45),
            "Paper Session 1A",
            "Vision",
        )]);
        let html = grid.render_grid();
        // 行はヘッダー(1) + 午前(2) + ランチ(3)のみ
        assert!(html.contains("gr-3"));
        assert!(!html.contains("gr-4"));
    }

    #[test]
    fn test_render_grid_escapes_html() {
        let grid = SummaryGrid::build(vec![other(
            monday(),
            "Monday, Oct. 27",
            (10, 45),
            (11, 15),
            "Coffee <Break> & More",
        )]);
        let html = grid.render_grid();
        assert!(html.contains("Coffee &lt;Break&gt; &amp; More"));
        assert!(!html.contains("Coffee <Break>"));
    }

    // render_table のテスト
    #[test]
    fn test_render_table_structure() {
        let grid = SummaryGrid::build(vec![
            paper(monday(), "Monday, Oct. 27", (9, 0), (10, 45), "Paper Session 1A", "Vision"),
            other(monday(), "Monday, Oct. 27", (12, 0), (13, 0), "Lunch"),
        ]);
        let html = grid.render_table();
        assert!(html.starts_with("<!-- Start of Schedule Table -->"));
        assert!(html.ends_with("<!-- End of Schedule Table -->"));
        assert!(html.contains("<table class=\"schedule-table\">"));
        assert!(html.contains("<th>Monday, Oct. 27</th>"));
        assert!(html.contains("<h3>Morning Schedule</h3>"));
        assert!(html.contains("<h3>Afternoon Schedule</h3>"));
        assert!(!html.contains("<h3>Evening Schedule</h3>"));
    }

    #[test]
    fn test_render_table_evening_header_when_present() {
        let grid = SummaryGrid::build(vec![other(
            monday(),
            "Monday, Oct. 27",
            (18, 0),
            (20, 0),
            "Welcome Reception",
        )]);
        let html = grid.render_table();
        assert!(html.contains("<h3>Evening Schedule</h3>"));
    }

    #[test]
    fn test_render_table_cell_markup() {
        let grid = SummaryGrid::build(vec![paper(
            monday(),
            "Monday, Oct. 27",
            (9, 0),
            (10, 45),
            "Paper Session 1A",
            "Vision",
        )]);
        let html = grid.render_table();
        assert!(html.contains("<td class=\"paper-sessions\">"));
        assert!(html.contains("<span class=\"session-time\">9:00 AM - 10:45 AM</span>"));
        assert!(html.contains("<span class=\"session-code\">Paper Session 1A</span>"));
        // テーブル形式はリンクを含まない
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_render_table_empty_cells_for_uneven_days() {
        let grid = SummaryGrid::build(vec![
            paper(monday(), "Monday, Oct. 27", (9, 0), (10, 45), "Paper Session 1A", "Vision"),
            paper(tuesday(), "Tuesday, Oct. 28", (9, 0), (10, 45), "Paper Session 3A", "Motor"),
            paper(tuesday(), "Tuesday, Oct. 28", (11, 0), (12, 15), "Paper Session 4A", "Input"),
        ]);
        let html = grid.render_table();
        assert!(html.contains("<td class=\"empty-cell\"></td>"));
    }

    #[test]
    fn test_render_table_lunch_row_has_no_section_header() {
        let grid = SummaryGrid::build(vec![other(
            monday(),
            "Monday, Oct. 27",
            (12, 0),
            (13, 0),
            "Lunch",
        )]);
        let html = grid.render_table();
        assert!(html.contains("<td class=\"lunch-session\">"));
        assert!(!html.contains("Lunch Schedule"));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_session() -> impl Strategy<Value = Session> {
            let starts = prop_oneof![
                Just((9u32, 0u32)),
                Just((11u32, 0u32)),
                Just((12u32, 0u32)),
                Just((14u32, 0u32)),
                Just((18u32, 0u32)),
            ];
            let days = prop_oneof![Just(0u32), Just(1u32)];
            (starts, days, "[a-z]{3,8}").prop_map(|((h, m), day_off, word)| {
                let date = d(2025, 10, 27 + day_off);
                Session {
                    date: Some(date),
                    day_label: format!("Day {}", day_off),
                    start: Some(t(h, m)),
                    end: Some(t(h + 1, m)),
                    kind: SessionKind::Other { title: word },
                }
            })
        }

        proptest! {
            /// セル総数は常に 列数 × 行数（ヘッダー+午前+ランチ+午後+夕方）
            #[test]
            fn test_grid_cell_count(sessions in proptest::collection::vec(arb_session(), 0..20)) {
                let grid = SummaryGrid::build(sessions);
                let total_rows = 1
                    + grid.morning_rows
                    + 1
                    + grid.afternoon_rows
                    + if grid.evening_rows > 0 { grid.evening_rows } else { 0 };
                let html = grid.render_grid();
                let th_count = html.matches("<div class=\"schedule-grid-th").count();
                let td_count = html.matches("<div class=\"schedule-grid-td").count();
                prop_assert_eq!(th_count, grid.day_count());
                prop_assert_eq!(th_count + td_count, grid.day_count() * total_rows);
            }

            /// daycount クラスは列数と一致する
            #[test]
            fn test_grid_daycount_class(sessions in proptest::collection::vec(arb_session(), 0..20)) {
                let grid = SummaryGrid::build(sessions);
                let html = grid.render_grid();
                let expected = format!("daycount-{}", grid.day_count());
                prop_assert!(html.contains(&expected));
            }
        }
    }
}
