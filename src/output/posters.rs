//! Poster Page Renderer
//!
//! ポスターセッションページのHTMLフラグメントを描画するモジュール。
//! 発表は種別ごとにグループ化され、既知の種別（Posters、Student Research
//! Competitionなど）が先頭に、未知の種別が出現順に続きます。

use indexmap::IndexMap;

use crate::output::escape_html;
use crate::output::full::paper_item;
use crate::types::{PosterGroup, PosterItem};

/// 先頭に並べるグループの順序
const CANONICAL_GROUPS: [&str; 4] = [
    "Posters",
    "Student Research Competition",
    "Demos",
    "Doctoral Consortium",
];

/// ポスター項目を種別ごとのグループに整理
///
/// 既知のグループは`CANONICAL_GROUPS`の順、未知のグループはCSVでの
/// 初出順になります。グループ内の項目はCSVの出現順を保持します。
pub(crate) fn group_posters(items: &[PosterItem]) -> Vec<PosterGroup> {
    let mut buckets: IndexMap<String, Vec<PosterItem>> = IndexMap::new();
    for item in items {
        buckets
            .entry(item.group_label.clone())
            .or_default()
            .push(item.clone());
    }

    let mut groups = Vec::with_capacity(buckets.len());
    for label in CANONICAL_GROUPS {
        if let Some(items) = buckets.shift_remove(label) {
            groups.push(PosterGroup {
                label: label.to_string(),
                items,
            });
        }
    }
    for (label, items) in buckets {
        groups.push(PosterGroup { label, items });
    }
    groups
}

/// ポスターセッションページ全体を描画
///
/// `letter`はセッション識別子（AやBなど）。項目が空の場合は
/// プレースホルダのコメントだけを挟んだ3行の断片になります。
pub(crate) fn render_poster_page(items: &[PosterItem], letter: char) -> String {
    let upper = letter.to_ascii_uppercase();
    let body = if items.is_empty() {
        "          <!-- (No posters) -->".to_string()
    } else {
        group_posters(items)
            .iter()
            .map(group_block)
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        "          <!-- Start of Poster Session {} -->\n{}\n        <!--End of Poster Session {}-->",
        upper, body, upper
    )
}

/// 1グループ分のブロックを描画
fn group_block(group: &PosterGroup) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("          <div class=\"poster-group\">".to_string());
    lines.push(format!(
        "            <h5 class=\"poster-group-title\">{}</h5>",
        escape_html(&group.label)
    ));
    lines.push("            <div class=\"paper-list\">".to_string());
    for item in &group.items {
        lines.push(paper_item(None, &item.title, &item.authors));
    }
    lines.push("            </div>".to_string());
    lines.push("          </div>".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(label: &str, title: &str, authors: &[&str]) -> PosterItem {
        PosterItem {
            group_label: label.to_string(),
            title: title.to_string(),
            authors: authors.iter().map(|a| a.to_string()).collect(),
        }
    }

    // group_posters のテスト
    #[test]
    fn test_group_posters_canonical_order() {
        let items = vec![
            item("Demos", "Demo One", &[]),
            item("Posters", "Poster One", &[]),
            item("Late-Breaking Work", "Late One", &[]),
            item("Doctoral Consortium", "DC One", &[]),
            item("Posters", "Poster Two", &[]),
        ];
        let groups = group_posters(&items);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Posters",
                "Demos",
                "Doctoral Consortium",
                "Late-Breaking Work"
            ]
        );
    }

    #[test]
    fn test_group_posters_keeps_item_order_within_group() {
        let items = vec![
            item("Posters", "First", &[]),
            item("Demos", "Interleaved", &[]),
            item("Posters", "Second", &[]),
        ];
        let groups = group_posters(&items);
        assert_eq!(groups[0].items[0].title, "First");
        assert_eq!(groups[0].items[1].title, "Second");
    }

    #[test]
    fn test_group_posters_unknown_groups_in_first_seen_order() {
        let items = vec![
            item("Zebra Works", "Z", &[]),
            item("Alpha Works", "A", &[]),
        ];
        let groups = group_posters(&items);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Zebra Works", "Alpha Works"]);
    }

    // render_poster_page のテスト
    #[test]
    fn test_render_poster_page_frame() {
        let items = vec![item("Posters", "Accessible Maps", &["Alice (Uni)"])];
        let html = render_poster_page(&items, 'A');
        assert!(html.starts_with("          <!-- Start of Poster Session A -->\n"));
        assert!(html.ends_with("\n        <!--End of Poster Session A-->"));
    }

    #[test]
    fn test_render_poster_page_uppercases_letter() {
        let html = render_poster_page(&[], 'b');
        assert!(html.contains("Start of Poster Session B"));
        assert!(html.contains("End of Poster Session B"));
    }

    #[test]
    fn test_render_poster_page_empty() {
        let html = render_poster_page(&[], 'A');
        let lines: Vec<&str> = html.lines().collect();
        assert_eq!(
            lines,
            vec![
                "          <!-- Start of Poster Session A -->",
                "          <!-- (No posters) -->",
                "        <!--End of Poster Session A-->"
            ]
        );
    }

    #[test]
    fn test_render_poster_page_group_markup() {
        let items = vec![item(
            "Posters",
            "Accessible Maps",
            &["Alice Author (Example University)", "Bob Builder"],
        )];
        let html = render_poster_page(&items, 'A');
        assert!(html.contains("          <div class=\"poster-group\">"));
        assert!(html.contains("            <h5 class=\"poster-group-title\">Posters</h5>"));
        assert!(html.contains("            <div class=\"paper-list\">"));
        assert!(html.contains("                  <div class=\"paper-item\">"));
        assert!(html.contains("                      Accessible Maps"));
        assert!(html.contains(
            "                      <li>Alice Author<span class=\"affiliation\"> Example University</span></li>"
        ));
        assert!(html.contains("                      <li>Bob Builder</li>"));
        // ポスター項目にはタグバッジを付けない
        assert!(!html.contains("paper-tag"));
    }

    #[test]
    fn test_render_poster_page_escapes_labels() {
        let items = vec![item("R&D Showcase", "Work", &[])];
        let html = render_poster_page(&items, 'A');
        assert!(html.contains("<h5 class=\"poster-group-title\">R&amp;D Showcase</h5>"));
    }
}
