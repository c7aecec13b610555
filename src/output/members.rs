//! Program Committee Renderer
//!
//! プログラム委員リストのHTMLフラグメントを描画するモジュール。
//! 委員は姓名の頭文字ごとに見出し付きのリストへ分かれます。

use std::collections::BTreeMap;

use crate::output::escape_html;
use crate::types::PcMember;

/// プログラム委員リストを描画
///
/// 頭文字（大文字化した先頭1文字）の昇順に`<h2>`見出しとリストを並べ、
/// 各リスト内は名前の昇順になります。末尾に改行が付きます。
pub(crate) fn render_pc_members(members: &[PcMember]) -> String {
    let mut by_letter: BTreeMap<String, Vec<&PcMember>> = BTreeMap::new();
    for member in members {
        let letter = member
            .name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();
        by_letter.entry(letter).or_default().push(member);
    }
    if by_letter.is_empty() {
        return String::new();
    }

    let mut lines: Vec<String> = Vec::new();
    for (letter, mut group) in by_letter {
        group.sort_by(|a, b| a.name.cmp(&b.name));
        lines.push(format!("<h2>{}</h2>", escape_html(&letter)));
        lines.push("<ul class=\"pc-members\">".to_string());
        for member in group {
            lines.push(format!(
                "  <li class=\"pc-member\"><span class=\"pc-name\">{},</span> <span class=\"pc-institution\">{},</span> <span class=\"pc-country\">{}.</span></li>",
                escape_html(&member.name),
                escape_html(&member.affiliation),
                escape_html(&member.country)
            ));
        }
        lines.push("</ul>".to_string());
    }
    lines.join("\n") + "\n"
}
