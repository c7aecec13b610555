//! Accepted Papers Renderer
//!
//! 採択論文リストのHTMLフラグメントと、同じデータから導出する著者別
//! 発表数リスト（プレーンテキスト）を描画するモジュール。

use std::collections::HashMap;

use crate::output::escape_html;
use crate::types::AcceptedPaper;

/// 採択論文リストを描画
///
/// 論文ごとのブロックを空行で区切ります。末尾に改行は付きません。
pub(crate) fn render_accepted_papers(papers: &[AcceptedPaper]) -> String {
    papers
        .iter()
        .map(paper_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// 1論文分のブロックを描画
fn paper_block(paper: &AcceptedPaper) -> String {
    let lis: Vec<String> = paper
        .authors
        .iter()
        .map(|a| format!("<li>{}</li>", escape_html(a)))
        .collect();
    format!(
        "<div class=\"accepted-paper\">\n  <h2>{}</h2>\n  <p class=\"paper-type\">{}</p>\n  <ul class=\"author-list\">\n    {}\n  </ul>\n</div>",
        escape_html(&paper.title),
        escape_html(&paper.paper_type),
        lis.join("\n    ")
    )
}

/// 著者ごとの発表数を集計してテキストで描画
///
/// 各行は`{回数} {著者}`形式で、回数の降順、同数なら著者名の昇順に
/// 並びます。著者は所属を含む生の文字列のまま数えます。
pub(crate) fn render_author_counts(papers: &[AcceptedPaper]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for paper in papers {
        for author in &paper.authors {
            *counts.entry(author.as_str()).or_default() += 1;
        }
    }
    if counts.is_empty() {
        return String::new();
    }

    let mut entries: Vec<(&str, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    let lines: Vec<String> = entries
        .iter()
        .map(|(name, count)| format!("{} {}", count, name))
        .collect();
    lines.join("\n") + "\n"
}
