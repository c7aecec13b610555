//! Output Module
//!
//! 各ドキュメント種別のHTMLフラグメント生成を提供するモジュール。
//! 共通のエスケープ・インデントヘルパーもここに置きます。

pub(crate) mod full;
pub(crate) mod members;
pub(crate) mod papers;
pub(crate) mod posters;

/// HTMLテキストとして安全な形にエスケープ
///
/// `&` `<` `>` `"` `'` の5文字を実体参照に置き換えます。
/// 属性値とテキストの両方で同じ関数を使用します。
pub(crate) fn escape_html(s: &str) -> String {
    htmlescape::encode_minimal(s)
}

/// ブロックを2スペース単位でインデント
///
/// 各行の先頭に`level`段分のパディングを付けます。空白のみの行は
/// そのまま残します。末尾改行は扱いません（呼び出し側が結合時に付与）。
pub(crate) fn indent_block(block: &str, level: usize) -> String {
    let pad = "  ".repeat(level);
    block
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
