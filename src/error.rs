//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// confprogクレート全体で使用するエラー型
///
/// このエラー型は、CSVファイルの読み込み、解析、HTML変換処理中に発生する
/// すべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（ファイル読み込み失敗など）
/// - `Csv`: CSVレコードの解析中に発生したエラー（csvクレート由来）
/// - `MissingColumns`: 必須カラムの自動検出に失敗したエラー
/// - `Config`: 設定の検証に失敗したエラー（未知のエンコーディング指定など）
///
/// # 使用例
///
/// ```rust,no_run
/// use confprog::CsvToHtmlError;
/// use std::fs::File;
///
/// fn read_csv_file(path: &str) -> Result<(), CsvToHtmlError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     // ... 処理 ...
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum CsvToHtmlError {
    /// I/O操作中に発生したエラー
    ///
    /// ファイルの読み込み失敗、書き込み失敗など、標準ライブラリの
    /// `std::io::Error`が発生した場合に使用されます。
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSVファイルの解析中に発生したエラー
    ///
    /// csvクレートがレコードを読み取る際に発生したエラーです。
    /// クォートの不整合やフィールド数の不一致などが原因となります。
    ///
    /// `#[from]`属性により、`csv::Error`から自動的に変換されます。
    #[error("Failed to parse CSV file: {0}")]
    Csv(#[from] csv::Error),

    /// 必須カラムの自動検出に失敗したエラー
    ///
    /// スケジュールCSVのヘッダー行からdate / time / type / nameの各役割に
    /// 対応するカラムを検出できなかった場合に発生します。エラーメッセージには
    /// 不足している役割名と、実際に見つかったヘッダーの一覧が含まれます。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use confprog::CsvToHtmlError;
    ///
    /// let error = CsvToHtmlError::MissingColumns {
    ///     missing: vec!["time".to_string()],
    ///     headers: vec!["Date".to_string(), "Session Type".to_string()],
    /// };
    ///
    /// println!("{}", error);
    /// // 出力: "Could not detect columns for: time. Found headers: Date, Session Type"
    /// ```
    #[error(
        "Could not detect columns for: {}. Found headers: {}",
        .missing.join(", "),
        .headers.join(", ")
    )]
    MissingColumns {
        /// 検出できなかった役割名（date / time / type / name）
        missing: Vec<String>,
        /// CSVヘッダー行に実際に存在したカラム名
        headers: Vec<String>,
    },

    /// 設定の検証に失敗したエラー
    ///
    /// `ConverterBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。例えば、未知のエンコーディングラベルが指定された場合や、
    /// ポスターページの曜日指定が重複している場合などです。
    /// またヘッダー行を持たないCSVや、固定カラム（Type / Title / Authorsなど）を
    /// 欠くCSVを検出した場合にも使用されます。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use confprog::{ConverterBuilder, CsvToHtmlError};
    ///
    /// let result = ConverterBuilder::new()
    ///     .with_encoding("not-a-real-encoding")
    ///     .build();
    ///
    /// match result {
    ///     Err(CsvToHtmlError::Config(msg)) => {
    ///         println!("設定エラー: {}", msg);
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),
}
