//! Builder Module
//!
//! Fluent Builder APIを提供し、`Converter`インスタンスを段階的に構築する。

use crate::api::DocumentKind;
use crate::error::CsvToHtmlError;
use crate::grid::SummaryGrid;
use crate::{output, parser};
use chrono::Weekday;
use encoding_rs::Encoding;
use std::io::{Read, Write};

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ConversionConfig {
    /// 生成するドキュメントの種類
    pub document: DocumentKind,

    /// 入力CSVのエンコーディングラベル（WHATWG準拠）
    pub encoding: String,

    /// ポスターページを持つ曜日とページ文字の組（詳細プログラム用）
    pub poster_pages: Vec<(Weekday, char)>,

    /// ポスターページ自身のページ文字（ポスターページ生成用）
    pub poster_letter: char,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            document: DocumentKind::ScheduleGrid,
            encoding: "utf-8".to_string(),
            poster_pages: Vec::new(),
            poster_letter: 'A',
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Converter`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use confprog::{ConverterBuilder, DocumentKind};
///
/// # fn main() -> Result<(), confprog::CsvToHtmlError> {
/// let converter = ConverterBuilder::new()
///     .with_document(DocumentKind::AcceptedPapers)
///     .with_encoding("utf-8")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConverterBuilder {
    /// 内部設定（構築中）
    config: ConversionConfig,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - ドキュメント種類: スケジュール要約グリッド
    /// - エンコーディング: UTF-8
    /// - ポスターページ: なし
    /// - ポスターページ文字: `A`
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use confprog::ConverterBuilder;
    ///
    /// let builder = ConverterBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self {
            config: ConversionConfig::default(),
        }
    }

    /// 生成するドキュメントの種類を選択する
    ///
    /// # 引数
    ///
    /// * `document: DocumentKind`: ドキュメント種類
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use confprog::{ConverterBuilder, DocumentKind};
    ///
    /// // 詳細プログラムを生成
    /// let builder = ConverterBuilder::new()
    ///     .with_document(DocumentKind::FullSchedule);
    ///
    /// // プログラム委員一覧を生成
    /// let builder = ConverterBuilder::new()
    ///     .with_document(DocumentKind::PcMembers);
    /// ```
    pub fn with_document(mut self, document: DocumentKind) -> Self {
        self.config.document = document;
        self
    }

    /// 入力CSVのエンコーディングを指定する
    ///
    /// ラベルはWHATWG Encoding Standardのラベル（`utf-8`、`shift_jis`、
    /// `windows-1252`など）で指定します。入力の先頭にUTF-8/UTF-16のBOMが
    /// ある場合は、指定よりもBOMが優先されます。
    ///
    /// # 引数
    ///
    /// * `label: &str`: エンコーディングラベル
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use confprog::ConverterBuilder;
    ///
    /// let builder = ConverterBuilder::new()
    ///     .with_encoding("windows-1252");
    /// ```
    pub fn with_encoding(mut self, label: &str) -> Self {
        self.config.encoding = label.to_string();
        self
    }

    /// ポスターページを持つ曜日を登録する（詳細プログラム用）
    ///
    /// 登録した曜日のポスターセッションスロットは、見出しが外部ページ
    /// （`poster_session_a.html`など）へのリンクに置き換えられ、論文一覧の
    /// 代わりに外部化を示すコメントが出力されます。
    ///
    /// # 引数
    ///
    /// * `day: Weekday`: ポスターページを持つ曜日
    /// * `letter: char`: そのページのページ文字（`A`、`B`…）
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use chrono::Weekday;
    /// use confprog::{ConverterBuilder, DocumentKind};
    ///
    /// let builder = ConverterBuilder::new()
    ///     .with_document(DocumentKind::FullSchedule)
    ///     .with_poster_page(Weekday::Wed, 'A')
    ///     .with_poster_page(Weekday::Thu, 'B');
    /// ```
    pub fn with_poster_page(mut self, day: Weekday, letter: char) -> Self {
        self.config.poster_pages.push((day, letter));
        self
    }

    /// ポスターページ自身のページ文字を指定する（ポスターページ生成用）
    ///
    /// `DocumentKind::PosterSession`の出力を囲む開始・終了コメントに
    /// 使用されます。大文字・小文字は出力時に正規化されます。
    ///
    /// # 引数
    ///
    /// * `letter: char`: ページ文字（`A`、`B`…）
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use confprog::{ConverterBuilder, DocumentKind};
    ///
    /// let builder = ConverterBuilder::new()
    ///     .with_document(DocumentKind::PosterSession)
    ///     .with_poster_letter('B');
    /// ```
    pub fn with_poster_letter(mut self, letter: char) -> Self {
        self.config.poster_letter = letter;
        self
    }

    /// 設定を検証し、`Converter`インスタンスを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Converter)`: 設定が有効な場合、Converterインスタンス
    /// * `Err(CsvToHtmlError::Config)`: 設定が無効な場合
    ///
    /// # 発生し得るエラー
    ///
    /// * `CsvToHtmlError::Config(String)`: 設定の検証に失敗した場合
    ///   * エンコーディングラベルが未知
    ///   * 同じ曜日に複数のポスターページが登録されている
    ///   * ページ文字がASCII英字でない
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use confprog::{ConverterBuilder, DocumentKind};
    ///
    /// # fn main() -> Result<(), confprog::CsvToHtmlError> {
    /// let converter = ConverterBuilder::new()
    ///     .with_document(DocumentKind::ScheduleGrid)
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Converter, CsvToHtmlError> {
        // 1. エンコーディングラベルの検証（解決結果はConverterが保持）
        let encoding = Encoding::for_label(self.config.encoding.as_bytes()).ok_or_else(|| {
            CsvToHtmlError::Config(format!(
                "Unknown encoding label: '{}'",
                self.config.encoding
            ))
        })?;

        // 2. ポスターページ設定の検証（曜日の重複とページ文字）
        let mut seen_days = Vec::new();
        for &(day, letter) in &self.config.poster_pages {
            if seen_days.contains(&day) {
                return Err(CsvToHtmlError::Config(format!(
                    "Duplicate poster page for {}",
                    day
                )));
            }
            seen_days.push(day);

            if !letter.is_ascii_alphabetic() {
                return Err(CsvToHtmlError::Config(format!(
                    "Poster page letter must be an ASCII letter: '{}'",
                    letter
                )));
            }
        }

        // 3. ポスターページ自身のページ文字の検証
        if !self.config.poster_letter.is_ascii_alphabetic() {
            return Err(CsvToHtmlError::Config(format!(
                "Poster session letter must be an ASCII letter: '{}'",
                self.config.poster_letter
            )));
        }

        // 4. Converterインスタンス生成
        Ok(Converter::new(self.config, encoding))
    }
}

/// 変換処理のファサード
///
/// 会議プログラムのCSVファイルをHTMLフラグメント（または集計テキスト）に
/// 変換するためのメインエントリーポイントです。`ConverterBuilder`を使用して
/// 構築された設定に基づいて変換処理を実行します。
///
/// # 使用例
///
/// ```rust,no_run
/// use confprog::ConverterBuilder;
/// use std::fs::File;
///
/// # fn main() -> Result<(), confprog::CsvToHtmlError> {
/// let converter = ConverterBuilder::new().build()?;
/// let input = File::open("schedule.csv")?;
/// let mut output = Vec::new();
/// converter.convert(input, &mut output)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Converter {
    /// 変換設定
    config: ConversionConfig,

    /// 解決済みの入力エンコーディング
    encoding: &'static Encoding,
}

impl Converter {
    pub(crate) fn new(config: ConversionConfig, encoding: &'static Encoding) -> Self {
        Self { config, encoding }
    }

    /// CSVファイルをHTMLフラグメントに変換
    ///
    /// # 引数
    ///
    /// * `input` - CSVを読み込むためのリーダー（Readトレイトを実装）
    /// * `output` - 出力先のライター（Writeトレイトを実装）
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 変換に成功した場合
    /// * `Err(CsvToHtmlError)` - エラーが発生した場合
    ///
    /// # 処理フロー
    ///
    /// 1. 入力データをメモリに読み込む
    /// 2. 設定されたエンコーディングでUTF-8へデコード（BOMがあれば優先）
    /// 3. ドキュメント種類に応じてCSVを解析し、フラグメントを描画
    /// 4. 出力先へ書き込む
    ///
    /// 出力の末尾に改行は追加されません。フラグメントをテンプレートへ
    /// 埋め込む際の空白制御は呼び出し側に委ねられます。
    ///
    /// # 使用例
    ///
    /// ## ファイルからファイルへの変換
    ///
    /// ```rust,no_run
    /// use confprog::{ConverterBuilder, DocumentKind};
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), confprog::CsvToHtmlError> {
    /// let converter = ConverterBuilder::new()
    ///     .with_document(DocumentKind::FullSchedule)
    ///     .build()?;
    /// let input = File::open("schedule.csv")?;
    /// let output = File::create("schedule.html")?;
    /// converter.convert(input, output)?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// ## メモリバッファからの変換
    ///
    /// ```rust,no_run
    /// use confprog::ConverterBuilder;
    /// use std::io::Cursor;
    ///
    /// # fn main() -> Result<(), confprog::CsvToHtmlError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// let csv_data: Vec<u8> = Vec::new(); // CSVのバイト列
    /// let mut html_output = Vec::new();
    /// converter.convert(Cursor::new(csv_data), &mut html_output)?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// ## 標準出力への変換
    ///
    /// ```rust,no_run
    /// use confprog::ConverterBuilder;
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), confprog::CsvToHtmlError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// let input = File::open("schedule.csv")?;
    /// converter.convert(input, std::io::stdout())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert<R: Read, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> Result<(), CsvToHtmlError> {
        use std::io::BufWriter;

        // 1. 入力データをメモリに読み込む
        let mut buffer = Vec::new();
        input.read_to_end(&mut buffer)?;

        // 2. UTF-8へデコード（BOMがあればラベル指定より優先される）
        let (text, actual_encoding, had_errors) = self.encoding.decode(&buffer);
        if had_errors {
            log::warn!(
                "input contained byte sequences invalid for {}; replaced with U+FFFD",
                actual_encoding.name()
            );
        }
        log::debug!(
            "rendering {:?} from {} input bytes ({})",
            self.config.document,
            buffer.len(),
            actual_encoding.name()
        );

        // 3. ドキュメント種類に応じて解析・描画
        let document = self.render(&text)?;

        // 4. 出力先へ書き込む
        let mut writer = BufWriter::new(&mut output);
        writer.write_all(document.as_bytes())?;
        writer.flush()?;

        Ok(())
    }

    /// CSVファイルをHTMLフラグメントの文字列に変換
    ///
    /// # 引数
    ///
    /// * `input` - CSVを読み込むためのリーダー（Readトレイトを実装）
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 変換されたフラグメント文字列
    /// * `Err(CsvToHtmlError)` - エラーが発生した場合
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use confprog::{ConverterBuilder, DocumentKind};
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), confprog::CsvToHtmlError> {
    /// let converter = ConverterBuilder::new()
    ///     .with_document(DocumentKind::PcMembers)
    ///     .build()?;
    /// let input = File::open("committee.csv")?;
    /// let html = converter.convert_to_string(input)?;
    /// println!("{}", html);
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert_to_string<R: Read>(&self, input: R) -> Result<String, CsvToHtmlError> {
        let mut buffer = Vec::new();
        self.convert(input, &mut buffer)?;

        let result = String::from_utf8(buffer).map_err(|e| {
            CsvToHtmlError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        Ok(result)
    }

    /// ドキュメント種類に応じた解析と描画
    fn render(&self, text: &str) -> Result<String, CsvToHtmlError> {
        match self.config.document {
            DocumentKind::ScheduleGrid => {
                let sessions = parser::load_sessions(text)?;
                Ok(SummaryGrid::build(sessions).render_grid())
            }
            DocumentKind::ScheduleTable => {
                let sessions = parser::load_sessions(text)?;
                Ok(SummaryGrid::build(sessions).render_table())
            }
            DocumentKind::FullSchedule => {
                let days = parser::load_full_schedule(text)?;
                Ok(output::full::render_full_schedule(
                    &days,
                    &self.config.poster_pages,
                ))
            }
            DocumentKind::AcceptedPapers => {
                let papers = parser::load_accepted_papers(text)?;
                Ok(output::papers::render_accepted_papers(&papers))
            }
            DocumentKind::AuthorCounts => {
                let papers = parser::load_accepted_papers(text)?;
                Ok(output::papers::render_author_counts(&papers))
            }
            DocumentKind::PcMembers => {
                let members = parser::load_pc_members(text)?;
                Ok(output::members::render_pc_members(&members))
            }
            DocumentKind::PosterSession => {
                let items = parser::load_poster_items(text)?;
                Ok(output::posters::render_poster_page(
                    &items,
                    self.config.poster_letter,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_converter_builder_new() {
        let builder = ConverterBuilder::new();
        assert_eq!(builder.config.document, DocumentKind::ScheduleGrid);
        assert_eq!(builder.config.encoding, "utf-8");
        assert!(builder.config.poster_pages.is_empty());
        assert_eq!(builder.config.poster_letter, 'A');
    }

    #[test]
    fn test_converter_builder_default() {
        let builder = ConverterBuilder::default();
        assert_eq!(builder.config.document, DocumentKind::ScheduleGrid);
        assert_eq!(builder.config.encoding, "utf-8");
    }

    #[test]
    fn test_with_document() {
        let builder = ConverterBuilder::new().with_document(DocumentKind::FullSchedule);
        assert_eq!(builder.config.document, DocumentKind::FullSchedule);

        let builder = ConverterBuilder::new().with_document(DocumentKind::AuthorCounts);
        assert_eq!(builder.config.document, DocumentKind::AuthorCounts);
    }

    #[test]
    fn test_with_encoding() {
        let builder = ConverterBuilder::new().with_encoding("shift_jis");
        assert_eq!(builder.config.encoding, "shift_jis");
    }

    #[test]
    fn test_with_poster_page() {
        let builder = ConverterBuilder::new()
            .with_poster_page(Weekday::Wed, 'A')
            .with_poster_page(Weekday::Thu, 'B');
        assert_eq!(
            builder.config.poster_pages,
            vec![(Weekday::Wed, 'A'), (Weekday::Thu, 'B')]
        );
    }

    #[test]
    fn test_with_poster_letter() {
        // 大文字・小文字はここでは保持され、出力時に正規化される
        let builder = ConverterBuilder::new().with_poster_letter('b');
        assert_eq!(builder.config.poster_letter, 'b');
    }

    #[test]
    fn test_build_success() {
        let result = ConverterBuilder::new().build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_with_unknown_encoding() {
        let result = ConverterBuilder::new()
            .with_encoding("not-a-real-encoding")
            .build();
        assert!(result.is_err());
        match result {
            Err(CsvToHtmlError::Config(msg)) => {
                assert!(msg.contains("Unknown encoding label"));
                assert!(msg.contains("not-a-real-encoding"));
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_build_with_encoding_alias() {
        // WHATWGラベルの別名（latin1はwindows-1252の別名）も受理される
        let result = ConverterBuilder::new().with_encoding("latin1").build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_with_duplicate_poster_day() {
        let result = ConverterBuilder::new()
            .with_poster_page(Weekday::Wed, 'A')
            .with_poster_page(Weekday::Wed, 'B')
            .build();
        assert!(result.is_err());
        match result {
            Err(CsvToHtmlError::Config(msg)) => {
                assert!(msg.contains("Duplicate poster page"));
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_build_with_invalid_poster_page_letter() {
        let result = ConverterBuilder::new()
            .with_poster_page(Weekday::Wed, '1')
            .build();
        assert!(result.is_err());
        match result {
            Err(CsvToHtmlError::Config(msg)) => {
                assert!(msg.contains("ASCII letter"));
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_build_with_invalid_poster_letter() {
        let result = ConverterBuilder::new().with_poster_letter('#').build();
        assert!(result.is_err());
        match result {
            Err(CsvToHtmlError::Config(msg)) => {
                assert!(msg.contains("ASCII letter"));
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_builder_method_chaining() {
        let builder = ConverterBuilder::new()
            .with_document(DocumentKind::FullSchedule)
            .with_encoding("utf-8")
            .with_poster_page(Weekday::Wed, 'A')
            .with_poster_letter('A');

        assert_eq!(builder.config.document, DocumentKind::FullSchedule);
        assert_eq!(builder.config.encoding, "utf-8");
        assert_eq!(builder.config.poster_pages, vec![(Weekday::Wed, 'A')]);
        assert_eq!(builder.config.poster_letter, 'A');
    }

    #[test]
    fn test_build_with_all_settings() {
        let result = ConverterBuilder::new()
            .with_document(DocumentKind::PosterSession)
            .with_encoding("windows-1252")
            .with_poster_page(Weekday::Wed, 'A')
            .with_poster_page(Weekday::Thu, 'B')
            .with_poster_letter('B')
            .build();

        assert!(result.is_ok());
    }

    // Converter構造体のテスト
    #[test]
    fn test_converter_convert_schedule_grid() {
        let converter = ConverterBuilder::new().build().unwrap();
        let csv = "Date,Time,Session Type,Session Name\n\
                   \"Monday, October 27, 2025\",9:00 AM - 10:00 AM,Opening,Welcome\n";

        let mut output = Vec::new();
        converter
            .convert(Cursor::new(csv.as_bytes().to_vec()), &mut output)
            .unwrap();
        let html = String::from_utf8(output).unwrap();

        assert!(html.contains("schedule-grid daycount-1"));
        assert!(html.contains("Monday, Oct. 27"));
        // 末尾に改行は付かない
        assert!(!html.ends_with('\n'));
    }

    #[test]
    fn test_converter_convert_schedule_table() {
        let converter = ConverterBuilder::new()
            .with_document(DocumentKind::ScheduleTable)
            .build()
            .unwrap();
        let csv = "Date,Time,Session Type,Session Name\n\
                   \"Monday, October 27, 2025\",9:00 AM - 10:00 AM,Opening,Welcome\n";

        let html = converter.convert_to_string(csv.as_bytes()).unwrap();
        assert!(html.contains("<table class=\"schedule-table\">"));
        assert!(html.contains("<th>Monday, Oct. 27</th>"));
    }

    #[test]
    fn test_converter_convert_to_string() {
        let converter = ConverterBuilder::new()
            .with_document(DocumentKind::AcceptedPapers)
            .build()
            .unwrap();
        let csv = "Type,Title,Authors\nFull Paper,Calm Technology,Ada Lovelace\n";

        let html = converter.convert_to_string(csv.as_bytes()).unwrap();
        assert!(html.contains("<div class=\"accepted-paper\">"));
        assert!(html.contains("<h2>Calm Technology</h2>"));
    }

    #[test]
    fn test_converter_convert_author_counts() {
        let converter = ConverterBuilder::new()
            .with_document(DocumentKind::AuthorCounts)
            .build()
            .unwrap();
        let csv = "Type,Title,Authors\n\
                   Full Paper,First,Ada Lovelace; Alan Turing\n\
                   Short Paper,Second,Ada Lovelace\n";

        let text = converter.convert_to_string(csv.as_bytes()).unwrap();
        assert_eq!(text, "2 Ada Lovelace\n1 Alan Turing\n");
    }

    #[test]
    fn test_converter_convert_poster_session() {
        let converter = ConverterBuilder::new()
            .with_document(DocumentKind::PosterSession)
            .with_poster_letter('b')
            .build()
            .unwrap();
        let csv = "Presentation Type,Title,Authors\nPoster,Calm Displays,Mark Weiser\n";

        let html = converter.convert_to_string(csv.as_bytes()).unwrap();
        assert!(html.contains("<!-- Start of Poster Session B -->"));
        assert!(html.contains("Calm Displays"));
    }

    #[test]
    fn test_converter_convert_full_schedule_with_poster_page() {
        let converter = ConverterBuilder::new()
            .with_document(DocumentKind::FullSchedule)
            .with_poster_page(Weekday::Mon, 'A')
            .build()
            .unwrap();
        let csv = "Date,Time,Session Type,Session Name\n\
                   \"Monday, October 27, 2025\",5:00 PM - 7:00 PM,Poster Session A,\n";

        let html = converter.convert_to_string(csv.as_bytes()).unwrap();
        assert!(html.contains("href=\"poster_session_a.html\""));
        assert!(html.contains("externalized to poster_sessions_a.txt"));
    }

    #[test]
    fn test_converter_convert_with_missing_columns() {
        let converter = ConverterBuilder::new().build().unwrap();
        let csv = "Foo,Bar\n1,2\n";

        let result = converter.convert_to_string(csv.as_bytes());
        assert!(matches!(
            result,
            Err(CsvToHtmlError::MissingColumns { .. })
        ));
    }

    #[test]
    fn test_converter_convert_windows_1252() {
        let converter = ConverterBuilder::new()
            .with_document(DocumentKind::PcMembers)
            .with_encoding("windows-1252")
            .build()
            .unwrap();
        // 0xE9 = é（windows-1252）
        let csv: Vec<u8> = b"Name,Affiliation,Country\nJos\xE9 Reyes,UNAM,Mexico\n".to_vec();

        let html = converter.convert_to_string(Cursor::new(csv)).unwrap();
        assert!(html.contains("José Reyes"));
    }

    #[test]
    fn test_converter_convert_utf8_bom() {
        let converter = ConverterBuilder::new()
            .with_document(DocumentKind::AcceptedPapers)
            .build()
            .unwrap();
        // BOM付きでも先頭カラムがTypeとして検出される
        let csv = "\u{feff}Type,Title,Authors\nFull Paper,Calm Technology,Ada Lovelace\n";

        let html = converter.convert_to_string(csv.as_bytes()).unwrap();
        assert!(html.contains("<h2>Calm Technology</h2>"));
    }

    #[test]
    fn test_converter_convert_empty_input() {
        let converter = ConverterBuilder::new().build().unwrap();
        let result = converter.convert_to_string(Cursor::new(Vec::<u8>::new()));
        // ヘッダー行が存在しないためConfigエラーになる
        assert!(result.is_err());
    }
}
