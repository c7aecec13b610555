//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// 生成するドキュメントの種類
///
/// 入力CSVをどのHTMLフラグメントへ変換するかを指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DocumentKind {
    /// スケジュール要約グリッド（デフォルト）
    ///
    /// 1日1カラムのcolumn-major divグリッドとして出力します。
    /// 各セッションは詳細プログラムへのアンカーリンクになります。
    ///
    /// # 出力例
    ///
    /// ```html
    /// <div class="schedule-grid daycount-2" aria-label="Summarized schedule">
    ///   <div class="schedule-grid-th gc-1 gr-1">
    ///     <h2 class="day-heading">Monday, Oct. 27</h2>
    ///   </div>
    ///   ...
    /// </div>
    /// ```
    ScheduleGrid,

    /// スケジュール要約テーブル（旧形式）
    ///
    /// `<table>`ベースの要約を出力します。アンカーリンクは含まれません。
    ///
    /// # 出力例
    ///
    /// ```html
    /// <table class="schedule-table">
    ///   <thead>...</thead>
    ///   <tbody>...</tbody>
    /// </table>
    /// ```
    ScheduleTable,

    /// 詳細プログラム
    ///
    /// 日ごとの`<section class="day-schedule">`と、タイムスロットごとの
    /// 発表一覧を含む詳細ページ全体を出力します。各スロットには要約グリッドと
    /// 同一規則のアンカーIDが付与されます。
    ///
    /// # 出力例
    ///
    /// ```html
    /// <section class="day-schedule" id="monday">
    ///   <div class="day-header-container">...</div>
    ///   <div id="monday-paper-session-1a-inclusive-mixed-reality-0900-1045"
    ///        class="time-slot paper-sessions">...</div>
    /// </section>
    /// ```
    FullSchedule,

    /// 採択論文リスト
    ///
    /// Type / Title / Authorsカラムを持つCSVから、論文ごとの
    /// `<div class="accepted-paper">`ブロックを出力します。
    ///
    /// # 出力例
    ///
    /// ```html
    /// <div class="accepted-paper">
    ///   <h2>Inclusive Mixed Reality</h2>
    ///   <p class="paper-type">Full Paper</p>
    ///   <ul class="author-list">
    ///     <li>Ada Lovelace</li>
    ///   </ul>
    /// </div>
    /// ```
    AcceptedPapers,

    /// 著者別出現回数レポート
    ///
    /// 採択論文CSVと同じ入力から、著者ごとの出現回数をプレーンテキストで
    /// 出力します。回数の降順、同数の場合は著者名の昇順で並びます。
    ///
    /// # 出力例
    ///
    /// ```text
    /// 3 Ada Lovelace
    /// 1 Alan Turing
    /// ```
    AuthorCounts,

    /// プログラム委員一覧
    ///
    /// Name / Affiliation / CountryカラムのCSVから、頭文字ごとに
    /// グループ化された委員リストを出力します。
    ///
    /// # 出力例
    ///
    /// ```html
    /// <h2>A</h2>
    /// <ul class="pc-members">
    ///   <li class="pc-member"><span class="pc-name">Ada Lovelace,</span> ...</li>
    /// </ul>
    /// ```
    PcMembers,

    /// ポスターセッションページ
    ///
    /// ポスターCSVから、発表種別ごとにグループ化された
    /// `<div class="poster-group">`ブロック群を出力します。
    ///
    /// # 出力例
    ///
    /// ```html
    /// <!-- Start of Poster Session A -->
    /// <div class="poster-group">
    ///   <h5 class="poster-group-title">Posters</h5>
    ///   ...
    /// </div>
    /// ```
    PosterSession,
}
