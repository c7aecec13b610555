//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use chrono::{NaiveDate, NaiveTime, Timelike};

/// セッション種別を表すタグ付き列挙型
///
/// スケジュールCSVの「Session Type」カラムが`paper session`で始まる行は
/// `Paper`（コード + トラック名）、それ以外は`Other`（タイトルのみ）として
/// 扱います。空文字列による判別は行いません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionKind {
    /// 論文セッション（例: code = "Paper Session 1A", name = "Inclusive Mixed Reality"）
    Paper { code: String, name: String },

    /// 論文以外のセッション（例: "Coffee Break & Poster Session A"）
    Other { title: String },
}

impl SessionKind {
    /// Session Type / Session Nameカラムの値からセッション種別を導出
    pub fn from_columns(session_type: &str, session_name: &str) -> Self {
        if is_paper_session_type(session_type) {
            SessionKind::Paper {
                code: session_type.to_string(),
                name: session_name.to_string(),
            }
        } else {
            SessionKind::Other {
                title: session_type.to_string(),
            }
        }
    }
}

/// セッション種別文字列が論文セッションかどうかを判定
pub(crate) fn is_paper_session_type(session_type: &str) -> bool {
    session_type
        .trim()
        .to_lowercase()
        .starts_with("paper session")
}

/// スケジュール上の1セッション
///
/// 要約グリッドの最小単位。日付は前の行から引き継がれる（forward-fill）ため
/// `Option`であり、時刻も解析に失敗した場合は`None`となります。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Session {
    /// 開催日（解析失敗時はNone）
    pub date: Option<NaiveDate>,

    /// 表示用の日ラベル（例: "Monday, Oct. 27"。日付がない場合は空文字列）
    pub day_label: String,

    /// 開始時刻
    pub start: Option<NaiveTime>,

    /// 終了時刻
    pub end: Option<NaiveTime>,

    /// セッション種別
    pub kind: SessionKind,
}

impl Session {
    /// 論文セッションのコード（非論文セッションでは空文字列）
    pub fn code(&self) -> &str {
        match &self.kind {
            SessionKind::Paper { code, .. } => code,
            SessionKind::Other { .. } => "",
        }
    }

    /// 論文セッションのトラック名（非論文セッションでは空文字列）
    pub fn name(&self) -> &str {
        match &self.kind {
            SessionKind::Paper { name, .. } => name,
            SessionKind::Other { .. } => "",
        }
    }

    /// 非論文セッションのタイトル（論文セッションでは空文字列）
    pub fn title(&self) -> &str {
        match &self.kind {
            SessionKind::Paper { .. } => "",
            SessionKind::Other { title } => title,
        }
    }

    /// アンカーID生成に使用するセッション種別文字列
    ///
    /// 論文セッションはコード、それ以外はタイトルを返します。
    pub fn id_type(&self) -> &str {
        match &self.kind {
            SessionKind::Paper { code, .. } => code,
            SessionKind::Other { title } => title,
        }
    }

    /// 論文セッションかどうか
    pub fn is_paper(&self) -> bool {
        matches!(self.kind, SessionKind::Paper { .. })
    }

    /// セッションのカテゴリ（CSSクラスに対応）
    pub fn category(&self) -> SessionCategory {
        match &self.kind {
            SessionKind::Paper { .. } => SessionCategory::PaperSessions,
            SessionKind::Other { title } => {
                let t = title.to_lowercase();
                if t.contains("coffee") || t.contains("poster") {
                    SessionCategory::Break
                } else if t.contains("lunch") {
                    SessionCategory::Lunch
                } else if t.contains("opening")
                    || t.contains("keynote")
                    || t.contains("conference open")
                {
                    SessionCategory::Opening
                } else if t.contains("closing") {
                    SessionCategory::Closing
                } else {
                    SessionCategory::Special
                }
            }
        }
    }

    /// セッションが属する時間帯
    ///
    /// ランチカテゴリは常に`Lunch`。それ以外は開始時刻で判定し、
    /// 17:30以降は`Evening`、12:30より前は`Morning`、残りは`Afternoon`。
    /// 開始時刻がない場合は00:00として扱います。
    pub fn day_part(&self) -> DayPart {
        if self.category() == SessionCategory::Lunch {
            return DayPart::Lunch;
        }
        let st = self.start.unwrap_or(NaiveTime::MIN);
        let hm = (st.hour(), st.minute());
        if hm >= (17, 30) {
            DayPart::Evening
        } else if hm < (12, 30) {
            DayPart::Morning
        } else {
            DayPart::Afternoon
        }
    }

    /// 時間帯内の並び順キー（開始、終了、コード、名前、タイトルの順）
    ///
    /// 欠けた時刻は00:00として比較します。
    pub fn sort_key(&self) -> (NaiveTime, NaiveTime, &str, &str, &str) {
        (
            self.start.unwrap_or(NaiveTime::MIN),
            self.end.unwrap_or(NaiveTime::MIN),
            self.code(),
            self.name(),
            self.title(),
        )
    }

    /// 並行セッションのグループ化キー（"HH:MM", "HH:MM"）
    pub fn time_key(&self) -> (String, String) {
        let st = self.start.unwrap_or(NaiveTime::MIN);
        let en = self.end.unwrap_or(NaiveTime::MIN);
        (
            st.format("%H:%M").to_string(),
            en.format("%H:%M").to_string(),
        )
    }
}

/// 要約グリッドで使用するセッションカテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionCategory {
    /// 論文セッション
    PaperSessions,
    /// コーヒーブレイク・ポスターセッション
    Break,
    /// ランチ
    Lunch,
    /// オープニング・キーノート
    Opening,
    /// クロージング
    Closing,
    /// その他の特別セッション
    Special,
}

impl SessionCategory {
    /// 対応するCSSクラス名
    pub fn css_class(&self) -> &'static str {
        match self {
            SessionCategory::PaperSessions => "paper-sessions",
            SessionCategory::Break => "break-session",
            SessionCategory::Lunch => "lunch-session",
            SessionCategory::Opening => "conference-opening",
            SessionCategory::Closing => "closing-session",
            SessionCategory::Special => "special-session",
        }
    }
}

/// 1日のうちの時間帯区分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DayPart {
    Morning,
    Lunch,
    Afternoon,
    Evening,
}

/// 詳細プログラムの1タイムスロット
///
/// 要約グリッドの`Session`と異なり、時刻が解析できない行（TBDなど）も
/// 保持し、表示用に整形した元の時刻文字列を併せて持ちます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScheduleSlot {
    /// 表示用に整形した時刻文字列（例: "9:00 AM – 10:45 AM"。空の場合あり）
    pub time_text: String,

    /// Session Typeカラムの値
    pub session_type: String,

    /// Session Nameカラムの値
    pub session_name: String,

    /// 解析済み開始時刻（アンカーID用）
    pub start: Option<NaiveTime>,

    /// 解析済み終了時刻（アンカーID用）
    pub end: Option<NaiveTime>,

    /// Paper Nカラムから抽出した論文リスト
    pub papers: Vec<SlotPaper>,
}

impl ScheduleSlot {
    /// 論文セッションかどうか
    pub fn is_paper_session(&self) -> bool {
        is_paper_session_type(&self.session_type)
    }

    /// ポスターセッションかどうか（部分一致）
    pub fn is_poster_session(&self) -> bool {
        self.session_type.to_lowercase().contains("poster session")
    }

    /// スロットのカテゴリ（CSSクラスに対応）
    pub fn category(&self) -> SlotCategory {
        SlotCategory::from_session_type(&self.session_type)
    }
}

/// 詳細プログラムで使用するスロットカテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SlotCategory {
    Paper,
    Keynote,
    Lunch,
    Break,
    Registration,
    Special,
    Closing,
    Plain,
}

impl SlotCategory {
    /// セッション種別文字列からカテゴリを判定
    pub fn from_session_type(session_type: &str) -> Self {
        let st = session_type.trim().to_lowercase();
        if st.starts_with("paper session") {
            SlotCategory::Paper
        } else if st.contains("keynote") || st.contains("conference open") {
            SlotCategory::Keynote
        } else if st.contains("lunch") {
            SlotCategory::Lunch
        } else if st.contains("coffee") || st.contains("poster session") {
            SlotCategory::Break
        } else if st.contains("registration") {
            SlotCategory::Registration
        } else if st.contains("student research competition")
            || st.contains("sigaccess business meeting")
            || st.contains("doctoral consortium")
            || st.contains("workshops")
        {
            SlotCategory::Special
        } else if st.contains("closing") {
            SlotCategory::Closing
        } else {
            SlotCategory::Plain
        }
    }

    /// 対応するCSSクラス列
    pub fn css_class(&self) -> &'static str {
        match self {
            SlotCategory::Paper => "time-slot paper-sessions",
            SlotCategory::Keynote => "time-slot keynote-slot",
            SlotCategory::Lunch => "time-slot lunch-slot",
            SlotCategory::Break => "time-slot break-slot",
            SlotCategory::Registration => "time-slot registration-slot",
            SlotCategory::Special => "time-slot special-slot",
            SlotCategory::Closing => "time-slot closing-slot",
            SlotCategory::Plain => "time-slot",
        }
    }
}

/// タイムスロット内の1論文
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SlotPaper {
    /// タイトル先頭の括弧タグ（例: "(TACCESS)"）から導出したバッジ
    pub tag: Option<PaperTag>,

    /// タグを除いたタイトル
    pub title: String,

    /// 著者リスト（セミコロン区切りを分割済み）
    pub authors: Vec<String>,
}

/// 論文タイトル先頭の括弧タグに対応するバッジ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PaperTag {
    Taccess,
    ExperienceReport,
    ShortPaper,
    HonorableMention,
}

impl PaperTag {
    /// 括弧内のトークンからバッジを判定（未知のトークンはNone）
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "taccess" => Some(PaperTag::Taccess),
            "er" | "experience report" => Some(PaperTag::ExperienceReport),
            "short" | "short paper" => Some(PaperTag::ShortPaper),
            "honorable mention" => Some(PaperTag::HonorableMention),
            _ => None,
        }
    }

    /// バッジのCSSクラス名
    pub fn css_class(&self) -> &'static str {
        match self {
            PaperTag::Taccess => "taccess-tag",
            PaperTag::ExperienceReport => "er-tag",
            PaperTag::ShortPaper => "short-tag",
            PaperTag::HonorableMention => "honorable-tag",
        }
    }

    /// バッジの表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            PaperTag::Taccess => "TACCESS Paper",
            PaperTag::ExperienceReport => "Experience Report",
            PaperTag::ShortPaper => "Short Paper",
            PaperTag::HonorableMention => "Honorable Mention",
        }
    }
}

/// 採択論文リストの1エントリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AcceptedPaper {
    /// 論文種別（例: "Technical Paper"）
    pub paper_type: String,

    /// タイトル
    pub title: String,

    /// 著者リスト（セミコロン区切りを分割済み）
    pub authors: Vec<String>,
}

/// プログラム委員の1エントリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PcMember {
    pub name: String,
    pub affiliation: String,
    pub country: String,
}

/// ポスターCSVの1エントリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PosterItem {
    /// 正規化済みの発表種別ラベル（例: "Posters", "Demos"）
    pub group_label: String,

    /// タイトル
    pub title: String,

    /// 著者リスト（分割済み）
    pub authors: Vec<String>,
}

/// ポスターページ上の1グループ（種別ごとの見出しと項目）
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PosterGroup {
    /// グループ見出し（例: "Posters"）
    pub label: String,

    /// グループ内の項目（CSVの出現順）
    pub items: Vec<PosterItem>,
}
