//! Parser Module
//!
//! CSVテキストから各ドキュメントの中間データ構造を構築するモジュール。
//! カラムの自動検出と日付の前方補完により、表計算ソフトが出力する
//! 不揃いなCSVを許容します。

mod members;
mod papers;
mod posters;
mod schedule;

pub(crate) use members::load_pc_members;
pub(crate) use papers::load_accepted_papers;
pub(crate) use posters::load_poster_items;
pub(crate) use schedule::{load_full_schedule, load_sessions};
