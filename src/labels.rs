// ============================================
// src/labels.rs
// 画面に出す文言 (ラベル) の定義と読み込み
// ============================================

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const LABELS_FILE: &str = "labels.json";

#[derive(Debug, Error)]
pub enum LabelsError {
    #[error("failed to read labels from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse labels in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize labels")]
    Serialize(#[from] serde_json::Error),
}

/// ラベルキー → 表示文字列。
///
/// 既定値は元の文言そのまま。JSON ファイルで一部だけ上書きできる
/// (書かれていないキーは既定値のまま)。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub app_title: String,
    pub welcome_message: String,
    pub vocabulary_title: String,
    pub quiz_title: String,
    pub progress_title: String,
    pub start_quiz_button: String,
    pub next_button: String,
    pub check_answer_button: String,
    pub try_again_button: String,
    pub correct_message: String,
    pub incorrect_message: String,
    pub hint_label: String,
    pub hint_text: String,
    pub quiz_score_heading: String,
    pub vocabulary_mastered_heading: String,
    /// `{score}` と `{total}` が置き換えられる
    pub score_summary: String,
    pub review_vocabulary_button: String,
    pub key_help: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            app_title: "英語学習アプリ".into(),
            welcome_message: "英語を楽しく学びましょう！".into(),
            vocabulary_title: "単語学習".into(),
            quiz_title: "クイズ".into(),
            progress_title: "進捗".into(),
            start_quiz_button: "クイズを始める".into(),
            next_button: "次へ".into(),
            check_answer_button: "答えを確認".into(),
            try_again_button: "もう一度".into(),
            correct_message: "正解です！".into(),
            incorrect_message: "不正解です。もう一度挑戦してください。".into(),
            hint_label: "ヒント".into(),
            hint_text: "Hint: Check the vocabulary list for the correct answer.".into(),
            quiz_score_heading: "Quiz Score".into(),
            vocabulary_mastered_heading: "Vocabulary Mastered".into(),
            score_summary: "{score} out of {total} correct".into(),
            review_vocabulary_button: "Review Vocabulary".into(),
            key_help: "Tab: switch  q: quit".into(),
        }
    }
}

impl Labels {
    /// "3 out of 5 correct" のような文字列を作る
    pub fn format_score(&self, score: usize, total: usize) -> String {
        self.score_summary
            .replace("{score}", &score.to_string())
            .replace("{total}", &total.to_string())
    }

    // MARK:ラベルファイルの既定パス
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("jp", "Fukumoto0141", "ENGLISH_STUDY")
            .map(|dirs| dirs.config_dir().join(LABELS_FILE))
    }

    /// MARK:ラベルを読み込む
    ///
    /// `path` を指定した場合はそのファイルが必須。
    /// 指定しない場合は既定パスにあれば読み、無ければ既定値。
    pub fn load(path: Option<&Path>) -> Result<Self, LabelsError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("no labels file, using built-in labels");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, LabelsError> {
        let text = fs::read_to_string(path).map_err(|source| LabelsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let labels = serde_json::from_str(&text).map_err(|source| LabelsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "labels loaded");
        Ok(labels)
    }

    /// 既定のラベルを JSON で (翻訳ファイルのひな形用)
    pub fn default_json() -> Result<String, LabelsError> {
        Ok(serde_json::to_string_pretty(&Self::default())?)
    }
}
