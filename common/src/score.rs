//! スコアから表示文言・表示ティアへの変換
//!
//! コメント帯（6段階・降順の strict `>` 判定）と結果画面用のティア
//! （4段階・`>=` 判定）は意図的に別テーブル。しきい値を共有しない。

/// スコアに対応するコメントを返す
///
/// 帯は高い方から順に評価する。境界値（90, 75, 60, 40, 20 ちょうど）は
/// strict `>` のため下の帯に落ちる。
pub fn comment_for_score(score: f64) -> &'static str {
    if score > 90.0 {
        "これはもう、ご本人と言っても過言ではありません！"
    } else if score > 75.0 {
        "かなり似ています！街で会ったら二度見しますね。"
    } else if score > 60.0 {
        "特徴を捉えていますね！雰囲気あります。"
    } else if score > 40.0 {
        "まあまあ似ていますが、もう少し頑張りましょう！"
    } else if score > 20.0 {
        "うーん、似ている部分もありますが、まだまだですね。"
    } else {
        "似ているとは言い難いですが、個性があります！"
    }
}

/// 結果画面の見出しメッセージ
pub fn headline_for_score(score: f64) -> &'static str {
    if score >= 90.0 {
        "驚異的な類似度！"
    } else if score >= 80.0 {
        "非常に高い類似度！"
    } else if score >= 70.0 {
        "かなり似ています！"
    } else if score >= 60.0 {
        "そこそこ似ています"
    } else if score >= 40.0 {
        "ちょっと似ているかも"
    } else {
        "あまり似ていません"
    }
}

/// スコアバーの表示ティア
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Top,
    High,
    Mid,
    Low,
}

impl ScoreTier {
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTier::Top
        } else if score >= 60.0 {
            ScoreTier::High
        } else if score >= 40.0 {
            ScoreTier::Mid
        } else {
            ScoreTier::Low
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreTier::Top => "score-top",
            ScoreTier::High => "score-high",
            ScoreTier::Mid => "score-mid",
            ScoreTier::Low => "score-low",
        }
    }
}
