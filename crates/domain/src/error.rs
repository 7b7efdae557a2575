//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **型による分類**: エラーの種類を列挙型で明示し、パターンマッチで処理可能に
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **HTTP ステータスへのマッピング**: API 層でステータスコードに変換可能
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `InvalidStartDate` | 400 Bad Request | 開始日が基準時刻より過去 |
//! | `InvalidEndDate` | 400 Bad Request | 終了日が開始日より前 |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// ビジネスロジックの実行中に発生する例外状態を表現する。
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がビジネスルールに違反している場合に使用する。
    ///
    /// # 例
    ///
    /// - 必須フィールドが未入力
    /// - 文字数制限の超過
    /// - 不正なフォーマット
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 旅行開始日が基準時刻より過去
    ///
    /// 検証順序は開始日 → 終了日。開始日が不正な場合、
    /// 終了日の検証は行わずこのエラーで打ち切る。
    #[error("旅行の開始日が過去の日時です")]
    InvalidStartDate,

    /// 旅行終了日が開始日より前
    #[error("旅行の終了日が開始日より前の日時です")]
    InvalidEndDate,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_displayが人間可読なメッセージを出力する() {
        assert_eq!(
            DomainError::Validation("目的地は必須です".to_string()).to_string(),
            "バリデーションエラー: 目的地は必須です"
        );
        assert_eq!(
            DomainError::InvalidStartDate.to_string(),
            "旅行の開始日が過去の日時です"
        );
        assert_eq!(
            DomainError::InvalidEndDate.to_string(),
            "旅行の終了日が開始日より前の日時です"
        );
    }
}
