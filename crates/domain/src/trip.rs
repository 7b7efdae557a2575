//! # 旅行
//!
//! 旅行作成ワークフローの中心エンティティ。目的地と期間を保持し、
//! 生成時に日付の時間的不変条件を検証する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 要件 |
//! |---|------------|------|
//! | [`Trip`] | 旅行 | 目的地 + 開始日 + 終了日。作成後は不変 |
//! | [`Destination`] | 目的地 | 4 文字以上の非空文字列 |
//!
//! ## 設計方針
//!
//! - **生成時検証**: `Trip::new()` は注入された基準時刻に対して
//!   開始日・終了日を検証し、不正な期間の旅行を存在させない
//! - **DB 復元の分離**: 過去に作成された旅行は検証なしで
//!   [`Trip::from_db`] により復元する（開始日が過去でも読み込める）

use chrono::{DateTime, Utc};

use crate::DomainError;

define_uuid_id! {
    /// 旅行 ID（一意識別子）
    ///
    /// trips テーブルの主キー。UUID v7 を使用。
    pub struct TripId;
}

/// 目的地（値オブジェクト）
///
/// 前後の空白を除去した上で、4 文字以上 255 文字以内を要求する。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Destination(String);

/// 目的地の最小文字数
const DESTINATION_MIN_LENGTH: usize = 4;

/// 目的地の最大文字数
const DESTINATION_MAX_LENGTH: usize = 255;

impl Destination {
    /// 目的地を作成する
    ///
    /// # バリデーション
    ///
    /// - trim 後に空文字列ではない
    /// - 4 文字以上（`chars().count()` でカウント）
    /// - 255 文字以内
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation("目的地は必須です".to_string()));
        }

        let count = value.chars().count();
        if count < DESTINATION_MIN_LENGTH {
            return Err(DomainError::Validation(format!(
                "目的地は {DESTINATION_MIN_LENGTH} 文字以上である必要があります"
            )));
        }
        if count > DESTINATION_MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "目的地は {DESTINATION_MAX_LENGTH} 文字以内である必要があります"
            )));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 旅行エンティティ
///
/// 作成後の更新・削除はスコープ外のため、状態遷移を持たない。
/// 参加者は旅行と同一トランザクションで作成される（infra 層で強制）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    id: TripId,
    destination: Destination,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

/// 旅行の新規作成パラメータ
///
/// `now` は呼び出し側が [`crate::clock::Clock`] から取得した基準時刻。
pub struct NewTrip {
    pub id: TripId,
    pub destination: Destination,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub now: DateTime<Utc>,
}

/// 旅行の DB 復元パラメータ
pub struct TripRecord {
    pub id: TripId,
    pub destination: Destination,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// 旅行を新規作成する
    ///
    /// ## 検証ルール（この順に適用し、最初の違反で打ち切る）
    ///
    /// 1. `starts_at` が `now` より前であってはならない → [`DomainError::InvalidStartDate`]
    /// 2. `ends_at` が `starts_at` より前であってはならない → [`DomainError::InvalidEndDate`]
    pub fn new(params: NewTrip) -> Result<Self, DomainError> {
        if params.starts_at < params.now {
            return Err(DomainError::InvalidStartDate);
        }

        if params.ends_at < params.starts_at {
            return Err(DomainError::InvalidEndDate);
        }

        Ok(Self {
            id: params.id,
            destination: params.destination,
            starts_at: params.starts_at,
            ends_at: params.ends_at,
            created_at: params.now,
        })
    }

    /// DB レコードから旅行を復元する
    ///
    /// 作成時に検証済みのため、日付の再検証は行わない。
    pub fn from_db(record: TripRecord) -> Self {
        Self {
            id: record.id,
            destination: record.destination,
            starts_at: record.starts_at,
            ends_at: record.ends_at,
            created_at: record.created_at,
        }
    }

    pub fn id(&self) -> &TripId {
        &self.id
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    pub fn ends_at(&self) -> DateTime<Utc> {
        self.ends_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn make_new_trip(
        starts_offset_hours: i64,
        ends_offset_hours: i64,
        now: DateTime<Utc>,
    ) -> NewTrip {
        NewTrip {
            id: TripId::new(),
            destination: Destination::new("Florianopolis").unwrap(),
            starts_at: now + Duration::hours(starts_offset_hours),
            ends_at: now + Duration::hours(ends_offset_hours),
            now,
        }
    }

    // ===== Destination =====

    #[test]
    fn destinationは前後の空白を除去する() {
        let destination = Destination::new("  Florianopolis  ").unwrap();
        assert_eq!(destination.as_str(), "Florianopolis");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("Foz")]
    #[case("Rio")]
    fn destinationは4文字未満を拒否する(#[case] value: &str) {
        let result = Destination::new(value);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn destinationは4文字ちょうどを受け入れる() {
        let destination = Destination::new("Natal").unwrap();
        assert_eq!(destination.as_str(), "Natal");
        assert!(Destination::new("Faro").is_ok());
    }

    #[test]
    fn destinationは255文字超を拒否する() {
        let long = "a".repeat(256);
        assert!(matches!(
            Destination::new(long),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn destinationはマルチバイト文字を文字数でカウントする() {
        // 4 文字（バイト数では 12）
        assert!(Destination::new("サンパウロ").is_ok());
        assert!(matches!(
            Destination::new("リオ"),
            Err(DomainError::Validation(_))
        ));
    }

    // ===== Trip::new =====

    #[test]
    fn test_trip_new_正常系() {
        let now = Utc::now();
        let trip = Trip::new(make_new_trip(24, 24 * 6, now)).unwrap();

        assert_eq!(trip.destination().as_str(), "Florianopolis");
        assert_eq!(trip.starts_at(), now + Duration::hours(24));
        assert_eq!(trip.ends_at(), now + Duration::hours(24 * 6));
        assert_eq!(trip.created_at(), now);
    }

    #[test]
    fn test_開始日が基準時刻と同時刻の場合は許可する() {
        let now = Utc::now();
        let result = Trip::new(make_new_trip(0, 24, now));
        assert!(result.is_ok());
    }

    #[test]
    fn test_開始日が過去の場合はinvalid_start_date() {
        let now = Utc::now();
        let result = Trip::new(make_new_trip(-24, 24, now));
        assert_eq!(result.unwrap_err(), DomainError::InvalidStartDate);
    }

    #[test]
    fn test_終了日が開始日より前の場合はinvalid_end_date() {
        let now = Utc::now();
        let result = Trip::new(make_new_trip(48, 24, now));
        assert_eq!(result.unwrap_err(), DomainError::InvalidEndDate);
    }

    #[test]
    fn test_終了日が開始日と同時刻の日帰り旅行は許可する() {
        let now = Utc::now();
        let result = Trip::new(make_new_trip(24, 24, now));
        assert!(result.is_ok());
    }

    #[test]
    fn test_開始日と終了日が両方不正な場合は開始日エラーを優先する() {
        // 検証は開始日 → 終了日の順で fail fast
        let now = Utc::now();
        let result = Trip::new(make_new_trip(-48, -72, now));
        assert_eq!(result.unwrap_err(), DomainError::InvalidStartDate);
    }

    // ===== Trip::from_db =====

    #[test]
    fn test_from_dbは過去の旅行も検証なしで復元する() {
        let now = Utc::now();
        let record = TripRecord {
            id: TripId::new(),
            destination: Destination::new("Salvador").unwrap(),
            starts_at: now - Duration::days(30),
            ends_at: now - Duration::days(25),
            created_at: now - Duration::days(40),
        };

        let trip = Trip::from_db(record);
        assert_eq!(trip.destination().as_str(), "Salvador");
    }
}
