//! # 参加者
//!
//! 旅行に同行する参加者を表現する。オーナー（旅行の作成者）と
//! 招待者（メールアドレスのみで登録される同行者）の 2 種類がある。
//!
//! ## 不変条件
//!
//! - 参加者は旅行に排他的に所有される（`trip_id` の付け替えは不可）
//! - 作成時、オーナーはちょうど 1 人で確認済み（`is_confirmed = true`）
//! - 招待者は名前なし・未確認で作成される
//!
//! この不変条件はコンストラクタ [`Participant::owner`] /
//! [`Participant::invitee`] で型レベルに強制し、フラグの組を
//! 自由に組み立てられないようにしている。

use crate::{DomainError, trip::TripId};

define_uuid_id! {
    /// 参加者 ID（一意識別子）
    ///
    /// participants テーブルの主キー。UUID v7 を使用。
    pub struct ParticipantId;
}

/// メールアドレス（値オブジェクト）
///
/// 生成時にバリデーションを実行し、不正な値の作成を防ぐ。
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - `local@domain` の形式であること
    /// - 最大 255 文字
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスは必須です".to_string(),
            ));
        }

        // 基本的な構造検証: local@domain の形式であること
        let Some((local, domain)) = value.split_once('@') else {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        };

        if local.is_empty() || domain.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        }

        if value.len() > 255 {
            return Err(DomainError::Validation(
                "メールアドレスは255文字以内である必要があります".to_string(),
            ));
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

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 参加者エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    id: ParticipantId,
    trip_id: TripId,
    name: Option<String>,
    email: Email,
    is_owner: bool,
    is_confirmed: bool,
}

/// 参加者の DB 復元パラメータ
pub struct ParticipantRecord {
    pub id: ParticipantId,
    pub trip_id: TripId,
    pub name: Option<String>,
    pub email: Email,
    pub is_owner: bool,
    pub is_confirmed: bool,
}

impl Participant {
    /// オーナー参加者を作成する
    ///
    /// オーナーは旅行の作成者であり、作成時点で確認済みとなる。
    pub fn owner(trip_id: TripId, name: impl Into<String>, email: Email) -> Self {
        Self {
            id: ParticipantId::new(),
            trip_id,
            name: Some(name.into()),
            email,
            is_owner: true,
            is_confirmed: true,
        }
    }

    /// 招待者参加者を作成する
    ///
    /// 招待者は作成時点では名前を持たず、未確認の状態で登録される。
    pub fn invitee(trip_id: TripId, email: Email) -> Self {
        Self {
            id: ParticipantId::new(),
            trip_id,
            name: None,
            email,
            is_owner: false,
            is_confirmed: false,
        }
    }

    /// DB レコードから参加者を復元する
    pub fn from_db(record: ParticipantRecord) -> Self {
        Self {
            id: record.id,
            trip_id: record.trip_id,
            name: record.name,
            email: record.email,
            is_owner: record.is_owner,
            is_confirmed: record.is_confirmed,
        }
    }

    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    pub fn trip_id(&self) -> &TripId {
        &self.trip_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn is_owner(&self) -> bool {
        self.is_owner
    }

    pub fn is_confirmed(&self) -> bool {
        self.is_confirmed
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    // ===== Email =====

    #[test]
    fn emailは正常な形式を受け入れる() {
        let email = Email::new("ana@example.com").unwrap();
        assert_eq!(email.as_str(), "ana@example.com");
    }

    #[rstest]
    #[case("")]
    #[case("ana")]
    #[case("@example.com")]
    #[case("ana@")]
    fn emailは不正な形式を拒否する(#[case] value: &str) {
        assert!(matches!(
            Email::new(value),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn emailは255文字超を拒否する() {
        let long = format!("{}@example.com", "a".repeat(250));
        assert!(matches!(Email::new(long), Err(DomainError::Validation(_))));
    }

    // ===== Participant =====

    #[test]
    fn test_ownerは名前付きかつ確認済みで作成される() {
        let trip_id = TripId::new();
        let participant = Participant::owner(
            trip_id.clone(),
            "Ana",
            Email::new("ana@example.com").unwrap(),
        );

        assert_eq!(participant.trip_id(), &trip_id);
        assert_eq!(participant.name(), Some("Ana"));
        assert_eq!(participant.email().as_str(), "ana@example.com");
        assert!(participant.is_owner());
        assert!(participant.is_confirmed());
    }

    #[test]
    fn test_inviteeは名前なしかつ未確認で作成される() {
        let trip_id = TripId::new();
        let participant =
            Participant::invitee(trip_id.clone(), Email::new("bob@example.com").unwrap());

        assert_eq!(participant.trip_id(), &trip_id);
        assert_eq!(participant.name(), None);
        assert!(!participant.is_owner());
        assert!(!participant.is_confirmed());
    }

    #[test]
    fn test_参加者ごとに異なるidが生成される() {
        let trip_id = TripId::new();
        let a = Participant::invitee(trip_id.clone(), Email::new("a@example.com").unwrap());
        let b = Participant::invitee(trip_id, Email::new("b@example.com").unwrap());

        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_from_dbはフラグをそのまま復元する() {
        let record = ParticipantRecord {
            id: ParticipantId::new(),
            trip_id: TripId::new(),
            name: None,
            email: Email::new("cid@example.com").unwrap(),
            is_owner: false,
            is_confirmed: true,
        };

        let participant = Participant::from_db(record);
        assert!(!participant.is_owner());
        assert!(participant.is_confirmed());
    }
}
