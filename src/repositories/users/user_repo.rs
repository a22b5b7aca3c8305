//! 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션에 대한 데이터 액세스를 담당합니다.
//! 사용자 CRUD 외에 리프레시 토큰(세션)과 비밀번호 재설정 토큰의
//! 저장/조회/제거까지 이 리포지토리가 관리합니다.
//!
//! 서비스 계층은 [`UserStore`] trait에 의존하며, 프로덕션에서는
//! [`UserRepository`]가 주입됩니다.
//!
//! 모든 조회는 소프트 삭제된 문서(`deletedAt`이 설정된 문서)를 제외합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;

/// 사용자 저장소 인터페이스
///
/// 사용자 CRUD와 세션/재설정 토큰 저장을 추상화합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일로 사용자를 조회합니다. (소문자 정규화, 소프트 삭제 제외)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// ID로 사용자를 조회합니다. (소프트 삭제 제외)
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Google 계정 식별자로 사용자를 조회합니다.
    async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>, AppError>;

    /// 전체 사용자 목록을 조회합니다. (소프트 삭제 제외)
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// 새 사용자를 생성합니다. 이메일 중복 시 `ConflictError`.
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// 사용자 문서를 부분 업데이트하고 업데이트 후의 문서를 반환합니다.
    async fn update(&self, id: &str, update_doc: Document) -> Result<Option<User>, AppError>;

    /// 사용자를 소프트 삭제합니다. 삭제된 문서가 있으면 `true`.
    async fn soft_delete(&self, id: &str) -> Result<bool, AppError>;

    /// 사용자의 리프레시 토큰을 저장합니다. (사용자당 1개, 무조건 덮어씀)
    async fn save_refresh_token(&self, user_id: &str, token: &str) -> Result<(), AppError>;

    /// 저장된 리프레시 토큰으로 사용자를 조회합니다.
    async fn find_by_refresh_token(&self, token: &str) -> Result<Option<User>, AppError>;

    /// 사용자의 리프레시 토큰을 제거합니다. (멱등)
    async fn remove_refresh_token(&self, user_id: &str) -> Result<(), AppError>;

    /// 비밀번호 재설정 토큰과 만료 시각을 저장합니다.
    async fn set_password_reset_token(
        &self,
        user_id: &str,
        token: &str,
        expires_at: DateTime,
    ) -> Result<(), AppError>;

    /// 유효한(만료되지 않은) 재설정 토큰으로 사용자를 조회합니다.
    async fn find_by_password_reset_token(&self, token: &str) -> Result<Option<User>, AppError>;

    /// 새 비밀번호 해시를 저장하고 재설정 토큰을 제거합니다. (단일 쓰기)
    async fn reset_password_and_clear_token(
        &self,
        user_id: &str,
        password_hash: &str,
    ) -> Result<(), AppError>;
}

/// 사용자 데이터 액세스 리포지토리
///
/// `users` 컬렉션 핸들을 소유하며, 서비스 계층에서 `Arc`로 공유됩니다.
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    /// 데이터베이스 연결로부터 리포지토리를 생성합니다.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>("users"),
        }
    }

    /// 컬렉션 인덱스를 생성합니다.
    ///
    /// 서버 기동 시 한 번 호출됩니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        // 재설정 토큰 조회용 인덱스
        let reset_token_index = IndexModel::builder()
            .keys(doc! { "resetPasswordToken": 1 })
            .options(
                IndexOptions::builder()
                    .sparse(true)
                    .name("reset_password_token".to_string())
                    .build(),
            )
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([email_index, reset_token_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! {
                "email": email.to_lowercase(),
                "deletedAt": null,
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = Self::parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id, "deletedAt": null })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! {
                "provider": "google",
                "googleId": google_id,
                "deletedAt": null,
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self
            .collection
            .find(doc! { "deletedAt": null })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 유니크 인덱스가 동시 요청으로 인한 레이스에서도 중복 생성을 막아줍니다.
    async fn create(&self, mut user: User) -> Result<User, AppError> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        let result = self
            .collection
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    async fn update(&self, id: &str, mut update_doc: Document) -> Result<Option<User>, AppError> {
        let object_id = Self::parse_object_id(id)?;

        update_doc.insert("updatedAt", DateTime::now());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(
                doc! { "_id": object_id, "deletedAt": null },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn soft_delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = Self::parse_object_id(id)?;

        let result = self
            .collection
            .update_one(
                doc! { "_id": object_id, "deletedAt": null },
                doc! { "$set": { "deletedAt": DateTime::now(), "updatedAt": DateTime::now() } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count > 0)
    }

    async fn save_refresh_token(&self, user_id: &str, token: &str) -> Result<(), AppError> {
        let object_id = Self::parse_object_id(user_id)?;

        self.collection
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": { "refreshToken": token, "updatedAt": DateTime::now() } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 로그아웃된 세션의 토큰은 어떤 사용자와도 매칭되지 않습니다.
    async fn find_by_refresh_token(&self, token: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "refreshToken": token, "deletedAt": null })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 토큰이 이미 없는 사용자에 대해서도 성공합니다.
    async fn remove_refresh_token(&self, user_id: &str) -> Result<(), AppError> {
        let object_id = Self::parse_object_id(user_id)?;

        self.collection
            .update_one(
                doc! { "_id": object_id },
                doc! { "$unset": { "refreshToken": "" }, "$set": { "updatedAt": DateTime::now() } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 기존 토큰이 있으면 새 토큰으로 덮어씁니다.
    async fn set_password_reset_token(
        &self,
        user_id: &str,
        token: &str,
        expires_at: DateTime,
    ) -> Result<(), AppError> {
        let object_id = Self::parse_object_id(user_id)?;

        self.collection
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": {
                    "resetPasswordToken": token,
                    "resetPasswordTokenExpires": expires_at,
                    "updatedAt": DateTime::now(),
                } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 토큰 일치와 만료 시각 검사를 단일 쿼리로 수행하므로,
    /// 만료되었거나 이미 사용된 토큰은 매칭되지 않습니다.
    async fn find_by_password_reset_token(&self, token: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! {
                "resetPasswordToken": token,
                "resetPasswordTokenExpires": { "$gt": DateTime::now() },
                "deletedAt": null,
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 단일 쓰기로 수행하여 토큰이 일회용임을 보장합니다.
    async fn reset_password_and_clear_token(
        &self,
        user_id: &str,
        password_hash: &str,
    ) -> Result<(), AppError> {
        let object_id = Self::parse_object_id(user_id)?;

        self.collection
            .update_one(
                doc! { "_id": object_id },
                doc! {
                    "$set": { "password": password_hash, "updatedAt": DateTime::now() },
                    "$unset": {
                        "resetPasswordToken": "",
                        "resetPasswordTokenExpires": "",
                    },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
