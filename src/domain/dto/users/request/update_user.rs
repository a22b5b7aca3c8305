//! 사용자 수정 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 사용자 프로필 수정 요청 DTO
///
/// 수정 가능한 필드만 허용 목록 방식으로 받습니다. 비밀번호 변경과
/// 역할 변경은 이 요청으로 불가능합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// 사용자 이름 (1-50자)
    #[validate(length(
        min = 1,
        max = 50,
        message = "이름은 1-50자 사이여야 합니다"
    ))]
    pub name: Option<String>,
}
