use serde::{Deserialize, Serialize};

/// 저장 작업 성공 시 반환하는 단순 성공 마커
///
/// ```json
/// { "success": true }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseJson {
    pub success: bool,
}

impl ResponseJson {
    pub fn succeeded() -> Self {
        Self { success: true }
    }
}
