//! # Domain Entities Module
//!
//! 저장소에 보관되는 엔티티를 정의합니다. MongoDB 문서와 직접 매핑되며,
//! 인메모리 저장소도 같은 타입을 그대로 보관합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring Entity | Rust Domain Entity |
//! |------------------|-------------------|
//! | `@Entity` | `#[derive(Serialize, Deserialize)]` |
//! | `@Id` | `#[serde(rename = "_id")]` |
//! | `@CreatedDate` | `created_at: DateTime` |
//! | Bean Validation | 요청 DTO의 `validator` derive |

pub mod users;
