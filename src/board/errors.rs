//! Board-specific error types

use thiserror::Error;

/// Outcomes of user-triggered mutations. None of these are fatal: the
/// caller surfaces them as status text and leaves the collection untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("게시글 {0}번을 찾을 수 없습니다")]
    NotFound(u64),

    #[error("제목을 입력해주세요")]
    EmptyInput,

    #[error("취소되었습니다")]
    Cancelled,
}
