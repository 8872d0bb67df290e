use thiserror::Error;

/// 계산기 공통 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// 입력값이 허용 범위를 벗어난 경우
    #[error("입력 오류: {0}")]
    InvalidInput(&'static str),
    /// 카탈로그에 없는 식별자
    #[error("알 수 없는 {kind} 식별자: {id}")]
    UnknownId { kind: &'static str, id: String },
}

/// 금액/수량 입력이 유한한 0 이상 값인지 확인한다.
pub(crate) fn ensure_non_negative(value: f64, msg: &'static str) -> Result<f64, CalcError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput(msg))
    }
}
