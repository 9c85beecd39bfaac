use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Error codes for the tone analysis system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[repr(i32)]
pub enum ErrCode {
    // Score errors (0-99)
    #[strum(serialize = "_SCORE_ERR_BEGIN")]
    ScoreErrBegin = 0,
    #[strum(serialize = "INVALID_INPUT")]
    InvalidInput = 1,
    #[strum(serialize = "EMPTY_ACCUMULATOR")]
    EmptyAccumulator = 2,
    #[strum(serialize = "UNDEFINED_METRIC")]
    UndefinedMetric = 3,
    #[strum(serialize = "_SCORE_ERR_END")]
    ScoreErrEnd = 99,

    // Data errors (100-199)
    #[strum(serialize = "_DATA_ERR_BEGIN")]
    DataErrBegin = 100,
    #[strum(serialize = "DATA_FORMAT_ERROR")]
    DataFormatError = 101,
    #[strum(serialize = "NO_DATA")]
    NoData = 102,
    #[strum(serialize = "_DATA_ERR_END")]
    DataErrEnd = 199,
}

impl ErrCode {
    pub fn is_score_err(&self) -> bool {
        let code = *self as i32;
        code > Self::ScoreErrBegin as i32 && code < Self::ScoreErrEnd as i32
    }

    pub fn is_data_err(&self) -> bool {
        let code = *self as i32;
        code > Self::DataErrBegin as i32 && code < Self::DataErrEnd as i32
    }
}

#[derive(Debug, Error)]
#[error("{errcode}: {msg}")]
pub struct ToneError {
    pub errcode: ErrCode,
    pub msg: String,
}

impl ToneError {
    pub fn new(message: impl Into<String>, code: ErrCode) -> Self {
        Self {
            errcode: code,
            msg: message.into(),
        }
    }

    pub fn is_score_err(&self) -> bool {
        self.errcode.is_score_err()
    }

    pub fn is_data_err(&self) -> bool {
        self.errcode.is_data_err()
    }
}
