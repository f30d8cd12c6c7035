//! 계산 종류 카탈로그와 요청/결과 디스패치.

use crate::i18n::keys;
use crate::rope::RopeType;
use crate::splice::{
    self, BackSpliceResult, FidSections, GrogSlingInput, GrogSlingResult,
    HollowBraidChainSpliceInput, HollowBraidChainSpliceResult, LockedEyeSpliceInput,
    LockedEyeSpliceResult, SpliceError, TwistedChainSpliceInput, TwistedChainSpliceResult,
    TwistedEyeSpliceInput, TwistedEyeSpliceResult,
};

/// 제공하는 계산 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpliceKind {
    FidTable,
    FidLength,
    TwistedEyeSplice,
    TwistedBackSplice,
    TwistedChainSplice,
    LockedBrummelEyeSplice,
    HollowBraidChainSplice,
    GrogSling,
}

impl SpliceKind {
    pub const ALL: [SpliceKind; 8] = [
        SpliceKind::FidTable,
        SpliceKind::FidLength,
        SpliceKind::TwistedEyeSplice,
        SpliceKind::TwistedBackSplice,
        SpliceKind::TwistedChainSplice,
        SpliceKind::LockedBrummelEyeSplice,
        SpliceKind::HollowBraidChainSplice,
        SpliceKind::GrogSling,
    ];

    pub fn rope_type(self) -> RopeType {
        match self {
            SpliceKind::FidTable | SpliceKind::FidLength => RopeType::General,
            SpliceKind::TwistedEyeSplice
            | SpliceKind::TwistedBackSplice
            | SpliceKind::TwistedChainSplice => RopeType::Twisted,
            SpliceKind::LockedBrummelEyeSplice
            | SpliceKind::HollowBraidChainSplice
            | SpliceKind::GrogSling => RopeType::HollowBraid,
        }
    }

    pub fn title_key(self) -> &'static str {
        match self {
            SpliceKind::FidTable => keys::CALC_FID_TABLE,
            SpliceKind::FidLength => keys::CALC_FID_LENGTH,
            SpliceKind::TwistedEyeSplice => keys::CALC_EYE_SPLICE,
            SpliceKind::TwistedBackSplice => keys::CALC_BACK_SPLICE,
            SpliceKind::TwistedChainSplice => keys::CALC_CHAIN_SPLICE,
            SpliceKind::LockedBrummelEyeSplice => keys::CALC_LOCKED_EYE_SPLICE,
            SpliceKind::HollowBraidChainSplice => keys::CALC_LOCKED_CHAIN_SPLICE,
            SpliceKind::GrogSling => keys::CALC_GROG_SLING,
        }
    }

    /// 계산식 출처 (Ashley Book of Knots 번호).
    pub fn reference(self) -> Option<&'static str> {
        match self {
            SpliceKind::TwistedEyeSplice => Some("ABOK #2725"),
            SpliceKind::TwistedBackSplice => Some("ABOK #2813"),
            _ => None,
        }
    }

    /// 해당 로프 종류에 속한 계산을 메뉴 순서대로 반환한다.
    pub fn for_rope_type(rope_type: RopeType) -> Vec<SpliceKind> {
        Self::ALL
            .into_iter()
            .filter(|kind| kind.rope_type() == rope_type)
            .collect()
    }
}

/// 계산 한 건의 입력 묶음.
#[derive(Debug, Clone, Copy)]
pub enum SpliceRequest {
    FidLength { rope_diameter: f64 },
    TwistedEyeSplice(TwistedEyeSpliceInput),
    TwistedBackSplice { rope_diameter: f64 },
    TwistedChainSplice(TwistedChainSpliceInput),
    LockedBrummelEyeSplice(LockedEyeSpliceInput),
    HollowBraidChainSplice(HollowBraidChainSpliceInput),
    GrogSling(GrogSlingInput),
}

impl SpliceRequest {
    pub fn kind(&self) -> SpliceKind {
        match self {
            SpliceRequest::FidLength { .. } => SpliceKind::FidLength,
            SpliceRequest::TwistedEyeSplice(_) => SpliceKind::TwistedEyeSplice,
            SpliceRequest::TwistedBackSplice { .. } => SpliceKind::TwistedBackSplice,
            SpliceRequest::TwistedChainSplice(_) => SpliceKind::TwistedChainSplice,
            SpliceRequest::LockedBrummelEyeSplice(_) => SpliceKind::LockedBrummelEyeSplice,
            SpliceRequest::HollowBraidChainSplice(_) => SpliceKind::HollowBraidChainSplice,
            SpliceRequest::GrogSling(_) => SpliceKind::GrogSling,
        }
    }
}

/// 계산 종류별 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpliceResult {
    FidLength(FidSections),
    TwistedEyeSplice(TwistedEyeSpliceResult),
    TwistedBackSplice(BackSpliceResult),
    TwistedChainSplice(TwistedChainSpliceResult),
    LockedBrummelEyeSplice(LockedEyeSpliceResult),
    HollowBraidChainSplice(HollowBraidChainSpliceResult),
    GrogSling(GrogSlingResult),
}

/// 표시용 결과 한 줄: 번역 키와 길이.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultLine {
    pub label_key: &'static str,
    pub length: f64,
}

const fn line(label_key: &'static str, length: f64) -> ResultLine {
    ResultLine { label_key, length }
}

impl SpliceResult {
    /// 표시 순서대로 나열한 (라벨, 길이) 목록.
    pub fn lines(&self) -> Vec<ResultLine> {
        use keys::*;
        match self {
            SpliceResult::FidLength(r) => vec![
                line(RESULT_SHORT_FID, r.short_section),
                line(RESULT_HALF_FID, r.half_length),
                line(RESULT_LONG_FID, r.long_length),
                line(RESULT_FULL_FID, r.full_length),
            ],
            SpliceResult::TwistedEyeSplice(r) => vec![
                line(RESULT_FULL, r.full_length),
                line(RESULT_EYE, r.eye_length),
                line(RESULT_TUCK, r.tuck_length),
                line(RESULT_LOST, r.lost_length),
            ],
            SpliceResult::TwistedBackSplice(r) => vec![line(RESULT_LENGTH, r.length)],
            SpliceResult::TwistedChainSplice(r) => vec![
                line(RESULT_TOTAL, r.total_length),
                line(RESULT_TUCK, r.tuck_length),
                line(RESULT_LOOP, r.loop_length),
                line(RESULT_LOST, r.lost_length),
            ],
            SpliceResult::LockedBrummelEyeSplice(r) => vec![
                line(RESULT_FULL, r.full_length),
                line(RESULT_EYE, r.eye_length),
                line(RESULT_BURY, r.bury_length),
                line(RESULT_LOST, r.lost_length),
            ],
            SpliceResult::HollowBraidChainSplice(r) => vec![
                line(RESULT_TOTAL, r.total_length),
                line(RESULT_BURY, r.bury_length),
                line(RESULT_LOOP, r.loop_length),
                line(RESULT_LOST, r.lost_length),
            ],
            SpliceResult::GrogSling(r) => vec![
                line(RESULT_TOTAL, r.total_length),
                line(RESULT_CIRCUMFERENCE, r.sling_circumference),
                line(RESULT_TAIL, r.tail_length),
            ],
        }
    }

    /// 결과와 함께 보여줄 참고 문구 키.
    pub fn notes(&self) -> Vec<&'static str> {
        match self {
            SpliceResult::GrogSling(r) if r.tail_clamped => vec![keys::NOTE_TAIL_CLAMPED],
            _ => Vec::new(),
        }
    }
}

/// 요청 종류에 맞는 계산 함수를 호출한다.
pub fn calculate(request: &SpliceRequest) -> Result<SpliceResult, SpliceError> {
    let result = match *request {
        SpliceRequest::FidLength { rope_diameter } => {
            SpliceResult::FidLength(splice::fid_sections(rope_diameter)?)
        }
        SpliceRequest::TwistedEyeSplice(input) => {
            SpliceResult::TwistedEyeSplice(splice::twisted_eye_splice(input)?)
        }
        SpliceRequest::TwistedBackSplice { rope_diameter } => {
            SpliceResult::TwistedBackSplice(splice::back_splice(rope_diameter)?)
        }
        SpliceRequest::TwistedChainSplice(input) => {
            SpliceResult::TwistedChainSplice(splice::twisted_chain_splice(input)?)
        }
        SpliceRequest::LockedBrummelEyeSplice(input) => {
            SpliceResult::LockedBrummelEyeSplice(splice::locked_eye_splice(input)?)
        }
        SpliceRequest::HollowBraidChainSplice(input) => {
            SpliceResult::HollowBraidChainSplice(splice::hollow_braid_chain_splice(input)?)
        }
        SpliceRequest::GrogSling(input) => SpliceResult::GrogSling(splice::grog_sling(input)?),
    };
    Ok(result)
}
