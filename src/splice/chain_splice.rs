use std::f64::consts::PI;

use tracing::debug;

use super::{require_positive, Parameter, SpliceError};

/// 턱 1회당 소요되는 로프 직경 배수.
pub const TUCK_DIAMETERS: f64 = 3.0;
/// 할로우 브레이드 버리 길이 (경험값, 턱 횟수와 무관).
pub const BURY_DIAMETERS: f64 = 72.0;
/// 락 스티치 여유 길이.
pub const LOCK_DIAMETERS: f64 = 3.0;

/// 꼬임 로프 체인 스플라이스 입력.
#[derive(Debug, Clone, Copy)]
pub struct TwistedChainSpliceInput {
    pub rope_diameter: f64,
    /// 체인 링크 소선 직경
    pub chain_diameter: f64,
    pub tuck_count: u32,
}

/// 꼬임 로프 체인 스플라이스 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwistedChainSpliceResult {
    pub total_length: f64,
    pub tuck_length: f64,
    /// 링크를 통과하는 루프 길이
    pub loop_length: f64,
    /// 링크 직경 대비 소모 길이 추정치
    pub lost_length: f64,
}

/// 할로우 브레이드 (락 브러멜) 체인 스플라이스 입력.
#[derive(Debug, Clone, Copy)]
pub struct HollowBraidChainSpliceInput {
    pub rope_diameter: f64,
    pub chain_diameter: f64,
}

/// 할로우 브레이드 체인 스플라이스 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HollowBraidChainSpliceResult {
    pub total_length: f64,
    pub bury_length: f64,
    pub loop_length: f64,
    pub lost_length: f64,
}

/// 링크를 감싸는 루프 길이. 로프 자체 두께만큼 반경을 보정한다.
fn loop_around_link(chain_radius: f64, rope_diameter: f64) -> f64 {
    2.0 * PI * (chain_radius + rope_diameter / 2.0)
}

/// 꼬임 로프 체인 스플라이스 소요 길이를 계산한다.
pub fn twisted_chain_splice(
    input: TwistedChainSpliceInput,
) -> Result<TwistedChainSpliceResult, SpliceError> {
    let rope_diameter = require_positive(Parameter::RopeDiameter, input.rope_diameter)?;
    let chain_diameter = require_positive(Parameter::ChainDiameter, input.chain_diameter)?;
    let chain_radius = chain_diameter / 2.0;

    let loop_length = loop_around_link(chain_radius, rope_diameter);
    let tuck_length = rope_diameter * TUCK_DIAMETERS * f64::from(input.tuck_count);
    let total_length = loop_length + tuck_length;
    let lost_length = total_length - chain_radius * 4.0;

    debug!(
        rope_diameter,
        chain_diameter,
        tuck_count = input.tuck_count,
        total_length,
        "twisted chain splice"
    );
    Ok(TwistedChainSpliceResult {
        total_length,
        tuck_length,
        loop_length,
        lost_length,
    })
}

/// 할로우 브레이드 체인 스플라이스 소요 길이를 계산한다.
pub fn hollow_braid_chain_splice(
    input: HollowBraidChainSpliceInput,
) -> Result<HollowBraidChainSpliceResult, SpliceError> {
    let rope_diameter = require_positive(Parameter::RopeDiameter, input.rope_diameter)?;
    let chain_diameter = require_positive(Parameter::ChainDiameter, input.chain_diameter)?;
    let chain_radius = chain_diameter / 2.0;

    let loop_length =
        loop_around_link(chain_radius, rope_diameter) + rope_diameter * LOCK_DIAMETERS;
    let bury_length = rope_diameter * BURY_DIAMETERS;
    let total_length = loop_length + bury_length;
    let lost_length = total_length - chain_radius * 4.0;

    debug!(
        rope_diameter,
        chain_diameter, total_length, "hollow braid chain splice"
    );
    Ok(HollowBraidChainSpliceResult {
        total_length,
        bury_length,
        loop_length,
        lost_length,
    })
}
