//! 아이 스플라이스 (ABOK #2725) 계산.
//!
//! 아이는 주 원호와 양쪽 접선 구간으로 나누어 근사한다.
//! 접선 구간 `B = sin(β) / 3r` 은 길이 차원이 아닌 비율이지만 기존 참고값과
//! 일치시키기 위해 식을 그대로 유지한다.

use std::f64::consts::PI;

use tracing::debug;

use super::{
    require_positive, Parameter, SpliceError, BURY_DIAMETERS, LOCK_DIAMETERS, TUCK_DIAMETERS,
};

/// 아이 형상 계산의 중간값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeGeometry {
    /// 로프 축과 접선 구간 끝 사이 각도 [rad]
    pub beta: f64,
    /// 180°와 접선 구간 사이 각도 [rad]
    pub alpha: f64,
    /// 주 원호 길이 (A)
    pub arc_length: f64,
    /// 접선 구간 길이 (B)
    pub tangent_length: f64,
    /// A + 2B
    pub eye_length: f64,
}

/// 보정이 끝난 아이 반경으로 아이 형상을 계산한다.
///
/// 반경 보정(로프 직경의 절반 가산)은 호출 측 책임이다.
pub fn eye_geometry(radius: f64) -> EyeGeometry {
    let beta = (radius / (radius * 3.0)).acos();
    let alpha = (PI / 2.0) - beta;
    let arc_length = ((alpha + PI) / (2.0 * PI)) * (2.0 * PI * radius);
    let tangent_length = beta.sin() / (radius * 3.0);
    EyeGeometry {
        beta,
        alpha,
        arc_length,
        tangent_length,
        eye_length: arc_length + 2.0 * tangent_length,
    }
}

/// 꼬임 로프 아이 스플라이스 입력.
#[derive(Debug, Clone, Copy)]
pub struct TwistedEyeSpliceInput {
    pub rope_diameter: f64,
    /// 원하는 아이 내측 반경
    pub eye_radius: f64,
    pub tuck_count: u32,
}

/// 꼬임 로프 아이 스플라이스 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwistedEyeSpliceResult {
    pub full_length: f64,
    pub eye_length: f64,
    pub tuck_length: f64,
    pub lost_length: f64,
}

/// 락 브러멜 아이 스플라이스 입력.
#[derive(Debug, Clone, Copy)]
pub struct LockedEyeSpliceInput {
    pub rope_diameter: f64,
    pub eye_radius: f64,
}

/// 락 브러멜 아이 스플라이스 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LockedEyeSpliceResult {
    pub full_length: f64,
    pub eye_length: f64,
    pub bury_length: f64,
    pub lost_length: f64,
}

/// 로프 두께를 반영해 아이 반경을 보정한다.
fn corrected_radius(eye_radius: f64, rope_diameter: f64) -> Result<(f64, f64), SpliceError> {
    let rope_diameter = require_positive(Parameter::RopeDiameter, rope_diameter)?;
    let eye_radius = require_positive(Parameter::EyeRadius, eye_radius)?;
    Ok((eye_radius + rope_diameter / 2.0, rope_diameter))
}

/// 꼬임 로프 아이 스플라이스 소요 길이를 계산한다.
pub fn twisted_eye_splice(
    input: TwistedEyeSpliceInput,
) -> Result<TwistedEyeSpliceResult, SpliceError> {
    let (radius, rope_diameter) = corrected_radius(input.eye_radius, input.rope_diameter)?;
    let geometry = eye_geometry(radius);

    let eye_length = geometry.eye_length;
    let tuck_length = rope_diameter * TUCK_DIAMETERS * f64::from(input.tuck_count);
    let full_length = eye_length + tuck_length;
    let lost_length = full_length - radius * 4.0;

    debug!(
        rope_diameter,
        radius,
        tuck_count = input.tuck_count,
        full_length,
        "twisted eye splice"
    );
    Ok(TwistedEyeSpliceResult {
        full_length,
        eye_length,
        tuck_length,
        lost_length,
    })
}

/// 할로우 브레이드 락 브러멜 아이 스플라이스 소요 길이를 계산한다.
pub fn locked_eye_splice(
    input: LockedEyeSpliceInput,
) -> Result<LockedEyeSpliceResult, SpliceError> {
    let (radius, rope_diameter) = corrected_radius(input.eye_radius, input.rope_diameter)?;
    let geometry = eye_geometry(radius);

    // 락 스티치 여유분 포함
    let eye_length = geometry.eye_length + rope_diameter * LOCK_DIAMETERS;
    let bury_length = rope_diameter * BURY_DIAMETERS;
    let full_length = eye_length + bury_length;
    let lost_length = full_length - radius * 4.0;

    debug!(rope_diameter, radius, full_length, "locked brummel eye splice");
    Ok(LockedEyeSpliceResult {
        full_length,
        eye_length,
        bury_length,
        lost_length,
    })
}
