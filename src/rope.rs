/// 로프 구조 종류. 어떤 계산식 묶음이 적용되는지만 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RopeType {
    General,
    Twisted,
    HollowBraid,
}

impl RopeType {
    /// 메뉴 표시 순서대로 나열한 전체 로프 종류.
    pub const ALL: [RopeType; 3] = [RopeType::General, RopeType::Twisted, RopeType::HollowBraid];

    /// 번역 키를 반환한다.
    pub fn label_key(self) -> &'static str {
        use crate::i18n::keys::*;
        match self {
            RopeType::General => ROPE_TYPE_GENERAL,
            RopeType::Twisted => ROPE_TYPE_TWISTED,
            RopeType::HollowBraid => ROPE_TYPE_HOLLOW_BRAID,
        }
    }
}
