/// 표준 로프 직경별 튜블러 피드 길이 참고표 (단위: in).
/// 값은 공개된 리깅 표를 옮긴 것이며 수정하지 않는다.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FidTableRow {
    /// 호칭 로프 직경
    pub nominal: &'static str,
    pub short_fid: &'static str,
    pub long_fid: &'static str,
    pub full_fid: &'static str,
}

impl FidTableRow {
    const fn new(
        nominal: &'static str,
        short_fid: &'static str,
        long_fid: &'static str,
        full_fid: &'static str,
    ) -> Self {
        Self {
            nominal,
            short_fid,
            long_fid,
            full_fid,
        }
    }

    /// 표 출력용 4열 레코드.
    pub fn columns(&self) -> [&'static str; 4] {
        [self.nominal, self.short_fid, self.long_fid, self.full_fid]
    }
}

pub fn fid_table() -> &'static [FidTableRow] {
    FID_TABLE
}

/// 호칭 직경 문자열로 행을 찾는다.
pub fn find_fid_row(nominal: &str) -> Option<&'static FidTableRow> {
    let nominal = nominal.trim().trim_end_matches('"');
    FID_TABLE.iter().find(|row| row.nominal == nominal)
}

static FID_TABLE: &[FidTableRow] = &[
    FidTableRow::new("3/32", "3/4", "1-5/16", "1-31/32"),
    FidTableRow::new("1/8", "1", "1-3/4", "2-5/8"),
    FidTableRow::new("5/32", "1-1/4", "2-3/16", "3-9/32"),
    FidTableRow::new("3/16", "1-1/2", "2-5/8", "3-15/16"),
    FidTableRow::new("7/32", "1-3/4", "3-1/16", "4-19/32"),
    FidTableRow::new("1/4", "2", "3-1/2", "5-1/4"),
    FidTableRow::new("5/16", "2-7/16", "4-3/8", "6-9/16"),
    FidTableRow::new("3/8", "2-15/16", "5-1/4", "7-7/8"),
    FidTableRow::new("7/16", "3-7/16", "6-1/8", "9-3/16"),
    FidTableRow::new("1/2", "3-15/16", "7", "10-1/2"),
    FidTableRow::new("9/16", "3-9/16", "7-7/8", "11-13/16"),
    FidTableRow::new("5/8", "3-15/16", "8-3/4", "13-1/8"),
    FidTableRow::new("3/4", "4-3/4", "10-1/2", "15-3/4"),
    FidTableRow::new("7/8", "4-5/8", "12-1/4", "18-3/8"),
    FidTableRow::new("1", "5-1/4", "14", "21"),
    FidTableRow::new("1-1/8", "5-7/8", "15-3/4", "23-5/8"),
    FidTableRow::new("1-1/4", "6-9/16", "17-1/2", "26-1/4"),
    FidTableRow::new("1-1/2", "7-7/8", "21", "31-1/2"),
    FidTableRow::new("1-5/8", "8-1/2", "22-3/4", "34-1/8"),
    FidTableRow::new("1-3/4", "9-3/16", "24-1/2", "36-3/4"),
    FidTableRow::new("2", "10-1/2", "28", "42"),
];
