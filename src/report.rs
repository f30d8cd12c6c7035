//! 계산 결과와 피드 참고표를 화면 표시용 문자열로 만든다.

use tabled::{builder::Builder, settings::Style};

use crate::calculation::{SpliceKind, SpliceResult};
use crate::i18n::{keys, Translator};
use crate::mixed_number::as_mixed_number;
use crate::splice::fid_table::fid_table;

/// `라벨: 대분수` 형태의 결과 줄 목록.
pub fn result_lines(tr: &Translator, result: &SpliceResult) -> Vec<String> {
    result
        .lines()
        .iter()
        .map(|line| format!("{}: {}", tr.t(line.label_key), as_mixed_number(line.length)))
        .collect()
}

/// 참고 문구(번역됨) 목록.
pub fn result_notes(tr: &Translator, result: &SpliceResult) -> Vec<String> {
    result
        .notes()
        .into_iter()
        .map(|key| tr.t(key).to_string())
        .collect()
}

/// `출처: ABOK #xxxx` 줄. 출처가 없는 계산은 None.
pub fn reference_line(tr: &Translator, kind: SpliceKind) -> Option<String> {
    kind.reference()
        .map(|reference| format!("{}: {reference}", tr.t(keys::SOURCE)))
}

/// 결과 화면 본문: 길이 줄, 참고 문구, 출처 순.
pub fn results_body(tr: &Translator, kind: SpliceKind, result: &SpliceResult) -> String {
    let mut body = result_lines(tr, result);
    body.extend(result_notes(tr, result));
    body.extend(reference_line(tr, kind));
    body.join("\n")
}

/// 피드 길이 참고표를 표 형태로 렌더링한다.
pub fn fid_table_text(tr: &Translator) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        tr.t(keys::FID_TABLE_NOMINAL),
        tr.t(keys::FID_TABLE_SHORT),
        tr.t(keys::FID_TABLE_LONG),
        tr.t(keys::FID_TABLE_FULL),
    ]);
    for row in fid_table() {
        builder.push_record(row.columns());
    }
    builder.build().with(Style::rounded()).to_string()
}
