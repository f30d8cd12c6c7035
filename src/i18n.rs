use std::collections::HashMap;
use std::fs;
use std::path::Path;

use sys_locale::get_locale;
use tracing::{debug, warn};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const BACK: &str = "general.back";
    pub const QUIT: &str = "general.quit";
    pub const SOURCE: &str = "general.source";

    pub const PROMPT_ROPE_DIAMETER: &str = "prompt.rope_diameter";
    pub const PROMPT_RADIUS_OR_DIAMETER: &str = "prompt.radius_or_diameter";
    pub const PROMPT_DIAMETER: &str = "prompt.diameter";
    pub const PROMPT_CHAIN_DIAMETER: &str = "prompt.chain_diameter";
    pub const PROMPT_TUCK_COUNT: &str = "prompt.tuck_count";
    pub const DIAMETER_ANSWER: &str = "prompt.diameter_answer";
    pub const NAME_EYE: &str = "prompt.name_eye";
    pub const NAME_SLING: &str = "prompt.name_sling";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_INVALID_WHOLE_NUMBER: &str = "error.invalid_whole_number";
    pub const ERROR_INVALID_INPUT: &str = "error.invalid_input";
    pub const SELECT_FROM_LIST_ERROR: &str = "error.select_from_list";

    pub const RESULTS: &str = "result.heading";
    pub const RESULT_LENGTH: &str = "result.length";
    pub const RESULT_TOTAL: &str = "result.total_length";
    pub const RESULT_FULL: &str = "result.full_length";
    pub const RESULT_EYE: &str = "result.eye_length";
    pub const RESULT_LOOP: &str = "result.loop_length";
    pub const RESULT_TUCK: &str = "result.tuck_length";
    pub const RESULT_BURY: &str = "result.bury_length";
    pub const RESULT_LOST: &str = "result.lost_length";
    pub const RESULT_TAIL: &str = "result.tail_length";
    pub const RESULT_CIRCUMFERENCE: &str = "result.sling_circumference";
    pub const RESULT_SHORT_FID: &str = "result.short_fid";
    pub const RESULT_HALF_FID: &str = "result.half_fid";
    pub const RESULT_LONG_FID: &str = "result.long_fid";
    pub const RESULT_FULL_FID: &str = "result.full_fid";
    pub const NOTE_TAIL_CLAMPED: &str = "result.note_tail_clamped";

    pub const SELECT_ROPE_TYPE_TEXT: &str = "menu.select_rope_type_text";
    pub const SELECT_ROPE_TYPE_DIALOG: &str = "menu.select_rope_type_dialog";
    pub const SELECT_CALCULATION_TEXT: &str = "menu.select_calculation_text";
    pub const SELECT_CALCULATION_DIALOG: &str = "menu.select_calculation_dialog";
    pub const END_MESSAGE: &str = "menu.end_message";
    pub const END_MESSAGE_ANSWERS: &str = "menu.end_message_answers";
    pub const ROPE_TYPE_TITLE: &str = "menu.rope_type";
    pub const CALCULATION_TITLE: &str = "menu.calculation";

    pub const ROPE_TYPE_GENERAL: &str = "rope_type.general";
    pub const ROPE_TYPE_TWISTED: &str = "rope_type.twisted";
    pub const ROPE_TYPE_HOLLOW_BRAID: &str = "rope_type.hollow_braid";

    pub const CALC_BACK_SPLICE: &str = "calculation.back_splice";
    pub const CALC_CHAIN_SPLICE: &str = "calculation.chain_splice";
    pub const CALC_LOCKED_CHAIN_SPLICE: &str = "calculation.locked_chain_splice";
    pub const CALC_EYE_SPLICE: &str = "calculation.eye_splice";
    pub const CALC_LOCKED_EYE_SPLICE: &str = "calculation.locked_eye_splice";
    pub const CALC_GROG_SLING: &str = "calculation.grog_sling";
    pub const CALC_FID_TABLE: &str = "calculation.fid_length_table";
    pub const CALC_FID_LENGTH: &str = "calculation.fid_length_calculate";

    pub const FID_TABLE_NOMINAL: &str = "fid_table.nominal";
    pub const FID_TABLE_SHORT: &str = "fid_table.short";
    pub const FID_TABLE_LONG: &str = "fid_table.long";
    pub const FID_TABLE_FULL: &str = "fid_table.full";

    pub const DISCLAIMER_TITLE: &str = "disclaimer.title";
    pub const DISCLAIMER_BODY: &str = "disclaimer.body";
    pub const DISCLAIMER_ACK_TEXT: &str = "disclaimer.acknowledge_text";
    pub const DISCLAIMER_ACK_ANSWER: &str = "disclaimer.acknowledge_answer";
    pub const DISCLAIMER_ACK_DIALOG: &str = "disclaimer.acknowledge_dialog";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
        }
    }
}

/// 한 언어의 문자열 묶음. 시작 시 한 번 만들고 화면 계층에 명시적으로 넘긴다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: HashMap<String, String>,
}

impl Translator {
    /// 내장 문자열만 사용하는 번역기를 만든다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: HashMap::new(),
        }
    }

    /// 언어팩 디렉터리(`<dir>/<code>.toml`)가 있으면 내장 문자열 위에 덮어쓴다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let lang = Language::from_code(lang_code);
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang))
            .unwrap_or_default();
        debug!(lang = lang.as_code(), overrides = overrides.len(), "translator ready");
        Self { lang, overrides }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회한다. 언어팩 → 내장 언어 → 영어 → 키 자체 순으로 폴백한다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.get(key) {
            return v;
        }
        let built_in = match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key).or_else(|| en(key)),
        };
        built_in.unwrap_or(key)
    }

    /// `{name}` 자리표시자를 채운 문자열을 반환한다.
    pub fn fill(&self, key: &str, vars: &[(&str, &str)]) -> String {
        fill_template(self.t(key), vars)
    }

    /// 쉼표로 구분된 긍정 응답 목록을 소문자로 반환한다.
    pub fn answers(&self, key: &str) -> Vec<String> {
        self.t(key)
            .split(',')
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .collect()
    }
}

fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|lang| normalize_locale_string(&lang))
}

/// 언어팩 한 장: `[section]` 아래 `name = "문구"` 로 적고, 키는 `section.name` 이 된다.
type PackSections = HashMap<String, HashMap<String, String>>;

/// `<dir>/<code>.toml` 언어팩을 읽는다. 파일이 없거나 형식이 틀리면 내장 문자열만 쓴다.
fn load_overrides(dir: &str, lang: Language) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{}.toml", lang.as_code()));
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            debug!(path = %path.display(), %err, "no language pack");
            return None;
        }
    };
    match parse_pack(&content) {
        Ok(map) => Some(map),
        Err(err) => {
            warn!(path = %path.display(), %err, "ignoring malformed language pack");
            None
        }
    }
}

fn parse_pack(src: &str) -> Result<HashMap<String, String>, toml::de::Error> {
    let sections: PackSections = toml::from_str(src)?;
    Ok(sections
        .into_iter()
        .flat_map(|(section, entries)| {
            entries
                .into_iter()
                .map(move |(name, text)| (format!("{section}.{name}"), text))
        })
        .collect())
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Goodbye.",
        BACK => "Back",
        QUIT => "Quit",
        SOURCE => "Source",
        PROMPT_ROPE_DIAMETER => "Enter the diameter of the rope you are using: ",
        PROMPT_RADIUS_OR_DIAMETER => "Enter the desired {name} radius, or d to use diameter: ",
        PROMPT_DIAMETER => "Enter the desired {name} diameter: ",
        PROMPT_CHAIN_DIAMETER => "Enter chain link diameter: ",
        PROMPT_TUCK_COUNT => "Enter the desired number of tucks (5 is typical): ",
        DIAMETER_ANSWER => "d",
        NAME_EYE => "eye",
        NAME_SLING => "sling",
        ERROR_INVALID_NUMBER => "Please enter a number or fraction (e.g. 0.5, 3/4, 1-1/8).",
        ERROR_INVALID_WHOLE_NUMBER => "Please enter a whole number.",
        ERROR_INVALID_INPUT => "Invalid input: {detail}",
        SELECT_FROM_LIST_ERROR => {
            "'{answer}' is not a valid option. Please try again or select the '{oops_option}' option.\n"
        }
        RESULTS => "Results",
        RESULT_LENGTH => "Length",
        RESULT_TOTAL => "Total length",
        RESULT_FULL => "Full length",
        RESULT_EYE => "Eye length",
        RESULT_LOOP => "Loop length",
        RESULT_TUCK => "Tuck length",
        RESULT_BURY => "Bury length",
        RESULT_LOST => "Est. length lost",
        RESULT_TAIL => "Tail length",
        RESULT_CIRCUMFERENCE => "Sling circumference",
        RESULT_SHORT_FID => "Short fid",
        RESULT_HALF_FID => "Half fid",
        RESULT_LONG_FID => "Long fid",
        RESULT_FULL_FID => "Full fid",
        NOTE_TAIL_CLAMPED => "Note: tails shortened so they do not overlap inside the sling.",
        SELECT_ROPE_TYPE_TEXT => "Enter a number from the list to select a type of rope: ",
        SELECT_ROPE_TYPE_DIALOG => "What type of rope are you working with?",
        SELECT_CALCULATION_TEXT => "Enter a number from the list to select a calculation: ",
        SELECT_CALCULATION_DIALOG => "What calculation do you want to do?",
        END_MESSAGE => "Run again? [y/N]: ",
        END_MESSAGE_ANSWERS => "y,yes",
        ROPE_TYPE_TITLE => "Rope type",
        CALCULATION_TITLE => "Calculation",
        ROPE_TYPE_GENERAL => "General",
        ROPE_TYPE_TWISTED => "Twisted",
        ROPE_TYPE_HOLLOW_BRAID => "Hollow braid",
        CALC_BACK_SPLICE => "Back splice",
        CALC_CHAIN_SPLICE => "Chain splice",
        CALC_LOCKED_CHAIN_SPLICE => "Locked Brummel chain splice",
        CALC_EYE_SPLICE => "Eye splice",
        CALC_LOCKED_EYE_SPLICE => "Locked Brummel eye splice",
        CALC_GROG_SLING => "Grog sling",
        CALC_FID_TABLE => "Fid Length Table",
        CALC_FID_LENGTH => "Fid Length Calculator",
        FID_TABLE_NOMINAL => "Rope dia. (in)",
        FID_TABLE_SHORT => "Short fid (in)",
        FID_TABLE_LONG => "Long fid (in)",
        FID_TABLE_FULL => "Full fid (in)",
        DISCLAIMER_TITLE => "!!! DISCLAIMER - READ FULLY BEFORE CONTINUING !!!",
        DISCLAIMER_BODY => {
            "The numbers given by this tool are intended as a guide only. If you plan on using any of \
             the splices described here for lifting or life support applications, it is your \
             responsibility to make sure you are tying everything correctly and following all relevant \
             laws where you live. There are a lot of variables with splices, and making a mistake with \
             the wrong ones can seriously impact the strength of the final splice. If you doubt your \
             skills at all, you should not be trusting your, or other people's, lives to your splices."
        }
        DISCLAIMER_ACK_TEXT => "Type 'yes' if you have read and agree to the disclaimer: ",
        DISCLAIMER_ACK_ANSWER => "yes",
        DISCLAIMER_ACK_DIALOG => {
            "By selecting 'yes', you are saying that you have read and agree to the disclaimer."
        }
        _ => return None,
    })
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        BACK => "뒤로",
        QUIT => "종료",
        SOURCE => "출처",
        PROMPT_ROPE_DIAMETER => "사용할 로프 직경 입력: ",
        PROMPT_RADIUS_OR_DIAMETER => "원하는 {name} 반경 입력 (직경으로 입력하려면 d): ",
        PROMPT_DIAMETER => "원하는 {name} 직경 입력: ",
        PROMPT_CHAIN_DIAMETER => "체인 링크 직경 입력: ",
        PROMPT_TUCK_COUNT => "턱 횟수 입력 (보통 5): ",
        DIAMETER_ANSWER => "d",
        NAME_EYE => "아이",
        NAME_SLING => "슬링",
        ERROR_INVALID_NUMBER => "숫자 또는 분수를 입력하세요 (예: 0.5, 3/4, 1-1/8).",
        ERROR_INVALID_WHOLE_NUMBER => "정수를 입력하세요.",
        ERROR_INVALID_INPUT => "입력 오류: {detail}",
        SELECT_FROM_LIST_ERROR => {
            "'{answer}' 은(는) 올바른 선택이 아닙니다. 다시 입력하거나 '{oops_option}' 을(를) 선택하세요.\n"
        }
        RESULTS => "결과",
        RESULT_LENGTH => "길이",
        RESULT_TOTAL => "전체 길이",
        RESULT_FULL => "전체 길이",
        RESULT_EYE => "아이 길이",
        RESULT_LOOP => "루프 길이",
        RESULT_TUCK => "턱 길이",
        RESULT_BURY => "버리 길이",
        RESULT_LOST => "예상 손실 길이",
        RESULT_TAIL => "꼬리 길이",
        RESULT_CIRCUMFERENCE => "슬링 둘레",
        RESULT_SHORT_FID => "숏 피드",
        RESULT_HALF_FID => "하프 피드",
        RESULT_LONG_FID => "롱 피드",
        RESULT_FULL_FID => "풀 피드",
        NOTE_TAIL_CLAMPED => "참고: 슬링 안에서 꼬리가 겹치지 않도록 꼬리 길이를 줄였습니다.",
        SELECT_ROPE_TYPE_TEXT => "목록에서 로프 종류 번호를 입력: ",
        SELECT_ROPE_TYPE_DIALOG => "어떤 로프를 사용하나요?",
        SELECT_CALCULATION_TEXT => "목록에서 계산 번호를 입력: ",
        SELECT_CALCULATION_DIALOG => "어떤 계산을 하시겠습니까?",
        END_MESSAGE => "다시 계산할까요? [y/N]: ",
        END_MESSAGE_ANSWERS => "y,yes,예,ㅇ",
        ROPE_TYPE_TITLE => "로프 종류",
        CALCULATION_TITLE => "계산",
        ROPE_TYPE_GENERAL => "일반",
        ROPE_TYPE_TWISTED => "꼬임 로프",
        ROPE_TYPE_HOLLOW_BRAID => "할로우 브레이드",
        CALC_BACK_SPLICE => "백 스플라이스",
        CALC_CHAIN_SPLICE => "체인 스플라이스",
        CALC_LOCKED_CHAIN_SPLICE => "락 브러멜 체인 스플라이스",
        CALC_EYE_SPLICE => "아이 스플라이스",
        CALC_LOCKED_EYE_SPLICE => "락 브러멜 아이 스플라이스",
        CALC_GROG_SLING => "그로그 슬링",
        CALC_FID_TABLE => "피드 길이 표",
        CALC_FID_LENGTH => "피드 길이 계산",
        FID_TABLE_NOMINAL => "로프 직경 (in)",
        FID_TABLE_SHORT => "숏 피드 (in)",
        FID_TABLE_LONG => "롱 피드 (in)",
        FID_TABLE_FULL => "풀 피드 (in)",
        DISCLAIMER_TITLE => "!!! 주의 - 계속하기 전에 끝까지 읽으세요 !!!",
        DISCLAIMER_BODY => {
            "이 도구가 제공하는 수치는 참고용입니다. 여기 소개된 스플라이스를 인양이나 생명 보호 용도로 \
             사용하려면 올바르게 작업했는지, 거주 지역의 관련 법규를 지켰는지 확인할 책임은 사용자에게 \
             있습니다. 스플라이스에는 변수가 많으며 잘못 다루면 최종 강도가 크게 떨어질 수 있습니다. \
             자신의 실력이 조금이라도 의심된다면 자신이나 타인의 생명을 그 스플라이스에 맡기지 마세요."
        }
        DISCLAIMER_ACK_TEXT => "주의 사항을 읽고 동의하면 'yes' 를 입력하세요: ",
        DISCLAIMER_ACK_ANSWER => "yes",
        DISCLAIMER_ACK_DIALOG => "'예' 를 선택하면 주의 사항을 읽고 동의한 것으로 간주합니다.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_falls_back_to_english_then_key() {
        let tr = Translator::new("ko-KR");
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t(keys::RESULTS), "결과");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn unknown_language_uses_english() {
        let tr = Translator::new("fr");
        assert_eq!(tr.language_code(), "en");
        assert_eq!(tr.t(keys::CALC_GROG_SLING), "Grog sling");
    }

    #[test]
    fn fill_replaces_placeholders() {
        let tr = Translator::new("en");
        assert_eq!(
            tr.fill(keys::PROMPT_DIAMETER, &[("name", "eye")]),
            "Enter the desired eye diameter: "
        );
    }

    #[test]
    fn answers_are_split_and_lowercased() {
        let tr = Translator::new("en");
        assert_eq!(tr.answers(keys::END_MESSAGE_ANSWERS), vec!["y", "yes"]);
    }

    #[test]
    fn pack_sections_become_dotted_keys() {
        let src = r#"
            [result]
            heading = "Outcome"

            [general]
            quit = "Leave"
        "#;
        let map = parse_pack(src).unwrap();
        assert_eq!(map.get(keys::RESULTS).map(String::as_str), Some("Outcome"));
        assert_eq!(map.get(keys::QUIT).map(String::as_str), Some("Leave"));
        assert!(parse_pack("").unwrap().is_empty());
    }

    #[test]
    fn pack_entries_must_sit_in_a_section() {
        assert!(parse_pack("heading = \"Outcome\"").is_err());
        assert!(parse_pack("[result]\nheading = 3").is_err());
    }

    #[test]
    fn pack_overrides_built_in_strings() {
        let dir = std::env::temp_dir().join(format!("rope_tools_pack_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("ko.toml"), "[general]\nquit = \"그만\"\n").unwrap();
        let tr = Translator::new_with_pack("ko", dir.to_str());
        assert_eq!(tr.t(keys::QUIT), "그만");
        assert_eq!(tr.t(keys::RESULTS), "결과");
        let missing = Translator::new_with_pack("en", dir.to_str());
        assert_eq!(missing.t(keys::QUIT), "Quit");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn language_resolution_prefers_cli_then_config() {
        assert_eq!(resolve_language("ko", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-GB")), "en");
        assert_eq!(normalize_lang("auto"), None);
        assert_eq!(normalize_locale_string("ko_KR.UTF-8").as_deref(), Some("ko"));
    }
}
