use thiserror::Error;
use tracing::{debug, info, warn};

use crate::calculation::{self, SpliceKind, SpliceRequest};
use crate::config::{Config, ConfigError};
use crate::i18n::{keys, Translator};
use crate::mixed_number::parse_length;
use crate::report;
use crate::rope::RopeType;
use crate::splice::{
    count_from_f64, GrogSlingInput, HollowBraidChainSpliceInput, LockedEyeSpliceInput, Parameter,
    TwistedChainSpliceInput, TwistedEyeSpliceInput,
};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 콘솔 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 로드 오류
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 대화상자 입출력 오류
    #[error("dialog error: {0}")]
    Dialog(#[from] dialoguer::Error),
}

/// 텍스트 프롬프트와 대화상자 화면이 공통으로 제공하는 입력/출력 동작.
///
/// `None` 은 사용자가 취소(뒤로/종료, 입력 끝)했음을 뜻한다.
pub trait Prompter {
    /// 대화상자 모드 여부. 모드별로 다른 안내 문구를 고를 때 쓴다.
    const DIALOG: bool;

    fn ask(
        &mut self,
        title: &str,
        prompt: &str,
        default: Option<&str>,
    ) -> Result<Option<String>, AppError>;

    /// 목록에서 하나를 고른다. 마지막에 `oops_option` 항목이 붙으며 이를 고르면 None.
    fn select(
        &mut self,
        title: &str,
        prompt: &str,
        options: &[String],
        oops_option: &str,
    ) -> Result<Option<usize>, AppError>;

    fn show(&mut self, title: &str, body: &str) -> Result<(), AppError>;

    /// 오류/안내 한 줄.
    fn say(&mut self, message: &str) -> Result<(), AppError>;

    fn acknowledge_disclaimer(&mut self) -> Result<bool, AppError>;

    fn run_again(&mut self) -> Result<bool, AppError>;
}

/// 메인 루프를 실행한다: 주의 사항 → 로프 종류 → 계산 종류 → 입력 → 결과.
pub fn run<P: Prompter>(ui: &mut P, tr: &Translator, config: &Config) -> Result<(), AppError> {
    if !ui.acknowledge_disclaimer()? {
        info!("disclaimer declined");
        return Ok(());
    }

    let (rope_prompt, calc_prompt) = if P::DIALOG {
        (keys::SELECT_ROPE_TYPE_DIALOG, keys::SELECT_CALCULATION_DIALOG)
    } else {
        (keys::SELECT_ROPE_TYPE_TEXT, keys::SELECT_CALCULATION_TEXT)
    };
    let rope_names: Vec<String> = RopeType::ALL
        .iter()
        .map(|rt| tr.t(rt.label_key()).to_string())
        .collect();

    loop {
        let Some(rope_index) = ui.select(
            tr.t(keys::ROPE_TYPE_TITLE),
            tr.t(rope_prompt),
            &rope_names,
            tr.t(keys::QUIT),
        )?
        else {
            break;
        };
        let rope_type = RopeType::ALL[rope_index];
        let kinds = SpliceKind::for_rope_type(rope_type);
        let kind_names: Vec<String> = kinds
            .iter()
            .map(|kind| tr.t(kind.title_key()).to_string())
            .collect();

        let Some(kind_index) = ui.select(
            tr.t(keys::CALCULATION_TITLE),
            tr.t(calc_prompt),
            &kind_names,
            tr.t(keys::BACK),
        )?
        else {
            continue;
        };

        run_calculation(ui, tr, config, kinds[kind_index])?;

        if !ui.run_again()? {
            break;
        }
    }
    ui.say(tr.t(keys::APP_EXIT))?;
    Ok(())
}

/// 계산 한 건을 입력부터 결과 표시까지 처리한다.
pub fn run_calculation<P: Prompter>(
    ui: &mut P,
    tr: &Translator,
    config: &Config,
    kind: SpliceKind,
) -> Result<(), AppError> {
    let title = tr.t(kind.title_key());
    debug!(?kind, "calculation selected");

    if kind == SpliceKind::FidTable {
        return ui.show(title, &report::fid_table_text(tr));
    }

    let Some(request) = collect_request(ui, tr, config, kind)? else {
        debug!(?kind, "calculation cancelled");
        return Ok(());
    };

    match calculation::calculate(&request) {
        Ok(result) => ui.show(
            tr.t(keys::RESULTS),
            &report::results_body(tr, kind, &result),
        ),
        Err(err) => {
            warn!(%err, "calculation rejected");
            ui.say(&tr.fill(keys::ERROR_INVALID_INPUT, &[("detail", &err.to_string())]))
        }
    }
}

/// 계산 종류에 필요한 값을 입력받아 요청을 만든다.
fn collect_request<P: Prompter>(
    ui: &mut P,
    tr: &Translator,
    config: &Config,
    kind: SpliceKind,
) -> Result<Option<SpliceRequest>, AppError> {
    let title = tr.t(kind.title_key());
    let eye = tr.t(keys::NAME_EYE);
    let sling = tr.t(keys::NAME_SLING);
    let tucks = config.default_tuck_count;

    let request = match kind {
        SpliceKind::FidTable => return Ok(None),
        SpliceKind::FidLength => {
            let Some(rope_diameter) = read_length(ui, tr, title, keys::PROMPT_ROPE_DIAMETER)? else {
                return Ok(None);
            };
            SpliceRequest::FidLength { rope_diameter }
        }
        SpliceKind::TwistedBackSplice => {
            let Some(rope_diameter) = read_length(ui, tr, title, keys::PROMPT_ROPE_DIAMETER)? else {
                return Ok(None);
            };
            SpliceRequest::TwistedBackSplice { rope_diameter }
        }
        SpliceKind::TwistedEyeSplice => {
            let Some(eye_radius) = read_radius_or_diameter(ui, tr, title, eye)? else {
                return Ok(None);
            };
            let Some(rope_diameter) = read_length(ui, tr, title, keys::PROMPT_ROPE_DIAMETER)? else {
                return Ok(None);
            };
            let Some(tuck_count) = read_count(ui, tr, title, keys::PROMPT_TUCK_COUNT, tucks)? else {
                return Ok(None);
            };
            SpliceRequest::TwistedEyeSplice(TwistedEyeSpliceInput {
                rope_diameter,
                eye_radius,
                tuck_count,
            })
        }
        SpliceKind::TwistedChainSplice => {
            let Some(rope_diameter) = read_length(ui, tr, title, keys::PROMPT_ROPE_DIAMETER)? else {
                return Ok(None);
            };
            let Some(chain_diameter) = read_length(ui, tr, title, keys::PROMPT_CHAIN_DIAMETER)?
            else {
                return Ok(None);
            };
            let Some(tuck_count) = read_count(ui, tr, title, keys::PROMPT_TUCK_COUNT, tucks)? else {
                return Ok(None);
            };
            SpliceRequest::TwistedChainSplice(TwistedChainSpliceInput {
                rope_diameter,
                chain_diameter,
                tuck_count,
            })
        }
        SpliceKind::LockedBrummelEyeSplice => {
            let Some(eye_radius) = read_radius_or_diameter(ui, tr, title, eye)? else {
                return Ok(None);
            };
            let Some(rope_diameter) = read_length(ui, tr, title, keys::PROMPT_ROPE_DIAMETER)? else {
                return Ok(None);
            };
            SpliceRequest::LockedBrummelEyeSplice(LockedEyeSpliceInput {
                rope_diameter,
                eye_radius,
            })
        }
        SpliceKind::HollowBraidChainSplice => {
            let Some(rope_diameter) = read_length(ui, tr, title, keys::PROMPT_ROPE_DIAMETER)? else {
                return Ok(None);
            };
            let Some(chain_diameter) = read_length(ui, tr, title, keys::PROMPT_CHAIN_DIAMETER)?
            else {
                return Ok(None);
            };
            SpliceRequest::HollowBraidChainSplice(HollowBraidChainSpliceInput {
                rope_diameter,
                chain_diameter,
            })
        }
        SpliceKind::GrogSling => {
            let Some(rope_diameter) = read_length(ui, tr, title, keys::PROMPT_ROPE_DIAMETER)? else {
                return Ok(None);
            };
            let Some(sling_radius) = read_radius_or_diameter(ui, tr, title, sling)? else {
                return Ok(None);
            };
            SpliceRequest::GrogSling(GrogSlingInput {
                rope_diameter,
                sling_radius,
            })
        }
    };
    Ok(Some(request))
}

/// 길이를 입력받는다. 해석할 수 없으면 다시 묻는다.
fn read_length<P: Prompter>(
    ui: &mut P,
    tr: &Translator,
    title: &str,
    prompt_key: &str,
) -> Result<Option<f64>, AppError> {
    read_length_text(ui, tr, title, tr.t(prompt_key))
}

fn read_length_text<P: Prompter>(
    ui: &mut P,
    tr: &Translator,
    title: &str,
    prompt: &str,
) -> Result<Option<f64>, AppError> {
    loop {
        let Some(answer) = ui.ask(title, prompt, None)? else {
            return Ok(None);
        };
        match parse_length(&answer) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => {
                debug!(%err, "unparsable length");
                ui.say(tr.t(keys::ERROR_INVALID_NUMBER))?;
            }
        }
    }
}

/// 반경을 입력받되 `d` 를 입력하면 직경을 받아 절반으로 환산한다.
fn read_radius_or_diameter<P: Prompter>(
    ui: &mut P,
    tr: &Translator,
    title: &str,
    name: &str,
) -> Result<Option<f64>, AppError> {
    let prompt = tr.fill(keys::PROMPT_RADIUS_OR_DIAMETER, &[("name", name)]);
    let diameter_answer = tr.t(keys::DIAMETER_ANSWER);
    loop {
        let Some(answer) = ui.ask(title, &prompt, None)? else {
            return Ok(None);
        };
        if answer.trim().eq_ignore_ascii_case(diameter_answer) {
            let prompt = tr.fill(keys::PROMPT_DIAMETER, &[("name", name)]);
            return Ok(read_length_text(ui, tr, title, &prompt)?.map(|d| d / 2.0));
        }
        match parse_length(&answer) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => {
                debug!(%err, "unparsable radius");
                ui.say(tr.t(keys::ERROR_INVALID_NUMBER))?;
            }
        }
    }
}

/// 턱 횟수를 입력받는다. 빈 입력은 기본값을 사용한다.
fn read_count<P: Prompter>(
    ui: &mut P,
    tr: &Translator,
    title: &str,
    prompt_key: &str,
    default: u32,
) -> Result<Option<u32>, AppError> {
    let default = default.to_string();
    loop {
        let Some(answer) = ui.ask(title, tr.t(prompt_key), Some(&default))? else {
            return Ok(None);
        };
        let parsed = answer
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(|value| count_from_f64(Parameter::TuckCount, value).ok());
        match parsed {
            Some(count) => return Ok(Some(count)),
            None => ui.say(tr.t(keys::ERROR_INVALID_WHOLE_NUMBER))?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// 미리 정한 답을 순서대로 돌려주는 화면.
    #[derive(Default)]
    struct Scripted {
        answers: VecDeque<&'static str>,
        selections: VecDeque<Option<usize>>,
        shown: Vec<(String, String)>,
        said: Vec<String>,
    }

    impl Prompter for Scripted {
        const DIALOG: bool = false;

        fn ask(
            &mut self,
            _title: &str,
            _prompt: &str,
            default: Option<&str>,
        ) -> Result<Option<String>, AppError> {
            Ok(self.answers.pop_front().map(|a| {
                if a.is_empty() {
                    default.unwrap_or_default().to_string()
                } else {
                    a.to_string()
                }
            }))
        }

        fn select(
            &mut self,
            _title: &str,
            _prompt: &str,
            _options: &[String],
            _oops_option: &str,
        ) -> Result<Option<usize>, AppError> {
            Ok(self.selections.pop_front().flatten())
        }

        fn show(&mut self, title: &str, body: &str) -> Result<(), AppError> {
            self.shown.push((title.to_string(), body.to_string()));
            Ok(())
        }

        fn say(&mut self, message: &str) -> Result<(), AppError> {
            self.said.push(message.to_string());
            Ok(())
        }

        fn acknowledge_disclaimer(&mut self) -> Result<bool, AppError> {
            Ok(true)
        }

        fn run_again(&mut self) -> Result<bool, AppError> {
            Ok(false)
        }
    }

    fn scripted(answers: &[&'static str]) -> Scripted {
        Scripted {
            answers: answers.iter().copied().collect(),
            ..Scripted::default()
        }
    }

    #[test]
    fn eye_splice_accepts_diameter_and_default_tucks() {
        let tr = Translator::new("en");
        let cfg = Config::default();
        // 아이 직경 4 → 반경 2, 로프 1/2, 턱 기본값 5
        let mut ui = scripted(&["d", "4", "1/2", ""]);
        run_calculation(&mut ui, &tr, &cfg, SpliceKind::TwistedEyeSplice).unwrap();
        let (title, body) = &ui.shown[0];
        assert_eq!(title, "Results");
        assert!(body.starts_with("Full length: 15+9/16\n"), "{body}");
        assert!(body.contains("Tuck length: 7+1/2"));
        assert!(body.ends_with("Source: ABOK #2725"));
    }

    #[test]
    fn unparsable_numbers_are_asked_again() {
        let tr = Translator::new("en");
        let cfg = Config::default();
        let mut ui = scripted(&["half", "0.5"]);
        run_calculation(&mut ui, &tr, &cfg, SpliceKind::TwistedBackSplice).unwrap();
        assert_eq!(ui.said.len(), 1);
        assert_eq!(ui.shown[0].1, "Length: 7+1/2");
    }

    #[test]
    fn invalid_input_is_reported_not_shown() {
        let tr = Translator::new("en");
        let cfg = Config::default();
        let mut ui = scripted(&["0"]);
        run_calculation(&mut ui, &tr, &cfg, SpliceKind::TwistedBackSplice).unwrap();
        assert!(ui.shown.is_empty());
        assert!(ui.said[0].starts_with("Invalid input: "));
    }

    #[test]
    fn negative_fraction_is_rejected_by_the_engine() {
        let tr = Translator::new("en");
        let cfg = Config::default();
        let mut ui = scripted(&["-1/2"]);
        run_calculation(&mut ui, &tr, &cfg, SpliceKind::TwistedBackSplice).unwrap();
        assert!(ui.shown.is_empty());
        assert_eq!(ui.said.len(), 1);
        assert!(ui.said[0].starts_with("Invalid input: "), "{}", ui.said[0]);
    }

    #[test]
    fn fractional_tuck_count_is_asked_again() {
        let tr = Translator::new("en");
        let cfg = Config::default();
        let mut ui = scripted(&["1/2", "1", "2.5", "3"]);
        run_calculation(&mut ui, &tr, &cfg, SpliceKind::TwistedChainSplice).unwrap();
        assert_eq!(ui.said, vec!["Please enter a whole number."]);
        assert!(ui.shown[0].1.contains("Tuck length: 4+1/2"));
    }

    #[test]
    fn cancelled_input_abandons_calculation() {
        let tr = Translator::new("en");
        let cfg = Config::default();
        let mut ui = scripted(&["1/2"]);
        run_calculation(&mut ui, &tr, &cfg, SpliceKind::GrogSling).unwrap();
        assert!(ui.shown.is_empty());
        assert!(ui.said.is_empty());
    }

    #[test]
    fn menu_loop_runs_selected_calculation_then_quits() {
        let tr = Translator::new("en");
        let cfg = Config::default();
        let mut ui = scripted(&["1"]);
        // 일반 → 피드 길이 계산
        ui.selections = VecDeque::from([Some(0), Some(1)]);
        run(&mut ui, &tr, &cfg).unwrap();
        assert_eq!(ui.shown.len(), 1);
        assert!(ui.shown[0].1.contains("Short fid: 5+1/4"));
        assert_eq!(ui.said.last().map(String::as_str), Some("Goodbye."));
    }

    #[test]
    fn back_from_calculation_menu_returns_to_rope_menu() {
        let tr = Translator::new("en");
        let cfg = Config::default();
        let mut ui = scripted(&[]);
        ui.selections = VecDeque::from([Some(1), None, None]);
        run(&mut ui, &tr, &cfg).unwrap();
        assert!(ui.shown.is_empty());
        assert!(ui.selections.is_empty());
    }
}
