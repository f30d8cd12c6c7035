//! dialoguer 기반 전체 화면 대화상자 모드.

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::app::{AppError, Prompter};
use crate::i18n::{keys, Translator};

/// 선택 목록과 입력 상자로 진행하는 화면.
pub struct DialogUi<'a> {
    tr: &'a Translator,
    theme: ColorfulTheme,
    term: Term,
}

impl<'a> DialogUi<'a> {
    pub fn new(tr: &'a Translator) -> Self {
        Self {
            tr,
            theme: ColorfulTheme::default(),
            term: Term::stdout(),
        }
    }

    fn heading(&self, title: &str) -> Result<(), AppError> {
        self.term.write_line("")?;
        self.term
            .write_line(&format!("{} {}", style("◆").cyan(), style(title).bold()))?;
        self.term
            .write_line(&style("─".repeat(50)).dim().to_string())?;
        Ok(())
    }
}

/// 입력 상자 제목: `계산 이름 · 질문` (끝의 콜론 제거).
fn input_prompt(title: &str, prompt: &str) -> String {
    format!("{title} · {}", prompt.trim_end().trim_end_matches(':'))
}

/// 빈 입력은 취소.
fn answer_or_cancel(answer: &str) -> Option<String> {
    let answer = answer.trim();
    (!answer.is_empty()).then(|| answer.to_string())
}

/// Esc(None)와 목록 끝에 붙인 뒤로/종료 항목은 모두 취소로 본다.
fn chosen_option(choice: Option<usize>, option_count: usize) -> Option<usize> {
    choice.filter(|&i| i < option_count)
}

impl Prompter for DialogUi<'_> {
    const DIALOG: bool = true;

    /// 빈 입력은 취소로 본다. 기본값이 있으면 기본값을 채워 보여준다.
    fn ask(
        &mut self,
        title: &str,
        prompt: &str,
        default: Option<&str>,
    ) -> Result<Option<String>, AppError> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(input_prompt(title, prompt))
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        let answer = input.interact_text_on(&self.term)?;
        Ok(answer_or_cancel(&answer))
    }

    fn select(
        &mut self,
        title: &str,
        prompt: &str,
        options: &[String],
        oops_option: &str,
    ) -> Result<Option<usize>, AppError> {
        self.heading(title)?;
        let mut items: Vec<&str> = options.iter().map(String::as_str).collect();
        items.push(oops_option);
        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt.trim_end())
            .items(&items)
            .default(0)
            .interact_on_opt(&self.term)?;
        Ok(chosen_option(choice, options.len()))
    }

    fn show(&mut self, title: &str, body: &str) -> Result<(), AppError> {
        self.heading(title)?;
        for line in body.lines() {
            self.term.write_line(line)?;
        }
        self.term.write_line("")?;
        Ok(())
    }

    fn say(&mut self, message: &str) -> Result<(), AppError> {
        self.term
            .write_line(&format!("{} {}", style("✗").red(), style(message.trim_end()).red()))?;
        Ok(())
    }

    fn acknowledge_disclaimer(&mut self) -> Result<bool, AppError> {
        let tr = self.tr;
        self.term
            .write_line(&style(tr.t(keys::DISCLAIMER_TITLE)).red().bold().to_string())?;
        self.term.write_line("")?;
        self.term.write_line(tr.t(keys::DISCLAIMER_BODY))?;
        self.term.write_line("")?;
        let agreed = Confirm::with_theme(&self.theme)
            .with_prompt(tr.t(keys::DISCLAIMER_ACK_DIALOG))
            .default(false)
            .interact_on_opt(&self.term)?;
        Ok(agreed.unwrap_or(false))
    }

    /// 대화상자 모드는 종료를 고를 때까지 계속 진행한다.
    fn run_again(&mut self) -> Result<bool, AppError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_answer_cancels() {
        assert_eq!(answer_or_cancel(""), None);
        assert_eq!(answer_or_cancel("   "), None);
        assert_eq!(answer_or_cancel(" 1-1/8 ").as_deref(), Some("1-1/8"));
    }

    #[test]
    fn trailing_oops_item_and_escape_cancel() {
        // 선택지 3개 + 종료 항목(인덱스 3)
        assert_eq!(chosen_option(Some(0), 3), Some(0));
        assert_eq!(chosen_option(Some(2), 3), Some(2));
        assert_eq!(chosen_option(Some(3), 3), None);
        assert_eq!(chosen_option(None, 3), None);
    }

    #[test]
    fn input_prompt_drops_trailing_colon() {
        assert_eq!(
            input_prompt("Back splice", "Enter the diameter of the rope you are using: "),
            "Back splice · Enter the diameter of the rope you are using"
        );
    }

    #[test]
    fn dialog_mode_keeps_running_until_quit() {
        let tr = Translator::new("en");
        let mut ui = DialogUi::new(&tr);
        assert!(ui.run_again().unwrap());
    }
}
