use std::io::{self, BufRead, Write};

use crate::app::{AppError, Prompter};
use crate::i18n::{keys, Translator};

/// 한 줄씩 묻고 답하는 텍스트 모드 화면.
pub struct TextUi<'a, R, W> {
    tr: &'a Translator,
    input: R,
    output: W,
}

impl<'a> TextUi<'a, io::StdinLock<'static>, io::Stdout> {
    /// 표준 입출력을 사용하는 화면을 만든다.
    pub fn stdio(tr: &'a Translator) -> Self {
        Self::new(tr, io::stdin().lock(), io::stdout())
    }
}

impl<'a, R: BufRead, W: Write> TextUi<'a, R, W> {
    pub fn new(tr: &'a Translator, input: R, output: W) -> Self {
        Self { tr, input, output }
    }

    /// 출력 대상을 돌려받는다.
    pub fn into_output(self) -> W {
        self.output
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 None.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for TextUi<'_, R, W> {
    const DIALOG: bool = false;

    fn ask(
        &mut self,
        _title: &str,
        prompt: &str,
        default: Option<&str>,
    ) -> Result<Option<String>, AppError> {
        Ok(self.read_line(prompt)?.map(|answer| match default {
            Some(default) if answer.is_empty() => default.to_string(),
            _ => answer,
        }))
    }

    fn select(
        &mut self,
        _title: &str,
        prompt: &str,
        options: &[String],
        oops_option: &str,
    ) -> Result<Option<usize>, AppError> {
        let mut message = prompt.trim_end().to_string();
        let names = options.iter().map(String::as_str).chain([oops_option]);
        for (i, option) in names.enumerate() {
            message.push_str(&format!("\n  {i}) {option}"));
        }
        message.push_str("\n\n> ");

        loop {
            let Some(answer) = self.read_line(&message)? else {
                return Ok(None);
            };
            match answer.parse::<usize>() {
                Ok(n) if n < options.len() => return Ok(Some(n)),
                Ok(n) if n == options.len() => return Ok(None),
                _ => {
                    let error = self.tr.fill(
                        keys::SELECT_FROM_LIST_ERROR,
                        &[("answer", &answer), ("oops_option", oops_option)],
                    );
                    writeln!(self.output, "{error}")?;
                }
            }
        }
    }

    fn show(&mut self, title: &str, body: &str) -> Result<(), AppError> {
        writeln!(self.output, "{title}\n================\n{body}\n")?;
        Ok(())
    }

    fn say(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn acknowledge_disclaimer(&mut self) -> Result<bool, AppError> {
        let tr = self.tr;
        writeln!(
            self.output,
            "{}\n\n{}\n",
            tr.t(keys::DISCLAIMER_TITLE),
            tr.t(keys::DISCLAIMER_BODY)
        )?;
        let expected = tr.t(keys::DISCLAIMER_ACK_ANSWER).to_lowercase();
        Ok(self
            .read_line(tr.t(keys::DISCLAIMER_ACK_TEXT))?
            .is_some_and(|answer| answer.to_lowercase() == expected))
    }

    fn run_again(&mut self) -> Result<bool, AppError> {
        let tr = self.tr;
        let accepted = tr.answers(keys::END_MESSAGE_ANSWERS);
        Ok(self
            .read_line(tr.t(keys::END_MESSAGE))?
            .is_some_and(|answer| accepted.contains(&answer.to_lowercase())))
    }
}
