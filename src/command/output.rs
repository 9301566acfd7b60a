use std::io;

use calm_io::stdoutln;

use crate::{options::OutputFormat, view::Fragment};

/// KeepUpOutput defines everything keep-up prints to `stdout`.
/// Every command returns `KeepUpResult<KeepUpOutput>`; views rendered
/// while a query is still running are printed as they happen and the
/// command finishes with `KeepUpOutput::EmptySuccess`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeepUpOutput {
    View {
        fragment: Fragment,
        format: OutputFormat,
    },
    EmptySuccess,
}

impl KeepUpOutput {
    pub fn view(fragment: Fragment, format: OutputFormat) -> KeepUpOutput {
        KeepUpOutput::View { fragment, format }
    }

    /// What gets written to stdout, if anything
    pub fn get_stdout(&self) -> Option<String> {
        match self {
            KeepUpOutput::View { fragment, format } => Some(match format {
                OutputFormat::Html => fragment.to_string(),
                OutputFormat::Plain => fragment.to_plain_text(),
            }),
            KeepUpOutput::EmptySuccess => None,
        }
    }

    pub fn print(&self) -> io::Result<()> {
        if let Some(stdout) = self.get_stdout() {
            stdoutln!("{}", stdout)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::KeepUpOutput;
    use crate::{
        options::OutputFormat,
        view::{task, task::TaskItem},
    };

    fn buy_milk() -> TaskItem {
        TaskItem {
            id: "42".to_string(),
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
        }
    }

    #[test]
    fn html_output_is_the_serialized_fragment() {
        let output = KeepUpOutput::view(task::render(&buy_milk()), OutputFormat::Html);
        assert_eq!(
            output.get_stdout().unwrap(),
            r#"<div><a href="/tasks/42">Buy milk</a><p>2%</p></div>"#
        );
    }

    #[test]
    fn plain_output_is_the_text_of_the_fragment() {
        let output = KeepUpOutput::view(task::render(&buy_milk()), OutputFormat::Plain);
        let stdout = output.get_stdout().unwrap();
        assert!(stdout.contains("Buy milk </tasks/42>"));
        assert!(stdout.contains("2%"));
    }

    #[test]
    fn empty_success_prints_nothing() {
        assert_eq!(KeepUpOutput::EmptySuccess.get_stdout(), None);
    }
}
