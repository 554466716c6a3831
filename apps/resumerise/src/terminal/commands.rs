//! Line-oriented command parser for the terminal form.

use std::path::PathBuf;

pub const HELP: &str = "\
Commands:
  resume <path>   select the resume file to upload
  job <text>      set the job description to a single line
  job             start a multi-line job description, end it with a lone '.'
  submit          send resume and job description for analysis
  show            redraw the form
  dismiss         clear the last result or error
  help            show this help
  quit            exit";

const END_OF_TEXT: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Resume(PathBuf),
    Job(String),
    Submit,
    Show,
    Dismiss,
    Help,
    Quit,
    Invalid(String),
}

/// Turns input lines into commands. Keeps the partial job description while a
/// multi-line `job` block is open.
#[derive(Debug, Default)]
pub struct LineReader {
    job_lines: Option<Vec<String>>,
}

impl LineReader {
    pub fn is_collecting(&self) -> bool {
        self.job_lines.is_some()
    }

    pub fn feed(&mut self, line: &str) -> Option<ShellCommand> {
        if let Some(lines) = self.job_lines.as_mut() {
            if line == END_OF_TEXT {
                let text = lines.join("\n");
                self.job_lines = None;
                return Some(ShellCommand::Job(text));
            }
            lines.push(line.to_string());
            return None;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (trimmed, ""),
        };

        let command = match word {
            "resume" if rest.is_empty() => {
                ShellCommand::Invalid("usage: resume <path>".to_string())
            }
            "resume" => ShellCommand::Resume(PathBuf::from(rest)),
            "job" if rest.is_empty() => {
                self.job_lines = Some(Vec::new());
                return None;
            }
            // Single-line form keeps the text after the command word as typed.
            "job" => ShellCommand::Job(single_line_text(line)),
            "submit" => ShellCommand::Submit,
            "show" => ShellCommand::Show,
            "dismiss" => ShellCommand::Dismiss,
            "help" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => ShellCommand::Invalid(format!("unknown command '{other}', try 'help'")),
        };
        Some(command)
    }
}

fn single_line_text(line: &str) -> String {
    let trimmed = line.trim_start();
    let after_word = trimmed.strip_prefix("job").unwrap_or(trimmed);
    after_word
        .strip_prefix(char::is_whitespace)
        .unwrap_or(after_word)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_commands() {
        let mut reader = LineReader::default();
        assert_eq!(reader.feed("submit"), Some(ShellCommand::Submit));
        assert_eq!(reader.feed("  show "), Some(ShellCommand::Show));
        assert_eq!(reader.feed("dismiss"), Some(ShellCommand::Dismiss));
        assert_eq!(reader.feed("exit"), Some(ShellCommand::Quit));
        assert_eq!(reader.feed(""), None);
    }

    #[test]
    fn test_resume_path() {
        let mut reader = LineReader::default();
        assert_eq!(
            reader.feed("resume ./cvs/Jane Doe.pdf"),
            Some(ShellCommand::Resume(PathBuf::from("./cvs/Jane Doe.pdf")))
        );
        assert!(matches!(
            reader.feed("resume"),
            Some(ShellCommand::Invalid(_))
        ));
    }

    #[test]
    fn test_single_line_job_keeps_text() {
        let mut reader = LineReader::default();
        assert_eq!(
            reader.feed("job Rust developer,  remote "),
            Some(ShellCommand::Job("Rust developer,  remote ".to_string()))
        );
    }

    #[test]
    fn test_multi_line_job() {
        let mut reader = LineReader::default();
        assert_eq!(reader.feed("job"), None);
        assert!(reader.is_collecting());
        assert_eq!(reader.feed("Senior Data Engineer"), None);
        assert_eq!(reader.feed(""), None);
        assert_eq!(reader.feed("  Requirements: SQL, Spark"), None);
        assert_eq!(
            reader.feed("."),
            Some(ShellCommand::Job(
                "Senior Data Engineer\n\n  Requirements: SQL, Spark".to_string()
            ))
        );
        assert!(!reader.is_collecting());
    }

    #[test]
    fn test_commands_inside_job_block_are_text() {
        let mut reader = LineReader::default();
        reader.feed("job");
        assert_eq!(reader.feed("submit"), None);
        assert_eq!(
            reader.feed("."),
            Some(ShellCommand::Job("submit".to_string()))
        );
    }

    #[test]
    fn test_unknown_command() {
        let mut reader = LineReader::default();
        match reader.feed("analyze now") {
            Some(ShellCommand::Invalid(msg)) => assert!(msg.contains("analyze")),
            other => panic!("expected invalid, got {other:?}"),
        }
    }
}
