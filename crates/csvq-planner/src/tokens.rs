//! Command-line token parsing.
//!
//! Keywords are exact and case-sensitive. Each keyword consumes a fixed
//! number of following tokens; anything else in keyword position is an
//! unknown command.

use crate::command::Command;
use crate::error::{PlanError, Result};

pub fn parse_commands<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Command>> {
    let mut it = tokens.iter().map(|s| s.as_ref());
    let mut commands = Vec::new();

    while let Some(token) = it.next() {
        let cmd = match token {
            "FROM" => Command::From {
                file: next_arg(&mut it, "FROM", "file name")?.to_string(),
            },
            "SELECT" => Command::Select {
                columns: split_columns(next_arg(&mut it, "SELECT", "column names")?),
            },
            "TAKE" => Command::Take {
                n: parse_count(next_arg(&mut it, "TAKE", "number of rows")?)?,
            },
            "ORDERBY" => Command::OrderBy {
                column: next_arg(&mut it, "ORDERBY", "column name")?.to_string(),
            },
            "JOIN" => {
                let file = next_arg(&mut it, "JOIN", "file name and column name")?;
                let column = next_arg(&mut it, "JOIN", "column name")?;
                Command::Join {
                    file: file.to_string(),
                    column: column.to_string(),
                }
            }
            "COUNTBY" => Command::CountBy {
                column: next_arg(&mut it, "COUNTBY", "column name")?.to_string(),
            },
            other => return Err(PlanError::UnknownCommand(other.to_string())),
        };
        commands.push(cmd);
    }

    Ok(commands)
}

fn next_arg<'a>(
    it: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str> {
    it.next()
        .ok_or(PlanError::MissingArgument { command, expected })
}

/// `SELECT a,b,c` takes a single comma-separated token. A trailing comma does
/// not add an empty name (`a,b,` is `[a, b]`).
pub(crate) fn split_columns(arg: &str) -> Vec<String> {
    let mut columns: Vec<String> = arg.split(',').map(str::to_string).collect();
    if columns.last().is_some_and(|c| c.is_empty()) {
        columns.pop();
    }
    columns
}

pub(crate) fn parse_count(arg: &str) -> Result<usize> {
    arg.parse::<usize>().map_err(|_| {
        PlanError::MalformedArgument(format!(
            "TAKE expects a non-negative integer, got '{arg}'"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_keyword_in_order() {
        let cmds = parse_commands(&[
            "FROM", "a.csv", "SELECT", "id,name", "TAKE", "2", "ORDERBY", "id", "JOIN", "b.csv",
            "id", "COUNTBY", "name",
        ])
        .unwrap();
        assert_eq!(
            cmds,
            vec![
                Command::From {
                    file: "a.csv".into()
                },
                Command::Select {
                    columns: vec!["id".into(), "name".into()]
                },
                Command::Take { n: 2 },
                Command::OrderBy { column: "id".into() },
                Command::Join {
                    file: "b.csv".into(),
                    column: "id".into()
                },
                Command::CountBy {
                    column: "name".into()
                },
            ]
        );
    }

    #[test]
    fn empty_input_is_an_empty_pipeline() {
        let none: [&str; 0] = [];
        assert!(parse_commands(&none).unwrap().is_empty());
    }

    #[test]
    fn missing_argument_is_reported_per_command() {
        let err = parse_commands(&["FROM"]).unwrap_err();
        assert_eq!(err.to_string(), "missing file name after FROM");

        let err = parse_commands(&["FROM", "a.csv", "JOIN", "b.csv"]).unwrap_err();
        assert!(matches!(
            err,
            PlanError::MissingArgument {
                command: "JOIN",
                ..
            }
        ));
    }

    #[test]
    fn keywords_are_case_sensitive() {
        let err = parse_commands(&["from", "a.csv"]).unwrap_err();
        assert!(matches!(err, PlanError::UnknownCommand(ref t) if t == "from"));
    }

    #[test]
    fn take_rejects_negative_and_non_numeric() {
        for bad in ["-1", "ten", "1.5", ""] {
            let err = parse_commands(&["TAKE", bad]).unwrap_err();
            assert!(matches!(err, PlanError::MalformedArgument(_)), "{bad}");
        }
    }

    #[test]
    fn select_keeps_empty_names() {
        let cmds = parse_commands(&["SELECT", "a,,b"]).unwrap();
        assert_eq!(
            cmds[0],
            Command::Select {
                columns: vec!["a".into(), "".into(), "b".into()]
            }
        );
    }

    #[test]
    fn select_drops_only_the_trailing_empty_name() {
        assert_eq!(split_columns("a,b,"), ["a", "b"]);
        assert_eq!(split_columns("a,,"), ["a", ""]);
        assert!(split_columns("").is_empty());
    }
}
