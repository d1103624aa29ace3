//! Line-driven table browser.
//!
//! Each stdin line is one input event. After every event the session re-runs
//! the pipeline and the whole table is printed again.

use super::render::{render_messages, render_table};
use statdex::commands::paginate::PageSize;
use statdex::error::Result;
use statdex::session::{TableEvent, TableSession};
use std::io::{self, BufRead, IsTerminal, Write};

pub const BROWSE_HELP: &str = "\
Commands:
  next | n            next page
  prev | p            previous page
  page N              jump to page N
  search [TEXT]       filter by name (no text clears it)
  min [VALUE]         minimum power (no value clears it)
  size N|all          rows per page
  reset               clear both filters
  help                show this help
  quit | q            leave
";

#[derive(Debug, PartialEq, Eq)]
pub enum BrowseCommand {
    Event(TableEvent),
    Help,
    Quit,
}

/// Parses one input line. Blank lines are `Ok(None)`.
pub fn parse_line(line: &str) -> std::result::Result<Option<BrowseCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "next" | "n" => BrowseCommand::Event(TableEvent::NextPage),
        "prev" | "p" => BrowseCommand::Event(TableEvent::PrevPage),
        "page" => {
            let number: usize = rest
                .parse()
                .map_err(|_| format!("Invalid page number: '{}'", rest))?;
            BrowseCommand::Event(TableEvent::GoToPage(number.saturating_sub(1)))
        }
        "search" | "s" => BrowseCommand::Event(TableEvent::Search(rest.to_string())),
        "min" | "m" => BrowseCommand::Event(TableEvent::MinPower(rest.to_string())),
        "size" => BrowseCommand::Event(TableEvent::PageSize(rest.parse::<PageSize>()?)),
        "reset" => BrowseCommand::Event(TableEvent::Reset),
        "help" | "?" => BrowseCommand::Help,
        "quit" | "q" | "exit" => BrowseCommand::Quit,
        other => return Err(format!("Unknown command: '{}' (type 'help')", other)),
    };
    Ok(Some(command))
}

/// Runs the session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut TableSession<'_>,
    input: R,
    out: &mut W,
    use_color: bool,
    prompt: bool,
) -> Result<()> {
    write!(out, "{}", render_table(&session.view(), use_color))?;
    show_prompt(out, prompt)?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(BrowseCommand::Quit)) => break,
            Ok(Some(BrowseCommand::Help)) => write!(out, "{}", BROWSE_HELP)?,
            Ok(Some(BrowseCommand::Event(event))) => {
                let result = session.dispatch(event);
                if let Some(view) = &result.table {
                    write!(out, "{}", render_table(view, use_color))?;
                }
                write!(out, "{}", render_messages(&result.messages, use_color))?;
            }
            Err(reason) => {
                let message = statdex::api::CmdMessage::error(reason);
                write!(out, "{}", render_messages(&[message], use_color))?;
            }
        }
        show_prompt(out, prompt)?;
    }
    Ok(())
}

fn show_prompt<W: Write>(out: &mut W, prompt: bool) -> Result<()> {
    if prompt {
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}

/// Browses over the process stdin/stdout, prompting only on a terminal.
pub fn run_stdio(session: &mut TableSession<'_>, use_color: bool) -> Result<()> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let mut stdout = io::stdout().lock();
    run(session, stdin.lock(), &mut stdout, use_color, prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use statdex::model::Record;

    fn records(count: u32) -> Vec<Record> {
        (1..=count)
            .map(|id| Record {
                id,
                name: format!("Creature {}", id),
                types: vec!["Normal".to_string()],
                hp: 100 * id,
                attack: 0,
                defense: 0,
                special_attack: 0,
                special_defense: 0,
                speed: 0,
            })
            .collect()
    }

    fn browse(records: &[Record], script: &str) -> String {
        let mut session = TableSession::new(records, PageSize::rows(5).unwrap());
        let mut out = Vec::new();
        run(&mut session, script.as_bytes(), &mut out, false, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_navigation() {
        assert_eq!(
            parse_line("next"),
            Ok(Some(BrowseCommand::Event(TableEvent::NextPage)))
        );
        assert_eq!(
            parse_line("  P "),
            Ok(Some(BrowseCommand::Event(TableEvent::PrevPage)))
        );
        assert_eq!(
            parse_line("page 3"),
            Ok(Some(BrowseCommand::Event(TableEvent::GoToPage(2))))
        );
        assert_eq!(
            parse_line("page 0"),
            Ok(Some(BrowseCommand::Event(TableEvent::GoToPage(0))))
        );
        assert!(parse_line("page x").is_err());
    }

    #[test]
    fn parses_filters_and_size() {
        assert_eq!(
            parse_line("search Mr. Mime"),
            Ok(Some(BrowseCommand::Event(TableEvent::Search(
                "Mr. Mime".to_string()
            ))))
        );
        assert_eq!(
            parse_line("search"),
            Ok(Some(BrowseCommand::Event(TableEvent::Search(String::new()))))
        );
        assert_eq!(
            parse_line("min abc"),
            Ok(Some(BrowseCommand::Event(TableEvent::MinPower(
                "abc".to_string()
            ))))
        );
        assert_eq!(
            parse_line("size all"),
            Ok(Some(BrowseCommand::Event(TableEvent::PageSize(PageSize::All))))
        );
        assert!(parse_line("size 0").is_err());
    }

    #[test]
    fn parses_control_lines() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("quit"), Ok(Some(BrowseCommand::Quit)));
        assert_eq!(parse_line("help"), Ok(Some(BrowseCommand::Help)));
        assert!(parse_line("dance").is_err());
    }

    #[test]
    fn renders_initial_table_then_each_event() {
        let records = records(12);
        let output = browse(&records, "next\nnext\nquit\nnext\n");

        assert!(output.contains("1-5 of 12"));
        assert!(output.contains("6-10 of 12"));
        assert!(output.contains("11-12 of 12"));
        assert!(output.contains("Page 3 of 3"));
        assert_eq!(output.matches("Rows per page:").count(), 3);
    }

    #[test]
    fn filter_change_clamps_page() {
        let records = records(12);
        let output = browse(&records, "page 3\nsearch Creature 1\n");

        assert!(output.contains("Page 3 of 3"));
        assert!(output.contains("1-4 of 4"));
        assert!(output.contains("Page 1 of 1"));
    }

    #[test]
    fn bad_input_reports_and_continues() {
        let records = records(3);
        let output = browse(&records, "dance\nmin lots\nnext\n");

        assert!(output.contains("Unknown command: 'dance'"));
        assert!(output.contains("'lots' is not a number"));
        assert_eq!(output.matches("Rows per page:").count(), 3);
    }
}
