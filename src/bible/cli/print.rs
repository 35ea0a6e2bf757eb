use bible::api::{CmdMessage, MessageLevel};
use bible::model::VerseRecord;
use colored::Colorize;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub(super) fn print_messages(messages: &[CmdMessage]) -> io::Result<()> {
    write_messages(&mut io::stdout().lock(), messages)
}

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_verses(verses: &[VerseRecord], width: usize) -> io::Result<()> {
    write_verses(&mut io::stdout().lock(), verses, width)
}

pub(super) fn write_verses<W: Write>(
    out: &mut W,
    verses: &[VerseRecord],
    width: usize,
) -> io::Result<()> {
    for verse in verses {
        writeln!(out, "{}", verse.reference().bold())?;
        for line in wrap(&verse.text, width) {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub(super) fn print_books(books: &[String]) -> io::Result<()> {
    writeln!(io::stdout().lock(), "{}", books.join(", "))
}

pub(super) fn print_count(label: &str, count: Option<usize>) -> io::Result<()> {
    writeln!(io::stdout().lock(), "{}: {}", label, count.unwrap_or(0))
}

/// Greedy word wrap by display width. Words wider than `width` get a line
/// of their own rather than being split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if !line.is_empty() && line_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if !line.is_empty() {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(word);
        line_width += word_width;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
