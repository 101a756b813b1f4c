use bookcat::api::{CmdMessage, CmdResult, MessageLevel};
use bookcat::config::{CatalogConfig, KEYS};
use bookcat::model::Book;
use colored::Colorize;
use std::io::{self, Write};

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
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

pub(super) fn print_books<W: Write>(out: &mut W, heading: &str, books: &[Book]) -> io::Result<()> {
    if books.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "{}", heading.bold())?;
    for book in books {
        writeln!(out, "{}", book)?;
    }
    Ok(())
}

pub(super) fn print_result<W: Write>(out: &mut W, heading: &str, result: &CmdResult) -> io::Result<()> {
    print_books(out, heading, &result.listed_books)?;
    print_messages(out, &result.messages)
}

pub(super) fn print_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error(message)])
}

pub(super) fn print_config<W: Write>(out: &mut W, config: &CatalogConfig) -> io::Result<()> {
    for key in KEYS {
        writeln!(out, "{} = {}", key, config.get(key).unwrap_or_default())?;
    }
    Ok(())
}
