//! Interactive shell
//!
//! The menu loop over a database. Prompts and diagnostics go to the
//! diagnostic stream; only the database listing goes to the output stream.

use std::io::{BufRead, Write};

use crate::codec::{read_record, ReadMode};
use crate::database::Database;
use crate::error::{Result, RosterError};
use crate::input::LineReader;
use crate::record::MAX_NAME_LENGTH;

/// Menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    Add = 0,
    Delete = 1,
    Print = 2,
    Exit = 3,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::Add,
        MenuChoice::Delete,
        MenuChoice::Print,
        MenuChoice::Exit,
    ];

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| *choice as i64 == code)
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add new employee to database",
            MenuChoice::Delete => "Delete employee from database",
            MenuChoice::Print => "Print database to screen",
            MenuChoice::Exit => "Exit database program",
        }
    }
}

/// Drives the menu over injected streams
pub struct Shell<'a, R, O, D> {
    database: &'a mut Database,
    input: LineReader<R>,
    out: O,
    diag: D,
}

impl<'a, R: BufRead, O: Write, D: Write> Shell<'a, R, O, D> {
    pub fn new(database: &'a mut Database, input: R, out: O, diag: D) -> Self {
        Self {
            database,
            input: LineReader::new(input),
            out,
            diag,
        }
    }

    /// Run until the exit choice or end of input at the menu prompt
    ///
    /// End of input while entering an employee or a name to delete is
    /// returned as `RosterError::EndOfInput`.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.input.read_line(self.database.config().menu_line_limit)? else {
                tracing::debug!("end of input at menu prompt");
                return Ok(());
            };

            let Some(code) = parse_choice(&line) else {
                writeln!(self.diag, "corrupted menu choice")?;
                continue;
            };

            match MenuChoice::from_code(code) {
                Some(MenuChoice::Add) => self.add_employee()?,
                Some(MenuChoice::Delete) => self.delete_employee()?,
                Some(MenuChoice::Print) => self.database.print(&mut self.out)?,
                Some(MenuChoice::Exit) => return Ok(()),
                None => writeln!(self.diag, "illegal choice {code}")?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.diag, "\nOptions:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.diag, "{}: {}", choice as u8, choice.description())?;
        }
        write!(self.diag, "\nEnter option: ")?;
        self.diag.flush()?;
        Ok(())
    }

    fn add_employee(&mut self) -> Result<()> {
        let record = read_record(&mut self.input, ReadMode::Interactive, &mut self.diag)?;
        tracing::debug!(name = record.name(), "adding employee");
        self.database.insert(record)?;
        Ok(())
    }

    fn delete_employee(&mut self) -> Result<()> {
        write!(self.diag, "Please enter the name of the employee to be deleted: ")?;
        self.diag.flush()?;

        let line = self
            .input
            .read_line(MAX_NAME_LENGTH)?
            .ok_or(RosterError::EndOfInput)?;
        let name = String::from_utf8_lossy(&line);

        if self.database.delete_all(&name) == 0 {
            writeln!(self.diag, "Employee not found.")?;
        }
        Ok(())
    }
}

/// Parse a menu line the way `%d` would
///
/// Leading whitespace and a sign are accepted and anything after the digits
/// is ignored. `None` if no integer starts the line (or it overflows).
pub fn parse_choice(line: &[u8]) -> Option<i64> {
    let start = line.iter().position(|b| !b.is_ascii_whitespace())?;
    let rest = &line[start..];

    let (negative, digits) = match rest {
        [b'-', tail @ ..] => (true, tail),
        [b'+', tail @ ..] => (false, tail),
        _ => (false, rest),
    };
    let len = digits.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }

    let value: i64 = std::str::from_utf8(&digits[..len]).ok()?.parse().ok()?;
    Some(if negative { -value } else { value })
}
