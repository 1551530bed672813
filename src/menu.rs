//! The interactive text menu.
//!
//! Reads numeric choices line by line from any `BufRead`, dispatches to the
//! [`Library`] and writes results to any `Write`. Closing the input behaves
//! like choosing Exit.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::debug;

use crate::{book::BookId, library::Library};

/// An option of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// List books that are not borrowed
    ViewAvailable,
    /// Borrow a book by id
    Borrow,
    /// List the user's borrowed books
    ViewBorrowed,
    /// Leave the menu
    Exit,
}

impl MenuChoice {
    /// Map a menu number to its choice
    #[must_use]
    pub fn from_number(number: i32) -> Option<Self> {
        match number {
            1 => Some(Self::ViewAvailable),
            2 => Some(Self::Borrow),
            3 => Some(Self::ViewBorrowed),
            4 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    /// A parsed integer
    Number(i32),
    /// Anything that isn't an integer
    Invalid,
    /// End of input
    Closed,
}

/// Read one line and try to parse it as an integer
fn read_entry(input: &mut impl BufRead) -> io::Result<Entry> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Entry::Closed);
    }
    Ok(line.trim().parse().map_or(Entry::Invalid, Entry::Number))
}

/// Print the option list and the prompt
fn print_options(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}", "Options:".bold())?;
    writeln!(out, "1. View Available Books")?;
    writeln!(out, "2. Borrow a Book")?;
    writeln!(out, "3. View Borrowed Books")?;
    writeln!(out, "4. Exit")?;
    write!(out, "Choose an option: ")?;
    out.flush()
}

/// Ask for a book id and lend it. Returns `false` if the input closed.
fn borrow_prompt(
    library: &mut Library,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<bool> {
    write!(out, "Enter Book ID to borrow: ")?;
    out.flush()?;

    let id: BookId = match read_entry(input)? {
        Entry::Number(id) => id,
        Entry::Invalid => {
            writeln!(out, "{}", "Invalid book ID! Please try again.".red())?;
            return Ok(true);
        }
        Entry::Closed => return Ok(false),
    };

    let found = library.search_book(id);
    match library.lend_book(found) {
        Ok(book) => {
            let confirmation = format!("Book borrowed successfully: {}", book.title());
            writeln!(out, "{}", confirmation.green())?;
        }
        Err(err) => writeln!(out, "{}", err.to_string().red())?,
    }
    Ok(true)
}

/// Run the menu until the user exits or the input closes
///
/// # Errors
///
/// Returns any error from reading `input` or writing `out`.
pub fn run(library: &mut Library, mut input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    loop {
        print_options(out)?;

        let choice = match read_entry(&mut input)? {
            Entry::Number(number) => MenuChoice::from_number(number),
            Entry::Invalid => None,
            Entry::Closed => Some(MenuChoice::Exit),
        };
        debug!(?choice, "menu choice");

        match choice {
            Some(MenuChoice::ViewAvailable) => {
                writeln!(out, "\n{}", "Available Books:".bold())?;
                library.print_available_books(out)?;
            }
            Some(MenuChoice::Borrow) => {
                if !borrow_prompt(library, &mut input, out)? {
                    break;
                }
            }
            Some(MenuChoice::ViewBorrowed) => {
                writeln!(out, "\n{}", "Borrowed Books:".bold())?;
                library.print_borrowed_books(out)?;
            }
            Some(MenuChoice::Exit) => break,
            None => writeln!(out, "{}", "Invalid option! Please try again.".yellow())?,
        }
    }

    writeln!(out, "Exiting...")?;
    Ok(())
}
