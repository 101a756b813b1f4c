//! The interactive menu: read a choice, collect that operation's input, call
//! the API, print the outcome, repeat. Nothing that goes wrong inside one
//! operation ends the loop; only exit or end of input does.

use super::print::{print_error, print_messages, print_result};
use super::prompt::{Answer, Prompter};
use bookcat::api::{CatalogApi, SaveDirective};
use bookcat::config::CatalogConfig;
use bookcat::error::{CatalogError, Result};
use bookcat::model::{BookId, BookPatch, SearchField};
use bookcat::store::DataStore;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const MENU: &str = "
--- Menu ---
1. Add book
2. Edit book
3. List books
4. Search
5. Save to file
6. Load from file
0. Exit";

const SEARCH_MENU: &str = "
--- Search by ---
1. Title
2. Author
3. Genre
4. Year
5. Id";

pub struct Menu<S: DataStore, R, W> {
    api: CatalogApi<S>,
    config: CatalogConfig,
    io: Prompter<R, W>,
}

impl<S: DataStore, R: BufRead, W: Write> Menu<S, R, W> {
    pub fn new(api: CatalogApi<S>, config: CatalogConfig, input: R, output: W) -> Self {
        Self {
            api,
            config,
            io: Prompter::new(input, output),
        }
    }

    #[cfg(test)]
    fn into_parts(self) -> (CatalogApi<S>, W) {
        (self.api, self.io.into_output())
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.io.out(), "=== Book Catalog ===")?;
        loop {
            writeln!(self.io.out(), "{}", MENU)?;
            let choice = match self.io.text("Choose an action: ")? {
                Answer::Value(choice) => choice,
                Answer::Blank => String::new(),
                Answer::Closed => break,
            };
            tracing::debug!(choice = %choice, "menu choice");

            match choice.as_str() {
                "1" => self.add_book()?,
                "2" => self.edit_book()?,
                "3" => self.list_books()?,
                "4" => self.search_books()?,
                "5" => self.save_catalog()?,
                "6" => self.load_catalog()?,
                "0" => break,
                _ => print_error(self.io.out(), "Invalid choice, try again")?,
            }
        }
        writeln!(self.io.out(), "Goodbye.")?;
        Ok(())
    }

    /// Loads `path` and prints the report. Failures are printed, not returned.
    pub fn preload(&mut self, path: PathBuf) -> Result<()> {
        self.load_from(path)
    }

    fn add_book(&mut self) -> Result<()> {
        let Some(title) = self.required_text("Title: ", "Title")? else {
            return Ok(());
        };
        let Some(author) = self.required_text("Author: ", "Author")? else {
            return Ok(());
        };
        let year = match self.io.number::<i32>("Year: ", true, "Year must be a whole number")? {
            Answer::Value(year) => year,
            Answer::Blank => {
                print_error(self.io.out(), "Year cannot be empty")?;
                return Ok(());
            }
            Answer::Closed => return Ok(()),
        };
        let Some(genre) = self.required_text("Genre: ", "Genre")? else {
            return Ok(());
        };

        let result = self.api.add(title, author, year, genre);
        print_messages(self.io.out(), &result.messages)?;
        Ok(())
    }

    fn edit_book(&mut self) -> Result<()> {
        let prompt = "Id of the book to edit: ";
        let typed = match self.io.number::<i64>(prompt, false, "Enter a whole number")? {
            Answer::Value(n) => n,
            Answer::Blank | Answer::Closed => return Ok(()),
        };
        let id = match BookId::try_from(typed) {
            Ok(id) if self.api.exists(id) => id,
            _ => {
                print_error(self.io.out(), &format!("Book with id {} not found", typed))?;
                return Ok(());
            }
        };

        let mut patch = BookPatch::default();
        if let Some(title) = self.optional_text("New title (blank to keep): ")? {
            patch = patch.with_title(title);
        }
        if let Some(author) = self.optional_text("New author (blank to keep): ")? {
            patch = patch.with_author(author);
        }
        if let Answer::Value(year) = self.io.number::<i32>(
            "New year (blank to keep): ",
            true,
            "Enter a whole number, or leave blank to keep",
        )? {
            patch = patch.with_year(year);
        }
        if let Some(genre) = self.optional_text("New genre (blank to keep): ")? {
            patch = patch.with_genre(genre);
        }

        let result = self.api.edit(id, &patch);
        print_messages(self.io.out(), &result.messages)?;
        Ok(())
    }

    fn list_books(&mut self) -> Result<()> {
        let result = self.api.list();
        print_result(self.io.out(), "All books:", &result)?;
        Ok(())
    }

    fn search_books(&mut self) -> Result<()> {
        writeln!(self.io.out(), "{}", SEARCH_MENU)?;
        let choice = match self.io.text("Search attribute: ")? {
            Answer::Value(choice) => choice,
            Answer::Blank => String::new(),
            Answer::Closed => return Ok(()),
        };
        let field = match choice.parse::<usize>() {
            Ok(n) if (1..=SearchField::ALL.len()).contains(&n) => SearchField::ALL[n - 1],
            Ok(_) => {
                print_error(self.io.out(), "Invalid attribute choice")?;
                return Ok(());
            }
            Err(_) => {
                print_error(self.io.out(), "Enter a number from 1 to 5")?;
                return Ok(());
            }
        };

        let term = match self.io.text(&format!("Search {} for: ", field))? {
            Answer::Value(term) => term,
            Answer::Blank => {
                print_error(self.io.out(), "Search term cannot be empty")?;
                return Ok(());
            }
            Answer::Closed => return Ok(()),
        };

        let result = self.api.search(field, &term);
        print_result(self.io.out(), "Books found:", &result)?;
        Ok(())
    }

    fn save_catalog(&mut self) -> Result<()> {
        let Some(path) = self.file_name("File name to save to")? else {
            return Ok(());
        };
        let directive = if self.config.confirm_overwrite {
            SaveDirective::Ask
        } else {
            SaveDirective::Overwrite
        };

        let mut result = match self.api.save(&path, directive) {
            Ok(result) => result,
            Err(e) => return self.report_failure("Could not save", e),
        };
        if result.pending_overwrite.is_some() {
            let directive = if self.io.confirm("File already exists. Overwrite? (y/n): ")? {
                SaveDirective::Overwrite
            } else {
                SaveDirective::Cancel
            };
            result = match self.api.save(&path, directive) {
                Ok(result) => result,
                Err(e) => return self.report_failure("Could not save", e),
            };
        }

        print_messages(self.io.out(), &result.messages)?;
        Ok(())
    }

    fn load_catalog(&mut self) -> Result<()> {
        match self.file_name("File name to load from")? {
            Some(path) => self.load_from(path),
            None => Ok(()),
        }
    }

    fn load_from(&mut self, path: PathBuf) -> Result<()> {
        match self.api.load(&path) {
            Ok(result) => {
                print_messages(self.io.out(), &result.messages)?;
                Ok(())
            }
            Err(e) => self.report_failure("Could not load", e),
        }
    }

    fn report_failure(&mut self, action: &str, err: CatalogError) -> Result<()> {
        let line = match &err {
            CatalogError::FileNotFound(_) => {
                tracing::debug!(%err, "{}", action);
                err.to_string()
            }
            _ => {
                tracing::warn!(%err, "{}", action);
                format!("{}: {}", action, err)
            }
        };
        print_error(self.io.out(), &line)?;
        Ok(())
    }

    /// `None` after printing "<field> cannot be empty", or at end of input.
    fn required_text(&mut self, prompt: &str, field: &str) -> Result<Option<String>> {
        match self.io.text(prompt)? {
            Answer::Value(value) => Ok(Some(value)),
            Answer::Blank => {
                print_error(self.io.out(), &format!("{} cannot be empty", field))?;
                Ok(None)
            }
            Answer::Closed => Ok(None),
        }
    }

    fn optional_text(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.io.text(prompt)? {
            Answer::Value(value) => Ok(Some(value)),
            Answer::Blank | Answer::Closed => Ok(None),
        }
    }

    /// A blank answer falls back to the configured default file.
    fn file_name(&mut self, label: &str) -> Result<Option<PathBuf>> {
        let default = self.config.default_file.clone();
        let prompt = if default.is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} [{}]: ", label, default)
        };
        match self.io.text(&prompt)? {
            Answer::Value(name) => Ok(Some(PathBuf::from(name))),
            Answer::Blank if !default.is_empty() => Ok(Some(PathBuf::from(default))),
            Answer::Blank => {
                print_error(self.io.out(), "File name cannot be empty")?;
                Ok(None)
            }
            Answer::Closed => Ok(None),
        }
    }
}
