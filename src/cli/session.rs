//! Interactive terminal session
//!
//! The register/login screen followed by the main menu loop. Input and output
//! are generic so the whole flow can be driven from tests.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crossterm::style::{style, Color, Stylize};

use crate::config::Settings;
use crate::crypto::SecureString;
use crate::display::{format_balance, format_transaction_list};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, User};
use crate::services::{AuthService, LedgerService};
use crate::storage::Storage;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTransaction,
    ViewBalance,
    ViewTransactions,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::AddTransaction),
            "2" => Ok(Self::ViewBalance),
            "3" => Ok(Self::ViewTransactions),
            "4" => Ok(Self::Exit),
            _ => Err(()),
        }
    }
}

/// One interactive session: authenticate, then run the menu until exit
pub struct Session<'a, R, W> {
    storage: &'a Storage,
    settings: &'a Settings,
    input: R,
    output: W,
    hide_password: bool,
    color: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a session reading from `input` and writing to `output`
    ///
    /// Passwords are echoed and output is uncolored until configured
    /// otherwise.
    pub fn new(storage: &'a Storage, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            storage,
            settings,
            input,
            output,
            hide_password: false,
            color: false,
        }
    }

    /// Read passwords from the terminal without echo
    pub fn hide_password(mut self, hide: bool) -> Self {
        self.hide_password = hide;
        self
    }

    /// Color success/failure messages
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Run the full session
    pub fn run(&mut self) -> BudgetResult<()> {
        match self.authenticate()? {
            Some(user) => self.main_menu(&user.username),
            None => Ok(()),
        }
    }

    /// Show the register/login screen
    ///
    /// Returns `None` when the user could not be authenticated; the reason
    /// has already been printed. Corrupt account records and I/O failures
    /// are returned as errors.
    pub fn authenticate(&mut self) -> BudgetResult<Option<User>> {
        writeln!(self.output, "Welcome to Budget Tracker Authentication.")?;
        writeln!(self.output, "1. Register")?;
        writeln!(self.output, "2. Login")?;

        let option = match self.prompt("Choose option: ")? {
            Some(option) if !option.trim().is_empty() => option,
            _ => {
                writeln!(self.output, "No input detected. Exiting program.")?;
                return Ok(None);
            }
        };

        let result = match option.trim() {
            "1" => self.register(),
            "2" => self.login(),
            _ => {
                writeln!(self.output, "Invalid option.")?;
                return Ok(None);
            }
        };

        match result {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                self.report_auth_error(err)?;
                Ok(None)
            }
        }
    }

    fn register(&mut self) -> BudgetResult<User> {
        let username = self.prompt("Enter username: ")?.unwrap_or_default();

        // Fail before asking for a password
        if username.is_empty() {
            return Err(BudgetError::Validation("Username cannot be empty".into()));
        }
        if self.storage.users.exists(&username)? {
            return Err(BudgetError::duplicate_user(username));
        }

        let password = self.prompt_password("Enter password: ")?;
        let user = AuthService::new(self.storage, self.settings).register(&username, &password)?;

        writeln!(self.output, "User registered successfully!")?;
        Ok(user)
    }

    fn login(&mut self) -> BudgetResult<User> {
        let username = self.prompt("Enter username: ")?.unwrap_or_default();
        if username.is_empty() {
            return Err(BudgetError::Validation("Username cannot be empty".into()));
        }

        let password = self.prompt_password("Enter password: ")?;
        let user = AuthService::new(self.storage, self.settings).login(&username, &password)?;

        writeln!(self.output, "Welcome, {}!", user.username)?;
        Ok(user)
    }

    fn report_auth_error(&mut self, err: BudgetError) -> BudgetResult<()> {
        let message = match err {
            BudgetError::Validation(msg) => msg,
            BudgetError::Duplicate { .. } => "Username already exists".to_string(),
            BudgetError::InvalidCredentials => "Invalid username or password".to_string(),
            other => return Err(other),
        };
        writeln!(self.output, "{}.", message)?;
        Ok(())
    }

    /// Run the main menu for an authenticated user until they exit
    pub fn main_menu(&mut self, username: &str) -> BudgetResult<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "--- Budget Tracker ---")?;
            writeln!(self.output, "1. Add Transaction")?;
            writeln!(self.output, "2. View Balance")?;
            writeln!(self.output, "3. View All Transactions")?;
            writeln!(self.output, "4. Exit")?;

            let choice = match self.prompt("Choose an option: ")? {
                Some(choice) if !choice.trim().is_empty() => choice,
                _ => {
                    writeln!(self.output, "No input received.")?;
                    return Ok(());
                }
            };
            writeln!(self.output)?;

            match choice.parse::<MenuChoice>() {
                Ok(MenuChoice::AddTransaction) => self.add_transaction(username)?,
                Ok(MenuChoice::ViewBalance) => self.show_balance(username)?,
                Ok(MenuChoice::ViewTransactions) => self.show_transactions(username)?,
                Ok(MenuChoice::Exit) => return Ok(()),
                Err(()) => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn add_transaction(&mut self, username: &str) -> BudgetResult<()> {
        let description = self.prompt("Enter description: ")?.unwrap_or_default();
        let amount = self
            .prompt("Enter amount (positive for income, negative for expense): ")?
            .unwrap_or_default();

        let amount = match Money::parse(&amount) {
            Ok(amount) => amount,
            Err(e) => {
                tracing::debug!(error = %e, "rejected transaction amount");
                return self.print_colored("Invalid amount.", Color::Red);
            }
        };

        match LedgerService::new(self.storage).add_transaction(username, &description, amount) {
            Ok(_) => self.print_colored("Transaction added successfully!", Color::Green),
            Err(BudgetError::Validation(msg)) => self.print_colored(&format!("{}.", msg), Color::Red),
            Err(e) => Err(e),
        }
    }

    fn show_balance(&mut self, username: &str) -> BudgetResult<()> {
        let balance = LedgerService::new(self.storage).balance(username)?;
        let color = if balance.is_negative() {
            Color::Red
        } else {
            Color::Green
        };
        let line = format_balance(balance, &self.settings.currency_symbol);
        self.print_colored(&line, color)
    }

    fn show_transactions(&mut self, username: &str) -> BudgetResult<()> {
        let transactions = LedgerService::new(self.storage).transactions(username)?;
        let listing = format_transaction_list(&transactions, &self.settings.currency_symbol);
        write!(self.output, "{}", listing)?;
        Ok(())
    }

    fn print_colored(&mut self, text: &str, color: Color) -> BudgetResult<()> {
        if self.color {
            writeln!(self.output, "{}", style(text).with(color))?;
        } else {
            writeln!(self.output, "{}", text)?;
        }
        Ok(())
    }

    /// Print a prompt and read one line, without its line ending
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> BudgetResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn prompt_password(&mut self, label: &str) -> BudgetResult<SecureString> {
        if self.hide_password {
            self.output.flush()?;
            let password = rpassword::prompt_password(label)
                .map_err(|e| BudgetError::Io(format!("Failed to read password: {}", e)))?;
            return Ok(SecureString::new(password));
        }

        Ok(SecureString::new(self.prompt(label)?.unwrap_or_default()))
    }
}
