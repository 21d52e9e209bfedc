use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::debug;

use crate::application::LedgerService;
use crate::domain::{Amount, format_amount, parse_amount};
use crate::logging;

/// Teller - Bank Account Management System
#[derive(Parser)]
#[command(name = "teller")]
#[command(about = "An in-memory bank account ledger driven by a text menu")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        logging::set_up(self.verbose);

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(LedgerService::new(), stdin.lock(), stdout.lock());
        session.run()
    }
}

/// One interactive run of the menu loop.
///
/// Generic over its input and output streams so tests can drive a fully
/// scripted session against in-memory buffers.
pub struct Session<R, W> {
    service: LedgerService,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(service: LedgerService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    pub fn service(&self) -> &LedgerService {
        &self.service
    }

    /// Run the menu loop until the user picks exit.
    pub fn run(&mut self) -> Result<()> {
        debug!("session started");
        loop {
            self.show_menu()?;
            let choice = self.read_choice()?;

            match choice {
                1 => self.create_account()?,
                2 => self.list_accounts()?,
                3 => self.deposit()?,
                4 => self.withdraw()?,
                5 => self.rename_holder()?,
                6 => {
                    writeln!(self.output, "Exiting program. Goodbye!")?;
                    debug!("session ended");
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "===== Bank Account Management System =====")?;
        writeln!(self.output, "1. Create Account")?;
        writeln!(self.output, "2. View All Accounts")?;
        writeln!(self.output, "3. Deposit")?;
        writeln!(self.output, "4. Withdraw")?;
        writeln!(self.output, "5. Update Account Holder Name")?;
        writeln!(self.output, "6. Exit")?;
        self.prompt("Enter your choice: ")
    }

    fn create_account(&mut self) -> Result<()> {
        self.prompt("Enter account number: ")?;
        let number = self.read_token()?;

        self.prompt("Enter account holder name: ")?;
        let name = self.read_line()?;

        self.prompt("Enter initial balance: ")?;
        let balance = self.read_amount()?;

        self.service.create_account(number, name, balance);
        writeln!(self.output, "Account created successfully!")?;
        Ok(())
    }

    fn list_accounts(&mut self) -> Result<()> {
        if self.service.accounts().is_empty() {
            writeln!(self.output, "No accounts found.")?;
            return Ok(());
        }

        writeln!(self.output)?;
        writeln!(self.output, "--- Account List ---")?;
        for account in self.service.accounts() {
            writeln!(self.output, "Account Number: {}", account.number())?;
            writeln!(self.output, "Account Holder: {}", account.holder_name())?;
            writeln!(self.output, "Balance: ${}", format_amount(account.balance()))?;
            writeln!(self.output, "-----------------------------")?;
        }
        Ok(())
    }

    fn deposit(&mut self) -> Result<()> {
        self.prompt("Enter account number to deposit into: ")?;
        let number = self.read_token()?;

        self.prompt("Enter amount to deposit: ")?;
        let amount = self.read_amount()?;

        match self.service.deposit(&number, amount) {
            Ok(balance) => writeln!(
                self.output,
                "Deposit successful! New balance: ${}",
                format_amount(balance)
            )?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn withdraw(&mut self) -> Result<()> {
        self.prompt("Enter account number to withdraw from: ")?;
        let number = self.read_token()?;

        self.prompt("Enter amount to withdraw: ")?;
        let amount = self.read_amount()?;

        match self.service.withdraw(&number, amount) {
            Ok(balance) => writeln!(
                self.output,
                "Withdrawal successful! New balance: ${}",
                format_amount(balance)
            )?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn rename_holder(&mut self) -> Result<()> {
        self.prompt("Enter account number to update: ")?;
        let number = self.read_token()?;

        self.prompt("Enter new account holder name: ")?;
        let name = self.read_line()?;

        match self.service.rename_holder(&number, &name) {
            Ok(()) => writeln!(self.output, "Account holder name updated successfully.")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush().context("failed to flush output")?;
        Ok(())
    }

    /// Read one line, stripped of its trailing newline. Leading and interior
    /// whitespace is preserved (holder names are free text).
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if bytes == 0 {
            bail!("input ended before the session was exited");
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Read a single whitespace-delimited token, skipping blank lines.
    /// Anything after the token on the same line is discarded.
    fn read_token(&mut self) -> Result<String> {
        loop {
            let line = self.read_line()?;
            if let Some(token) = line.split_whitespace().next() {
                return Ok(token.to_string());
            }
        }
    }

    /// Read an amount, re-prompting indefinitely on malformed input.
    /// A failed parse discards the whole line, trailing garbage included.
    fn read_amount(&mut self) -> Result<Amount> {
        loop {
            let line = self.read_line()?;
            match parse_amount(&line) {
                Ok(amount) => return Ok(amount),
                Err(_) => self.prompt("Invalid input. Enter a number: ")?,
            }
        }
    }

    /// Read an integer menu choice with the same retry behavior as amounts.
    fn read_choice(&mut self) -> Result<i64> {
        loop {
            let line = self.read_line()?;
            match line.trim().parse() {
                Ok(choice) => return Ok(choice),
                Err(_) => self.prompt("Invalid input. Enter a number: ")?,
            }
        }
    }
}
