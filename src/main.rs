mod account;
mod directory;
mod error;
mod store;

use account::AccountKind;
use directory::AccountDirectory;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use store::AccountStore;

const DEFAULT_STORE_PATH: &str = "accounts.txt";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string());
    let mut directory = AccountDirectory::open(AccountStore::new(path));

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut input, "Choose an option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => create_account(&mut directory, &mut input)?,
            "2" => deposit(&mut directory, &mut input)?,
            "3" => withdraw(&mut directory, &mut input)?,
            "4" => check_balance(&directory, &mut input)?,
            "5" => list_accounts(&directory),
            "6" => {
                println!("Thank you for using the system.");
                break;
            }
            _ => println!("Invalid choice. Try again."),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("==== BANK MANAGEMENT SYSTEM ====");
    println!("1. Create Account");
    println!("2. Deposit");
    println!("3. Withdraw");
    println!("4. Check Balance");
    println!("5. Show All Accounts");
    println!("6. Exit");
}

fn create_account(directory: &mut AccountDirectory, input: &mut impl BufRead) -> io::Result<()> {
    let Some(number) = prompt(input, "Enter Account Number: ")? else {
        return Ok(());
    };
    let Some(holder) = prompt(input, "Enter Holder Name: ")? else {
        return Ok(());
    };
    let Some(kind) = prompt(input, "Account Type (Savings/Current): ")? else {
        return Ok(());
    };

    match directory.create_account(&number, &holder, AccountKind::from_label(&kind)) {
        Ok(()) => println!("Account created successfully."),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn deposit(directory: &mut AccountDirectory, input: &mut impl BufRead) -> io::Result<()> {
    let Some(number) = prompt(input, "Enter Account Number: ")? else {
        return Ok(());
    };
    let Some(amount) = prompt_amount(input, "Enter Amount to Deposit: ")? else {
        return Ok(());
    };

    match directory.deposit(&number, amount) {
        Ok(()) => println!(
            "Deposited {:.2} successfully into account {number}.",
            amount.round_dp(2)
        ),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn withdraw(directory: &mut AccountDirectory, input: &mut impl BufRead) -> io::Result<()> {
    let Some(number) = prompt(input, "Enter Account Number: ")? else {
        return Ok(());
    };
    let Some(amount) = prompt_amount(input, "Enter Amount to Withdraw: ")? else {
        return Ok(());
    };

    match directory.withdraw(&number, amount) {
        Ok(()) => println!(
            "Withdrawn {:.2} successfully from account {number}.",
            amount.round_dp(2)
        ),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn check_balance(directory: &AccountDirectory, input: &mut impl BufRead) -> io::Result<()> {
    let Some(number) = prompt(input, "Enter Account Number: ")? else {
        return Ok(());
    };

    match directory.balance(&number) {
        Ok(account) => println!("{account}"),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn list_accounts(directory: &AccountDirectory) {
    if directory.is_empty() {
        println!("No accounts found.");
        return;
    }

    for account in directory.accounts() {
        println!("{account}");
    }
}

/// Prints the prompt and reads one trimmed line; `None` means end of input.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_amount(input: &mut impl BufRead, label: &str) -> io::Result<Option<Decimal>> {
    let Some(text) = prompt(input, label)? else {
        return Ok(None);
    };

    match text.parse::<Decimal>() {
        Ok(amount) => Ok(Some(amount)),
        Err(_) => {
            println!("Invalid amount.");
            Ok(None)
        }
    }
}
