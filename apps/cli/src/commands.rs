use anyhow::Context;

use fintrack_core::loans::{LoanInput, LoanServiceTrait, LoanTerms};
use fintrack_core::session::{AuthServiceTrait, Gender, LoginCredentials, NewUser};
use fintrack_core::transactions::{TransactionInput, TransactionServiceTrait};

use crate::cli::{Cli, Command, IncomeCommand, LoanArgs, LoanCommand, TransactionArgs};
use crate::main_lib::AppState;
use crate::render;

pub async fn run(state: &AppState, cli: Cli) -> anyhow::Result<()> {
    let json = cli.json;
    match cli.command {
        Command::Calc(terms) => {
            let derived = LoanTerms::from_raw(
                terms.amount.as_deref(),
                terms.duration.as_deref(),
                terms.rate.as_deref(),
                terms.paid.as_deref(),
            )
            .derive();
            print(json, &derived, render::loan_derived)
        }
        Command::Login { username, password } => {
            let session = state
                .auth_service
                .login(LoginCredentials { username, password })
                .await?;
            println!("FINTRACK_TOKEN={}", session.token);
            println!("FINTRACK_ROLE={}", session.role);
            Ok(())
        }
        Command::Register {
            username,
            email,
            password,
            role,
            gender,
        } => {
            let new_user = NewUser {
                username,
                email,
                password,
                role: role.parse()?,
                gender: parse_gender(&gender)?,
            };
            state.auth_service.register(new_user).await?;
            println!("User created! Please login.");
            Ok(())
        }
        Command::Loans(command) => run_loans(state, json, command).await,
        Command::Income(command) => run_income(state, json, command).await,
        Command::Overview => {
            let session = state.session()?;
            let (transactions, loans) = futures::try_join!(
                state.transaction_service.get_transaction_summary(session),
                state.loan_service.get_loan_summary(session),
            )?;
            if json {
                println!(
                    "{}",
                    render::json(&serde_json::json!({
                        "transactions": transactions,
                        "loans": loans,
                    }))?
                );
            } else {
                println!("{}", render::transaction_summary(&transactions));
                println!();
                println!("{}", render::loan_summary(&loans));
            }
            Ok(())
        }
    }
}

async fn run_loans(state: &AppState, json: bool, command: LoanCommand) -> anyhow::Result<()> {
    let session = state.session()?;
    let service = &state.loan_service;
    match command {
        LoanCommand::List => {
            let loans = service.get_loans(session).await?;
            if json {
                println!("{}", render::json(&render::loan_views(&loans))?);
            } else {
                println!("{}", render::loan_table(&loans));
            }
            Ok(())
        }
        LoanCommand::Summary => {
            let summary = service.get_loan_summary(session).await?;
            print(json, &summary, render::loan_summary)
        }
        LoanCommand::Add(args) => {
            let loan = service.create_loan(session, loan_input(args)).await?;
            println!("Created loan '{}'", loan.name);
            print(json, &loan.terms().derive(), render::loan_derived)
        }
        LoanCommand::Update { id, loan } => {
            let loan = service.update_loan(session, &id, loan_input(loan)).await?;
            println!("Updated loan {}", id);
            print(json, &loan.terms().derive(), render::loan_derived)
        }
        LoanCommand::Delete { id } => {
            service.delete_loan(session, &id).await?;
            println!("Deleted loan {}", id);
            Ok(())
        }
    }
}

async fn run_income(state: &AppState, json: bool, command: IncomeCommand) -> anyhow::Result<()> {
    let session = state.session()?;
    let service = &state.transaction_service;
    match command {
        IncomeCommand::List => {
            let transactions = service.get_transactions(session).await?;
            print(json, transactions.as_slice(), render::transaction_table)
        }
        IncomeCommand::Summary => {
            let summary = service.get_transaction_summary(session).await?;
            print(json, &summary, render::transaction_summary)
        }
        IncomeCommand::Add(args) => {
            let created = service
                .create_transaction(session, transaction_input(args))
                .await?;
            println!("Saved {} of {}", created.transaction_type, created.amount);
            Ok(())
        }
        IncomeCommand::Update { id, transaction } => {
            service
                .update_transaction(session, &id, transaction_input(transaction))
                .await?;
            println!("Updated entry {}", id);
            Ok(())
        }
        IncomeCommand::Delete { id } => {
            service.delete_transaction(session, &id).await?;
            println!("Deleted entry {}", id);
            Ok(())
        }
    }
}

fn print<T, F>(json: bool, value: &T, text: F) -> anyhow::Result<()>
where
    T: serde::Serialize + ?Sized,
    F: Fn(&T) -> String,
{
    if json {
        println!("{}", render::json(value)?);
    } else {
        println!("{}", text(value));
    }
    Ok(())
}

fn loan_input(args: LoanArgs) -> LoanInput {
    LoanInput {
        name: args.name,
        amount: args.terms.amount.unwrap_or_default(),
        duration: args.terms.duration.unwrap_or_default(),
        interest_rate: args.terms.rate.unwrap_or_default(),
        paid_amount: args.terms.paid.unwrap_or_default(),
    }
}

fn transaction_input(args: TransactionArgs) -> TransactionInput {
    TransactionInput {
        transaction_type: args.transaction_type,
        amount: args.amount,
        description: args.description.unwrap_or_default(),
    }
}

fn parse_gender(value: &str) -> anyhow::Result<Gender> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_ascii_lowercase()))
        .with_context(|| format!("unknown gender '{}'", value))
}
