use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fintrack", version, about = "Track income, expenses and loans")]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute interest, payable and remaining amounts without saving anything
    Calc(LoanTermsArgs),
    /// Log in and print the session variables to export
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Create a new account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "user")]
        role: String,
        #[arg(long, default_value = "male")]
        gender: String,
    },
    /// Manage loans
    #[command(subcommand)]
    Loans(LoanCommand),
    /// Manage income and expense entries
    #[command(subcommand)]
    Income(IncomeCommand),
    /// Income, expense and loan totals side by side
    Overview,
}

/// Loan fields exactly as typed; parsing happens in the core crate.
#[derive(Args, Debug, Clone)]
pub struct LoanTermsArgs {
    /// Principal borrowed
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<String>,
    /// Duration in months
    #[arg(long, allow_hyphen_values = true)]
    pub duration: Option<String>,
    /// Flat interest rate in percent per month
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<String>,
    /// Amount repaid so far
    #[arg(long, allow_hyphen_values = true)]
    pub paid: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct LoanArgs {
    #[arg(long)]
    pub name: String,
    #[command(flatten)]
    pub terms: LoanTermsArgs,
}

#[derive(Subcommand, Debug)]
pub enum LoanCommand {
    List,
    Summary,
    Add(LoanArgs),
    Update {
        id: String,
        #[command(flatten)]
        loan: LoanArgs,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct TransactionArgs {
    /// `income` or `expense`
    #[arg(long = "type", default_value = "income")]
    pub transaction_type: String,
    #[arg(long, allow_hyphen_values = true)]
    pub amount: String,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum IncomeCommand {
    List,
    Summary,
    Add(TransactionArgs),
    Update {
        id: String,
        #[command(flatten)]
        transaction: TransactionArgs,
    },
    Delete {
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_loan_add() {
        let cli = Cli::try_parse_from([
            "fintrack", "loans", "add", "--name", "Car", "--amount", "1000", "--duration", "12",
            "--rate", "2",
        ])
        .unwrap();

        match cli.command {
            Command::Loans(LoanCommand::Add(args)) => {
                assert_eq!(args.name, "Car");
                assert_eq!(args.terms.amount.as_deref(), Some("1000"));
                assert_eq!(args.terms.paid, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_income_type_flag() {
        let cli = Cli::try_parse_from([
            "fintrack", "--json", "income", "add", "--type", "expense", "--amount", "40",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Command::Income(IncomeCommand::Add(args)) => {
                assert_eq!(args.transaction_type, "expense");
                assert_eq!(args.amount, "40");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
