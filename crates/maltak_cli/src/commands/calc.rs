//! Calculator subcommands.

use super::CliError;
use clap::Subcommand;
use maltak_api::Calculation;
use maltak_core::calculator::{BudgetInput, Expense, LoanInput, SavingsInput};

/// A calculator and its inputs.
#[derive(Subcommand)]
pub enum CalcCommand {
    /// Monthly installment of a fixed-rate loan
    Loan {
        /// Amount borrowed
        #[arg(short, long)]
        principal: f64,

        /// Annual interest rate in percent
        #[arg(short, long)]
        rate: f64,

        /// Term in years
        #[arg(short, long)]
        years: u32,
    },

    /// Future value of a savings plan
    Savings {
        /// Starting balance
        #[arg(short, long, default_value = "0")]
        initial: f64,

        /// Monthly deposit
        #[arg(short, long, default_value = "0")]
        monthly: f64,

        /// Annual return in percent
        #[arg(short, long)]
        rate: f64,

        /// Horizon in years
        #[arg(short, long)]
        years: u32,
    },

    /// Monthly budget breakdown
    Budget {
        /// Monthly income
        #[arg(short, long)]
        income: f64,

        /// Expense line as LABEL=AMOUNT, repeatable
        #[arg(short, long = "expense", value_parser = parse_expense)]
        expenses: Vec<Expense>,
    },
}

impl CalcCommand {
    /// Converts the parsed arguments into a calculator request.
    pub fn into_calculation(self) -> Calculation {
        match self {
            CalcCommand::Loan {
                principal,
                rate,
                years,
            } => Calculation::Loan(LoanInput {
                principal,
                annual_rate_percent: rate,
                years,
            }),
            CalcCommand::Savings {
                initial,
                monthly,
                rate,
                years,
            } => Calculation::Savings(SavingsInput {
                initial_amount: initial,
                monthly_contribution: monthly,
                annual_rate_percent: rate,
                years,
            }),
            CalcCommand::Budget { income, expenses } => {
                Calculation::Budget(BudgetInput { income, expenses })
            }
        }
    }
}

/// Parses `LABEL=AMOUNT`.
pub fn parse_expense(arg: &str) -> Result<Expense, CliError> {
    let (label, amount) = arg
        .split_once('=')
        .ok_or_else(|| CliError::InvalidArgument(format!("expected LABEL=AMOUNT, got {arg:?}")))?;
    let amount = amount
        .trim()
        .parse::<f64>()
        .map_err(|e| CliError::InvalidArgument(format!("amount for {label:?}: {e}")))?;
    Ok(Expense {
        label: label.trim().to_string(),
        amount,
    })
}
