//! Financial calculators behind the seeded tools.
//!
//! - `loan-calculator`: fixed-rate amortized monthly payment
//! - `savings-calculator`: future value with monthly compounding
//! - `budget-planner`: monthly income against itemized expenses
//!
//! Rates are annual percentages (`5.0` means 5%) compounded monthly.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

const MONTHS_PER_YEAR: f64 = 12.0;

fn ensure_non_negative(value: f64, field: &str) -> CoreResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::invalid_input(format!(
            "{field} must be a non-negative number"
        )))
    }
}

fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / MONTHS_PER_YEAR
}

/// Loan terms.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanInput {
    /// Amount borrowed.
    pub principal: f64,
    /// Annual interest rate in percent.
    pub annual_rate_percent: f64,
    /// Term in years.
    pub years: u32,
}

/// Result of [`loan`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanQuote {
    /// Fixed monthly installment.
    pub monthly_payment: f64,
    /// Sum of all installments.
    pub total_payment: f64,
    /// Total paid above the principal.
    pub total_interest: f64,
}

/// Computes the installment of a fixed-rate amortized loan.
///
/// A zero rate splits the principal evenly over the term.
///
/// # Errors
///
/// Returns `CoreError::InvalidInput` for a zero term or negative amounts.
pub fn loan(input: LoanInput) -> CoreResult<LoanQuote> {
    ensure_non_negative(input.principal, "principal")?;
    ensure_non_negative(input.annual_rate_percent, "annualRatePercent")?;
    if input.years == 0 {
        return Err(CoreError::invalid_input("years must be at least 1"));
    }

    let payments = f64::from(input.years) * MONTHS_PER_YEAR;
    let rate = monthly_rate(input.annual_rate_percent);

    if rate == 0.0 {
        return Ok(LoanQuote {
            monthly_payment: input.principal / payments,
            total_payment: input.principal,
            total_interest: 0.0,
        });
    }

    let growth = (1.0 + rate).powf(payments);
    let monthly_payment = input.principal * growth * rate / (growth - 1.0);
    let total_payment = monthly_payment * payments;

    Ok(LoanQuote {
        monthly_payment,
        total_payment,
        total_interest: total_payment - input.principal,
    })
}

/// Savings plan.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsInput {
    /// Starting balance.
    pub initial_amount: f64,
    /// Deposit at the end of every month.
    pub monthly_contribution: f64,
    /// Annual return in percent.
    pub annual_rate_percent: f64,
    /// Horizon in years.
    pub years: u32,
}

/// Result of [`savings`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsProjection {
    /// Balance at the end of the horizon.
    pub future_value: f64,
    /// Starting balance plus all deposits.
    pub total_contributions: f64,
    /// Growth earned on top of contributions.
    pub total_interest: f64,
}

/// Projects the future value of a savings plan.
///
/// # Errors
///
/// Returns `CoreError::InvalidInput` for negative amounts.
pub fn savings(input: SavingsInput) -> CoreResult<SavingsProjection> {
    ensure_non_negative(input.initial_amount, "initialAmount")?;
    ensure_non_negative(input.monthly_contribution, "monthlyContribution")?;
    ensure_non_negative(input.annual_rate_percent, "annualRatePercent")?;

    let periods = f64::from(input.years) * MONTHS_PER_YEAR;
    let rate = monthly_rate(input.annual_rate_percent);
    let total_contributions = input.initial_amount + input.monthly_contribution * periods;

    let future_value = if rate == 0.0 {
        total_contributions
    } else {
        let growth = (1.0 + rate).powf(periods);
        input.initial_amount * growth + input.monthly_contribution * (growth - 1.0) / rate
    };

    Ok(SavingsProjection {
        future_value,
        total_contributions,
        total_interest: future_value - total_contributions,
    })
}

/// One budget line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Expense {
    /// Line label, e.g. `"housing"`.
    pub label: String,
    /// Monthly amount.
    pub amount: f64,
}

/// Monthly budget.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BudgetInput {
    /// Monthly income.
    pub income: f64,
    /// Itemized monthly expenses.
    pub expenses: Vec<Expense>,
}

/// Share of income taken by one expense line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseShare {
    /// Line label.
    pub label: String,
    /// Monthly amount.
    pub amount: f64,
    /// Percentage of income, 0 when income is 0.
    pub percent_of_income: f64,
}

/// Result of [`budget`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    /// Sum of all expense lines.
    pub total_expenses: f64,
    /// Income minus expenses; negative means overspending.
    pub balance: f64,
    /// Per-line breakdown, in input order.
    pub shares: Vec<ExpenseShare>,
}

/// Summarizes a monthly budget.
///
/// # Errors
///
/// Returns `CoreError::InvalidInput` for negative income or expenses.
pub fn budget(input: &BudgetInput) -> CoreResult<BudgetSummary> {
    ensure_non_negative(input.income, "income")?;
    for expense in &input.expenses {
        ensure_non_negative(expense.amount, &expense.label)?;
    }

    let total_expenses: f64 = input.expenses.iter().map(|e| e.amount).sum();
    let shares = input
        .expenses
        .iter()
        .map(|e| ExpenseShare {
            label: e.label.clone(),
            amount: e.amount,
            percent_of_income: if input.income > 0.0 {
                e.amount / input.income * 100.0
            } else {
                0.0
            },
        })
        .collect();

    Ok(BudgetSummary {
        total_expenses,
        balance: input.income - total_expenses,
        shares,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn loan_known_figure() {
        let quote = loan(LoanInput {
            principal: 100_000.0,
            annual_rate_percent: 5.0,
            years: 5,
        })
        .unwrap();
        assert!(close(quote.monthly_payment, 1887.12), "{quote:?}");
        assert!(close(quote.total_payment, quote.monthly_payment * 60.0));
        assert!(close(quote.total_interest, quote.total_payment - 100_000.0));
    }

    #[test]
    fn loan_zero_rate_splits_evenly() {
        let quote = loan(LoanInput {
            principal: 12_000.0,
            annual_rate_percent: 0.0,
            years: 1,
        })
        .unwrap();
        assert!(close(quote.monthly_payment, 1000.0));
        assert!(close(quote.total_interest, 0.0));
    }

    #[test]
    fn loan_rejects_zero_term() {
        let err = loan(LoanInput {
            principal: 1.0,
            annual_rate_percent: 1.0,
            years: 0,
        })
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput { .. }));
    }

    #[test]
    fn loan_rejects_negative_principal() {
        assert!(loan(LoanInput {
            principal: -5.0,
            annual_rate_percent: 1.0,
            years: 1,
        })
        .is_err());
    }

    #[test]
    fn savings_zero_rate_is_plain_sum() {
        let p = savings(SavingsInput {
            initial_amount: 1000.0,
            monthly_contribution: 100.0,
            annual_rate_percent: 0.0,
            years: 2,
        })
        .unwrap();
        assert!(close(p.future_value, 3400.0));
        assert!(close(p.total_interest, 0.0));
    }

    #[test]
    fn savings_compounds() {
        let p = savings(SavingsInput {
            initial_amount: 10_000.0,
            monthly_contribution: 0.0,
            annual_rate_percent: 12.0,
            years: 1,
        })
        .unwrap();
        // 10000 * 1.01^12
        assert!(close(p.future_value, 11_268.25), "{p:?}");
        assert!(p.total_interest > 0.0);
    }

    #[test]
    fn budget_balance_and_shares() {
        let summary = budget(&BudgetInput {
            income: 10_000.0,
            expenses: vec![
                Expense {
                    label: "housing".into(),
                    amount: 3000.0,
                },
                Expense {
                    label: "food".into(),
                    amount: 2000.0,
                },
            ],
        })
        .unwrap();
        assert!(close(summary.total_expenses, 5000.0));
        assert!(close(summary.balance, 5000.0));
        assert!(close(summary.shares[0].percent_of_income, 30.0));
    }

    #[test]
    fn budget_zero_income_has_zero_shares() {
        let summary = budget(&BudgetInput {
            income: 0.0,
            expenses: vec![Expense {
                label: "food".into(),
                amount: 50.0,
            }],
        })
        .unwrap();
        assert!(close(summary.balance, -50.0));
        assert!(close(summary.shares[0].percent_of_income, 0.0));
    }
}
