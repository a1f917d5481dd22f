//! Transaction display formatting
//!
//! Plain-text rendering of balances and transaction lists. Coloring is left
//! to the caller so these strings stay easy to test.

use crate::models::{Money, Transaction};

/// `Current Balance: $12.50`
pub fn format_balance(balance: Money, symbol: &str) -> String {
    format!("Current Balance: {}", balance.format_with_symbol(symbol))
}

/// One `description: $amount` line
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    format!(
        "{}: {}",
        txn.description,
        txn.amount.format_with_symbol(symbol)
    )
}

/// A `Transactions:` header followed by one row per transaction
pub fn format_transaction_list(transactions: &[Transaction], symbol: &str) -> String {
    let mut output = String::from("Transactions:\n");

    if transactions.is_empty() {
        output.push_str("(none)\n");
        return output;
    }

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_balance() {
        assert_eq!(
            format_balance(Money::from_cents(-2_050), "$"),
            "Current Balance: -$20.50"
        );
        assert_eq!(
            format_balance(Money::zero(), "€"),
            "Current Balance: €0.00"
        );
    }

    #[test]
    fn test_format_transaction_list() {
        let txns = vec![
            Transaction::new("Salary", Money::from_cents(100_000)),
            Transaction::new("Coffee", Money::from_cents(-375)),
        ];

        let output = format_transaction_list(&txns, "$");
        assert_eq!(
            output,
            "Transactions:\nSalary: $1000.00\nCoffee: -$3.75\n"
        );
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_transaction_list(&[], "$"), "Transactions:\n(none)\n");
    }
}
