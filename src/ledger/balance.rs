//! The balance rule.

use crate::ledger::models::{Transaction, TransactionKind, TransactionStatus};

/// Calculate the balance of a sequence of transactions.
///
/// Credits add their amount to the balance and debits subtract it. A
/// transaction that carries a status only counts once it has posted; a
/// transaction without a status always counts.
///
/// This is a pure function: it is deterministic, has no side effects and
/// may be called repeatedly with identical results for identical input.
/// The result is the plain floating-point sum, no rounding is applied.
pub fn calculate_balance(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|transaction| {
            transaction
                .status
                .is_none_or(|status| status == TransactionStatus::Posted)
        })
        .map(|transaction| match transaction.kind {
            TransactionKind::Credit => transaction.amount,
            TransactionKind::Debit => -transaction.amount,
        })
        .sum()
}

#[cfg(test)]
mod calculate_balance_tests {
    use time::macros::date;

    use crate::{Transaction, TransactionKind, TransactionStatus};

    use super::calculate_balance;

    fn transaction(kind: TransactionKind, amount: f64) -> Transaction {
        Transaction::build(kind, amount, date!(2024 - 01 - 01), "")
            .finalise()
            .unwrap()
    }

    #[test]
    fn returns_zero_for_no_transactions() {
        assert_eq!(calculate_balance(&[]), 0.0);
    }

    #[test]
    fn a_single_credit_is_its_amount() {
        let transactions = [transaction(TransactionKind::Credit, 123.45)];

        assert_eq!(calculate_balance(&transactions), 123.45);
    }

    #[test]
    fn a_single_debit_is_its_negated_amount() {
        let transactions = [transaction(TransactionKind::Debit, 123.45)];

        assert_eq!(calculate_balance(&transactions), -123.45);
    }

    #[test]
    fn credits_add_and_debits_subtract() {
        let transactions = [
            transaction(TransactionKind::Credit, 1000.0),
            transaction(TransactionKind::Debit, 800.0),
        ];

        assert_eq!(calculate_balance(&transactions), 200.0);
    }

    #[test]
    fn balance_may_be_negative() {
        let transactions = [
            transaction(TransactionKind::Debit, 50.0),
            transaction(TransactionKind::Debit, 25.5),
        ];

        assert_eq!(calculate_balance(&transactions), -75.5);
    }

    #[test]
    fn matches_the_arithmetic_sum_for_many_transactions() {
        // A varied list with both kinds and uneven amounts.
        let mut transactions = Vec::new();
        let mut want = 0.0;

        for i in 1..=100 {
            let amount = i as f64 * 1.25;

            if i % 3 == 0 {
                transactions.push(transaction(TransactionKind::Debit, amount));
                want -= amount;
            } else {
                transactions.push(transaction(TransactionKind::Credit, amount));
                want += amount;
            }
        }

        assert_eq!(calculate_balance(&transactions), want);
    }

    #[test]
    fn pending_transactions_do_not_count() {
        let posted = Transaction::build(
            TransactionKind::Credit,
            100.0,
            date!(2024 - 01 - 01),
            "Cleared",
        )
        .status(TransactionStatus::Posted)
        .finalise()
        .unwrap();
        let pending = Transaction::build(
            TransactionKind::Debit,
            40.0,
            date!(2024 - 01 - 02),
            "Outstanding cheque",
        )
        .status(TransactionStatus::Pending)
        .finalise()
        .unwrap();
        let statusless = transaction(TransactionKind::Credit, 10.0);

        let balance = calculate_balance(&[posted, pending, statusless]);

        assert_eq!(balance, 110.0);
    }

    #[test]
    fn is_deterministic() {
        let transactions = [
            transaction(TransactionKind::Credit, 12.34),
            transaction(TransactionKind::Debit, 5.67),
        ];

        assert_eq!(
            calculate_balance(&transactions),
            calculate_balance(&transactions)
        );
    }
}
