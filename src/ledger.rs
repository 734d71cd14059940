//! The in-memory state store and its core data models.
//!
//! The [Ledger] owns the two collections that back every view in the app:
//! the ordered transaction sequence and the per-category budget list. The two
//! are maintained independently: a transaction's category need not have a
//! budget entry, and a budgeted category need not have any transactions.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// The integer type used for transaction identifiers.
pub type TransactionId = i64;

/// The number of records removed by a delete operation.
pub type RowsAffected = usize;

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// Leading and trailing whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is an
    /// empty string.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because
    /// if the non-empty invariant is violated it will cause incorrect
    /// behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Immutable once created; the only way to get rid of one is to delete it by
/// its identifier. To create a new `Transaction`, pass a [TransactionDraft]
/// to [Ledger::add_transaction].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the ledger at insertion.
    pub id: TransactionId,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The category the transaction belongs to, e.g. "Groceries", "Rent".
    pub category: CategoryName,
}

impl Transaction {
    /// Create a draft for a new transaction.
    ///
    /// Shortcut for [TransactionDraft] for discoverability.
    pub fn draft(
        amount: f64,
        date: Date,
        description: &str,
        category: CategoryName,
    ) -> TransactionDraft {
        TransactionDraft {
            amount,
            date,
            description: description.to_owned(),
            category,
        }
    }
}

/// A transaction that has not been added to the ledger yet, i.e. everything
/// except the identifier.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionDraft {
    /// The monetary amount of the transaction.
    pub amount: f64,
    /// The date when the transaction occurred.
    pub date: Date,
    /// A human-readable description of the transaction.
    pub description: String,
    /// The category the transaction belongs to.
    pub category: CategoryName,
}

/// A user-set monthly spending ceiling for one category.
///
/// A category has at most one budget at a time; setting it again overwrites
/// the amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The category the budget applies to.
    pub category: CategoryName,
    /// The budgeted amount per month.
    pub amount: f64,
}

/// The in-memory state store.
///
/// Owns the ordered transaction sequence and the budget list. All mutation
/// goes through [Ledger::add_transaction], [Ledger::delete_transaction] and
/// [Ledger::set_budget]; views read snapshots via the accessors.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    next_transaction_id: TransactionId,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transaction to the end of the sequence and return the stored
    /// record.
    ///
    /// The new transaction gets the next identifier from a monotonic,
    /// per-ledger counter, so identifiers are unique and strictly increasing
    /// in insertion order.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Transaction {
        self.next_transaction_id += 1;

        let transaction = Transaction {
            id: self.next_transaction_id,
            amount: draft.amount,
            date: draft.date,
            description: draft.description,
            category: draft.category,
        };

        self.transactions.push(transaction.clone());

        transaction
    }

    /// Remove the transaction whose identifier matches `id`.
    ///
    /// Returns the number of records removed: 1 when the identifier was
    /// found, 0 when it was absent (deleting a missing transaction is a
    /// no-op). The relative order of the remaining transactions is unchanged.
    pub fn delete_transaction(&mut self, id: TransactionId) -> RowsAffected {
        let count_before = self.transactions.len();
        self.transactions.retain(|transaction| transaction.id != id);

        count_before - self.transactions.len()
    }

    /// Set the budget for `category` to `amount`.
    ///
    /// Overwrites the existing entry if the category already has a budget,
    /// keeping its position in the list, and appends a new entry otherwise.
    pub fn set_budget(&mut self, category: CategoryName, amount: f64) {
        match self
            .budgets
            .iter_mut()
            .find(|budget| budget.category == category)
        {
            Some(budget) => budget.amount = amount,
            None => self.budgets.push(Budget { category, amount }),
        }
    }

    /// The transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The budgets in the order their categories were first set.
    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }
}


#[cfg(test)]
mod ledger_tests {
    use time::macros::date;

    use crate::ledger::{Budget, CategoryName, Ledger, Transaction};

    fn food() -> CategoryName {
        CategoryName::new_unchecked("Food")
    }

    fn rent() -> CategoryName {
        CategoryName::new_unchecked("Rent")
    }

    #[test]
    fn add_appends_in_order_with_unique_ids() {
        let mut ledger = Ledger::new();

        let first = ledger.add_transaction(Transaction::draft(
            100.0,
            date!(2024 - 01 - 01),
            "Groceries",
            food(),
        ));
        let second = ledger.add_transaction(Transaction::draft(
            50.0,
            date!(2024 - 01 - 15),
            "Takeaway",
            food(),
        ));

        assert_eq!(ledger.transactions(), &[first.clone(), second.clone()]);
        assert!(
            second.id > first.id,
            "want strictly increasing ids, got {} then {}",
            first.id,
            second.id
        );
    }

    #[test]
    fn delete_removes_only_the_matching_record() {
        let mut ledger = Ledger::new();
        let first =
            ledger.add_transaction(Transaction::draft(1.0, date!(2024 - 01 - 01), "a", food()));
        let second =
            ledger.add_transaction(Transaction::draft(2.0, date!(2024 - 01 - 02), "b", rent()));
        let third =
            ledger.add_transaction(Transaction::draft(3.0, date!(2024 - 01 - 03), "c", food()));

        let rows_affected = ledger.delete_transaction(second.id);

        assert_eq!(rows_affected, 1);
        assert_eq!(ledger.transactions(), &[first, third]);
    }

    #[test]
    fn delete_missing_id_is_a_no_op() {
        let mut ledger = Ledger::new();
        let transaction =
            ledger.add_transaction(Transaction::draft(1.0, date!(2024 - 01 - 01), "a", food()));

        let rows_affected = ledger.delete_transaction(transaction.id + 42);

        assert_eq!(rows_affected, 0);
        assert_eq!(ledger.transactions(), &[transaction]);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut ledger = Ledger::new();
        let first =
            ledger.add_transaction(Transaction::draft(1.0, date!(2024 - 01 - 01), "a", food()));
        ledger.delete_transaction(first.id);

        let second =
            ledger.add_transaction(Transaction::draft(2.0, date!(2024 - 01 - 02), "b", food()));

        assert!(second.id > first.id);
    }

    #[test]
    fn set_budget_overwrites_existing_entry() {
        let mut ledger = Ledger::new();

        ledger.set_budget(food(), 100.0);
        ledger.set_budget(rent(), 200.0);
        ledger.set_budget(food(), 150.0);

        assert_eq!(
            ledger.budgets(),
            &[
                Budget {
                    category: food(),
                    amount: 150.0
                },
                Budget {
                    category: rent(),
                    amount: 200.0
                },
            ]
        );
    }

    #[test]
    fn budgets_and_transactions_are_independent() {
        let mut ledger = Ledger::new();
        ledger.add_transaction(Transaction::draft(25.0, date!(2024 - 03 - 05), "Bus", food()));

        ledger.set_budget(rent(), 500.0);

        assert_eq!(ledger.transactions().len(), 1);
        assert_eq!(ledger.budgets().len(), 1);
        assert_eq!(ledger.budgets()[0].category, rent());
    }
}
