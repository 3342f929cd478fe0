//! Built-in demo figures.
//!
//! All dashboard content is compiled-in sample data, read-only at runtime.
//! There are no create/update/delete operations anywhere in the app.

/// One day of cash flow. Amounts are non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySample {
    pub day: &'static str,
    pub income: f64,
    pub expenses: f64,
}

/// One week of flow, Monday through Sunday.
pub const WEEK_FLOW: &[DaySample] = &[
    DaySample { day: "Mon", income: 4000.0, expenses: 2400.0 },
    DaySample { day: "Tue", income: 3000.0, expenses: 1398.0 },
    DaySample { day: "Wed", income: 2000.0, expenses: 9800.0 },
    DaySample { day: "Thu", income: 2780.0, expenses: 3908.0 },
    DaySample { day: "Fri", income: 1890.0, expenses: 4800.0 },
    DaySample { day: "Sat", income: 2390.0, expenses: 3800.0 },
    DaySample { day: "Sun", income: 3490.0, expenses: 4300.0 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transaction {
    pub name: &'static str,
    pub category: &'static str,
    /// Signed amount; the sign agrees with `kind`.
    pub amount: f64,
    pub when: &'static str,
    pub kind: TxKind,
}

pub const TRANSACTIONS: &[Transaction] = &[
    Transaction {
        name: "Apple Store",
        category: "Electronics",
        amount: -999.00,
        when: "Just now",
        kind: TxKind::Expense,
    },
    Transaction {
        name: "Salary Deposit",
        category: "Work",
        amount: 8500.00,
        when: "2 hours ago",
        kind: TxKind::Income,
    },
    Transaction {
        name: "Netflix",
        category: "Subscription",
        amount: -15.99,
        when: "Yesterday",
        kind: TxKind::Expense,
    },
    Transaction {
        name: "Starbucks",
        category: "Food",
        amount: -12.40,
        when: "Yesterday",
        kind: TxKind::Expense,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Headline figure for one stat card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub title: &'static str,
    pub value: f64,
    pub change_pct: f64,
    pub trend: Trend,
}

pub const STATS: &[Stat] = &[
    Stat { title: "Total Balance", value: 48250.00, change_pct: 12.5, trend: Trend::Up },
    Stat { title: "Monthly Income", value: 12400.00, change_pct: 8.2, trend: Trend::Up },
    Stat { title: "Monthly Expense", value: 3820.00, change_pct: 2.4, trend: Trend::Down },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_has_seven_days() {
        assert_eq!(WEEK_FLOW.len(), 7);
        assert_eq!(WEEK_FLOW[0].day, "Mon");
        assert_eq!(WEEK_FLOW[6].day, "Sun");
    }

    #[test]
    fn test_flow_amounts_are_non_negative() {
        for sample in WEEK_FLOW {
            assert!(sample.income >= 0.0);
            assert!(sample.expenses >= 0.0);
        }
    }

    #[test]
    fn test_transaction_sign_agrees_with_kind() {
        for tx in TRANSACTIONS {
            match tx.kind {
                TxKind::Income => assert!(tx.amount > 0.0, "{} should be positive", tx.name),
                TxKind::Expense => assert!(tx.amount < 0.0, "{} should be negative", tx.name),
            }
            assert!(!tx.name.is_empty());
            assert!(!tx.category.is_empty());
            assert!(!tx.when.is_empty());
        }
    }

    #[test]
    fn test_stats_are_populated() {
        assert_eq!(STATS.len(), 3);
        for stat in STATS {
            assert!(!stat.title.is_empty());
            assert!(stat.value >= 0.0);
        }
    }
}
