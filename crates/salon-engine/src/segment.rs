//! Assign marketing segments to customers from their transaction history.
//!
//! Deterministic replacement for the categorization prompt: segments are
//! derived from total spend, visit count, and recency. First matching rule
//! wins; rules are checked in the order listed on [`categorize_customers`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment state of a single sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

/// One past sale on a customer's account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub total: f64,
    pub date: DateTime<Utc>,
    pub payment_status: PaymentStatus,
}

/// A customer with their service and transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub id: String,
    pub name: String,
    /// Services the customer has received. Not used by segmentation.
    #[serde(default)]
    pub service_history: Vec<String>,
    pub transactions: Vec<Transaction>,
}

/// Marketing segment labels, matching the categories the front office uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    #[serde(rename = "VIP")]
    Vip,
    Loyal,
    New,
    #[serde(rename = "At-Risk")]
    AtRisk,
    Occasional,
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Segment::Vip => "VIP",
            Segment::Loyal => "Loyal",
            Segment::New => "New",
            Segment::AtRisk => "At-Risk",
            Segment::Occasional => "Occasional",
        };
        f.write_str(label)
    }
}

/// A segment assignment with its explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSegment {
    pub customer_id: String,
    pub category: Segment,
    pub reason: String,
}

/// Spend threshold for the VIP segment.
const VIP_MIN_SPEND: f64 = 500.0;
/// Visit threshold for the VIP segment.
const VIP_MIN_VISITS: usize = 5;
/// A customer with at most this many visits can still count as New.
const NEW_MAX_VISITS: usize = 2;
/// Days since the last visit beyond which a regular becomes At-Risk.
const AT_RISK_LAPSE_DAYS: i64 = 90;
/// Visit threshold for the At-Risk and Loyal segments.
const REGULAR_MIN_VISITS: usize = 3;
const LOYAL_MIN_VISITS: usize = 4;
/// A Loyal customer's last visit must be within this many days.
const LOYAL_RECENCY_DAYS: i64 = 60;

/// Categorize customers, one output per input in input order.
///
/// `as_of` is the evaluation instant for recency; passing it in keeps runs
/// reproducible. Rules, first match wins:
///
/// 1. no transactions → `New`;
/// 2. spend ≥ 500 and ≥ 5 visits → `Vip`;
/// 3. ≤ 2 visits, the last within 90 days → `New`;
/// 4. ≥ 3 visits, the last more than 90 days ago → `AtRisk`;
/// 5. ≥ 4 visits, the last within 60 days → `Loyal`;
/// 6. otherwise → `Occasional`.
pub fn categorize_customers(
    customers: &[CustomerRecord],
    as_of: DateTime<Utc>,
) -> Vec<CustomerSegment> {
    customers
        .iter()
        .map(|customer| categorize(customer, as_of))
        .collect()
}

fn categorize(customer: &CustomerRecord, as_of: DateTime<Utc>) -> CustomerSegment {
    let visits = customer.transactions.len();
    let total_spend: f64 = customer.transactions.iter().map(|t| t.total).sum();
    let last_visit = customer.transactions.iter().map(|t| t.date).max();

    let (category, reason) = match last_visit {
        None => (
            Segment::New,
            "no recorded visits yet".to_string(),
        ),
        Some(last) => {
            let days_since = (as_of - last).num_days();
            let summary = format!(
                "spent ${:.2} across {} visit(s), last visit {} day(s) ago",
                total_spend, visits, days_since
            );
            if total_spend >= VIP_MIN_SPEND && visits >= VIP_MIN_VISITS {
                (Segment::Vip, summary)
            } else if visits <= NEW_MAX_VISITS && days_since <= AT_RISK_LAPSE_DAYS {
                (Segment::New, summary)
            } else if visits >= REGULAR_MIN_VISITS && days_since > AT_RISK_LAPSE_DAYS {
                (Segment::AtRisk, summary)
            } else if visits >= LOYAL_MIN_VISITS && days_since <= LOYAL_RECENCY_DAYS {
                (Segment::Loyal, summary)
            } else {
                (Segment::Occasional, summary)
            }
        }
    };

    CustomerSegment {
        customer_id: customer.id.clone(),
        category,
        reason,
    }
}
