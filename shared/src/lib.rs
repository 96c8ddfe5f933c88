use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relation of the account holder to the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    Dad,
    Mom,
    Grandfather,
    Grandmother,
    Guardian,
}

impl Relation {
    /// All selectable relations, in the order the form presents them.
    pub const ALL: [Relation; 5] = [
        Relation::Dad,
        Relation::Mom,
        Relation::Grandfather,
        Relation::Grandmother,
        Relation::Guardian,
    ];
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Relation::Dad => "Dad",
            Relation::Mom => "Mom",
            Relation::Grandfather => "Grandfather",
            Relation::Grandmother => "Grandmother",
            Relation::Guardian => "Guardian",
        };
        write!(f, "{}", label)
    }
}

/// A parent/guardian profile as it crosses the profile API boundary.
///
/// Absence of a profile is represented as `Option::<ProfileRecord>::None`,
/// never as a record with empty fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    pub email: String,
    /// Mobile number. Display-formatted (e.g. "99999 88888") when it arrives
    /// from the remote fetch, bare 10 digits when committed from the form.
    pub mobile: String,
    pub relation: Relation,
}

/// Gender selection for a kid profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Girl,
    Boy,
}

impl Default for Gender {
    fn default() -> Self {
        Self::Girl
    }
}

/// Content language selection for a kid profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    Hinglish,
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

/// A child's profile as committed by the kid profile form.
///
/// The date of birth is kept as a calendar date and serializes as an
/// ISO-8601 `YYYY-MM-DD` string, so age derivation stays deterministic
/// regardless of what the date widget hands us.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KidProfileRecord {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub language: Language,
}

/// Whether an order was a one-off product purchase or a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Product,
    Subscription,
}

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Placed,
    Confirmed,
    Shipped,
    Delivered,
}

/// One step in an order's fulfilment timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub label: String,
    /// Human-readable timestamp, e.g. "12 Dec, 10:30 AM".
    pub date: String,
}

/// Shipping address block shown on the order details screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingDetails {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Payment breakdown shown on the order details screen. Amounts are
/// whole rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub method: String,
    pub total: i64,
    pub discount: i64,
    pub delivery: i64,
}

/// A past order in the account's order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order ID in format: "ORD-<number>"
    pub id: String,
    pub kind: OrderKind,
    pub title: String,
    pub image: String,
    pub status: OrderStatus,
    /// Order date, ISO-8601.
    pub date: NaiveDate,
    /// Amount paid, whole rupees.
    pub amount: i64,
    pub timeline: Vec<TimelineEntry>,
    pub shipping: ShippingDetails,
    pub payment: PaymentSummary,
}

/// A radio channel in the static channel catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioChannel {
    pub id: String,
    pub title: String,
    pub subtitle: String,
}
