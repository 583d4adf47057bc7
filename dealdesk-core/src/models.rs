//! Deal, document and spread data model
//!
//! Everything here lives in memory for the lifetime of the session. Client
//! records and spread rows are seeded literals; documents are created when a
//! simulated upload succeeds.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::upload::FileRef;

/// Greeting shown at the top of a fresh chat transcript.
pub const CHAT_GREETING: &str = "Hi there! How can I help you today?";

/// A document created by a successful simulated upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Local>,
}

impl Document {
    pub fn from_upload(file: &FileRef) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
            size_bytes: file.size_bytes,
            uploaded_at: Local::now(),
        }
    }
}

/// Preview of the most recent borrower message, shown in the client list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPreview {
    pub preview: String,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientDetails {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub loan_amount: i64,
    pub loan_type: String,
    pub property_value: i64,
    pub credit_score: u32,
}

/// A client/deal record in the agent console sidebar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub deal_id: String,
    pub email: String,
    pub recent_chat: Option<ChatPreview>,
    pub details: ClientDetails,
}

impl Client {
    /// Synthesize a deal record from a freshly uploaded application
    /// document. Loan fields are placeholders until intake fills them in.
    pub fn from_application(doc: &Document) -> Self {
        let deal_id = Local::now().timestamp_millis().to_string();
        let stem = doc
            .name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&doc.name);

        Self {
            id: deal_id.clone(),
            name: format!("New Application ({stem})"),
            deal_id,
            email: String::new(),
            recent_chat: Some(ChatPreview {
                preview: format!("Application received: {}", doc.name),
                timestamp: doc.uploaded_at,
            }),
            details: ClientDetails {
                email: String::new(),
                phone: String::new(),
                address: String::new(),
                loan_amount: 0,
                loan_type: "Pending intake".to_string(),
                property_value: 0,
                credit_score: 0,
            },
        }
    }
}

/// Seed client records for the console sidebar.
pub fn seed_clients() -> Vec<Client> {
    vec![
        Client {
            id: "119323096298".to_string(),
            name: "Harry Clare".to_string(),
            deal_id: "119323096298".to_string(),
            email: "harry@example.com".to_string(),
            recent_chat: Some(ChatPreview {
                preview: "Need to submit additional documents for my application".to_string(),
                timestamp: Local::now(),
            }),
            details: ClientDetails {
                email: "harry@example.com".to_string(),
                phone: "(555) 123-4567".to_string(),
                address: "1234 Maple St, Anytown, CA 90210".to_string(),
                loan_amount: 320_000,
                loan_type: "Conventional 30-year fixed".to_string(),
                property_value: 400_000,
                credit_score: 720,
            },
        },
        Client {
            id: "119323096299".to_string(),
            name: "James Hallacy".to_string(),
            deal_id: "119323096299".to_string(),
            email: "james@uptig.ai".to_string(),
            recent_chat: Some(ChatPreview {
                preview: "Question about interest rate lock".to_string(),
                timestamp: Local::now(),
            }),
            details: ClientDetails {
                email: "james@uptig.ai".to_string(),
                phone: "(555) 987-6543".to_string(),
                address: "567 Oak Dr, Somewhere, CA 92101".to_string(),
                loan_amount: 450_000,
                loan_type: "FHA 30-year fixed".to_string(),
                property_value: 500_000,
                credit_score: 680,
            },
        },
    ]
}

/// Display value of a spread row. Tagged so formatting never falls back to
/// runtime type sniffing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SpreadValue {
    Currency(i64),
    Percentage(f64),
    Text(String),
}

impl std::fmt::Display for SpreadValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpreadValue::Currency(amount) => write!(f, "${}", group_thousands(*amount)),
            SpreadValue::Percentage(value) => write!(f, "{value:.1}%"),
            SpreadValue::Text(text) => write!(f, "{text}"),
        }
    }
}

fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// A literal financial-statement display row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadItem {
    pub label: String,
    pub value: SpreadValue,
    pub source: Option<String>,
}

impl SpreadItem {
    pub fn new(label: &str, value: SpreadValue, source: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            value,
            source: source.map(str::to_string),
        }
    }
}

/// Seed spread rows. Slices 0..3 render as the income statement, 3..5 as
/// the balance sheet and 5.. as ratio analysis.
pub fn seed_spreads() -> Vec<SpreadItem> {
    vec![
        SpreadItem::new(
            "Gross Revenue",
            SpreadValue::Currency(2_450_000),
            Some("2023 Tax Return"),
        ),
        SpreadItem::new(
            "Operating Expenses",
            SpreadValue::Currency(1_830_000),
            Some("2023 Tax Return"),
        ),
        SpreadItem::new("Net Operating Income", SpreadValue::Currency(620_000), None),
        SpreadItem::new(
            "Total Assets",
            SpreadValue::Currency(4_100_000),
            Some("Balance Sheet"),
        ),
        SpreadItem::new(
            "Total Liabilities",
            SpreadValue::Currency(2_650_000),
            Some("Balance Sheet"),
        ),
        SpreadItem::new("DSCR", SpreadValue::Text("1.42x".to_string()), None),
        SpreadItem::new("Loan-to-Value", SpreadValue::Percentage(65.0), None),
        SpreadItem::new("Debt Yield", SpreadValue::Percentage(15.1), None),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Agent,
}

/// A chat transcript entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    pub fn agent(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::Agent,
            content: content.into(),
            timestamp: Local::now(),
        }
    }
}

/// A borrower dashboard to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub count: Option<usize>,
}

/// Seed to-do list for the borrower dashboard.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "upload-documents".to_string(),
            title: "Upload Documents".to_string(),
            completed: false,
            count: Some(3),
        },
        Task {
            id: "verify-information".to_string(),
            title: "Verify Information".to_string(),
            completed: true,
            count: None,
        },
        Task {
            id: "sign-agreements".to_string(),
            title: "Sign Agreements".to_string(),
            completed: false,
            count: None,
        },
    ]
}
