use crate::describe;
use crate::error::{LegisError, Result};
use crate::events::Action;
use crate::paths;
use crate::related::{self, RelatedBill};
use crate::status::BillStatus;
use crate::term::{self, BillTerm};
use crate::types::BillType;
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// BillId
// ---------------------------------------------------------------------------

/// The natural key of a bill: a congress, a bill type, and a number. The
/// canonical text form is "{slug}{number}-{congress}", e.g. "hr627-112".
/// Field order gives the upstream sort order (congress, type code, number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BillId {
    pub congress: u16,
    pub bill_type: BillType,
    pub number: u32,
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}-{}", self.bill_type.slug(), self.number, self.congress)
    }
}

impl std::str::FromStr for BillId {
    type Err = LegisError;

    fn from_str(s: &str) -> Result<Self> {
        static ID_RE: OnceLock<Regex> = OnceLock::new();
        let re = ID_RE.get_or_init(|| Regex::new(r"^([a-z]+)(\d+)-(\d+)$").unwrap());
        let caps = re
            .captures(s)
            .ok_or_else(|| LegisError::InvalidBillId(s.to_string()))?;
        let bill_type = BillType::by_slug(&caps[1])
            .map_err(|_| LegisError::InvalidBillId(s.to_string()))?;
        let number: u32 = caps[2]
            .parse()
            .map_err(|_| LegisError::InvalidBillId(s.to_string()))?;
        let congress: u16 = caps[3]
            .parse()
            .map_err(|_| LegisError::InvalidBillId(s.to_string()))?;
        Ok(BillId {
            congress,
            bill_type,
            number,
        })
    }
}

// ---------------------------------------------------------------------------
// Person / Cosponsor
// ---------------------------------------------------------------------------

/// Minimal reference to a member of Congress. The id is the upstream member
/// identifier; no member records are kept here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cosponsor {
    pub person: Person,
    pub joined: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawn: Option<NaiveDate>,
}

impl Cosponsor {
    pub fn is_active(&self) -> bool {
        self.withdrawn.is_none()
    }
}

// ---------------------------------------------------------------------------
// Bill
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsor: Option<Person>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub committees: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub terms: Vec<BillTerm>,
    pub current_status: BillStatus,
    pub current_status_date: NaiveDate,
    pub introduced_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cosponsors: Vec<Cosponsor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<RelatedBill>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
}

impl Bill {
    pub fn new(id: BillId, title: impl Into<String>, introduced_date: NaiveDate) -> Self {
        Self {
            id,
            title: title.into(),
            sponsor: None,
            committees: Vec::new(),
            terms: Vec::new(),
            current_status: BillStatus::Introduced,
            current_status_date: introduced_date,
            introduced_date,
            cosponsors: Vec::new(),
            related: Vec::new(),
            actions: Vec::new(),
        }
    }

    // ---------------------------------------------------------------------------
    // Display helpers
    // ---------------------------------------------------------------------------

    /// Citation form without the congress, e.g. "H.R. 627".
    pub fn display_number(&self) -> String {
        format!("{} {}", self.id.bill_type.label(), self.id.number)
    }

    /// Citation form with the congress, e.g. "H.R. 627 (112th)".
    pub fn display_number_with_congress(&self) -> String {
        format!("{} ({})", self.display_number(), ordinal(self.id.congress))
    }

    /// Citation form that only qualifies with the congress when the bill is
    /// not from the current one. Bill numbers restart every congress, so an
    /// unqualified number would be ambiguous for older bills.
    pub fn display_number_in(&self, current_congress: u16) -> String {
        if self.id.congress == current_congress {
            self.display_number()
        } else {
            self.display_number_with_congress()
        }
    }

    /// "H.R. 627: Helping Families Save Their Homes Act of 2009"
    pub fn display_title(&self) -> String {
        format!("{}: {}", self.display_number(), self.title)
    }

    // ---------------------------------------------------------------------------
    // Status
    // ---------------------------------------------------------------------------

    /// A bill can still move if it belongs to the current congress and has
    /// not reached a final status.
    pub fn is_alive(&self, current_congress: u16) -> bool {
        self.id.congress == current_congress && !self.current_status.is_final()
    }

    /// Plain-English sentence for the current status.
    pub fn current_status_description(&self, current_congress: u16) -> String {
        describe::describe_status(
            self.current_status,
            self.current_status_date,
            self.id.congress,
            current_congress,
        )
    }

    // ---------------------------------------------------------------------------
    // Cosponsors
    // ---------------------------------------------------------------------------

    /// Number of cosponsors who have not withdrawn.
    pub fn cosponsor_count(&self) -> usize {
        self.cosponsors.iter().filter(|c| c.is_active()).count()
    }

    /// All cosponsor records, withdrawn ones included, ordered by join date
    /// and then by name.
    pub fn cosponsor_records(&self) -> Vec<&Cosponsor> {
        let mut records: Vec<&Cosponsor> = self.cosponsors.iter().collect();
        records.sort_by(|a, b| {
            (a.joined, &a.person.last_name, &a.person.first_name).cmp(&(
                b.joined,
                &b.person.last_name,
                &b.person.first_name,
            ))
        });
        records
    }

    /// Attaches a cosponsor. Each person may appear once per bill.
    pub fn add_cosponsor(&mut self, cosponsor: Cosponsor) -> Result<()> {
        if self
            .cosponsors
            .iter()
            .any(|c| c.person.id == cosponsor.person.id)
        {
            return Err(LegisError::DuplicateCosponsor(cosponsor.person.name()));
        }
        self.cosponsors.push(cosponsor);
        Ok(())
    }

    // ---------------------------------------------------------------------------
    // Terms and related bills
    // ---------------------------------------------------------------------------

    /// Subject terms for display, top terms first.
    pub fn sorted_terms(&self) -> Vec<&BillTerm> {
        term::sort_terms(&self.terms)
    }

    /// Related bills in display order, strongest relation first, one entry
    /// per target bill.
    pub fn related_bills(&self) -> Vec<&RelatedBill> {
        related::order_related(&self.related)
    }

    // ---------------------------------------------------------------------------
    // Links
    // ---------------------------------------------------------------------------

    /// Site path for the bill page, e.g. "/congress/bills/112/hr627".
    pub fn url_path(&self) -> String {
        format!(
            "/congress/bills/{}/{}{}",
            self.id.congress,
            self.id.bill_type.slug(),
            self.id.number
        )
    }

    /// Query URL for the bill on the Library of Congress THOMAS system.
    pub fn thomas_link(&self) -> String {
        format!(
            "http://thomas.loc.gov/cgi-bin/bdquery/z?d{}:{}{}:",
            self.id.congress,
            self.id.bill_type.slug(),
            self.id.number
        )
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    pub fn load(root: &Path, id: &BillId) -> Result<Self> {
        let path = paths::bill_file(root, id);
        if !path.exists() {
            return Err(LegisError::BillNotFound(id.to_string()));
        }
        let data = std::fs::read_to_string(&path)?;
        let bill: Bill = serde_yaml::from_str(&data)?;
        Ok(bill)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::bill_file(root, &self.id);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    /// Loads every bill under the data root, across congresses, in id order.
    pub fn list(root: &Path) -> Result<Vec<Self>> {
        if !root.exists() {
            return Ok(Vec::new());
        }
        let mut bills = Vec::new();
        for entry in std::fs::read_dir(root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if let Ok(congress) = name.parse::<u16>() {
                bills.extend(Self::list_congress(root, congress)?);
            }
        }
        bills.sort_by_key(|b| b.id);
        Ok(bills)
    }

    /// Loads every bill of one congress, in id order.
    pub fn list_congress(root: &Path, congress: u16) -> Result<Vec<Self>> {
        let dir = paths::bills_dir(root, congress);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut bills = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            let data = std::fs::read_to_string(&path)?;
            let bill: Bill = serde_yaml::from_str(&data)?;
            bills.push(bill);
        }
        bills.sort_by_key(|b| b.id);
        Ok(bills)
    }
}

/// English ordinal for a congress number: 112 -> "112th", 101 -> "101st".
fn ordinal(n: u16) -> String {
    let suffix = match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{n}{suffix}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
