use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::bill::Bill;
use crate::error::LegisError;
use crate::status::BillStatus;
use crate::types::BillType;

/// Bills older than this congress produce no feed events. The backlog adds
/// volume nobody subscribes to.
pub const MIN_FEED_CONGRESS: u16 = 111;

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A recorded major action on a bill: the status it put the bill in, when,
/// and optionally the action line from the Congressional record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub date: NaiveDate,
    pub status: BillStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// ---------------------------------------------------------------------------
// EventKey
// ---------------------------------------------------------------------------

/// Stable identifier of a feed event within one bill's feed. The string
/// forms ("state:4", "cosp:2011-03-01") are how subscription state refers
/// to events, so they must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKey {
    Status(BillStatus),
    CosponsorsJoined(NaiveDate),
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKey::Status(status) => write!(f, "state:{}", status.value()),
            EventKey::CosponsorsJoined(date) => write!(f, "cosp:{}", date.format("%Y-%m-%d")),
        }
    }
}

impl std::str::FromStr for EventKey {
    type Err = LegisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LegisError::InvalidEventKey(s.to_string());
        let (kind, code) = s.split_once(':').ok_or_else(invalid)?;
        match kind {
            "state" => {
                let value: u8 = code.parse().map_err(|_| invalid())?;
                let status = BillStatus::by_value(value).map_err(|_| invalid())?;
                Ok(EventKey::Status(status))
            }
            "cosp" => {
                let date =
                    NaiveDate::parse_from_str(code, "%Y-%m-%d").map_err(|_| invalid())?;
                Ok(EventKey::CosponsorsJoined(date))
            }
            _ => Err(invalid()),
        }
    }
}

// ---------------------------------------------------------------------------
// Feed events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedEvent {
    pub key: EventKey,
    pub date: NaiveDate,
}

/// Distinct join dates of active cosponsors, excluding ones who signed on
/// the day of introduction. Those are announced with the introduction
/// itself, and a date seen once is assumed complete, so later updates only
/// produce new dates.
pub fn cosponsor_join_dates(bill: &Bill) -> Vec<NaiveDate> {
    let dates: BTreeSet<NaiveDate> = bill
        .cosponsors
        .iter()
        .filter(|c| c.is_active() && c.joined != bill.introduced_date)
        .map(|c| c.joined)
        .collect();
    dates.into_iter().collect()
}

/// Feed events for a bill: its introduction, each later recorded action,
/// and each batch of new cosponsors. Bills from before
/// [`MIN_FEED_CONGRESS`] produce nothing. Ordered by date, then key.
pub fn feed_events(bill: &Bill) -> Vec<FeedEvent> {
    if bill.id.congress < MIN_FEED_CONGRESS {
        return Vec::new();
    }

    let mut events = vec![FeedEvent {
        key: EventKey::Status(BillStatus::Introduced),
        date: bill.introduced_date,
    }];
    for action in &bill.actions {
        if action.status == BillStatus::Introduced {
            continue;
        }
        events.push(FeedEvent {
            key: EventKey::Status(action.status),
            date: action.date,
        });
    }
    for date in cosponsor_join_dates(bill) {
        events.push(FeedEvent {
            key: EventKey::CosponsorsJoined(date),
            date,
        });
    }
    events.sort_by_key(|e| (e.date, e.key));
    events
}

// ---------------------------------------------------------------------------
// Major events
// ---------------------------------------------------------------------------

/// One row of the displayed bill timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MajorEvent {
    pub label: String,
    pub date: NaiveDate,
}

/// Timeline label for a status on a bill of the given type. `PassedBill`
/// and `PassedConcurrentres` are recorded when the second chamber passes
/// the measure, so the label names that chamber: the House for
/// Senate-originated measures and vice versa.
fn timeline_label(bill_type: BillType, status: BillStatus) -> &'static str {
    match status {
        BillStatus::PassedBill => match bill_type {
            BillType::SenateBill | BillType::SenateJointResolution => "Passed House",
            BillType::HouseBill | BillType::HouseJointResolution => "Passed Senate",
            _ => status.label(),
        },
        BillStatus::PassedConcurrentres => match bill_type {
            BillType::SenateConcurrentResolution => "Passed House",
            BillType::HouseConcurrentResolution => "Passed Senate",
            _ => status.label(),
        },
        _ => status.label(),
    }
}

/// The displayed timeline of a bill's recorded actions. A bill with no
/// recorded actions still shows its introduction.
pub fn major_events(bill: &Bill) -> Vec<MajorEvent> {
    let mut events: Vec<MajorEvent> = bill
        .actions
        .iter()
        .map(|action| MajorEvent {
            label: timeline_label(bill.id.bill_type, action.status).to_string(),
            date: action.date,
        })
        .collect();
    if events.is_empty() {
        events.push(MajorEvent {
            label: BillStatus::Introduced.label().to_string(),
            date: bill.introduced_date,
        });
    }
    events
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bill::{BillId, Cosponsor, Person};
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bill(id: &str, introduced: NaiveDate) -> Bill {
        Bill::new(BillId::from_str(id).unwrap(), "A bill", introduced)
    }

    fn cosponsor(id: &str, joined: NaiveDate, withdrawn: Option<NaiveDate>) -> Cosponsor {
        Cosponsor {
            person: Person {
                id: id.to_string(),
                first_name: "A".to_string(),
                last_name: "B".to_string(),
            },
            joined,
            withdrawn,
        }
    }

    #[test]
    fn event_key_string_forms() {
        let state = EventKey::Status(BillStatus::PassOverHouse);
        assert_eq!(state.to_string(), "state:4");
        let cosp = EventKey::CosponsorsJoined(date(2011, 3, 1));
        assert_eq!(cosp.to_string(), "cosp:2011-03-01");

        assert_eq!(EventKey::from_str("state:4").unwrap(), state);
        assert_eq!(EventKey::from_str("cosp:2011-03-01").unwrap(), cosp);
    }

    #[test]
    fn event_key_rejects_unknown_forms() {
        for bad in ["", "state", "state:", "state:99", "cosp:tomorrow", "vote:1"] {
            assert!(EventKey::from_str(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn old_bills_have_no_feed() {
        let mut b = bill("hr100-110", date(2007, 2, 1));
        b.actions.push(Action {
            date: date(2007, 3, 1),
            status: BillStatus::Referred,
            text: None,
        });
        assert!(feed_events(&b).is_empty());
    }

    #[test]
    fn feed_includes_introduction_actions_and_cosponsors() {
        let introduced = date(2011, 2, 10);
        let mut b = bill("hr627-112", introduced);
        b.actions.push(Action {
            date: date(2011, 3, 1),
            status: BillStatus::Referred,
            text: None,
        });
        // An explicit introduction action is folded into the standing
        // introduction event.
        b.actions.push(Action {
            date: introduced,
            status: BillStatus::Introduced,
            text: None,
        });
        b.add_cosponsor(cosponsor("P1", introduced, None)).unwrap();
        b.add_cosponsor(cosponsor("P2", date(2011, 2, 20), None)).unwrap();
        b.add_cosponsor(cosponsor("P3", date(2011, 2, 20), None)).unwrap();
        b.add_cosponsor(cosponsor("P4", date(2011, 2, 25), Some(date(2011, 3, 2))))
            .unwrap();

        let events = feed_events(&b);
        let keys: Vec<String> = events.iter().map(|e| e.key.to_string()).collect();
        assert_eq!(keys, vec!["state:1", "cosp:2011-02-20", "state:2"]);
        assert_eq!(events[0].date, introduced);
    }

    #[test]
    fn feed_is_ordered_by_date() {
        let mut b = bill("s10-112", date(2011, 1, 5));
        b.actions.push(Action {
            date: date(2011, 4, 1),
            status: BillStatus::PassOverSenate,
            text: None,
        });
        b.actions.push(Action {
            date: date(2011, 2, 1),
            status: BillStatus::Reported,
            text: None,
        });
        let events = feed_events(&b);
        let dates: Vec<NaiveDate> = events.iter().map(|e| e.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn major_events_fall_back_to_introduction() {
        let b = bill("hr627-112", date(2011, 2, 10));
        let events = major_events(&b);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].label, "Introduced");
        assert_eq!(events[0].date, date(2011, 2, 10));
    }

    #[test]
    fn passed_bill_label_names_the_second_chamber() {
        assert_eq!(
            timeline_label(BillType::SenateBill, BillStatus::PassedBill),
            "Passed House"
        );
        assert_eq!(
            timeline_label(BillType::HouseBill, BillStatus::PassedBill),
            "Passed Senate"
        );
        assert_eq!(
            timeline_label(BillType::HouseJointResolution, BillStatus::PassedBill),
            "Passed Senate"
        );
        assert_eq!(
            timeline_label(BillType::SenateConcurrentResolution, BillStatus::PassedConcurrentres),
            "Passed House"
        );
        // Other statuses keep their own label.
        assert_eq!(
            timeline_label(BillType::SenateBill, BillStatus::Referred),
            "Referred"
        );
    }

    #[test]
    fn timeline_of_a_senate_bill() {
        let mut b = bill("s365-112", date(2011, 2, 16));
        for (d, status) in [
            (date(2011, 2, 16), BillStatus::Introduced),
            (date(2011, 6, 29), BillStatus::PassOverSenate),
            (date(2011, 8, 1), BillStatus::PassedBill),
            (date(2011, 8, 2), BillStatus::EnactedSigned),
        ] {
            b.actions.push(Action {
                date: d,
                status,
                text: None,
            });
        }
        let events = major_events(&b);
        let labels: Vec<&str> = events.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Introduced",
                "Passed Senate",
                "Passed House",
                "Enacted (Signed by the President)",
            ]
        );
    }
}
