use chrono::NaiveDate;

use crate::status::BillStatus;

// ---------------------------------------------------------------------------
// Status describer
// ---------------------------------------------------------------------------

/// Formats a date the way status sentences spell it out, e.g.
/// "January 3, 2011". No leading zero on the day.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Plain-English sentence for a bill's status as of `date`.
///
/// Some wording depends on whether the bill belongs to the current congress:
/// a bill from a closed session can no longer move, so its pending statuses
/// read as history. Statuses that describe an outcome read the same either
/// way and are checked first. Every status has wording today; if a code ever
/// lacks it, the bare xml code is returned rather than failing.
pub fn describe_status(
    status: BillStatus,
    date: NaiveDate,
    bill_congress: u16,
    current_congress: u16,
) -> String {
    let date = long_date(date);
    if let Some(text) = session_independent(status, &date) {
        return text;
    }
    let text = if bill_congress == current_congress {
        current_session(status, &date)
    } else {
        past_session(status, &date)
    };
    text.unwrap_or_else(|| {
        tracing::warn!(
            status = status.xml_code(),
            "status has no descriptive wording"
        );
        status.xml_code().to_string()
    })
}

/// Wording for statuses whose meaning does not depend on whether the bill's
/// congress is still in session. These are the outcomes.
fn session_independent(status: BillStatus, date: &str) -> Option<String> {
    let text = match status {
        BillStatus::PassedSimpleres => format!(
            "This simple resolution passed on {date}. That is the end of the legislative process for a simple resolution."
        ),
        BillStatus::PassedConstamend => format!(
            "This proposal for a constitutional amendment passed Congress on {date} and goes to the states for consideration next."
        ),
        BillStatus::PassedConcurrentres => format!(
            "This concurrent resolution passed both chambers of Congress on {date}. That is the end of the legislative process for concurrent resolutions. They do not have the force of law."
        ),
        BillStatus::FailOriginatingHouse => {
            format!("This bill or resolution failed in the House on {date}.")
        }
        BillStatus::FailOriginatingSenate => {
            format!("This bill or resolution failed in the Senate on {date}.")
        }
        BillStatus::FailSecondHouse => {
            format!("After passing in the Senate, this bill failed in the House on {date}.")
        }
        BillStatus::FailSecondSenate => {
            format!("After passing in the House, this bill failed in the Senate on {date}.")
        }
        BillStatus::VetoedOverrideFailOriginatingHouse
        | BillStatus::VetoedOverrideFailSecondHouse => format!(
            "This bill was vetoed. The House attempted to override the veto on {date} but failed."
        ),
        BillStatus::VetoedOverrideFailOriginatingSenate
        | BillStatus::VetoedOverrideFailSecondSenate => format!(
            "This bill was vetoed. The Senate attempted to override the veto on {date} but failed."
        ),
        BillStatus::VetoedPocket => format!("This bill was pocket vetoed on {date}."),
        BillStatus::EnactedSigned => format!(
            "This bill was enacted after being signed by the President on {date}."
        ),
        BillStatus::EnactedVetoOverride => format!(
            "This bill was enacted after a congressional override of the President's veto on {date}."
        ),
        _ => return None,
    };
    Some(text)
}

/// Wording for in-progress statuses of a bill in the current congress.
fn current_session(status: BillStatus, date: &str) -> Option<String> {
    let text = match status {
        BillStatus::Introduced => format!(
            "This bill or resolution is in the first stage of the legislative process. It was introduced into Congress on {date}. Most bills and resolutions are assigned to committees which consider them before they move to the House or Senate as a whole."
        ),
        BillStatus::Referred => format!(
            "This bill or resolution was assigned to a congressional committee on {date}, which will consider it before possibly sending it on to the House or Senate as a whole. The majority of bills never make it past this point."
        ),
        BillStatus::Reported => format!(
            "The committees assigned to this bill or resolution sent it to the House or Senate as a whole for consideration on {date}."
        ),
        BillStatus::PassOverHouse => format!(
            "This bill or resolution passed in the House on {date} and goes to the Senate next for consideration."
        ),
        BillStatus::PassOverSenate => format!(
            "This bill or resolution passed in the Senate on {date} and goes to the House next for consideration."
        ),
        BillStatus::PassedBill => format!(
            "This bill was passed by Congress on {date} and goes to the President next."
        ),
        BillStatus::PassBackHouse => format!(
            "This bill or resolution passed in the Senate and the House, but the House made changes and sent it back to the Senate on {date}."
        ),
        BillStatus::PassBackSenate => format!(
            "This bill or resolution has been passed in the House and the Senate, but the Senate made changes and sent it back to the House on {date}."
        ),
        BillStatus::ProvKillSuspensionfailed => format!(
            "This bill or resolution is provisionally dead due to a failed vote on {date} under a fast-track procedure called \"suspension.\" It may or may not get another vote."
        ),
        BillStatus::ProvKillCloturefailed => format!(
            "This bill or resolution is provisionally dead due to a failed vote for cloture, i.e. to stop a filibuster or threat of a filibuster, on {date}."
        ),
        BillStatus::ProvKillPingpongfail => format!(
            "This bill or resolution is provisionally dead due to a failed attempt to resolve differences between the House and Senate versions, on {date}."
        ),
        BillStatus::ProvKillVeto => format!(
            "This bill was vetoed by the President on {date}. The bill is dead unless Congress can override it."
        ),
        BillStatus::OverridePassOverHouse => format!(
            "After a presidential veto, the House succeeded in an override on {date}. It goes to the Senate next."
        ),
        BillStatus::OverridePassOverSenate => format!(
            "After a presidential veto, the Senate succeeded in an override on {date}. It goes to the House next."
        ),
        _ => return None,
    };
    Some(text)
}

/// Wording for in-progress statuses of a bill from a past congress. The
/// session ended, so these all describe how far the bill got.
fn past_session(status: BillStatus, date: &str) -> Option<String> {
    let text = match status {
        BillStatus::Introduced | BillStatus::Referred | BillStatus::Reported => format!(
            "This bill or resolution was introduced on {date}, in a previous session of Congress, but was not enacted."
        ),
        BillStatus::PassOverHouse => format!(
            "This bill or resolution was introduced in a previous session of Congress and was passed by the House on {date} but was never passed by the Senate."
        ),
        BillStatus::PassOverSenate => format!(
            "This bill or resolution was introduced in a previous session of Congress and was passed by the Senate on {date} but was never passed by the House."
        ),
        BillStatus::PassedBill => format!(
            "This bill was passed by Congress on {date} but was not enacted before the end of its Congressional session."
        ),
        BillStatus::PassBackHouse | BillStatus::PassBackSenate => format!(
            "This bill or resolution was introduced in a previous session of Congress and though it was passed by both chambers on {date} it was passed in non-identical forms and the differences were never resolved."
        ),
        BillStatus::ProvKillSuspensionfailed
        | BillStatus::ProvKillCloturefailed
        | BillStatus::ProvKillPingpongfail => format!(
            "This bill or resolution was introduced in a previous session of Congress but was killed due to a failed vote for cloture, under a fast-track vote called \"suspension\", or while resolving differences on {date}."
        ),
        BillStatus::ProvKillVeto => format!(
            "This bill was vetoed by the President on {date} and Congress did not attempt an override before the end of the Congressional session."
        ),
        BillStatus::OverridePassOverHouse | BillStatus::OverridePassOverSenate => format!(
            "This bill was vetoed by the President and Congress did not finish an override begun on {date} before the end of the Congressional session."
        ),
        _ => return None,
    };
    Some(text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
