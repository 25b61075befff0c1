use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// BillStatus
// ---------------------------------------------------------------------------

/// Where a bill or resolution stands in the legislative process.
///
/// The set of codes is closed: the upstream data files only ever emit these
/// 28, and the discriminant is the integer code they use. Declaration order
/// matches code order, so derived ordering follows the rough progression of
/// the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillStatus {
    Introduced = 1,
    Referred,
    Reported,
    PassOverHouse,
    PassOverSenate,
    PassedSimpleres,
    PassedConstamend,
    PassedConcurrentres,
    PassedBill,
    PassBackHouse,
    PassBackSenate,
    ProvKillSuspensionfailed,
    ProvKillCloturefailed,
    ProvKillPingpongfail,
    ProvKillVeto,
    FailOriginatingHouse,
    FailOriginatingSenate,
    FailSecondHouse,
    FailSecondSenate,
    OverridePassOverHouse,
    OverridePassOverSenate,
    VetoedPocket,
    VetoedOverrideFailOriginatingHouse,
    VetoedOverrideFailOriginatingSenate,
    VetoedOverrideFailSecondHouse,
    VetoedOverrideFailSecondSenate,
    EnactedSigned,
    EnactedVetoOverride,
}

impl BillStatus {
    pub fn all() -> &'static [BillStatus] {
        &[
            BillStatus::Introduced,
            BillStatus::Referred,
            BillStatus::Reported,
            BillStatus::PassOverHouse,
            BillStatus::PassOverSenate,
            BillStatus::PassedSimpleres,
            BillStatus::PassedConstamend,
            BillStatus::PassedConcurrentres,
            BillStatus::PassedBill,
            BillStatus::PassBackHouse,
            BillStatus::PassBackSenate,
            BillStatus::ProvKillSuspensionfailed,
            BillStatus::ProvKillCloturefailed,
            BillStatus::ProvKillPingpongfail,
            BillStatus::ProvKillVeto,
            BillStatus::FailOriginatingHouse,
            BillStatus::FailOriginatingSenate,
            BillStatus::FailSecondHouse,
            BillStatus::FailSecondSenate,
            BillStatus::OverridePassOverHouse,
            BillStatus::OverridePassOverSenate,
            BillStatus::VetoedPocket,
            BillStatus::VetoedOverrideFailOriginatingHouse,
            BillStatus::VetoedOverrideFailOriginatingSenate,
            BillStatus::VetoedOverrideFailSecondHouse,
            BillStatus::VetoedOverrideFailSecondSenate,
            BillStatus::EnactedSigned,
            BillStatus::EnactedVetoOverride,
        ]
    }

    /// The integer code used in the upstream data files.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Short display label, e.g. for timelines and tables.
    pub fn label(self) -> &'static str {
        match self {
            BillStatus::Introduced => "Introduced",
            BillStatus::Referred => "Referred",
            BillStatus::Reported => "Reported",
            BillStatus::PassOverHouse => "Passed House",
            BillStatus::PassOverSenate => "Passed Senate",
            BillStatus::PassedSimpleres => "Agreed To (Simple Resolution)",
            BillStatus::PassedConstamend => "Agreed To (Constitutional Amendment Proposal)",
            BillStatus::PassedConcurrentres => "Agreed To (Concurrent Resolution)",
            BillStatus::PassedBill => "Passed House & Senate",
            BillStatus::PassBackHouse => "Passed House with Changes",
            BillStatus::PassBackSenate => "Passed Senate with Changes",
            BillStatus::ProvKillSuspensionfailed => "Failed Under Suspension",
            BillStatus::ProvKillCloturefailed => "Failed Cloture",
            BillStatus::ProvKillPingpongfail => "Failed to Resolve Differences",
            BillStatus::ProvKillVeto => "Vetoed (No Override Attempt)",
            BillStatus::FailOriginatingHouse => "Failed House",
            BillStatus::FailOriginatingSenate => "Failed Senate",
            BillStatus::FailSecondHouse => "Passed Senate, Failed House",
            BillStatus::FailSecondSenate => "Passed House, Failed Senate",
            BillStatus::OverridePassOverHouse => "House Overrides Veto",
            BillStatus::OverridePassOverSenate => "Senate Overrides Veto",
            BillStatus::VetoedPocket => "Pocket Vetoed",
            BillStatus::VetoedOverrideFailOriginatingHouse => "Veto Override Failed in House",
            BillStatus::VetoedOverrideFailOriginatingSenate => "Veto Override Failed in Senate",
            BillStatus::VetoedOverrideFailSecondHouse => {
                "Veto Override Passed Senate, Failed in House"
            }
            BillStatus::VetoedOverrideFailSecondSenate => {
                "Veto Override Passed House, Failed in Senate"
            }
            BillStatus::EnactedSigned => "Enacted (Signed by the President)",
            BillStatus::EnactedVetoOverride => "Enacted (Veto Overridden)",
        }
    }

    /// Status code as written in the legacy XML data files.
    pub fn xml_code(self) -> &'static str {
        match self {
            BillStatus::Introduced => "INTRODUCED",
            BillStatus::Referred => "REFERRED",
            BillStatus::Reported => "REPORTED",
            BillStatus::PassOverHouse => "PASS_OVER:HOUSE",
            BillStatus::PassOverSenate => "PASS_OVER:SENATE",
            BillStatus::PassedSimpleres => "PASSED:SIMPLERES",
            BillStatus::PassedConstamend => "PASSED:CONSTAMEND",
            BillStatus::PassedConcurrentres => "PASSED:CONCURRENTRES",
            BillStatus::PassedBill => "PASSED:BILL",
            BillStatus::PassBackHouse => "PASS_BACK:HOUSE",
            BillStatus::PassBackSenate => "PASS_BACK:SENATE",
            BillStatus::ProvKillSuspensionfailed => "PROV_KILL:SUSPENSIONFAILED",
            BillStatus::ProvKillCloturefailed => "PROV_KILL:CLOTUREFAILED",
            BillStatus::ProvKillPingpongfail => "PROV_KILL:PINGPONGFAIL",
            BillStatus::ProvKillVeto => "PROV_KILL:VETO",
            BillStatus::FailOriginatingHouse => "FAIL:ORIGINATING:HOUSE",
            BillStatus::FailOriginatingSenate => "FAIL:ORIGINATING:SENATE",
            BillStatus::FailSecondHouse => "FAIL:SECOND:HOUSE",
            BillStatus::FailSecondSenate => "FAIL:SECOND:SENATE",
            BillStatus::OverridePassOverHouse => "OVERRIDE_PASS_OVER:HOUSE",
            BillStatus::OverridePassOverSenate => "OVERRIDE_PASS_OVER:SENATE",
            BillStatus::VetoedPocket => "VETOED:POCKET",
            BillStatus::VetoedOverrideFailOriginatingHouse => {
                "VETOED:OVERRIDE_FAIL_ORIGINATING:HOUSE"
            }
            BillStatus::VetoedOverrideFailOriginatingSenate => {
                "VETOED:OVERRIDE_FAIL_ORIGINATING:SENATE"
            }
            BillStatus::VetoedOverrideFailSecondHouse => "VETOED:OVERRIDE_FAIL_SECOND:HOUSE",
            BillStatus::VetoedOverrideFailSecondSenate => "VETOED:OVERRIDE_FAIL_SECOND:SENATE",
            BillStatus::EnactedSigned => "ENACTED:SIGNED",
            BillStatus::EnactedVetoOverride => "ENACTED:VETO_OVERRIDE",
        }
    }

    /// True if the legislative process is over for the bill. A bill in a
    /// final status never changes status again.
    pub fn is_final(self) -> bool {
        matches!(
            self,
            BillStatus::PassedSimpleres
                | BillStatus::PassedConstamend
                | BillStatus::PassedConcurrentres
                | BillStatus::FailOriginatingHouse
                | BillStatus::FailOriginatingSenate
                | BillStatus::FailSecondHouse
                | BillStatus::FailSecondSenate
                | BillStatus::VetoedPocket
                | BillStatus::VetoedOverrideFailOriginatingHouse
                | BillStatus::VetoedOverrideFailOriginatingSenate
                | BillStatus::VetoedOverrideFailSecondHouse
                | BillStatus::VetoedOverrideFailSecondSenate
                | BillStatus::EnactedSigned
                | BillStatus::EnactedVetoOverride
        )
    }

    /// True if the bill became law, by signature or by veto override.
    pub fn is_enacted(self) -> bool {
        matches!(
            self,
            BillStatus::EnactedSigned | BillStatus::EnactedVetoOverride
        )
    }

    /// True if the bill finished the process successfully, counting agreed-to
    /// resolutions which never go to the President.
    pub fn was_passed(self) -> bool {
        self.is_enacted()
            || matches!(
                self,
                BillStatus::PassedSimpleres
                    | BillStatus::PassedConstamend
                    | BillStatus::PassedConcurrentres
            )
    }

    pub fn by_value(value: u8) -> crate::error::Result<BillStatus> {
        Self::all()
            .iter()
            .find(|s| s.value() == value)
            .copied()
            .ok_or_else(|| crate::error::LegisError::UnknownStatus(format!("value {value}")))
    }

    pub fn by_xml_code(code: &str) -> crate::error::Result<BillStatus> {
        Self::all()
            .iter()
            .find(|s| s.xml_code() == code)
            .copied()
            .ok_or_else(|| crate::error::LegisError::UnknownStatus(format!("xml code '{code}'")))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BillStatus::Introduced => "introduced",
            BillStatus::Referred => "referred",
            BillStatus::Reported => "reported",
            BillStatus::PassOverHouse => "pass_over_house",
            BillStatus::PassOverSenate => "pass_over_senate",
            BillStatus::PassedSimpleres => "passed_simpleres",
            BillStatus::PassedConstamend => "passed_constamend",
            BillStatus::PassedConcurrentres => "passed_concurrentres",
            BillStatus::PassedBill => "passed_bill",
            BillStatus::PassBackHouse => "pass_back_house",
            BillStatus::PassBackSenate => "pass_back_senate",
            BillStatus::ProvKillSuspensionfailed => "prov_kill_suspensionfailed",
            BillStatus::ProvKillCloturefailed => "prov_kill_cloturefailed",
            BillStatus::ProvKillPingpongfail => "prov_kill_pingpongfail",
            BillStatus::ProvKillVeto => "prov_kill_veto",
            BillStatus::FailOriginatingHouse => "fail_originating_house",
            BillStatus::FailOriginatingSenate => "fail_originating_senate",
            BillStatus::FailSecondHouse => "fail_second_house",
            BillStatus::FailSecondSenate => "fail_second_senate",
            BillStatus::OverridePassOverHouse => "override_pass_over_house",
            BillStatus::OverridePassOverSenate => "override_pass_over_senate",
            BillStatus::VetoedPocket => "vetoed_pocket",
            BillStatus::VetoedOverrideFailOriginatingHouse => {
                "vetoed_override_fail_originating_house"
            }
            BillStatus::VetoedOverrideFailOriginatingSenate => {
                "vetoed_override_fail_originating_senate"
            }
            BillStatus::VetoedOverrideFailSecondHouse => "vetoed_override_fail_second_house",
            BillStatus::VetoedOverrideFailSecondSenate => "vetoed_override_fail_second_senate",
            BillStatus::EnactedSigned => "enacted_signed",
            BillStatus::EnactedVetoOverride => "enacted_veto_override",
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BillStatus {
    type Err = crate::error::LegisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|v| v.as_str() == s)
            .copied()
            .ok_or_else(|| crate::error::LegisError::UnknownStatus(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
