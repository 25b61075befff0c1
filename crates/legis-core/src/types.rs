use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Chamber
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    pub fn label(self) -> &'static str {
        match self {
            Chamber::House => "House",
            Chamber::Senate => "Senate",
        }
    }

    /// The opposite chamber, e.g. where a passed bill goes next.
    pub fn other(self) -> Chamber {
        match self {
            Chamber::House => Chamber::Senate,
            Chamber::Senate => Chamber::House,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Chamber::House => "house",
            Chamber::Senate => "senate",
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BillType
// ---------------------------------------------------------------------------

/// The eight kinds of legislative proposal. Discriminants are the integer
/// codes used by the upstream data files and are not in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillType {
    SenateBill = 2,
    HouseBill = 3,
    SenateResolution = 4,
    HouseResolution = 1,
    SenateConcurrentResolution = 6,
    HouseConcurrentResolution = 5,
    SenateJointResolution = 8,
    HouseJointResolution = 7,
}

impl BillType {
    pub fn all() -> &'static [BillType] {
        &[
            BillType::SenateBill,
            BillType::HouseBill,
            BillType::SenateResolution,
            BillType::HouseResolution,
            BillType::SenateConcurrentResolution,
            BillType::HouseConcurrentResolution,
            BillType::SenateJointResolution,
            BillType::HouseJointResolution,
        ]
    }

    /// The integer code used in the upstream data files.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Citation prefix, e.g. "H.R." for a House bill.
    pub fn label(self) -> &'static str {
        match self {
            BillType::SenateBill => "S.",
            BillType::HouseBill => "H.R.",
            BillType::SenateResolution => "S.Res.",
            BillType::HouseResolution => "H.Res.",
            BillType::SenateConcurrentResolution => "S.Con.Res.",
            BillType::HouseConcurrentResolution => "H.Con.Res.",
            BillType::SenateJointResolution => "S.J.Res.",
            BillType::HouseJointResolution => "H.J.Res.",
        }
    }

    /// Short form used in bill ids and URL paths, e.g. "hr" in "hr627-112".
    pub fn slug(self) -> &'static str {
        match self {
            BillType::SenateBill => "s",
            BillType::HouseBill => "hr",
            BillType::SenateResolution => "sres",
            BillType::HouseResolution => "hres",
            BillType::SenateConcurrentResolution => "sconres",
            BillType::HouseConcurrentResolution => "hconres",
            BillType::SenateJointResolution => "sjres",
            BillType::HouseJointResolution => "hjres",
        }
    }

    /// Abbreviation used by the legacy XML data files. Note "hr" means a
    /// House simple resolution here, not a House bill.
    pub fn xml_code(self) -> &'static str {
        match self {
            BillType::SenateBill => "s",
            BillType::HouseBill => "h",
            BillType::SenateResolution => "sr",
            BillType::HouseResolution => "hr",
            BillType::SenateConcurrentResolution => "sc",
            BillType::HouseConcurrentResolution => "hc",
            BillType::SenateJointResolution => "sj",
            BillType::HouseJointResolution => "hj",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BillType::SenateBill => "Senate bills",
            BillType::HouseBill => "House bills",
            BillType::SenateResolution => {
                "Senate simple resolutions, which do not have the force of law"
            }
            BillType::HouseResolution => {
                "House simple resolutions, which do not have the force of law"
            }
            BillType::SenateConcurrentResolution => {
                "Concurrent resolutions originating in the Senate, which do not have the force of law"
            }
            BillType::HouseConcurrentResolution => {
                "Concurrent resolutions originating in the House, which do not have the force of law"
            }
            BillType::SenateJointResolution => {
                "Joint resolutions originating in the Senate, which may be used to enact laws or propose constitutional amendments"
            }
            BillType::HouseJointResolution => {
                "Joint resolutions originating in the House, which may be used to enact laws or propose constitutional amendments"
            }
        }
    }

    pub fn chamber(self) -> Chamber {
        match self {
            BillType::SenateBill
            | BillType::SenateResolution
            | BillType::SenateConcurrentResolution
            | BillType::SenateJointResolution => Chamber::Senate,
            BillType::HouseBill
            | BillType::HouseResolution
            | BillType::HouseConcurrentResolution
            | BillType::HouseJointResolution => Chamber::House,
        }
    }

    pub fn is_joint_resolution(self) -> bool {
        matches!(
            self,
            BillType::SenateJointResolution | BillType::HouseJointResolution
        )
    }

    /// The plain bill type of the same chamber. Used when a joint resolution
    /// that does not propose a constitutional amendment follows the ordinary
    /// bill path.
    pub fn chamber_bill(self) -> BillType {
        match self.chamber() {
            Chamber::Senate => BillType::SenateBill,
            Chamber::House => BillType::HouseBill,
        }
    }

    pub fn by_value(value: u8) -> crate::error::Result<BillType> {
        Self::all()
            .iter()
            .find(|t| t.value() == value)
            .copied()
            .ok_or_else(|| crate::error::LegisError::UnknownBillType(format!("value {value}")))
    }

    pub fn by_slug(slug: &str) -> crate::error::Result<BillType> {
        Self::all()
            .iter()
            .find(|t| t.slug() == slug)
            .copied()
            .ok_or_else(|| crate::error::LegisError::UnknownBillType(format!("slug '{slug}'")))
    }

    pub fn by_xml_code(code: &str) -> crate::error::Result<BillType> {
        Self::all()
            .iter()
            .find(|t| t.xml_code() == code)
            .copied()
            .ok_or_else(|| crate::error::LegisError::UnknownBillType(format!("xml code '{code}'")))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BillType::SenateBill => "senate_bill",
            BillType::HouseBill => "house_bill",
            BillType::SenateResolution => "senate_resolution",
            BillType::HouseResolution => "house_resolution",
            BillType::SenateConcurrentResolution => "senate_concurrent_resolution",
            BillType::HouseConcurrentResolution => "house_concurrent_resolution",
            BillType::SenateJointResolution => "senate_joint_resolution",
            BillType::HouseJointResolution => "house_joint_resolution",
        }
    }
}

impl fmt::Display for BillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BillType {
    type Err = crate::error::LegisError;

    /// Accepts both the long name ("house_bill") and the slug ("hr").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(t) = Self::all().iter().find(|t| t.as_str() == s) {
            return Ok(*t);
        }
        Self::all()
            .iter()
            .find(|t| t.slug() == s)
            .copied()
            .ok_or_else(|| crate::error::LegisError::UnknownBillType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
