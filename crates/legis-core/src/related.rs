use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::bill::BillId;

// ---------------------------------------------------------------------------
// RelatedBill
// ---------------------------------------------------------------------------

/// A link from one bill to another, as reported by the upstream data. The
/// relation is free text there, so it stays a string here; only a few kinds
/// carry meaning for ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedBill {
    pub bill: BillId,
    pub relation: String,
}

/// Sort precedence for relation kinds. Identical companion bills come first;
/// anything unrecognized sorts last.
pub fn relation_priority(relation: &str) -> u32 {
    match relation {
        "identical" => 0,
        _ => 999,
    }
}

/// Orders related bills for display: stable sort by relation priority, then
/// drop later entries naming a bill already listed. The stable sort keeps
/// the upstream order within a priority class, and the dedup means an
/// "identical" link beats a weaker link to the same bill.
pub fn order_related(related: &[RelatedBill]) -> Vec<&RelatedBill> {
    let mut sorted: Vec<&RelatedBill> = related.iter().collect();
    sorted.sort_by_key(|rb| relation_priority(&rb.relation));
    let mut seen = HashSet::new();
    sorted.retain(|rb| seen.insert(rb.bill));
    sorted
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BillType;

    fn id(number: u32) -> BillId {
        BillId {
            congress: 112,
            bill_type: BillType::SenateBill,
            number,
        }
    }

    fn rb(number: u32, relation: &str) -> RelatedBill {
        RelatedBill {
            bill: id(number),
            relation: relation.to_string(),
        }
    }

    #[test]
    fn identical_sorts_first() {
        let related = vec![rb(10, "unrelated"), rb(20, "identical"), rb(30, "rule")];
        let ordered = order_related(&related);
        assert_eq!(ordered[0].bill, id(20));
        // Stable within the same priority class.
        assert_eq!(ordered[1].bill, id(10));
        assert_eq!(ordered[2].bill, id(30));
    }

    #[test]
    fn duplicate_targets_keep_the_strongest_link() {
        let related = vec![rb(10, "rule"), rb(10, "identical"), rb(20, "rule")];
        let ordered = order_related(&related);
        assert_eq!(ordered.len(), 2);
        assert_eq!(ordered[0].relation, "identical");
        assert_eq!(ordered[0].bill, id(10));
        assert_eq!(ordered[1].bill, id(20));
    }

    #[test]
    fn first_entry_wins_within_a_class() {
        let related = vec![rb(10, "rule"), rb(10, "supersedes")];
        let ordered = order_related(&related);
        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered[0].relation, "rule");
    }

    #[test]
    fn empty_input() {
        assert!(order_related(&[]).is_empty());
    }
}
