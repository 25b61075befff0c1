use std::collections::HashMap;
use std::sync::OnceLock;

use crate::bill::Bill;
use crate::status::BillStatus;
use crate::types::BillType;

// ---------------------------------------------------------------------------
// Transition graph
// ---------------------------------------------------------------------------

/// One forward edge in the legislative state diagram: the status a bill
/// moves to next, with an optional label overriding the target status's own.
/// Overrides are needed where the same target reads differently depending on
/// the path, e.g. reaching `PassedBill` from the House side means the Senate
/// still had to pass it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub to: BillStatus,
    pub label: Option<&'static str>,
}

impl Step {
    pub fn display_label(&self) -> &'static str {
        self.label.unwrap_or_else(|| self.to.label())
    }
}

type EdgeMap = HashMap<(BillType, BillStatus), Step>;

fn edges() -> &'static EdgeMap {
    static EDGES: OnceLock<EdgeMap> = OnceLock::new();
    EDGES.get_or_init(build_edges)
}

fn add(map: &mut EdgeMap, bt: BillType, from: BillStatus, to: BillStatus) {
    map.insert((bt, from), Step { to, label: None });
}

fn add_labeled(
    map: &mut EdgeMap,
    bt: BillType,
    from: BillStatus,
    to: BillStatus,
    label: &'static str,
) {
    map.insert((bt, from), Step { to, label: Some(label) });
}

/// Builds the full state diagram once. Committee referral is common to all
/// types; everything after `Reported` depends on the type of measure and on
/// its originating chamber. Type-specific edges are inserted last so they
/// would win over a common edge for the same key.
fn build_edges() -> EdgeMap {
    use BillStatus::*;
    use BillType::*;

    let mut m = EdgeMap::new();

    for &bt in BillType::all() {
        add(&mut m, bt, Introduced, Referred);
        add(&mut m, bt, Referred, Reported);
    }

    add(&mut m, HouseBill, Reported, PassOverHouse);
    add_labeled(&mut m, HouseBill, PassOverHouse, PassedBill, "Passed Senate");
    add_labeled(&mut m, HouseBill, PassBackHouse, PassedBill, "Senate Approves House Changes");
    add_labeled(&mut m, HouseBill, PassBackSenate, PassedBill, "House Approves Senate Changes");
    add(&mut m, HouseBill, PassedBill, EnactedSigned);
    add(&mut m, HouseBill, ProvKillSuspensionfailed, PassOverHouse);
    add_labeled(&mut m, HouseBill, ProvKillCloturefailed, PassedBill, "Passed Senate");
    add_labeled(&mut m, HouseBill, ProvKillPingpongfail, PassedBill, "Passed House/Senate");
    add(&mut m, HouseBill, ProvKillVeto, OverridePassOverHouse);
    add(&mut m, HouseBill, OverridePassOverHouse, EnactedVetoOverride);

    add(&mut m, SenateBill, Reported, PassOverSenate);
    add_labeled(&mut m, SenateBill, PassOverSenate, PassedBill, "Passed House");
    add_labeled(&mut m, SenateBill, PassBackHouse, PassedBill, "Senate Approves House Changes");
    add_labeled(&mut m, SenateBill, PassBackSenate, PassedBill, "House Approves Senate Changes");
    add(&mut m, SenateBill, PassedBill, EnactedSigned);
    add_labeled(&mut m, SenateBill, ProvKillSuspensionfailed, PassedBill, "Passed House");
    add(&mut m, SenateBill, ProvKillCloturefailed, PassOverSenate);
    add_labeled(&mut m, SenateBill, ProvKillPingpongfail, PassedBill, "Passed Senate/House");
    add(&mut m, SenateBill, ProvKillVeto, OverridePassOverSenate);
    add(&mut m, SenateBill, OverridePassOverSenate, EnactedVetoOverride);

    add(&mut m, HouseResolution, Reported, PassedSimpleres);
    add(&mut m, HouseResolution, ProvKillSuspensionfailed, PassOverHouse);

    add(&mut m, SenateResolution, Reported, PassedSimpleres);
    add(&mut m, SenateResolution, ProvKillCloturefailed, PassedSimpleres);

    let hcres = HouseConcurrentResolution;
    add(&mut m, hcres, Reported, PassOverHouse);
    add_labeled(&mut m, hcres, PassOverHouse, PassedConcurrentres, "Passed Senate");
    add_labeled(
        &mut m,
        hcres,
        PassBackHouse,
        PassedConcurrentres,
        "Senate Approves House Changes",
    );
    add_labeled(
        &mut m,
        hcres,
        PassBackSenate,
        PassedConcurrentres,
        "House Approves Senate Changes",
    );
    add(&mut m, hcres, ProvKillSuspensionfailed, PassOverHouse);
    add(&mut m, hcres, ProvKillCloturefailed, PassedConcurrentres);
    add(&mut m, hcres, ProvKillPingpongfail, PassedConcurrentres);

    let scres = SenateConcurrentResolution;
    add(&mut m, scres, Reported, PassOverSenate);
    add_labeled(&mut m, scres, PassOverSenate, PassedConcurrentres, "Passed House");
    add_labeled(
        &mut m,
        scres,
        PassBackHouse,
        PassedConcurrentres,
        "Senate Approves House Changes",
    );
    add_labeled(
        &mut m,
        scres,
        PassBackSenate,
        PassedConcurrentres,
        "House Approves Senate Changes",
    );
    add(&mut m, scres, ProvKillSuspensionfailed, PassedConcurrentres);
    add(&mut m, scres, ProvKillCloturefailed, PassOverSenate);
    add(&mut m, scres, ProvKillPingpongfail, PassedConcurrentres);

    // Joint resolutions are modeled as constitutional amendment proposals.
    // Ones that are not get rerouted to the chamber's bill table by
    // effective_type before lookup.
    add(&mut m, HouseJointResolution, Reported, PassOverHouse);
    add(&mut m, HouseJointResolution, PassOverHouse, PassedConstamend);
    add(&mut m, HouseJointResolution, PassBackHouse, PassedConstamend);
    add(&mut m, HouseJointResolution, PassBackSenate, PassedConstamend);
    add(&mut m, HouseJointResolution, ProvKillSuspensionfailed, PassOverHouse);
    add(&mut m, HouseJointResolution, ProvKillCloturefailed, PassedConstamend);
    add(&mut m, HouseJointResolution, ProvKillPingpongfail, PassedConstamend);

    add(&mut m, SenateJointResolution, Reported, PassOverSenate);
    add(&mut m, SenateJointResolution, PassOverSenate, PassedConstamend);
    add(&mut m, SenateJointResolution, PassBackHouse, PassedConstamend);
    add(&mut m, SenateJointResolution, PassBackSenate, PassedConstamend);
    add(&mut m, SenateJointResolution, ProvKillSuspensionfailed, PassedConstamend);
    add(&mut m, SenateJointResolution, ProvKillCloturefailed, PassOverSenate);
    add(&mut m, SenateJointResolution, ProvKillPingpongfail, PassedConstamend);

    m
}

// ---------------------------------------------------------------------------
// Prediction
// ---------------------------------------------------------------------------

/// The next step for a bill of the given type in the given status, if the
/// diagram defines one. Statuses with no outgoing edge (outcomes, and paths
/// we do not predict across, like failed votes in the second chamber) yield
/// `None`.
pub fn next_step(bill_type: BillType, status: BillStatus) -> Option<Step> {
    edges().get(&(bill_type, status)).copied()
}

/// The bill type whose paths apply. A joint resolution that does not propose
/// a constitutional amendment follows the ordinary bill path of its chamber.
pub fn effective_type(bill_type: BillType, title: &str) -> BillType {
    if bill_type.is_joint_resolution() && !title.contains("Proposing an Amendment") {
        bill_type.chamber_bill()
    } else {
        bill_type
    }
}

/// Labels of the major steps a bill would still go through if it kept
/// advancing, in order. Empty when the diagram has nowhere to go from the
/// current status. The walk is capped at the number of statuses so a bad
/// edit to the diagram cannot loop forever.
pub fn future_path(bill_type: BillType, status: BillStatus, title: &str) -> Vec<String> {
    let bt = effective_type(bill_type, title);
    let mut seq = Vec::new();
    let mut st = status;
    for _ in 0..BillStatus::all().len() {
        let Some(step) = next_step(bt, st) else { break };
        seq.push(step.display_label().to_string());
        st = step.to;
    }
    seq
}

/// Predicts the remaining major steps for a bill from its current status.
pub fn predict_future(bill: &Bill) -> Vec<String> {
    future_path(bill.id.bill_type, bill.current_status, &bill.title)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_bill_full_path() {
        let path = future_path(BillType::HouseBill, BillStatus::Introduced, "An Act");
        assert_eq!(
            path,
            vec![
                "Referred",
                "Reported",
                "Passed House",
                "Passed Senate",
                "Enacted (Signed by the President)",
            ]
        );
    }

    #[test]
    fn referred_house_bill() {
        let path = future_path(BillType::HouseBill, BillStatus::Referred, "An Act");
        assert_eq!(
            path,
            vec![
                "Reported",
                "Passed House",
                "Passed Senate",
                "Enacted (Signed by the President)",
            ]
        );
    }

    #[test]
    fn senate_bill_paths_mirror_house() {
        let path = future_path(BillType::SenateBill, BillStatus::Reported, "An Act");
        assert_eq!(
            path,
            vec![
                "Passed Senate",
                "Passed House",
                "Enacted (Signed by the President)",
            ]
        );
    }

    #[test]
    fn simple_resolution_ends_at_agreement() {
        let path = future_path(BillType::HouseResolution, BillStatus::Introduced, "A Res");
        assert_eq!(
            path,
            vec!["Referred", "Reported", "Agreed To (Simple Resolution)"]
        );
    }

    #[test]
    fn house_resolution_passed_house_is_a_dead_end() {
        // Quirk of the diagram: a House simple resolution revived after a
        // failed suspension vote is predicted to pass the House, and the
        // prediction stops there.
        let path = future_path(
            BillType::HouseResolution,
            BillStatus::ProvKillSuspensionfailed,
            "A Res",
        );
        assert_eq!(path, vec!["Passed House"]);
    }

    #[test]
    fn concurrent_resolution_never_reaches_president() {
        let path = future_path(
            BillType::SenateConcurrentResolution,
            BillStatus::PassOverSenate,
            "A Con Res",
        );
        assert_eq!(path, vec!["Passed House"]);
        assert!(next_step(
            BillType::SenateConcurrentResolution,
            BillStatus::PassedConcurrentres
        )
        .is_none());
    }

    #[test]
    fn amendment_joint_resolution_goes_to_the_states() {
        let title = "Proposing an Amendment to the Constitution of the United States";
        let path = future_path(BillType::HouseJointResolution, BillStatus::Reported, title);
        assert_eq!(
            path,
            vec![
                "Passed House",
                "Agreed To (Constitutional Amendment Proposal)",
            ]
        );
    }

    #[test]
    fn ordinary_joint_resolution_follows_the_bill_path() {
        let title = "Making further continuing appropriations for fiscal year 2011";
        assert_eq!(
            effective_type(BillType::HouseJointResolution, title),
            BillType::HouseBill
        );
        let path = future_path(BillType::HouseJointResolution, BillStatus::Reported, title);
        assert_eq!(
            path,
            vec![
                "Passed House",
                "Passed Senate",
                "Enacted (Signed by the President)",
            ]
        );
    }

    #[test]
    fn effective_type_leaves_other_types_alone() {
        assert_eq!(
            effective_type(BillType::SenateBill, "Whatever"),
            BillType::SenateBill
        );
        assert_eq!(
            effective_type(
                BillType::SenateJointResolution,
                "Proposing an Amendment to the Constitution"
            ),
            BillType::SenateJointResolution
        );
    }

    #[test]
    fn veto_override_path() {
        let path = future_path(BillType::SenateBill, BillStatus::ProvKillVeto, "An Act");
        assert_eq!(path, vec!["Senate Overrides Veto", "Enacted (Veto Overridden)"]);
    }

    #[test]
    fn pingpong_failure_labels_both_chambers() {
        let path = future_path(
            BillType::SenateBill,
            BillStatus::ProvKillPingpongfail,
            "An Act",
        );
        assert_eq!(
            path,
            vec!["Passed Senate/House", "Enacted (Signed by the President)"]
        );
    }

    #[test]
    fn terminal_statuses_predict_nothing() {
        for status in BillStatus::all().iter().filter(|s| s.is_final()) {
            for bt in BillType::all() {
                assert!(
                    future_path(*bt, *status, "Anything").is_empty(),
                    "{bt} {status}"
                );
            }
        }
    }

    #[test]
    fn every_predicted_path_terminates() {
        // The cap exists as a guard; no authored path comes close to it.
        for bt in BillType::all() {
            for status in BillStatus::all() {
                let path = future_path(*bt, *status, "Anything");
                assert!(path.len() < 8, "{bt} {status}: {path:?}");
            }
        }
    }
}
