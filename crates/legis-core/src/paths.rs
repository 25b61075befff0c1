use crate::bill::BillId;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Data-root layout
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = "config.yaml";
pub const BILLS_DIR: &str = "bills";

pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn congress_dir(root: &Path, congress: u16) -> PathBuf {
    root.join(congress.to_string())
}

pub fn bills_dir(root: &Path, congress: u16) -> PathBuf {
    congress_dir(root, congress).join(BILLS_DIR)
}

/// File holding one bill, named by slug and number: `112/bills/hr627.yaml`.
pub fn bill_file(root: &Path, id: &BillId) -> PathBuf {
    bills_dir(root, id.congress).join(format!("{}{}.yaml", id.bill_type.slug(), id.number))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn path_helpers() {
        let root = Path::new("/srv/legis/data");
        assert_eq!(
            config_file(root),
            PathBuf::from("/srv/legis/data/config.yaml")
        );
        assert_eq!(bills_dir(root, 112), PathBuf::from("/srv/legis/data/112/bills"));

        let id = BillId::from_str("sconres3-111").unwrap();
        assert_eq!(
            bill_file(root, &id),
            PathBuf::from("/srv/legis/data/111/bills/sconres3.yaml")
        );
    }
}
