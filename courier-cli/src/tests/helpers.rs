//! Test helpers for composing scenario files on disk.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use courier_core::test_support::{loc, request};
use courier_core::{CarrierProfile, City, Location, PlanRequest, Road, TopologySpec};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary directory holding a scenario path.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) scenario: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let scenario = root.join("scenario.json");
        Self {
            _dir: dir,
            root,
            scenario,
        }
    }

    pub(super) fn write_scenario(&self, scenario: &Scenario) {
        let payload = serde_json::to_string_pretty(scenario).expect("serialize scenario");
        write_utf8(&self.scenario, payload.as_bytes());
    }
}

/// Three cities on a line, 2 then 3 units apart.
pub(super) fn line_topology() -> TopologySpec {
    let city = |id: u32| City {
        id: Location::new(id),
        name: format!("stop-{id}"),
    };
    TopologySpec {
        cities: vec![city(1), city(2), city(3)],
        roads: vec![
            Road {
                from: loc(1),
                to: loc(2),
                length: 2.0,
            },
            Road {
                from: loc(2),
                to: loc(3),
                length: 3.0,
            },
        ],
    }
}

/// One parcel from city 1 to city 3 for a carrier waiting at city 1.
pub(super) fn sample_scenario() -> Scenario {
    Scenario {
        topology: line_topology(),
        request: PlanRequest {
            carrier: CarrierProfile::new(loc(1), 10, 1.5),
            available: vec![request(1, 1, 3, 4)],
            carried: Vec::new(),
        },
    }
}

pub(super) fn plan_args(scenario: &Utf8Path) -> PlanArgs {
    PlanArgs {
        scenario: Some(scenario.to_path_buf()),
        ..PlanArgs::default()
    }
}
