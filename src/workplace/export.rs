//! Export the simulation history to JSON

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::workplace::company::Company;
use crate::workplace::history::{DayLog, HistoryStats};
use crate::workplace::types::EmployeeId;

/// Exported simulation data
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryExport {
    pub seed: u64,
    pub stats: HistoryStats,
    pub roster: Vec<RosterEntry>,
    pub days: Vec<DayLog>,
}

/// Everyone who ever worked at the company, so ids in `days` can be resolved
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: EmployeeId,
    pub name: String,
    pub age: u32,
    pub disposition: f64,
    pub hourly_wage: f64,
    pub current: bool,
}

impl HistoryExport {
    pub fn from_company(company: &Company, seed: u64) -> Self {
        let current = company.employees.values().map(|e| (e, true));
        let former = company.former_employees.values().map(|e| (e, false));
        let mut roster: Vec<RosterEntry> = current
            .chain(former)
            .map(|(e, current)| RosterEntry {
                id: e.id,
                name: e.full_name(),
                age: e.person.age,
                disposition: e.disposition,
                hourly_wage: e.hourly_wage,
                current,
            })
            .collect();
        roster.sort_by_key(|r| r.id);

        HistoryExport {
            seed,
            stats: HistoryStats::from_days(&company.history),
            roster,
            days: company.history.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the export to a file
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workplace::params::CompanyParams;
    use crate::workplace::simulation::WorkplaceSim;

    #[test]
    fn test_export_round_trips_days() {
        let mut sim = WorkplaceSim::new(CompanyParams::default(), 21).unwrap();
        sim.run_days(9);
        let export = HistoryExport::from_company(&sim.company, sim.seed);
        assert_eq!(export.stats.days, 9);
        assert_eq!(
            export.roster.len(),
            sim.company.employees.len() + sim.company.former_employees.len()
        );

        let json = export.to_json().unwrap();
        let back: HistoryExport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.days, sim.company.history);
        assert_eq!(back.seed, 21);
    }
}
