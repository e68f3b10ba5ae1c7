use super::models::{GymRecord, RawGymRecord};
use super::sql::{jsonb_literal, make_point, quote_literal};
use super::validator::{GymValidator, SkippedRecord};
use crate::Result;
use crate::chain::ChainConfig;
use std::fmt::Write;
use tracing::{debug, info, warn};

/// Database-side function producing public identifiers.
const PUB_ID_FN: &str = "gen_nanoid_21()";

const GYM_COLUMNS: [&str; 5] = [
    "pub_id",
    "name",
    "gymchain_rel_id",
    "gymchain_internal_id",
    "location",
];

/// Generated SQL together with what went into it.
#[derive(Debug)]
pub struct SqlScript {
    pub sql: String,
    pub total: usize,
    pub inserted: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl SqlScript {
    pub fn log_warnings(&self) {
        for skipped in &self.skipped {
            warn!("{}", skipped);
        }
    }
}

/// Renders the chain registration and the bulk gym insert for one chain.
pub struct SqlGenerator<'a> {
    chain: &'a ChainConfig,
}

impl<'a> SqlGenerator<'a> {
    pub fn new(chain: &'a ChainConfig) -> Self {
        Self { chain }
    }

    pub fn generate(&self, records: &[RawGymRecord]) -> Result<SqlScript> {
        let report = GymValidator::validate_all(records);
        info!(
            "Validated {} gym(s) for {}: {} accepted, {} skipped",
            records.len(),
            self.chain.name,
            report.gyms.len(),
            report.skipped.len()
        );

        let mut sql = String::new();
        let chain_name = quote_literal(self.chain.name);
        let alias = self.chain.cte_alias;

        writeln!(
            sql,
            "-- {} gym data: {} gyms to process",
            self.chain.name,
            records.len()
        )?;
        writeln!(sql)?;

        writeln!(sql, "-- 1. Register gym chain {}", self.chain.name)?;
        writeln!(sql, "INSERT INTO gymchains_master (pub_id, name) VALUES")?;
        writeln!(sql, "({}, {});", PUB_ID_FN, chain_name)?;
        writeln!(sql)?;

        writeln!(sql, "-- 2. Insert gyms")?;
        writeln!(sql, "-- Resolve the gym chain id by name and insert gyms")?;
        writeln!(sql, "WITH {} AS (", alias)?;
        writeln!(
            sql,
            "    SELECT rel_id FROM gymchains_master WHERE name = {}",
            chain_name
        )?;
        writeln!(sql, ")")?;
        writeln!(sql, "INSERT INTO gyms_master (")?;
        writeln!(sql, "    {}", GYM_COLUMNS.join(",\n    "))?;
        writeln!(sql, ")")?;
        writeln!(sql, "SELECT * FROM (VALUES")?;

        let rows = report
            .gyms
            .iter()
            .map(|gym| self.value_row(gym))
            .collect::<Result<Vec<_>>>()?;
        if !rows.is_empty() {
            writeln!(sql, "{}", rows.join(",\n"))?;
        }

        writeln!(sql, ") AS gym_data({});", GYM_COLUMNS.join(", "))?;
        writeln!(sql)?;

        writeln!(sql, "-- Done!")?;
        writeln!(sql, "-- Total gyms: {}", records.len())?;
        writeln!(
            sql,
            "-- Inserted: {}, skipped: {}",
            rows.len(),
            report.skipped.len()
        )?;

        Ok(SqlScript {
            sql,
            total: records.len(),
            inserted: rows.len(),
            skipped: report.skipped,
        })
    }

    fn value_row(&self, gym: &GymRecord) -> Result<String> {
        debug!("Rendering gym '{}'", gym.name);
        Ok(format!(
            "    ({}, {}, (SELECT rel_id FROM {}), {}, {})",
            PUB_ID_FN,
            quote_literal(&gym.name),
            self.chain.cte_alias,
            jsonb_literal(&gym.internal_id())?,
            make_point(gym.latitude, gym.longitude)
        ))
    }
}
