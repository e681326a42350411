//! Concurrent-position expansion
//!
//! Adds secondary-department rows for a share of each month's snapshot.
//! Secondary rows carry the same employee id and are flagged
//! `is_primary_position = false`; they never feed back into the population.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::Catalog;
use crate::core::config::GeneratorConfig;
use crate::core::types::RankGroup;
use crate::workforce::factory::pick;
use crate::workforce::monthly::SnapshotRow;
use crate::workforce::rules;

/// Expand one month's rows with secondary positions
///
/// When concurrent positions are disabled the rows come back unchanged
/// (all primary). Otherwise each primary row is followed by its secondary
/// row, if one was drawn.
pub fn expand(
    rows: Vec<SnapshotRow>,
    config: &GeneratorConfig,
    catalog: &Catalog,
    rng: &mut ChaCha8Rng,
) -> Vec<SnapshotRow> {
    if !config.include_concurrent_positions {
        return rows
            .into_iter()
            .map(|mut row| {
                row.is_primary_position = true;
                row
            })
            .collect();
    }

    let mut expanded = Vec::with_capacity(rows.len() + rows.len() / 10);
    for mut row in rows {
        row.is_primary_position = true;
        let secondary = if eligible(&row, catalog) && rng.gen::<f64>() < config.concurrent_position_rate {
            secondary_for(&row, catalog, rng)
        } else {
            None
        };
        expanded.push(row);
        if let Some(secondary) = secondary {
            expanded.push(secondary);
        }
    }

    let added = expanded.len() - expanded.iter().filter(|r| r.is_primary_position).count();
    tracing::trace!(added, "concurrent positions expanded");
    expanded
}

fn eligible(row: &SnapshotRow, catalog: &Catalog) -> bool {
    !row.employee.is_temporary() && catalog.rank_of(row.employee.rung) != RankGroup::Executive
}

/// Copy of `row` moved into a different department, if one exists
fn secondary_for(row: &SnapshotRow, catalog: &Catalog, rng: &mut ChaCha8Rng) -> Option<SnapshotRow> {
    let orgs = &catalog.organizations;
    let current = row.employee.org.lv2.as_deref();
    let others: Vec<String> = orgs
        .org_lv2
        .iter()
        .filter(|dept| Some(dept.as_str()) != current)
        .cloned()
        .collect();
    let department = pick(rng, &others)?;

    let key = rules::department_key_of(&department);
    let mut secondary = row.clone();
    secondary.is_primary_position = false;

    let org = &mut secondary.employee.org;
    // No sub-departments to draw from: lv3 stays as it was
    if let Some(lv3) = pick(rng, catalog.sub_departments(key)) {
        org.lv3 = Some(lv3);
    }
    org.lv4 = pick(rng, &orgs.org_lv4);
    org.lv2 = Some(department);
    org.apply_rank(catalog.rank_of(secondary.employee.rung));

    Some(secondary)
}
