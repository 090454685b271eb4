//! Answer Aggregator: reduces raw per-question answers into per-domain
//! maturity averages.

use crate::core::errors::{Error, Result};
use crate::core::types::{
    round2, AnswerRecord, DomainMaturity, DEFAULT_TARGET_LEVEL, MAX_MATURITY_LEVEL,
};
use std::collections::HashMap;

/// Aggregate answers into per-domain averages with the default target ceiling
pub fn aggregate(records: &[AnswerRecord]) -> Result<Vec<DomainMaturity>> {
    aggregate_with_target(records, DEFAULT_TARGET_LEVEL)
}

/// Aggregate answers into per-domain averages against an explicit target.
///
/// Domains appear in the output in the order they are first encountered in
/// the input; domains with zero answers never appear at all. An empty input
/// yields an empty output rather than an error.
pub fn aggregate_with_target(
    records: &[AnswerRecord],
    target_level: f64,
) -> Result<Vec<DomainMaturity>> {
    let mut groups: Vec<DomainGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        validate_record(record)?;

        match index.get(&record.domain_id) {
            Some(&i) => groups[i].push(record.maturity_level),
            None => {
                index.insert(record.domain_id.clone(), groups.len());
                groups.push(DomainGroup::new(record));
            }
        }
    }

    Ok(groups
        .into_iter()
        .map(|g| g.into_maturity(target_level))
        .collect())
}

/// Running sum/count for one domain, in first-appearance order
struct DomainGroup {
    domain_id: String,
    domain_name: String,
    sum: u32,
    count: u32,
}

impl DomainGroup {
    fn new(record: &AnswerRecord) -> Self {
        Self {
            domain_id: record.domain_id.clone(),
            domain_name: record.domain_name.clone(),
            sum: u32::from(record.maturity_level),
            count: 1,
        }
    }

    fn push(&mut self, level: u8) {
        self.sum += u32::from(level);
        self.count += 1;
    }

    fn into_maturity(self, target_level: f64) -> DomainMaturity {
        DomainMaturity {
            domain_id: self.domain_id,
            domain_name: self.domain_name,
            current_level: round2(f64::from(self.sum) / f64::from(self.count)),
            target_level,
        }
    }
}

fn validate_record(record: &AnswerRecord) -> Result<()> {
    if record.maturity_level > MAX_MATURITY_LEVEL {
        return Err(Error::invalid_answer(record));
    }
    Ok(())
}
