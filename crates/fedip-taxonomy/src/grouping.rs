//! Job-family grouping.
//!
//! Flat families are bucketed by parsed base; pre-nested families keep the
//! buckets their authors gave. Either way each bucket's roles are
//! de-duplicated and ordered by (level rank, collation), and buckets are
//! ordered by collation of their names.

use std::collections::{BTreeMap, BTreeSet};

use fedip_model::{CanonicalFamily, JobFamily, SubBucket};

use crate::collate::locale_cmp;
use crate::parser::RoleParser;

/// Normalises a family into its canonical two-level shape.
pub fn canonicalize(family: &JobFamily) -> CanonicalFamily {
    let parser = RoleParser::new();
    let mut buckets = match family {
        JobFamily::Flat(titles) => group_by_base(&parser, titles),
        JobFamily::Nested(nested) => nested
            .iter()
            .map(|(name, roles)| SubBucket {
                name: name.clone(),
                roles: sort_unique(&parser, roles.iter().cloned()),
            })
            .collect(),
    };
    buckets.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    CanonicalFamily::new(buckets)
}

fn group_by_base(parser: &RoleParser, titles: &[String]) -> Vec<SubBucket> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for title in titles {
        groups
            .entry(parser.parse(title).base)
            .or_default()
            .push(title.clone());
    }
    groups
        .into_iter()
        .map(|(name, roles)| SubBucket {
            name,
            roles: sort_unique(parser, roles),
        })
        .collect()
}

fn sort_unique(parser: &RoleParser, roles: impl IntoIterator<Item = String>) -> Vec<String> {
    let unique: BTreeSet<String> = roles.into_iter().collect();
    let mut roles: Vec<String> = unique.into_iter().collect();
    sort_roles_with(parser, &mut roles);
    roles
}

/// Sorts role titles by level rank, then collation.
fn sort_roles_with(parser: &RoleParser, roles: &mut [String]) {
    let mut keyed: Vec<(usize, String)> = roles
        .iter()
        .map(|title| (parser.parse(title).level.rank(), title.clone()))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| locale_cmp(&a.1, &b.1)));
    for (slot, (_, title)) in roles.iter_mut().zip(keyed) {
        *slot = title;
    }
}
