//! Store-layout slot planning
//!
//! Turns one season's association data into the four display slots of the
//! store diagram. The precedence is fixed and visually meaningful: grouped
//! associations fill the left aisle before leftover categories, the most
//! frequent category stands alone at the entry, and its top associates claim
//! the middle aisle before any filler does.

use contracts::dashboards::d100_store_layout::AssociationPair;
use std::collections::HashSet;

pub const S1_CAPACITY: usize = 4;
pub const S2_CAPACITY: usize = 2;
pub const S4_CAPACITY: usize = 4;

/// Slot assignment for one render of the store diagram
///
/// Derived state: recomputed from the current data on every render, never
/// stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotPlan {
    /// Left aisle, up to 4 categories
    pub s1: Vec<String>,
    /// Middle aisle, up to 2 categories
    pub s2: Vec<String>,
    /// Entry slot, the most frequent category alone
    pub s3: Option<String>,
    /// Right aisle, up to 4 categories
    pub s4: Vec<String>,
}

/// Partition `categories` into the four display slots
///
/// Pure and deterministic. Order of the input lists is preserved throughout;
/// a category consumed as S1 padding is not offered to S4 again.
pub fn plan_slots(
    associations: &[AssociationPair],
    most_frequent: &str,
    categories: &[String],
) -> SlotPlan {
    // Partners of the most frequent category, in source order
    let top_associates: Vec<&str> = associations
        .iter()
        .filter_map(|pair| pair.partner_of(most_frequent))
        .collect();

    // Every category that appears in any pair, used only to compute leftovers
    let associated: HashSet<&str> = associations
        .iter()
        .flat_map(|pair| [pair.0.as_str(), pair.1.as_str()])
        .collect();

    let remaining: Vec<&str> = categories
        .iter()
        .map(String::as_str)
        .filter(|cat| *cat != most_frequent && !associated.contains(cat))
        .collect();

    // Group the pairs that do not touch the most frequent category by their
    // first member, keeping first-seen order of keys and partners. Each group
    // starts with its key so the flattened output keeps the key category.
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    for pair in associations.iter().filter(|p| !p.contains(most_frequent)) {
        let key = pair.0.as_str();
        let partner = pair.1.as_str();
        let idx = match groups.iter().position(|(k, _)| *k == key) {
            Some(idx) => idx,
            None => {
                groups.push((key, vec![key]));
                groups.len() - 1
            }
        };
        if !groups[idx].1.contains(&partner) {
            groups[idx].1.push(partner);
        }
    }

    // S1: grouped associations first, padded from the front of the remaining
    // list. Padding is consumed so S4 cannot reuse it.
    let mut s1: Vec<&str> = groups
        .iter()
        .flat_map(|(_, members)| members.iter().copied())
        .take(S1_CAPACITY)
        .collect();
    let padding = (S1_CAPACITY - s1.len()).min(remaining.len());
    s1.extend(remaining[..padding].iter().copied());

    let s4: Vec<&str> = remaining[padding..]
        .iter()
        .copied()
        .take(S4_CAPACITY)
        .collect();

    // S2: top associates when there are any; otherwise the front of the
    // original remaining list, independent of what S1 consumed.
    let s2: Vec<&str> = if top_associates.is_empty() {
        remaining.iter().copied().take(S2_CAPACITY).collect()
    } else {
        top_associates.into_iter().take(S2_CAPACITY).collect()
    };

    let s3 = if most_frequent.is_empty() {
        None
    } else {
        Some(most_frequent.to_string())
    };

    SlotPlan {
        s1: s1.into_iter().map(str::to_string).collect(),
        s2: s2.into_iter().map(str::to_string).collect(),
        s3,
        s4: s4.into_iter().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> AssociationPair {
        AssociationPair(a.to_string(), b.to_string())
    }

    fn categories(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_grouped_associations_before_filler() {
        let cats = categories(&["A", "B", "C", "D", "E", "F", "G", "H"]);
        let assocs = vec![pair("A", "B"), pair("A", "C"), pair("D", "E")];

        let plan = plan_slots(&assocs, "A", &cats);

        assert_eq!(plan.s1, vec!["D", "E", "F", "G"]);
        assert_eq!(plan.s2, vec!["B", "C"]);
        assert_eq!(plan.s3.as_deref(), Some("A"));
        assert_eq!(plan.s4, vec!["H"]);
    }

    #[test]
    fn test_no_associations_falls_back_to_remaining() {
        let cats = categories(&["A", "B", "C", "D", "E", "F", "G", "H"]);

        let plan = plan_slots(&[], "A", &cats);

        // remaining = everything but the most frequent category
        assert_eq!(plan.s1, vec!["B", "C", "D", "E"]);
        assert_eq!(plan.s4, vec!["F", "G", "H"]);
        // fallback reads the original remaining list, not the leftovers of S1
        assert_eq!(plan.s2, vec!["B", "C"]);
        assert_eq!(plan.s3.as_deref(), Some("A"));
    }

    #[test]
    fn test_empty_inputs_render_empty_slots() {
        let plan = plan_slots(&[], "", &[]);
        assert_eq!(plan, SlotPlan::default());
    }

    #[test]
    fn test_most_frequent_isolated_in_s3() {
        let cats = categories(&["Dairy", "Bakery", "Meat", "Seafood", "Snacks", "Deli"]);
        let assocs = vec![pair("Dairy", "Bakery"), pair("Meat", "Seafood")];

        let plan = plan_slots(&assocs, "Dairy", &cats);

        assert_eq!(plan.s3.as_deref(), Some("Dairy"));
        for slot in [&plan.s1, &plan.s2, &plan.s4] {
            assert!(!slot.contains(&"Dairy".to_string()));
        }
    }

    #[test]
    fn test_capacities_never_exceeded() {
        let cats = categories(&[
            "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
        ]);
        let assocs = vec![
            pair("A", "B"),
            pair("A", "C"),
            pair("A", "D"),
            pair("E", "F"),
            pair("E", "G"),
            pair("H", "I"),
        ];

        let plan = plan_slots(&assocs, "A", &cats);

        assert_eq!(plan.s1.len(), S1_CAPACITY);
        assert_eq!(plan.s2.len(), S2_CAPACITY);
        assert!(plan.s4.len() <= S4_CAPACITY);
        // groups flatten in first-seen order: E group fills before H group
        assert_eq!(plan.s1, vec!["E", "F", "G", "H"]);
        // three associates truncate to two, source order kept
        assert_eq!(plan.s2, vec!["B", "C"]);
    }

    #[test]
    fn test_s1_padding_is_consumed_before_s4() {
        let cats = categories(&["A", "B", "C", "D", "X", "Y", "Z", "W"]);
        let assocs = vec![pair("A", "B"), pair("C", "D")];

        let plan = plan_slots(&assocs, "A", &cats);

        // grouping yields [C, D]; padding takes X and Y
        assert_eq!(plan.s1, vec!["C", "D", "X", "Y"]);
        assert_eq!(plan.s4, vec!["Z", "W"]);
        for padded in ["X", "Y"] {
            assert!(!plan.s4.contains(&padded.to_string()));
        }
    }

    #[test]
    fn test_duplicate_pairs_grouped_once() {
        let cats = categories(&["P", "Q", "R", "S"]);
        let assocs = vec![pair("P", "Q"), pair("P", "Q"), pair("P", "R")];

        let plan = plan_slots(&assocs, "", &cats);

        assert_eq!(plan.s1, vec!["P", "Q", "R", "S"]);
        assert_eq!(plan.s3, None);
    }

    #[test]
    fn test_idempotent_for_identical_input() {
        let cats = categories(&["A", "B", "C", "D", "E", "F"]);
        let assocs = vec![pair("A", "B"), pair("C", "D")];

        let first = plan_slots(&assocs, "A", &cats);
        let second = plan_slots(&assocs, "A", &cats);

        assert_eq!(first, second);
    }
}
