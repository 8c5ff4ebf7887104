use serde::{Deserialize, Serialize};

/// Two product categories observed to co-occur in purchases
///
/// The pair is unordered; on the wire it is a JSON 2-array, e.g.
/// `["Dairy", "Bakery"]`. No strength is carried beyond the position of the
/// pair in the response list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationPair(pub String, pub String);

impl AssociationPair {
    pub fn contains(&self, category: &str) -> bool {
        self.0 == category || self.1 == category
    }

    /// The other member of the pair, if `category` is one of the two
    pub fn partner_of(&self, category: &str) -> Option<&str> {
        if self.0 == category {
            Some(&self.1)
        } else if self.1 == category {
            Some(&self.0)
        } else {
            None
        }
    }
}

/// Response for the seasonal associations endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalAssociationsResponse {
    /// Co-purchase pairs for the season, strongest first
    pub associations: Vec<AssociationPair>,
    /// The single most frequently purchased category for the season
    pub most_frequent_item: String,
    /// Every category present in the season's transactions
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_parses() {
        let body = r#"{
            "associations": [["Dairy", "Bakery"], ["Meat", "Seafood"]],
            "most_frequent_item": "Dairy",
            "categories": ["Dairy", "Bakery", "Meat", "Seafood", "Snacks"]
        }"#;
        let response: SeasonalAssociationsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.associations.len(), 2);
        assert_eq!(
            response.associations[0],
            AssociationPair("Dairy".into(), "Bakery".into())
        );
        assert_eq!(response.most_frequent_item, "Dairy");
        assert_eq!(response.categories.len(), 5);
    }

    #[test]
    fn test_pair_serializes_as_array() {
        let pair = AssociationPair("Deli".into(), "Produce".into());
        assert_eq!(
            serde_json::to_string(&pair).unwrap(),
            r#"["Deli","Produce"]"#
        );
    }

    #[test]
    fn test_partner_lookup() {
        let pair = AssociationPair("Dairy".into(), "Bakery".into());
        assert_eq!(pair.partner_of("Dairy"), Some("Bakery"));
        assert_eq!(pair.partner_of("Bakery"), Some("Dairy"));
        assert_eq!(pair.partner_of("Meat"), None);
        assert!(pair.contains("Dairy"));
        assert!(!pair.contains("Meat"));
    }
}
