prototype_id!(
    /// Catalog key of a disease prototype.
    DiseaseId
);

prototype_id!(
    /// Catalog key of a symptom prototype.
    SymptomId
);

prototype_id!(
    /// Key of a reagent in a carrier's chemical store.
    ReagentId
);

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn serializes_as_plain_string() {
        let id = DiseaseId::from("space_flu");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"space_flu\"");
        let back: DiseaseId = serde_json::from_str("\"space_flu\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(SymptomId::from("cough"), 1);
        assert_eq!(map.get("cough"), Some(&1));
        assert_eq!(map.get("sneeze"), None);
    }

    #[test]
    fn display_matches_inner() {
        assert_eq!(ReagentId::new("spaceacillin").to_string(), "spaceacillin");
    }
}
