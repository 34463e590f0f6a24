use crate::domain::model::VideoRecord;

/// Keeps the records whose title+description mention the stock's symbol or
/// company name, case-insensitively, as a plain substring.
///
/// Title and description are concatenated with no separator, and there is no
/// word-boundary check: symbol "BA" matches inside "basement". Both quirks
/// are load-bearing for compatibility with existing results. Relative order
/// is preserved and nothing is deduplicated.
pub fn find_mentions(
    records: Vec<VideoRecord>,
    symbol: &str,
    company_name: &str,
) -> Vec<VideoRecord> {
    let symbol_needle = symbol.to_lowercase();
    let company_needle = company_name.to_lowercase();

    records
        .into_iter()
        .filter(|record| {
            let haystack = format!("{}{}", record.title, record.description).to_lowercase();
            haystack.contains(&symbol_needle) || haystack.contains(&company_needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, description: &str) -> VideoRecord {
        VideoRecord {
            published_at: "2024-01-01T00:00:00Z".to_string(),
            title: title.to_string(),
            description: description.to_string(),
            channel_name: "Test Channel".to_string(),
        }
    }

    #[test]
    fn test_matches_symbol_and_company_independently() {
        let records = vec![record("the BA and Boeing outlook", "")];

        // Symbol alone
        let matched = find_mentions(records.clone(), "BA", "NoSuchCompany");
        assert_eq!(matched.len(), 1);

        // Company name alone
        let matched = find_mentions(records, "ZZ", "Boeing");
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_case_insensitive() {
        let records = vec![record("TESLA delivery numbers", "quarterly update")];
        let matched = find_mentions(records, "TSLA", "Tesla");
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_substring_false_positive_preserved() {
        // "BA" inside "basement" counts as a mention. Compatibility, not a bug.
        let records = vec![record("basement stocks", "")];
        let matched = find_mentions(records, "BA", "Boeing");
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_match_spans_title_description_boundary() {
        // No separator between title and description, so a needle can span
        // the join point.
        let records = vec![record("outlook for B", "A and others")];
        let matched = find_mentions(records, "BA", "Boeing");
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_non_matching_records_dropped_order_preserved() {
        let records = vec![
            record("Tesla hits new high", ""),
            record("unrelated news", "nothing here"),
            record("morning brief", "Tesla deliveries beat"),
        ];
        let matched = find_mentions(records, "TSLA", "Tesla");
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].title, "Tesla hits new high");
        assert_eq!(matched[1].title, "morning brief");
    }

    #[test]
    fn test_empty_input() {
        let matched = find_mentions(Vec::new(), "TSLA", "Tesla");
        assert!(matched.is_empty());
    }
}
