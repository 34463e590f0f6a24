use crate::domain::model::StockEntry;
use crate::utils::error::{PulseError, Result};
use std::collections::HashMap;

/// The fixed symbol table the app knows about. Exposed so the prompt can list
/// the covered companies.
pub const STOCK_TABLE: &[(&str, &str)] = &[
    ("AAPL", "Apple"),
    ("TSLA", "Tesla"),
    ("GOOGL", "Google"),
    ("MSFT", "Microsoft"),
    ("AMZN", "Amazon"),
    ("META", "Meta Platforms"),
    ("NFLX", "Netflix"),
    ("NVDA", "NVIDIA"),
    ("BRK-B", "Berkshire Hathaway"),
    ("JPM", "JPMorgan Chase"),
    ("V", "Visa"),
    ("MA", "Mastercard"),
    ("DIS", "Walt Disney"),
    ("BA", "Boeing"),
    ("HD", "Home Depot"),
    ("IBM", "IBM"),
    ("PFE", "Pfizer"),
    ("CSCO", "Cisco Systems"),
    ("ADBE", "Adobe"),
    ("INTC", "Intel"),
    ("ORCL", "Oracle"),
    ("COST", "Costco"),
    ("WMT", "Walmart"),
    ("T", "AT&T"),
    ("KO", "Coca-Cola"),
    ("XOM", "ExxonMobil"),
    ("CVX", "Chevron"),
    ("LMT", "Lockheed Martin"),
    ("MCD", "McDonald's"),
    ("NKE", "Nike"),
    ("UNH", "UnitedHealth Group"),
    ("MDT", "Medtronic"),
    ("GILD", "Gilead Sciences"),
    ("MRK", "Merck"),
    ("ABBV", "AbbVie"),
    ("BMY", "Bristol-Myers Squibb"),
    ("TXN", "Texas Instruments"),
    ("SBUX", "Starbucks"),
    ("GS", "Goldman Sachs"),
    ("USB", "U.S. Bancorp"),
    ("SCHW", "Charles Schwab"),
    ("AMT", "American Tower"),
    ("DHR", "Danaher"),
    ("UNP", "Union Pacific"),
    ("CAT", "Caterpillar"),
    ("UPS", "United Parcel Service"),
    ("TMO", "Thermo Fisher Scientific"),
    ("CME", "CME Group"),
    ("TGT", "Target"),
    ("DE", "Deere & Co"),
    ("CVS", "CVS Health"),
    ("AON", "Aon"),
    ("AIG", "American International Group"),
    ("BNS", "Bank of Nova Scotia"),
    ("RBLX", "Roblox"),
    ("SHOP", "Shopify"),
    ("TWTR", "Twitter"),
    ("SPOT", "Spotify"),
    ("SNOW", "Snowflake"),
    ("BYND", "Beyond Meat"),
    ("PINS", "Pinterest"),
    ("SQ", "Square"),
    ("PLTR", "Palantir Technologies"),
];

/// Bidirectional symbol lookup, built once at startup and shared read-only
/// across queries. The two indexes are co-maintained: every entry is present
/// in both, keyed by lowercase symbol and lowercase company name.
#[derive(Debug)]
pub struct StockIndex {
    by_symbol: HashMap<String, StockEntry>,
    by_company: HashMap<String, String>,
}

impl StockIndex {
    /// Builds both indexes together, rejecting duplicate symbols and company
    /// names that collide under lowercasing.
    pub fn build<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = StockEntry>,
    {
        let mut by_symbol = HashMap::new();
        let mut by_company = HashMap::new();

        for entry in entries {
            let symbol_key = entry.symbol.to_lowercase();
            let company_key = entry.company_name.to_lowercase();

            if by_symbol.contains_key(&symbol_key) {
                return Err(PulseError::ConfigError {
                    message: format!("duplicate stock symbol: {}", entry.symbol),
                });
            }
            if by_company.contains_key(&company_key) {
                return Err(PulseError::ConfigError {
                    message: format!(
                        "company name collides under lowercasing: {}",
                        entry.company_name
                    ),
                });
            }

            by_company.insert(company_key, symbol_key.clone());
            by_symbol.insert(symbol_key, entry);
        }

        Ok(Self {
            by_symbol,
            by_company,
        })
    }

    pub fn with_default_table() -> Result<Self> {
        Self::build(STOCK_TABLE.iter().map(|(symbol, name)| StockEntry {
            symbol: (*symbol).to_string(),
            company_name: (*name).to_string(),
        }))
    }

    /// Exact case-insensitive lookup, first by ticker, then by company name.
    /// The ticker path is checked first so the result is deterministic if a
    /// company name ever looks like a ticker. No fuzzy matching.
    pub fn resolve(&self, input: &str) -> Option<&StockEntry> {
        let key = input.trim().to_lowercase();

        if let Some(entry) = self.by_symbol.get(&key) {
            return Some(entry);
        }
        self.by_company
            .get(&key)
            .and_then(|symbol_key| self.by_symbol.get(symbol_key))
    }

    /// Company display names, sorted, for the prompt.
    pub fn company_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .by_symbol
            .values()
            .map(|e| e.company_name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_ticker_any_case() {
        let index = StockIndex::with_default_table().unwrap();

        for input in ["TSLA", "tsla", "TsLa"] {
            let entry = index.resolve(input).unwrap();
            assert_eq!(entry.symbol, "TSLA");
            assert_eq!(entry.company_name, "Tesla");
        }
    }

    #[test]
    fn test_resolve_by_company_name_any_case() {
        let index = StockIndex::with_default_table().unwrap();

        for input in ["Tesla", "tesla", "TESLA "] {
            let entry = index.resolve(input).unwrap();
            assert_eq!(entry.symbol, "TSLA");
        }

        let entry = index.resolve("berkshire hathaway").unwrap();
        assert_eq!(entry.symbol, "BRK-B");
    }

    #[test]
    fn test_resolve_unknown_input() {
        let index = StockIndex::with_default_table().unwrap();

        assert!(index.resolve("zzzz").is_none());
        assert!(index.resolve("").is_none());
        assert!(index.resolve("Tes").is_none()); // no partial matching
    }

    #[test]
    fn test_ticker_path_takes_precedence() {
        // A company name that equals another entry's ticker must resolve
        // through the ticker index.
        let index = StockIndex::build(vec![
            StockEntry {
                symbol: "ABC".to_string(),
                company_name: "Alphabet Consolidated".to_string(),
            },
            StockEntry {
                symbol: "XYZ".to_string(),
                company_name: "ABC".to_string(),
            },
        ])
        .unwrap();

        let entry = index.resolve("abc").unwrap();
        assert_eq!(entry.symbol, "ABC");
    }

    #[test]
    fn test_build_rejects_duplicate_symbol() {
        let result = StockIndex::build(vec![
            StockEntry {
                symbol: "AAPL".to_string(),
                company_name: "Apple".to_string(),
            },
            StockEntry {
                symbol: "aapl".to_string(),
                company_name: "Apple Hospitality".to_string(),
            },
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_rejects_company_name_collision() {
        let result = StockIndex::build(vec![
            StockEntry {
                symbol: "AAA".to_string(),
                company_name: "Acme".to_string(),
            },
            StockEntry {
                symbol: "BBB".to_string(),
                company_name: "ACME".to_string(),
            },
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_table_builds_cleanly() {
        let index = StockIndex::with_default_table().unwrap();
        assert_eq!(index.len(), STOCK_TABLE.len());
    }
}
