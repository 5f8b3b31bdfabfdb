mod extractor;

pub use extractor::EntityExtractor;

use regex::Regex;
use shared_types::EntityLabel;

/// One row of the extraction table: a label plus the pattern that
/// recognizes it. Adding a label or a pattern means adding a row,
/// never new control flow.
pub struct EntityPattern {
    pub name: String,
    pub label: EntityLabel,
    pub regex: Regex,
    /// Normalize the captured text to title case (used for the GEO
    /// vocabulary so "new york" and "NEW YORK" both surface as
    /// "New York").
    pub title_case: bool,
}

impl EntityPattern {
    pub fn new(name: &str, label: EntityLabel, pattern: &str, title_case: bool) -> Self {
        Self {
            name: name.to_string(),
            label,
            regex: Regex::new(pattern).unwrap(),
            title_case,
        }
    }
}

/// The default extraction table.
///
/// DATE and GEO are the minimum the timezone detector needs; MONEY,
/// ACCOUNT and BANK feed the transaction detector. Deployments that
/// need a different mix construct the extractor with their own table.
pub fn create_entity_patterns() -> Vec<EntityPattern> {
    vec![
        // Date shapes, broad to narrow: 2023-04-01T03:00, 2023/4/1,
        // 3月4日, 2025年3月10日, 2023年4月, 2023.04.01
        EntityPattern::new(
            "date_iso_or_slash",
            EntityLabel::Date,
            r"\d{4}[-/]\d{1,2}[-/]\d{1,2}(?:T\d{1,2}:\d{1,2})?",
            false,
        ),
        EntityPattern::new("date_cn_month_day", EntityLabel::Date, r"\d{1,2}月\d{1,2}日", false),
        EntityPattern::new(
            "date_cn_full",
            EntityLabel::Date,
            r"\d{4}年\d{1,2}月\d{1,2}日",
            false,
        ),
        EntityPattern::new("date_cn_year_month", EntityLabel::Date, r"\d{4}年\d{1,2}月", false),
        EntityPattern::new(
            "date_dotted",
            EntityLabel::Date,
            r"\d{4}\.\d{1,2}\.\d{1,2}",
            false,
        ),
        // Geography: Chinese cities plus global financial centers.
        EntityPattern::new(
            "geo_vocabulary",
            EntityLabel::Geo,
            r"(?i)\b(?:北京|上海|广州|深圳|香港|New York|London|Tokyo|Singapore|Hong Kong)\b",
            true,
        ),
        // Monetary amounts: $150,000 / USD 1,200.50 / 50000元
        EntityPattern::new("money_dollar", EntityLabel::Money, r"\$[\d,]+(?:\.\d+)?", false),
        EntityPattern::new(
            "money_currency_code",
            EntityLabel::Money,
            r"(?i)\b(?:USD|CNY|RMB|EUR|GBP|HKD|SGD|JPY)\s*[\d,]+(?:\.\d+)?",
            false,
        ),
        EntityPattern::new(
            "money_suffixed",
            EntityLabel::Money,
            r"(?i)\b[\d,]+(?:\.\d+)?\s*(?:元|美元|欧元|英镑|港元|dollars?)",
            false,
        ),
        // Account references: "account no. 62220012345678", "账户: 12345678"
        EntityPattern::new(
            "account_en",
            EntityLabel::Account,
            r"(?i)\b(?:account|acct\.?|a/c)\s*(?:no\.?|number|#)?\s*[:：]?\s*\d{6,20}\b",
            false,
        ),
        EntityPattern::new(
            "account_cn",
            EntityLabel::Account,
            r"(?:账户|账号|卡号)[:：]?\s*\d{6,20}",
            false,
        ),
        // Bank names
        EntityPattern::new(
            "bank_global",
            EntityLabel::Bank,
            r"(?i)\b(?:HSBC|Citibank|Standard Chartered|Deutsche Bank|Bank of America|JPMorgan Chase|DBS Bank)\b",
            false,
        ),
        EntityPattern::new(
            "bank_cn",
            EntityLabel::Bank,
            r"(?:中国银行|工商银行|建设银行|农业银行|招商银行|交通银行)",
            false,
        ),
    ]
}

/// Capitalize the first letter of each whitespace-separated word and
/// lowercase the rest. Scripts without case (CJK) pass through.
pub(crate) fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
