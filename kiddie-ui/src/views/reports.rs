use std::fmt;

use rust_decimal::Decimal;

use kiddie_core::models::Account;

use crate::format::format_currency;

/// A canned report as a plain table: title, column headers, formatted rows.
/// The presentation host decides how to draw it; the CSV exporter writes it
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    fn new(
        title: &str,
        header: &[&str],
    ) -> Self {
        Self {
            title: title.to_string(),
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }
}

impl fmt::Display for ReportTable {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.header.join(" | "))?;
        for row in &self.rows {
            writeln!(f, "{}", row.join(" | "))?;
        }
        Ok(())
    }
}

/// Accounts whose total unearned income exceeds the threshold, with the
/// amount over and the recommended strategy.
pub fn threshold_report(
    accounts: &[Account],
    threshold: Decimal,
) -> ReportTable {
    let mut report = ReportTable::new(
        "Threshold Exceedance Report",
        &[
            "Account ID",
            "Minor Name",
            "Total Unearned Income",
            "Amount Over Threshold",
            "Recommended Strategy",
        ],
    );

    for account in accounts
        .iter()
        .filter(|a| a.total_unearned_income > threshold)
    {
        report.rows.push(vec![
            account.account_id.clone(),
            account.minor_name.clone(),
            format_currency(account.total_unearned_income),
            format_currency(account.total_unearned_income - threshold),
            account.tax_strategy.as_str().to_string(),
        ]);
    }

    report
}

/// Every account's realized, unrealized, and total potential gains.
pub fn gains_report(accounts: &[Account]) -> ReportTable {
    let mut report = ReportTable::new(
        "Unrealized Gains Summary",
        &[
            "Account ID",
            "Minor Name",
            "Current Value",
            "YTD Realized Gains",
            "YTD Unrealized Gains",
            "Total Potential Gains",
        ],
    );

    for account in accounts {
        report.rows.push(vec![
            account.account_id.clone(),
            account.minor_name.clone(),
            format_currency(account.current_value),
            format_currency(account.ytd_realized_gains),
            format_currency(account.ytd_unrealized_gains),
            format_currency(account.ytd_realized_gains + account.ytd_unrealized_gains),
        ]);
    }

    report
}

/// Counts by key in first-seen order, so report rows follow store order.
fn count_by<F>(
    accounts: &[Account],
    key: F,
) -> Vec<(String, usize)>
where
    F: Fn(&Account) -> String,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for account in accounts {
        let k = key(account);
        match counts.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, n)) => *n += 1,
            None => counts.push((k, 1)),
        }
    }
    counts
}

/// Implementation status: account counts by status and by advisor, as two
/// side-by-side tables.
pub fn status_report(accounts: &[Account]) -> Vec<ReportTable> {
    let mut by_status = ReportTable::new("Status Summary", &["Status", "Count"]);
    for (status, count) in count_by(accounts, |a| a.status.as_str().to_string()) {
        by_status.rows.push(vec![status, count.to_string()]);
    }

    let mut by_advisor = ReportTable::new("By Advisor", &["Advisor", "Accounts"]);
    for (advisor, count) in count_by(accounts, |a| a.advisor.clone()) {
        by_advisor.rows.push(vec![advisor, count.to_string()]);
    }

    vec![by_status, by_advisor]
}

/// Audit-trail view: review date, implemented strategy, documentation state.
pub fn compliance_report(accounts: &[Account]) -> ReportTable {
    let mut report = ReportTable::new(
        "Compliance Documentation Report",
        &[
            "Account ID",
            "Minor Name",
            "Last Review Date",
            "Strategy Implemented",
            "Documentation Status",
            "Notes",
        ],
    );

    for account in accounts {
        let (review_date, doc_status) = match account.last_review_date {
            Some(date) => (date.format("%Y-%m-%d").to_string(), "Complete"),
            None => ("—".to_string(), "Pending"),
        };
        report.rows.push(vec![
            account.account_id.clone(),
            account.minor_name.clone(),
            review_date,
            account.tax_strategy.as_str().to_string(),
            doc_status.to_string(),
            account.notes.clone(),
        ]);
    }

    report
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use kiddie_core::store::seed_accounts;

    #[test]
    fn threshold_report_lists_only_breaching_accounts() {
        let report = threshold_report(&seed_accounts(), dec!(2700));

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0][0], "UTMA001");
        // 3900 − 2700
        assert_eq!(report.rows[0][3], "$1.2K");
        assert_eq!(report.rows[1][0], "UTMA004");
        // 6300 − 2700
        assert_eq!(report.rows[1][3], "$3.6K");
    }

    #[test]
    fn threshold_report_is_empty_when_nobody_breaches() {
        let report = threshold_report(&seed_accounts(), dec!(10000));

        assert!(report.rows.is_empty());
        assert_eq!(report.header.len(), 5);
    }

    #[test]
    fn gains_report_totals_realized_and_unrealized() {
        let report = gains_report(&seed_accounts());

        assert_eq!(report.rows.len(), 5);
        // UTMA001: 2100 + 15000
        assert_eq!(report.rows[0][5], "$17.1K");
    }

    #[test]
    fn status_report_counts_in_first_seen_order() {
        let [by_status, by_advisor] = <[ReportTable; 2]>::try_from(
            status_report(&seed_accounts()),
        )
        .unwrap();

        assert_eq!(by_status.rows, vec![vec![
            "Pending Review".to_string(),
            "5".to_string()
        ]]);
        assert_eq!(by_advisor.rows, vec![
            vec!["Advisor A".to_string(), "2".to_string()],
            vec!["Advisor B".to_string(), "2".to_string()],
            vec!["Advisor C".to_string(), "1".to_string()],
        ]);
    }

    #[test]
    fn compliance_report_shows_review_dates_and_doc_status() {
        let mut accounts = seed_accounts();
        accounts[2].last_review_date = None;

        let report = compliance_report(&accounts);

        assert_eq!(report.rows[0][2], "2025-06-23");
        assert_eq!(report.rows[0][4], "Complete");
        assert_eq!(report.rows[2][2], "—");
        assert_eq!(report.rows[2][4], "Pending");
    }

    #[test]
    fn report_display_renders_title_header_and_rows() {
        let report = threshold_report(&seed_accounts(), dec!(2700));

        let text = report.to_string();

        assert!(text.starts_with("Threshold Exceedance Report\n"));
        assert!(text.contains("Account ID | Minor Name"));
        assert!(text.contains("UTMA004"));
    }
}
