use {
    crate::models::{LabelOrder, ValidatedRecord},
    chrono::NaiveDate,
    indexmap::IndexMap,
    itertools::Itertools,
    serde::Serialize,
};

/// Running total for one date key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub sum: f64,
    pub trade_count: usize,
}

/// Signed sums per verbatim date string, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyAggregate {
    buckets: IndexMap<String, DailyBucket>,
}

impl DailyAggregate {
    pub fn add(&mut self, record: &ValidatedRecord) {
        let bucket = self
            .buckets
            .entry(record.date_key.clone())
            .or_insert(DailyBucket {
                date: record.date,
                sum: 0.0,
                trade_count: 0,
            });
        bucket.sum += record.amount;
        bucket.trade_count += 1;
    }

    pub fn get(&self, date_key: &str) -> Option<f64> {
        self.buckets.get(date_key).map(|b| b.sum)
    }

    pub fn bucket(&self, date_key: &str) -> Option<&DailyBucket> {
        self.buckets.get(date_key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DailyBucket)> {
        self.buckets.iter().map(|(k, b)| (k.as_str(), b))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Plain f64 addition over the buckets in first-seen order.
    pub fn total(&self) -> f64 {
        self.buckets.values().map(|b| b.sum).sum()
    }
}

/// Fee sums over every validated record, regardless of date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FeeTotals {
    pub misc_fees: f64,
    pub commissions_fees: f64,
}

impl FeeTotals {
    pub fn add(&mut self, record: &ValidatedRecord) {
        self.misc_fees += record.misc_fees;
        self.commissions_fees += record.commissions_fees;
    }
}

/// The four figures shown above the chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryTotals {
    pub daily_total: f64,
    pub misc_fees_total: f64,
    pub commissions_fees_total: f64,
    /// daily + misc + commissions. Fees are added with their exported sign, never subtracted.
    pub grand_total: f64,
}

impl SummaryTotals {
    pub fn new(daily_total: f64, fees: FeeTotals) -> Self {
        Self {
            daily_total,
            misc_fees_total: fees.misc_fees,
            commissions_fees_total: fees.commissions_fees,
            grand_total: daily_total + fees.misc_fees + fees.commissions_fees,
        }
    }
}

/// Bar labels and heights. `labels[i]` always belongs to `values[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn from_aggregate(daily: &DailyAggregate, order: LabelOrder) -> Self {
        let pairs: Vec<(&str, &DailyBucket)> = match order {
            LabelOrder::FirstSeen => daily.iter().collect(),
            LabelOrder::Chronological => daily
                .iter()
                .sorted_by(|(ka, a), (kb, b)| a.date.cmp(&b.date).then_with(|| ka.cmp(kb)))
                .collect(),
        };
        let (labels, values) = pairs
            .into_iter()
            .map(|(key, bucket)| (key.to_owned(), bucket.sum))
            .unzip();
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Everything derived from one batch of validated records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregation {
    pub daily: DailyAggregate,
    pub fees: FeeTotals,
    pub totals: SummaryTotals,
}

impl Aggregation {
    pub fn series(&self, order: LabelOrder) -> ChartSeries {
        ChartSeries::from_aggregate(&self.daily, order)
    }
}

/// Single pass over the records: amounts into date buckets, fees into their running sums.
pub fn aggregate(records: &[ValidatedRecord]) -> Aggregation {
    let mut daily = DailyAggregate::default();
    let mut fees = FeeTotals::default();
    for record in records {
        daily.add(record);
        fees.add(record);
    }
    let totals = SummaryTotals::new(daily.total(), fees);
    Aggregation {
        daily,
        fees,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_trade_date;

    fn record(date_key: &str, amount: f64, misc: f64, comm: f64) -> ValidatedRecord {
        ValidatedRecord {
            date_key: date_key.to_string(),
            date: parse_trade_date(date_key).unwrap(),
            amount,
            misc_fees: misc,
            commissions_fees: comm,
        }
    }

    #[test]
    fn repeated_dates_share_a_bucket() {
        let agg = aggregate(&[
            record("1/05/24", 10.0, 0.0, 0.0),
            record("1/06/24", -4.0, 0.0, 0.0),
            record("1/05/24", 2.5, 0.0, 0.0),
        ]);
        assert_eq!(agg.daily.len(), 2);
        assert_eq!(agg.daily.get("1/05/24"), Some(12.5));
        assert_eq!(agg.daily.get("1/06/24"), Some(-4.0));
        assert_eq!(agg.daily.bucket("1/05/24").unwrap().trade_count, 2);
        assert_eq!(agg.totals.daily_total, 8.5);
    }

    #[test]
    fn date_keys_are_not_normalised() {
        let agg = aggregate(&[
            record("1/05/24", 1.0, 0.0, 0.0),
            record("01/05/24", 2.0, 0.0, 0.0),
        ]);
        assert_eq!(agg.daily.len(), 2);
    }

    #[test]
    fn grand_total_adds_fees() {
        let agg = aggregate(&[
            record("1/05/24", 60.0, 3.0, 1.5),
            record("1/06/24", 40.0, 2.0, 1.0),
        ]);
        assert_eq!(agg.totals.daily_total, 100.0);
        assert_eq!(agg.totals.misc_fees_total, 5.0);
        assert_eq!(agg.totals.commissions_fees_total, 2.5);
        assert_eq!(agg.totals.grand_total, 107.5);
    }

    #[test]
    fn summary_from_fixed_figures() {
        let totals = SummaryTotals::new(
            100.0,
            FeeTotals {
                misc_fees: 5.0,
                commissions_fees: 2.5,
            },
        );
        assert_eq!(totals.grand_total, 107.5);
    }

    #[test]
    fn series_pairs_labels_with_values_in_both_orders() {
        let agg = aggregate(&[
            record("3/01/24", 3.0, 0.0, 0.0),
            record("1/15/24", -1.0, 0.0, 0.0),
            record("2/10/24", 2.0, 0.0, 0.0),
        ]);

        let first_seen = agg.series(LabelOrder::FirstSeen);
        assert_eq!(first_seen.labels, vec!["3/01/24", "1/15/24", "2/10/24"]);
        assert_eq!(first_seen.values, vec![3.0, -1.0, 2.0]);

        let by_date = agg.series(LabelOrder::Chronological);
        assert_eq!(by_date.labels, vec!["1/15/24", "2/10/24", "3/01/24"]);
        assert_eq!(by_date.values, vec![-1.0, 2.0, 3.0]);

        for series in [first_seen, by_date] {
            for (label, value) in series.labels.iter().zip(&series.values) {
                assert_eq!(agg.daily.get(label), Some(*value));
            }
        }
    }

    #[test]
    fn empty_input_gives_empty_aggregation() {
        let agg = aggregate(&[]);
        assert!(agg.daily.is_empty());
        assert!(agg.series(LabelOrder::FirstSeen).is_empty());
        assert_eq!(agg.totals, SummaryTotals::default());
    }
}
