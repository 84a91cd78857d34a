use livestock_macros::Series;

#[derive(Debug, Clone, Copy, PartialEq, Series)]
pub struct YearRow {
    pub year: f64,
    pub calving_rate: f64,
    pub time_to_calf: f64,
}

fn main() {
    let rows = [
        YearRow { year: 1.0, calving_rate: 55.0, time_to_calf: 16.0 },
        YearRow { year: 2.0, calving_rate: 58.5, time_to_calf: 15.4 },
    ];
    let series = YearRowSeries::from_rows(&rows);
    assert_eq!(series.len(), 2);
    assert!(!series.is_empty());
    assert_eq!(series.calving_rate, vec![55.0, 58.5]);
    assert_eq!(series.get(1), Some(rows[1]));
    assert_eq!(series.get(2), None);
    assert_eq!(YearRow::field_names(), &["year", "calving_rate", "time_to_calf"]);
}
