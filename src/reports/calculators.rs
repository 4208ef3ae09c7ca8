//! Core report calculation functions.
//!
//! Pure functions for capacity and revenue math - no database access.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use super::responses::{CountRanking, RevenueRanking};

/// How many entries the "top" rankings keep.
const TOP_N: usize = 3;

/// Bookable hours per operating day.
pub fn operating_hours_per_day(opening_hour: u32, closing_hour: u32) -> i64 {
    i64::from(closing_hour) - i64::from(opening_hour)
}

/// Number of calendar days in an inclusive range (1 for a single day).
pub fn days_in_period(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Idealized maximum revenue: every available court fully booked at its base
/// price for every operating hour of every day in the period. An upper bound,
/// not a combinatorial maximum - achieved prices may differ from base prices
/// and slots are discrete.
pub fn max_revenue(base_prices: &[Decimal], hours_per_day: i64, days: i64) -> Decimal {
    let total_base: Decimal = base_prices.iter().copied().sum();
    Decimal::from(days) * Decimal::from(hours_per_day) * total_base
}

/// Maximum revenue minus actual revenue. Negative when achieved prices exceed
/// base prices.
pub fn revenue_gap(max_revenue: Decimal, actual_revenue: Decimal) -> Decimal {
    max_revenue - actual_revenue
}

/// Free hour-slots left in a single day across all available courts. Each
/// appointment consumes exactly one hour-slot regardless of duration.
pub fn capacity_remaining(
    hours_per_day: i64,
    available_court_count: usize,
    appointment_count: usize,
) -> i64 {
    hours_per_day * available_court_count as i64 - appointment_count as i64
}

/// Sum revenue per court name.
pub fn revenue_by_court<'a>(
    rows: impl Iterator<Item = (&'a str, Decimal)>,
) -> BTreeMap<String, Decimal> {
    let mut revenue: BTreeMap<String, Decimal> = BTreeMap::new();
    for (court, preco) in rows {
        *revenue.entry(court.to_string()).or_default() += preco;
    }
    revenue
}

/// Sum revenue per calendar day.
pub fn revenue_by_day(
    rows: impl Iterator<Item = (NaiveDateTime, Decimal)>,
) -> BTreeMap<NaiveDate, Decimal> {
    let mut revenue: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for (at, preco) in rows {
        *revenue.entry(at.date()).or_default() += preco;
    }
    revenue
}

/// Count appointments per hour of day.
pub fn appointments_by_hour(
    times: impl Iterator<Item = NaiveDateTime>,
) -> BTreeMap<u32, i64> {
    let mut counts: BTreeMap<u32, i64> = BTreeMap::new();
    for at in times {
        *counts.entry(at.hour()).or_default() += 1;
    }
    counts
}

/// Top entities by appointment count.
///
/// Ties break by entity id ascending, so the ranking is deterministic
/// regardless of row order.
pub fn top_by_count<'a>(entries: impl Iterator<Item = (i32, &'a str)>) -> Vec<CountRanking> {
    let mut counts: HashMap<i32, (String, i64)> = HashMap::new();
    for (id, nome) in entries {
        let entry = counts.entry(id).or_insert_with(|| (nome.to_string(), 0));
        entry.1 += 1;
    }

    let mut ranking: Vec<CountRanking> = counts
        .into_iter()
        .map(|(id, (nome, total))| CountRanking { id, nome, total })
        .collect();
    ranking.sort_by(|a, b| b.total.cmp(&a.total).then(a.id.cmp(&b.id)));
    ranking.truncate(TOP_N);
    ranking
}

/// Top entities by summed revenue, with the same deterministic tie-break.
pub fn top_by_revenue<'a>(
    entries: impl Iterator<Item = (i32, &'a str, Decimal)>,
) -> Vec<RevenueRanking> {
    let mut totals: HashMap<i32, (String, Decimal)> = HashMap::new();
    for (id, nome, preco) in entries {
        let entry = totals
            .entry(id)
            .or_insert_with(|| (nome.to_string(), Decimal::ZERO));
        entry.1 += preco;
    }

    let mut ranking: Vec<RevenueRanking> = totals
        .into_iter()
        .map(|(id, (nome, total))| RevenueRanking { id, nome, total })
        .collect();
    ranking.sort_by(|a, b| b.total.cmp(&a.total).then(a.id.cmp(&b.id)));
    ranking.truncate(TOP_N);
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn at(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    // ==================== period math ====================

    #[test]
    fn default_hours_give_fourteen_hour_days() {
        assert_eq!(operating_hours_per_day(8, 22), 14);
    }

    #[test]
    fn single_day_period_has_one_day() {
        let day = date("2025-01-20");
        assert_eq!(days_in_period(day, day), 1);
    }

    #[test]
    fn period_is_inclusive_on_both_ends() {
        assert_eq!(days_in_period(date("2025-01-01"), date("2025-01-02")), 2);
        assert_eq!(days_in_period(date("2025-01-01"), date("2025-01-31")), 31);
    }

    // ==================== max revenue / gap ====================

    #[test]
    fn one_court_one_day_scenario() {
        // One available court at base price 100, hours 8-22, one appointment
        // at price 80.
        let max = max_revenue(&[dec!(100)], 14, 1);
        assert_eq!(max, dec!(1400));
        assert_eq!(revenue_gap(max, dec!(80)), dec!(1320));
        assert_eq!(capacity_remaining(14, 1, 1), 13);
    }

    #[test]
    fn two_courts_two_days_scenario() {
        let max = max_revenue(&[dec!(100), dec!(50)], 14, 2);
        assert_eq!(max, dec!(4200));
    }

    #[test]
    fn no_available_courts_means_zero_max() {
        assert_eq!(max_revenue(&[], 14, 5), dec!(0));
    }

    #[test]
    fn gap_can_go_negative() {
        // Achieved prices above base price push actual revenue past the
        // idealized maximum; the gap is not clamped at zero.
        let max = max_revenue(&[dec!(10)], 1, 1);
        let gap = revenue_gap(max, dec!(25));
        assert_eq!(gap, dec!(-15));
        assert!(gap < dec!(0));
    }

    #[test]
    fn capacity_counts_one_hour_per_appointment() {
        assert_eq!(capacity_remaining(14, 2, 5), 23);
        assert_eq!(capacity_remaining(14, 0, 0), 0);
    }

    // ==================== buckets ====================

    #[test]
    fn revenue_by_court_sums_per_name() {
        let rows = vec![
            ("Quadra A", dec!(80)),
            ("Quadra B", dec!(50)),
            ("Quadra A", dec!(20)),
        ];
        let revenue = revenue_by_court(rows.into_iter());
        assert_eq!(revenue["Quadra A"], dec!(100));
        assert_eq!(revenue["Quadra B"], dec!(50));
    }

    #[test]
    fn revenue_by_day_buckets_on_calendar_date() {
        let rows = vec![
            (at("2025-01-01T10:00:00"), dec!(80)),
            (at("2025-01-01T18:00:00"), dec!(60)),
            (at("2025-01-02T10:00:00"), dec!(40)),
        ];
        let revenue = revenue_by_day(rows.into_iter());
        assert_eq!(revenue[&date("2025-01-01")], dec!(140));
        assert_eq!(revenue[&date("2025-01-02")], dec!(40));
    }

    #[test]
    fn appointments_by_hour_counts_occurrences() {
        let times = vec![
            at("2025-01-01T10:00:00"),
            at("2025-01-02T10:00:00"),
            at("2025-01-01T18:30:00"),
        ];
        let counts = appointments_by_hour(times.into_iter());
        assert_eq!(counts[&10], 2);
        assert_eq!(counts[&18], 1);
        assert_eq!(counts.get(&9), None);
    }

    #[test]
    fn empty_input_yields_empty_buckets() {
        assert!(revenue_by_court(std::iter::empty()).is_empty());
        assert!(revenue_by_day(std::iter::empty()).is_empty());
        assert!(appointments_by_hour(std::iter::empty()).is_empty());
    }

    // ==================== rankings ====================

    #[test]
    fn top_by_count_keeps_three_entries() {
        let entries = vec![
            (1, "Ana"),
            (1, "Ana"),
            (2, "Bruno"),
            (2, "Bruno"),
            (2, "Bruno"),
            (3, "Carla"),
            (3, "Carla"),
            (4, "Davi"),
        ];
        let ranking = top_by_count(entries.into_iter());
        assert_eq!(ranking.len(), 3);
        assert_eq!(ranking[0].nome, "Bruno");
        assert_eq!(ranking[0].total, 3);
        assert_eq!(ranking[1].nome, "Ana");
        assert_eq!(ranking[2].nome, "Carla");
    }

    #[test]
    fn count_ties_break_by_id_ascending() {
        let entries = vec![(9, "Zeca"), (1, "Ana"), (5, "Carla")];
        let ranking = top_by_count(entries.into_iter());
        // All tied at one appointment each; lowest id wins.
        let ids: Vec<i32> = ranking.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 5, 9]);
    }

    #[test]
    fn top_by_revenue_sums_and_ranks() {
        let entries = vec![
            (1, "Quadra A", dec!(100)),
            (2, "Quadra B", dec!(80)),
            (1, "Quadra A", dec!(30)),
            (3, "Quadra C", dec!(120)),
            (4, "Quadra D", dec!(10)),
        ];
        let ranking = top_by_revenue(entries.into_iter());
        assert_eq!(ranking.len(), 3);
        assert_eq!(ranking[0].nome, "Quadra A");
        assert_eq!(ranking[0].total, dec!(130));
        assert_eq!(ranking[1].nome, "Quadra C");
        assert_eq!(ranking[2].nome, "Quadra B");
    }

    #[test]
    fn revenue_ties_break_by_id_ascending() {
        let entries = vec![
            (7, "Quadra B", dec!(50)),
            (2, "Quadra A", dec!(50)),
        ];
        let ranking = top_by_revenue(entries.into_iter());
        assert_eq!(ranking[0].id, 2);
        assert_eq!(ranking[1].id, 7);
    }

    #[test]
    fn rankings_of_empty_input_are_empty() {
        assert!(top_by_count(std::iter::empty()).is_empty());
        assert!(top_by_revenue(std::iter::empty()).is_empty());
    }
}
