//! Pipeline properties — widening, idempotence, stability, exactness.

use chrono::NaiveDate;
use proptest::prelude::*;

use govchime_core::domain::{ContractRecord, ContractStatus};
use govchime_core::filter::{FilterState, QuickFilter, SortDirection, SortField};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
}

const AGENCIES: &[&str] = &[
    "Department of Defense",
    "Department of Energy",
    "Department of Transportation",
];
const TAGS: &[Option<&str>] = &[Some("small-business"), Some("veteran-owned"), None];
const TITLES: &[&str] = &["Alpha Support", "Bravo Services", "Alpha Support"];

fn arb_record() -> impl Strategy<Value = ContractRecord> {
    (
        0usize..1_000_000,
        0usize..AGENCIES.len(),
        0usize..TAGS.len(),
        0usize..TITLES.len(),
        0.0f64..60_000_000.0,
        0i64..700,
    )
        .prop_map(|(n, agency, tag, title, amount, day_offset)| {
            let award_date =
                NaiveDate::from_ymd_opt(2023, 6, 1).unwrap() + chrono::Duration::days(day_offset);
            ContractRecord {
                id: format!("P-{n:06}"),
                title: TITLES[title].into(),
                description: String::new(),
                agency: AGENCIES[agency].into(),
                location: "Arlington, VA".into(),
                amount,
                award_date,
                end_date: None,
                naics_code: Some("541512".into()),
                naics_description: Some("Computer Systems Design Services".into()),
                set_aside: TAGS[tag].map(String::from),
                status: ContractStatus::Active,
            }
        })
}

fn arb_records() -> impl Strategy<Value = Vec<ContractRecord>> {
    prop::collection::vec(arb_record(), 0..40)
}

fn arb_state() -> impl Strategy<Value = FilterState> {
    (
        prop::sample::select(vec!["", "alpha", "defense", "zzz"]),
        prop::option::of(prop::sample::select(vec![
            "small-business",
            "veteran-owned",
            "8a",
        ])),
        prop::option::of(prop::sample::select(AGENCIES.to_vec())),
        prop::option::of(0.0f64..40_000_000.0),
        prop::option::of(0.0f64..40_000_000.0),
        prop::sample::select(vec![
            QuickFilter::All,
            QuickFilter::Large,
            QuickFilter::Recent,
            QuickFilter::Tech,
            QuickFilter::Defense,
        ]),
        prop::sample::select(vec![SortField::Amount, SortField::Date, SortField::Title]),
        prop::sample::select(vec![SortDirection::Asc, SortDirection::Desc]),
    )
        .prop_map(
            |(search, set_aside, agency, min, max, quick, sort_field, sort_dir)| FilterState {
                search: search.into(),
                set_aside: set_aside.map(String::from),
                agency: agency.map(String::from),
                location: None,
                amount_min: min,
                amount_max: max,
                date_start: None,
                date_end: None,
                quick,
                sort_field,
                sort_dir,
            },
        )
}

proptest! {
    /// Relaxing any single predicate back to its default can only
    /// widen the result set.
    #[test]
    fn relaxing_a_predicate_only_widens(records in arb_records(), state in arb_state()) {
        let base: Vec<&str> = state
            .apply(&records, today())
            .records
            .iter()
            .map(|r| r.id.as_str())
            .collect();

        let mut relaxed_states = Vec::new();
        for field in 0..6 {
            let mut relaxed = state.clone();
            match field {
                0 => relaxed.search.clear(),
                1 => relaxed.set_aside = None,
                2 => relaxed.agency = None,
                3 => relaxed.amount_min = None,
                4 => relaxed.amount_max = None,
                _ => relaxed.quick = QuickFilter::All,
            }
            relaxed_states.push(relaxed);
        }

        for relaxed in relaxed_states {
            let widened: Vec<&str> = relaxed
                .apply(&records, today())
                .records
                .iter()
                .map(|r| r.id.as_str())
                .collect();
            for id in &base {
                prop_assert!(widened.contains(id));
            }
        }
    }

    /// clear_all is idempotent and always produces zero active filters.
    #[test]
    fn clear_all_idempotent(mut state in arb_state()) {
        state.clear_all();
        let once = state.clone();
        state.clear_all();
        prop_assert_eq!(&state, &once);
        prop_assert_eq!(state.active_filter_count(), 0);
    }

    /// Records with equal sort keys keep their input order.
    #[test]
    fn equal_keys_are_stable(
        n in 2usize..20,
        field in prop::sample::select(vec![SortField::Amount, SortField::Date, SortField::Title]),
        dir in prop::sample::select(vec![SortDirection::Asc, SortDirection::Desc]),
    ) {
        let records: Vec<ContractRecord> = (0..n)
            .map(|i| ContractRecord {
                id: format!("S-{i:03}"),
                title: "Same Title".into(),
                description: String::new(),
                agency: "Department of Energy".into(),
                location: "Denver, CO".into(),
                amount: 500_000.0,
                award_date: NaiveDate::from_ymd_opt(2024, 5, 5).unwrap(),
                end_date: None,
                naics_code: None,
                naics_description: None,
                set_aside: None,
                status: ContractStatus::Active,
            })
            .collect();

        let mut state = FilterState::default();
        state.sort_field = field;
        state.sort_dir = dir;

        let view = state.apply(&records, today());
        let ids: Vec<String> = view.records.iter().map(|r| r.id.clone()).collect();
        let expected: Vec<String> = (0..n).map(|i| format!("S-{i:03}")).collect();
        prop_assert_eq!(ids, expected);
    }

    /// Summary totals match a direct recomputation; empty is zeros.
    #[test]
    fn aggregation_is_exact(records in arb_records(), state in arb_state()) {
        let view = state.apply(&records, today());
        let total: f64 = view.records.iter().map(|r| r.amount).sum();
        prop_assert_eq!(view.summary.count, view.records.len());
        prop_assert_eq!(view.summary.total_value, total);
        if view.records.is_empty() {
            prop_assert_eq!(view.summary.average_value, 0.0);
        } else {
            prop_assert_eq!(
                view.summary.average_value,
                total / view.records.len() as f64
            );
        }
    }

    /// Repeatedly selecting the same field alternates the direction.
    #[test]
    fn direction_toggle_alternates(clicks in 1usize..12) {
        let mut state = FilterState::default();
        state.toggle_sort(SortField::Amount);
        let initial = state.sort_dir;
        for i in 1..=clicks {
            state.toggle_sort(SortField::Amount);
            let expected = if i % 2 == 1 { initial.flipped() } else { initial };
            prop_assert_eq!(state.sort_dir, expected);
        }
    }
}

// ── End-to-end scenarios ─────────────────────────────────────────────

fn scenario_records() -> Vec<ContractRecord> {
    let record = |id: &str, agency: &str, amount: f64, date: (i32, u32, u32), tag: &str| {
        ContractRecord {
            id: id.into(),
            title: format!("Award {id}"),
            description: String::new(),
            agency: agency.into(),
            location: "Washington, DC".into(),
            amount,
            award_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            end_date: None,
            naics_code: None,
            naics_description: None,
            set_aside: Some(tag.into()),
            status: ContractStatus::Active,
        }
    };
    vec![
        record("dod", "Department of Defense", 15_750_000.0, (2025, 1, 15), "small-business"),
        record("doe", "Department of Energy", 8_500_000.0, (2025, 1, 10), "minority-owned"),
        record("dot", "Department of Transportation", 45_200_000.0, (2025, 1, 8), "veteran-owned"),
    ]
}

#[test]
fn large_filter_amount_sort_and_summary() {
    let records = scenario_records();
    let mut state = FilterState::default();
    state.quick = QuickFilter::Large;
    state.sort_field = SortField::Amount;
    state.sort_dir = SortDirection::Desc;

    let view = state.apply(&records, today());
    let ids: Vec<&str> = view.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["dot", "dod"]);
    assert_eq!(view.summary.total_value, 60_950_000.0);
    assert_eq!(view.summary.average_value, 30_475_000.0);
}

#[test]
fn defense_search_is_case_insensitive_and_independent() {
    let records = scenario_records();
    for needle in ["defense", "DEFENSE", "Defense"] {
        let mut state = FilterState::default();
        state.search = needle.into();
        let view = state.apply(&records, today());
        assert_eq!(view.len(), 1, "search {needle:?}");
        assert_eq!(view.records[0].id, "dod");
    }
}
