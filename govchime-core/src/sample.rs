//! Built-in sample dataset.
//!
//! Hand-written, realistic award records for the dashboard's default
//! view, plus a deterministic volume generator. The generator uses a
//! linear congruential generator so sample data is reproducible
//! without pulling in `rand`.

use chrono::{Duration, NaiveDate};

use crate::domain::{ContractRecord, ContractStatus};

/// The curated sample awards shown on first launch.
pub fn sample_awards() -> Vec<ContractRecord> {
    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn award(
        id: &str,
        title: &str,
        description: &str,
        agency: &str,
        location: &str,
        amount: f64,
        award_date: NaiveDate,
        months: i64,
        naics: Option<(&str, &str)>,
        set_aside: Option<&str>,
        status: ContractStatus,
    ) -> ContractRecord {
        ContractRecord {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            agency: agency.into(),
            location: location.into(),
            amount,
            award_date,
            end_date: Some(award_date + Duration::days(months * 30)),
            naics_code: naics.map(|(c, _)| c.into()),
            naics_description: naics.map(|(_, d)| d.into()),
            set_aside: set_aside.map(String::from),
            status,
        }
    }

    vec![
        award(
            "W91QV1-25-C-0012",
            "Network Infrastructure Modernization",
            "Enterprise network upgrade across three installations, including secure wireless and zero-trust segmentation.",
            "Department of Defense",
            "Arlington, VA",
            15_750_000.0,
            date(2025, 1, 15),
            24,
            Some(("541512", "Computer Systems Design Services")),
            Some("small-business"),
            ContractStatus::Active,
        ),
        award(
            "DE-SOL-25-0087",
            "Grid Resilience Engineering Support",
            "Engineering analysis for transmission hardening in wildfire-prone regions.",
            "Department of Energy",
            "Denver, CO",
            8_500_000.0,
            date(2025, 1, 10),
            36,
            Some(("541330", "Engineering Services")),
            Some("minority-owned"),
            ContractStatus::Active,
        ),
        award(
            "693JJ3-25-D-0005",
            "Bridge Inspection Program Nationwide",
            "Routine and fracture-critical inspection services for the national bridge inventory.",
            "Department of Transportation",
            "Washington, DC",
            45_200_000.0,
            date(2025, 1, 8),
            60,
            Some(("237310", "Highway, Street, and Bridge Construction")),
            Some("veteran-owned"),
            ContractStatus::Active,
        ),
        award(
            "47QTCA-25-D-0044",
            "Cloud Migration Support Services",
            "Lift-and-shift of legacy workloads to FedRAMP-authorized infrastructure.",
            "General Services Administration",
            "Washington, DC",
            2_400_000.0,
            date(2025, 1, 20),
            12,
            Some(("518210", "Data Processing, Hosting, and Related Services")),
            Some("8a"),
            ContractStatus::Active,
        ),
        award(
            "36C10B-24-C-0199",
            "Medical Records Digitization",
            "Scanning and indexing of legacy paper records across four regional centers.",
            "Department of Veterans Affairs",
            "Austin, TX",
            6_750_000.0,
            date(2024, 11, 22),
            18,
            Some(("518210", "Data Processing, Hosting, and Related Services")),
            Some("sdvosb"),
            ContractStatus::Active,
        ),
        award(
            "70CDCR-24-C-0031",
            "Port Security Camera Network",
            "Installation and maintenance of surveillance systems at three ports of entry.",
            "Department of Homeland Security",
            "Miami, FL",
            11_900_000.0,
            date(2024, 12, 5),
            30,
            Some(("561612", "Security Guards and Patrol Services")),
            Some("hubzone"),
            ContractStatus::Active,
        ),
        award(
            "N00024-24-C-6412",
            "Shipboard Software Technology Refresh",
            "Modernization of hull, mechanical and electrical monitoring software.",
            "Department of Defense",
            "San Diego, CA",
            22_300_000.0,
            date(2024, 10, 17),
            48,
            Some(("541511", "Custom Computer Programming Services")),
            None,
            ContractStatus::Active,
        ),
        award(
            "75N98Q-24-C-0456",
            "Laboratory Support Services",
            "Staffing and operations support for biomedical research laboratories.",
            "Department of Health and Human Services",
            "Bethesda, MD",
            4_100_000.0,
            date(2024, 9, 3),
            24,
            Some(("541715", "Research and Development in the Physical Sciences")),
            Some("woman-owned"),
            ContractStatus::Active,
        ),
        award(
            "12QSCF-23-C-0212",
            "Forest Road Maintenance",
            "Grading, drainage and surface repair across two national forests.",
            "Department of Agriculture",
            "Boise, ID",
            1_850_000.0,
            date(2023, 6, 12),
            18,
            Some(("237310", "Highway, Street, and Bridge Construction")),
            Some("small-business"),
            ContractStatus::Completed,
        ),
        award(
            "GS-35F-23-0678",
            "Help Desk Consolidation",
            "Tier 1/2 service desk consolidation for three bureaus.",
            "Department of the Interior",
            "Reston, VA",
            3_200_000.0,
            date(2023, 8, 28),
            24,
            Some(("541519", "Other Computer Related Services")),
            Some("sdb"),
            ContractStatus::Completed,
        ),
        award(
            "FA8773-25-R-1001",
            "Base Operations Support",
            "Facilities operations and maintenance, pending final award decision.",
            "Department of Defense",
            "Oklahoma City, OK",
            9_600_000.0,
            date(2025, 1, 25),
            36,
            Some(("561210", "Facilities Support Services")),
            Some("small-business"),
            ContractStatus::Pending,
        ),
        award(
            "68HERC-24-C-0110",
            "Superfund Site Remediation Phase II",
            "Soil excavation and groundwater treatment at a listed site.",
            "Environmental Protection Agency",
            "Newark, NJ",
            18_400_000.0,
            date(2024, 7, 19),
            42,
            Some(("562910", "Remediation Services")),
            None,
            ContractStatus::Cancelled,
        ),
    ]
}

/// Generate `n` deterministic records for volume testing.
///
/// An LCG drives agency/amount/date selection so the same seed always
/// produces the same records.
pub fn generate_awards(n: usize, seed: u64) -> Vec<ContractRecord> {
    const AGENCIES: &[&str] = &[
        "Department of Defense",
        "Department of Energy",
        "Department of Transportation",
        "Department of Homeland Security",
        "General Services Administration",
        "Department of Veterans Affairs",
    ];
    const LOCATIONS: &[&str] = &[
        "Arlington, VA",
        "Washington, DC",
        "Huntsville, AL",
        "San Antonio, TX",
        "Colorado Springs, CO",
        "Norfolk, VA",
    ];
    const TAGS: &[Option<&str>] = &[
        Some("small-business"),
        Some("veteran-owned"),
        Some("woman-owned"),
        Some("8a"),
        None,
    ];
    const NAICS: &[(&str, &str)] = &[
        ("541512", "Computer Systems Design Services"),
        ("541330", "Engineering Services"),
        ("561210", "Facilities Support Services"),
        ("518210", "Data Processing, Hosting, and Related Services"),
    ];

    let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let mut rng_state = seed;
    let mut next = move || {
        rng_state = rng_state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (rng_state >> 33) as usize
    };

    (0..n)
        .map(|i| {
            let agency = AGENCIES[next() % AGENCIES.len()];
            let location = LOCATIONS[next() % LOCATIONS.len()];
            let tag = TAGS[next() % TAGS.len()];
            let (code, desc) = NAICS[next() % NAICS.len()];
            // Amounts from $50k to ~$50M.
            let amount = 50_000.0 + (next() % 1_000) as f64 * 50_000.0;
            let award_date = base_date + Duration::days((next() % 400) as i64);

            ContractRecord {
                id: format!("GEN-{seed}-{i:04}"),
                title: format!("Generated Support Services {i}"),
                description: String::new(),
                agency: agency.into(),
                location: location.into(),
                amount,
                award_date,
                end_date: Some(award_date + Duration::days(365)),
                naics_code: Some(code.into()),
                naics_description: Some(desc.into()),
                set_aside: tag.map(String::from),
                status: ContractStatus::Active,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_awards_are_valid() {
        for award in sample_awards() {
            award.validate().unwrap();
        }
    }

    #[test]
    fn sample_has_unique_ids() {
        let awards = sample_awards();
        let mut ids: Vec<&str> = awards.iter().map(|a| a.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), awards.len());
    }

    #[test]
    fn generator_is_deterministic() {
        let a = generate_awards(50, 42);
        let b = generate_awards(50, 42);
        assert_eq!(a.len(), 50);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.amount, y.amount);
            assert_eq!(x.award_date, y.award_date);
        }
    }

    #[test]
    fn generator_seeds_differ() {
        let a = generate_awards(10, 1);
        let b = generate_awards(10, 2);
        assert!(a.iter().zip(b.iter()).any(|(x, y)| x.amount != y.amount));
    }

    #[test]
    fn generated_awards_are_valid() {
        for award in generate_awards(100, 7) {
            award.validate().unwrap();
        }
    }
}
