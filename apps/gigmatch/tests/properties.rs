use proptest::prelude::*;

use gigmatch::matching::{calculate_match_score, score_breakdown};
use gigmatch::models::{Job, JobType, WorkerProfile};
use gigmatch::safety::detect_fraud_keywords;
use gigmatch::safety::fraud::FRAUD_KEYWORDS;

// Small vocabularies so generated workers and jobs actually overlap.
const SKILLS: &[&str] = &["Cooking", "Plumbing", "Driving", "Painting", "C", "Welding", ""];
const CATEGORIES: &[&str] = &["Cooking", "Home Services", "Delivery", ""];
const LOCATIONS: &[&str] = &["Guntur, AP", "Guntur", "Hyderabad, Telangana", "Near Guntur", ""];
const AVAILABILITY: &[&str] = &["Full-time", "Part-time", "Flexible", "Weekends", ""];

fn arb_pick(options: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(options).prop_map(str::to_string)
}

fn arb_job_type() -> impl Strategy<Value = JobType> {
    prop_oneof![
        Just(JobType::FullTime),
        Just(JobType::PartTime),
        Just(JobType::Gig),
        Just(JobType::Freelance),
    ]
}

fn arb_worker() -> impl Strategy<Value = WorkerProfile> {
    (
        prop::collection::vec(arb_pick(SKILLS), 0..5),
        prop::collection::vec(arb_pick(CATEGORIES), 0..3),
        arb_pick(LOCATIONS),
        arb_pick(AVAILABILITY),
        ".{0,40}",
    )
        .prop_map(|(skills, categories, location, availability, experience)| WorkerProfile {
            skills,
            categories,
            location,
            availability,
            experience,
            ..WorkerProfile::default()
        })
}

fn arb_job() -> impl Strategy<Value = Job> {
    (
        prop::collection::vec(arb_pick(SKILLS), 0..5),
        arb_pick(CATEGORIES),
        arb_pick(LOCATIONS),
        arb_job_type(),
    )
        .prop_map(|(required_skills, category, location, job_type)| Job {
            required_skills,
            category,
            location,
            job_type,
            ..Job::default()
        })
}

proptest! {
    // =========================================================================
    // Match score
    // =========================================================================

    #[test]
    fn test_score_is_within_bounds(worker in arb_worker(), job in arb_job()) {
        let breakdown = score_breakdown(&worker, &job);
        prop_assert!(breakdown.total <= 100);
        prop_assert!((0.0..=40.0).contains(&breakdown.skills));
        prop_assert_eq!(calculate_match_score(&worker, &job), breakdown.total);
    }

    #[test]
    fn test_arbitrary_text_never_panics(
        skills in prop::collection::vec(".*", 0..4),
        required in prop::collection::vec(".*", 0..4),
        location in ".*",
        availability in ".*",
    ) {
        let worker = WorkerProfile { skills, location: location.clone(), availability, ..WorkerProfile::default() };
        let job = Job { required_skills: required, location, ..Job::default() };
        prop_assert!(calculate_match_score(&worker, &job) <= 100);
    }

    #[test]
    fn test_adding_a_required_skill_never_lowers_score(
        worker in arb_worker(),
        job in arb_job(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!job.required_skills.is_empty());
        let before = score_breakdown(&worker, &job);

        let mut improved = worker.clone();
        improved.skills.push(pick.get(&job.required_skills).clone());
        let after = score_breakdown(&improved, &job);

        prop_assert!(after.skills >= before.skills);
        prop_assert!(after.total >= before.total);
    }

    // =========================================================================
    // Fraud scan
    // =========================================================================

    #[test]
    fn test_fraud_scan_is_pure(text in ".{0,200}") {
        prop_assert_eq!(detect_fraud_keywords(&text), detect_fraud_keywords(&text));
    }

    #[test]
    fn test_fraud_keywords_follow_list_order(
        picks in prop::collection::vec(prop::sample::select(FRAUD_KEYWORDS), 0..6),
        filler in "[a-z ]{0,20}",
    ) {
        let text = picks
            .iter()
            .rev()
            .map(|kw| kw.to_uppercase())
            .collect::<Vec<_>>()
            .join(&format!(" {filler} "));
        let finding = detect_fraud_keywords(&text);

        let positions: Vec<usize> = finding
            .keywords
            .iter()
            .map(|kw| FRAUD_KEYWORDS.iter().position(|k| k == kw).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        for kw in &picks {
            prop_assert!(finding.keywords.iter().any(|found| found == kw));
        }
        prop_assert_eq!(finding.is_suspicious, !finding.keywords.is_empty());
    }
}
