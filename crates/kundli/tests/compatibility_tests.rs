mod common;

use common::{birth, engine};
use kundli::{compare_kundlis, CompleteKundli, DoshaType, Gender, MatchVerdict};

const MANGLIK_MISMATCH: &str =
    "One partner has Manglik Dosha while other doesn't - Remedies recommended before marriage";

fn pair() -> (CompleteKundli, CompleteKundli) {
    let engine = engine();
    let groom = engine
        .generate(&birth("Vikram", "1991-02-14", "07:30", Gender::Male))
        .unwrap();
    let bride = engine
        .generate(&birth("Priya", "1993-09-03", "16:45", Gender::Female))
        .unwrap();
    (groom, bride)
}

fn without_manglik(mut kundli: CompleteKundli) -> CompleteKundli {
    kundli
        .dosha_analysis
        .doshas
        .retain(|d| d.dosha_type != DoshaType::Manglik);
    kundli
}

fn manglik_issues(issues: &[String]) -> usize {
    issues.iter().filter(|i| i.contains("Manglik")).count()
}

#[test]
fn test_double_manglik_cancels() {
    let (groom, bride) = pair();
    assert!(groom.dosha_analysis.has(DoshaType::Manglik));
    assert!(bride.dosha_analysis.has(DoshaType::Manglik));

    let result = compare_kundlis(&groom, &bride);
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.contains("Double Manglik cancels the dosha")));
    assert_eq!(manglik_issues(&result.issues), 0);
}

#[test]
fn test_single_manglik_is_one_issue() {
    let (groom, bride) = pair();
    let bride = without_manglik(bride);

    let result = compare_kundlis(&groom, &bride);
    assert_eq!(manglik_issues(&result.issues), 1);
    assert_eq!(
        result.issues.iter().filter(|i| i.as_str() == MANGLIK_MISMATCH).count(),
        1
    );
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.contains("Kumbh Vivah")));
}

#[test]
fn test_no_manglik_no_note() {
    let (groom, bride) = pair();
    let result = compare_kundlis(&without_manglik(groom), &without_manglik(bride));
    assert_eq!(manglik_issues(&result.issues), 0);
    assert!(!result.recommendations.iter().any(|r| r.contains("Manglik")));
}

#[test]
fn test_guna_totals_are_consistent() {
    let (groom, bride) = pair();
    let result = compare_kundlis(&groom, &bride);

    assert_eq!(result.guna_scores.len(), 8);
    let max: f64 = result.guna_scores.iter().map(|g| g.max_points).sum();
    assert_eq!(max, 36.0);
    let scored: f64 = result.guna_scores.iter().map(|g| g.scored_points).sum();
    assert_eq!(scored, result.matching_gunas);
    assert!(result
        .guna_scores
        .iter()
        .all(|g| g.scored_points >= 0.0 && g.scored_points <= g.max_points));

    let percent = (result.matching_gunas / 36.0 * 100.0).round() as u32;
    assert_eq!(result.compatibility_score, percent);
    assert_eq!(result.verdict, MatchVerdict::from_percent(percent));
}

#[test]
fn test_groom_is_read_from_gender() {
    let (groom, bride) = pair();
    let forward = compare_kundlis(&groom, &bride);
    let backward = compare_kundlis(&bride, &groom);
    assert_eq!(forward, backward);
}

#[test]
fn test_same_moon_flags_nadi_dosha() {
    let engine = engine();
    // Same date and time: identical Moon sign and degree
    let first = engine
        .generate(&birth("Twin", "1996-05-05", "05:05", Gender::Male))
        .unwrap();
    let second = first.clone();
    let result = compare_kundlis(&first, &second);

    let nadi = result.guna_scores.last().unwrap();
    assert_eq!(nadi.scored_points, 0.0);
    assert!(result.issues.iter().any(|i| i.starts_with("Nadi Dosha")));
    // Same rashi: Bhakoot holds
    assert_eq!(result.guna_scores[6].scored_points, 7.0);
    assert!(!result.issues.iter().any(|i| i.starts_with("Bhakoot Dosha")));
}
