//! Integration tests for the control map library

use std::fs;

use control_map::types::{FrameworkControlLink, FrameworkPolicyLink, PolicyControlLink};
use control_map::{
    Catalog, Dataset, Entity, EntityKind, Mappings, RelationshipIndex, SearchOutcome, Session,
    SessionError,
};

const SAMPLE: &str = include_str!("../data/knowledge_base.json");

fn sample_dataset() -> Dataset {
    Dataset::from_json_str(SAMPLE).expect("sample dataset parses")
}

fn ids(entities: &[Entity]) -> Vec<&str> {
    entities.iter().map(|e| e.id.as_str()).collect()
}

fn match_ids(outcome: &SearchOutcome) -> Vec<(EntityKind, &str)> {
    outcome
        .matches()
        .iter()
        .map(|m| (m.kind, m.entity.id.as_str()))
        .collect()
}

#[test]
fn test_search_api_in_sample() {
    let catalog = Catalog::new(sample_dataset());

    let outcome = catalog.search("api");
    assert_eq!(
        match_ids(&outcome),
        vec![
            (EntityKind::Policy, "POL-API-SEC"),
            (EntityKind::Control, "CTL-API-GW"),
        ]
    );

    let policy = &outcome.matches()[0];
    assert_eq!(ids(&policy.related.frameworks), vec!["FW-ISO-27001"]);
    assert_eq!(ids(&policy.related.controls), vec!["CTL-MFA", "CTL-API-GW"]);
    assert!(policy.related.policies.is_empty());

    let control = &outcome.matches()[1];
    assert_eq!(ids(&control.related.policies), vec!["POL-API-SEC"]);
    assert!(control.related.frameworks.is_empty());
}

#[test]
fn test_case_and_whitespace_insensitive() {
    let catalog = Catalog::new(sample_dataset());

    let lower = catalog.search("api");
    assert_eq!(catalog.search("API"), lower);
    assert_eq!(catalog.search(" api "), lower);
    assert_eq!(catalog.search("\tApI\n"), lower);
}

#[test]
fn test_alias_match() {
    let catalog = Catalog::new(sample_dataset());

    let outcome = catalog.search("2fa");
    assert_eq!(match_ids(&outcome), vec![(EntityKind::Control, "CTL-MFA")]);

    let mfa = &outcome.matches()[0];
    assert_eq!(ids(&mfa.related.policies), vec!["POL-ACCESS", "POL-API-SEC"]);
    assert_eq!(ids(&mfa.related.frameworks), vec!["FW-NIST-CSF"]);
}

#[test]
fn test_results_grouped_by_kind() {
    let catalog = Catalog::new(sample_dataset());

    // "st" hits NIST, Trust Services Criteria and Restore Testing
    let kinds: Vec<EntityKind> = catalog.search("st").matches().iter().map(|m| m.kind).collect();
    let mut sorted = kinds.clone();
    sorted.sort();
    assert_eq!(kinds, sorted);
    assert_eq!(
        kinds,
        vec![EntityKind::Framework, EntityKind::Framework, EntityKind::Control]
    );
}

#[test]
fn test_empty_query_vs_no_matches() {
    let catalog = Catalog::new(sample_dataset());

    assert_eq!(catalog.search(""), SearchOutcome::EmptyQuery);
    assert_eq!(catalog.search("   "), SearchOutcome::EmptyQuery);
    assert_eq!(catalog.search("zzz-no-such-term"), SearchOutcome::NoMatches);
    assert_ne!(SearchOutcome::EmptyQuery, SearchOutcome::NoMatches);
}

#[test]
fn test_relations_do_not_close_transitively() {
    let dataset = Dataset {
        frameworks: vec![Entity::new("F1", "F1", "")],
        policies: vec![Entity::new("P1", "P1", "")],
        controls: vec![Entity::new("C1", "C1", "")],
        mappings: Mappings {
            framework_policy_map: vec![FrameworkPolicyLink {
                framework_id: "F1".to_string(),
                policy_id: "P1".to_string(),
            }],
            policy_control_map: vec![PolicyControlLink {
                policy_id: "P1".to_string(),
                control_id: "C1".to_string(),
            }],
            framework_control_map: vec![],
        },
    };
    let catalog = Catalog::new(dataset);

    let outcome = catalog.search("F1");
    assert_eq!(outcome.match_count(), 1);
    let related = &outcome.matches()[0].related;
    assert_eq!(ids(&related.policies), vec!["P1"]);
    assert!(related.controls.is_empty());
}

#[test]
fn test_duplicate_and_dangling_relations() {
    let mut dataset = sample_dataset();
    dataset.mappings.framework_control_map.push(FrameworkControlLink {
        framework_id: "FW-NIST-CSF".to_string(),
        control_id: "CTL-MFA".to_string(),
    });
    dataset.mappings.framework_control_map.push(FrameworkControlLink {
        framework_id: "FW-NIST-CSF".to_string(),
        control_id: "CTL-RETIRED".to_string(),
    });

    let index = RelationshipIndex::build(&dataset);
    let adjacency = index
        .adjacency(EntityKind::Framework, EntityKind::Control)
        .unwrap();
    assert_eq!(adjacency.degree("FW-NIST-CSF"), 2);

    let controls = index.related(EntityKind::Framework, "FW-NIST-CSF", EntityKind::Control);
    assert_eq!(ids(&controls), vec!["CTL-MFA"]);

    let dangling = index.dangling_references();
    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].id, "CTL-RETIRED");
}

#[test]
fn test_sample_has_no_dangling_references() {
    let catalog = Catalog::new(sample_dataset());
    assert!(catalog.dangling_references().is_empty());

    let stats = catalog.stats();
    assert_eq!(stats.frameworks, 3);
    assert_eq!(stats.policies, 3);
    assert_eq!(stats.controls, 4);
}

#[tokio::test]
async fn test_session_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("knowledge_base.json");
    fs::write(&path, SAMPLE).unwrap();

    let session = Session::new();
    assert_eq!(session.search("api").unwrap_err(), SessionError::NotLoaded);

    let catalog = session.load_from_path(&path).await.unwrap();
    assert_eq!(catalog.dataset().entity_count(), 10);

    let ticket = session.search("api").unwrap();
    assert_eq!(ticket.outcome.match_count(), 2);
    assert!(session.is_latest(ticket.sequence_id));
    assert_eq!(session.status().state, "ready");
}

#[tokio::test]
async fn test_session_parse_failure_is_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("knowledge_base.json");
    fs::write(&path, r#"{"frameworks": 42}"#).unwrap();

    let session = Session::new();
    let err = session.load_from_path(&path).await.unwrap_err();
    assert!(matches!(err, SessionError::LoadFailed(_)));

    // Fixing the file does not revive the session
    fs::write(&path, SAMPLE).unwrap();
    assert_eq!(
        session.load_from_path(&path).await.unwrap_err(),
        SessionError::AlreadySettled("failed")
    );
    assert!(matches!(
        session.search("api"),
        Err(SessionError::LoadFailed(_))
    ));
}

#[test]
fn test_independent_sessions() {
    let first = Session::with_dataset(sample_dataset());
    let second = Session::with_dataset(Dataset::default());

    assert_eq!(first.search("mfa").unwrap().outcome.match_count(), 1);
    assert_eq!(
        second.search("mfa").unwrap().outcome,
        SearchOutcome::NoMatches
    );
}
