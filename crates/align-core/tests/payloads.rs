//! Parsing tests against payloads shaped like the backend's responses.

use align_core::Page;
use align_core::entities::*;
use pretty_assertions::assert_eq;

#[test]
fn document_page() {
    let json = r#"{
        "count": 2,
        "next": null,
        "previous": null,
        "results": [
            {
                "id": 1,
                "url": "http://localhost:8000/api/document/1/",
                "source_id": "kicd_math_2019",
                "title": "KICD Math",
                "country": "Kenya",
                "digitization_method": "manual_entry",
                "source_url": "https://kicd.ac.ke",
                "created": "2019-10-23T00:00:00Z",
                "official": true,
                "root_node_id": 100,
                "root_node_url": "http://alignmentapp.learningequality.org/api/node/100"
            },
            {
                "id": 2,
                "source_id": "ka_math",
                "title": "Khan Academy Math",
                "country": "USA",
                "digitization_method": "automated_scan",
                "source_url": "",
                "created": "2019-10-24T09:30:00.250000Z",
                "root_node_id": null,
                "root_node_url": "http://alignmentapp.learningequality.org/api/node/None",
                "is_draft": false
            }
        ]
    }"#;
    let page: Page<Document> = serde_json::from_str(json).unwrap();
    let docs = page.into_results();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].root_node_id, Some(100));
    assert_eq!(docs[0].official, Some(true));
    assert!(docs[0].created.is_some());
    assert_eq!(docs[1].root_node_id, None);
    assert_eq!(docs[1].extra.get("is_draft"), Some(&serde_json::Value::Bool(false)));
}

#[test]
fn leaderboard_is_a_plain_list() {
    let json = r#"[
        {"username": "amina", "number_of_judgments": 412},
        {"username": "jo", "number_of_judgments": 12, "team": "kolibri"}
    ]"#;
    let rows: Vec<LeaderboardEntry> = serde_json::from_str(json).unwrap();
    assert_eq!(
        rows[0],
        LeaderboardEntry {
            username: "amina".into(),
            number_of_judgments: 412,
            extra: serde_json::Map::new(),
        }
    );
    assert_eq!(rows[1].extra.get("team"), Some(&serde_json::Value::from("kolibri")));
}

#[test]
fn trained_models() {
    let json = r#"[
        {
            "name": "tf_idf_sample_negs_no_training",
            "notebook_url": "https://colab.research.google.com/drive/abc",
            "team_members": "ivan, aron",
            "file": null,
            "folder_url": "http://alignmentapp.learningequality.org/files/models/tf_idf_sample_negs_no_training",
            "scores": {"auc": 0.71}
        },
        {"name": "baseline", "scores": {}}
    ]"#;
    let models: Vec<TrainedModel> = serde_json::from_str(json).unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0].scores["auc"], 0.71);
    assert_eq!(models[1].notebook_url, None);
}

#[test]
fn recommendations_pair_scores_with_nodes() {
    let json = r#"{
        "count": 2,
        "next": null,
        "previous": null,
        "target_node": {"id": 42, "depth": 4, "title": "Place value"},
        "relevances": [0.92, 0.81],
        "results": [
            {"id": 501, "depth": 3, "title": "Tens and ones"},
            {"id": 502, "depth": 3, "title": "Hundreds"}
        ]
    }"#;
    let recs: Recommendations = serde_json::from_str(json).unwrap();
    assert_eq!(recs.target_node.as_ref().map(Node::id), Some(42));
    let scored: Vec<(i64, Option<f64>)> = recs.scored().map(|(n, s)| (n.id(), s)).collect();
    assert_eq!(scored, vec![(501, Some(0.92)), (502, Some(0.81))]);
}

#[test]
fn user_points() {
    let points: UserPoints = serde_json::from_str(r#"{"points": 35}"#).unwrap();
    assert_eq!(points.points, 35);
    assert!(points.extra.is_empty());
}

#[test]
fn judgment_created() {
    // Create response for POST /api/judgment/: every serializer field, with
    // the nullable columns the server leaves unset on a fresh record.
    let json = r#"{
        "id": 900,
        "url": "http://localhost:8000/api/judgment/900/",
        "node1": 42,
        "node2": 77,
        "rating": 0.5,
        "confidence": 0.8,
        "extra_fields": {"rubric": {"coverage": 3}, "is_dev_build": false},
        "mode": "rapid_feedback",
        "ui_name": "judgment/evaluation",
        "ui_version_hash": "2019_11_with_rubric",
        "user_id": 3,
        "created": "2019-11-02T14:03:11.512000Z",
        "is_test_data": null
    }"#;
    let judgment: Judgment = serde_json::from_str(json).unwrap();
    assert_eq!(judgment.id, 900);
    assert_eq!((judgment.node1, judgment.node2), (42, 77));
    assert_eq!(judgment.is_test_data, None);
    assert_eq!(judgment.user_id, Some(3));
    assert!(judgment.created.is_some());
    assert_eq!(judgment.extra_fields["rubric"]["coverage"], 3);
    assert!(judgment.extra.is_empty());
}
