// tests/assessment_tests.rs

mod support;

use serde_json::{Value, json};
use support::spawn_app;

#[tokio::test]
async fn questions_are_grouped_by_category() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get("/api/assessment/questions").await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let questions: Vec<Value> = response.json().await.unwrap();
    assert_eq!(questions.len(), 5);

    let categories: Vec<&str> = questions
        .iter()
        .map(|q| q["category"].as_str().unwrap())
        .collect();
    let mut sorted = categories.clone();
    sorted.sort();
    assert_eq!(categories, sorted);

    for q in &questions {
        let options = q["options"].as_array().unwrap();
        assert!(!options.is_empty());
        assert!(options.iter().all(|o| o["value"].is_string() && o["text"].is_string()));
    }
}

#[tokio::test]
async fn evaluate_scores_answers() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app
        .post_json(
            "/api/assessment/evaluate",
            &json!({ "answers": { "1": "arts", "2": "creative", "3": "creative" } }),
        )
        .await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let outcome: Value = response.json().await.unwrap();
    assert_eq!(outcome["personalityType"], "creative");
    assert!(outcome["personalitySummary"].is_string());
    assert_eq!(outcome["careerRecommendations"].as_array().unwrap().len(), 4);
    assert_eq!(outcome["actionPlan"].as_array().unwrap().len(), 4);

    let skills = outcome["skillsAnalysis"].as_array().unwrap();
    assert_eq!(skills.len(), 5);
    let creative = skills
        .iter()
        .find(|s| s["name"] == "Creative Thinking")
        .unwrap();
    assert_eq!(creative["level"], 60);
    assert_eq!(creative["stars"], 3);
    for skill in skills {
        let level = skill["level"].as_u64().unwrap();
        let stars = skill["stars"].as_u64().unwrap();
        assert!(level <= 100);
        assert!(stars <= 5);
    }

    let steps: Vec<u64> = outcome["actionPlan"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["step"].as_u64().unwrap())
        .collect();
    assert_eq!(steps, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn empty_answers_default_to_technical() {
    let app = spawn_app().await;

    let with_empty_map = app
        .post_json("/api/assessment/evaluate", &json!({ "answers": {} }))
        .await;
    let without_answers = app.post_json("/api/assessment/evaluate", &json!({})).await;

    assert_eq!(with_empty_map.status().as_u16(), 200);
    assert_eq!(without_answers.status().as_u16(), 200);
    let outcome: Value = with_empty_map.json().await.unwrap();
    assert_eq!(outcome["personalityType"], "technical");
    assert!(
        outcome["skillsAnalysis"]
            .as_array()
            .unwrap()
            .iter()
            .all(|s| s["level"] == 0 && s["stars"] == 0)
    );
}

#[tokio::test]
async fn non_string_answers_are_ignored() {
    let app = spawn_app().await;

    let response = app
        .post_json(
            "/api/assessment/evaluate",
            &json!({ "answers": { "1": "science", "2": 3, "3": null } }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let outcome: Value = response.json().await.unwrap();
    assert_eq!(outcome["personalityType"], "technical");
    let technical = outcome["skillsAnalysis"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["name"] == "Technical Skills")
        .cloned()
        .unwrap();
    assert_eq!(technical["level"], 20);
}

#[tokio::test]
async fn evaluate_succeeds_when_saving_fails() {
    // Arrange: no results table to write into
    let app = spawn_app().await;
    sqlx::query("DROP TABLE assessment_results")
        .execute(&app.pool)
        .await
        .unwrap();

    // Act
    let response = app
        .post_json(
            "/api/assessment/evaluate",
            &json!({ "answers": { "1": "arts", "2": "design" }, "userId": 1 }),
        )
        .await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let outcome: Value = response.json().await.unwrap();
    assert_eq!(outcome["personalityType"], "creative");
    assert!(outcome["personalitySummary"].is_string());
    assert_eq!(outcome["careerRecommendations"].as_array().unwrap().len(), 4);
    assert_eq!(outcome["skillsAnalysis"].as_array().unwrap().len(), 5);
    assert_eq!(outcome["actionPlan"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn evaluate_is_idempotent() {
    let app = spawn_app().await;
    let body = json!({ "answers": { "1": "commerce", "2": "social", "3": "lab", "4": "money" } });

    let first: Value = app
        .post_json("/api/assessment/evaluate", &body)
        .await
        .json()
        .await
        .unwrap();
    let second: Value = app
        .post_json("/api/assessment/evaluate", &body)
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first["personalityType"], "business");
}

#[tokio::test]
async fn results_are_saved_and_listed_newest_first() {
    // Arrange
    let app = spawn_app().await;
    let (token, user_id) = app.login_as(None).await;

    // Act: two attempts for this user, one anonymous
    for answers in [json!({ "1": "science" }), json!({ "1": "social", "2": "social" })] {
        let response = app
            .post_json(
                "/api/assessment/evaluate",
                &json!({ "answers": answers, "userId": user_id }),
            )
            .await;
        assert_eq!(response.status().as_u16(), 200);
    }
    app.post_json("/api/assessment/evaluate", &json!({ "answers": { "1": "arts" } }))
        .await;

    let response = app
        .client
        .get(app.url("/api/assessment/history"))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let history: Vec<Value> = response.json().await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["personalityType"], "social");
    assert_eq!(history[1]["personalityType"], "technical");
    assert!(history.iter().all(|r| r["userId"] == user_id));
    assert_eq!(history[1]["answers"], json!({ "1": "science" }));
}

#[tokio::test]
async fn history_is_capped_at_ten() {
    let app = spawn_app().await;
    let (token, user_id) = app.login_as(None).await;

    for _ in 0..12 {
        app.post_json(
            "/api/assessment/evaluate",
            &json!({ "answers": { "1": "math" }, "userId": user_id }),
        )
        .await;
    }

    let history: Vec<Value> = app
        .client
        .get(app.url("/api/assessment/history"))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(history.len(), 10);
}

#[tokio::test]
async fn history_requires_login() {
    let app = spawn_app().await;

    let response = app.get("/api/assessment/history").await;

    assert_eq!(response.status().as_u16(), 401);
}
