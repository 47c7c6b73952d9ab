mod common;

use common::TestContext;
use mockito::Matcher;
use predicates::prelude::*;
use serde_json::Value;

fn config_for(server: &mockito::Server) -> String {
    format!("[generation]\napi_url = \"{}/edit-image\"\ntimeout_secs = 10\n", server.url())
}

#[test]
fn generate_prints_outcome_per_style() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/edit-image")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "image_url": "https://img.example/drawing.png",
        })))
        .with_status(200)
        .with_body(r#"{"storage_info": {"uploaded": true, "url": "https://cdn.example/out.png?sig=1"}}"#)
        .expect(2)
        .create();

    let ctx = TestContext::new();
    ctx.write_config(&config_for(&server));

    let output = ctx
        .cli()
        .args(["generate", "--image-url", "https://img.example/drawing.png"])
        .args(["--styles", "3d,cartoon"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let outcomes: Value = serde_json::from_slice(&output.stdout).unwrap();
    for style in ["3d", "cartoon"] {
        assert_eq!(outcomes[style]["success"], Value::Bool(true));
        assert_eq!(outcomes[style]["url"], "https://cdn.example/out.png");
    }
    mock.assert();
}

#[test]
fn failing_style_is_reported_with_exit_code() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/edit-image")
        .match_body(Matcher::Regex("3D STYLE".to_string()))
        .with_status(500)
        .create();
    server
        .mock("POST", "/edit-image")
        .match_body(Matcher::Regex("CARTOON STYLE".to_string()))
        .with_status(200)
        .with_body(r#"{"storage_info": {"uploaded": true, "url": "https://cdn.example/c.png"}}"#)
        .create();

    let ctx = TestContext::new();
    ctx.write_config(&config_for(&server));

    ctx.cli()
        .args(["generate", "--image-url", "https://img.example/a.png", "--styles", "3d,cartoon"])
        .args(["--level", "high"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Failed to generate image: 500 Internal Server Error"))
        .stdout(predicate::str::contains("https://cdn.example/c.png"));
}

#[test]
fn empty_image_url_never_calls_the_api() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/edit-image").expect(0).create();

    let ctx = TestContext::new();
    ctx.write_config(&config_for(&server));

    ctx.cli()
        .args(["generate", "--image-url", "", "--styles", "anime"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No image URL provided"));
    mock.assert();
}

#[test]
fn styles_are_required() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--image-url", "https://img.example/a.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--styles"));
}

#[test]
fn character_sends_single_line_prompt_with_negative_prompt() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/edit-image")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "image_url": "https://img.example/drawing.png",
            "prompt": "The character is an animal. SPECIAL ABILITY - FLYING: Show the character \
                       gracefully airborne above the ground, with wind-swept hair or fur and \
                       light motion trails beneath them. Don't add any other character except \
                       the input character. Keep the appearance features of the input character.",
            "negative_prompt": "Don't add any other character except the input character. \
                                Keep the appearance features of the input character.",
        })))
        .with_status(200)
        .with_body(r#"{"storage_info": {"uploaded": true, "url": "https://cdn.example/hero.png"}}"#)
        .expect(1)
        .create();

    let ctx = TestContext::new();
    ctx.write_config(&config_for(&server));

    let output = ctx
        .cli()
        .args(["character", "--image-url", "https://img.example/drawing.png", "--options", "-"])
        .write_stdin(r#"{"characterType": "animal", "specialAbility": "flying"}"#)
        .output()
        .unwrap();

    assert!(output.status.success());
    let outcome: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(outcome["url"], "https://cdn.example/hero.png");
    mock.assert();
}

#[test]
fn rejected_character_request_names_the_character_image() {
    let mut server = mockito::Server::new();
    server.mock("POST", "/edit-image").with_status(500).create();

    let ctx = TestContext::new();
    ctx.write_config(&config_for(&server));

    ctx.cli()
        .args(["character", "--image-url", "https://img.example/drawing.png"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Failed to generate character image: 500 Internal Server Error",
        ));
}
