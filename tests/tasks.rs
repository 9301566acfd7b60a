use assert_cmd::Command;
use httpmock::{Method, MockServer};
use predicates::prelude::*;
use serde_json::json;

#[test]
fn it_renders_the_viewers_tasks() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::POST)
            .path("/graphql")
            .body_includes("tasks");
        then.status(200).json_body(json!({
            "data": { "viewer": { "tasks": [
                { "id": "42", "title": "Buy milk", "description": "2%" },
                { "id": "a/b", "title": "Water <plants>", "description": "" }
            ] } }
        }));
    });

    let mut cmd = Command::cargo_bin("keep-up").unwrap();
    let result = cmd
        .args(["tasks", "--endpoint", server.url("/graphql").as_str()])
        .assert()
        .success();

    mock.assert();
    result.stdout(
        predicate::str::contains(r#"<li><div><a href="/tasks/42">Buy milk</a><p>2%</p></div></li>"#)
            .and(predicate::str::contains(r#"href="/tasks/a%2Fb">Water &lt;plants&gt;</a>"#)),
    );
}

#[test]
fn it_renders_an_empty_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::POST).path("/graphql");
        then.status(200)
            .json_body(json!({ "data": { "viewer": { "tasks": [] } } }));
    });

    let mut cmd = Command::cargo_bin("keep-up").unwrap();
    let result = cmd
        .args(["tasks", "--endpoint", server.url("/graphql").as_str()])
        .assert()
        .success();

    result.stdout(predicate::str::contains("<p>No tasks</p>"));
}
