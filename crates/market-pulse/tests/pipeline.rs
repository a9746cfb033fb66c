mod support;

use market_pulse::platforms::TelegramClient;
use market_pulse::{AppConfig, Pipeline, PulseError, QuoteFetcher, Secrets};
use pulse_llm::LlmError;
use pulse_llm::providers::AnthropicProvider;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use support::{Canned, StubServer};

const CONFIG: &str = r#"
agent:
  system_prompt: "You write short market updates."
  model: claude-test
  schedule:
    cron: "0 9 * * 1-5"
    timezone: America/New_York
  telegram:
    parse_mode: Markdown
"#;

fn secrets() -> Secrets {
    let env = HashMap::from([
        ("ANTHROPIC_API_KEY", "sk-test"),
        ("TELEGRAM_BOT_TOKEN", "777:bot"),
        ("TELEGRAM_CHAT_ID", "-1001"),
    ]);
    Secrets::from_lookup(|key: &str| env.get(key).map(|v| v.to_string())).unwrap()
}

fn pipeline(llm: &StubServer, telegram: &StubServer) -> Pipeline {
    let config = AppConfig::from_yaml(CONFIG).unwrap();
    let secrets = secrets();
    let provider = AnthropicProvider::with_base_url(&secrets.anthropic_api_key, &llm.base_url).unwrap();

    Pipeline::build(
        &config,
        &secrets,
        Arc::new(provider),
        Arc::new(QuoteFetcher::default()),
        TelegramClient::with_base_url(&secrets.telegram_bot_token, &telegram.base_url),
    )
    .unwrap()
}

fn llm_reply(content: Value, stop_reason: &str) -> Canned {
    Canned::json(
        200,
        json!({
            "id": "msg_test",
            "type": "message",
            "role": "assistant",
            "content": content,
            "stop_reason": stop_reason,
            "usage": {"input_tokens": 12, "output_tokens": 7}
        }),
    )
}

#[tokio::test]
async fn test_run_calls_tool_and_posts_update() {
    let update = "📈 *Market update*: SPY, QQQ and DIA edged higher.";
    let llm = StubServer::start(vec![
        llm_reply(
            json!([
                {"type": "text", "text": "Checking the market."},
                {"type": "tool_use", "id": "toolu_01", "name": "get_stock_data", "input": {}}
            ]),
            "tool_use",
        ),
        llm_reply(json!([{"type": "text", "text": update}]), "end_turn"),
    ])
    .await;
    let telegram = StubServer::start(vec![Canned::json(200, json!({"ok": true}))]).await;

    let sent = pipeline(&llm, &telegram).run().await.unwrap();
    assert_eq!(sent, update);

    let calls = llm.requests();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].target(), "/messages");
    assert_eq!(calls[0].header("x-api-key"), Some("sk-test"));
    assert_eq!(calls[0].header("anthropic-version"), Some("2023-06-01"));

    let first = calls[0].json();
    assert_eq!(first["model"], "claude-test");
    assert_eq!(first["system"], "You write short market updates.");
    assert_eq!(first["max_tokens"], 1024);
    assert_eq!(first["tools"][0]["name"], "get_stock_data");
    let prompt = first["messages"][0]["content"].as_str().unwrap();
    assert!(prompt.starts_with("Generate a stock market update for "), "{prompt}");

    let second = calls[1].json();
    let messages = second["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1]["role"], "assistant");
    let result = &messages[2]["content"][0];
    assert_eq!(result["type"], "tool_result");
    assert_eq!(result["tool_use_id"], "toolu_01");

    let snapshot: Value = serde_json::from_str(result["content"].as_str().unwrap()).unwrap();
    let symbols: Vec<&str> = snapshot["indices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["symbol"].as_str().unwrap())
        .collect();
    assert_eq!(symbols, vec!["SPY", "QQQ", "DIA"]);
    assert!(
        ["pre-market", "open", "after-hours", "closed"]
            .contains(&snapshot["market_status"].as_str().unwrap())
    );

    let posts = telegram.requests();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].target(), "/bot777:bot/sendMessage");
    assert_eq!(posts[0].form_value("chat_id").as_deref(), Some("-1001"));
    assert_eq!(posts[0].form_value("text").as_deref(), Some(update));
    assert_eq!(posts[0].form_value("parse_mode").as_deref(), Some("Markdown"));
}

#[tokio::test]
async fn test_blank_answer_is_not_sent() {
    let llm = StubServer::start(vec![llm_reply(json!([{"type": "text", "text": "  \n"}]), "end_turn")]).await;
    let telegram = StubServer::start(vec![]).await;

    let err = pipeline(&llm, &telegram).run().await.unwrap_err();
    assert!(matches!(err, PulseError::EmptyMessage));
    assert_eq!(err.to_string(), "Agent returned empty message");
    assert!(telegram.requests().is_empty());
}

#[tokio::test]
async fn test_rejected_api_key_fails_the_run() {
    let llm = StubServer::start(vec![Canned::json(
        401,
        json!({"type": "error", "error": {"type": "authentication_error", "message": "invalid x-api-key"}}),
    )])
    .await;
    let telegram = StubServer::start(vec![]).await;

    let err = pipeline(&llm, &telegram).run().await.unwrap_err();
    assert!(
        matches!(
            err,
            PulseError::AgentError(pulse_agent::Error::Llm(LlmError::AuthenticationFailed))
        ),
        "{err:?}"
    );
    assert!(err.to_string().starts_with("Agent generation failed"));
    assert!(telegram.requests().is_empty());
}

#[tokio::test]
async fn test_telegram_rejection_fails_the_run() {
    let llm = StubServer::start(vec![llm_reply(json!([{"type": "text", "text": "Quiet day."}]), "end_turn")]).await;
    let telegram = StubServer::start(vec![Canned::text(400, "Bad Request: chat not found")]).await;

    let err = pipeline(&llm, &telegram).run().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "telegram API returned status 400: Bad Request: chat not found"
    );
}
