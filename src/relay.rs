//! Lead-intake form payload and the single POST to the form relay.

use gloo_net::http::Request;
use log::info;
use serde::Deserialize;

use crate::config;
use crate::controller::submission::SubmitError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub company: String,
    pub email: String,
    pub website: String,
    pub segment: Option<String>,
    pub goal: Option<String>,
    pub channels: Vec<String>,
    pub budget: Option<String>,
    pub message: String,
}

#[derive(Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    errors: Vec<RelayErrorEntry>,
}

#[derive(Deserialize)]
struct RelayErrorEntry {
    message: String,
}

impl ContactForm {
    /// Name and email are the only mandatory fields.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    pub fn toggle_channel(&mut self, channel: &str, selected: bool) {
        self.channels.retain(|existing| existing != channel);
        if selected {
            self.channels.push(channel.to_string());
        }
    }

    /// Field pairs in the order the relay shows them. Channels repeat their key.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![
            ("name", self.name.trim()),
            ("company", self.company.trim()),
            ("email", self.email.trim()),
            ("website", self.website.trim()),
        ];
        if let Some(segment) = &self.segment {
            pairs.push(("segment", segment.as_str()));
        }
        if let Some(goal) = &self.goal {
            pairs.push(("goal", goal.as_str()));
        }
        for channel in &self.channels {
            pairs.push(("channels", channel.as_str()));
        }
        if let Some(budget) = &self.budget {
            pairs.push(("budget", budget.as_str()));
        }
        pairs.push(("message", self.message.trim()));
        pairs
    }

    pub fn encode(&self) -> String {
        self.pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

pub async fn submit(form: &ContactForm) -> Result<(), SubmitError> {
    let response = Request::post(config::FORM_ENDPOINT)
        .header("Accept", "application/json")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form.encode())
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    if response.ok() {
        info!("Contact form accepted by relay");
        return Ok(());
    }

    let status = response.status();
    let detail = response.text().await.ok().and_then(|text| relay_error_detail(&text));
    Err(SubmitError::Rejected { status, detail })
}

/// Joins the relay's `{"errors":[{"message":..}]}` messages, if the body has any.
fn relay_error_detail(body: &str) -> Option<String> {
    let parsed: RelayErrorBody = serde_json::from_str(body).ok()?;
    let messages: Vec<String> = parsed.errors.into_iter().map(|e| e.message).collect();
    (!messages.is_empty()).then(|| messages.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada Example".to_string(),
            email: "ada@example.com".to_string(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn name_and_email_are_required() {
        assert!(filled().is_complete());
        assert!(!ContactForm { name: "  ".to_string(), ..filled() }.is_complete());
        assert!(!ContactForm { email: String::new(), ..filled() }.is_complete());
    }

    #[test]
    fn encode_escapes_values() {
        let form = ContactForm {
            company: "Villa & Co".to_string(),
            budget: Some("10.000 € +".to_string()),
            ..filled()
        };
        let body = form.encode();
        assert!(body.starts_with("name=Ada%20Example&company=Villa%20%26%20Co&email=ada%40example.com"));
        assert!(body.contains("budget=10.000%20%E2%82%AC%20%2B"));
        assert!(body.ends_with("&message="));
    }

    #[test]
    fn channels_repeat_their_key() {
        let mut form = filled();
        form.toggle_channel("Premium Website", true);
        form.toggle_channel("Print & Billboards", true);
        let body = form.encode();
        assert!(body.contains("channels=Premium%20Website&channels=Print%20%26%20Billboards"));
    }

    #[test]
    fn unselecting_a_channel_removes_it() {
        let mut form = filled();
        form.toggle_channel("Premium Website", true);
        form.toggle_channel("Premium Website", true);
        assert_eq!(form.channels.len(), 1);
        form.toggle_channel("Premium Website", false);
        assert!(form.channels.is_empty());
    }

    #[test]
    fn relay_error_messages_are_joined() {
        let body = r#"{"error":"Validation errors","errors":[{"code":"TYPE_EMAIL","field":"email","message":"should be an email"},{"message":"form is disabled"}]}"#;
        assert_eq!(
            relay_error_detail(body).as_deref(),
            Some("should be an email; form is disabled")
        );
    }

    #[test]
    fn unparseable_relay_body_has_no_detail() {
        assert_eq!(relay_error_detail("<html>Bad Gateway</html>"), None);
        assert_eq!(relay_error_detail(r#"{"errors":[]}"#), None);
    }

    #[test]
    fn unanswered_choices_are_omitted() {
        let form = filled();
        let pairs = form.pairs();
        assert!(pairs.iter().all(|(key, _)| !matches!(*key, "segment" | "goal" | "budget" | "channels")));
    }
}
