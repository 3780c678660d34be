use std::sync::Arc;
use axum::{
    extract::{rejection::FormRejection, State},
    response::Redirect,
    Form,
};
use serde::Deserialize;

use crate::AppState;
use crate::utils::mailer::ContactEmail;
use crate::utils::sanitize::{clean_text, sanitize_email};

/// Raw fields as posted by the contact page form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub goal: String,
    pub message: String,
    pub timeline: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactSubmission {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub goal: String,
    pub message: String,
    pub timeline: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactStatus {
    Empty,
    Success,
    Error,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Empty => "empty",
            ContactStatus::Success => "success",
            ContactStatus::Error => "error",
        }
    }
}

impl ContactForm {
    pub fn sanitize(self) -> ContactSubmission {
        ContactSubmission {
            full_name: clean_text(&self.full_name),
            email: sanitize_email(self.email.trim()),
            company: clean_text(&self.company),
            goal: clean_text(&self.goal),
            message: clean_text(&self.message),
            timeline: clean_text(&self.timeline),
        }
    }
}

impl ContactSubmission {
    /// Company and timeline are optional on the form, everything else is not.
    /// A lone "0" counts as blank too, matching PHP `empty()` for `contact.php` posts.
    pub fn missing_required(&self) -> bool {
        [&self.full_name, &self.email, &self.goal, &self.message]
            .iter()
            .any(|field| field.is_empty() || field.as_str() == "0")
    }

    pub fn to_email(&self, recipient: &str) -> ContactEmail {
        let body = format!(
            "Name: {}\nEmail: {}\nCompany: {}\nGoal: {}\nTimeline: {}\n\nProject Details:\n{}\n",
            self.full_name, self.email, self.company, self.goal, self.timeline, self.message
        );

        ContactEmail {
            sender_name: self.full_name.clone(),
            sender_email: self.email.clone(),
            recipient: recipient.to_string(),
            subject: format!("New Project Inquiry from {}", self.full_name),
            body,
        }
    }
}

fn redirect_with_status(page: &str, status: ContactStatus) -> Redirect {
    Redirect::to(&format!("{}?status={}", page, status.as_str()))
}

/// The relay only answers form posts, anything else goes back to the page.
pub async fn contact_page(State(state): State<Arc<AppState>>) -> Redirect {
    Redirect::to(&state.config.contact.page)
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    form: Result<Form<ContactForm>, FormRejection>,
) -> Redirect {
    let page = &state.config.contact.page;

    let submission = match form {
        Ok(Form(form)) => form.sanitize(),
        Err(e) => {
            tracing::error!("Unreadable contact form submission: {}", e);
            return redirect_with_status(page, ContactStatus::Empty);
        }
    };

    if submission.missing_required() {
        tracing::info!("Contact submission rejected, required fields missing");
        return redirect_with_status(page, ContactStatus::Empty);
    }

    let email = submission.to_email(&state.config.contact.recipient);
    let status = match state.mailer.send(email).await {
        Ok(()) => {
            tracing::info!("Relayed project inquiry from {}", submission.email);
            ContactStatus::Success
        }
        Err(e) => {
            tracing::error!("Failed to relay project inquiry from {}: {}", submission.email, e);
            ContactStatus::Error
        }
    };

    redirect_with_status(page, status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::config::app_config::AppConfig;
    use crate::utils::mailer::{MailError, MockMailTransport};

    const FULL_FORM: &str = "full_name=Ada+Lovelace&email=ada%40example.com&company=Analytical+Engines\
        &goal=Brand+film&message=We+need+a+launch+video&timeline=Q3";

    fn state_with(mailer: MockMailTransport) -> Arc<AppState> {
        Arc::new(AppState {
            config: AppConfig::from_lookup(|key| (key == "ENVIRONMENT").then(|| "development".to_string())).unwrap(),
            mailer: Arc::new(mailer),
        })
    }

    async fn post_form(state: Arc<AppState>, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri("/contact")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = crate::build_router(state).oneshot(request).await.unwrap();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        (response.status(), location)
    }

    #[tokio::test]
    async fn empty_goal_redirects_with_empty_status() {
        let mut mailer = MockMailTransport::new();
        mailer.expect_send().times(0);

        let body = "full_name=Ada&email=ada%40example.com&goal=&message=Hello";
        let (status, location) = post_form(state_with(mailer), body).await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location, "contact.html?status=empty");
    }

    #[tokio::test]
    async fn markup_only_field_counts_as_empty() {
        let mut mailer = MockMailTransport::new();
        mailer.expect_send().times(0);

        let body = "full_name=%3Cb%3E%3C%2Fb%3E&email=ada%40example.com&goal=Film&message=Hello";
        let (_, location) = post_form(state_with(mailer), body).await;

        assert_eq!(location, "contact.html?status=empty");
    }

    #[tokio::test]
    async fn zero_message_counts_as_empty() {
        let mut mailer = MockMailTransport::new();
        mailer.expect_send().times(0);

        let body = "full_name=Ada&email=ada%40example.com&goal=Film&message=0";
        let (status, location) = post_form(state_with(mailer), body).await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location, "contact.html?status=empty");
    }

    #[tokio::test]
    async fn failing_transport_redirects_with_error_status() {
        let mut mailer = MockMailTransport::new();
        mailer
            .expect_send()
            .times(1)
            .returning(|_| Err(MailError::Address("not an address".parse::<lettre::Address>().unwrap_err())));

        let (status, location) = post_form(state_with(mailer), FULL_FORM).await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location, "contact.html?status=error");
    }

    #[tokio::test]
    async fn successful_send_redirects_with_success_status() {
        let mut mailer = MockMailTransport::new();
        mailer
            .expect_send()
            .withf(|email| {
                email.recipient == "studio@studiox.com"
                    && email.subject == "New Project Inquiry from Ada Lovelace"
                    && email.sender_email == "ada@example.com"
                    && email.body.contains("Company: Analytical Engines\n")
                    && email.body.ends_with("Project Details:\nWe need a launch video\n")
            })
            .times(1)
            .returning(|_| Ok(()));

        let (status, location) = post_form(state_with(mailer), FULL_FORM).await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location, "contact.html?status=success");
    }

    #[tokio::test]
    async fn get_redirects_to_contact_page_without_status() {
        let mut mailer = MockMailTransport::new();
        mailer.expect_send().times(0);

        let request = Request::builder()
            .uri("/contact")
            .body(Body::empty())
            .unwrap();
        let response = crate::build_router(state_with(mailer)).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "contact.html");
    }

    #[test]
    fn sanitize_strips_tags_and_filters_email() {
        let submission = ContactForm {
            full_name: "  <i>Ada</i> Lovelace ".to_string(),
            email: " ada@example.com<script> ".to_string(),
            company: String::new(),
            goal: "Brand film".to_string(),
            message: "Hi <br>there".to_string(),
            timeline: "  ".to_string(),
        }
        .sanitize();

        assert_eq!(submission.full_name, "Ada Lovelace");
        assert_eq!(submission.email, "ada@example.comscript");
        assert_eq!(submission.message, "Hi there");
        assert_eq!(submission.timeline, "");
        assert!(!submission.missing_required());
    }
}
