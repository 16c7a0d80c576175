use dioxus::prelude::*;

use crate::components::toast::{show_toast_message, ErrorToast, SuccessToast};

fn form_value(evt: &FormEvent, field: &str) -> String {
  evt.values().get(field).map(|v| v.as_value()).unwrap_or_default()
}

const MIN_MESSAGE_LEN: usize = 10;

/// Client-side checks matching the form's required fields.
fn validate_message(name: &str, email: &str, subject: &str, message: &str) -> Result<(), String> {
  if name.trim().is_empty() {
    return Err("Please enter your name.".to_string());
  }
  let email = email.trim();
  if email.is_empty() || !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
    return Err("Please enter a valid email address.".to_string());
  }
  if subject.trim().is_empty() {
    return Err("Please enter a subject.".to_string());
  }
  if message.trim().len() < MIN_MESSAGE_LEN {
    return Err(format!("Message should be at least {} characters.", MIN_MESSAGE_LEN));
  }
  Ok(())
}

#[component]
pub fn Contact() -> Element {
  static CSS: Asset = asset!("assets/contact.css");

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "contact-page",
      ErrorToast { id: "contact-error", content: "Please check the form." },
      SuccessToast { id: "contact-success", content: "Thanks! We'll get back to you soon." },
      div {
        class: "contact-card",
        h1 { "Get in touch" }
        p { class: "contact-intro", "Questions, bug reports or feedback on the tracker? Drop us a line at "
          a { href: "mailto:support@cryptotracker.app", "support@cryptotracker.app" }
          " or use the form below."
        }
        form {
          onsubmit: move |evt| {
            let name = form_value(&evt, "name");
            let email = form_value(&evt, "email");
            let subject = form_value(&evt, "subject");
            let message = form_value(&evt, "message");
            match validate_message(&name, &email, &subject, &message) {
              Ok(()) => show_toast_message("contact-success", "Thanks! We'll get back to you soon."),
              Err(problem) => show_toast_message("contact-error", &problem),
            }
          },
          label { r#for: "name", "Name" }
          input { id: "name", name: "name", r#type: "text", required: true }
          label { r#for: "email", "Email" }
          input { id: "email", name: "email", r#type: "email", required: true }
          label { r#for: "subject", "Subject" }
          input { id: "subject", name: "subject", r#type: "text", required: true }
          label { r#for: "message", "Message" }
          textarea { id: "message", name: "message", rows: 6, required: true }
          button {
            class: "contact-submit",
            r#type: "submit",
            "Send message"
          }
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_incomplete_submissions() {
    assert!(validate_message("", "a@b.com", "Hi", "long enough text").is_err());
    assert!(validate_message("Ann", "not-an-email", "Hi", "long enough text").is_err());
    assert!(validate_message("Ann", "a@b.com", "", "long enough text").is_err());
    assert!(validate_message("Ann", "a@b.com", "Hi", "short").is_err());
  }

  #[test]
  fn accepts_a_complete_submission() {
    assert!(validate_message("Ann", "a@b.com", "Feedback", "The compare page is great.").is_ok());
  }
}
