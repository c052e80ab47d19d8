use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{Notification, NotificationKind};

/// Same shape the old site accepted: something before the `@`, something
/// after it, and a dot with characters on both sides in the domain. No
/// whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain
                    .char_indices()
                    .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
        }
        _ => false,
    }
}

/// Validate a submission, returning the message to show on failure.
pub fn validate(name: &str, email: &str, message: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
        return Err("Please fill in all fields");
    }
    if !is_valid_email(email) {
        return Err("Please enter a valid email address");
    }
    Ok(())
}

/// Contact form with local validation only; nothing leaves the page.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let notice = use_state(|| None::<(NotificationKind, String)>);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate(&name, &email, &message) {
                Ok(()) => {
                    notice.set(Some((
                        NotificationKind::Success,
                        "Thank you for your message! We'll get back to you soon.".to_string(),
                    )));
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                }
                Err(problem) => {
                    notice.set(Some((NotificationKind::Error, problem.to_string())));
                }
            }
        })
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    html! {
        <>
            <form id="contact-form" class="contact-form" {onsubmit}>
                <input
                    type="text"
                    name="name"
                    placeholder="Your name"
                    value={(*name).clone()}
                    oninput={on_name}
                />
                <input
                    type="text"
                    name="email"
                    placeholder="Your email"
                    value={(*email).clone()}
                    oninput={on_email}
                />
                <textarea
                    name="message"
                    rows="6"
                    placeholder="Your message"
                    value={(*message).clone()}
                    oninput={on_message}
                />
                <button type="submit" class="cta-button">{"Send Message"}</button>
            </form>
            {
                if let Some((kind, text)) = (*notice).clone() {
                    html! {
                        <Notification message={text} {kind} on_dismiss={on_dismiss} />
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("hello@b10.earth"));
        assert!(is_valid_email("first.last@mail.example.com"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("no@dot"));
        assert!(!is_valid_email("@leading.dot"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com."));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("spa ce@mail.com"));
    }

    #[test]
    fn empty_fields_fail_before_email_shape() {
        assert_eq!(
            validate("", "hello@b10.earth", "hi"),
            Err("Please fill in all fields")
        );
        assert_eq!(
            validate("Ada", "not-an-email", "hi"),
            Err("Please enter a valid email address")
        );
        assert_eq!(validate("Ada", "hello@b10.earth", "hi"), Ok(()));
    }
}
