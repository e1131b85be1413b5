//! Display strings for the contact section
//!
//! Consumed read-only by the form controller and the UI. Every field has a
//! default so a config file may override only some of them.

use serde::{Deserialize, Serialize};

/// Label and value pair shown in the contact info panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoItem {
    pub label: String,
    pub value: String,
}

impl InfoItem {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormLabels {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submit: String,
}

impl Default for FormLabels {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            email: "Your Email".to_string(),
            message: "Your Message".to_string(),
            submit: "Send Message".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub title: String,
    pub email: InfoItem,
    pub phone: InfoItem,
    pub location: InfoItem,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            title: "Contact Information".to_string(),
            email: InfoItem::new("Email", "hello@orvith.com"),
            phone: InfoItem::new("Phone", "+123 456 7890"),
            location: InfoItem::new("Location", "San Francisco, California"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormStatusText {
    pub success: String,
    /// Fallback shown when a dispatch failure carries no text
    pub error: String,
    /// Hint shown under the error banner
    pub retry_hint: String,
    /// Banner shown after a submit attempt while the form is invalid
    pub incomplete: String,
}

impl Default for FormStatusText {
    fn default() -> Self {
        Self {
            success: "Your message has been sent successfully!".to_string(),
            error: "There was an error sending your message. Please try again.".to_string(),
            retry_hint: "Please try again or contact directly via email.".to_string(),
            incomplete: "Please complete all required fields correctly".to_string(),
        }
    }
}

/// Content record for the contact section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactContent {
    pub section_title: String,
    pub subtitle: String,
    pub description: String,
    pub form_labels: FormLabels,
    pub submitting_text: String,
    pub contact_info: ContactInfo,
    pub social_heading: String,
    pub social_links: Vec<SocialLink>,
    pub form_status: FormStatusText,
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            section_title: "Contact Me".to_string(),
            subtitle: "GET IN TOUCH".to_string(),
            description: "Have a project in mind or want to discuss a potential collaboration? \
                I'd love to hear from you. Fill out the form below and I'll get back to you \
                as soon as possible."
                .to_string(),
            form_labels: FormLabels::default(),
            submitting_text: "Sending...".to_string(),
            contact_info: ContactInfo::default(),
            social_heading: "Connect".to_string(),
            social_links: vec![
                SocialLink {
                    name: "GitHub".to_string(),
                    url: "https://github.com/llllll".to_string(),
                },
                SocialLink {
                    name: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/llllll".to_string(),
                },
                SocialLink {
                    name: "Twitter".to_string(),
                    url: "https://twitter.com/llllll".to_string(),
                },
            ],
            form_status: FormStatusText::default(),
        }
    }
}

impl ContactContent {
    /// Label for a form field
    pub fn field_label(&self, field: super::ContactField) -> &str {
        match field {
            super::ContactField::Name => &self.form_labels.name,
            super::ContactField::Email => &self.form_labels.email,
            super::ContactField::Message => &self.form_labels.message,
        }
    }
}
