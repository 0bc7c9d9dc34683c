//! Rows exchanged with the hosted data store, and the shaping the site does
//! around them.

use serde::{Deserialize, Serialize};

const NOT_SPECIFIED: &str = "Not specified";

pub const DEFAULT_AVATAR: &str = "https://images.unsplash.com/photo-1544005313-94ddf0286df2?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=400";

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactError(pub String);

/// The contact form as the page hands it over.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub event_date: String,
    pub guests: String,
    pub budget: String,
    pub message: String,
}

/// A row of the `contact_submissions` table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub event_date: Option<String>,
    pub message: String,
    pub status: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError("name is required".to_string()));
        }

        match self.email.trim().split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => (),
            _ => return Err(ContactError(format!("{:?} is not an email address", self.email))),
        }

        if self.phone.trim().is_empty() {
            return Err(ContactError("phone is required".to_string()));
        }

        Ok(())
    }

    /// Folds the guest count and budget into the message body, since the
    /// table has no columns for them.
    pub fn into_submission(self) -> Result<ContactSubmission, ContactError> {
        self.validate()?;

        let guests = or_not_specified(&self.guests);
        let budget = or_not_specified(&self.budget);
        let event_date = Some(self.event_date).filter(|date| !date.trim().is_empty());

        Ok(ContactSubmission {
            message: format!("Guests: {guests}\nBudget: {budget}\n\n{}", self.message),
            name: self.name,
            email: self.email,
            phone: self.phone,
            event_type: self.event_type,
            event_date,
            status: "new".to_string(),
        })
    }
}

fn or_not_specified(value: &str) -> &str {
    if value.is_empty() {
        NOT_SPECIFIED
    } else {
        value
    }
}

/// A row of the `testimonials` table.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Testimonial {
    pub id: String,
    pub client_name: String,
    pub client_title: String,
    pub testimonial_text: String,
    pub rating: f64,
    pub event_type: String,
    pub avatar_url: Option<String>,
    pub is_featured: bool,
    pub is_approved: bool,
    pub created_at: String,
}

/// What the testimonial carousel renders.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TestimonialCard {
    pub name: String,
    pub location: String,
    pub event: String,
    pub rating: u8,
    pub review: String,
    pub image: String,
    pub emoji: String,
}

impl From<Testimonial> for TestimonialCard {
    fn from(testimonial: Testimonial) -> Self {
        TestimonialCard {
            emoji: emoji_for_event(&testimonial.event_type).to_string(),
            image: testimonial
                .avatar_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            name: testimonial.client_name,
            location: testimonial.client_title,
            event: testimonial.event_type,
            rating: rating_stars(testimonial.rating),
            review: testimonial.testimonial_text,
        }
    }
}

/// Whole stars out of five; unusable ratings show none.
pub fn rating_stars(rating: f64) -> u8 {
    if rating.is_finite() {
        rating.round().clamp(0.0, 5.0) as u8
    } else {
        0
    }
}

pub fn emoji_for_event(event_type: &str) -> &'static str {
    let lower = event_type.to_lowercase();

    if lower.contains("wedding") {
        "💒"
    } else if lower.contains("birthday") {
        "🎂"
    } else if lower.contains("anniversary") {
        "💕"
    } else if lower.contains("corporate") {
        "🏢"
    } else if lower.contains("mehendi") || lower.contains("haldi") {
        "🎨"
    } else {
        "🎉"
    }
}
