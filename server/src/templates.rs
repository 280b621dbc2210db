//! HTML notification mails for the two lead forms.

use std::fmt::{self, Display};

use app::forms::{provided, ContactSubmission, TalentPoolSubmission};
use chrono::{DateTime, Local};
use html_escape::encode_text;

const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

const NOT_PROVIDED: &str = "Not provided";
const NO_MESSAGE: &str = "No message provided";
const NOT_SPECIFIED: &str = "Not specified";
const NO_ADDITIONAL_MESSAGE: &str = "No additional message";

/// Subjects end up in a mail header.
fn header_safe(subject: &str) -> String {
    subject.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

struct Document<'a> {
    accent: &'static str,
    background: &'static str,
    title: &'static str,
    tagline: &'static str,
    fields: Vec<(&'static str, &'a str)>,
}

impl Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<!DOCTYPE html>
<html>
  <head>
    <style>
      body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
      .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
      .header {{ background: {accent}; color: white; padding: 20px; text-align: center; border-radius: 8px 8px 0 0; }}
      .content {{ background: {background}; padding: 20px; border-radius: 0 0 8px 8px; }}
      .field {{ margin-bottom: 15px; }}
      .label {{ font-weight: bold; color: #0f172a; }}
      .value {{ color: #475569; }}
    </style>
  </head>
  <body>
    <div class="container">
      <div class="header">
        <h1>{title}</h1>
        <p>{tagline}</p>
      </div>
      <div class="content">
"#,
            accent = self.accent,
            background = self.background,
            title = self.title,
            tagline = self.tagline,
        )?;
        for (label, value) in &self.fields {
            write!(
                f,
                r#"        <div class="field">
          <div class="label">{label}:</div>
          <div class="value">{}</div>
        </div>
"#,
                encode_text(value)
            )?;
        }
        write!(
            f,
            r#"      </div>
    </div>
  </body>
</html>
"#
        )
    }
}

pub struct ContactEmail<'a> {
    pub submission: &'a ContactSubmission,
    pub submitted_at: DateTime<Local>,
}

impl<'a> ContactEmail<'a> {
    pub fn new(submission: &'a ContactSubmission) -> Self {
        Self {
            submission,
            submitted_at: Local::now(),
        }
    }

    pub fn subject(&self) -> String {
        match provided(&self.submission.subject) {
            Some(subject) => header_safe(subject),
            None => header_safe(&format!(
                "New Contact Form Submission from {}",
                self.submission.name
            )),
        }
    }
}

impl Display for ContactEmail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let submission = self.submission;
        let submitted = self.submitted_at.format(TIMESTAMP_FORMAT).to_string();
        Document {
            accent: "#0f172a",
            background: "#f8fafc",
            title: "New Contact Form Submission",
            tagline: "JMB The Oga HR Website",
            fields: vec![
                ("Name", submission.name.as_str()),
                ("Email", submission.email.as_str()),
                ("Company", provided(&submission.company).unwrap_or(NOT_PROVIDED)),
                ("Phone", provided(&submission.phone).unwrap_or(NOT_PROVIDED)),
                ("Message", provided(&submission.message).unwrap_or(NO_MESSAGE)),
                ("Submitted", submitted.as_str()),
            ],
        }
        .fmt(f)
    }
}

pub struct TalentPoolEmail<'a> {
    pub submission: &'a TalentPoolSubmission,
    pub submitted_at: DateTime<Local>,
}

impl<'a> TalentPoolEmail<'a> {
    pub fn new(submission: &'a TalentPoolSubmission) -> Self {
        Self {
            submission,
            submitted_at: Local::now(),
        }
    }

    pub fn subject(&self) -> String {
        header_safe(&format!(
            "New Talent Pool Registration: {}",
            self.submission.name
        ))
    }
}

impl Display for TalentPoolEmail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let submission = self.submission;
        let submitted = self.submitted_at.format(TIMESTAMP_FORMAT).to_string();
        Document {
            accent: "#b45309",
            background: "#fefce8",
            title: "New Talent Pool Registration",
            tagline: "JMB The Oga HR",
            fields: vec![
                ("Name", submission.name.as_str()),
                ("Email", submission.email.as_str()),
                ("Phone", submission.phone.as_str()),
                ("Desired Position", provided(&submission.position).unwrap_or(NOT_SPECIFIED)),
                ("Experience Level", provided(&submission.experience).unwrap_or(NOT_SPECIFIED)),
                ("Key Skills", provided(&submission.skills).unwrap_or(NOT_SPECIFIED)),
                (
                    "Additional Message",
                    provided(&submission.message).unwrap_or(NO_ADDITIONAL_MESSAGE),
                ),
                ("Registered", submitted.as_str()),
            ],
        }
        .fmt(f)
    }
}
