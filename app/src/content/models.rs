use serde::{Deserialize, Deserializer, Serialize};

/// Long-form date as shown on post cards and in the post modal, e.g. "March 4, 2025".
pub const DISPLAY_DATE_FORMAT: &str = "%B %-d, %Y";

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "slug_from_object")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "naive_date_from_str")]
    pub published_at: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub read_time: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl PostSummary {
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    pub fn display_date(&self) -> Option<String> {
        display_date(self.published_at)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Post {
    #[serde(flatten)]
    pub summary: PostSummary,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: Vec<Block>,
}

impl Post {
    /// Paragraphs of the article body. Only plain text blocks are rendered, everything else
    /// (images, embeds...) is skipped.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.body
            .iter()
            .filter(|block| block.kind == "block")
            .flat_map(|block| block.children.iter())
            .map(|span| span.text.as_str())
    }
}

/// A rich text block as stored by the content store.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Block {
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<Span>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Span {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "naive_date_from_str")]
    pub deadline: Option<chrono::NaiveDate>,
}

impl Job {
    pub fn display_deadline(&self) -> Option<String> {
        display_date(self.deadline)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub cta_text: Option<String>,
}

impl Service {
    pub const DEFAULT_ICON: &'static str = "\u{1f4bc}";

    pub fn icon(&self) -> &str {
        self.icon
            .as_deref()
            .filter(|icon| !icon.is_empty())
            .unwrap_or(Self::DEFAULT_ICON)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub testimonial: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
}

impl Testimonial {
    pub const MAX_RATING: usize = 5;

    /// Number of filled stars, the rating clamped to `0..=5`.
    pub fn stars(&self) -> usize {
        if self.rating.is_nan() {
            return 0;
        }
        (self.rating.clamp(0.0, Self::MAX_RATING as f64)) as usize
    }

    /// "Position at Company", either part being optional.
    pub fn byline(&self) -> String {
        match (self.position.as_deref(), self.company.as_deref()) {
            (Some(position), Some(company)) => format!("{position} at {company}"),
            (Some(position), None) => position.to_string(),
            (None, Some(company)) => format!("at {company}"),
            (None, None) => String::new(),
        }
    }
}

fn display_date(date: Option<chrono::NaiveDate>) -> Option<String> {
    date.map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
}

fn slug_from_object<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Slug {
        Object { current: String },
        Plain(String),
    }

    Ok(match Slug::deserialize(deserializer)? {
        Slug::Object { current } => current,
        Slug::Plain(current) => current,
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// The store hands out either full RFC 3339 timestamps or plain `YYYY-MM-DD` dates.
fn naive_date_from_str<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<chrono::NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    let s = match s.as_deref().map(str::trim) {
        None | Some("") | Some("null") => return Ok(None),
        Some(s) => s,
    };
    if let Ok(timestamp) = chrono::DateTime::parse_from_rfc3339(s) {
        return Ok(Some(timestamp.date_naive()));
    }
    Ok(Some(
        chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(serde::de::Error::custom)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn post_summary_from_store_json() {
        let post: PostSummary = serde_json::from_value(json!({
            "_id": "post-1",
            "title": "Hiring in 2025",
            "slug": { "_type": "slug", "current": "hiring-in-2025" },
            "excerpt": "What changed.",
            "categories": ["Recruitment", "Startup HR"],
            "publishedAt": "2025-03-04T09:30:00Z",
            "readTime": "5 min read",
            "author": "JMB"
        }))
        .unwrap();

        assert_eq!("hiring-in-2025", post.slug);
        assert_eq!(Some("Recruitment"), post.primary_category());
        assert_eq!(Some("March 4, 2025".to_string()), post.display_date());
    }

    #[test]
    fn missing_optional_fields() {
        let post: PostSummary = serde_json::from_value(json!({
            "_id": "post-2",
            "title": "Draft",
            "slug": { "current": "draft" },
            "categories": null,
            "publishedAt": null
        }))
        .unwrap();

        assert!(post.categories.is_empty());
        assert_eq!(None, post.primary_category());
        assert_eq!(None, post.published_at);
    }

    #[test]
    fn post_paragraphs_skip_non_text_blocks() {
        let post: Post = serde_json::from_value(json!({
            "_id": "post-3",
            "title": "Compliance",
            "slug": { "current": "compliance" },
            "body": [
                { "_type": "block", "children": [{ "_type": "span", "text": "First." }, { "text": "Second." }] },
                { "_type": "image", "asset": { "_ref": "image-abc" } },
                { "_type": "block", "children": [{ "text": "Third." }] }
            ]
        }))
        .unwrap();

        assert_eq!(
            vec!["First.", "Second.", "Third."],
            post.paragraphs().collect::<Vec<_>>()
        );
    }

    #[test]
    fn job_deadline_accepts_plain_dates() {
        let job: Job = serde_json::from_value(json!({
            "_id": "job-1",
            "title": "HR Business Partner",
            "department": "Advisory",
            "location": "Lagos",
            "type": "Full-time",
            "experience": "3-5 years",
            "description": "Partner with clients.",
            "requirements": ["CIPM"],
            "isActive": true,
            "deadline": "2025-12-01"
        }))
        .unwrap();

        assert_eq!("Full-time", job.kind);
        assert_eq!(Some("December 1, 2025".to_string()), job.display_deadline());
    }

    #[test]
    fn invalid_date_is_an_error() {
        let job = serde_json::from_value::<Job>(json!({
            "_id": "job-2",
            "title": "Recruiter",
            "deadline": "next week"
        }));
        assert!(job.is_err());
    }

    #[test]
    fn testimonial_stars_are_clamped() {
        let mut testimonial: Testimonial = serde_json::from_value(json!({
            "_id": "t-1",
            "clientName": "Ada",
            "testimonial": "Great partners.",
            "rating": 7
        }))
        .unwrap();
        assert_eq!(5, testimonial.stars());

        testimonial.rating = -1.0;
        assert_eq!(0, testimonial.stars());

        testimonial.rating = 4.0;
        assert_eq!(4, testimonial.stars());
    }

    #[test]
    fn testimonial_byline() {
        let testimonial: Testimonial = serde_json::from_value(json!({
            "_id": "t-2",
            "clientName": "Bola",
            "position": "CEO",
            "company": "Acme",
            "testimonial": "Reliable.",
            "rating": 5,
            "featured": true
        }))
        .unwrap();
        assert_eq!("CEO at Acme", testimonial.byline());
    }

    #[test]
    fn service_default_icon() {
        let service: Service = serde_json::from_value(json!({
            "_id": "s-1",
            "title": "HR Outsourcing",
            "description": "We run HR for you.",
            "icon": "",
            "features": null
        }))
        .unwrap();
        assert_eq!(Service::DEFAULT_ICON, service.icon());
        assert!(service.features.is_empty());
    }
}
