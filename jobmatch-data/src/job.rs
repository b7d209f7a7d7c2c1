pub const TITLE_PLACEHOLDER: &str = "공고 제목";
pub const COMPANY_PLACEHOLDER: &str = "회사명";
pub const LOCATION_PLACEHOLDER: &str = "지역";
pub const SALARY_PLACEHOLDER: &str = "급여";

/// Summary of a job posting as handed down by the page owning it.
///
/// Every field is optional so a card can be laid out before the real
/// data arrives.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSummary {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub image: Option<String>,
}

/// What a job card actually shows. An image always wins over the text
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobCardContent {
    Image { url: String, alt: String },
    Text(TextSummary),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSummary {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
}

impl JobSummary {
    pub fn content(&self) -> JobCardContent {
        let title = or_placeholder(&self.title, TITLE_PLACEHOLDER);
        match non_empty(&self.image) {
            Some(url) => JobCardContent::Image {
                url: url.to_string(),
                alt: title,
            },
            None => JobCardContent::Text(TextSummary {
                title,
                company: or_placeholder(&self.company, COMPANY_PLACEHOLDER),
                location: or_placeholder(&self.location, LOCATION_PLACEHOLDER),
                salary: or_placeholder(&self.salary, SALARY_PLACEHOLDER),
            }),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobImagePreview {
    pub image: Option<String>,
    pub is_favorite: bool,
}

impl JobImagePreview {
    pub fn image_url(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    /// The favorite star does not depend on the image.
    pub fn show_badge(&self) -> bool {
        self.is_favorite
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn or_placeholder(value: &Option<String>, placeholder: &str) -> String {
    value.clone().unwrap_or_else(|| placeholder.to_string())
}
