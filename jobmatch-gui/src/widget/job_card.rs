use super::{Card, CardContent, CardFooter};
use jobmatch_data::{JobCardContent, JobSummary, TextSummary};
use leptos::*;

/// Summary card for a job posting. A posting image replaces the text block
/// entirely.
#[component]
pub fn job_card(
    job: JobSummary,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let (class, body) = match job.content() {
        JobCardContent::Image { url, alt } => (
            "job-card job-card--image",
            view! { <JobImage url alt/> }.into_view(),
        ),
        JobCardContent::Text(summary) => (
            "job-card job-card--text",
            view! { <JobText summary/> }.into_view(),
        ),
    };
    view! {
        <Card class on_click>
            {body}
        </Card>
    }
}

#[component]
fn job_image(url: String, alt: String) -> impl IntoView {
    let style = "
        display: block;
        width: 100%;
        height: 100%;
        object-fit: cover;
    ";

    view! {
        <img class="job-card__image" src=url alt=alt style=style/>
    }
}

#[component]
fn job_text(summary: TextSummary) -> impl IntoView {
    let TextSummary {
        title,
        company,
        location,
        salary,
    } = summary;
    view! {
        <CardContent>
            <h3 class="job-card__title" style="font-weight: 700; margin: 0 0 8px;">{title}</h3>
            <p class="job-card__company">{company}</p>
            <p class="job-card__location">{location}</p>
        </CardContent>
        <CardFooter>
            <span class="job-card__salary">{salary}</span>
        </CardFooter>
    }
}
