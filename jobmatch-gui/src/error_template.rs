use http::status::StatusCode;
use leptos::*;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("페이지를 찾을 수 없습니다")]
    NotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

#[component]
pub fn error_template(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match (outside_errors, errors) {
        (Some(outside_errors), _) => outside_errors,
        (None, Some(errors)) => errors.get_untracked(),
        (None, None) => Errors::default(),
    };
    let errors: Vec<AppError> = errors
        .into_iter()
        .filter_map(|(_, error)| error.downcast_ref::<AppError>().cloned())
        .collect();
    log::warn!("Rendering errors: {errors:?}");

    #[cfg(feature = "ssr")]
    {
        if let (Some(response), Some(error)) =
            (use_context::<leptos_axum::ResponseOptions>(), errors.first())
        {
            response.set_status(error.status_code());
        }
    }

    match errors.is_empty() {
        true => view! { <p>"No errors"</p> }.into_view(),
        false => {
            let items = errors
                .into_iter()
                .map(|error| {
                    view! {
                        <h2>{error.status_code().to_string()}</h2>
                        <p>{error.to_string()}</p>
                    }
                })
                .collect_view();
            view! {
                <div class="error-page">
                    <h1>"Error"</h1>
                    {items}
                </div>
            }
            .into_view()
        }
    }
}
