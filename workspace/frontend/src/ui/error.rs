use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub title: String,
    #[prop_or_default]
    pub message: Option<String>,
}

/// Full-width placeholder shown instead of content that could not be loaded.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {} {:?}", props.title, props.message);

    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-4">
            <div class="alert alert-error max-w-lg">
                <i class="fas fa-exclamation-circle text-2xl"></i>
                <div class="flex flex-col gap-2">
                    <span class="font-semibold">{&props.title}</span>
                    if let Some(message) = &props.message {
                        <span class="text-sm">{message}</span>
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InlineErrorProps {
    pub message: String,
}

/// Non-blocking error line rendered above content that did load.
#[function_component(InlineError)]
pub fn inline_error(props: &InlineErrorProps) -> Html {
    html! {
        <div class="alert alert-warning mb-4">
            <i class="fas fa-exclamation-triangle"></i>
            <span>{&props.message}</span>
        </div>
    }
}
