use yew::prelude::*;

/// Transient user feedback rendered as a banner above the results.
/// Warnings and acknowledgments dismiss themselves; errors stay until the
/// next action replaces them.
#[derive(Clone, PartialEq)]
pub enum Notice {
    Error(String),
    Warning(String),
    Success(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Error(text) | Notice::Warning(text) | Notice::Success(text) => text,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Notice::Error(_) => "error-message",
            Notice::Warning(_) => "warning-message",
            Notice::Success(_) => "success-message",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Notice::Error(_) => "fa-solid fa-circle-exclamation",
            Notice::Warning(_) => "fa-solid fa-triangle-exclamation",
            Notice::Success(_) => "fa-solid fa-circle-check",
        }
    }

    pub fn auto_dismisses(&self) -> bool {
        !matches!(self, Notice::Error(_))
    }

    pub fn render(&self) -> Html {
        html! {
            <div class={self.css_class()}>
                <i class={self.icon()}></i>
                <p>{ self.text() }</p>
            </div>
        }
    }
}
