// src/ui/mod.rs: Yew front-end

pub mod app;
pub mod browser;
pub mod pages;
pub mod shell;

use yew::prelude::*;

/// Page status line. Replaces toast popups: one message per page, last write wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Status {
    #[default]
    Idle,
    Ok(String),
    Error(String),
}

impl Status {
    pub fn ok(msg: impl Into<String>) -> Self {
        Status::Ok(msg.into())
    }

    pub fn error(msg: impl ToString) -> Self {
        Status::Error(msg.to_string())
    }
}

pub fn status_view(status: &Status) -> Html {
    match status {
        Status::Idle => html! { <div class="smallnote">{ " " }</div> },
        Status::Ok(s) => html! { <div class="ok">{ s }</div> },
        Status::Error(s) => html! { <div class="alert">{ s }</div> },
    }
}

pub fn textarea_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let v = e.target_unchecked_into::<web_sys::HtmlTextAreaElement>().value();
        state.set(v);
    })
}

pub fn line_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let v = e.target_unchecked_into::<web_sys::HtmlInputElement>().value();
        state.set(v);
    })
}

pub fn checkbox_toggle(state: &UseStateHandle<bool>) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let checked = e.target_unchecked_into::<web_sys::HtmlInputElement>().checked();
        state.set(checked);
    })
}

/// `onchange` for a `<select>`: hands the selected value to `f`.
pub fn select_change(f: impl Fn(String) + 'static) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() else { return; };
        f(sel.value());
    })
}

/// Copy / Clear / Download button row shared by the output blocks.
#[derive(Properties, PartialEq)]
pub struct OutputActionsProps {
    #[prop_or_default]
    pub on_copy: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub on_clear: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub on_swap: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub on_download: Option<Callback<MouseEvent>>,
}

#[function_component(OutputActions)]
pub fn output_actions(props: &OutputActionsProps) -> Html {
    let button = |cb: &Option<Callback<MouseEvent>>, label: &'static str| -> Html {
        match cb {
            Some(cb) => html! { <button class="btn" onclick={cb.clone()}>{ label }</button> },
            None => html! {},
        }
    };
    html! {
      <div class="btnrow">
        { button(&props.on_swap, "Swap") }
        { button(&props.on_copy, "Copy") }
        { button(&props.on_download, "Download") }
        { button(&props.on_clear, "Clear") }
      </div>
    }
}
