// src/ui/pages/diff.rs: side-by-side text comparison

use ctf_toolbox::diff::{coalesce, diff_lines, render_plain, summarize, DiffLine, DiffStatus, LineContent};
use yew::prelude::*;

use crate::ui::browser::spawn_copy;
use crate::ui::{status_view, textarea_input, Status};

fn line_view(line: &DiffLine) -> Html {
    let (cls, marker) = match line.status {
        DiffStatus::Same => ("ctx", " "),
        DiffStatus::Removed => ("del", "-"),
        DiffStatus::Added => ("add", "+"),
    };
    let body = match &line.content {
        LineContent::Literal(s) => html! { { s.clone() } },
        LineContent::Spans(spans) => html! {
            { for coalesce(spans).into_iter().map(|span| if span.changed {
                html! { <mark class={cls}>{ span.text }</mark> }
            } else {
                html! { { span.text } }
            })}
        },
    };
    html! {
      <div class={classes!("diff-line", cls)}>
        <span class="lineno">{ line.number }</span>
        <span class="marker">{ marker }</span>
        <span class="text">{ body }</span>
      </div>
    }
}

#[function_component(DiffPage)]
pub fn diff_page() -> Html {
    let text_a = use_state(String::new);
    let text_b = use_state(String::new);
    let result = use_state(Vec::<DiffLine>::new);
    let status = use_state(Status::default);

    let on_compare = {
        let text_a = text_a.clone();
        let text_b = text_b.clone();
        let result = result.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            if text_a.is_empty() || text_b.is_empty() {
                status.set(Status::error("Please provide both input texts"));
                return;
            }
            let lines = diff_lines(&text_a, &text_b);
            let s = summarize(&lines);
            status.set(Status::ok(format!(
                "{} unchanged, {} removed, {} added",
                s.same, s.removed, s.added
            )));
            result.set(lines);
        })
    };

    let on_swap = {
        let text_a = text_a.clone();
        let text_b = text_b.clone();
        Callback::from(move |_: MouseEvent| {
            let a = (*text_a).clone();
            text_a.set((*text_b).clone());
            text_b.set(a);
        })
    };

    let on_clear = {
        let text_a = text_a.clone();
        let text_b = text_b.clone();
        let result = result.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            text_a.set(String::new());
            text_b.set(String::new());
            result.set(vec![]);
            status.set(Status::Idle);
        })
    };

    let on_copy = {
        let result = result.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| spawn_copy(render_plain(&result), status.clone()))
    };

    let on_copy_json = {
        let result = result.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| match serde_json::to_string_pretty(&*result) {
            Ok(json) => spawn_copy(json, status.clone()),
            Err(e) => status.set(Status::error(format!("Could not serialize JSON: {e}"))),
        })
    };

    html! {
      <div class="panel">
        <div class="panel two-col">
          <div class="block">
            <div class="block-head"><div class="block-title">{ "Original Text" }</div></div>
            <textarea value={(*text_a).clone()} oninput={textarea_input(&text_a)} placeholder="Enter first text here..." />
          </div>
          <div class="block">
            <div class="block-head"><div class="block-title">{ "Modified Text" }</div></div>
            <textarea value={(*text_b).clone()} oninput={textarea_input(&text_b)} placeholder="Enter second text here..." />
          </div>
        </div>

        <div class="btnrow">
          <button class="btn primary" onclick={on_compare}>{ "Compare Texts" }</button>
          <button class="btn" onclick={on_swap}>{ "Swap Texts" }</button>
          <button class="btn" onclick={on_clear}>{ "Clear All" }</button>
        </div>

        { status_view(&status) }

        if !result.is_empty() {
          <div class="block">
            <div class="block-head">
              <div class="block-title">{ "Differences" }</div>
              <div class="btnrow">
                <button class="btn" onclick={on_copy}>{ "Copy" }</button>
                <button class="btn" onclick={on_copy_json}>{ "Copy JSON" }</button>
              </div>
            </div>
            <pre class="diff">
              { for result.iter().map(line_view) }
            </pre>
          </div>
        }
      </div>
    }
}
