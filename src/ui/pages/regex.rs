// src/ui/pages/regex.rs: regex tester with live highlighting

use ctf_toolbox::regex_tester::{find_matches, highlight, render_matches, RegexFlags};
use yew::prelude::*;

use super::use_defaults;
use crate::ui::browser::{download_with_status, spawn_copy};
use crate::ui::{line_input, status_view, textarea_input, OutputActions, Status};

fn flag_label(flag: char) -> &'static str {
    match flag {
        'g' => "Global (g)",
        'i' => "Case insensitive (i)",
        'm' => "Multiline (m)",
        's' => "Dot matches newline (s)",
        _ => "",
    }
}

#[function_component(RegexPage)]
pub fn regex_page() -> Html {
    let defaults = use_defaults();
    let pattern = use_state(String::new);
    let input = use_state(String::new);
    let flags = use_state(|| RegexFlags::parse(&defaults.regex_flags));
    let status = use_state(Status::default);

    let (matches, error) = match find_matches(&pattern, &input, *flags) {
        Ok(m) => (m, None),
        Err(e) => (vec![], Some(Status::error(e))),
    };
    let segments = highlight(&input, &matches);
    let rendered = render_matches(&matches);

    let on_copy = {
        let rendered = rendered.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| spawn_copy(rendered.clone(), status.clone()))
    };

    let on_download = {
        let rendered = rendered.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            download_with_status("regex-matches.txt", &rendered, "text/plain", &status)
        })
    };

    let on_clear = {
        let pattern = pattern.clone();
        let input = input.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            pattern.set(String::new());
            input.set(String::new());
            status.set(Status::Idle);
        })
    };

    html! {
      <div class="panel">
        <div class="block">
          <div class="block-head">
            <div class="block-title">{ "Regular Expression" }</div>
          </div>
          <div class="textline">
            <span class="tag">{ "/" }</span>
            <input
              type="text"
              value={(*pattern).clone()}
              oninput={line_input(&pattern)}
              placeholder={r"e.g. flag\{(?P<body>[^}]+)\}"}
            />
            <span class="tag">{ format!("/{}", flags.as_flag_string()) }</span>
          </div>
          <div class="btnrow">
            { for RegexFlags::LETTERS.into_iter().map(|f| {
                let flags = flags.clone();
                let checked = flags.has(f);
                html! {
                  <label class="check">
                    <input
                      type="checkbox"
                      checked={checked}
                      onchange={Callback::from(move |_: Event| flags.set(flags.toggled(f)))}
                    />
                    { format!(" {}", flag_label(f)) }
                  </label>
                }
            })}
          </div>
        </div>

        <div class="block">
          <div class="block-head">
            <div class="block-title">{ "Test String" }</div>
          </div>
          <textarea value={(*input).clone()} oninput={textarea_input(&input)} placeholder="Enter text to test against..." />
        </div>

        if let Some(e) = &error {
          { status_view(e) }
        }

        <div class="block">
          <div class="block-head">
            <div class="block-title">{ format!("Highlighted ({} matches)", matches.len()) }</div>
            <OutputActions on_copy={Some(on_copy)} on_download={Some(on_download)} on_clear={Some(on_clear)} />
          </div>
          <pre class="highlight">
            { for segments.iter().map(|seg| if seg.matched {
                html! { <mark>{ seg.text.clone() }</mark> }
            } else {
                html! { <span>{ seg.text.clone() }</span> }
            })}
          </pre>
        </div>

        if !matches.is_empty() {
          <div class="block">
            <div class="block-head">
              <div class="block-title">{ "Matches" }</div>
            </div>
            <ol class="matches">
              { for matches.iter().map(|m| html! {
                  <li>
                    <code>{ m.text.clone() }</code>
                    <span class="smallnote">{ format!(" at {}..{}", m.start, m.end) }</span>
                    { for m.groups.iter().map(|(name, value)| html! {
                        <div class="kv"><span class="tag">{ name.clone() }</span>{ value.clone() }</div>
                    })}
                  </li>
              })}
            </ol>
          </div>
        }

        { status_view(&status) }
      </div>
    }
}
