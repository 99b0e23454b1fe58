// src/ui/pages/frequency.rs: character frequency analysis

use ctf_toolbox::frequency::{analyze, display_char, FrequencyOptions};
use yew::prelude::*;

use super::use_defaults;
use crate::ui::browser::{download_with_status, spawn_copy};
use crate::ui::{status_view, textarea_input, OutputActions, Status};

#[function_component(FrequencyPage)]
pub fn frequency_page() -> Html {
    let defaults = use_defaults();
    let input = use_state(String::new);
    let options = use_state(|| defaults.frequency);
    let status = use_state(Status::default);

    let report = use_memo(((*input).clone(), *options), |(input, options)| analyze(input, options));

    let option_box = |label: &'static str, get: fn(&FrequencyOptions) -> bool, set: fn(&mut FrequencyOptions, bool)| -> Html {
        let options = options.clone();
        let checked = get(&options);
        html! {
          <label class="check">
            <input
              type="checkbox"
              checked={checked}
              onchange={Callback::from(move |_: Event| {
                  let mut next = *options;
                  set(&mut next, !checked);
                  options.set(next);
              })}
            />
            { format!(" {label}") }
          </label>
        }
    };

    let on_copy = {
        let report = report.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| spawn_copy(report.render(), status.clone()))
    };

    let on_download = {
        let report = report.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            download_with_status("frequency-analysis.txt", &report.render(), "text/plain", &status)
        })
    };

    let on_clear = {
        let input = input.clone();
        Callback::from(move |_: MouseEvent| input.set(String::new()))
    };

    let max = report.max_count().max(1) as f64;

    html! {
      <div class="panel">
        <div class="block">
          <div class="block-head">
            <div class="block-title">{ "Input Text" }</div>
            <OutputActions on_copy={Some(on_copy)} on_download={Some(on_download)} on_clear={Some(on_clear)} />
          </div>
          <textarea value={(*input).clone()} oninput={textarea_input(&input)} placeholder="Enter text to analyze..." />
          <div class="btnrow">
            { option_box("Ignore case", |o| o.ignore_case, |o, v| o.ignore_case = v) }
            { option_box("Ignore spaces", |o| o.ignore_spaces, |o, v| o.ignore_spaces = v) }
            { option_box("Ignore punctuation", |o| o.ignore_punctuation, |o, v| o.ignore_punctuation = v) }
          </div>
        </div>

        if !report.is_empty() {
          <div class="block">
            <div class="block-head">
              <div class="block-title">{ format!("Character Frequency ({} characters)", report.total) }</div>
            </div>
            <table class="freq">
              <thead>
                <tr><th>{ "Char" }</th><th>{ "Count" }</th><th>{ "%" }</th><th /></tr>
              </thead>
              <tbody>
                { for report.entries.iter().map(|e| {
                    let width = format!("width:{:.1}%", e.count as f64 / max * 100.0);
                    html! {
                      <tr>
                        <td><code>{ display_char(e.ch) }</code></td>
                        <td>{ e.count }</td>
                        <td>{ format!("{:.2}%", e.percentage) }</td>
                        <td class="bar-cell"><div class="bar" style={width} /></td>
                      </tr>
                    }
                })}
              </tbody>
            </table>
          </div>
        }

        { status_view(&status) }
      </div>
    }
}
