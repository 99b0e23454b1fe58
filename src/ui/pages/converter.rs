// src/ui/pages/converter.rs: text / hex / binary / decimal / base64

use ctf_toolbox::convert::{convert, FormatTag};
use yew::prelude::*;

use super::use_defaults;
use crate::ui::browser::{download_with_status, now_millis, spawn_copy};
use crate::ui::{select_change, status_view, textarea_input, OutputActions, Status};

fn placeholder(format: FormatTag) -> &'static str {
    match format {
        FormatTag::Text => "Enter text to convert...",
        FormatTag::Hex => "Enter hex (e.g. 48 65 6c 6c 6f)",
        FormatTag::Binary => "Enter binary (e.g. 01001000 01101001)",
        FormatTag::Decimal => "Enter decimal bytes (e.g. 72, 105)",
        FormatTag::Base64 => "Enter Base64 (e.g. SGVsbG8=)",
    }
}

fn format_select(current: FormatTag, on_change: Callback<Event>) -> Html {
    html! {
      <select onchange={on_change}>
        { for FormatTag::ALL.into_iter().map(|f| html! {
            <option value={f.as_str()} selected={f == current}>{ f.label() }</option>
        })}
      </select>
    }
}

#[function_component(ConverterPage)]
pub fn converter_page() -> Html {
    let defaults = use_defaults();
    let input = use_state(String::new);
    let from = use_state(|| defaults.converter_from);
    let to = use_state(|| defaults.converter_to);
    let output = use_state(String::new);
    let status = use_state(Status::default);

    {
        let output = output.clone();
        let status = status.clone();
        use_effect_with(((*input).clone(), *from, *to), move |(input, from, to)| {
            match convert(input, *from, *to) {
                Ok(s) => {
                    output.set(s);
                    status.set(Status::Idle);
                }
                Err(e) => {
                    output.set(String::new());
                    status.set(Status::error(e));
                }
            }
        });
    }

    let on_from = {
        let from = from.clone();
        select_change(move |v| {
            if let Ok(f) = v.parse() {
                from.set(f);
            }
        })
    };
    let on_to = {
        let to = to.clone();
        select_change(move |v| {
            if let Ok(f) = v.parse() {
                to.set(f);
            }
        })
    };

    let on_swap = {
        let input = input.clone();
        let from = from.clone();
        let to = to.clone();
        let output = output.clone();
        Callback::from(move |_: MouseEvent| {
            let (f, t) = (*from, *to);
            from.set(t);
            to.set(f);
            input.set((*output).clone());
        })
    };

    let on_copy = {
        let output = output.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| spawn_copy((*output).clone(), status.clone()))
    };

    let on_download = {
        let output = output.clone();
        let to = to.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            let name = format!("converted-{}-{}.txt", *to, now_millis());
            download_with_status(&name, &output, "text/plain", &status);
        })
    };

    let on_clear = {
        let input = input.clone();
        let output = output.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            input.set(String::new());
            output.set(String::new());
            status.set(Status::Idle);
        })
    };

    html! {
      <div class="panel two-col">
        <div class="block">
          <div class="block-head">
            <div class="block-title">{ "Input" }</div>
            { format_select(*from, on_from) }
          </div>
          <textarea
            value={(*input).clone()}
            oninput={textarea_input(&input)}
            placeholder={placeholder(*from)}
          />
        </div>

        <div class="block">
          <div class="block-head">
            <div class="block-title">{ "Output" }</div>
            { format_select(*to, on_to) }
            <OutputActions
              on_swap={Some(on_swap)}
              on_copy={Some(on_copy)}
              on_download={Some(on_download)}
              on_clear={Some(on_clear)}
            />
          </div>
          <textarea readonly=true value={(*output).clone()} placeholder="Converted output will appear here" />
        </div>

        { status_view(&status) }
      </div>
    }
}
