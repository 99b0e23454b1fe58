// src/ui/pages/xor.rs: repeating-key XOR

use ctf_toolbox::xor::{self, KeyFormat, XorOutput};
use yew::prelude::*;

use crate::ui::browser::spawn_copy;
use crate::ui::{line_input, select_change, status_view, textarea_input, OutputActions, Status};

#[function_component(XorPage)]
pub fn xor_page() -> Html {
    let input = use_state(String::new);
    let key = use_state(String::new);
    let key_format = use_state(|| KeyFormat::Text);
    let output_format = use_state(|| XorOutput::Hex);
    let status = use_state(Status::default);

    let result = if input.is_empty() || key.is_empty() {
        Ok(String::new())
    } else {
        xor::apply(&input, &key, *key_format, *output_format)
    };
    let (output, error) = match result {
        Ok(s) => (s, None),
        Err(e) => (String::new(), Some(Status::error(e))),
    };

    let on_key_format = {
        let key_format = key_format.clone();
        select_change(move |v| {
            key_format.set(if v == "hex" { KeyFormat::Hex } else { KeyFormat::Text })
        })
    };
    let on_output_format = {
        let output_format = output_format.clone();
        select_change(move |v| {
            output_format.set(if v == "text" { XorOutput::Text } else { XorOutput::Hex })
        })
    };

    let on_copy = {
        let output = output.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| spawn_copy(output.clone(), status.clone()))
    };

    let on_clear = {
        let input = input.clone();
        let key = key.clone();
        Callback::from(move |_: MouseEvent| {
            input.set(String::new());
            key.set(String::new());
        })
    };

    html! {
      <div class="panel">
        <div class="block">
          <div class="block-head">
            <div class="block-title">{ "Key" }</div>
            <select onchange={on_key_format}>
              <option value="text" selected={*key_format == KeyFormat::Text}>{ "Text" }</option>
              <option value="hex" selected={*key_format == KeyFormat::Hex}>{ "Hex" }</option>
            </select>
          </div>
          <div class="textline">
            <input
              type="text"
              value={(*key).clone()}
              oninput={line_input(&key)}
              placeholder={if *key_format == KeyFormat::Hex { "e.g. 0x41 42 43" } else { "Enter key..." }}
            />
          </div>
        </div>

        <div class="panel two-col">
          <div class="block">
            <div class="block-head">
              <div class="block-title">{ "Input" }</div>
            </div>
            <textarea value={(*input).clone()} oninput={textarea_input(&input)} placeholder="Enter text to XOR..." />
          </div>

          <div class="block">
            <div class="block-head">
              <div class="block-title">{ "Output" }</div>
              <select onchange={on_output_format}>
                <option value="hex" selected={*output_format == XorOutput::Hex}>{ "Hex" }</option>
                <option value="text" selected={*output_format == XorOutput::Text}>{ "Text" }</option>
              </select>
              <OutputActions on_copy={Some(on_copy)} on_clear={Some(on_clear)} />
            </div>
            <textarea readonly=true value={output} placeholder="XOR result will appear here" />
          </div>
        </div>

        { status_view(error.as_ref().unwrap_or(&*status)) }
      </div>
    }
}
