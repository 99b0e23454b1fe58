// src/ui/pages/rot13.rs: ROT13 / Caesar

use ctf_toolbox::caesar::{self, CaesarMode, ROT13};
use yew::prelude::*;

use super::use_defaults;
use crate::ui::browser::spawn_copy;
use crate::ui::{line_input, status_view, textarea_input, OutputActions, Status};

#[function_component(Rot13Page)]
pub fn rot13_page() -> Html {
    let defaults = use_defaults();
    let input = use_state(String::new);
    let rotation = use_state(|| defaults.caesar_rotation.to_string());
    let mode = use_state(|| CaesarMode::Encrypt);
    let status = use_state(Status::default);

    let shift = caesar::clamp_rotation(&rotation);
    let output = caesar::apply(&input, shift, *mode);

    let on_swap = {
        let input = input.clone();
        let mode = mode.clone();
        let output = output.clone();
        Callback::from(move |_: MouseEvent| {
            mode.set(mode.flipped());
            input.set(output.clone());
        })
    };

    let on_copy = {
        let output = output.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| spawn_copy(output.clone(), status.clone()))
    };

    let on_clear = {
        let input = input.clone();
        Callback::from(move |_: MouseEvent| input.set(String::new()))
    };

    let on_rot13 = {
        let rotation = rotation.clone();
        Callback::from(move |_: MouseEvent| rotation.set(ROT13.to_string()))
    };

    let encrypting = *mode == CaesarMode::Encrypt;

    html! {
      <div class="panel">
        <div class="btnrow">
          <label>{ "Rotation (0-25): " }</label>
          <input type="number" min="0" max="25" value={(*rotation).clone()} oninput={line_input(&rotation)} />
          <button class="btn" onclick={on_rot13}>{ "ROT13" }</button>
          <span class="tag">{ if encrypting { "Mode: Encrypt" } else { "Mode: Decrypt" } }</span>
        </div>

        <div class="panel two-col">
          <div class="block">
            <div class="block-head">
              <div class="block-title">{ if encrypting { "Text to Encrypt" } else { "Text to Decrypt" } }</div>
            </div>
            <textarea value={(*input).clone()} oninput={textarea_input(&input)} placeholder="Enter text here..." />
          </div>

          <div class="block">
            <div class="block-head">
              <div class="block-title">{ if encrypting { "Encrypted Result" } else { "Decrypted Result" } }</div>
              <OutputActions on_swap={Some(on_swap)} on_copy={Some(on_copy)} on_clear={Some(on_clear)} />
            </div>
            <textarea readonly=true value={output} placeholder="Result will appear here" />
          </div>
        </div>

        <div class="smallnote">{ format!("Shift in effect: {shift}") }</div>
        { status_view(&status) }
      </div>
    }
}
