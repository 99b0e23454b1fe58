// src/ui/pages/reverse.rs: reverse chars / words / lines

use ctf_toolbox::reverse::{self, ReverseMode};
use yew::prelude::*;

use crate::ui::browser::spawn_copy;
use crate::ui::{checkbox_toggle, status_view, textarea_input, OutputActions, Status};

#[function_component(ReversePage)]
pub fn reverse_page() -> Html {
    let input = use_state(String::new);
    let mode = use_state(|| ReverseMode::Chars);
    let toggle_case = use_state(|| false);
    let status = use_state(Status::default);

    let output = reverse::apply(&input, *mode, *toggle_case);

    let on_copy = {
        let output = output.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| spawn_copy(output.clone(), status.clone()))
    };

    let on_clear = {
        let input = input.clone();
        Callback::from(move |_: MouseEvent| input.set(String::new()))
    };

    html! {
      <div class="panel">
        <div class="btnrow">
          { for ReverseMode::ALL.into_iter().map(|m| {
              let cls = if *mode == m { "tab active" } else { "tab" };
              let mode = mode.clone();
              html! {
                <button class={cls} onclick={Callback::from(move |_: MouseEvent| mode.set(m))}>
                  { m.label() }
                </button>
              }
          })}
          <label class="check">
            <input type="checkbox" checked={*toggle_case} onchange={checkbox_toggle(&toggle_case)} />
            { " Toggle case" }
          </label>
        </div>

        <div class="panel two-col">
          <div class="block">
            <div class="block-head">
              <div class="block-title">{ "Input Text" }</div>
            </div>
            <textarea value={(*input).clone()} oninput={textarea_input(&input)} placeholder="Enter text to reverse..." />
          </div>

          <div class="block">
            <div class="block-head">
              <div class="block-title">{ "Reversed Result" }</div>
              <OutputActions on_copy={Some(on_copy)} on_clear={Some(on_clear)} />
            </div>
            <textarea readonly=true value={output} placeholder="Reversed text will appear here" />
          </div>
        </div>

        { status_view(&status) }
      </div>
    }
}
