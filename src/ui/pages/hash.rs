// src/ui/pages/hash.rs: MD5 / SHA digests

use ctf_toolbox::hash::{HashAlgorithm, HashDigests};
use yew::prelude::*;

use crate::ui::browser::{download_with_status, spawn_copy};
use crate::ui::{status_view, textarea_input, OutputActions, Status};

#[function_component(HashPage)]
pub fn hash_page() -> Html {
    let input = use_state(String::new);
    let status = use_state(Status::default);

    let digests = use_memo((*input).clone(), |input| {
        if input.is_empty() {
            HashDigests::default()
        } else {
            HashDigests::compute(input)
        }
    });

    let on_copy_all = {
        let digests = digests.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            if !digests.is_empty() {
                spawn_copy(digests.render(), status.clone());
            }
        })
    };

    let on_download = {
        let digests = digests.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            if !digests.is_empty() {
                download_with_status("hashes.txt", &digests.render(), "text/plain", &status);
            }
        })
    };

    let on_clear = {
        let input = input.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            input.set(String::new());
            status.set(Status::Idle);
        })
    };

    let digest_row = |algorithm: HashAlgorithm| -> Html {
        let value = digests.get(algorithm).to_string();
        let on_copy = {
            let value = value.clone();
            let status = status.clone();
            Callback::from(move |_: MouseEvent| spawn_copy(value.clone(), status.clone()))
        };
        html! {
          <div class="block">
            <div class="block-head">
              <div class="block-title">{ algorithm.label() }</div>
              <div class="btnrow">
                <button class="btn" onclick={on_copy}>{ "Copy" }</button>
              </div>
            </div>
            <pre class="digest">{ value }</pre>
          </div>
        }
    };

    html! {
      <div class="panel">
        <div class="block">
          <div class="block-head">
            <div class="block-title">{ "Input Text" }</div>
            <OutputActions on_copy={Some(on_copy_all)} on_download={Some(on_download)} on_clear={Some(on_clear)} />
          </div>
          <textarea value={(*input).clone()} oninput={textarea_input(&input)} placeholder="Enter text to hash..." />
        </div>

        if !digests.is_empty() {
          { for HashAlgorithm::ALL.into_iter().map(digest_row) }
        }

        { status_view(&status) }
      </div>
    }
}
