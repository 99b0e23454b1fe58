// src/ui/pages/codec.rs: Base64, URL and HTML encode/decode

use ctf_toolbox::url::UrlScope;
use ctf_toolbox::{base64, html, url};
use yew::prelude::*;

use crate::ui::browser::spawn_copy;
use crate::ui::{checkbox_toggle, status_view, textarea_input, OutputActions, Status};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Codec {
    Base64,
    Url,
    Html,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Encode,
    Decode,
}

impl Codec {
    fn name(self) -> &'static str {
        match self {
            Codec::Base64 => "Base64",
            Codec::Url => "URL",
            Codec::Html => "HTML",
        }
    }

    fn run(self, direction: Direction, input: &str, components: bool) -> ctf_toolbox::Result<String> {
        let scope = if components { UrlScope::Component } else { UrlScope::Uri };
        Ok(match (self, direction) {
            (Codec::Base64, Direction::Encode) => base64::encode(input),
            (Codec::Base64, Direction::Decode) => base64::decode(input)?,
            (Codec::Url, Direction::Encode) => url::encode_url(input, scope),
            (Codec::Url, Direction::Decode) => url::decode_url(input, scope)?,
            (Codec::Html, Direction::Encode) => html::encode(input),
            (Codec::Html, Direction::Decode) => html::decode(input),
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct CodecProps {
    pub codec: Codec,
}

#[function_component(CodecPage)]
pub fn codec_page(props: &CodecProps) -> Html {
    let codec = props.codec;
    let input = use_state(String::new);
    let output = use_state(String::new);
    let direction = use_state(|| Direction::Encode);
    let components = use_state(|| false);
    let status = use_state(Status::default);

    {
        let output = output.clone();
        let status = status.clone();
        use_effect_with(
            ((*input).clone(), *direction, *components),
            move |(input, direction, components)| {
                if input.is_empty() {
                    output.set(String::new());
                    status.set(Status::Idle);
                    return;
                }
                match codec.run(*direction, input, *components) {
                    Ok(s) => {
                        output.set(s);
                        status.set(Status::Idle);
                    }
                    Err(e) => {
                        output.set(String::new());
                        status.set(Status::error(e));
                    }
                }
            },
        );
    }

    let set_direction = |d: Direction| {
        let direction = direction.clone();
        Callback::from(move |_: MouseEvent| direction.set(d))
    };

    let on_swap = {
        let input = input.clone();
        let output = output.clone();
        let direction = direction.clone();
        Callback::from(move |_: MouseEvent| {
            direction.set(match *direction {
                Direction::Encode => Direction::Decode,
                Direction::Decode => Direction::Encode,
            });
            input.set((*output).clone());
        })
    };

    let on_copy = {
        let output = output.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| spawn_copy((*output).clone(), status.clone()))
    };

    let on_clear = {
        let input = input.clone();
        let output = output.clone();
        Callback::from(move |_: MouseEvent| {
            input.set(String::new());
            output.set(String::new());
        })
    };

    let encoding = *direction == Direction::Encode;
    let (in_title, out_title) = if encoding {
        ("Text to Encode", format!("{} Encoded Result", codec.name()))
    } else {
        ("Text to Decode", "Decoded Result".to_string())
    };

    html! {
      <div class="panel">
        <div class="btnrow">
          <button class={if encoding { "tab active" } else { "tab" }} onclick={set_direction(Direction::Encode)}>{ "Encode" }</button>
          <button class={if encoding { "tab" } else { "tab active" }} onclick={set_direction(Direction::Decode)}>{ "Decode" }</button>
          if codec == Codec::Url {
            <label class="check">
              <input type="checkbox" checked={*components} onchange={checkbox_toggle(&components)} />
              { " Encode/decode as URI component" }
            </label>
          }
        </div>

        <div class="panel two-col">
          <div class="block">
            <div class="block-head">
              <div class="block-title">{ in_title }</div>
            </div>
            <textarea value={(*input).clone()} oninput={textarea_input(&input)} placeholder="Enter text here..." />
          </div>

          <div class="block">
            <div class="block-head">
              <div class="block-title">{ out_title }</div>
              <OutputActions on_swap={Some(on_swap)} on_copy={Some(on_copy)} on_clear={Some(on_clear)} />
            </div>
            <textarea readonly=true value={(*output).clone()} placeholder="Result will appear here" />
          </div>
        </div>

        { status_view(&status) }
      </div>
    }
}
