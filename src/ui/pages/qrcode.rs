// src/ui/pages/qrcode.rs: QR code generator

use ctf_toolbox::qr::{self, EcLevel, QrOptions};
use yew::prelude::*;

use super::use_defaults;
use crate::ui::browser::download_with_status;
use crate::ui::{line_input, select_change, status_view, textarea_input, Status};

#[function_component(QrCodePage)]
pub fn qrcode_page() -> Html {
    let defaults = use_defaults();
    let input = use_state(String::new);
    let size = use_state(|| defaults.qr.size.to_string());
    let dark = use_state(|| defaults.qr.dark.clone());
    let light = use_state(|| defaults.qr.light.clone());
    let ec_level = use_state(|| defaults.qr.ec_level);
    let status = use_state(Status::default);

    let options = QrOptions {
        size: qr::clamp_size(size.parse().unwrap_or(defaults.qr.size)),
        dark: (*dark).clone(),
        light: (*light).clone(),
        ec_level: *ec_level,
    };
    let svg = use_memo(((*input).clone(), options.clone()), |(input, options)| {
        if input.is_empty() {
            Ok(String::new())
        } else {
            qr::generate_svg(input, options)
        }
    });

    let on_ec = {
        let ec_level = ec_level.clone();
        select_change(move |v| ec_level.set(EcLevel::parse(&v)))
    };

    let on_download = {
        let svg = svg.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            if let Ok(s) = &*svg {
                download_with_status("qrcode.svg", s, "image/svg+xml", &status);
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

    let preview = match &*svg {
        Ok(s) if !s.is_empty() => {
            let src = format!("data:image/svg+xml;base64,{}", ctf_toolbox::base64::encode(s));
            html! {
              <img
                class="qr"
                src={src}
                width={options.size.to_string()}
                height={options.size.to_string()}
                alt="QR code"
              />
            }
        }
        Ok(_) => html! { <div class="smallnote">{ "Enter text to generate a QR code" }</div> },
        Err(e) => status_view(&Status::error(e)),
    };

    html! {
      <div class="panel two-col">
        <div class="block">
          <div class="block-head">
            <div class="block-title">{ "Content" }</div>
          </div>
          <textarea value={(*input).clone()} oninput={textarea_input(&input)} placeholder="Enter text or URL to encode..." />

          <div class="kv">
            <label>{ format!("Size: {}px", options.size) }</label>
            <input
              type="range"
              min={qr::MIN_SIZE.to_string()}
              max={qr::MAX_SIZE.to_string()}
              step="10"
              value={(*size).clone()}
              oninput={line_input(&size)}
            />
          </div>
          <div class="kv">
            <label>{ "Foreground" }</label>
            <input type="color" value={(*dark).clone()} oninput={line_input(&dark)} />
            <label>{ "Background" }</label>
            <input type="color" value={(*light).clone()} oninput={line_input(&light)} />
          </div>
          <div class="kv">
            <label>{ "Error correction" }</label>
            <select onchange={on_ec}>
              { for EcLevel::ALL.into_iter().map(|l| html! {
                  <option value={l.as_str()} selected={l == *ec_level}>{ l.label() }</option>
              })}
            </select>
          </div>
        </div>

        <div class="block">
          <div class="block-head">
            <div class="block-title">{ "QR Code" }</div>
            <div class="btnrow">
              <button class="btn" onclick={on_download}>{ "Download SVG" }</button>
              <button class="btn" onclick={on_clear}>{ "Clear" }</button>
            </div>
          </div>
          { preview }
        </div>

        { status_view(&status) }
      </div>
    }
}
