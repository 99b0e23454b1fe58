// src/ui/pages/mod.rs: one component per tool

mod codec;
mod converter;
mod diff;
mod frequency;
mod hash;
mod qrcode;
mod regex;
mod reverse;
mod rot13;
mod xor;

use std::rc::Rc;

use ctf_toolbox::catalog::ToolId;
use ctf_toolbox::config::ToolDefaults;
use yew::prelude::*;

use codec::{Codec, CodecPage};

pub fn render(id: ToolId) -> Html {
    match id {
        ToolId::Base64 => html! { <CodecPage key="base64" codec={Codec::Base64} /> },
        ToolId::Rot13 => html! { <rot13::Rot13Page /> },
        ToolId::Xor => html! { <xor::XorPage /> },
        ToolId::Hash => html! { <hash::HashPage /> },
        ToolId::Reverse => html! { <reverse::ReversePage /> },
        ToolId::Regex => html! { <regex::RegexPage /> },
        ToolId::Frequency => html! { <frequency::FrequencyPage /> },
        ToolId::Diff => html! { <diff::DiffPage /> },
        ToolId::Url => html! { <CodecPage key="url" codec={Codec::Url} /> },
        ToolId::Html => html! { <CodecPage key="html" codec={Codec::Html} /> },
        ToolId::Converter => html! { <converter::ConverterPage /> },
        ToolId::QrCode => html! { <qrcode::QrCodePage /> },
    }
}

#[hook]
fn use_defaults() -> Rc<ToolDefaults> {
    use_context::<Rc<ToolDefaults>>().unwrap_or_default()
}
