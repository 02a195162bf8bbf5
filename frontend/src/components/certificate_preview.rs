//! Draws a `CertificateView` and the download button under it.

use common::render::{
    CertificateView, RenderedText, CERTIFY_LINE, COMPLETED_LINE, HEADING, SEAL_LABEL,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CertificatePreviewProps {
    pub view: CertificateView,
    pub download_enabled: bool,
    pub on_download: Callback<()>,
}

pub struct CertificatePreview;

impl Component for CertificatePreview {
    type Message = ();
    type Properties = CertificatePreviewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CertificatePreview
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="preview">
                { certificate(&props.view) }
                <button
                    class="button primary wide"
                    disabled={!props.download_enabled}
                    onclick={props.on_download.reform(|_: MouseEvent| ())}
                >
                    { "Download Certificate" }
                </button>
                {
                    if props.download_enabled {
                        html! {}
                    } else {
                        html! {
                            <p class="hint centered">
                                { "Fill in the recipient name and course to enable download" }
                            </p>
                        }
                    }
                }
            </div>
        }
    }
}

/// The certificate itself, without any controls.
pub fn certificate(view: &CertificateView) -> Html {
    let style = &view.style;
    let frame = format!(
        "background: {}; border-color: {};",
        style.backdrop.css(),
        style.border
    );
    let panel = style
        .overlay
        .as_ref()
        .map(|overlay| format!("background: {overlay}; border-radius: 12px; padding: 24px;"))
        .unwrap_or_default();

    html! {
        <div class="certificate" style={frame}>
            <div class="corner top-left" />
            <div class="corner top-right" />
            <div class="corner bottom-left" />
            <div class="corner bottom-right" />

            <div class="certificate-content" style={panel}>
                <h1 class="certificate-title" style={format!("color: {};", style.title)}>
                    { HEADING }
                </h1>
                <p class="certificate-line">{ CERTIFY_LINE }</p>
                <div
                    class={text_class("certificate-name", &view.recipient)}
                    style={format!("color: {}; border-bottom-color: {};", style.title, style.name_underline)}
                >
                    { view.recipient.text.clone() }
                </div>
                <p class="certificate-line">{ COMPLETED_LINE }</p>
                <div
                    class={text_class("certificate-course", &view.course)}
                    style={format!("color: {};", style.course)}
                >
                    { view.course.text.clone() }
                </div>
                <p class={text_class("certificate-date", &view.completion_date)}>
                    { view.completion_line() }
                </p>
                <div class="certificate-footer">
                    <div class="signature">
                        <div class={text_class("issuer-name", &view.issuer_name)}>
                            { view.issuer_name.text.clone() }
                        </div>
                        <div class={text_class("issuer-title", &view.issuer_title)}>
                            { view.issuer_title.text.clone() }
                        </div>
                    </div>
                    <div class="seal" style={format!("background: {};", style.seal)}>
                        <div class="seal-inner">{ SEAL_LABEL }</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn text_class(base: &'static str, text: &RenderedText) -> Classes {
    classes!(base, text.placeholder.then_some("placeholder"))
}
