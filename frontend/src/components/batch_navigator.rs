use common::model::BatchList;
use common::render::CertificateView;
use common::state::Action;
use yew::prelude::*;

use super::certificate_preview::CertificatePreview;

#[derive(Properties, PartialEq)]
pub struct BatchNavigatorProps {
    pub batch: BatchList,
    /// The view for `batch.current()`, already merged with the base record.
    pub view: CertificateView,
    pub download_enabled: bool,
    pub on_action: Callback<Action>,
    pub on_download: Callback<()>,
    pub on_download_all: Callback<()>,
}

/// Walks through the batch one certificate at a time.
///
/// Holds no state of its own: the index lives in the root `AppState` and moves
/// through `Action::NextCertificate` / `Action::PreviousCertificate`.
pub struct BatchNavigator;

impl Component for BatchNavigator {
    type Message = ();
    type Properties = BatchNavigatorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BatchNavigator
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let batch = &props.batch;

        html! {
            <div class="batch">
                <div class="batch-header">
                    <h3>{ format!("Batch Certificates ({} total)", batch.len()) }</h3>
                    <div class="batch-actions">
                        <button
                            class="button outline"
                            disabled={!props.download_enabled}
                            onclick={props.on_download_all.reform(|_: MouseEvent| ())}
                        >
                            { "Download All (PDF)" }
                        </button>
                        <button
                            class="button outline"
                            onclick={props.on_action.reform(|_: MouseEvent| Action::ClearBatch)}
                        >
                            { "Clear Batch" }
                        </button>
                    </div>
                </div>

                <div class="batch-nav">
                    <div class="batch-nav-row">
                        <span class="hint">{ batch.position_label() }</span>
                        <div>
                            <button
                                class="button outline small"
                                disabled={!batch.can_retreat()}
                                onclick={props.on_action.reform(|_: MouseEvent| Action::PreviousCertificate)}
                            >
                                { "Previous" }
                            </button>
                            <button
                                class="button outline small"
                                disabled={!batch.can_advance()}
                                onclick={props.on_action.reform(|_: MouseEvent| Action::NextCertificate)}
                            >
                                { "Next" }
                            </button>
                        </div>
                    </div>
                    <div class="batch-current">{ batch.current().to_string() }</div>
                </div>

                <CertificatePreview
                    view={props.view.clone()}
                    download_enabled={props.download_enabled}
                    on_download={props.on_download.clone()}
                />
            </div>
        }
    }
}
