//! Root component: owns the application state and routes every change through it.
//!
//! Children never hold their own copy of the record, design or batch. They get
//! read-only props and a `Callback<Action>`; the root applies the action to its
//! `AppState`, reports failures as toasts and re-renders.

use std::rc::Rc;

use common::error::{CertificateError, ExportFormat};
use common::model::design::is_image_mime;
use common::model::BackgroundImage;
use common::notification::Notification;
use common::render::export::{CertificateExporter, UnimplementedExporter};
use common::state::{Action, AppState, Mode};
use yew::{html, Callback, Component, Context, Html};

use crate::components::batch_navigator::BatchNavigator;
use crate::components::certificate_form::CertificateForm;
use crate::components::certificate_preview::CertificatePreview;
use crate::components::design_picker::DesignPicker;
use crate::components::spreadsheet_upload::SpreadsheetUpload;
use crate::helpers::{create_object_url, file_meta, offer_download, revoke_object_url, show_toast};

pub enum Msg {
    Dispatch(Action),
    BackgroundFile(web_sys::File),
    Download,
    DownloadBatch,
}

pub struct App {
    state: AppState,
    exporter: Rc<dyn CertificateExporter>,
}

impl App {
    fn apply(&mut self, action: Action) -> bool {
        match self.state.apply(action) {
            Ok(effect) => {
                if let Some(released) = effect.released {
                    revoke_object_url(&released.url);
                }
                effect.changed
            }
            Err(e) => {
                show_toast(&Notification::from(&e));
                false
            }
        }
    }

    fn attach_background(&mut self, file: web_sys::File) -> bool {
        let meta = file_meta(&file);
        if !is_image_mime(&meta.mime) {
            show_toast(&Notification::from(CertificateError::UnsupportedImage(meta.mime)));
            return false;
        }
        let Some(url) = create_object_url(&file) else {
            gloo_console::error!("could not create object URL for", meta.file_name);
            return false;
        };
        self.apply(Action::AttachBackground(BackgroundImage {
            url,
            file_name: meta.file_name,
            mime: meta.mime,
        }))
    }

    fn download(&self, batch: bool) {
        let (result, file_name, format) = if batch {
            (
                self.state.request_batch_download(self.exporter.as_ref()),
                "certificates.pdf",
                ExportFormat::Pdf,
            )
        } else {
            (
                self.state.request_download(self.exporter.as_ref()),
                "certificate.png",
                ExportFormat::Png,
            )
        };
        match result {
            Ok(bytes) => {
                let mime = match format {
                    ExportFormat::Png => "image/png",
                    ExportFormat::Pdf => "application/pdf",
                };
                offer_download(&bytes, file_name, mime);
            }
            Err(e) => show_toast(&Notification::from(&e)),
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: AppState::new(),
            exporter: Rc::new(UnimplementedExporter),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Dispatch(action) => self.apply(action),
            Msg::BackgroundFile(file) => self.attach_background(file),
            Msg::Download => {
                self.download(false);
                false
            }
            Msg::DownloadBatch => {
                self.download(true);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_action: Callback<Action> = link.callback(Msg::Dispatch);
        let design = self.state.design();

        html! {
            <div class="page">
                <header class="page-header">
                    <h1>{ "Certificate Generator" }</h1>
                    <p>{ "Create professional certificates in minutes" }</p>
                </header>
                <main class="page-grid">
                    <section class="column">
                        <div class="card">
                            <h2>{ "Certificate Details" }</h2>
                            <CertificateForm
                                record={self.state.record().clone()}
                                on_action={on_action.clone()}
                            />
                        </div>
                        <div class="card">
                            <DesignPicker
                                choice={design.choice()}
                                background={design.background().cloned()}
                                on_action={on_action.clone()}
                                on_background_file={link.callback(Msg::BackgroundFile)}
                            />
                        </div>
                        <div class="card">
                            <h2>{ "Batch Generation" }</h2>
                            <SpreadsheetUpload
                                on_names={on_action.reform(Action::LoadBatch)}
                            />
                        </div>
                    </section>
                    <section class="card">
                        <h2>{ "Preview" }</h2>
                        {
                            match (self.state.mode(), self.state.batch()) {
                                (Mode::Batch, Some(batch)) => html! {
                                    <BatchNavigator
                                        batch={batch.clone()}
                                        view={self.state.view()}
                                        download_enabled={self.state.download_enabled()}
                                        on_action={on_action.clone()}
                                        on_download={link.callback(|_| Msg::Download)}
                                        on_download_all={link.callback(|_| Msg::DownloadBatch)}
                                    />
                                },
                                _ => html! {
                                    <CertificatePreview
                                        view={self.state.view()}
                                        download_enabled={self.state.download_enabled()}
                                        on_download={link.callback(|_| Msg::Download)}
                                    />
                                },
                            }
                        }
                    </section>
                </main>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(image) = self.state.design().background() {
            revoke_object_url(&image.url);
        }
    }
}
