//! Spreadsheet upload for batch generation.
//!
//! The user picks (or drops) an `.xlsx` / `.xls` file, then presses "Extract
//! Names". The bytes are read asynchronously and handed to
//! `common::extract::extract_names`; on success the names go up through
//! `on_names`, otherwise a toast explains what went wrong and nothing else
//! changes. The extract button stays disabled while a read is in flight.

use common::error::CertificateError;
use common::extract::{extract_names, FileMeta, ACCEPT_ATTR};
use common::notification::Notification;
use common::state::upload::SpreadsheetPicker;
use gloo_file::futures::read_as_bytes;
use web_sys::{DragEvent, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{file_meta, show_toast};

#[derive(Properties, PartialEq)]
pub struct SpreadsheetUploadProps {
    pub on_names: Callback<Vec<String>>,
}

pub enum Msg {
    DragOver,
    DragLeave,
    Dropped(Option<web_sys::File>),
    FileChosen(Option<web_sys::File>),
    Clear,
    Extract,
    Extracted(Result<Vec<String>, CertificateError>),
}

pub struct SpreadsheetUpload {
    picker: SpreadsheetPicker,
    file: Option<web_sys::File>,
}

impl SpreadsheetUpload {
    fn choose(&mut self, file: Option<web_sys::File>) -> bool {
        let Some(file) = file else {
            self.picker.drop_zone.drop();
            return true;
        };
        match self.picker.select(file_meta(&file)) {
            Ok(()) => self.file = Some(file),
            Err(e) => show_toast(&Notification::from(&e)),
        }
        true
    }
}

async fn read_and_extract(meta: FileMeta, file: web_sys::File) -> Result<Vec<String>, CertificateError> {
    let file = gloo_file::File::from(file);
    let bytes = read_as_bytes(&file)
        .await
        .map_err(|e| CertificateError::ReadError(e.to_string()))?;
    extract_names(&meta, &bytes)
}

impl Component for SpreadsheetUpload {
    type Message = Msg;
    type Properties = SpreadsheetUploadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            picker: SpreadsheetPicker::default(),
            file: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DragOver => self.picker.drop_zone.drag_over(),
            Msg::DragLeave => self.picker.drop_zone.drag_leave(),
            Msg::Dropped(file) | Msg::FileChosen(file) => self.choose(file),
            Msg::Clear => {
                self.picker.clear();
                if self.picker.selected().is_none() {
                    self.file = None;
                }
                true
            }
            Msg::Extract => {
                let (Some(meta), Some(file)) = (self.picker.selected().cloned(), self.file.clone())
                else {
                    return false;
                };
                if !self.picker.begin_processing() {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Extracted(read_and_extract(meta, file).await));
                });
                true
            }
            Msg::Extracted(result) => {
                self.picker.finish_processing();
                match result {
                    Ok(names) => {
                        show_toast(&Notification::names_extracted(names.len()));
                        ctx.props().on_names.emit(names);
                    }
                    Err(e) => {
                        gloo_console::log!("spreadsheet rejected:", e.to_string());
                        show_toast(&Notification::from(&e));
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        match self.picker.selected() {
            None => html! {
                <div
                    class={classes!("drop-zone", "spreadsheet", self.picker.drop_zone.dragging().then_some("dragging"))}
                    ondragover={link.callback(|e: DragEvent| {
                        e.prevent_default();
                        Msg::DragOver
                    })}
                    ondragleave={link.callback(|_: DragEvent| Msg::DragLeave)}
                    ondrop={link.callback(|e: DragEvent| {
                        e.prevent_default();
                        Msg::Dropped(
                            e.data_transfer()
                                .and_then(|dt| dt.files())
                                .and_then(|files| files.get(0)),
                        )
                    })}
                >
                    <h4>{ "Drag & drop an Excel file here" }</h4>
                    <p>{ "or choose a file (.xlsx, .xls)" }</p>
                    <p class="hint">{ "Column A = participant name" }</p>
                    <label class="button primary">
                        { "Choose Excel File" }
                        <input
                            type="file"
                            accept={ACCEPT_ATTR}
                            class="hidden"
                            onchange={link.callback(|e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Msg::FileChosen(input.files().and_then(|files| files.get(0)))
                            })}
                        />
                    </label>
                </div>
            },
            Some(meta) => html! {
                <div class="selected-file">
                    <div class="selected-file-row">
                        <span class="file-name">{ meta.file_name.clone() }</span>
                        <button
                            class="button ghost"
                            title="Remove file"
                            disabled={self.picker.processing()}
                            onclick={link.callback(|_| Msg::Clear)}
                        >
                            { "✕" }
                        </button>
                    </div>
                    <button
                        class="button success wide"
                        disabled={!self.picker.can_extract()}
                        onclick={link.callback(|_| Msg::Extract)}
                    >
                        { if self.picker.processing() { "Processing..." } else { "Extract Names" } }
                    </button>
                </div>
            },
        }
    }
}
