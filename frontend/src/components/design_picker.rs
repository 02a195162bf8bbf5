//! Design selection: the six design cards plus the custom background drop zone.
//!
//! Choosing a card sends `Action::SelectDesign`. An image picked through the
//! file input or dropped on the zone is forwarded as a raw `web_sys::File`;
//! the root validates it and turns it into a background (which also selects
//! the custom design).

use common::model::design::{catalog, DesignInfo};
use common::model::{BackgroundImage, DesignChoice};
use common::render::Backdrop;
use common::state::upload::DropZone;
use common::state::Action;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DesignPickerProps {
    pub choice: DesignChoice,
    #[prop_or_default]
    pub background: Option<BackgroundImage>,
    pub on_action: Callback<Action>,
    pub on_background_file: Callback<web_sys::File>,
}

pub enum Msg {
    DragOver,
    DragLeave,
    Dropped(Option<web_sys::File>),
    FileChosen(Option<web_sys::File>),
    OpenFileDialog,
}

pub struct DesignPicker {
    drop_zone: DropZone,
    file_input_ref: NodeRef,
}

impl Component for DesignPicker {
    type Message = Msg;
    type Properties = DesignPickerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            drop_zone: DropZone::default(),
            file_input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DragOver => self.drop_zone.drag_over(),
            Msg::DragLeave => self.drop_zone.drag_leave(),
            Msg::Dropped(file) => {
                self.drop_zone.drop();
                if let Some(file) = file {
                    ctx.props().on_background_file.emit(file);
                }
                true
            }
            Msg::FileChosen(file) => {
                if let Some(file) = file {
                    ctx.props().on_background_file.emit(file);
                }
                // Reset so choosing the same file again still fires `change`.
                if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
                false
            }
            Msg::OpenFileDialog => {
                if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
                    input.click();
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        html! {
            <div class="design-picker">
                <h3>{ "Choose Certificate Design" }</h3>
                <div class="design-grid">
                    { for catalog().into_iter().map(|info| design_card(info, props)) }
                </div>
                <div
                    class={classes!("drop-zone", self.drop_zone.dragging().then_some("dragging"))}
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
                    onclick={link.callback(|_| Msg::OpenFileDialog)}
                >
                    {
                        match &props.background {
                            Some(image) => html! {
                                <>
                                    <img class="drop-zone-thumb" src={image.url.clone()} alt={image.file_name.clone()} />
                                    <span>{ format!("{} (click or drop to replace)", image.file_name) }</span>
                                </>
                            },
                            None => html! {
                                <span>{ "Drop a background image here, or click to choose one" }</span>
                            },
                        }
                    }
                    <input
                        type="file"
                        accept="image/*"
                        class="hidden"
                        ref={self.file_input_ref.clone()}
                        onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                        onchange={link.callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::FileChosen(input.files().and_then(|files| files.get(0)))
                        })}
                    />
                </div>
            </div>
        }
    }
}

fn design_card(info: DesignInfo, props: &DesignPickerProps) -> Html {
    let selected = props.choice == info.id;
    let swatch = match info.palette {
        Some(palette) => format!(
            "background: {}; border-color: {};",
            Backdrop::Gradient {
                from: palette.background.from.to_string(),
                to: palette.background.to.to_string(),
            }
            .css(),
            palette.border
        ),
        None => match &props.background {
            Some(image) => format!(
                "background: {}; border-color: #374151;",
                Backdrop::Image { url: image.url.clone() }.css()
            ),
            None => "background: repeating-linear-gradient(45deg, #f3f4f6, #f3f4f6 8px, #e5e7eb 8px, #e5e7eb 16px); border-color: #374151;".to_string(),
        },
    };
    let choice = info.id;

    html! {
        <button
            class={classes!("design-card", selected.then_some("selected"))}
            onclick={props.on_action.reform(move |_: MouseEvent| Action::SelectDesign(choice))}
        >
            <div class="design-swatch" style={swatch}>
                <span>{ "Certificate Preview" }</span>
            </div>
            <div class="design-name">{ info.name }</div>
            <div class="design-description">{ info.description }</div>
        </button>
    }
}
