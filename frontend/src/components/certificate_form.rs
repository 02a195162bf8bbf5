use common::model::{CertificateRecord, RecordField};
use common::state::Action;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CertificateFormProps {
    pub record: CertificateRecord,
    /// Receives one `Action::EditField` per keystroke.
    pub on_action: Callback<Action>,
}

/// The five certificate fields. Stateless: values come from the root state.
pub struct CertificateForm;

impl Component for CertificateForm {
    type Message = ();
    type Properties = CertificateFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CertificateForm
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="form">
                { for RecordField::ALL.into_iter().map(|field| field_row(field, &props.record, &props.on_action)) }
            </div>
        }
    }
}

fn field_row(field: RecordField, record: &CertificateRecord, on_action: &Callback<Action>) -> Html {
    let oninput = on_action.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Action::EditField(field, input.value())
    });

    html! {
        <div class="form-row">
            <label for={field.id()}>{ field.label() }</label>
            <input
                id={field.id()}
                type={if field.is_date() { "date" } else { "text" }}
                placeholder={field.hint()}
                value={record.get(field).to_string()}
                {oninput}
            />
        </div>
    }
}
