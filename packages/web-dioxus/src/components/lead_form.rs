//! Lead capture form (front-end only)

use dioxus::prelude::*;

use crate::state::PageState;

const KIND_OPTIONS: &[(&str, &str)] = &[
    ("", "Selecione"),
    ("studio", "Studio"),
    ("apartamento-1q", "Apartamento 1 quarto"),
    ("apartamento-2q", "Apartamento 2 quartos"),
    ("casa", "Casa ou sobrado"),
];

const PRIORITY_OPTIONS: &[(&str, &str)] = &[
    ("", "Selecione"),
    ("preco", "Menor preço"),
    ("localizacao", "Localização"),
    ("condominio", "Condomínio baixo"),
    ("lazer", "Lazer completo"),
];

/// Lead form. Submitting validates locally and shows a toast; nothing is
/// sent anywhere.
#[component]
pub fn LeadFormSection() -> Element {
    let state = use_context::<PageState>();
    let mut lead = state.lead;
    let form = lead.read().clone();
    let toast = state.toast.read().clone();

    rsx! {
        section {
            id: "contato",
            class: "section lead",
            div {
                class: "container lead__grid",
                div {
                    class: "lead__copy",
                    h2 { "Quer uma curadoria só sua?" }
                    p {
                        class: "muted",
                        "Conta o que você procura e um especialista chama no WhatsApp com opções que passam no nosso filtro."
                    }
                    ul {
                        class: "checklist",
                        li { "Sem spam, sem lista de transmissão" }
                        li { "Imóveis até R$ 350 mil" }
                        li { "Ajuda com financiamento e documentação" }
                    }
                }

                form {
                    id: "leadForm",
                    class: "form",
                    novalidate: true,
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        state.submit_lead();
                    },

                    label {
                        class: "field",
                        span { "Seu nome" }
                        input {
                            name: "name",
                            r#type: "text",
                            autocomplete: "name",
                            placeholder: "Como podemos te chamar?",
                            value: "{form.name}",
                            oninput: move |e| lead.write().name = e.value(),
                        }
                    }

                    label {
                        class: "field",
                        span { "WhatsApp" }
                        input {
                            name: "phone",
                            r#type: "tel",
                            autocomplete: "tel",
                            inputmode: "numeric",
                            placeholder: "(19) 90000-0000",
                            value: "{form.phone}",
                            oninput: move |e| lead.write().phone = e.value(),
                        }
                    }

                    div {
                        class: "form__row",
                        label {
                            class: "field",
                            span { "Tipo" }
                            select {
                                name: "type",
                                value: "{form.kind}",
                                onchange: move |e| lead.write().kind = e.value(),
                                for (value, label) in KIND_OPTIONS.iter().copied() {
                                    option { key: "{value}", value, "{label}" }
                                }
                            }
                        }
                        label {
                            class: "field",
                            span { "Prioridade" }
                            select {
                                name: "priority",
                                value: "{form.priority}",
                                onchange: move |e| lead.write().priority = e.value(),
                                for (value, label) in PRIORITY_OPTIONS.iter().copied() {
                                    option { key: "{value}", value, "{label}" }
                                }
                            }
                        }
                    }

                    label {
                        class: "field",
                        span { "O que não pode faltar?" }
                        textarea {
                            name: "must",
                            rows: "3",
                            placeholder: "Ex.: vaga coberta, baixo condomínio, perto do trabalho",
                            value: "{form.must}",
                            oninput: move |e| lead.write().must = e.value(),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn--primary btn--block",
                        "Quero minha curadoria"
                    }

                    if let Some(toast) = toast {
                        div {
                            class: "form__toast",
                            role: if toast.is_error() { "alert" } else { "status" },
                            style: "{toast.style()}",
                            "{toast.message}"
                        }
                    } else {
                        div { class: "form__toast", role: "status", style: "display: none;" }
                    }
                }
            }
        }
    }
}
