use std::time::Duration;

use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use crate::content::{ContactForm, CONTACT_METHODS, FAQS, PROJECT_TYPES};

use super::icon::Icon;

// the form is not sent anywhere, this only paces the "Sending..." state
const SEND_DELAY: Duration = Duration::from_millis(1500);

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Get in Touch" />
        <div class="min-h-screen pt-32 pb-24 px-6">
            <div class="max-w-7xl mx-auto">
                <div class="max-w-3xl mb-16 animate-slide-up">
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full glass mb-6">
                        <Icon icon="ph:chat-circle-bold" class="w-4 h-4" style="color: var(--accent)" />
                        <span class="text-sm font-medium" style="color: var(--muted)">
                            "Let's Connect"
                        </span>
                    </div>
                    <h1 class="font-display font-bold text-display-lg mb-6">
                        "Get in " <span style="color: var(--accent)">"Touch"</span>
                    </h1>
                    <p class="text-xl" style="color: var(--muted)">
                        "Have a project in mind or just want to chat? I'd love to hear from you. Let's create something amazing together."
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-6 mb-16">
                    {CONTACT_METHODS
                        .iter()
                        .map(|method| {
                            let external = method.is_external();
                            view! {
                                <a
                                    href=method.href
                                    target=external.then_some("_blank")
                                    rel=external.then_some("noopener noreferrer")
                                    class="group p-6 rounded-2xl card-hover animate-slide-up"
                                    style="background-color: var(--surface); border: 1px solid var(--border)"
                                >
                                    <div
                                        class="w-14 h-14 rounded-xl flex items-center justify-center mb-4 group-hover:scale-110"
                                        style="background-color: color-mix(in srgb, var(--accent) 12%, transparent)"
                                    >
                                        <Icon icon=method.icon class="w-7 h-7" style="color: var(--accent)" />
                                    </div>
                                    <h3 class="font-display font-semibold text-lg mb-1">
                                        {method.title}
                                    </h3>
                                    <p class="font-medium mb-1" style="color: var(--accent)">
                                        {method.value}
                                    </p>
                                    <p class="text-sm" style="color: var(--muted)">
                                        {method.description}
                                    </p>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid lg:grid-cols-2 gap-12">
                    <MessageForm />
                    <Faq />
                </div>
            </div>
        </div>
    }
}

const FIELD_STYLE: &str =
    "background-color: var(--elevated); color: var(--text); border: 1px solid var(--border)";
const FIELD_CLASS: &str = "w-full px-4 py-3 rounded-xl outline-none focus:ring-2";

#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let (sending, set_sending) = signal(false);
    let (sent, set_sent) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Err(e) = form.with(|f| f.validate()) {
            set_error(Some(e.to_string()));
            return;
        }
        set_error(None);
        set_sending(true);
        set_timeout(
            move || {
                set_sending(false);
                set_sent(true);
                form.set(ContactForm::default());
            },
            SEND_DELAY,
        );
    };

    let field = move |label: &'static str, input: AnyView| {
        view! {
            <div>
                <label class="block text-sm font-medium mb-2" style="color: var(--muted)">
                    {label}
                </label>
                {input}
            </div>
        }
    };

    let form_view = move || {
        view! {
            <form on:submit=on_submit class="space-y-5">
                <div class="grid md:grid-cols-2 gap-5">
                    {field(
                        "Name",
                        view! {
                            <input
                                type="text"
                                required
                                class=FIELD_CLASS
                                style=FIELD_STYLE
                                placeholder="John Doe"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        }
                            .into_any(),
                    )}
                    {field(
                        "Email",
                        view! {
                            <input
                                type="email"
                                required
                                class=FIELD_CLASS
                                style=FIELD_STYLE
                                placeholder="john@example.com"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        }
                            .into_any(),
                    )}
                </div>
                {field(
                    "Project Type",
                    view! {
                        <select
                            required
                            class=FIELD_CLASS
                            style=FIELD_STYLE
                            prop:value=move || form.with(|f| f.project.clone())
                            on:change=move |ev| form.update(|f| f.project = event_target_value(&ev))
                        >
                            <option value="">"Select a project type"</option>
                            {PROJECT_TYPES
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()}
                        </select>
                    }
                        .into_any(),
                )}
                {field(
                    "Message",
                    view! {
                        <textarea
                            required
                            rows="5"
                            class=format!("{FIELD_CLASS} resize-none")
                            style=FIELD_STYLE
                            placeholder="Tell me about your project..."
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                    }
                        .into_any(),
                )}
                {move || {
                    error()
                        .map(|e| {
                            view! {
                                <p class="text-sm text-red-500" role="alert">
                                    {e}
                                </p>
                            }
                        })
                }}
                <button
                    type="submit"
                    disabled=move || sending()
                    class="w-full py-4 rounded-xl font-semibold text-lg hover:scale-[1.02] disabled:opacity-50 flex items-center justify-center gap-3"
                    style="background-color: var(--accent); color: var(--bg)"
                >
                    {move || {
                        if sending() {
                            Either::Left(
                                view! {
                                    <Icon icon="ph:spinner" class="w-5 h-5 animate-spin" />
                                    "Sending..."
                                },
                            )
                        } else {
                            Either::Right(
                                view! {
                                    "Send Message"
                                    <Icon icon="ph:paper-plane-right-bold" class="w-5 h-5" />
                                },
                            )
                        }
                    }}
                </button>
            </form>
        }
    };

    view! {
        <div
            class="p-8 rounded-3xl animate-slide-up"
            style="background-color: var(--surface); border: 1px solid var(--border)"
        >
            <h2 class="font-display font-bold text-2xl mb-6">"Send a Message"</h2>
            {move || {
                if sent() {
                    Either::Left(
                        view! {
                            <div class="text-center py-12">
                                <div
                                    class="w-20 h-20 rounded-full flex items-center justify-center mx-auto mb-6"
                                    style="background-color: color-mix(in srgb, var(--accent) 12%, transparent)"
                                >
                                    <Icon
                                        icon="ph:check-circle-bold"
                                        class="w-10 h-10"
                                        style="color: var(--accent)"
                                    />
                                </div>
                                <h3 class="font-display font-semibold text-xl mb-2">
                                    "Message Sent!"
                                </h3>
                                <p style="color: var(--muted)">
                                    "Thank you for reaching out. I'll get back to you within 24 hours."
                                </p>
                                <button
                                    class="mt-6 px-6 py-3 rounded-xl font-medium"
                                    style="background-color: var(--elevated); color: var(--text)"
                                    on:click=move |_| set_sent(false)
                                >
                                    "Send Another Message"
                                </button>
                            </div>
                        },
                    )
                } else {
                    Either::Right(form_view())
                }
            }}
        </div>
    }
}

#[component]
fn Faq() -> impl IntoView {
    let (open, set_open) = signal(None::<usize>);

    view! {
        <div class="animate-slide-up">
            <h2 class="font-display font-bold text-2xl mb-6">
                "Frequently Asked " <span style="color: var(--accent)">"Questions"</span>
            </h2>
            <div class="space-y-4">
                {FAQS
                    .iter()
                    .enumerate()
                    .map(|(i, (question, answer))| {
                        let is_open = move || open() == Some(i);
                        view! {
                            <div
                                class="rounded-2xl overflow-hidden"
                                style="background-color: var(--surface); border: 1px solid var(--border)"
                            >
                                <button
                                    class="w-full px-6 py-5 flex items-center justify-between text-left"
                                    on:click=move |_| {
                                        set_open.update(|o| *o = if *o == Some(i) { None } else { Some(i) })
                                    }
                                >
                                    <span class="font-medium pr-4">{*question}</span>
                                    <span class=move || {
                                        if is_open() {
                                            "inline-flex rotate-180"
                                        } else {
                                            "inline-flex"
                                        }
                                    }>
                                        <Icon
                                            icon="ph:caret-down-bold"
                                            class="w-5 h-5 flex-shrink-0"
                                            style="color: var(--accent)"
                                        />
                                    </span>
                                </button>
                                <div class=move || {
                                    if is_open() {
                                        "px-6 overflow-hidden pb-5 max-h-96"
                                    } else {
                                        "px-6 overflow-hidden max-h-0"
                                    }
                                }>
                                    <p style="color: var(--muted)">{*answer}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div
                class="mt-8 p-6 rounded-2xl"
                style="background: linear-gradient(135deg, color-mix(in srgb, var(--accent) 8%, transparent), color-mix(in srgb, var(--accent-alt) 8%, transparent)); border: 1px solid var(--border)"
            >
                <div class="flex items-center gap-3 mb-3">
                    <span class="w-3 h-3 rounded-full bg-green-500 animate-pulse"></span>
                    <span class="font-medium">"Currently Available"</span>
                </div>
                <p class="text-sm" style="color: var(--muted)">
                    "I'm currently accepting new projects. Typical response time is within 24 hours."
                </p>
            </div>
        </div>
    }
}
