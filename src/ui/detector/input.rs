use crate::app::AppState;
use crate::types::Locale;
use crate::ui::components::loading::Spinner;
use dioxus::prelude::*;

#[component]
pub fn InputPanel() -> Element {
    let app_state = use_context::<AppState>();
    let session = app_state.session.read().clone();
    let mut statement = app_state.input;
    let analyzing = session.is_analyzing();
    let listening = session.is_listening();
    let narration = session.narration_enabled();
    let tts_class = match (narration, session.is_speaking()) {
        (_, true) => "tts-btn active speaking",
        (true, false) => "tts-btn active",
        (false, false) => "tts-btn",
    };
    let selected_tag = session.locale().tag();

    let voice_state = app_state.clone();
    let locale_state = app_state.clone();
    let upload_state = app_state.clone();
    let narration_state = app_state.clone();
    let analyze_state = app_state.clone();
    let keydown_state = app_state.clone();

    rsx! {
        div {
            class: "input-panel",

            textarea {
                class: "statement-input",
                placeholder: "Paste a news headline, claim or URL...",
                value: "{statement}",
                oninput: move |evt| statement.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    // Ctrl+Enter submits
                    if evt.key() == Key::Enter && evt.modifiers().contains(Modifiers::CONTROL) && !analyzing {
                        evt.prevent_default();
                        keydown_state.analyze();
                    }
                },
            }

            div {
                class: "input-controls",

                button {
                    class: if listening { "voice-btn listening" } else { "voice-btn" },
                    title: if listening { "Stop listening" } else { "Speak your statement" },
                    onclick: move |_| voice_state.toggle_voice(),
                    "🎤"
                }

                select {
                    class: "language-select",
                    value: "{selected_tag}",
                    onchange: move |evt| locale_state.select_locale(&evt.value()),
                    for locale in Locale::ALL {
                        option {
                            value: locale.tag(),
                            selected: locale.tag() == selected_tag,
                            "{locale.display_name()}"
                        }
                    }
                }

                label {
                    class: "upload-btn",
                    title: "Extract text from an image",
                    "📷 Upload image"
                    input {
                        r#type: "file",
                        accept: "image/*",
                        style: "display: none;",
                        onchange: move |evt: FormEvent| {
                            let state = upload_state.clone();
                            spawn(async move {
                                let Some(files) = evt.files() else { return };
                                for name in files.files() {
                                    match files.read_file(&name).await {
                                        Some(bytes) => state.upload_image(name, bytes).await,
                                        None => tracing::error!("Failed to read image file: {}", name),
                                    }
                                }
                            });
                        },
                    }
                }

                button {
                    class: "{tts_class}",
                    title: "Read results aloud (English only)",
                    onclick: move |_| narration_state.toggle_narration(),
                    if narration { "🔊" } else { "🔈" }
                }

                button {
                    class: "analyze-btn",
                    disabled: analyzing,
                    onclick: move |_| analyze_state.analyze(),
                    if analyzing {
                        Spinner { size: 14 }
                        span { "Analyzing..." }
                    } else {
                        span { "Analyze Now" }
                    }
                }
            }
        }
    }
}
