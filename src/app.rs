use crate::api::{self, ApiClient};
use crate::board::Board;
use crate::compose::Compose;
use crate::state::{Message, NewMessage};
use leptos::leptos_dom::ev::SubmitEvent;
use leptos::logging::{error, log};
use leptos::*;

const FETCH_FAILED: &str = "Failed to load messages.";
const CREATE_FAILED: &str = "Failed to post message.";
const DELETE_FAILED: &str = "Failed to delete message.";

fn apply_list_result(
    result: Result<Vec<Message>, api::Error>,
    set_messages: WriteSignal<Vec<Message>>,
    set_error: WriteSignal<Option<String>>,
) {
    match result {
        Ok(messages) => set_messages.set(messages),
        Err(err) => {
            error!("listing messages failed: {err}");
            set_error.set(Some(FETCH_FAILED.to_string()));
        }
    }
}

/// Full re-fetch of the collection. Clears the error banner up front; on
/// failure the previously fetched list stays on screen.
async fn refresh_messages(
    api: ApiClient,
    set_messages: WriteSignal<Vec<Message>>,
    set_error: WriteSignal<Option<String>>,
) {
    set_error.set(None);
    apply_list_result(api.list_messages().await, set_messages, set_error);
}

#[component]
pub fn App() -> impl IntoView {
    let api = ApiClient::from_env();
    log!("message board talking to {}", api.base());

    let (messages, set_messages) = create_signal(Vec::<Message>::new());
    let (username, set_username) = create_signal(String::new());
    let (content, set_content) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    {
        let api = api.clone();
        spawn_local(async move {
            refresh_messages(api, set_messages, set_error).await;
        });
    }

    let on_submit = {
        let api = api.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            set_loading.set(true);
            set_error.set(None);
            let api = api.clone();
            let draft = NewMessage {
                username: username.get(),
                content: content.get(),
            };
            spawn_local(async move {
                match api.create_message(&draft).await {
                    Ok(()) => {
                        set_username.set(String::new());
                        set_content.set(String::new());
                        refresh_messages(api, set_messages, set_error).await;
                    }
                    Err(err) => {
                        error!("posting message failed: {err}");
                        set_error.set(Some(CREATE_FAILED.to_string()));
                    }
                }
                // loading drops even if the refresh failed.
                set_loading.set(false);
            });
        }
    };

    let on_delete = move |id: u32| {
        let confirmed = window()
            .confirm_with_message("Are you sure you want to delete this message?")
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let api = api.clone();
        spawn_local(async move {
            match api.delete_message(id).await {
                Ok(()) => refresh_messages(api, set_messages, set_error).await,
                Err(err) => {
                    error!("deleting message {id} failed: {err}");
                    set_error.set(Some(DELETE_FAILED.to_string()));
                }
            }
        });
    };

    view! {
        <div class="min-h-dvh bg-white dark:bg-gray-900">
            <div class="max-w-2xl mx-auto p-6">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">Message Board</h1>
                <Compose username set_username content set_content loading on_submit />
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white mt-8 mb-4">
                    "Existing Messages:"
                </h2>
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <div
                                    class="p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 dark:bg-gray-800 dark:text-red-400"
                                    role="alert"
                                >
                                    {err}
                                </div>
                            }
                        })
                }}
                <Board messages on_delete />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn message(id: u32, username: &str, content: &str) -> Message {
        Message {
            id,
            username: username.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_fetch_success_replaces_list_and_clears_error() {
        let runtime = create_runtime();
        let (messages, set_messages) = create_signal(vec![message(9, "Old", "stale")]);
        let (error, set_error) = create_signal(Some("previous failure".to_string()));

        let fetched = vec![message(1, "Alice", "Hi"), message(2, "Bob", "Hello")];
        // Same order as refresh_messages: clear, then apply the response.
        set_error.set(None);
        apply_list_result(Ok(fetched.clone()), set_messages, set_error);

        assert_eq!(messages.get_untracked(), fetched);
        assert_eq!(error.get_untracked(), None);
        runtime.dispose();
    }

    #[test]
    fn test_fetch_failure_keeps_list_and_sets_error() {
        let runtime = create_runtime();
        let previous = vec![message(1, "Alice", "Hi")];
        let (messages, set_messages) = create_signal(previous.clone());
        let (error, set_error) = create_signal(None::<String>);

        set_error.set(None);
        apply_list_result(
            Err(api::Error::Status(StatusCode::INTERNAL_SERVER_ERROR)),
            set_messages,
            set_error,
        );

        assert_eq!(messages.get_untracked(), previous);
        assert_eq!(error.get_untracked(), Some(FETCH_FAILED.to_string()));
        runtime.dispose();
    }
}
