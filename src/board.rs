use crate::message::MessageItem;
use crate::state::Message;
use leptos::*;

#[component]
pub fn Board<F>(messages: ReadSignal<Vec<Message>>, on_delete: F) -> impl IntoView
where
    F: Fn(u32) + 'static + Clone,
{
    view! {
        {move || {
            let messages = messages.get();
            if messages.is_empty() {
                view! {
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "No messages yet. Be the first to post!"
                    </p>
                }
                    .into_view()
            } else {
                view! {
                    <ul class="space-y-3">
                        {messages
                            .into_iter()
                            .map(|message| {
                                let on_delete = on_delete.clone();
                                view! { <MessageItem message on_delete /> }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                    .into_view()
            }
        }}
    }
}
