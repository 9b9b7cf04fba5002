use crate::state::Message;
use leptos::*;

#[component]
pub fn MessageItem<F>(message: Message, on_delete: F) -> impl IntoView
where
    F: Fn(u32) + 'static,
{
    let id = message.id;
    let delete = move |_| on_delete(id);
    view! {
        <li class="flex items-start justify-between gap-2.5 p-4 border-gray-200 bg-gray-100 rounded-lg dark:bg-gray-700">
            <div class="flex flex-col gap-1 max-w-[90%]">
                <span class="text-sm font-semibold text-gray-900 dark:text-white">
                    {message.username}
                </span>
                <p class="text-sm font-normal whitespace-pre-wrap text-gray-900 dark:text-white">
                    {message.content}
                </p>
            </div>
            <button
                type="button"
                class="self-center px-3 py-1.5 text-sm font-medium text-center text-red-700 bg-white rounded-lg hover:bg-red-50 focus:ring-4 focus:outline-none focus:ring-red-300 dark:text-red-400 dark:bg-gray-900 dark:hover:bg-gray-800 dark:focus:ring-red-900"
                on:click=delete
            >
                Delete
            </button>
        </li>
    }
}
