use leptos::leptos_dom::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn Compose<F>(
    username: ReadSignal<String>,
    set_username: WriteSignal<String>,
    content: ReadSignal<String>,
    set_content: WriteSignal<String>,
    loading: ReadSignal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(SubmitEvent) + 'static,
{
    let update_username = move |ev| {
        let v = event_target_value(&ev);
        set_username.set(v);
    };
    let update_content = move |ev| {
        let v = event_target_value(&ev);
        set_content.set(v);
    };
    view! {
        <form class="w-full" on:submit=on_submit>
            <div class="flex flex-col gap-3 p-4 bg-gray-50 rounded-lg dark:bg-gray-700">
                <label for="username" class="sr-only">
                    Your name
                </label>
                <input
                    id="username"
                    type="text"
                    required
                    placeholder="Your name"
                    class="block p-2.5 w-full text-sm text-gray-900 bg-white rounded-lg border border-gray-300 focus:ring-blue-500 focus:border-blue-500 dark:bg-gray-800 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500"
                    on:input=update_username
                    prop:value=username
                />
                <label for="content" class="sr-only">
                    Your message
                </label>
                <textarea
                    id="content"
                    rows="3"
                    required
                    placeholder="Write a message..."
                    class="block p-2.5 w-full text-sm text-gray-900 bg-white rounded-lg border border-gray-300 focus:ring-blue-500 focus:border-blue-500 dark:bg-gray-800 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500 resize-none"
                    on:input=update_content
                    prop:value=content
                ></textarea>
                <div>
                    {move || {
                        if loading.get() {
                            view! {
                                <button
                                    disabled
                                    type="submit"
                                    class="text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-5 py-2.5 text-center dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800 inline-flex items-center cursor-not-allowed"
                                >
                                    <svg
                                        aria-hidden="true"
                                        role="status"
                                        class="inline w-4 h-4 me-3 text-white animate-spin"
                                        viewBox="0 0 100 101"
                                        fill="none"
                                        xmlns="http://www.w3.org/2000/svg"
                                    >
                                        <path
                                            d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                                            fill="#E5E7EB"
                                        />
                                        <path
                                            d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                                            fill="currentColor"
                                        />
                                    </svg>
                                    Posting...
                                </button>
                            }
                        } else {
                            view! {
                                <button
                                    type="submit"
                                    class="text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:ring-blue-300 font-medium rounded-lg text-sm px-5 py-2.5 dark:bg-blue-600 dark:hover:bg-blue-700 focus:outline-none dark:focus:ring-blue-800"
                                >
                                    Post Message
                                </button>
                            }
                        }
                    }}
                </div>
            </div>
        </form>
    }
}
