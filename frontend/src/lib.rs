pub mod components;
pub mod config;
pub mod pages;
pub mod scheduler;
pub mod storage;
pub mod styles;

use yew::prelude::*;
use crate::pages::slot_machine::SlotMachinePage;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen w-full">
            <div class="mx-auto">
                <SlotMachinePage />
            </div>
        </div>
    }
}
