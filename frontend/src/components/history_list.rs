use slot_shared::{format_delta, History};
use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct HistoryListProps {
    pub history: History,
    pub limit: usize,
    pub win_delta: i64,
    pub loss_delta: i64,
}

#[function_component(HistoryList)]
pub fn history_list(props: &HistoryListProps) -> Html {
    html! {
        <div class="mt-8 space-y-3">
            <div class="flex items-baseline justify-between">
                <h3 class={styles::TEXT_H3}>{ format!("History (last {})", props.limit) }</h3>
                <span class={styles::TEXT_SMALL}>
                    { format!("Win {} · Lose {}", format_delta(props.win_delta), format_delta(props.loss_delta)) }
                </span>
            </div>

            <div class="space-y-2">
                if props.history.is_empty() {
                    <p class={classes!(styles::TEXT_SECONDARY, "text-center", "py-4")}>
                        {"Nothing here yet, give it a spin!"}
                    </p>
                }
                { for props.history.iter().enumerate().map(|(idx, entry)| html! {
                    <div key={idx.to_string()} class={styles::HISTORY_ITEM}>
                        <span class="text-2xl tracking-widest">{ entry.symbols.to_string() }</span>
                        <span class={if entry.is_win() { styles::TEXT_WIN } else { styles::TEXT_LOSE }}>
                            { entry.signed_delta() }
                        </span>
                    </div>
                }) }
            </div>

            <p class={classes!(styles::TEXT_HINT, "text-center")}>
                {"Balance and history are saved in localStorage"}
            </p>
        </div>
    }
}
