use slot_shared::Reels;
use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ReelDisplayProps {
    pub reels: Reels,
    pub spinning: bool,
}

#[function_component(ReelDisplay)]
pub fn reel_display(props: &ReelDisplayProps) -> Html {
    html! {
        <div class={styles::REEL_ROW}>
            { for props.reels.symbols().iter().enumerate().map(|(idx, symbol)| html! {
                <div
                    key={idx.to_string()}
                    class={classes!(styles::REEL, props.spinning.then_some(styles::REEL_SPINNING))}
                >
                    { symbol.to_string() }
                </div>
            }) }
        </div>
    }
}
