use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use slot_shared::{SlotSession, SystemClock};
use yew::prelude::*;

use crate::components::{HistoryList, ReelDisplay, ResetControl};
use crate::config;
use crate::scheduler::GlooScheduler;
use crate::storage::LocalStore;
use crate::styles;

type Session = SlotSession<LocalStore, GlooScheduler, SmallRng>;

pub enum Msg {
    Spin,
    FlickerTick,
    SettleElapsed,
    AskReset,
    CancelReset,
    ConfirmReset,
}

pub struct SlotMachinePage {
    session: Session,
    confirming_reset: bool,
}

impl Component for SlotMachinePage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let scheduler = GlooScheduler::new(
            ctx.link().callback(|_| Msg::FlickerTick),
            ctx.link().callback(|_| Msg::SettleElapsed),
        );
        let session = SlotSession::open(
            config::slot_config(),
            LocalStore::new(),
            scheduler,
            SmallRng::from_entropy(),
            Box::new(SystemClock),
        );

        Self {
            session,
            confirming_reset: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Spin => {
                if self.session.machine().is_spinning() {
                    debug!("Spin requested while spinning");
                    return false;
                }
                self.session.spin();
            }
            Msg::FlickerTick => self.session.flicker_tick(),
            Msg::SettleElapsed => self.session.settle_elapsed(),
            Msg::AskReset => self.confirming_reset = true,
            Msg::CancelReset => self.confirming_reset = false,
            Msg::ConfirmReset => {
                let confirmed = std::mem::take(&mut self.confirming_reset);
                self.session.reset(|| confirmed);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let machine = self.session.machine();
        let config = machine.config();
        let spinning = machine.is_spinning();

        html! {
            <div class={styles::CONTAINER}>
                <div class={styles::MACHINE_CARD}>
                    <div class="flex items-center justify-between mb-8">
                        <div>
                            <h1 class={styles::TEXT_H1}>{"Slot Machine"}</h1>
                            <p class={styles::TEXT_SECONDARY}>{"Spin to win virtual chips"}</p>
                        </div>
                        <div class={styles::BALANCE}>{ format!("{} ♠", machine.balance()) }</div>
                    </div>

                    <ReelDisplay reels={machine.reels()} {spinning} />

                    <div class="flex justify-center items-start space-x-4 mt-8">
                        <button
                            type="button"
                            onclick={link.callback(|_| Msg::Spin)}
                            disabled={spinning}
                            class={styles::BUTTON_PRIMARY}
                        >
                            { if spinning { "Spinning..." } else { "SPIN" } }
                        </button>
                        <ResetControl
                            confirming={self.confirming_reset}
                            on_ask={link.callback(|_| Msg::AskReset)}
                            on_cancel={link.callback(|_| Msg::CancelReset)}
                            on_confirm={link.callback(|_| Msg::ConfirmReset)}
                        />
                    </div>

                    <HistoryList
                        history={machine.history().clone()}
                        limit={config.history_limit}
                        win_delta={config.win_delta}
                        loss_delta={config.loss_delta}
                    />
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.session.teardown();
    }
}
