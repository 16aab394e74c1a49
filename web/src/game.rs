use crate::board::render_board;
use crate::client::HttpTriviaSource;
use crate::controls::{LoadError, StartButton};
use clap::Args;
use jeopardy_core::{Board, ClueTag, GameConfig, GameSession, Generation, TriviaResult, load_board};
use jeopardy_protocol::DEFAULT_API_BASE;
use yew::prelude::*;

pub(crate) enum Msg {
    Start,
    Loaded {
        generation: Generation,
        result: TriviaResult<Board>,
    },
    Reveal(ClueTag),
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Base URL of the trivia API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Upper bound for the random offset into the category listing
    #[arg(long, default_value_t = 18000)]
    pub max_offset: u32,

    /// Wait for the start button instead of loading a board right away
    #[arg(long)]
    pub manual_start: bool,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: GameSession,
    source: HttpTriviaSource,
}

impl GameView {
    fn start(&mut self, ctx: &Context<Self>) {
        let generation = self.session.begin_load();
        let config = self.session.config();
        let source = self.source.clone();

        ctx.link().send_future(async move {
            let result = load_board(&source, config).await;
            Msg::Loaded { generation, result }
        });
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        if !props.manual_start {
            ctx.link().send_message(Msg::Start);
        }

        Self {
            session: GameSession::new(GameConfig::default()),
            source: HttpTriviaSource::new(props.api_base.clone(), props.max_offset),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => {
                self.start(ctx);
                true
            }
            Loaded { generation, result } => {
                self.session.finish_load(generation, result).has_update()
            }
            Reveal(tag) => match self.session.reveal(tag) {
                Ok(outcome) => {
                    log::debug!("reveal {:?}: {:?}", tag, outcome);
                    outcome.has_update()
                }
                Err(err) => {
                    log::warn!("ignoring click: {}", err);
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let phase = self.session.phase().clone();
        let on_start = ctx.link().callback(|_| Msg::Start);
        let on_reveal = ctx.link().callback(Msg::Reveal);

        html! {
            <div class="jeopardy">
                <nav>
                    <StartButton phase={phase.clone()} onclick={on_start}/>
                </nav>
                <LoadError phase={phase.clone()}/>
                { render_board(self.session.board(), phase.is_loading(), &on_reveal) }
            </div>
        }
    }
}
