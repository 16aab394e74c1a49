use jeopardy_core::{Board, ClueTag, RevealState};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    tag: ClueTag,
    showing: RevealState,
    text: String,
    callback: Callback<ClueTag>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use RevealState::*;

    let CellProps {
        tag,
        showing,
        text,
        callback,
    } = props.clone();

    let class = classes!(
        "question",
        match showing {
            Hidden => classes!(),
            Question => classes!("showing-question"),
            Answer => classes!("showing-answer", "locked"),
        }
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) click", tag.category, tag.clue);
        callback.emit(tag);
    });

    html! {
        <td {class} {onclick}>{text}</td>
    }
}

/// Header row of category titles, then one body row per clue index with a cell per category.
///
/// Every cell is built with its own [`ClueTag`], so `on_reveal` never depends on where the cell
/// ends up in the DOM.
pub(crate) fn render_board(board: &Board, loading: bool, on_reveal: &Callback<ClueTag>) -> Html {
    html! {
        <table id="board" class={loading.then_some("loading")}>
            <thead>
                <tr>
                    { for board.titles().map(|title| html! { <th>{title.to_owned()}</th> }) }
                </tr>
            </thead>
            <tbody>
                {
                    for board.rows().map(|cells| html! {
                        <tr>
                            {
                                for cells.into_iter().map(|cell| html! {
                                    <CellView
                                        key={format!("{}-{}", cell.tag.category, cell.tag.clue)}
                                        tag={cell.tag}
                                        showing={cell.showing}
                                        text={cell.text.to_owned()}
                                        callback={on_reveal.clone()}
                                    />
                                })
                            }
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}
