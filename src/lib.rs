pub mod data;
pub mod matchflow;
pub mod ranking;
pub mod wizard;

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use data::Candidate;
use matchflow::Matchup;
use ranking::RankedCandidate;
use wizard::{Stage, ViewState, Wizard, SELECTION_LIMIT};

#[derive(Clone, Copy)]
enum WinnerSide {
    Left,
    Right,
}

#[function_component(App)]
fn app() -> Html {
    let wizard = use_state(Wizard::new);

    let on_start = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            next.start();
            wizard.set(next);
        })
    };

    let on_search = {
        let wizard = wizard.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*wizard).clone();
            next.set_search_query(input.value());
            wizard.set(next);
        })
    };

    let on_toggle = {
        let wizard = wizard.clone();
        Callback::from(move |candidate: Candidate| {
            let mut next = (*wizard).clone();
            next.toggle_select(candidate);
            wizard.set(next);
        })
    };

    let on_begin = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            next.begin_comparisons();
            wizard.set(next);
        })
    };

    let on_choose = {
        let wizard = wizard.clone();
        Callback::from(move |side: WinnerSide| {
            let mut next = (*wizard).clone();
            let Some(matchup) = next.current_matchup() else {
                return;
            };
            let (winner, loser) = match side {
                WinnerSide::Left => (matchup.left, matchup.right),
                WinnerSide::Right => (matchup.right, matchup.left),
            };
            next.record_comparison(winner, loser);
            wizard.set(next);
        })
    };

    let on_back = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            next.go_back_to_selection();
            wizard.set(next);
        })
    };

    let on_restart = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            next.restart();
            wizard.set(next);
        })
    };

    let view = wizard.view_state();

    let body = match view.stage {
        Stage::Welcome => render_welcome(&on_start),
        Stage::Selecting => {
            render_selection(&view, wizard.search_query(), &on_search, &on_toggle, &on_begin)
        }
        Stage::Comparing => render_comparison(
            view.current_matchup.as_ref(),
            wizard.matchup_progress(),
            &on_choose,
            &on_back,
        ),
        Stage::Ranked => render_ranking(view.ranking.as_deref().unwrap_or(&[]), &on_restart),
    };

    html! {
        <div class="app-container">
            <main class="content">
                { body }
            </main>
        </div>
    }
}

fn render_welcome(on_start: &Callback<MouseEvent>) -> Html {
    html! {
        <div class="stage welcome-stage">
            <h1>{ "Welcome to Value Rater!" }</h1>
            <p>{ "Discover and prioritize your values with a simple and engaging process." }</p>
            <button class="primary" onclick={on_start.clone()}>{ "Start Rating" }</button>
        </div>
    }
}

fn render_selection(
    view: &ViewState,
    query: &str,
    on_search: &Callback<InputEvent>,
    on_toggle: &Callback<Candidate>,
    on_begin: &Callback<MouseEvent>,
) -> Html {
    html! {
        <div class="stage selection-stage">
            <h1>{ "Select Your Top 10 Values" }</h1>
            <input
                class="search-input"
                type="search"
                placeholder="Search values..."
                value={query.to_string()}
                oninput={on_search.clone()}
            />
            <p class="selection-count">
                { format!("{} of {SELECTION_LIMIT} selected", view.selected.len()) }
            </p>
            <ul class="catalog-list">
                { for view
                    .filtered_catalog
                    .iter()
                    .map(|&candidate| render_catalog_entry(candidate, view, on_toggle)) }
            </ul>
            <button
                class="primary"
                disabled={view.selected.len() != SELECTION_LIMIT}
                onclick={on_begin.clone()}
            >
                { "Compare Values" }
            </button>
        </div>
    }
}

fn render_catalog_entry(
    candidate: Candidate,
    view: &ViewState,
    on_toggle: &Callback<Candidate>,
) -> Html {
    let selected = view.selected.contains(&candidate);
    let onclick = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(candidate))
    };

    html! {
        <li key={candidate}>
            <button
                class={classes!("catalog-entry", if selected { Some("selected") } else { None })}
                onclick={onclick}
            >
                <span class="entry-label">{ candidate }</span>
                { if selected { html! { <span class="entry-check">{ "✓" }</span> } } else { html! {} } }
            </button>
        </li>
    }
}

fn render_comparison(
    matchup: Option<&Matchup>,
    progress: (usize, usize),
    on_choose: &Callback<WinnerSide>,
    on_back: &Callback<MouseEvent>,
) -> Html {
    let Some(matchup) = matchup else {
        return html! { <p>{ "Nothing left to compare." }</p> };
    };

    let (done, total) = progress;
    let pick_left = {
        let on_choose = on_choose.clone();
        Callback::from(move |_: MouseEvent| on_choose.emit(WinnerSide::Left))
    };
    let pick_right = {
        let on_choose = on_choose.clone();
        Callback::from(move |_: MouseEvent| on_choose.emit(WinnerSide::Right))
    };

    html! {
        <div class="stage comparison-stage">
            <h1>{ "Compare Values" }</h1>
            <p>{ "Choose the value that resonates more with you in each pair." }</p>
            <p class="matchup-count">{ format!("Matchup {} of {total}", done + 1) }</p>
            <div class="matchup">
                <button class="card left-card" onclick={pick_left}>{ matchup.left }</button>
                <span class="vs-label">{ "vs" }</span>
                <button class="card right-card" onclick={pick_right}>{ matchup.right }</button>
            </div>
            <button class="secondary" onclick={on_back.clone()}>{ "Back to Selection" }</button>
        </div>
    }
}

fn render_ranking(ranking: &[RankedCandidate], on_restart: &Callback<MouseEvent>) -> Html {
    let list = if ranking.is_empty() {
        html! { <p>{ "No values were compared." }</p> }
    } else {
        html! {
            <ul class="ranking-list">
                { for ranking.iter().map(|entry| html! {
                    <li key={entry.candidate}>
                        <span class="item-label">
                            { format!("{}. {}", entry.position, entry.candidate) }
                        </span>
                        <span class="item-wins">{ format!("{} wins", entry.wins) }</span>
                    </li>
                }) }
            </ul>
        }
    };

    html! {
        <div class="stage ranking-stage">
            <h1>{ "Your Value Ranking" }</h1>
            { list }
            <button class="secondary" onclick={on_restart.clone()}>{ "Start Over" }</button>
        </div>
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
