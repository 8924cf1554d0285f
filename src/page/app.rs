use crate::{
	components::{self, Spinner},
	page,
	session::{Command, Effect, Screen, Session},
	storage::{Loaded, Store},
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct AppProps {
	pub store: Store,
	pub loaded: Loaded,
}

#[function_component]
pub fn App(AppProps { store, loaded }: &AppProps) -> Html {
	let state = use_reducer({
		let store = store.clone();
		let loaded = loaded.clone();
		move || State {
			session: Session::new(loaded.heroes, loaded.options),
			store,
		}
	});
	let context = Context::from(state);

	let content = match context.screen() {
		Screen::Welcome => html!(<page::Welcome />),
		Screen::HeroList => html!(<page::HeroList />),
		Screen::HeroView(hero) => html!(<page::HeroView hero={hero.clone()} />),
		Screen::HeroEdit(hero) => html!(<page::HeroEdit hero={hero.clone()} />),
	};

	html! {
		<ContextProvider<Context> context={context.clone()}>
			<Header />
			<main class="container-fluid py-3">{content}</main>
			<Footer />
			<components::Drawer />
			<components::NoticeToast />
		</ContextProvider<Context>>
	}
}

#[function_component]
fn Header() -> Html {
	let context = use_context::<Context>().unwrap();
	let go_home = context.callback(|_: MouseEvent| Command::GoHome);
	let show_about = context.callback(|_: MouseEvent| Command::ShowAbout);
	html! {
		<header>
			<nav class="navbar sticky-top bg-body-tertiary">
				<div class="container-fluid">
					<a class="navbar-brand" href="#" onclick={go_home}>{"Forge Steel"}</a>
					<div class="d-flex align-items-center">
						{context.is_saving().then(|| html!(<Spinner label="Saving..." />))}
						<button class="btn btn-outline-secondary btn-sm ms-2" onclick={show_about}>{"About"}</button>
					</div>
				</div>
			</nav>
		</header>
	}
}

#[function_component]
fn Footer() -> Html {
	html! {
		<footer class="container-fluid py-3 small text-body-secondary text-center">
			<div>
				{"FORGE STEEL is an independent product published under the DRAW STEEL Creator License and is not affiliated with MCDM Productions, LLC"}
			</div>
			<div>{"DRAW STEEL © 2024 MCDM Productions, LLC"}</div>
			<div>{"Designed by Andy Aiken"}</div>
		</footer>
	}
}

/// The session plus the store its writes go to.
#[derive(Clone, PartialEq)]
pub struct State {
	session: Session,
	store: Store,
}

/// A command to apply, along with the handle its effects report back through.
pub struct Action {
	handle: UseReducerHandle<State>,
	command: Command,
}

impl Reducible for State {
	type Action = Action;

	fn reduce(mut self: Rc<Self>, Action { handle, command }: Self::Action) -> Rc<Self> {
		let state = Rc::make_mut(&mut self);
		for effect in state.session.dispatch(command) {
			run_effect(state.store.clone(), handle.clone(), effect);
		}
		self
	}
}

fn run_effect(store: Store, handle: UseReducerHandle<State>, effect: Effect) {
	// completions are dispatched from a separate task so they never re-enter the reducer
	spawn_local(async move {
		let command = match effect {
			Effect::PersistHeroes { write, heroes } => Command::HeroesWritten {
				write,
				result: store.persist_heroes(&heroes).await,
			},
			Effect::PersistOptions { write, options } => Command::OptionsWritten {
				write,
				result: store.persist_options(&options).await,
			},
			Effect::Export { hero, format } => match components::export::download(&hero, format) {
				Ok(()) => return,
				Err(err) => Command::ExportFailed(err),
			},
		};
		handle.dispatch(Action {
			handle: handle.clone(),
			command,
		});
	});
}

/// Read access to the [`Session`] and a way to send it commands.
/// Provided to every component below [`App`].
#[derive(Clone, PartialEq)]
pub struct Context(UseReducerHandle<State>);

impl From<UseReducerHandle<State>> for Context {
	fn from(value: UseReducerHandle<State>) -> Self {
		Self(value)
	}
}

impl Context {
	pub fn dispatch(&self, command: Command) {
		self.0.dispatch(Action {
			handle: self.0.clone(),
			command,
		});
	}

	pub fn callback<T, F>(&self, fn_command: F) -> Callback<T, ()>
	where
		F: Fn(T) -> Command + 'static,
	{
		let context = self.clone();
		Callback::from(move |input: T| {
			context.dispatch(fn_command(input));
		})
	}
}

impl std::ops::Deref for Context {
	type Target = Session;

	fn deref(&self) -> &Self::Target {
		&self.0.session
	}
}
