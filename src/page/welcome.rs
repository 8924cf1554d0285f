use crate::{page::app::Context, session::Command};
use yew::prelude::*;

#[function_component]
pub fn Welcome() -> Html {
	let context = use_context::<Context>().unwrap();
	let show_heroes = context.callback(|_: MouseEvent| Command::ShowHeroes);
	let hero_count = context.heroes().len();
	html! {
		<div class="welcome d-flex flex-column align-items-center text-center mt-5">
			<h1>{"Forge Steel"}</h1>
			<p class="lead">{"A hero builder for the Draw Steel tabletop role-playing game."}</p>
			<p>{"Heroes are kept in this browser. Export a hero to move it somewhere else."}</p>
			<button class="btn btn-primary btn-lg" onclick={show_heroes}>
				{match hero_count {
					0 => "Create Your First Hero".to_owned(),
					1 => "Your Hero".to_owned(),
					count => format!("Your {count} Heroes"),
				}}
			</button>
		</div>
	}
}
