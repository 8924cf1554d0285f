use crate::{
	page::app::Context,
	session::Command,
	system::data::{Hero, OptionFlag},
	utility::InputExt,
};
use enumset::EnumSet;
use yew::prelude::*;

#[function_component]
pub fn HeroList() -> Html {
	let context = use_context::<Context>().unwrap();
	let add_hero = context.callback(|_: MouseEvent| Command::AddHero);
	let import_hero = context.callback(|_: MouseEvent| Command::ImportHero);

	let heroes = context.heroes();
	let content = match heroes.is_empty() {
		true => html!(<p class="text-body-secondary">{"There are no heroes yet."}</p>),
		false => html! {
			<div class="row row-cols-1 row-cols-md-3 g-3">
				{heroes.iter().map(|hero| html!(<HeroCard hero={hero.clone()} />)).collect::<Vec<_>>()}
			</div>
		},
	};

	html! {
		<div class="hero-list">
			<div class="d-flex align-items-center mb-3">
				<h2 class="me-auto">{"Heroes"}</h2>
				<button class="btn btn-success me-2" onclick={add_hero}>{"Create A New Hero"}</button>
				<button class="btn btn-outline-secondary" onclick={import_hero}>{"Import A Hero"}</button>
			</div>
			{content}
			<OptionsPanel />
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct HeroCardProps {
	hero: Hero,
}

#[function_component]
fn HeroCard(HeroCardProps { hero }: &HeroCardProps) -> Html {
	let context = use_context::<Context>().unwrap();
	let onclick = context.callback({
		let id = hero.id.clone();
		move |_: MouseEvent| Command::ViewHero(id.clone())
	});
	let summary = [
		hero.ancestry.as_ref().map(|ancestry| ancestry.name.clone()),
		hero.class.as_ref().map(|class| format!("{} {}", class.name, hero.level())),
	]
	.into_iter()
	.flatten()
	.collect::<Vec<_>>();
	html! {
		<div class="col">
			<div class="card hero-card h-100" {onclick}>
				<div class="card-body">
					<h5 class="card-title">{hero.display_name()}</h5>
					<p class="card-text text-body-secondary">
						{match summary.is_empty() {
							true => "No ancestry or class chosen".to_owned(),
							false => summary.join(" "),
						}}
					</p>
				</div>
			</div>
		</div>
	}
}

#[function_component]
fn OptionsPanel() -> Html {
	let context = use_context::<Context>().unwrap();
	let options = context.options().clone();
	let toggle = |flag: OptionFlag| {
		let onchange = context.callback({
			let options = options.clone();
			move |evt: Event| Command::SetOptions(options.with_flag(flag, evt.input_checked()))
		});
		html! {
			<div class="form-check form-switch">
				<input class="form-check-input" type="checkbox" role="switch" checked={options.flag(flag)} {onchange} />
				<label class="form-check-label">{flag.display_name()}</label>
			</div>
		}
	};
	html! {
		<div class="options mt-4">
			<h5>{"Options"}</h5>
			{EnumSet::<OptionFlag>::all().into_iter().map(toggle).collect::<Vec<_>>()}
		</div>
	}
}
