use crate::{
	components::FeatureTree,
	page::app::Context,
	session::Command,
	system::data::Hero,
	utility::InputExt,
};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct HeroEditProps {
	pub hero: Hero,
}

/// Edits a draft copy of the hero. Nothing reaches the roster until the draft is saved.
#[function_component]
pub fn HeroEdit(HeroEditProps { hero }: &HeroEditProps) -> Html {
	let context = use_context::<Context>().unwrap();
	let draft = use_state({
		let hero = hero.clone();
		move || hero
	});
	let problem = use_state(|| None::<String>);

	let on_name = Callback::from({
		let draft = draft.clone();
		move |evt: Event| {
			let Some(name) = evt.input_value() else {
				return;
			};
			let mut hero = (*draft).clone();
			hero.name = name;
			draft.set(hero);
		}
	});
	let on_level = Callback::from({
		let draft = draft.clone();
		move |evt: Event| {
			let Some(level) = evt.input_value_t::<u32>() else {
				return;
			};
			let mut hero = (*draft).clone();
			if let Some(class) = &mut hero.class {
				class.level = level.clamp(1, 10);
			}
			draft.set(hero);
		}
	});
	let on_toggle = Callback::from({
		let draft = draft.clone();
		let problem = problem.clone();
		move |(feature_id, key): (String, String)| {
			let mut hero = (*draft).clone();
			let Some(feature) = hero.feature_mut(&feature_id) else {
				log::warn!(target: "hero", "Feature {feature_id} is not on the hero being edited");
				return;
			};
			match feature.toggle_option(&key) {
				Ok(()) => {
					problem.set(None);
					draft.set(hero);
				}
				Err(err) => problem.set(Some(format!("{}: {err}", feature.name))),
			}
		}
	});
	let save = context.callback({
		let draft = draft.clone();
		move |_: MouseEvent| Command::SaveHero((*draft).clone())
	});
	let cancel = context.callback(|_: MouseEvent| Command::CancelEdit);

	let unresolved = draft.unresolved_choices().len();
	let class_abilities = draft
		.class
		.as_ref()
		.map(|class| class.abilities.clone())
		.unwrap_or_default();
	let level = draft.level();

	html! {
		<div class="hero-edit">
			<div class="d-flex align-items-center mb-3">
				<h2 class="me-auto">{"Editing "}{draft.display_name()}</h2>
				{(unresolved > 0).then(|| html! {
					<span class="badge text-bg-warning me-2">{format!("{unresolved} choice(s) to make")}</span>
				})}
				<button class="btn btn-outline-secondary me-2" onclick={cancel}>{"Cancel"}</button>
				<button class="btn btn-success" onclick={save}>{"Save Changes"}</button>
			</div>
			{(*problem).as_ref().map(|message| html!(<div class="alert alert-warning">{message}</div>))}
			<div class="row g-3 mb-3">
				<div class="col-md-6">
					<label class="form-label">{"Name"}</label>
					<input class="form-control" type="text" value={draft.name.clone()} onchange={on_name} />
				</div>
				{draft.class.is_some().then(|| html! {
					<div class="col-md-2">
						<label class="form-label">{"Level"}</label>
						<input class="form-control" type="number" min="1" max="10" value={level.to_string()} onchange={on_level} />
					</div>
				})}
			</div>
			<div class="features">
				{draft.root_features().into_iter().map(|feature| html! {
					<FeatureTree
						feature={feature.clone()}
						{level}
						class_abilities={class_abilities.clone()}
						on_toggle={on_toggle.clone()}
					/>
				}).collect::<Vec<_>>()}
			</div>
		</div>
	}
}
