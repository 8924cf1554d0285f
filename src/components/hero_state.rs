use crate::{
	page::app::Context,
	session::Command,
	system::data::{Counter, FeatureField, Hero, HeroState},
	utility::InputExt,
};
use enumset::EnumSet;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct HeroStatePanelProps {
	pub hero: Hero,
}

/// The in-play counters of a hero. Every change is saved straight away.
#[function_component]
pub fn HeroStatePanel(HeroStatePanelProps { hero }: &HeroStatePanelProps) -> Html {
	let context = use_context::<Context>().unwrap();
	let update: Rc<dyn Fn(Box<dyn FnOnce(&mut HeroState)>)> = Rc::new({
		let hero = hero.clone();
		move |change: Box<dyn FnOnce(&mut HeroState)>| {
			let mut hero = hero.clone();
			change(&mut hero.state);
			context.dispatch(Command::UpdateHeroState(hero));
		}
	});

	let counter = |counter: Counter| {
		let value = hero.state.counter(counter);
		let label = match counter {
			Counter::StaminaDamage => {
				format!("{} (of {})", counter.display_name(), hero.field_bonus(FeatureField::Stamina))
			}
			Counter::RecoveriesUsed => {
				format!("{} (of {})", counter.display_name(), hero.field_bonus(FeatureField::Recoveries))
			}
			_ => counter.display_name().to_owned(),
		};
		let adjust = |delta: i32| {
			let update = update.clone();
			Callback::from(move |_: MouseEvent| {
				update(Box::new(move |state: &mut HeroState| {
					state.adjust(counter, delta);
				}))
			})
		};
		html! {
			<div class="d-flex align-items-center justify-content-between my-1 counter">
				<span>{label}</span>
				<div class="btn-group btn-group-sm">
					<button class="btn btn-outline-secondary" onclick={adjust(-1)} disabled={value <= 0}>{"-"}</button>
					<span class="btn disabled">{value}</span>
					<button class="btn btn-outline-secondary" onclick={adjust(1)}>{"+"}</button>
				</div>
			</div>
		}
	};

	let on_hidden = Callback::from({
		let update = update.clone();
		move |evt: Event| {
			let Some(hidden) = evt.input_checked() else {
				return;
			};
			update(Box::new(move |state: &mut HeroState| state.hidden = hidden));
		}
	});
	let on_notes = Callback::from({
		let update = update.clone();
		move |evt: Event| {
			let Some(notes) = evt.input_value() else {
				return;
			};
			update(Box::new(move |state: &mut HeroState| state.notes = notes));
		}
	});

	html! {
		<div class="hero-state">
			{EnumSet::<Counter>::all().into_iter().map(counter).collect::<Vec<_>>()}
			<div class="form-check form-switch my-2">
				<input class="form-check-input" type="checkbox" role="switch" checked={hero.state.hidden} onchange={on_hidden} />
				<label class="form-check-label">{"Hidden"}</label>
			</div>
			<label class="form-label">{"Notes"}</label>
			<textarea class="form-control" rows="6" value={hero.state.notes.clone()} onchange={on_notes} />
		</div>
	}
}
