use crate::{
	components::{FeatureTree, Tag, Tags},
	page::app::Context,
	session::Command,
	system::{
		data::{Characteristic, FeatureField, FeatureKind, Hero, Size, SkillList},
		export::ExportFormat,
	},
	utility::{list_as_english, InputExt},
};
use enumset::EnumSet;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct HeroViewProps {
	pub hero: Hero,
}

#[function_component]
pub fn HeroView(HeroViewProps { hero }: &HeroViewProps) -> Html {
	let context = use_context::<Context>().unwrap();
	let close = context.callback(|_: MouseEvent| Command::CloseHero);
	let edit = context.callback(|_: MouseEvent| Command::EditHero);
	let delete = context.callback(|_: MouseEvent| Command::DeleteHero);
	let show_state = context.callback(|_: MouseEvent| Command::ShowHeroState);
	let export = Callback::from({
		let context = context.clone();
		move |evt: Event| {
			let Some(format) = evt.input_value_t::<ExportFormat>() else {
				return;
			};
			context.dispatch(Command::ExportHero(format));
		}
	});

	html! {
		<div class="hero-view">
			<div class="d-flex align-items-center mb-3">
				<h2 class="me-auto">{hero.display_name()}</h2>
				<button class="btn btn-outline-secondary me-2" onclick={close}>{"Close"}</button>
				<button class="btn btn-primary me-2" onclick={edit}>{"Edit"}</button>
				<button class="btn btn-outline-primary me-2" onclick={show_state}>{"State"}</button>
				<select class="form-select w-auto me-2" onchange={export}>
					<option selected=true disabled=true>{"Export"}</option>
					{[ExportFormat::Image, ExportFormat::Pdf, ExportFormat::Json].into_iter().map(|format| html! {
						<option value={format.as_str()}>{format.display_name()}</option>
					}).collect::<Vec<_>>()}
				</select>
				<button class="btn btn-outline-danger" onclick={delete}>{"Delete"}</button>
			</div>
			<Sources hero={hero.clone()} />
			<Characteristics hero={hero.clone()} />
			<Statistics hero={hero.clone()} />
			<Skills hero={hero.clone()} />
			<Abilities hero={hero.clone()} />
			<div class="features mt-3">
				<h4>{"Features"}</h4>
				{hero.root_features().into_iter().map(|feature| html! {
					<FeatureTree feature={feature.clone()} level={hero.level()} />
				}).collect::<Vec<_>>()}
			</div>
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct SectionProps {
	hero: Hero,
}

#[function_component]
fn Sources(SectionProps { hero }: &SectionProps) -> Html {
	let context = use_context::<Context>().unwrap();
	let mut tags = Vec::new();
	if let Some(ancestry) = &hero.ancestry {
		let ancestry = ancestry.clone();
		let name = ancestry.name.clone();
		let on_click = context.callback(move |_: bool| Command::ShowAncestry(ancestry.clone()));
		tags.push(html!(<Tag {on_click}>{"Ancestry: "}{name}</Tag>));
	}
	if let Some(culture) = &hero.culture {
		let culture = culture.clone();
		let name = culture.name.clone();
		let on_click = context.callback(move |_: bool| Command::ShowCulture(culture.clone()));
		tags.push(html!(<Tag {on_click}>{"Culture: "}{name}</Tag>));
	}
	if let Some(career) = &hero.career {
		let career = career.clone();
		let name = career.name.clone();
		let on_click = context.callback(move |_: bool| Command::ShowCareer(career.clone()));
		tags.push(html!(<Tag {on_click}>{"Career: "}{name}</Tag>));
	}
	if let Some(class) = &hero.class {
		let class = class.clone();
		let name = format!("{} {}", class.name, hero.level());
		let on_click = context.callback(move |_: bool| Command::ShowClass(class.clone()));
		tags.push(html!(<Tag {on_click}>{"Class: "}{name}</Tag>));
	}
	if let Some(complication) = &hero.complication {
		let complication = complication.clone();
		let name = complication.name.clone();
		let on_click = context.callback(move |_: bool| Command::ShowComplication(complication.clone()));
		tags.push(html!(<Tag {on_click}>{"Complication: "}{name}</Tag>));
	}
	for kit in hero.kits() {
		let kit = kit.clone();
		let name = kit.name.clone();
		let on_click = context.callback(move |_: bool| Command::ShowKit(kit.clone()));
		tags.push(html!(<Tag {on_click}>{"Kit: "}{name}</Tag>));
	}
	if tags.is_empty() {
		return html!(<p class="text-body-secondary">{"Nothing has been chosen for this hero yet."}</p>);
	}
	html!(<Tags>{tags}</Tags>)
}

#[function_component]
fn Characteristics(SectionProps { hero }: &SectionProps) -> Html {
	let context = use_context::<Context>().unwrap();
	html! {
		<div class="characteristics d-flex my-3">
			{EnumSet::<Characteristic>::all().into_iter().map(|characteristic| {
				let onclick = context.callback({
					let hero = hero.clone();
					move |_: MouseEvent| Command::ShowCharacteristic(characteristic, hero.clone())
				});
				let score = hero.characteristic(characteristic);
				html! {
					<div class="card text-center me-2 characteristic" {onclick}>
						<div class="card-body p-2">
							<div class="fs-4">{format!("{score:+}")}</div>
							<div class="text-body-secondary small">{characteristic.display_name()}</div>
						</div>
					</div>
				}
			}).collect::<Vec<_>>()}
		</div>
	}
}

#[function_component]
fn Statistics(SectionProps { hero }: &SectionProps) -> Html {
	let fields = [
		FeatureField::Stamina,
		FeatureField::Recoveries,
		FeatureField::Speed,
		FeatureField::Stability,
		FeatureField::Disengage,
	];
	let size = hero
		.features()
		.into_iter()
		.find_map(|feature| match &feature.kind {
			FeatureKind::Size(data) => Some(data.size.to_string()),
			_ => None,
		})
		.unwrap_or_else(|| Size::default().to_string());
	html! {
		<table class="table table-sm w-auto statistics">
			<tbody>
				<tr>
					<th>{"Size"}</th>
					<td>{size}</td>
				</tr>
				{fields.into_iter().map(|field| html! {
					<tr>
						<th>{field.display_name()}</th>
						<td>{format!("{:+}", hero.field_bonus(field))}</td>
					</tr>
				}).collect::<Vec<_>>()}
				<tr>
					<th>{"Languages"}</th>
					<td>{list_as_english(hero.languages(), "and").unwrap_or_default()}</td>
				</tr>
			</tbody>
		</table>
	}
}

#[function_component]
fn Skills(SectionProps { hero }: &SectionProps) -> Html {
	let context = use_context::<Context>().unwrap();
	let skills = hero
		.features()
		.into_iter()
		.filter_map(|feature| match &feature.kind {
			FeatureKind::Skill(data) => Some(data.selected.clone()),
			_ => None,
		})
		.flatten()
		.collect::<Vec<_>>();
	if skills.is_empty() {
		return Html::default();
	}
	let content = match context.options().show_skills_in_groups {
		false => html!(<Tags>{skills.iter().map(|skill| html!(<Tag>{skill.clone()}</Tag>)).collect::<Vec<_>>()}</Tags>),
		true => {
			let lists = [
				SkillList::Crafting,
				SkillList::Exploration,
				SkillList::Interpersonal,
				SkillList::Intrigue,
				SkillList::Lore,
			];
			let mut groups = lists
				.into_iter()
				.map(|list| {
					let grouped = skills
						.iter()
						.filter(|skill| list.skills().contains(&skill.as_str()))
						.cloned()
						.collect::<Vec<_>>();
					(list.display_name(), grouped)
				})
				.collect::<Vec<_>>();
			let ungrouped = skills
				.iter()
				.filter(|skill| !lists.iter().any(|list| list.skills().contains(&skill.as_str())))
				.cloned()
				.collect::<Vec<_>>();
			groups.push(("Other", ungrouped));
			let groups = groups
				.into_iter()
				.filter(|(_, skills)| !skills.is_empty())
				.map(|(name, skills)| {
					html! {
						<div class="skill-group">
							<strong>{name}</strong>
							<Tags>{skills.into_iter().map(|skill| html!(<Tag>{skill}</Tag>)).collect::<Vec<_>>()}</Tags>
						</div>
					}
				})
				.collect::<Vec<_>>();
			html!(<>{groups}</>)
		}
	};
	html! {
		<div class="skills my-3">
			<h4>{"Skills"}</h4>
			{content}
		</div>
	}
}

/// Actions every hero can take, listed when standard abilities are shown.
static STANDARD_ABILITIES: &[&str] = &[
	"Aid Attack",
	"Catch Breath",
	"Charge",
	"Defend",
	"Escape Grab",
	"Grab",
	"Heal",
	"Hide",
	"Knockback",
	"Search For Hidden Creatures",
	"Stand Up",
];

#[function_component]
fn Abilities(SectionProps { hero }: &SectionProps) -> Html {
	let context = use_context::<Context>().unwrap();
	let options = context.options();
	let abilities = hero
		.features()
		.into_iter()
		.filter_map(|feature| match &feature.kind {
			FeatureKind::Ability(data) => Some(data.ability.clone()),
			_ => None,
		})
		.chain(hero.class.iter().flat_map(|class| {
			let chosen = hero
				.features()
				.into_iter()
				.filter_map(|feature| match &feature.kind {
					FeatureKind::ClassAbility(data) => Some(data.selected_ids.clone()),
					_ => None,
				})
				.flatten()
				.collect::<Vec<_>>();
			class
				.abilities
				.iter()
				.filter(move |ability| chosen.contains(&ability.id))
				.cloned()
				.collect::<Vec<_>>()
		}))
		.collect::<Vec<_>>();

	let free_strike = options.show_free_strikes.then(|| {
		html! {
			<div class="ability free-strike">
				<strong>{"Free Strike"}</strong>
				<span class="ms-2 text-body-secondary">{format!("{} damage", hero.free_strike_damage())}</span>
			</div>
		}
	});
	let standard = options.show_standard_abilities.then(|| {
		html! {
			<Tags classes="standard-abilities">
				{STANDARD_ABILITIES.iter().map(|name| html!(<Tag>{*name}</Tag>)).collect::<Vec<_>>()}
			</Tags>
		}
	});

	html! {
		<div class="abilities my-3">
			<h4>{"Abilities"}</h4>
			{free_strike}
			{abilities.into_iter().map(|ability| {
				let available = ability.is_affordable(hero.state.heroic_resource);
				let dimmed = options.dim_unavailable_abilities && !available;
				let name = ability.name.clone();
				let cost = ability.cost;
				let onclick = context.callback({
					let hero = hero.clone();
					move |_: MouseEvent| Command::ShowAbility(ability.clone(), hero.clone())
				});
				html! {
					<div class={classes!("ability", dimmed.then_some("opacity-50"))} {onclick}>
						<strong>{name}</strong>
						{(cost > 0).then(|| html!(<span class="badge text-bg-secondary ms-2">{cost}</span>))}
					</div>
				}
			}).collect::<Vec<_>>()}
			{standard}
		</div>
	}
}
